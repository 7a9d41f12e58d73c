use crate::body::Body;
use crate::context::SimulationContext;
use crate::input::InputSnapshot;
use crate::jump::try_jump;

#[inline]
fn clamp(x: f32, lo: f32, hi: f32) -> f32 {
    x.max(lo).min(hi)
}

/// A tick only moves anything when `dt` is finite and positive.
#[inline]
pub(crate) fn advances(dt: f32) -> bool {
    dt.is_finite() && dt > 0.0
}

/// Apply input, jump and gravity, moving the hit rect to its tentative
/// (not yet collision-checked) position. Returns whether a jump was granted.
pub fn integrate(body: &mut Body, ctx: &SimulationContext, input: &InputSnapshot) -> bool {
    let requested = std::mem::take(&mut body.jump_requested);

    let dt = ctx.dt;
    if !advances(dt) {
        return false;
    }
    let p = ctx.params;

    // Direct control: no horizontal inertia.
    body.velocity.x = input.horizontal() * p.speed;

    let jumped = requested && try_jump(body, p, ctx.now);

    // Symmetric split of the gravity step around the position update.
    let half_g = 0.5 * p.gravity * dt;
    body.velocity.y += half_g;
    body.rect.x += body.velocity.x * dt;
    body.rect.y += body.velocity.y * dt;
    body.velocity.y += half_g;

    body.velocity.x = clamp(body.velocity.x, -p.max_velocity.x, p.max_velocity.x);
    body.velocity.y = clamp(body.velocity.y, -p.max_velocity.y, p.max_velocity.y);

    jumped
}
