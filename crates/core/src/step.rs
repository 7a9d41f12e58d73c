use crate::body::Body;
use crate::collision::{resolve, resolve_ground_plane};
use crate::context::SimulationContext;
use crate::input::InputSnapshot;
use crate::integrator::{advances, integrate};
use crate::traits::Collidable;
use crate::world::wrap_horizontal;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Events {
    pub jumped: bool,
    /// Grounded this tick after being airborne the tick before.
    pub landed: bool,
    pub bonked: bool,
    pub walled: bool,
    pub wrapped: bool,
}

impl Events {
    /// Fold the events of several ticks into one frame's worth.
    pub fn merge(&mut self, other: Events) {
        self.jumped |= other.jumped;
        self.landed |= other.landed;
        self.bonked |= other.bonked;
        self.walled |= other.walled;
        self.wrapped |= other.wrapped;
    }
}

/// One fixed tick: integrate, resolve against `tiles` in order, wrap.
///
/// `tiles` is always passed explicitly; an empty slice is valid and means
/// free fall.
pub fn step<C: Collidable>(
    ctx: &SimulationContext,
    tiles: &[C],
    body: &mut Body,
    input: &InputSnapshot,
) -> Events {
    let mut ev = Events::default();
    let p = ctx.params;
    let was_grounded = body.is_grounded;

    if input.jump_pressed {
        body.request_jump();
    }
    if !advances(ctx.dt) {
        // swallow the request; contacts and grounded stay as they were
        body.jump_requested = false;
        return ev;
    }

    body.begin_tick();
    ev.jumped = integrate(body, ctx, input);

    let contacts = resolve(body, tiles, ev.jumped);
    let mut now_grounded = contacts.landed;
    if let Some(plane_y) = p.ground_plane {
        now_grounded |= resolve_ground_plane(body, plane_y, ev.jumped);
    }
    ev.bonked = contacts.bonked;
    ev.walled = contacts.walled;
    ev.landed = now_grounded && !was_grounded;

    let left = wrap_horizontal(p.wrap_mode, body.rect.x, body.rect.w, p.world_w);
    if left != body.rect.x {
        ev.wrapped = true;
        body.rect.x = left;
        body.sync_visual();
    }

    if ev.landed {
        log::debug!("landed at ({:.1}, {:.1}) t={:.3}", body.rect.x, body.rect.y, ctx.now);
    }
    if ev.bonked {
        log::debug!("bonked at ({:.1}, {:.1})", body.rect.x, body.rect.y);
    }
    log::trace!(
        "step t={:.3} pos=({:.2}, {:.2}) vel=({:.2}, {:.2}) grounded={} jumps={}",
        ctx.now,
        body.rect.x,
        body.rect.y,
        body.velocity.x,
        body.velocity.y,
        body.is_grounded,
        body.jump_count
    );

    ev
}
