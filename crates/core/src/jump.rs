use crate::body::Body;
use crate::params::Params;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum JumpPhase {
    Grounded,
    /// Jumps spent since leaving the ground (0 after walking off a ledge).
    Airborne(u32),
}

impl JumpPhase {
    pub fn of(body: &Body) -> Self {
        if body.is_grounded {
            JumpPhase::Grounded
        } else {
            JumpPhase::Airborne(body.jump_count)
        }
    }
}

/// Whether a jump may start right now.
pub fn can_jump(body: &Body, params: &Params, now: f64) -> bool {
    body.is_grounded
        || (body.jump_count < params.max_jumps
            && now - body.last_jump_time > f64::from(params.jump_cooldown))
}

/// Grant a jump if the budget and cooldown allow it. Returns whether it did.
pub fn try_jump(body: &mut Body, params: &Params, now: f64) -> bool {
    if !can_jump(body, params, now) {
        return false;
    }
    body.is_grounded = false;
    body.jump_count += 1;
    body.velocity.y = -params.jump_force;
    body.last_jump_time = now;
    debug_assert!(body.jump_count <= params.max_jumps);
    log::debug!("jump {} granted at t={now:.3}", body.jump_count);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Vec2;

    fn grounded_body(params: &Params) -> Body {
        let mut b = Body::new(params, Vec2::new(0.0, 0.0));
        b.land(false);
        b
    }

    #[test]
    fn grounded_jump_ignores_cooldown() {
        let p = Params::default();
        let mut b = grounded_body(&p);
        b.last_jump_time = 10.0;
        assert!(try_jump(&mut b, &p, 10.01));
        assert_eq!(b.phase(), JumpPhase::Airborne(1));
        assert_eq!(b.velocity.y, -p.jump_force);
    }

    #[test]
    fn air_jump_waits_for_cooldown() {
        let p = Params::default();
        let mut b = grounded_body(&p);
        assert!(try_jump(&mut b, &p, 1.0));
        assert!(!try_jump(&mut b, &p, 1.1));
        assert!(!try_jump(&mut b, &p, 1.2));
        assert!(try_jump(&mut b, &p, 1.25));
        assert_eq!(b.phase(), JumpPhase::Airborne(2));
    }

    #[test]
    fn budget_is_exhausted_until_landing() {
        let p = Params::default();
        let mut b = grounded_body(&p);
        assert!(try_jump(&mut b, &p, 0.0));
        assert!(try_jump(&mut b, &p, 1.0));
        assert!(!try_jump(&mut b, &p, 5.0));
        assert_eq!(b.jump_count, p.max_jumps);
        b.land(false);
        assert_eq!(b.phase(), JumpPhase::Grounded);
        assert!(try_jump(&mut b, &p, 5.0));
    }

    #[test]
    fn walking_off_a_ledge_keeps_full_air_budget() {
        let p = Params::default();
        let mut b = Body::new(&p, Vec2::ZERO);
        assert_eq!(b.phase(), JumpPhase::Airborne(0));
        assert!(try_jump(&mut b, &p, 0.0));
        assert!(try_jump(&mut b, &p, 0.5));
        assert!(!try_jump(&mut b, &p, 1.0));
    }
}
