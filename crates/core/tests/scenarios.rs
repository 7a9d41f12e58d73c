use approx::assert_relative_eq;
use proptest::prelude::*;

use jumpkit_core::{
    step, Body, Buttons, InputSnapshot, InputTracker, JumpPhase, Params, Rect, SimulationContext,
    StaticTile, Vec2, WrapMode,
};

const DT: f32 = 1.0 / 50.0;

fn params() -> Params {
    Params { wrap_mode: WrapMode::Off, ..Params::default() }
}

fn body_at(p: &Params, x: f32, y: f32) -> Body {
    let size = p.hit_size();
    Body::from_hit_rect(Rect::new(x, y, size.x, size.y), p.hit_inset)
}

fn idle() -> InputSnapshot {
    InputSnapshot::default()
}

#[test]
fn falling_body_lands_on_the_tile_below() {
    let p = params();
    let tile = StaticTile::new(80.0, 100.0, 40.0, 16.0);
    let tiles = [tile];
    let mut body = body_at(&p, 100.0, 50.0);

    // first tick: mid-step velocity 12 px/s moves the body 0.24 px
    let ctx = SimulationContext::new(&p, 0.0, DT);
    step(&ctx, &tiles, &mut body, &idle());
    assert_relative_eq!(body.velocity().y, 24.0, epsilon = 1e-3);
    assert_relative_eq!(body.position().y, 50.24, epsilon = 1e-4);
    assert!(!body.is_grounded());

    let mut ticks = 1;
    while !body.is_grounded() {
        let ctx = SimulationContext::new(&p, ticks as f64 * f64::from(DT), DT);
        step(&ctx, &tiles, &mut body, &idle());
        ticks += 1;
        assert!(ticks < 100, "never landed");
    }
    assert!(ticks > 2);
    assert_eq!(body.position().y, tile.rect.top() - body.hit_rect().h);
    assert_eq!(body.hit_rect().bottom(), tile.rect.top());
    assert_eq!(body.jump_count(), 0);
    assert_eq!(body.phase(), JumpPhase::Grounded);
}

#[test]
fn free_fall_gains_gravity_times_dt_each_tick() {
    let p = params();
    let mut body = body_at(&p, 0.0, 0.0);
    let mut last = body.velocity().y;
    for i in 0..20 {
        let ctx = SimulationContext::new(&p, i as f64 * f64::from(DT), DT);
        step::<StaticTile>(&ctx, &[], &mut body, &idle());
        let vy = body.velocity().y;
        assert_relative_eq!(vy - last, p.gravity * DT, epsilon = 1e-3);
        last = vy;
    }
}

#[test]
fn free_fall_stops_growing_at_max_velocity() {
    let p = params();
    let mut body = body_at(&p, 0.0, 0.0);
    for i in 0..100 {
        let ctx = SimulationContext::new(&p, i as f64 * f64::from(DT), DT);
        step::<StaticTile>(&ctx, &[], &mut body, &idle());
    }
    assert_eq!(body.velocity().y, p.max_velocity.y);
}

#[test]
fn zero_dt_leaves_the_body_alone() {
    let p = params();
    let tiles = [StaticTile::new(0.0, 100.0, 200.0, 16.0)];
    let mut body = body_at(&p, 50.0, 20.0);
    body.set_velocity(Vec2::new(30.0, -40.0));
    let before = (body.position(), body.velocity());

    let ctx = SimulationContext::new(&p, 1.0, 0.0);
    let input = InputSnapshot { right: true, jump_pressed: true, ..Default::default() };
    step(&ctx, &tiles, &mut body, &input);
    assert_eq!((body.position(), body.velocity()), before);
}

#[test]
fn diagonal_landing_does_not_also_push_sideways() {
    let p = Params { speed: 500.0, max_velocity: Vec2::new(600.0, 600.0), ..params() };
    // block whose top-left corner the body approaches from up-left
    let tiles = [StaticTile::new(100.0, 100.0, 64.0, 64.0)];
    let mut body = body_at(&p, 70.0, 65.0);
    body.set_velocity(Vec2::new(0.0, 400.0));

    let ctx = SimulationContext::new(&p, 0.0, DT);
    let input = InputSnapshot { right: true, ..Default::default() };
    let ev = step(&ctx, &tiles, &mut body, &input);

    // tentative rect: right edge 104, bottom 101.24, both past the block's corner
    assert!(body.is_grounded(), "{ev:?}");
    assert!(!ev.walled);
    assert_eq!(body.hit_rect().bottom(), 100.0);
    assert_relative_eq!(body.position().x, 80.0, epsilon = 1e-4);
}

#[test]
fn head_bump_then_fall_back_down() {
    let p = params();
    let tiles = [
        StaticTile::new(0.0, 40.0, 200.0, 16.0),
        StaticTile::new(0.0, 100.0, 200.0, 16.0),
    ];
    let mut body = body_at(&p, 50.0, 72.0);
    let mut input = InputTracker::new();
    let mut bonked = false;
    for i in 0..60 {
        let buttons = if i == 2 { Buttons::JUMP } else { Buttons::empty() };
        let ctx = SimulationContext::new(&p, i as f64 * f64::from(DT), DT);
        let ev = step(&ctx, &tiles, &mut body, &input.update(buttons));
        bonked |= ev.bonked;
        assert!(body.hit_rect().top() >= 56.0);
    }
    assert!(bonked);
    assert!(body.is_grounded());
    assert_eq!(body.hit_rect().bottom(), 100.0);
}

#[test]
fn edge_wrap_on_both_sides() {
    let p = Params { world_w: 320.0, wrap_mode: WrapMode::Edge, ..Params::default() };
    let w = p.hit_size().x;
    let mut input = InputTracker::new();

    let mut body = body_at(&p, -w + 1.0, 0.0);
    let ctx = SimulationContext::new(&p, 0.0, DT);
    let ev = step::<StaticTile>(&ctx, &[], &mut body, &input.update(Buttons::LEFT));
    assert!(ev.wrapped);
    assert_eq!(body.position().x, 320.0);

    let ev = step::<StaticTile>(&ctx, &[], &mut body, &input.update(Buttons::RIGHT));
    assert!(ev.wrapped);
    assert_eq!(body.position().x, -w);
}

struct Tick {
    now: f64,
    phase: JumpPhase,
    jumped: bool,
    air_jump: bool,
}

fn run_jump_sequence(p: &Params, presses: &[bool]) -> Vec<Tick> {
    let tiles = [StaticTile::new(-1000.0, 100.0, 3000.0, 16.0)];
    let mut body = body_at(p, 50.0, 72.0);
    let mut input = InputTracker::new();
    let mut trace = Vec::with_capacity(presses.len());
    for (i, &press) in presses.iter().enumerate() {
        let now = i as f64 * f64::from(DT);
        let buttons = if press { Buttons::JUMP } else { Buttons::empty() };
        let was_grounded = body.is_grounded();
        let ctx = SimulationContext::new(p, now, DT);
        let ev = step(&ctx, &tiles, &mut body, &input.update(buttons));
        assert!(body.jump_count() <= p.max_jumps);
        trace.push(Tick {
            now,
            phase: body.phase(),
            jumped: ev.jumped,
            air_jump: ev.jumped && !was_grounded,
        });
    }
    trace
}

proptest! {
    #[test]
    fn jump_budget_and_cooldown_hold(
        presses in proptest::collection::vec(any::<bool>(), 50..300),
        max_jumps in 1u32..4,
    ) {
        let p = Params { max_jumps, ..params() };
        let trace = run_jump_sequence(&p, &presses);

        let mut last_jump: Option<f64> = None;
        for tick in trace {
            if let JumpPhase::Airborne(n) = tick.phase {
                prop_assert!(n <= max_jumps);
            }
            if tick.air_jump {
                if let Some(prev) = last_jump {
                    prop_assert!(tick.now - prev > f64::from(p.jump_cooldown));
                }
            }
            if tick.jumped {
                last_jump = Some(tick.now);
            }
        }
    }

    #[test]
    fn body_never_sinks_into_the_floor(
        moves in proptest::collection::vec(0u8..8, 20..200),
    ) {
        let p = params();
        let floor = [StaticTile::new(-5000.0, 160.0, 10000.0, 16.0)];
        let mut body = body_at(&p, 100.0, 40.0);
        let mut input = InputTracker::new();
        for (i, bits) in moves.iter().enumerate() {
            let ctx = SimulationContext::new(&p, i as f64 * f64::from(DT), DT);
            step(&ctx, &floor, &mut body, &input.update(Buttons::from_bits_truncate(*bits)));
            prop_assert!(body.hit_rect().bottom() <= 160.0 + 1e-3);
            prop_assert!(body.position().x.is_finite() && body.position().y.is_finite());
        }
    }
}

#[test]
fn bundled_assets_load_and_settle() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../assets");
    let mut session = jumpkit_core::Session::from_config_file(dir.join("jumpkit.toml")).unwrap();
    assert_eq!(session.config().physics.wrap_mode, WrapMode::Edge);

    for _ in 0..100 {
        session.frame(0.02, Buttons::empty());
    }
    // spawn column sits above the bottom row of the map
    assert!(session.body().is_grounded());
    assert_eq!(session.body().hit_rect().bottom(), 160.0);
}
