use jumpkit_core::{step, Body, Buttons, InputTracker, Params, SimulationContext, StaticTile, Vec2, WrapMode, FIXED_DT};

fn main() {
    let params = Params { world_w: 320.0, wrap_mode: WrapMode::Edge, ..Params::default() };

    let tiles = [
        StaticTile::new(0.0, 160.0, 320.0, 16.0),
        StaticTile::new(192.0, 112.0, 48.0, 16.0),
    ];

    let mut body = Body::new(&params, Vec2::new(40.0, 96.0));
    let mut input = InputTracker::new();

    let mut jumped: u32 = 0;
    let mut landed: u32 = 0;
    let mut bonked: u32 = 0;
    let mut wrapped: u32 = 0;

    for tick in 0..300 {
        let mut buttons = Buttons::empty();
        if tick < 200 {
            buttons |= Buttons::RIGHT;
        }
        if tick == 20 || tick == 34 || tick == 120 {
            buttons |= Buttons::JUMP;
        }

        let snapshot = input.update(buttons);
        let ctx = SimulationContext::new(&params, tick as f64 * f64::from(FIXED_DT), FIXED_DT);
        let ev = step(&ctx, &tiles, &mut body, &snapshot);
        jumped += ev.jumped as u32;
        landed += ev.landed as u32;
        bonked += ev.bonked as u32;
        wrapped += ev.wrapped as u32;
    }

    let trace = serde_json::json!({
        "x": body.position().x,
        "y": body.position().y,
        "vx": body.velocity().x,
        "vy": body.velocity().y,
        "grounded": body.is_grounded(),
        "jumped": jumped,
        "landed": landed,
        "bonked": bonked,
        "wrapped": wrapped,
    });
    println!("{trace}");
}
