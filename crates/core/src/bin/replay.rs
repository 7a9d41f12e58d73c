use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use jumpkit_core::{step, Body, Buttons, ConfigError, InputTracker, Params, Rect, SimulationContext, StaticTile, Vec2, FIXED_DT};

/// Recorded input run against a fixed tile set.
#[derive(Debug, Deserialize)]
struct Replay {
    #[serde(default)]
    params: Params,
    #[serde(default = "default_dt")]
    dt: f32,
    tiles: Vec<Rect>,
    spawn: Vec2,
    /// One `Buttons` bit set per fixed tick.
    inputs: Vec<u8>,
}

fn default_dt() -> f32 {
    FIXED_DT
}

fn load_replay(path: &Path) -> Result<Replay, ConfigError> {
    let raw = fs::read_to_string(path)?;
    let replay: Replay = serde_json::from_str(&raw)?;
    replay.params.validate()?;
    Ok(replay)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = env_logger::Builder::from_default_env().try_init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .ok_or("usage: cargo run -p jumpkit_core --features cli --bin replay -- <replay.json>")?;
    let replay = load_replay(&path)?;

    let tiles: Vec<StaticTile> = replay.tiles.into_iter().map(StaticTile::from).collect();
    let mut body = Body::new(&replay.params, replay.spawn);
    let mut input = InputTracker::new();
    log::info!("replaying {} ticks from {}", replay.inputs.len(), path.display());

    println!("tick,x,y,vx,vy,grounded,jumps");
    for (tick, bits) in replay.inputs.iter().enumerate() {
        let snapshot = input.update(Buttons::from_bits_truncate(*bits));
        let now = tick as f64 * f64::from(replay.dt);
        let ctx = SimulationContext::new(&replay.params, now, replay.dt);
        let _ = step(&ctx, &tiles, &mut body, &snapshot);
        let p = body.position();
        let v = body.velocity();
        println!(
            "{},{},{},{},{},{},{}",
            tick,
            p.x,
            p.y,
            v.x,
            v.y,
            body.is_grounded() as u8,
            body.jump_count()
        );
    }
    Ok(())
}
