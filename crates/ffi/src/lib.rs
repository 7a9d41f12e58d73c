use std::ffi::{c_char, CStr};

use jumpkit_core::{
    Body, Buttons, Drawable, Events, GameConfig, InputTracker, Params, Rect, SimulationContext,
    StaticTile, Vec2,
};

/// Opaque to C. Owns the params, the current tile list and the body.
pub struct JkWorld {
    params: Params,
    tiles: Vec<StaticTile>,
    spawn: Vec2,
    body: Body,
    input: InputTracker,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default)]
pub struct JkBodyView {
    pub hit: Rect,
    pub visual: Rect,
    pub velocity: Vec2,
    pub grounded: bool,
    pub jump_count: u32,
}

#[no_mangle]
pub extern "C" fn jk_world_new(spawn_x: f32, spawn_y: f32) -> *mut JkWorld {
    let params = Params::default();
    let spawn = Vec2::new(spawn_x, spawn_y);
    let world = JkWorld {
        body: Body::new(&params, spawn),
        params,
        tiles: Vec::new(),
        spawn,
        input: InputTracker::new(),
    };
    Box::into_raw(Box::new(world))
}

#[no_mangle]
pub extern "C" fn jk_world_free(world: *mut JkWorld) {
    if world.is_null() {
        return;
    }
    unsafe { drop(Box::from_raw(world)); }
}

/// Replace physics params from a TOML config file. Returns false (and keeps
/// the old params) if the file cannot be read or is invalid.
#[no_mangle]
pub extern "C" fn jk_world_load_config(world: *mut JkWorld, path: *const c_char) -> bool {
    if world.is_null() || path.is_null() {
        return false;
    }
    let w = unsafe { &mut *world };
    let path = unsafe { CStr::from_ptr(path) };
    let Ok(path) = path.to_str() else {
        return false;
    };
    match GameConfig::from_file(path) {
        Ok(config) => {
            w.params = config.physics;
            w.body = Body::new(&w.params, w.spawn);
            true
        }
        Err(err) => {
            log::warn!("jk_world_load_config({path}): {err}");
            false
        }
    }
}

#[no_mangle]
pub extern "C" fn jk_world_set_tiles(world: *mut JkWorld, rects: *const Rect, len: usize) {
    if world.is_null() || (rects.is_null() && len > 0) {
        return;
    }
    let w = unsafe { &mut *world };
    let rects = if len == 0 { &[][..] } else { unsafe { std::slice::from_raw_parts(rects, len) } };
    w.tiles.clear();
    w.tiles.extend(rects.iter().copied().map(StaticTile::from));
}

#[no_mangle]
pub extern "C" fn jk_world_respawn(world: *mut JkWorld, spawn_x: f32, spawn_y: f32) {
    if world.is_null() {
        return;
    }
    let w = unsafe { &mut *world };
    w.spawn = Vec2::new(spawn_x, spawn_y);
    w.body = Body::new(&w.params, w.spawn);
    w.input = InputTracker::new();
}

/// One fixed tick. `now` is the host's monotonic time in seconds.
#[no_mangle]
pub extern "C" fn jk_world_step(world: *mut JkWorld, input_bits: u8, now: f64, dt: f32) -> Events {
    if world.is_null() {
        return Events::default();
    }
    let w = unsafe { &mut *world };
    let snapshot = w.input.update(Buttons::from_bits_truncate(input_bits));
    let ctx = SimulationContext::new(&w.params, now, dt);
    jumpkit_core::step(&ctx, &w.tiles, &mut w.body, &snapshot)
}

#[no_mangle]
pub extern "C" fn jk_world_body(world: *const JkWorld, out: *mut JkBodyView) {
    if world.is_null() || out.is_null() {
        return;
    }
    let b = unsafe { &(*world).body };
    let view = JkBodyView {
        hit: b.hit_rect(),
        visual: b.visual_rect(),
        velocity: b.velocity(),
        grounded: b.is_grounded(),
        jump_count: b.jump_count(),
    };
    unsafe { *out = view; }
}
