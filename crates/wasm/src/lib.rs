use wasm_bindgen::prelude::*;
use jumpkit_core::{Body, Buttons, Drawable, InputTracker, Level, Params, Rect, SimulationContext, StaticTile, Vec2, FIXED_DT};

#[wasm_bindgen]
pub struct Sim {
    params: Params,
    tiles: Vec<StaticTile>,
    spawn: Vec2,
    body: Body,
    input: InputTracker,
    now: f64,
}

fn set(obj: &js_sys::Object, key: &str, value: JsValue) {
    let _ = js_sys::Reflect::set(obj, &JsValue::from_str(key), &value);
}

fn rect_value(r: &Rect) -> JsValue {
    let obj = js_sys::Object::new();
    set(&obj, "x", JsValue::from_f64(r.x as f64));
    set(&obj, "y", JsValue::from_f64(r.y as f64));
    set(&obj, "w", JsValue::from_f64(r.w as f64));
    set(&obj, "h", JsValue::from_f64(r.h as f64));
    JsValue::from(obj)
}

#[wasm_bindgen]
impl Sim {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Sim {
        let params = Params::default();
        let spawn = Vec2::new(144.0, 64.0);
        let tiles = vec![StaticTile::new(0.0, 160.0, 320.0, 16.0)];

        Sim {
            body: Body::new(&params, spawn),
            params,
            tiles,
            spawn,
            input: InputTracker::new(),
            now: 0.0,
        }
    }

    pub fn respawn(&mut self, x: f32, y: f32) {
        self.spawn = Vec2::new(x, y);
        self.body = Body::new(&self.params, self.spawn);
        self.input = InputTracker::new();
    }

    /// Packed rects: [x,y,w,h, x,y,w,h, ...]
    pub fn set_tiles(&mut self, rects: Box<[f32]>) {
        let a = rects.into_vec();
        self.tiles.clear();
        for c in a.chunks_exact(4) {
            self.tiles.push(StaticTile::new(c[0], c[1], c[2], c[3]));
        }
    }

    /// Text tile map (`#` solid, `P` spawn). Respawns the body at the new spawn.
    pub fn load_level_text(&mut self, src: &str) -> Result<(), JsValue> {
        let level = Level::from_text(src, jumpkit_core::level::TILE_SIZE)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.tiles = level.tiles;
        self.respawn(level.spawn.x, level.spawn.y);
        Ok(())
    }

    /// Params as JSON; missing fields keep their defaults.
    pub fn set_params_json(&mut self, json: &str) -> Result<(), JsValue> {
        let params = Params::from_json_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.params = params;
        Ok(())
    }

    /// Step once (fixed 1/50 s) and return state+events as a JS object.
    pub fn step(&mut self, input_bits: u8) -> JsValue {
        self.now += f64::from(FIXED_DT);
        let snapshot = self.input.update(Buttons::from_bits_truncate(input_bits));
        let ctx = SimulationContext::new(&self.params, self.now, FIXED_DT);
        let ev = jumpkit_core::step(&ctx, &self.tiles, &mut self.body, &snapshot);

        let b = &self.body;
        let obj = js_sys::Object::new();
        set(&obj, "hit", rect_value(&b.hit_rect()));
        set(&obj, "visual", rect_value(&b.visual_rect()));
        set(&obj, "vx", JsValue::from_f64(b.velocity().x as f64));
        set(&obj, "vy", JsValue::from_f64(b.velocity().y as f64));
        set(&obj, "grounded", JsValue::from_bool(b.is_grounded()));
        set(&obj, "jumps", JsValue::from_f64(b.jump_count() as f64));
        set(&obj, "jumped", JsValue::from_bool(ev.jumped));
        set(&obj, "landed", JsValue::from_bool(ev.landed));
        set(&obj, "bonked", JsValue::from_bool(ev.bonked));
        set(&obj, "wrapped", JsValue::from_bool(ev.wrapped));

        JsValue::from(obj)
    }
}

impl Default for Sim {
    fn default() -> Self {
        Self::new()
    }
}
