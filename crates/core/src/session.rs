use std::path::Path;

use crate::anim::Animator;
use crate::body::Body;
use crate::camera::Camera;
use crate::clock::FixedTimestep;
use crate::config::GameConfig;
use crate::context::SimulationContext;
use crate::error::{ConfigError, Error};
use crate::geom::Vec2;
use crate::hud::DebugHud;
use crate::input::{Buttons, InputSnapshot, InputTracker};
use crate::level::Level;
use crate::step::{step, Events};
use crate::traits::{Animated, Drawable};
use crate::world::{Collectible, StaticTile};

/// One running level: the player body plus everything that reads it.
pub struct Session {
    config: GameConfig,
    tiles: Vec<StaticTile>,
    collectibles: Vec<Collectible>,
    spawn: Vec2,
    body: Body,
    clock: FixedTimestep,
    input: InputTracker,
    /// Edges seen since the last fixed tick ran.
    latched: InputSnapshot,
    animator: Animator,
    camera: Camera,
    hud: DebugHud,
    elapsed: f64,
}

impl Session {
    pub fn new(config: GameConfig, level: Level) -> Result<Self, ConfigError> {
        config.validate()?;
        let body = Body::new(&config.physics, level.spawn);
        let mut camera = Camera::new(config.camera);
        camera.snap_to(&body.visual_rect());
        Ok(Self {
            clock: FixedTimestep::new(config.timing.fixed_dt, config.timing.max_ticks_per_frame),
            hud: DebugHud::new(config.hud),
            tiles: level.tiles,
            collectibles: level.collectibles,
            spawn: level.spawn,
            body,
            input: InputTracker::new(),
            latched: InputSnapshot::default(),
            animator: Animator::default(),
            camera,
            config,
            elapsed: 0.0,
        })
    }

    /// Config file plus the level it names. Both failures are fatal to the caller.
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let config = GameConfig::from_file(path)?;
        let level_path = config
            .level
            .clone()
            .ok_or_else(|| ConfigError::invalid("level", "no level configured"))?;
        let level = Level::load(level_path)?;
        Ok(Self::new(config, level)?)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn tiles(&self) -> &[StaticTile] {
        &self.tiles
    }

    pub fn collectibles(&self) -> &[Collectible] {
        &self.collectibles
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn hud(&self) -> &DebugHud {
        &self.hud
    }

    pub fn clock(&self) -> &FixedTimestep {
        &self.clock
    }

    pub fn respawn(&mut self) {
        self.body = Body::new(&self.config.physics, self.spawn);
        self.camera.snap_to(&self.body.visual_rect());
        self.latched = InputSnapshot::default();
        log::debug!("respawned at {:?}", self.spawn);
    }

    /// One displayed frame: run the fixed ticks that are due, then the
    /// per-frame animation, camera and HUD updates.
    pub fn frame(&mut self, frame_dt: f64, buttons: Buttons) -> Events {
        let snapshot = self.input.update(buttons);
        self.latched.left = snapshot.left;
        self.latched.right = snapshot.right;
        self.latched.jump_pressed |= snapshot.jump_pressed;
        if snapshot.debug_toggled {
            self.hud.toggle();
        }

        let mut events = Events::default();
        let due = self.clock.advance(frame_dt);
        for _ in 0..due {
            let now = self.clock.tick();
            let ctx = SimulationContext::new(&self.config.physics, now, self.clock.interval());
            let ev = step(&ctx, &self.tiles, &mut self.body, &self.latched);
            self.latched.jump_pressed = false;
            self.animator.sync(&self.body);
            events.merge(ev);
        }

        if frame_dt.is_finite() && frame_dt > 0.0 {
            self.elapsed += frame_dt;
        }
        self.animator.advance(self.elapsed);
        for c in &mut self.collectibles {
            c.advance(self.elapsed);
        }
        self.camera.update(&self.body.visual_rect());
        if self.hud.visible() {
            self.hud.update(
                self.elapsed,
                frame_dt,
                &self.body,
                self.animator.state(),
                &self.config.keybinds,
            );
        }
        events
    }
}
