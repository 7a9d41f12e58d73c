#![allow(clippy::many_single_char_names)]

pub mod anim;
pub mod body;
pub mod camera;
pub mod clock;
pub mod collision;
pub mod config;
pub mod context;
pub mod error;
pub mod geom;
pub mod hud;
pub mod input;
pub mod integrator;
pub mod jump;
pub mod level;
pub mod params;
pub mod session;
pub mod step;
pub mod traits;
pub mod world;

pub use body::Body;
pub use clock::{FixedTimestep, FIXED_DT, FIXED_HZ};
pub use collision::{resolve, Contacts};
pub use config::GameConfig;
pub use context::SimulationContext;
pub use error::{ConfigError, Error, LevelError};
pub use geom::{rects_intersect, Rect, Vec2};
pub use input::{Buttons, InputSnapshot, InputTracker, KeyBindings};
pub use integrator::integrate;
pub use jump::JumpPhase;
pub use level::Level;
pub use params::{Params, WrapMode};
pub use session::Session;
pub use step::{step, Events};
pub use traits::{Animated, Collidable, Drawable};
pub use world::{Collectible, StaticTile};
