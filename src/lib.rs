//! Hop Pong - two jumping paddles, one ball, two goals
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, scoring)
//! - `input`: Key table and press/release handlers
//! - `renderer`: Draw list snapshot and canvas painter
//! - `session`: Per-frame driver owned by the host
//! - `settings`: Player preferences (seed, overlays, palette)

pub mod error;
pub mod input;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use error::InitError;
pub use session::Session;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default field dimensions (used when the host has no surface of its own)
    pub const DEFAULT_FIELD_WIDTH: f32 = 800.0;
    pub const DEFAULT_FIELD_HEIGHT: f32 = 400.0;

    /// Player rectangle size
    pub const PLAYER_WIDTH: f32 = 10.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    /// Horizontal speed set by a directional key
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Upward speed of a jump (applied as negative vy)
    pub const JUMP_SPEED: f32 = 10.0;
    /// Left player spawn x
    pub const LEFT_START_X: f32 = 20.0;
    /// Right player spawn distance from the right edge (before its own width)
    pub const RIGHT_START_INSET: f32 = 30.0;

    /// Ball diameter
    pub const BALL_SIZE: f32 = 10.0;
    /// Per-axis ball speed after a reset or kick
    pub const BALL_SPEED: f32 = 3.0;
    /// Max horizontal player-to-ball distance for a kick
    pub const KICK_RANGE: f32 = 15.0;

    /// Added to vy every frame
    pub const GRAVITY: f32 = 0.5;
    /// Multiplies vx every frame
    pub const FRICTION: f32 = 0.8;

    /// Goal rectangles (height is a fifth of the field height)
    pub const GOAL_WIDTH: f32 = 60.0;
    pub const GOAL_HEIGHT_DIVISOR: f32 = 5.0;
    /// Extra scoring margin around each goal
    pub const GOAL_BUFFER: f32 = 5.0;
}
