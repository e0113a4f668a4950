//! World state and core simulation types
//!
//! Everything the simulation step and the input handlers touch lives in [`World`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which half of the field a player defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Something noteworthy that happened during a frame (logging only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// `scorer` put the ball in the opposing goal
    Goal { scorer: Side },
    /// Ball bounced off a player's edge
    PaddleHit { side: Side },
    /// Ball bounced off the top or bottom boundary
    WallBounce,
    /// A kick re-aimed the ball
    Kick { side: Side },
    /// A player left the ground
    Jump { side: Side },
}

/// Field geometry, fixed once the host knows its surface size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    pub goal_height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(DEFAULT_FIELD_WIDTH, DEFAULT_FIELD_HEIGHT)
    }
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            goal_height: height / GOAL_HEIGHT_DIVISOR,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Resting y for a rectangle of the given height
    pub fn floor_for(&self, height: f32) -> f32 {
        self.height - height
    }

    /// Largest x a rectangle of the given width may occupy
    pub fn max_x_for(&self, width: f32) -> f32 {
        self.width - width
    }
}

/// A player paddle (axis-aligned rectangle, `pos` is the top-left corner)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Set by a jump, cleared on floor contact
    pub jumping: bool,
    /// True iff the last step clamped the player to the floor
    pub grounded: bool,
}

impl Player {
    /// A player standing on the floor at `x`
    pub fn on_floor(x: f32, arena: &Arena) -> Self {
        let size = Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT);
        Self {
            pos: Vec2::new(x, arena.floor_for(size.y)),
            vel: Vec2::ZERO,
            size,
            jumping: false,
            grounded: true,
        }
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn right_edge(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Strictly between top and bottom edges
    pub fn spans_y(&self, y: f32) -> bool {
        y > self.top() && y < self.bottom()
    }
}

/// The ball (`pos` is the circle centre)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::splat(BALL_SPEED),
            radius: BALL_SIZE / 2.0,
        }
    }

    pub fn left_edge(&self) -> f32 {
        self.pos.x - self.radius
    }

    pub fn right_edge(&self) -> f32 {
        self.pos.x + self.radius
    }

    pub fn top_edge(&self) -> f32 {
        self.pos.y - self.radius
    }

    pub fn bottom_edge(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// Goals scored by each side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Complete mutable game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub arena: Arena,
    pub left: Player,
    pub right: Player,
    pub ball: Ball,
    pub score: Score,
    /// Events since the last drain (not gameplay-affecting)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Default for World {
    fn default() -> Self {
        Self::new(Arena::default())
    }
}

impl World {
    /// Fresh kickoff: players on the floor near their goals, ball at centre
    pub fn new(arena: Arena) -> Self {
        let left = Player::on_floor(LEFT_START_X, &arena);
        let right = Player::on_floor(arena.width - RIGHT_START_INSET - PLAYER_WIDTH, &arena);
        Self {
            ball: Ball::new(arena.center()),
            arena,
            left,
            right,
            score: Score::default(),
            events: Vec::new(),
        }
    }

    pub fn player(&self, side: Side) -> &Player {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn player_mut(&mut self, side: Side) -> &mut Player {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Take all events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
