//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay deterministic:
//! - One step per host frame, no wall-clock time
//! - Randomness only through [`RandomSource`]
//! - Fixed phase order and fixed left-then-right player order
//! - No rendering or platform dependencies

pub mod collision;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{ball_hits_player, ball_hits_wall, ball_in_goal, ball_in_kick_range, goal_hit};
pub use rng::{RandomSource, SeededRng, SequenceRng};
pub use state::{Arena, Ball, GameEvent, Player, Score, Side, World};
pub use tick::{randomize_ball_velocity, reset_ball, step};
