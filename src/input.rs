//! Keyboard input
//!
//! Keys are mapped through a fixed table to a player and an action. Presses
//! change velocities immediately; the kick fires on release.

use serde::{Deserialize, Serialize};

use crate::consts::{JUMP_SPEED, KICK_RANGE, PLAYER_SPEED};
use crate::sim::{GameEvent, RandomSource, Side, World, ball_in_kick_range, randomize_ball_velocity};

/// Logical keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    A,
    S,
    D,
    Space,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Enter,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "w" => Some(Key::W),
            "a" => Some(Key::A),
            "s" => Some(Key::S),
            "d" => Some(Key::D),
            " " => Some(Key::Space),
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "Enter" => Some(Key::Enter),
            _ => None,
        }
    }
}

/// What a key does for its player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Jump,
    /// Zero vertical velocity (stop rising, fall from here)
    CancelFall,
    MoveLeft,
    MoveRight,
    Kick,
}

/// Key table: two disjoint key sets, one per player
pub const BINDINGS: [(Key, Side, Action); 10] = [
    (Key::W, Side::Left, Action::Jump),
    (Key::S, Side::Left, Action::CancelFall),
    (Key::A, Side::Left, Action::MoveLeft),
    (Key::D, Side::Left, Action::MoveRight),
    (Key::Space, Side::Left, Action::Kick),
    (Key::ArrowUp, Side::Right, Action::Jump),
    (Key::ArrowDown, Side::Right, Action::CancelFall),
    (Key::ArrowLeft, Side::Right, Action::MoveLeft),
    (Key::ArrowRight, Side::Right, Action::MoveRight),
    (Key::Enter, Side::Right, Action::Kick),
];

/// Look up the player and action bound to `key`
pub fn binding(key: Key) -> Option<(Side, Action)> {
    BINDINGS
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|&(_, side, action)| (side, action))
}

/// Handle a key press. Returns true if the world changed.
///
/// Direction keys overwrite vx rather than add to it, so OS key-repeat keeps
/// re-asserting full speed against friction.
pub fn press(world: &mut World, key: Key) -> bool {
    let Some((side, action)) = binding(key) else {
        return false;
    };
    let player = world.player_mut(side);

    match action {
        Action::Jump => {
            if player.grounded && !player.jumping {
                player.vel.y = -JUMP_SPEED;
                player.jumping = true;
                world.events.push(GameEvent::Jump { side });
                true
            } else {
                false
            }
        }
        Action::CancelFall => {
            player.vel.y = 0.0;
            true
        }
        Action::MoveLeft => {
            player.vel.x = -PLAYER_SPEED;
            true
        }
        Action::MoveRight => {
            player.vel.x = PLAYER_SPEED;
            true
        }
        Action::Kick => false,
    }
}

/// Handle a key release. Only kick keys react. Returns true if the ball was kicked.
pub fn release(world: &mut World, key: Key, rng: &mut impl RandomSource) -> bool {
    let Some((side, Action::Kick)) = binding(key) else {
        return false;
    };
    if !ball_in_kick_range(&world.ball, world.player(side), KICK_RANGE) {
        return false;
    }
    randomize_ball_velocity(world, rng);
    world.events.push(GameEvent::Kick { side });
    true
}
