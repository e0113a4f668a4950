//! Collision and goal tests
//!
//! Everything here is an axis-aligned heuristic: one-sided edge checks against
//! the players, a vertical boundary check for the walls, and box checks for the
//! goal mouths. None of the tests move anything; the tick decides the response.

use super::state::{Arena, Ball, Player, Side};
use crate::consts::{GOAL_BUFFER, GOAL_WIDTH};

/// Ball crosses the top or bottom boundary
pub fn ball_hits_wall(ball: &Ball, arena: &Arena) -> bool {
    ball.top_edge() < 0.0 || ball.bottom_edge() > arena.height
}

/// Ball touches the field-facing edge of `player`
///
/// Only the edge facing the centre of the field is tested. A ball that is
/// already behind that edge keeps registering hits.
pub fn ball_hits_player(ball: &Ball, player: &Player, side: Side) -> bool {
    let crosses_edge = match side {
        Side::Left => ball.left_edge() < player.right_edge(),
        Side::Right => ball.right_edge() > player.pos.x,
    };
    crosses_edge && player.spans_y(ball.pos.y)
}

/// Ball is inside the scoring zone of the goal defended by `side`
pub fn ball_in_goal(ball: &Ball, arena: &Arena, side: Side) -> bool {
    let low_enough = ball.pos.y > arena.height - arena.goal_height - GOAL_BUFFER;
    let past_line = match side {
        Side::Left => ball.left_edge() < GOAL_WIDTH + GOAL_BUFFER,
        Side::Right => ball.right_edge() > arena.width - GOAL_WIDTH - GOAL_BUFFER,
    };
    past_line && low_enough
}

/// Which goal (by defending side) the ball is in; left is checked first
pub fn goal_hit(ball: &Ball, arena: &Arena) -> Option<Side> {
    [Side::Left, Side::Right]
        .into_iter()
        .find(|&side| ball_in_goal(ball, arena, side))
}

/// Ball is within kick reach of `player`
pub fn ball_in_kick_range(ball: &Ball, player: &Player, range: f32) -> bool {
    (ball.pos.x - player.pos.x).abs() < range && player.spans_y(ball.pos.y)
}
