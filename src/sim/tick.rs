//! Per-frame simulation step
//!
//! One call advances the world by exactly one host frame. There is no fixed
//! timestep and no catch-up: velocities are in pixels per frame.

use glam::Vec2;

use super::collision::{ball_hits_player, ball_hits_wall, goal_hit};
use super::rng::RandomSource;
use super::state::{Arena, GameEvent, Player, Side, World};
use crate::consts::*;

/// Advance the world by one frame
///
/// Phase order is fixed: friction, ball motion, wall bounce, player bounces,
/// goal check, then each player's vertical and horizontal motion.
pub fn step(world: &mut World, rng: &mut impl RandomSource) {
    // Friction applies even while a direction key is held; key-repeat
    // re-asserts vx between frames.
    world.left.vel.x *= FRICTION;
    world.right.vel.x *= FRICTION;

    world.ball.pos += world.ball.vel;

    // Reflect only; the ball may overshoot the boundary for a frame.
    if ball_hits_wall(&world.ball, &world.arena) {
        world.ball.vel.y = -world.ball.vel.y;
        world.events.push(GameEvent::WallBounce);
    }

    for side in [Side::Left, Side::Right] {
        if ball_hits_player(&world.ball, world.player(side), side) {
            world.ball.vel.x = -world.ball.vel.x;
            world.ball.vel.y += rng.next_perturbation();
            world.events.push(GameEvent::PaddleHit { side });
        }
    }

    if let Some(defender) = goal_hit(&world.ball, &world.arena) {
        let scorer = defender.opponent();
        world.score.award(scorer);
        world.events.push(GameEvent::Goal { scorer });
        reset_ball(world, rng);
    }

    let arena = world.arena;
    for player in [&mut world.left, &mut world.right] {
        integrate_player(player, &arena);
    }
}

/// Gravity, floor clamp, then horizontal motion and side clamp
fn integrate_player(player: &mut Player, arena: &Arena) {
    player.vel.y += GRAVITY;
    player.pos.y += player.vel.y;

    let floor = arena.floor_for(player.size.y);
    if player.pos.y > floor {
        player.pos.y = floor;
        player.vel.y = 0.0;
        player.jumping = false;
        player.grounded = true;
    } else {
        player.grounded = false;
    }

    player.pos.x += player.vel.x;
    player.pos.x = player.pos.x.clamp(0.0, arena.max_x_for(player.size.x));
}

/// Put the ball back at centre with a random diagonal velocity
pub fn reset_ball(world: &mut World, rng: &mut impl RandomSource) {
    world.ball.pos = world.arena.center();
    randomize_ball_velocity(world, rng);
}

/// One of the four `(±BALL_SPEED, ±BALL_SPEED)` velocities; x sign drawn first
pub fn randomize_ball_velocity(world: &mut World, rng: &mut impl RandomSource) {
    let sx = rng.next_sign();
    let sy = rng.next_sign();
    world.ball.vel = Vec2::new(BALL_SPEED * sx, BALL_SPEED * sy);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::{SeededRng, SequenceRng};
    use crate::sim::state::Score;

    /// World with the ball parked mid-air away from everything
    fn quiet_world() -> World {
        let mut world = World::default();
        world.ball.pos = Vec2::new(400.0, 100.0);
        world.ball.vel = Vec2::ZERO;
        world
    }

    #[test]
    fn test_goal_scenario_left_mouth() {
        let mut world = World::default();
        let h = world.arena.height;
        world.ball.pos = Vec2::new(5.0, h - world.arena.goal_height / 2.0);
        world.ball.vel = Vec2::new(-3.0, 0.0);

        // Paddle hit draws one sample, the reset draws two
        let mut rng = SequenceRng::new(&[0.5, 0.9, 0.1]);
        step(&mut world, &mut rng);

        assert_eq!(world.score, Score { left: 0, right: 1 });
        assert_eq!(world.ball.pos, world.arena.center());
        assert_eq!(world.ball.vel, Vec2::new(3.0, -3.0));
        assert!(world.events.contains(&GameEvent::Goal { scorer: Side::Right }));
        assert_eq!(rng.consumed(), 3);
    }

    #[test]
    fn test_goal_right_mouth_scores_left() {
        let mut world = quiet_world();
        world.ball.pos = Vec2::new(790.0, 380.0);
        world.ball.vel = Vec2::new(1.0, 0.0);
        // Move the right player out of the way so only the goal fires
        world.right.pos.y = 0.0;
        world.right.grounded = false;

        let mut rng = SequenceRng::new(&[0.1, 0.1]);
        step(&mut world, &mut rng);

        assert_eq!(world.score, Score { left: 1, right: 0 });
        assert_eq!(world.ball.vel, Vec2::new(-3.0, -3.0));
    }

    #[test]
    fn test_top_wall_flips_dy_only() {
        let mut world = quiet_world();
        world.ball.pos = Vec2::new(400.0, 6.0);
        world.ball.vel = Vec2::new(2.0, -3.0);

        step(&mut world, &mut SequenceRng::new(&[0.5]));

        assert_eq!(world.ball.vel, Vec2::new(2.0, 3.0));
        // No position correction
        assert_eq!(world.ball.pos, Vec2::new(402.0, 3.0));
    }

    #[test]
    fn test_paddle_hit_reverses_and_perturbs() {
        let mut world = quiet_world();
        // Player moved clear of the left goal zone; ball lands just inside its edge
        world.left.pos.x = 100.0;
        world.ball.pos = Vec2::new(117.0, 360.0);
        world.ball.vel = Vec2::new(-3.0, 0.0);

        step(&mut world, &mut SequenceRng::new(&[0.75]));

        assert_eq!(world.ball.vel, Vec2::new(3.0, 0.5));
        assert_eq!(world.score, Score::default());
        assert!(world.events.contains(&GameEvent::PaddleHit { side: Side::Left }));
    }

    #[test]
    fn test_friction_decays_vx() {
        let mut world = quiet_world();
        world.left.pos.x = 200.0;
        world.left.vel.x = 5.0;
        let mut rng = SequenceRng::new(&[0.5]);

        step(&mut world, &mut rng);
        assert_eq!(world.left.vel.x, 4.0);
        assert_eq!(world.left.pos.x, 204.0);

        step(&mut world, &mut rng);
        assert!((world.left.vel.x - 3.2).abs() < 1e-6);
    }

    #[test]
    fn test_gravity_and_floor_clamp() {
        let mut world = quiet_world();
        let floor = world.arena.floor_for(PLAYER_HEIGHT);
        world.left.vel.y = -10.0;
        world.left.jumping = true;
        let mut rng = SequenceRng::new(&[0.5]);

        step(&mut world, &mut rng);
        assert_eq!(world.left.vel.y, -9.5);
        assert_eq!(world.left.pos.y, floor - 9.5);
        assert!(!world.left.grounded);
        assert!(world.left.jumping);

        // Airtime of a full jump is 40 frames
        for _ in 0..39 {
            step(&mut world, &mut rng);
        }
        assert_eq!(world.left.pos.y, floor);
        assert_eq!(world.left.vel.y, 0.0);
        assert!(world.left.grounded);
        assert!(!world.left.jumping);
    }

    #[test]
    fn test_landing_exactly_on_floor_is_not_grounded() {
        let mut world = quiet_world();
        let floor = world.arena.floor_for(PLAYER_HEIGHT);
        world.left.vel.y = -JUMP_SPEED;
        world.left.jumping = true;
        let mut rng = SequenceRng::new(&[0.5]);

        for _ in 0..39 {
            step(&mut world, &mut rng);
        }
        // Reaching the floor without passing it skips the clamp
        assert_eq!(world.left.pos.y, floor);
        assert_eq!(world.left.vel.y, 9.5);
        assert!(!world.left.grounded);
        assert!(world.left.jumping);

        step(&mut world, &mut rng);
        assert_eq!(world.left.pos.y, floor);
        assert!(world.left.grounded);
        assert!(!world.left.jumping);
    }

    #[test]
    fn test_resting_player_stays_grounded() {
        let mut world = quiet_world();
        step(&mut world, &mut SequenceRng::new(&[0.5]));
        assert!(world.left.grounded && world.right.grounded);
        assert_eq!(world.left.pos.y, world.arena.floor_for(PLAYER_HEIGHT));
    }

    #[test]
    fn test_horizontal_clamp() {
        let mut world = quiet_world();
        world.left.pos.x = 2.0;
        world.left.vel.x = -5.0;
        world.right.pos.x = 788.0;
        world.right.vel.x = 5.0;

        step(&mut world, &mut SequenceRng::new(&[0.5]));

        assert_eq!(world.left.pos.x, 0.0);
        assert_eq!(world.right.pos.x, 790.0);
    }

    #[test]
    fn test_reset_velocity_is_one_of_four_diagonals() {
        let mut world = World::default();
        let mut rng = SeededRng::new(7);
        for _ in 0..64 {
            reset_ball(&mut world, &mut rng);
            assert_eq!(world.ball.pos, world.arena.center());
            assert_eq!(world.ball.vel.abs(), Vec2::splat(BALL_SPEED));
        }
    }

    #[test]
    fn test_determinism() {
        let mut a = World::default();
        let mut b = World::default();
        let mut rng_a = SeededRng::new(99999);
        let mut rng_b = SeededRng::new(99999);

        for _ in 0..2000 {
            step(&mut a, &mut rng_a);
            step(&mut b, &mut rng_b);
        }

        assert_eq!(a.ball, b.ball);
        assert_eq!(a.score, b.score);
        assert_eq!(a.left, b.left);
    }

    #[test]
    fn test_score_never_decreases() {
        let mut world = World::default();
        let mut rng = SeededRng::new(3);
        let mut last = world.score;
        for _ in 0..5000 {
            step(&mut world, &mut rng);
            let goals = world
                .drain_events()
                .iter()
                .filter(|e| matches!(e, GameEvent::Goal { .. }))
                .count() as u32;
            assert!(world.score.left >= last.left && world.score.right >= last.right);
            let delta = (world.score.left - last.left) + (world.score.right - last.right);
            assert_eq!(delta, goals);
            assert!(delta <= 1);
            last = world.score;
        }
    }
}
