//! Match session driven by the host
//!
//! Owns the world and the random stream. The host forwards key events as they
//! arrive and calls [`Session::frame`] once per animation frame; both run to
//! completion on the single host thread, so no locking is involved.

use crate::input::{self, Key};
use crate::renderer::{Palette, Scene};
use crate::settings::Settings;
use crate::sim::{Arena, GameEvent, RandomSource, SeededRng, World, step};

/// Number of frame timestamps kept for the FPS estimate
const FPS_WINDOW: usize = 60;

/// Rolling frames-per-second estimate over the last [`FPS_WINDOW`] frames
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    fps: u32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self {
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
        }
    }
}

impl FpsCounter {
    /// Record a frame timestamp in milliseconds
    pub fn record(&mut self, time_ms: f64) {
        self.frame_times[self.frame_index] = time_ms;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        // Oldest sample is the slot we will overwrite next
        let oldest = self.frame_times[self.frame_index];
        if oldest > 0.0 {
            let elapsed = time_ms - oldest;
            if elapsed > 0.0 {
                self.fps = ((FPS_WINDOW - 1) as f64 * 1000.0 / elapsed).round() as u32;
            }
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

/// A running match
pub struct Session<R: RandomSource = SeededRng> {
    world: World,
    rng: R,
    palette: Palette,
    show_fps: bool,
    fps: FpsCounter,
    frames: u64,
}

impl Session<SeededRng> {
    /// New match on `arena`, seeded from settings or `fallback_seed`
    pub fn new(settings: &Settings, arena: Arena, fallback_seed: u64) -> Self {
        let seed = settings.seed_or(fallback_seed);
        log::info!(
            "Match starting on {}x{} field with seed {}",
            arena.width,
            arena.height,
            seed
        );
        Self::with_rng(settings, arena, SeededRng::new(seed))
    }

    /// Seed this match was started with
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl<R: RandomSource> Session<R> {
    pub fn with_rng(settings: &Settings, arena: Arena, rng: R) -> Self {
        Self {
            world: World::new(arena),
            rng,
            palette: Palette::for_contrast(settings.high_contrast),
            show_fps: settings.show_fps,
            fps: FpsCounter::default(),
            frames: 0,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn fps(&self) -> u32 {
        self.fps.fps()
    }

    /// Forward a key press to the input controller
    pub fn key_down(&mut self, key: Key) -> bool {
        let changed = input::press(&mut self.world, key);
        self.flush_events();
        changed
    }

    /// Forward a key release to the input controller
    pub fn key_up(&mut self, key: Key) -> bool {
        let kicked = input::release(&mut self.world, key, &mut self.rng);
        self.flush_events();
        kicked
    }

    /// Advance one frame and return what to draw
    pub fn frame(&mut self, time_ms: f64) -> Scene {
        self.advance();
        self.fps.record(time_ms);
        let fps = self.show_fps.then(|| self.fps());
        Scene::from_world(&self.world, &self.palette, fps)
    }

    /// Advance one frame without producing a scene (headless hosts)
    pub fn advance(&mut self) {
        step(&mut self.world, &mut self.rng);
        self.frames += 1;
        self.flush_events();
    }

    fn flush_events(&mut self) {
        for event in self.world.drain_events() {
            match event {
                GameEvent::Goal { scorer } => log::info!(
                    "Goal for {} (frame {}): {} - {}",
                    scorer.as_str(),
                    self.frames,
                    self.world.score.left,
                    self.world.score.right
                ),
                GameEvent::Kick { side } => log::debug!("{} player kicked", side.as_str()),
                GameEvent::Jump { side } => log::debug!("{} player jumped", side.as_str()),
                GameEvent::PaddleHit { side } => {
                    log::trace!("Ball bounced off {} player", side.as_str())
                }
                GameEvent::WallBounce => log::trace!("Ball bounced off wall"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{PLAYER_HEIGHT, PLAYER_WIDTH};
    use crate::input::BINDINGS;
    use crate::sim::SequenceRng;
    use glam::Vec2;
    use proptest::prelude::*;

    #[test]
    fn test_frame_steps_and_renders() {
        let mut session = Session::new(&Settings::default(), Arena::default(), 1);
        let scene = session.frame(16.0);
        assert_eq!(session.frames(), 1);
        assert_eq!(session.world().ball.pos, Vec2::new(403.0, 203.0));
        assert_eq!(scene.texts().count(), 2);
        assert!(session.world().events.is_empty());
    }

    #[test]
    fn test_fps_overlay_follows_settings() {
        let settings = Settings {
            show_fps: true,
            ..Default::default()
        };
        let mut session = Session::new(&settings, Arena::default(), 1);
        let scene = session.frame(16.0);
        assert_eq!(scene.texts().count(), 3);
    }

    #[test]
    fn test_fps_text_uses_counter() {
        let settings = Settings {
            show_fps: true,
            ..Default::default()
        };
        let mut session = Session::new(&settings, Arena::default(), 1);
        let scene = (1..=120)
            .map(|i| session.frame(i as f64 * 1000.0 / 60.0))
            .last()
            .unwrap();
        assert_eq!(session.fps(), 60);
        assert_eq!(scene.texts().last(), Some("60 FPS"));
    }

    #[test]
    fn test_seed_reported() {
        let settings = Settings {
            seed: Some(77),
            ..Default::default()
        };
        assert_eq!(Session::new(&settings, Arena::default(), 1).seed(), 77);
        assert_eq!(Session::new(&Settings::default(), Arena::default(), 5).seed(), 5);
    }

    #[test]
    fn test_fps_counter() {
        let mut fps = FpsCounter::default();
        for i in 1..=120 {
            fps.record(i as f64 * 1000.0 / 60.0);
        }
        assert_eq!(fps.fps(), 60);
    }

    #[test]
    fn test_kick_through_session() {
        let mut session =
            Session::with_rng(&Settings::default(), Arena::default(), SequenceRng::new(&[0.9, 0.9]));
        session.world_mut().ball.pos = Vec2::new(760.0, 370.0);
        assert!(session.key_up(Key::Enter));
        assert_eq!(session.world().ball.vel, Vec2::new(3.0, 3.0));
    }

    #[test]
    fn test_same_seed_same_match() {
        let settings = Settings {
            seed: Some(2024),
            ..Default::default()
        };
        let mut a = Session::new(&settings, Arena::default(), 1);
        let mut b = Session::new(&settings, Arena::default(), 999);
        for i in 0..600 {
            if i % 50 == 0 {
                a.key_down(Key::W);
                b.key_down(Key::W);
            }
            a.advance();
            b.advance();
        }
        assert_eq!(a.world().ball, b.world().ball);
        assert_eq!(a.world().score, b.world().score);
    }

    fn any_key() -> impl Strategy<Value = Key> {
        (0..BINDINGS.len()).prop_map(|i| BINDINGS[i].0)
    }

    #[derive(Debug, Clone)]
    enum Op {
        Down(Key),
        Up(Key),
        Frames(u8),
    }

    fn any_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            any_key().prop_map(Op::Down),
            any_key().prop_map(Op::Up),
            (1u8..30).prop_map(Op::Frames),
        ]
    }

    proptest! {
        #[test]
        fn prop_players_stay_in_field(seed in any::<u64>(), ops in prop::collection::vec(any_op(), 1..80)) {
            let settings = Settings { seed: Some(seed), ..Default::default() };
            let mut session = Session::new(&settings, Arena::default(), 0);
            let mut last_score = session.world().score;

            for op in ops {
                match op {
                    Op::Down(key) => { session.key_down(key); }
                    Op::Up(key) => { session.key_up(key); }
                    Op::Frames(n) => {
                        for _ in 0..n {
                            session.advance();
                            let world = session.world();
                            let max_x = world.arena.width - PLAYER_WIDTH;
                            let floor = world.arena.height - PLAYER_HEIGHT;
                            for p in [&world.left, &world.right] {
                                prop_assert!(p.pos.x >= 0.0 && p.pos.x <= max_x);
                                prop_assert!(p.pos.y <= floor);
                                if p.grounded {
                                    prop_assert_eq!(p.pos.y, floor);
                                    prop_assert!(!p.jumping);
                                }
                            }
                            prop_assert!(world.score.left >= last_score.left);
                            prop_assert!(world.score.right >= last_score.right);
                            last_score = world.score;
                        }
                    }
                }
            }
        }
    }
}
