//! Draw list for one frame
//!
//! The host clears its surface and replays the shapes in order. Nothing here
//! knows about canvases, so the list is easy to inspect in tests.

use glam::Vec2;
use serde::Serialize;

use crate::consts::GOAL_WIDTH;
use crate::sim::World;

/// Font used for all HUD text
pub const HUD_FONT: &str = "20px Arial";
/// Left score text anchor
pub const LEFT_SCORE_POS: Vec2 = Vec2::new(20.0, 30.0);
/// Right score text is anchored this far from the right edge
pub const RIGHT_SCORE_INSET: f32 = 140.0;
/// FPS text sits centred under the scores
pub const FPS_OFFSET_Y: f32 = 30.0;

/// CSS color string
pub type Color = &'static str;

/// Colors for game elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub background: Option<Color>,
    pub left_player: Color,
    pub right_player: Color,
    pub ball: Color,
    pub goal: Color,
    pub text: Color,
}

impl Palette {
    pub const CLASSIC: Palette = Palette {
        background: None,
        left_player: "blue",
        right_player: "green",
        ball: "red",
        goal: "gray",
        text: "black",
    };

    pub const HIGH_CONTRAST: Palette = Palette {
        background: Some("black"),
        left_player: "#00e5ff",
        right_player: "#ffd400",
        ball: "white",
        goal: "#808080",
        text: "white",
    };

    pub fn for_contrast(high_contrast: bool) -> Self {
        if high_contrast {
            Self::HIGH_CONTRAST
        } else {
            Self::CLASSIC
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// A single draw command
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Shape {
    /// Wipe the previous frame, optionally filling with a background
    Clear { background: Option<Color> },
    /// Filled axis-aligned rectangle (`pos` is the top-left corner)
    Rect { pos: Vec2, size: Vec2, color: Color },
    /// Filled circle
    Circle { center: Vec2, radius: f32, color: Color },
    /// Text with its baseline starting at `pos`
    Text { pos: Vec2, text: String, color: Color, font: &'static str },
}

/// Ordered draw list for one frame
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub shapes: Vec<Shape>,
}

impl Scene {
    /// Snapshot the world: players, ball, goals, then the score line
    pub fn from_world(world: &World, palette: &Palette, fps: Option<u32>) -> Self {
        let arena = &world.arena;
        let goal_size = Vec2::new(GOAL_WIDTH, arena.goal_height);
        let goal_y = arena.height - arena.goal_height;

        let mut shapes = Vec::with_capacity(9);
        shapes.push(Shape::Clear {
            background: palette.background,
        });
        shapes.push(Shape::Rect {
            pos: world.left.pos,
            size: world.left.size,
            color: palette.left_player,
        });
        shapes.push(Shape::Rect {
            pos: world.right.pos,
            size: world.right.size,
            color: palette.right_player,
        });
        shapes.push(Shape::Circle {
            center: world.ball.pos,
            radius: world.ball.radius,
            color: palette.ball,
        });
        shapes.push(Shape::Rect {
            pos: Vec2::new(0.0, goal_y),
            size: goal_size,
            color: palette.goal,
        });
        shapes.push(Shape::Rect {
            pos: Vec2::new(arena.width - GOAL_WIDTH, goal_y),
            size: goal_size,
            color: palette.goal,
        });
        shapes.push(Shape::Text {
            pos: LEFT_SCORE_POS,
            text: format!("Left Player: {}", world.score.left),
            color: palette.text,
            font: HUD_FONT,
        });
        shapes.push(Shape::Text {
            pos: Vec2::new(arena.width - RIGHT_SCORE_INSET, LEFT_SCORE_POS.y),
            text: format!("Right Player: {}", world.score.right),
            color: palette.text,
            font: HUD_FONT,
        });
        if let Some(fps) = fps {
            shapes.push(Shape::Text {
                pos: Vec2::new(arena.width / 2.0 - 30.0, LEFT_SCORE_POS.y + FPS_OFFSET_Y),
                text: format!("{fps} FPS"),
                color: palette.text,
                font: HUD_FONT,
            });
        }

        Self {
            width: arena.width,
            height: arena.height,
            shapes,
        }
    }

    /// All text lines, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.shapes.iter().filter_map(|s| match s {
            Shape::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
