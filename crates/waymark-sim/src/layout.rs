use serde::{Deserialize, Serialize};

use waymark_core::viewport::Viewport;

use crate::physics::SimConfig;

/// A nominal world position in a layout table. `x` is world-absolute;
/// `y` is scaled for the viewport when the world is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spot {
    pub x: f32,
    pub y: f32,
}

impl Spot {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Fixed world layout: platform and checkpoint positions in course order.
///
/// Layouts are input data, not generated. Checkpoint order here is the
/// claiming order, so keep the list sorted along the course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub platforms: Vec<Spot>,
    pub checkpoints: Vec<Spot>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            platforms: vec![
                Spot::new(500.0, 450.0),
                Spot::new(700.0, 400.0),
                Spot::new(850.0, 350.0),
                Spot::new(900.0, 350.0),
                Spot::new(1050.0, 150.0),
                Spot::new(2500.0, 450.0),
                Spot::new(2900.0, 400.0),
                Spot::new(3150.0, 350.0),
                Spot::new(3900.0, 450.0),
                Spot::new(4200.0, 400.0),
                Spot::new(4400.0, 200.0),
                Spot::new(4700.0, 150.0),
            ],
            checkpoints: vec![
                Spot::new(1170.0, 80.0),
                Spot::new(2900.0, 330.0),
                Spot::new(4800.0, 80.0),
            ],
        }
    }
}

/// A static platform. Shape is immutable; `x` moves only under world scroll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// An ordered progression marker. Claiming is one-way: a claimed checkpoint
/// is deactivated in place (zero-sized, moved off-screen) rather than
/// removed, so the previous-checkpoint gating keeps its ordinal index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub claimed: bool,
}

impl Checkpoint {
    /// Mark this checkpoint reached and take it out of every future
    /// collision test.
    pub fn claim(&mut self) {
        self.width = 0.0;
        self.height = 0.0;
        self.y = f32::INFINITY;
        self.claimed = true;
    }
}

/// Instantiate platforms from a layout for the given viewport.
pub fn build_platforms(layout: &Layout, config: &SimConfig, viewport: Viewport) -> Vec<Platform> {
    layout
        .platforms
        .iter()
        .map(|spot| Platform {
            x: spot.x,
            y: viewport.proportional(spot.y),
            width: config.platform_width,
            height: viewport.proportional(config.platform_height),
        })
        .collect()
}

/// Instantiate checkpoints from a layout for the given viewport.
pub fn build_checkpoints(
    layout: &Layout,
    config: &SimConfig,
    viewport: Viewport,
) -> Vec<Checkpoint> {
    layout
        .checkpoints
        .iter()
        .map(|spot| Checkpoint {
            x: spot.x,
            y: viewport.proportional(spot.y),
            width: viewport.proportional(config.checkpoint_width),
            height: viewport.proportional(config.checkpoint_height),
            claimed: false,
        })
        .collect()
}

/// Shift every platform and checkpoint horizontally by `dx`, applied
/// uniformly so the world stays rigid under camera scroll.
pub fn scroll_world(platforms: &mut [Platform], checkpoints: &mut [Checkpoint], dx: f32) {
    if dx == 0.0 {
        return;
    }
    for platform in platforms.iter_mut() {
        platform.x += dx;
    }
    for checkpoint in checkpoints.iter_mut() {
        checkpoint.x += dx;
    }
}
