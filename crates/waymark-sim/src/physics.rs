use serde::{Deserialize, Serialize};

use waymark_core::viewport::Viewport;

use crate::layout::Platform;

/// Downward acceleration applied each tick while airborne.
pub const GRAVITY: f32 = 0.5;
/// Horizontal speed while a direction key steers inside the dead-zone.
pub const MOVE_SPEED: f32 = 5.0;
/// Upward velocity delta applied per jump trigger.
pub const JUMP_IMPULSE: f32 = 8.0;
/// Nominal player edge length (the player is square).
pub const PLAYER_SIZE: f32 = 40.0;
/// Nominal player spawn position.
pub const SPAWN_X: f32 = 10.0;
pub const SPAWN_Y: f32 = 400.0;
/// Platform width in viewport units (not proportionally scaled).
pub const PLATFORM_WIDTH: f32 = 200.0;
/// Nominal platform height.
pub const PLATFORM_HEIGHT: f32 = 40.0;
/// Nominal checkpoint dimensions.
pub const CHECKPOINT_WIDTH: f32 = 40.0;
pub const CHECKPOINT_HEIGHT: f32 = 70.0;
/// Nominal camera dead-zone bounds: the player moves freely between these,
/// and the world scrolls instead once a bound is reached.
pub const SCROLL_BACK_LIMIT: f32 = 100.0;
pub const SCROLL_FORWARD_LIMIT: f32 = 400.0;

/// Configurable simulation parameters, loadable from TOML.
///
/// All sizes and positions are nominal; viewport-proportional scaling is
/// applied where appropriate when the world is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub gravity: f32,
    pub move_speed: f32,
    pub jump_impulse: f32,
    pub player_size: f32,
    pub spawn_x: f32,
    pub spawn_y: f32,
    pub platform_width: f32,
    pub platform_height: f32,
    pub checkpoint_width: f32,
    pub checkpoint_height: f32,
    pub scroll_back_limit: f32,
    pub scroll_forward_limit: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            move_speed: MOVE_SPEED,
            jump_impulse: JUMP_IMPULSE,
            player_size: PLAYER_SIZE,
            spawn_x: SPAWN_X,
            spawn_y: SPAWN_Y,
            platform_width: PLATFORM_WIDTH,
            platform_height: PLATFORM_HEIGHT,
            checkpoint_width: CHECKPOINT_WIDTH,
            checkpoint_height: CHECKPOINT_HEIGHT,
            scroll_back_limit: SCROLL_BACK_LIMIT,
            scroll_forward_limit: SCROLL_FORWARD_LIMIT,
        }
    }
}

impl SimConfig {
    /// Load config from a TOML file. Falls back to defaults if the file is
    /// missing or unparseable.
    pub fn load() -> Self {
        let path = std::env::var("WAYMARK_SIM_CONFIG")
            .unwrap_or_else(|_| "config/waymark.toml".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<SimConfig>(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    SimConfig::default()
                },
            },
            Err(_) => SimConfig::default(),
        }
    }
}

/// The player body. Position is the top-left corner; y grows downward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Constant for the lifetime of a run.
    pub width: f32,
    pub height: f32,
}

impl Player {
    pub fn new(config: &SimConfig, viewport: Viewport) -> Self {
        Self {
            x: viewport.proportional(config.spawn_x),
            y: viewport.proportional(config.spawn_y),
            vx: 0.0,
            vy: 0.0,
            width: viewport.proportional(config.player_size),
            height: viewport.proportional(config.player_size),
        }
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Advance position by the current velocity, then recompute vertical
    /// velocity for the next tick.
    ///
    /// While the projected bottom edge stays inside the viewport, gravity
    /// accumulates; a player above the top edge snaps back to 0 so a jump
    /// off-screen cannot build runaway upward drift. A projected bottom
    /// past the viewport floor rests there with zero vertical velocity.
    /// Horizontal position is clamped to stay one player-width off the
    /// left edge and two off the right.
    pub fn integrate(&mut self, gravity: f32, viewport: Viewport) {
        self.x += self.vx;
        self.y += self.vy;

        if self.y + self.height + self.vy <= viewport.height {
            if self.y < 0.0 {
                self.y = 0.0;
                self.vy = gravity;
            }
            self.vy += gravity;
        } else {
            self.vy = 0.0;
        }

        if self.x < self.width {
            self.x = self.width;
        }
        if self.x >= viewport.width - 2.0 * self.width {
            self.x = viewport.width - 2.0 * self.width;
        }
    }
}

/// Test the player against every platform, in list order.
///
/// Two rule sets per platform. Landing: the bottom edge is at or above the
/// platform top and would reach it this tick, with the horizontal span
/// inside the platform's — the player rests and the second rule set is
/// skipped for that platform. Penetration: vertical overlap with the same
/// horizontal span — the player is snapped relative to the platform top
/// and vertical velocity re-arms to `gravity` so edges push off smoothly.
///
/// Later platforms in the list overwrite earlier matches within a tick.
/// The horizontal margins are asymmetric on purpose (half a player width
/// of grace on the left, a third on the right); keep them that way.
pub fn resolve_platform_collisions(player: &mut Player, platforms: &[Platform], gravity: f32) {
    let half_w = player.width / 2.0;
    let third_w = player.width / 3.0;

    for platform in platforms {
        let in_span = player.x >= platform.x - half_w
            && player.x <= platform.x + platform.width - third_w;
        if !in_span {
            continue;
        }

        let lands = player.bottom() <= platform.y && player.bottom() + player.vy >= platform.y;
        if lands {
            player.vy = 0.0;
            continue;
        }

        let penetrates = player.bottom() >= platform.y && player.y <= platform.y + platform.height;
        if penetrates {
            player.y = platform.y + player.height;
            player.vy = gravity;
        }
    }
}
