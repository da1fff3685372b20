use waymark_core::viewport::Viewport;

use crate::input::InputState;
use crate::physics::SimConfig;

/// Horizontal motion decision for one tick: either the player moves or the
/// world scrolls, never both.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Steer {
    /// Horizontal velocity to give the player this tick.
    pub vx: f32,
    /// Uniform shift to apply to every platform and checkpoint this tick.
    pub world_dx: f32,
}

/// Camera with a horizontal dead-zone.
///
/// Inside `[back_limit, forward_limit]` directional input moves the player
/// and leaves the world alone; at a boundary the same input scrolls the
/// world the opposite way instead, keeping the player inside the band.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    speed: f32,
    back_limit: f32,
    forward_limit: f32,
}

impl Camera {
    pub fn new(config: &SimConfig, viewport: Viewport) -> Self {
        Self {
            speed: config.move_speed,
            back_limit: viewport.proportional(config.scroll_back_limit),
            forward_limit: viewport.proportional(config.scroll_forward_limit),
        }
    }

    /// Decide this tick's horizontal motion from the held keys and the
    /// player's current x. Right input wins when both keys are held.
    pub fn steer(&self, input: &InputState, player_x: f32) -> Steer {
        if input.right {
            if player_x < self.forward_limit {
                Steer {
                    vx: self.speed,
                    world_dx: 0.0,
                }
            } else {
                Steer {
                    vx: 0.0,
                    world_dx: -self.speed,
                }
            }
        } else if input.left {
            if player_x > self.back_limit {
                Steer {
                    vx: -self.speed,
                    world_dx: 0.0,
                }
            } else {
                Steer {
                    vx: 0.0,
                    world_dx: self.speed,
                }
            }
        } else {
            Steer::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waymark_core::test_helpers::wide_viewport;

    fn camera() -> Camera {
        Camera::new(&SimConfig::default(), wide_viewport())
    }

    fn held(left: bool, right: bool) -> InputState {
        InputState { left, right }
    }

    #[test]
    fn right_inside_dead_zone_moves_player() {
        let steer = camera().steer(&held(false, true), 399.0);
        assert_eq!(steer.vx, 5.0);
        assert_eq!(steer.world_dx, 0.0);
    }

    #[test]
    fn right_at_forward_limit_scrolls_world() {
        let steer = camera().steer(&held(false, true), 400.0);
        assert_eq!(steer.vx, 0.0);
        assert_eq!(steer.world_dx, -5.0);
    }

    #[test]
    fn left_inside_dead_zone_moves_player() {
        let steer = camera().steer(&held(true, false), 101.0);
        assert_eq!(steer.vx, -5.0);
        assert_eq!(steer.world_dx, 0.0);
    }

    #[test]
    fn left_at_back_limit_scrolls_world() {
        let steer = camera().steer(&held(true, false), 100.0);
        assert_eq!(steer.vx, 0.0);
        assert_eq!(steer.world_dx, 5.0);
    }

    #[test]
    fn right_wins_when_both_held() {
        let steer = camera().steer(&held(true, true), 200.0);
        assert_eq!(steer.vx, 5.0);
    }

    #[test]
    fn no_keys_means_no_motion() {
        assert_eq!(camera().steer(&held(false, false), 250.0), Steer::default());
    }

    #[test]
    fn limits_scale_with_short_viewports() {
        use waymark_core::test_helpers::short_viewport;
        let camera = Camera::new(&SimConfig::default(), short_viewport());
        // forward limit scales to 400 * 400/500 = 320
        let steer = camera.steer(&held(false, true), 320.0);
        assert_eq!(steer.world_dx, -5.0);
        let steer = camera.steer(&held(false, true), 319.0);
        assert_eq!(steer.vx, 5.0);
    }
}
