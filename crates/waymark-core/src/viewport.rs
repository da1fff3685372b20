use serde::{Deserialize, Serialize};

/// Viewport height below which entity sizes scale down proportionally.
pub const SMALL_VIEWPORT_CUTOFF: f32 = 500.0;

/// Visible surface dimensions, fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Scale a nominal size for this viewport.
    ///
    /// Sizes pass through unchanged on viewports at least
    /// [`SMALL_VIEWPORT_CUTOFF`] tall; on shorter viewports they shrink
    /// proportionally, rounded up so thin entities never vanish.
    pub fn proportional(&self, size: f32) -> f32 {
        if self.height < SMALL_VIEWPORT_CUTOFF {
            (size * self.height / SMALL_VIEWPORT_CUTOFF).ceil()
        } else {
            size
        }
    }
}
