/// An axis-aligned rectangle in viewport coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Drawing surface the simulation renders into once per frame.
///
/// The sim only ever needs filled rectangles and a full-surface clear;
/// anything fancier (sprites, text) belongs to the embedding shell.
pub trait Renderer {
    /// Erase the full visible surface before a frame is drawn.
    fn clear(&mut self);

    /// Draw a filled rectangle. Zero-sized rects are valid no-ops.
    fn fill_rect(&mut self, rect: Rect, color: &str);
}
