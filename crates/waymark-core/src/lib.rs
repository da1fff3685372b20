pub mod input;
pub mod overlay;
pub mod render;
pub mod viewport;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::overlay::Banner;
    use crate::render::{Rect, Renderer};
    use crate::viewport::Viewport;

    /// Desktop-sized viewport: tall enough that proportional scaling stays off.
    pub fn wide_viewport() -> Viewport {
        Viewport::new(1920.0, 720.0)
    }

    /// Short viewport that puts proportional scaling into effect.
    pub fn short_viewport() -> Viewport {
        Viewport::new(800.0, 400.0)
    }

    /// Renderer that records every draw call for assertions.
    #[derive(Debug, Default)]
    pub struct RecordingRenderer {
        /// Number of full-surface clears issued.
        pub clears: usize,
        /// Rects drawn since the last clear, in call order.
        pub rects: Vec<(Rect, String)>,
    }

    impl Renderer for RecordingRenderer {
        fn clear(&mut self) {
            self.clears += 1;
            self.rects.clear();
        }

        fn fill_rect(&mut self, rect: Rect, color: &str) {
            self.rects.push((rect, color.to_string()));
        }
    }

    /// Banner that records messages instead of displaying them.
    #[derive(Debug, Default)]
    pub struct RecordingBanner {
        pub visible: bool,
        /// `(text, run_active)` pairs in the order they were shown.
        pub messages: Vec<(String, bool)>,
    }

    impl Banner for RecordingBanner {
        fn show(&mut self, text: &str, run_active: bool) {
            self.messages.push((text.to_string(), run_active));
        }

        fn set_visible(&mut self, visible: bool) {
            self.visible = visible;
        }
    }
}
