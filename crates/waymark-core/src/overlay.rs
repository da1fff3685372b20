/// Auto-dismiss delay for banner messages shown while a run is active,
/// in seconds. Owned by the overlay, not the simulation.
pub const BANNER_AUTO_HIDE_SECS: u64 = 2;

/// UI overlay the simulation surfaces progress messages to.
///
/// Implementations own presentation policy: messages shown while the run
/// is still active auto-dismiss after [`BANNER_AUTO_HIDE_SECS`]; messages
/// shown after the run has ended stay up.
pub trait Banner {
    /// Display `text`. `run_active` tells the overlay whether its
    /// auto-dismiss timer applies.
    fn show(&mut self, text: &str, run_active: bool);

    /// Toggle the overlay display, flipped when a run starts or stops.
    fn set_visible(&mut self, visible: bool);
}
