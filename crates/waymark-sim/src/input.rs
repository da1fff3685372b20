use serde::{Deserialize, Serialize};

use waymark_core::input::{InputEvent, Key};

/// Current held state of the two directional controls. No queueing;
/// last write per key wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
}

impl InputState {
    /// Drop every held direction, used when the run freezes.
    pub fn release_all(&mut self) {
        self.left = false;
        self.right = false;
    }
}

/// Input events received between ticks, applied at the next tick boundary.
///
/// Direction presses and releases collapse into the held flags, but jump
/// triggers are counted rather than latched: a press-and-release arriving
/// within one tick must still jump, and two presses jump twice.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Apply every queued event to `state` in arrival order, returning the
    /// number of jump triggers.
    pub fn drain_into(&mut self, state: &mut InputState) -> u32 {
        let mut jumps = 0;
        for event in self.events.drain(..) {
            match event {
                InputEvent::Pressed(Key::Left) => state.left = true,
                InputEvent::Released(Key::Left) => state.left = false,
                InputEvent::Pressed(Key::Right) => state.right = true,
                InputEvent::Released(Key::Right) => state.right = false,
                InputEvent::Pressed(Key::Jump) => jumps += 1,
                InputEvent::Released(Key::Jump) => {},
            }
        }
        jumps
    }
}
