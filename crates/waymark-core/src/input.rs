/// Logical buttons the simulation understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Jump,
}

impl Key {
    /// Map a host key code to a logical button.
    ///
    /// Returns `None` for anything unrecognized; callers drop those events,
    /// making input handling a total function over arbitrary key names.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" | "KeyA" => Some(Key::Left),
            "ArrowRight" | "KeyD" => Some(Key::Right),
            "ArrowUp" | "Space" | "Spacebar" | " " => Some(Key::Jump),
            _ => None,
        }
    }
}

/// A discrete press or release delivered by the host input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Pressed(Key),
    Released(Key),
}

impl InputEvent {
    /// Build an event from a host key code and pressed state.
    pub fn from_code(code: &str, pressed: bool) -> Option<Self> {
        let key = Key::from_code(code)?;
        Some(if pressed {
            InputEvent::Pressed(key)
        } else {
            InputEvent::Released(key)
        })
    }
}
