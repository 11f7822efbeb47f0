//! Logical input state
//!
//! The host translates raw key events into logical actions; the
//! simulation only ever sees this boolean map.

/// Actions the player can hold down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Fire,
}

impl Action {
    const COUNT: usize = 3;

    /// Parse a host-side action identifier. Unknown names map to
    /// `None` and read as not-pressed.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "moveLeft" => Some(Action::MoveLeft),
            "moveRight" => Some(Action::MoveRight),
            "fire" => Some(Action::Fire),
            _ => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Boolean map of held actions, queried each step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    held: [bool; Action::COUNT],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, action: Action, pressed: bool) {
        self.held[action.index()] = pressed;
    }

    /// Update from a host identifier; unknown identifiers are ignored.
    pub fn set_key(&mut self, name: &str, pressed: bool) {
        if let Some(action) = Action::from_name(name) {
            self.set(action, pressed);
        }
    }

    pub fn is_pressed(&self, action: Action) -> bool {
        self.held[action.index()]
    }

    /// Release everything (host detach).
    pub fn clear(&mut self) {
        self.held = [false; Action::COUNT];
    }
}
