//! Keys, actions, and bindings
//!
//! The host reports physical keys; components only ever see `Action`s.

use serde::{Deserialize, Serialize};

/// Physical keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
    Enter,
    W,
    A,
    S,
    D,
}

impl Key {
    /// Name shown to the player in prompts
    pub fn as_str(&self) -> &'static str {
        match self {
            Key::ArrowUp => "Up",
            Key::ArrowDown => "Down",
            Key::ArrowLeft => "Left",
            Key::ArrowRight => "Right",
            Key::Space => "Space",
            Key::Enter => "Enter",
            Key::W => "W",
            Key::A => "A",
            Key::S => "S",
            Key::D => "D",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "arrowup" => Some(Key::ArrowUp),
            "down" | "arrowdown" => Some(Key::ArrowDown),
            "left" | "arrowleft" => Some(Key::ArrowLeft),
            "right" | "arrowright" => Some(Key::ArrowRight),
            "space" => Some(Key::Space),
            "enter" | "return" => Some(Key::Enter),
            "w" => Some(Key::W),
            "a" => Some(Key::A),
            "s" => Some(Key::S),
            "d" => Some(Key::D),
            _ => None,
        }
    }
}

/// Tilt direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Slot in per-direction flag arrays
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

/// Game actions a key can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Tilt the player object
    Tilt(Direction),
    /// Next level / restart after the game is won
    Continue,
    /// Hop the player object up and back down
    Bob,
}

impl Action {
    /// Navigation actions trigger the movement sound
    pub fn is_navigation(&self) -> bool {
        matches!(self, Action::Tilt(_) | Action::Continue)
    }
}

/// Key bindings. A key may drive more than one action (Space is both
/// Continue and Bob by default).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub up: Key,
    pub down: Key,
    pub left: Key,
    pub right: Key,
    #[serde(rename = "continue")]
    pub continue_key: Key,
    pub bob: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            up: Key::ArrowUp,
            down: Key::ArrowDown,
            left: Key::ArrowLeft,
            right: Key::ArrowRight,
            continue_key: Key::Space,
            bob: Key::Space,
        }
    }
}

impl KeyBindings {
    /// Key bound to a tilt direction
    pub fn direction_key(&self, dir: Direction) -> Key {
        match dir {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// All actions bound to `key`, in a stable order
    pub fn actions(&self, key: Key) -> Vec<Action> {
        let mut actions: Vec<Action> = Direction::ALL
            .into_iter()
            .filter(|&dir| self.direction_key(dir) == key)
            .map(Action::Tilt)
            .collect();
        if self.continue_key == key {
            actions.push(Action::Continue);
        }
        if self.bob == key {
            actions.push(Action::Bob);
        }
        actions
    }
}

/// Per-direction held flags. A direction fires once per press and re-arms
/// only after its release, so OS key repeat never retriggers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldDirections {
    held: [bool; 4],
}

impl HeldDirections {
    /// Mark `dir` held. Returns true only on a fresh press.
    pub fn press(&mut self, dir: Direction) -> bool {
        let slot = &mut self.held[dir.index()];
        if *slot {
            return false;
        }
        *slot = true;
        true
    }

    pub fn release(&mut self, dir: Direction) {
        self.held[dir.index()] = false;
    }

    pub fn is_held(&self, dir: Direction) -> bool {
        self.held[dir.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_space_is_continue_and_bob() {
        let keys = KeyBindings::default();
        assert_eq!(keys.actions(Key::Space), vec![Action::Continue, Action::Bob]);
        assert_eq!(
            keys.actions(Key::ArrowLeft),
            vec![Action::Tilt(Direction::Left)]
        );
        assert!(keys.actions(Key::W).is_empty());
    }

    #[test]
    fn test_navigation_actions() {
        assert!(Action::Tilt(Direction::Up).is_navigation());
        assert!(Action::Continue.is_navigation());
        assert!(!Action::Bob.is_navigation());
    }

    #[test]
    fn test_held_directions_debounce() {
        let mut held = HeldDirections::default();
        assert!(held.press(Direction::Up));
        assert!(!held.press(Direction::Up));
        assert!(held.is_held(Direction::Up));
        held.release(Direction::Up);
        assert!(held.press(Direction::Up));
    }

    #[test]
    fn test_key_from_str() {
        assert_eq!(Key::from_str("SPACE"), Some(Key::Space));
        assert_eq!(Key::from_str("up"), Some(Key::ArrowUp));
        assert_eq!(Key::from_str("f13"), None);
    }

    #[test]
    fn test_bindings_json_partial() {
        let keys: KeyBindings = serde_json::from_str(r#"{ "continue": "Enter" }"#).unwrap();
        assert_eq!(keys.continue_key, Key::Enter);
        assert_eq!(keys.bob, Key::Space);
        assert_eq!(keys.actions(Key::Space), vec![Action::Bob]);
    }
}
