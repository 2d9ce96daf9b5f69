//! Keyboard classification
//!
//! Arrows and WASD both move; R restarts. Matching is on the key value
//! (`KeyboardEvent.key`), case-insensitive, never on scan codes.

use crate::sim::Direction;

/// What a key press asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Restart,
}

/// Map a key value to a command
pub fn classify_key(key: &str) -> Option<Command> {
    match key.to_ascii_lowercase().as_str() {
        "arrowup" | "w" => Some(Command::Move(Direction::Up)),
        "arrowdown" | "s" => Some(Command::Move(Direction::Down)),
        "arrowleft" | "a" => Some(Command::Move(Direction::Left)),
        "arrowright" | "d" => Some(Command::Move(Direction::Right)),
        "r" => Some(Command::Restart),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_layouts() {
        assert_eq!(classify_key("ArrowUp"), Some(Command::Move(Direction::Up)));
        assert_eq!(classify_key("w"), Some(Command::Move(Direction::Up)));
        assert_eq!(classify_key("W"), Some(Command::Move(Direction::Up)));
        assert_eq!(classify_key("ArrowDown"), Some(Command::Move(Direction::Down)));
        assert_eq!(classify_key("S"), Some(Command::Move(Direction::Down)));
        assert_eq!(classify_key("a"), Some(Command::Move(Direction::Left)));
        assert_eq!(classify_key("ArrowRight"), Some(Command::Move(Direction::Right)));
        assert_eq!(classify_key("D"), Some(Command::Move(Direction::Right)));
    }

    #[test]
    fn test_restart_key() {
        assert_eq!(classify_key("r"), Some(Command::Restart));
        assert_eq!(classify_key("R"), Some(Command::Restart));
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(classify_key(" "), None);
        assert_eq!(classify_key("Enter"), None);
        assert_eq!(classify_key("q"), None);
        assert_eq!(classify_key("Tab"), None);
    }
}
