use crossterm::event::KeyCode;

/// A user command recognized by the stopwatch.
///
/// The mouse surface has dedicated `Start` and `Pause` buttons; the keyboard
/// binds a single key that flips between the two (`Toggle`). The two
/// surfaces are not symmetric.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Pause,
    Toggle,
    Reset,
    Lap,
    Quit,
}

/// Translate a key press into a command. Unbound keys map to nothing.
pub fn for_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Char('s') => Some(Command::Toggle),
        KeyCode::Char('r') => Some(Command::Reset),
        KeyCode::Char('l') => Some(Command::Lap),
        KeyCode::Char('q') => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_pause_key_is_a_toggle() {
        // A single key flips run state; only the mouse buttons are dedicated.
        assert_eq!(for_key(KeyCode::Char('s')), Some(Command::Toggle));
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(for_key(KeyCode::Char('r')), Some(Command::Reset));
        assert_eq!(for_key(KeyCode::Char('l')), Some(Command::Lap));
        assert_eq!(for_key(KeyCode::Char('q')), Some(Command::Quit));
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        assert_eq!(for_key(KeyCode::Char('S')), None); // lowercase only
        assert_eq!(for_key(KeyCode::Char('x')), None);
        assert_eq!(for_key(KeyCode::Esc), None);
        assert_eq!(for_key(KeyCode::Enter), None);
    }
}
