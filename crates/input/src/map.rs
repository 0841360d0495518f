//! Key mapping from terminal events to stopwatch actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Everything the stopwatch screen reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopwatchAction {
    StartStop,
    Reset,
    Lap,
    /// Cycle to the next dot-matrix style.
    NextStyle,
    Quit,
}

/// Map a key press to an action.
///
/// | Key | Action |
/// |-----|--------|
/// | Space, Enter, `s` | start / stop |
/// | `r`, Backspace | reset |
/// | `l` | lap |
/// | Tab, `f` | next style |
/// | `q`, Esc, Ctrl-C | quit |
pub fn handle_key_event(key: KeyEvent) -> Option<StopwatchAction> {
    if should_quit(key) {
        return Some(StopwatchAction::Quit);
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(StopwatchAction::StartStop)
        }
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Backspace => Some(StopwatchAction::Reset),
        KeyCode::Char('l') | KeyCode::Char('L') => Some(StopwatchAction::Lap),
        KeyCode::Tab | KeyCode::Char('f') | KeyCode::Char('F') => Some(StopwatchAction::NextStyle),
        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_stop_keys() {
        for code in [KeyCode::Char(' '), KeyCode::Enter, KeyCode::Char('S')] {
            assert_eq!(
                handle_key_event(KeyEvent::from(code)),
                Some(StopwatchAction::StartStop)
            );
        }
    }

    #[test]
    fn test_reset_and_lap_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(StopwatchAction::Reset)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Backspace)),
            Some(StopwatchAction::Reset)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('L'))),
            Some(StopwatchAction::Lap)
        );
    }

    #[test]
    fn test_style_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Tab)),
            Some(StopwatchAction::NextStyle)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(StopwatchAction::Quit)
        );
    }
}
