//! Front-end independent key input and the comparison's key bindings.

use std::fmt;

/// A keyboard key, as reported by a front-end.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Escape,
    Enter,
    Tab,
    Space,
    Backspace,
    /// A printable character.
    Char(char),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::ArrowUp => f.write_str("Up"),
            Key::ArrowDown => f.write_str("Down"),
            Key::ArrowLeft => f.write_str("Left"),
            Key::ArrowRight => f.write_str("Right"),
            Key::Escape => f.write_str("Esc"),
            Key::Enter => f.write_str("Enter"),
            Key::Tab => f.write_str("Tab"),
            Key::Space | Key::Char(' ') => f.write_str("Space"),
            Key::Backspace => f.write_str("Backspace"),
            Key::Char(c) => write!(f, "{c}"),
        }
    }
}

/// Something the user asked the comparison to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Advance both searches by one expansion.
    Step,
    /// Advance continuously at the current delay.
    Run,
    /// Stop continuous running, keeping all progress.
    Pause,
    /// Throw both searches away and start over.
    Reset,
    /// Shorten the delay between ticks.
    Faster,
    /// Lengthen the delay between ticks.
    Slower,
    Quit,
}

/// Key bindings for the comparison view.
#[derive(Debug, Clone)]
pub struct ComparisonKeys {
    pub step: Vec<Key>,
    pub run: Vec<Key>,
    pub pause: Vec<Key>,
    pub reset: Vec<Key>,
    pub faster: Vec<Key>,
    pub slower: Vec<Key>,
    pub quit: Vec<Key>,
}

impl Default for ComparisonKeys {
    fn default() -> Self {
        Self {
            step: vec![Key::Char('n'), Key::ArrowRight, Key::Enter],
            run: vec![Key::Char('r')],
            pause: vec![Key::Space, Key::Char(' '), Key::Char('p')],
            reset: vec![Key::Char('x')],
            faster: vec![Key::Char('+'), Key::Char('=')],
            slower: vec![Key::Char('-')],
            quit: vec![Key::Escape, Key::Char('q'), Key::Char('Q')],
        }
    }
}

impl ComparisonKeys {
    /// The action bound to `key`, if any.
    pub fn action(&self, key: &Key) -> Option<Action> {
        let table: [(&[Key], Action); 7] = [
            (self.quit.as_slice(), Action::Quit),
            (self.step.as_slice(), Action::Step),
            (self.run.as_slice(), Action::Run),
            (self.pause.as_slice(), Action::Pause),
            (self.reset.as_slice(), Action::Reset),
            (self.faster.as_slice(), Action::Faster),
            (self.slower.as_slice(), Action::Slower),
        ];
        table
            .into_iter()
            .find(|(keys, _)| keys.contains(key))
            .map(|(_, a)| a)
    }

    /// One-line summary of the primary binding of each action.
    pub fn help_line(&self) -> String {
        fn first(keys: &[Key]) -> String {
            keys.first().map(Key::to_string).unwrap_or_default()
        }
        format!(
            "[{}] step  [{}] run  [{}] pause  [{}] reset  [{}/{}] delay  [{}] quit",
            first(&self.step),
            first(&self.run),
            first(&self.pause),
            first(&self.reset),
            first(&self.faster),
            first(&self.slower),
            first(&self.quit),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings() {
        let keys = ComparisonKeys::default();
        assert_eq!(keys.action(&Key::Char('n')), Some(Action::Step));
        assert_eq!(keys.action(&Key::ArrowRight), Some(Action::Step));
        assert_eq!(keys.action(&Key::Char('r')), Some(Action::Run));
        assert_eq!(keys.action(&Key::Char(' ')), Some(Action::Pause));
        assert_eq!(keys.action(&Key::Char('x')), Some(Action::Reset));
        assert_eq!(keys.action(&Key::Char('+')), Some(Action::Faster));
        assert_eq!(keys.action(&Key::Char('-')), Some(Action::Slower));
        assert_eq!(keys.action(&Key::Escape), Some(Action::Quit));
        assert_eq!(keys.action(&Key::Char('z')), None);
    }

    #[test]
    fn help_line_uses_first_binding() {
        let line = ComparisonKeys::default().help_line();
        assert!(line.starts_with("[n] step  [r] run  [Space] pause"));
        assert!(line.ends_with("[Esc] quit"));
    }
}
