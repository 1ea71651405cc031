//! Crossterm terminal front-end for the BFS/DFS comparison.
//!
//! Provides a [`CrosstermDriver`] that puts the terminal into raw mode,
//! renders a [`Comparison`] with [`view::draw`], and runs a single-threaded
//! event loop: it waits for a key press for at most the time left until the
//! comparison's next tick, then polls the comparison and redraws.

pub mod screen;
pub mod view;

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    queue,
    style::{self, Attribute, Color as CtColor, Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use gridsearch_viz::{Comparison, ComparisonKeys, Key};

use crate::screen::{Color, Screen};

/// How long to wait for input when no tick is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Maps a [`screen::Color`] to a [`crossterm::style::Color`].
fn to_ct_color(c: Color) -> CtColor {
    if c == Color::DEFAULT {
        CtColor::Reset
    } else {
        let (r, g, b) = (c.r(), c.g(), c.b());
        CtColor::Rgb { r, g, b }
    }
}

/// Maps a crossterm [`KeyCode`] to a [`Key`].
fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Up => Some(Key::ArrowUp),
        KeyCode::Down => Some(Key::ArrowDown),
        KeyCode::Left => Some(Key::ArrowLeft),
        KeyCode::Right => Some(Key::ArrowRight),
        _ => None,
    }
}

/// Terminal input relevant to the comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Key(Key),
    /// The terminal was resized; everything must be redrawn.
    Resize,
}

/// A terminal back-end using crossterm.
pub struct CrosstermDriver {
    active: bool,
    prev: Option<Screen>,
}

impl CrosstermDriver {
    /// Create a new driver. The terminal is untouched until [`init`](Self::init).
    pub fn new() -> Self {
        Self {
            active: false,
            prev: None,
        }
    }

    /// Enter raw mode and the alternate screen.
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.active = true;
        let mut stdout = io::stdout();
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        stdout.flush()?;
        self.prev = None;
        Ok(())
    }

    /// Wait up to `timeout` for a key press or a resize.
    pub fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<Input>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        let input = match event::read()? {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press | KeyEventKind::Repeat,
                ..
            }) => to_key(code).map(Input::Key),
            Event::Resize(_, _) => Some(Input::Resize),
            _ => None,
        };
        Ok(input)
    }

    /// Draw `screen`, writing only the glyphs that changed since the last
    /// flush.
    pub fn flush(&mut self, screen: Screen) -> io::Result<()> {
        let mut stdout = io::stdout();
        let changes = screen.diff(self.prev.as_ref());
        for (p, g) in changes {
            queue!(
                stdout,
                cursor::MoveTo(p.col as u16, p.row as u16),
                SetForegroundColor(to_ct_color(g.fg)),
                SetBackgroundColor(to_ct_color(g.bg))
            )?;
            if g.bold {
                queue!(stdout, style::SetAttribute(Attribute::Bold))?;
            }
            queue!(stdout, Print(g.ch))?;
            if g.bold {
                queue!(stdout, style::SetAttribute(Attribute::Reset))?;
            }
        }
        queue!(stdout, style::ResetColor)?;
        stdout.flush()?;
        self.prev = Some(screen);
        Ok(())
    }

    /// Draw the current state of `cmp`.
    pub fn render(&mut self, cmp: &Comparison, keys: &ComparisonKeys) -> io::Result<()> {
        self.flush(view::draw(cmp, keys))
    }

    /// Forget the last frame and clear the terminal, forcing a full redraw.
    pub fn invalidate(&mut self) -> io::Result<()> {
        self.prev = None;
        let mut stdout = io::stdout();
        queue!(stdout, terminal::Clear(ClearType::All))?;
        stdout.flush()
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn close(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let mut stdout = io::stdout();
        let _ = queue!(
            stdout,
            style::ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = stdout.flush();
        let _ = terminal::disable_raw_mode();
    }

    /// Run the interactive comparison until the user quits.
    pub fn run(&mut self, cmp: &mut Comparison, keys: &ComparisonKeys) -> io::Result<()> {
        self.init()?;
        let result = self.event_loop(cmp, keys);
        self.close();
        result
    }

    fn event_loop(&mut self, cmp: &mut Comparison, keys: &ComparisonKeys) -> io::Result<()> {
        let mut dirty = true;
        loop {
            if cmp.poll(Instant::now()) {
                dirty = true;
            }
            if dirty {
                self.render(cmp, keys)?;
                dirty = false;
            }

            let timeout = cmp
                .next_deadline()
                .map_or(IDLE_POLL, |due| due.saturating_duration_since(Instant::now()));
            match self.poll_key(timeout)? {
                Some(Input::Key(key)) => {
                    let Some(action) = keys.action(&key) else {
                        continue;
                    };
                    log::debug!("key {key} -> {action:?}");
                    if !cmp.handle(action, Instant::now()) {
                        return Ok(());
                    }
                    dirty = true;
                }
                Some(Input::Resize) => {
                    self.invalidate()?;
                    dirty = true;
                }
                None => {}
            }
        }
    }
}

impl Default for CrosstermDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CrosstermDriver {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_mapping() {
        assert_eq!(to_key(KeyCode::Char(' ')), Some(Key::Space));
        assert_eq!(to_key(KeyCode::Char('n')), Some(Key::Char('n')));
        assert_eq!(to_key(KeyCode::Right), Some(Key::ArrowRight));
        assert_eq!(to_key(KeyCode::Esc), Some(Key::Escape));
        assert_eq!(to_key(KeyCode::F(1)), None);
    }

    #[test]
    fn color_mapping() {
        assert_eq!(to_ct_color(Color::DEFAULT), CtColor::Reset);
        assert_eq!(
            to_ct_color(Color::from_rgb(1, 2, 3)),
            CtColor::Rgb { r: 1, g: 2, b: 3 }
        );
    }

    #[test]
    fn bound_keys_reach_actions() {
        let keys = ComparisonKeys::default();
        for code in [KeyCode::Char(' '), KeyCode::Char('r'), KeyCode::Esc, KeyCode::Enter] {
            let key = to_key(code).unwrap();
            assert!(keys.action(&key).is_some(), "{key} unbound");
        }
    }
}
