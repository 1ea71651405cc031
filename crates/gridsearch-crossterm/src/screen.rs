//! An off-screen character buffer and the diff used to flush it.

use gridsearch_core::{Point, Range};

/// An RGB colour packed into a `u32` (0x00RRGGBB).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    /// The terminal's own default colour.
    pub const DEFAULT: Self = Self(u32::MAX);

    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

/// One styled character on the screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Glyph {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
}

impl Default for Glyph {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::DEFAULT,
            bg: Color::DEFAULT,
            bold: false,
        }
    }
}

/// A rows × cols buffer of [`Glyph`]s, addressed by `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    bounds: Range,
    glyphs: Vec<Glyph>,
}

impl Screen {
    pub fn new(rows: i32, cols: i32) -> Self {
        let bounds = Range::with_size(rows, cols);
        Self {
            bounds,
            glyphs: vec![Glyph::default(); bounds.len()],
        }
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    fn idx(&self, p: Point) -> Option<usize> {
        self.bounds
            .contains(p)
            .then(|| (p.row * self.bounds.width() + p.col) as usize)
    }

    /// The glyph at `p`, or a blank one outside the screen.
    pub fn at(&self, p: Point) -> Glyph {
        self.idx(p).map(|i| self.glyphs[i]).unwrap_or_default()
    }

    /// Set the glyph at `p`. No-op outside the screen.
    pub fn set(&mut self, p: Point, g: Glyph) {
        if let Some(i) = self.idx(p) {
            self.glyphs[i] = g;
        }
    }

    /// Write `s` starting at `p`, clipped at the right edge.
    pub fn text(&mut self, p: Point, s: &str, fg: Color, bold: bool) {
        for (i, ch) in s.chars().enumerate() {
            self.set(
                p.shift(0, i as i32),
                Glyph {
                    ch,
                    fg,
                    bg: Color::DEFAULT,
                    bold,
                },
            );
        }
    }

    /// The text of row `row`, trailing blanks removed.
    pub fn line(&self, row: i32) -> String {
        let s: String = (0..self.bounds.width())
            .map(|col| self.at(Point::new(row, col)).ch)
            .collect();
        s.trim_end().to_string()
    }

    /// Glyphs that differ from `prev`, or every glyph if `prev` is `None`
    /// or has a different size.
    pub fn diff(&self, prev: Option<&Screen>) -> Vec<(Point, Glyph)> {
        let prev = prev.filter(|p| p.bounds == self.bounds);
        self.bounds
            .iter()
            .filter_map(|p| {
                let g = self.at(p);
                match prev {
                    Some(old) if old.at(p) == g => None,
                    _ => Some((p, g)),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_clipped() {
        let mut s = Screen::new(2, 4);
        s.text(Point::new(0, 1), "abcdef", Color::DEFAULT, false);
        assert_eq!(s.line(0), " abc");
        assert_eq!(s.line(1), "");
        assert_eq!(s.at(Point::new(5, 5)), Glyph::default());
    }

    #[test]
    fn diff_reports_changes_only() {
        let a = Screen::new(2, 3);
        let mut b = a.clone();
        b.text(Point::new(1, 2), "x", Color::from_rgb(1, 2, 3), true);
        let d = b.diff(Some(&a));
        assert_eq!(d.len(), 1);
        assert_eq!(d[0].0, Point::new(1, 2));
        assert_eq!(d[0].1.ch, 'x');
        assert!(b.diff(Some(&b)).is_empty());
        assert_eq!(b.diff(None).len(), 6);
        assert_eq!(b.diff(Some(&Screen::new(1, 1))).len(), 6);
    }

    #[test]
    fn color_components() {
        let c = Color::from_rgb(0x12, 0x34, 0x56);
        assert_eq!((c.r(), c.g(), c.b()), (0x12, 0x34, 0x56));
    }
}
