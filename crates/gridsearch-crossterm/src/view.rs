//! Lays the comparison out on a [`Screen`]: BFS board on the left, live
//! statistics in the middle, DFS board on the right, key help underneath.

use gridsearch_core::Point;
use gridsearch_viz::{Board, CellState, Comparison, ComparisonKeys, Side};

use crate::screen::{Color, Glyph, Screen};

/// Terminal columns per grid cell, so cells come out roughly square.
const CELL_W: i32 = 2;
const BOARD_TOP: i32 = 2;
const MARGIN: i32 = 1;
const PANEL_W: i32 = 24;
/// Width of the longest board caption, `"DFS (right)"`.
const CAPTION_W: i32 = 11;

const TITLE: &str = "Comparative BFS vs DFS - step by step";

const WHITE: Color = Color::from_rgb(255, 255, 255);
const BLACK: Color = Color::from_rgb(0, 0, 0);
const WALL: Color = Color::from_rgb(48, 48, 48);
const GREEN: Color = Color::from_rgb(0, 170, 0);
const RED: Color = Color::from_rgb(200, 0, 0);
const YELLOW: Color = Color::from_rgb(255, 220, 0);
const BLUE: Color = Color::from_rgb(60, 100, 230);
const ORANGE: Color = Color::from_rgb(255, 150, 0);
const GOLD: Color = Color::from_rgb(212, 175, 55);

/// Background colour of a cell. Visited cells are tinted per side so the
/// two explorations are easy to tell apart.
pub fn cell_color(state: CellState, bfs_side: bool) -> Color {
    match state {
        CellState::Free => WHITE,
        CellState::Obstacle => WALL,
        CellState::Current => YELLOW,
        CellState::Visited if bfs_side => BLUE,
        CellState::Visited => ORANGE,
        CellState::Path => GOLD,
        CellState::Start => GREEN,
        CellState::Goal => RED,
    }
}

/// Screen positions of the three columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub bfs_col: i32,
    pub panel_col: i32,
    pub dfs_col: i32,
    pub rows: i32,
    pub cols: i32,
}

impl Layout {
    /// Layout for a grid of `rows` × `cols` cells.
    pub fn new(rows: i32, cols: i32) -> Self {
        let board_w = (cols * CELL_W).max(CAPTION_W);
        let bfs_col = MARGIN;
        let panel_col = bfs_col + board_w + 2 * MARGIN;
        let dfs_col = panel_col + PANEL_W + MARGIN;
        Self {
            bfs_col,
            panel_col,
            dfs_col,
            rows,
            cols,
        }
    }

    /// Row of the board captions.
    pub fn caption_row(&self) -> i32 {
        BOARD_TOP + self.rows + 1
    }

    /// Row of the key help line.
    pub fn help_row(&self) -> i32 {
        (self.caption_row() + 2).max(BOARD_TOP + PANEL_LINES + 1)
    }

    /// Total screen size as (rows, cols).
    pub fn size(&self, help_len: usize) -> (i32, i32) {
        let board_w = (self.cols * CELL_W).max(CAPTION_W);
        let width = (self.dfs_col + board_w + MARGIN).max(help_len as i32 + 2 * MARGIN);
        (self.help_row() + 1, width)
    }

    /// Screen position of the left half of grid cell `p` on a board whose
    /// left edge is `col`.
    pub fn cell(&self, col: i32, p: Point) -> Point {
        Point::new(BOARD_TOP + p.row, col + p.col * CELL_W)
    }
}

/// Lines in the statistics panel.
const PANEL_LINES: i32 = 16;

/// Render the whole view.
pub fn draw(cmp: &Comparison, keys: &ComparisonKeys) -> Screen {
    let grid = cmp.bfs().board().grid();
    let layout = Layout::new(grid.rows(), grid.cols());
    let help = keys.help_line();
    let (rows, cols) = layout.size(help.chars().count());
    let mut screen = Screen::new(rows, cols);

    screen.text(Point::new(0, MARGIN), TITLE, Color::DEFAULT, true);

    draw_board(&mut screen, &layout, layout.bfs_col, cmp.bfs().board(), true);
    draw_board(&mut screen, &layout, layout.dfs_col, cmp.dfs().board(), false);
    screen.text(
        Point::new(layout.caption_row(), layout.bfs_col),
        &format!("{} (left)", cmp.bfs().algorithm()),
        Color::DEFAULT,
        true,
    );
    screen.text(
        Point::new(layout.caption_row(), layout.dfs_col),
        &format!("{} (right)", cmp.dfs().algorithm()),
        Color::DEFAULT,
        true,
    );

    draw_panel(&mut screen, &layout, cmp);
    screen.text(
        Point::new(layout.help_row(), MARGIN),
        &help,
        Color::DEFAULT,
        false,
    );
    screen
}

fn draw_board(screen: &mut Screen, layout: &Layout, col: i32, board: &Board, bfs_side: bool) {
    for p in board.grid().bounds() {
        let state = board.at(p);
        let bg = cell_color(state, bfs_side);
        let label = match state {
            CellState::Start => 'S',
            CellState::Goal => 'G',
            _ => ' ',
        };
        let at = layout.cell(col, p);
        for dx in 0..CELL_W {
            screen.set(
                at.shift(0, dx),
                Glyph {
                    ch: if dx == 0 { label } else { ' ' },
                    fg: BLACK,
                    bg,
                    bold: true,
                },
            );
        }
    }
}

fn state_label(cmp: &Comparison) -> &'static str {
    if cmp.is_finished() {
        "finished"
    } else if cmp.is_running() {
        "running"
    } else if cmp.sides().iter().all(|s| s.stats().started.is_none()) {
        "ready"
    } else {
        "paused"
    }
}

fn draw_panel(screen: &mut Screen, layout: &Layout, cmp: &Comparison) {
    let mut row = BOARD_TOP;
    let mut line = |screen: &mut Screen, s: &str, bold: bool| {
        screen.text(Point::new(row, layout.panel_col), s, Color::DEFAULT, bold);
        row += 1;
    };
    line(screen, "Live Statistics", true);
    for side in cmp.sides() {
        line(screen, "", false);
        panel_side(screen, side, &mut line);
    }
    line(screen, "", false);
    line(screen, &format!("Delay: {} ms", cmp.delay().as_millis()), false);
    line(screen, &format!("State: {}", state_label(cmp)), false);
}

fn panel_side(screen: &mut Screen, side: &Side, line: &mut impl FnMut(&mut Screen, &str, bool)) {
    for (i, text) in side.stats().lines(side.algorithm()).iter().enumerate() {
        line(screen, text, i == 0);
    }
}
