//! Cell-buffer canvas: board units scaled onto a terminal grid

use game_core::{Canvas, Color, Config, Rect};

/// One terminal cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::rgb(255, 255, 255),
            bg: Color::rgb(0, 0, 0),
        }
    }
}

const BALL_GLYPH: char = '●';

pub struct CellCanvas {
    cols: i32,
    rows: i32,
    board_width: i32,
    board_height: i32,
    cells: Vec<Cell>,
}

impl CellCanvas {
    pub fn new(cols: u16, rows: u16, config: &Config) -> Self {
        let cols = i32::from(cols.max(1));
        let rows = i32::from(rows.max(1));
        Self {
            cols,
            rows,
            board_width: config.board_width,
            board_height: config.board_height,
            cells: vec![Cell::default(); (cols * rows) as usize],
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols as u16
    }

    pub fn rows(&self) -> u16 {
        self.rows as u16
    }

    #[cfg(test)]
    pub fn cell(&self, col: u16, row: u16) -> Option<&Cell> {
        let (col, row) = (i32::from(col), i32::from(row));
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells.get((row * self.cols + col) as usize)
    }

    /// Rows of cells, top to bottom
    pub fn lines(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols as usize)
    }

    fn col_of(&self, x: i32) -> i32 {
        x * self.cols / self.board_width
    }

    fn row_of(&self, y: i32) -> i32 {
        y * self.rows / self.board_height
    }

    /// Cells covered by `rect`, clipped to the grid. Anything on the board
    /// covers at least one cell.
    fn cover(&self, rect: Rect) -> (std::ops::Range<i32>, std::ops::Range<i32>) {
        let c0 = self.col_of(rect.x);
        let r0 = self.row_of(rect.y);
        let c1 = self.col_of(rect.right() - 1).max(c0) + 1;
        let r1 = self.row_of(rect.bottom() - 1).max(r0) + 1;
        (
            c0.clamp(0, self.cols)..c1.clamp(0, self.cols),
            r0.clamp(0, self.rows)..r1.clamp(0, self.rows),
        )
    }

    fn paint(&mut self, rect: Rect, mut f: impl FnMut(&mut Cell)) {
        let (cols, rows) = self.cover(rect);
        for row in rows {
            for col in cols.clone() {
                let index = (row * self.cols + col) as usize;
                f(&mut self.cells[index]);
            }
        }
    }
}

impl Canvas for CellCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.paint(rect, |cell| {
            cell.ch = ' ';
            cell.bg = color;
        });
    }

    fn fill_oval(&mut self, bounds: Rect, color: Color) {
        self.paint(bounds, |cell| {
            cell.ch = BALL_GLYPH;
            cell.fg = color;
        });
    }

    fn text_width(&self, text: &str, _size: u32) -> i32 {
        text.chars().count() as i32 * self.board_width / self.cols
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, size: u32, color: Color) {
        // Glyphs sit above the baseline; use the row through their middle
        let row = self.row_of(y - size as i32 / 2);
        if !(0..self.rows).contains(&row) {
            return;
        }
        let start = self.col_of(x);
        for (i, ch) in text.chars().enumerate() {
            let col = start + i as i32;
            if (0..self.cols).contains(&col) {
                let cell = &mut self.cells[(row * self.cols + col) as usize];
                cell.ch = ch;
                cell.fg = color;
            }
        }
    }
}
