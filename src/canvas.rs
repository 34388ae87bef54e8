//! Canvas port: the drawing surface every task renders into.
//!
//! Drawing is buffered: `draw` and `erase` mutate an in-memory cell grid
//! and never fail; `present` flushes the difference to the real terminal.
//! Draws outside the visible grid, or onto the reserved last row/column,
//! are silently ignored.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{Attribute, Print, SetAttribute},
    terminal, QueueableCommand,
};

use crate::entities::Emphasis;

pub trait Canvas {
    /// Current (rows, cols) extent of the surface.
    fn size(&self) -> (u16, u16);
    /// Put a glyph at (row, col); out-of-bounds positions are skipped.
    fn draw(&mut self, row: i32, col: i32, glyph: char, emphasis: Emphasis);
    /// Blank a cell; a no-op at positions that were never drawn.
    fn erase(&mut self, row: i32, col: i32);
    /// Queue an audible alert for the next `present`.
    fn beep(&mut self);
    /// Flush buffered changes to the underlying surface.
    fn present(&mut self) -> io::Result<()>;
    /// Adopt a new extent after a terminal resize; forces a full redraw.
    fn resize(&mut self, rows: u16, cols: u16);
}

type Cell = (char, Emphasis);

const BLANK: Cell = (' ', Emphasis::Normal);

/// Whether (row, col) lies inside the drawable area.  The last row and
/// column are reserved, matching terminals that misbehave when the
/// bottom-right corner is written.
fn in_bounds(row: i32, col: i32, rows: u16, cols: u16) -> bool {
    row >= 0 && col >= 0 && row + 1 < rows as i32 && col + 1 < cols as i32
}

// ── Terminal backend ──────────────────────────────────────────────────────────

/// Double-buffered crossterm canvas: `present` emits cursor moves and
/// glyphs only for cells that changed since the previous frame.
pub struct TerminalCanvas<W: Write> {
    out: W,
    rows: u16,
    cols: u16,
    back: Vec<Cell>,
    front: Vec<Cell>,
    bell_pending: bool,
    full_redraw: bool,
}

impl<W: Write> TerminalCanvas<W> {
    pub fn new(out: W, rows: u16, cols: u16) -> Self {
        let area = rows as usize * cols as usize;
        TerminalCanvas {
            out,
            rows,
            cols,
            back: vec![BLANK; area],
            front: vec![BLANK; area],
            bell_pending: false,
            full_redraw: true,
        }
    }

    fn index(&self, row: i32, col: i32) -> usize {
        row as usize * self.cols as usize + col as usize
    }
}

impl<W: Write> Canvas for TerminalCanvas<W> {
    fn size(&self) -> (u16, u16) {
        (self.rows, self.cols)
    }

    fn draw(&mut self, row: i32, col: i32, glyph: char, emphasis: Emphasis) {
        if in_bounds(row, col, self.rows, self.cols) {
            let i = self.index(row, col);
            self.back[i] = (glyph, emphasis);
        }
    }

    fn erase(&mut self, row: i32, col: i32) {
        if in_bounds(row, col, self.rows, self.cols) {
            let i = self.index(row, col);
            self.back[i] = BLANK;
        }
    }

    fn beep(&mut self) {
        self.bell_pending = true;
    }

    fn present(&mut self) -> io::Result<()> {
        if self.full_redraw {
            self.out.queue(terminal::Clear(terminal::ClearType::All))?;
            self.front.fill(BLANK);
            self.full_redraw = false;
        }
        for row in 0..self.rows {
            for col in 0..self.cols {
                let i = row as usize * self.cols as usize + col as usize;
                if self.back[i] == self.front[i] {
                    continue;
                }
                let (glyph, emphasis) = self.back[i];
                self.out.queue(cursor::MoveTo(col, row))?;
                match emphasis {
                    Emphasis::Dim => {
                        self.out.queue(SetAttribute(Attribute::Dim))?;
                    }
                    Emphasis::Bold => {
                        self.out.queue(SetAttribute(Attribute::Bold))?;
                    }
                    Emphasis::Normal => {}
                }
                self.out.queue(Print(glyph))?;
                if emphasis != Emphasis::Normal {
                    self.out.queue(SetAttribute(Attribute::Reset))?;
                }
                self.front[i] = self.back[i];
            }
        }
        if self.bell_pending {
            self.out.queue(Print('\u{7}'))?;
            self.bell_pending = false;
        }
        // Park the cursor in a harmless spot before flushing
        self.out
            .queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        self.out.flush()
    }

    fn resize(&mut self, rows: u16, cols: u16) {
        self.rows = rows;
        self.cols = cols;
        let area = rows as usize * cols as usize;
        self.back = vec![BLANK; area];
        self.front = vec![BLANK; area];
        self.full_redraw = true;
    }
}

// ── In-memory backend ─────────────────────────────────────────────────────────

/// Headless canvas used by tests: same bounds rules as the terminal
/// backend, but cells and beeps are inspectable.
pub struct GridCanvas {
    rows: u16,
    cols: u16,
    cells: Vec<Cell>,
    pub beeps: u32,
}

impl GridCanvas {
    pub fn new(rows: u16, cols: u16) -> Self {
        GridCanvas {
            rows,
            cols,
            cells: vec![BLANK; rows as usize * cols as usize],
            beeps: 0,
        }
    }

    pub fn glyph_at(&self, row: u16, col: u16) -> char {
        self.cells[row as usize * self.cols as usize + col as usize].0
    }

    pub fn emphasis_at(&self, row: u16, col: u16) -> Emphasis {
        self.cells[row as usize * self.cols as usize + col as usize].1
    }

    /// The full contents of one row as a string (handy for header asserts).
    pub fn row_text(&self, row: u16) -> String {
        (0..self.cols).map(|col| self.glyph_at(row, col)).collect()
    }

    /// Number of non-blank cells on the whole surface.
    pub fn glyph_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.0 != ' ').count()
    }
}

impl Canvas for GridCanvas {
    fn size(&self) -> (u16, u16) {
        (self.rows, self.cols)
    }

    fn draw(&mut self, row: i32, col: i32, glyph: char, emphasis: Emphasis) {
        if in_bounds(row, col, self.rows, self.cols) {
            let i = row as usize * self.cols as usize + col as usize;
            self.cells[i] = (glyph, emphasis);
        }
    }

    fn erase(&mut self, row: i32, col: i32) {
        if in_bounds(row, col, self.rows, self.cols) {
            let i = row as usize * self.cols as usize + col as usize;
            self.cells[i] = BLANK;
        }
    }

    fn beep(&mut self) {
        self.beeps += 1;
    }

    fn present(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn resize(&mut self, rows: u16, cols: u16) {
        self.rows = rows;
        self.cols = cols;
        self.cells = vec![BLANK; rows as usize * cols as usize];
    }
}

// ── Multi-line art helpers ────────────────────────────────────────────────────

/// Draw an art block with its top-left corner at (row, col).  Spaces in
/// the art are transparent; `negative` erases the block instead.
pub fn draw_art(canvas: &mut dyn Canvas, row: f64, col: f64, text: &str, negative: bool) {
    let top = row.round() as i32;
    let left = col.round() as i32;
    for (dr, line) in text.lines().enumerate() {
        for (dc, glyph) in line.chars().enumerate() {
            if glyph == ' ' {
                continue;
            }
            let (r, c) = (top + dr as i32, left + dc as i32);
            if negative {
                canvas.erase(r, c);
            } else {
                canvas.draw(r, c, glyph, Emphasis::Normal);
            }
        }
    }
}
