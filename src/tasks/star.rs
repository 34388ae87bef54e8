use rand::Rng;

use crate::entities::Emphasis;
use crate::sched::{Context, Flow};

/// Blink cycle: emphasis and hold ticks per phase.
const CYCLE: [(Emphasis, u32); 4] = [
    (Emphasis::Dim, 20),
    (Emphasis::Normal, 3),
    (Emphasis::Bold, 5),
    (Emphasis::Normal, 3),
];

const GLYPHS: [char; 4] = ['+', '*', '.', ':'];

/// Roughly one star per this many field cells.
const CELLS_PER_STAR: u32 = 30;

/// A blinking background star.  Never terminates on its own; positions
/// left out of bounds by a resize are silently skipped by the canvas.
pub struct Star {
    row: i32,
    col: i32,
    glyph: char,
    phase: usize,
    /// One-shot random delay that desynchronizes the field.
    offset: u32,
}

impl Star {
    pub fn new(row: i32, col: i32, glyph: char, offset: u32) -> Self {
        Star {
            row,
            col,
            glyph,
            phase: 0,
            offset,
        }
    }

    /// Scatter a starfield across the playable area, density scaled to
    /// the field size, each star with a random glyph and phase offset.
    pub fn scatter(rng: &mut impl Rng, rows: u16, cols: u16) -> Vec<Star> {
        let count = (rows as u32 * cols as u32 / CELLS_PER_STAR).max(1);
        (0..count)
            .map(|_| {
                let row = rng.gen_range(1..rows.max(3) as i32 - 1);
                let col = rng.gen_range(1..cols.max(3) as i32 - 1);
                let glyph = GLYPHS[rng.gen_range(0..GLYPHS.len())];
                Star::new(row, col, glyph, rng.gen_range(0..100))
            })
            .collect()
    }

    pub fn step(&mut self, ctx: &mut Context<'_>) -> Flow {
        if self.offset > 0 {
            let delay = self.offset;
            self.offset = 0;
            return Flow::Sleep(delay);
        }
        let (emphasis, hold) = CYCLE[self.phase];
        ctx.canvas.draw(self.row, self.col, self.glyph, emphasis);
        self.phase = (self.phase + 1) % CYCLE.len();
        Flow::Sleep(hold)
    }
}
