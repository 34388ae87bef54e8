//! All simulation data types: pure data plus small geometric queries.

use crate::scenario::START_YEAR;

/// Text emphasis applied when a glyph is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
    Dim,
    Normal,
    Bold,
}

/// One tick's worth of decoded player input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    /// -1 up, 0 neutral, 1 down.
    pub row_dir: i8,
    /// -1 left, 0 neutral, 1 right.
    pub col_dir: i8,
    pub fire: bool,
}

/// An airborne hazard's axis-aligned bounding box, published in the
/// obstacle registry for the duration of its flight.
#[derive(Clone, Debug)]
pub struct Obstacle {
    pub id: u64,
    /// Top-left corner, sub-cell precision.
    pub row: f64,
    pub col: f64,
    pub rows: u16,
    pub cols: u16,
}

impl Obstacle {
    /// Whether the rounded box contains the cell (half-open on both axes).
    pub fn contains(&self, row: i32, col: i32) -> bool {
        let top = self.row.round() as i32;
        let left = self.col.round() as i32;
        row >= top
            && row < top + self.rows as i32
            && col >= left
            && col < left + self.cols as i32
    }

    /// Half-open interval overlap against another box on both axes.
    pub fn overlaps(&self, row: i32, col: i32, rows: u16, cols: u16) -> bool {
        let top = self.row.round() as i32;
        let left = self.col.round() as i32;
        top < row + rows as i32
            && row < top + self.rows as i32
            && left < col + cols as i32
            && col < left + self.cols as i32
    }
}

/// Year counter and latched narrative phrase.  Written only by the year
/// clock and banner tasks; read by everything that is year-gated.
#[derive(Clone, Debug)]
pub struct ScenarioState {
    pub year: i32,
    /// Phrase currently shown in the header, if any.
    pub phrase: Option<&'static str>,
    /// Year whose phrase was most recently latched.
    pub announced_year: i32,
}

impl ScenarioState {
    pub fn new() -> Self {
        ScenarioState {
            year: START_YEAR,
            phrase: None,
            announced_year: START_YEAR,
        }
    }
}

impl Default for ScenarioState {
    fn default() -> Self {
        Self::new()
    }
}
