//! The scenario driver's two cooperating tasks: a slow year clock and
//! the year/phrase header.

use crate::entities::Emphasis;
use crate::scenario::{self, PHRASE_LINGER_YEARS, TICKS_PER_YEAR};
use crate::sched::{Context, Flow};

/// Advances the in-game year on a slower clock; the single writer of
/// `ScenarioState::year`.
pub struct YearClock {
    started: bool,
}

impl YearClock {
    pub fn new() -> Self {
        YearClock { started: false }
    }

    pub fn step(&mut self, ctx: &mut Context<'_>) -> Flow {
        if !self.started {
            // Wait a full year before the first increment.
            self.started = true;
            return Flow::Sleep(TICKS_PER_YEAR);
        }
        ctx.scenario.year += 1;
        Flow::Sleep(TICKS_PER_YEAR)
    }
}

impl Default for YearClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Latches the milestone phrase for the current year, clears it after
/// `PHRASE_LINGER_YEARS` with no newer entry, and redraws the header.
pub struct PhraseBanner {
    last_len: usize,
}

impl PhraseBanner {
    pub fn new() -> Self {
        PhraseBanner { last_len: 0 }
    }

    pub fn step(&mut self, ctx: &mut Context<'_>) -> Flow {
        let scenario_state = &mut *ctx.scenario;
        if let Some(phrase) = scenario::phrase_for(scenario_state.year) {
            scenario_state.phrase = Some(phrase);
            scenario_state.announced_year = scenario_state.year;
        } else if scenario_state.phrase.is_some()
            && scenario_state.year - scenario_state.announced_year > PHRASE_LINGER_YEARS
        {
            scenario_state.phrase = None;
        }

        let text = match scenario_state.phrase {
            Some(phrase) => format!("Year {}: {}", scenario_state.year, phrase),
            None => format!("Year {}", scenario_state.year),
        };

        for (i, glyph) in text.chars().enumerate() {
            ctx.canvas.draw(0, 1 + i as i32, glyph, Emphasis::Bold);
        }
        // Blank the tail of a longer previous header
        for i in text.chars().count()..self.last_len {
            ctx.canvas.erase(0, 1 + i as i32);
        }
        self.last_len = text.chars().count();
        Flow::Sleep(1)
    }
}

impl Default for PhraseBanner {
    fn default() -> Self {
        Self::new()
    }
}
