mod common;

use common::Sim;

use space_sweeper::scenario::{
    phrase_for, spawn_delay, weapons_unlocked, START_YEAR, TICKS_PER_YEAR, WEAPON_UNLOCK_YEAR,
};
use space_sweeper::tasks::{PhraseBanner, Task, YearClock};

// ── Policy tables ─────────────────────────────────────────────────────────────

#[test]
fn spawn_delay_era_boundaries() {
    assert_eq!(spawn_delay(1957), None);
    assert_eq!(spawn_delay(1960), None);
    assert_eq!(spawn_delay(1961), Some(20));
    assert_eq!(spawn_delay(1968), Some(20));
    assert_eq!(spawn_delay(1969), Some(14));
    assert_eq!(spawn_delay(1980), Some(14));
    assert_eq!(spawn_delay(1981), Some(10));
    assert_eq!(spawn_delay(1994), Some(10));
    assert_eq!(spawn_delay(1995), Some(8));
    assert_eq!(spawn_delay(2009), Some(8));
    assert_eq!(spawn_delay(2010), Some(6));
    assert_eq!(spawn_delay(2019), Some(6));
    assert_eq!(spawn_delay(2020), Some(2));
    assert_eq!(spawn_delay(2100), Some(2));
}

#[test]
fn spawn_delay_never_increases_as_years_pass() {
    let mut last = u32::MAX;
    for year in START_YEAR..=2050 {
        if let Some(delay) = spawn_delay(year) {
            assert!(delay <= last, "cadence slowed down in {year}");
            last = delay;
        } else {
            assert_eq!(last, u32::MAX, "spawning stopped after starting");
        }
    }
}

#[test]
fn milestone_phrases_land_on_their_exact_years() {
    assert_eq!(phrase_for(1957), Some("First Sputnik"));
    assert_eq!(phrase_for(1961), Some("Gagarin flew!"));
    assert_eq!(phrase_for(2020), Some("Take the plasma gun! Shoot the debris!"));
    assert_eq!(phrase_for(1958), None);
    assert_eq!(phrase_for(2021), None);
}

#[test]
fn weapon_gate_opens_in_the_unlock_year() {
    assert!(!weapons_unlocked(WEAPON_UNLOCK_YEAR - 1));
    assert!(weapons_unlocked(WEAPON_UNLOCK_YEAR));
    assert!(weapons_unlocked(WEAPON_UNLOCK_YEAR + 30));
}

// ── Year clock ────────────────────────────────────────────────────────────────

#[test]
fn year_advances_only_after_a_full_year_of_ticks() {
    let mut sim = Sim::new(10, 40);
    sim.supervisor.spawn(Task::YearClock(YearClock::new()));

    sim.run(TICKS_PER_YEAR);
    assert_eq!(sim.scenario.year, START_YEAR);
    sim.tick();
    assert_eq!(sim.scenario.year, START_YEAR + 1);

    // the cadence holds for the following years
    sim.run(TICKS_PER_YEAR - 1);
    assert_eq!(sim.scenario.year, START_YEAR + 1);
    sim.tick();
    assert_eq!(sim.scenario.year, START_YEAR + 2);
}

// ── Header banner ─────────────────────────────────────────────────────────────

#[test]
fn banner_latches_a_phrase_and_drops_it_after_the_linger_window() {
    let mut sim = Sim::new(10, 60);
    sim.supervisor.spawn(Task::Banner(PhraseBanner::new()));

    sim.tick();
    assert_eq!(sim.canvas.row_text(0).trim_end(), " Year 1957: First Sputnik");

    // no table entry for 1958/1959, but the phrase lingers
    sim.scenario.year = 1959;
    sim.tick();
    assert_eq!(sim.canvas.row_text(0).trim_end(), " Year 1959: First Sputnik");

    // past the linger window the phrase is cleared and the stale tail blanked
    sim.scenario.year = 1960;
    sim.tick();
    assert_eq!(sim.canvas.row_text(0).trim_end(), " Year 1960");
}

#[test]
fn banner_replaces_a_lingering_phrase_with_a_newer_milestone() {
    let mut sim = Sim::new(10, 60);
    sim.supervisor.spawn(Task::Banner(PhraseBanner::new()));

    sim.tick(); // latches the 1957 phrase
    sim.scenario.year = 1961;
    sim.tick();
    assert_eq!(sim.canvas.row_text(0).trim_end(), " Year 1961: Gagarin flew!");
}

#[test]
fn banner_redraws_every_tick_in_bold() {
    use space_sweeper::entities::Emphasis;

    let mut sim = Sim::new(10, 60);
    sim.supervisor.spawn(Task::Banner(PhraseBanner::new()));
    sim.run(3);
    assert_eq!(sim.canvas.glyph_at(0, 1), 'Y');
    assert_eq!(sim.canvas.emphasis_at(0, 1), Emphasis::Bold);
}
