//! Scenario policy tables: narrative phrases, hazard spawn cadence, and
//! the weapon unlock gate, all functions of the in-game year.

pub const START_YEAR: i32 = 1957;
pub const WEAPON_UNLOCK_YEAR: i32 = 2020;

/// Real seconds per in-game year divided by the 100 ms tick period.
pub const TICKS_PER_YEAR: u32 = 15;

/// Years a latched phrase stays in the header with no newer entry.
pub const PHRASE_LINGER_YEARS: i32 = 2;

const PHRASES: &[(i32, &str)] = &[
    (1957, "First Sputnik"),
    (1961, "Gagarin flew!"),
    (1969, "Armstrong walks on the Moon!"),
    (1971, "First orbital station Salyut-1"),
    (1981, "Flight of the Shuttle Columbia"),
    (1998, "ISS construction begins"),
    (2011, "Messenger launched to Mercury"),
    (2020, "Take the plasma gun! Shoot the debris!"),
];

/// Milestone phrase for `year`, if the table has one.
pub fn phrase_for(year: i32) -> Option<&'static str> {
    PHRASES
        .iter()
        .find(|(milestone, _)| *milestone == year)
        .map(|(_, phrase)| *phrase)
}

/// Hazard spawn delay in ticks, or `None` while spawning is disabled.
/// Orbit gets more crowded as the years pass.
pub fn spawn_delay(year: i32) -> Option<u32> {
    match year {
        y if y < 1961 => None,
        y if y < 1969 => Some(20),
        y if y < 1981 => Some(14),
        y if y < 1995 => Some(10),
        y if y < 2010 => Some(8),
        y if y < WEAPON_UNLOCK_YEAR => Some(6),
        _ => Some(2),
    }
}

pub fn weapons_unlocked(year: i32) -> bool {
    year >= WEAPON_UNLOCK_YEAR
}
