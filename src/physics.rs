//! Ship velocity integration: exponential decay each tick plus a cosine
//! acceleration ease while a direction is held.
//!
//! The decay factor and snap-to-zero dead band together guarantee the
//! ship coasts to a stop in a bounded number of ticks after input is
//! released.

/// Per-tick velocity retained when coasting.
const FADING: f64 = 0.8;
/// Absolute speed cap per axis, cells per tick.
const SPEED_LIMIT: f64 = 2.0;
/// Base acceleration, scaled by the cosine ease.
const ACCEL_STEP: f64 = 0.75;
/// Speeds below this snap to zero.
const DEAD_BAND: f64 = 0.1;

fn limit(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}

/// Accelerate one axis toward the speed limit.  The cosine of the
/// current speed fraction tapers the push as the limit approaches.
fn accelerate(speed: f64, direction: i8) -> f64 {
    let eased = (speed / SPEED_LIMIT).cos() * ACCEL_STEP;
    let next = if direction > 0 {
        speed + eased
    } else {
        speed - eased
    };
    limit(next, -SPEED_LIMIT, SPEED_LIMIT)
}

/// Advance one tick of ship velocity from the held directional input.
pub fn update_speed(
    row_speed: f64,
    col_speed: f64,
    row_dir: i8,
    col_dir: i8,
) -> (f64, f64) {
    let mut rs = row_speed * FADING;
    let mut cs = col_speed * FADING;

    if row_dir != 0 {
        rs = accelerate(rs, row_dir);
    }
    if col_dir != 0 {
        cs = accelerate(cs, col_dir);
    }

    if rs.abs() < DEAD_BAND {
        rs = 0.0;
    }
    if cs.abs() < DEAD_BAND {
        cs = 0.0;
    }
    (rs, cs)
}
