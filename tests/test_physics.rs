use space_sweeper::physics::update_speed;

// ── Decay ─────────────────────────────────────────────────────────────────────

#[test]
fn neutral_input_keeps_zero_velocity() {
    assert_eq!(update_speed(0.0, 0.0, 0, 0), (0.0, 0.0));
}

#[test]
fn velocity_decays_to_exactly_zero_in_bounded_ticks() {
    let (mut rs, mut cs) = (2.0, -2.0);
    let mut ticks = 0;
    while (rs, cs) != (0.0, 0.0) {
        let next = update_speed(rs, cs, 0, 0);
        rs = next.0;
        cs = next.1;
        ticks += 1;
        assert!(ticks <= 20, "velocity must not drift indefinitely");
    }
    // once stopped, it stays stopped
    assert_eq!(update_speed(rs, cs, 0, 0), (0.0, 0.0));
}

#[test]
fn decay_is_monotonic_in_magnitude() {
    let mut speed = 2.0;
    loop {
        let (next, _) = update_speed(speed, 0.0, 0, 0);
        assert!(next.abs() < speed.abs() || next == 0.0);
        if next == 0.0 {
            break;
        }
        speed = next;
    }
}

// ── Acceleration ──────────────────────────────────────────────────────────────

#[test]
fn held_input_accelerates_in_that_direction() {
    let (rs, cs) = update_speed(0.0, 0.0, -1, 1);
    assert!(rs < 0.0);
    assert!(cs > 0.0);
}

#[test]
fn speed_never_exceeds_the_limit() {
    let (mut rs, mut cs) = (0.0, 0.0);
    for _ in 0..100 {
        let next = update_speed(rs, cs, 1, 1);
        rs = next.0;
        cs = next.1;
        assert!(rs.abs() <= 2.0);
        assert!(cs.abs() <= 2.0);
    }
    // sustained input should reach meaningful speed
    assert!(rs > 1.0);
}

#[test]
fn axes_are_independent() {
    let (rs, cs) = update_speed(1.0, 0.0, 0, 0);
    assert!(rs > 0.0);
    assert_eq!(cs, 0.0);
}
