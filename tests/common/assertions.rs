use barnstorm::FlightState;

/// Assert that a flight state holds the invariants every model must keep
/// after every update.
#[track_caller]
pub fn assert_state_valid(state: &FlightState) {
    assert!(state.position.iter().all(|v| v.is_finite()), "Position is not finite");
    assert!(state.velocity.iter().all(|v| v.is_finite()), "Velocity is not finite");

    assert!(state.pitch.is_finite(), "Pitch is not finite");
    assert!(state.yaw.is_finite(), "Yaw is not finite");
    assert!(state.roll.is_finite(), "Roll is not finite");

    assert!(
        (0.0..=1.0).contains(&state.throttle),
        "Throttle out of bounds: {}",
        state.throttle
    );
}

/// Assert the post-update speed respects a model ceiling.
#[track_caller]
pub fn assert_speed_at_most(state: &FlightState, ceiling: f64) {
    assert!(
        state.speed() <= ceiling + 1e-9,
        "Speed exceeded ceiling: {} > {}",
        state.speed(),
        ceiling
    );
}

/// Assert the nose angle respects a model clamp.
#[track_caller]
pub fn assert_pitch_within(state: &FlightState, limit: f64) {
    assert!(
        state.pitch.abs() <= limit + 1e-9,
        "Pitch exceeded clamp: {} > {}",
        state.pitch,
        limit
    );
}
