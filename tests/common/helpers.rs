use barnstorm::{ControlInput, DynamicsConfig, FlightDynamics, FlightState, ModelKind};
use nalgebra::Vector3;

/// Facade over the default tuning for one model, spawned at rest.
pub fn dynamics(kind: ModelKind) -> FlightDynamics {
    let spawn = FlightState {
        grounded: kind == ModelKind::Realistic,
        ..FlightState::default()
    };
    FlightDynamics::new(kind, &DynamicsConfig::default(), spawn).unwrap()
}

/// Realistic-model facade spawned airborne with a given velocity.
pub fn airborne_dynamics(velocity: Vector3<f64>, throttle: f64) -> FlightDynamics {
    let spawn = FlightState {
        velocity,
        throttle,
        grounded: false,
        ..FlightState::default()
    };
    FlightDynamics::new(ModelKind::Realistic, &DynamicsConfig::default(), spawn).unwrap()
}

pub fn full_throttle() -> ControlInput {
    ControlInput {
        throttle_delta: 0.8,
        ..ControlInput::default()
    }
}

/// Tick `dynamics` a fixed number of times with the same input and height.
pub fn run_ticks(
    dynamics: &mut FlightDynamics,
    input: &ControlInput,
    dt: f64,
    ticks: usize,
    height: Option<f64>,
) {
    for _ in 0..ticks {
        dynamics.update(input, dt, height);
    }
}
