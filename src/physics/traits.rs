use nalgebra::Vector3;

use crate::state::{ControlInput, FlightState};

/// Capability contract shared by the three dynamics fidelities.
///
/// One call to [`update`](Self::update) advances the aircraft by exactly one
/// tick; the tick path never fails and never panics, out-of-contract inputs
/// are clamped back into range instead of rejected.
///
/// `height` is the aircraft's world height sampled by the caller *after* the
/// previous tick's velocity was applied by the host's transform layer. The
/// one-tick lag is part of the contract: only the ground-aware model reads
/// it, and passing `None` means ground transitions never occur. That is a
/// caller obligation, not an internal failure.
pub trait DynamicsModel {
    fn update(&mut self, input: &ControlInput, dt: f64, height: Option<f64>);

    /// Read-only snapshot of the post-update state.
    fn state(&self) -> &FlightState;

    fn velocity(&self) -> Vector3<f64> {
        self.state().velocity
    }

    /// World position, for models that integrate it themselves. `None` means
    /// position integration is delegated to the host's transform layer.
    fn position(&self) -> Option<Vector3<f64>> {
        Some(self.state().position)
    }

    /// Height of the ground plane used for landing checks. No-op for models
    /// without a ground regime.
    fn set_ground_level(&mut self, _level: f64) {}
}
