use log::{debug, warn};
use nalgebra::Vector3;
use serde::Serialize;

use crate::config::{DynamicsConfig, ModelKind};
use crate::physics::{ArcadeModel, DynamicsModel, HybridModel, RealisticModel};
use crate::state::{ControlInput, FlightState};
use crate::utils::errors::SimError;

/// Per-tick projection for HUD and telemetry consumers.
///
/// `altitude` is `None` for models that do not track their own position.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Telemetry {
    pub speed: f64,
    pub altitude: Option<f64>,
    pub throttle_pct: f64,
}

/// Unified entry point over the three dynamics fidelities.
///
/// One instance per spawned aircraft, created at spawn and dropped at
/// despawn; callers tick it once per frame and read the snapshot back. All
/// model differences (self-tracked position, ground awareness) are folded
/// into this one surface so placement, camera and telemetry code stay
/// agnostic to the active model.
pub struct FlightDynamics {
    kind: ModelKind,
    model: Box<dyn DynamicsModel>,
}

impl FlightDynamics {
    pub fn new(
        kind: ModelKind,
        config: &DynamicsConfig,
        spawn: FlightState,
    ) -> Result<Self, SimError> {
        let model: Box<dyn DynamicsModel> = match kind {
            ModelKind::Arcade => Box::new(ArcadeModel::new(config.arcade.clone(), spawn)?),
            ModelKind::Hybrid => Box::new(HybridModel::new(config.hybrid.clone(), spawn)?),
            ModelKind::Realistic => Box::new(RealisticModel::new(config.realistic.clone(), spawn)?),
        };
        debug!("spawned {} dynamics model", kind);
        Ok(Self { kind, model })
    }

    /// Construct from the configured model name. Unrecognized names degrade
    /// to the arcade model rather than failing the spawn.
    pub fn from_config(config: &DynamicsConfig, spawn: FlightState) -> Result<Self, SimError> {
        let kind = match ModelKind::from_name(&config.model) {
            Some(kind) => kind,
            None => {
                warn!(
                    "unknown dynamics model '{}', falling back to arcade",
                    config.model
                );
                ModelKind::Arcade
            }
        };
        Self::new(kind, config, spawn)
    }

    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    /// Advance the aircraft by one tick.
    ///
    /// `height` is the world height sampled after the previous tick's
    /// velocity was applied externally; see [`DynamicsModel::update`] for
    /// the one-tick-lag contract.
    pub fn update(&mut self, input: &ControlInput, dt: f64, height: Option<f64>) {
        self.model.update(input, dt, height);
    }

    pub fn state(&self) -> &FlightState {
        self.model.state()
    }

    pub fn velocity(&self) -> Vector3<f64> {
        self.model.velocity()
    }

    /// `None` when the active model delegates position integration to the
    /// host's transform layer.
    pub fn position(&self) -> Option<Vector3<f64>> {
        self.model.position()
    }

    pub fn set_ground_level(&mut self, level: f64) {
        self.model.set_ground_level(level);
    }

    pub fn telemetry(&self) -> Telemetry {
        let state = self.state();
        Telemetry {
            speed: state.speed(),
            altitude: self.position().map(|p| p.y),
            throttle_pct: state.throttle * 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unknown_model_falls_back_to_arcade() {
        let config = DynamicsConfig {
            model: "ultra-realistic".into(),
            ..DynamicsConfig::default()
        };
        let dynamics = FlightDynamics::from_config(&config, FlightState::default()).unwrap();
        assert_eq!(dynamics.kind(), ModelKind::Arcade);
    }

    #[test]
    fn test_configured_model_is_selected() {
        let config = DynamicsConfig {
            model: "realistic".into(),
            ..DynamicsConfig::default()
        };
        let dynamics = FlightDynamics::from_config(&config, FlightState::default()).unwrap();
        assert_eq!(dynamics.kind(), ModelKind::Realistic);
    }

    #[test]
    fn test_invalid_config_fails_construction() {
        let mut config = DynamicsConfig::default();
        config.arcade.max_speed = 0.0;
        assert!(FlightDynamics::new(ModelKind::Arcade, &config, FlightState::default()).is_err());
    }

    #[test]
    fn test_position_exposure_tracks_model() {
        let config = DynamicsConfig::default();
        let arcade =
            FlightDynamics::new(ModelKind::Arcade, &config, FlightState::default()).unwrap();
        assert!(arcade.position().is_some());

        let realistic =
            FlightDynamics::new(ModelKind::Realistic, &config, FlightState::default()).unwrap();
        assert!(realistic.position().is_none());
    }

    #[test]
    fn test_set_ground_level_is_noop_outside_realistic() {
        let config = DynamicsConfig::default();
        let mut arcade =
            FlightDynamics::new(ModelKind::Arcade, &config, FlightState::default()).unwrap();
        // Must not panic or change behavior
        arcade.set_ground_level(100.0);
        arcade.update(&ControlInput::default(), 0.02, Some(0.0));
        assert!(!arcade.state().grounded);
    }

    #[test]
    fn test_telemetry_projection() {
        let config = DynamicsConfig::default();
        let mut dynamics =
            FlightDynamics::new(ModelKind::Arcade, &config, FlightState::default()).unwrap();
        let input = ControlInput {
            throttle_delta: 10.0,
            ..ControlInput::default()
        };
        for _ in 0..50 {
            dynamics.update(&input, 0.02, None);
        }
        let telemetry = dynamics.telemetry();
        assert_relative_eq!(telemetry.throttle_pct, 100.0);
        assert!(telemetry.speed > 0.0);
        assert!(telemetry.altitude.is_some());
    }
}
