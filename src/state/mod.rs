use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::utils::math::attitude_from_euler;

/// Per-tick control sample produced by the host's input mapper.
///
/// Axes are expected in [-1, 1] by caller contract and are not re-clamped
/// here; `throttle_delta` is a signed rate in throttle units per second.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ControlInput {
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
    pub throttle_delta: f64,
    pub brake: bool,
    pub boost: bool,
}

/// Kinematic state of one aircraft, advanced once per tick.
///
/// `position` is only self-tracked by models that integrate it themselves;
/// `grounded` is only meaningful for the model with taxi physics. Euler
/// angles are radians, composed roll -> pitch -> yaw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightState {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
    pub throttle: f64,
    pub grounded: bool,
}

impl Default for FlightState {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            pitch: 0.0,
            yaw: 0.0,
            roll: 0.0,
            throttle: 0.0,
            grounded: false,
        }
    }
}

impl FlightState {
    /// Spawn state at a position and heading, at rest.
    pub fn spawned_at(position: Vector3<f64>, yaw: f64, grounded: bool) -> Self {
        Self {
            position,
            yaw,
            grounded,
            ..Self::default()
        }
    }

    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    /// Speed over the ground plane, ignoring vertical motion.
    pub fn ground_speed(&self) -> f64 {
        Vector3::new(self.velocity.x, 0.0, self.velocity.z).norm()
    }

    pub fn attitude(&self) -> UnitQuaternion<f64> {
        attitude_from_euler(self.pitch, self.yaw, self.roll)
    }
}
