use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::math::{damp_vec3, normalize_or_zero};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChaseCameraConfig {
    /// Trail distance behind the aircraft along its travel direction
    pub follow_distance: f64,
    /// Height offset above the aircraft
    pub follow_height: f64,
    /// How far ahead of the aircraft the camera looks
    pub look_ahead: f64,
    /// Smoothing stiffness for the camera position [1/s]
    pub position_stiffness: f64,
    /// Smoothing stiffness for the look-at target [1/s]
    pub target_stiffness: f64,
}

impl Default for ChaseCameraConfig {
    fn default() -> Self {
        Self {
            follow_distance: 18.0,
            follow_height: 6.0,
            look_ahead: 25.0,
            position_stiffness: 4.0,
            target_stiffness: 8.0,
        }
    }
}

/// Chase-camera rig: derives a smoothed pose from the aircraft position and
/// velocity instead of rigidly attaching to it.
///
/// Both the camera position and the look-at target chase their ideal points
/// through per-axis exponential damping, which filters the frame-to-frame
/// direction noise a raw velocity vector carries. Lifetime is 1:1 with the
/// aircraft it follows.
#[derive(Debug, Clone)]
pub struct ChaseCamera {
    config: ChaseCameraConfig,
    position: Vector3<f64>,
    look_at: Vector3<f64>,
}

impl ChaseCamera {
    /// Seed the rig at its ideal pose for a stationary aircraft.
    pub fn new(config: ChaseCameraConfig, aircraft_position: Vector3<f64>) -> Self {
        let position =
            aircraft_position + Vector3::new(0.0, config.follow_height, -config.follow_distance);
        Self {
            config,
            position,
            look_at: aircraft_position,
        }
    }

    pub fn update(&mut self, aircraft_position: &Vector3<f64>, velocity: &Vector3<f64>, dt: f64) {
        let direction = normalize_or_zero(velocity);

        let ideal_position = aircraft_position - direction * self.config.follow_distance
            + Vector3::new(0.0, self.config.follow_height, 0.0);
        let ideal_target = aircraft_position + direction * self.config.look_ahead;

        self.position = damp_vec3(
            &self.position,
            &ideal_position,
            self.config.position_stiffness,
            dt,
        );
        self.look_at = damp_vec3(
            &self.look_at,
            &ideal_target,
            self.config.target_stiffness,
            dt,
        );
    }

    pub fn position(&self) -> Vector3<f64> {
        self.position
    }

    pub fn look_at(&self) -> Vector3<f64> {
        self.look_at
    }
}
