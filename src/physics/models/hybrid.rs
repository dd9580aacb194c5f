use nalgebra::Vector3;

use crate::config::HybridConfig;
use crate::physics::traits::DynamicsModel;
use crate::state::{ControlInput, FlightState};
use crate::utils::errors::SimError;
use crate::utils::math::{attitude_from_euler, forward_from_attitude, normalize_or_zero};

/// Force-integrated model without a ground regime.
///
/// Thrust, quadratic drag, throttle-coupled lift and gravity are summed into
/// an acceleration each tick; below the stall speed lift collapses along a
/// linear ramp. Orientation integrates raw stick rates with no leveling
/// assist, which is what separates its feel from the steering model.
pub struct HybridModel {
    config: HybridConfig,
    state: FlightState,
}

impl HybridModel {
    pub fn new(config: HybridConfig, spawn: FlightState) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self {
            config,
            state: FlightState {
                grounded: false,
                ..spawn
            },
        })
    }

    /// Lift attenuation: ramps from `stall_lift_multiplier` at standstill to
    /// full lift at the stall speed.
    fn stall_multiplier(&self, speed: f64) -> f64 {
        let cfg = &self.config;
        if speed >= cfg.stall_speed {
            1.0
        } else {
            cfg.stall_lift_multiplier
                + (1.0 - cfg.stall_lift_multiplier) * (speed / cfg.stall_speed)
        }
    }
}

impl DynamicsModel for HybridModel {
    fn update(&mut self, input: &ControlInput, dt: f64, _height: Option<f64>) {
        let cfg = &self.config;

        let throttle = (self.state.throttle + input.throttle_delta * dt).clamp(0.0, 1.0);
        let pitch = (self.state.pitch + input.pitch * cfg.pitch_rate * dt)
            .clamp(-cfg.pitch_limit, cfg.pitch_limit);
        let yaw = self.state.yaw + input.yaw * cfg.yaw_rate * dt;
        let roll = self.state.roll + input.roll * cfg.roll_rate * dt;

        let forward = forward_from_attitude(&attitude_from_euler(pitch, yaw, roll));
        let speed = self.state.velocity.norm();

        let mut thrust_mag = cfg.base_thrust + cfg.max_thrust * throttle;
        if input.boost {
            thrust_mag *= cfg.boost_thrust_factor;
        }
        let thrust = forward * thrust_mag;

        let drag = -normalize_or_zero(&self.state.velocity) * (cfg.drag_coef * speed * speed);

        let stall = self.stall_multiplier(speed);
        let lift = Vector3::y() * (cfg.lift_coef * speed * throttle * cfg.mass * stall);

        let weight = Vector3::new(0.0, -cfg.mass * cfg.gravity, 0.0);

        let acceleration = (thrust + drag + lift + weight) / cfg.mass;
        let mut velocity = self.state.velocity + acceleration * dt;

        let new_speed = velocity.norm();
        if new_speed > cfg.max_speed {
            velocity *= cfg.max_speed / new_speed;
        }

        self.state.throttle = throttle;
        self.state.pitch = pitch;
        self.state.yaw = yaw;
        self.state.roll = roll;
        self.state.velocity = velocity;
        self.state.position += velocity * dt;
    }

    fn state(&self) -> &FlightState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn model() -> HybridModel {
        HybridModel::new(HybridConfig::default(), FlightState::default()).unwrap()
    }

    fn full_throttle() -> ControlInput {
        ControlInput {
            throttle_delta: 10.0,
            ..ControlInput::default()
        }
    }

    #[test]
    fn test_throttle_stays_bounded() {
        let mut model = model();
        for _ in 0..5 {
            model.update(&full_throttle(), 1.0, None);
        }
        assert_relative_eq!(model.state().throttle, 1.0);
    }

    #[test]
    fn test_speed_never_exceeds_ceiling() {
        let mut model = model();
        let input = ControlInput {
            throttle_delta: 10.0,
            boost: true,
            ..ControlInput::default()
        };
        for _ in 0..2000 {
            model.update(&input, 0.02, None);
            assert!(model.state().speed() <= HybridConfig::default().max_speed + 1e-9);
        }
    }

    #[test]
    fn test_stall_ramp_is_linear_between_endpoints() {
        let model = model();
        let cfg = HybridConfig::default();
        assert_relative_eq!(model.stall_multiplier(0.0), cfg.stall_lift_multiplier);
        assert_relative_eq!(model.stall_multiplier(cfg.stall_speed), 1.0);
        assert_relative_eq!(model.stall_multiplier(cfg.stall_speed * 2.0), 1.0);
        let mid = model.stall_multiplier(cfg.stall_speed / 2.0);
        assert_relative_eq!(mid, (cfg.stall_lift_multiplier + 1.0) / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_stationary_aircraft_falls() {
        let mut model = model();
        model.update(&ControlInput::default(), 0.02, None);
        assert_relative_eq!(
            model.state().velocity.y,
            -HybridConfig::default().gravity * 0.02,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_boost_raises_acceleration() {
        let cfg = HybridConfig::default();
        let mut plain = HybridModel::new(cfg.clone(), FlightState::default()).unwrap();
        let mut boosted = HybridModel::new(cfg, FlightState::default()).unwrap();
        let input = full_throttle();
        let boosted_input = ControlInput {
            boost: true,
            ..input
        };
        for _ in 0..100 {
            plain.update(&input, 0.02, None);
            boosted.update(&boosted_input, 0.02, None);
        }
        assert!(boosted.state().ground_speed() > plain.state().ground_speed());
    }

    #[test]
    fn test_orientation_has_no_auto_level() {
        let mut model = model();
        let input = ControlInput {
            roll: 1.0,
            ..ControlInput::default()
        };
        for _ in 0..50 {
            model.update(&input, 0.02, None);
        }
        let banked = model.state().roll;
        for _ in 0..50 {
            model.update(&ControlInput::default(), 0.02, None);
        }
        assert_relative_eq!(model.state().roll, banked, epsilon = 1e-12);
    }
}
