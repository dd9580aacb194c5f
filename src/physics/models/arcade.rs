use crate::config::ArcadeConfig;
use crate::physics::traits::DynamicsModel;
use crate::state::{ControlInput, FlightState};
use crate::utils::constants::AUTO_LEVEL_INPUT_THRESHOLD;
use crate::utils::errors::SimError;
use crate::utils::math::forward_from_angles;

/// Target-speed steering model: the most forgiving of the three.
///
/// Speed chases a throttle-driven target instead of integrating forces, the
/// nose direction comes straight from pitch/yaw trig, and the aircraft is
/// always airborne. A mild downward pull at low throttle keeps idle flight
/// from feeling weightless.
pub struct ArcadeModel {
    config: ArcadeConfig,
    state: FlightState,
    speed: f64,
}

impl ArcadeModel {
    pub fn new(config: ArcadeConfig, spawn: FlightState) -> Result<Self, SimError> {
        config.validate()?;
        let speed = spawn.speed();
        Ok(Self {
            config,
            state: FlightState {
                grounded: false,
                ..spawn
            },
            speed,
        })
    }
}

impl DynamicsModel for ArcadeModel {
    fn update(&mut self, input: &ControlInput, dt: f64, _height: Option<f64>) {
        let cfg = &self.config;
        let state = &mut self.state;

        state.throttle = (state.throttle + input.throttle_delta * dt).clamp(0.0, 1.0);

        // Boost and brake both scale the target; holding both is allowed and
        // nets out to a slow-down.
        let mut target_speed = cfg.max_speed * state.throttle;
        if input.boost {
            target_speed *= cfg.boost_multiplier;
        }
        if input.brake {
            target_speed *= cfg.brake_multiplier;
        }

        if self.speed < target_speed {
            self.speed = (self.speed + cfg.acceleration * dt).min(target_speed);
        } else {
            self.speed = (self.speed - cfg.deceleration * dt).max(target_speed);
        }

        state.yaw += input.yaw * cfg.yaw_rate * dt;
        state.pitch += input.pitch * cfg.pitch_rate * dt;
        state.roll += input.roll * cfg.roll_rate * dt;

        if input.roll.abs() < AUTO_LEVEL_INPUT_THRESHOLD {
            state.roll -= state.roll * (cfg.auto_level_strength * dt).min(1.0);
        }
        if input.pitch.abs() < AUTO_LEVEL_INPUT_THRESHOLD {
            state.pitch -= state.pitch * (cfg.auto_level_strength * 0.5 * dt).min(1.0);
        }

        state.pitch = state.pitch.clamp(-cfg.pitch_limit, cfg.pitch_limit);

        state.velocity = forward_from_angles(state.pitch, state.yaw) * self.speed;
        state.velocity.y -= cfg.gravity_bias * (1.0 - state.throttle) * dt;

        let speed = state.velocity.norm();
        let ceiling = cfg.speed_ceiling();
        if speed > ceiling {
            state.velocity *= ceiling / speed;
        }

        state.position += state.velocity * dt;
    }

    fn state(&self) -> &FlightState {
        &self.state
    }
}
