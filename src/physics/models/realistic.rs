use log::debug;
use nalgebra::Vector3;

use crate::config::RealisticConfig;
use crate::physics::traits::DynamicsModel;
use crate::state::{ControlInput, FlightState};
use crate::utils::constants::{
    AUTO_LEVEL_INPUT_THRESHOLD, GROUND_CONTACT_EPSILON, LANDING_SPEED_FACTOR,
    TAKEOFF_THROTTLE_THRESHOLD,
};
use crate::utils::errors::SimError;
use crate::utils::math::{attitude_from_euler, forward_from_angles, forward_from_attitude, normalize_or_zero};

/// Nose clamp while airborne.
const FLIGHT_PITCH_LIMIT: f64 = std::f64::consts::FRAC_PI_4;
/// Fraction of roll bled off per tick when the stick is centered.
const ROLL_LEVEL_PER_TICK: f64 = 0.02;
/// Attitude-to-climb assist gain [1/s].
const CLIMB_ASSIST: f64 = 0.8;
/// Lift saturates at this multiple of weight.
const LIFT_CAP_FACTOR: f64 = 1.5;
/// Brake deceleration on the ground, as a fraction of gravity.
const BRAKE_DECEL_FACTOR: f64 = 0.4;
/// Below this ground speed with idle throttle and no brake, the aircraft
/// snaps to a dead stop instead of creeping forever.
const TAXI_STOP_SPEED: f64 = 0.5;
const TAXI_STOP_THROTTLE: f64 = 0.05;

/// Ground/air state machine with taxi physics and a tuned flight force model.
///
/// Position is not integrated here: the host's transform layer applies the
/// computed velocity and reports the resulting world height back through the
/// next `update` call. That one-tick lag is the contract for every ground
/// check below; without a supplied height the aircraft never touches down.
///
/// The vertical force model layers three lift mechanisms: the capped `v^2`
/// lift, the pitch-dependent multiplier, and the direct climb assist.
/// Removing any one of them changes the climb response.
pub struct RealisticModel {
    config: RealisticConfig,
    state: FlightState,
    ground_level: f64,
}

impl RealisticModel {
    /// The spawn state decides the initial ground/air mode via its
    /// `grounded` flag.
    pub fn new(config: RealisticConfig, spawn: FlightState) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self {
            config,
            state: spawn,
            ground_level: 0.0,
        })
    }

    fn update_grounded(&mut self, input: &ControlInput, dt: f64) {
        let cfg = &self.config;
        let ground_speed = self.state.ground_speed();

        // Steering authority improves as the roll slows down.
        let steer_factor = (1.5 - ground_speed / 20.0).max(0.5);
        let yaw = self.state.yaw + input.yaw * cfg.yaw_rate * steer_factor * dt;

        let forward = forward_from_angles(0.0, yaw);
        let thrust_accel = cfg.max_thrust * self.state.throttle / cfg.mass;

        let mut velocity = self.state.velocity;
        velocity.y = 0.0;
        velocity += forward * thrust_accel * dt;

        let speed = velocity.norm();
        if speed > 0.0 {
            let mut decel = cfg.ground_friction * cfg.gravity;
            if input.brake {
                decel += BRAKE_DECEL_FACTOR * cfg.gravity;
            }
            velocity -= normalize_or_zero(&velocity) * (decel * dt).min(speed);
        }

        let speed = velocity.norm();
        if speed > cfg.taxi_max_speed {
            velocity *= cfg.taxi_max_speed / speed;
        }

        if velocity.norm() < TAXI_STOP_SPEED
            && self.state.throttle < TAXI_STOP_THROTTLE
            && !input.brake
        {
            velocity = Vector3::zeros();
        }
        velocity.y = 0.0;

        self.state.yaw = yaw;
        self.state.pitch = 0.0;
        self.state.roll = 0.0;
        self.state.velocity = velocity;

        if velocity.norm() >= cfg.takeoff_speed && self.state.throttle >= TAKEOFF_THROTTLE_THRESHOLD
        {
            debug!("takeoff at {:.1} units/s", velocity.norm());
            self.state.grounded = false;
        }
    }

    fn update_airborne(&mut self, input: &ControlInput, dt: f64, height: Option<f64>) {
        let cfg = &self.config;

        let pitch = (self.state.pitch + input.pitch * cfg.pitch_rate * dt)
            .clamp(-FLIGHT_PITCH_LIMIT, FLIGHT_PITCH_LIMIT);
        let yaw = self.state.yaw + input.yaw * cfg.yaw_rate * dt;
        let mut roll = self.state.roll + input.roll * cfg.roll_rate * dt;
        if input.roll.abs() < AUTO_LEVEL_INPUT_THRESHOLD {
            roll *= 1.0 - ROLL_LEVEL_PER_TICK;
        }

        let forward = forward_from_attitude(&attitude_from_euler(pitch, yaw, roll));
        let speed = self.state.velocity.norm();

        let mut thrust_mag = cfg.max_thrust * self.state.throttle;
        if input.boost {
            thrust_mag += cfg.boost_thrust;
        }
        let thrust = forward * thrust_mag;

        // Flight drag runs at twice the taxi coefficient; the airbrake adds a
        // cubic term on top.
        let mut drag_mag = 2.0 * cfg.drag_coef * speed * speed;
        if input.brake {
            drag_mag += cfg.brake_drag * speed * speed * speed;
        }
        let drag = -normalize_or_zero(&self.state.velocity) * drag_mag;

        let weight_mag = cfg.mass * cfg.gravity;
        let lift_mag = (cfg.lift_coef() * speed * speed).min(LIFT_CAP_FACTOR * weight_mag)
            * pitch_lift_multiplier(pitch);
        let lift = Vector3::y() * lift_mag;

        let gravity = Vector3::new(0.0, -weight_mag, 0.0);

        let acceleration = (thrust + drag + lift + gravity) / cfg.mass;
        let mut velocity = self.state.velocity + acceleration * dt;

        // Climb assist: couples the nose angle straight into vertical speed.
        velocity.y += pitch.sin() * speed * CLIMB_ASSIST * dt;

        let new_speed = velocity.norm();
        if new_speed > cfg.max_speed {
            velocity *= cfg.max_speed / new_speed;
        }

        let mut grounded = false;
        if let Some(height) = height {
            if height <= self.ground_level + GROUND_CONTACT_EPSILON {
                if velocity.y < 0.0 {
                    velocity.y = 0.0;
                }
                if velocity.norm() < LANDING_SPEED_FACTOR * cfg.takeoff_speed {
                    debug!("touchdown at {:.1} units/s", velocity.norm());
                    velocity.y = 0.0;
                    grounded = true;
                }
            }
        }

        self.state.pitch = pitch;
        self.state.yaw = yaw;
        self.state.roll = roll;
        self.state.velocity = velocity;
        self.state.grounded = grounded;
    }
}

fn pitch_lift_multiplier(pitch: f64) -> f64 {
    let t = (pitch / FLIGHT_PITCH_LIMIT).clamp(-1.0, 1.0);
    if t >= 0.0 {
        1.0 + 0.2 * t
    } else {
        1.0 + 0.7 * t
    }
}

impl DynamicsModel for RealisticModel {
    fn update(&mut self, input: &ControlInput, dt: f64, height: Option<f64>) {
        self.state.throttle = (self.state.throttle + input.throttle_delta * dt).clamp(0.0, 1.0);

        if self.state.grounded {
            self.update_grounded(input, dt);
        } else {
            self.update_airborne(input, dt, height);
        }
    }

    fn state(&self) -> &FlightState {
        &self.state
    }

    /// Position integration is delegated to the host's transform layer.
    fn position(&self) -> Option<Vector3<f64>> {
        None
    }

    fn set_ground_level(&mut self, level: f64) {
        self.ground_level = level;
    }
}
