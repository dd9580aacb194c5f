use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::constants::GRAVITY;
use crate::utils::errors::SimError;

/// Dynamics fidelity selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Arcade,
    Hybrid,
    Realistic,
}

impl ModelKind {
    /// Parse a model name from configuration. Returns `None` for anything
    /// unrecognized so the caller can pick its own fallback.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "arcade" => Some(Self::Arcade),
            "hybrid" => Some(Self::Hybrid),
            "realistic" => Some(Self::Realistic),
            _ => None,
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arcade => write!(f, "arcade"),
            Self::Hybrid => write!(f, "hybrid"),
            Self::Realistic => write!(f, "realistic"),
        }
    }
}

/// Tuning for the target-speed steering model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArcadeConfig {
    /// Top speed at full throttle, before boost [units/s]
    pub max_speed: f64,
    /// Rate the current speed closes on a higher target [units/s^2]
    pub acceleration: f64,
    /// Rate the current speed closes on a lower target [units/s^2]
    pub deceleration: f64,
    /// Pitch authority [rad/s]
    pub pitch_rate: f64,
    /// Yaw authority [rad/s]
    pub yaw_rate: f64,
    /// Roll authority [rad/s]
    pub roll_rate: f64,
    /// Wing-leveling rate applied when the roll stick is centered [1/s];
    /// pitch levels at half this rate
    pub auto_level_strength: f64,
    /// Nose angle clamp [rad]
    pub pitch_limit: f64,
    /// Target-speed scale while boosting
    pub boost_multiplier: f64,
    /// Target-speed scale while braking
    pub brake_multiplier: f64,
    /// Downward pull at idle throttle, fading out toward full throttle [units/s^2]
    pub gravity_bias: f64,
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            max_speed: 120.0,
            acceleration: 35.0,
            deceleration: 50.0,
            pitch_rate: 1.4,
            yaw_rate: 1.1,
            roll_rate: 2.2,
            auto_level_strength: 1.6,
            pitch_limit: 1.0,
            boost_multiplier: 1.5,
            brake_multiplier: 0.35,
            gravity_bias: 6.0,
        }
    }
}

impl ArcadeConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if self.max_speed <= 0.0 {
            return Err(SimError::InvalidConfig("Max speed must be positive".into()));
        }
        if self.acceleration <= 0.0 || self.deceleration <= 0.0 {
            return Err(SimError::InvalidConfig(
                "Acceleration rates must be positive".into(),
            ));
        }
        if self.pitch_rate <= 0.0 || self.yaw_rate <= 0.0 || self.roll_rate <= 0.0 {
            return Err(SimError::InvalidConfig("Turn rates must be positive".into()));
        }
        if self.pitch_limit <= 0.0 {
            return Err(SimError::InvalidConfig(
                "Pitch limit must be positive".into(),
            ));
        }
        if self.boost_multiplier < 1.0 {
            return Err(SimError::InvalidConfig(
                "Boost multiplier must not reduce speed".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.brake_multiplier) {
            return Err(SimError::InvalidConfig(
                "Brake multiplier must be between 0 and 1".into(),
            ));
        }
        Ok(())
    }

    /// Absolute speed ceiling: full throttle with boost.
    pub fn speed_ceiling(&self) -> f64 {
        self.max_speed * self.boost_multiplier
    }
}

/// Tuning for the force-integrated model without a ground regime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HybridConfig {
    /// Aircraft mass [kg]
    pub mass: f64,
    /// Thrust present at idle throttle [N]
    pub base_thrust: f64,
    /// Additional thrust at full throttle [N]
    pub max_thrust: f64,
    /// Thrust scale while boosting
    pub boost_thrust_factor: f64,
    /// Quadratic drag coefficient [N/(units/s)^2]
    pub drag_coef: f64,
    /// Lift per unit of speed, throttle and mass [1/s]
    pub lift_coef: f64,
    /// Speed below which lift starts collapsing [units/s]
    pub stall_speed: f64,
    /// Remaining lift fraction at zero speed
    pub stall_lift_multiplier: f64,
    /// Gravitational acceleration [units/s^2]
    pub gravity: f64,
    pub pitch_rate: f64,
    pub yaw_rate: f64,
    pub roll_rate: f64,
    /// Nose angle clamp [rad]
    pub pitch_limit: f64,
    /// Absolute speed ceiling [units/s]
    pub max_speed: f64,
}

impl Default for HybridConfig {
    fn default() -> Self {
        Self {
            mass: 800.0,
            base_thrust: 2400.0,
            max_thrust: 16000.0,
            boost_thrust_factor: 1.35,
            drag_coef: 0.8,
            lift_coef: 0.12,
            stall_speed: 26.0,
            stall_lift_multiplier: 0.25,
            gravity: GRAVITY,
            pitch_rate: 1.1,
            yaw_rate: 0.9,
            roll_rate: 1.8,
            pitch_limit: 1.1,
            max_speed: 150.0,
        }
    }
}

impl HybridConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if self.mass <= 0.0 {
            return Err(SimError::InvalidConfig("Mass must be positive".into()));
        }
        if self.base_thrust < 0.0 || self.max_thrust <= 0.0 {
            return Err(SimError::InvalidConfig(
                "Thrust must not be negative".into(),
            ));
        }
        if self.boost_thrust_factor < 1.0 {
            return Err(SimError::InvalidConfig(
                "Boost factor must not reduce thrust".into(),
            ));
        }
        if self.drag_coef < 0.0 || self.lift_coef < 0.0 {
            return Err(SimError::InvalidConfig(
                "Aerodynamic coefficients must not be negative".into(),
            ));
        }
        if self.stall_speed <= 0.0 {
            return Err(SimError::InvalidConfig(
                "Stall speed must be positive".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.stall_lift_multiplier) {
            return Err(SimError::InvalidConfig(
                "Stall lift multiplier must be between 0 and 1".into(),
            ));
        }
        if self.gravity <= 0.0 {
            return Err(SimError::InvalidConfig("Gravity must be positive".into()));
        }
        if self.pitch_rate <= 0.0 || self.yaw_rate <= 0.0 || self.roll_rate <= 0.0 {
            return Err(SimError::InvalidConfig("Turn rates must be positive".into()));
        }
        if self.max_speed <= 0.0 {
            return Err(SimError::InvalidConfig("Max speed must be positive".into()));
        }
        Ok(())
    }
}

/// Tuning for the ground/air state-machine model.
///
/// The lift coefficient is deliberately absent: it is derived from mass,
/// gravity and takeoff speed via [`RealisticConfig::lift_coef`] so lift
/// balances weight exactly at the takeoff threshold. Storing it separately
/// would let the three drift apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealisticConfig {
    /// Aircraft mass [kg]
    pub mass: f64,
    /// Gravitational acceleration [units/s^2]
    pub gravity: f64,
    /// Thrust at full throttle [N]
    pub max_thrust: f64,
    /// Extra thrust while boosting [N]
    pub boost_thrust: f64,
    /// Base quadratic drag coefficient; doubled in flight [N/(units/s)^2]
    pub drag_coef: f64,
    /// Cubic airbrake drag scale [N/(units/s)^3]
    pub brake_drag: f64,
    /// Rolling friction coefficient while taxiing
    pub ground_friction: f64,
    /// Minimum ground speed to leave the runway [units/s]
    pub takeoff_speed: f64,
    /// Taxi speed ceiling; must leave room to reach takeoff speed [units/s]
    pub taxi_max_speed: f64,
    /// Flight speed ceiling [units/s]
    pub max_speed: f64,
    pub pitch_rate: f64,
    pub yaw_rate: f64,
    pub roll_rate: f64,
}

impl Default for RealisticConfig {
    fn default() -> Self {
        Self {
            mass: 1200.0,
            gravity: GRAVITY,
            max_thrust: 24000.0,
            boost_thrust: 9000.0,
            drag_coef: 0.45,
            brake_drag: 0.015,
            ground_friction: 0.08,
            takeoff_speed: 45.0,
            taxi_max_speed: 60.0,
            max_speed: 180.0,
            pitch_rate: 0.9,
            yaw_rate: 0.7,
            roll_rate: 1.6,
        }
    }
}

impl RealisticConfig {
    /// Lift coefficient such that `lift_coef * takeoff_speed^2` equals
    /// weight: at the takeoff threshold lift carries the aircraft exactly.
    /// Always recomputed so edits to mass, gravity or takeoff speed cannot
    /// leave a stale value behind.
    pub fn lift_coef(&self) -> f64 {
        self.mass * self.gravity / (self.takeoff_speed * self.takeoff_speed)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if self.mass <= 0.0 {
            return Err(SimError::InvalidConfig("Mass must be positive".into()));
        }
        if self.gravity <= 0.0 {
            return Err(SimError::InvalidConfig("Gravity must be positive".into()));
        }
        if self.max_thrust <= 0.0 || self.boost_thrust < 0.0 {
            return Err(SimError::InvalidConfig(
                "Thrust must not be negative".into(),
            ));
        }
        if self.drag_coef < 0.0 || self.brake_drag < 0.0 {
            return Err(SimError::InvalidConfig(
                "Drag coefficients must not be negative".into(),
            ));
        }
        if self.ground_friction < 0.0 {
            return Err(SimError::InvalidConfig(
                "Ground friction must not be negative".into(),
            ));
        }
        if self.takeoff_speed <= 0.0 {
            return Err(SimError::InvalidConfig(
                "Takeoff speed must be positive".into(),
            ));
        }
        if self.taxi_max_speed < self.takeoff_speed {
            return Err(SimError::InvalidConfig(
                "Taxi ceiling below takeoff speed makes takeoff unreachable".into(),
            ));
        }
        if self.max_speed < self.takeoff_speed {
            return Err(SimError::InvalidConfig(
                "Flight ceiling must be at least the takeoff speed".into(),
            ));
        }
        if self.pitch_rate <= 0.0 || self.yaw_rate <= 0.0 || self.roll_rate <= 0.0 {
            return Err(SimError::InvalidConfig("Turn rates must be positive".into()));
        }
        Ok(())
    }
}

/// Top-level dynamics configuration: the selected model plus tuning for all
/// three, so a plane definition can switch fidelity without re-tuning.
///
/// `model` stays a free-form string on purpose: an unknown name must degrade
/// to the forgiving model at construction time instead of failing the whole
/// config load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DynamicsConfig {
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub arcade: ArcadeConfig,
    #[serde(default)]
    pub hybrid: HybridConfig,
    #[serde(default)]
    pub realistic: RealisticConfig,
}

impl DynamicsConfig {
    /// Load a dynamics configuration from a YAML file
    pub fn from_yaml(path: &str) -> Result<Self, SimError> {
        let file = std::fs::File::open(path)?;
        let config: DynamicsConfig = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        self.arcade.validate()?;
        self.hybrid.validate()?;
        self.realistic.validate()?;
        Ok(())
    }
}
