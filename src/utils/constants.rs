pub const GRAVITY: f64 = 9.81; // m/s^2

// Control thresholds shared across models
pub const AUTO_LEVEL_INPUT_THRESHOLD: f64 = 0.1; // leveling engages below this input magnitude
pub const TAKEOFF_THROTTLE_THRESHOLD: f64 = 0.5;
pub const LANDING_SPEED_FACTOR: f64 = 0.8; // of takeoff speed
pub const GROUND_CONTACT_EPSILON: f64 = 0.05; // m
