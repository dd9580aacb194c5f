use nalgebra::{UnitQuaternion, Vector3};

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / std::f64::consts::PI
}

/// Aircraft attitude from euler angles, composed roll -> pitch -> yaw.
///
/// World frame is Y-up with the nose pointing +Z at identity; positive pitch
/// raises the nose, positive yaw turns right, positive roll drops the right
/// wing.
pub fn attitude_from_euler(pitch: f64, yaw: f64, roll: f64) -> UnitQuaternion<f64> {
    UnitQuaternion::from_axis_angle(&Vector3::y_axis(), yaw)
        * UnitQuaternion::from_axis_angle(&Vector3::x_axis(), -pitch)
        * UnitQuaternion::from_axis_angle(&Vector3::z_axis(), roll)
}

/// Nose direction of an attitude quaternion.
pub fn forward_from_attitude(attitude: &UnitQuaternion<f64>) -> Vector3<f64> {
    attitude * Vector3::z()
}

/// Nose direction straight from pitch and yaw, no quaternion involved.
/// Agrees with [`forward_from_attitude`] for any roll.
pub fn forward_from_angles(pitch: f64, yaw: f64) -> Vector3<f64> {
    Vector3::new(
        pitch.cos() * yaw.sin(),
        pitch.sin(),
        pitch.cos() * yaw.cos(),
    )
}

/// Recover (pitch, yaw) from a forward direction.
pub fn angles_from_forward(forward: &Vector3<f64>) -> (f64, f64) {
    let pitch = forward.y.clamp(-1.0, 1.0).asin();
    let yaw = forward.x.atan2(forward.z);
    (pitch, yaw)
}

/// Unit direction of `v`. A degenerate length divides by 1 instead, so the
/// zero vector maps to the zero vector rather than NaN.
pub fn normalize_or_zero(v: &Vector3<f64>) -> Vector3<f64> {
    let norm = v.norm();
    let divisor = if norm > f64::EPSILON { norm } else { 1.0 };
    v / divisor
}

/// Single-pole exponential smoothing of `current` toward `target`.
///
/// Frame-rate independent: the remaining error decays by `e^(-stiffness*dt)`
/// regardless of how the elapsed time is sliced into ticks.
pub fn damp(current: f64, target: f64, stiffness: f64, dt: f64) -> f64 {
    current + (target - current) * (1.0 - (-stiffness * dt).exp())
}

/// Per-axis exponential smoothing of a vector toward a target.
pub fn damp_vec3(
    current: &Vector3<f64>,
    target: &Vector3<f64>,
    stiffness: f64,
    dt: f64,
) -> Vector3<f64> {
    Vector3::new(
        damp(current.x, target.x, stiffness, dt),
        damp(current.y, target.y, stiffness, dt),
        damp(current.z, target.z, stiffness, dt),
    )
}
