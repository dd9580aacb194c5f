pub mod camera;
pub mod config;
pub mod dynamics;
pub mod physics;
pub mod state;
pub mod utils;

pub use camera::{ChaseCamera, ChaseCameraConfig};
pub use config::{ArcadeConfig, DynamicsConfig, HybridConfig, ModelKind, RealisticConfig};
pub use dynamics::{FlightDynamics, Telemetry};
pub use physics::DynamicsModel;
pub use state::{ControlInput, FlightState};
pub use utils::SimError;
