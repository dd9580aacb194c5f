pub mod models;
pub mod traits;

pub use models::{ArcadeModel, HybridModel, RealisticModel};
pub use traits::DynamicsModel;
