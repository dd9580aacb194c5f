mod arcade;
mod hybrid;
mod realistic;

pub use arcade::ArcadeModel;
pub use hybrid::HybridModel;
pub use realistic::RealisticModel;
