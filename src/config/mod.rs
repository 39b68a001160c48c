//! Configuration module for SpendWise
//!
//! - Platform path resolution (with an environment override)
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SpendPaths;
pub use settings::Settings;
