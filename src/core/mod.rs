// Core building blocks shared by engine and game code

pub mod config;
pub mod error;
pub mod math;

pub use config::{DemoConfig, SpawnPoint};
