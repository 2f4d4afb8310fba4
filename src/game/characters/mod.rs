// Character system
//
// This module contains everything related to the dog character:
// - Motion stats and presets
// - State machine for sit / walk / jump
// - Animation cursor (frame, facing, position)
// - The `Dog` that ties them to a texture table

pub mod animation;
pub mod character;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use character::Dog;
pub use stats::BASE_STATS;
