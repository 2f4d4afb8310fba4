// Input handling system
//
// Two interchangeable intent sources drive the character:
//
// - `keyboard`: arrow keys / space through winit key events
// - `steering`: a rotary motor read by a background `sensor` poller and
//   filtered by the steering normalizer
//
// Both produce `Intent`s; the character decides what to do with them.
//
// ## Usage Example
//
// ```rust
// let poller = SensorPoller::spawn(FileSensor::new(path), period)?;
// let mut steering = SteeringIntents::new(SteeringNormalizer::default(), poller.reading());
//
// // Once per frame
// if let Some(intent) = steering.next_intent() {
//     dog.apply_intent(intent);
// }
// ```

pub mod action;
pub mod config;
pub mod keyboard;
pub mod sensor;
pub mod steering;

// Re-export commonly used types
pub use action::{Direction, Intent};
pub use keyboard::KeyboardInput;
pub use sensor::{FileSensor, SensorPoller};
pub use steering::{SteeringConfig, SteeringIntents, SteeringNormalizer};

/// Where character intents come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Arrow keys and space bar
    Keyboard,
    /// Rotary steering motor
    Peripheral,
}

impl InputMode {
    pub fn from_keyboard_flag(keyboard: bool) -> Self {
        if keyboard {
            Self::Keyboard
        } else {
            Self::Peripheral
        }
    }
}
