// Rotary controller signal normalization
//
// Converts absolute angular readings from a steering motor into a bounded,
// deadzoned, change-gated steering value. Two thresholds are used: a coarse
// one in degrees decides whether the wheel is moving at all, and a finer one
// on the normalized value decides whether the command actually changed.

use super::action::{Direction, Intent};
use super::sensor::SharedReading;
use crate::core::error::InputError;
use crate::core::math::{apply_deadzone, clamp_unit};

/// Tuning for the steering normalizer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringConfig {
    /// Minimum movement in degrees between polls to count as rotation
    pub change_threshold: u32,
    /// Angular range in degrees that maps to full deflection
    pub scale_degrees: f32,
    /// Normalized magnitude treated as no input
    pub deadzone: f32,
    /// Minimum change in the normalized value to count as a new command
    pub hysteresis: f32,
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            change_threshold: 15,
            scale_degrees: 100.0,
            deadzone: 0.1,
            hysteresis: 0.05,
        }
    }
}

/// Result of one normalizer poll
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringSignal {
    /// Raw absolute position in degrees
    pub raw_position: i32,
    /// Steering value in [-1.0, 1.0]; zero while the wheel is still
    pub normalized: f32,
    /// Whether the wheel moved at least the change threshold since last poll
    pub is_rotating: bool,
    /// Whether this poll carries a changed command
    pub is_new_input: bool,
    pub left: bool,
    pub right: bool,
}

impl SteeringSignal {
    /// Direction requested by this signal, if any
    pub fn direction(&self) -> Option<Direction> {
        if self.left {
            Some(Direction::Left)
        } else if self.right {
            Some(Direction::Right)
        } else {
            None
        }
    }

    /// Intent for the character
    ///
    /// A direction only starts a walk when it is new input, and the walk's
    /// length follows the deflection. No direction always asks the character
    /// to stop. A held, unchanged direction yields `None` so the current walk
    /// simply continues.
    pub fn intent(&self) -> Option<Intent> {
        match self.direction() {
            Some(direction) if self.is_new_input => Some(Intent::Steer {
                direction,
                strength: self.normalized.abs(),
            }),
            Some(_) => None,
            None => Some(Intent::Stop),
        }
    }
}

/// Stateful normalizer for one steering controller
#[derive(Debug, Clone)]
pub struct SteeringNormalizer {
    config: SteeringConfig,
    /// Reading that counts as centered, captured on the first poll
    initial_reference: Option<i32>,
    /// Latest raw reading, updated on every poll
    last_raw: Option<i32>,
    /// Normalized value reported by the previous poll
    last_normalized: f32,
}

impl SteeringNormalizer {
    pub fn new(config: SteeringConfig) -> Self {
        Self {
            config,
            initial_reference: None,
            last_raw: None,
            last_normalized: 0.0,
        }
    }

    /// Normalize one raw reading
    pub fn poll(&mut self, raw_reading: i32) -> SteeringSignal {
        let reference = *self.initial_reference.get_or_insert(raw_reading);
        let previous = self.last_raw.unwrap_or(raw_reading);

        let delta = raw_reading.abs_diff(previous);
        let is_rotating = delta >= self.config.change_threshold;
        self.last_raw = Some(raw_reading);

        let relative = (i64::from(raw_reading) - i64::from(reference)) as f32;
        let mut normalized = apply_deadzone(
            clamp_unit(relative / self.config.scale_degrees),
            self.config.deadzone,
        );
        if !is_rotating {
            normalized = 0.0;
        }

        let is_new_input =
            is_rotating && (normalized - self.last_normalized).abs() >= self.config.hysteresis;
        self.last_normalized = normalized;

        SteeringSignal {
            raw_position: raw_reading,
            normalized,
            is_rotating,
            is_new_input,
            left: normalized < -self.config.deadzone,
            right: normalized > self.config.deadzone,
        }
    }

}

impl Default for SteeringNormalizer {
    fn default() -> Self {
        Self::new(SteeringConfig::default())
    }
}

/// Intent source backed by the shared latest sensor reading
///
/// The normalizer is only polled when the poller has published a fresh
/// reading; between readings no intent is produced and the character keeps
/// doing what it was doing.
pub struct SteeringIntents {
    normalizer: SteeringNormalizer,
    reading: SharedReading,
    last_sequence: Option<u64>,
}

impl SteeringIntents {
    pub fn new(normalizer: SteeringNormalizer, reading: SharedReading) -> Self {
        Self {
            normalizer,
            reading,
            last_sequence: None,
        }
    }

    /// Intent for this tick, if a new reading produced one
    pub fn next_intent(&mut self) -> Option<Intent> {
        let reading = match self.reading.latest() {
            Ok(reading) => reading,
            Err(InputError::Unavailable) => return None,
            Err(e) => {
                log::trace!("Steering input skipped: {}", e);
                return None;
            }
        };

        if self.last_sequence == Some(reading.sequence) {
            return None;
        }
        self.last_sequence = Some(reading.sequence);

        let signal = self.normalizer.poll(reading.degrees);
        log::trace!(
            "Steering raw={} normalized={:.2} rotating={} new={}",
            signal.raw_position,
            signal.normalized,
            signal.is_rotating,
            signal.is_new_input
        );
        signal.intent()
    }
}
