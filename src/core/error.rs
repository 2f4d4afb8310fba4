// Error types shared across the demo

use crate::engine::assets::StateName;

/// Fatal configuration and contract errors
///
/// These are raised at setup (bad sheet layout) or when a caller asks for a
/// state or frame outside the loaded table. None of them are retried.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Sheet declares {declared} rows but the layout has {layout} states")]
    RowCountMismatch { declared: usize, layout: usize },

    #[error("State '{0}' appears more than once in the sheet layout")]
    DuplicateState(StateName),

    #[error("State '{state}' has {columns} columns; at least 2 are needed (column 0 is reserved)")]
    EmptyState { state: StateName, columns: u32 },

    #[error("Sheet is {width}x{height} but the layout needs at least {needed_width}x{needed_height}")]
    SheetTooSmall {
        needed_width: u32,
        needed_height: u32,
        width: u32,
        height: u32,
    },

    #[error("Unknown state: {0}")]
    UnknownState(String),

    #[error("State '{0}' is not present in the texture table")]
    MissingState(StateName),

    #[error("Frame {index} out of range for state '{state}' ({count} frames)")]
    FrameOutOfRange {
        state: StateName,
        index: usize,
        count: usize,
    },
}

/// Transient errors from the rotary controller
///
/// Callers treat every variant as "no new intent this tick".
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("No controller reading available yet")]
    Unavailable,

    #[error("Controller read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed controller reading: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_mismatch_display() {
        let err = ConfigError::RowCountMismatch {
            declared: 3,
            layout: 2,
        };
        assert_eq!(
            err.to_string(),
            "Sheet declares 3 rows but the layout has 2 states"
        );
    }

    #[test]
    fn test_frame_out_of_range_display() {
        let err = ConfigError::FrameOutOfRange {
            state: StateName::Walk,
            index: 7,
            count: 4,
        };
        assert_eq!(
            err.to_string(),
            "Frame 7 out of range for state 'walk' (4 frames)"
        );
    }

    #[test]
    fn test_input_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: InputError = io.into();
        assert!(matches!(err, InputError::Io(_)));
    }
}
