// Character motion state machine

use crate::engine::assets::StateName;
use crate::engine::input::Direction;

/// Represents what the character is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionState {
    /// Resting in place
    #[default]
    Sit,
    /// Walking in a direction
    Walk(Direction),
    /// Mid-jump; ends on its own when no frames remain
    Jump { frames_remaining: usize },
}

impl MotionState {
    /// Check if the character is jumping
    pub fn is_jumping(&self) -> bool {
        matches!(self, Self::Jump { .. })
    }

    /// Check if the character is walking
    pub fn is_walking(&self) -> bool {
        matches!(self, Self::Walk(_))
    }

    /// Check if a jump may start
    pub fn can_jump(&self) -> bool {
        !self.is_jumping()
    }

    /// Get the sheet state to animate for this motion
    pub fn state_name(&self) -> StateName {
        match self {
            Self::Sit => StateName::Sit,
            Self::Walk(_) => StateName::Walk,
            Self::Jump { .. } => StateName::Jump,
        }
    }
}

/// State machine that handles motion transitions
///
/// Jumps are non-interruptible: walk and stop requests are ignored until the
/// jump has played out, after which the character always sits.
#[derive(Debug)]
pub struct MotionStateMachine {
    current_state: MotionState,
    previous_state: MotionState,
}

impl Default for MotionStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionStateMachine {
    pub fn new() -> Self {
        Self {
            current_state: MotionState::Sit,
            previous_state: MotionState::Sit,
        }
    }

    /// Get the current state
    pub fn state(&self) -> MotionState {
        self.current_state
    }

    /// Get the previous state
    pub fn previous_state(&self) -> MotionState {
        self.previous_state
    }

    fn transition(&mut self, new_state: MotionState) {
        self.previous_state = self.current_state;
        self.current_state = new_state;
    }

    /// Start or turn a walk. Returns true if the state changed
    pub fn start_walking(&mut self, direction: Direction) -> bool {
        match self.current_state {
            MotionState::Jump { .. } => false,
            MotionState::Walk(current) if current == direction => false,
            MotionState::Sit | MotionState::Walk(_) => {
                self.transition(MotionState::Walk(direction));
                true
            }
        }
    }

    /// Stop walking and sit. Returns true if the state changed
    pub fn stop_walking(&mut self) -> bool {
        if self.current_state.is_walking() {
            self.transition(MotionState::Sit);
            true
        } else {
            false
        }
    }

    /// Start a jump lasting `total_frames` ticks. Returns true if it started
    pub fn jump(&mut self, total_frames: usize) -> bool {
        if !self.current_state.can_jump() || total_frames == 0 {
            return false;
        }
        self.transition(MotionState::Jump {
            frames_remaining: total_frames,
        });
        true
    }

    /// Advance one tick. Returns true if a jump finished on this tick
    pub fn tick(&mut self) -> bool {
        if let MotionState::Jump { frames_remaining } = &mut self.current_state {
            *frames_remaining = frames_remaining.saturating_sub(1);
            if *frames_remaining == 0 {
                self.transition(MotionState::Sit);
                return true;
            }
        }

        false
    }
}
