// Character animation cursor

use crate::engine::assets::StateName;
use glam::Vec2;

/// Where the character is in its animation and on screen
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationCursor {
    /// Sheet state being played
    pub state: StateName,
    /// Current frame, always below the state's frame count
    pub frame_index: usize,
    /// Whether the unmirrored texture is used
    pub facing_right: bool,
    /// Top-left position on screen (pixels)
    pub position: Vec2,
    /// Horizontal movement per tick (pixels)
    pub velocity_x: f32,
}

impl AnimationCursor {
    pub fn new(state: StateName, position: Vec2) -> Self {
        Self {
            state,
            frame_index: 0,
            facing_right: true,
            position,
            velocity_x: 0.0,
        }
    }

    /// Play a state from its first frame
    pub fn restart(&mut self, state: StateName) {
        self.state = state;
        self.frame_index = 0;
    }

    /// Step to the next frame, wrapping at `frame_count`
    pub fn advance(&mut self, frame_count: usize) {
        self.frame_index = if frame_count == 0 {
            0
        } else {
            (self.frame_index + 1) % frame_count
        };
    }

    /// Move by the current velocity and keep x within `[0, max_x]`
    pub fn step(&mut self, max_x: f32) {
        self.position.x = (self.position.x + self.velocity_x).clamp(0.0, max_x.max(0.0));
    }
}
