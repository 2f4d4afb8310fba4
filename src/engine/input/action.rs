// Input actions, directions and default key bindings

use winit::keyboard::KeyCode;

/// Represents all possible in-game actions bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Quit,
}

impl Action {
    /// Direction requested by a movement action
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Self::MoveLeft => Some(Direction::Left),
            Self::MoveRight => Some(Direction::Right),
            Self::Jump | Self::Quit => None,
        }
    }
}

/// Horizontal direction of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Whether this direction faces right
    pub fn is_right(&self) -> bool {
        matches!(self, Self::Right)
    }

    /// +1.0 for right, -1.0 for left
    pub fn sign(&self) -> f32 {
        crate::core::math::facing_sign(self.is_right())
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// What the character is being asked to do this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    /// Walk in a direction until told otherwise (starts or turns a walk)
    Walk(Direction),
    /// Walk a distance proportional to `strength` in [0.0, 1.0], then sit
    Steer { direction: Direction, strength: f32 },
    /// No direction requested; a walking character sits down
    Stop,
    /// Jump, unless already jumping
    Jump,
}

/// Default keyboard bindings
pub fn default_bindings() -> Vec<(KeyCode, Action)> {
    vec![
        (KeyCode::ArrowLeft, Action::MoveLeft),
        (KeyCode::ArrowRight, Action::MoveRight),
        (KeyCode::KeyA, Action::MoveLeft),
        (KeyCode::KeyD, Action::MoveRight),
        (KeyCode::Space, Action::Jump),
        (KeyCode::Escape, Action::Quit),
    ]
}
