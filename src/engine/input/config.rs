// Key binding configuration

use super::action::{default_bindings, Action};
use std::collections::HashMap;
use winit::keyboard::KeyCode;

/// Maps physical keys to actions
#[derive(Debug, Clone)]
pub struct InputConfig {
    bindings: HashMap<KeyCode, Action>,
}

impl InputConfig {
    /// Create a configuration from a list of bindings
    ///
    /// A key listed twice keeps its last action.
    pub fn from_bindings(bindings: Vec<(KeyCode, Action)>) -> Self {
        Self {
            bindings: bindings.into_iter().collect(),
        }
    }

    /// Get the action bound to a key
    pub fn get_action(&self, key: KeyCode) -> Option<Action> {
        self.bindings.get(&key).copied()
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::from_bindings(default_bindings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InputConfig::default();
        assert_eq!(config.get_action(KeyCode::ArrowLeft), Some(Action::MoveLeft));
        assert_eq!(config.get_action(KeyCode::KeyD), Some(Action::MoveRight));
        assert_eq!(config.get_action(KeyCode::Space), Some(Action::Jump));
        assert_eq!(config.get_action(KeyCode::Escape), Some(Action::Quit));
        assert_eq!(config.get_action(KeyCode::KeyZ), None);
    }

    #[test]
    fn test_later_binding_wins() {
        let config = InputConfig::from_bindings(vec![
            (KeyCode::KeyJ, Action::MoveLeft),
            (KeyCode::KeyJ, Action::Jump),
        ]);

        assert_eq!(config.get_action(KeyCode::KeyJ), Some(Action::Jump));
    }
}
