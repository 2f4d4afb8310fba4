// Keyboard intent source

use super::action::{Action, Direction, Intent};
use super::config::InputConfig;
use std::collections::VecDeque;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::PhysicalKey;

/// Turns key presses and releases into character intents
///
/// Direction keys are tracked while held so that releasing one of two held
/// keys turns the walk instead of stopping it. OS key repeats are ignored.
pub struct KeyboardInput {
    /// Key binding configuration
    config: InputConfig,

    /// Direction keys currently held, most recent last
    held: Vec<Direction>,

    /// Intents produced since the last drain
    pending: VecDeque<Intent>,

    /// Whether the quit action was pressed
    quit_requested: bool,
}

impl KeyboardInput {
    /// Create a keyboard source with the given bindings
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            held: Vec::new(),
            pending: VecDeque::new(),
            quit_requested: false,
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(key_code) = event.physical_key else {
            return;
        };
        let Some(action) = self.config.get_action(key_code) else {
            return;
        };

        match event.state {
            ElementState::Pressed => {
                if !event.repeat {
                    self.press(action);
                }
            }
            ElementState::Released => self.release(action),
        }
    }

    /// Register an action press
    pub fn press(&mut self, action: Action) {
        match action {
            Action::MoveLeft | Action::MoveRight => {
                let Some(direction) = action.direction() else {
                    return;
                };
                self.held.retain(|d| *d != direction);
                self.held.push(direction);
                self.pending.push_back(Intent::Walk(direction));
            }
            Action::Jump => self.pending.push_back(Intent::Jump),
            Action::Quit => self.quit_requested = true,
        }
    }

    /// Register an action release
    pub fn release(&mut self, action: Action) {
        let Some(direction) = action.direction() else {
            return;
        };
        if !self.held.contains(&direction) {
            return;
        }
        self.held.retain(|d| *d != direction);

        match self.held.last() {
            Some(&still_held) => self.pending.push_back(Intent::Walk(still_held)),
            None => self.pending.push_back(Intent::Stop),
        }
    }

    /// Take all intents produced since the last call, oldest first
    pub fn drain_intents(&mut self) -> Vec<Intent> {
        self.pending.drain(..).collect()
    }

    /// Whether the quit key was pressed
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Forget held keys and undrained intents (e.g. on focus loss)
    ///
    /// If a direction was held, the queue is left holding a single `Stop`.
    pub fn reset(&mut self) {
        self.pending.clear();
        if !self.held.is_empty() {
            self.pending.push_back(Intent::Stop);
        }
        self.held.clear();
    }
}

impl Default for KeyboardInput {
    fn default() -> Self {
        Self::new(InputConfig::default())
    }
}
