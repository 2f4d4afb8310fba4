// The dog character: textures, motion state and animation cursor

use super::animation::AnimationCursor;
use super::state::{MotionState, MotionStateMachine};
use super::stats::MotionStats;
use crate::core::error::ConfigError;
use crate::core::math::facing_sign;
use crate::engine::assets::{StateName, TextureTable};
use crate::engine::input::{Direction, Intent};
use glam::Vec2;
use image::RgbaImage;
use log::{debug, trace};

/// Frame counts of the states the dog moves through
#[derive(Debug, Clone, Copy)]
struct ClipLengths {
    sit: usize,
    walk: usize,
    jump: usize,
}

impl ClipLengths {
    fn from_table(textures: &TextureTable) -> Result<Self, ConfigError> {
        Ok(Self {
            sit: textures.frame_count(StateName::Sit)?,
            walk: textures.frame_count(StateName::Walk)?,
            jump: textures.frame_count(StateName::Jump)?,
        })
    }

    fn for_motion(&self, motion: MotionState) -> usize {
        match motion {
            MotionState::Sit => self.sit,
            MotionState::Walk(_) => self.walk,
            MotionState::Jump { .. } => self.jump,
        }
    }
}

/// What to draw this tick
#[derive(Debug, Clone, Copy)]
pub struct RenderFrame<'a> {
    pub texture: &'a RgbaImage,
    pub position: Vec2,
    pub facing_right: bool,
    pub state: StateName,
    pub frame_index: usize,
}

/// An animated dog that sits, walks and jumps
#[derive(Debug)]
pub struct Dog {
    /// Frames for every sheet state
    textures: TextureTable,
    clips: ClipLengths,

    /// State machine for motion
    machine: MotionStateMachine,
    /// Frame, facing and position
    cursor: AnimationCursor,

    /// Where a steered walk ends; `None` walks until stopped
    walk_target: Option<f32>,

    stats: MotionStats,
    /// Rightmost allowed x
    max_x: f32,
}

impl Dog {
    /// Create a sitting dog at `spawn`
    ///
    /// The table must contain the sit, walk and jump states.
    pub fn new(
        textures: TextureTable,
        stats: MotionStats,
        spawn: Vec2,
        screen_width: f32,
    ) -> Result<Self, ConfigError> {
        let clips = ClipLengths::from_table(&textures)?;
        let max_x = stats.max_x(screen_width);

        let mut cursor = AnimationCursor::new(StateName::Sit, spawn);
        cursor.position.x = cursor.position.x.clamp(0.0, max_x);

        Ok(Self {
            textures,
            clips,
            machine: MotionStateMachine::new(),
            cursor,
            walk_target: None,
            stats,
            max_x,
        })
    }

    /// React to an intent. Returns true if the motion state changed
    pub fn apply_intent(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::Walk(direction) => self.walk(direction),
            Intent::Steer {
                direction,
                strength,
            } => self.steer(direction, strength),
            Intent::Stop => self.stop(),
            Intent::Jump => self.jump(),
        }
    }

    /// Walk until stopped, or turn around if walking the other way
    pub fn walk(&mut self, direction: Direction) -> bool {
        self.start_walk(direction, None)
    }

    /// Walk `strength * steer_range` pixels, then sit
    ///
    /// The target is clamped to the visible range. A steer in the direction
    /// already being walked keeps the current target.
    pub fn steer(&mut self, direction: Direction, strength: f32) -> bool {
        let distance = strength.clamp(0.0, 1.0) * self.stats.steer_range;
        let target = (self.cursor.position.x + distance * direction.sign())
            .clamp(0.0, self.max_x);
        self.start_walk(direction, Some(target))
    }

    fn start_walk(&mut self, direction: Direction, target: Option<f32>) -> bool {
        if !self.machine.start_walking(direction) {
            return false;
        }

        self.walk_target = target;
        self.cursor.facing_right = direction.is_right();
        self.cursor.restart(self.machine.state().state_name());
        self.cursor.velocity_x = self.stats.walk_step * direction.sign();
        debug!(
            "Dog {:?} -> walking {} (target {:?})",
            self.machine.previous_state(),
            direction.name(),
            target
        );
        true
    }

    /// Sit down if walking
    pub fn stop(&mut self) -> bool {
        if !self.machine.stop_walking() {
            return false;
        }

        self.sit();
        debug!("Dog sat down");
        true
    }

    /// Jump in the facing direction, unless already jumping
    pub fn jump(&mut self) -> bool {
        let frames = self.clips.jump;
        if !self.machine.jump(frames) {
            return false;
        }

        self.walk_target = None;
        self.cursor.restart(self.machine.state().state_name());
        self.cursor.velocity_x =
            self.stats.jump_distance / frames as f32 * facing_sign(self.cursor.facing_right);
        debug!("Dog jumping over {} frames", frames);
        true
    }

    fn sit(&mut self) {
        self.walk_target = None;
        self.cursor.restart(self.machine.state().state_name());
        self.cursor.velocity_x = 0.0;
    }

    /// Whether this tick's step reached or passed the walk target
    fn reached(&self, target: f32) -> bool {
        let x = self.cursor.position.x;
        let velocity = self.cursor.velocity_x;
        (velocity > 0.0 && x >= target) || (velocity < 0.0 && x <= target)
    }

    /// Advance one animation tick
    pub fn update(&mut self) {
        let frame_count = self.clips.for_motion(self.machine.state());
        self.cursor.advance(frame_count);
        self.cursor.step(self.max_x);

        if let Some(target) = self.walk_target {
            if self.reached(target) && self.machine.stop_walking() {
                self.cursor.position.x = target;
                self.sit();
                debug!("Dog reached x={:.1} and sat down", target);
            }
        }

        if self.machine.tick() {
            self.sit();
            debug!("Jump finished at x={:.1}", self.cursor.position.x);
        }

        trace!(
            "{} frame {} at ({:.1}, {:.1})",
            self.cursor.state,
            self.cursor.frame_index,
            self.cursor.position.x,
            self.cursor.position.y
        );
    }

    /// Texture, position and facing to draw
    pub fn render_frame(&self) -> Result<RenderFrame<'_>, ConfigError> {
        let texture = self.textures.texture(
            self.cursor.state,
            self.cursor.frame_index,
            self.cursor.facing_right,
        )?;

        Ok(RenderFrame {
            texture,
            position: self.cursor.position,
            facing_right: self.cursor.facing_right,
            state: self.cursor.state,
            frame_index: self.cursor.frame_index,
        })
    }

    pub fn position(&self) -> Vec2 {
        self.cursor.position
    }
}
