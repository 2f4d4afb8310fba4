// Demo configuration presets

use crate::engine::assets::SheetLayout;
use crate::engine::input::SteeringConfig;
use glam::Vec2;
use std::path::PathBuf;
use std::time::Duration;

/// Named places on the background where the dog can start
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SpawnPoint {
    Street,
    Bench,
    ParkEntrance,
}

impl SpawnPoint {
    /// Position as a fraction of the screen size
    pub fn fraction(&self) -> Vec2 {
        match self {
            Self::Street => Vec2::new(0.10, 0.62),
            Self::Bench => Vec2::new(0.5, 0.65),
            Self::ParkEntrance => Vec2::new(0.8, 0.7),
        }
    }

    /// Position in pixels for a given screen size
    pub fn position(&self, screen_width: u32, screen_height: u32) -> Vec2 {
        let fraction = self.fraction();
        Vec2::new(
            (screen_width as f32 * fraction.x).floor(),
            (screen_height as f32 * fraction.y).floor(),
        )
    }
}

/// Everything the demo needs at setup; fixed for the life of the process
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Window title
    pub title: String,
    pub screen_width: u32,
    pub screen_height: u32,

    /// Directory asset paths are resolved against
    pub asset_root: PathBuf,
    /// Sprite sheet path relative to `asset_root`
    pub sheet_path: String,
    /// Number of rows the sheet is declared to have
    pub sheet_rows: usize,
    pub layout: SheetLayout,

    /// Render/input polling rate
    pub target_fps: u32,
    /// Time between animation frames
    pub frame_delay: Duration,
    pub spawn_point: SpawnPoint,

    pub steering: SteeringConfig,
    /// Text file holding the motor's absolute position in degrees
    ///
    /// The default is a placeholder; point it at whatever driver or bridge
    /// process writes the angle.
    pub sensor_path: PathBuf,
    pub sensor_period: Duration,
}

impl DemoConfig {
    /// Time budget of one main loop iteration
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.target_fps.max(1)))
    }

    /// Where the dog starts
    pub fn spawn_position(&self) -> Vec2 {
        self.spawn_point
            .position(self.screen_width, self.screen_height)
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "Dog Sprite Demo".to_string(),
            screen_width: 1024,
            screen_height: 576,
            asset_root: PathBuf::from("."),
            sheet_path: "static/welsh-corgi-sprites/corgi-asset.png".to_string(),
            sheet_rows: 8,
            layout: SheetLayout::corgi(),
            target_fps: 60,
            frame_delay: Duration::from_millis(100),
            spawn_point: SpawnPoint::Street,
            steering: SteeringConfig::default(),
            sensor_path: PathBuf::from("/run/buildhat/motor_a/position"),
            sensor_period: Duration::from_millis(100),
        }
    }
}
