use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, trace};
use std::time::Instant;
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use crate::core::{DemoConfig, SpawnPoint};
use engine::assets::AssetLoader;
use engine::game_loop::GameLoop;
use engine::input::{
    FileSensor, InputMode, Intent, KeyboardInput, SensorPoller, SteeringIntents,
    SteeringNormalizer,
};
use game::characters::{Dog, BASE_STATS};

#[derive(Parser, Debug)]
#[command(name = "corgi-demo")]
#[command(about = "A sprite-sheet dog that sits, walks and jumps", long_about = None)]
struct Args {
    /// Steer with the arrow keys and space bar instead of the rotary motor
    #[arg(long, visible_alias = "mac")]
    keyboard: bool,

    /// Where on screen the dog starts
    #[arg(long, value_enum, default_value = "street")]
    spawn: SpawnPoint,
}

/// Intent sources for one run
///
/// The keyboard is always listened to so Escape can quit; its movement
/// intents are only used in keyboard mode.
struct Controls {
    keyboard: KeyboardInput,
    steering: Option<(SensorPoller, SteeringIntents)>,
}

impl Controls {
    fn new(mode: InputMode, config: &DemoConfig) -> Result<Self> {
        let steering = match mode {
            InputMode::Keyboard => None,
            InputMode::Peripheral => {
                let sensor = FileSensor::new(&config.sensor_path);
                info!("Reading steering angle from {}", sensor.path().display());
                let poller = SensorPoller::spawn(sensor, config.sensor_period)
                    .context("Failed to start sensor poller")?;
                let intents = SteeringIntents::new(
                    SteeringNormalizer::new(config.steering),
                    poller.reading(),
                );
                Some((poller, intents))
            }
        };

        Ok(Self {
            keyboard: KeyboardInput::default(),
            steering,
        })
    }

    /// Intents gathered since the last frame
    fn drain(&mut self) -> Vec<Intent> {
        let keyboard_intents = self.keyboard.drain_intents();
        match &mut self.steering {
            Some((_, intents)) => intents.next_intent().into_iter().collect(),
            None => keyboard_intents,
        }
    }

    fn shutdown(&mut self) {
        if let Some((poller, _)) = &mut self.steering {
            poller.stop();
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting corgi demo...");

    let config = DemoConfig {
        spawn_point: args.spawn,
        ..DemoConfig::default()
    };
    let mode = InputMode::from_keyboard_flag(args.keyboard);
    info!("Input mode: {:?}", mode);

    // Load and slice the sprite sheet
    let loader = AssetLoader::new(&config.asset_root);
    let textures = loader
        .load_texture_table(&config.sheet_path, &config.layout, config.sheet_rows)
        .context("Failed to load sprite sheet")?;

    let mut dog = Dog::new(
        textures,
        BASE_STATS,
        config.spawn_position(),
        config.screen_width as f32,
    )?;
    info!(
        "Dog spawned at {:?} ({:.0}, {:.0})",
        config.spawn_point,
        dog.position().x,
        dog.position().y
    );

    let mut controls = Controls::new(mode, &config)?;

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(config.title.as_str())
        .with_inner_size(winit::dpi::LogicalSize::new(
            config.screen_width,
            config.screen_height,
        ))
        .with_resizable(false)
        .build(&event_loop)?;

    info!("Window created successfully");

    let frame_interval = config.frame_interval();
    let mut game_loop = GameLoop::new(config.frame_delay);

    // Main event loop
    event_loop.run(move |event, elwt| {
        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                controls.keyboard.process_keyboard_event(&event);
                if controls.keyboard.quit_requested() {
                    info!("Quit pressed, shutting down...");
                    elwt.exit();
                }
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                controls.keyboard.reset();
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => match dog.render_frame() {
                Ok(frame) => trace!(
                    "Draw {} #{} ({}x{}) at ({:.0}, {:.0}) facing {}",
                    frame.state,
                    frame.frame_index,
                    frame.texture.width(),
                    frame.texture.height(),
                    frame.position.x,
                    frame.position.y,
                    if frame.facing_right { "right" } else { "left" }
                ),
                Err(e) => {
                    error!("No texture for current frame: {}", e);
                    elwt.exit();
                }
            },
            Event::AboutToWait => {
                for intent in controls.drain() {
                    dog.apply_intent(intent);
                }

                let ticks = game_loop.begin_frame();
                for _ in 0..ticks {
                    dog.update();
                }
                if ticks > 0 {
                    window.request_redraw();
                }

                elwt.set_control_flow(ControlFlow::WaitUntil(Instant::now() + frame_interval));
            }
            Event::LoopExiting => {
                controls.shutdown();
                info!(
                    "Ran {} ticks over {} frames in {:.1}s ({:.1} FPS)",
                    game_loop.tick_count(),
                    game_loop.frame_count(),
                    game_loop.elapsed().as_secs_f32(),
                    game_loop.fps()
                );
            }
            _ => {}
        }
    }).map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
