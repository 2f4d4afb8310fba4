/// Animation tick timing
///
/// The main loop runs at the render/poll rate, but the character only
/// advances on a slower fixed period. `GameLoop` accumulates wall-clock time
/// and reports how many animation ticks are due each frame.
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Maximum number of ticks run in one frame after a stall
const MAX_CATCHUP_TICKS: u32 = 5;

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Tick timing state
pub struct GameLoop {
    /// Time between animation ticks
    tick_period: Duration,

    /// Accumulated time not yet consumed by ticks
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Time when the loop started
    start_time: Instant,

    /// Frame timing history for FPS calculation
    frame_times: VecDeque<Duration>,

    /// Current frame number
    frame_count: u64,

    /// Total ticks executed
    tick_count: u64,

    /// Current FPS (updated periodically)
    current_fps: f32,
}

impl GameLoop {
    /// Create a loop that ticks every `tick_period`
    pub fn new(tick_period: Duration) -> Self {
        let now = Instant::now();
        Self {
            tick_period: tick_period.max(Duration::from_millis(1)),
            accumulator: Duration::ZERO,
            last_frame_time: now,
            start_time: now,
            frame_times: VecDeque::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            tick_count: 0,
            current_fps: 0.0,
        }
    }

    /// Begin a new frame, returns the number of animation ticks to run
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.advance(frame_time)
    }

    /// Account for `frame_time` of elapsed time, returns ticks due
    pub fn advance(&mut self, frame_time: Duration) -> u32 {
        self.frame_count += 1;

        self.frame_times.push_back(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.pop_front();
        }

        // Update FPS counter every 10 frames
        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        self.accumulator += frame_time;

        let mut ticks = 0;
        while self.accumulator >= self.tick_period && ticks < MAX_CATCHUP_TICKS {
            self.accumulator -= self.tick_period;
            ticks += 1;
        }

        // Drop time we refused to catch up on
        if ticks == MAX_CATCHUP_TICKS {
            self.accumulator = self.accumulator.min(self.tick_period);
        }

        self.tick_count += u64::from(ticks);
        ticks
    }

    /// Get current FPS
    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    /// Get total elapsed time since start
    pub fn elapsed(&self) -> Duration {
        Instant::now().duration_since(self.start_time)
    }

    /// Get total number of frames
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get total number of ticks executed
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total / self.frame_times.len() as u32;

        self.current_fps = if avg_frame_time.as_secs_f32() > 0.0 {
            1.0 / avg_frame_time.as_secs_f32()
        } else {
            0.0
        };
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    const PERIOD: Duration = Duration::from_millis(100);

    #[test]
    fn test_game_loop_creation() {
        let game_loop = GameLoop::new(PERIOD);
        assert_eq!(game_loop.frame_count(), 0);
        assert_eq!(game_loop.tick_count(), 0);
        assert_eq!(game_loop.tick_period, PERIOD);
    }

    #[test]
    fn test_ticks_accumulate_across_frames() {
        let mut game_loop = GameLoop::new(PERIOD);

        // Six 17ms frames = 102ms, exactly one tick on the last
        let ticks: Vec<u32> = (0..6)
            .map(|_| game_loop.advance(Duration::from_millis(17)))
            .collect();
        assert_eq!(ticks, vec![0, 0, 0, 0, 0, 1]);
        assert_eq!(game_loop.tick_count(), 1);
        assert_eq!(game_loop.frame_count(), 6);
    }

    #[test]
    fn test_long_frame_runs_several_ticks() {
        let mut game_loop = GameLoop::new(PERIOD);
        assert_eq!(game_loop.advance(Duration::from_millis(350)), 3);
        // 50ms left over
        assert_eq!(game_loop.advance(Duration::from_millis(50)), 1);
    }

    #[test]
    fn test_catchup_is_capped() {
        let mut game_loop = GameLoop::new(PERIOD);
        assert_eq!(game_loop.advance(Duration::from_secs(10)), MAX_CATCHUP_TICKS);
        // The backlog was dropped
        assert!(game_loop.advance(Duration::ZERO) <= 1);
    }

    #[test]
    fn test_fps_estimate() {
        let mut game_loop = GameLoop::new(PERIOD);
        for _ in 0..10 {
            game_loop.advance(Duration::from_millis(20));
        }
        assert!((game_loop.fps() - 50.0).abs() < 0.5);
    }

    #[test]
    fn test_begin_frame_counts_frames() {
        let mut game_loop = GameLoop::new(PERIOD);
        thread::sleep(Duration::from_millis(5));
        game_loop.begin_frame();
        assert_eq!(game_loop.frame_count(), 1);
    }
}
