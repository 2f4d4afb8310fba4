// Character motion stats

/// Movement and sprite sizing for the dog
#[derive(Debug, Clone, PartialEq)]
pub struct MotionStats {
    /// Horizontal distance per animation tick while walking (pixels)
    pub walk_step: f32,
    /// Total horizontal distance covered by one jump (pixels)
    pub jump_distance: f32,
    /// Walk distance for a fully deflected steering wheel (pixels)
    pub steer_range: f32,

    /// Width of one sheet frame (pixels)
    pub sprite_width: u32,
    /// On-screen scale applied to frames
    pub sprite_scale: f32,
}

/// Stats used by the corgi
pub const BASE_STATS: MotionStats = MotionStats {
    walk_step: 5.0,
    jump_distance: 50.0,
    steer_range: 200.0,

    sprite_width: 64,
    sprite_scale: 2.5,
};

impl Default for MotionStats {
    fn default() -> Self {
        BASE_STATS
    }
}

impl MotionStats {
    /// Width of the sprite as drawn
    pub fn scaled_width(&self) -> f32 {
        self.sprite_width as f32 * self.sprite_scale
    }

    /// Rightmost x the sprite may reach on a screen of this width
    pub fn max_x(&self, screen_width: f32) -> f32 {
        (screen_width - self.scaled_width()).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats() {
        let stats = MotionStats::default();
        assert_eq!(stats.walk_step, 5.0);
        assert_eq!(stats.jump_distance, 50.0);
        assert_eq!(stats.steer_range, 200.0);
        assert_eq!(stats, BASE_STATS);
    }

    #[test]
    fn test_scaled_width() {
        let stats = MotionStats::default();
        assert_eq!(stats.scaled_width(), 160.0);
    }

    #[test]
    fn test_max_x() {
        let stats = MotionStats::default();
        assert_eq!(stats.max_x(1024.0), 864.0);
        assert_eq!(stats.max_x(100.0), 0.0);
    }
}
