// Math utilities and helper functions

/// Clamp a value into the unit range [-1.0, 1.0]
pub fn clamp_unit(value: f32) -> f32 {
    value.clamp(-1.0, 1.0)
}

/// Zero out values whose magnitude is inside the deadzone
pub fn apply_deadzone(value: f32, deadzone: f32) -> f32 {
    if value.abs() < deadzone {
        0.0
    } else {
        value
    }
}

/// Movement sign for a facing direction (+1 right, -1 left)
pub fn facing_sign(facing_right: bool) -> f32 {
    if facing_right {
        1.0
    } else {
        -1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_unit() {
        assert_eq!(clamp_unit(0.5), 0.5);
        assert_eq!(clamp_unit(1.5), 1.0);
        assert_eq!(clamp_unit(-3.0), -1.0);
    }

    #[test]
    fn test_apply_deadzone() {
        assert_eq!(apply_deadzone(0.05, 0.1), 0.0);
        assert_eq!(apply_deadzone(-0.09, 0.1), 0.0);
        assert_eq!(apply_deadzone(0.1, 0.1), 0.1);
        assert_eq!(apply_deadzone(-0.4, 0.1), -0.4);
    }

    #[test]
    fn test_facing_sign() {
        assert_eq!(facing_sign(true), 1.0);
        assert_eq!(facing_sign(false), -1.0);
    }
}
