use crate::time::TimeSnapshot;

pub const DEGREES_PER_SECOND: f64 = 6.0;
pub const DEGREES_PER_MINUTE: f64 = 6.0;
pub const DEGREES_PER_HOUR: f64 = 30.0;

/// Rotation of each hand, clockwise from 12 o'clock, in degrees within `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HandAngles {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

/// The minute hand creeps 0.1° per second and the hour hand 0.5° per minute so
/// neither jumps on the boundary. Inputs are assumed to be in range.
pub fn compute_angles(snapshot: &TimeSnapshot) -> HandAngles {
    let (h, m, s) = (
        f64::from(snapshot.hour),
        f64::from(snapshot.minute),
        f64::from(snapshot.second),
    );

    HandAngles {
        hour: normalize((h % 12.0) * DEGREES_PER_HOUR + m * 0.5),
        minute: normalize(m * DEGREES_PER_MINUTE + s * 0.1),
        second: normalize(s * DEGREES_PER_SECOND),
    }
}

fn normalize(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::snapshot_at;

    fn angles(h: u32, m: u32, s: u32) -> HandAngles {
        compute_angles(&snapshot_at(h, m, s))
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_midnight_and_noon_point_up() {
        for hour in [0, 12] {
            let a = angles(hour, 0, 0);
            assert_eq!((a.hour, a.minute, a.second), (0.0, 0.0, 0.0));
        }
    }

    #[test]
    fn test_three_oclock() {
        assert_close(angles(3, 0, 0).hour, 90.0);
    }

    #[test]
    fn test_half_past_six() {
        let a = angles(6, 30, 0);
        assert_close(a.hour, 195.0);
        assert_close(a.minute, 180.0);
    }

    #[test]
    fn test_minute_hand_creeps_with_seconds() {
        let a = angles(10, 15, 30);
        assert_close(a.minute, 93.0);
        assert_close(a.second, 180.0);
    }

    #[test]
    fn test_all_angles_stay_in_range() {
        for h in 0..24 {
            for m in 0..60 {
                for s in (0..60).step_by(7) {
                    let a = angles(h, m, s);
                    for v in [a.hour, a.minute, a.second] {
                        assert!((0.0..360.0).contains(&v), "{h}:{m}:{s} -> {v}");
                    }
                    assert_close(a.minute, f64::from(m) * 6.0 + f64::from(s) * 0.1);
                }
            }
        }
    }

    #[test]
    fn test_hour_hand_is_continuous_across_the_hour() {
        let before = angles(4, 59, 0).hour;
        let after = angles(5, 0, 0).hour;
        assert_close(after - before, 0.5);

        // 11:59 -> 12:00 wraps back to the top
        assert_close(angles(11, 59, 0).hour, 359.5);
        assert_close(angles(12, 0, 0).hour, 0.0);
    }
}
