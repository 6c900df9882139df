//! Tilt classification from raw gyro X/Y readings.
//!
//! Two independent policies live here:
//! - [`classify`] maps a sample to one of the nine [`Direction`] codes
//! - [`describe`] maps a sample to a [`TiltLabel`] for logging
//!
//! They overlap but are not equivalent: [`describe`] has no dead zone and
//! checks the single-axis cases in a different order.

use crate::{
    direction::{Direction, TiltLabel},
    gyro::GyroSample,
};

/// Raw thresholds the classifier compares gyro readings against.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Thresholds {
    /// Both axes strictly below this magnitude count as no movement.
    pub dead_zone: u16,
    /// An axis strictly beyond ±`tilt` is tilted.
    pub tilt: u16,
    /// An X axis strictly beyond ±`strong_tilt` is tilted a lot.
    pub strong_tilt: u16,
}

impl Thresholds {
    pub const fn new(dead_zone: u16, tilt: u16, strong_tilt: u16) -> Self {
        Self {
            dead_zone,
            tilt,
            strong_tilt,
        }
    }

    /// Check if both axes of the sample are inside the dead zone
    pub fn is_at_rest(&self, sample: &GyroSample) -> bool {
        sample.x.unsigned_abs() < self.dead_zone && sample.y.unsigned_abs() < self.dead_zone
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            dead_zone: 1000,
            tilt: 2500,
            strong_tilt: 5000,
        }
    }
}

/// Map a sample to a [`Direction`].
///
/// First match wins. The combined-axis cases are checked before the
/// single-axis ones and the order matters since the ranges overlap. A pure
/// Y tilt reports `ABitLeft`/`ABitRight`, the same codes as the X-positive
/// diagonals.
pub fn classify(sample: &GyroSample, thresholds: &Thresholds) -> Direction {
    if thresholds.is_at_rest(sample) {
        return Direction::None;
    }

    // Widened so that negating a threshold cannot overflow.
    let (x, y) = (i32::from(sample.x), i32::from(sample.y));
    let tilt = i32::from(thresholds.tilt);
    let strong = i32::from(thresholds.strong_tilt);

    if x > tilt && y < -tilt {
        Direction::ABitLeft
    } else if x > tilt && y > tilt {
        Direction::ABitRight
    } else if x < -tilt && y < -tilt {
        Direction::ALotLeft
    } else if x < -tilt && y > tilt {
        Direction::ALotRight
    } else if x > strong {
        Direction::ALotUp
    } else if x > tilt {
        Direction::Up
    } else if x < -strong {
        Direction::ALotDown
    } else if x < -tilt {
        Direction::Down
    } else if y < -tilt {
        Direction::ABitLeft
    } else if y > tilt {
        Direction::ABitRight
    } else {
        Direction::None
    }
}

/// Map a sample to a descriptive [`TiltLabel`], if it is tilted at all.
pub fn describe(sample: &GyroSample, thresholds: &Thresholds) -> Option<TiltLabel> {
    let (x, y) = (i32::from(sample.x), i32::from(sample.y));
    let tilt = i32::from(thresholds.tilt);

    if x > tilt && y < -tilt {
        Some(TiltLabel::UpLeft)
    } else if x > tilt && y > tilt {
        Some(TiltLabel::UpRight)
    } else if x < -tilt && y < -tilt {
        Some(TiltLabel::DownLeft)
    } else if x < -tilt && y > tilt {
        Some(TiltLabel::DownRight)
    } else if x < -tilt {
        Some(TiltLabel::Down)
    } else if x > tilt {
        Some(TiltLabel::Up)
    } else if y < -tilt {
        Some(TiltLabel::Left)
    } else if y > tilt {
        Some(TiltLabel::Right)
    } else {
        None
    }
}
