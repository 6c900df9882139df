//! Tilt direction codes and descriptive labels.

use core::fmt;

/// Discrete tilt direction reported by the classifier.
///
/// The numeric codes are stable and can be handed to callers that expect an
/// integer level (`0` meaning no significant movement).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Direction {
    #[default]
    None = 0,
    ABitLeft = 1,
    ALotLeft = 2,
    ABitRight = 3,
    ALotRight = 4,
    Up = 5,
    ALotUp = 6,
    Down = 7,
    ALotDown = 8,
}

impl Direction {
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> Self {
        direction.code()
    }
}

/// Returned when converting an integer outside `0..=8` into a [`Direction`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct InvalidDirection(pub u8);

impl TryFrom<u8> for Direction {
    type Error = InvalidDirection;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::None),
            1 => Ok(Self::ABitLeft),
            2 => Ok(Self::ALotLeft),
            3 => Ok(Self::ABitRight),
            4 => Ok(Self::ALotRight),
            5 => Ok(Self::Up),
            6 => Ok(Self::ALotUp),
            7 => Ok(Self::Down),
            8 => Ok(Self::ALotDown),
            other => Err(InvalidDirection(other)),
        }
    }
}

/// Human readable tilt label, as printed to the log.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TiltLabel {
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
    Down,
    Up,
    Left,
    Right,
}

impl TiltLabel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UpLeft => "UP LEFT",
            Self::UpRight => "UP RIGHT",
            Self::DownLeft => "DOWN LEFT",
            Self::DownRight => "DOWN RIGHT",
            Self::Down => "DOWN",
            Self::Up => "UP",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
        }
    }
}

impl fmt::Display for TiltLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(Direction::None.code(), 0);
        assert_eq!(Direction::ABitLeft.code(), 1);
        assert_eq!(Direction::ALotLeft.code(), 2);
        assert_eq!(Direction::ABitRight.code(), 3);
        assert_eq!(Direction::ALotRight.code(), 4);
        assert_eq!(Direction::Up.code(), 5);
        assert_eq!(Direction::ALotUp.code(), 6);
        assert_eq!(Direction::Down.code(), 7);
        assert_eq!(u8::from(Direction::ALotDown), 8);
    }

    #[test]
    fn test_try_from_code() {
        for code in 0..=8u8 {
            let direction = Direction::try_from(code).unwrap();
            assert_eq!(direction.code(), code);
        }
        assert_eq!(Direction::try_from(9), Err(InvalidDirection(9)));
        assert_eq!(Direction::try_from(0xFF), Err(InvalidDirection(0xFF)));
    }

    #[test]
    fn test_label_strings() {
        assert_eq!(TiltLabel::UpLeft.as_str(), "UP LEFT");
        assert_eq!(TiltLabel::DownRight.as_str(), "DOWN RIGHT");
        assert_eq!(TiltLabel::Right.as_str(), "RIGHT");
    }
}
