/// Raw two-axis gyro reading used for tilt classification.
///
/// Each axis is the big-endian combination of its high and low data register.
/// No scaling is applied: the values are compared against raw thresholds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GyroSample {
    pub(crate) x: i16,
    pub(crate) y: i16,
}

impl GyroSample {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i16 {
        self.x
    }

    pub fn y(&self) -> i16 {
        self.y
    }
}

/// Gyroscope operating mode (PWR_MGMT0 bits 3:2).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GyroMode {
    Off = 0b00,
    Standby = 0b01,
    #[default]
    LowNoise = 0b11,
}

/// Gyroscope full-scale range (GYRO_CONFIG0 bits 6:5).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GyroFullScale {
    Dps2000 = 0,
    Dps1000 = 1,
    Dps500 = 2,
    #[default]
    Dps250 = 3,
}

/// Gyroscope output data rate (GYRO_CONFIG0 bits 3:0).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GyroOdr {
    Hz1600 = 0b0101,
    Hz800 = 0b0110,
    Hz400 = 0b0111,
    Hz200 = 0b1000,
    Hz100 = 0b1001,
    Hz50 = 0b1010,
    Hz25 = 0b1011,
    #[default]
    Hz12_5 = 0b1100,
}
