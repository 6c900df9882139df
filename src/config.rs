//! ICM-42670-P Startup Configuration
//!
//! The sensor is brought up with two register writes:
//! - PWR_MGMT0 selects the gyroscope and accelerometer operating modes
//! - GYRO_CONFIG0 selects the gyroscope full-scale range and output data rate
//!
//! [`SensorConfig`] carries those two writes together with the gyro data
//! register layout, so the driver can be pointed at a register-compatible
//! sensor variant without touching the code.

use crate::{
    accel::AccelMode,
    gyro::{GyroFullScale, GyroMode, GyroOdr},
    registers::{AxisRegisters, Register},
};

/// Contents of the PWR_MGMT0 register.
///
/// The default (gyro low-noise, accel off) encodes to `0x0C`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerManagement {
    pub gyro: GyroMode,
    pub accel: AccelMode,
}

impl PowerManagement {
    pub const fn to_byte(self) -> u8 {
        ((self.gyro as u8) << 2) | self.accel as u8
    }
}

/// Contents of the GYRO_CONFIG0 register.
///
/// The default (±250 dps, 12.5 Hz) encodes to `0x6C`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GyroConfig {
    pub scale: GyroFullScale,
    pub odr: GyroOdr,
}

impl GyroConfig {
    pub const fn to_byte(self) -> u8 {
        ((self.scale as u8) << 5) | self.odr as u8
    }
}

/// A single register write performed at startup.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegisterWrite {
    pub register: u8,
    pub value: u8,
}

impl RegisterWrite {
    pub const fn new(register: u8, value: u8) -> Self {
        Self { register, value }
    }
}

/// Register layout and startup values used by the driver.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorConfig {
    pub gyro_x: AxisRegisters,
    pub gyro_y: AxisRegisters,
    /// Written first.
    pub power: RegisterWrite,
    /// Written second, only if the power write succeeded.
    pub gyro: RegisterWrite,
}

impl SensorConfig {
    pub const fn new(power: PowerManagement, gyro: GyroConfig) -> Self {
        Self {
            gyro_x: AxisRegisters::GYRO_X,
            gyro_y: AxisRegisters::GYRO_Y,
            power: RegisterWrite::new(Register::PwrMgmt0 as u8, power.to_byte()),
            gyro: RegisterWrite::new(Register::GyroConfig0 as u8, gyro.to_byte()),
        }
    }
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self::new(PowerManagement::default(), GyroConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bytes() {
        assert_eq!(PowerManagement::default().to_byte(), 0x0C);
        assert_eq!(GyroConfig::default().to_byte(), 0x6C);
    }

    #[test]
    fn test_power_management_encoding() {
        let pm = PowerManagement {
            gyro: GyroMode::LowNoise,
            accel: AccelMode::LowNoise,
        };
        assert_eq!(pm.to_byte(), 0x0F);

        let pm = PowerManagement {
            gyro: GyroMode::Off,
            accel: AccelMode::LowPower,
        };
        assert_eq!(pm.to_byte(), 0x02);
    }

    #[test]
    fn test_gyro_config_encoding() {
        let cfg = GyroConfig {
            scale: GyroFullScale::Dps2000,
            odr: GyroOdr::Hz1600,
        };
        assert_eq!(cfg.to_byte(), 0x05);

        let cfg = GyroConfig {
            scale: GyroFullScale::Dps500,
            odr: GyroOdr::Hz100,
        };
        assert_eq!(cfg.to_byte(), 0x49);
    }

    #[test]
    fn test_default_layout() {
        let cfg = SensorConfig::default();
        assert_eq!(cfg.gyro_x, AxisRegisters::new(0x11, 0x12));
        assert_eq!(cfg.gyro_y, AxisRegisters::new(0x13, 0x14));
        assert_eq!(cfg.power, RegisterWrite::new(0x1F, 0x0C));
        assert_eq!(cfg.gyro, RegisterWrite::new(0x20, 0x6C));
    }
}
