//! ICM-42670-P Register Map (user bank 0)
//!
//! Only the registers the driver touches are listed. Sensor data registers
//! come in big-endian pairs: the `*1` register holds the high byte and the
//! `*0` register the low byte.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Register {
    // Accelerometer Data Registers
    /// High byte of X-axis acceleration
    AccelDataX1 = 0x0B,
    /// Low byte of X-axis acceleration
    AccelDataX0 = 0x0C,
    /// High byte of Y-axis acceleration
    AccelDataY1 = 0x0D,
    /// Low byte of Y-axis acceleration
    AccelDataY0 = 0x0E,
    /// High byte of Z-axis acceleration
    AccelDataZ1 = 0x0F,
    /// Low byte of Z-axis acceleration
    AccelDataZ0 = 0x10,

    // Gyroscope Data Registers
    /// High byte of X-axis angular rate
    GyroDataX1 = 0x11,
    /// Low byte of X-axis angular rate
    GyroDataX0 = 0x12,
    /// High byte of Y-axis angular rate
    GyroDataY1 = 0x13,
    /// Low byte of Y-axis angular rate
    GyroDataY0 = 0x14,

    /// Power Management 0 register (0x1F)
    /// Selects gyroscope and accelerometer operating modes
    PwrMgmt0 = 0x1F,

    /// Gyroscope Configuration 0 register (0x20)
    /// Controls full-scale range and output data rate
    GyroConfig0 = 0x20,

    /// Device identification register (0x75)
    WhoAmI = 0x75,
}

impl From<Register> for u8 {
    fn from(reg: Register) -> Self {
        reg as u8
    }
}

/// Expected WHO_AM_I value of the ICM-42670-P.
pub const WHO_AM_I_VALUE: u8 = 0x67;

/// Register pair holding one big-endian 16-bit axis reading.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisRegisters {
    pub high: u8,
    pub low: u8,
}

impl AxisRegisters {
    pub const fn new(high: u8, low: u8) -> Self {
        Self { high, low }
    }

    pub const GYRO_X: Self = Self::new(Register::GyroDataX1 as u8, Register::GyroDataX0 as u8);
    pub const GYRO_Y: Self = Self::new(Register::GyroDataY1 as u8, Register::GyroDataY0 as u8);
}
