//! Error types for asynchronous ICM-42670-P operations.

use core::fmt::{Debug, Formatter};
use embedded_hal_async::i2c::I2c;

/// Error that occurs during async initialization of the sensor.
/// Contains both the error and the I2C interface for error recovery.
pub struct InitError<I>
where
    I: I2c,
{
    pub i2c: I,
    pub error: Error<I>,
}

impl<I> Debug for InitError<I>
where
    I: I2c,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        self.error.fmt(f)
    }
}

/// Error types that can occur during async sensor operations.
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Error<I>
where
    I: I2c,
{
    /// Error occurred during an I2C write operation
    WriteError(I::Error),
    /// Error occurred during an I2C write-read operation
    WriteReadError(I::Error),
    /// WHO_AM_I did not identify an ICM-42670-P
    WrongDevice,
}

impl<I> Debug for Error<I>
where
    I: I2c,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::result::Result<(), core::fmt::Error> {
        match self {
            Self::WriteReadError(e) => f.debug_tuple("WriteReadError").field(e).finish(),
            Self::WriteError(e) => f.debug_tuple("WriteError").field(e).finish(),
            Self::WrongDevice => f.write_str("WrongDevice"),
        }
    }
}
