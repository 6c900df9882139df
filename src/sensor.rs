use crate::{
    accel::Accel,
    address::Address,
    config::{RegisterWrite, SensorConfig},
    direction::{Direction, TiltLabel},
    error::{Error, InitError},
    gyro::GyroSample,
    registers::{AxisRegisters, Register, WHO_AM_I_VALUE},
    tilt::{self, Thresholds},
};
use embedded_hal::i2c::I2c;

/// TDK InvenSense ICM-42670-P Driver
pub struct Icm42670<I>
where
    I: I2c,
{
    i2c: I,
    address: u8,
    config: SensorConfig,
    thresholds: Thresholds,
}

impl<I> Icm42670<I>
where
    I: I2c,
{
    /// Construct a new i2c driver for the ICM-42670-P with the default
    /// register layout and thresholds. No bus traffic happens here.
    pub fn new(i2c: I, address: Address) -> Self {
        Self::with_config(i2c, address, SensorConfig::default(), Thresholds::default())
    }

    pub fn with_config(
        i2c: I,
        address: Address,
        config: SensorConfig,
        thresholds: Thresholds,
    ) -> Self {
        Self {
            i2c,
            address: address.into(),
            config,
            thresholds,
        }
    }

    /// Construct the driver and check WHO_AM_I, handing the bus back on failure.
    pub fn new_checked(i2c: I, address: Address) -> Result<Self, InitError<I>> {
        let mut sensor = Self::new(i2c, address);

        if let Err(error) = sensor.probe() {
            Err(InitError {
                error,
                i2c: sensor.i2c,
            })
        } else {
            Ok(sensor)
        }
    }

    /// Returns the underlying I2C peripheral, consuming this driver.
    pub fn release(self) -> I {
        self.i2c
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn set_thresholds(&mut self, thresholds: Thresholds) {
        self.thresholds = thresholds;
    }

    pub(crate) fn read(&mut self, bytes: &[u8], response: &mut [u8]) -> Result<(), Error<I>> {
        self.i2c
            .write_read(self.address, bytes, response)
            .map_err(|e| Error::WriteReadError(e))
    }

    pub(crate) fn write(&mut self, bytes: &[u8]) -> Result<(), Error<I>> {
        self.i2c
            .write(self.address, bytes)
            .map_err(|e| Error::WriteError(e))
    }

    /// Read one byte: register address written, repeated start, one byte read.
    pub fn read_register(&mut self, reg: u8) -> Result<u8, Error<I>> {
        let mut buf = [0; 1];
        self.read(&[reg], &mut buf)?;
        Ok(buf[0])
    }

    pub(crate) fn read_registers<'a>(
        &mut self,
        reg: Register,
        buf: &'a mut [u8],
    ) -> Result<&'a [u8], Error<I>> {
        self.read(&[reg as u8], buf)?;
        Ok(buf)
    }

    /// Write one byte. A failure is logged and returned, never retried.
    pub fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Error<I>> {
        let result = self.write(&[reg, value]);
        if result.is_err() {
            error!("failed to write register {:#04X}", reg);
        }
        result
    }

    /// Check that the device answers with the ICM-42670-P WHO_AM_I value.
    pub fn probe(&mut self) -> Result<(), Error<I>> {
        let id = self.read_register(Register::WhoAmI as u8)?;
        if id != WHO_AM_I_VALUE {
            error!("unexpected WHO_AM_I {:#04X}", id);
            return Err(Error::WrongDevice);
        }
        Ok(())
    }

    /// Write the power and gyro configuration.
    ///
    /// The gyro write is skipped if the power write fails. The outcome is
    /// logged either way; callers may ignore the returned error and keep
    /// polling a sensor left in its default power state.
    pub fn configure(&mut self) -> Result<(), Error<I>> {
        let SensorConfig { power, gyro, .. } = self.config;
        match self.apply(power).and_then(|_| self.apply(gyro)) {
            Ok(()) => {
                info!("sensor configured");
                Ok(())
            }
            Err(e) => {
                error!("failed to configure sensor");
                Err(e)
            }
        }
    }

    fn apply(&mut self, write: RegisterWrite) -> Result<(), Error<I>> {
        self.write_register(write.register, write.value)
    }

    /// Read one axis as two single-byte transactions, high byte first.
    pub fn read_axis(&mut self, axis: AxisRegisters) -> Result<i16, Error<I>> {
        let high = self.read_register(axis.high)?;
        let low = self.read_register(axis.low)?;
        Ok(i16::from_be_bytes([high, low]))
    }

    /// Read gyro X then gyro Y.
    pub fn gyro_sample(&mut self) -> Result<GyroSample, Error<I>> {
        let x = self.read_axis(self.config.gyro_x)?;
        let y = self.read_axis(self.config.gyro_y)?;
        debug!("gyro x={} y={}", x, y);
        Ok(GyroSample::new(x, y))
    }

    pub fn accel(&mut self) -> Result<Accel, Error<I>> {
        let mut data = [0; 6];
        self.read_registers(Register::AccelDataX1, &mut data)?;
        Ok(Accel::from_bytes(data))
    }

    /// Sample the gyro and classify it into a [`Direction`].
    pub fn read_inclination_level(&mut self) -> Result<Direction, Error<I>> {
        let sample = self.gyro_sample()?;
        Ok(tilt::classify(&sample, &self.thresholds))
    }

    /// Sample the gyro and log a descriptive label if the sensor is tilted.
    pub fn detect_tilt_direction(&mut self) -> Result<Option<TiltLabel>, Error<I>> {
        let sample = self.gyro_sample()?;
        let label = tilt::describe(&sample, &self.thresholds);
        if let Some(label) = label {
            info!("{}", label.as_str());
        }
        Ok(label)
    }
}
