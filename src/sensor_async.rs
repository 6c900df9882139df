//! ICM-42670-P Asynchronous Driver Implementation
//!
//! Non-blocking counterpart of [`crate::sensor`], built on embedded-hal-async.
//! Every operation issues the same bus transactions in the same order as the
//! blocking driver, so it suits firmware that polls the sensor from an async
//! executor task.

use crate::{
    accel::Accel,
    address::Address,
    config::{RegisterWrite, SensorConfig},
    direction::{Direction, TiltLabel},
    error_async::{Error, InitError},
    gyro::GyroSample,
    registers::{AxisRegisters, Register, WHO_AM_I_VALUE},
    tilt::{self, Thresholds},
};

use embedded_hal_async::i2c::I2c;

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
    pub async fn new_checked(i2c: I, address: Address) -> Result<Self, InitError<I>> {
        let mut sensor = Self::new(i2c, address);

        if let Err(error) = sensor.probe().await {
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

    pub(crate) async fn read(&mut self, bytes: &[u8], response: &mut [u8]) -> Result<(), Error<I>> {
        self.i2c
            .write_read(self.address, bytes, response)
            .await
            .map_err(|e| Error::WriteReadError(e))
    }

    pub(crate) async fn write(&mut self, bytes: &[u8]) -> Result<(), Error<I>> {
        self.i2c
            .write(self.address, bytes)
            .await
            .map_err(|e| Error::WriteError(e))
    }

    pub async fn read_register(&mut self, reg: u8) -> Result<u8, Error<I>> {
        let mut buf = [0; 1];
        self.read(&[reg], &mut buf).await?;
        Ok(buf[0])
    }

    pub(crate) async fn read_registers<'a>(
        &mut self,
        reg: Register,
        buf: &'a mut [u8],
    ) -> Result<&'a [u8], Error<I>> {
        self.read(&[reg as u8], buf).await?;
        Ok(buf)
    }

    pub async fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Error<I>> {
        let result = self.write(&[reg, value]).await;
        if result.is_err() {
            error!("failed to write register {:#04X}", reg);
        }
        result
    }

    pub async fn probe(&mut self) -> Result<(), Error<I>> {
        let id = self.read_register(Register::WhoAmI as u8).await?;
        if id != WHO_AM_I_VALUE {
            error!("unexpected WHO_AM_I {:#04X}", id);
            return Err(Error::WrongDevice);
        }
        Ok(())
    }

    /// Write the power and gyro configuration.
    ///
    /// Same contract as the blocking driver: the gyro write is skipped if the
    /// power write fails, and the outcome is logged.
    pub async fn configure(&mut self) -> Result<(), Error<I>> {
        let SensorConfig { power, gyro, .. } = self.config;
        let mut result = self.apply(power).await;
        if result.is_ok() {
            result = self.apply(gyro).await;
        }

        match result {
            Ok(()) => info!("sensor configured"),
            Err(_) => error!("failed to configure sensor"),
        }
        result
    }

    async fn apply(&mut self, write: RegisterWrite) -> Result<(), Error<I>> {
        self.write_register(write.register, write.value).await
    }

    pub async fn read_axis(&mut self, axis: AxisRegisters) -> Result<i16, Error<I>> {
        let high = self.read_register(axis.high).await?;
        let low = self.read_register(axis.low).await?;
        Ok(i16::from_be_bytes([high, low]))
    }

    pub async fn gyro_sample(&mut self) -> Result<GyroSample, Error<I>> {
        let x = self.read_axis(self.config.gyro_x).await?;
        let y = self.read_axis(self.config.gyro_y).await?;
        debug!("gyro x={} y={}", x, y);
        Ok(GyroSample::new(x, y))
    }

    pub async fn accel(&mut self) -> Result<Accel, Error<I>> {
        let mut data = [0; 6];
        self.read_registers(Register::AccelDataX1, &mut data).await?;
        Ok(Accel::from_bytes(data))
    }

    pub async fn read_inclination_level(&mut self) -> Result<Direction, Error<I>> {
        let sample = self.gyro_sample().await?;
        Ok(tilt::classify(&sample, &self.thresholds))
    }

    pub async fn detect_tilt_direction(&mut self) -> Result<Option<TiltLabel>, Error<I>> {
        let sample = self.gyro_sample().await?;
        let label = tilt::describe(&sample, &self.thresholds);
        if let Some(label) = label {
            info!("{}", label.as_str());
        }
        Ok(label)
    }
}
