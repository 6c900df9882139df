mod common;

use common::*;
use embassy_futures::block_on;
use icm42670_tilt::{
    address::Address,
    config::{RegisterWrite, SensorConfig},
    direction::{Direction, TiltLabel},
    error_async::Error,
    gyro::GyroSample,
    registers::AxisRegisters,
    sensor_async::Icm42670,
    tilt::Thresholds,
};

#[test]
fn test_configure() {
    let expectations = [trans_write(0x1F, 0x0C), trans_write(0x20, 0x6C)];
    let mut sensor = Icm42670::new(I2cMock::new(&expectations), Address::default());

    block_on(sensor.configure()).unwrap();

    sensor.release().done();
}

#[test]
fn test_configure_stops_after_failed_power_write() {
    let expectations = [trans_write(0x1F, 0x0C).with_error(ErrorKind::Other)];
    let mut sensor = Icm42670::new(I2cMock::new(&expectations), Address::default());

    let result = block_on(sensor.configure());
    assert!(matches!(result, Err(Error::WriteError(ErrorKind::Other))));

    sensor.release().done();
}

#[test]
fn test_read_inclination_level() {
    let mut expectations = trans_gyro_sample(-6000, 0);
    expectations.extend(trans_gyro_sample(3000, -3000));
    expectations.extend(trans_gyro_sample(0, 0));
    let mut sensor = Icm42670::new(I2cMock::new(&expectations), Address::default());

    block_on(async {
        assert_eq!(
            sensor.read_inclination_level().await.unwrap(),
            Direction::ALotDown
        );
        assert_eq!(
            sensor.read_inclination_level().await.unwrap(),
            Direction::ABitLeft
        );
        assert_eq!(sensor.read_inclination_level().await.unwrap(), Direction::None);
    });

    sensor.release().done();
}

#[test]
fn test_detect_tilt_direction() {
    let expectations = trans_gyro_sample(3000, 3000);
    let mut sensor = Icm42670::new(I2cMock::new(&expectations), Address::default());

    let label = block_on(sensor.detect_tilt_direction()).unwrap();
    assert_eq!(label, Some(TiltLabel::UpRight));

    sensor.release().done();
}

#[test]
fn test_new_checked_wrong_device() {
    let expectations = [trans_who_am_i(0x00)];
    let err = block_on(Icm42670::new_checked(
        I2cMock::new(&expectations),
        Address::default(),
    ))
    .err()
    .unwrap();

    assert!(matches!(err.error, Error::WrongDevice));
    let mut i2c = err.i2c;
    i2c.done();
}

#[test]
fn test_read_inclination_level_propagates_bus_error() {
    let expectations = [
        trans_read(0x11, 0x0B),
        trans_read(0x12, 0xB8),
        I2cTrans::write_read(DEV_ADDR, vec![0x13], vec![0x00]).with_error(ErrorKind::Other),
    ];
    let mut sensor = Icm42670::new(I2cMock::new(&expectations), Address::default());

    let result = block_on(sensor.read_inclination_level());
    assert!(matches!(result, Err(Error::WriteReadError(ErrorKind::Other))));

    sensor.release().done();
}

#[test]
fn test_gyro_sample_extremes() {
    let expectations = trans_gyro_sample(i16::MIN, i16::MAX);
    let mut sensor = Icm42670::new(I2cMock::new(&expectations), Address::default());

    let sample = block_on(sensor.gyro_sample()).unwrap();
    assert_eq!(sample, GyroSample::new(i16::MIN, i16::MAX));

    sensor.release().done();
}

#[test]
fn test_new_checked() {
    let expectations = [trans_who_am_i(0x67)];
    let sensor = block_on(Icm42670::new_checked(
        I2cMock::new(&expectations),
        Address::default(),
    ))
    .unwrap();

    sensor.release().done();
}

#[test]
fn test_accel_burst_read() {
    let expectations = [I2cTrans::write_read(
        DEV_ADDR,
        vec![0x0B],
        vec![0x7F, 0xFF, 0x80, 0x00, 0x00, 0x01],
    )];
    let mut sensor = Icm42670::new(I2cMock::new(&expectations), Address::default());

    let accel = block_on(sensor.accel()).unwrap();
    assert_eq!((accel.x(), accel.y(), accel.z()), (i16::MAX, i16::MIN, 1));

    sensor.release().done();
}

#[test]
fn test_custom_thresholds() {
    let mut expectations = trans_gyro_sample(600, 0);
    expectations.extend(trans_gyro_sample(600, 0));
    let mut sensor = Icm42670::new(I2cMock::new(&expectations), Address::default());
    sensor.set_thresholds(Thresholds::new(1000, 500, 800));
    assert_eq!(sensor.thresholds().tilt, 500);

    block_on(async {
        // Inside the dead zone for the level, but the label policy has none.
        assert_eq!(sensor.read_inclination_level().await.unwrap(), Direction::None);
        assert_eq!(
            sensor.detect_tilt_direction().await.unwrap(),
            Some(TiltLabel::Up)
        );
    });

    sensor.release().done();
}

#[test]
fn test_custom_register_layout() {
    let config = SensorConfig {
        gyro_x: AxisRegisters::new(0x21, 0x22),
        gyro_y: AxisRegisters::new(0x23, 0x24),
        power: RegisterWrite::new(0x4E, 0x0F),
        gyro: RegisterWrite::new(0x4F, 0x06),
    };
    let expectations = [
        I2cTrans::write(0x69, vec![0x4E, 0x0F]),
        I2cTrans::write(0x69, vec![0x4F, 0x06]),
        I2cTrans::write_read(0x69, vec![0x21], vec![0x00]),
        I2cTrans::write_read(0x69, vec![0x22], vec![0x00]),
        I2cTrans::write_read(0x69, vec![0x23], vec![0x0B]),
        I2cTrans::write_read(0x69, vec![0x24], vec![0xB8]),
    ];
    let mut sensor = Icm42670::with_config(
        I2cMock::new(&expectations),
        Address::SECONDARY,
        config,
        Thresholds::default(),
    );

    block_on(async {
        sensor.configure().await.unwrap();
        assert_eq!(
            sensor.read_inclination_level().await.unwrap(),
            Direction::ABitRight
        );
    });

    sensor.release().done();
}
