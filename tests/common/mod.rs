#![allow(dead_code)]

pub use embedded_hal::i2c::ErrorKind;
pub use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};

pub const DEV_ADDR: u8 = 0x68;

pub fn trans_read(reg: u8, value: u8) -> I2cTrans {
    I2cTrans::write_read(DEV_ADDR, vec![reg], vec![value])
}

pub fn trans_write(reg: u8, value: u8) -> I2cTrans {
    I2cTrans::write(DEV_ADDR, vec![reg, value])
}

pub fn trans_who_am_i(value: u8) -> I2cTrans {
    trans_read(0x75, value)
}

/// The four single-byte reads of one gyro sample: X high, X low, Y high, Y low.
pub fn trans_gyro_sample(x: i16, y: i16) -> Vec<I2cTrans> {
    let [xh, xl] = x.to_be_bytes();
    let [yh, yl] = y.to_be_bytes();
    vec![
        trans_read(0x11, xh),
        trans_read(0x12, xl),
        trans_read(0x13, yh),
        trans_read(0x14, yl),
    ]
}
