#![no_std]
#![doc = include_str!("../README.md")]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod accel;
pub mod address;
pub mod config;
pub mod direction;
pub mod error;
pub mod error_async;
pub mod gyro;
pub mod registers;
pub mod sensor;
pub mod sensor_async;
pub mod tilt;
