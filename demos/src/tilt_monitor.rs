//! ICM-42670-P Tilt Monitor Example
//!
//! Polls the gyroscope and logs both the tilt level code and the
//! descriptive tilt label.
//!
//! Hardware Setup:
//! - Connect the ICM-42670-P breakout to the Raspberry Pi Pico 2:
//!   - SDA -> GP14
//!   - SCL -> GP15
//!   - AD0 -> GND (address 0x68)
//!   - VCC -> 3.3V
//!   - GND -> GND

#![no_std]
#![no_main]

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_rp::{block::ImageDef, config::Config, i2c::InterruptHandler};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use icm42670_tilt::{address::Address, direction::Direction, sensor_async::Icm42670};

/// Bus clock, standard mode.
const I2C_FREQUENCY_HZ: u32 = 100_000;
/// Delay between two polls.
const POLL_INTERVAL_MS: u64 = 100;

embassy_rp::bind_interrupts!(struct Irqs {
    I2C1_IRQ => InterruptHandler<embassy_rp::peripherals::I2C1>;
});

/// Firmware image type for bootloader
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Config::default());

    let sda = p.PIN_14;
    let scl = p.PIN_15;
    let mut config = embassy_rp::i2c::Config::default();
    config.frequency = I2C_FREQUENCY_HZ;
    let bus = embassy_rp::i2c::I2c::new_async(p.I2C1, scl, sda, Irqs, config);
    let mut sensor = Icm42670::new(bus, Address::default());

    if sensor.probe().await.is_err() {
        warn!("ICM-42670-P not identified, polling anyway");
    }

    // Best effort: on failure the sensor stays in its reset power state and
    // the readings below are all zero.
    let _ = sensor.configure().await;

    loop {
        let level = sensor
            .read_inclination_level()
            .await
            .unwrap_or(Direction::None);
        info!("tilt level {} ({})", level.code(), level);

        // Logs the label itself when the board is tilted.
        let _ = sensor.detect_tilt_direction().await;

        Timer::after_millis(POLL_INTERVAL_MS).await;
    }
}
