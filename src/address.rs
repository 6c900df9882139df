//! ICM-42670-P I2C Address Configuration
//!
//! The least significant bit of the 7-bit address follows the AP_AD0 pin:
//! - 0x68 (default, AD0 pin low)
//! - 0x69 (alternate, AD0 pin high)

/// Represents an ICM-42670-P I2C address.
///
/// Note: These are 7-bit addresses. The R/W bit is appended by the HAL.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address(pub u8);

impl Address {
    /// AD0 tied low.
    pub const PRIMARY: Self = Self(0x68);
    /// AD0 tied high.
    pub const SECONDARY: Self = Self(0x69);
}

impl Default for Address {
    /// Returns the default I2C address (0x68).
    fn default() -> Self {
        Self::PRIMARY
    }
}

impl From<Address> for u8 {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl From<u8> for Address {
    fn from(addr: u8) -> Self {
        Self(addr)
    }
}
