//! Logging macros
//!
//! The driver logs through whichever backend the application picked:
//! - `defmt-03` feature: `defmt`
//! - `log` feature: the `log` facade
//! - neither: arguments are evaluated and dropped
//!
//! Format strings must stay within the subset both backends accept
//! (`{}`, `{:?}`, `{:#04X}`).
#![macro_use]
#![allow(unused_macros)]

macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "defmt-03")]
            ::defmt::debug!($s $(, $x)*);
            #[cfg(all(feature = "log", not(feature = "defmt-03")))]
            ::log::debug!($s $(, $x)*);
            #[cfg(not(any(feature = "log", feature = "defmt-03")))]
            let _ = ($( & $x ),*);
        }
    };
}

macro_rules! info {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "defmt-03")]
            ::defmt::info!($s $(, $x)*);
            #[cfg(all(feature = "log", not(feature = "defmt-03")))]
            ::log::info!($s $(, $x)*);
            #[cfg(not(any(feature = "log", feature = "defmt-03")))]
            let _ = ($( & $x ),*);
        }
    };
}

macro_rules! error {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "defmt-03")]
            ::defmt::error!($s $(, $x)*);
            #[cfg(all(feature = "log", not(feature = "defmt-03")))]
            ::log::error!($s $(, $x)*);
            #[cfg(not(any(feature = "log", feature = "defmt-03")))]
            let _ = ($( & $x ),*);
        }
    };
}
