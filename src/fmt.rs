//! Logging shims.
//!
//! Routes `debug!`/`info!`/`warn!` to whichever backend feature is enabled:
//! `esp32-log` (esp-println), `log` or `defmt`. Without a backend the
//! arguments are still type-checked but nothing is emitted.

#![allow(unused_macros)]

macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "esp32-log")]
            ::esp_println::println!(concat!("[debug] ", $s) $(, $x)*);
            #[cfg(feature = "log")]
            ::log::debug!($s $(, $x)*);
            #[cfg(feature = "defmt")]
            ::defmt::debug!($s $(, $x)*);
            #[cfg(not(any(feature = "esp32-log", feature = "log", feature = "defmt")))]
            let _ = ($( & $x ),*);
        }
    };
}

macro_rules! info {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "esp32-log")]
            ::esp_println::println!(concat!("[info] ", $s) $(, $x)*);
            #[cfg(feature = "log")]
            ::log::info!($s $(, $x)*);
            #[cfg(feature = "defmt")]
            ::defmt::info!($s $(, $x)*);
            #[cfg(not(any(feature = "esp32-log", feature = "log", feature = "defmt")))]
            let _ = ($( & $x ),*);
        }
    };
}

macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "esp32-log")]
            ::esp_println::println!(concat!("[warn] ", $s) $(, $x)*);
            #[cfg(feature = "log")]
            ::log::warn!($s $(, $x)*);
            #[cfg(feature = "defmt")]
            ::defmt::warn!($s $(, $x)*);
            #[cfg(not(any(feature = "esp32-log", feature = "log", feature = "defmt")))]
            let _ = ($( & $x ),*);
        }
    };
}
