#![cfg_attr(not(test), no_std)]

//! Board support for the picoXpander and the stock Raspberry Pi Pico.
//!
//! The pin tables, bus defaults, crystal frequency and USB identity are
//! plain `const` data and build on any target. The HAL re-exports, the
//! boot block and the typed `Pins` struct only exist when building for
//! the RP2040 itself.

pub mod board;
pub mod boards;
pub mod bus;
pub mod console;
pub mod error;
pub mod pin;
pub mod plc;
pub mod usb;

pub use board::{Board, BoardDescriptor};
pub use bus::{BusKind, BusRole};
pub use error::{Error, Result};
pub use pin::{PinAlias, PinId};
pub use usb::UsbIdentity;

#[cfg(target_os = "none")]
pub extern crate rp2040_hal as hal;

#[cfg(all(target_os = "none", feature = "rt"))]
extern crate cortex_m_rt;

#[cfg(all(target_os = "none", feature = "rt"))]
pub use hal::entry;

#[cfg(all(target_os = "none", feature = "boot2"))]
#[link_section = ".boot2"]
#[no_mangle]
#[used]
pub static BOOT2_FIRMWARE: [u8; 256] = rp2040_boot2::BOOT_LOADER_W25Q080;

#[cfg(target_os = "none")]
pub use hal::pac;

#[cfg(target_os = "none")]
mod pins;
#[cfg(target_os = "none")]
pub use pins::*;

#[cfg(not(any(feature = "board-picoxpander", feature = "board-pico")))]
compile_error!("select a board: enable `board-picoxpander` or `board-pico`");

#[cfg(all(feature = "board-picoxpander", feature = "board-pico"))]
compile_error!("`board-picoxpander` and `board-pico` are mutually exclusive");

/// The descriptor selected at build time.
#[cfg(feature = "board-picoxpander")]
pub const BOARD: &BoardDescriptor = &boards::picoxpander::DESCRIPTOR;

/// The descriptor selected at build time.
#[cfg(all(feature = "board-pico", not(feature = "board-picoxpander")))]
pub const BOARD: &BoardDescriptor = &boards::pico::DESCRIPTOR;

pub const XOSC_CRYSTAL_FREQ: u32 = BOARD.oscillator_frequency_hz();
