//! picoXpander: a Pico on a PLC-style I/O carrier.
//!
//! I2C1 and SPI0 share GP2/GP3, and SPI0 SDI shares GP4 with UART1 TX.
//! The carrier exposes one of them at a time.

use crate::board::{Board, BoardDescriptor};
use crate::bus::{BusKind, BusPin, BusRole};
use crate::pin::{PinId, GPIO10, GPIO11, GPIO12, GPIO2, GPIO3, GPIO4, GPIO5};
use crate::usb;

pico_header_aliases!();

pub const I2C0_SDA_PIN: PinId = GP0;
pub const I2C0_SCL_PIN: PinId = GP1;

pub const I2C1_SDA_PIN: PinId = GP2;
pub const I2C1_SCL_PIN: PinId = GP3;

/// Default Serial Clock Bus 0 for SPI communications
pub const SPI0_SCK_PIN: PinId = GPIO2;
/// Default Serial Out Bus 0 for SPI communications
pub const SPI0_SDO_PIN: PinId = GPIO3;
/// Default Serial In Bus 0 for SPI communications
pub const SPI0_SDI_PIN: PinId = GPIO4;

/// Default Serial Clock Bus 1 for SPI communications
pub const SPI1_SCK_PIN: PinId = GPIO10;
/// Default Serial Out Bus 1 for SPI communications
pub const SPI1_SDO_PIN: PinId = GPIO11;
/// Default Serial In Bus 1 for SPI communications
pub const SPI1_SDI_PIN: PinId = GPIO12;

pub const UART1_TX_PIN: PinId = GPIO4;
pub const UART1_RX_PIN: PinId = GPIO5;
pub const UART_TX_PIN: PinId = UART1_TX_PIN;
pub const UART_RX_PIN: PinId = UART1_RX_PIN;

/// Onboard crystal oscillator frequency, in MHz.
pub const XOSC_FREQ_MHZ: u32 = 12;

pub const BUS_DEFAULTS: &[BusPin] = &[
    BusPin::new(BusKind::I2c, 0, BusRole::Sda, I2C0_SDA_PIN),
    BusPin::new(BusKind::I2c, 0, BusRole::Scl, I2C0_SCL_PIN),
    BusPin::new(BusKind::I2c, 1, BusRole::Sda, I2C1_SDA_PIN),
    BusPin::new(BusKind::I2c, 1, BusRole::Scl, I2C1_SCL_PIN),
    BusPin::new(BusKind::Spi, 0, BusRole::Sck, SPI0_SCK_PIN),
    BusPin::new(BusKind::Spi, 0, BusRole::Sdo, SPI0_SDO_PIN),
    BusPin::new(BusKind::Spi, 0, BusRole::Sdi, SPI0_SDI_PIN),
    BusPin::new(BusKind::Spi, 1, BusRole::Sck, SPI1_SCK_PIN),
    BusPin::new(BusKind::Spi, 1, BusRole::Sdo, SPI1_SDO_PIN),
    BusPin::new(BusKind::Spi, 1, BusRole::Sdi, SPI1_SDI_PIN),
    BusPin::new(BusKind::Uart, 1, BusRole::Tx, UART1_TX_PIN),
    BusPin::new(BusKind::Uart, 1, BusRole::Rx, UART1_RX_PIN),
];

pub const DESCRIPTOR: BoardDescriptor = BoardDescriptor::new(
    Board::PicoXpander,
    "picoXpander",
    ALIASES,
    BUS_DEFAULTS,
    1,
    XOSC_FREQ_MHZ,
    usb::PICO,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pin::PinAlias;

    #[test]
    fn uart0_has_no_defaults() {
        assert_eq!(DESCRIPTOR.default_bus_pin(BusKind::Uart, 0, BusRole::Tx), None);
        assert_eq!(DESCRIPTOR.default_uart(), 1);
    }

    #[test]
    fn shared_signals_resolve_to_the_same_gpio() {
        assert_eq!(I2C1_SDA_PIN, SPI0_SCK_PIN);
        assert_eq!(SPI0_SDI_PIN, UART_TX_PIN);
    }

    #[test]
    fn constants_agree_with_the_table() {
        assert_eq!(DESCRIPTOR.resolve_pin(PinAlias::LED), LED);
        assert_eq!(DESCRIPTOR.resolve_pin(PinAlias::A3), A3);
        assert_eq!(A3.number(), 29);
    }
}
