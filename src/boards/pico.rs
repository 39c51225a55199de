//! Raspberry Pi Pico with the stock header defaults.

use crate::board::{Board, BoardDescriptor};
use crate::bus::{BusKind, BusPin, BusRole};
use crate::pin::PinId;
use crate::usb;

pico_header_aliases!();

pub const I2C0_SDA_PIN: PinId = GP4;
pub const I2C0_SCL_PIN: PinId = GP5;

pub const I2C1_SDA_PIN: PinId = GP2;
pub const I2C1_SCL_PIN: PinId = GP3;

pub const SPI0_SCK_PIN: PinId = GP18;
pub const SPI0_SDO_PIN: PinId = GP19;
pub const SPI0_SDI_PIN: PinId = GP16;

pub const SPI1_SCK_PIN: PinId = GP10;
pub const SPI1_SDO_PIN: PinId = GP11;
pub const SPI1_SDI_PIN: PinId = GP12;

pub const UART0_TX_PIN: PinId = GP0;
pub const UART0_RX_PIN: PinId = GP1;
pub const UART1_TX_PIN: PinId = GP8;
pub const UART1_RX_PIN: PinId = GP9;
pub const UART_TX_PIN: PinId = UART0_TX_PIN;
pub const UART_RX_PIN: PinId = UART0_RX_PIN;

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
    BusPin::new(BusKind::Uart, 0, BusRole::Tx, UART0_TX_PIN),
    BusPin::new(BusKind::Uart, 0, BusRole::Rx, UART0_RX_PIN),
    BusPin::new(BusKind::Uart, 1, BusRole::Tx, UART1_TX_PIN),
    BusPin::new(BusKind::Uart, 1, BusRole::Rx, UART1_RX_PIN),
];

pub const DESCRIPTOR: BoardDescriptor = BoardDescriptor::new(
    Board::Pico,
    "Raspberry Pi Pico",
    ALIASES,
    BUS_DEFAULTS,
    0,
    XOSC_FREQ_MHZ,
    usb::PICO,
);
