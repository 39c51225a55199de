//! Typed pin sets for `rp2040_hal`, one per board.

use crate::hal;

#[cfg(feature = "board-picoxpander")]
hal::bsp_pins!(
    Gpio0 {
        name: sda,
        aliases: {
            FunctionI2C, PullUp: I2c0Sda
        }
    },
    Gpio1 {
        name: scl,
        aliases: {
            FunctionI2C, PullUp: I2c0Scl
        }
    },
    Gpio2 {
        name: gp2,
        aliases: {
            FunctionI2C, PullUp: I2c1Sda,
            FunctionSpi, PullNone: Spi0Sck
        }
    },
    Gpio3 {
        name: gp3,
        aliases: {
            FunctionI2C, PullUp: I2c1Scl,
            FunctionSpi, PullNone: Spi0Sdo
        }
    },
    Gpio4 {
        name: qw1,
        aliases: {
            FunctionPwm, PullNone: Qw1Pwm,
            FunctionSpi, PullNone: Spi0Sdi,
            FunctionUart, PullNone: Uart1Tx
        }
    },
    Gpio5 {
        name: qw0,
        aliases: {
            FunctionPwm, PullNone: Qw0Pwm,
            FunctionUart, PullNone: Uart1Rx
        }
    },
    Gpio6 { name: ix0 },
    Gpio7 { name: ix1 },
    Gpio8 { name: ix2 },
    Gpio9 { name: ix3 },
    Gpio10 {
        name: ix4,
        aliases: {
            FunctionSpi, PullNone: Spi1Sck
        }
    },
    Gpio11 {
        name: ix5,
        aliases: {
            FunctionSpi, PullNone: Spi1Sdo
        }
    },
    Gpio12 {
        name: ix6,
        aliases: {
            FunctionSpi, PullNone: Spi1Sdi
        }
    },
    Gpio13 { name: ix7 },
    Gpio14 { name: qx0 },
    Gpio15 { name: qx1 },
    Gpio16 { name: qx2 },
    Gpio17 { name: qx3 },
    Gpio18 { name: qx4 },
    Gpio19 { name: qx5 },
    Gpio20 { name: qx6 },
    Gpio21 { name: qx7 },
    Gpio22 { name: onewire },
    Gpio23 { name: b_power_save },
    Gpio24 { name: vbus_detect },
    Gpio25 { name: led },
    Gpio26 { name: iw0 },
    Gpio27 { name: iw1 },
    Gpio28 { name: iw2 },
    Gpio29 { name: voltage_monitor },
);

#[cfg(all(feature = "board-pico", not(feature = "board-picoxpander")))]
hal::bsp_pins!(
    Gpio0 {
        name: gpio0,
        aliases: {
            FunctionUart, PullNone: Uart0Tx
        }
    },
    Gpio1 {
        name: gpio1,
        aliases: {
            FunctionUart, PullNone: Uart0Rx
        }
    },
    Gpio2 {
        name: gpio2,
        aliases: {
            FunctionI2C, PullUp: I2c1Sda
        }
    },
    Gpio3 {
        name: gpio3,
        aliases: {
            FunctionI2C, PullUp: I2c1Scl
        }
    },
    Gpio4 {
        name: gpio4,
        aliases: {
            FunctionI2C, PullUp: I2c0Sda
        }
    },
    Gpio5 {
        name: gpio5,
        aliases: {
            FunctionI2C, PullUp: I2c0Scl
        }
    },
    Gpio6 { name: gpio6 },
    Gpio7 { name: gpio7 },
    Gpio8 {
        name: gpio8,
        aliases: {
            FunctionUart, PullNone: Uart1Tx
        }
    },
    Gpio9 {
        name: gpio9,
        aliases: {
            FunctionUart, PullNone: Uart1Rx
        }
    },
    Gpio10 { name: gpio10 },
    Gpio11 { name: gpio11 },
    Gpio12 { name: gpio12 },
    Gpio13 { name: gpio13 },
    Gpio14 { name: gpio14 },
    Gpio15 { name: gpio15 },
    Gpio16 { name: gpio16 },
    Gpio17 { name: gpio17 },
    Gpio18 { name: gpio18 },
    Gpio19 { name: gpio19 },
    Gpio20 { name: gpio20 },
    Gpio21 { name: gpio21 },
    Gpio22 { name: gpio22 },
    Gpio23 { name: b_power_save },
    Gpio24 { name: vbus_detect },
    Gpio25 { name: led },
    Gpio26 { name: gpio26 },
    Gpio27 { name: gpio27 },
    Gpio28 { name: gpio28 },
    Gpio29 { name: voltage_monitor },
);
