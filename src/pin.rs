//! Physical pin identifiers and the logical alias set.

use core::fmt;
use core::str::FromStr;

use crate::error::{Error, Result};

/// Number of GPIOs in the RP2040's user bank (GPIO0..=GPIO29).
pub const PIN_COUNT: u8 = 30;

/// First GPIO wired to the ADC.
const ADC_BASE: u8 = 26;

/// A GPIO index that exists on the RP2040 package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId(u8);

impl PinId {
    /// Wraps a GPIO index.
    ///
    /// Panics if `n` is not a GPIO of the package. Used in a `const`
    /// item the panic becomes a build failure, which is how the board
    /// tables are checked.
    pub const fn new(n: u8) -> Self {
        assert!(n < PIN_COUNT, "GPIO does not exist on the RP2040");
        PinId(n)
    }

    /// Runtime counterpart of [`PinId::new`].
    pub const fn checked(n: u8) -> Option<Self> {
        if n < PIN_COUNT {
            Some(PinId(n))
        } else {
            None
        }
    }

    pub const fn number(self) -> u8 {
        self.0
    }

    /// PWM slice driving this pin. Adjacent even/odd pins share a slice.
    pub const fn pwm_slice(self) -> u8 {
        (self.0 >> 1) & 7
    }

    pub const fn pwm_channel(self) -> PwmChannel {
        if self.0 & 1 == 0 {
            PwmChannel::A
        } else {
            PwmChannel::B
        }
    }

    /// ADC input for GPIO26..=GPIO29, `None` elsewhere.
    pub const fn adc_channel(self) -> Option<u8> {
        if self.0 >= ADC_BASE {
            Some(self.0 - ADC_BASE)
        } else {
            None
        }
    }
}

impl From<PinId> for u8 {
    fn from(pin: PinId) -> u8 {
        pin.0
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GPIO{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PwmChannel {
    A,
    B,
}

pub const GPIO0: PinId = PinId::new(0);
pub const GPIO1: PinId = PinId::new(1);
pub const GPIO2: PinId = PinId::new(2);
pub const GPIO3: PinId = PinId::new(3);
pub const GPIO4: PinId = PinId::new(4);
pub const GPIO5: PinId = PinId::new(5);
pub const GPIO6: PinId = PinId::new(6);
pub const GPIO7: PinId = PinId::new(7);
pub const GPIO8: PinId = PinId::new(8);
pub const GPIO9: PinId = PinId::new(9);
pub const GPIO10: PinId = PinId::new(10);
pub const GPIO11: PinId = PinId::new(11);
pub const GPIO12: PinId = PinId::new(12);
pub const GPIO13: PinId = PinId::new(13);
pub const GPIO14: PinId = PinId::new(14);
pub const GPIO15: PinId = PinId::new(15);
pub const GPIO16: PinId = PinId::new(16);
pub const GPIO17: PinId = PinId::new(17);
pub const GPIO18: PinId = PinId::new(18);
pub const GPIO19: PinId = PinId::new(19);
pub const GPIO20: PinId = PinId::new(20);
pub const GPIO21: PinId = PinId::new(21);
pub const GPIO22: PinId = PinId::new(22);
pub const GPIO23: PinId = PinId::new(23);
pub const GPIO24: PinId = PinId::new(24);
pub const GPIO25: PinId = PinId::new(25);
pub const GPIO26: PinId = PinId::new(26);
pub const GPIO27: PinId = PinId::new(27);
pub const GPIO28: PinId = PinId::new(28);
pub const GPIO29: PinId = PinId::new(29);

macro_rules! pin_aliases {
    ($($variant:ident),+ $(,)?) => {
        /// Logical pin names declared by the supported boards.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        pub enum PinAlias {
            $($variant,)+
        }

        impl PinAlias {
            pub const ALL: &'static [PinAlias] = &[$(PinAlias::$variant,)+];
            pub const COUNT: usize = PinAlias::ALL.len();

            /// Name as it appears in pinout diagrams, e.g. `"GP26"` or `"LED"`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(PinAlias::$variant => stringify!($variant),)+
                }
            }
        }

        impl FromStr for PinAlias {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $(stringify!($variant) => Ok(PinAlias::$variant),)+
                    _ => Err(Error::UnknownAlias),
                }
            }
        }
    };
}

pin_aliases!(
    GP0, GP1, GP2, GP3, GP4, GP5, GP6, GP7, GP8, GP9, GP10, GP11, GP12, GP13, GP14, GP15, GP16,
    GP17, GP18, GP19, GP20, GP21, GP22, GP26, GP27, GP28, LED, A0, A1, A2, A3,
);

impl fmt::Display for PinAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_rejects_pins_off_the_package() {
        assert_eq!(PinId::checked(29), Some(GPIO29));
        assert_eq!(PinId::checked(30), None);
        assert_eq!(PinId::checked(255), None);
    }

    #[test]
    #[should_panic]
    fn new_panics_past_gpio29() {
        let _ = PinId::new(PIN_COUNT);
    }

    #[test]
    fn pwm_slices_pair_adjacent_pins() {
        assert_eq!(GPIO4.pwm_slice(), 2);
        assert_eq!(GPIO5.pwm_slice(), 2);
        assert_eq!(GPIO4.pwm_channel(), PwmChannel::A);
        assert_eq!(GPIO5.pwm_channel(), PwmChannel::B);
        // slices wrap after GPIO15
        assert_eq!(GPIO16.pwm_slice(), 0);
        assert_eq!(GPIO25.pwm_slice(), 4);
    }

    #[test]
    fn only_the_top_four_pins_reach_the_adc() {
        assert_eq!(GPIO25.adc_channel(), None);
        assert_eq!(GPIO26.adc_channel(), Some(0));
        assert_eq!(GPIO29.adc_channel(), Some(3));
    }

    #[test]
    fn alias_names_parse_back() {
        for alias in PinAlias::ALL {
            assert_eq!(alias.name().parse::<PinAlias>(), Ok(*alias));
        }
        assert_eq!(PinAlias::ALL.len(), 31);
    }

    #[test]
    fn alias_parsing_is_exact() {
        assert_eq!("led".parse::<PinAlias>(), Err(Error::UnknownAlias));
        assert_eq!("GP23".parse::<PinAlias>(), Err(Error::UnknownAlias));
        assert_eq!(" A0".parse::<PinAlias>(), Err(Error::UnknownAlias));
    }

    #[test]
    fn display_uses_gpio_numbering() {
        assert_eq!(GPIO25.to_string(), "GPIO25");
        assert_eq!(PinAlias::A0.to_string(), "A0");
    }
}
