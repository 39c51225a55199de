//! Bus roles and the default pin table used when a driver is opened
//! without explicit pins.

use core::str::FromStr;

use crate::error::{Error, Result};
use crate::pin::PinId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusKind {
    I2c,
    Spi,
    Uart,
}

/// Signal a pin carries on its bus.
///
/// SPI uses the controller-side names: SDO is MOSI, SDI is MISO.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusRole {
    Sda,
    Scl,
    Sck,
    Sdo,
    Sdi,
    Tx,
    Rx,
}

impl BusRole {
    /// Whether `self` is a signal of a `kind` bus at all.
    pub const fn belongs_to(self, kind: BusKind) -> bool {
        matches!(
            (kind, self),
            (BusKind::I2c, BusRole::Sda | BusRole::Scl)
                | (BusKind::Spi, BusRole::Sck | BusRole::Sdo | BusRole::Sdi)
                | (BusKind::Uart, BusRole::Tx | BusRole::Rx)
        )
    }
}

impl FromStr for BusKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "I2C" => Ok(BusKind::I2c),
            "SPI" => Ok(BusKind::Spi),
            "UART" => Ok(BusKind::Uart),
            _ => Err(Error::UnknownBus),
        }
    }
}

impl FromStr for BusRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "SDA" => Ok(BusRole::Sda),
            "SCL" => Ok(BusRole::Scl),
            "SCK" => Ok(BusRole::Sck),
            "SDO" | "MOSI" => Ok(BusRole::Sdo),
            "SDI" | "MISO" => Ok(BusRole::Sdi),
            "TX" => Ok(BusRole::Tx),
            "RX" => Ok(BusRole::Rx),
            _ => Err(Error::UnknownRole),
        }
    }
}

/// One row of a board's bus default table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusPin {
    pub kind: BusKind,
    pub instance: u8,
    pub role: BusRole,
    pub pin: PinId,
}

impl BusPin {
    pub const fn new(kind: BusKind, instance: u8, role: BusRole, pin: PinId) -> Self {
        BusPin {
            kind,
            instance,
            role,
            pin,
        }
    }

    const fn is(&self, kind: BusKind, instance: u8, role: BusRole) -> bool {
        self.kind as u8 == kind as u8 && self.instance == instance && self.role as u8 == role as u8
    }
}

/// Finds the pin for `(kind, instance, role)` in `table`.
pub(crate) const fn find(
    table: &[BusPin],
    kind: BusKind,
    instance: u8,
    role: BusRole,
) -> Option<PinId> {
    let mut i = 0;
    while i < table.len() {
        if table[i].is(kind, instance, role) {
            return Some(table[i].pin);
        }
        i += 1;
    }
    None
}

/// True if no `(kind, instance, role)` key appears twice and every role
/// matches its bus kind.
pub(crate) const fn is_well_formed(table: &[BusPin]) -> bool {
    let mut i = 0;
    while i < table.len() {
        let row = &table[i];
        if !row.role.belongs_to(row.kind) {
            return false;
        }
        let mut j = i + 1;
        while j < table.len() {
            if table[j].is(row.kind, row.instance, row.role) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pin::{GPIO0, GPIO1};

    const TABLE: &[BusPin] = &[
        BusPin::new(BusKind::I2c, 0, BusRole::Sda, GPIO0),
        BusPin::new(BusKind::I2c, 0, BusRole::Scl, GPIO1),
    ];

    #[test]
    fn find_matches_the_whole_key() {
        assert_eq!(find(TABLE, BusKind::I2c, 0, BusRole::Sda), Some(GPIO0));
        assert_eq!(find(TABLE, BusKind::I2c, 0, BusRole::Scl), Some(GPIO1));
        assert_eq!(find(TABLE, BusKind::I2c, 1, BusRole::Sda), None);
        assert_eq!(find(TABLE, BusKind::Uart, 0, BusRole::Tx), None);
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let dup = [TABLE[0], BusPin::new(BusKind::I2c, 0, BusRole::Sda, GPIO1)];
        assert!(is_well_formed(TABLE));
        assert!(!is_well_formed(&dup));
    }

    #[test]
    fn roles_must_match_the_bus() {
        let bad = [BusPin::new(BusKind::Uart, 0, BusRole::Sda, GPIO0)];
        assert!(!is_well_formed(&bad));
        assert!(BusRole::Sdi.belongs_to(BusKind::Spi));
        assert!(!BusRole::Sdi.belongs_to(BusKind::I2c));
    }

    #[test]
    fn spi_roles_accept_both_naming_schemes() {
        assert_eq!("MOSI".parse::<BusRole>(), Ok(BusRole::Sdo));
        assert_eq!("SDI".parse::<BusRole>(), Ok(BusRole::Sdi));
        assert_eq!("sda".parse::<BusRole>(), Err(Error::UnknownRole));
        assert_eq!("CAN".parse::<BusKind>(), Err(Error::UnknownBus));
    }
}
