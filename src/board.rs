//! The board descriptor: one immutable table per supported board.

use core::fmt;
use core::str::FromStr;

use crate::boards;
use crate::bus::{self, BusKind, BusPin, BusRole};
use crate::error::{Error, Result};
use crate::pin::{PinAlias, PinId, GPIO0};
use crate::usb::UsbIdentity;

/// Supported board variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Board {
    PicoXpander,
    Pico,
}

impl Board {
    pub const ALL: [Board; 2] = [Board::PicoXpander, Board::Pico];

    /// The statically-defined descriptor for this board.
    pub const fn descriptor(self) -> &'static BoardDescriptor {
        match self {
            Board::PicoXpander => &boards::picoxpander::DESCRIPTOR,
            Board::Pico => &boards::pico::DESCRIPTOR,
        }
    }

    /// Identifier used by the build switch, e.g. `"picoxpander"`.
    pub const fn id(self) -> &'static str {
        match self {
            Board::PicoXpander => "picoxpander",
            Board::Pico => "pico",
        }
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Board::ALL
            .into_iter()
            .find(|board| board.id() == s)
            .ok_or(Error::UnknownBoard)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Pin map, bus defaults, crystal and USB identity of one board.
///
/// Instances are only built in `const` items, so every check made by
/// [`BoardDescriptor::new`] runs at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardDescriptor {
    board: Board,
    name: &'static str,
    pins: [PinId; PinAlias::COUNT],
    bus_defaults: &'static [BusPin],
    default_uart: u8,
    oscillator_frequency_mhz: u32,
    usb_identity: UsbIdentity,
}

impl BoardDescriptor {
    /// Builds a descriptor, panicking if `aliases` misses or repeats an
    /// alias, if the bus table repeats a key or pairs a role with the
    /// wrong bus, if the default UART has no TX/RX defaults, or if the
    /// crystal frequency is zero.
    pub const fn new(
        board: Board,
        name: &'static str,
        aliases: &[(PinAlias, PinId)],
        bus_defaults: &'static [BusPin],
        default_uart: u8,
        oscillator_frequency_mhz: u32,
        usb_identity: UsbIdentity,
    ) -> Self {
        assert!(oscillator_frequency_mhz > 0, "crystal frequency must be positive");
        assert!(bus::is_well_formed(bus_defaults), "malformed bus default table");
        assert!(
            bus::find(bus_defaults, BusKind::Uart, default_uart, BusRole::Tx).is_some()
                && bus::find(bus_defaults, BusKind::Uart, default_uart, BusRole::Rx).is_some(),
            "default UART has no pins"
        );
        BoardDescriptor {
            board,
            name,
            pins: alias_map(aliases),
            bus_defaults,
            default_uart,
            oscillator_frequency_mhz,
            usb_identity,
        }
    }

    pub const fn board(&self) -> Board {
        self.board
    }

    /// Human-readable board name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn resolve_pin(&self, alias: PinAlias) -> PinId {
        self.pins[alias as usize]
    }

    /// Parses `name` as an alias and resolves it.
    pub fn lookup(&self, name: &str) -> Result<PinId> {
        name.parse().map(|alias| self.resolve_pin(alias))
    }

    /// Every declared alias with the pin it resolves to.
    pub fn aliases(&self) -> impl Iterator<Item = (PinAlias, PinId)> + '_ {
        PinAlias::ALL
            .iter()
            .map(move |&alias| (alias, self.resolve_pin(alias)))
    }

    /// Pin a driver falls back to when opened without an explicit one.
    pub const fn default_bus_pin(
        &self,
        kind: BusKind,
        instance: u8,
        role: BusRole,
    ) -> Option<PinId> {
        bus::find(self.bus_defaults, kind, instance, role)
    }

    pub const fn bus_defaults(&self) -> &'static [BusPin] {
        self.bus_defaults
    }

    /// UART instance used for the console.
    pub const fn default_uart(&self) -> u8 {
        self.default_uart
    }

    pub const fn oscillator_frequency_mhz(&self) -> u32 {
        self.oscillator_frequency_mhz
    }

    /// Crystal frequency in the unit `rp2040_hal::clocks` expects.
    pub const fn oscillator_frequency_hz(&self) -> u32 {
        self.oscillator_frequency_mhz * 1_000_000
    }

    pub const fn usb_identity(&self) -> &UsbIdentity {
        &self.usb_identity
    }
}

const fn alias_map(table: &[(PinAlias, PinId)]) -> [PinId; PinAlias::COUNT] {
    let mut slots: [Option<PinId>; PinAlias::COUNT] = [None; PinAlias::COUNT];
    let mut i = 0;
    while i < table.len() {
        let (alias, pin) = table[i];
        let slot = alias as usize;
        assert!(slots[slot].is_none(), "pin alias declared twice");
        slots[slot] = Some(pin);
        i += 1;
    }

    let mut pins = [GPIO0; PinAlias::COUNT];
    let mut k = 0;
    while k < PinAlias::COUNT {
        match slots[k] {
            Some(pin) => pins[k] = pin,
            None => panic!("pin alias not declared"),
        }
        k += 1;
    }
    pins
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pin::GPIO1;
    use crate::usb;

    const UART: &[BusPin] = &[
        BusPin::new(BusKind::Uart, 0, BusRole::Tx, GPIO0),
        BusPin::new(BusKind::Uart, 0, BusRole::Rx, GPIO1),
    ];

    fn all_on(pin: PinId) -> [(PinAlias, PinId); PinAlias::COUNT] {
        let mut table = [(PinAlias::GP0, pin); PinAlias::COUNT];
        for (slot, alias) in table.iter_mut().zip(PinAlias::ALL) {
            slot.0 = *alias;
        }
        table
    }

    #[test]
    fn boards_parse_by_id() {
        assert_eq!("picoxpander".parse::<Board>(), Ok(Board::PicoXpander));
        assert_eq!("pico".parse::<Board>(), Ok(Board::Pico));
        assert_eq!("pico2".parse::<Board>(), Err(Error::UnknownBoard));
    }

    #[test]
    fn each_board_owns_its_descriptor() {
        for board in Board::ALL {
            assert_eq!(board.descriptor().board(), board);
        }
    }

    #[test]
    fn descriptor_accepts_a_complete_table() {
        let table = all_on(GPIO1);
        let d = BoardDescriptor::new(Board::Pico, "test", &table, UART, 0, 12, usb::PICO);
        assert!(d.aliases().all(|(_, pin)| pin == GPIO1));
        assert_eq!(d.oscillator_frequency_hz(), 12_000_000);
    }

    #[test]
    #[should_panic(expected = "pin alias not declared")]
    fn missing_alias_is_rejected() {
        let table = all_on(GPIO1);
        BoardDescriptor::new(Board::Pico, "test", &table[1..], UART, 0, 12, usb::PICO);
    }

    #[test]
    #[should_panic(expected = "pin alias declared twice")]
    fn repeated_alias_is_rejected() {
        let mut table = all_on(GPIO1);
        table[1].0 = PinAlias::GP0;
        BoardDescriptor::new(Board::Pico, "test", &table, UART, 0, 12, usb::PICO);
    }

    #[test]
    #[should_panic(expected = "default UART has no pins")]
    fn default_uart_must_be_wired() {
        let table = all_on(GPIO1);
        BoardDescriptor::new(Board::Pico, "test", &table, UART, 1, 12, usb::PICO);
    }
}
