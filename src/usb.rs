//! USB device identity presented during enumeration.

/// Vendor/product IDs and descriptor strings for one board variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UsbIdentity {
    pub vendor_id: u16,
    pub product_id: u16,
    pub product_string: &'static str,
    pub manufacturer_string: &'static str,
}

/// Raspberry Pi's VID
pub const RASPBERRY_PI_VID: u16 = 0x2E8A;

/// Identity of the stock Pico
pub const PICO: UsbIdentity = UsbIdentity {
    vendor_id: RASPBERRY_PI_VID,
    product_id: 0x000A,
    product_string: "Pico",
    manufacturer_string: "Raspberry Pi",
};
