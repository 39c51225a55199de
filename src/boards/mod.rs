//! Statically-defined descriptors, one module per board.
//!
//! Each module exports the board's aliases as `const` symbols so that
//! code written against one board fails to build against a board that
//! does not declare the same names.

/// Declares the aliases of the Pico's 40-pin header (`GPn`, `LED`,
/// `A0`..`A3`) as constants plus the `ALIASES` table built from them.
macro_rules! pico_header {
    ($($alias:ident = $pin:ident),+ $(,)?) => {
        $(pub const $alias: $crate::pin::PinId = $crate::pin::$pin;)+

        const ALIASES: &[($crate::pin::PinAlias, $crate::pin::PinId)] =
            &[$(($crate::pin::PinAlias::$alias, $alias),)+];
    };
}

macro_rules! pico_header_aliases {
    () => {
        pico_header!(
            GP0 = GPIO0,
            GP1 = GPIO1,
            GP2 = GPIO2,
            GP3 = GPIO3,
            GP4 = GPIO4,
            GP5 = GPIO5,
            GP6 = GPIO6,
            GP7 = GPIO7,
            GP8 = GPIO8,
            GP9 = GPIO9,
            GP10 = GPIO10,
            GP11 = GPIO11,
            GP12 = GPIO12,
            GP13 = GPIO13,
            GP14 = GPIO14,
            GP15 = GPIO15,
            GP16 = GPIO16,
            GP17 = GPIO17,
            GP18 = GPIO18,
            GP19 = GPIO19,
            GP20 = GPIO20,
            GP21 = GPIO21,
            GP22 = GPIO22,
            GP26 = GPIO26,
            GP27 = GPIO27,
            GP28 = GPIO28,
            // Onboard LED
            LED = GPIO25,
            A0 = GPIO26,
            A1 = GPIO27,
            A2 = GPIO28,
            A3 = GPIO29,
        );
    };
}

pub mod pico;
pub mod picoxpander;
