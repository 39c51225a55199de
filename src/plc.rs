//! picoXpander PLC terminals and the I/O diagnostic cycle.
//!
//! Terminal names follow IEC 61131 addressing: `IXn` digital inputs,
//! `QXn` digital outputs, `IWn` analog inputs and `QWn` analog (PWM)
//! outputs.

use core::fmt;

use crate::boards::picoxpander::{
    A0, A1, A2, GP14, GP15, GP16, GP17, GP18, GP19, GP20, GP21, GP22, GP4, GP5, GP6, GP7, GP8,
    GP9, GP10, GP11, GP12, GP13,
};
use crate::pin::PinId;

/// IX0..IX7, pulled down on the carrier.
pub const INPUTS: [PinId; 8] = [GP6, GP7, GP8, GP9, GP10, GP11, GP12, GP13];

/// QX0..QX7
pub const OUTPUTS: [PinId; 8] = [GP14, GP15, GP16, GP17, GP18, GP19, GP20, GP21];

/// QW0 and QW1. Both sit on PWM slice 2, so they share one frequency.
pub const ANALOG_OUTPUTS: [PinId; 2] = [GP5, GP4];

/// IW0..IW2
pub const ANALOG_INPUTS: [PinId; 3] = [A0, A1, A2];

/// Dallas 1-Wire / DHT data line.
pub const ONEWIRE: PinId = GP22;

/// SH1106 OLED on I2C0.
pub const OLED_I2C_ADDRESS: u8 = 0x3C;

pub const I2C_FREQUENCY_HZ: u32 = 400_000;
pub const UART_BAUD_RATE: u32 = 115_200;
pub const PWM_FREQUENCY_HZ: u32 = 1_000;

/// Hold time of each phase while echoing an active input.
pub const ECHO_HOLD_MS: u32 = 100;
/// Hold time of each step of the output chase.
pub const CHASE_HOLD_MS: u32 = 50;
/// Pause after each cycle, once the LED has toggled.
pub const SCAN_PAUSE_MS: u32 = 1_000;

/// Resolves a terminal name (`"IX3"`, `"QW0"`, `"ONEWIRE"`) to its GPIO.
pub fn terminal(name: &str) -> Option<PinId> {
    if name == "ONEWIRE" {
        return Some(ONEWIRE);
    }
    let (bank, index): (&[PinId], &str) = if let Some(i) = name.strip_prefix("IX") {
        (&INPUTS, i)
    } else if let Some(i) = name.strip_prefix("QX") {
        (&OUTPUTS, i)
    } else if let Some(i) = name.strip_prefix("IW") {
        (&ANALOG_INPUTS, i)
    } else if let Some(i) = name.strip_prefix("QW") {
        (&ANALOG_OUTPUTS, i)
    } else {
        return None;
    };
    match index.as_bytes() {
        [d @ b'0'..=b'9'] => bank.get(usize::from(d - b'0')).copied(),
        _ => None,
    }
}

/// Integer divider and TOP for a PWM slice running at `freq_hz` off a
/// `sys_hz` system clock, with the largest TOP the divider allows.
///
/// `None` when the frequency is out of the slice's reach.
pub fn pwm_divider(sys_hz: u32, freq_hz: u32) -> Option<(u8, u16)> {
    if freq_hz == 0 {
        return None;
    }
    let span = u64::from(freq_hz) << 16;
    let div = u64::from(sys_hz).div_ceil(span).max(1);
    let wrap = u64::from(sys_hz) / (div * u64::from(freq_hz));
    if wrap < 2 {
        return None;
    }
    let div = u8::try_from(div).ok()?;
    let top = u16::try_from(wrap - 1).ok()?;
    Some((div, top))
}

/// Digital and analog states of one scan, bit n = channel n.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IoImage {
    pub inputs: u8,
    pub outputs: u8,
    /// IW0..IW2 in raw 12-bit ADC counts.
    pub analog: [u16; 3],
}

impl IoImage {
    /// Records the outputs a frame drives.
    pub fn apply(&mut self, frame: &Frame) {
        self.outputs = frame.outputs;
    }

    /// The `(inputs, outputs)` pair, without the analog readings.
    pub fn digital(&self) -> (u8, u8) {
        (self.inputs, self.outputs)
    }

    /// Builds the input byte from per-channel levels, IX0 first.
    pub fn sample(levels: impl IntoIterator<Item = bool>) -> u8 {
        levels
            .into_iter()
            .take(8)
            .enumerate()
            .fold(0, |acc, (i, high)| acc | (u8::from(high) << i))
    }
}

impl fmt::Display for IoImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IX={:08b} QX={:08b} IW={:04},{:04},{:04}",
            self.inputs.reverse_bits(),
            self.outputs.reverse_bits(),
            self.analog[0],
            self.analog[1],
            self.analog[2]
        )
    }
}

/// Output state to drive, and for how long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    pub outputs: u8,
    pub hold_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Pulse each active input's output twice: on, off, on, off.
    Echo { inputs: u8 },
    /// Light QX0..QX7 one after another.
    Chase,
}

/// One pass of the carrier self-test, driven by the inputs sampled at
/// its start.
#[derive(Debug, Clone)]
pub struct DiagnosticCycle {
    mode: Mode,
    channel: u8,
    phase: u8,
}

impl DiagnosticCycle {
    pub fn new(inputs: u8) -> Self {
        let mode = if inputs == 0 {
            Mode::Chase
        } else {
            Mode::Echo { inputs }
        };
        DiagnosticCycle {
            mode,
            channel: 0,
            phase: 0,
        }
    }

    /// True if the cycle was started by at least one active input.
    pub fn echoes_inputs(&self) -> bool {
        matches!(self.mode, Mode::Echo { .. })
    }
}

impl Iterator for DiagnosticCycle {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        match self.mode {
            Mode::Echo { inputs } => {
                while self.channel < 8 && inputs & (1 << self.channel) == 0 {
                    self.channel += 1;
                }
                if self.channel >= 8 {
                    return None;
                }
                let lit = if self.phase % 2 == 0 { 1 << self.channel } else { 0 };
                self.phase += 1;
                if self.phase == 4 {
                    self.phase = 0;
                    self.channel += 1;
                }
                Some(Frame {
                    outputs: lit,
                    hold_ms: ECHO_HOLD_MS,
                })
            }
            Mode::Chase => {
                if self.channel >= 8 {
                    return None;
                }
                let lit = 1 << self.channel;
                self.channel += 1;
                Some(Frame {
                    outputs: lit,
                    hold_ms: CHASE_HOLD_MS,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(inputs: u8) -> Vec<Frame> {
        DiagnosticCycle::new(inputs).collect()
    }

    #[test]
    fn idle_inputs_chase_the_outputs() {
        let chase = frames(0);
        assert_eq!(chase.len(), 8);
        for (i, frame) in chase.iter().enumerate() {
            assert_eq!(frame.outputs, 1 << i);
            assert_eq!(frame.hold_ms, CHASE_HOLD_MS);
        }
        assert!(!DiagnosticCycle::new(0).echoes_inputs());
    }

    #[test]
    fn one_input_pulses_its_output_twice() {
        let echo: Vec<u8> = frames(0b0000_0100).iter().map(|f| f.outputs).collect();
        assert_eq!(echo, [0b100, 0, 0b100, 0]);
        assert!(frames(0b100).iter().all(|f| f.hold_ms == ECHO_HOLD_MS));
    }

    #[test]
    fn several_inputs_echo_in_channel_order() {
        let echo: Vec<u8> = frames(0b1000_0001).iter().map(|f| f.outputs).collect();
        assert_eq!(echo, [0b1, 0, 0b1, 0, 0x80, 0, 0x80, 0]);
    }

    #[test]
    fn cycle_ends_with_outputs_off_after_echo() {
        let last = frames(0xFF).last().copied();
        assert_eq!(last.map(|f| f.outputs), Some(0));
        assert_eq!(frames(0xFF).len(), 32);
    }

    #[test]
    fn each_scan_ends_with_a_one_second_pause() {
        let idle: u32 = frames(0).iter().map(|f| f.hold_ms).sum::<u32>() + SCAN_PAUSE_MS;
        assert_eq!(idle, 1_400);
        let one: u32 = frames(0b1).iter().map(|f| f.hold_ms).sum::<u32>() + SCAN_PAUSE_MS;
        assert_eq!(one, 1_400);
    }

    #[test]
    fn sample_packs_ix0_into_bit_zero() {
        assert_eq!(IoImage::sample([true, false, true]), 0b101);
        assert_eq!(IoImage::sample([true; 10]), 0xFF);
    }

    #[test]
    fn report_lists_channels_from_zero() {
        let image = IoImage {
            inputs: 0b0000_0001,
            outputs: 0b1000_0000,
            analog: [7, 2048, 4095],
        };
        assert_eq!(image.to_string(), "IX=10000000 QX=00000001 IW=0007,2048,4095");
    }

    #[test]
    fn image_follows_the_driven_frame() {
        let mut image = IoImage {
            inputs: 0b100,
            ..IoImage::default()
        };
        let mut seen = Vec::new();
        for frame in DiagnosticCycle::new(image.inputs) {
            image.apply(&frame);
            seen.push(image.digital());
        }
        assert_eq!(seen, [(0b100, 0b100), (0b100, 0), (0b100, 0b100), (0b100, 0)]);
        assert!(image.to_string().starts_with("IX=00100000 QX=00000000"));
    }

    #[test]
    fn terminals_resolve_to_their_gpio() {
        assert_eq!(terminal("IX0"), Some(GP6));
        assert_eq!(terminal("QX7"), Some(GP21));
        assert_eq!(terminal("QW0"), Some(GP5));
        assert_eq!(terminal("IW2"), Some(A2));
        assert_eq!(terminal("ONEWIRE"), Some(GP22));
        assert_eq!(terminal("IX8"), None);
        assert_eq!(terminal("QW2"), None);
        assert_eq!(terminal("IX10"), None);
        assert_eq!(terminal("IX"), None);
    }

    #[test]
    fn pwm_divider_reaches_one_kilohertz() {
        // 125 MHz default system clock
        assert_eq!(pwm_divider(125_000_000, PWM_FREQUENCY_HZ), Some((2, 62_499)));
        assert_eq!(pwm_divider(125_000_000, 50), Some((39, 64_101)));
    }

    #[test]
    fn pwm_divider_rejects_unreachable_frequencies() {
        assert_eq!(pwm_divider(125_000_000, 0), None);
        assert_eq!(pwm_divider(125_000_000, 1), None);
        assert_eq!(pwm_divider(125_000_000, 100_000_000), None);
    }

    #[test]
    fn uart1_defaults_share_the_analog_outputs() {
        use crate::boards::picoxpander::{UART1_RX_PIN, UART1_TX_PIN};
        assert_eq!(UART1_TX_PIN, ANALOG_OUTPUTS[1]);
        assert_eq!(UART1_RX_PIN, ANALOG_OUTPUTS[0]);
    }

    #[test]
    fn analog_outputs_share_a_pwm_slice() {
        assert_eq!(ANALOG_OUTPUTS[0].pwm_slice(), ANALOG_OUTPUTS[1].pwm_slice());
        assert_ne!(ANALOG_OUTPUTS[0].pwm_channel(), ANALOG_OUTPUTS[1].pwm_channel());
    }

    #[test]
    fn analog_inputs_are_adc_channels_in_order() {
        let channels: Vec<_> = ANALOG_INPUTS.iter().map(|p| p.adc_channel()).collect();
        assert_eq!(channels, [Some(0), Some(1), Some(2)]);
    }
}
