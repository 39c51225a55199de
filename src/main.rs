//! # picoXpander I/O self-test
//!
//! Runs the carrier's diagnostic cycle on the Pico: while any of IX0..IX7
//! is high the matching QX output pulses twice, otherwise the outputs are
//! chased one after another. The onboard LED toggles once per cycle,
//! followed by a one second pause.
//!
//! QW0/QW1 run a 50% PWM at `PWM_FREQUENCY_HZ`, IW0..IW2 are sampled by the
//! ADC once per scan and I2C0 is brought up for the OLED. With the
//! `uart1-console` feature GP4/GP5 carry UART1 instead of the PWM outputs,
//! and every report is mirrored there.
//!
//! The board enumerates as a USB serial device with the identity from the
//! board descriptor. Every change of the digital image is reported as one
//! line. A line sent by the host (`LED`, `GP4`, `IX3`, `25`...) is
//! answered with the GPIO it resolves to.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
mod firmware {
    use core::fmt::Write;

    // GPIO traits
    use embedded_hal::digital::{InputPin, OutputPin, PinState, StatefulOutputPin};
    use embedded_hal::i2c::I2c;
    #[cfg(not(feature = "uart1-console"))]
    use embedded_hal::pwm::SetDutyCycle;

    // The rp2040-hal ADC only offers the 0.2 one-shot trait
    use embedded_hal_0_2::adc::OneShot;

    use fugit::RateExtU32;

    // Ensure we halt the program on panic (if we don't mention this crate it won't
    // be linked)
    use panic_halt as _;

    #[cfg(feature = "defmt")]
    use defmt_rtt as _;

    use heapless::String;

    // The macro for our start-up function
    use picoxpander_bsp::entry;

    // The macro for marking our interrupt functions
    use picoxpander_bsp::hal::pac::interrupt;

    use picoxpander_bsp::console::{self, LineBuffer, REPLY_LEN};
    use picoxpander_bsp::hal::adc::AdcPin;
    use picoxpander_bsp::hal::gpio::{DynPinId, FunctionSioInput, FunctionSioOutput, Pin, PullDown};
    use picoxpander_bsp::hal::{self, pac, Clock};
    use picoxpander_bsp::plc::{self, DiagnosticCycle, IoImage};
    use picoxpander_bsp::BOARD;

    // USB Device support
    use usb_device::device::StringDescriptors;
    use usb_device::{class_prelude::*, prelude::*};

    // USB Communications Class Device support
    use usbd_serial::SerialPort;

    type Input = Pin<DynPinId, FunctionSioInput, PullDown>;
    type Output = Pin<DynPinId, FunctionSioOutput, PullDown>;

    /// The USB Device Driver (shared with the interrupt).
    static mut USB_DEVICE: Option<UsbDevice<hal::usb::UsbBus>> = None;

    /// The USB Bus Driver (shared with the interrupt).
    static mut USB_BUS: Option<UsbBusAllocator<hal::usb::UsbBus>> = None;

    /// The USB Serial Device Driver (shared with the interrupt).
    static mut USB_SERIAL: Option<SerialPort<hal::usb::UsbBus>> = None;

    /// Host query being typed (only touched by the interrupt).
    static mut QUERY: LineBuffer = LineBuffer::new();

    /// Entry point to our bare-metal application.
    ///
    /// The `#[entry]` macro ensures the Cortex-M start-up code calls this function
    /// as soon as all global variables are initialised.
    #[entry]
    fn main() -> ! {
        // Grab our singleton objects
        let mut pac = pac::Peripherals::take().unwrap();
        let core = pac::CorePeripherals::take().unwrap();

        // Set up the watchdog driver - needed by the clock setup code
        let mut watchdog = hal::Watchdog::new(pac.WATCHDOG);

        // The default is to generate a 125 MHz system clock
        let clocks = hal::clocks::init_clocks_and_plls(
            picoxpander_bsp::XOSC_CRYSTAL_FREQ,
            pac.XOSC,
            pac.CLOCKS,
            pac.PLL_SYS,
            pac.PLL_USB,
            &mut pac.RESETS,
            &mut watchdog,
        )
        .ok()
        .unwrap();

        let identity = BOARD.usb_identity();
        #[cfg(feature = "defmt")]
        defmt::info!(
            "{=str}: USB {=u16:#06x}:{=u16:#06x}",
            BOARD.name(),
            identity.vendor_id,
            identity.product_id
        );

        // Set up the USB driver
        let usb_bus = UsbBusAllocator::new(hal::usb::UsbBus::new(
            pac.USBCTRL_REGS,
            pac.USBCTRL_DPRAM,
            clocks.usb_clock,
            true,
            &mut pac.RESETS,
        ));
        unsafe {
            // Note (safety): This is safe as interrupts haven't been started yet
            USB_BUS = Some(usb_bus);
        }

        // Grab a reference to the USB Bus allocator. We are promising to the
        // compiler not to take mutable access to this global variable whilst this
        // reference exists!
        let bus_ref = unsafe { USB_BUS.as_ref().unwrap() };

        let serial = SerialPort::new(bus_ref);
        unsafe {
            USB_SERIAL = Some(serial);
        }

        let usb_dev = UsbDeviceBuilder::new(
            bus_ref,
            UsbVidPid(identity.vendor_id, identity.product_id),
        )
        .strings(&[StringDescriptors::default()
            .manufacturer(identity.manufacturer_string)
            .product(identity.product_string)
            .serial_number("0001")])
        .unwrap()
        .device_class(usbd_serial::USB_CLASS_CDC)
        .build();
        unsafe {
            // Note (safety): This is safe as interrupts haven't been started yet
            USB_DEVICE = Some(usb_dev);
        }

        // Enable the USB interrupt
        unsafe {
            pac::NVIC::unmask(hal::pac::Interrupt::USBCTRL_IRQ);
        };

        // The delay object lets us wait for specified amounts of time (in
        // milliseconds)
        let mut delay = cortex_m::delay::Delay::new(core.SYST, clocks.system_clock.freq().to_Hz());

        // The single-cycle I/O block controls our GPIO pins
        let sio = hal::Sio::new(pac.SIO);

        // Set the pins up according to their function on this particular board
        let pins = picoxpander_bsp::Pins::new(
            pac.IO_BANK0,
            pac.PADS_BANK0,
            sio.gpio_bank0,
            &mut pac.RESETS,
        );

        let mut led = pins.led.into_push_pull_output();

        let mut inputs: [Input; 8] = [
            pins.ix0.into_pull_down_input().into_dyn_pin(),
            pins.ix1.into_pull_down_input().into_dyn_pin(),
            pins.ix2.into_pull_down_input().into_dyn_pin(),
            pins.ix3.into_pull_down_input().into_dyn_pin(),
            pins.ix4.into_pull_down_input().into_dyn_pin(),
            pins.ix5.into_pull_down_input().into_dyn_pin(),
            pins.ix6.into_pull_down_input().into_dyn_pin(),
            pins.ix7.into_pull_down_input().into_dyn_pin(),
        ];
        let mut outputs: [Output; 8] = [
            pins.qx0.into_push_pull_output_in_state(PinState::Low).into_dyn_pin(),
            pins.qx1.into_push_pull_output_in_state(PinState::Low).into_dyn_pin(),
            pins.qx2.into_push_pull_output_in_state(PinState::Low).into_dyn_pin(),
            pins.qx3.into_push_pull_output_in_state(PinState::Low).into_dyn_pin(),
            pins.qx4.into_push_pull_output_in_state(PinState::Low).into_dyn_pin(),
            pins.qx5.into_push_pull_output_in_state(PinState::Low).into_dyn_pin(),
            pins.qx6.into_push_pull_output_in_state(PinState::Low).into_dyn_pin(),
            pins.qx7.into_push_pull_output_in_state(PinState::Low).into_dyn_pin(),
        ];

        // IW0..IW2
        let mut adc = hal::Adc::new(pac.ADC, &mut pac.RESETS);
        let mut iw0 = AdcPin::new(pins.iw0.into_floating_input()).unwrap();
        let mut iw1 = AdcPin::new(pins.iw1.into_floating_input()).unwrap();
        let mut iw2 = AdcPin::new(pins.iw2.into_floating_input()).unwrap();

        // QW1 is channel A and QW0 channel B of slice 2
        #[cfg(not(feature = "uart1-console"))]
        let _pwm = {
            let mut slices = hal::pwm::Slices::new(pac.PWM, &mut pac.RESETS);
            let mut pwm = slices.pwm2;
            let sys_hz = clocks.system_clock.freq().to_Hz();
            if let Some((div, top)) = plc::pwm_divider(sys_hz, plc::PWM_FREQUENCY_HZ) {
                pwm.set_div_int(div);
                pwm.set_top(top);
            }
            pwm.enable();
            pwm.channel_a.output_to(pins.qw1);
            pwm.channel_b.output_to(pins.qw0);
            pwm.channel_a.set_duty_cycle_percent(50).ok();
            pwm.channel_b.set_duty_cycle_percent(50).ok();
            pwm
        };

        #[cfg(feature = "uart1-console")]
        let uart = {
            use hal::uart::{DataBits, StopBits, UartConfig, UartPeripheral};
            let tx: picoxpander_bsp::Uart1Tx = pins.qw1.reconfigure();
            let rx: picoxpander_bsp::Uart1Rx = pins.qw0.reconfigure();
            UartPeripheral::new(pac.UART1, (tx, rx), &mut pac.RESETS)
                .enable(
                    UartConfig::new(plc::UART_BAUD_RATE.Hz(), DataBits::Eight, None, StopBits::One),
                    clocks.peripheral_clock.freq(),
                )
                .unwrap()
        };

        // OLED bus
        let sda: picoxpander_bsp::I2c0Sda = pins.sda.reconfigure();
        let scl: picoxpander_bsp::I2c0Scl = pins.scl.reconfigure();
        let mut i2c = hal::I2C::i2c0(
            pac.I2C0,
            sda,
            scl,
            plc::I2C_FREQUENCY_HZ.Hz(),
            &mut pac.RESETS,
            clocks.system_clock.freq(),
        );
        // a bare control byte is enough for the display to ACK
        let _oled = i2c.write(plc::OLED_I2C_ADDRESS, &[0x00]).is_ok();
        #[cfg(feature = "defmt")]
        defmt::info!("OLED at {=u8:#04x}: {=bool}", plc::OLED_I2C_ADDRESS, _oled);

        let mut image = IoImage::default();
        let mut reported: Option<(u8, u8)> = None;
        loop {
            image.inputs = IoImage::sample(inputs.iter_mut().map(|pin| pin.is_high().unwrap_or(false)));
            image.analog = [
                adc.read(&mut iw0).unwrap_or(0),
                adc.read(&mut iw1).unwrap_or(0),
                adc.read(&mut iw2).unwrap_or(0),
            ];

            for frame in DiagnosticCycle::new(image.inputs) {
                drive(&mut outputs, frame.outputs);
                image.apply(&frame);
                if reported != Some(image.digital()) {
                    let _line = report(&image);
                    #[cfg(feature = "uart1-console")]
                    uart.write_full_blocking(_line.as_bytes());
                    reported = Some(image.digital());
                }
                delay.delay_ms(frame.hold_ms);
            }

            // confirms the scan loop is running
            led.toggle().ok();
            delay.delay_ms(plc::SCAN_PAUSE_MS);
        }
    }

    fn drive(outputs: &mut [Output; 8], bits: u8) {
        for (i, pin) in outputs.iter_mut().enumerate() {
            pin.set_state(PinState::from(bits & (1 << i) != 0)).ok();
        }
    }

    /// Send the I/O image to the host, returning the line sent.
    ///
    /// We do this with interrupts disabled, to avoid a race hazard with the USB IRQ.
    fn report(image: &IoImage) -> String<REPLY_LEN> {
        #[cfg(feature = "defmt")]
        defmt::info!("{}", image);

        let mut line: String<REPLY_LEN> = String::new();
        if write!(line, "{}\r\n", image).is_err() {
            line.clear();
            return line;
        }
        critical_section::with(|_| unsafe {
            if let Some(serial) = USB_SERIAL.as_mut() {
                let _ = serial.write(line.as_bytes());
            }
        });
        line
    }

    /// This function is called whenever the USB Hardware generates an Interrupt
    /// Request.
    #[allow(non_snake_case)]
    #[interrupt]
    unsafe fn USBCTRL_IRQ() {
        // Grab the global objects. This is OK as we only access them under interrupt.
        let usb_dev = USB_DEVICE.as_mut().unwrap();
        let serial = USB_SERIAL.as_mut().unwrap();
        let query = &mut QUERY;

        // Poll the USB driver with all of our supported USB Classes
        if usb_dev.poll(&mut [serial]) {
            let mut buf = [0u8; 64];
            match serial.read(&mut buf) {
                Err(_e) => {
                    // Do nothing
                }
                Ok(0) => {
                    // Do nothing
                }
                Ok(count) => {
                    query.feed(&buf[..count], |line| {
                        let mut reply: String<REPLY_LEN> = String::new();
                        console::answer(BOARD, line, &mut reply);

                        // Send back to the host
                        let mut wr_ptr = reply.as_bytes();
                        while !wr_ptr.is_empty() {
                            match serial.write(wr_ptr) {
                                Ok(len) => wr_ptr = &wr_ptr[len..],
                                Err(_) => break,
                            }
                        }
                    });
                }
            }
        }
    }
}

#[cfg(not(target_os = "none"))]
fn main() {}
