//! Galvani analog bridge firmware
//!
//! Turns an RP2040 into an analog-to-I2C bridge: the four converter pins
//! carry the power-sense module's voltage and current outputs plus up to
//! two ESC current taps, and the latest conversion is served to the host
//! on demand over I2C. The device is purely reactive - the host writes a
//! channel selector byte, then reads back a two-byte sample frame.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Blocking, Channel, Config as AdcConfig};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::Pull;
use embassy_rp::i2c::InterruptHandler as I2cInterruptHandler;
use embassy_rp::i2c_slave::{self, Command, I2cSlave, ReadStatus};
use embassy_rp::peripherals::I2C1;
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use galvani_core::{AnalogInput, ChannelMap, Responder, SampleSource};
use galvani_protocol::{SensorChannel, BRIDGE_ADDRESS};

bind_interrupts!(struct Irqs {
    I2C1_IRQ => I2cInterruptHandler<I2C1>;
});

/// Receive buffer for one write transaction
///
/// A selector write is a single byte; the extra room lets `on_receive`
/// drain a host that erroneously sends more.
const RX_BUF_LEN: usize = 16;

/// Board analog front end: ADC0-3 on GPIO26-29
///
/// RP2040 conversions are 12-bit; the wire format carries 10, so readings
/// are scaled down before they leave this layer.
struct BoardAdc {
    adc: Adc<'static, Blocking>,
    inputs: [Channel<'static>; 4],
}

impl SampleSource for BoardAdc {
    fn sample(&mut self, input: AnalogInput) -> u16 {
        // The channel map only hands out inputs 0-3
        let pin = &mut self.inputs[input.id() as usize];
        match self.adc.blocking_read(pin) {
            Ok(raw) => raw >> 2,
            Err(e) => {
                // Conversions are assumed good; a fault reads as zero
                warn!("ADC conversion fault on input {}: {:?}", input.id(), e);
                0
            }
        }
    }
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Galvani bridge starting...");

    let p = embassy_rp::init(Default::default());

    // Analog front end
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let inputs = [
        Channel::new_pin(p.PIN_26, Pull::None),
        Channel::new_pin(p.PIN_27, Pull::None),
        Channel::new_pin(p.PIN_28, Pull::None),
        Channel::new_pin(p.PIN_29, Pull::None),
    ];
    let source = BoardAdc { adc, inputs };

    let responder = Responder::new(source, channel_map());

    // I2C1 in responder mode on GPIO2 (SDA) / GPIO3 (SCL)
    let mut config = i2c_slave::Config::default();
    config.addr = BRIDGE_ADDRESS as u16;
    let bus = I2cSlave::new(p.I2C1, p.PIN_3, p.PIN_2, Irqs, config);

    info!("Listening at address {=u8}", BRIDGE_ADDRESS);

    spawner.spawn(bus_task(bus, responder)).unwrap();

    // All work happens in the bus task
    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

/// Selector-to-input wiring for this board
///
/// The two-channel build leaves the ESC taps out of the map; a request
/// for them then gets the same empty reply as any unknown selector.
fn channel_map() -> ChannelMap {
    let mut map = ChannelMap::new();
    map.assign(SensorChannel::PsmVoltage, AnalogInput::new(0));
    map.assign(SensorChannel::PsmCurrent, AnalogInput::new(1));
    #[cfg(not(feature = "psm-only"))]
    {
        map.assign(SensorChannel::Esc1Current, AnalogInput::new(2));
        map.assign(SensorChannel::Esc2Current, AnalogInput::new(3));
    }
    map
}

/// Serve host transactions forever
///
/// The peripheral serializes transactions, so the responder only ever
/// sees one event at a time and its selector state needs no locking.
#[embassy_executor::task]
async fn bus_task(mut bus: I2cSlave<'static, I2C1>, mut responder: Responder<BoardAdc>) {
    info!("Bus task started");

    let mut buf = [0u8; RX_BUF_LEN];

    loop {
        match bus.listen(&mut buf).await {
            Ok(Command::Write(len)) => {
                responder.on_receive(&buf[..len]);
                trace!(
                    "Host wrote {=usize} byte(s), selector now {:?}",
                    len,
                    responder.selector()
                );
            }
            Ok(Command::Read) => {
                reply(&mut bus, &mut responder).await;
            }
            Ok(Command::WriteRead(len)) => {
                // Combined transaction: selector write, repeated start, read
                responder.on_receive(&buf[..len]);
                reply(&mut bus, &mut responder).await;
            }
            Ok(Command::GeneralCall(len)) => {
                trace!("Ignoring general call ({=usize} bytes)", len);
            }
            Err(e) => {
                warn!("Bus listen error: {:?}", e);
            }
        }
    }
}

/// Answer a read request with a fresh sample, or with nothing on error
async fn reply(bus: &mut I2cSlave<'static, I2C1>, responder: &mut Responder<BoardAdc>) {
    match responder.on_request() {
        Ok(frame) => match bus.respond_and_fill(&frame, 0x00).await {
            Ok(ReadStatus::Done) => {
                trace!("Replied high={=u8} low={=u8}", frame[0], frame[1]);
            }
            Ok(ReadStatus::LeftoverBytes(n)) => {
                trace!("Host stopped {=u16} byte(s) early", n);
            }
            Ok(ReadStatus::NeedMoreBytes) => {
                warn!("Host read past the reply frame");
            }
            Err(e) => {
                warn!("Bus reply error: {:?}", e);
            }
        },
        Err(e) => {
            // Diagnostic only; the host observes a short read
            warn!("Read request not served: {:?}", e);
        }
    }
}
