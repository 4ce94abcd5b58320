#![no_std]
#![doc = include_str!("../README.md")]

mod command;

use command::CommandRegister;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{Error, ErrorKind, I2c};
use num_enum::IntoPrimitive;

/// Alert Response Address.  While an alert is latched the device only
/// answers here; reading one byte releases it.
const ADDR_ARA: u8 = 0x0C;
/// Command register write target.
const ADDR_CMD: u8 = 0x38;
/// Result low byte.  Same 7-bit value as [`ADDR_CMD`], distinguished by
/// the bus direction bit.
const ADDR_DATA_L: u8 = 0x38;
/// Result high byte.
const ADDR_DATA_H: u8 = 0x39;

/// One integration slot with RSET = 270 kΩ: 62.5 ms nominal per the
/// datasheet, rounded up for clock error margin.
const SLOT_MS: u32 = 63;

/// Integration time code, bits 2–3 of the command register.  One
/// conversion takes the given multiple of the base 62.5 ms slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoPrimitive)]
#[repr(u8)]
pub enum IntegrationTime {
    It1x = 0,
    It2x = 1,
    It4x = 2,
    It8x = 3,
}

pub struct Veml6070<I2C, DELAY> {
    i2c: I2C,
    delay: DELAY,
    command: CommandRegister,
}

impl<I2C: I2c, DELAY: DelayNs> Veml6070<I2C, DELAY> {
    /// Creates a driver handle.  No bus traffic occurs until
    /// [`Veml6070::begin`] is called.
    pub const fn new(i2c: I2C, delay: DELAY) -> Self {
        Self {
            i2c,
            delay,
            command: CommandRegister::new(),
        }
    }

    /// Configures the integration time and writes the command register,
    /// leaving the device in active mode.
    ///
    /// A latched alert is cleared first: the device does not respond at
    /// its normal addresses until the alert is released, and a soft
    /// reset can leave it latched from a previous run.
    ///
    /// # Errors
    ///
    /// Propagates any bus error other than the expected address NACK
    /// during the alert clear.
    pub fn begin(&mut self, integration_time: IntegrationTime) -> Result<(), I2C::Error> {
        self.command.set_integration_time(integration_time);
        self.clear_ack()?;
        self.write_command()
    }

    /// Enables or disables the threshold alert.  `high_threshold`
    /// selects the 145-step threshold instead of the default 102.
    ///
    /// # Errors
    ///
    /// Propagates any bus error other than the expected address NACK
    /// during the alert clear.
    pub fn set_interrupt(&mut self, enable: bool, high_threshold: bool) -> Result<(), I2C::Error> {
        self.command.set_ack(enable);
        self.command.set_ack_threshold(high_threshold);
        self.clear_ack()?;
        self.write_command()
    }

    /// Releases a latched alert by reading one byte from the Alert
    /// Response Address.  Returns whether an alert was pending.  A NACK
    /// means no alert was latched and is not an error.
    ///
    /// See datasheet rev 1.7, p. 7 and the application note, p. 13.
    ///
    /// # Errors
    ///
    /// Any bus fault other than an address NACK.
    pub fn clear_ack(&mut self) -> Result<bool, I2C::Error> {
        let mut ara: [u8; 1] = [0];
        match self.i2c.read(ADDR_ARA, &mut ara) {
            Ok(()) => Ok(true),
            Err(error) => match error.kind() {
                ErrorKind::NoAcknowledge(_) => Ok(false),
                _ => Err(error),
            },
        }
    }

    /// Reads one UV sample, waiting out a full integration period
    /// first.  The device does not buffer results, so reading earlier
    /// would return a stale or partially updated count.
    ///
    /// Blocks for 63 ms to 504 ms depending on the integration time.
    ///
    /// # Errors
    ///
    /// Fails on the first unanswered byte read; the counterpart of the
    /// original driver's `0xFFFF` sentinel, which collided with a
    /// saturated reading.
    pub fn read_uv(&mut self) -> Result<u16, I2C::Error> {
        self.wait_for_next();
        let mut high: [u8; 1] = [0];
        self.i2c.read(ADDR_DATA_H, &mut high)?;
        let mut low: [u8; 1] = [0];
        self.i2c.read(ADDR_DATA_L, &mut low)?;
        Ok(u16::from_be_bytes([high[0], low[0]]))
    }

    /// Enters or leaves shutdown mode (~1 µA draw while asleep).  A
    /// latched alert is deliberately left alone; callers that use the
    /// alert should release it with [`Veml6070::clear_ack`] themselves.
    ///
    /// # Errors
    ///
    /// Propagates the bus error of the command write.
    pub fn sleep(&mut self, state: bool) -> Result<(), I2C::Error> {
        self.command.set_shutdown(state);
        self.write_command()
    }

    fn wait_for_next(&mut self) {
        self.delay
            .delay_ms(SLOT_MS * self.command.integration_multiplier());
    }

    fn write_command(&mut self) -> Result<(), I2C::Error> {
        self.i2c.write(ADDR_CMD, &[self.command.bits()])
    }
}
