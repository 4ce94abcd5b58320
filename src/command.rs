//! Cached copy of the VEML6070 command register.
//!
//! The device has a single writable 8-bit register and no way to read
//! it back, so the driver keeps a shadow copy and retransmits the whole
//! byte after every change.  Layout (datasheet rev 1.7, p. 6):
//!
//! | bit | name    |                                              |
//! |-----|---------|----------------------------------------------|
//! | 0   | SD      | shutdown                                     |
//! | 1   | —       | reserved, must be written 1                  |
//! | 2–3 | IT      | integration time code                        |
//! | 4   | ACK_THD | alert threshold, 1 = 145 steps, 0 = 102      |
//! | 5   | ACK     | alert enable                                 |
//! | 6–7 | —       | reserved, written 0                          |

use crate::IntegrationTime;

const SD: u8 = 0b0000_0001;
const RESERVED: u8 = 0b0000_0010;
const IT_MASK: u8 = 0b0000_1100;
const IT_SHIFT: u8 = 2;
const ACK_THD: u8 = 0b0001_0000;
const ACK: u8 = 0b0010_0000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct CommandRegister(u8);

impl CommandRegister {
    pub(crate) const fn new() -> Self {
        Self(RESERVED)
    }

    pub(crate) const fn bits(self) -> u8 {
        self.0
    }

    pub(crate) fn set_shutdown(&mut self, state: bool) {
        self.set(SD, state);
    }

    pub(crate) fn set_ack(&mut self, enable: bool) {
        self.set(ACK, enable);
    }

    pub(crate) fn set_ack_threshold(&mut self, high: bool) {
        self.set(ACK_THD, high);
    }

    pub(crate) fn set_integration_time(&mut self, integration_time: IntegrationTime) {
        self.0 = (self.0 & !IT_MASK) | (u8::from(integration_time) << IT_SHIFT);
    }

    /// Number of base 62.5 ms slots one conversion takes: 1, 2, 4 or 8.
    pub(crate) const fn integration_multiplier(self) -> u32 {
        1 << ((self.0 & IT_MASK) >> IT_SHIFT)
    }

    fn set(&mut self, mask: u8, value: bool) {
        if value {
            self.0 |= mask;
        } else {
            self.0 &= !mask;
        }
    }
}
