// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{Ksz8895, Ksz8895Error, RegisterBus};
use embedded_hal::blocking::delay::DelayMs;

/// How the copper ports forward traffic
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PortMode {
    /// Normal switching between all ports, with address learning
    Switch,
    /// Ports 1-4 only talk to the host: transmit and learning are disabled,
    /// so the host steers every frame with a tail tag.
    Separated,
}

/// Configuration for one KSZ8895, consumed by [`Config::build`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub port_mode: PortMode,

    /// Enables tail tagging on the uplink (`GLOBAL_CTRL10.TAIL_TAG_EN`)
    pub tail_tagging: bool,

    /// Sets `CHIP_ID1.START_SWITCH` once configuration is done
    pub start_switch: bool,

    /// Whether the link monitor also tracks port 5
    pub monitor_uplink: bool,

    /// Shortest frame the host accepts once its tail tag is removed
    pub min_frame_len: usize,

    /// Zero-pad transmitted frames to the Ethernet minimum before tagging.
    /// The chip only looks for the tail tag after the pad, so this must be
    /// set unless the host MAC pads on its own.
    pub pad_short_frames: bool,

    /// Polls of `CHIP_ID0` before giving up on the serial interface
    pub chip_id_retries: u8,
    /// Polls of `PORTn_PSCS` while waiting on a cable test
    pub linkmd_retries: u8,
    /// Polls of the MIB valid bit
    pub mib_retries: u8,
    /// Delay between successive polls, in milliseconds
    pub poll_interval_ms: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port_mode: PortMode::Switch,
            tail_tagging: true,
            start_switch: true,
            monitor_uplink: false,
            min_frame_len: 14,
            pad_short_frames: false,
            chip_id_retries: 10,
            linkmd_retries: 20,
            mib_retries: 8,
            poll_interval_ms: 10,
        }
    }
}

impl Config {
    /// Brings up the switch on `bus`, returning the ready driver.
    pub fn build<B: RegisterBus, D: DelayMs<u8>>(
        self,
        bus: B,
        delay: &mut D,
    ) -> Result<Ksz8895<B>, Ksz8895Error> {
        let mut dev = Ksz8895::new(bus, self);
        dev.init(delay)?;
        Ok(dev)
    }
}
