// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Driver for the Microchip KSZ8895 5-port Ethernet switch
//!
//! Ports 1-4 are copper ports with integrated PHYs; port 5 is the MII/RMII
//! uplink to the host MAC.  All port traffic shares that single MAC link, so
//! frames carry a one-byte tail tag naming their source or destination port
//! (see [`tail_tag`]).
//!
//! The driver is generic over a [`RegisterBus`], which performs single-byte
//! register transactions over SPI ([`Spi`]) or the MII management bus
//! ([`Smi`]).  Every driver instance owns its bus handle, its link monitor
//! state and its trace buffer; callers must serialize access, which the
//! `&mut self` receivers enforce.
#![cfg_attr(not(test), no_std)]

mod bus;
mod config;
mod diag;
pub mod fields;
mod indirect;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
mod monitor;
mod phy;
mod registers;
pub mod tail_tag;

pub use bus::{
    BusError, RegisterBus, Smi, SmiRw, Spi, SPI_CMD_READ, SPI_CMD_WRITE,
};
pub use config::{Config, PortMode};
pub use diag::{CableDiagnosis, CableStatus, PhyDump, SwitchDump};
pub use indirect::{
    IndirectTable, MibCounter, MibCounterValue, INDIRECT_DATA_MASK,
};
pub use monitor::{
    Duplex, LinkEvent, LinkListener, LinkMonitor, LinkState, LinkStatus,
    Speed,
};
pub use phy::PhyRegister;
pub use registers::{PortRegister, Register};

use embedded_hal::blocking::delay::DelayMs;
use num_derive::FromPrimitive;
use ringbuf::{ringbuf_entry, Ringbuf};

/// Depth of the per-instance trace buffer
pub const TRACE_DEPTH: usize = 32;

/// One of the switch's five ports
#[derive(Copy, Clone, Debug, Eq, PartialEq, FromPrimitive)]
#[repr(u8)]
pub enum Port {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    /// MII/RMII uplink to the host
    Five = 5,
}

impl Port {
    pub const ALL: [Port; 5] =
        [Port::One, Port::Two, Port::Three, Port::Four, Port::Five];

    /// Ports with an integrated copper PHY
    pub const COPPER: [Port; 4] =
        [Port::One, Port::Two, Port::Three, Port::Four];

    pub const fn number(self) -> u8 {
        self as u8
    }

    pub const fn is_copper(self) -> bool {
        !matches!(self, Port::Five)
    }

    /// Zero-based index, for per-port arrays
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    /// This port's bit in `INT_STAT` / `INT_MASK`
    pub const fn interrupt_bit(self) -> u8 {
        1 << self.index()
    }
}

impl TryFrom<u8> for Port {
    type Error = Ksz8895Error;

    fn try_from(port: u8) -> Result<Self, Self::Error> {
        <Port as num_traits::FromPrimitive>::from_u8(port)
            .ok_or(Ksz8895Error::InvalidPort(port))
    }
}

impl From<Port> for u8 {
    fn from(p: Port) -> u8 {
        p.number()
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Ksz8895Error {
    Bus(BusError),
    /// Port number outside the range accepted by the operation
    InvalidPort(u8),
    /// PHY register with no mapping, or a read-only one being written
    InvalidRegister(u8),
    /// Received frame too short to carry a tail tag; holds its length
    FrameTooShort(usize),
    /// Frame buffer has no room for the tail tag (or padding)
    FrameTooLong,
    /// Indirect table selector wider than four bits
    InvalidIndirectSelector(u8),
    /// Indirect table index wider than ten bits
    InvalidIndirectIndex(u16),
    /// Value does not fit the 40-bit indirect data window
    IndirectValueOverflow,
    /// `CHIP_ID0` never read back the KSZ8895 family ID
    BadChipId(u8),
    LinkMdTimeout,
    MibTimeout,
}

impl From<BusError> for Ksz8895Error {
    fn from(e: BusError) -> Self {
        Self::Bus(e)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Trace {
    None,
    Read(u8, u8),
    Write(u8, u8),
    IndirectRead { selector: u8, index: u8, value: u64 },
    IndirectWrite { selector: u8, index: u8, value: u64 },
    ChipIdRetry(u8),
    Id(ChipId),
    PortMode(PortMode),
    Link(LinkEvent),
    Interrupt(u8),
    LinkMd { port: Port, result: u16 },
    MibNotReady { index: u16 },
    BusError(BusError),
}

/// Identity read from the chip at bring-up.  Only used to validate the bus;
/// no behavior depends on the revision.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ChipId {
    /// `CHIP_ID0`, always `0x95`
    pub family: u8,
    /// `CHIP_ID1.CHIP_ID`
    pub chip: u8,
    /// `CHIP_ID1.REVISION_ID`
    pub revision: u8,
    /// `ID.REVISION_ID`
    pub id: u8,
}

pub struct Ksz8895<B> {
    bus: B,
    config: Config,
    monitor: LinkMonitor,
    trace: Ringbuf<Trace, TRACE_DEPTH>,
}

impl<B: RegisterBus> Ksz8895<B> {
    /// Wraps a bus handle without touching the chip; see [`Ksz8895::init`].
    pub fn new(bus: B, config: Config) -> Self {
        Self {
            bus,
            config,
            monitor: LinkMonitor::new(),
            trace: Ringbuf::new(Trace::None),
        }
    }

    /// Brings up the switch according to the configuration.
    ///
    /// Waits for the serial interface to answer with the KSZ8895 family ID,
    /// programs tail tagging and the per-port mode, optionally starts the
    /// switch, and resets every port's link state to down.
    pub fn init<D: DelayMs<u8>>(
        &mut self,
        delay: &mut D,
    ) -> Result<ChipId, Ksz8895Error> {
        let mut family = self.read(Register::CHIP_ID0)?;
        let mut retries = self.config.chip_id_retries;
        while family != fields::ChipId0::FAMILY_ID_DEFAULT {
            if retries == 0 {
                return Err(Ksz8895Error::BadChipId(family));
            }
            retries -= 1;
            ringbuf_entry!(self.trace, Trace::ChipIdRetry(family));
            delay.delay_ms(self.config.poll_interval_ms);
            family = self.read(Register::CHIP_ID0)?;
        }

        let id1 = fields::ChipId1::from_bits_retain(
            self.read(Register::CHIP_ID1)?,
        );
        let id = fields::Id::from_bits_retain(self.read(Register::ID)?);
        let chip = ChipId {
            family,
            chip: (id1 & fields::ChipId1::CHIP_ID).bits(),
            revision: (id1 & fields::ChipId1::REVISION_ID).bits() >> 1,
            id: (id & fields::Id::REVISION_ID).bits(),
        };
        ringbuf_entry!(self.trace, Trace::Id(chip));

        let tail_tagging = self.config.tail_tagging;
        self.modify(Register::GLOBAL_CTRL10, |r| {
            if tail_tagging {
                *r |= fields::GlobalCtrl10::TAIL_TAG_EN.bits();
            } else {
                *r &= !fields::GlobalCtrl10::TAIL_TAG_EN.bits();
            }
        })?;

        self.apply_port_mode(self.config.port_mode)?;

        if self.config.start_switch {
            self.modify(Register::CHIP_ID1, |r| {
                *r |= fields::ChipId1::START_SWITCH.bits()
            })?;
        }

        self.monitor.reset();
        Ok(chip)
    }

    /// Reads a register in the direct address space
    pub fn read_direct(&mut self, addr: u8) -> Result<u8, Ksz8895Error> {
        match self.bus.read(SPI_CMD_READ, addr) {
            Ok(v) => {
                ringbuf_entry!(self.trace, Trace::Read(addr, v));
                Ok(v)
            }
            Err(e) => {
                ringbuf_entry!(self.trace, Trace::BusError(e));
                Err(e.into())
            }
        }
    }

    /// Writes a register in the direct address space
    pub fn write_direct(
        &mut self,
        addr: u8,
        v: u8,
    ) -> Result<(), Ksz8895Error> {
        ringbuf_entry!(self.trace, Trace::Write(addr, v));
        self.bus.write(SPI_CMD_WRITE, addr, v).map_err(|e| {
            ringbuf_entry!(self.trace, Trace::BusError(e));
            e.into()
        })
    }

    pub fn read(&mut self, r: Register) -> Result<u8, Ksz8895Error> {
        self.read_direct(r.addr())
    }

    pub fn write(&mut self, r: Register, v: u8) -> Result<(), Ksz8895Error> {
        self.write_direct(r.addr(), v)
    }

    /// Performs a read-modify-write operation on a switch register
    #[inline(always)]
    pub fn modify<F>(&mut self, r: Register, f: F) -> Result<(), Ksz8895Error>
    where
        F: Fn(&mut u8),
    {
        let mut data = self.read(r)?;
        f(&mut data);
        self.write(r, data)
    }

    pub fn read_port(
        &mut self,
        r: PortRegister,
        port: Port,
    ) -> Result<u8, Ksz8895Error> {
        self.read_direct(r.address(port))
    }

    pub fn write_port(
        &mut self,
        r: PortRegister,
        port: Port,
        v: u8,
    ) -> Result<(), Ksz8895Error> {
        self.write_direct(r.address(port), v)
    }

    /// Performs a read-modify-write operation on one port's register
    #[inline(always)]
    pub fn modify_port<F>(
        &mut self,
        r: PortRegister,
        port: Port,
        f: F,
    ) -> Result<(), Ksz8895Error>
    where
        F: Fn(&mut u8),
    {
        let mut data = self.read_port(r, port)?;
        f(&mut data);
        self.write_port(r, port, data)
    }

    /// Programs `PORTn_CTRL2` of the copper ports for `mode`
    pub fn apply_port_mode(
        &mut self,
        mode: PortMode,
    ) -> Result<(), Ksz8895Error> {
        use fields::PortCtrl2;
        ringbuf_entry!(self.trace, Trace::PortMode(mode));

        let (set, clear) = match mode {
            PortMode::Switch => (
                PortCtrl2::TRANSMIT_EN | PortCtrl2::RECEIVE_EN,
                PortCtrl2::LEARNING_DIS,
            ),
            PortMode::Separated => (
                PortCtrl2::RECEIVE_EN | PortCtrl2::LEARNING_DIS,
                PortCtrl2::TRANSMIT_EN,
            ),
        };
        for port in Port::COPPER {
            self.modify_port(PortRegister::CTRL2, port, |r| {
                *r = (*r & !clear.bits()) | set.bits()
            })?;
        }
        self.config.port_mode = mode;
        Ok(())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn monitor(&self) -> &LinkMonitor {
        &self.monitor
    }

    /// Trace of recent activity, see [`Ringbuf::iter`]
    pub fn trace(&self) -> &Ringbuf<Trace, TRACE_DEPTH> {
        &self.trace
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Consumes the driver, giving back the bus
    pub fn release(self) -> B {
        self.bus
    }
}
