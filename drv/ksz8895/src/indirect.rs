// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Indirect register space.
//!
//! Tables too large for the direct space (MAC tables, VLAN table, MIB
//! counters) are reached through a handshake: `IND_ACCESS_CTRL0` picks the
//! direction and a 4-bit selector (table plus index bits 9:8),
//! `IND_ACCESS_CTRL1` holds index bits 7:0, and the entry itself moves
//! through a 40-bit window spread over `IND_DATA4` (bits 39:32) down to
//! `IND_DATA0` (bits 7:0).
//!
//! Each access is a fixed sequence of seven direct transactions.  If one of
//! them fails, the chip's indirect state is undefined and the target entry
//! must be treated as unknown until read back.

use crate::fields::IndAccessCtrl0;
use crate::{Ksz8895, Ksz8895Error, Port, RegisterBus, Register, Trace};
use embedded_hal::blocking::delay::DelayMs;
use ringbuf::ringbuf_entry;

/// Mask of the bits carried by the indirect data window
pub const INDIRECT_DATA_MASK: u64 = (1 << 40) - 1;

/// Data window, most significant byte first
const DATA_WINDOW: [Register; 5] = [
    Register::IND_DATA4,
    Register::IND_DATA3,
    Register::IND_DATA2,
    Register::IND_DATA1,
    Register::IND_DATA0,
];

/// Tables reachable through the indirect space
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum IndirectTable {
    StaticMac = 0,
    Vlan = 1,
    DynamicMac = 2,
    Mib = 3,
}

impl IndirectTable {
    /// Builds the 4-bit selector for `index` within this table.
    pub const fn selector(self, index: u16) -> u8 {
        ((self as u8) << 2) | ((index >> 8) as u8 & 0b11)
    }
}

/// Offsets used to access MIB counters; each port has 0x20 of them.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum MibCounter {
    /// Rx octets at low priority, bad packets included
    RxLoPriorityByte = 0x00,
    /// Rx octets at high priority, bad packets included
    RxHiPriorityByte = 0x01,
    RxUndersizePkt = 0x02,
    RxFragments = 0x03,
    RxOversize = 0x04,
    RxJabbers = 0x05,
    RxSymbolError = 0x06,
    RxCrcError = 0x07,
    RxAlignmentError = 0x08,
    RxControl8808Pkts = 0x09,
    RxPausePkts = 0x0A,
    RxBroadcast = 0x0B,
    RxMulticast = 0x0C,
    RxUnicast = 0x0D,
    Rx64Octets = 0x0E,
    Rx65To127Octets = 0x0F,
    Rx128To255Octets = 0x10,
    Rx256To511Octets = 0x11,
    Rx512To1023Octets = 0x12,
    Rx1024To1522Octets = 0x13,
    /// Tx octets at low priority
    TxLoPriorityByte = 0x14,
    /// Tx octets at high priority
    TxHiPriorityByte = 0x15,
    TxLateCollision = 0x16,
    TxPausePkts = 0x17,
    TxBroadcastPkts = 0x18,
    TxMulticastPkts = 0x19,
    TxUnicastPkts = 0x1A,
    TxDeferred = 0x1B,
    TxTotalCollision = 0x1C,
    TxExcessiveCollision = 0x1D,
    TxSingleCollision = 0x1E,
    TxMultipleCollision = 0x1F,
}

/// Counters per port in the MIB table
const MIB_PORT_STRIDE: u16 = 0x20;

/// Set once the chip has latched the requested counter
const MIB_VALID: u64 = 1 << 37;
const MIB_OVERFLOW: u64 = 1 << 38;
const MIB_COUNT: u64 = (1 << 30) - 1;

/// Data from a management information base (MIB) counter
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MibCounterValue {
    Count(u32),
    /// The counter wrapped since it was last read
    CountOverflow(u32),
}

impl MibCounterValue {
    pub fn value(self) -> u32 {
        match self {
            Self::Count(v) | Self::CountOverflow(v) => v,
        }
    }
}

impl<B: RegisterBus> Ksz8895<B> {
    fn start_indirect(
        &mut self,
        read: bool,
        selector: u8,
        index: u8,
    ) -> Result<(), Ksz8895Error> {
        if selector & !IndAccessCtrl0::SELECTOR != 0 {
            return Err(Ksz8895Error::InvalidIndirectSelector(selector));
        }
        let mut ctrl0 = selector;
        if read {
            ctrl0 |= IndAccessCtrl0::READ.bits();
        }
        self.write(Register::IND_ACCESS_CTRL0, ctrl0)?;
        self.write(Register::IND_ACCESS_CTRL1, index)
    }

    /// Writes a 40-bit entry in the indirect space.
    pub fn write_indirect(
        &mut self,
        selector: u8,
        index: u8,
        value: u64,
    ) -> Result<(), Ksz8895Error> {
        if value & !INDIRECT_DATA_MASK != 0 {
            return Err(Ksz8895Error::IndirectValueOverflow);
        }
        self.start_indirect(false, selector, index)?;
        ringbuf_entry!(
            self.trace,
            Trace::IndirectWrite {
                selector,
                index,
                value
            }
        );
        for (i, r) in DATA_WINDOW.into_iter().enumerate() {
            let shift = 8 * (DATA_WINDOW.len() - 1 - i);
            self.write(r, (value >> shift) as u8)?;
        }
        Ok(())
    }

    /// Reads a 40-bit entry from the indirect space.
    pub fn read_indirect(
        &mut self,
        selector: u8,
        index: u8,
    ) -> Result<u64, Ksz8895Error> {
        self.start_indirect(true, selector, index)?;
        let value = self.read_window()?;
        ringbuf_entry!(
            self.trace,
            Trace::IndirectRead {
                selector,
                index,
                value
            }
        );
        Ok(value)
    }

    fn read_window(&mut self) -> Result<u64, Ksz8895Error> {
        let mut value = 0;
        for r in DATA_WINDOW {
            value = (value << 8) | u64::from(self.read(r)?);
        }
        Ok(value)
    }

    /// Reads entry `index` (10 bits) of `table`.
    pub fn read_table(
        &mut self,
        table: IndirectTable,
        index: u16,
    ) -> Result<u64, Ksz8895Error> {
        check_index(index)?;
        self.read_indirect(table.selector(index), index as u8)
    }

    /// Writes entry `index` (10 bits) of `table`.
    pub fn write_table(
        &mut self,
        table: IndirectTable,
        index: u16,
        value: u64,
    ) -> Result<(), Ksz8895Error> {
        check_index(index)?;
        self.write_indirect(table.selector(index), index as u8, value)
    }

    /// Reads a management information base (MIB) counter for `port` (1-5).
    ///
    /// The chip latches the counter after the request; the high byte of the
    /// window is polled until its valid bit is set, at most `mib_retries`
    /// more times.
    pub fn read_mib_counter<D: DelayMs<u8>>(
        &mut self,
        port: u8,
        counter: MibCounter,
        delay: &mut D,
    ) -> Result<MibCounterValue, Ksz8895Error> {
        let port = Port::try_from(port)?;
        let index = u16::from(port.number() - 1) * MIB_PORT_STRIDE
            + counter as u16;

        let mut value = self.read_table(IndirectTable::Mib, index)?;
        let mut retries = self.config.mib_retries;
        while value & MIB_VALID == 0 {
            if retries == 0 {
                return Err(Ksz8895Error::MibTimeout);
            }
            retries -= 1;
            ringbuf_entry!(self.trace, Trace::MibNotReady { index });
            delay.delay_ms(self.config.poll_interval_ms);
            value = self.read_window()?;
        }

        let count = (value & MIB_COUNT) as u32;
        if value & MIB_OVERFLOW != 0 {
            Ok(MibCounterValue::CountOverflow(count))
        } else {
            Ok(MibCounterValue::Count(count))
        }
    }
}

fn check_index(index: u16) -> Result<(), Ksz8895Error> {
    if index >= 1 << 10 {
        Err(Ksz8895Error::InvalidIndirectIndex(index))
    } else {
        Ok(())
    }
}
