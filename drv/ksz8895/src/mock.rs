// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Simulated KSZ8895 for host-side testing.
//!
//! [`MockSwitch`] implements [`RegisterBus`] over a 256-byte register file
//! and models the parts of the chip with side effects: the indirect access
//! handshake (including the MIB valid bit), write-one-to-clear interrupt
//! status, and LinkMD completion.  Every transaction is logged, and the
//! bus can be told to start failing after a number of transactions.

use crate::fields::PortPscs;
use crate::{
    BusError, Duplex, Port, PortRegister, Register, RegisterBus, Speed,
    SPI_CMD_READ, SPI_CMD_WRITE,
};
use embedded_hal::blocking::delay::DelayMs;

/// Reset value of `PORTn_CTRL1` (member of every port's VLAN)
pub const DEFAULT_PORT_CTRL1: u8 = 0x1F;

/// Reset value of `PORTn_CTRL2` (transmit and receive enabled)
pub const DEFAULT_PORT_CTRL2: u8 = 0x06;

/// Depth of the transaction log; later transactions are not recorded
pub const LOG_DEPTH: usize = 512;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Transaction {
    Read { addr: u8, data: u8 },
    Write { addr: u8, data: u8 },
}

const IND_READ: u8 = 0x10;
const MIB_TABLE: u8 = 3;
const MIB_VALID: u64 = 1 << 37;

/// PSCS bits latched by a finished cable test
const LINKMD_RESULT_BITS: u8 = PortPscs::VCT_10M_SHORT.bits()
    | PortPscs::VCT_RESULT.bits()
    | PortPscs::VCT_FAULT_COUNT_MSB.bits();

#[derive(Copy, Clone, Debug, Default)]
struct LinkMdSim {
    /// Reads of PSCS that still show the test running
    polls: u8,
    remaining: Option<u8>,
    pscs: u8,
    count: u8,
}

#[derive(Copy, Clone, Debug)]
struct DelayedValue {
    addr: u8,
    reads: u8,
    value: u8,
}

pub struct MockSwitch {
    regs: [u8; 256],
    tables: [[u64; 256]; 16],

    /// Entry targeted by an indirect write, committed by `IND_DATA0`
    write_target: Option<(u8, u8)>,

    mib_latency: u8,
    mib_pending: u8,
    mib_value: Option<u64>,

    linkmd: [LinkMdSim; 5],
    delayed: Option<DelayedValue>,
    /// `INT_STAT` bits raised right after the next read of it
    late_interrupt: u8,

    fail_after: Option<usize>,
    transactions: usize,
    log: heapless::Vec<Transaction, LOG_DEPTH>,
}

impl Default for MockSwitch {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSwitch {
    /// A chip fresh out of reset
    pub fn new() -> Self {
        let mut regs = [0; 256];
        regs[Register::CHIP_ID0.addr() as usize] = 0x95;
        regs[Register::CHIP_ID1.addr() as usize] = 0x40;
        regs[Register::ID.addr() as usize] = 0x40;
        for port in Port::ALL {
            regs[PortRegister::CTRL1.address(port) as usize] =
                DEFAULT_PORT_CTRL1;
            regs[PortRegister::CTRL2.address(port) as usize] =
                DEFAULT_PORT_CTRL2;
        }
        Self {
            regs,
            tables: [[0; 256]; 16],
            write_target: None,
            mib_latency: 0,
            mib_pending: 0,
            mib_value: None,
            linkmd: [LinkMdSim::default(); 5],
            delayed: None,
            late_interrupt: 0,
            fail_after: None,
            transactions: 0,
            log: heapless::Vec::new(),
        }
    }

    /// Register contents, bypassing the bus and its side effects
    pub fn get(&self, addr: u8) -> u8 {
        self.regs[addr as usize]
    }

    pub fn set(&mut self, addr: u8, value: u8) {
        self.regs[addr as usize] = value;
    }

    /// Makes `addr` read back `value` once it has been read `reads` times.
    pub fn set_after_reads(&mut self, addr: u8, reads: u8, value: u8) {
        self.delayed = Some(DelayedValue { addr, reads, value });
    }

    pub fn table(&self, selector: u8, index: u8) -> u64 {
        self.tables[selector as usize & 0xF][index as usize]
    }

    pub fn set_table(&mut self, selector: u8, index: u8, value: u64) {
        self.tables[selector as usize & 0xF][index as usize] = value;
    }

    /// Number of window reads during which a requested MIB counter is not
    /// yet valid
    pub fn set_mib_latency(&mut self, passes: u8) {
        self.mib_latency = passes;
    }

    /// Sets the status registers of `port`.
    pub fn set_link(
        &mut self,
        port: Port,
        up: bool,
        speed: Speed,
        duplex: Duplex,
    ) {
        let stat1 = &mut self.regs[PortRegister::STAT1.address(port) as usize];
        if up {
            *stat1 |= 0x20;
        } else {
            *stat1 &= !0x20;
        }
        let stat0 = &mut self.regs[PortRegister::STAT0.address(port) as usize];
        *stat0 &= !0x06;
        if speed == Speed::Mbps100 {
            *stat0 |= 0x04;
        }
        if duplex == Duplex::Full {
            *stat0 |= 0x02;
        }
    }

    /// Flags `bits` in `INT_STAT`
    pub fn raise_interrupt(&mut self, bits: u8) {
        self.regs[Register::INT_STAT.addr() as usize] |= bits;
    }

    /// Flags `bits` in `INT_STAT` just after the next read of it, as if a
    /// link changed while the interrupt was being serviced
    pub fn raise_interrupt_after_read(&mut self, bits: u8) {
        self.late_interrupt |= bits;
    }

    /// Scripts the next cable test on `port`: after `polls` reads of PSCS
    /// with the test running, `pscs` result bits and the low byte of the
    /// fault count are latched.
    pub fn set_linkmd(&mut self, port: Port, polls: u8, pscs: u8, count: u8) {
        self.linkmd[port.index()] = LinkMdSim {
            polls,
            remaining: None,
            pscs: pscs & LINKMD_RESULT_BITS,
            count,
        };
    }

    /// Lets `n` more transactions through, then fails every one after.
    pub fn fail_after(&mut self, n: usize) {
        self.fail_after = Some(self.transactions + n);
    }

    pub fn log(&self) -> &[Transaction] {
        &self.log
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    fn transact(&mut self, t: Transaction) -> Result<(), BusError> {
        if self.fail_after.is_some_and(|n| self.transactions >= n) {
            return Err(BusError::Transfer);
        }
        self.transactions += 1;
        // A full log only stops recording
        let _ = self.log.push(t);
        Ok(())
    }

    fn pscs_port(addr: u8) -> Option<usize> {
        Port::ALL
            .iter()
            .position(|&p| PortRegister::PSCS.address(p) == addr)
    }

    fn load_window(&mut self, value: u64) {
        let base = Register::IND_DATA4.addr() as usize;
        let bytes = value.to_be_bytes();
        self.regs[base..base + 5].copy_from_slice(&bytes[3..]);
    }

    fn window(&self) -> u64 {
        let base = Register::IND_DATA4.addr() as usize;
        self.regs[base..base + 5]
            .iter()
            .fold(0, |v, &b| (v << 8) | u64::from(b))
    }

    fn indirect_request(&mut self, index: u8) {
        let ctrl0 = self.regs[Register::IND_ACCESS_CTRL0.addr() as usize];
        let selector = ctrl0 & 0xF;
        if ctrl0 & IND_READ == 0 {
            self.write_target = Some((selector, index));
            return;
        }
        self.write_target = None;
        let value = self.table(selector, index);
        if selector >> 2 == MIB_TABLE && self.mib_latency > 0 {
            self.mib_pending = self.mib_latency;
            self.mib_value = Some(value);
            self.load_window(value & !MIB_VALID);
        } else {
            self.mib_value = None;
            self.load_window(value);
        }
    }

    fn before_read(&mut self, addr: u8) {
        if let Some(d) = &mut self.delayed {
            if d.addr == addr {
                if d.reads == 0 {
                    self.regs[addr as usize] = d.value;
                    self.delayed = None;
                } else {
                    d.reads -= 1;
                }
            }
        }

        if addr == Register::IND_DATA4.addr() {
            if self.mib_pending > 0 {
                self.mib_pending -= 1;
            } else if let Some(v) = self.mib_value.take() {
                self.load_window(v);
            }
        }

        if let Some(i) = Self::pscs_port(addr) {
            let sim = &mut self.linkmd[i];
            match sim.remaining {
                Some(0) => {
                    sim.remaining = None;
                    let (pscs, count) = (sim.pscs, sim.count);
                    let r = &mut self.regs[addr as usize];
                    *r &= !(LINKMD_RESULT_BITS | PortPscs::VCT_EN.bits());
                    *r |= pscs;
                    // LINKMD follows PSCS in every port block
                    self.regs[addr as usize + 1] = count;
                }
                Some(n) => sim.remaining = Some(n - 1),
                None => (),
            }
        }
    }

    fn after_write(&mut self, addr: u8, data: u8) {
        if addr == Register::INT_STAT.addr() {
            self.regs[addr as usize] &= !data;
        } else if addr == Register::IND_ACCESS_CTRL1.addr() {
            self.indirect_request(data);
        } else if addr == Register::IND_DATA0.addr() {
            if let Some((selector, index)) = self.write_target.take() {
                let v = self.window();
                self.set_table(selector, index, v);
            }
        } else if let Some(i) = Self::pscs_port(addr) {
            let sim = &mut self.linkmd[i];
            if data & PortPscs::VCT_EN.bits() == 0 {
                sim.remaining = None;
            } else if sim.remaining.is_none() {
                sim.remaining = Some(sim.polls);
            }
        }
    }
}

impl RegisterBus for MockSwitch {
    fn write(&mut self, cmd: u8, addr: u8, data: u8) -> Result<(), BusError> {
        if cmd != SPI_CMD_WRITE {
            return Err(BusError::Nack);
        }
        self.transact(Transaction::Write { addr, data })?;
        // INT_STAT only clears the bits written as one
        if addr != Register::INT_STAT.addr() {
            self.regs[addr as usize] = data;
        }
        self.after_write(addr, data);
        Ok(())
    }

    fn read(&mut self, cmd: u8, addr: u8) -> Result<u8, BusError> {
        if cmd != SPI_CMD_READ {
            return Err(BusError::Nack);
        }
        // Fault before side effects, so a failed read changes nothing
        if self.fail_after.is_some_and(|n| self.transactions >= n) {
            return Err(BusError::Transfer);
        }
        self.before_read(addr);
        let data = self.regs[addr as usize];
        self.transact(Transaction::Read { addr, data })?;
        if addr == Register::INT_STAT.addr() {
            let late = core::mem::take(&mut self.late_interrupt);
            self.raise_interrupt(late);
        }
        Ok(data)
    }
}

/// Delay which returns immediately
pub struct NoDelay;

impl DelayMs<u8> for NoDelay {
    fn delay_ms(&mut self, _ms: u8) {}
}

/// Delay which only counts how it was called
#[derive(Debug, Default)]
pub struct CountingDelay {
    pub calls: usize,
    pub total_ms: u32,
}

impl DelayMs<u8> for CountingDelay {
    fn delay_ms(&mut self, ms: u8) {
        self.calls += 1;
        self.total_ms += u32::from(ms);
    }
}
