// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Register dumps and the LinkMD cable test

use crate::fields::LinkMd;
use crate::{
    Ksz8895, Ksz8895Error, PhyRegister, Port, Register, RegisterBus, Trace,
};
use embedded_hal::blocking::delay::DelayMs;
use ringbuf::ringbuf_entry;

/// Iterator over every named switch register, in address order.  Stops
/// after yielding the first error.
pub struct SwitchDump<'a, B> {
    dev: &'a mut Ksz8895<B>,
    next: usize,
    failed: bool,
}

impl<B: RegisterBus> Iterator for SwitchDump<'_, B> {
    type Item = Result<(Register, u8), Ksz8895Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let r = *Register::ALL.get(self.next)?;
        self.next += 1;
        let v = self.dev.read(r);
        self.failed = v.is_err();
        Some(v.map(|v| (r, v)))
    }
}

/// Iterator over the PHY view of one port.  Stops after yielding the first
/// error.
pub struct PhyDump<'a, B> {
    dev: &'a mut Ksz8895<B>,
    port: Port,
    next: usize,
    failed: bool,
}

impl<B: RegisterBus> Iterator for PhyDump<'_, B> {
    type Item = Result<(PhyRegister, u16), Ksz8895Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let r = *PhyRegister::ALL.get(self.next)?;
        self.next += 1;
        let v = self.dev.read_phy(self.port, r);
        self.failed = v.is_err();
        Some(v.map(|v| (r, v)))
    }
}

/// Outcome reported by LinkMD
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CableStatus {
    Normal,
    Open,
    Short,
    /// The chip could not classify the cable
    Unknown,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CableDiagnosis {
    pub status: CableStatus,
    /// Short detected by the 10 Mbps detector (cables under 10 m)
    pub short_10m: bool,
    /// Distance to the fault, in chip units
    pub fault_count: u16,
}

impl CableDiagnosis {
    fn from_linkmd(v: u16) -> Self {
        let v = LinkMd::from_bits_retain(v);
        let status = match (v & LinkMd::RESULT).bits() >> LinkMd::RESULT_SHIFT
        {
            0 => CableStatus::Normal,
            1 => CableStatus::Open,
            2 => CableStatus::Short,
            _ => CableStatus::Unknown,
        };
        Self {
            status,
            short_10m: v.contains(LinkMd::SHORT),
            fault_count: (v & LinkMd::FAULT_COUNT).bits(),
        }
    }

    /// Approximate distance to an open or short, in decimeters
    /// (0.4 m per count beyond 26).
    pub fn distance_dm(&self) -> Option<u16> {
        match self.status {
            CableStatus::Open | CableStatus::Short => {
                Some(self.fault_count.saturating_sub(26) * 4)
            }
            _ => None,
        }
    }
}

impl<B: RegisterBus> Ksz8895<B> {
    /// Reads every named switch register.  Nothing is written.
    pub fn dump_switch_registers(&mut self) -> SwitchDump<'_, B> {
        SwitchDump {
            dev: self,
            next: 0,
            failed: false,
        }
    }

    /// Reads the PHY view of `port` (1-5).  Nothing is written.
    pub fn dump_phy_registers(
        &mut self,
        port: u8,
    ) -> Result<PhyDump<'_, B>, Ksz8895Error> {
        let port = Port::try_from(port)?;
        Ok(PhyDump {
            dev: self,
            port,
            next: 0,
            failed: false,
        })
    }

    /// Runs the LinkMD cable test on copper `port` (1-4).
    ///
    /// The test is started through the PHY view's `TEST_EN` bit, which the
    /// chip clears once the result is latched.  It is polled at most
    /// `linkmd_retries` times, `poll_interval_ms` apart.
    pub fn cable_test<D: DelayMs<u8>>(
        &mut self,
        port: u8,
        delay: &mut D,
    ) -> Result<CableDiagnosis, Ksz8895Error> {
        let p = Port::try_from(port)?;
        if !p.is_copper() {
            return Err(Ksz8895Error::InvalidPort(port));
        }

        self.write_phy(p, PhyRegister::LINKMD, LinkMd::TEST_EN.bits())?;
        for _ in 0..self.config.linkmd_retries {
            delay.delay_ms(self.config.poll_interval_ms);
            let v = self.read_phy(p, PhyRegister::LINKMD)?;
            if v & LinkMd::TEST_EN.bits() == 0 {
                ringbuf_entry!(
                    self.trace,
                    Trace::LinkMd { port: p, result: v }
                );
                return Ok(CableDiagnosis::from_linkmd(v));
            }
        }
        Err(Ksz8895Error::LinkMdTimeout)
    }
}
