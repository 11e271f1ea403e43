// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-port MII register view.
//!
//! The KSZ8895 folds its PHY registers into the switch's 8-bit address
//! space.  This module presents each port as a standard-looking PHY with
//! 16-bit registers, mapped through a constant table onto pairs of switch
//! registers (stored big-endian, high byte at the lower address).

use crate::fields::{LinkMd, PortPscs, PortStat0, PortStat1};
use crate::registers::{PORT_STRIDE, PRIMARY_BLOCK, SECONDARY_BLOCK};
use crate::{
    Duplex, Ksz8895, Ksz8895Error, LinkStatus, Port, PortRegister,
    RegisterBus, Speed,
};
use static_assertions::const_assert;

/// Registers of the per-port PHY view
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum PhyRegister {
    BMCR = 0x00,
    BMSR = 0x01,
    PHYID1 = 0x02,
    PHYID2 = 0x03,
    ANAR = 0x04,
    ANLPAR = 0x05,
    LINKMD = 0x1D,
    PHYSCS = 0x1F,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Backing {
    /// Two adjacent switch registers at `block + port * 0x10 + offset`
    Pair { block: u8, offset: u8 },
    /// Read-only constant
    Fixed(u16),
    /// Assembled from `PORTn_PSCS` and `PORTn_LINKMD`
    LinkMd,
}

/// Backing of every PHY view register, in [`PhyRegister::index`] order
const PHY_MAP: [(PhyRegister, Backing); 8] = [
    (
        PhyRegister::BMCR,
        Backing::Pair {
            block: PRIMARY_BLOCK,
            offset: 0x00,
        },
    ),
    (
        PhyRegister::BMSR,
        Backing::Pair {
            block: PRIMARY_BLOCK,
            offset: 0x0E,
        },
    ),
    (PhyRegister::PHYID1, Backing::Fixed(crate::fields::PHYID1_DEFAULT)),
    (PhyRegister::PHYID2, Backing::Fixed(crate::fields::PHYID2_DEFAULT)),
    (
        PhyRegister::ANAR,
        Backing::Pair {
            block: PRIMARY_BLOCK,
            offset: 0x0C,
        },
    ),
    (
        PhyRegister::ANLPAR,
        Backing::Pair {
            block: PRIMARY_BLOCK,
            offset: 0x08,
        },
    ),
    (PhyRegister::LINKMD, Backing::LinkMd),
    (
        PhyRegister::PHYSCS,
        Backing::Pair {
            block: SECONDARY_BLOCK,
            offset: 0x00,
        },
    ),
];

impl PhyRegister {
    pub const ALL: [PhyRegister; 8] = [
        Self::BMCR,
        Self::BMSR,
        Self::PHYID1,
        Self::PHYID2,
        Self::ANAR,
        Self::ANLPAR,
        Self::LINKMD,
        Self::PHYSCS,
    ];

    pub const fn addr(self) -> u8 {
        self as u8
    }

    /// Looks up a PHY view register by its 5-bit address
    pub fn from_addr(addr: u8) -> Option<Self> {
        PHY_MAP.iter().map(|(r, _)| *r).find(|r| r.addr() == addr)
    }

    /// Position of this register in `PHY_MAP`
    const fn index(self) -> usize {
        match self {
            Self::BMCR => 0,
            Self::BMSR => 1,
            Self::PHYID1 => 2,
            Self::PHYID2 => 3,
            Self::ANAR => 4,
            Self::ANLPAR => 5,
            Self::LINKMD => 6,
            Self::PHYSCS => 7,
        }
    }

    fn backing(self) -> Backing {
        PHY_MAP[self.index()].1
    }

    /// Address of the high byte of this register for `port`, if it is
    /// backed by a register pair
    pub fn switch_address(self, port: Port) -> Option<u8> {
        match self.backing() {
            Backing::Pair { block, offset } => {
                Some(block + port.number() * PORT_STRIDE + offset)
            }
            _ => None,
        }
    }
}

const fn phy_map_is_ordered() -> bool {
    let mut i = 0;
    while i < PHY_MAP.len() {
        if PHY_MAP[i].0.index() != i {
            return false;
        }
        i += 1;
    }
    true
}
const_assert!(phy_map_is_ordered());

/// Builds the PHY view of `LINKMD` from the two switch registers behind it
fn linkmd_from_switch(pscs: u8, result: u8) -> u16 {
    let pscs = PortPscs::from_bits_retain(pscs);
    let mut v = LinkMd::from_bits_retain(
        u16::from((pscs & PortPscs::VCT_RESULT).bits()) << 8,
    );
    v.set(LinkMd::TEST_EN, pscs.contains(PortPscs::VCT_EN));
    v.set(LinkMd::SHORT, pscs.contains(PortPscs::VCT_10M_SHORT));
    v.bits()
        | u16::from((pscs & PortPscs::VCT_FAULT_COUNT_MSB).bits()) << 8
        | u16::from(result)
}

impl<B: RegisterBus> Ksz8895<B> {
    /// Reads a register of the PHY view of `port` (1-5).
    pub fn read_phy_register(
        &mut self,
        port: u8,
        addr: u8,
    ) -> Result<u16, Ksz8895Error> {
        let port = Port::try_from(port)?;
        let reg = PhyRegister::from_addr(addr)
            .ok_or(Ksz8895Error::InvalidRegister(addr))?;
        self.read_phy(port, reg)
    }

    /// Writes a register of the PHY view of `port` (1-5).
    pub fn write_phy_register(
        &mut self,
        port: u8,
        addr: u8,
        value: u16,
    ) -> Result<(), Ksz8895Error> {
        let port = Port::try_from(port)?;
        let reg = PhyRegister::from_addr(addr)
            .ok_or(Ksz8895Error::InvalidRegister(addr))?;
        self.write_phy(port, reg, value)
    }

    pub(crate) fn read_phy(
        &mut self,
        port: Port,
        reg: PhyRegister,
    ) -> Result<u16, Ksz8895Error> {
        match reg.backing() {
            Backing::Pair { block, offset } => {
                let base = block + port.number() * PORT_STRIDE + offset;
                let hi = self.read_direct(base)?;
                let lo = self.read_direct(base + 1)?;
                Ok(u16::from_be_bytes([hi, lo]))
            }
            Backing::Fixed(v) => Ok(v),
            Backing::LinkMd => {
                let pscs = self.read_port(PortRegister::PSCS, port)?;
                let result = self.read_port(PortRegister::LINKMD, port)?;
                Ok(linkmd_from_switch(pscs, result))
            }
        }
    }

    pub(crate) fn write_phy(
        &mut self,
        port: Port,
        reg: PhyRegister,
        value: u16,
    ) -> Result<(), Ksz8895Error> {
        match reg.backing() {
            Backing::Pair { block, offset } => {
                let base = block + port.number() * PORT_STRIDE + offset;
                let [hi, lo] = value.to_be_bytes();
                self.write_direct(base, hi)?;
                self.write_direct(base + 1, lo)
            }
            Backing::Fixed(_) => Err(Ksz8895Error::InvalidRegister(reg.addr())),
            Backing::LinkMd => {
                // Only the test enable bit is writable
                let start = LinkMd::from_bits_retain(value)
                    .contains(LinkMd::TEST_EN);
                self.modify_port(PortRegister::PSCS, port, |r| {
                    if start {
                        *r |= PortPscs::VCT_EN.bits();
                    } else {
                        *r &= !PortPscs::VCT_EN.bits();
                    }
                })
            }
        }
    }

    /// Returns whether `port` (1-5) reports link.
    pub fn get_link_state(&mut self, port: u8) -> Result<bool, Ksz8895Error> {
        self.link_good(Port::try_from(port)?)
    }

    /// Returns link, speed and duplex of `port` (1-5).
    pub fn link_status(
        &mut self,
        port: u8,
    ) -> Result<LinkStatus, Ksz8895Error> {
        self.port_link_status(Port::try_from(port)?)
    }

    pub(crate) fn link_good(
        &mut self,
        port: Port,
    ) -> Result<bool, Ksz8895Error> {
        let stat1 = self.read_port(PortRegister::STAT1, port)?;
        Ok(PortStat1::from_bits_retain(stat1).contains(PortStat1::LINK_GOOD))
    }

    pub(crate) fn port_link_status(
        &mut self,
        port: Port,
    ) -> Result<LinkStatus, Ksz8895Error> {
        let up = self.link_good(port)?;
        let stat0 = self.read_port(PortRegister::STAT0, port)?;
        let stat0 = PortStat0::from_bits_retain(stat0);
        Ok(LinkStatus {
            up,
            speed: if stat0.contains(PortStat0::OP_SPEED) {
                Speed::Mbps100
            } else {
                Speed::Mbps10
            },
            duplex: if stat0.contains(PortStat0::OP_DUPLEX) {
                Duplex::Full
            } else {
                Duplex::Half
            },
        })
    }
}
