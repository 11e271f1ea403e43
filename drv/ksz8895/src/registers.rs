// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Direct register space of the KSZ8895.
//!
//! Every register reachable with a single bus transaction has a name here.
//! Registers that repeat once per port are additionally described by
//! [`PortRegister`], which turns a (family, port) pair into an address.

use crate::Port;
use num_derive::FromPrimitive;
use static_assertions::const_assert_eq;

// Transcribed from the register map, one entry per named register
#[derive(Copy, Clone, Debug, Eq, PartialEq, FromPrimitive)]
#[allow(non_camel_case_types)]
#[repr(u8)]
pub enum Register {
    /// Chip ID 0 (family ID)
    CHIP_ID0 = 0x00,
    /// Chip ID 1 / Start Switch
    CHIP_ID1 = 0x01,
    /// Global Control 0
    GLOBAL_CTRL0 = 0x02,
    /// Global Control 1
    GLOBAL_CTRL1 = 0x03,
    /// Global Control 2
    GLOBAL_CTRL2 = 0x04,
    /// Global Control 3
    GLOBAL_CTRL3 = 0x05,
    /// Global Control 4
    GLOBAL_CTRL4 = 0x06,
    /// Global Control 5
    GLOBAL_CTRL5 = 0x07,
    /// Global Control 6
    GLOBAL_CTRL6 = 0x08,
    /// Global Control 7
    GLOBAL_CTRL7 = 0x09,
    /// Global Control 8
    GLOBAL_CTRL8 = 0x0A,
    /// Global Control 9
    GLOBAL_CTRL9 = 0x0B,
    /// Global Control 10
    GLOBAL_CTRL10 = 0x0C,
    /// Global Control 11
    GLOBAL_CTRL11 = 0x0D,
    /// Power Down Management Control 1
    PD_MGMT_CTRL1 = 0x0E,
    /// Power Down Management Control 2
    PD_MGMT_CTRL2 = 0x0F,
    // Port 1 control and status
    PORT1_CTRL0 = 0x10,
    PORT1_CTRL1 = 0x11,
    PORT1_CTRL2 = 0x12,
    PORT1_CTRL3 = 0x13,
    PORT1_CTRL4 = 0x14,
    PORT1_STAT0 = 0x19,
    PORT1_PSCS = 0x1A,
    PORT1_LINKMD = 0x1B,
    PORT1_CTRL5 = 0x1C,
    PORT1_CTRL6 = 0x1D,
    PORT1_STAT1 = 0x1E,
    PORT1_CTRL7_STAT2 = 0x1F,
    // Port 2 control and status
    PORT2_CTRL0 = 0x20,
    PORT2_CTRL1 = 0x21,
    PORT2_CTRL2 = 0x22,
    PORT2_CTRL3 = 0x23,
    PORT2_CTRL4 = 0x24,
    PORT2_STAT0 = 0x29,
    PORT2_PSCS = 0x2A,
    PORT2_LINKMD = 0x2B,
    PORT2_CTRL5 = 0x2C,
    PORT2_CTRL6 = 0x2D,
    PORT2_STAT1 = 0x2E,
    PORT2_CTRL7_STAT2 = 0x2F,
    // Port 3 control and status
    PORT3_CTRL0 = 0x30,
    PORT3_CTRL1 = 0x31,
    PORT3_CTRL2 = 0x32,
    PORT3_CTRL3 = 0x33,
    PORT3_CTRL4 = 0x34,
    PORT3_STAT0 = 0x39,
    PORT3_PSCS = 0x3A,
    PORT3_LINKMD = 0x3B,
    PORT3_CTRL5 = 0x3C,
    PORT3_CTRL6 = 0x3D,
    PORT3_STAT1 = 0x3E,
    PORT3_CTRL7_STAT2 = 0x3F,
    // Port 4 control and status
    PORT4_CTRL0 = 0x40,
    PORT4_CTRL1 = 0x41,
    PORT4_CTRL2 = 0x42,
    PORT4_CTRL3 = 0x43,
    PORT4_CTRL4 = 0x44,
    PORT4_STAT0 = 0x49,
    PORT4_PSCS = 0x4A,
    PORT4_LINKMD = 0x4B,
    PORT4_CTRL5 = 0x4C,
    PORT4_CTRL6 = 0x4D,
    PORT4_STAT1 = 0x4E,
    PORT4_CTRL7_STAT2 = 0x4F,
    // Port 5 control and status
    PORT5_CTRL0 = 0x50,
    PORT5_CTRL1 = 0x51,
    PORT5_CTRL2 = 0x52,
    PORT5_CTRL3 = 0x53,
    PORT5_CTRL4 = 0x54,
    /// RMII Management Control
    RMII_MGMT_CTRL = 0x57,
    // Port 5 control and status
    PORT5_STAT0 = 0x59,
    PORT5_PSCS = 0x5A,
    PORT5_LINKMD = 0x5B,
    PORT5_CTRL5 = 0x5C,
    PORT5_CTRL6 = 0x5D,
    PORT5_STAT1 = 0x5E,
    PORT5_CTRL7_STAT2 = 0x5F,
    /// MAC Address byte 0
    MAC_ADDR0 = 0x68,
    /// MAC Address byte 1
    MAC_ADDR1 = 0x69,
    /// MAC Address byte 2
    MAC_ADDR2 = 0x6A,
    /// MAC Address byte 3
    MAC_ADDR3 = 0x6B,
    /// MAC Address byte 4
    MAC_ADDR4 = 0x6C,
    /// MAC Address byte 5
    MAC_ADDR5 = 0x6D,
    /// Indirect Access Control 0 (direction, table select, index [9:8])
    IND_ACCESS_CTRL0 = 0x6E,
    /// Indirect Access Control 1 (index [7:0])
    IND_ACCESS_CTRL1 = 0x6F,
    /// Indirect Data 8 (bits 71..64)
    IND_DATA8 = 0x70,
    /// Indirect Data 7 (bits 63..56)
    IND_DATA7 = 0x71,
    /// Indirect Data 6 (bits 55..48)
    IND_DATA6 = 0x72,
    /// Indirect Data 5 (bits 47..40)
    IND_DATA5 = 0x73,
    /// Indirect Data 4 (bits 39..32)
    IND_DATA4 = 0x74,
    /// Indirect Data 3 (bits 31..24)
    IND_DATA3 = 0x75,
    /// Indirect Data 2 (bits 23..16)
    IND_DATA2 = 0x76,
    /// Indirect Data 1 (bits 15..8)
    IND_DATA1 = 0x77,
    /// Indirect Data 0 (bits 7..0)
    IND_DATA0 = 0x78,
    /// Interrupt Status (write 1 to clear)
    INT_STAT = 0x7C,
    /// Interrupt Mask
    INT_MASK = 0x7D,
    /// Global Control 12
    GLOBAL_CTRL12 = 0x80,
    /// Global Control 13
    GLOBAL_CTRL13 = 0x81,
    /// Global Control 14
    GLOBAL_CTRL14 = 0x82,
    /// Global Control 15
    GLOBAL_CTRL15 = 0x83,
    /// Global Control 16
    GLOBAL_CTRL16 = 0x84,
    /// Global Control 17
    GLOBAL_CTRL17 = 0x85,
    /// Global Control 18
    GLOBAL_CTRL18 = 0x86,
    /// Global Control 19
    GLOBAL_CTRL19 = 0x87,
    /// Identification (silicon revision)
    ID = 0x89,
    /// TOS Priority Control 0
    TOS_PRIO_CTRL0 = 0x90,
    /// TOS Priority Control 1
    TOS_PRIO_CTRL1 = 0x91,
    /// TOS Priority Control 2
    TOS_PRIO_CTRL2 = 0x92,
    /// TOS Priority Control 3
    TOS_PRIO_CTRL3 = 0x93,
    /// TOS Priority Control 4
    TOS_PRIO_CTRL4 = 0x94,
    /// TOS Priority Control 5
    TOS_PRIO_CTRL5 = 0x95,
    /// TOS Priority Control 6
    TOS_PRIO_CTRL6 = 0x96,
    /// TOS Priority Control 7
    TOS_PRIO_CTRL7 = 0x97,
    /// TOS Priority Control 8
    TOS_PRIO_CTRL8 = 0x98,
    /// TOS Priority Control 9
    TOS_PRIO_CTRL9 = 0x99,
    /// TOS Priority Control 10
    TOS_PRIO_CTRL10 = 0x9A,
    /// TOS Priority Control 11
    TOS_PRIO_CTRL11 = 0x9B,
    /// TOS Priority Control 12
    TOS_PRIO_CTRL12 = 0x9C,
    /// TOS Priority Control 13
    TOS_PRIO_CTRL13 = 0x9D,
    /// TOS Priority Control 14
    TOS_PRIO_CTRL14 = 0x9E,
    /// TOS Priority Control 15
    TOS_PRIO_CTRL15 = 0x9F,
    // Port 1 rate limiting and priority
    PORT1_CTRL8 = 0xB0,
    PORT1_CTRL9 = 0xB1,
    PORT1_CTRL10 = 0xB2,
    PORT1_CTRL11 = 0xB3,
    PORT1_CTRL12 = 0xB4,
    PORT1_CTRL13 = 0xB5,
    PORT1_RATE_LIMIT_CTRL = 0xB6,
    PORT1_PRIO0_IG_LIMIT_CTRL1 = 0xB7,
    PORT1_PRIO1_IG_LIMIT_CTRL2 = 0xB8,
    PORT1_PRIO2_IG_LIMIT_CTRL3 = 0xB9,
    PORT1_PRIO3_IG_LIMIT_CTRL4 = 0xBA,
    PORT1_QUEUE0_EG_LIMIT_CTRL1 = 0xBB,
    PORT1_QUEUE1_EG_LIMIT_CTRL2 = 0xBC,
    PORT1_QUEUE2_EG_LIMIT_CTRL3 = 0xBD,
    PORT1_QUEUE3_EG_LIMIT_CTRL4 = 0xBE,
    /// Test register 1
    TEST1 = 0xBF,
    // Port 2 rate limiting and priority
    PORT2_CTRL8 = 0xC0,
    PORT2_CTRL9 = 0xC1,
    PORT2_CTRL10 = 0xC2,
    PORT2_CTRL11 = 0xC3,
    PORT2_CTRL12 = 0xC4,
    PORT2_CTRL13 = 0xC5,
    PORT2_RATE_LIMIT_CTRL = 0xC6,
    PORT2_PRIO0_IG_LIMIT_CTRL1 = 0xC7,
    PORT2_PRIO1_IG_LIMIT_CTRL2 = 0xC8,
    PORT2_PRIO2_IG_LIMIT_CTRL3 = 0xC9,
    PORT2_PRIO3_IG_LIMIT_CTRL4 = 0xCA,
    PORT2_QUEUE0_EG_LIMIT_CTRL1 = 0xCB,
    PORT2_QUEUE1_EG_LIMIT_CTRL2 = 0xCC,
    PORT2_QUEUE2_EG_LIMIT_CTRL3 = 0xCD,
    PORT2_QUEUE3_EG_LIMIT_CTRL4 = 0xCE,
    // Port 3 rate limiting and priority
    PORT3_CTRL8 = 0xD0,
    PORT3_CTRL9 = 0xD1,
    PORT3_CTRL10 = 0xD2,
    PORT3_CTRL11 = 0xD3,
    PORT3_CTRL12 = 0xD4,
    PORT3_CTRL13 = 0xD5,
    PORT3_RATE_LIMIT_CTRL = 0xD6,
    PORT3_PRIO0_IG_LIMIT_CTRL1 = 0xD7,
    PORT3_PRIO1_IG_LIMIT_CTRL2 = 0xD8,
    PORT3_PRIO2_IG_LIMIT_CTRL3 = 0xD9,
    PORT3_PRIO3_IG_LIMIT_CTRL4 = 0xDA,
    PORT3_QUEUE0_EG_LIMIT_CTRL1 = 0xDB,
    PORT3_QUEUE1_EG_LIMIT_CTRL2 = 0xDC,
    PORT3_QUEUE2_EG_LIMIT_CTRL3 = 0xDD,
    PORT3_QUEUE3_EG_LIMIT_CTRL4 = 0xDE,
    /// Test register 2
    TEST2 = 0xDF,
    // Port 4 rate limiting and priority
    PORT4_CTRL8 = 0xE0,
    PORT4_CTRL9 = 0xE1,
    PORT4_CTRL10 = 0xE2,
    PORT4_CTRL11 = 0xE3,
    PORT4_CTRL12 = 0xE4,
    PORT4_CTRL13 = 0xE5,
    PORT4_RATE_LIMIT_CTRL = 0xE6,
    PORT4_PRIO0_IG_LIMIT_CTRL1 = 0xE7,
    PORT4_PRIO1_IG_LIMIT_CTRL2 = 0xE8,
    PORT4_PRIO2_IG_LIMIT_CTRL3 = 0xE9,
    PORT4_PRIO3_IG_LIMIT_CTRL4 = 0xEA,
    PORT4_QUEUE0_EG_LIMIT_CTRL1 = 0xEB,
    PORT4_QUEUE1_EG_LIMIT_CTRL2 = 0xEC,
    PORT4_QUEUE2_EG_LIMIT_CTRL3 = 0xED,
    PORT4_QUEUE3_EG_LIMIT_CTRL4 = 0xEE,
    /// Port 3 copper/fiber selection
    PORT3_COPPER_FIBER_CTRL = 0xEF,
    // Port 5 rate limiting and priority
    PORT5_CTRL8 = 0xF0,
    PORT5_CTRL9 = 0xF1,
    PORT5_CTRL10 = 0xF2,
    PORT5_CTRL11 = 0xF3,
    PORT5_CTRL12 = 0xF4,
    PORT5_CTRL13 = 0xF5,
    PORT5_RATE_LIMIT_CTRL = 0xF6,
    PORT5_PRIO0_IG_LIMIT_CTRL1 = 0xF7,
    PORT5_PRIO1_IG_LIMIT_CTRL2 = 0xF8,
    PORT5_PRIO2_IG_LIMIT_CTRL3 = 0xF9,
    PORT5_PRIO3_IG_LIMIT_CTRL4 = 0xFA,
    PORT5_QUEUE0_EG_LIMIT_CTRL1 = 0xFB,
    PORT5_QUEUE1_EG_LIMIT_CTRL2 = 0xFC,
    PORT5_QUEUE2_EG_LIMIT_CTRL3 = 0xFD,
    PORT5_QUEUE3_EG_LIMIT_CTRL4 = 0xFE,
    /// Test register 3
    TEST3 = 0xFF,
}

impl Register {
    /// Every named register, in address order.
    pub const ALL: [Register; 200] = [
        Self::CHIP_ID0,
        Self::CHIP_ID1,
        Self::GLOBAL_CTRL0,
        Self::GLOBAL_CTRL1,
        Self::GLOBAL_CTRL2,
        Self::GLOBAL_CTRL3,
        Self::GLOBAL_CTRL4,
        Self::GLOBAL_CTRL5,
        Self::GLOBAL_CTRL6,
        Self::GLOBAL_CTRL7,
        Self::GLOBAL_CTRL8,
        Self::GLOBAL_CTRL9,
        Self::GLOBAL_CTRL10,
        Self::GLOBAL_CTRL11,
        Self::PD_MGMT_CTRL1,
        Self::PD_MGMT_CTRL2,
        Self::PORT1_CTRL0,
        Self::PORT1_CTRL1,
        Self::PORT1_CTRL2,
        Self::PORT1_CTRL3,
        Self::PORT1_CTRL4,
        Self::PORT1_STAT0,
        Self::PORT1_PSCS,
        Self::PORT1_LINKMD,
        Self::PORT1_CTRL5,
        Self::PORT1_CTRL6,
        Self::PORT1_STAT1,
        Self::PORT1_CTRL7_STAT2,
        Self::PORT2_CTRL0,
        Self::PORT2_CTRL1,
        Self::PORT2_CTRL2,
        Self::PORT2_CTRL3,
        Self::PORT2_CTRL4,
        Self::PORT2_STAT0,
        Self::PORT2_PSCS,
        Self::PORT2_LINKMD,
        Self::PORT2_CTRL5,
        Self::PORT2_CTRL6,
        Self::PORT2_STAT1,
        Self::PORT2_CTRL7_STAT2,
        Self::PORT3_CTRL0,
        Self::PORT3_CTRL1,
        Self::PORT3_CTRL2,
        Self::PORT3_CTRL3,
        Self::PORT3_CTRL4,
        Self::PORT3_STAT0,
        Self::PORT3_PSCS,
        Self::PORT3_LINKMD,
        Self::PORT3_CTRL5,
        Self::PORT3_CTRL6,
        Self::PORT3_STAT1,
        Self::PORT3_CTRL7_STAT2,
        Self::PORT4_CTRL0,
        Self::PORT4_CTRL1,
        Self::PORT4_CTRL2,
        Self::PORT4_CTRL3,
        Self::PORT4_CTRL4,
        Self::PORT4_STAT0,
        Self::PORT4_PSCS,
        Self::PORT4_LINKMD,
        Self::PORT4_CTRL5,
        Self::PORT4_CTRL6,
        Self::PORT4_STAT1,
        Self::PORT4_CTRL7_STAT2,
        Self::PORT5_CTRL0,
        Self::PORT5_CTRL1,
        Self::PORT5_CTRL2,
        Self::PORT5_CTRL3,
        Self::PORT5_CTRL4,
        Self::RMII_MGMT_CTRL,
        Self::PORT5_STAT0,
        Self::PORT5_PSCS,
        Self::PORT5_LINKMD,
        Self::PORT5_CTRL5,
        Self::PORT5_CTRL6,
        Self::PORT5_STAT1,
        Self::PORT5_CTRL7_STAT2,
        Self::MAC_ADDR0,
        Self::MAC_ADDR1,
        Self::MAC_ADDR2,
        Self::MAC_ADDR3,
        Self::MAC_ADDR4,
        Self::MAC_ADDR5,
        Self::IND_ACCESS_CTRL0,
        Self::IND_ACCESS_CTRL1,
        Self::IND_DATA8,
        Self::IND_DATA7,
        Self::IND_DATA6,
        Self::IND_DATA5,
        Self::IND_DATA4,
        Self::IND_DATA3,
        Self::IND_DATA2,
        Self::IND_DATA1,
        Self::IND_DATA0,
        Self::INT_STAT,
        Self::INT_MASK,
        Self::GLOBAL_CTRL12,
        Self::GLOBAL_CTRL13,
        Self::GLOBAL_CTRL14,
        Self::GLOBAL_CTRL15,
        Self::GLOBAL_CTRL16,
        Self::GLOBAL_CTRL17,
        Self::GLOBAL_CTRL18,
        Self::GLOBAL_CTRL19,
        Self::ID,
        Self::TOS_PRIO_CTRL0,
        Self::TOS_PRIO_CTRL1,
        Self::TOS_PRIO_CTRL2,
        Self::TOS_PRIO_CTRL3,
        Self::TOS_PRIO_CTRL4,
        Self::TOS_PRIO_CTRL5,
        Self::TOS_PRIO_CTRL6,
        Self::TOS_PRIO_CTRL7,
        Self::TOS_PRIO_CTRL8,
        Self::TOS_PRIO_CTRL9,
        Self::TOS_PRIO_CTRL10,
        Self::TOS_PRIO_CTRL11,
        Self::TOS_PRIO_CTRL12,
        Self::TOS_PRIO_CTRL13,
        Self::TOS_PRIO_CTRL14,
        Self::TOS_PRIO_CTRL15,
        Self::PORT1_CTRL8,
        Self::PORT1_CTRL9,
        Self::PORT1_CTRL10,
        Self::PORT1_CTRL11,
        Self::PORT1_CTRL12,
        Self::PORT1_CTRL13,
        Self::PORT1_RATE_LIMIT_CTRL,
        Self::PORT1_PRIO0_IG_LIMIT_CTRL1,
        Self::PORT1_PRIO1_IG_LIMIT_CTRL2,
        Self::PORT1_PRIO2_IG_LIMIT_CTRL3,
        Self::PORT1_PRIO3_IG_LIMIT_CTRL4,
        Self::PORT1_QUEUE0_EG_LIMIT_CTRL1,
        Self::PORT1_QUEUE1_EG_LIMIT_CTRL2,
        Self::PORT1_QUEUE2_EG_LIMIT_CTRL3,
        Self::PORT1_QUEUE3_EG_LIMIT_CTRL4,
        Self::TEST1,
        Self::PORT2_CTRL8,
        Self::PORT2_CTRL9,
        Self::PORT2_CTRL10,
        Self::PORT2_CTRL11,
        Self::PORT2_CTRL12,
        Self::PORT2_CTRL13,
        Self::PORT2_RATE_LIMIT_CTRL,
        Self::PORT2_PRIO0_IG_LIMIT_CTRL1,
        Self::PORT2_PRIO1_IG_LIMIT_CTRL2,
        Self::PORT2_PRIO2_IG_LIMIT_CTRL3,
        Self::PORT2_PRIO3_IG_LIMIT_CTRL4,
        Self::PORT2_QUEUE0_EG_LIMIT_CTRL1,
        Self::PORT2_QUEUE1_EG_LIMIT_CTRL2,
        Self::PORT2_QUEUE2_EG_LIMIT_CTRL3,
        Self::PORT2_QUEUE3_EG_LIMIT_CTRL4,
        Self::PORT3_CTRL8,
        Self::PORT3_CTRL9,
        Self::PORT3_CTRL10,
        Self::PORT3_CTRL11,
        Self::PORT3_CTRL12,
        Self::PORT3_CTRL13,
        Self::PORT3_RATE_LIMIT_CTRL,
        Self::PORT3_PRIO0_IG_LIMIT_CTRL1,
        Self::PORT3_PRIO1_IG_LIMIT_CTRL2,
        Self::PORT3_PRIO2_IG_LIMIT_CTRL3,
        Self::PORT3_PRIO3_IG_LIMIT_CTRL4,
        Self::PORT3_QUEUE0_EG_LIMIT_CTRL1,
        Self::PORT3_QUEUE1_EG_LIMIT_CTRL2,
        Self::PORT3_QUEUE2_EG_LIMIT_CTRL3,
        Self::PORT3_QUEUE3_EG_LIMIT_CTRL4,
        Self::TEST2,
        Self::PORT4_CTRL8,
        Self::PORT4_CTRL9,
        Self::PORT4_CTRL10,
        Self::PORT4_CTRL11,
        Self::PORT4_CTRL12,
        Self::PORT4_CTRL13,
        Self::PORT4_RATE_LIMIT_CTRL,
        Self::PORT4_PRIO0_IG_LIMIT_CTRL1,
        Self::PORT4_PRIO1_IG_LIMIT_CTRL2,
        Self::PORT4_PRIO2_IG_LIMIT_CTRL3,
        Self::PORT4_PRIO3_IG_LIMIT_CTRL4,
        Self::PORT4_QUEUE0_EG_LIMIT_CTRL1,
        Self::PORT4_QUEUE1_EG_LIMIT_CTRL2,
        Self::PORT4_QUEUE2_EG_LIMIT_CTRL3,
        Self::PORT4_QUEUE3_EG_LIMIT_CTRL4,
        Self::PORT3_COPPER_FIBER_CTRL,
        Self::PORT5_CTRL8,
        Self::PORT5_CTRL9,
        Self::PORT5_CTRL10,
        Self::PORT5_CTRL11,
        Self::PORT5_CTRL12,
        Self::PORT5_CTRL13,
        Self::PORT5_RATE_LIMIT_CTRL,
        Self::PORT5_PRIO0_IG_LIMIT_CTRL1,
        Self::PORT5_PRIO1_IG_LIMIT_CTRL2,
        Self::PORT5_PRIO2_IG_LIMIT_CTRL3,
        Self::PORT5_PRIO3_IG_LIMIT_CTRL4,
        Self::PORT5_QUEUE0_EG_LIMIT_CTRL1,
        Self::PORT5_QUEUE1_EG_LIMIT_CTRL2,
        Self::PORT5_QUEUE2_EG_LIMIT_CTRL3,
        Self::PORT5_QUEUE3_EG_LIMIT_CTRL4,
        Self::TEST3,
    ];

    #[inline(always)]
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

impl From<Register> for u8 {
    fn from(r: Register) -> u8 {
        r as u8
    }
}

/// Registers which are repeated for every port, named by their offset from
/// the port's block.  Ports are laid out every 0x10 bytes in two blocks: the
/// primary control/status block based at 0x00, and the rate limiting block
/// based at 0xA0 (port 1 therefore lives at 0x10..0x1F and 0xB0..0xBE).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[allow(non_camel_case_types)]
#[repr(u8)]
pub enum PortRegister {
    CTRL0 = 0x00,
    CTRL1 = 0x01,
    CTRL2 = 0x02,
    CTRL3 = 0x03,
    CTRL4 = 0x04,
    STAT0 = 0x09,
    PSCS = 0x0A,
    LINKMD = 0x0B,
    CTRL5 = 0x0C,
    CTRL6 = 0x0D,
    STAT1 = 0x0E,
    CTRL7_STAT2 = 0x0F,
    CTRL8 = 0xA0,
    CTRL9 = 0xA1,
    CTRL10 = 0xA2,
    CTRL11 = 0xA3,
    CTRL12 = 0xA4,
    CTRL13 = 0xA5,
    RATE_LIMIT_CTRL = 0xA6,
    PRIO0_IG_LIMIT_CTRL1 = 0xA7,
    PRIO1_IG_LIMIT_CTRL2 = 0xA8,
    PRIO2_IG_LIMIT_CTRL3 = 0xA9,
    PRIO3_IG_LIMIT_CTRL4 = 0xAA,
    QUEUE0_EG_LIMIT_CTRL1 = 0xAB,
    QUEUE1_EG_LIMIT_CTRL2 = 0xAC,
    QUEUE2_EG_LIMIT_CTRL3 = 0xAD,
    QUEUE3_EG_LIMIT_CTRL4 = 0xAE,
}

/// Stride between two ports' register blocks
pub const PORT_STRIDE: u8 = 0x10;

/// Base of the primary (control and status) port block
pub const PRIMARY_BLOCK: u8 = 0x00;

/// Base of the secondary (rate limit and queue) port block
pub const SECONDARY_BLOCK: u8 = 0xA0;

const_assert_eq!(SECONDARY_BLOCK + 5 * PORT_STRIDE + 0x0E, 0xFE);

impl PortRegister {
    pub const ALL: [PortRegister; 27] = [
        Self::CTRL0,
        Self::CTRL1,
        Self::CTRL2,
        Self::CTRL3,
        Self::CTRL4,
        Self::STAT0,
        Self::PSCS,
        Self::LINKMD,
        Self::CTRL5,
        Self::CTRL6,
        Self::STAT1,
        Self::CTRL7_STAT2,
        Self::CTRL8,
        Self::CTRL9,
        Self::CTRL10,
        Self::CTRL11,
        Self::CTRL12,
        Self::CTRL13,
        Self::RATE_LIMIT_CTRL,
        Self::PRIO0_IG_LIMIT_CTRL1,
        Self::PRIO1_IG_LIMIT_CTRL2,
        Self::PRIO2_IG_LIMIT_CTRL3,
        Self::PRIO3_IG_LIMIT_CTRL4,
        Self::QUEUE0_EG_LIMIT_CTRL1,
        Self::QUEUE1_EG_LIMIT_CTRL2,
        Self::QUEUE2_EG_LIMIT_CTRL3,
        Self::QUEUE3_EG_LIMIT_CTRL4,
    ];

    /// Returns the physical address of this register for `port`.
    #[inline(always)]
    pub const fn address(self, port: Port) -> u8 {
        self as u8 + port.number() * PORT_STRIDE
    }

    /// Looks up the named register for `port`.
    pub fn register(self, port: Port) -> Option<Register> {
        num_traits::FromPrimitive::from_u8(self.address(port))
    }

    pub const fn is_secondary(self) -> bool {
        self as u8 >= SECONDARY_BLOCK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_sorted_and_exhaustive() {
        for pair in Register::ALL.windows(2) {
            assert!(pair[0].addr() < pair[1].addr(), "{pair:?}");
        }
        for r in Register::ALL {
            let back: Option<Register> =
                num_traits::FromPrimitive::from_u8(r.addr());
            assert_eq!(back, Some(r));
        }
    }

    #[test]
    fn holes_are_not_registers() {
        for addr in [0x15u8, 0x18, 0x55, 0x56, 0x58, 0x60, 0x7B, 0x88, 0xA0]
        {
            let r: Option<Register> = num_traits::FromPrimitive::from_u8(addr);
            assert!(r.is_none(), "{addr:#x} decoded as {r:?}");
        }
    }

    #[test]
    fn spot_check_addresses() {
        assert_eq!(PortRegister::CTRL0.address(Port::Three), 0x30);
        assert_eq!(PortRegister::RATE_LIMIT_CTRL.address(Port::Five), 0xF6);
        assert_eq!(PortRegister::STAT1.address(Port::One), 0x1E);
        assert_eq!(Register::IND_ACCESS_CTRL0.addr(), 0x6E);
        assert_eq!(Register::IND_DATA0.addr(), 0x78);
        assert_eq!(Register::INT_STAT.addr(), 0x7C);
        assert_eq!(Register::INT_MASK.addr(), 0x7D);
        assert_eq!(Register::ID.addr(), 0x89);
        assert_eq!(Register::TEST3.addr(), 0xFF);
    }

    #[test]
    fn port_families_match_named_registers() {
        let expected: [(PortRegister, [Register; 5]); 27] = [
            (
                PortRegister::CTRL0,
                [
                    Register::PORT1_CTRL0,
                    Register::PORT2_CTRL0,
                    Register::PORT3_CTRL0,
                    Register::PORT4_CTRL0,
                    Register::PORT5_CTRL0,
                ],
            ),
            (
                PortRegister::CTRL1,
                [
                    Register::PORT1_CTRL1,
                    Register::PORT2_CTRL1,
                    Register::PORT3_CTRL1,
                    Register::PORT4_CTRL1,
                    Register::PORT5_CTRL1,
                ],
            ),
            (
                PortRegister::CTRL2,
                [
                    Register::PORT1_CTRL2,
                    Register::PORT2_CTRL2,
                    Register::PORT3_CTRL2,
                    Register::PORT4_CTRL2,
                    Register::PORT5_CTRL2,
                ],
            ),
            (
                PortRegister::CTRL3,
                [
                    Register::PORT1_CTRL3,
                    Register::PORT2_CTRL3,
                    Register::PORT3_CTRL3,
                    Register::PORT4_CTRL3,
                    Register::PORT5_CTRL3,
                ],
            ),
            (
                PortRegister::CTRL4,
                [
                    Register::PORT1_CTRL4,
                    Register::PORT2_CTRL4,
                    Register::PORT3_CTRL4,
                    Register::PORT4_CTRL4,
                    Register::PORT5_CTRL4,
                ],
            ),
            (
                PortRegister::STAT0,
                [
                    Register::PORT1_STAT0,
                    Register::PORT2_STAT0,
                    Register::PORT3_STAT0,
                    Register::PORT4_STAT0,
                    Register::PORT5_STAT0,
                ],
            ),
            (
                PortRegister::PSCS,
                [
                    Register::PORT1_PSCS,
                    Register::PORT2_PSCS,
                    Register::PORT3_PSCS,
                    Register::PORT4_PSCS,
                    Register::PORT5_PSCS,
                ],
            ),
            (
                PortRegister::LINKMD,
                [
                    Register::PORT1_LINKMD,
                    Register::PORT2_LINKMD,
                    Register::PORT3_LINKMD,
                    Register::PORT4_LINKMD,
                    Register::PORT5_LINKMD,
                ],
            ),
            (
                PortRegister::CTRL5,
                [
                    Register::PORT1_CTRL5,
                    Register::PORT2_CTRL5,
                    Register::PORT3_CTRL5,
                    Register::PORT4_CTRL5,
                    Register::PORT5_CTRL5,
                ],
            ),
            (
                PortRegister::CTRL6,
                [
                    Register::PORT1_CTRL6,
                    Register::PORT2_CTRL6,
                    Register::PORT3_CTRL6,
                    Register::PORT4_CTRL6,
                    Register::PORT5_CTRL6,
                ],
            ),
            (
                PortRegister::STAT1,
                [
                    Register::PORT1_STAT1,
                    Register::PORT2_STAT1,
                    Register::PORT3_STAT1,
                    Register::PORT4_STAT1,
                    Register::PORT5_STAT1,
                ],
            ),
            (
                PortRegister::CTRL7_STAT2,
                [
                    Register::PORT1_CTRL7_STAT2,
                    Register::PORT2_CTRL7_STAT2,
                    Register::PORT3_CTRL7_STAT2,
                    Register::PORT4_CTRL7_STAT2,
                    Register::PORT5_CTRL7_STAT2,
                ],
            ),
            (
                PortRegister::CTRL8,
                [
                    Register::PORT1_CTRL8,
                    Register::PORT2_CTRL8,
                    Register::PORT3_CTRL8,
                    Register::PORT4_CTRL8,
                    Register::PORT5_CTRL8,
                ],
            ),
            (
                PortRegister::CTRL9,
                [
                    Register::PORT1_CTRL9,
                    Register::PORT2_CTRL9,
                    Register::PORT3_CTRL9,
                    Register::PORT4_CTRL9,
                    Register::PORT5_CTRL9,
                ],
            ),
            (
                PortRegister::CTRL10,
                [
                    Register::PORT1_CTRL10,
                    Register::PORT2_CTRL10,
                    Register::PORT3_CTRL10,
                    Register::PORT4_CTRL10,
                    Register::PORT5_CTRL10,
                ],
            ),
            (
                PortRegister::CTRL11,
                [
                    Register::PORT1_CTRL11,
                    Register::PORT2_CTRL11,
                    Register::PORT3_CTRL11,
                    Register::PORT4_CTRL11,
                    Register::PORT5_CTRL11,
                ],
            ),
            (
                PortRegister::CTRL12,
                [
                    Register::PORT1_CTRL12,
                    Register::PORT2_CTRL12,
                    Register::PORT3_CTRL12,
                    Register::PORT4_CTRL12,
                    Register::PORT5_CTRL12,
                ],
            ),
            (
                PortRegister::CTRL13,
                [
                    Register::PORT1_CTRL13,
                    Register::PORT2_CTRL13,
                    Register::PORT3_CTRL13,
                    Register::PORT4_CTRL13,
                    Register::PORT5_CTRL13,
                ],
            ),
            (
                PortRegister::RATE_LIMIT_CTRL,
                [
                    Register::PORT1_RATE_LIMIT_CTRL,
                    Register::PORT2_RATE_LIMIT_CTRL,
                    Register::PORT3_RATE_LIMIT_CTRL,
                    Register::PORT4_RATE_LIMIT_CTRL,
                    Register::PORT5_RATE_LIMIT_CTRL,
                ],
            ),
            (
                PortRegister::PRIO0_IG_LIMIT_CTRL1,
                [
                    Register::PORT1_PRIO0_IG_LIMIT_CTRL1,
                    Register::PORT2_PRIO0_IG_LIMIT_CTRL1,
                    Register::PORT3_PRIO0_IG_LIMIT_CTRL1,
                    Register::PORT4_PRIO0_IG_LIMIT_CTRL1,
                    Register::PORT5_PRIO0_IG_LIMIT_CTRL1,
                ],
            ),
            (
                PortRegister::PRIO1_IG_LIMIT_CTRL2,
                [
                    Register::PORT1_PRIO1_IG_LIMIT_CTRL2,
                    Register::PORT2_PRIO1_IG_LIMIT_CTRL2,
                    Register::PORT3_PRIO1_IG_LIMIT_CTRL2,
                    Register::PORT4_PRIO1_IG_LIMIT_CTRL2,
                    Register::PORT5_PRIO1_IG_LIMIT_CTRL2,
                ],
            ),
            (
                PortRegister::PRIO2_IG_LIMIT_CTRL3,
                [
                    Register::PORT1_PRIO2_IG_LIMIT_CTRL3,
                    Register::PORT2_PRIO2_IG_LIMIT_CTRL3,
                    Register::PORT3_PRIO2_IG_LIMIT_CTRL3,
                    Register::PORT4_PRIO2_IG_LIMIT_CTRL3,
                    Register::PORT5_PRIO2_IG_LIMIT_CTRL3,
                ],
            ),
            (
                PortRegister::PRIO3_IG_LIMIT_CTRL4,
                [
                    Register::PORT1_PRIO3_IG_LIMIT_CTRL4,
                    Register::PORT2_PRIO3_IG_LIMIT_CTRL4,
                    Register::PORT3_PRIO3_IG_LIMIT_CTRL4,
                    Register::PORT4_PRIO3_IG_LIMIT_CTRL4,
                    Register::PORT5_PRIO3_IG_LIMIT_CTRL4,
                ],
            ),
            (
                PortRegister::QUEUE0_EG_LIMIT_CTRL1,
                [
                    Register::PORT1_QUEUE0_EG_LIMIT_CTRL1,
                    Register::PORT2_QUEUE0_EG_LIMIT_CTRL1,
                    Register::PORT3_QUEUE0_EG_LIMIT_CTRL1,
                    Register::PORT4_QUEUE0_EG_LIMIT_CTRL1,
                    Register::PORT5_QUEUE0_EG_LIMIT_CTRL1,
                ],
            ),
            (
                PortRegister::QUEUE1_EG_LIMIT_CTRL2,
                [
                    Register::PORT1_QUEUE1_EG_LIMIT_CTRL2,
                    Register::PORT2_QUEUE1_EG_LIMIT_CTRL2,
                    Register::PORT3_QUEUE1_EG_LIMIT_CTRL2,
                    Register::PORT4_QUEUE1_EG_LIMIT_CTRL2,
                    Register::PORT5_QUEUE1_EG_LIMIT_CTRL2,
                ],
            ),
            (
                PortRegister::QUEUE2_EG_LIMIT_CTRL3,
                [
                    Register::PORT1_QUEUE2_EG_LIMIT_CTRL3,
                    Register::PORT2_QUEUE2_EG_LIMIT_CTRL3,
                    Register::PORT3_QUEUE2_EG_LIMIT_CTRL3,
                    Register::PORT4_QUEUE2_EG_LIMIT_CTRL3,
                    Register::PORT5_QUEUE2_EG_LIMIT_CTRL3,
                ],
            ),
            (
                PortRegister::QUEUE3_EG_LIMIT_CTRL4,
                [
                    Register::PORT1_QUEUE3_EG_LIMIT_CTRL4,
                    Register::PORT2_QUEUE3_EG_LIMIT_CTRL4,
                    Register::PORT3_QUEUE3_EG_LIMIT_CTRL4,
                    Register::PORT4_QUEUE3_EG_LIMIT_CTRL4,
                    Register::PORT5_QUEUE3_EG_LIMIT_CTRL4,
                ],
            ),
        ];

        assert_eq!(expected.len(), PortRegister::ALL.len());
        for (family, regs) in expected {
            assert!(PortRegister::ALL.contains(&family));
            for (port, reg) in Port::ALL.into_iter().zip(regs) {
                assert_eq!(family.address(port), reg.addr(), "{family:?}");
                assert_eq!(family.register(port), Some(reg));
            }
        }
    }

    #[test]
    fn secondary_families() {
        assert!(!PortRegister::CTRL7_STAT2.is_secondary());
        assert!(PortRegister::CTRL8.is_secondary());
        assert!(PortRegister::QUEUE3_EG_LIMIT_CTRL4.is_secondary());
    }
}
