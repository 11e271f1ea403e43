// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bit fields within the PHY view registers (16-bit) and the switch
//! registers (8-bit).
//!
//! Multi-bit fields are exposed as a single mask; the enumerated values a
//! field can take are associated constants on the same type.

use bitflags::bitflags;

////////////////////////////////////////////////////////////////////////////////
// PHY view

bitflags! {
    /// MII Control register
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct Bmcr: u16 {
        const RESET = 0x8000;
        const LOOPBACK = 0x4000;
        const FORCE_100 = 0x2000;
        const AN_EN = 0x1000;
        const POWER_DOWN = 0x0800;
        const ISOLATE = 0x0400;
        const RESTART_AN = 0x0200;
        const FORCE_FULL_DUPLEX = 0x0100;
        const COL_TEST = 0x0080;
        const HP_MDIX = 0x0020;
        const FORCE_MDI = 0x0010;
        const AUTO_MDIX_DIS = 0x0008;
        const FAR_END_FAULT_DIS = 0x0004;
        const TRANSMIT_DIS = 0x0002;
        const LED_DIS = 0x0001;
    }
}

bitflags! {
    /// MII Status register
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct Bmsr: u16 {
        const BASE100_T4 = 0x8000;
        const BASE100_TX_FD = 0x4000;
        const BASE100_TX_HD = 0x2000;
        const BASE10_T_FD = 0x1000;
        const BASE10_T_HD = 0x0800;
        const PREAMBLE_SUPPR = 0x0040;
        const AN_COMPLETE = 0x0020;
        const FAR_END_FAULT = 0x0010;
        const AN_CAPABLE = 0x0008;
        const LINK_STATUS = 0x0004;
        const JABBER_TEST = 0x0002;
        const EXTENDED_CAPABLE = 0x0001;
    }
}

/// PHYID High register
pub const PHYID1_DEFAULT: u16 = 0x0022;

/// PHYID Low register
pub const PHYID2_DEFAULT: u16 = 0x1450;

bitflags! {
    /// Auto-negotiation Advertisement Ability register
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct Anar: u16 {
        const NEXT_PAGE = 0x8000;
        const REMOTE_FAULT = 0x2000;
        const PAUSE = 0x0400;
        const BASE100_TX_FD = 0x0100;
        const BASE100_TX_HD = 0x0080;
        const BASE10_T_FD = 0x0040;
        const BASE10_T_HD = 0x0020;
        const SELECTOR = 0x001F;
    }
}

impl Anar {
    /// IEEE 802.3 selector
    pub const SELECTOR_DEFAULT: u16 = 0x0001;
}

bitflags! {
    /// Auto-negotiation Link Partner Ability register
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct Anlpar: u16 {
        const NEXT_PAGE = 0x8000;
        const LP_ACK = 0x4000;
        const REMOTE_FAULT = 0x2000;
        const PAUSE = 0x0400;
        const BASE100_TX_FD = 0x0100;
        const BASE100_TX_HD = 0x0080;
        const BASE10_T_FD = 0x0040;
        const BASE10_T_HD = 0x0020;
    }
}

bitflags! {
    /// LinkMD Control/Status register
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct LinkMd: u16 {
        const TEST_EN = 0x8000;
        const RESULT = 0x6000;
        const SHORT = 0x1000;
        const FAULT_COUNT = 0x01FF;
    }
}

impl LinkMd {
    pub const RESULT_SHIFT: u32 = 13;
}

bitflags! {
    /// PHY Special Control/Status register
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct Physcs: u16 {
        const OP_MODE = 0x0700;
        const POLRVS = 0x0020;
        const MDIX_STATUS = 0x0010;
        const FORCE_LINK = 0x0008;
        const PWRSAVE = 0x0004;
        const REMOTE_LOOPBACK = 0x0002;
    }
}

impl Physcs {
    pub const OP_MODE_AN: u16 = 0x0100;
    pub const OP_MODE_10BT_HD: u16 = 0x0200;
    pub const OP_MODE_100BTX_HD: u16 = 0x0300;
    pub const OP_MODE_10BT_FD: u16 = 0x0500;
    pub const OP_MODE_100BTX_FD: u16 = 0x0600;
    pub const OP_MODE_ISOLATE: u16 = 0x0700;
}

////////////////////////////////////////////////////////////////////////////////
// Switch registers

bitflags! {
    /// Chip ID0 register
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct ChipId0: u8 {
        const FAMILY_ID = 0xFF;
    }
}

impl ChipId0 {
    pub const FAMILY_ID_DEFAULT: u8 = 0x95;
}

bitflags! {
    /// Chip ID1 / Start Switch register
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct ChipId1: u8 {
        const CHIP_ID = 0xF0;
        const REVISION_ID = 0x0E;
        const START_SWITCH = 0x01;
    }
}

impl ChipId1 {
    pub const CHIP_ID_MQX_FQX_MLX: u8 = 0x40;
    pub const CHIP_ID_RQX: u8 = 0x60;
}

bitflags! {
    /// Global Control 10 register
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct GlobalCtrl10: u8 {
        const CLK_MODE = 0x40;
        const CPU_CLK_SEL = 0x30;
        const RESTORE_PREAMBLE_EN = 0x04;
        const TAIL_TAG_EN = 0x02;
        const PASS_FLOW_CTRL_PKT = 0x01;
    }
}

bitflags! {
    /// Port N Control 0 register
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct PortCtrl0: u8 {
        const BCAST_STORM_PROTECT_EN = 0x80;
        const DIFFSERV_PRIO_CLASS_EN = 0x40;
        const PRIO_802_1P_CLASS_EN = 0x20;
        const PORT_PRIO_CLASS_EN = 0x18;
        const TAG_INSERTION = 0x04;
        const TAG_REMOVAL = 0x02;
        const TWO_QUEUE_SPLIT_EN = 0x01;
    }
}

bitflags! {
    /// Port N Control 1 register
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct PortCtrl1: u8 {
        const SNIFFER_PORT = 0x80;
        const RECEIVE_SNIFF = 0x40;
        const TRANSMIT_SNIFF = 0x20;
        const PORT_VLAN_MEMBERSHIP = 0x1F;
    }
}

bitflags! {
    /// Port N Control 2 register
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct PortCtrl2: u8 {
        const USER_PRIO_CEILING = 0x80;
        const INGRESS_VLAN_FILT = 0x40;
        const DISCARD_NON_PVID_PKT = 0x20;
        const FORCE_FLOW_CTRL = 0x10;
        const BACK_PRESSURE_EN = 0x08;
        const TRANSMIT_EN = 0x04;
        const RECEIVE_EN = 0x02;
        const LEARNING_DIS = 0x01;
    }
}

bitflags! {
    /// Port N Control 3 register
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct PortCtrl3: u8 {
        const DEFAULT_USER_PRIO = 0xE0;
        const DEFAULT_CFI = 0x10;
        const DEFAULT_VID_MSB = 0x0F;
    }
}

bitflags! {
    /// Port N Control 4 register
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct PortCtrl4: u8 {
        const DEFAULT_VID_LSB = 0xFF;
    }
}

bitflags! {
    /// RMII Management Control register
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct RmiiMgmtCtrl: u8 {
        const SW5_CLK_OUT_DIS = 0x08;
        const P5_CLK_OUT_DIS = 0x04;
    }
}

bitflags! {
    /// Port N Status 0 register
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct PortStat0: u8 {
        const HP_MDIX = 0x80;
        const POLRVS = 0x20;
        const TX_FLOW_CTRL_EN = 0x10;
        const RX_FLOW_CTRL_EN = 0x08;
        const OP_SPEED = 0x04;
        const OP_DUPLEX = 0x02;
    }
}

bitflags! {
    /// Port N PHY Special Control/Status register
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct PortPscs: u8 {
        const VCT_10M_SHORT = 0x80;
        const VCT_RESULT = 0x60;
        const VCT_EN = 0x10;
        const FORCE_LNK = 0x08;
        const PWRSAVE = 0x04;
        const REMOTE_LOOPBACK = 0x02;
        const VCT_FAULT_COUNT_MSB = 0x01;
    }
}

bitflags! {
    /// Port N LinkMD Result register
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct PortLinkMd: u8 {
        const VCT_FAULT_COUNT_LSB = 0xFF;
    }
}

bitflags! {
    /// Port N Status 1 register
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct PortStat1: u8 {
        const MDIX_STATUS = 0x80;
        const AN_DONE = 0x40;
        const LINK_GOOD = 0x20;
        const LP_FLOW_CTRL_CAPABLE = 0x10;
        const LP_100BTX_FD_CAPABLE = 0x08;
        const LP_100BTX_HD_CAPABLE = 0x04;
        const LP_10BT_FD_CAPABLE = 0x02;
        const LP_10BT_HD_CAPABLE = 0x01;
    }
}

bitflags! {
    /// Port N Control 7 / Status 2 register
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct PortCtrl7Stat2: u8 {
        const PHY_LOOPBACK = 0x80;
        const PHY_ISOLATE = 0x20;
        const SOFT_RESET = 0x10;
        const FORCE_LINK = 0x08;
        const OP_MODE = 0x07;
    }
}

impl PortCtrl7Stat2 {
    pub const OP_MODE_AN: u8 = 0x01;
    pub const OP_MODE_10BT_HD: u8 = 0x02;
    pub const OP_MODE_100BTX_HD: u8 = 0x03;
    pub const OP_MODE_10BT_FD: u8 = 0x05;
    pub const OP_MODE_100BTX_FD: u8 = 0x06;
}

bitflags! {
    /// Identification register
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct Id: u8 {
        const REVISION_ID = 0xF0;
    }
}

impl Id {
    pub const REVISION_ID_MQX_RQX_FQX_REV_A2: u8 = 0x40;
    pub const REVISION_ID_ML_REV_B2: u8 = 0x40;
    pub const REVISION_ID_MQX_RQX_FQX_REV_A3: u8 = 0x50;
    pub const REVISION_ID_ML_REV_B3: u8 = 0x50;
    pub const REVISION_ID_MQX_RQX_FQX_REV_A4: u8 = 0x60;
}

bitflags! {
    /// Indirect Access Control 0 register
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct IndAccessCtrl0: u8 {
        /// Set for a read, clear for a write
        const READ = 0x10;
        const TABLE_SELECT = 0x0C;
        const INDEX_HIGH = 0x03;
    }
}

impl IndAccessCtrl0 {
    /// Table select and index bits together form the 4-bit selector
    pub const SELECTOR: u8 = 0x0F;
}

bitflags! {
    /// Interrupt Status and Interrupt Mask registers; bit `n - 1` belongs
    /// to port `n`
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct PortInterrupt: u8 {
        const PORT1 = 0x01;
        const PORT2 = 0x02;
        const PORT3 = 0x04;
        const PORT4 = 0x08;
        const PORT5 = 0x10;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phy_masks() {
        assert_eq!(Bmcr::AN_EN.bits(), 0x1000);
        assert_eq!(Bmcr::all().bits(), 0xFFBF);
        assert_eq!(Bmsr::LINK_STATUS.bits(), 0x0004);
        assert_eq!(Anar::SELECTOR.bits(), 0x001F);
        assert_eq!(LinkMd::RESULT.bits() >> LinkMd::RESULT_SHIFT, 0b11);
        assert_eq!(LinkMd::FAULT_COUNT.bits(), 0x01FF);
        assert_eq!(Physcs::OP_MODE.bits(), Physcs::OP_MODE_ISOLATE);
    }

    #[test]
    fn switch_masks() {
        assert_eq!(ChipId0::FAMILY_ID_DEFAULT, 0x95);
        assert_eq!(GlobalCtrl10::TAIL_TAG_EN.bits(), 0x02);
        assert_eq!(PortStat1::LINK_GOOD.bits(), 0x20);
        assert_eq!(PortStat0::OP_SPEED.bits(), 0x04);
        assert_eq!(PortStat0::OP_DUPLEX.bits(), 0x02);
        assert_eq!(PortPscs::VCT_EN.bits(), 0x10);
        assert_eq!(PortPscs::VCT_RESULT.bits(), 0x60);
        assert_eq!(PortCtrl2::all().bits(), 0xFF);
        assert_eq!(PortInterrupt::all().bits(), 0x1F);
        assert_eq!(IndAccessCtrl0::SELECTOR, 0x0F);
    }

    #[test]
    fn pscs_lines_up_with_linkmd_high_byte() {
        // The PHY view LINKMD register is built from PSCS and LINKMD; these
        // fields keep their position when shifted into the high byte.
        assert_eq!(
            u16::from(PortPscs::VCT_RESULT.bits()) << 8,
            LinkMd::RESULT.bits()
        );
        assert_eq!(
            u16::from(PortPscs::VCT_FAULT_COUNT_MSB.bits()) << 8
                | u16::from(PortLinkMd::VCT_FAULT_COUNT_LSB.bits()),
            LinkMd::FAULT_COUNT.bits()
        );
    }
}
