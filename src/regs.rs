//! Register and bit definitions for the DP83822/DP83825/DP83826 family
//!
//! The first block covers the IEEE 802.3 Clause 22 standard registers shared
//! by every MDIO-managed PHY; the rest are the TI vendor registers this
//! driver touches. Addresses and bit offsets are fixed by the datasheet and
//! must not change.

// =============================================================================
// Standard registers (IEEE 802.3 Clause 22)
// =============================================================================

/// Standard PHY register addresses
pub mod phy_reg {
    /// Basic Mode Control Register
    pub const BMCR: u8 = 0x00;
    /// Basic Mode Status Register
    pub const BMSR: u8 = 0x01;
    /// PHY Identifier 1
    pub const PHYIDR1: u8 = 0x02;
    /// PHY Identifier 2
    pub const PHYIDR2: u8 = 0x03;
    /// Auto-Negotiation Advertisement Register
    pub const ANAR: u8 = 0x04;
    /// Auto-Negotiation Link Partner Ability Register
    pub const ANLPAR: u8 = 0x05;
    /// MMD Access Control Register (REGCR)
    pub const REGCR: u8 = 0x0D;
    /// MMD Access Address/Data Register (ADDAR)
    pub const ADDAR: u8 = 0x0E;
}

/// BMCR (Basic Mode Control Register) bits
pub mod bmcr {
    /// Soft reset
    pub const RESET: u16 = 1 << 15;
    /// Loopback mode
    pub const LOOPBACK: u16 = 1 << 14;
    /// Speed select (100 Mbps if set)
    pub const SPEED_100: u16 = 1 << 13;
    /// Auto-negotiation enable
    pub const AN_ENABLE: u16 = 1 << 12;
    /// Power down
    pub const POWER_DOWN: u16 = 1 << 11;
    /// Isolate
    pub const ISOLATE: u16 = 1 << 10;
    /// Restart auto-negotiation
    pub const AN_RESTART: u16 = 1 << 9;
    /// Duplex mode (full duplex if set)
    pub const DUPLEX_FULL: u16 = 1 << 8;
}

/// BMSR (Basic Mode Status Register) bits
pub mod bmsr {
    /// 100BASE-TX full duplex capable
    pub const TX_FD_CAPABLE: u16 = 1 << 14;
    /// 100BASE-TX half duplex capable
    pub const TX_HD_CAPABLE: u16 = 1 << 13;
    /// 10BASE-T full duplex capable
    pub const T10_FD_CAPABLE: u16 = 1 << 12;
    /// 10BASE-T half duplex capable
    pub const T10_HD_CAPABLE: u16 = 1 << 11;
    /// Auto-negotiation complete
    pub const AN_COMPLETE: u16 = 1 << 5;
    /// Remote fault
    pub const REMOTE_FAULT: u16 = 1 << 4;
    /// Auto-negotiation ability
    pub const AN_ABILITY: u16 = 1 << 3;
    /// Link status
    pub const LINK_STATUS: u16 = 1 << 2;
    /// Jabber detect
    pub const JABBER_DETECT: u16 = 1 << 1;
    /// Extended capabilities
    pub const EXT_CAPABLE: u16 = 1 << 0;
}

/// ANAR (Auto-Negotiation Advertisement Register) bits
pub mod anar {
    /// Pause capable
    pub const PAUSE: u16 = 1 << 10;
    /// 100BASE-TX full duplex
    pub const TX_FD: u16 = 1 << 8;
    /// 100BASE-TX half duplex
    pub const TX_HD: u16 = 1 << 7;
    /// 10BASE-T full duplex
    pub const T10_FD: u16 = 1 << 6;
    /// 10BASE-T half duplex
    pub const T10_HD: u16 = 1 << 5;
    /// IEEE 802.3 selector value
    pub const SELECTOR_IEEE802_3: u16 = 0x0001;
}

// =============================================================================
// Vendor registers (basic address space)
// =============================================================================

/// TI vendor register addresses in the basic (Clause 22) space
pub mod vendor_reg {
    /// PHY Status Register
    pub const PHYSTS: u8 = 0x10;
    /// PHY Specific Control Register (interrupt pin control)
    pub const PHYSCR: u8 = 0x11;
    /// MII Interrupt Status Register 1
    pub const MISR1: u8 = 0x12;
    /// MII Interrupt Status Register 2
    pub const MISR2: u8 = 0x13;
    /// BIST Control Register (loopback mode selection)
    pub const BISCR: u8 = 0x16;
    /// Receive Clock Select Register (RMII/elastic buffer)
    pub const RCSR: u8 = 0x17;
    /// PHY Control Register (MDI/X control)
    pub const PHYCR: u8 = 0x19;
}

/// PHYSTS (PHY Status Register) bits
pub mod physts {
    /// Full duplex link
    pub const DUPLEX: u16 = 1 << 2;
    /// 10 Mb/s link (100 Mb/s when clear)
    pub const SPEED_10: u16 = 1 << 1;
    /// Link established
    pub const LINK: u16 = 1 << 0;
}

/// PHYSCR (PHY Specific Control Register) bits
pub mod physcr {
    /// Interrupt enable
    pub const INT_EN: u16 = 1 << 1;
    /// Interrupt output enable (drive the INT pin)
    pub const INT_OE: u16 = 1 << 0;
}

/// MISR1 (MII Interrupt Status Register 1) enable bits
///
/// The high byte of this register latches the corresponding interrupt
/// status; reading the register clears the latched bits.
pub mod misr1 {
    /// Link quality interrupt enable
    pub const LINK_QUAL_INT_EN: u16 = 1 << 7;
    /// Energy detect interrupt enable
    pub const ENERGY_DET_INT_EN: u16 = 1 << 6;
    /// Link status change interrupt enable
    pub const LINK_STAT_INT_EN: u16 = 1 << 5;
    /// Speed change interrupt enable
    pub const SPEED_CHANGED_INT_EN: u16 = 1 << 4;
    /// Duplex mode change interrupt enable
    pub const DUP_MODE_CHANGE_INT_EN: u16 = 1 << 3;
    /// Auto-negotiation complete interrupt enable
    pub const ANEG_COMPLETE_INT_EN: u16 = 1 << 2;
    /// False carrier counter half-full interrupt enable
    pub const FALSE_CARRIER_HF_INT_EN: u16 = 1 << 1;
    /// Receive error counter half-full interrupt enable
    pub const RX_ERR_HF_INT_EN: u16 = 1 << 0;
}

/// MISR2 (MII Interrupt Status Register 2) enable bits
pub mod misr2 {
    /// EEE error change interrupt enable
    pub const EEE_ERROR_CHANGE_INT_EN: u16 = 1 << 7;
    /// Auto-negotiation error interrupt enable
    pub const ANEG_ERR_INT_EN: u16 = 1 << 6;
    /// Page received interrupt enable
    pub const PAGE_RX_INT_EN: u16 = 1 << 5;
    /// Loopback FIFO overflow/underflow interrupt enable
    pub const LB_FIFO_INT_EN: u16 = 1 << 4;
    /// MDI crossover change interrupt enable
    pub const MDI_XOVER_INT_EN: u16 = 1 << 3;
    /// Sleep mode interrupt enable
    pub const SLEEP_MODE_INT_EN: u16 = 1 << 2;
    /// Wake-on-LAN packet interrupt enable
    pub const WOL_PKT_INT_EN: u16 = 1 << 1;
    /// Jabber detect interrupt enable
    pub const JABBER_DET_INT_EN: u16 = 1 << 0;
}

/// BISCR (BIST Control Register) loopback-mode field
pub mod biscr {
    /// Loopback mode field mask (bits 4:0)
    pub const LOOPBACK_MODE_MASK: u16 = 0x1F;
    /// Reverse (remote) loopback
    pub const LOOPBACK_REVERSE: u16 = 1 << 4;
    /// Analog loopback
    pub const LOOPBACK_ANALOG: u16 = 1 << 3;
    /// Digital loopback
    pub const LOOPBACK_DIGITAL: u16 = 1 << 2;
    /// PCS output loopback
    pub const LOOPBACK_PCS_OUT: u16 = 1 << 1;
    /// PCS input loopback
    pub const LOOPBACK_PCS_IN: u16 = 1 << 0;
}

/// RCSR (Receive Clock Select Register) bits and elastic buffer values
pub mod rcsr {
    /// RX elastic buffer: 14-bit tolerance, < 16800 byte packets
    pub const ELASTIC_BUF_14B: u16 = 0x0;
    /// RX elastic buffer: 2-bit tolerance, < 2400 byte packets (50 ppm)
    pub const ELASTIC_BUF_2B: u16 = 0x1;
    /// RX elastic buffer: 6-bit tolerance, < 7200 byte packets
    pub const ELASTIC_BUF_6B: u16 = 0x2;
    /// RX elastic buffer: 10-bit tolerance, < 12000 byte packets
    pub const ELASTIC_BUF_10B: u16 = 0x3;
    /// RMII mode enable
    pub const RMII_MODE_EN: u16 = 1 << 5;
    /// RMII revision select
    pub const RMII_MODE_SEL: u16 = 1 << 7;
    /// RGMII mode enable
    pub const RGMII_MODE_EN: u16 = 1 << 9;
    /// TX clock shift
    pub const TX_CLK_SHIFT: u16 = 1 << 11;
    /// RX clock shift
    pub const RX_CLK_SHIFT: u16 = 1 << 12;
}

/// PHYCR (PHY Control Register) bits
pub mod phycr {
    /// Auto MDI/X enable
    pub const MDIX_AUTO_EN: u16 = 1 << 15;
    /// Force MDI crossover (when auto MDI/X is off)
    pub const MDIX_FORCE_CROSS: u16 = 1 << 14;
}

// =============================================================================
// Vendor registers (extended address space, MMD device 0x1F)
// =============================================================================

/// Extended (MMD) register addresses
pub mod ext_reg {
    /// MMD device address for the TI vendor extended space
    pub const DEVADDR: u8 = 0x1F;
    /// Wake-on-LAN Configuration Register
    pub const WOL_CFG: u16 = 0x04A0;
    /// Wake-on-LAN Status Register
    pub const WOL_STAT: u16 = 0x04A1;
    /// Wake-on-LAN Destination Address 1
    pub const WOL_DA1: u16 = 0x04A2;
    /// Wake-on-LAN Destination Address 2
    pub const WOL_DA2: u16 = 0x04A3;
    /// Wake-on-LAN Destination Address 3
    pub const WOL_DA3: u16 = 0x04A4;
}

/// WOL_CFG (Wake-on-LAN Configuration Register) bits
pub mod wol {
    /// Clear wake indication
    pub const CLR_INDICATION: u16 = 1 << 11;
    /// Wake indication select
    pub const INDICATION_SEL: u16 = 1 << 8;
    /// Wake-on-LAN enable
    pub const EN: u16 = 1 << 7;
    /// SecureOn password enable
    pub const SECURE_ON: u16 = 1 << 5;
    /// Magic packet detection enable
    pub const MAGIC_EN: u16 = 1 << 0;
}

// =============================================================================
// Unit Tests
// =============================================================================
