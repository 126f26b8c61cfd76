//! Generic PHY operation set
//!
//! This module defines the common call interface shared by all PHY drivers
//! of this family, plus helpers for the IEEE 802.3 Clause 22 standard
//! registers that any 10/100 PHY honors.

use crate::config::{Duplex, LoopbackMode, PhyConfig, Speed};
use crate::error::Result;
use crate::mdio::MdioBus;

// =============================================================================
// Link Status
// =============================================================================

/// Resolved link parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkStatus {
    /// Link speed
    pub speed: Speed,
    /// Duplex mode
    pub duplex: Duplex,
}

impl LinkStatus {
    /// Create a new link status
    #[must_use]
    pub const fn new(speed: Speed, duplex: Duplex) -> Self {
        Self { speed, duplex }
    }

    /// 100 Mbps Full Duplex
    #[must_use]
    pub const fn fast_full() -> Self {
        Self::new(Speed::Mbps100, Duplex::Full)
    }

    /// 100 Mbps Half Duplex
    #[must_use]
    pub const fn fast_half() -> Self {
        Self::new(Speed::Mbps100, Duplex::Half)
    }

    /// 10 Mbps Full Duplex
    #[must_use]
    pub const fn slow_full() -> Self {
        Self::new(Speed::Mbps10, Duplex::Full)
    }

    /// 10 Mbps Half Duplex
    #[must_use]
    pub const fn slow_half() -> Self {
        Self::new(Speed::Mbps10, Duplex::Half)
    }
}

// =============================================================================
// PHY Driver Trait
// =============================================================================

/// The PHY operation set
///
/// One implementation exists per chip family; every handle of a family
/// shares the same implementation (there is no per-device dispatch state).
/// All operations are synchronous: each performs one or more MDIO
/// transactions and returns after they complete or the first one fails.
/// Sharing one handle across execution contexts requires external
/// serialization by the caller.
pub trait PhyDriver {
    /// Get the PHY bus address (0-31)
    fn address(&self) -> u8;

    /// Initialize the PHY
    ///
    /// Identifies the chip, resets it, and applies `config`. A failed bus
    /// transaction aborts immediately and leaves the device in whatever
    /// state the last successful write produced.
    fn init<M: MdioBus>(&mut self, mdio: &mut M, config: &PhyConfig) -> Result<()>;

    /// Read a register not covered by a named operation
    fn read<M: MdioBus>(&self, mdio: &mut M, reg: u8) -> Result<u16>;

    /// Write a register not covered by a named operation
    fn write<M: MdioBus>(&mut self, mdio: &mut M, reg: u8, value: u16) -> Result<()>;

    /// Check whether the link is up
    fn link_status<M: MdioBus>(&self, mdio: &mut M) -> Result<bool>;

    /// Check whether auto-negotiation has completed
    fn autoneg_complete<M: MdioBus>(&self, mdio: &mut M) -> Result<bool>;

    /// Get the resolved link speed and duplex
    fn link_speed_duplex<M: MdioBus>(&self, mdio: &mut M) -> Result<LinkStatus>;

    /// Force a specific speed and duplex, disabling auto-negotiation
    ///
    /// # Panics
    ///
    /// Panics if `speed` exceeds 100 Mb/s; that is a contract violation on
    /// this PHY family, not a runtime condition.
    fn set_link_speed_duplex<M: MdioBus>(
        &mut self,
        mdio: &mut M,
        speed: Speed,
        duplex: Duplex,
    ) -> Result<()>;

    /// Enable a loopback mode at the given speed
    ///
    /// # Panics
    ///
    /// Panics if `speed` exceeds 100 Mb/s, or if remote loopback is
    /// requested at any speed other than 100 Mb/s (remote loopback runs at
    /// 100 Mb/s full duplex only).
    fn enable_loopback<M: MdioBus>(
        &mut self,
        mdio: &mut M,
        mode: LoopbackMode,
        speed: Speed,
    ) -> Result<()>;

    /// Disable a loopback mode
    ///
    /// Disabling local loopback also restarts auto-negotiation.
    fn disable_loopback<M: MdioBus>(&mut self, mdio: &mut M, mode: LoopbackMode) -> Result<()>;

    /// Enable or disable the link-status-change interrupt
    fn set_link_interrupt<M: MdioBus>(&mut self, mdio: &mut M, enable: bool) -> Result<()>;

    /// Clear latched interrupt status, returning the second status register
    ///
    /// Reading the interrupt status registers clears their latched bits on
    /// this chip family.
    fn clear_interrupt<M: MdioBus>(&mut self, mdio: &mut M) -> Result<u16>;
}

// =============================================================================
// Standard-register helpers
// =============================================================================

/// Helper functions using standard IEEE 802.3 registers
pub mod ieee802_3 {
    use super::*;
    use crate::regs::{anar, bmcr, bmsr, phy_reg};

    /// Read BMSR and check the link status bit
    pub fn is_link_up<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<bool> {
        let bmsr_val = mdio.read(phy_addr, phy_reg::BMSR)?;
        Ok((bmsr_val & bmsr::LINK_STATUS) != 0)
    }

    /// Read BMSR and check the auto-negotiation complete bit
    pub fn is_autoneg_complete<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<bool> {
        let bmsr_val = mdio.read(phy_addr, phy_reg::BMSR)?;
        Ok((bmsr_val & bmsr::AN_COMPLETE) != 0)
    }

    /// Read the 32-bit PHY identifier: `(PHYIDR1 << 16) | PHYIDR2`
    pub fn read_phy_id<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<u32> {
        let id1 = mdio.read(phy_addr, phy_reg::PHYIDR1)? as u32;
        let id2 = mdio.read(phy_addr, phy_reg::PHYIDR2)? as u32;
        Ok((id1 << 16) | id2)
    }

    /// Advertise the full 10/100 half/full capability set
    pub fn advertise_10_100<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<()> {
        mdio.write(
            phy_addr,
            phy_reg::ANAR,
            anar::TX_FD | anar::TX_HD | anar::T10_FD | anar::T10_HD | anar::SELECTOR_IEEE802_3,
        )
    }

    /// Enable auto-negotiation and restart it
    pub fn restart_autoneg<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<()> {
        mdio.write(phy_addr, phy_reg::BMCR, bmcr::AN_ENABLE | bmcr::AN_RESTART)
    }

    /// Clear the isolate bit, leaving the rest of BMCR untouched
    pub fn clear_isolate<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<()> {
        let value = mdio.read(phy_addr, phy_reg::BMCR)?;
        mdio.write(phy_addr, phy_reg::BMCR, value & !bmcr::ISOLATE)
    }

    /// Disable auto-negotiation and force speed/duplex via BMCR
    pub fn force_speed_duplex<M: MdioBus>(
        mdio: &mut M,
        phy_addr: u8,
        speed: Speed,
        duplex: Duplex,
    ) -> Result<()> {
        let mut value = mdio.read(phy_addr, phy_reg::BMCR)?;

        value &= !bmcr::AN_ENABLE;

        if matches!(speed, Speed::Mbps100) {
            value |= bmcr::SPEED_100;
        } else {
            value &= !bmcr::SPEED_100;
        }

        if matches!(duplex, Duplex::Full) {
            value |= bmcr::DUPLEX_FULL;
        } else {
            value &= !bmcr::DUPLEX_FULL;
        }

        mdio.write(phy_addr, phy_reg::BMCR, value)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
