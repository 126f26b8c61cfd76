//! MDIO (Management Data Input/Output) bus contract
//!
//! The driver talks to the PHY exclusively through the [`MdioBus`] trait,
//! bound to a concrete MAC-side MDIO controller by the caller. Each trait
//! method performs exactly one logical bus transaction; there is no retry or
//! buffering at this layer, and callers decide retry policy.
//!
//! Extended (Clause 45) register access has default implementations that
//! tunnel through the Clause 22 MMD indirection registers (REGCR/ADDAR),
//! which is how the DP83822 family exposes its extended space on plain
//! Clause 22 controllers. Controllers with native Clause 45 framing should
//! override `read_ext`/`write_ext`.

use crate::error::Result;
use crate::regs::phy_reg;

// =============================================================================
// MDIO Constants
// =============================================================================

/// Maximum valid PHY address (5-bit field)
pub const MAX_PHY_ADDR: u8 = 31;

/// REGCR function: the next ADDAR access carries the register address
const REGCR_FN_ADDRESS: u16 = 0x0000;

/// REGCR function: the next ADDAR access carries data, no post-increment
const REGCR_FN_DATA: u16 = 0x4000;

/// REGCR device address field mask (bits 4:0)
const REGCR_DEVAD_MASK: u16 = 0x001F;

// =============================================================================
// MDIO Bus Trait
// =============================================================================

/// Trait for MDIO bus operations
///
/// Implemented by the host MAC's MDIO controller. The PHY driver holds no
/// reference to the bus; callers pass it into every operation, which keeps
/// the bus usable for other PHYs between calls.
pub trait MdioBus {
    /// Read a PHY register (Clause 22, 5-bit register address)
    fn read(&mut self, phy_addr: u8, reg: u8) -> Result<u16>;

    /// Write a PHY register (Clause 22, 5-bit register address)
    fn write(&mut self, phy_addr: u8, reg: u8, value: u16) -> Result<()>;

    /// Read an extended register (device address + 16-bit register address)
    ///
    /// The default implementation uses the REGCR/ADDAR MMD indirection
    /// sequence over Clause 22 transactions.
    fn read_ext(&mut self, phy_addr: u8, dev_addr: u8, reg: u16) -> Result<u16> {
        self.write(phy_addr, phy_reg::REGCR, REGCR_FN_ADDRESS | mmd_devad(dev_addr))?;
        self.write(phy_addr, phy_reg::ADDAR, reg)?;
        self.write(phy_addr, phy_reg::REGCR, REGCR_FN_DATA | mmd_devad(dev_addr))?;
        self.read(phy_addr, phy_reg::ADDAR)
    }

    /// Write an extended register (device address + 16-bit register address)
    ///
    /// The default implementation uses the REGCR/ADDAR MMD indirection
    /// sequence over Clause 22 transactions.
    fn write_ext(&mut self, phy_addr: u8, dev_addr: u8, reg: u16, value: u16) -> Result<()> {
        self.write(phy_addr, phy_reg::REGCR, REGCR_FN_ADDRESS | mmd_devad(dev_addr))?;
        self.write(phy_addr, phy_reg::ADDAR, reg)?;
        self.write(phy_addr, phy_reg::REGCR, REGCR_FN_DATA | mmd_devad(dev_addr))?;
        self.write(phy_addr, phy_reg::ADDAR, value)
    }
}

const fn mmd_devad(dev_addr: u8) -> u16 {
    (dev_addr as u16) & REGCR_DEVAD_MASK
}

// =============================================================================
// Unit Tests
// =============================================================================
