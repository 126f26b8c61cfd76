//! DP83822/DP83825/DP83826 PHY driver
//!
//! Driver for the TI DP83822, DP83825 and DP83826 10/100 Ethernet PHYs.
//! The three chips share one register map and one management contract, so a
//! single driver covers the whole family; initialization identifies the
//! exact part from the PHY ID registers.
//!
//! # Interface mode
//!
//! Initialization configures the PHY for RMII with the 14-bit elastic
//! buffer (the most tolerant setting, good for packets up to 16800 bytes).
//! Boards using MII straps can reprogram RCSR through the register
//! passthrough afterwards.
//!
//! # Reset pin
//!
//! The family has an active-low reset pin. Soft reset over MDIO is usually
//! sufficient, but [`Dp83825WithReset`] adds hardware reset through an
//! `embedded_hal::digital::OutputPin` for boards that wire it.
//!
//! # Example
//!
//! ```ignore
//! use ph_dp83825_phy::{Dp83825, PhyConfig, PhyDriver};
//!
//! let mut phy = Dp83825::new(0);
//! phy.init(&mut mdio, &PhyConfig::new())?;
//!
//! while !phy.autoneg_complete(&mut mdio)? {}
//! let link = phy.link_speed_duplex(&mut mdio)?;
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::{Duplex, LoopbackMode, PhyConfig, Speed};
use crate::error::{ConfigError, Result};
use crate::mdio::{MAX_PHY_ADDR, MdioBus};
use crate::regs::{biscr, bmcr, ext_reg, misr1, phycr, phy_reg, physcr, physts, rcsr, vendor_reg, wol};

use super::generic::{LinkStatus, PhyDriver, ieee802_3};

// =============================================================================
// Family Constants
// =============================================================================

/// PHY identifiers of every supported family member,
/// `(PHYIDR1 << 16) | PHYIDR2`
pub const KNOWN_PHY_IDS: [u32; 7] = [
    0x2000_A240, // DP83822
    0x2000_A140, // DP83825S
    0x2000_A150, // DP83825I
    0x2000_A160, // DP83825CM
    0x2000_A170, // DP83825CS
    0x2000_A130, // DP83826C
    0x2000_A110, // DP83826NC
];

/// Identification attempt budget during init
///
/// This is a bounded busy-poll, not a wall-clock timeout: each non-matching
/// ID read pair consumes one attempt regardless of elapsed time, so a
/// stalled bus is bounded only by the transaction timeout of the shim.
pub const PHY_ID_READ_ATTEMPTS: u32 = 1000;

/// Hardware reset pulse duration in microseconds (minimum 25 µs per datasheet)
const RESET_PULSE_US: u32 = 50;

/// Post-reset recovery before MDIO access in microseconds (~2 ms per datasheet)
const RESET_RECOVERY_US: u32 = 2000;

// =============================================================================
// DP83825 Driver (without reset pin)
// =============================================================================

/// DP83825-family PHY device handle
///
/// Holds only the 5-bit MDIO bus address; the bus itself is passed into
/// every operation, so one controller can serve several PHYs. Create the
/// handle once at configuration time. The address is fixed for the handle's
/// lifetime; re-running [`init`](PhyDriver::init) is the only way the
/// device's configuration changes.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dp83825 {
    /// PHY bus address (0-31)
    addr: u8,
}

impl Dp83825 {
    /// Create a new handle for the PHY at `addr`
    ///
    /// # Panics
    ///
    /// Panics if `addr` does not fit the 5-bit MDIO address field.
    #[must_use]
    pub const fn new(addr: u8) -> Self {
        assert!(addr <= MAX_PHY_ADDR, "PHY address must be 0-31");
        Self { addr }
    }

    /// Read the 32-bit PHY identifier
    pub fn phy_id<M: MdioBus>(&self, mdio: &mut M) -> Result<u32> {
        ieee802_3::read_phy_id(mdio, self.addr)
    }

    /// Verify the device is a known family member by reading the PHY ID
    pub fn verify_id<M: MdioBus>(&self, mdio: &mut M) -> Result<bool> {
        let id = self.phy_id(mdio)?;
        Ok(KNOWN_PHY_IDS.contains(&id))
    }

    /// Read the 4-bit silicon revision from the low bits of PHYIDR2
    pub fn revision<M: MdioBus>(&self, mdio: &mut M) -> Result<u8> {
        let id2 = mdio.read(self.addr, phy_reg::PHYIDR2)?;
        Ok((id2 & 0x000F) as u8)
    }

    /// Read an extended-space (MMD) register
    pub fn read_ext<M: MdioBus>(&self, mdio: &mut M, dev_addr: u8, reg: u16) -> Result<u16> {
        mdio.read_ext(self.addr, dev_addr, reg)
    }

    /// Write an extended-space (MMD) register
    pub fn write_ext<M: MdioBus>(
        &mut self,
        mdio: &mut M,
        dev_addr: u8,
        reg: u16,
        value: u16,
    ) -> Result<()> {
        mdio.write_ext(self.addr, dev_addr, reg, value)
    }

    /// Enable or disable Wake-on-LAN
    ///
    /// Only the disable path is implemented: it clears the enable, magic
    /// packet and SecureOn bits in the extended-space WOL configuration
    /// register. Enabling returns [`ConfigError::Unsupported`] without
    /// touching the bus.
    pub fn set_wake_on_lan<M: MdioBus>(&mut self, mdio: &mut M, enable: bool) -> Result<()> {
        if enable {
            return Err(ConfigError::Unsupported.into());
        }

        let value = mdio.read_ext(self.addr, ext_reg::DEVADDR, ext_reg::WOL_CFG)?;
        mdio.write_ext(
            self.addr,
            ext_reg::DEVADDR,
            ext_reg::WOL_CFG,
            value & !(wol::EN | wol::MAGIC_EN | wol::SECURE_ON),
        )
    }

    /// Enable or disable automatic MDI/MDI-X crossover
    ///
    /// Only the enable path is implemented; disabling (forced crossover)
    /// returns [`ConfigError::Unsupported`] without touching the bus.
    pub fn set_auto_mdix<M: MdioBus>(&mut self, mdio: &mut M, enable: bool) -> Result<()> {
        if !enable {
            return Err(ConfigError::Unsupported.into());
        }

        let value = mdio.read(self.addr, vendor_reg::PHYCR)?;
        mdio.write(self.addr, vendor_reg::PHYCR, value | phycr::MDIX_AUTO_EN)
    }

    /// Poll the ID registers until a known family member answers
    fn identify<M: MdioBus>(&self, mdio: &mut M) -> Result<()> {
        for _ in 0..PHY_ID_READ_ATTEMPTS {
            if self.verify_id(mdio)? {
                return Ok(());
            }
        }
        Err(ConfigError::UnknownPhy.into())
    }
}

impl PhyDriver for Dp83825 {
    fn address(&self) -> u8 {
        self.addr
    }

    fn init<M: MdioBus>(&mut self, mdio: &mut M, config: &PhyConfig) -> Result<()> {
        self.identify(mdio)?;

        // Soft reset, then select RMII with the widest elastic buffer
        mdio.write(self.addr, phy_reg::BMCR, bmcr::RESET)?;
        mdio.write(
            self.addr,
            vendor_reg::RCSR,
            rcsr::RMII_MODE_SEL | rcsr::ELASTIC_BUF_14B,
        )?;

        // Wake-on-LAN is always off; AutoMDIX is always on
        self.set_wake_on_lan(mdio, false)?;
        self.set_link_interrupt(mdio, config.link_interrupt)?;
        self.set_auto_mdix(mdio, true)?;

        if config.auto_negotiation {
            ieee802_3::advertise_10_100(mdio, self.addr)?;
            ieee802_3::restart_autoneg(mdio, self.addr)
        } else {
            ieee802_3::clear_isolate(mdio, self.addr)?;
            self.set_link_speed_duplex(mdio, config.speed, config.duplex)
        }
    }

    fn read<M: MdioBus>(&self, mdio: &mut M, reg: u8) -> Result<u16> {
        mdio.read(self.addr, reg)
    }

    fn write<M: MdioBus>(&mut self, mdio: &mut M, reg: u8, value: u16) -> Result<()> {
        mdio.write(self.addr, reg, value)
    }

    fn link_status<M: MdioBus>(&self, mdio: &mut M) -> Result<bool> {
        ieee802_3::is_link_up(mdio, self.addr)
    }

    fn autoneg_complete<M: MdioBus>(&self, mdio: &mut M) -> Result<bool> {
        ieee802_3::is_autoneg_complete(mdio, self.addr)
    }

    fn link_speed_duplex<M: MdioBus>(&self, mdio: &mut M) -> Result<LinkStatus> {
        let value = mdio.read(self.addr, vendor_reg::PHYSTS)?;

        let speed = if value & physts::SPEED_10 != 0 {
            Speed::Mbps10
        } else {
            Speed::Mbps100
        };
        let duplex = if value & physts::DUPLEX != 0 {
            Duplex::Full
        } else {
            Duplex::Half
        };

        Ok(LinkStatus::new(speed, duplex))
    }

    fn set_link_speed_duplex<M: MdioBus>(
        &mut self,
        mdio: &mut M,
        speed: Speed,
        duplex: Duplex,
    ) -> Result<()> {
        assert!(speed.mbps() <= 100, "DP83825 family supports 10/100 Mb/s only");

        ieee802_3::force_speed_duplex(mdio, self.addr, speed, duplex)
    }

    fn enable_loopback<M: MdioBus>(
        &mut self,
        mdio: &mut M,
        mode: LoopbackMode,
        speed: Speed,
    ) -> Result<()> {
        assert!(speed.mbps() <= 100, "DP83825 family supports 10/100 Mb/s only");

        match mode {
            LoopbackMode::Local => {
                let value = if matches!(speed, Speed::Mbps100) {
                    bmcr::SPEED_100 | bmcr::DUPLEX_FULL | bmcr::LOOPBACK
                } else {
                    bmcr::DUPLEX_FULL | bmcr::LOOPBACK
                };
                mdio.write(self.addr, phy_reg::BMCR, value)
            }
            LoopbackMode::Remote => {
                // Remote loopback runs at 100 Mb/s full duplex only
                assert!(
                    matches!(speed, Speed::Mbps100),
                    "remote loopback requires 100 Mb/s full duplex"
                );

                mdio.write(
                    self.addr,
                    phy_reg::BMCR,
                    bmcr::SPEED_100 | bmcr::DUPLEX_FULL | bmcr::LOOPBACK,
                )?;

                let value = mdio.read(self.addr, vendor_reg::BISCR)?;
                mdio.write(
                    self.addr,
                    vendor_reg::BISCR,
                    (value & !biscr::LOOPBACK_MODE_MASK) | biscr::LOOPBACK_REVERSE,
                )
            }
        }
    }

    fn disable_loopback<M: MdioBus>(&mut self, mdio: &mut M, mode: LoopbackMode) -> Result<()> {
        match mode {
            LoopbackMode::Local => {
                // Drop the loop bit and kick off a fresh negotiation
                let value = mdio.read(self.addr, phy_reg::BMCR)?;
                mdio.write(
                    self.addr,
                    phy_reg::BMCR,
                    (value & !bmcr::LOOPBACK) | bmcr::AN_RESTART,
                )
            }
            LoopbackMode::Remote => {
                let value = mdio.read(self.addr, vendor_reg::BISCR)?;
                mdio.write(
                    self.addr,
                    vendor_reg::BISCR,
                    value & !biscr::LOOPBACK_MODE_MASK,
                )
            }
        }
    }

    fn set_link_interrupt<M: MdioBus>(&mut self, mdio: &mut M, enable: bool) -> Result<()> {
        // Link-status-change source in the interrupt mask register
        let mut value = mdio.read(self.addr, vendor_reg::MISR1)?;
        if enable {
            value |= misr1::LINK_STAT_INT_EN;
        } else {
            value &= !misr1::LINK_STAT_INT_EN;
        }
        mdio.write(self.addr, vendor_reg::MISR1, value)?;

        // Master interrupt enable and INT pin output enable
        let mut value = mdio.read(self.addr, vendor_reg::PHYSCR)?;
        if enable {
            value |= physcr::INT_EN | physcr::INT_OE;
        } else {
            value &= !(physcr::INT_EN | physcr::INT_OE);
        }
        mdio.write(self.addr, vendor_reg::PHYSCR, value)
    }

    fn clear_interrupt<M: MdioBus>(&mut self, mdio: &mut M) -> Result<u16> {
        // Reading MISR1/MISR2 clears their latched status bits
        let _ = mdio.read(self.addr, vendor_reg::MISR1)?;
        mdio.read(self.addr, vendor_reg::MISR2)
    }
}

// =============================================================================
// DP83825 Driver (with reset pin)
// =============================================================================

/// DP83825-family driver with a hardware reset pin
///
/// Wraps [`Dp83825`] with an active-low reset pin. Call
/// [`hardware_reset`](Self::hardware_reset) before `init` when the PHY may
/// be in an unknown state (for example after a brown-out that did not reset
/// the host).
#[derive(Debug)]
pub struct Dp83825WithReset<RST: OutputPin> {
    /// Inner PHY driver
    inner: Dp83825,
    /// Reset pin (active low)
    reset_pin: RST,
}

impl<RST: OutputPin> Dp83825WithReset<RST> {
    /// Create a new driver with a reset pin
    ///
    /// The pin is driven high (inactive) immediately.
    pub fn new(addr: u8, mut reset_pin: RST) -> Self {
        let _ = reset_pin.set_high();
        Self {
            inner: Dp83825::new(addr),
            reset_pin,
        }
    }

    /// Pulse the reset pin and wait for the PHY to come back
    ///
    /// Holds reset for 50 µs (datasheet minimum 25 µs) and then waits 2 ms
    /// before MDIO access is legal again.
    pub fn hardware_reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<()> {
        self.reset_pin.set_low().map_err(|_| ConfigError::Gpio)?;
        delay.delay_us(RESET_PULSE_US);

        self.reset_pin.set_high().map_err(|_| ConfigError::Gpio)?;
        delay.delay_us(RESET_RECOVERY_US);

        Ok(())
    }

    /// Assert reset and hold the PHY in the reset state
    pub fn assert_reset(&mut self) -> Result<()> {
        self.reset_pin.set_low().map_err(|_| ConfigError::Gpio)?;
        Ok(())
    }

    /// Release the PHY from reset
    ///
    /// Wait ~2 ms after this before accessing the PHY over MDIO.
    pub fn deassert_reset(&mut self) -> Result<()> {
        self.reset_pin.set_high().map_err(|_| ConfigError::Gpio)?;
        Ok(())
    }

    /// Consume the driver and return the reset pin
    pub fn into_reset_pin(self) -> RST {
        self.reset_pin
    }

    /// Read the 32-bit PHY identifier
    pub fn phy_id<M: MdioBus>(&self, mdio: &mut M) -> Result<u32> {
        self.inner.phy_id(mdio)
    }

    /// Verify the device is a known family member
    pub fn verify_id<M: MdioBus>(&self, mdio: &mut M) -> Result<bool> {
        self.inner.verify_id(mdio)
    }

    /// Read the 4-bit silicon revision (see [`Dp83825::revision`])
    pub fn revision<M: MdioBus>(&self, mdio: &mut M) -> Result<u8> {
        self.inner.revision(mdio)
    }

    /// Read an extended-space (MMD) register
    pub fn read_ext<M: MdioBus>(&self, mdio: &mut M, dev_addr: u8, reg: u16) -> Result<u16> {
        self.inner.read_ext(mdio, dev_addr, reg)
    }

    /// Write an extended-space (MMD) register
    pub fn write_ext<M: MdioBus>(
        &mut self,
        mdio: &mut M,
        dev_addr: u8,
        reg: u16,
        value: u16,
    ) -> Result<()> {
        self.inner.write_ext(mdio, dev_addr, reg, value)
    }

    /// Enable or disable Wake-on-LAN (see [`Dp83825::set_wake_on_lan`])
    pub fn set_wake_on_lan<M: MdioBus>(&mut self, mdio: &mut M, enable: bool) -> Result<()> {
        self.inner.set_wake_on_lan(mdio, enable)
    }

    /// Enable or disable automatic MDI/MDI-X (see [`Dp83825::set_auto_mdix`])
    pub fn set_auto_mdix<M: MdioBus>(&mut self, mdio: &mut M, enable: bool) -> Result<()> {
        self.inner.set_auto_mdix(mdio, enable)
    }
}

impl<RST: OutputPin> PhyDriver for Dp83825WithReset<RST> {
    fn address(&self) -> u8 {
        self.inner.address()
    }

    fn init<M: MdioBus>(&mut self, mdio: &mut M, config: &PhyConfig) -> Result<()> {
        self.inner.init(mdio, config)
    }

    fn read<M: MdioBus>(&self, mdio: &mut M, reg: u8) -> Result<u16> {
        self.inner.read(mdio, reg)
    }

    fn write<M: MdioBus>(&mut self, mdio: &mut M, reg: u8, value: u16) -> Result<()> {
        self.inner.write(mdio, reg, value)
    }

    fn link_status<M: MdioBus>(&self, mdio: &mut M) -> Result<bool> {
        self.inner.link_status(mdio)
    }

    fn autoneg_complete<M: MdioBus>(&self, mdio: &mut M) -> Result<bool> {
        self.inner.autoneg_complete(mdio)
    }

    fn link_speed_duplex<M: MdioBus>(&self, mdio: &mut M) -> Result<LinkStatus> {
        self.inner.link_speed_duplex(mdio)
    }

    fn set_link_speed_duplex<M: MdioBus>(
        &mut self,
        mdio: &mut M,
        speed: Speed,
        duplex: Duplex,
    ) -> Result<()> {
        self.inner.set_link_speed_duplex(mdio, speed, duplex)
    }

    fn enable_loopback<M: MdioBus>(
        &mut self,
        mdio: &mut M,
        mode: LoopbackMode,
        speed: Speed,
    ) -> Result<()> {
        self.inner.enable_loopback(mdio, mode, speed)
    }

    fn disable_loopback<M: MdioBus>(&mut self, mdio: &mut M, mode: LoopbackMode) -> Result<()> {
        self.inner.disable_loopback(mdio, mode)
    }

    fn set_link_interrupt<M: MdioBus>(&mut self, mdio: &mut M, enable: bool) -> Result<()> {
        self.inner.set_link_interrupt(mdio, enable)
    }

    fn clear_interrupt<M: MdioBus>(&mut self, mdio: &mut M) -> Result<u16> {
        self.inner.clear_interrupt(mdio)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Scan the MDIO bus for DP83825-family PHYs
///
/// Returns, per bus address, the PHY identifier found there if it belongs
/// to this family.
pub fn scan_bus<M: MdioBus>(mdio: &mut M) -> [Option<u32>; 32] {
    let mut found = [None; 32];

    for addr in 0..=MAX_PHY_ADDR {
        let phy = Dp83825::new(addr);
        if let Ok(id) = phy.phy_id(mdio) {
            if KNOWN_PHY_IDS.contains(&id) {
                found[addr as usize] = Some(id);
            }
        }
    }

    found
}
