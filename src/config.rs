//! Configuration types for the DP83825 PHY driver

/// Ethernet link speed
///
/// `Mbps1000` exists so callers sharing configuration with gigabit-capable
/// MACs can express it, but this PHY family tops out at 100 Mb/s; passing
/// `Mbps1000` into a speed-setting operation is a contract violation and
/// panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    /// 10 Mbps
    Mbps10,
    /// 100 Mbps
    #[default]
    Mbps100,
    /// 1000 Mbps (not supported by this PHY family)
    Mbps1000,
}

impl Speed {
    /// The speed in megabits per second
    #[must_use]
    pub const fn mbps(self) -> u32 {
        match self {
            Speed::Mbps10 => 10,
            Speed::Mbps100 => 100,
            Speed::Mbps1000 => 1000,
        }
    }
}

/// Ethernet duplex mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Duplex {
    /// Half duplex
    Half,
    /// Full duplex
    #[default]
    Full,
}

/// Loopback mode selection
///
/// Local loopback wraps transmit data inside the PHY; remote loopback echoes
/// received data back toward the link partner. Only one mode should be active
/// at a time; the driver does not enforce mutual exclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoopbackMode {
    /// Local (near-end) loopback via the basic control register
    Local,
    /// Remote (reverse) loopback via the BIST control register
    Remote,
}

/// Polarity of the PHY interrupt output pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptPolarity {
    /// Interrupt pin drives low when asserted
    #[default]
    ActiveLow,
    /// Interrupt pin drives high when asserted
    ActiveHigh,
}

/// PHY initialization configuration
///
/// Immutable input to [`init`](crate::phy::PhyDriver::init). When
/// `auto_negotiation` is set, `speed` and `duplex` are ignored and the full
/// 10/100 capability set is advertised; otherwise the explicit speed/duplex
/// pair is forced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhyConfig {
    /// Enable IEEE 802.3 auto-negotiation
    pub auto_negotiation: bool,
    /// Explicit link speed (used only when auto-negotiation is off)
    pub speed: Speed,
    /// Explicit duplex mode (used only when auto-negotiation is off)
    pub duplex: Duplex,
    /// Interrupt pin polarity expected by the host MAC
    pub interrupt_polarity: InterruptPolarity,
    /// Enable the link-status-change interrupt during init
    pub link_interrupt: bool,
}

impl Default for PhyConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PhyConfig {
    /// Create a configuration with auto-negotiation on and interrupts off
    #[must_use]
    pub const fn new() -> Self {
        Self {
            auto_negotiation: true,
            speed: Speed::Mbps100,
            duplex: Duplex::Full,
            interrupt_polarity: InterruptPolarity::ActiveLow,
            link_interrupt: false,
        }
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    /// Enable or disable auto-negotiation
    #[must_use]
    pub const fn with_auto_negotiation(mut self, enabled: bool) -> Self {
        self.auto_negotiation = enabled;
        self
    }

    /// Force an explicit speed/duplex pair (disables auto-negotiation)
    #[must_use]
    pub const fn with_forced_link(mut self, speed: Speed, duplex: Duplex) -> Self {
        self.auto_negotiation = false;
        self.speed = speed;
        self.duplex = duplex;
        self
    }

    /// Set the interrupt pin polarity
    #[must_use]
    pub const fn with_interrupt_polarity(mut self, polarity: InterruptPolarity) -> Self {
        self.interrupt_polarity = polarity;
        self
    }

    /// Enable or disable the link-status-change interrupt
    #[must_use]
    pub const fn with_link_interrupt(mut self, enabled: bool) -> Self {
        self.link_interrupt = enabled;
        self
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_mbps_values() {
        assert_eq!(Speed::Mbps10.mbps(), 10);
        assert_eq!(Speed::Mbps100.mbps(), 100);
        assert_eq!(Speed::Mbps1000.mbps(), 1000);
    }

    #[test]
    fn defaults_are_100_full_autoneg() {
        let config = PhyConfig::default();
        assert!(config.auto_negotiation);
        assert_eq!(config.speed, Speed::Mbps100);
        assert_eq!(config.duplex, Duplex::Full);
        assert_eq!(config.interrupt_polarity, InterruptPolarity::ActiveLow);
        assert!(!config.link_interrupt);
    }

    #[test]
    fn forced_link_disables_autoneg() {
        let config = PhyConfig::new().with_forced_link(Speed::Mbps10, Duplex::Half);
        assert!(!config.auto_negotiation);
        assert_eq!(config.speed, Speed::Mbps10);
        assert_eq!(config.duplex, Duplex::Half);
    }

    #[test]
    fn builder_chains() {
        let config = PhyConfig::new()
            .with_link_interrupt(true)
            .with_interrupt_polarity(InterruptPolarity::ActiveHigh);
        assert!(config.link_interrupt);
        assert_eq!(config.interrupt_polarity, InterruptPolarity::ActiveHigh);
        assert!(config.auto_negotiation);
    }
}
