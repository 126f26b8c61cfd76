//! MDIO driver for the TI DP83822/DP83825/DP83826 Ethernet PHY family
//!
//! A `no_std` driver for the TI DP83822, DP83825 and DP83826 10/100 Mb/s
//! Ethernet PHYs, managed over an MDIO bus supplied by the caller through
//! the [`MdioBus`] trait. The driver owns no hardware: it holds only the
//! 5-bit PHY address and turns every operation into a short sequence of
//! register transactions on the bus it is handed.
//!
//! # Architecture
//!
//! - [`MdioBus`]: the bus abstraction a MAC or bit-banged controller
//!   implements; extended (MMD) register access has default implementations
//!   built on the standard REGCR/ADDAR indirection, so a Clause-22-only
//!   controller needs nothing extra.
//! - [`PhyDriver`]: the operations common to MDIO-managed PHYs, covering
//!   init, link and auto-negotiation status, forced speed/duplex, loopback
//!   and interrupt control.
//! - [`Dp83825`]: the family driver implementing [`PhyDriver`], plus
//!   family-specific Wake-on-LAN and auto MDI/X control.
//! - [`Dp83825WithReset`]: the same driver wrapped with an active-low
//!   hardware reset pin.
//!
//! # Usage
//!
//! ```ignore
//! use ph_dp83825_phy::{Dp83825, PhyConfig, PhyDriver};
//!
//! let mut phy = Dp83825::new(0);
//! phy.init(&mut mdio, &PhyConfig::new())?;
//!
//! while !phy.link_status(&mut mdio)? {}
//! let link = phy.link_speed_duplex(&mut mdio)?;
//! ```
//!
//! # Features
//!
//! - `defmt`: derive `defmt::Format` on public types for structured logging
//!   on embedded targets.

#![no_std]
#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod mdio;
pub mod phy;
pub mod regs;

#[cfg(test)]
pub mod testing;

pub use config::{Duplex, InterruptPolarity, LoopbackMode, PhyConfig, Speed};
pub use error::{ConfigError, Error, IoError, Result};
pub use mdio::{MAX_PHY_ADDR, MdioBus};
pub use phy::{Dp83825, Dp83825WithReset, LinkStatus, PhyDriver, scan_bus};
