//! Ethernet PHY driver layer
//!
//! [`generic`] defines the operation set every PHY in this crate exposes,
//! the [`PhyDriver`] trait, together with helpers for the IEEE 802.3
//! standard registers. [`dp83825`] implements that operation set for the TI
//! DP83822/DP83825/DP83826 family.
//!
//! The PHY layer is independent of any particular MAC: all register traffic
//! goes through the [`MdioBus`](crate::mdio::MdioBus) trait, so the same
//! driver works against any MDIO controller (or a mock, in tests).
//!
//! # Example
//!
//! ```ignore
//! use ph_dp83825_phy::{Dp83825, PhyConfig, PhyDriver};
//!
//! // Your MAC's MDIO controller, implementing MdioBus
//! let mut mdio = /* ... */;
//!
//! let mut phy = Dp83825::new(0);
//! phy.init(&mut mdio, &PhyConfig::new())?;
//!
//! loop {
//!     if phy.link_status(&mut mdio)? {
//!         let link = phy.link_speed_duplex(&mut mdio)?;
//!         break;
//!     }
//! }
//! ```

pub mod dp83825;
pub mod generic;

pub use dp83825::{Dp83825, Dp83825WithReset, scan_bus};
pub use generic::{LinkStatus, PhyDriver};
