//! Error types for the DP83825 PHY driver
//!
//! Errors are organized by domain for better diagnostics:
//! - [`ConfigError`]: Identification and unsupported-configuration failures
//! - [`IoError`]: MDIO bus transaction failures
//!
//! The unified [`Error`] enum wraps both domains and is returned by all
//! driver operations. Programming-contract violations (for example asking
//! this 10/100 PHY for gigabit speed) are asserted, not returned.

// =============================================================================
// Configuration Errors
// =============================================================================

/// Identification and configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// No supported PHY identifier was read within the attempt budget
    UnknownPhy,
    /// The requested configuration is explicitly unimplemented
    /// (Wake-on-LAN enable, AutoMDIX disable)
    Unsupported,
    /// The hardware reset pin could not be driven
    Gpio,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::UnknownPhy => "no supported PHY identifier found",
            ConfigError::Unsupported => "unsupported configuration requested",
            ConfigError::Gpio => "reset pin error",
        }
    }
}

// =============================================================================
// I/O Errors
// =============================================================================

/// MDIO bus transaction errors
///
/// Produced by [`MdioBus`](crate::mdio::MdioBus) implementations. The driver
/// never retries a failed transaction; the first failure aborts the enclosing
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoError {
    /// Bus transaction did not complete in time
    Timeout,
    /// Bus transaction failed for another reason
    Bus,
}

impl core::fmt::Display for IoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl IoError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            IoError::Timeout => "MDIO transaction timed out",
            IoError::Bus => "MDIO bus error",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// Match on the inner domain error for specific handling:
/// ```ignore
/// match result {
///     Err(Error::Config(ConfigError::UnknownPhy)) => { /* ... */ }
///     Err(Error::Io(IoError::Timeout)) => { /* ... */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration error
    Config(ConfigError),
    /// I/O error
    Io(IoError),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Config(e) => write!(f, "config: {}", e.as_str()),
            Error::Io(e) => write!(f, "io: {}", e.as_str()),
        }
    }
}

// From impls for automatic conversion
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        Error::Io(e)
    }
}

/// Result type alias for PHY driver operations
pub type Result<T> = core::result::Result<T, Error>;

// =============================================================================
// Unit Tests
// =============================================================================
