//! Test doubles for the MDIO bus and delay provider
//!
//! [`MockMdioBus`] emulates a bus segment with one 16-bit register file per
//! PHY address plus a separate extended (MMD) register space, and records
//! every transaction so tests can assert on exact access sequences, not
//! just final register images.

extern crate std;

use std::collections::HashMap;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;

use crate::error::{IoError, Result};
use crate::mdio::MdioBus;
use crate::regs::{bmsr, phy_reg};

/// In-memory MDIO bus with transaction logging
#[derive(Debug, Default)]
pub struct MockMdioBus {
    /// Basic register space, keyed by (phy address, register)
    registers: HashMap<(u8, u8), u16>,
    /// Extended register space, keyed by (phy address, MMD device, register)
    ext_registers: HashMap<(u8, u8, u16), u16>,
    /// Every read as (phy, reg), in order
    reads: Vec<(u8, u8)>,
    /// Every successful write as (phy, reg, value), in order
    writes: Vec<(u8, u8, u16)>,
    /// Every extended read as (phy, dev, reg), in order
    ext_reads: Vec<(u8, u8, u16)>,
    /// Every successful extended write as (phy, dev, reg, value), in order
    ext_writes: Vec<(u8, u8, u16, u16)>,
    /// Registers whose writes fail with a bus error
    failing_writes: Vec<u8>,
}

impl MockMdioBus {
    /// Create an empty bus; unset registers read as zero
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a DP83825I identifier at `addr`
    pub fn setup_dp83825(&mut self, addr: u8) {
        self.setup_dp83825_with_id(addr, 0x2000_A150);
    }

    /// Seed an arbitrary 32-bit PHY identifier at `addr`
    pub fn setup_dp83825_with_id(&mut self, addr: u8, id: u32) {
        self.set_register(addr, phy_reg::PHYIDR1, (id >> 16) as u16);
        self.set_register(addr, phy_reg::PHYIDR2, (id & 0xFFFF) as u16);
    }

    /// Set a basic-space register without logging a transaction
    pub fn set_register(&mut self, addr: u8, reg: u8, value: u16) {
        self.registers.insert((addr, reg), value);
    }

    /// Read back a basic-space register without logging a transaction
    #[must_use]
    pub fn get_register(&self, addr: u8, reg: u8) -> Option<u16> {
        self.registers.get(&(addr, reg)).copied()
    }

    /// Set an extended-space register without logging a transaction
    pub fn set_ext_register(&mut self, addr: u8, dev: u8, reg: u16, value: u16) {
        self.ext_registers.insert((addr, dev, reg), value);
    }

    /// Read back an extended-space register without logging a transaction
    #[must_use]
    pub fn get_ext_register(&self, addr: u8, dev: u8, reg: u16) -> Option<u16> {
        self.ext_registers.get(&(addr, dev, reg)).copied()
    }

    /// Raise the link-status bit in the BMSR at `addr`
    pub fn simulate_link_up(&mut self, addr: u8) {
        let value = self.get_register(addr, phy_reg::BMSR).unwrap_or(0);
        self.set_register(addr, phy_reg::BMSR, value | bmsr::LINK_STATUS);
    }

    /// Make every subsequent write to `reg` fail with a bus error
    pub fn fail_writes_to(&mut self, reg: u8) {
        self.failing_writes.push(reg);
    }

    /// Logged basic-space reads, in order
    #[must_use]
    pub fn get_reads(&self) -> &[(u8, u8)] {
        &self.reads
    }

    /// Logged basic-space writes, in order
    #[must_use]
    pub fn get_writes(&self) -> &[(u8, u8, u16)] {
        &self.writes
    }

    /// Logged extended-space reads, in order
    #[must_use]
    pub fn get_ext_reads(&self) -> &[(u8, u8, u16)] {
        &self.ext_reads
    }

    /// Logged extended-space writes, in order
    #[must_use]
    pub fn get_ext_writes(&self) -> &[(u8, u8, u16, u16)] {
        &self.ext_writes
    }

    /// Forget all logged transactions, keeping register contents
    pub fn clear_logs(&mut self) {
        self.reads.clear();
        self.writes.clear();
        self.ext_reads.clear();
        self.ext_writes.clear();
    }
}

impl MdioBus for MockMdioBus {
    fn read(&mut self, phy_addr: u8, reg: u8) -> Result<u16> {
        self.reads.push((phy_addr, reg));
        Ok(self.get_register(phy_addr, reg).unwrap_or(0))
    }

    fn write(&mut self, phy_addr: u8, reg: u8, value: u16) -> Result<()> {
        if self.failing_writes.contains(&reg) {
            return Err(IoError::Bus.into());
        }
        self.writes.push((phy_addr, reg, value));
        self.set_register(phy_addr, reg, value);
        Ok(())
    }

    // Extended access is modeled directly rather than through the
    // REGCR/ADDAR defaults, so basic-space logs stay free of MMD plumbing.

    fn read_ext(&mut self, phy_addr: u8, dev: u8, reg: u16) -> Result<u16> {
        self.ext_reads.push((phy_addr, dev, reg));
        Ok(self.get_ext_register(phy_addr, dev, reg).unwrap_or(0))
    }

    fn write_ext(&mut self, phy_addr: u8, dev: u8, reg: u16, value: u16) -> Result<()> {
        self.ext_writes.push((phy_addr, dev, reg, value));
        self.set_ext_register(phy_addr, dev, reg, value);
        Ok(())
    }
}

/// Delay provider that only accumulates the requested time
#[derive(Debug, Default)]
pub struct MockDelay {
    total_ns: u64,
}

impl MockDelay {
    /// Create a delay provider with zero elapsed time
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total time requested so far, in nanoseconds
    #[must_use]
    pub fn total_ns(&self) -> u64 {
        self.total_ns
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_registers_read_zero() {
        let mut mdio = MockMdioBus::new();
        assert_eq!(mdio.read(0, 0x10).unwrap(), 0);
        assert_eq!(mdio.read_ext(0, 0x1F, 0x04A0).unwrap(), 0);
    }

    #[test]
    fn writes_are_logged_and_stored() {
        let mut mdio = MockMdioBus::new();
        mdio.write(2, 0x17, 0x0080).unwrap();

        assert_eq!(mdio.get_register(2, 0x17), Some(0x0080));
        assert_eq!(mdio.get_writes(), std::vec![(2, 0x17, 0x0080)]);
    }

    #[test]
    fn failing_register_rejects_write_without_logging() {
        let mut mdio = MockMdioBus::new();
        mdio.fail_writes_to(0x17);

        assert!(mdio.write(0, 0x17, 0x1234).is_err());
        assert!(mdio.get_writes().is_empty());
        assert_eq!(mdio.get_register(0, 0x17), None);
    }

    #[test]
    fn ext_space_is_separate_from_basic_space() {
        let mut mdio = MockMdioBus::new();
        mdio.write(0, 0x10, 0xAAAA).unwrap();
        mdio.write_ext(0, 0x1F, 0x0010, 0x5555).unwrap();

        assert_eq!(mdio.read(0, 0x10).unwrap(), 0xAAAA);
        assert_eq!(mdio.read_ext(0, 0x1F, 0x0010).unwrap(), 0x5555);
    }

    #[test]
    fn delay_accumulates() {
        let mut delay = MockDelay::new();
        delay.delay_us(50);
        delay.delay_ms(2);
        assert_eq!(delay.total_ns(), 2_050_000);
    }
}
