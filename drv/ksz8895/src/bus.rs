// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Raw register transport.
//!
//! The driver only ever issues single-byte register transactions, each
//! described by a command byte, an 8-bit address and (for writes) one data
//! byte.  [`RegisterBus`] is the seam between the driver and whatever moves
//! those bytes; this module provides implementations on top of an SPI
//! peripheral and on top of an MII management (SMI) bus.

use embedded_hal::blocking::spi::Transfer;
use embedded_hal::digital::v2::OutputPin;

/// Command byte for a register write
pub const SPI_CMD_WRITE: u8 = 0x02;

/// Command byte for a register read
pub const SPI_CMD_READ: u8 = 0x03;

/// Failure reported by the register transport
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BusError {
    /// The underlying peripheral failed to move the bytes
    Transfer,
    /// The chip select line could not be driven
    ChipSelect,
    /// The transport gave up waiting on the bus
    Timeout,
    /// The transaction was refused (e.g. an unknown command byte)
    Nack,
}

/// Trait implementing raw register access to the switch.
pub trait RegisterBus {
    /// Writes `data` to the register at `addr`.
    fn write(&mut self, cmd: u8, addr: u8, data: u8) -> Result<(), BusError>;

    /// Reads the register at `addr`.
    fn read(&mut self, cmd: u8, addr: u8) -> Result<u8, BusError>;
}

impl<T: RegisterBus + ?Sized> RegisterBus for &mut T {
    fn write(&mut self, cmd: u8, addr: u8, data: u8) -> Result<(), BusError> {
        (**self).write(cmd, addr, data)
    }

    fn read(&mut self, cmd: u8, addr: u8) -> Result<u8, BusError> {
        (**self).read(cmd, addr)
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Register transport over SPI.
///
/// Each transaction is a three byte frame `[cmd, addr, data]` clocked out
/// with chip select held low; on reads the chip returns the register value
/// in the third byte.
pub struct Spi<SPI, CS> {
    spi: SPI,
    cs: CS,
}

impl<SPI, CS> Spi<SPI, CS>
where
    SPI: Transfer<u8>,
    CS: OutputPin,
{
    pub fn new(spi: SPI, cs: CS) -> Self {
        Self { spi, cs }
    }

    /// Gives back the peripheral and the chip select pin
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }

    fn transaction(&mut self, frame: &mut [u8; 3]) -> Result<(), BusError> {
        self.cs.set_low().map_err(|_| BusError::ChipSelect)?;
        let r = self
            .spi
            .transfer(frame)
            .map(|_| ())
            .map_err(|_| BusError::Transfer);

        // Chip select is released even if the transfer failed, otherwise the
        // chip would consume the next frame as a continuation of this one.
        let released = self.cs.set_high().map_err(|_| BusError::ChipSelect);
        r.and(released)
    }
}

impl<SPI, CS> RegisterBus for Spi<SPI, CS>
where
    SPI: Transfer<u8>,
    CS: OutputPin,
{
    fn write(&mut self, cmd: u8, addr: u8, data: u8) -> Result<(), BusError> {
        let mut frame = [cmd, addr, data];
        self.transaction(&mut frame)
    }

    fn read(&mut self, cmd: u8, addr: u8) -> Result<u8, BusError> {
        let mut frame = [cmd, addr, 0];
        self.transaction(&mut frame)?;
        Ok(frame[2])
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Trait implementing communication over an MII management bus.
pub trait SmiRw {
    /// Reads a 16-bit register at (`phy`, `reg`).
    fn smi_read(&mut self, phy: u8, reg: u8) -> Result<u16, BusError>;

    /// Writes a 16-bit register at (`phy`, `reg`).
    fn smi_write(&mut self, phy: u8, reg: u8, value: u16)
        -> Result<(), BusError>;
}

/// Register transport over SMI.
///
/// The switch decodes the MDIO PHY and register address fields as one 8-bit
/// register address: the upper three address bits travel in the PHY field,
/// the lower five in the register field, and PHY address bit 4 selects a
/// read.  Only the low byte of the 16-bit data field is meaningful.
pub struct Smi<M> {
    mdio: M,
}

/// PHY address bit that turns an SMI access into a register read
const SMI_READ: u8 = 0x10;

/// Splits a switch register address into its (PHY, register) SMI fields
const fn smi_address(addr: u8) -> (u8, u8) {
    ((addr & 0xE0) >> 5, addr & 0x1F)
}

impl<M: SmiRw> Smi<M> {
    pub fn new(mdio: M) -> Self {
        Self { mdio }
    }

    pub fn release(self) -> M {
        self.mdio
    }
}

impl<M: SmiRw> RegisterBus for Smi<M> {
    fn write(&mut self, cmd: u8, addr: u8, data: u8) -> Result<(), BusError> {
        if cmd != SPI_CMD_WRITE {
            return Err(BusError::Nack);
        }
        let (phy, reg) = smi_address(addr);
        self.mdio.smi_write(phy, reg, u16::from(data))
    }

    fn read(&mut self, cmd: u8, addr: u8) -> Result<u8, BusError> {
        if cmd != SPI_CMD_READ {
            return Err(BusError::Nack);
        }
        let (phy, reg) = smi_address(addr);
        let v = self.mdio.smi_read(phy | SMI_READ, reg)?;
        Ok(v as u8)
    }
}
