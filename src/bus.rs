use embedded_hal::i2c::I2c;

/// Single-byte register access on top of an [`I2c`] bus.
///
/// A register read is a write of the register address followed by a repeated-start read of one
/// byte; a register write is a two-byte write of address and value.
pub(crate) trait I2cExt {
    type Error;

    fn write_reg<R: Into<u8>>(&mut self, addr: u8, reg: R, value: u8) -> Result<(), Self::Error>;
    fn read_reg<R: Into<u8>>(&mut self, addr: u8, reg: R) -> Result<u8, Self::Error>;
}

impl<I2C: I2c> I2cExt for I2C {
    type Error = I2C::Error;

    fn write_reg<R: Into<u8>>(&mut self, addr: u8, reg: R, value: u8) -> Result<(), Self::Error> {
        let reg = reg.into();
        #[cfg(feature = "defmt")]
        defmt::trace!("mcp23017 {=u8:#x}: write {=u8:#x} <- {=u8:#x}", addr, reg, value);
        self.write(addr, &[reg, value])?;
        Ok(())
    }

    fn read_reg<R: Into<u8>>(&mut self, addr: u8, reg: R) -> Result<u8, Self::Error> {
        let reg = reg.into();
        let mut buf = [0x00];
        self.write_read(addr, &[reg], &mut buf)?;
        #[cfg(feature = "defmt")]
        defmt::trace!("mcp23017 {=u8:#x}: read {=u8:#x} -> {=u8:#x}", addr, reg, buf[0]);
        Ok(buf[0])
    }
}
