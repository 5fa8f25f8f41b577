//! In-memory stand-in for the chip, for tests which care about register contents rather than
//! the exact sequence of transactions.
use crate::Register;
use embedded_hal::i2c::{ErrorType, I2c, Operation};

pub(crate) struct RegisterFile {
    regs: [u8; 0x16],
    pointer: usize,
}

impl RegisterFile {
    /// Power-on reset state: all pins inputs, everything else cleared.
    pub(crate) fn new() -> Self {
        let mut regs = [0x00; 0x16];
        regs[u8::from(Register::IODIRA) as usize] = 0xff;
        regs[u8::from(Register::IODIRB) as usize] = 0xff;
        Self { regs, pointer: 0 }
    }

    pub(crate) fn get(&self, reg: Register) -> u8 {
        self.regs[u8::from(reg) as usize]
    }
}

impl ErrorType for RegisterFile {
    type Error = core::convert::Infallible;
}

impl I2c for RegisterFile {
    fn transaction(
        &mut self,
        _address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        for op in operations {
            match op {
                Operation::Write(bytes) => {
                    if let Some((reg, data)) = bytes.split_first() {
                        self.pointer = *reg as usize;
                        for b in data {
                            self.regs[self.pointer % self.regs.len()] = *b;
                            self.pointer += 1;
                        }
                    }
                }
                Operation::Read(buf) => {
                    for b in buf.iter_mut() {
                        *b = self.regs[self.pointer % self.regs.len()];
                        self.pointer += 1;
                    }
                }
            }
        }
        Ok(())
    }
}
