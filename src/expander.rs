//! Shared access to one `MCP23017` and its pins
//!
//! [`Mcp23017`] puts a [`RegisterMap`] behind a [`PortMutex`] so that the sixteen [`Pin`]s
//! handed out by [`Mcp23017::split()`] can all use the same chip.
use crate::{Error, Pin, PortMutex, RegisterMap};
use embedded_hal::i2c::I2c;

/// `MCP23017` "16-Bit I/O Expander with Serial Interface"
pub struct Mcp23017<M>(M);

impl<I2C: I2c> Mcp23017<core::cell::RefCell<RegisterMap<I2C>>> {
    /// Initialize the chip at `address` and share it within a single execution context.
    pub fn new(i2c: I2C, address: u8) -> Result<Self, Error<I2C::Error>> {
        Ok(Self::with_mutex(RegisterMap::new(i2c, address)?))
    }
}

impl<I2C, M> Mcp23017<M>
where
    I2C: I2c,
    M: PortMutex<Inner = RegisterMap<I2C>>,
{
    pub fn with_mutex(map: RegisterMap<I2C>) -> Self {
        Self(PortMutex::create(map))
    }

    /// Run `f` with exclusive access to the register map.
    pub fn lock<R, F: FnOnce(&mut RegisterMap<I2C>) -> R>(&self, f: F) -> R {
        self.0.lock(f)
    }

    pub fn split(&mut self) -> Parts<'_, M> {
        Parts {
            gpa0: Pin::new(0, &self.0),
            gpa1: Pin::new(1, &self.0),
            gpa2: Pin::new(2, &self.0),
            gpa3: Pin::new(3, &self.0),
            gpa4: Pin::new(4, &self.0),
            gpa5: Pin::new(5, &self.0),
            gpa6: Pin::new(6, &self.0),
            gpa7: Pin::new(7, &self.0),
            gpb0: Pin::new(8, &self.0),
            gpb1: Pin::new(9, &self.0),
            gpb2: Pin::new(10, &self.0),
            gpb3: Pin::new(11, &self.0),
            gpb4: Pin::new(12, &self.0),
            gpb5: Pin::new(13, &self.0),
            gpb6: Pin::new(14, &self.0),
            gpb7: Pin::new(15, &self.0),
        }
    }

    pub fn into_inner(self) -> M {
        self.0
    }
}

pub struct Parts<'a, M> {
    pub gpa0: Pin<'a, crate::mode::Input, M>,
    pub gpa1: Pin<'a, crate::mode::Input, M>,
    pub gpa2: Pin<'a, crate::mode::Input, M>,
    pub gpa3: Pin<'a, crate::mode::Input, M>,
    pub gpa4: Pin<'a, crate::mode::Input, M>,
    pub gpa5: Pin<'a, crate::mode::Input, M>,
    pub gpa6: Pin<'a, crate::mode::Input, M>,
    pub gpa7: Pin<'a, crate::mode::Input, M>,
    pub gpb0: Pin<'a, crate::mode::Input, M>,
    pub gpb1: Pin<'a, crate::mode::Input, M>,
    pub gpb2: Pin<'a, crate::mode::Input, M>,
    pub gpb3: Pin<'a, crate::mode::Input, M>,
    pub gpb4: Pin<'a, crate::mode::Input, M>,
    pub gpb5: Pin<'a, crate::mode::Input, M>,
    pub gpb6: Pin<'a, crate::mode::Input, M>,
    pub gpb7: Pin<'a, crate::mode::Input, M>,
}

#[cfg(test)]
mod tests {
    use crate::fake::RegisterFile;
    use crate::{Port, Register, RegisterMap};
    use embedded_hal::digital::{InputPin, OutputPin, StatefulOutputPin};
    use embedded_hal_mock::eh1::i2c as mock_i2c;

    fn init(addr: u8) -> Vec<mock_i2c::Transaction> {
        let mut t = vec![mock_i2c::Transaction::write(addr, vec![0x0a, 0x22])];
        for (reg, value) in [
            (0x00, 0xff),
            (0x01, 0xff),
            (0x12, 0x00),
            (0x13, 0x00),
            (0x14, 0x00),
            (0x15, 0x00),
            (0x0c, 0x00),
            (0x0d, 0x00),
            (0x02, 0x00),
            (0x03, 0x00),
        ] {
            t.push(mock_i2c::Transaction::write_read(addr, vec![reg], vec![value]));
        }
        t
    }

    #[test]
    fn mcp23017() {
        let mut expectations = init(0x22);
        expectations.extend([
            // pin setup gpa0
            mock_i2c::Transaction::write(0x22, vec![0x00, 0xfe]),
            // pin setup gpa7
            mock_i2c::Transaction::write(0x22, vec![0x00, 0x7e]),
            mock_i2c::Transaction::write(0x22, vec![0x00, 0xfe]),
            // pin setup gpb0, high before output
            mock_i2c::Transaction::write(0x22, vec![0x13, 0x01]),
            mock_i2c::Transaction::write(0x22, vec![0x01, 0xfe]),
            // pin setup gpb7
            mock_i2c::Transaction::write(0x22, vec![0x0d, 0x80]),
            mock_i2c::Transaction::write(0x22, vec![0x03, 0x80]),
            // output gpa0, gpb0
            mock_i2c::Transaction::write(0x22, vec![0x12, 0x01]),
            mock_i2c::Transaction::write(0x22, vec![0x12, 0x00]),
            mock_i2c::Transaction::write(0x22, vec![0x13, 0x00]),
            mock_i2c::Transaction::write_read(0x22, vec![0x15], vec![0x00]),
            mock_i2c::Transaction::write_read(0x22, vec![0x15], vec![0x00]),
            mock_i2c::Transaction::write(0x22, vec![0x13, 0x01]),
            // input gpa7, gpb7
            mock_i2c::Transaction::write_read(0x22, vec![0x12], vec![0x80]),
            mock_i2c::Transaction::write_read(0x22, vec![0x12], vec![0x7f]),
            mock_i2c::Transaction::write_read(0x22, vec![0x13], vec![0x80]),
            mock_i2c::Transaction::write_read(0x22, vec![0x13], vec![0x7f]),
        ]);
        let mut bus = mock_i2c::Mock::new(&expectations);

        let mut mcp = super::Mcp23017::new(bus.clone(), 0x22).unwrap();
        let mcp_pins = mcp.split();

        let mut gpa0 = mcp_pins.gpa0.into_output().unwrap();
        let gpa7 = mcp_pins.gpa7.into_output().unwrap();
        let mut gpa7 = gpa7.into_input().unwrap();

        let mut gpb0 = mcp_pins.gpb0.into_output_high().unwrap();
        let mut gpb7 = mcp_pins.gpb7;
        gpb7.enable_pull_up(true).unwrap();
        gpb7.set_inverted(true).unwrap();

        // output high and low
        gpa0.set_high().unwrap();
        gpa0.set_low().unwrap();
        OutputPin::set_low(&mut gpb0).unwrap();
        assert!(StatefulOutputPin::is_set_low(&mut gpb0).unwrap());
        gpb0.toggle().unwrap();

        // input high and low
        assert!(gpa7.is_high().unwrap());
        assert!(InputPin::is_low(&mut gpa7).unwrap());
        assert!(gpb7.is_high().unwrap());
        assert!(gpb7.is_low().unwrap());

        bus.done();
    }

    #[test]
    fn interrupt_setup_through_pins() {
        let mut expectations = init(0x20);
        expectations.extend([
            mock_i2c::Transaction::write(0x20, vec![0x04, 0x08]),
            mock_i2c::Transaction::write(0x20, vec![0x05, 0x04]),
            mock_i2c::Transaction::write_read(0x20, vec![0x0e], vec![0x08]),
            mock_i2c::Transaction::write_read(0x20, vec![0x10], vec![0x08]),
            mock_i2c::Transaction::write_read(0x20, vec![0x11], vec![0x00]),
        ]);
        let mut bus = mock_i2c::Mock::new(&expectations);

        let mut mcp = super::Mcp23017::new(bus.clone(), 0x20).unwrap();
        let mut parts = mcp.split();
        parts.gpa3.enable_interrupt(true).unwrap();
        parts.gpb2.enable_interrupt(true).unwrap();
        drop(parts);

        mcp.lock(|map| {
            assert_eq!(map.read_interrupt_status(Port::A).unwrap(), 0x08);
            assert_eq!(map.reset_interrupts().unwrap(), (0x08, 0x00));
        });

        bus.done();
    }

    #[test]
    fn shared_between_threads() {
        let map = RegisterMap::default_address(RegisterFile::new()).unwrap();
        let mut mcp: super::Mcp23017<std::sync::Mutex<_>> = super::Mcp23017::with_mutex(map);
        let parts = mcp.split();

        std::thread::scope(|s| {
            let pins = [
                parts.gpa0, parts.gpa1, parts.gpa2, parts.gpa3, parts.gpa4, parts.gpa5,
                parts.gpa6, parts.gpa7,
            ];
            for pin in pins {
                s.spawn(move || {
                    let mut pin = pin.into_output().unwrap();
                    for _ in 0..50 {
                        pin.set_high().unwrap();
                        pin.set_low().unwrap();
                    }
                    pin.set_high().unwrap();
                });
            }
        });

        let regs = mcp
            .into_inner()
            .into_inner()
            .unwrap()
            .release();
        assert_eq!(regs.get(Register::IODIRA), 0x00);
        assert_eq!(regs.get(Register::IODIRB), 0xff);
        assert_eq!(regs.get(Register::GPIOA), 0xff);
    }

    #[cfg(feature = "critical-section")]
    #[test]
    fn critical_section_mutex() {
        use core::cell::RefCell;

        let map = RegisterMap::default_address(RegisterFile::new()).unwrap();
        let mut mcp: super::Mcp23017<critical_section::Mutex<RefCell<_>>> =
            super::Mcp23017::with_mutex(map);
        let mut gpb3 = mcp.split().gpb3.into_output().unwrap();
        gpb3.set_high().unwrap();
        assert_eq!(mcp.lock(|map| map.cache().port(Port::B).value), 0x08);
    }
}
