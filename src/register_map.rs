//! Pin- and port-level access to the `MCP23017` registers
//!
//! Datasheet: https://ww1.microchip.com/downloads/en/devicedoc/20001952c.pdf
//!
//! The MCP23017 offers two eight-bit GPIO ports.  Pins 0..=7 live in port A, pins 8..=15 in
//! port B; pin `n` of port B is bit `n - 8` of the B registers.
//!
//! [`RegisterMap`] keeps a shadow copy of the registers it writes.  Single-pin writes are
//! read-modify-write operations on that copy, they do not read the chip first.  If something
//! else changes the chip state behind the driver's back, call [`RegisterMap::refresh()`].
use crate::{bits, Config, Direction, Error, I2cExt, InterruptPolarity, IoCon, Port, Register};
use embedded_hal::i2c::I2c;

/// Last known values of the registers of one port.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PortCache {
    /// IODIR
    pub direction: u8,
    /// GPIO
    pub value: u8,
    /// GPPU
    pub pullup: u8,
    /// IPOL
    pub polarity: u8,
    /// GPINTEN
    pub interrupt_enable: u8,
    /// OLAT
    pub output_latch: u8,
}

/// Shadow copy of all tracked registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterCache {
    pub ports: [PortCache; 2],
    pub iocon: IoCon,
}

impl RegisterCache {
    fn new(iocon: IoCon) -> Self {
        Self {
            ports: [PortCache::default(); 2],
            iocon,
        }
    }

    pub fn port(&self, port: Port) -> &PortCache {
        &self.ports[usize::from(port)]
    }

    fn port_mut(&mut self, port: Port) -> &mut PortCache {
        &mut self.ports[usize::from(port)]
    }
}

/// Registers which have a slot in [`PortCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cached {
    Direction,
    Value,
    Pullup,
    Polarity,
    InterruptEnable,
    OutputLatch,
}

impl Cached {
    fn register(self, port: Port) -> Register {
        match self {
            Cached::Direction => Register::iodir(port),
            Cached::Value => Register::gpio(port),
            Cached::Pullup => Register::gppu(port),
            Cached::Polarity => Register::ipol(port),
            Cached::InterruptEnable => Register::gpinten(port),
            Cached::OutputLatch => Register::olat(port),
        }
    }
}

impl PortCache {
    fn slot(&mut self, reg: Cached) -> &mut u8 {
        match reg {
            Cached::Direction => &mut self.direction,
            Cached::Value => &mut self.value,
            Cached::Pullup => &mut self.pullup,
            Cached::Polarity => &mut self.polarity,
            Cached::InterruptEnable => &mut self.interrupt_enable,
            Cached::OutputLatch => &mut self.output_latch,
        }
    }
}

/// Order in which the cache is seeded from the chip, each for port A then port B.
const SEED_ORDER: [Cached; 5] = [
    Cached::Direction,
    Cached::Value,
    Cached::OutputLatch,
    Cached::Pullup,
    Cached::Polarity,
];

const IOCON_MIRROR_BIT: u8 = 6;
const IOCON_INTPOL_BIT: u8 = 1;

/// `MCP23017` register map with a cached copy of the chip state.
///
/// All operations are blocking and issue one bus transaction unless documented otherwise.  The
/// register map is not synchronized; to share it, wrap it in a [`PortMutex`][crate::PortMutex]
/// (see [`Mcp23017`][crate::Mcp23017]).
pub struct RegisterMap<I2C> {
    i2c: I2C,
    addr: u8,
    cache: RegisterCache,
}

impl<I2C: I2c> RegisterMap<I2C> {
    /// Create a register map for the chip at `address` with the default IOCON value (0x22).
    pub fn new(i2c: I2C, address: u8) -> Result<Self, Error<I2C::Error>> {
        Self::with_config(i2c, Config::new().address(address))
    }

    /// Create a register map for a chip with all address pins tied low (0x20).
    pub fn default_address(i2c: I2C) -> Result<Self, Error<I2C::Error>> {
        Self::with_config(i2c, Config::default())
    }

    /// Create a register map and initialize the chip.
    ///
    /// This writes `config.iocon` to IOCON and then seeds the cache by reading IODIR, GPIO, OLAT,
    /// GPPU and IPOL of both ports.  GPINTEN is assumed to be 0x00.
    ///
    /// If one of these transactions fails, the bus is dropped together with the half-initialized
    /// map.  To keep the bus in that case, pass a `&mut` reference to it; `embedded-hal`
    /// implements [`I2c`] for `&mut I2C`.
    pub fn with_config(i2c: I2C, config: Config) -> Result<Self, Error<I2C::Error>> {
        config.validate()?;
        let mut map = Self {
            i2c,
            addr: config.address,
            cache: RegisterCache::new(config.iocon),
        };
        map.write(Register::IOCON, config.iocon.bits())?;
        map.refresh()?;
        #[cfg(feature = "defmt")]
        defmt::debug!("mcp23017 {=u8:#x}: initialized, {}", map.addr, map.cache);
        Ok(map)
    }

    /// Re-read IODIR, GPIO, OLAT, GPPU and IPOL of both ports into the cache.
    pub fn refresh(&mut self) -> Result<(), Error<I2C::Error>> {
        for reg in SEED_ORDER {
            for port in [Port::A, Port::B] {
                self.read_cached(port, reg)?;
            }
        }
        Ok(())
    }

    /// Set the direction of a single pin.
    pub fn set_pin_direction(
        &mut self,
        pin: u8,
        direction: Direction,
    ) -> Result<(), Error<I2C::Error>> {
        self.write_cached_bit(pin, Cached::Direction, direction as u8)
    }

    /// Set the direction of all pins of a port: 1=input; 0=output.
    pub fn set_port_direction(&mut self, port: Port, value: u8) -> Result<(), Error<I2C::Error>> {
        self.write_cached(port, Cached::Direction, value)
    }

    /// Enable or disable the internal 100k pull-up of a single pin.
    pub fn set_pin_pullup(&mut self, pin: u8, enable: bool) -> Result<(), Error<I2C::Error>> {
        self.write_cached_bit(pin, Cached::Pullup, enable as u8)
    }

    /// Read back whether the pull-up of a pin is enabled.
    pub fn get_pin_pullup(&mut self, pin: u8) -> Result<bool, Error<I2C::Error>> {
        self.read_cached_bit(pin, Cached::Pullup)
    }

    pub fn set_port_pullups(&mut self, port: Port, value: u8) -> Result<(), Error<I2C::Error>> {
        self.write_cached(port, Cached::Pullup, value)
    }

    pub fn get_port_pullups(&mut self, port: Port) -> Result<u8, Error<I2C::Error>> {
        self.read_cached(port, Cached::Pullup)
    }

    /// Drive a single pin.  Only has an effect on the pin if it is configured as an output.
    pub fn write_pin(&mut self, pin: u8, high: bool) -> Result<(), Error<I2C::Error>> {
        self.write_cached_bit(pin, Cached::Value, high as u8)
    }

    pub fn write_port(&mut self, port: Port, value: u8) -> Result<(), Error<I2C::Error>> {
        self.write_cached(port, Cached::Value, value)
    }

    /// Read the logic level of a single pin, after polarity inversion.
    pub fn read_pin(&mut self, pin: u8) -> Result<bool, Error<I2C::Error>> {
        self.read_cached_bit(pin, Cached::Value)
    }

    pub fn read_port(&mut self, port: Port) -> Result<u8, Error<I2C::Error>> {
        self.read_cached(port, Cached::Value)
    }

    /// Invert the input polarity of a single pin.
    pub fn invert_pin(&mut self, pin: u8, inverted: bool) -> Result<(), Error<I2C::Error>> {
        self.write_cached_bit(pin, Cached::Polarity, inverted as u8)
    }

    pub fn invert_port(&mut self, port: Port, value: u8) -> Result<(), Error<I2C::Error>> {
        self.write_cached(port, Cached::Polarity, value)
    }

    /// Internally connect the INTA and INTB pins (IOCON.MIRROR).
    pub fn mirror_interrupts(&mut self, mirror: bool) -> Result<(), Error<I2C::Error>> {
        self.write_iocon_bit(IOCON_MIRROR_BIT, mirror as u8)
    }

    /// Set the polarity of the INT output pins (IOCON.INTPOL).
    pub fn set_interrupt_polarity(
        &mut self,
        polarity: InterruptPolarity,
    ) -> Result<(), Error<I2C::Error>> {
        self.write_iocon_bit(IOCON_INTPOL_BIT, polarity as u8)
    }

    /// Write INTCON: 1=interrupt when the pin differs from DEFVAL; 0=interrupt on any change.
    pub fn set_interrupt_type(&mut self, port: Port, value: u8) -> Result<(), Error<I2C::Error>> {
        self.write(Register::intcon(port), value)
    }

    /// Write DEFVAL, the compare value for pins configured by [`set_interrupt_type()`].
    ///
    /// [`set_interrupt_type()`]: RegisterMap::set_interrupt_type
    pub fn set_interrupt_defaults(
        &mut self,
        port: Port,
        value: u8,
    ) -> Result<(), Error<I2C::Error>> {
        self.write(Register::defval(port), value)
    }

    pub fn set_interrupt_on_port(
        &mut self,
        port: Port,
        value: u8,
    ) -> Result<(), Error<I2C::Error>> {
        self.write_cached(port, Cached::InterruptEnable, value)
    }

    pub fn set_interrupt_on_pin(&mut self, pin: u8, enable: bool) -> Result<(), Error<I2C::Error>> {
        self.write_cached_bit(pin, Cached::InterruptEnable, enable as u8)
    }

    /// Read INTF: which pins of the port caused the pending interrupt.
    pub fn read_interrupt_status(&mut self, port: Port) -> Result<u8, Error<I2C::Error>> {
        self.read(Register::intf(port))
    }

    /// Read INTCAP: the port value at the time of the last interrupt.
    ///
    /// This clears the interrupt condition of the port.
    pub fn read_interrupt_capture(&mut self, port: Port) -> Result<u8, Error<I2C::Error>> {
        self.read(Register::intcap(port))
    }

    pub fn read_pin_output_latch(&mut self, pin: u8) -> Result<bool, Error<I2C::Error>> {
        self.read_cached_bit(pin, Cached::OutputLatch)
    }

    pub fn read_port_output_latches(&mut self, port: Port) -> Result<u8, Error<I2C::Error>> {
        self.read_cached(port, Cached::OutputLatch)
    }

    /// Clear pending interrupts on both ports by reading INTCAPA and INTCAPB.
    ///
    /// Returns the captured values as `(port_a, port_b)`.
    pub fn reset_interrupts(&mut self) -> Result<(u8, u8), Error<I2C::Error>> {
        let a = self.read_interrupt_capture(Port::A)?;
        let b = self.read_interrupt_capture(Port::B)?;
        Ok((a, b))
    }

    fn write(&mut self, reg: Register, value: u8) -> Result<(), Error<I2C::Error>> {
        self.i2c.write_reg(self.addr, reg, value).map_err(Error::Bus)
    }

    fn read(&mut self, reg: Register) -> Result<u8, Error<I2C::Error>> {
        self.i2c.read_reg(self.addr, reg).map_err(Error::Bus)
    }

    fn write_cached(
        &mut self,
        port: Port,
        reg: Cached,
        value: u8,
    ) -> Result<(), Error<I2C::Error>> {
        self.write(reg.register(port), value)?;
        *self.cache.port_mut(port).slot(reg) = value;
        Ok(())
    }

    fn read_cached(&mut self, port: Port, reg: Cached) -> Result<u8, Error<I2C::Error>> {
        let value = self.read(reg.register(port))?;
        *self.cache.port_mut(port).slot(reg) = value;
        Ok(value)
    }

    fn write_cached_bit(
        &mut self,
        pin: u8,
        reg: Cached,
        bit_value: u8,
    ) -> Result<(), Error<I2C::Error>> {
        let (port, bit) = Port::of_pin(pin)?;
        let current = *self.cache.port_mut(port).slot(reg);
        let value = bits::update_byte(current, bit, bit_value)?;
        self.write_cached(port, reg, value)
    }

    fn read_cached_bit(&mut self, pin: u8, reg: Cached) -> Result<bool, Error<I2C::Error>> {
        let (port, bit) = Port::of_pin(pin)?;
        let value = self.read_cached(port, reg)?;
        Ok(bits::check_bit(value, bit)? == 1)
    }

    fn write_iocon_bit(&mut self, bit: u8, bit_value: u8) -> Result<(), Error<I2C::Error>> {
        let value = bits::update_byte(self.cache.iocon.bits(), bit, bit_value)?;
        self.write(Register::IOCON, value)?;
        self.cache.iocon = IoCon::from_bits_retain(value);
        Ok(())
    }
}

impl<I2C> RegisterMap<I2C> {
    /// I2C address of the chip.
    pub fn address(&self) -> u8 {
        self.addr
    }

    /// Copy of the cached register values.  No bus traffic.
    pub fn cache(&self) -> RegisterCache {
        self.cache
    }

    /// Give back the bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}
