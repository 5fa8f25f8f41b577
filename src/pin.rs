use crate::{Direction, Error, PortMutex, RegisterMap};
use core::marker::PhantomData;
use embedded_hal::digital as hal_digital;
use embedded_hal::i2c::I2c;

/// Representation of a single expander pin.
///
/// `Pin` is not constructed directly, this type is created by instanciating a
/// [`Mcp23017`][crate::Mcp23017] and then getting access to all its pins using the `.split()`
/// method.
pub struct Pin<'a, MODE, MUTEX> {
    pin: u8,
    map: &'a MUTEX,
    _m: PhantomData<MODE>,
}

impl<'a, MODE, MUTEX, I2C> Pin<'a, MODE, MUTEX>
where
    I2C: I2c,
    MUTEX: PortMutex<Inner = RegisterMap<I2C>>,
{
    pub(crate) fn new(pin: u8, map: &'a MUTEX) -> Self {
        assert!(pin < crate::PIN_COUNT);
        Self {
            pin,
            map,
            _m: PhantomData,
        }
    }

    /// Pin number in 0..=15.
    pub fn pin_number(&self) -> u8 {
        self.pin
    }

    fn into_mode<NEW>(self) -> Pin<'a, NEW, MUTEX> {
        Pin {
            pin: self.pin,
            map: self.map,
            _m: PhantomData,
        }
    }

    pub fn into_input(self) -> Result<Pin<'a, crate::mode::Input, MUTEX>, Error<I2C::Error>> {
        self.map.lock(|map| map.set_pin_direction(self.pin, Direction::Input))?;
        Ok(self.into_mode())
    }

    pub fn into_output(self) -> Result<Pin<'a, crate::mode::Output, MUTEX>, Error<I2C::Error>> {
        self.map.lock(|map| map.set_pin_direction(self.pin, Direction::Output))?;
        Ok(self.into_mode())
    }

    /// Set the output level before switching the direction, so the pin never glitches low.
    pub fn into_output_high(
        self,
    ) -> Result<Pin<'a, crate::mode::Output, MUTEX>, Error<I2C::Error>> {
        self.map.lock(|map| {
            map.write_pin(self.pin, true)?;
            map.set_pin_direction(self.pin, Direction::Output)
        })?;
        Ok(self.into_mode())
    }
}

impl<'a, MODE: crate::mode::HasInput, MUTEX, I2C> Pin<'a, MODE, MUTEX>
where
    I2C: I2c,
    MUTEX: PortMutex<Inner = RegisterMap<I2C>>,
{
    pub fn is_high(&self) -> Result<bool, Error<I2C::Error>> {
        self.map.lock(|map| map.read_pin(self.pin))
    }

    pub fn is_low(&self) -> Result<bool, Error<I2C::Error>> {
        self.is_high().map(|b| !b)
    }

    /// Enable or disable the internal 100k pull-up.
    pub fn enable_pull_up(&mut self, enable: bool) -> Result<(), Error<I2C::Error>> {
        self.map.lock(|map| map.set_pin_pullup(self.pin, enable))
    }

    /// Report the inverted logic level from `is_high()`/`is_low()`.
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), Error<I2C::Error>> {
        self.map.lock(|map| map.invert_pin(self.pin, inverted))
    }

    /// Enable or disable interrupt-on-change for this pin.
    pub fn enable_interrupt(&mut self, enable: bool) -> Result<(), Error<I2C::Error>> {
        self.map.lock(|map| map.set_interrupt_on_pin(self.pin, enable))
    }
}

impl<'a, MODE, MUTEX, I2C> hal_digital::ErrorType for Pin<'a, MODE, MUTEX>
where
    I2C: I2c,
    MUTEX: PortMutex<Inner = RegisterMap<I2C>>,
{
    type Error = Error<I2C::Error>;
}

impl<'a, MODE: crate::mode::HasInput, MUTEX, I2C> hal_digital::InputPin for Pin<'a, MODE, MUTEX>
where
    I2C: I2c,
    MUTEX: PortMutex<Inner = RegisterMap<I2C>>,
{
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Pin::is_high(self)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Pin::is_low(self)
    }
}

impl<'a, MODE: crate::mode::HasOutput, MUTEX, I2C> Pin<'a, MODE, MUTEX>
where
    I2C: I2c,
    MUTEX: PortMutex<Inner = RegisterMap<I2C>>,
{
    pub fn set_high(&mut self) -> Result<(), Error<I2C::Error>> {
        self.set_state(true)
    }

    pub fn set_low(&mut self) -> Result<(), Error<I2C::Error>> {
        self.set_state(false)
    }

    pub fn set_state(&mut self, high: bool) -> Result<(), Error<I2C::Error>> {
        self.map.lock(|map| map.write_pin(self.pin, high))
    }

    /// Read back the output latch of this pin.
    pub fn is_set_high(&self) -> Result<bool, Error<I2C::Error>> {
        self.map.lock(|map| map.read_pin_output_latch(self.pin))
    }

    pub fn is_set_low(&self) -> Result<bool, Error<I2C::Error>> {
        self.is_set_high().map(|b| !b)
    }

    pub fn toggle(&mut self) -> Result<(), Error<I2C::Error>> {
        self.map.lock(|map| {
            let high = map.read_pin_output_latch(self.pin)?;
            map.write_pin(self.pin, !high)
        })
    }
}

impl<'a, MODE: crate::mode::HasOutput, MUTEX, I2C> hal_digital::OutputPin
    for Pin<'a, MODE, MUTEX>
where
    I2C: I2c,
    MUTEX: PortMutex<Inner = RegisterMap<I2C>>,
{
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Pin::set_low(self)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Pin::set_high(self)
    }
}

impl<'a, MODE: crate::mode::HasOutput, MUTEX, I2C> hal_digital::StatefulOutputPin
    for Pin<'a, MODE, MUTEX>
where
    I2C: I2c,
    MUTEX: PortMutex<Inner = RegisterMap<I2C>>,
{
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Pin::is_set_high(self)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Pin::is_set_low(self)
    }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        Pin::toggle(self)
    }
}
