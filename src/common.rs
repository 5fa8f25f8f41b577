use crate::InvalidArgument;

/// Number of GPIO pins on the chip.
pub const PIN_COUNT: u8 = 16;

/// One of the two eight-bit register groups of the chip.
///
/// Port A covers pins 0..=7, port B covers pins 8..=15.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    A,
    B,
}

impl Port {
    /// Split a pin number (0..=15) into its port and the bit offset inside that port.
    pub fn of_pin(pin: u8) -> Result<(Port, u8), InvalidArgument> {
        match pin {
            0..=7 => Ok((Port::A, pin)),
            8..=15 => Ok((Port::B, pin - 8)),
            _ => Err(InvalidArgument::Pin(pin)),
        }
    }
}

impl TryFrom<u8> for Port {
    type Error = InvalidArgument;

    fn try_from(port: u8) -> Result<Self, Self::Error> {
        match port {
            0 => Ok(Port::A),
            1 => Ok(Port::B),
            _ => Err(InvalidArgument::Port(port)),
        }
    }
}

impl From<Port> for usize {
    fn from(port: Port) -> usize {
        port as usize
    }
}

/// Pin direction as stored in the IODIR registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Output = 0,
    Input = 1,
}

/// Polarity of the INTA/INTB output pins (IOCON.INTPOL).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptPolarity {
    ActiveLow = 0,
    ActiveHigh = 1,
}

/// Pin Modes
pub mod mode {
    /// Trait for pin-modes which can be used to set a logic level.
    pub trait HasOutput {}
    /// Trait for pin-modes which can be used to read a logic level.
    pub trait HasInput {}

    /// Pin configured as an input.
    pub struct Input;
    impl HasInput for Input {}

    /// Pin configured as an output.
    pub struct Output;
    impl HasOutput for Output {}
}
