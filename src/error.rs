use core::fmt;

/// An argument was rejected before any bus traffic happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InvalidArgument {
    /// Pin number outside of 0..=15.
    Pin(u8),
    /// Port selector other than 0 (A) or 1 (B).
    Port(u8),
    /// Bit index outside of 0..=7.
    Bit(u8),
    /// Single-bit value other than 0 or 1.
    BitValue(u8),
    /// Device address does not fit into 7 bits.
    Address(u8),
    /// IOCON.BANK was requested; the register table only describes the BANK=0 layout.
    Bank,
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidArgument::Pin(p) => write!(f, "pin {} out of range 0..=15", p),
            InvalidArgument::Port(p) => write!(f, "port selector {} is neither 0 nor 1", p),
            InvalidArgument::Bit(b) => write!(f, "bit index {} out of range 0..=7", b),
            InvalidArgument::BitValue(v) => write!(f, "bit value {} is neither 0 nor 1", v),
            InvalidArgument::Address(a) => write!(f, "device address {:#04x} is not 7-bit", a),
            InvalidArgument::Bank => f.write_str("IOCON.BANK=1 is not supported"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidArgument {}

/// Errors returned by the register map.
///
/// Bus errors are passed through unmodified, no retries happen at this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The I2C transaction failed.
    Bus(E),
    InvalidArgument(InvalidArgument),
}

impl<E> From<InvalidArgument> for Error<E> {
    fn from(e: InvalidArgument) -> Self {
        Error::InvalidArgument(e)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Bus(e) => write!(f, "I2C bus error: {:?}", e),
            Error::InvalidArgument(e) => write!(f, "invalid argument: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl<E: fmt::Debug> std::error::Error for Error<E> {}

impl<E: fmt::Debug> embedded_hal::digital::Error for Error<E> {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}
