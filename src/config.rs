use crate::InvalidArgument;

/// Base address of the chip, with A2..A0 tied low.
pub const DEFAULT_ADDRESS: u8 = 0x20;

bitflags::bitflags! {
    /// The IOCON configuration byte, shared by both ports.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct IoCon: u8 {
        /// Register layout: 0=registers of both ports interleaved (the only supported layout);
        /// 1=registers separated per port
        const BANK = 1 << 7;
        /// INTA and INTB are logically ORed; an interrupt on either port activates both pins
        const MIRROR = 1 << 6;
        /// Disables the incrementing function of the address pointer
        const SEQOP = 1 << 5;
        /// Disables slew rate control on SDA
        const DISSLW = 1 << 4;
        /// Hardware address enable, no effect on the I2C variant
        const HAEN = 1 << 3;
        /// Interrupt pins are open-drain outputs (overrides INTPOL)
        const ODR = 1 << 2;
        /// Interrupt pins are active-high
        const INTPOL = 1 << 1;
    }
}

impl Default for IoCon {
    /// 0x22: sequential addressing disabled, interrupts active-high.
    fn default() -> Self {
        IoCon::SEQOP | IoCon::INTPOL
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for IoCon {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "IoCon({=u8:#x})", self.bits())
    }
}

/// Construction parameters of a [`RegisterMap`][crate::RegisterMap].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub address: u8,
    /// Written to IOCON once during construction.
    pub iocon: IoCon,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            iocon: IoCon::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Derive the address from the levels of the A0..A2 strap pins.
    pub fn address_pins(self, a0: bool, a1: bool, a2: bool) -> Self {
        self.address(DEFAULT_ADDRESS | ((a2 as u8) << 2) | ((a1 as u8) << 1) | (a0 as u8))
    }

    pub fn iocon(mut self, iocon: IoCon) -> Self {
        self.iocon = iocon;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), InvalidArgument> {
        if self.address > 0x7f {
            return Err(InvalidArgument::Address(self.address));
        }
        if self.iocon.contains(IoCon::BANK) {
            return Err(InvalidArgument::Bank);
        }
        Ok(())
    }
}
