//! Register address table of the `MCP23017`
//!
//! Datasheet: https://ww1.microchip.com/downloads/en/devicedoc/20001952c.pdf
//!
//! N.B.: These values are for BANK=0, which is the reset state of the chip (and this driver
//! refuses to change it).
//!
//! For all registers, the reset value is 0x00, except for IODIR{A,B} which are 0xFF (making all
//! pins inputs) at reset.
use crate::Port;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// IODIR: input/output direction: 0=output; 1=input
    IODIRA = 0x00,
    IODIRB = 0x01,
    /// IPOL: input polarity: 0=register values match input pins; 1=opposite
    IPOLA = 0x02,
    IPOLB = 0x03,
    /// GPINTEN: interrupt-on-change: 0=disable; 1=enable
    GPINTENA = 0x04,
    GPINTENB = 0x05,
    /// DEFVAL: default values for interrupt-on-change
    DEFVALA = 0x06,
    DEFVALB = 0x07,
    /// INTCON: interrupt-on-change config: 0=compare to previous pin value;
    ///   1=compare to corresponding bit in DEFVAL
    INTCONA = 0x08,
    INTCONB = 0x09,
    /// IOCON: configuration register, shared by both ports.  See [`IoCon`][crate::IoCon] for
    /// the meaning of each bit.
    IOCON = 0x0a,
    /// GPPU: GPIO pull-ups: enables weak internal pull-ups on each pin (when configured
    ///   as an input)
    GPPUA = 0x0c,
    GPPUB = 0x0d,
    /// INTF: interrupt flags: 0=no interrupt pending; 1=corresponding pin caused interrupt
    INTFA = 0x0e,
    INTFB = 0x0f,
    /// INTCAP: interrupt captured value: reflects value of each pin at the time that they
    ///   caused an interrupt.  Reading it clears the interrupt condition.
    INTCAPA = 0x10,
    INTCAPB = 0x11,
    /// GPIO: reflects logic level on pins
    GPIOA = 0x12,
    GPIOB = 0x13,
    /// OLAT: output latches: sets state for pins configured as outputs
    OLATA = 0x14,
    OLATB = 0x15,
}

impl From<Register> for u8 {
    fn from(r: Register) -> u8 {
        r as u8
    }
}

impl Register {
    pub const fn iodir(port: Port) -> Self {
        match port {
            Port::A => Register::IODIRA,
            Port::B => Register::IODIRB,
        }
    }

    pub const fn ipol(port: Port) -> Self {
        match port {
            Port::A => Register::IPOLA,
            Port::B => Register::IPOLB,
        }
    }

    pub const fn gpinten(port: Port) -> Self {
        match port {
            Port::A => Register::GPINTENA,
            Port::B => Register::GPINTENB,
        }
    }

    pub const fn defval(port: Port) -> Self {
        match port {
            Port::A => Register::DEFVALA,
            Port::B => Register::DEFVALB,
        }
    }

    pub const fn intcon(port: Port) -> Self {
        match port {
            Port::A => Register::INTCONA,
            Port::B => Register::INTCONB,
        }
    }

    pub const fn gppu(port: Port) -> Self {
        match port {
            Port::A => Register::GPPUA,
            Port::B => Register::GPPUB,
        }
    }

    pub const fn intf(port: Port) -> Self {
        match port {
            Port::A => Register::INTFA,
            Port::B => Register::INTFB,
        }
    }

    pub const fn intcap(port: Port) -> Self {
        match port {
            Port::A => Register::INTCAPA,
            Port::B => Register::INTCAPB,
        }
    }

    pub const fn gpio(port: Port) -> Self {
        match port {
            Port::A => Register::GPIOA,
            Port::B => Register::GPIOB,
        }
    }

    pub const fn olat(port: Port) -> Self {
        match port {
            Port::A => Register::OLATA,
            Port::B => Register::OLATB,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Register;
    use crate::Port;

    #[test]
    fn datasheet_offsets() {
        let table = [
            (Register::IODIRA, 0x00),
            (Register::IODIRB, 0x01),
            (Register::IPOLA, 0x02),
            (Register::IPOLB, 0x03),
            (Register::GPINTENA, 0x04),
            (Register::GPINTENB, 0x05),
            (Register::DEFVALA, 0x06),
            (Register::DEFVALB, 0x07),
            (Register::INTCONA, 0x08),
            (Register::INTCONB, 0x09),
            (Register::IOCON, 0x0a),
            (Register::GPPUA, 0x0c),
            (Register::GPPUB, 0x0d),
            (Register::INTFA, 0x0e),
            (Register::INTFB, 0x0f),
            (Register::INTCAPA, 0x10),
            (Register::INTCAPB, 0x11),
            (Register::GPIOA, 0x12),
            (Register::GPIOB, 0x13),
            (Register::OLATA, 0x14),
            (Register::OLATB, 0x15),
        ];
        for (reg, addr) in table {
            assert_eq!(u8::from(reg), addr);
        }
    }

    #[test]
    fn port_b_is_one_above_port_a() {
        let pairs: [fn(Port) -> Register; 10] = [
            Register::iodir,
            Register::ipol,
            Register::gpinten,
            Register::defval,
            Register::intcon,
            Register::gppu,
            Register::intf,
            Register::intcap,
            Register::gpio,
            Register::olat,
        ];
        for reg in pairs {
            assert_eq!(u8::from(reg(Port::A)) + 1, u8::from(reg(Port::B)));
        }
    }
}
