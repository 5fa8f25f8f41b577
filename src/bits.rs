//! Single-bit helpers for eight-bit register values.
//!
//! These never touch the bus.
use crate::InvalidArgument;

fn mask(bit: u8) -> Result<u8, InvalidArgument> {
    if bit < 8 {
        Ok(1 << bit)
    } else {
        Err(InvalidArgument::Bit(bit))
    }
}

/// Returns 1 if `bit` is set in `byte`, 0 otherwise.
pub fn check_bit(byte: u8, bit: u8) -> Result<u8, InvalidArgument> {
    Ok((byte & mask(bit)? != 0) as u8)
}

/// Returns `byte` with `bit` forced to `value`, which must be 0 or 1.
pub fn update_byte(byte: u8, bit: u8, value: u8) -> Result<u8, InvalidArgument> {
    let mask = mask(bit)?;
    match value {
        0 => Ok(byte & !mask),
        1 => Ok(byte | mask),
        v => Err(InvalidArgument::BitValue(v)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check() {
        assert_eq!(check_bit(0b1011_0010, 1), Ok(1));
        assert_eq!(check_bit(0b1011_0010, 0), Ok(0));
        assert_eq!(check_bit(0b1011_0010, 7), Ok(1));
        assert_eq!(check_bit(0xff, 8), Err(InvalidArgument::Bit(8)));
    }

    #[test]
    fn set_then_clear_restores() {
        for byte in [0x00, 0x5a, 0xa5, 0xff] {
            for bit in 0..8 {
                if byte & (1 << bit) != 0 {
                    continue;
                }
                let set = update_byte(byte, bit, 1).unwrap();
                assert_eq!(set, byte | (1 << bit));
                assert_eq!(update_byte(set, bit, 0), Ok(byte));
            }
        }
    }

    #[test]
    fn only_touches_one_bit() {
        assert_eq!(update_byte(0b1111_0000, 2, 1), Ok(0b1111_0100));
        assert_eq!(update_byte(0b1111_0000, 6, 0), Ok(0b1011_0000));
        assert_eq!(update_byte(0b1111_0000, 0, 0), Ok(0b1111_0000));
    }

    #[test]
    fn rejects_bad_arguments() {
        assert_eq!(update_byte(0x00, 3, 2), Err(InvalidArgument::BitValue(2)));
        assert_eq!(update_byte(0x00, 3, 0xff), Err(InvalidArgument::BitValue(0xff)));
        assert_eq!(update_byte(0x00, 9, 1), Err(InvalidArgument::Bit(9)));
    }
}
