//! # Processor Status Register
//!
//! The 6502 keeps its condition codes in a single status byte, laid out
//! NV-BDIZC from bit 7 down to bit 0. Bit 5 is unused.
//!
//! [`Status`] is a bit-flag view over that byte. Every helper touches only
//! the bit it names, so bits the helper does not own (including the unused
//! bit 5) survive every flag update.

use bitflags::bitflags;

bitflags! {
    /// Processor status byte with named flag bits.
    ///
    /// Unknown bits are retained: `Status::from_bits_retain(0xFF).bits()` is `0xFF`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::Status;
    ///
    /// let mut status = Status::from_bits_retain(0b0010_0000);
    /// status.set_zero(0x00);
    /// status.set_negative(0x80);
    ///
    /// assert!(status.is_set(Status::ZERO));
    /// assert!(status.is_set(Status::NEGATIVE));
    /// assert_eq!(status.bits(), 0b1010_0010);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Status: u8 {
        /// Carry (C): unsigned carry out / no borrow.
        const CARRY = 0b0000_0001;
        /// Zero (Z): last result was zero.
        const ZERO = 0b0000_0010;
        /// Interrupt disable (I).
        const INTERRUPT_DISABLE = 0b0000_0100;
        /// Decimal mode (D). Recorded only; arithmetic stays binary.
        const DECIMAL = 0b0000_1000;
        /// Break (B).
        const BREAK = 0b0001_0000;
        /// Bit 5, unused by the processor.
        const UNUSED = 0b0010_0000;
        /// Overflow (V): signed overflow of the last ADC/SBC, bit 6 for BIT.
        const OVERFLOW = 0b0100_0000;
        /// Negative (N): bit 7 of the last result.
        const NEGATIVE = 0b1000_0000;
    }
}

impl Status {
    /// Sets Negative from bit 7 of `value`.
    pub fn set_negative(&mut self, value: u8) {
        self.set(Status::NEGATIVE, value & 0x80 != 0);
    }

    /// Sets Zero iff `value` is zero.
    pub fn set_zero(&mut self, value: u8) {
        self.set(Status::ZERO, value == 0);
    }

    /// Sets Negative and Zero from `value`.
    pub fn set_negative_zero(&mut self, value: u8) {
        self.set_negative(value);
        self.set_zero(value);
    }

    pub fn set_carry(&mut self, carry: bool) {
        self.set(Status::CARRY, carry);
    }

    pub fn set_overflow(&mut self, overflow: bool) {
        self.set(Status::OVERFLOW, overflow);
    }

    /// Returns the carry bit as 0 or 1, ready to feed into arithmetic.
    pub fn carry(&self) -> u8 {
        u8::from(self.contains(Status::CARRY))
    }

    /// Returns true if every bit in `flag` is set.
    pub fn is_set(&self, flag: Status) -> bool {
        self.contains(flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_carry_as_integer() {
        let mut status = Status::empty();
        assert_eq!(status.carry(), 0);
        status.set_carry(true);
        assert_eq!(status.carry(), 1);
        assert_eq!(status.bits(), 0b0000_0001);
    }

    #[test]
    fn test_overflow_bit_position() {
        let mut status = Status::empty();
        status.set_overflow(true);
        assert_eq!(status.bits(), 0b0100_0000);
        status.set_overflow(false);
        assert_eq!(status.bits(), 0);
    }

    #[test]
    fn test_generic_set_and_is_set() {
        let mut status = Status::empty();
        status.set(Status::DECIMAL, true);
        status.set(Status::INTERRUPT_DISABLE, true);
        assert!(status.is_set(Status::DECIMAL));
        assert!(status.is_set(Status::INTERRUPT_DISABLE));
        assert!(!status.is_set(Status::BREAK));

        status.set(Status::DECIMAL, false);
        assert!(!status.is_set(Status::DECIMAL));
        assert_eq!(status.bits(), 0b0000_0100);
    }

    proptest! {
        #[test]
        fn prop_set_zero_touches_only_zero(initial in any::<u8>(), value in any::<u8>()) {
            let mut status = Status::from_bits_retain(initial);
            status.set_zero(value);

            prop_assert_eq!(status.is_set(Status::ZERO), value == 0);
            prop_assert_eq!(status.bits() & !0b0000_0010, initial & !0b0000_0010);
        }

        #[test]
        fn prop_set_negative_follows_bit7(initial in any::<u8>(), value in any::<u8>()) {
            let mut status = Status::from_bits_retain(initial);
            status.set_negative(value);

            prop_assert_eq!(status.is_set(Status::NEGATIVE), value & 0x80 != 0);
            prop_assert_eq!(status.bits() & 0x7F, initial & 0x7F);
        }

        #[test]
        fn prop_carry_and_overflow_preserve_other_bits(
            initial in any::<u8>(),
            carry in any::<bool>(),
            overflow in any::<bool>(),
        ) {
            let mut status = Status::from_bits_retain(initial);
            status.set_carry(carry);
            status.set_overflow(overflow);

            prop_assert_eq!(status.carry(), u8::from(carry));
            prop_assert_eq!(status.is_set(Status::OVERFLOW), overflow);
            prop_assert_eq!(status.bits() & 0b1011_1110, initial & 0b1011_1110);
        }
    }
}
