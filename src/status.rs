//! # Processor Status
//!
//! The seven status flags are kept as individual booleans. They are only packed
//! into a byte when `PHP` pushes them and unpacked when `PLP` pulls them back.
//!
//! ## Packed Layout
//!
//! | Bit | Flag        |
//! |-----|-------------|
//! | 7   | sign        |
//! | 6   | overflow    |
//! | 5   | unused (0)  |
//! | 4   | breakpoint  |
//! | 3   | decimal     |
//! | 2   | interrupt   |
//! | 1   | zero        |
//! | 0   | carry       |
//!
//! Unpacking is not the inverse of packing: bit 6 lands in `sign` and bit 7 in
//! `overflow`. Programs that rely on `PHP`/`PLP` round trips observe the two
//! flags trading places, and the engine keeps that behaviour.

const SIGN_BIT: u8 = 0b1000_0000;
const OVERFLOW_BIT: u8 = 0b0100_0000;
const BREAKPOINT_BIT: u8 = 0b0001_0000;
const DECIMAL_BIT: u8 = 0b0000_1000;
const INTERRUPT_BIT: u8 = 0b0000_0100;
const ZERO_BIT: u8 = 0b0000_0010;
const CARRY_BIT: u8 = 0b0000_0001;

/// Signed 8-bit range used by the arithmetic carry test.
const WORD_MIN: i32 = -128;
const WORD_MAX: i32 = 127;

/// The processor status flags.
///
/// # Examples
///
/// ```
/// use lib6507::Status;
///
/// let status = Status {
///     sign: true,
///     carry: true,
///     ..Status::default()
/// };
/// assert_eq!(status.to_byte(), 0b1000_0001);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Status {
    /// Set when bit 7 of the last result was 1.
    pub sign: bool,
    /// Set on signed overflow by `ADC`/`SBC`.
    pub overflow: bool,
    /// Break flag. Only ever changed by `PLP`.
    pub breakpoint: bool,
    /// Decimal mode flag. Has no effect on arithmetic.
    pub decimal: bool,
    /// Interrupt disable flag.
    pub interrupt: bool,
    /// Set when the low 8 bits of the last result were zero.
    pub zero: bool,
    /// Carry flag.
    pub carry: bool,
}

impl Status {
    /// Packs the flags into the byte `PHP` pushes. Bit 5 is always 0.
    pub fn to_byte(&self) -> u8 {
        let mut byte = 0;

        if self.sign {
            byte |= SIGN_BIT;
        }
        if self.overflow {
            byte |= OVERFLOW_BIT;
        }
        if self.breakpoint {
            byte |= BREAKPOINT_BIT;
        }
        if self.decimal {
            byte |= DECIMAL_BIT;
        }
        if self.interrupt {
            byte |= INTERRUPT_BIT;
        }
        if self.zero {
            byte |= ZERO_BIT;
        }
        if self.carry {
            byte |= CARRY_BIT;
        }

        byte
    }

    /// Unpacks a byte pulled by `PLP`.
    ///
    /// Bit 6 is assigned to `sign` and bit 7 to `overflow`; every other flag
    /// comes from the bit `to_byte` writes it to.
    ///
    /// ```
    /// use lib6507::Status;
    ///
    /// let status = Status::from_stack_byte(0b1000_0000);
    /// assert!(!status.sign);
    /// assert!(status.overflow);
    /// ```
    pub fn from_stack_byte(byte: u8) -> Self {
        Self {
            sign: byte & OVERFLOW_BIT != 0,
            overflow: byte & SIGN_BIT != 0,
            breakpoint: byte & BREAKPOINT_BIT != 0,
            decimal: byte & DECIMAL_BIT != 0,
            interrupt: byte & INTERRUPT_BIT != 0,
            zero: byte & ZERO_BIT != 0,
            carry: byte & CARRY_BIT != 0,
        }
    }

    /// Sign/zero update used by loads, logic, shifts, inc/dec and transfers.
    ///
    /// Both flags come from the low 8 bits of `result`, whatever width the
    /// operation produced.
    pub(crate) fn update_zero_sign(&mut self, result: u16) {
        self.sign = result & SIGN_BIT as u16 != 0;
        self.zero = result & 0xFF == 0;
    }

    /// Full update used by `ADC`/`SBC` (and the `$NNNN,Y` logical forms).
    ///
    /// - overflow: `op1` and `op2` share a sign bit and the truncated result's
    ///   sign bit differs from `op1`'s
    /// - carry: `result` lies outside `-128..=127`. `result` is the unsigned
    ///   16-bit intermediate, so any borrow shows up as a large positive value.
    pub(crate) fn update_arithmetic(&mut self, result: u16, op1: u8, op2: u8) {
        let low = result as u8;

        self.sign = low & SIGN_BIT != 0;
        self.overflow =
            (op1 & SIGN_BIT) == (op2 & SIGN_BIT) && (low & SIGN_BIT) != (op1 & SIGN_BIT);
        self.zero = low == 0;

        let wide = i32::from(result);
        self.carry = !(WORD_MIN..=WORD_MAX).contains(&wide);
    }
}
