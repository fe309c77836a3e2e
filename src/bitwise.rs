// Bit operations over fixed-width unsigned integers, wrapping 64-bit
// arithmetic and base conversions

use std::ops::{BitAnd, BitOr, BitXor, Not, Shl};

use crate::error::{BitwiseError, BitwiseResult};

/// Fixed-width unsigned integers the single-bit operations are generic
/// over. Implemented for `u8`, `u16`, `u32` and `u64`.
pub trait BitField:
    Copy
    + Eq
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
{
    const WIDTH: u32;
    const ZERO: Self;
    const ONE: Self;
}

macro_rules! impl_bit_field {
    ($($t:ty),*) => {$(
        impl BitField for $t {
            const WIDTH: u32 = <$t>::BITS;
            const ZERO: Self = 0;
            const ONE: Self = 1;
        }
    )*};
}

impl_bit_field!(u8, u16, u32, u64);

// Single-bit edits. Callers must keep index < WIDTH; debug builds assert
// it, release builds mask the shift count like the hardware does.

#[inline]
pub fn set_bit<T: BitField>(value: T, index: u32) -> T {
    debug_assert!(index < T::WIDTH, "bit index {} out of range", index);
    value | (T::ONE << (index % T::WIDTH))
}

#[inline]
pub fn clear_bit<T: BitField>(value: T, index: u32) -> T {
    debug_assert!(index < T::WIDTH, "bit index {} out of range", index);
    value & !(T::ONE << (index % T::WIDTH))
}

#[inline]
pub fn toggle_bit<T: BitField>(value: T, index: u32) -> T {
    debug_assert!(index < T::WIDTH, "bit index {} out of range", index);
    value ^ (T::ONE << (index % T::WIDTH))
}

#[inline]
pub fn get_bit<T: BitField>(value: T, index: u32) -> bool {
    debug_assert!(index < T::WIDTH, "bit index {} out of range", index);
    value & (T::ONE << (index % T::WIDTH)) != T::ZERO
}

// 64-bit arithmetic with two's-complement wraparound, no overflow
// detection

#[inline]
pub fn add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

#[inline]
pub fn subtract(a: i64, b: i64) -> i64 {
    a.wrapping_sub(b)
}

#[inline]
pub fn multiply(a: i64, b: i64) -> i64 {
    a.wrapping_mul(b)
}

/// Truncating integer division. The only arithmetic operation with a
/// failure path: a zero divisor is an error, `i64::MIN / -1` wraps.
pub fn divide(a: i64, b: i64) -> BitwiseResult<i64> {
    if b == 0 {
        return Err(BitwiseError::DivisionByZero);
    }
    Ok(a.wrapping_div(b))
}

// Base conversions. Rendering and parsing both work on the 64-bit
// two's-complement pattern, so negative values render as 64 significant
// bits and parse back to the same value.

/// Render as an unprefixed binary string, no leading zeros.
pub fn decimal_to_binary(n: i64) -> String {
    format!("{:b}", n as u64)
}

/// Render as an unprefixed lowercase hexadecimal string.
pub fn decimal_to_hexadecimal(n: i64) -> String {
    format!("{:x}", n as u64)
}

/// Parse a string of binary digits into a 64-bit integer.
pub fn binary_to_decimal(s: &str) -> BitwiseResult<i64> {
    parse_radix(s, 2)
}

/// Parse a string of hexadecimal digits into a 64-bit integer.
pub fn hexadecimal_to_decimal(s: &str) -> BitwiseResult<i64> {
    parse_radix(s, 16)
}

fn parse_radix(s: &str, base: u32) -> BitwiseResult<i64> {
    u64::from_str_radix(s, base)
        .map(|v| v as i64)
        .map_err(|_| BitwiseError::InvalidFormat {
            input: s.to_string(),
            base,
        })
}

// Mask helpers for occupancy queries over u64 bitboards

#[inline]
pub fn pop_lsb(bb: &mut u64) -> Option<u32> {
    if *bb == 0 {
        return None;
    }
    let lsb = bb.trailing_zeros();
    *bb &= *bb - 1;
    Some(lsb)
}

#[inline]
pub fn lsb_index(bb: u64) -> Option<u32> {
    if bb == 0 {
        None
    } else {
        Some(bb.trailing_zeros())
    }
}

#[inline]
pub fn count_bits(bb: u64) -> u32 {
    bb.count_ones()
}

pub struct BitIter {
    bb: u64,
}

impl Iterator for BitIter {
    type Item = u32;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        pop_lsb(&mut self.bb)
    }
}

#[inline]
pub fn iter_bits(bb: u64) -> BitIter {
    BitIter { bb }
}
