// Author: dWallet Labs, Ltd.
// SPDX-License-Identifier: BSD-3-Clause-Clear

//! Exact arithmetic over fixed-width natural numbers.
//!
//! Every operation either returns the exact mathematical result or an [`Error`]; nothing wraps
//! or truncates at the width of the underlying [`Uint`].

use crypto_bigint::modular::runtime_mod::{DynResidue, DynResidueParams};
use crypto_bigint::{CheckedAdd, CheckedMul, Limb, NonZero, Uint};

use crate::{Error, Result};

mod decimal;

pub use decimal::{parse_decimal, to_decimal_string};

/// Computes $ a + b $, failing with [`Error::Overflow`] if the sum does not fit in `LIMBS`.
pub fn add<const LIMBS: usize>(lhs: &Uint<LIMBS>, rhs: &Uint<LIMBS>) -> Result<Uint<LIMBS>> {
    Option::<Uint<LIMBS>>::from(lhs.checked_add(rhs)).ok_or(Error::Overflow {
        bits: Uint::<LIMBS>::BITS,
    })
}

/// Computes $ a \cdot b $, failing with [`Error::Overflow`] if the product does not fit in
/// `LIMBS`.
pub fn mul<const LIMBS: usize>(lhs: &Uint<LIMBS>, rhs: &Uint<LIMBS>) -> Result<Uint<LIMBS>> {
    Option::<Uint<LIMBS>>::from(lhs.checked_mul(rhs)).ok_or(Error::Overflow {
        bits: Uint::<LIMBS>::BITS,
    })
}

/// Computes the Euclidean remainder $ a \mod m \in [0, m) $.
pub fn modulo<const LIMBS: usize>(
    value: &Uint<LIMBS>,
    modulus: &Uint<LIMBS>,
) -> Result<Uint<LIMBS>> {
    Ok(*value % non_zero(modulus)?)
}

/// Computes $ (a + b) \mod m $.
pub fn add_mod<const LIMBS: usize>(
    lhs: &Uint<LIMBS>,
    rhs: &Uint<LIMBS>,
    modulus: &Uint<LIMBS>,
) -> Result<Uint<LIMBS>> {
    let modulus = non_zero(modulus)?;
    let (lhs, rhs) = (*lhs % modulus, *rhs % modulus);

    Ok(lhs.add_mod(&rhs, &modulus))
}

/// Computes $ (a \cdot b) \mod m $ without ever holding the unreduced product.
pub fn mul_mod<const LIMBS: usize>(
    lhs: &Uint<LIMBS>,
    rhs: &Uint<LIMBS>,
    modulus: &Uint<LIMBS>,
) -> Result<Uint<LIMBS>> {
    let modulus = non_zero(modulus)?;
    if *modulus == Uint::ONE {
        return Ok(Uint::ZERO);
    }

    let (lhs, rhs) = (*lhs % modulus, *rhs % modulus);

    if is_odd(&modulus) {
        let params = DynResidueParams::new(&modulus);

        Ok((DynResidue::new(&lhs, params) * DynResidue::new(&rhs, params)).retrieve())
    } else {
        Ok(shift_and_add_mul(&lhs, &rhs, &modulus))
    }
}

/// Computes $ base^{exponent} \mod modulus $ by repeated squaring.
///
/// The exponent is scanned from its least significant bit upwards: the accumulator is multiplied
/// by the current square of `base` whenever the bit is set, and every product is reduced modulo
/// `modulus` before the next step.
///
/// Odd moduli (every Paillier $N^2$) are multiplied in Montgomery form; even moduli fall back to
/// shift-and-add multiplication. For `modulus > 1`, $ x^0 = 1 $ for every `x`, including zero.
pub fn pow_mod<const LIMBS: usize, const EXPONENT_LIMBS: usize>(
    base: &Uint<LIMBS>,
    exponent: &Uint<EXPONENT_LIMBS>,
    modulus: &Uint<LIMBS>,
) -> Result<Uint<LIMBS>> {
    let modulus = non_zero(modulus)?;
    if *modulus == Uint::ONE {
        // Everything is congruent to zero modulo one, including $ x^0 $.
        return Ok(Uint::ZERO);
    }

    let base = *base % modulus;

    if is_odd(&modulus) {
        let params = DynResidueParams::new(&modulus);

        Ok(square_and_multiply(
            DynResidue::new(&base, params),
            DynResidue::one(params),
            exponent,
            |lhs, rhs| lhs * rhs,
        )
        .retrieve())
    } else {
        Ok(square_and_multiply(base, Uint::ONE, exponent, |lhs, rhs| {
            shift_and_add_mul(&lhs, &rhs, &modulus)
        }))
    }
}

/// Computes $ \gcd(a, b) $ with Euclid's algorithm.
pub fn gcd<const LIMBS: usize>(lhs: &Uint<LIMBS>, rhs: &Uint<LIMBS>) -> Uint<LIMBS> {
    let (mut lhs, mut rhs) = (*lhs, *rhs);

    while let Some(divisor) = Option::<NonZero<Uint<LIMBS>>>::from(NonZero::new(rhs)) {
        (lhs, rhs) = (rhs, lhs % divisor);
    }

    lhs
}

fn non_zero<const LIMBS: usize>(value: &Uint<LIMBS>) -> Result<NonZero<Uint<LIMBS>>> {
    Option::from(NonZero::new(*value)).ok_or(Error::DivisionByZero)
}

fn is_odd<const LIMBS: usize>(value: &Uint<LIMBS>) -> bool {
    bit(value, 0)
}

pub(crate) fn bit<const LIMBS: usize>(value: &Uint<LIMBS>, index: usize) -> bool {
    let limb = value.as_limbs()[index / Limb::BITS].0;

    ((limb >> (index % Limb::BITS)) & 1) == 1
}

fn square_and_multiply<T: Copy, const EXPONENT_LIMBS: usize>(
    base: T,
    one: T,
    exponent: &Uint<EXPONENT_LIMBS>,
    mul: impl Fn(T, T) -> T,
) -> T {
    let exponent_bits = exponent.bits();

    let mut accumulator = one;
    let mut square = base; // $ base^{2^i} $
    for i in 0..exponent_bits {
        if bit(exponent, i) {
            accumulator = mul(accumulator, square);
        }

        if i + 1 < exponent_bits {
            square = mul(square, square);
        }
    }

    accumulator
}

// Requires `lhs, rhs < modulus`, which keeps every intermediate value below $ 2 \cdot modulus $.
fn shift_and_add_mul<const LIMBS: usize>(
    lhs: &Uint<LIMBS>,
    rhs: &Uint<LIMBS>,
    modulus: &Uint<LIMBS>,
) -> Uint<LIMBS> {
    (0..rhs.bits()).rev().fold(Uint::ZERO, |product, i| {
        let product = product.add_mod(&product, modulus);

        if bit(rhs, i) {
            product.add_mod(lhs, modulus)
        } else {
            product
        }
    })
}
