// Author: dWallet Labs, Ltd.
// SPDX-License-Identifier: BSD-3-Clause-Clear

use crypto_bigint::{CheckedAdd, CheckedMul, Limb, NonZero, Uint};

use crate::ParseError;

// The largest power of ten that fits in a `u64`.
const DIGITS_PER_CHUNK: usize = 19;
const CHUNK_RADIX: u64 = 10_000_000_000_000_000_000;

/// Parses a base-10 string of ASCII digits into a `Uint<LIMBS>`.
///
/// Signs, whitespace and separators are rejected; leading zeros are accepted. Values that do not
/// fit in `LIMBS` are rejected with [`ParseError::TooLarge`] rather than truncated.
pub fn parse_decimal<const LIMBS: usize>(digits: &str) -> Result<Uint<LIMBS>, ParseError> {
    if digits.is_empty() {
        return Err(ParseError::Empty);
    }

    if let Some((position, character)) = digits
        .chars()
        .enumerate()
        .find(|(_, character)| !character.is_ascii_digit())
    {
        return Err(ParseError::InvalidDigit {
            position,
            character,
        });
    }

    let too_large = ParseError::TooLarge {
        bits: Uint::<LIMBS>::BITS,
    };

    digits
        .as_bytes()
        .chunks(DIGITS_PER_CHUNK)
        .try_fold(Uint::<LIMBS>::ZERO, |value, chunk| {
            let chunk_value = chunk
                .iter()
                .fold(0u64, |acc, digit| acc * 10 + u64::from(digit - b'0'));
            let radix = Uint::<LIMBS>::from_u64(10u64.pow(chunk.len() as u32));

            // $ value \cdot 10^{|chunk|} + chunk $
            let shifted = Option::<Uint<LIMBS>>::from(value.checked_mul(&radix))
                .ok_or_else(|| too_large.clone())?;

            Option::<Uint<LIMBS>>::from(shifted.checked_add(&Uint::from_u64(chunk_value)))
                .ok_or_else(|| too_large.clone())
        })
}

/// Renders `value` in base 10, without leading zeros.
pub fn to_decimal_string<const LIMBS: usize>(value: &Uint<LIMBS>) -> String {
    // `CHUNK_RADIX` is a non-zero constant, so this can never fail.
    let radix = NonZero::new(Uint::<LIMBS>::from_u64(CHUNK_RADIX)).unwrap();

    let mut chunks = vec![];
    let mut remaining = *value;
    while remaining != Uint::ZERO {
        chunks.push(low_u64(&(remaining % radix)));
        remaining = remaining / radix;
    }

    let Some(most_significant) = chunks.pop() else {
        return "0".to_string();
    };

    chunks
        .iter()
        .rev()
        .fold(most_significant.to_string(), |mut rendered, chunk| {
            rendered.push_str(&format!("{chunk:0width$}", width = DIGITS_PER_CHUNK));
            rendered
        })
}

// The caller guarantees `value < 2^64`.
fn low_u64<const LIMBS: usize>(value: &Uint<LIMBS>) -> u64 {
    value
        .as_limbs()
        .iter()
        .rev()
        .fold(0u128, |acc, limb| (acc << Limb::BITS) | u128::from(limb.0)) as u64
}
