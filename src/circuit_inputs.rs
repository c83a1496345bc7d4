// Author: dWallet Labs, Ltd.
// SPDX-License-Identifier: BSD-3-Clause-Clear

//! Witness inputs of the Paillier-cipher circuit.
//!
//! The circuit has no native big integers: each value is fed as `chunk_count` little-endian words
//! of `chunk_bits` bits, every word rendered in base 10.

use crypto_bigint::Uint;
use serde::{Deserialize, Serialize};

use crate::arithmetic::to_decimal_string;
use crate::{
    EncryptionKey, Error, PaillierModulusSizedNumber, PlaintextSpaceValue, RandomnessSpaceValue,
    Result, SanityCheckError,
};

/// The bit size of a circuit word.
pub const WORD_SIZE: usize = 32;

/// The number of words per circuit value.
pub const N_CHUNKS: usize = 16;

/// Splits `value` into `chunk_count` little-endian words of `chunk_bits` bits each.
///
/// Fails rather than dropping high words when `value` does not fit in the layout.
pub fn to_chunks<const LIMBS: usize>(
    value: &Uint<LIMBS>,
    chunk_bits: usize,
    chunk_count: usize,
) -> Result<Vec<Uint<LIMBS>>> {
    let mask = chunk_mask::<LIMBS>(chunk_bits)?;

    let fits = chunk_bits
        .checked_mul(chunk_count)
        .map_or(true, |layout_bits| value.bits() <= layout_bits);
    if !fits {
        return Err(SanityCheckError::InvalidParams().into());
    }

    let mut remaining = *value;
    Ok((0..chunk_count)
        .map(|_| {
            let chunk = remaining & mask;
            remaining = remaining.shr_vartime(chunk_bits);

            chunk
        })
        .collect())
}

/// Recomposes a value from its little-endian `chunk_bits`-bit words.
pub fn from_chunks<const LIMBS: usize>(
    chunks: &[Uint<LIMBS>],
    chunk_bits: usize,
) -> Result<Uint<LIMBS>> {
    let mask = chunk_mask::<LIMBS>(chunk_bits)?;

    chunks.iter().rev().try_fold(Uint::ZERO, |value, chunk| {
        if *chunk > mask {
            return Err(SanityCheckError::InvalidParams().into());
        }

        if value != Uint::ZERO && value.bits() + chunk_bits > Uint::<LIMBS>::BITS {
            return Err(Error::Overflow {
                bits: Uint::<LIMBS>::BITS,
            });
        }

        Ok(value.shl_vartime(chunk_bits) | *chunk)
    })
}

// $ 2^{chunk\_bits} - 1 $
fn chunk_mask<const LIMBS: usize>(chunk_bits: usize) -> Result<Uint<LIMBS>> {
    if chunk_bits == 0 || chunk_bits >= Uint::<LIMBS>::BITS {
        return Err(SanityCheckError::InvalidParams().into());
    }

    Ok(Uint::ONE.shl_vartime(chunk_bits).wrapping_sub(&Uint::ONE))
}

/// The chunked witness of a single encryption, as consumed by the circuit.
#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub struct CircuitInputs {
    pub g: Vec<String>,
    pub n_to_s: Vec<String>,
    pub n_to_s_plus_one: Vec<String>,
    pub msg: Vec<String>,
    pub r: Vec<String>,
    pub ciphertext: Vec<String>,
}

impl CircuitInputs {
    /// Encrypts `plaintext` under `randomness`, and chunks the key, the inputs and the resulting
    /// ciphertext.
    pub fn new(
        encryption_key: &EncryptionKey,
        plaintext: &PlaintextSpaceValue,
        randomness: &RandomnessSpaceValue,
        chunk_bits: usize,
        chunk_count: usize,
    ) -> Result<Self> {
        let ciphertext = encryption_key.encrypt_with_randomness(plaintext, randomness)?;

        let chunk = |value: &PaillierModulusSizedNumber| -> Result<Vec<String>> {
            Ok(to_chunks(value, chunk_bits, chunk_count)?
                .iter()
                .map(to_decimal_string)
                .collect())
        };

        Ok(CircuitInputs {
            g: chunk(encryption_key.g())?,
            n_to_s: chunk(&encryption_key.n().resize())?,
            n_to_s_plus_one: chunk(encryption_key.n2())?,
            msg: chunk(&plaintext.resize())?,
            r: chunk(&randomness.resize())?,
            ciphertext: chunk(&ciphertext)?,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|error| Error::Serialization(error.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use crypto_bigint::{U128, U64};
    use rstest::rstest;

    use super::*;
    use crate::arithmetic::modulo;
    use crate::test_exports::{CIPHERTEXT, G, LARGE_N, LARGE_N2, N, PLAINTEXT, RANDOMNESS};

    fn words(values: &[u32]) -> Vec<String> {
        let mut words: Vec<String> = values.iter().map(u32::to_string).collect();
        words.resize(N_CHUNKS, "0".to_string());

        words
    }

    #[test]
    fn splits_into_little_endian_words() {
        assert_eq!(
            to_chunks(&CIPHERTEXT, WORD_SIZE, N_CHUNKS)
                .unwrap()
                .iter()
                .map(to_decimal_string)
                .collect::<Vec<_>>(),
            words(&[1949359359, 2509079398, 1616054433, 1437519628])
        );
        assert_eq!(
            to_chunks(&U64::from_u64(0x0123_4567_89ab_cdef), 16, 4).unwrap(),
            [0xcdef, 0x89ab, 0x4567, 0x0123].map(U64::from_u64)
        );
    }

    #[test]
    fn recomposes_what_it_splits() {
        for (chunk_bits, chunk_count) in [(32, 32), (64, 16), (1023, 2), (3, 342)] {
            let chunks = to_chunks(&LARGE_N2, chunk_bits, chunk_count).unwrap();

            assert_eq!(chunks.len(), chunk_count);
            assert_eq!(from_chunks(&chunks, chunk_bits).unwrap(), LARGE_N2);
        }
    }

    #[rstest]
    #[case::empty_words(0, 4)]
    #[case::words_as_wide_as_the_value(128, 1)]
    #[case::layout_narrower_than_the_value(32, 3)]
    fn rejects_invalid_layouts(#[case] chunk_bits: usize, #[case] chunk_count: usize) {
        assert_eq!(
            to_chunks(&CIPHERTEXT.resize::<{ U128::LIMBS }>(), chunk_bits, chunk_count),
            Err(Error::SanityCheckError(SanityCheckError::InvalidParams()))
        );
    }

    #[test]
    fn rejects_words_wider_than_the_layout() {
        assert_eq!(
            from_chunks(&[U64::from_u64(1 << 8)], 8),
            Err(Error::SanityCheckError(SanityCheckError::InvalidParams()))
        );
        assert_eq!(
            from_chunks(&[U64::ONE, U64::ONE, U64::ONE], 32),
            Err(Error::Overflow { bits: 64 })
        );
    }

    #[test]
    fn chunks_the_encryption_witness() {
        let encryption_key = EncryptionKey::new(N).unwrap();
        let randomness = modulo(&RANDOMNESS, &N).unwrap();

        let circuit_inputs =
            CircuitInputs::new(&encryption_key, &PLAINTEXT, &randomness, WORD_SIZE, N_CHUNKS)
                .unwrap();

        assert_eq!(
            circuit_inputs.ciphertext,
            words(&[1949359359, 2509079398, 1616054433, 1437519628])
        );
        assert_eq!(circuit_inputs.g, words(&[6539270, 2872937415]));
        assert_eq!(circuit_inputs.n_to_s, words(&[6539269, 2872937415]));
        assert_eq!(circuit_inputs.msg, words(&[102030405]));
        assert_eq!(
            from_chunks(
                &to_chunks(&G, WORD_SIZE, N_CHUNKS).unwrap(),
                WORD_SIZE
            )
            .unwrap(),
            G
        );

        let json: serde_json::Value =
            serde_json::from_str(&circuit_inputs.to_json().unwrap()).unwrap();
        assert_eq!(json["ciphertext"][0], "1949359359");
        assert_eq!(json["r"].as_array().map(Vec::len), Some(N_CHUNKS));
    }

    #[test]
    fn rejects_witnesses_wider_than_the_layout() {
        let encryption_key = EncryptionKey::new(LARGE_N).unwrap();

        assert_eq!(
            CircuitInputs::new(
                &encryption_key,
                &PlaintextSpaceValue::ONE,
                &RandomnessSpaceValue::ONE,
                WORD_SIZE,
                N_CHUNKS
            ),
            Err(Error::SanityCheckError(SanityCheckError::InvalidParams()))
        );
    }
}
