// Author: dWallet Labs, Ltd.
// SPDX-License-Identifier: BSD-3-Clause-Clear

use crypto_bigint::rand_core::CryptoRngCore;
use crypto_bigint::{NonZero, RandomMod};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace};

use crate::arithmetic::{self, parse_decimal};
use crate::{
    CiphertextSpaceValue, Error, LargeBiPrimeSizedNumber, PaillierModulusSizedNumber,
    PlaintextSpaceValue, RandomnessSpaceValue, Result, SanityCheckError,
};

/// The public parameters $(N, g)$ of a Paillier encryption key.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PublicParameters {
    pub n: LargeBiPrimeSizedNumber,
    pub g: PaillierModulusSizedNumber,
}

/// A Paillier public key, encrypting plaintexts $ m \in \mathbb{Z}_N $ into ciphertexts
/// $ c \in \mathbb{Z}_{N^2} $.
///
/// Serializes as its [`PublicParameters`]; deserialization re-validates them.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct EncryptionKey {
    n: LargeBiPrimeSizedNumber,     // the modulus $N$
    g: PaillierModulusSizedNumber,  // the generator $g \in [1, N^2)$
    n2: PaillierModulusSizedNumber, // $N^2$
    closed_form_generator: bool,    // whether $g = N + 1$
}

impl EncryptionKey {
    /// Creates the key $(N, N + 1)$.
    pub fn new(n: LargeBiPrimeSizedNumber) -> Result<Self> {
        let g = arithmetic::add(&n.resize(), &PaillierModulusSizedNumber::ONE)?;

        Self::with_generator(n, g)
    }

    /// Creates the key $(N, g)$, for $ N \geq 2 $ and $ g \in [1, N^2) $.
    pub fn with_generator(
        n: LargeBiPrimeSizedNumber,
        g: PaillierModulusSizedNumber,
    ) -> Result<Self> {
        if n < LargeBiPrimeSizedNumber::from_u8(2) {
            return Err(SanityCheckError::InvalidModulus.into());
        }

        let wide_n: PaillierModulusSizedNumber = n.resize();
        let n2 = arithmetic::mul(&wide_n, &wide_n)?;

        if g == PaillierModulusSizedNumber::ZERO || g >= n2 {
            return Err(SanityCheckError::InvalidGenerator.into());
        }

        let closed_form_generator =
            g == arithmetic::add(&wide_n, &PaillierModulusSizedNumber::ONE)?;

        debug!(
            modulus_bits = n.bits(),
            closed_form_generator, "constructed a Paillier encryption key"
        );

        Ok(EncryptionKey {
            n,
            g,
            n2,
            closed_form_generator,
        })
    }

    /// Creates the key $(N, g)$ from their base-10 representations.
    pub fn from_decimal(n: &str, g: &str) -> Result<Self> {
        let n = parse_decimal(n).map_err(|error| Error::InvalidInput { field: "n", error })?;
        let g = parse_decimal(g).map_err(|error| Error::InvalidInput { field: "g", error })?;

        Self::with_generator(n, g)
    }

    pub fn n(&self) -> &LargeBiPrimeSizedNumber {
        &self.n
    }

    pub fn g(&self) -> &PaillierModulusSizedNumber {
        &self.g
    }

    pub fn n2(&self) -> &PaillierModulusSizedNumber {
        &self.n2
    }

    pub fn public_parameters(&self) -> PublicParameters {
        PublicParameters {
            n: self.n,
            g: self.g,
        }
    }

    /// Encrypts `plaintext`, sampling fresh randomness from `rng` unless `randomness` is given.
    ///
    /// Supplied randomness is range-checked against $(0, N)$ but its coprimality to $N$ is not
    /// re-verified.
    pub fn encrypt(
        &self,
        plaintext: &PlaintextSpaceValue,
        randomness: Option<&RandomnessSpaceValue>,
        rng: &mut impl CryptoRngCore,
    ) -> Result<CiphertextSpaceValue> {
        if *plaintext >= self.n {
            return Err(Error::InvalidPlaintext);
        }

        let randomness = match randomness {
            Some(randomness) => *randomness,
            None => self.sample_randomness(rng)?,
        };

        self.encrypt_with_randomness(plaintext, &randomness)
    }

    /// Deterministically computes $ c = g^m \cdot r^N \mod N^2 $.
    pub fn encrypt_with_randomness(
        &self,
        plaintext: &PlaintextSpaceValue,
        randomness: &RandomnessSpaceValue,
    ) -> Result<CiphertextSpaceValue> {
        if *plaintext >= self.n {
            return Err(Error::InvalidPlaintext);
        }

        if *randomness == RandomnessSpaceValue::ZERO || *randomness >= self.n {
            return Err(Error::InvalidRandomness);
        }

        let generator_to_the_plaintext = self.generator_to_the(plaintext)?;
        let randomness_to_the_n = arithmetic::pow_mod(&randomness.resize(), &self.n, &self.n2)?;

        arithmetic::mul_mod(&generator_to_the_plaintext, &randomness_to_the_n, &self.n2)
    }

    /// Samples $ r \in \mathbb{Z}_N^* $ uniformly.
    pub fn sample_randomness(&self, rng: &mut impl CryptoRngCore) -> Result<RandomnessSpaceValue> {
        let n = Option::<NonZero<LargeBiPrimeSizedNumber>>::from(NonZero::new(self.n))
            .ok_or(Error::DivisionByZero)?;

        // Classic rejection-sampling technique.
        let mut rejections = 0u64;
        loop {
            let randomness = LargeBiPrimeSizedNumber::random_mod(rng, &n);

            if randomness != LargeBiPrimeSizedNumber::ZERO
                && arithmetic::gcd(&randomness, &self.n) == LargeBiPrimeSizedNumber::ONE
            {
                return Ok(randomness);
            }

            rejections += 1;
            trace!(rejections, "rejected randomness outside the multiplicative group");
        }
    }

    /// Homomorphically adds two ciphertexts: the product decrypts to the sum of their plaintexts
    /// modulo $N$.
    pub fn add_ciphertexts(
        &self,
        lhs: &CiphertextSpaceValue,
        rhs: &CiphertextSpaceValue,
    ) -> Result<CiphertextSpaceValue> {
        arithmetic::mul_mod(lhs, rhs, &self.n2)
    }

    /// Homomorphically sums `ciphertexts`. The empty sum is $1$, the encryption of $0$ under
    /// $ r = 1 $.
    pub fn sum_ciphertexts(
        &self,
        ciphertexts: &[CiphertextSpaceValue],
    ) -> Result<CiphertextSpaceValue> {
        ciphertexts
            .iter()
            .try_fold(CiphertextSpaceValue::ONE, |sum, ciphertext| {
                self.add_ciphertexts(&sum, ciphertext)
            })
    }

    /// Encrypts every `(plaintext, randomness)` pair, failing on the first invalid one.
    pub fn encrypt_batch(
        &self,
        plaintexts_and_randomness: &[(PlaintextSpaceValue, RandomnessSpaceValue)],
    ) -> Result<Vec<CiphertextSpaceValue>> {
        #[cfg(not(feature = "parallel"))]
        let iter = plaintexts_and_randomness.iter();
        #[cfg(feature = "parallel")]
        let iter = plaintexts_and_randomness.par_iter();

        iter.map(|(plaintext, randomness)| self.encrypt_with_randomness(plaintext, randomness))
            .collect()
    }

    fn generator_to_the(
        &self,
        plaintext: &PlaintextSpaceValue,
    ) -> Result<PaillierModulusSizedNumber> {
        if self.closed_form_generator {
            // $ (N + 1)^m = 1 + m \cdot N \mod N^2 $
            let wide_plaintext: PaillierModulusSizedNumber = plaintext.resize();
            let m_times_n = arithmetic::mul(&wide_plaintext, &self.n.resize())?;

            arithmetic::add_mod(&m_times_n, &PaillierModulusSizedNumber::ONE, &self.n2)
        } else {
            arithmetic::pow_mod(&self.g, plaintext, &self.n2)
        }
    }
}

impl TryFrom<PublicParameters> for EncryptionKey {
    type Error = Error;

    fn try_from(public_parameters: PublicParameters) -> Result<Self> {
        Self::with_generator(public_parameters.n, public_parameters.g)
    }
}

impl Serialize for EncryptionKey {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.public_parameters().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EncryptionKey {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let public_parameters = PublicParameters::deserialize(deserializer)?;

        EncryptionKey::try_from(public_parameters).map_err(D::Error::custom)
    }
}
