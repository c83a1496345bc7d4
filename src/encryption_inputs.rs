// Author: dWallet Labs, Ltd.
// SPDX-License-Identifier: BSD-3-Clause-Clear

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::arithmetic::{self, parse_decimal, to_decimal_string};
use crate::{
    CiphertextSpaceValue, EncryptionKey, Error, PaillierModulusSizedNumber, PlaintextSpaceValue,
    RandomnessSpaceValue, Result,
};

/// The encryption request of the interactive demo page: every value is a base-10 string, and the
/// modulus is given as $N^s$ and $N^{s+1}$.
///
/// Unlike [`EncryptionKey::encrypt`], no range checks are performed: `msg` is reduced modulo
/// $N^{s+1}$, and `r` may be drawn from $\mathbb{Z}_{N^{s+1}}^*$ rather than $\mathbb{Z}_N^*$.
#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub struct EncryptionInputs {
    pub g: String,
    pub n_to_s: String,
    pub n_to_s_plus_one: String,
    pub msg: String,
    pub r: String,
}

impl EncryptionInputs {
    /// Exports `encryption_key`, `plaintext` and `randomness` for $ s = 1 $.
    pub fn new(
        encryption_key: &EncryptionKey,
        plaintext: &PlaintextSpaceValue,
        randomness: &RandomnessSpaceValue,
    ) -> Self {
        EncryptionInputs {
            g: to_decimal_string(encryption_key.g()),
            n_to_s: to_decimal_string(encryption_key.n()),
            n_to_s_plus_one: to_decimal_string(encryption_key.n2()),
            msg: to_decimal_string(plaintext),
            r: to_decimal_string(randomness),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|error| Error::Serialization(error.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|error| Error::Serialization(error.to_string()))
    }

    /// Computes $ c = g^{msg \mod N^{s+1}} \cdot r^{N^s} \mod N^{s+1} $.
    pub fn encrypt(&self) -> Result<CiphertextSpaceValue> {
        let g = parse_field("g", &self.g)?;
        let n_to_s = parse_field("n_to_s", &self.n_to_s)?;
        let n_to_s_plus_one = parse_field("n_to_s_plus_one", &self.n_to_s_plus_one)?;
        let msg = parse_field("msg", &self.msg)?;
        let r = parse_field("r", &self.r)?;

        debug!(
            modulus_bits = n_to_s_plus_one.bits(),
            "encrypting demo encryption inputs"
        );

        let msg = arithmetic::modulo(&msg, &n_to_s_plus_one)?;

        let generator_to_the_msg = arithmetic::pow_mod(&g, &msg, &n_to_s_plus_one)?;
        let r_to_the_n_to_s = arithmetic::pow_mod(&r, &n_to_s, &n_to_s_plus_one)?;

        arithmetic::mul_mod(&generator_to_the_msg, &r_to_the_n_to_s, &n_to_s_plus_one)
    }

    /// [`Self::encrypt`], rendering the ciphertext in base 10.
    pub fn encrypt_to_decimal(&self) -> Result<String> {
        self.encrypt().map(|ciphertext| to_decimal_string(&ciphertext))
    }
}

fn parse_field(field: &'static str, digits: &str) -> Result<PaillierModulusSizedNumber> {
    parse_decimal(digits).map_err(|error| Error::InvalidInput { field, error })
}
