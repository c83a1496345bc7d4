// Author: dWallet Labs, Ltd.
// SPDX-License-Identifier: BSD-3-Clause-Clear

//! Paillier encryption over exact, fixed-width big integers.
//!
//! [`EncryptionKey::encrypt`] computes $ c = g^m \cdot r^N \mod N^2 $, with every step carried
//! out by the [`arithmetic`] substrate so that no intermediate value is ever approximated or
//! truncated.

use crypto_bigint::{Concat, U1024};

pub mod arithmetic;
pub mod circuit_inputs;
mod encryption_inputs;
mod encryption_key;
mod error;

pub use circuit_inputs::CircuitInputs;
pub use encryption_inputs::EncryptionInputs;
pub use encryption_key::{EncryptionKey, PublicParameters};
pub use error::{Error, ParseError, Result, SanityCheckError};

/* Types around `crypto_bigint` */

pub type LargePrimeSizedNumber = U1024;
pub type LargeBiPrimeSizedNumber = <LargePrimeSizedNumber as Concat>::Output;
pub type PaillierModulusSizedNumber = <LargeBiPrimeSizedNumber as Concat>::Output;

pub type PlaintextSpaceValue = LargeBiPrimeSizedNumber;
pub type RandomnessSpaceValue = LargeBiPrimeSizedNumber;
pub type CiphertextSpaceValue = PaillierModulusSizedNumber;

#[cfg(any(test, feature = "test_exports"))]
pub mod test_exports {
    use crypto_bigint::rand_core::CryptoRngCore;

    use super::*;

    // The reference vector of the interactive demo: a 64-bit $N$, whose $N^2$ already exceeds
    // the precision of any native numeric type.
    pub const N: LargeBiPrimeSizedNumber = LargeBiPrimeSizedNumber::from_u128(12339172240886319109);
    pub const G: PaillierModulusSizedNumber =
        PaillierModulusSizedNumber::from_u128(12339172240886319110);
    pub const N2: PaillierModulusSizedNumber =
        PaillierModulusSizedNumber::from_u128(152255171590259505891894229882978553881);
    pub const PLAINTEXT: PlaintextSpaceValue = PlaintextSpaceValue::from_u128(102030405);
    // Drawn from $\mathbb{Z}_{N^2}^*$, so it exceeds $N$; $ (r \mod N)^N = r^N \mod N^2 $.
    pub const RANDOMNESS: LargeBiPrimeSizedNumber =
        LargeBiPrimeSizedNumber::from_u128(14972380668335538207658515373379008223);
    pub const CIPHERTEXT: CiphertextSpaceValue =
        CiphertextSpaceValue::from_u128(113892038734439757816648928291563035903);

    pub const N_DECIMAL: &str = "12339172240886319109";
    pub const G_DECIMAL: &str = "12339172240886319110";
    pub const N2_DECIMAL: &str = "152255171590259505891894229882978553881";
    pub const PLAINTEXT_DECIMAL: &str = "102030405";
    pub const RANDOMNESS_DECIMAL: &str = "14972380668335538207658515373379008223";
    pub const CIPHERTEXT_DECIMAL: &str = "113892038734439757816648928291563035903";

    // A 511-bit $N = pq$.
    pub const LARGE_N: LargeBiPrimeSizedNumber = LargeBiPrimeSizedNumber::from_be_hex("00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000070c353996ad0f8ec6cd3aa772b96da556e6667b4861c7c70ef6b021a66db1fc5b732359f73fb2bb5ecedd4c14bfb9c553af819bdb647b826db669ed2e66bcc39");
    pub const LARGE_N2: PaillierModulusSizedNumber = PaillierModulusSizedNumber::from_be_hex("00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000031ab7e2eb47c6b5e732b918289967de3eb3063697e2828fd0c0db3b945fea6e27e40b1960915f30fef66fbecc5bb321904e5d67dea84e2ba8dcba6d5ead9a2b0f82bac9d4508e689ddb132733e1f27e9411ca27571952b22367030e92dc07de23bea00e5997e60720af6fcd275cf91b226ead30d7a05a0682bc349dec690e4b1");
    pub const LARGE_PLAINTEXT: PlaintextSpaceValue = PlaintextSpaceValue::from_be_hex("0000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000004c77c53ab5eecadaa2734cfde419e849040fba8f9d1ed899532e688af10066b848257759ad3daf66d17f11c623a255d56fb6f0c22d84b75a1ac924acffd342bd");
    pub const LARGE_RANDOMNESS: RandomnessSpaceValue = RandomnessSpaceValue::from_be_hex("0000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000006cde11f38460dd8af152ff31fbfe6aa7e90a68c598bd1ec7c3eb87e213003ba7305a823ca135ef729889933a033a81a0e3b1f74fda68411ee867d287a8a50ea5");
    pub const LARGE_CIPHERTEXT: CiphertextSpaceValue = CiphertextSpaceValue::from_be_hex("0000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000001e1d5794f76c86caab848b82595993b5cd23473d9e037ae10414bcb36512840341f0fbeb2bec2d906c6037113eaf3e34a611b4f97018bf34b6fafca2e75e034be8c11c7956659524a2aea156a712c233911afd2ddcaa764982eda9e96bc127412d31f3e721f2bc9fcf24aaab3e099caacf26895e28554e6f761c3d3b74b6d474");

    pub const LARGE_N_DECIMAL: &str = "5905877227226898992497401509153781350744481031038582728027421554453647832926740154830662861788081372139139151597393381311338695485376732187256961710672953";
    pub const LARGE_N2_DECIMAL: &str = "34879385823077284714290778011969834506938211818541593407493292428507273394092696950260346007365184467978024883067251562394279699218626826550666165828551463563855089905503120587013526954884830328236031504523925704578037612461934566399893176181962536278181583099452681960123791448974604971628392407712125740209";
    pub const LARGE_CIPHERTEXT_DECIMAL: &str = "21147203670766284722019061807823442995053048984176149858450440085240284927916591973286446404946876824019493962126499431535034668326607232429330376479993670168455330275782169928890540956027262277071219109387914783929703770372210645759624655417762192465748421400373551538343520919955371656677736520876614407284";

    /// Generates an encryption key for a fresh $N = pq$ with two distinct `prime_bits`-bit primes.
    ///
    /// Only meant for tests: the factorization is discarded, and no safe-prime or size checks are
    /// performed.
    pub fn random_encryption_key(prime_bits: usize, rng: &mut impl CryptoRngCore) -> EncryptionKey {
        let p: LargeBiPrimeSizedNumber =
            crypto_primes::generate_prime_with_rng::<{ LargePrimeSizedNumber::LIMBS }>(
                rng,
                Some(prime_bits),
            )
            .resize();

        let q = loop {
            let q: LargeBiPrimeSizedNumber =
                crypto_primes::generate_prime_with_rng::<{ LargePrimeSizedNumber::LIMBS }>(
                    rng,
                    Some(prime_bits),
                )
                .resize();

            if q != p {
                break q;
            }
        };

        EncryptionKey::new(arithmetic::mul(&p, &q).unwrap()).unwrap()
    }
}
