use rand_core::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::ct::verify_32;
use crate::curve25519::edwards::EdwardsPoint;
use crate::curve25519::scalar;
use crate::error::{Error, Result};
use crate::hash::sha512::{Sha512, sha512};
use crate::rng::fill_random;

/// Seed size in bytes.
pub const SEED_BYTES: usize = 32;

/// Public key size in bytes.
pub const PUBLIC_KEY_BYTES: usize = 32;

/// Secret key size in bytes (`seed ‖ public key`).
pub const SECRET_KEY_BYTES: usize = 64;

/// Signature size in bytes (`R ‖ S`).
pub const SIGNATURE_BYTES: usize = 64;

/// Ed25519 public key: a compressed Edwards point `A = [a]B`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey([u8; PUBLIC_KEY_BYTES]);

impl PublicKey {
    pub fn from_bytes(bytes: [u8; PUBLIC_KEY_BYTES]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_BYTES] {
        &self.0
    }

    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_BYTES] {
        self.0
    }
}

/// Ed25519 secret key, stored as `seed ‖ public key`.
///
/// The signing scalar and nonce prefix are re-derived from the seed on
/// every signature and wiped afterwards. The stored public key is used as
/// is when hashing `R ‖ A ‖ M`; it is not checked against the seed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    seed: [u8; SEED_BYTES],
    public: [u8; PUBLIC_KEY_BYTES],
}

impl SecretKey {
    pub fn from_bytes(bytes: [u8; SECRET_KEY_BYTES]) -> Self {
        let mut seed = [0u8; SEED_BYTES];
        let mut public = [0u8; PUBLIC_KEY_BYTES];

        seed.copy_from_slice(&bytes[..SEED_BYTES]);
        public.copy_from_slice(&bytes[SEED_BYTES..]);

        Self { seed, public }
    }

    pub fn to_bytes(&self) -> [u8; SECRET_KEY_BYTES] {
        let mut out = [0u8; SECRET_KEY_BYTES];

        out[..SEED_BYTES].copy_from_slice(&self.seed);
        out[SEED_BYTES..].copy_from_slice(&self.public);

        out
    }

    pub fn seed(&self) -> &[u8; SEED_BYTES] {
        &self.seed
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.public)
    }
}

/// Ed25519 signature `R ‖ S`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signature([u8; SIGNATURE_BYTES]);

impl Signature {
    pub fn from_bytes(bytes: [u8; SIGNATURE_BYTES]) -> Self {
        Self(bytes)
    }

    pub fn to_bytes(&self) -> [u8; SIGNATURE_BYTES] {
        self.0
    }

    fn split(&self) -> ([u8; 32], [u8; 32]) {
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];

        r.copy_from_slice(&self.0[..32]);
        s.copy_from_slice(&self.0[32..]);

        (r, s)
    }
}

/// Signing scalar `a` (clamped) and nonce prefix, both halves of
/// `SHA-512(seed)`.
#[derive(Zeroize, ZeroizeOnDrop)]
struct ExpandedSecret {
    scalar: [u8; 32],
    prefix: [u8; 32],
}

fn expand(seed: &[u8; SEED_BYTES]) -> ExpandedSecret {
    let mut digest = sha512(seed);

    let mut expanded = ExpandedSecret {
        scalar: [0u8; 32],
        prefix: [0u8; 32],
    };
    expanded.scalar.copy_from_slice(&digest[..32]);
    expanded.prefix.copy_from_slice(&digest[32..]);
    scalar::clamp(&mut expanded.scalar);

    digest.zeroize();

    expanded
}

/// `h = SHA-512(R ‖ A ‖ M) mod L`.
fn challenge(r: &[u8; 32], public: &[u8; PUBLIC_KEY_BYTES], message: &[u8]) -> [u8; 32] {
    let mut hasher = Sha512::new();
    hasher.update(r);
    hasher.update(public);
    hasher.update(message);

    scalar::reduce(&hasher.finalize())
}

/// Derives the key pair for a 32-byte seed.
///
/// This is the deterministic half of key generation and is what RFC 8032
/// test vectors exercise.
pub fn keypair_from_seed(seed: &[u8; SEED_BYTES]) -> (PublicKey, SecretKey) {
    let expanded = expand(seed);
    let public = EdwardsPoint::mul_base(&expanded.scalar).compress();

    (
        PublicKey(public),
        SecretKey {
            seed: *seed,
            public,
        },
    )
}

/// Generates a key pair from a fresh random seed.
pub fn keypair<R: RngCore + CryptoRng>(rng: &mut R) -> (PublicKey, SecretKey) {
    let mut seed = [0u8; SEED_BYTES];
    fill_random(rng, &mut seed);

    let pair = keypair_from_seed(&seed);
    seed.zeroize();

    pair
}

/// Generates a key pair using the operating system's random source.
#[cfg(feature = "getrandom")]
pub fn generate_keypair() -> (PublicKey, SecretKey) {
    keypair(&mut crate::rng::OsRng)
}

/// Signs `message` and returns the detached signature.
///
/// ## Algorithm
///
/// 1. `r = SHA-512(prefix ‖ M) mod L`
/// 2. `R = [r]B`
/// 3. `h = SHA-512(R ‖ A ‖ M) mod L`
/// 4. `S = (r + h·a) mod L`
///
/// Signing is deterministic: the same key and message always give the
/// same signature.
pub fn sign_detached(message: &[u8], secret: &SecretKey) -> Signature {
    let expanded = expand(&secret.seed);

    let mut hasher = Sha512::new();
    hasher.update(&expanded.prefix);
    hasher.update(message);
    let mut nonce_wide = hasher.finalize();

    let mut r = scalar::reduce(&nonce_wide);
    let big_r = EdwardsPoint::mul_base(&r).compress();

    let h = challenge(&big_r, &secret.public, message);
    let s = scalar::mul_add(&h, &expanded.scalar, &r);

    nonce_wide.zeroize();
    r.zeroize();

    let mut signature = [0u8; SIGNATURE_BYTES];
    signature[..32].copy_from_slice(&big_r);
    signature[32..].copy_from_slice(&s);

    Signature(signature)
}

/// Writes `signature ‖ message` into `signed`.
///
/// `signed` must be exactly `message.len() + SIGNATURE_BYTES` long.
pub fn sign(signed: &mut [u8], message: &[u8], secret: &SecretKey) -> Result<()> {
    let expected = message.len() + SIGNATURE_BYTES;
    if signed.len() != expected {
        return Err(Error::LengthMismatch {
            expected,
            actual: signed.len(),
        });
    }

    let signature = sign_detached(message, secret);

    signed[..SIGNATURE_BYTES].copy_from_slice(&signature.0);
    signed[SIGNATURE_BYTES..].copy_from_slice(message);

    Ok(())
}

/// Verifies a detached signature.
///
/// Accepts iff `[S]B − [h]A` encodes to `R`, with the final comparison in
/// constant time. `S` is used as given, without a range check against `L`.
pub fn verify_detached(signature: &Signature, message: &[u8], public: &PublicKey) -> Result<()> {
    let a = EdwardsPoint::decompress(&public.0).inspect_err(|_| {
        tracing::debug!("ed25519 public key rejected");
    })?;

    let (r, s) = signature.split();
    let h = challenge(&r, &public.0, message);

    let check = ((-a).scalar_mul(&h) + EdwardsPoint::mul_base(&s)).compress();

    verify_32(&check, &r).inspect_err(|_| {
        tracing::debug!(message_len = message.len(), "ed25519 signature rejected");
    })
}

/// Verifies a signed message and copies the message out.
///
/// `signed` is `signature ‖ message`; `message` must be exactly
/// `signed.len() - SIGNATURE_BYTES` long. Returns the message length.
///
/// If verification fails, `message` is zero-filled before the error is
/// returned. Length errors leave it untouched.
pub fn open(message: &mut [u8], signed: &[u8], public: &PublicKey) -> Result<usize> {
    if signed.len() < SIGNATURE_BYTES {
        tracing::debug!(signed_len = signed.len(), "ed25519 signed message too short");
        return Err(Error::BufferTooShort {
            minimum: SIGNATURE_BYTES,
            actual: signed.len(),
        });
    }

    let (head, body) = signed.split_at(SIGNATURE_BYTES);
    if message.len() != body.len() {
        return Err(Error::LengthMismatch {
            expected: body.len(),
            actual: message.len(),
        });
    }

    let mut signature = [0u8; SIGNATURE_BYTES];
    signature.copy_from_slice(head);

    match verify_detached(&Signature(signature), body, public) {
        Ok(()) => {
            message.copy_from_slice(body);
            Ok(body.len())
        }
        Err(e) => {
            message.fill(0);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn secret_key_bytes_are_seed_then_public() {
        let seed = [0x11u8; 32];
        let (public, secret) = keypair_from_seed(&seed);

        let bytes = secret.to_bytes();
        assert_eq!(&bytes[..32], &seed);
        assert_eq!(&bytes[32..], public.as_bytes());
        assert_eq!(SecretKey::from_bytes(bytes).public_key(), public);
    }

    #[test]
    fn seeded_rng_gives_reproducible_keys() {
        let (a, _) = keypair(&mut StdRng::seed_from_u64(99));
        let (b, _) = keypair(&mut StdRng::seed_from_u64(99));
        let (c, _) = keypair(&mut StdRng::seed_from_u64(100));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn signature_s_is_reduced() {
        let (_, secret) = keypair_from_seed(&[3u8; 32]);
        let signature = sign_detached(b"reduced", &secret).to_bytes();

        // S < L < 2^253
        assert_eq!(signature[63] & 0xe0, 0);
    }
}
