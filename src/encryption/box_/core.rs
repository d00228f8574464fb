use rand_core::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::encryption::salsa20::{SIGMA, core_hsalsa20};
use crate::encryption::secretbox;
use crate::error::Result;
use crate::keys::x25519::{scalarmult, scalarmult_base};
use crate::rng::fill_random;

/// Public key size in bytes.
pub const PUBLIC_KEY_BYTES: usize = 32;

/// Secret key size in bytes.
pub const SECRET_KEY_BYTES: usize = 32;

/// Precomputed shared key size in bytes.
pub const SHARED_KEY_BYTES: usize = 32;

/// Nonce size in bytes.
pub const NONCE_BYTES: usize = secretbox::NONCE_BYTES;

/// Zero padding required at the start of every plaintext.
pub const ZERO_BYTES: usize = secretbox::ZERO_BYTES;

/// Zero bytes at the start of every ciphertext, ahead of the tag.
pub const BOX_ZERO_BYTES: usize = secretbox::BOX_ZERO_BYTES;

/// X25519 public key (a Montgomery u-coordinate).
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

/// X25519 secret scalar. Clamped at use, stored as drawn.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey([u8; SECRET_KEY_BYTES]);

impl SecretKey {
    pub fn from_bytes(bytes: [u8; SECRET_KEY_BYTES]) -> Self {
        Self(bytes)
    }

    pub fn to_bytes(&self) -> [u8; SECRET_KEY_BYTES] {
        self.0
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey(scalarmult_base(&self.0))
    }
}

/// Secretbox key derived from one side's secret and the other's public key.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedKey([u8; SHARED_KEY_BYTES]);

impl SharedKey {
    pub fn as_bytes(&self) -> &[u8; SHARED_KEY_BYTES] {
        &self.0
    }
}

/// Generates a key pair: 32 random bytes and their X25519 public key.
pub fn keypair<R: RngCore + CryptoRng>(rng: &mut R) -> (PublicKey, SecretKey) {
    let mut secret = SecretKey([0u8; SECRET_KEY_BYTES]);
    fill_random(rng, &mut secret.0);

    (secret.public_key(), secret)
}

/// Generates a key pair using the operating system's random source.
#[cfg(feature = "getrandom")]
pub fn generate_keypair() -> (PublicKey, SecretKey) {
    keypair(&mut crate::rng::OsRng)
}

/// Derives the shared secretbox key.
///
/// ```text
/// k = HSalsa20(0¹⁶, X25519(my_secret, their_public), σ)
/// ```
///
/// The raw X25519 output is only ever used as HSalsa20 input and is wiped
/// afterwards.
pub fn beforenm(their_public: &PublicKey, my_secret: &SecretKey) -> SharedKey {
    let mut shared_point = scalarmult(&my_secret.0, &their_public.0);
    let key = core_hsalsa20(&[0u8; 16], &shared_point, &SIGMA);
    shared_point.zeroize();

    SharedKey(key)
}

/// Secretbox `seal` under a precomputed shared key.
pub fn seal_afternm(
    ciphertext: &mut [u8],
    message: &[u8],
    nonce: &[u8; NONCE_BYTES],
    shared: &SharedKey,
) -> Result<()> {
    secretbox::seal(ciphertext, message, nonce, &shared.0)
}

/// Secretbox `open` under a precomputed shared key.
pub fn open_afternm(
    message: &mut [u8],
    ciphertext: &[u8],
    nonce: &[u8; NONCE_BYTES],
    shared: &SharedKey,
) -> Result<()> {
    secretbox::open(message, ciphertext, nonce, &shared.0).inspect_err(|_| {
        tracing::debug!(ciphertext_len = ciphertext.len(), "box open rejected");
    })
}

/// Encrypts `message` from `my_secret` to `their_public`.
pub fn seal(
    ciphertext: &mut [u8],
    message: &[u8],
    nonce: &[u8; NONCE_BYTES],
    their_public: &PublicKey,
    my_secret: &SecretKey,
) -> Result<()> {
    let shared = beforenm(their_public, my_secret);
    seal_afternm(ciphertext, message, nonce, &shared)
}

/// Decrypts `ciphertext` sent by `their_public` to `my_secret`.
pub fn open(
    message: &mut [u8],
    ciphertext: &[u8],
    nonce: &[u8; NONCE_BYTES],
    their_public: &PublicKey,
    my_secret: &SecretKey,
) -> Result<()> {
    let shared = beforenm(their_public, my_secret);
    open_afternm(message, ciphertext, nonce, &shared)
}
