use brine::Error;
use brine::auth::{KEY_BYTES, TAG_BYTES, auth, verify};
use sha2::{Digest, Sha512};

fn key_from(prefix: &[u8]) -> [u8; KEY_BYTES] {
    let mut key = [0u8; KEY_BYTES];
    key[..prefix.len()].copy_from_slice(prefix);
    key
}

fn h32(s: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    hex::decode_to_slice(s, &mut out).expect("valid hex");
    out
}

/// HMAC-SHA-512 built directly on the `sha2` crate, truncated to 32 bytes.
fn reference_hmac(message: &[u8], key: &[u8; KEY_BYTES]) -> [u8; TAG_BYTES] {
    let mut ipad = [0x36u8; 128];
    let mut opad = [0x5cu8; 128];
    for (i, k) in key.iter().enumerate() {
        ipad[i] ^= k;
        opad[i] ^= k;
    }

    let inner = Sha512::new().chain_update(ipad).chain_update(message).finalize();
    let outer = Sha512::new().chain_update(opad).chain_update(inner).finalize();

    let mut tag = [0u8; TAG_BYTES];
    tag.copy_from_slice(&outer[..TAG_BYTES]);
    tag
}

// -------------------------------------------------------
// RFC 4231 (first 32 bytes of HMAC-SHA-512)
// -------------------------------------------------------

#[test]
fn rfc4231_case_1() {
    let key = key_from(&[0x0b; 20]);

    assert_eq!(
        auth(b"Hi There", &key),
        h32("87aa7cdea5ef619d4ff0b4241a1d6cb02379f4e2ce4ec2787ad0b30545e17cde")
    );
}

#[test]
fn rfc4231_case_2() {
    let key = key_from(b"Jefe");

    assert_eq!(
        auth(b"what do ya want for nothing?", &key),
        h32("164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554")
    );
}

// -------------------------------------------------------
// AGAINST A REFERENCE IMPLEMENTATION
// -------------------------------------------------------

#[test]
fn hmac_matches_reference_across_lengths() {
    let key: [u8; KEY_BYTES] = std::array::from_fn(|i| (i * 13 + 1) as u8);
    let data: Vec<u8> = (0..400u32).map(|i| (i % 251) as u8).collect();

    for len in [0, 1, 63, 64, 111, 112, 127, 128, 129, 255, 256, 400] {
        assert_eq!(
            auth(&data[..len], &key),
            reference_hmac(&data[..len], &key),
            "length {len}"
        );
    }
}

// -------------------------------------------------------
// VERIFY
// -------------------------------------------------------

#[test]
fn hmac_verify_accepts_valid_tag() {
    let key = [0x33u8; KEY_BYTES];
    let tag = auth(b"payload", &key);

    assert_eq!(verify(&tag, b"payload", &key), Ok(()));
}

#[test]
fn hmac_verify_rejects_any_flipped_tag_bit() {
    let key = [0x44u8; KEY_BYTES];
    let tag = auth(b"payload", &key);

    for bit in 0..TAG_BYTES * 8 {
        let mut bad = tag;
        bad[bit / 8] ^= 1 << (bit % 8);
        assert_eq!(
            verify(&bad, b"payload", &key),
            Err(Error::AuthenticationFailed)
        );
    }
}

#[test]
fn hmac_verify_rejects_other_message_or_key() {
    let key = [0x55u8; KEY_BYTES];
    let tag = auth(b"payload", &key);

    assert!(verify(&tag, b"payloae", &key).is_err());
    assert!(verify(&tag, b"payload", &[0x56u8; KEY_BYTES]).is_err());
}
