use brine::encryption::salsa20::{
    KEY_BYTES, NONCE_BYTES, SIGMA, core_hsalsa20, core_salsa20, stream, stream_xor,
};

fn h32(s: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    hex::decode_to_slice(s, &mut out).expect("valid hex");
    out
}

// -------------------------------------------------------
// HSALSA20 KEY DERIVATION (NaCl box vectors)
// -------------------------------------------------------

#[test]
fn hsalsa20_derives_box_first_key() {
    let shared = h32("4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742");

    assert_eq!(
        core_hsalsa20(&[0u8; 16], &shared, &SIGMA),
        h32("1b27556473e985d462cd51197a9a46c76009549eac6474f206c4ee0844f68389")
    );
}

#[test]
fn hsalsa20_derives_box_second_key() {
    let first = h32("1b27556473e985d462cd51197a9a46c76009549eac6474f206c4ee0844f68389");
    let mut nonce_head = [0u8; 16];
    hex::decode_to_slice("69696ee955b62b73cd62bda875fc73d6", &mut nonce_head).unwrap();

    assert_eq!(
        core_hsalsa20(&nonce_head, &first, &SIGMA),
        h32("dc908dda0b9344a953629b733820778880f3ceb421bb61b91cbd4c3e66256ce4")
    );
}

// -------------------------------------------------------
// SALSA20 CORE
// -------------------------------------------------------

#[test]
fn salsa20_core_depends_on_every_input() {
    let input = [3u8; 16];
    let key = [4u8; 32];
    let base = core_salsa20(&input, &key, &SIGMA);

    let mut other_input = input;
    other_input[15] ^= 1;
    assert_ne!(core_salsa20(&other_input, &key, &SIGMA), base);

    let mut other_key = key;
    other_key[0] ^= 0x80;
    assert_ne!(core_salsa20(&input, &other_key, &SIGMA), base);

    let mut other_constant = SIGMA;
    other_constant[5] ^= 1;
    assert_ne!(core_salsa20(&input, &key, &other_constant), base);
}

#[test]
fn salsa20_core_zero_key_and_input() {
    let expected = hex::decode(
        "9a97f65b9b4c721b960a672145fca8d4e32e67f9111ea979ce9c4826806aeee6\
         3de9c0da2bd7f91ebcb2639bf989c6251b29bf38d39a9bdce7c55f4b2ac12a39",
    )
    .expect("valid hex");

    assert_eq!(core_salsa20(&[0u8; 16], &[0u8; 32], &SIGMA)[..], expected[..]);
}

// -------------------------------------------------------
// XSALSA20 STREAM
// -------------------------------------------------------

#[test]
fn xsalsa20_first_block_is_salsa20_under_the_hsalsa20_subkey() {
    let key: [u8; KEY_BYTES] = std::array::from_fn(|i| i as u8);
    let nonce: [u8; NONCE_BYTES] = std::array::from_fn(|i| 0x80 + i as u8);

    let mut head = [0u8; 16];
    head.copy_from_slice(&nonce[..16]);
    let subkey = core_hsalsa20(&head, &key, &SIGMA);

    let mut input = [0u8; 16];
    input[..8].copy_from_slice(&nonce[16..]);

    let mut keystream = [0u8; 64];
    stream(&mut keystream, &nonce, &key);

    assert_eq!(keystream, core_salsa20(&input, &subkey, &SIGMA));
}

#[test]
fn xsalsa20_prefixes_agree_across_lengths() {
    let key = [0x17u8; KEY_BYTES];
    let nonce = [0x71u8; NONCE_BYTES];

    let mut long = [0u8; 300];
    stream(&mut long, &nonce, &key);

    for len in [0, 1, 63, 64, 65, 128, 191, 299] {
        let mut short = vec![0u8; len];
        stream(&mut short, &nonce, &key);
        assert_eq!(&short[..], &long[..len]);
    }
}

#[test]
fn xsalsa20_xor_is_an_involution() {
    let key = [0x99u8; KEY_BYTES];
    let nonce = [0x11u8; NONCE_BYTES];
    let message: Vec<u8> = (0..777u32).map(|i| (i ^ 0x5a) as u8).collect();

    let mut ciphertext = vec![0u8; message.len()];
    stream_xor(&mut ciphertext, &message, &nonce, &key).expect("xor");
    assert_ne!(ciphertext, message);

    let mut recovered = vec![0u8; message.len()];
    stream_xor(&mut recovered, &ciphertext, &nonce, &key).expect("xor");
    assert_eq!(recovered, message);
}

#[test]
fn xsalsa20_nonce_separates_streams() {
    let key = [5u8; KEY_BYTES];
    let mut a = [0u8; 64];
    let mut b = [0u8; 64];

    let mut nonce = [0u8; NONCE_BYTES];
    stream(&mut a, &nonce, &key);
    nonce[23] = 1;
    stream(&mut b, &nonce, &key);

    assert_ne!(a, b);
}
