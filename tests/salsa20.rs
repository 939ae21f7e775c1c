use nacl_primitives::Error;
use nacl_primitives::stream::salsa20::core::{SIGMA, hsalsa20, salsa20_block};
use nacl_primitives::stream::{stream, stream_xor, stream_xor_in_place, stream_xor_skip32};
use proptest::prelude::*;
use sha2::{Digest, Sha256};

// Shared secret of the NaCl box example (Curve25519 of Alice and Bob).
const SHARED: [u8; 32] = [
    0x4a, 0x5d, 0x9d, 0x5b, 0xa4, 0xce, 0x2d, 0xe1, 0x72, 0x8e, 0x3b, 0xf4, 0x80, 0x35, 0x0f, 0x25,
    0xe0, 0x7e, 0x21, 0xc9, 0x47, 0xd1, 0x9e, 0x33, 0x76, 0xf0, 0x9b, 0x3c, 0x1e, 0x16, 0x17, 0x42,
];

const NONCE24: [u8; 24] = [
    0x69, 0x69, 0x6e, 0xe9, 0x55, 0xb6, 0x2b, 0x73, 0xcd, 0x62, 0xbd, 0xa8, 0x75, 0xfc, 0x73, 0xd6,
    0x82, 0x19, 0xe0, 0x03, 0x6b, 0x7a, 0x0b, 0x37,
];

fn hex32(s: &str) -> [u8; 32] {
    hex::decode(s).unwrap().try_into().unwrap()
}

#[test]
fn all_zero_inputs_give_all_zero_blocks() {
    assert_eq!(salsa20_block(&[0; 16], &[0; 32], &[0; 16]), [0u8; 64]);
    assert_eq!(hsalsa20(&[0; 16], &[0; 32], &[0; 16]), [0u8; 32]);
}

#[test]
fn hsalsa20_derives_first_box_key() {
    let out = hsalsa20(&[0; 16], &SHARED, &SIGMA);
    assert_eq!(
        out,
        hex32("1b27556473e985d462cd51197a9a46c76009549eac6474f206c4ee0844f68389")
    );
}

#[test]
fn hsalsa20_derives_second_box_key() {
    let first = hex32("1b27556473e985d462cd51197a9a46c76009549eac6474f206c4ee0844f68389");
    let input: [u8; 16] = NONCE24[..16].try_into().unwrap();

    let out = hsalsa20(&input, &first, &SIGMA);
    assert_eq!(
        out,
        hex32("dc908dda0b9344a953629b733820778880f3ceb421bb61b91cbd4c3e66256ce4")
    );
}

#[test]
fn keystream_matches_ecrypt_set1_vector0() {
    let mut key = [0u8; 32];
    key[0] = 0x80;

    let mut out = [0u8; 32];
    stream(&mut out, &[0; 8], &key);
    assert_eq!(
        hex::encode(out),
        "e3be8fdd8beca2e3ea8ef9475b29a6e7003951e1097a5c38d23b7a5fad9f6844"
    );
}

#[test]
fn long_keystream_matches_nacl_stream2() {
    let key = hex32("dc908dda0b9344a953629b733820778880f3ceb421bb61b91cbd4c3e66256ce4");
    let nonce: [u8; 8] = NONCE24[16..].try_into().unwrap();

    let mut out = vec![0u8; 4_194_304];
    stream(&mut out, &nonce, &key);
    assert_eq!(
        hex::encode(Sha256::digest(&out)),
        "662b9d0e3463029156069b12f918691a98f7dfb2ca0393c96bbfc6b1fbd630a2"
    );
}

#[test]
fn empty_message_gives_empty_output() {
    let mut out = [0xeeu8; 4];
    stream_xor(&mut out, &[], &[1; 8], &[2; 32]).unwrap();
    assert_eq!(out, [0xee; 4]);

    let mut empty: [u8; 0] = [];
    stream(&mut empty, &[1; 8], &[2; 32]);
    stream_xor_skip32(None, &mut out, &[], &[1; 8], &[2; 32]).unwrap();
    assert_eq!(out, [0xee; 4]);
}

#[test]
fn skip32_returns_mac_key_for_empty_message() {
    let key = [3u8; 32];
    let nonce = [4u8; 8];

    let mut full = [0u8; 32];
    stream(&mut full, &nonce, &key);

    let mut mac_key = [0u8; 32];
    stream_xor_skip32(Some(&mut mac_key), &mut [], &[], &nonce, &key).unwrap();
    assert_eq!(mac_key, full);
}

#[test]
fn short_output_buffers_are_rejected() {
    let msg = [0u8; 10];
    let mut out = [0u8; 9];

    assert_eq!(
        stream_xor(&mut out, &msg, &[0; 8], &[0; 32]),
        Err(Error::InvalidLength {
            needed: 10,
            available: 9
        })
    );

    let mut mac_key = [0u8; 32];
    assert!(stream_xor_skip32(Some(&mut mac_key), &mut out, &msg, &[0; 8], &[0; 32]).is_err());
    assert_eq!(mac_key, [0u8; 32]);
}

#[test]
fn longer_output_buffer_keeps_its_tail() {
    let msg = [0u8; 5];
    let mut out = [0xaau8; 8];
    stream_xor(&mut out, &msg, &[0; 8], &[0; 32]).unwrap();
    assert_eq!(&out[5..], &[0xaa; 3]);
}

proptest! {
    #[test]
    fn stream_xor_is_an_involution(
        msg in proptest::collection::vec(any::<u8>(), 0..300),
        nonce in any::<[u8; 8]>(),
        key in any::<[u8; 32]>(),
    ) {
        let mut ct = vec![0u8; msg.len()];
        stream_xor(&mut ct, &msg, &nonce, &key).unwrap();

        let mut pt = vec![0u8; msg.len()];
        stream_xor(&mut pt, &ct, &nonce, &key).unwrap();
        prop_assert_eq!(&pt, &msg);

        let mut in_place = ct.clone();
        stream_xor_in_place(&mut in_place, &nonce, &key);
        prop_assert_eq!(&in_place, &msg);
    }

    #[test]
    fn stream_xor_is_message_xor_keystream(
        msg in proptest::collection::vec(any::<u8>(), 0..300),
        nonce in any::<[u8; 8]>(),
        key in any::<[u8; 32]>(),
    ) {
        let mut ks = vec![0u8; msg.len()];
        stream(&mut ks, &nonce, &key);

        let mut ct = vec![0u8; msg.len()];
        stream_xor(&mut ct, &msg, &nonce, &key).unwrap();

        let expected: Vec<u8> = msg.iter().zip(&ks).map(|(m, k)| m ^ k).collect();
        prop_assert_eq!(ct, expected);
    }

    #[test]
    fn skip32_matches_stream_offset_by_32(
        msg in proptest::collection::vec(any::<u8>(), 0..300),
        nonce in any::<[u8; 8]>(),
        key in any::<[u8; 32]>(),
    ) {
        let mut padded = vec![0u8; 32];
        padded.extend_from_slice(&msg);
        let mut full = vec![0u8; padded.len()];
        stream_xor(&mut full, &padded, &nonce, &key).unwrap();

        let mut mac_key = [0u8; 32];
        let mut out = vec![0u8; msg.len()];
        stream_xor_skip32(Some(&mut mac_key), &mut out, &msg, &nonce, &key).unwrap();

        prop_assert_eq!(&mac_key[..], &full[..32]);
        prop_assert_eq!(&out[..], &full[32..]);
    }
}
