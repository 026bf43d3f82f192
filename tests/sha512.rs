use edmont::hash::sha512;
use sha2::{Digest, Sha512};

fn expect_sha512_eq(input: &[u8], expected_hex: &str) {
    assert_eq!(
        hex::encode(sha512(input)),
        expected_hex,
        "digest mismatch for input {input:?}"
    );
}

fn matches_reference(input: &[u8]) {
    let reference = Sha512::digest(input);
    assert_eq!(
        sha512(input)[..],
        reference[..],
        "mismatch with the sha2 crate at length {}",
        input.len()
    );
}

// -------------------------------------------------------
// 1. OFFICIAL VECTOR TESTS
// -------------------------------------------------------

#[test]
fn sha512_empty_vector() {
    expect_sha512_eq(
        &[],
        "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
         47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e",
    );
}

#[test]
fn sha512_abc_vector() {
    expect_sha512_eq(
        b"abc",
        "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
         2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
    );
}

#[test]
fn sha512_known_phrase() {
    expect_sha512_eq(
        b"The quick brown fox jumps over the lazy dog",
        "07e547d9586f6a73f73fbac0435ed76951218fb7d0c8d788a309d785436bbb64\
         2e93a252a954f23912547d1e8a3b5ed6e1bfd7097821233fa0538f3db854fee6",
    );
}

// -------------------------------------------------------
// 2. CROSS-CHECK AGAINST AN AUDITED IMPLEMENTATION
// -------------------------------------------------------

#[test]
fn sha512_incremental_lengths_match_the_sha2_crate() {
    let mut buf = Vec::with_capacity(256);
    for i in 0..256 {
        buf.push(i as u8);
        matches_reference(&buf);
    }
}

#[test]
fn sha512_padding_boundaries_match_the_sha2_crate() {
    for len in [110usize, 111, 112, 113, 127, 128, 129, 240, 255, 256] {
        matches_reference(&vec![0xFFu8; len]);
    }
}

#[test]
fn sha512_large_multiblock_matches_the_sha2_crate() {
    let buf: Vec<u8> = (0..5000u32).map(|i| (i % 256) as u8).collect();
    matches_reference(&buf);
}

#[test]
fn sha512_1mb_data_matches_the_sha2_crate() {
    matches_reference(&vec![0xAAu8; 1_000_000]);
}

#[test]
fn sha512_single_bytes_match_the_sha2_crate() {
    for b in 0u8..=255 {
        matches_reference(&[b]);
    }
}
