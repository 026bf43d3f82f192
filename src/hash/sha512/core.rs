//! SHA-512 core hashing functions
//!
//! Implements the compression function on 1024-bit blocks and a
//! complete SHA-512 over arbitrary-length input, following the standard
//! Merkle–Damgård construction from FIPS 180-4.

use crate::hash::sha512::H512_INIT;
use crate::hash::sha512::computations::all_rounds;

/// Compresses a single 1024-bit message block into the running state.
///
/// Input words are interpreted as big-endian, as required by SHA-512;
/// the full message schedule is expanded inside `all_rounds`.
#[inline(always)]
pub fn compress(block: &[u8; 128], state: &mut [u64; 8]) {
    let mut w = [0u64; 16];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(8)) {
        *slot = u64::from_be_bytes(chunk.try_into().unwrap());
    }

    all_rounds(state, w);
}

/// Computes the SHA-512 hash of the given input.
///
/// Processes full 128-byte blocks, then applies the padding rules: a
/// single 0x80 byte, zeros, and the bit length as a 128-bit big-endian
/// integer. Two final blocks are needed when fewer than 17 bytes of the
/// last block remain free. No heap allocations are performed.
pub fn sha512(input: &[u8]) -> [u8; 64] {
    let mut state = H512_INIT;

    let mut i = 0;
    let len = input.len();

    while i + 128 <= len {
        let block: &[u8; 128] = input[i..i + 128].try_into().unwrap();
        compress(block, &mut state);
        i += 128;
    }

    let mut block = [0u8; 128];
    let rem = len - i;

    block[..rem].copy_from_slice(&input[i..]);
    block[rem] = 0x80;

    if rem > 111 {
        compress(&block, &mut state);
        block = [0; 128];
    }

    let bit_len = (len as u128) << 3;
    block[112..128].copy_from_slice(&bit_len.to_be_bytes());

    compress(&block, &mut state);

    let mut out = [0u8; 64];
    for (i, word) in state.iter().enumerate() {
        out[i * 8..(i + 1) * 8].copy_from_slice(&word.to_be_bytes());
    }

    out
}
