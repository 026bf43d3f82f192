/// Constant-time 32-byte equality; no early exit, no data-dependent
/// branches inside the loop.
#[inline(never)]
pub(crate) fn equal_32(x: &[u8; 32], y: &[u8; 32]) -> bool {
    let mut r: u8 = 0;

    for i in 0..32 {
        r |= x[i] ^ y[i];
    }

    r == 0
}

#[cfg(test)]
mod tests {
    use super::equal_32;

    #[test]
    fn detects_equality_and_every_difference_position() {
        let a = [0xABu8; 32];
        assert!(equal_32(&a, &a));

        for position in 0..32 {
            let mut b = a;
            b[position] ^= 1;
            assert!(!equal_32(&a, &b));
        }
    }
}
