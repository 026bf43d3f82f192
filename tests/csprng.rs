use edmont::rng::{Csprng, EntropySource};

#[test]
fn csprng_is_deterministic_from_a_seed() {
    let mut rng1 = Csprng::from_seed([0x42u8; 32]);
    let mut rng2 = Csprng::from_seed([0x42u8; 32]);

    let mut a = [0u8; 128];
    let mut b = [0u8; 128];

    rng1.fill_bytes(&mut a);
    rng2.fill_bytes(&mut b);

    assert_eq!(a, b);
}

#[test]
fn csprng_rekey_changes_output() {
    let mut rng = Csprng::from_seed([0xAAu8; 32]);

    let mut a = [0u8; 64];
    let mut b = [0u8; 64];

    rng.fill_bytes(&mut a);
    rng.fill_bytes(&mut b);

    assert_ne!(a, b);
}

#[test]
fn csprng_output_is_not_all_zero() {
    let mut rng = Csprng::from_seed([0u8; 32]);

    let mut out = [0u8; 64];
    rng.fill_bytes(&mut out);

    assert!(out.iter().any(|&b| b != 0));
}

#[test]
fn csprng_handles_partial_and_oversized_buffers() {
    let mut rng = Csprng::from_seed([0x42u8; 32]);

    let mut small = [0u8; 7];
    rng.fill_bytes(&mut small);

    let mut large = [0u8; 200];
    rng.fill_bytes(&mut large);

    assert!(large.iter().any(|&b| b != 0));
}
