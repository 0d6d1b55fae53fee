use super::*;

#[test]
fn fnv_seeded_hash_is_stable() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"linkcard");
    let mut b = Fnv1a64::new_default();
    b.write_bytes(b"link");
    b.write_bytes(b"card");
    assert_eq!(a.finish(), b.finish());

    let mut c = Fnv1a64::new_default();
    c.write_bytes(b"linkcarD");
    assert_ne!(a.finish(), c.finish());
}

#[test]
fn pcg_streams_are_deterministic_per_seed() {
    let mut a = Pcg32::from_seed_str("pattern");
    let mut b = Pcg32::from_seed_str("pattern");
    for _ in 0..64 {
        assert_eq!(a.next_u32(), b.next_u32());
    }

    let mut c = Pcg32::from_seed_str("other");
    let first_16: Vec<u32> = (0..16).map(|_| a.next_u32()).collect();
    let other_16: Vec<u32> = (0..16).map(|_| c.next_u32()).collect();
    assert_ne!(first_16, other_16);
}

#[test]
fn floats_stay_in_unit_interval() {
    let mut rng = Pcg32::from_seed_str("floats");
    for _ in 0..10_000 {
        let f = rng.next_f64();
        assert!((0.0..1.0).contains(&f));
    }
}

#[test]
fn bools_hit_both_values() {
    let mut rng = Pcg32::from_seed_str("bools");
    let trues = (0..1_000).filter(|_| rng.next_bool()).count();
    assert!(trues > 300 && trues < 700);
}

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(255, 0), 0);
}
