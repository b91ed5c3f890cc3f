use super::*;

#[test]
fn rng_is_stable_for_a_seed() {
    let mut a = Rng64::new(42);
    let mut b = Rng64::new(42);
    for _ in 0..16 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn next_below_stays_in_range_and_covers_it() {
    let mut rng = Rng64::new(7);
    let mut seen = [false; 5];
    for _ in 0..500 {
        let v = rng.next_below(5);
        assert!(v < 5);
        seen[v] = true;
    }
    assert!(seen.iter().all(|s| *s));
    assert_eq!(rng.next_below(1), 0);
}

#[test]
fn boxed_source_delegates() {
    let mut boxed: Box<dyn RandomSource> = Box::new(Rng64::new(3));
    let mut plain = Rng64::new(3);
    assert_eq!(boxed.next_below(100), plain.next_below(100));
}

#[test]
fn mul_div255_rounds() {
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(128, 255), 128);
    assert_eq!(mul_div255_u8(0, 200), 0);
    assert_eq!(add_sat_u8(200, 100), 255);
}
