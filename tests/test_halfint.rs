#[macro_use]
extern crate angmom;
extern crate fnv;
extern crate num;

use angmom::half::{self, HalfInt};
use angmom::parity;
use fnv::FnvHashMap;
use num::Complex;

#[test]
fn test_construction_and_display() {
    let three: u16 = 3;
    let line = format!("{} {} {}", HalfInt::from(3i32), HalfInt::new(3, 1).unwrap(),
                       HalfInt::new(3, 2).unwrap());
    assert_eq!(line, "3 3 3/2");
    assert_eq!(format!("{} {} {}", hi!(3), hi!(1.5), hi!(12.5)), "3 3/2 25/2");
    assert_eq!(HalfInt::new(3, 2).unwrap().twice(), 3);
    assert_eq!(format!("{} {}", HalfInt::from(three),
                       HalfInt::from_int(three).unwrap()), "3 3");
    assert_eq!(HalfInt::new(7, 4), Err(half::Error::InvalidDenominator(4)));
    assert_eq!(half::Error::InvalidDenominator(4).to_string(),
               "HalfInt constructed with denominator 4 (not 1 or 2)");
}

#[test]
fn test_arithmetic() {
    assert_eq!(std::cmp::max(hi!(2.5), hi!(0.5)).to_string(), "5/2");
    assert_eq!(std::cmp::min(hi!(2.5), hi!(0.5)).to_string(), "1/2");
    assert_eq!(format!("{} -> {}", -hi!(0.5), (-hi!(0.5)).abs()),
               "-1/2 -> 1/2");
    assert_eq!((hi!(1) + hi!(0.5)).to_string(), "3/2");
    assert_eq!((0i32 + hi!(0.5)).to_string(), "1/2");
    assert_eq!((1i32 + hi!(0.5)).to_string(), "3/2");
    assert_eq!(1.0 + f64::from(hi!(0.5)), 1.5);
    assert_eq!((hi!(2), hi!(1.5).trunc(), (-hi!(1.5)).trunc()),
               (HalfInt::from(2i32), 1, -1));
    assert!(hi!(0.5) >= 0);
    assert!(!(hi!(0.5) >= 1));
}

#[test]
fn test_string_round_trip() {
    let mut j = HalfInt::from(-100000i32);
    while j <= 100000 {
        let s = j.to_string();
        assert_eq!(s.parse::<HalfInt>(), Ok(j), "{}", s);
        j += hi!(0.5);
    }
}

#[test]
fn test_hat_parity_phase() {
    assert_eq!(hi!(0.5).hat(), 2f64.sqrt());
    assert_eq!(hi!(1).hat(), 3f64.sqrt());
    assert_eq!(parity::parity_sign_int(-1), -1);
    assert_eq!(parity::parity_sign(HalfInt::new(-2, 2).unwrap()), Ok(-1));
    assert!(parity::parity_sign(hi!(0.5)).is_err());
    assert_eq!(parity::phase(hi!(0.5)), Complex::new(0.0, 1.0));
}

#[test]
fn test_hash_lookup() {
    let mut multiplicity = FnvHashMap::default();
    for j in angmom::ang_mom::product_angular_momenta(hi!(0.5), hi!(10.5)) {
        *multiplicity.entry(j).or_insert(0) += 1;
    }
    assert_eq!(multiplicity.len(), 2);
    assert_eq!(multiplicity[&hi!(11)], 1);
    assert_eq!(multiplicity[&HalfInt::new(20, 2).unwrap()], 1);
}
