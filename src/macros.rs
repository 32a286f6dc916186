/// Check whether two `f64` numbers are equal within the given
/// [`Toler`](utils/struct.Toler.html).
///
/// ```
/// #[macro_use]
/// extern crate angmom;
///
/// use angmom::utils::Toler;
///
/// fn main() {
///     toler_assert_eq!(Toler { abserr: 1e-2, relerr: 1e-3 }, 10.0, 10.02);
/// }
/// ```
#[macro_export]
macro_rules! toler_assert_eq {
    ($toler:expr, $left:expr, $right:expr) => {
        let toler = &$toler;
        let left = $left;
        let right = $right;
        assert!(toler.is_eq(left, right),
                "{} does not equal to {} within {:?}",
                left, right, toler)
    }
}

/// Declare a regular expression (`Regex`) cached via `lazy_static!`.
/// This macro is mainly for internal use.
///
/// ```
/// #[macro_use]
/// extern crate lazy_static;
/// #[macro_use]
/// extern crate angmom;
/// extern crate regex;
///
/// use regex::Regex;
///
/// fn main() {
///     let r: &Regex = re!(r"hello (\w+)");
/// }
/// ```
#[macro_export]
macro_rules! re {
    ($e:expr) => {
        {
            lazy_static! {
                static ref REGEX: Regex = Regex::new($e).unwrap();
            }
            &REGEX
        }
    }
}

/// Half-integer literal, evaluated at compile time.
///
/// Accepts an integer or a decimal with exactly one digit after the point,
/// which must be `0` or `5`.
///
/// ```
/// #[macro_use]
/// extern crate angmom;
///
/// use angmom::half::HalfInt;
///
/// fn main() {
///     assert_eq!(hi!(3), HalfInt::from(3));
///     assert_eq!(hi!(1.5), HalfInt(3));
///     assert_eq!(hi!(12.5), HalfInt(25));
///     assert_eq!(hi!(-0.5), HalfInt(-1));
/// }
/// ```
///
/// Anything that is not a half-integer is rejected by the compiler:
///
/// ```compile_fail
/// #[macro_use]
/// extern crate angmom;
///
/// fn main() {
///     let _ = hi!(1.25);
/// }
/// ```
#[macro_export]
macro_rules! hi {
    ($($lit:tt)+) => {
        {
            const H: $crate::half::HalfInt =
                $crate::half::HalfInt::from_literal(stringify!($($lit)+));
            H
        }
    }
}
