//! Half-integers for angular momentum quantities.
use std::convert::TryFrom;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;
use conv::ValueInto;
use num::{Bounded, ToPrimitive, Zero};
use regex::Regex;
use super::ang_mom::AmRange;

quick_error! {
    /// Error type for half-integer construction and phases.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum Error {
        InvalidDenominator(denominator: i32) {
            display("HalfInt constructed with denominator {} (not 1 or 2)",
                    denominator)
        }
        OutOfRange {
            display("value does not fit in a HalfInt")
        }
        /// `(-1)^j` is not real for half-odd `j`.
        ComplexPhase(sum: HalfInt) {
            display("complex phase encountered: (-1)^({})", sum)
        }
    }
}

quick_error! {
    /// Error from parsing the text form of a `HalfInt`.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum ParseError {
        Syntax(input: String) {
            display("not a half-integer: {:?}", input)
        }
        Overflow(input: String) {
            display("half-integer out of range: {:?}", input)
        }
    }
}

/// Type that logically behaves like half-integers, but what is actually
/// stored is twice its logical value.
///
/// For example, `HalfInt(3)` represents the fraction `3/2`, whereas
/// `HalfInt::from(3)` represents `3`.
///
/// There is deliberately no conversion from floating-point numbers:
///
/// ```compile_fail
/// use angmom::half::HalfInt;
/// let _ = HalfInt::from(1.5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord,
         Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct HalfInt(pub i32);

/// Static numeric metadata of `HalfInt`, for use by generic numeric code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    pub min: HalfInt,
    pub max: HalfInt,
    pub is_signed: bool,
    pub is_integer: bool,
    pub is_exact: bool,
}

impl HalfInt {
    pub const LIMITS: Limits = Limits {
        min: HalfInt(i32::MIN),
        max: HalfInt(i32::MAX),
        is_signed: true,
        is_integer: false,
        is_exact: true,
    };

    #[inline]
    pub const fn from_twice(twice: i32) -> Self {
        HalfInt(twice)
    }

    /// Unwrap to twice its logical value.
    #[inline]
    pub const fn twice(self) -> i32 {
        self.0
    }

    /// Construct `numerator / denominator`, where the denominator must be
    /// either 1 or 2.
    pub fn new(numerator: i32, denominator: i32) -> Result<Self, Error> {
        match denominator {
            1 => numerator.checked_mul(2).map(HalfInt).ok_or(Error::OutOfRange),
            2 => Ok(HalfInt(numerator)),
            _ => Err(Error::InvalidDenominator(denominator)),
        }
    }

    /// Construct from an integer of any primitive type.
    pub fn from_int<T: ValueInto<i32>>(n: T) -> Result<Self, Error> {
        let n: i32 = n.value_into().map_err(|_| Error::OutOfRange)?;
        n.checked_mul(2).map(HalfInt).ok_or(Error::OutOfRange)
    }

    /// Evaluate a decimal literal such as `"3"`, `"1.5"`, or `"-2.0"`.
    ///
    /// Panics if the literal is not a half-integer; in a `const` context
    /// (see the `hi!` macro) this becomes a compile error.
    pub const fn from_literal(s: &str) -> Self {
        let bytes = s.as_bytes();
        let mut i = 0;
        let mut negative = false;
        if i < bytes.len() && bytes[i] == b'-' {
            negative = true;
            i += 1;
        }
        while i < bytes.len() && bytes[i] == b' ' {
            i += 1;
        }
        if i == bytes.len() || bytes[i] == b'.' {
            panic!("empty HalfInt literal");
        }
        let mut twice = 0;
        while i < bytes.len() && bytes[i] != b'.' {
            let c = bytes[i];
            i += 1;
            if c == b'_' {
                continue;
            }
            if c < b'0' || c > b'9' {
                panic!("invalid digit in HalfInt literal");
            }
            twice = twice * 10 + 2 * (c - b'0') as i32;
        }
        if i < bytes.len() {
            // skip the '.'
            i += 1;
            if bytes.len() - i > 1 {
                panic!("only one digit allowed after decimal point in HalfInt literal");
            }
            if i < bytes.len() {
                match bytes[i] {
                    b'0' => {}
                    b'5' => twice += 1,
                    _ => panic!("HalfInt literal must be half-integer"),
                }
            }
        }
        if negative {
            twice = -twice;
        }
        HalfInt(twice)
    }

    #[inline]
    pub fn is_integer(self) -> bool {
        self.0 % 2 == 0
    }

    /// Get the value if it's integral.  Otherwise, returns `Err(self)`.
    #[inline]
    pub fn try_get(self) -> Result<i32, HalfInt> {
        if self.is_integer() {
            Ok(self.0 / 2)
        } else {
            Err(self)
        }
    }

    /// Integer value, truncated toward zero.  Check `is_integer` first if
    /// truncation is not intended.
    #[inline]
    pub fn trunc(self) -> i32 {
        self.0 / 2
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        f64::from(self.0) / 2.0
    }

    #[inline]
    pub fn to_f32(self) -> f32 {
        self.0 as f32 / 2.0
    }

    #[inline]
    pub fn ceil(self) -> f64 {
        if self.is_integer() {
            self.to_f64()
        } else {
            f64::from(self.0 + 1) / 2.0
        }
    }

    #[inline]
    pub fn floor(self) -> f64 {
        if self.is_integer() {
            self.to_f64()
        } else {
            f64::from(self.0 - 1) / 2.0
        }
    }

    #[inline]
    pub fn abs(self) -> Self {
        if self.0 < 0 {
            -self
        } else {
            self
        }
    }

    #[inline]
    pub fn abs_diff(self, other: Self) -> Self {
        if self >= other {
            self - other
        } else {
            other - self
        }
    }

    /// Add one and return the updated value.
    #[inline]
    pub fn inc(&mut self) -> &mut Self {
        self.0 += 2;
        self
    }

    /// Subtract one and return the updated value.
    #[inline]
    pub fn dec(&mut self) -> &mut Self {
        self.0 -= 2;
        self
    }

    /// Add one and return the value prior to the update.
    #[inline]
    pub fn post_inc(&mut self) -> Self {
        let old = *self;
        self.0 += 2;
        old
    }

    /// Subtract one and return the value prior to the update.
    #[inline]
    pub fn post_dec(&mut self) -> Self {
        let old = *self;
        self.0 -= 2;
        old
    }

    /// Obtain the range of values that satisfy the triangular condition, i.e.
    /// the range from `|self − other|` to `self + other` (inclusive).
    #[inline]
    pub fn tri_range(self, other: Self) -> AmRange {
        AmRange::new(self.abs_diff(other), self + other)
    }

    /// Range of projections `−j ..= j`.
    #[inline]
    pub fn multiplet(self) -> AmRange {
        AmRange::new(-self, self)
    }

    /// Returns `√(2 j + 1)`.
    #[inline]
    pub fn hat(self) -> f64 {
        f64::from(self.0 + 1).sqrt()
    }

    /// Returns `(2 j + 1)^(exponent / 2)`.
    #[inline]
    pub fn weight(self, exponent: i32) -> f64 {
        f64::from(self.0 + 1).powf(f64::from(exponent) / 2.0)
    }

    /// Returns `x^j`.
    #[inline]
    pub fn powf(self, x: f64) -> f64 {
        x.powf(self.to_f64())
    }
}

impl fmt::Display for HalfInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.try_get() {
            Ok(x) => write!(f, "{}", x),
            Err(d) => write!(f, "{}/2", d.0),
        }
    }
}

/// Accepts `n`, `n/2`, `n.0`, and `n.5`, with an optional sign.
impl FromStr for HalfInt {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = re!(r"^\s*([+-]?)([0-9]+)(?:(/2)|\.([05]))?\s*$")
            .captures(s)
            .ok_or_else(|| ParseError::Syntax(s.into()))?;
        let overflow = || ParseError::Overflow(s.into());
        // widened so that the sign is applied before narrowing
        let digits: i64 = captures[2].parse().map_err(|_| overflow())?;
        let mut twice = if captures.get(3).is_some() {
            digits
        } else {
            let twice = digits.checked_mul(2).ok_or_else(overflow)?;
            match captures.get(4).map(|m| m.as_str()) {
                Some("5") => twice.checked_add(1).ok_or_else(overflow)?,
                _ => twice,
            }
        };
        if &captures[1] == "-" {
            twice = -twice;
        }
        let twice: i32 = twice.value_into().map_err(|_| overflow())?;
        Ok(HalfInt(twice))
    }
}

impl TryFrom<String> for HalfInt {
    type Error = ParseError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<HalfInt> for String {
    fn from(h: HalfInt) -> Self {
        h.to_string()
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for HalfInt {
                #[inline]
                fn from(t: $t) -> Self {
                    HalfInt(2 * i32::from(t))
                }
            }
        )*
    }
}

impl_from_int!(i8, i16, i32, u8, u16);

impl From<HalfInt> for f64 {
    #[inline]
    fn from(h: HalfInt) -> Self {
        h.to_f64()
    }
}

impl Add for HalfInt {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self::Output {
        HalfInt(self.0 + other.0)
    }
}

impl Sub for HalfInt {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self::Output {
        HalfInt(self.0 - other.0)
    }
}

impl Add<i32> for HalfInt {
    type Output = Self;
    #[inline]
    fn add(self, other: i32) -> Self::Output {
        self + HalfInt::from(other)
    }
}

impl Sub<i32> for HalfInt {
    type Output = Self;
    #[inline]
    fn sub(self, other: i32) -> Self::Output {
        self - HalfInt::from(other)
    }
}

impl Add<HalfInt> for i32 {
    type Output = HalfInt;
    #[inline]
    fn add(self, other: HalfInt) -> Self::Output {
        HalfInt::from(self) + other
    }
}

impl Sub<HalfInt> for i32 {
    type Output = HalfInt;
    #[inline]
    fn sub(self, other: HalfInt) -> Self::Output {
        HalfInt::from(self) - other
    }
}

impl AddAssign for HalfInt {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl SubAssign for HalfInt {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Mul<i32> for HalfInt {
    type Output = Self;
    #[inline]
    fn mul(self, other: i32) -> Self::Output {
        HalfInt(self.0 * other)
    }
}

impl Mul<HalfInt> for i32 {
    type Output = HalfInt;
    #[inline]
    fn mul(self, other: HalfInt) -> Self::Output {
        other * self
    }
}

impl MulAssign<i32> for HalfInt {
    #[inline]
    fn mul_assign(&mut self, other: i32) {
        self.0 *= other;
    }
}

impl Neg for HalfInt {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        HalfInt(-self.0)
    }
}

impl PartialEq<i32> for HalfInt {
    #[inline]
    fn eq(&self, other: &i32) -> bool {
        *self == HalfInt::from(*other)
    }
}

impl PartialOrd<i32> for HalfInt {
    #[inline]
    fn partial_cmp(&self, other: &i32) -> Option<std::cmp::Ordering> {
        Some(self.cmp(&HalfInt::from(*other)))
    }
}

impl Sum for HalfInt {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Zero::zero(), |acc, x| acc + x)
    }
}

impl Zero for HalfInt {
    #[inline]
    fn zero() -> Self {
        HalfInt(0)
    }
    #[inline]
    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Bounded for HalfInt {
    #[inline]
    fn min_value() -> Self {
        HalfInt::LIMITS.min
    }
    #[inline]
    fn max_value() -> Self {
        HalfInt::LIMITS.max
    }
}

/// Integer conversions succeed only for integral values.
impl ToPrimitive for HalfInt {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        self.try_get().ok().map(i64::from)
    }
    #[inline]
    fn to_u64(&self) -> Option<u64> {
        self.try_get().ok().and_then(|x| x.to_u64())
    }
    #[inline]
    fn to_f64(&self) -> Option<f64> {
        Some(HalfInt::to_f64(*self))
    }
}
