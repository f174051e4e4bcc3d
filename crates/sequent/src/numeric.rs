//! Per-scalar-type arithmetic used generically by the reduction consumers.
//!
//! One generic Sum/Max/Min implementation serves every numeric type by
//! plugging in the matching [`Numeric`] instance - no per-type duplicated
//! control flow, no boxing. Accumulators may be wider than the element type
//! (float sums accumulate in `f64`, `i32` sums in `i64`); narrowing back
//! happens once, at the end of the run.

use rust_decimal::Decimal;

use crate::error::{Result, SequentError};

/// Arithmetic operations for one scalar type.
///
/// The comparison hooks encode the engine's max/min replacement rules,
/// including the NaN handling of the floating-point instances: a NaN held as
/// the running max is superseded by any following value, while for min a NaN
/// candidate wins and is sticky. Integer and decimal instances never see
/// either branch taken for NaN reasons.
pub trait Numeric: Copy + PartialOrd + Send + Sync + 'static {
    /// Accumulator type for summation; at least as wide as `Self`.
    type Acc: Copy + Send + Sync;

    /// The additive identity of the accumulator.
    fn zero() -> Self::Acc;

    /// Adds one element into the accumulator.
    fn add(acc: Self::Acc, value: Self) -> Result<Self::Acc>;

    /// Narrows the accumulator back to the element type.
    fn finish(acc: Self::Acc) -> Result<Self>;

    /// Seed for a running maximum (superseded by any real first element).
    fn max_seed() -> Self;

    /// Seed for a running minimum.
    fn min_seed() -> Self;

    /// True only for floating-point NaN values.
    #[inline]
    fn is_nan(_value: Self) -> bool {
        false
    }

    /// Should `candidate` replace `current` as the running maximum?
    #[inline]
    fn supersedes_max(candidate: Self, current: Self) -> bool {
        candidate > current || Self::is_nan(current)
    }

    /// Should `candidate` replace `current` as the running minimum?
    #[inline]
    fn supersedes_min(candidate: Self, current: Self) -> bool {
        candidate < current || Self::is_nan(candidate)
    }
}

macro_rules! impl_numeric_int {
    ($($ty:ty => $acc:ty),* $(,)?) => {
        $(
            impl Numeric for $ty {
                type Acc = $acc;

                #[inline]
                fn zero() -> $acc {
                    0
                }

                #[inline]
                fn add(acc: $acc, value: $ty) -> Result<$acc> {
                    Ok(acc + <$acc>::from(value))
                }

                #[inline]
                fn finish(acc: $acc) -> Result<$ty> {
                    num_traits::cast(acc).ok_or(SequentError::Overflow("sum"))
                }

                #[inline]
                fn max_seed() -> $ty {
                    <$ty>::MIN
                }

                #[inline]
                fn min_seed() -> $ty {
                    <$ty>::MAX
                }
            }
        )*
    };
}

impl_numeric_int! {
    i32 => i64,
    i64 => i128,
    u32 => u64,
    u64 => u128,
}

macro_rules! impl_numeric_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Numeric for $ty {
                type Acc = f64;

                #[inline]
                fn zero() -> f64 {
                    0.0
                }

                #[inline]
                fn add(acc: f64, value: $ty) -> Result<f64> {
                    Ok(acc + f64::from(value))
                }

                #[inline]
                fn finish(acc: f64) -> Result<$ty> {
                    // NaN survives the narrowing cast; NumCast would lose it.
                    Ok(acc as $ty)
                }

                #[inline]
                fn max_seed() -> $ty {
                    <$ty>::NAN
                }

                #[inline]
                fn min_seed() -> $ty {
                    <$ty>::INFINITY
                }

                #[inline]
                fn is_nan(value: $ty) -> bool {
                    value.is_nan()
                }
            }
        )*
    };
}

impl_numeric_float!(f32, f64);

impl Numeric for Decimal {
    type Acc = Decimal;

    #[inline]
    fn zero() -> Decimal {
        Decimal::ZERO
    }

    #[inline]
    fn add(acc: Decimal, value: Decimal) -> Result<Decimal> {
        acc.checked_add(value)
            .ok_or(SequentError::Overflow("decimal sum"))
    }

    #[inline]
    fn finish(acc: Decimal) -> Result<Decimal> {
        Ok(acc)
    }

    #[inline]
    fn max_seed() -> Decimal {
        Decimal::MIN
    }

    #[inline]
    fn min_seed() -> Decimal {
        Decimal::MAX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_widening_roundtrip() {
        let acc = i32::add(i32::zero(), 21).unwrap();
        let acc = i32::add(acc, 21).unwrap();
        assert_eq!(i32::finish(acc).unwrap(), 42);
    }

    #[test]
    fn test_int_narrowing_overflow() {
        let acc = i32::add(i32::zero(), i32::MAX).unwrap();
        let acc = i32::add(acc, i32::MAX).unwrap();
        assert_eq!(i32::finish(acc), Err(SequentError::Overflow("sum")));
    }

    #[test]
    fn test_float_nan_propagates_through_add() {
        let acc = f64::add(f64::zero(), 1.0).unwrap();
        let acc = f64::add(acc, f64::NAN).unwrap();
        let acc = f64::add(acc, 2.0).unwrap();
        assert!(f64::finish(acc).unwrap().is_nan());
    }

    #[test]
    fn test_max_rule_replaces_nan_running_value() {
        // A NaN running max is always superseded by the next value.
        assert!(f64::supersedes_max(1.0, f64::NAN));
        // A NaN candidate does not replace a real running max.
        assert!(!f64::supersedes_max(f64::NAN, 1.0));
    }

    #[test]
    fn test_min_rule_nan_candidate_is_sticky() {
        assert!(f64::supersedes_min(f64::NAN, 1.0));
        assert!(!f64::supersedes_min(1.0, f64::NAN));
    }

    #[test]
    fn test_decimal_checked_add() {
        let acc = Decimal::add(Decimal::zero(), Decimal::MAX);
        assert!(acc.is_ok());
        let overflowed = Decimal::add(acc.unwrap(), Decimal::ONE);
        assert_eq!(overflowed, Err(SequentError::Overflow("decimal sum")));
    }
}
