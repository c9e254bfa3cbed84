/// Initial byte of a CBOR float64 item (major 7, ai 27).
pub const FLOAT64_HEAD: u8 = 0xfb;

/// Largest value folded into an unsigned integer head.
pub const MAX_FOLDED_UNSIGNED: f64 = 4_294_967_295.0;
/// Smallest value folded into a negative integer head.
pub const MIN_FOLDED_NEGATIVE: f64 = -4_294_967_296.0;

/// The wire representation chosen for a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Number {
    /// Major type 0 with this magnitude.
    Unsigned(u32),
    /// Major type 1 with magnitude `-1 - value`.
    Negative(u32),
    /// Float64 with these IEEE-754 bits.
    Float(u64),
}

/// Decide how `d` goes on the wire.
///
/// Whole numbers in `[-2^32, 2^32 - 1]` fold into integer heads; everything else
/// (fractions, negative zero, infinities, NaN, wider integers) stays a float64.
#[must_use]
pub fn fold(d: f64) -> Number {
    if (MIN_FOLDED_NEGATIVE..=MAX_FOLDED_UNSIGNED).contains(&d)
        && !(d == 0.0 && d.is_sign_negative())
    {
        // Inside this range the i64 round trip is exact iff `d` has no fraction.
        #[allow(clippy::cast_possible_truncation)]
        let i = d as i64;
        #[allow(clippy::cast_precision_loss)]
        let whole = i as f64 == d;
        if whole {
            if let Ok(u) = u32::try_from(i) {
                return Number::Unsigned(u);
            }
            if let Ok(n) = u32::try_from(-1 - i) {
                return Number::Negative(n);
            }
        }
    }
    Number::Float(d.to_bits())
}

/// The nine bytes of a float64 item, payload in network byte order.
#[must_use]
pub const fn float64_item(bits: u64) -> [u8; 9] {
    let be = bits.to_be_bytes();
    [
        FLOAT64_HEAD,
        be[0],
        be[1],
        be[2],
        be[3],
        be[4],
        be[5],
        be[6],
        be[7],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_whole_numbers() {
        assert_eq!(fold(0.0), Number::Unsigned(0));
        assert_eq!(fold(1.0), Number::Unsigned(1));
        assert_eq!(fold(MAX_FOLDED_UNSIGNED), Number::Unsigned(u32::MAX));
        assert_eq!(fold(-1.0), Number::Negative(0));
        assert_eq!(fold(-24.0), Number::Negative(23));
        assert_eq!(fold(MIN_FOLDED_NEGATIVE), Number::Negative(u32::MAX));
    }

    #[test]
    fn keeps_floats() {
        assert_eq!(fold(0.5), Number::Float(0.5f64.to_bits()));
        assert_eq!(fold(-0.0), Number::Float((-0.0f64).to_bits()));
        assert_eq!(fold(4_294_967_296.0), Number::Float(4_294_967_296.0f64.to_bits()));
        assert_eq!(fold(-4_294_967_297.0), Number::Float((-4_294_967_297.0f64).to_bits()));
        assert_eq!(fold(f64::INFINITY), Number::Float(f64::INFINITY.to_bits()));
        assert_eq!(fold(f64::NEG_INFINITY), Number::Float(f64::NEG_INFINITY.to_bits()));
        assert!(matches!(fold(f64::NAN), Number::Float(bits) if f64::from_bits(bits).is_nan()));
        assert_eq!(fold(-1.5), Number::Float((-1.5f64).to_bits()));
    }

    #[test]
    fn float64_item_is_big_endian() {
        assert_eq!(
            float64_item(1.0f64.to_bits()),
            [0xfb, 0x3f, 0xf0, 0, 0, 0, 0, 0, 0]
        );
    }
}
