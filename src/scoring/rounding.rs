use rust_decimal::{Decimal, RoundingStrategy};

/// Offset added before v4 rounding so float noise below a midpoint
/// (e.g. 8.6 - 7.15 = 1.4499999999999993) still rounds up
const V4_EPSILON: f64 = 1e-6;

/// Round half up to one decimal place (v2)
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Smallest one-decimal number greater than or equal to `value` (v3)
pub fn round_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::ToPositiveInfinity)
}

/// Round a float interpolation result half up to one decimal place (v4)
pub fn round_float_half_up(value: f64) -> Decimal {
    Decimal::from_f64_retain(value + V4_EPSILON)
        .map(round_half_up)
        .unwrap_or_default()
}
