/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Scale an 8-bit value by the ratio `numerator / denominator`
///
/// Returns 0 for a zero denominator. Ratios above 1 saturate.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn scale_ratio(value: u8, numerator: u8, denominator: u8) -> u8 {
    if denominator == 0 {
        return 0;
    }
    if numerator >= denominator {
        return value;
    }
    let ratio = (numerator as u16 * 255) / denominator as u16;
    scale8(value, ratio as u8)
}

/// Linearly re-map `value` from one range to another
///
/// Integer arithmetic truncating toward zero, without clamping. A degenerate
/// input range maps everything to `out_min`.
#[inline]
pub const fn map_range(value: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    if in_max == in_min {
        return out_min;
    }
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}
