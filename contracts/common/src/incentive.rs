use crate::Wad;

/// Liquidation incentive factor interpolated linearly between `pre_lif_1` at
/// `pre_lltv` and `pre_lif_2` at `lltv`.
///
/// `ltv` is clamped to [pre_lltv, lltv] so the quotient stays in [0, 1]:
/// a position below `pre_lltv` gets `pre_lif_1`, a position above `lltv`
/// gets `pre_lif_2`. Returns None when `lltv <= pre_lltv`.
pub fn liquidation_incentive_factor(
    ltv: Wad,
    pre_lltv: Wad,
    lltv: Wad,
    pre_lif_1: Wad,
    pre_lif_2: Wad,
) -> Option<Wad> {
    if lltv <= pre_lltv {
        return None;
    }

    let quotient = ltv
        .clamp(pre_lltv, lltv)
        .checked_sub(pre_lltv)?
        .checked_div(lltv.checked_sub(pre_lltv)?)?;

    quotient
        .checked_mul(pre_lif_2.checked_sub(pre_lif_1)?)?
        .checked_add(pre_lif_1)
}
