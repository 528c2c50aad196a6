use crate::model::RoundWithCourse;

/// Slope rating of a course of standard difficulty.
pub const STANDARD_SLOPE: f64 = 113.0;

/// Constant part of the expected nine-hole differential.
pub const NINE_HOLE_EXPECTED_OFFSET: f64 = 1.197;

/// Truncates toward zero at one decimal place; `12.39` becomes `12.3`.
#[must_use]
pub fn truncate_one_decimal(value: f64) -> f64 {
    (value * 10.0).trunc() / 10.0
}

/// `(113 / slope) * (score - course_rating - pcc)`
#[must_use]
pub fn compute_differential(
    slope: u32,
    adjusted_gross_score: i32,
    course_rating: f64,
    pcc: i32,
) -> f64 {
    (STANDARD_SLOPE / f64::from(slope))
        * (f64::from(adjusted_gross_score) - course_rating - f64::from(pcc))
}

/// Raw differential for one round, against half the course rating when a
/// nine was played on an eighteen-hole course.
#[must_use]
pub fn compute_round_differential(round: &RoundWithCourse) -> f64 {
    compute_differential(
        round.course.slope_rating,
        round.round.score,
        round.rating_for_played_holes(),
        round.round.pcc,
    )
}

/// What a player holding `index_at_time` is expected to shoot over the
/// nine holes they did not play.
#[must_use]
pub fn expected_nine_differential(index_at_time: f64) -> f64 {
    index_at_time / 2.0 + NINE_HOLE_EXPECTED_OFFSET
}

/// The differential the index calculation consumes. Nines are lifted to an
/// 18-hole equivalent using the index in effect before this round.
#[must_use]
pub fn effective_differential(round: &RoundWithCourse, index_at_time: f64) -> f64 {
    let actual = compute_round_differential(round);
    if round.is_nine() {
        actual + expected_nine_differential(index_at_time)
    } else {
        actual
    }
}
