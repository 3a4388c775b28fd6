//! 두께 기반 서냉 유지 시간과 냉각 속도 근사 모델.
//!
//! 냉각 속도는 유효 두께의 제곱에 반비례한다. 기준 두께(1/4 in)에서의 속도를
//! 제조사 서냉 차트 값에 맞추고, 얇은 유리에서 속도가 폭주하지 않도록 상한을 둔다.
//! 모든 온도/속도는 화씨 기준이다.

use super::types::{Conservativeness, ShapeFactor};

/// 기준 두께(in)
pub const REFERENCE_THICKNESS_IN: f64 = 0.25;
/// 서냉점 → 변형점 냉각 속도 기준값(°F/h, 기준 두께)
pub const ANNEAL_COOL_BASE_F: f64 = 300.0;
pub const ANNEAL_COOL_MAX_F: f64 = 350.0;
/// 변형점 → 취출 온도 냉각 속도 기준값(°F/h, 기준 두께)
pub const FINAL_COOL_BASE_F: f64 = 600.0;
pub const FINAL_COOL_MAX_F: f64 = 400.0;
/// 공정 온도까지 승온 속도 상한(°F/h). 형상 배율로 나눈다.
pub const RAMP_MAX_F: f64 = 400.0;
/// 계산 가능한 유효 두께 상한(in). 이보다 두꺼우면 유지/냉각 시간이 의미 없는 값이 된다.
pub const MAX_EFFECTIVE_THICKNESS_IN: f64 = 24.0;

/// (두께 상한 in, 승온 속도 °F/h). 마지막 구간 이후는 `RAMP_THICK_F`.
const RAMP_BANDS: [(f64, f64); 4] = [(0.25, 400.0), (0.5, 300.0), (0.75, 200.0), (1.0, 150.0)];
const RAMP_THICK_F: f64 = 100.0;

/// 두께에서 유도한 냉각 프로파일.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolingProfile {
    pub effective_thickness_in: f64,
    /// 서냉 유지 시간(h)
    pub soak_hours: f64,
    /// 서냉점 → 변형점(°F/h)
    pub anneal_cool_rate_f: f64,
    /// 변형점 → 취출 온도(°F/h)
    pub final_cool_rate_f: f64,
}

pub fn effective_thickness(thickness_in: f64, shape: ShapeFactor) -> f64 {
    thickness_in * shape.multiplier()
}

/// 서냉 유지 시간. 얇은 유리는 0.5h, 1 in까지 선형, 그 이후는 제곱으로 늘어난다.
pub fn soak_hours(effective_in: f64, level: Conservativeness) -> f64 {
    let base = if effective_in <= REFERENCE_THICKNESS_IN {
        0.5
    } else if effective_in <= 1.0 {
        2.0 * effective_in
    } else {
        2.0 * effective_in * effective_in
    };
    base * level.multiplier()
}

fn inverse_square_rate(
    base_f: f64,
    max_f: f64,
    effective_in: f64,
    brand_multiplier: f64,
    level: Conservativeness,
) -> f64 {
    let ratio = REFERENCE_THICKNESS_IN / effective_in;
    let rate = base_f * brand_multiplier / level.multiplier() * ratio * ratio;
    rate.min(max_f)
}

/// 서냉점에서 변형점까지의 냉각 속도.
pub fn anneal_cool_rate(effective_in: f64, brand_multiplier: f64, level: Conservativeness) -> f64 {
    inverse_square_rate(
        ANNEAL_COOL_BASE_F,
        ANNEAL_COOL_MAX_F,
        effective_in,
        brand_multiplier,
        level,
    )
}

/// 변형점에서 취출 온도까지의 냉각 속도.
pub fn final_cool_rate(effective_in: f64, brand_multiplier: f64, level: Conservativeness) -> f64 {
    inverse_square_rate(
        FINAL_COOL_BASE_F,
        FINAL_COOL_MAX_F,
        effective_in,
        brand_multiplier,
        level,
    )
}

/// 공정 온도(또는 서냉 온도)까지의 기본 승온 속도.
pub fn ramp_rate(effective_in: f64, shape: ShapeFactor) -> f64 {
    let banded = RAMP_BANDS
        .iter()
        .find(|(limit, _)| effective_in <= *limit)
        .map(|(_, rate)| *rate)
        .unwrap_or(RAMP_THICK_F);
    banded.min(RAMP_MAX_F / shape.multiplier())
}

pub fn cooling_profile(
    thickness_in: f64,
    shape: ShapeFactor,
    brand_multiplier: f64,
    level: Conservativeness,
) -> CoolingProfile {
    let effective = effective_thickness(thickness_in, shape);
    CoolingProfile {
        effective_thickness_in: effective,
        soak_hours: soak_hours(effective, level),
        anneal_cool_rate_f: anneal_cool_rate(effective, brand_multiplier, level),
        final_cool_rate_f: final_cool_rate(effective, brand_multiplier, level),
    }
}
