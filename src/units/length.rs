use serde::{Deserialize, Serialize};

/// 두께 단위. 내부 기준은 인치이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Inch,
    Centimeter,
}

fn to_inch(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Inch => value,
        LengthUnit::Centimeter => value / 2.54,
    }
}

fn from_inch(value_in: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Inch => value_in,
        LengthUnit::Centimeter => value_in * 2.54,
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    from_inch(to_inch(value, from), to)
}
