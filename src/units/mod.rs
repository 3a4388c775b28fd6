//! 단위 정의 및 변환 모듈 모음.

pub mod length;
pub mod temperature;

use serde::{Deserialize, Serialize};

pub use length::{convert_length, LengthUnit};
pub use temperature::{
    convert_temperature, convert_temperature_rate, from_fahrenheit, to_fahrenheit,
    TemperatureUnit,
};

/// 표시 단위 시스템. 두께와 온도 단위를 함께 결정한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// 인치 / 화씨. 내부 계산 기준과 동일하다.
    Imperial,
    /// 센티미터 / 섭씨
    Metric,
}

impl UnitSystem {
    pub fn temperature(self) -> TemperatureUnit {
        match self {
            UnitSystem::Imperial => TemperatureUnit::Fahrenheit,
            UnitSystem::Metric => TemperatureUnit::Celsius,
        }
    }

    pub fn length(self) -> LengthUnit {
        match self {
            UnitSystem::Imperial => LengthUnit::Inch,
            UnitSystem::Metric => LengthUnit::Centimeter,
        }
    }
}
