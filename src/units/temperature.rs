use serde::{Deserialize, Serialize};

/// 온도 단위를 정의한다. 내부 계산 기준은 화씨이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Fahrenheit,
    Celsius,
}

impl TemperatureUnit {
    /// 온도 표기용 접미사.
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Celsius => "°C",
        }
    }

    /// 승온/냉각 속도 표기용 접미사.
    pub fn rate_symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "°F/hr",
            TemperatureUnit::Celsius => "°C/hr",
        }
    }
}

/// 주어진 값을 화씨로 변환한다.
pub fn to_fahrenheit(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Fahrenheit => value,
        TemperatureUnit::Celsius => value * 9.0 / 5.0 + 32.0,
    }
}

/// 화씨 값을 원하는 단위로 변환한다.
pub fn from_fahrenheit(value_f: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Fahrenheit => value_f,
        TemperatureUnit::Celsius => (value_f - 32.0) * 5.0 / 9.0,
    }
}

/// 온도를 서로 다른 단위로 변환한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    from_fahrenheit(to_fahrenheit(value, from), to)
}

/// 온도 변화율(°/h)을 변환한다. 절대 기준점 없이 배율만 고려한다.
pub fn convert_temperature_rate(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    // 섭씨 1도 = 화씨 1.8도
    let per_f = match from {
        TemperatureUnit::Fahrenheit => value,
        TemperatureUnit::Celsius => value * 9.0 / 5.0,
    };
    match to {
        TemperatureUnit::Fahrenheit => per_f,
        TemperatureUnit::Celsius => per_f * 5.0 / 9.0,
    }
}
