//! 요청의 선택 입력을 기본값 체계에 따라 확정 값으로 바꾼다.
//!
//! 우선순위: 사용자 지정값 > (Custom) 안전 기본값 > 재료별 공정 온도 > 서냉 온도 + 공정 오프셋.

use crate::material_db::{self, GlassFamily};
use crate::units::{to_fahrenheit, convert_length, convert_temperature_rate, LengthUnit, TemperatureUnit};

use super::engine::ScheduleError;
use super::physics::{self, CoolingProfile};
use super::types::{ProcessMode, ScheduleRequest};

/// 취출(실내) 온도(°F)
pub const UNLOAD_TEMP_F: f64 = 70.0;
/// Custom 재료에 서냉 온도가 없을 때 쓰는 값(°F)
pub const CUSTOM_ANNEAL_FALLBACK_F: f64 = 900.0;
pub const CUSTOM_STRAIN_FALLBACK_F: f64 = 700.0;
/// 몰드 건조 기본 온도(°F)
pub const MOLD_DRY_DEFAULT_F: f64 = 200.0;

/// 재료에 공정 온도가 없을 때 서냉 온도에 더하는 값(°F).
pub fn process_offset_f(mode: ProcessMode) -> f64 {
    match mode {
        ProcessMode::AnnealOnly => 0.0,
        ProcessMode::Slump => 300.0,
        ProcessMode::TackFuse => 450.0,
        ProcessMode::FullFuse => 575.0,
        ProcessMode::Cast => 625.0,
    }
}

/// 공정 온도 기본 유지 시간(h).
pub fn default_hold_hours(mode: ProcessMode) -> f64 {
    match mode {
        ProcessMode::AnnealOnly => 0.0,
        ProcessMode::Slump => 15.0 / 60.0,
        ProcessMode::TackFuse => 20.0 / 60.0,
        ProcessMode::FullFuse => 30.0 / 60.0,
        ProcessMode::Cast => 90.0 / 60.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProcessHold {
    Finite(f64),
    /// 작업자가 직접 다음 단계로 넘기는 유지. 경과 시간은 0으로 본다.
    Indefinite,
}

impl ProcessHold {
    pub fn hours(self) -> f64 {
        match self {
            ProcessHold::Finite(h) => h,
            ProcessHold::Indefinite => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessStage {
    pub temperature_f: f64,
    pub hold: ProcessHold,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoldDryStage {
    pub temperature_f: f64,
    pub hours: f64,
}

/// 모든 값이 확정된 스케줄 입력. 온도/속도는 화씨 기준.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedSchedule {
    pub mode: ProcessMode,
    pub anneal_f: f64,
    pub strain_f: f64,
    pub ramp_rate_f: f64,
    /// 서냉 전용이면 없다.
    pub process: Option<ProcessStage>,
    pub mold_dry: Option<MoldDryStage>,
    pub cooling: CoolingProfile,
}

fn finite_positive(field: &'static str, value: f64) -> Result<f64, ScheduleError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ScheduleError::InvalidOverride { field, value })
    }
}

fn finite_non_negative(field: &'static str, value: f64) -> Result<f64, ScheduleError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ScheduleError::InvalidOverride { field, value })
    }
}

fn finite(field: &'static str, value: f64) -> Result<f64, ScheduleError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ScheduleError::InvalidOverride { field, value })
    }
}

/// 요청을 검증하고 모든 파생 값을 확정한다.
pub fn resolve(request: &ScheduleRequest) -> Result<ResolvedSchedule, ScheduleError> {
    if !request.thickness.is_finite() || request.thickness <= 0.0 {
        return Err(ScheduleError::InvalidThickness(request.thickness));
    }

    let material = material_db::material(request.material);
    let unit = request.unit_system.temperature();
    let overrides = &request.overrides;
    let temp_f = |field: &'static str, v: f64| finite(field, v).map(|t| to_fahrenheit(t, unit));

    let anneal_override = overrides
        .anneal_temperature
        .map(|t| temp_f("anneal_temperature", t))
        .transpose()?;
    let strain_override = overrides
        .strain_temperature
        .map(|t| temp_f("strain_temperature", t))
        .transpose()?;

    let anneal_f = match (anneal_override, material.anneal_f) {
        (Some(t), _) => t,
        (None, Some(t)) => t,
        (None, None) => {
            tracing::warn!(
                glass = material.code,
                fallback_f = CUSTOM_ANNEAL_FALLBACK_F,
                "서냉 온도가 없어 기본값을 사용한다"
            );
            CUSTOM_ANNEAL_FALLBACK_F
        }
    };
    let strain_f = match (strain_override, material.strain_f) {
        (Some(t), _) => t,
        (None, Some(t)) => t,
        (None, None) => {
            tracing::warn!(
                glass = material.code,
                fallback_f = CUSTOM_STRAIN_FALLBACK_F,
                "변형점 온도가 없어 기본값을 사용한다"
            );
            CUSTOM_STRAIN_FALLBACK_F
        }
    };
    if strain_f >= anneal_f {
        return Err(ScheduleError::StrainNotBelowAnneal { strain_f, anneal_f });
    }
    if strain_f <= UNLOAD_TEMP_F {
        return Err(ScheduleError::StrainBelowUnload { strain_f });
    }

    let thickness_in = convert_length(
        request.thickness,
        request.unit_system.length(),
        LengthUnit::Inch,
    );
    let shape = request.shape.unwrap_or_default();
    let level = request.conservativeness.unwrap_or_default();
    let cooling = physics::cooling_profile(thickness_in, shape, material.cooling_multiplier, level);
    if cooling.effective_thickness_in > physics::MAX_EFFECTIVE_THICKNESS_IN {
        return Err(ScheduleError::ThicknessOutOfRange {
            effective_in: cooling.effective_thickness_in,
            max_in: physics::MAX_EFFECTIVE_THICKNESS_IN,
        });
    }

    let ramp_rate_f = match overrides.process_ramp_rate {
        Some(r) => convert_temperature_rate(
            finite_positive("process_ramp_rate", r)?,
            unit,
            TemperatureUnit::Fahrenheit,
        ),
        None => physics::ramp_rate(cooling.effective_thickness_in, shape),
    };

    let process = match request.mode {
        ProcessMode::AnnealOnly => None,
        mode => {
            let temperature_f = match overrides.process_temperature {
                Some(t) => temp_f("process_temperature", t)?,
                None => material
                    .targets
                    .for_mode(mode)
                    .unwrap_or(anneal_f + process_offset_f(mode)),
            };
            if temperature_f <= anneal_f {
                return Err(ScheduleError::ProcessNotAboveAnneal {
                    process_f: temperature_f,
                    anneal_f,
                });
            }
            let hold = if request.indefinite_hold {
                ProcessHold::Indefinite
            } else {
                let hours = overrides
                    .process_hold_hours
                    .map(|h| finite_non_negative("process_hold_hours", h))
                    .transpose()?
                    .unwrap_or_else(|| default_hold_hours(mode));
                ProcessHold::Finite(hours)
            };
            Some(ProcessStage {
                temperature_f,
                hold,
            })
        }
    };

    let mold_dry = match (request.mode, request.mold_dry) {
        (ProcessMode::Cast, Some(dry)) => {
            let hours = finite_non_negative("mold_dry_hours", dry.hours)?;
            if hours > 0.0 {
                let temperature_f = match dry.temperature {
                    Some(t) => {
                        let t_f = temp_f("mold_dry_temperature", t)?;
                        // 건조 온도는 취출 온도와 공정 온도 사이여야 한다.
                        let process_f = process.map_or(anneal_f, |p| p.temperature_f);
                        if t_f <= UNLOAD_TEMP_F || t_f >= process_f {
                            return Err(ScheduleError::InvalidOverride {
                                field: "mold_dry_temperature",
                                value: t,
                            });
                        }
                        t_f
                    }
                    None => MOLD_DRY_DEFAULT_F,
                };
                Some(MoldDryStage {
                    temperature_f,
                    hours,
                })
            } else {
                None
            }
        }
        _ => None,
    };

    tracing::debug!(
        glass = material.code,
        mode = ?request.mode,
        anneal_f,
        strain_f,
        ramp_rate_f,
        effective_in = cooling.effective_thickness_in,
        soak_h = cooling.soak_hours,
        rate1_f = cooling.anneal_cool_rate_f,
        rate2_f = cooling.final_cool_rate_f,
        "스케줄 입력 확정"
    );

    Ok(ResolvedSchedule {
        mode: request.mode,
        anneal_f,
        strain_f,
        ramp_rate_f,
        process,
        mold_dry,
        cooling,
    })
}

/// Custom 재료 여부. 호출 측 검증 메시지에 쓴다.
pub fn needs_custom_temperatures(family: GlassFamily) -> bool {
    let m = material_db::material(family);
    m.anneal_f.is_none() || m.strain_f.is_none()
}
