//! 확정된 입력을 구간 목록으로 만들고, 구간 목록을 누적해 웨이포인트로 바꾼다.

use crate::units::{from_fahrenheit, TemperatureUnit};

use super::resolve::{ProcessHold, ResolvedSchedule, UNLOAD_TEMP_F};
use super::types::{ProcessMode, SegmentKind, Waypoint};

/// 공정 온도에서 서냉 온도로 떨어뜨리는 고정 속도(°F/h). 컨트롤러의 "FULL" 값.
pub const CRASH_COOL_RATE_F: f64 = 9999.0;

pub const LABEL_START: &str = "Start";
pub const LABEL_MOLD_DRY_REACH: &str = "Mold dry reach";
pub const LABEL_MOLD_DRY_HOLD: &str = "Mold dry hold";
pub const LABEL_RAMP_TO_ANNEAL: &str = "Ramp to anneal";
pub const LABEL_PROCESS_RAMP: &str = "Process ramp";
pub const LABEL_PROCESS_HOLD: &str = "Process hold";
pub const LABEL_INDEFINITE_HOLD: &str = "Indefinite hold";
pub const LABEL_CRASH_COOL: &str = "Crash cool to anneal";
pub const LABEL_ANNEAL_SOAK: &str = "Anneal soak";
pub const LABEL_COOL_TO_STRAIN: &str = "Cool to strain point";
pub const LABEL_COOL_TO_UNLOAD: &str = "Cool to unload";

/// 구간 진행 방식.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pace {
    /// 지정 속도(°F/h)로 목표 온도까지 이동
    Rate(f64),
    /// 컨트롤러 최대 속도
    Full,
    /// 현재 온도에서 지정 시간(h) 유지
    Hold(f64),
    /// 경과 시간 없이 작업자 진행 대기
    IndefiniteHold,
}

/// 구간 하나. 시작 온도는 직전 구간의 목표 온도이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub target_f: f64,
    pub pace: Pace,
    pub label: &'static str,
    pub kind: SegmentKind,
}

impl Segment {
    /// 구간 소요 시간(h).
    pub fn duration_hours(&self, from_f: f64) -> f64 {
        let delta = (self.target_f - from_f).abs();
        match self.pace {
            Pace::Rate(rate) => delta / rate,
            Pace::Full => delta / CRASH_COOL_RATE_F,
            Pace::Hold(hours) => hours,
            Pace::IndefiniteHold => 0.0,
        }
    }
}

fn ramp(target_f: f64, rate: f64, label: &'static str, kind: SegmentKind) -> Segment {
    Segment {
        target_f,
        pace: Pace::Rate(rate),
        label,
        kind,
    }
}

fn hold(at_f: f64, hours: f64, label: &'static str, kind: SegmentKind) -> Segment {
    Segment {
        target_f: at_f,
        pace: Pace::Hold(hours),
        label,
        kind,
    }
}

/// 취출 온도에서 출발하는 구간 목록을 만든다.
pub fn plan_segments(resolved: &ResolvedSchedule) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(8);
    let rate = resolved.ramp_rate_f;

    match (resolved.mode, resolved.process) {
        (ProcessMode::AnnealOnly, _) | (_, None) => {
            segments.push(ramp(
                resolved.anneal_f,
                rate,
                LABEL_RAMP_TO_ANNEAL,
                SegmentKind::Heating,
            ));
        }
        (_, Some(stage)) => {
            if let Some(dry) = resolved.mold_dry {
                segments.push(ramp(
                    dry.temperature_f,
                    rate,
                    LABEL_MOLD_DRY_REACH,
                    SegmentKind::Heating,
                ));
                segments.push(hold(
                    dry.temperature_f,
                    dry.hours,
                    LABEL_MOLD_DRY_HOLD,
                    SegmentKind::Soaking,
                ));
            }
            segments.push(ramp(
                stage.temperature_f,
                rate,
                LABEL_PROCESS_RAMP,
                SegmentKind::ProcessRamp,
            ));
            segments.push(match stage.hold {
                ProcessHold::Finite(hours) => hold(
                    stage.temperature_f,
                    hours,
                    LABEL_PROCESS_HOLD,
                    SegmentKind::ProcessHoldFinite,
                ),
                ProcessHold::Indefinite => Segment {
                    target_f: stage.temperature_f,
                    pace: Pace::IndefiniteHold,
                    label: LABEL_INDEFINITE_HOLD,
                    kind: SegmentKind::ProcessHoldIndefinite,
                },
            });
            segments.push(Segment {
                target_f: resolved.anneal_f,
                pace: Pace::Full,
                label: LABEL_CRASH_COOL,
                kind: SegmentKind::Cooling,
            });
        }
    }

    let cooling = &resolved.cooling;
    segments.push(hold(
        resolved.anneal_f,
        cooling.soak_hours,
        LABEL_ANNEAL_SOAK,
        SegmentKind::Soaking,
    ));
    segments.push(ramp(
        resolved.strain_f,
        cooling.anneal_cool_rate_f,
        LABEL_COOL_TO_STRAIN,
        SegmentKind::Cooling,
    ));
    segments.push(ramp(
        UNLOAD_TEMP_F,
        cooling.final_cool_rate_f,
        LABEL_COOL_TO_UNLOAD,
        SegmentKind::Cooling,
    ));
    segments
}

/// 구간 목록을 누적 시간 웨이포인트로 접는다. 온도는 이 단계에서 표시 단위로 바꾼다.
pub fn fold_waypoints(segments: &[Segment], unit: TemperatureUnit) -> Vec<Waypoint> {
    let start = Waypoint {
        time_h: 0.0,
        temperature: from_fahrenheit(UNLOAD_TEMP_F, unit),
        label: Some(LABEL_START.to_string()),
        kind: SegmentKind::Idle,
    };
    let (_, _, waypoints) = segments.iter().fold(
        (0.0_f64, UNLOAD_TEMP_F, vec![start]),
        |(elapsed, current_f, mut points), seg| {
            let elapsed = elapsed + seg.duration_hours(current_f);
            points.push(Waypoint {
                time_h: elapsed,
                temperature: from_fahrenheit(seg.target_f, unit),
                label: Some(seg.label.to_string()),
                kind: seg.kind,
            });
            (elapsed, seg.target_f, points)
        },
    );
    waypoints
}
