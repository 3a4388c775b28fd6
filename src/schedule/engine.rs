use thiserror::Error;

use super::instructions;
use super::resolve::resolve;
use super::sequencer::{fold_waypoints, plan_segments};
use super::types::{ScheduleRequest, ScheduleResult};

/// 스케줄 계산 오류. 모두 호출자 입력 문제이며 부분 결과는 없다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    #[error("두께는 0보다 큰 유한한 값이어야 합니다: {0}")]
    InvalidThickness(f64),
    #[error("유효 두께 {effective_in} in이 계산 범위({max_in} in)를 넘습니다.")]
    ThicknessOutOfRange { effective_in: f64, max_in: f64 },
    #[error("입력값 오류({field}): {value}")]
    InvalidOverride { field: &'static str, value: f64 },
    #[error("변형점({strain_f:.0}°F)은 서냉 온도({anneal_f:.0}°F)보다 낮아야 합니다.")]
    StrainNotBelowAnneal { strain_f: f64, anneal_f: f64 },
    #[error("변형점({strain_f:.0}°F)이 취출 온도보다 낮습니다.")]
    StrainBelowUnload { strain_f: f64 },
    #[error("공정 온도({process_f:.0}°F)는 서냉 온도({anneal_f:.0}°F)보다 높아야 합니다.")]
    ProcessNotAboveAnneal { process_f: f64, anneal_f: f64 },
}

/// 요청으로부터 웨이포인트와 두 가지 지시문을 계산한다. 상태를 갖지 않는 순수 함수.
pub fn compute_schedule(request: &ScheduleRequest) -> Result<ScheduleResult, ScheduleError> {
    let resolved = resolve(request)?;
    let unit = request.unit_system.temperature();
    let segments = plan_segments(&resolved);
    let waypoints = fold_waypoints(&segments, unit);
    let segment_program = instructions::segment_program(&segments, unit);
    let step_program = instructions::step_program(&waypoints, unit);

    tracing::debug!(
        segments = segments.len(),
        total_h = waypoints.last().map(|w| w.time_h).unwrap_or(0.0),
        "스케줄 계산 완료"
    );

    Ok(ScheduleResult {
        unit_system: request.unit_system,
        waypoints,
        segment_program,
        step_program,
    })
}
