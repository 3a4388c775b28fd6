//! 차트 렌더러용 구간 묶음. 같은 색 분류가 이어지는 웨이포인트를 하나의 선으로 묶는다.

use serde::Serialize;

use super::types::{SegmentKind, Waypoint};

/// 선 색 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceClass {
    /// 승온/유지/공정 구간
    Warm,
    Cool,
    /// 무기한 유지. 다른 선에 가리지 않도록 마지막에 그린다.
    Indefinite,
}

impl TraceClass {
    pub fn of(kind: SegmentKind) -> Option<TraceClass> {
        match kind {
            SegmentKind::Idle => None,
            SegmentKind::Heating
            | SegmentKind::Soaking
            | SegmentKind::ProcessRamp
            | SegmentKind::ProcessHoldFinite => Some(TraceClass::Warm),
            SegmentKind::Cooling => Some(TraceClass::Cool),
            SegmentKind::ProcessHoldIndefinite => Some(TraceClass::Indefinite),
        }
    }
}

/// 그릴 선 하나. 점은 (시간 h, 온도).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub class: TraceClass,
    pub points: Vec<(f64, f64)>,
}

/// 웨이포인트를 색 분류별 선으로 묶는다. 무기한 유지 선은 뒤로 보낸다.
pub fn chart_traces(waypoints: &[Waypoint]) -> Vec<Trace> {
    let mut traces: Vec<Trace> = Vec::new();
    for pair in waypoints.windows(2) {
        let (from, to) = (&pair[0], &pair[1]);
        let Some(class) = TraceClass::of(to.kind) else {
            continue;
        };
        if let Some(last) = traces.last_mut().filter(|t| t.class == class) {
            last.points.push((to.time_h, to.temperature));
            continue;
        }
        traces.push(Trace {
            class,
            points: vec![(from.time_h, from.temperature), (to.time_h, to.temperature)],
        });
    }
    // 안정 정렬이므로 같은 분류 안에서는 시간 순서가 유지된다.
    traces.sort_by_key(|t| t.class == TraceClass::Indefinite);
    traces
}
