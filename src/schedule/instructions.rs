//! 컨트롤러 입력용 지시문 생성.
//!
//! - 세그먼트 방식: 번호별 승온 속도 / 목표 온도 / 유지 시간(hh:mm). 급랭 구간은 `FULL`.
//! - 스텝 방식: 웨이포인트마다 라벨 / 온도 / 누적 시간(hh:mm).
//!
//! 온도와 속도는 출력 직전에만 표시 단위로 바꾼다.

use std::fmt::Write;

use crate::units::{convert_temperature_rate, from_fahrenheit, TemperatureUnit};

use super::sequencer::{Pace, Segment};
use super::types::{SegmentKind, Waypoint};

pub const FULL_SPEED_MARKER: &str = "FULL";
pub const INDEFINITE_HOLD_MARKER: &str = "HOLD";

/// 시간(h)을 hh:mm 문자열로 바꾼다. 분 단위 반올림.
pub fn format_hhmm(hours: f64) -> String {
    let minutes = (hours.max(0.0) * 60.0).round() as u64;
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

fn format_temperature(value_f: f64, unit: TemperatureUnit) -> String {
    format!("{:.0}{}", from_fahrenheit(value_f, unit), unit.symbol())
}

fn format_rate(pace: Pace, unit: TemperatureUnit) -> String {
    match pace {
        Pace::Rate(rate_f) => format!(
            "{:.0}{}",
            convert_temperature_rate(rate_f, TemperatureUnit::Fahrenheit, unit),
            unit.rate_symbol()
        ),
        Pace::Full => FULL_SPEED_MARKER.to_string(),
        Pace::Hold(_) | Pace::IndefiniteHold => "-".to_string(),
    }
}

fn format_hold(pace: Pace) -> String {
    match pace {
        Pace::Hold(hours) => format_hhmm(hours),
        Pace::IndefiniteHold => INDEFINITE_HOLD_MARKER.to_string(),
        Pace::Rate(_) | Pace::Full => format_hhmm(0.0),
    }
}

fn is_hold(pace: Pace) -> bool {
    matches!(pace, Pace::Hold(_) | Pace::IndefiniteHold)
}

/// 세그먼트/승온속도 방식. 승온 구간 바로 뒤의 유지 구간은 같은 세그먼트로 합친다.
pub fn segment_program(segments: &[Segment], unit: TemperatureUnit) -> String {
    let mut out = String::new();
    let mut number = 0;
    let mut iter = segments.iter().peekable();
    while let Some(seg) = iter.next() {
        number += 1;
        let hold = if is_hold(seg.pace) {
            seg.pace
        } else {
            match iter.peek() {
                Some(next) if is_hold(next.pace) => {
                    let pace = next.pace;
                    iter.next();
                    pace
                }
                _ => Pace::Hold(0.0),
            }
        };
        let _ = writeln!(
            out,
            "Segment {number}: Rate {} | Temp {} | Hold {}",
            format_rate(seg.pace, unit),
            format_temperature(seg.target_f, unit),
            format_hold(hold),
        );
    }
    out
}

/// 누적 스텝 방식. 시작점은 제외한다.
pub fn step_program(waypoints: &[Waypoint], unit: TemperatureUnit) -> String {
    let mut out = String::new();
    for (index, point) in waypoints.iter().skip(1).enumerate() {
        let label = point.label.as_deref().unwrap_or("Step");
        let time = if point.kind == SegmentKind::ProcessHoldIndefinite {
            format!("{INDEFINITE_HOLD_MARKER} (advance manually)")
        } else {
            format_hhmm(point.time_h)
        };
        let _ = writeln!(
            out,
            "Step {}: {label} | {:.0}{} | {time}",
            index + 1,
            point.temperature,
            unit.symbol(),
        );
    }
    out
}
