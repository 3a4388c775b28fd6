use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::material_db::GlassFamily;
use crate::units::{convert_length, convert_temperature, convert_temperature_rate, UnitSystem};

/// 소성 공정 종류. 뒤로 갈수록 고온·장시간 공정이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProcessMode {
    AnnealOnly,
    Slump,
    TackFuse,
    FullFuse,
    Cast,
}

impl ProcessMode {
    pub const ALL: [ProcessMode; 5] = [
        ProcessMode::AnnealOnly,
        ProcessMode::Slump,
        ProcessMode::TackFuse,
        ProcessMode::FullFuse,
        ProcessMode::Cast,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProcessMode::AnnealOnly => "Anneal only",
            ProcessMode::Slump => "Slump",
            ProcessMode::TackFuse => "Tack fuse",
            ProcessMode::FullFuse => "Full fuse",
            ProcessMode::Cast => "Cast",
        }
    }
}

impl FromStr for ProcessMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "anneal" | "anneal-only" | "anneal_only" => Ok(ProcessMode::AnnealOnly),
            "slump" => Ok(ProcessMode::Slump),
            "tack" | "tack-fuse" | "tack_fuse" => Ok(ProcessMode::TackFuse),
            "full" | "full-fuse" | "full_fuse" => Ok(ProcessMode::FullFuse),
            "cast" => Ok(ProcessMode::Cast),
            other => Err(format!("알 수 없는 공정: {other}")),
        }
    }
}

/// 형상 보정 계수. 입체/중공 형상일수록 열이 오래 머문다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeFactor {
    #[default]
    Flat,
    Uneven,
    Hollow,
}

impl ShapeFactor {
    pub fn multiplier(self) -> f64 {
        match self {
            ShapeFactor::Flat => 1.0,
            ShapeFactor::Uneven => 1.5,
            ShapeFactor::Hollow => 2.0,
        }
    }
}

impl FromStr for ShapeFactor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "flat" | "slab" => Ok(ShapeFactor::Flat),
            "uneven" | "tack" => Ok(ShapeFactor::Uneven),
            "hollow" | "deep" => Ok(ShapeFactor::Hollow),
            other => Err(format!("알 수 없는 형상: {other}")),
        }
    }
}

/// 안전 여유 배율. 클수록 서냉 유지가 길고 냉각이 느리다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Conservativeness {
    Fast,
    #[default]
    Standard,
    Cautious,
}

impl Conservativeness {
    pub fn multiplier(self) -> f64 {
        match self {
            Conservativeness::Fast => 0.75,
            Conservativeness::Standard => 1.0,
            Conservativeness::Cautious => 1.5,
        }
    }
}

impl FromStr for Conservativeness {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fast" => Ok(Conservativeness::Fast),
            "standard" | "normal" => Ok(Conservativeness::Standard),
            "cautious" | "safe" => Ok(Conservativeness::Cautious),
            other => Err(format!("알 수 없는 안전 여유: {other}")),
        }
    }
}

impl FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "imperial" | "in" | "f" => Ok(UnitSystem::Imperial),
            "metric" | "cm" | "c" => Ok(UnitSystem::Metric),
            other => Err(format!("알 수 없는 단위 시스템: {other}")),
        }
    }
}

/// 구간 분류. 각 웨이포인트는 자신에서 끝나는 구간의 분류를 가진다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    Idle,
    Heating,
    Soaking,
    Cooling,
    ProcessRamp,
    ProcessHoldFinite,
    ProcessHoldIndefinite,
}

/// 스케줄 위의 한 점.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Waypoint {
    /// 누적 경과 시간(h)
    pub time_h: f64,
    /// 요청 단위 시스템 기준 온도
    pub temperature: f64,
    pub label: Option<String>,
    pub kind: SegmentKind,
}

/// 사용자가 직접 지정한 값. 모두 요청 단위 시스템 기준이다.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Overrides {
    pub anneal_temperature: Option<f64>,
    pub strain_temperature: Option<f64>,
    pub process_temperature: Option<f64>,
    /// 공정 유지 시간(h)
    pub process_hold_hours: Option<f64>,
    /// 공정 온도까지의 승온 속도(°/h)
    pub process_ramp_rate: Option<f64>,
}

/// 캐스팅 몰드 건조 구간 설정.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoldDry {
    pub hours: f64,
    /// 요청 단위 시스템 기준. 없으면 기본 건조 온도를 쓴다.
    pub temperature: Option<f64>,
}

/// 스케줄 계산 요청.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleRequest {
    pub material: GlassFamily,
    /// 두께. Imperial이면 인치, Metric이면 센티미터.
    pub thickness: f64,
    pub mode: ProcessMode,
    pub unit_system: UnitSystem,
    pub shape: Option<ShapeFactor>,
    pub conservativeness: Option<Conservativeness>,
    pub overrides: Overrides,
    pub mold_dry: Option<MoldDry>,
    pub indefinite_hold: bool,
}

impl ScheduleRequest {
    pub fn new(
        material: GlassFamily,
        thickness: f64,
        mode: ProcessMode,
        unit_system: UnitSystem,
    ) -> Self {
        Self {
            material,
            thickness,
            mode,
            unit_system,
            shape: None,
            conservativeness: None,
            overrides: Overrides::default(),
            mold_dry: None,
            indefinite_hold: false,
        }
    }

    pub fn with_shape(mut self, shape: ShapeFactor) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn with_conservativeness(mut self, level: Conservativeness) -> Self {
        self.conservativeness = Some(level);
        self
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn with_mold_dry(mut self, mold_dry: MoldDry) -> Self {
        self.mold_dry = Some(mold_dry);
        self
    }

    pub fn with_indefinite_hold(mut self, indefinite: bool) -> Self {
        self.indefinite_hold = indefinite;
        self
    }

    /// 두께와 모든 온도/속도 입력을 다른 단위 시스템으로 옮긴 요청을 만든다.
    pub fn to_unit_system(&self, target: UnitSystem) -> Self {
        let from = self.unit_system;
        let temp = |v: Option<f64>| {
            v.map(|t| convert_temperature(t, from.temperature(), target.temperature()))
        };
        let overrides = Overrides {
            anneal_temperature: temp(self.overrides.anneal_temperature),
            strain_temperature: temp(self.overrides.strain_temperature),
            process_temperature: temp(self.overrides.process_temperature),
            process_hold_hours: self.overrides.process_hold_hours,
            process_ramp_rate: self.overrides.process_ramp_rate.map(|r| {
                convert_temperature_rate(r, from.temperature(), target.temperature())
            }),
        };
        let mold_dry = self.mold_dry.map(|d| MoldDry {
            hours: d.hours,
            temperature: temp(d.temperature),
        });
        Self {
            thickness: convert_length(self.thickness, from.length(), target.length()),
            unit_system: target,
            overrides,
            mold_dry,
            ..self.clone()
        }
    }
}

/// 엔진 출력. 생성 후 변경하지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleResult {
    pub unit_system: UnitSystem,
    pub waypoints: Vec<Waypoint>,
    /// 세그먼트/승온속도 방식 컨트롤러용 지시문
    pub segment_program: String,
    /// 누적 시간 스텝 방식 컨트롤러용 지시문
    pub step_program: String,
}

impl ScheduleResult {
    /// 전체 소요 시간(h). 무기한 유지는 포함하지 않는다.
    pub fn total_hours(&self) -> f64 {
        self.waypoints.last().map(|w| w.time_h).unwrap_or(0.0)
    }

    pub fn peak_temperature(&self) -> f64 {
        self.waypoints
            .iter()
            .map(|w| w.temperature)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn has_indefinite_hold(&self) -> bool {
        self.waypoints
            .iter()
            .any(|w| w.kind == SegmentKind::ProcessHoldIndefinite)
    }
}
