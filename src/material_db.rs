//! 유리 계열별 서냉/변형점 온도와 공정별 목표 온도 테이블을 제공한다.
//! 값은 제조사 공개 차트 기준 근사치이며 실제 소성 전에 제조사 자료로 확인해야 한다.
use serde::{Deserialize, Serialize};

use crate::schedule::ProcessMode;

/// 카탈로그에 등록된 유리 계열.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GlassFamily {
    Bullseye90,
    Oceanside96,
    Uroboros90,
    Float,
    Borosilicate,
    /// 서냉/변형점을 호출자가 직접 지정해야 하는 예약 항목.
    Custom,
}

/// 공정별 목표 온도(°F). 없으면 서냉 온도 + 오프셋으로 유도한다.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModeTargets {
    pub slump_f: Option<f64>,
    pub tack_fuse_f: Option<f64>,
    pub full_fuse_f: Option<f64>,
    pub cast_f: Option<f64>,
}

impl ModeTargets {
    pub fn for_mode(&self, mode: ProcessMode) -> Option<f64> {
        match mode {
            ProcessMode::AnnealOnly => None,
            ProcessMode::Slump => self.slump_f,
            ProcessMode::TackFuse => self.tack_fuse_f,
            ProcessMode::FullFuse => self.full_fuse_f,
            ProcessMode::Cast => self.cast_f,
        }
    }
}

#[derive(Debug)]
pub struct GlassMaterial {
    pub family: GlassFamily,
    pub code: &'static str,
    pub name: &'static str,
    pub notes: &'static str,
    pub anneal_f: Option<f64>,
    pub strain_f: Option<f64>,
    /// 냉각 속도 배율. 1.0이 기준 유리.
    pub cooling_multiplier: f64,
    pub targets: ModeTargets,
}

pub fn materials() -> &'static [GlassMaterial] {
    MATERIALS
}

/// 계열에 해당하는 항목을 반환한다. 테이블은 모든 계열을 포함한다.
pub fn material(family: GlassFamily) -> &'static GlassMaterial {
    MATERIALS
        .iter()
        .find(|m| m.family == family)
        .unwrap_or(&MATERIALS[MATERIALS.len() - 1])
}

pub fn find_material(code: &str) -> Option<&'static GlassMaterial> {
    let code = code.trim();
    MATERIALS
        .iter()
        .find(|m| m.code.eq_ignore_ascii_case(code) || m.name.eq_ignore_ascii_case(code))
}

const MATERIALS: &[GlassMaterial] = &[
    GlassMaterial {
        family: GlassFamily::Bullseye90,
        code: "BE90",
        name: "Bullseye COE 90",
        notes: "Bullseye 공개 서냉 차트 기준",
        anneal_f: Some(900.0),
        strain_f: Some(700.0),
        cooling_multiplier: 1.0,
        targets: ModeTargets {
            slump_f: Some(1225.0),
            tack_fuse_f: Some(1350.0),
            full_fuse_f: Some(1490.0),
            cast_f: Some(1525.0),
        },
    },
    GlassMaterial {
        family: GlassFamily::Oceanside96,
        code: "OC96",
        name: "Oceanside COE 96",
        notes: "System 96 호환; 캐스팅 온도는 유도값 사용",
        anneal_f: Some(950.0),
        strain_f: Some(750.0),
        cooling_multiplier: 1.0,
        targets: ModeTargets {
            slump_f: Some(1250.0),
            tack_fuse_f: Some(1370.0),
            full_fuse_f: Some(1460.0),
            cast_f: None,
        },
    },
    GlassMaterial {
        family: GlassFamily::Uroboros90,
        code: "UR90",
        name: "Uroboros COE 90",
        notes: "슬럼프/캐스팅 온도는 유도값 사용",
        anneal_f: Some(900.0),
        strain_f: Some(700.0),
        cooling_multiplier: 0.9,
        targets: ModeTargets {
            slump_f: None,
            tack_fuse_f: Some(1380.0),
            full_fuse_f: Some(1480.0),
            cast_f: None,
        },
    },
    GlassMaterial {
        family: GlassFamily::Float,
        code: "FLOAT",
        name: "Float (soda-lime)",
        notes: "판유리; 주석면 실투에 주의",
        anneal_f: Some(1015.0),
        strain_f: Some(950.0),
        cooling_multiplier: 0.8,
        targets: ModeTargets {
            slump_f: Some(1250.0),
            tack_fuse_f: Some(1400.0),
            full_fuse_f: Some(1480.0),
            cast_f: None,
        },
    },
    GlassMaterial {
        family: GlassFamily::Borosilicate,
        code: "BORO",
        name: "Borosilicate 3.3",
        notes: "저팽창 유리; 냉각 여유가 크다",
        anneal_f: Some(1050.0),
        strain_f: Some(950.0),
        cooling_multiplier: 1.5,
        targets: ModeTargets {
            slump_f: Some(1300.0),
            tack_fuse_f: None,
            full_fuse_f: None,
            cast_f: None,
        },
    },
    GlassMaterial {
        family: GlassFamily::Custom,
        code: "CUSTOM",
        name: "Custom",
        notes: "서냉/변형점 온도를 직접 입력",
        anneal_f: None,
        strain_f: None,
        cooling_multiplier: 1.0,
        targets: ModeTargets {
            slump_f: None,
            tack_fuse_f: None,
            full_fuse_f: None,
            cast_f: None,
        },
    },
];

// NOTE:
// - 목표 온도는 일반적인 제조사 소성 가이드의 중간값이다. 가마마다 편차가 크므로 시험 소성으로 보정한다.
// - Custom은 마지막 항목이어야 한다(`material`의 폴백).
