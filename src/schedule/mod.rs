//! 유리 소성/서냉 스케줄 계산 모듈 모음.

pub mod chart;
pub mod engine;
pub mod instructions;
pub mod physics;
pub mod resolve;
pub mod sequencer;
pub mod types;

pub use chart::{chart_traces, Trace, TraceClass};
pub use engine::{compute_schedule, ScheduleError};
pub use types::*;
