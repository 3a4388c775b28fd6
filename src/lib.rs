//! 스케줄 계산 로직을 라이브러리로 분리하여 CLI 외의 화면(차트 렌더러 등)에서도 재사용한다.

pub mod app;
pub mod cli;
pub mod config;
pub mod i18n;
pub mod logging;
pub mod material_db;
pub mod schedule;
pub mod ui_cli;
pub mod units;
