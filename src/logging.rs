//! tracing 구독자 초기화.

use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// 로그 출력을 초기화한다.
///
/// RUST_LOG가 있으면 그 값을 따르고, 없으면 `verbose` 여부에 따라 debug/warn 수준을 쓴다.
/// 스케줄 출력과 섞이지 않도록 stderr로 내보낸다.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    // 테스트 등에서 중복 초기화되면 무시한다.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}
