use std::path::Path;

use thiserror::Error;

use crate::cli::{Cli, Command, ScheduleArgs};
use crate::config::{self, Config};
use crate::i18n::{self, Translator};
use crate::schedule::{self, ScheduleError};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] config::ConfigError),
    #[error("스케줄 계산 오류: {0}")]
    Schedule(#[from] ScheduleError),
    #[error("JSON 직렬화 오류: {0}")]
    Json(#[from] serde_json::Error),
    #[error("알 수 없는 유리: {0}")]
    UnknownGlass(String),
}

/// 파싱된 인자로 애플리케이션을 실행한다.
pub fn run(cli: Cli) -> Result<(), AppError> {
    let config_path = cli.config.as_deref();
    let mut cfg = match config_path {
        Some(path) => config::load_from(path)?,
        None => config::load_or_default()?,
    };
    let lang = i18n::resolve_language(cli.lang.as_deref(), Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, cli.locales.as_deref());
    tracing::debug!(lang = %lang, "언어 결정");

    match cli.command {
        Some(Command::Schedule(args)) => run_schedule(&args, &cfg, &tr),
        Some(Command::Glasses) => {
            ui_cli::print_glasses(&tr);
            Ok(())
        }
        None => run_interactive(&mut cfg, &tr, config_path),
    }
}

fn run_schedule(args: &ScheduleArgs, cfg: &Config, tr: &Translator) -> Result<(), AppError> {
    let request = args.to_request(cfg)?;
    let result = schedule::compute_schedule(&request)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        ui_cli::print_schedule(tr, request.mode, &result);
    }
    Ok(())
}

/// 대화형 메인 루프를 실행한다.
fn run_interactive(
    config: &mut Config,
    tr: &Translator,
    config_path: Option<&Path>,
) -> Result<(), AppError> {
    let save = |cfg: &Config| match config_path {
        Some(path) => cfg.save_to(path),
        None => cfg.save(),
    };
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Schedule => ui_cli::handle_schedule(tr, config)?,
            MenuChoice::Glasses => ui_cli::print_glasses(tr),
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                save(&*config)?;
            }
            MenuChoice::Exit => {
                save(&*config)?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
