use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::i18n::{keys, Translator};
use crate::material_db;
use crate::schedule::{
    self, instructions::format_hhmm, resolve::needs_custom_temperatures, MoldDry, Overrides,
    ProcessMode, ScheduleRequest, ScheduleResult, ShapeFactor,
};
use crate::units::UnitSystem;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Schedule,
    Glasses,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다. 입력이 끝나면(EOF) 종료로 본다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_SCHEDULE));
    println!("{}", tr.t(keys::MAIN_MENU_GLASSES));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    select_menu(&mut io::stdin().lock(), &mut io::stdout(), tr)
}

fn select_menu<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    tr: &Translator,
) -> Result<MenuChoice, AppError> {
    loop {
        let sel = match read_line_from(input, out, tr.t(keys::PROMPT_MENU_SELECT)) {
            Ok(sel) => sel,
            Err(AppError::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof => {
                writeln!(out)?;
                return Ok(MenuChoice::Exit);
            }
            Err(e) => return Err(e),
        };
        match sel.trim() {
            "1" => return Ok(MenuChoice::Schedule),
            "2" => return Ok(MenuChoice::Glasses),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => writeln!(out, "{}", tr.t(keys::INVALID_SELECTION_RETRY))?,
        }
    }
}

/// 스케줄 계산 메뉴를 처리한다. 계산 오류는 출력만 하고 메뉴로 돌아간다.
pub fn handle_schedule(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SCHEDULE_HEADING));
    let glass = loop {
        let code = read_line(tr.t(keys::PROMPT_GLASS))?;
        let code = if code.trim().is_empty() {
            cfg.default_glass.as_str()
        } else {
            code.trim()
        };
        match material_db::find_material(code) {
            Some(m) => break m,
            None => println!("{}", tr.t(keys::ERROR_UNKNOWN_GLASS)),
        }
    };
    let thickness_prompt = match cfg.unit_system {
        UnitSystem::Imperial => keys::PROMPT_THICKNESS_IN,
        UnitSystem::Metric => keys::PROMPT_THICKNESS_CM,
    };
    let thickness = read_positive_f64(tr, tr.t(thickness_prompt))?;

    println!("{}", tr.t(keys::MODE_OPTIONS));
    let mode = match read_line(tr.t(keys::PROMPT_SELECT))?.trim() {
        "1" => ProcessMode::AnnealOnly,
        "2" => ProcessMode::Slump,
        "3" => ProcessMode::TackFuse,
        "5" => ProcessMode::Cast,
        _ => ProcessMode::FullFuse,
    };
    println!("{}", tr.t(keys::SHAPE_OPTIONS));
    let shape = match read_line(tr.t(keys::PROMPT_SELECT))?.trim() {
        "2" => ShapeFactor::Uneven,
        "3" => ShapeFactor::Hollow,
        _ => cfg.shape,
    };

    let mut overrides = Overrides::default();
    if needs_custom_temperatures(glass.family) {
        println!("{}", tr.t(keys::CUSTOM_NOTE));
        overrides.anneal_temperature = read_optional_f64(tr, tr.t(keys::PROMPT_ANNEAL))?;
        overrides.strain_temperature = read_optional_f64(tr, tr.t(keys::PROMPT_STRAIN))?;
    }

    let mut request = ScheduleRequest::new(glass.family, thickness, mode, cfg.unit_system)
        .with_shape(shape)
        .with_conservativeness(cfg.conservativeness)
        .with_overrides(overrides);
    if mode != ProcessMode::AnnealOnly {
        let answer = read_line(tr.t(keys::PROMPT_INDEFINITE_HOLD))?;
        request = request.with_indefinite_hold(answer.trim().eq_ignore_ascii_case("y"));
    }
    if mode == ProcessMode::Cast {
        if let Some(hours) = read_optional_f64(tr, tr.t(keys::PROMPT_MOLD_DRY_HOURS))? {
            request = request.with_mold_dry(MoldDry {
                hours,
                temperature: None,
            });
        }
    }

    match schedule::compute_schedule(&request) {
        Ok(result) => print_schedule(tr, mode, &result),
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

/// 계산 결과를 두 가지 지시문 형식으로 출력한다.
pub fn print_schedule(tr: &Translator, mode: ProcessMode, result: &ScheduleResult) {
    let unit = result.unit_system.temperature();
    println!(
        "[{}] {} {}  {} {:.0}{}",
        mode.label(),
        tr.t(keys::RESULT_TOTAL_TIME),
        format_hhmm(result.total_hours()),
        tr.t(keys::RESULT_PEAK),
        result.peak_temperature(),
        unit.symbol()
    );
    println!("\n{}", tr.t(keys::RESULT_SEGMENT_PROGRAM));
    print!("{}", result.segment_program);
    println!("\n{}", tr.t(keys::RESULT_STEP_PROGRAM));
    print!("{}", result.step_program);
}

/// 유리 목록을 출력한다.
pub fn print_glasses(tr: &Translator) {
    println!("{}", tr.t(keys::GLASSES_HEADING));
    for m in material_db::materials() {
        let temp = |v: Option<f64>| v.map_or_else(|| "-".to_string(), |t| format!("{t:.0}°F"));
        println!(
            "{:<8} {:<20} anneal {:>7}  strain {:>7}  x{:.2}  {}",
            m.code,
            m.name,
            temp(m.anneal_f),
            temp(m.strain_f),
            m.cooling_multiplier,
            m.notes
        );
    }
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {:?}", tr.t(keys::SETTINGS_CURRENT_UNIT_SYSTEM), cfg.unit_system);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    cfg.unit_system = match sel.trim() {
        "1" => UnitSystem::Imperial,
        "2" => UnitSystem::Metric,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            cfg.unit_system
        }
    };
    println!("{} {:?}", tr.t(keys::SETTINGS_SAVED), cfg.unit_system);
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    read_line_from(&mut io::stdin().lock(), &mut io::stdout(), prompt)
}

/// 한 줄을 읽는다. 입력이 닫혔으면 `UnexpectedEof` 오류를 반환한다.
fn read_line_from<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<String, AppError> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(AppError::Io(io::ErrorKind::UnexpectedEof.into()));
    }
    Ok(buf)
}

fn read_positive_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    read_positive_f64_from(&mut io::stdin().lock(), &mut io::stdout(), tr, prompt)
}

fn read_positive_f64_from<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    tr: &Translator,
    prompt: &str,
) -> Result<f64, AppError> {
    loop {
        let s = read_line_from(input, out, prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() && v > 0.0 => return Ok(v),
            _ => writeln!(out, "{}", tr.t(keys::ERROR_INVALID_NUMBER))?,
        }
    }
}

fn read_optional_f64(tr: &Translator, prompt: &str) -> Result<Option<f64>, AppError> {
    read_optional_f64_from(&mut io::stdin().lock(), &mut io::stdout(), tr, prompt)
}

/// 빈 입력은 None. 숫자로 읽히지 않으면 다시 묻는다.
fn read_optional_f64_from<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    tr: &Translator,
    prompt: &str,
) -> Result<Option<f64>, AppError> {
    loop {
        let s = read_line_from(input, out, prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(None);
        }
        match s.parse::<f64>() {
            Ok(v) if v.is_finite() => return Ok(Some(v)),
            _ => writeln!(out, "{}", tr.t(keys::ERROR_INVALID_NUMBER))?,
        }
    }
}
