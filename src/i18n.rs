use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_SCHEDULE: &str = "main_menu.schedule";
    pub const MAIN_MENU_GLASSES: &str = "main_menu.glasses";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_UNKNOWN_GLASS: &str = "error.unknown_glass";

    pub const SCHEDULE_HEADING: &str = "schedule.heading";
    pub const PROMPT_GLASS: &str = "prompt.glass";
    pub const PROMPT_THICKNESS_IN: &str = "prompt.thickness_in";
    pub const PROMPT_THICKNESS_CM: &str = "prompt.thickness_cm";
    pub const MODE_OPTIONS: &str = "schedule.mode_options";
    pub const SHAPE_OPTIONS: &str = "schedule.shape_options";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const PROMPT_ANNEAL: &str = "prompt.anneal";
    pub const PROMPT_STRAIN: &str = "prompt.strain";
    pub const PROMPT_INDEFINITE_HOLD: &str = "prompt.indefinite_hold";
    pub const PROMPT_MOLD_DRY_HOURS: &str = "prompt.mold_dry_hours";
    pub const CUSTOM_NOTE: &str = "schedule.custom_note";

    pub const RESULT_SEGMENT_PROGRAM: &str = "result.segment_program";
    pub const RESULT_STEP_PROGRAM: &str = "result.step_program";
    pub const RESULT_TOTAL_TIME: &str = "result.total_time";
    pub const RESULT_PEAK: &str = "result.peak";

    pub const GLASSES_HEADING: &str = "glasses.heading";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_UNIT_SYSTEM: &str = "settings.current_unit_system";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    /// 번역을 가져온다. 언어팩 > 내장 문자열 순이며 영어 번역이 없으면 한국어를 쓴다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.as_str();
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 아래 key = "value".
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let path = dir.join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Glass Kiln Toolbox ===",
        MAIN_MENU_SCHEDULE => "1) 소성 스케줄 계산",
        MAIN_MENU_GLASSES => "2) 유리 목록",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "0보다 큰 숫자를 입력하세요.",
        ERROR_UNKNOWN_GLASS => "알 수 없는 유리 코드입니다.",
        SCHEDULE_HEADING => "\n-- 소성 스케줄 --",
        PROMPT_GLASS => "유리 코드(엔터=기본값): ",
        PROMPT_THICKNESS_IN => "두께 [in]: ",
        PROMPT_THICKNESS_CM => "두께 [cm]: ",
        MODE_OPTIONS => "공정: 1) 서냉만 2) 슬럼프 3) 택 퓨즈 4) 풀 퓨즈 5) 캐스팅",
        SHAPE_OPTIONS => "형상: 1) 평판 2) 요철/택 3) 중공/깊은 형상",
        PROMPT_SELECT => "선택: ",
        PROMPT_ANNEAL => "서냉 온도 (엔터=기본값): ",
        PROMPT_STRAIN => "변형점 온도 (엔터=기본값): ",
        PROMPT_INDEFINITE_HOLD => "공정 온도에서 수동 진행까지 유지할까요? (y/N): ",
        PROMPT_MOLD_DRY_HOURS => "몰드 건조 시간 [h] (없으면 0): ",
        CUSTOM_NOTE => "참고: Custom 유리는 서냉/변형점 온도를 입력하지 않으면 900°F/700°F를 사용합니다.",
        RESULT_SEGMENT_PROGRAM => "[세그먼트 방식]",
        RESULT_STEP_PROGRAM => "[스텝 방식]",
        RESULT_TOTAL_TIME => "총 소요 시간:",
        RESULT_PEAK => "최고 온도:",
        GLASSES_HEADING => "\n-- 유리 목록 --",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "현재 단위 시스템:",
        SETTINGS_OPTIONS => "1) Imperial (in, °F)  2) Metric (cm, °C)",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "단위 시스템이 변경되었습니다:",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Glass Kiln Toolbox ===",
        MAIN_MENU_SCHEDULE => "1) Firing schedule",
        MAIN_MENU_GLASSES => "2) Glass catalogue",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number greater than 0.",
        ERROR_UNKNOWN_GLASS => "Unknown glass code.",
        SCHEDULE_HEADING => "\n-- Firing Schedule --",
        PROMPT_GLASS => "Glass code (enter = default): ",
        PROMPT_THICKNESS_IN => "Thickness [in]: ",
        PROMPT_THICKNESS_CM => "Thickness [cm]: ",
        MODE_OPTIONS => "Process: 1) Anneal only 2) Slump 3) Tack fuse 4) Full fuse 5) Cast",
        SHAPE_OPTIONS => "Shape: 1) Flat 2) Uneven/tack 3) Hollow/deep",
        PROMPT_SELECT => "Select: ",
        PROMPT_ANNEAL => "Anneal temperature (enter = default): ",
        PROMPT_STRAIN => "Strain point (enter = default): ",
        PROMPT_INDEFINITE_HOLD => "Hold at process temperature until advanced manually? (y/N): ",
        PROMPT_MOLD_DRY_HOURS => "Mold dry hours (0 if none): ",
        CUSTOM_NOTE => "Note: Custom glass falls back to 900°F/700°F when anneal/strain are left empty.",
        RESULT_SEGMENT_PROGRAM => "[Segment program]",
        RESULT_STEP_PROGRAM => "[Step program]",
        RESULT_TOTAL_TIME => "Total time:",
        RESULT_PEAK => "Peak temperature:",
        GLASSES_HEADING => "\n-- Glass Catalogue --",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "Current unit system:",
        SETTINGS_OPTIONS => "1) Imperial (in, °F)  2) Metric (cm, °C)",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; unit system unchanged.",
        SETTINGS_SAVED => "Unit system changed to:",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_language_wins_over_config() {
        assert_eq!(resolve_language(Some("en-US"), Some("ko")), "en");
        assert_eq!(resolve_language(Some("auto"), Some("ko-kr")), "ko");
    }

    #[test]
    fn pack_overrides_builtin_strings() {
        let map = parse_toml_to_map("[main_menu]\ntitle = \"Kiln\"\n").expect("pack");
        let tr = Translator {
            lang: Language::En,
            overrides: Some(map),
        };
        assert_eq!(tr.t(keys::MAIN_MENU_TITLE), "Kiln");
        assert_eq!(tr.t(keys::APP_EXIT), "Exiting application.");
    }
}
