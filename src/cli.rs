//! 명령행 인자 정의. 하위 명령이 없으면 대화형 메뉴로 동작한다.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::app::AppError;
use crate::config::Config;
use crate::material_db;
use crate::schedule::{
    Conservativeness, MoldDry, Overrides, ProcessMode, ScheduleRequest, ShapeFactor,
};
use crate::units::UnitSystem;

#[derive(Debug, Parser)]
#[command(name = "glass_kiln_toolbox", version, about = "Glass kiln firing/annealing schedule calculator")]
pub struct Cli {
    /// 표시 언어 (auto/ko/en)
    #[arg(long, short = 'L', global = true)]
    pub lang: Option<String>,
    /// 설정 파일 경로
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// 언어팩(TOML) 디렉터리
    #[arg(long, global = true)]
    pub locales: Option<PathBuf>,
    /// 디버그 로그 출력
    #[arg(long, short, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 스케줄을 계산해 출력한다.
    Schedule(ScheduleArgs),
    /// 등록된 유리 목록을 출력한다.
    Glasses,
}

#[derive(Debug, Clone, Args)]
pub struct ScheduleArgs {
    /// 유리 코드 또는 이름 (생략 시 설정의 기본값)
    #[arg(long, short)]
    pub glass: Option<String>,
    /// 두께 (imperial=in, metric=cm)
    #[arg(long, short)]
    pub thickness: f64,
    #[arg(long, short, default_value = "full-fuse")]
    pub mode: ProcessMode,
    #[arg(long, short)]
    pub units: Option<UnitSystem>,
    #[arg(long)]
    pub shape: Option<ShapeFactor>,
    #[arg(long)]
    pub conservativeness: Option<Conservativeness>,
    #[arg(long)]
    pub anneal: Option<f64>,
    #[arg(long)]
    pub strain: Option<f64>,
    #[arg(long)]
    pub process_temp: Option<f64>,
    /// 공정 유지 시간(분)
    #[arg(long)]
    pub hold_min: Option<f64>,
    /// 공정 온도까지 승온 속도(°/h)
    #[arg(long)]
    pub ramp: Option<f64>,
    #[arg(long)]
    pub mold_dry_hours: Option<f64>,
    #[arg(long)]
    pub mold_dry_temp: Option<f64>,
    #[arg(long)]
    pub indefinite_hold: bool,
    /// 결과 전체를 JSON으로 출력
    #[arg(long)]
    pub json: bool,
}

impl ScheduleArgs {
    /// 인자와 설정을 합쳐 엔진 요청을 만든다. 인자가 설정보다 우선한다.
    pub fn to_request(&self, cfg: &Config) -> Result<ScheduleRequest, AppError> {
        let code = self.glass.as_deref().unwrap_or(&cfg.default_glass);
        let glass = material_db::find_material(code)
            .ok_or_else(|| AppError::UnknownGlass(code.to_string()))?;
        let overrides = Overrides {
            anneal_temperature: self.anneal,
            strain_temperature: self.strain,
            process_temperature: self.process_temp,
            process_hold_hours: self.hold_min.map(|m| m / 60.0),
            process_ramp_rate: self.ramp,
        };
        let mut request = ScheduleRequest::new(
            glass.family,
            self.thickness,
            self.mode,
            self.units.unwrap_or(cfg.unit_system),
        )
        .with_shape(self.shape.unwrap_or(cfg.shape))
        .with_conservativeness(self.conservativeness.unwrap_or(cfg.conservativeness))
        .with_overrides(overrides)
        .with_indefinite_hold(self.indefinite_hold);
        if let Some(hours) = self.mold_dry_hours {
            request = request.with_mold_dry(MoldDry {
                hours,
                temperature: self.mold_dry_temp,
            });
        }
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material_db::GlassFamily;

    #[test]
    fn schedule_args_merge_with_config() {
        let cli = Cli::try_parse_from([
            "glass_kiln_toolbox",
            "schedule",
            "-t",
            "0.5",
            "--mode",
            "tack",
            "--hold-min",
            "30",
        ])
        .expect("parse");
        let Some(Command::Schedule(args)) = cli.command else {
            panic!("expected schedule command");
        };
        let cfg = Config {
            unit_system: UnitSystem::Metric,
            ..Config::default()
        };
        let req = args.to_request(&cfg).expect("request");
        assert_eq!(req.material, GlassFamily::Bullseye90);
        assert_eq!(req.mode, ProcessMode::TackFuse);
        assert_eq!(req.unit_system, UnitSystem::Metric);
        assert_eq!(req.overrides.process_hold_hours, Some(0.5));
    }

    #[test]
    fn non_numeric_thickness_is_rejected() {
        let res = Cli::try_parse_from(["glass_kiln_toolbox", "schedule", "-t", "thick"]);
        assert!(res.is_err());
    }

    #[test]
    fn unknown_glass_is_reported() {
        let cli = Cli::try_parse_from([
            "glass_kiln_toolbox",
            "schedule",
            "-t",
            "0.25",
            "-g",
            "nope",
        ])
        .expect("parse");
        let Some(Command::Schedule(args)) = cli.command else {
            panic!("expected schedule command");
        };
        assert!(matches!(
            args.to_request(&Config::default()),
            Err(AppError::UnknownGlass(_))
        ));
    }
}
