use clap::Parser;
use glass_kiln_toolbox::{app, cli::Cli, logging};

/// 프로그램의 엔트리 포인트. 인자를 파싱하고 로그를 초기화한 뒤 애플리케이션을 실행한다.
fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    if let Err(err) = try_run(cli) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    app::run(cli)?;
    Ok(())
}
