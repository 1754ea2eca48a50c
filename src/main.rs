use anyhow::Context;
use circle_area::utils::error::CalcError;
use circle_area::utils::logger;
use circle_area::{CircleAreaCalculator, CliConfig, FixedSource, ReaderSource};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    logger::init_cli_logger(cli.verbose, settings.log_level())
        .context("failed to install the logger")?;
    tracing::debug!("CLI config: {:?}", cli);
    tracing::debug!("Resolved settings: {:?}", settings);

    let calculator = CircleAreaCalculator::new(settings);
    let stdout = std::io::stdout();
    let mut output = stdout.lock();

    let result = match &cli.radius {
        Some(radius) => calculator.run(&mut FixedSource::new(radius.as_str()), &mut output),
        None => {
            let stdin = std::io::stdin();
            calculator.run(&mut ReaderSource::new(stdin.lock()), &mut output)
        }
    };

    if let Err(e) = result {
        report_failure(&e);
        std::process::exit(e.exit_code());
    }

    Ok(())
}

fn report_failure(e: &CalcError) {
    tracing::error!(
        "Calculation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );

    // The prompt leaves the cursor mid-line.
    eprintln!();
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
}
