use emode_engine::{AppError, Config, FileSnapshotSource, PreviewReport, SnapshotSource};

fn run(config: &Config) -> Result<String, AppError> {
    let source = FileSnapshotSource::new(&config.snapshot_path);
    let snapshot = source.load()?;

    let report = PreviewReport::build(&snapshot, config.preview_mode);
    tracing::info!(
        fingerprint = %report.fingerprint,
        active_pairs = report.active.len(),
        banks = report.impacts.len(),
        "e-mode preview computed"
    );

    let output = if config.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    Ok(output)
}

fn main() {
    // Logs go to stderr so stdout stays valid JSON.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    match run(&config) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
