use anyhow::Context;
use clap::Parser;
use volume_controller::cli::Cli;
use volume_controller::{AppResult, VolumeConfig, VolumeController, VolumeEvent};

const LOG_TARGET_STARTUP: &str = "volume_controller::startup";

/// Initialize tracing with file rotation
///
/// Logs are written to `<config dir>/VolumeController/logs/`, one file per
/// day. Debug builds also log to stderr so stdout stays clean for the state
/// output.
fn initialize_tracing() {
    use tracing_appender::rolling;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let log_dir = dirs::config_dir()
        .map(|dir| dir.join("VolumeController").join("logs"))
        .unwrap_or_else(|| std::path::PathBuf::from("logs"));

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
    }

    let file_appender = rolling::daily(&log_dir, "volume-controller.log");

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    #[cfg(debug_assertions)]
    {
        let console_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .with(console_layer)
            .init();
    }

    #[cfg(not(debug_assertions))]
    {
        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();
    }
}

fn print_state(controller: &VolumeController) {
    println!(
        "volume={:.2} mute={} ({}%)",
        controller.volume(),
        controller.is_muted(),
        controller.state().volume_percent()
    );
}

fn run(cli: Cli) -> AppResult<()> {
    // An explicit config path must load; the platform default may fall back
    let mut config = match &cli.config {
        Some(path) => VolumeConfig::load_from(path)
            .with_context(|| format!("Failed to use config {}", path.display()))?,
        None => VolumeConfig::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {:#}, using defaults", anyhow::Error::from(e));
            VolumeConfig::default()
        }),
    };
    if let Some(initial) = cli.initial {
        config.initial_volume = initial;
    }

    let mut controller = VolumeController::from_config(&config);
    let (events, _id) = controller.subscribe();
    tracing::info!(
        target: LOG_TARGET_STARTUP,
        initial = controller.volume(),
        step = controller.step(),
        "Volume controller ready"
    );

    if let Some(command) = cli.command.and_then(|c| c.volume_command()) {
        controller.execute(command);
    }

    for event in events.try_iter() {
        if let VolumeEvent::MuteChanged { .. } = event {
            tracing::info!("{}", event.description());
        }
    }

    print_state(&controller);

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    initialize_tracing();

    if let Err(e) = run(cli) {
        tracing::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
