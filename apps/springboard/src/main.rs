use anyhow::{Context, Result};
use springboard_core::{Chipset, LaunchError, LaunchPlan, RuntimeHome, args, resolve};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod host;
mod notify;
mod spawn;

use notify::{ConsoleNotifier, Notifier};

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let notifier = ConsoleNotifier;
    if let Err(err) = run(&notifier) {
        match err.downcast_ref::<LaunchError>() {
            Some(fatal) => {
                notifier.fatal(&fatal.to_string());
                std::process::exit(fatal.exit_code());
            }
            None => {
                error!("launch aborted: {err:#}");
                std::process::exit(1);
            }
        }
    }
}

fn run(notifier: &dyn Notifier) -> Result<()> {
    let base_dir = std::env::current_dir().context("Failed to resolve the start directory")?;
    let cmd_args: Vec<String> = std::env::args().skip(1).collect();
    let host_is_64bit = host::is_64bit();

    info!("starting from directory: {}", base_dir.display());
    info!(
        "cpu architecture: {}",
        if host_is_64bit { "x64" } else { "x32" }
    );
    if cmd_args.is_empty() {
        info!("command line arguments: none");
    } else {
        info!("command line arguments: {}", cmd_args.join(" | "));
    }

    let settings = config::load_settings(&base_dir);

    // Best-effort install check. Missing files are worth a warning each,
    // but only a missing runtime blocks the launch.
    for report in config::core_file_tree().verify(&base_dir) {
        if report.found {
            info!("found core file: {}", report.path.display());
        } else {
            warn!("core file missing: {}", report.path.display());
            notifier.warn(&format!(
                "The file \"{}\" is missing. The application may not work correctly.",
                report.path.display()
            ));
        }
    }

    let jre_x32 = RuntimeHome::new(base_dir.join(&settings.runtime_x32));
    let jre_x64 = RuntimeHome::new(base_dir.join(&settings.runtime_x64));
    let has_x32 = jre_x32.check();
    let has_x64 = jre_x64.check();
    info!("has x32 runtime: {has_x32}");
    info!("has x64 runtime: {has_x64}");

    let explicit = args::chipset_override(&cmd_args);
    let resolution = resolve(has_x32, has_x64, host_is_64bit, explicit)?;
    for warning in &resolution.warnings {
        match warning {
            springboard_core::ResolveWarning::ThirtyTwoBitFallback => {
                warn!("using the x32 runtime on an x64 host");
                notifier.warn("Using the 32-bit runtime on a 64-bit machine.");
            }
        }
    }
    info!("determined chipset: {}", resolution.chipset);

    let runtime = if resolution.chipset == Chipset::X64 {
        &jre_x64
    } else {
        &jre_x32
    };

    let show_console = args::wants_console(&cmd_args);
    let user_args = args::filter_reserved(&cmd_args);
    let plan = LaunchPlan::build(&settings, &base_dir, runtime, &user_args, show_console);

    let launched = spawn::spawn(&plan)?;
    info!("process id: {}", launched.pid);
    info!("start time: {}", launched.started_at.format("%Y-%m-%d %H:%M:%S"));

    Ok(())
}
