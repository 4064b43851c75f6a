use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use springboard_core::LaunchPlan;
use std::process::{Command, Stdio};
use tracing::info;

/// Diagnostic details of the spawned child. The launcher does not wait
/// on the process or manage its lifecycle.
pub struct Launched {
    pub pid: u32,
    pub started_at: DateTime<Local>,
}

pub fn spawn(plan: &LaunchPlan) -> Result<Launched> {
    info!("launching application");
    info!("working directory: {}", plan.working_dir.display());
    info!(
        "launch command: {} {}",
        plan.executable.display(),
        plan.args.join(" ")
    );

    let mut command = Command::new(&plan.executable);
    command.current_dir(&plan.working_dir).args(&plan.args);

    if plan.show_console {
        command.stdout(Stdio::inherit()).stderr(Stdio::inherit());
    } else {
        command.stdout(Stdio::null()).stderr(Stdio::null());
        #[cfg(target_os = "windows")]
        {
            use std::os::windows::process::CommandExt;
            const CREATE_NO_WINDOW: u32 = 0x0800_0000;
            command.creation_flags(CREATE_NO_WINDOW);
        }
    }

    // The child is intentionally left running on its own; dropping the
    // handle detaches it from the launcher.
    let child = command
        .spawn()
        .with_context(|| format!("Failed to launch {}", plan.executable.display()))?;

    Ok(Launched {
        pid: child.id(),
        started_at: Local::now(),
    })
}
