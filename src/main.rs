//! Entry point for the configure launcher.
use std::{env, io, process};

use configure_launcher::{
    cli::LauncherArgs,
    launcher::{self, LaunchExit, LaunchOutcome},
    lib::telemetry,
};

fn main() {
    let code = match bootstrap() {
        Ok(code) => code,
        Err(exit) => exit.report(),
    };
    process::exit(code);
}

fn bootstrap() -> Result<i32, LaunchExit> {
    telemetry::init_tracing().map_err(LaunchExit::from_error)?;
    let args = LauncherArgs::from_os_args(env::args_os()).map_err(LaunchExit::from_error)?;
    let profile = args.build().map_err(LaunchExit::from_launch_error)?;

    let outcome = launcher::run(&profile).map_err(LaunchExit::from_launch_error)?;
    if let LaunchOutcome::Planned(plan) = &outcome {
        launcher::write_plan(&mut io::stdout().lock(), plan).map_err(LaunchExit::from_error)?;
    }
    Ok(outcome.exit_code())
}
