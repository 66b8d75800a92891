//! gitobj binary entry point.

use std::process::ExitCode;

use gitobj::ui::output;

fn main() -> ExitCode {
    match gitobj::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}
