use std::process::ExitCode;

fn main() -> ExitCode {
    cashflow_planner::init();
    match cashflow_planner::cli::run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("cashflow_cli: {err}");
            ExitCode::FAILURE
        }
    }
}
