use std::process::ExitCode;

fn main() -> ExitCode {
    match certainty_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            certainty_cli::print_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
