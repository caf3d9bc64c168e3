use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    match pagecheck_cli::run_cli() {
        Ok(code) => code,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
