use std::process;

use flowcli::cli::run_cli;
use flowcli::utils::logger::Logger;

fn main() {
    if let Err(e) = run_cli() {
        Logger::error(format!("{:#}", e));
        process::exit(1);
    }
}
