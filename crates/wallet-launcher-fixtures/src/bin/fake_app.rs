//! Fixture: stands in for the wallet application started by the launcher.
//!
//! Prints one JSON line describing what it received and exits with the code
//! in `FAKE_APP_EXIT_CODE` (default 0).

// Test fixtures require special allowances - they are not production code
#![allow(clippy::print_stdout)]

use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let report = serde_json::json!({
        "args": args,
        "working_path": std::env::var("WALLET_WORKING_PATH").ok(),
        "opened_url": std::env::var("WALLET_OPENED_URL").ok(),
    });
    println!("{report}");

    let code = std::env::var("FAKE_APP_EXIT_CODE")
        .ok()
        .and_then(|value| value.parse::<u8>().ok())
        .unwrap_or(0);
    ExitCode::from(code)
}
