//! pompom main entrypoint.

use pompom::errors::AppError;
use pompom::run;
use pompom::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        // the start command already reported the interruption
        if !matches!(e, AppError::Interrupted) {
            error(format!("Error: {}", e));
        }
        std::process::exit(e.exit_code());
    }
}
