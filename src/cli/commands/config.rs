use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use std::process::Command;

/// `--editor`, then `$EDITOR`, then `$VISUAL`, then the platform default.
fn editor_for(explicit: Option<&str>) -> String {
    explicit
        .map(str::to_owned)
        .or_else(|| std::env::var("EDITOR").ok())
        .or_else(|| std::env::var("VISUAL").ok())
        .unwrap_or_else(|| {
            let fallback = if cfg!(target_os = "windows") {
                "notepad"
            } else {
                "nano"
            };
            fallback.to_string()
        })
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    else {
        return Ok(());
    };

    let path = Config::config_file();

    if *print_config {
        let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
        println!("📄 {}\n", path.display());
        println!("{}", yaml);
    }

    if *edit_config {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "{} does not exist, run `pompom init` first",
                path.display()
            )));
        }

        let editor = editor_for(editor.as_deref());
        let status = Command::new(&editor)
            .arg(&path)
            .status()
            .map_err(|e| AppError::Other(format!("cannot start editor '{}': {}", editor, e)))?;
        if !status.success() {
            return Err(AppError::Other(format!("editor '{}' exited with {}", editor, status)));
        }
        success(format!("Configuration saved ({})", editor));
    }

    if !*print_config && !*edit_config {
        info(format!("Configuration file: {}", path.display()));
    }

    Ok(())
}
