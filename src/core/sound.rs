//! Completion chime. Best effort: if the sound file or the player is missing,
//! or the player fails to start, nothing happens.

use crate::config::Config;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Sound {
    file: PathBuf,
    player: PathBuf,
}

impl Sound {
    pub fn new(file: &str, player: &str) -> Self {
        Self {
            file: expand_tilde(file),
            player: expand_tilde(player),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(&cfg.sound_file, &cfg.sound_player)
    }

    /// Both the sound file and the player executable are present.
    pub fn is_available(&self) -> bool {
        self.file.is_file() && self.player.is_file()
    }

    /// Launch the player in the background and return immediately.
    pub fn play(&self) {
        if !self.is_available() {
            debug!(
                file = %self.file.display(),
                player = %self.player.display(),
                "sound skipped"
            );
            return;
        }

        let spawned = Command::new(&self.player)
            .arg("-q")
            .arg(&self.file)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(child) => debug!(pid = child.id(), "sound started"),
            Err(e) => debug!("sound player failed to start: {}", e),
        }
    }
}
