//! Time utilities: the MM:SS clock face and duration parsing for the CLI/config.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::sync::OnceLock;

/// Format a number of seconds as a zero-padded `MM:SS` clock face.
///
/// Minutes never roll over into hours: 3600 is `60:00`, 6000 is `100:00`.
pub fn format_clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

fn unit_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:(?P<h>\d+)h)?(?:(?P<m>\d+)m)?(?:(?P<s>\d+)s)?$")
            .expect("static duration regex")
    })
}

/// Parse a duration into seconds.
///
/// Accepted forms:
/// - `1500` (plain seconds)
/// - `25m`, `90s`, `1h30m`, `1m30s`
/// - `25:00` (MM:SS)
pub fn parse_duration(input: &str) -> AppResult<u64> {
    let raw = input.trim();
    let invalid = || AppError::InvalidDuration(input.to_string());

    if raw.is_empty() {
        return Err(invalid());
    }

    if raw.chars().all(|c| c.is_ascii_digit()) {
        return raw.parse::<u64>().map_err(|_| invalid());
    }

    if let Some((mm, ss)) = raw.split_once(':') {
        let digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
        if !digits(mm) || !digits(ss) {
            return Err(invalid());
        }
        let minutes = mm.parse::<u64>().map_err(|_| invalid())?;
        let seconds = ss.parse::<u64>().map_err(|_| invalid())?;
        if ss.len() != 2 || seconds >= 60 {
            return Err(invalid());
        }
        return minutes
            .checked_mul(60)
            .and_then(|m| m.checked_add(seconds))
            .ok_or_else(invalid);
    }

    let caps = unit_pattern().captures(raw).ok_or_else(invalid)?;
    let part = |name: &str, factor: u64| -> AppResult<u64> {
        match caps.name(name) {
            Some(m) => m
                .as_str()
                .parse::<u64>()
                .ok()
                .and_then(|v| v.checked_mul(factor))
                .ok_or_else(invalid),
            None => Ok(0),
        }
    };

    let (h, m, s) = (part("h", 3600)?, part("m", 60)?, part("s", 1)?);

    h.checked_add(m)
        .and_then(|v| v.checked_add(s))
        .ok_or_else(invalid)
}
