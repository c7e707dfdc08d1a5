//! How alarming the clock face should look.

/// Colour tier of the clock face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Urgency {
    /// more than a minute left (green)
    Normal,
    /// 16..=60 seconds (yellow)
    Warning,
    /// 15 seconds or less (red)
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub urgency: Urgency,
    pub blink: bool,
}

/// Seconds above which the face is calm.
pub const WARNING_AT: u64 = 60;
/// Seconds at or below which the face turns critical.
pub const CRITICAL_AT: u64 = 15;
/// Below this many seconds the face blinks.
pub const BLINK_BELOW: u64 = 5;

pub fn urgency_for(remaining: u64) -> Urgency {
    if remaining > WARNING_AT {
        Urgency::Normal
    } else if remaining > CRITICAL_AT {
        Urgency::Warning
    } else {
        Urgency::Critical
    }
}

pub fn style_for(remaining: u64) -> Style {
    Style {
        urgency: urgency_for(remaining),
        blink: remaining < BLINK_BELOW,
    }
}
