//! The drawing surface the renderer talks to.

use crate::core::urgency::Urgency;
use crate::errors::AppResult;

pub trait Screen {
    /// Usable area as (columns, rows).
    fn size(&self) -> AppResult<(u16, u16)>;

    /// Replace the whole screen with `frame`, coloured for `urgency`.
    /// Lines are separated by `\n`; leading empty lines are vertical padding.
    fn draw(&mut self, frame: &str, urgency: Urgency, blinking: bool) -> AppResult<()>;
}
