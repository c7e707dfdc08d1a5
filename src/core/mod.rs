pub mod app;
pub mod clock;
pub mod countdown;
pub mod interrupt;
pub mod session;
pub mod sound;
pub mod urgency;
pub mod worklog;
