pub mod logging;
pub mod path;
pub mod time;
