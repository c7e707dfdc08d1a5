pub mod glyphs;
pub mod messages;
pub mod renderer;
pub mod screen;
pub mod terminal;
