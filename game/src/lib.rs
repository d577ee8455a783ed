pub mod board_ui;
pub mod dots_core;
pub mod palette;
pub mod playtest;
pub mod session;
pub mod settings;
pub mod sfx;
pub mod transitions;
