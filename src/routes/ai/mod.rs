mod generate_menu;

pub use generate_menu::*;
