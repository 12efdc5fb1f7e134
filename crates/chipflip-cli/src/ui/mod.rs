pub use self::terminal_view::*;

mod terminal_view;

pub mod style {
    use crossterm::style::{ContentStyle, Stylize as _};

    pub fn chip(state: bool) -> ContentStyle {
        let style = ContentStyle::new().bold();
        if state { style.blue() } else { style.red() }
    }

    pub fn sticky_chip(state: bool) -> ContentStyle {
        chip(state).on_white()
    }

    pub fn transition() -> ContentStyle {
        ContentStyle::new().green().bold()
    }

    pub fn invalid() -> ContentStyle {
        ContentStyle::new().on_red()
    }
}
