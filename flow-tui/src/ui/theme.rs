use ratatui::style::Color;

/// Palette derived from the persisted dark-mode flag. Every view pulls its
/// colors from here so the whole surface flips together.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub highlight: Color,
    pub success: Color,
    pub info: Color,
    pub warning: Color,
    pub error: Color,
    pub border: Color,
    pub border_focused: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            text: Color::White,
            muted: Color::DarkGray,
            accent: Color::Cyan,
            highlight: Color::Yellow,
            success: Color::Green,
            info: Color::Blue,
            warning: Color::Yellow,
            error: Color::Red,
            border: Color::DarkGray,
            border_focused: Color::Yellow,
        }
    }

    pub fn light() -> Self {
        Self {
            text: Color::Black,
            muted: Color::Gray,
            accent: Color::Blue,
            highlight: Color::Magenta,
            success: Color::Green,
            info: Color::Blue,
            warning: Color::Yellow,
            error: Color::Red,
            border: Color::Gray,
            border_focused: Color::Magenta,
        }
    }

    pub fn from_flag(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }
}
