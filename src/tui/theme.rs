use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub muted: Color,
    pub foreground: Color,
    pub highlight: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Blue,
            muted: Color::DarkGray,
            foreground: Color::White,
            highlight: Color::DarkGray,
        }
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            primary: Color::Rgb(100, 200, 255),
            accent: Color::Rgb(255, 200, 100),
            success: Color::Rgb(100, 255, 100),
            warning: Color::Rgb(255, 200, 100),
            error: Color::Rgb(255, 100, 100),
            info: Color::Rgb(150, 200, 255),
            muted: Color::Rgb(90, 90, 110),
            foreground: Color::Rgb(220, 220, 230),
            highlight: Color::Rgb(60, 60, 80),
        }
    }

    /// Unknown names fall back to the default palette.
    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            _ => Self::default(),
        }
    }
}
