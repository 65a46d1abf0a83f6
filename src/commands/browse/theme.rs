use ratatui::style::{Color, Modifier, Style};

/// Color scheme for the browser chrome.
pub struct BrowseColors;

impl BrowseColors {
    pub const HEADER: Color = Color::White;
    pub const ACCENT: Color = Color::Blue;
    pub const DIMMED: Color = Color::DarkGray;
    pub const BORDER: Color = Color::Gray;
    pub const FOCUS: Color = Color::Cyan;
    pub const TAG: Color = Color::Cyan;
    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const SELECTED_BG: Color = Color::Rgb(40, 44, 52);
}

/// Theme provides pre-built styles
pub struct Theme;

impl Theme {
    pub fn header() -> Style {
        Style::default()
            .fg(BrowseColors::HEADER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent() -> Style {
        Style::default()
            .fg(BrowseColors::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(BrowseColors::DIMMED)
    }

    pub fn border(focused: bool) -> Style {
        let color = if focused {
            BrowseColors::FOCUS
        } else {
            BrowseColors::BORDER
        };
        Style::default().fg(color)
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(BrowseColors::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    pub fn tag() -> Style {
        Style::default().fg(BrowseColors::TAG)
    }

    pub fn success() -> Style {
        Style::default().fg(BrowseColors::SUCCESS)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(BrowseColors::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    pub fn warning() -> Style {
        Style::default().fg(BrowseColors::WARNING)
    }

    /// Foreground-only style from a lookup color.
    pub fn fg(color: Color) -> Style {
        Style::default().fg(color)
    }
}
