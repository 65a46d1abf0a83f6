//! Display lookups for the closed tag sets.
//!
//! Each tag maps to one [`Swatch`] carrying the colors for both front-ends:
//! `ratatui` for the TUI and `colored` for plain terminal output.

use colored::Color as TermColor;
use ratatui::style::Color;

use crate::models::category::label_for;
use crate::models::{Category, Difficulty, ItemType, Language};

/// Label, colors and glyph for one tag value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swatch {
    pub label: &'static str,
    pub tui: Color,
    pub term: TermColor,
    pub icon: &'static str,
}

const fn swatch(label: &'static str, tui: Color, term: TermColor, icon: &'static str) -> Swatch {
    Swatch {
        label,
        tui,
        term,
        icon,
    }
}

const BEGINNER: Swatch = swatch("Beginner", Color::Green, TermColor::Green, "●");
const INTERMEDIATE: Swatch = swatch("Intermediate", Color::Yellow, TermColor::Yellow, "●●");
const ADVANCED: Swatch = swatch("Advanced", Color::Red, TermColor::Red, "●●●");

pub fn difficulty(value: Difficulty) -> Swatch {
    match value {
        Difficulty::Beginner => BEGINNER,
        Difficulty::Intermediate => INTERMEDIATE,
        Difficulty::Advanced => ADVANCED,
    }
}

pub fn language(value: Option<Language>) -> Swatch {
    match value {
        Some(Language::Python) => swatch("Python", Color::Blue, TermColor::Blue, "py"),
        Some(Language::Javascript) => {
            swatch("JavaScript", Color::Yellow, TermColor::Yellow, "js")
        }
        Some(Language::Bash) => swatch("Bash", Color::Green, TermColor::Green, "sh"),
        Some(Language::Dockerfile) => swatch("Dockerfile", Color::Cyan, TermColor::Cyan, "dk"),
        Some(Language::Yaml) => swatch("YAML", Color::Magenta, TermColor::Magenta, "yml"),
        Some(Language::Nginx) => swatch("Nginx", Color::LightGreen, TermColor::BrightGreen, "ngx"),
        Some(Language::Both) => swatch("Python + JS", Color::LightMagenta, TermColor::BrightMagenta, "py+js"),
        None => swatch("General", Color::Gray, TermColor::White, "*"),
    }
}

pub fn item_type(value: ItemType) -> Swatch {
    match value {
        ItemType::Concept => swatch("Concept", Color::LightBlue, TermColor::BrightBlue, "◆"),
        ItemType::Snippet => swatch("Snippet", Color::Cyan, TermColor::Cyan, "</>"),
        ItemType::Algorithm => swatch("Algorithm", Color::Magenta, TermColor::Magenta, "λ"),
        ItemType::Pattern => swatch("Pattern", Color::LightYellow, TermColor::BrightYellow, "#"),
        ItemType::Guide => swatch("Guide", Color::Green, TermColor::Green, "»"),
        ItemType::Comparison => swatch("Comparison", Color::LightRed, TermColor::BrightRed, "⇄"),
        ItemType::Command => swatch("Command", Color::Gray, TermColor::White, "$"),
    }
}

pub fn category(value: Category) -> Swatch {
    let (tui, term, icon) = match value {
        Category::Setup => (Color::Green, TermColor::Green, "⚙"),
        Category::Packages => (Color::Yellow, TermColor::Yellow, "▣"),
        Category::Dsa => (Color::Magenta, TermColor::Magenta, "∑"),
        Category::Oop => (Color::Blue, TermColor::Blue, "◇"),
        Category::Frameworks => (Color::Cyan, TermColor::Cyan, "▤"),
        Category::Database => (Color::LightBlue, TermColor::BrightBlue, "⛁"),
        Category::Realtime => (Color::LightYellow, TermColor::BrightYellow, "⚡"),
        Category::Async => (Color::LightCyan, TermColor::BrightCyan, "↻"),
        Category::DataHandling => (Color::LightGreen, TermColor::BrightGreen, "▦"),
        Category::Templates => (Color::LightMagenta, TermColor::BrightMagenta, "✎"),
        Category::Production => (Color::Red, TermColor::Red, "▲"),
        Category::Docker => (Color::Cyan, TermColor::Cyan, "◫"),
        Category::Aws => (Color::Yellow, TermColor::Yellow, "☁"),
        Category::Ai => (Color::LightRed, TermColor::BrightRed, "✦"),
        Category::Libraries => (Color::Gray, TermColor::White, "▥"),
    };
    swatch(label_for(value), tui, term, icon)
}
