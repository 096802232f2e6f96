//! Colors for each UI theme.

use ratatui::style::{Color, Modifier, Style};
use sitekeeper_config::Theme;
use sitekeeper_protocol::{ProjectStatus, Urgency};

/// The colors every widget draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Body text.
    pub text: Color,
    /// Secondary text and hints.
    pub muted: Color,
    /// Titles and borders of focused panels.
    pub accent: Color,
    /// The selected row, card or column.
    pub highlight: Color,
    /// Renewals within the urgency threshold.
    pub urgent: Color,
    /// Renewals further out.
    pub normal: Color,
    /// Completed projects.
    pub completed: Color,
}

impl Palette {
    /// Returns the palette for `theme`.
    ///
    /// `System` keeps the terminal's own foreground for body text.
    #[must_use]
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                text: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                highlight: Color::Yellow,
                urgent: Color::LightRed,
                normal: Color::LightGreen,
                completed: Color::LightBlue,
            },
            Theme::Light => Self {
                text: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                highlight: Color::Magenta,
                urgent: Color::Red,
                normal: Color::Green,
                completed: Color::Blue,
            },
            Theme::System => Self {
                text: Color::Reset,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                highlight: Color::Yellow,
                urgent: Color::Red,
                normal: Color::Green,
                completed: Color::Blue,
            },
        }
    }

    /// Style of body text.
    #[must_use]
    pub fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Style of hints and secondary text.
    #[must_use]
    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style of panel titles.
    #[must_use]
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style of the selected element.
    #[must_use]
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// Color of a renewal countdown.
    #[must_use]
    pub const fn urgency(&self, urgency: Urgency) -> Color {
        match urgency {
            Urgency::Urgent => self.urgent,
            Urgency::Normal => self.normal,
        }
    }

    /// Color of a status badge.
    #[must_use]
    pub const fn status(&self, status: ProjectStatus) -> Color {
        match status {
            ProjectStatus::Active => self.normal,
            ProjectStatus::Completed => self.completed,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::for_theme(Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_theme_keeps_terminal_foreground() {
        assert_eq!(Palette::default().text, Color::Reset);
        assert_eq!(Palette::for_theme(Theme::Light).text, Color::Black);
    }

    #[test]
    fn urgent_and_normal_differ_in_every_theme() {
        for theme in [Theme::Light, Theme::Dark, Theme::System] {
            let palette = Palette::for_theme(theme);
            assert_ne!(
                palette.urgency(Urgency::Urgent),
                palette.urgency(Urgency::Normal)
            );
        }
    }
}
