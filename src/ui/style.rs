use crossterm::style::{Color, Stylize};
use std::io::IsTerminal;

/// Foreground used for prompt labels by default
pub const DEFAULT_FOREGROUND: Color = Color::Cyan;

/// Foreground marking the second half of a dual-input pair
pub const PENDING_FOREGROUND: Color = Color::Green;

/// How prompt labels are painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptStyle {
    pub foreground: Color,
    pub enabled: bool,
}

impl Default for PromptStyle {
    fn default() -> Self {
        Self {
            foreground: DEFAULT_FOREGROUND,
            enabled: true,
        }
    }
}

impl PromptStyle {
    /// Default style, with colors only when stdout is a terminal and
    /// `NO_COLOR` is unset.
    pub fn detect() -> Self {
        let enabled = std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal();
        Self {
            enabled,
            ..Self::default()
        }
    }

    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn with_foreground(self, foreground: Color) -> Self {
        Self { foreground, ..self }
    }

    pub fn paint(&self, text: &str) -> String {
        if !self.enabled || text.is_empty() {
            return text.to_string();
        }
        format!("{}", text.with(self.foreground))
    }
}

/// The pair of labels shown while reading a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptLabels {
    ps1: String,
    ps2: String,
    style: PromptStyle,
}

impl PromptLabels {
    /// An empty `ps2` follows `ps1`.
    pub fn new(ps1: impl Into<String>, ps2: impl Into<String>, style: PromptStyle) -> Self {
        let ps1 = ps1.into();
        let mut ps2 = ps2.into();
        if ps2.is_empty() && !ps1.is_empty() {
            ps2 = ps1.clone();
        }
        Self { ps1, ps2, style }
    }

    pub fn style(&self) -> PromptStyle {
        self.style
    }

    pub fn with_style(&self, style: PromptStyle) -> Self {
        Self {
            style,
            ..self.clone()
        }
    }

    pub fn primary(&self) -> String {
        self.style.paint(&self.ps1)
    }

    pub fn continuation(&self) -> String {
        self.style.paint(&self.ps2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_style_leaves_text_alone() {
        assert_eq!(PromptStyle::plain().paint(">>> "), ">>> ");
    }

    #[test]
    fn test_enabled_style_emits_escape_codes() {
        let painted = PromptStyle::default().paint(">>> ");
        assert!(painted.contains("\x1b["));
        assert!(painted.contains(">>> "));
    }

    #[test]
    fn test_empty_ps2_follows_ps1() {
        let labels = PromptLabels::new("> ", "", PromptStyle::plain());
        assert_eq!(labels.continuation(), "> ");
    }

    #[test]
    fn test_with_style_keeps_text() {
        let labels = PromptLabels::new(">>> ", "... ", PromptStyle::plain());
        let pending = labels.with_style(PromptStyle::plain().with_foreground(PENDING_FOREGROUND));
        assert_eq!(pending.primary(), ">>> ");
        assert_eq!(pending.style().foreground, PENDING_FOREGROUND);
    }
}
