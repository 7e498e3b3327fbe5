//! Responsive layout engine for the TUI.
//!
//! Adapts the layout based on terminal dimensions so the dashboard stays
//! usable from minimal (40x10) to full-screen.

use ratatui::layout::Constraint;

// Width breakpoints
const WIDTH_NO_SIDEBAR: u16 = 60; // Below this: hide the sidebar, panels take the full width
const WIDTH_NARROW: u16 = 100; // Below this: use a slimmer sidebar

// Height breakpoints
const HEIGHT_MINIMAL: u16 = 16; // Below this: no header or status bar

const SIDEBAR_WIDTH: u16 = 34;
const SIDEBAR_WIDTH_NARROW: u16 = 26;

/// Terminal size classification for layout decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalSize {
    /// Height < 16: panels only
    Minimal,
    /// Height >= 16: header, panels and status bar
    Normal,
}

/// Computed layout configuration based on terminal dimensions.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    pub size: TerminalSize,

    /// Whether to show the sidebar (checkboxes, selector, dataset summary)
    pub show_sidebar: bool,

    /// Whether to show the title header and the key-hint status bar
    pub show_chrome: bool,

    /// Sidebar width in columns
    pub sidebar_width: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            size: TerminalSize::Normal,
            show_sidebar: true,
            show_chrome: true,
            sidebar_width: SIDEBAR_WIDTH,
        }
    }
}

impl LayoutConfig {
    /// Column constraints for the sidebar | panels split.
    pub fn col_constraints(&self) -> [Constraint; 2] {
        if self.show_sidebar {
            [Constraint::Length(self.sidebar_width), Constraint::Min(0)]
        } else {
            [Constraint::Length(0), Constraint::Min(0)]
        }
    }
}

/// Compute layout configuration based on terminal dimensions.
///
/// # Breakpoints
///
/// | Terminal Size | Behavior |
/// |---------------|----------|
/// | Width < 60    | Sidebar hidden, keyboard toggles still work |
/// | Width 60-100  | Sidebar 26 columns |
/// | Width > 100   | Sidebar 34 columns |
/// | Height < 16   | Minimal: no header or status bar |
pub fn compute_layout(width: u16, height: u16) -> LayoutConfig {
    let mut config = LayoutConfig::default();

    if width < WIDTH_NO_SIDEBAR {
        config.show_sidebar = false;
    } else if width <= WIDTH_NARROW {
        config.sidebar_width = SIDEBAR_WIDTH_NARROW;
    }

    if height < HEIGHT_MINIMAL {
        config.size = TerminalSize::Minimal;
        config.show_chrome = false;
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_layout() {
        let config = compute_layout(120, 40);
        assert_eq!(config.size, TerminalSize::Normal);
        assert!(config.show_sidebar);
        assert!(config.show_chrome);
        assert_eq!(config.sidebar_width, 34);
    }

    #[test]
    fn test_narrow_layout() {
        let config = compute_layout(80, 40);
        assert!(config.show_sidebar);
        assert_eq!(config.sidebar_width, 26);
        assert_eq!(config.col_constraints()[0], Constraint::Length(26));
    }

    #[test]
    fn test_sidebar_hidden_when_very_narrow() {
        let config = compute_layout(50, 40);
        assert!(!config.show_sidebar);
        assert_eq!(config.col_constraints()[0], Constraint::Length(0));
    }

    #[test]
    fn test_minimal_height() {
        let config = compute_layout(120, 12);
        assert_eq!(config.size, TerminalSize::Minimal);
        assert!(!config.show_chrome);
        assert!(config.show_sidebar);
    }
}
