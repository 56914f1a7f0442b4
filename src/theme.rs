//! Theme and styling constants for the countup TUI.
//!
//! Tokyo Night-inspired colors and consistent styling.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Color Constants
// ============================================================================

/// Primary accent color - focused elements and highlights.
pub const PRIMARY_COLOR: Color = Color::Cyan;

/// Success indicator color.
pub const SUCCESS_COLOR: Color = Color::Green;

/// Warning indicator color.
pub const WARNING_COLOR: Color = Color::Yellow;

/// Error indicator color.
pub const ERROR_COLOR: Color = Color::Red;

/// Muted text color.
pub const MUTED_COLOR: Color = Color::Gray;

// ============================================================================
// Style Constants
// ============================================================================

/// Default border style.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Border style for the active input.
pub const FOCUSED_BORDER_STYLE: Style = Style::new().fg(PRIMARY_COLOR);

/// Title style for panels.
pub const TITLE_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);

/// Style of the animated amount while counting.
pub const AMOUNT_RUNNING_STYLE: Style = Style::new().fg(WARNING_COLOR).add_modifier(Modifier::BOLD);

/// Style of the animated amount once settled.
pub const AMOUNT_SETTLED_STYLE: Style = Style::new().fg(SUCCESS_COLOR).add_modifier(Modifier::BOLD);

/// Style for keybinding hints.
pub const KEY_HINT_STYLE: Style = Style::new().fg(PRIMARY_COLOR);

/// Style for muted descriptions.
pub const MUTED_STYLE: Style = Style::new().fg(MUTED_COLOR);
