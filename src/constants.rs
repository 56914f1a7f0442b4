//! Application constants for the countup TUI.
//!
//! The `AMOUNT_*` values are the fixed configuration that
//! [`AmountDisplay`](crate::widgets::AmountDisplay) forwards to the count-up
//! primitive. The config file starts from the same values.

use std::time::Duration;

// ============================================================================
// Amount Display Configuration
// ============================================================================

/// Duration of one count-up run.
pub const AMOUNT_DURATION: Duration = Duration::from_millis(1500);

/// Digits after the decimal mark.
pub const AMOUNT_DECIMALS: u8 = 2;

/// Decimal mark.
pub const AMOUNT_DECIMAL: &str = ".";

/// Currency glyph rendered before the number.
pub const AMOUNT_PREFIX: &str = "₹";

// ============================================================================
// Application
// ============================================================================

/// Name used for the config and data directories.
pub const APP_NAME: &str = "countup";

/// Interval between redraws (~60 FPS).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(2);

/// Maximum number of characters accepted in the amount input.
pub const MAX_INPUT_LEN: usize = 24;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_constants() {
        assert_eq!(AMOUNT_DURATION.as_secs_f64(), 1.5);
        assert_eq!(AMOUNT_DECIMALS, 2);
        assert_eq!(AMOUNT_DECIMAL, ".");
        assert_eq!(AMOUNT_PREFIX, "₹");
    }
}
