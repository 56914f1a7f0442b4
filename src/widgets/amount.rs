//! Animated amount display widget.
//!
//! Renders a currency amount that counts up to its value:
//!
//! ```text
//! ₹0.00 → ₹811.27 → ₹1203.96 → ₹1234.50
//! ```
//!
//! [`AmountDisplay`] only forwards a fixed configuration to a
//! [`CountPrimitive`] held in [`CounterState`] and hosts the text it produces
//! in a full-width row. Timing is owned by the primitive.

use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Paragraph, StatefulWidget, Widget},
};

use crate::constants::{AMOUNT_DECIMAL, AMOUNT_DECIMALS, AMOUNT_DURATION, AMOUNT_PREFIX};
use crate::counter::{
    CountPrimitive, CountUp, CountUpError, CountUpOptions, Easing, FormatOptions, SmartEasing,
};
use crate::theme::{AMOUNT_RUNNING_STYLE, AMOUNT_SETTLED_STYLE};

// ============================================================================
// AmountDisplay Widget
// ============================================================================

/// Animated currency amount.
///
/// # Usage
///
/// ```ignore
/// let mut state = CounterState::default();
/// state.tick(Instant::now());
/// frame.render_stateful_widget(AmountDisplay::new(1234.5), area, &mut state);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AmountDisplay {
    amount: f64,
    options: CountUpOptions,
    running_style: Style,
    settled_style: Style,
}

impl AmountDisplay {
    /// Create a display for `amount` with the standard currency configuration.
    #[must_use]
    pub fn new(amount: f64) -> Self {
        Self {
            amount,
            options: Self::default_options(),
            running_style: AMOUNT_RUNNING_STYLE,
            settled_style: AMOUNT_SETTLED_STYLE,
        }
    }

    /// The configuration every display forwards unless overridden.
    ///
    /// 1.5 s run, `.` decimal mark, `₹` prefix, two decimal places.
    #[must_use]
    pub fn default_options() -> CountUpOptions {
        CountUpOptions {
            start: 0.0,
            duration: AMOUNT_DURATION,
            easing: Easing::OutExpo,
            smart_easing: Some(SmartEasing::default()),
            format: FormatOptions::default()
                .with_decimals(AMOUNT_DECIMALS)
                .with_decimal(AMOUNT_DECIMAL)
                .with_prefix(AMOUNT_PREFIX),
        }
    }

    /// Override the forwarded configuration.
    #[must_use]
    pub fn with_options(mut self, options: CountUpOptions) -> Self {
        self.options = options;
        self
    }

    /// Use a single style whether running or settled.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.running_style = style;
        self.settled_style = style;
        self
    }

    /// The amount being displayed.
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// The configuration forwarded to the primitive.
    #[must_use]
    pub fn count_up_options(&self) -> &CountUpOptions {
        &self.options
    }

    /// Render against any [`CountPrimitive`].
    ///
    /// The display is forwarded to the primitive even when `area` is empty so
    /// the animation clock starts with the first frame.
    pub fn render_counter<P: CountPrimitive>(
        self,
        area: Rect,
        buf: &mut Buffer,
        state: &mut CounterState<P>,
    ) {
        state.sync(&self);

        if area.is_empty() {
            return;
        }

        let now = state.now;
        let style = if state.primitive.is_settled(now) {
            self.settled_style
        } else {
            self.running_style
        };
        let container = Rect {
            height: 1,
            ..area
        };
        Paragraph::new(Line::from(state.primitive.text_at(now)))
            .style(style)
            .render(container, buf);
    }
}

impl StatefulWidget for AmountDisplay {
    type State = CounterState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        self.render_counter(area, buf, state);
    }
}

// ============================================================================
// CounterState
// ============================================================================

/// Animation state hosted across renders of an [`AmountDisplay`].
#[derive(Debug, Clone)]
pub struct CounterState<P = CountUp> {
    primitive: P,
    now: Instant,
    forwarded: Option<(u64, CountUpOptions)>,
    last_error: Option<CountUpError>,
}

impl Default for CounterState<CountUp> {
    fn default() -> Self {
        Self::new(CountUp::default(), Instant::now())
    }
}

impl<P: CountPrimitive> CounterState<P> {
    /// Wrap a primitive, using `now` as the first frame instant.
    #[must_use]
    pub fn new(primitive: P, now: Instant) -> Self {
        Self {
            primitive,
            now,
            forwarded: None,
            last_error: None,
        }
    }

    /// Set the frame instant used by the next render.
    pub fn tick(&mut self, now: Instant) {
        self.now = now;
    }

    /// Frame instant of the next render.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.now
    }

    /// The hosted primitive.
    #[must_use]
    pub fn primitive(&self) -> &P {
        &self.primitive
    }

    /// Mutable access to the hosted primitive, e.g. to replay a run.
    pub fn primitive_mut(&mut self) -> &mut P {
        &mut self.primitive
    }

    /// Error from the last rejected amount, cleared by the next accepted one.
    #[must_use]
    pub fn last_error(&self) -> Option<&CountUpError> {
        self.last_error.as_ref()
    }

    /// Whether the current amount is fully displayed.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.primitive.is_settled(self.now)
    }

    /// Forward the display's configuration when it differs from the last one.
    ///
    /// Amounts are compared bitwise so a repeated `NaN` is only reported once.
    fn sync(&mut self, widget: &AmountDisplay) {
        let amount = widget.amount;
        let key = amount.to_bits();
        if self
            .forwarded
            .as_ref()
            .is_some_and(|(forwarded, options)| *forwarded == key && *options == widget.options)
        {
            return;
        }

        self.forwarded = Some((key, widget.options.clone()));
        match self.primitive.retarget(&widget.options, amount, self.now) {
            Ok(()) => self.last_error = None,
            Err(err) => {
                tracing::warn!("amount {amount} rejected: {err}");
                self.last_error = Some(err);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
