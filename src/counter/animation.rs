//! The count-up animation primitive.
//!
//! [`CountUp`] owns all timing state for one animated number. It is driven by
//! explicit [`Instant`]s rather than reading the clock itself, so a frame is a
//! pure function of the options, the target, the instant the run started and
//! the instant being drawn.
//!
//! # Smart easing
//!
//! Easing a long distance over a short duration makes the number blur past
//! most of its range. With [`SmartEasing`] enabled and a distance above the
//! threshold, a run is split in two halves of the duration:
//!
//! ```text
//! start ──linear──▶ end - amount ──eased──▶ end
//! ```

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::easing::Easing;
use super::error::{CountUpResult, ensure_finite};
use super::format::{FormatOptions, format_number};

// ============================================================================
// Options
// ============================================================================

/// Thresholds for [smart easing](self#smart-easing).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmartEasing {
    /// Distances larger than this are split into a linear and an eased part.
    pub threshold: f64,
    /// Distance covered by the eased part.
    pub amount: f64,
}

impl Default for SmartEasing {
    fn default() -> Self {
        Self {
            threshold: 999.0,
            amount: 333.0,
        }
    }
}

/// Configuration of a count-up animation.
#[derive(Debug, Clone, PartialEq)]
pub struct CountUpOptions {
    /// Value shown before the first run and where runs start from.
    pub start: f64,
    /// Total duration of one run.
    pub duration: Duration,
    /// Curve used for the (final) segment of a run.
    pub easing: Easing,
    /// Split long runs, `None` to always ease the full distance.
    pub smart_easing: Option<SmartEasing>,
    /// How values are rendered.
    pub format: FormatOptions,
}

impl Default for CountUpOptions {
    fn default() -> Self {
        Self {
            start: 0.0,
            duration: Duration::from_secs(2),
            easing: Easing::default(),
            smart_easing: Some(SmartEasing::default()),
            format: FormatOptions::default(),
        }
    }
}

// ============================================================================
// Segment
// ============================================================================

/// One interpolated move from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Segment {
    from: f64,
    to: f64,
    started: Instant,
    duration: Duration,
    easing: Easing,
}

impl Segment {
    fn ends_at(&self) -> Instant {
        self.started + self.duration
    }

    fn value_at(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= self.duration {
            return self.to;
        }

        let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let raw = self.easing.ease(progress, self.from, self.to - self.from);
        // The eased curve must never overshoot the segment end.
        if self.to < self.from {
            raw.max(self.to)
        } else {
            raw.min(self.to)
        }
    }
}

/// A full run towards a target, made of one or two segments.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Run {
    target: f64,
    first: Segment,
    second: Option<Segment>,
}

impl Run {
    fn plan(from: f64, target: f64, now: Instant, options: &CountUpOptions) -> Self {
        let distance = target - from;
        let split = options
            .smart_easing
            .filter(|smart| options.easing != Easing::Linear && distance.abs() > smart.threshold);

        match split {
            Some(smart) => {
                let half = options.duration / 2;
                let midpoint = target - distance.signum() * smart.amount;
                let first = Segment {
                    from,
                    to: midpoint,
                    started: now,
                    duration: half,
                    easing: Easing::Linear,
                };
                let second = Segment {
                    from: midpoint,
                    to: target,
                    started: first.ends_at(),
                    duration: options.duration - half,
                    easing: options.easing,
                };
                Self {
                    target,
                    first,
                    second: Some(second),
                }
            }
            None => Self {
                target,
                first: Segment {
                    from,
                    to: target,
                    started: now,
                    duration: options.duration,
                    easing: options.easing,
                },
                second: None,
            },
        }
    }

    /// A run that is already at its target.
    fn settled(target: f64, now: Instant) -> Self {
        Self {
            target,
            first: Segment {
                from: target,
                to: target,
                started: now,
                duration: Duration::ZERO,
                easing: Easing::Linear,
            },
            second: None,
        }
    }

    fn ends_at(&self) -> Instant {
        self.second.as_ref().unwrap_or(&self.first).ends_at()
    }

    fn value_at(&self, now: Instant) -> f64 {
        match &self.second {
            Some(second) if now >= second.started => second.value_at(now),
            _ => self.first.value_at(now),
        }
    }
}

// ============================================================================
// Phase
// ============================================================================

/// Observable state of a [`CountUp`] at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No target yet; the start value is shown.
    Idle,
    /// Interpolating towards the target.
    Running,
    /// The target is displayed.
    Settled,
}

// ============================================================================
// CountPrimitive
// ============================================================================

/// Narrow interface between a host component and its animation primitive.
///
/// The host forwards a target plus configuration; the primitive owns timing
/// and produces the text for any frame instant.
pub trait CountPrimitive {
    /// Animate towards `target` using `options`.
    ///
    /// # Errors
    ///
    /// Returns an error when `target` or the start value is not finite. The
    /// current animation is left untouched in that case.
    fn retarget(&mut self, options: &CountUpOptions, target: f64, now: Instant)
    -> CountUpResult<()>;

    /// Target of the current run, if one was started.
    fn target(&self) -> Option<f64>;

    /// Numeric value on screen at `now`.
    fn value_at(&self, now: Instant) -> f64;

    /// Formatted text to display at `now`.
    fn text_at(&self, now: Instant) -> String;

    /// Whether the final value is on screen at `now`.
    fn is_settled(&self, now: Instant) -> bool;
}

// ============================================================================
// CountUp
// ============================================================================

/// Animated counter state.
///
/// # Example
///
/// ```
/// use std::time::{Duration, Instant};
/// use countup::counter::{CountUp, CountUpOptions, FormatOptions};
///
/// let options = CountUpOptions {
///     duration: Duration::from_millis(1500),
///     format: FormatOptions::default().with_decimals(2).with_prefix("₹"),
///     ..CountUpOptions::default()
/// };
/// let now = Instant::now();
/// let mut counter = CountUp::new(options).unwrap();
/// counter.start(1234.5, now).unwrap();
///
/// assert_eq!(counter.text_at(now + Duration::from_secs(2)), "₹1234.50");
/// ```
#[derive(Debug, Clone)]
pub struct CountUp {
    options: CountUpOptions,
    run: Option<Run>,
}

impl Default for CountUp {
    fn default() -> Self {
        Self {
            options: CountUpOptions::default(),
            run: None,
        }
    }
}

impl CountUp {
    /// Create an idle counter showing `options.start`.
    ///
    /// # Errors
    ///
    /// Returns an error when the start value is not finite.
    pub fn new(options: CountUpOptions) -> CountUpResult<Self> {
        ensure_finite("start", options.start)?;
        Ok(Self { options, run: None })
    }

    /// The active configuration.
    #[must_use]
    pub fn options(&self) -> &CountUpOptions {
        &self.options
    }

    /// Replace the configuration. A run in flight keeps its timing; the new
    /// formatting applies from the next frame.
    ///
    /// # Errors
    ///
    /// Returns an error when the new start value is not finite.
    pub fn set_options(&mut self, options: CountUpOptions) -> CountUpResult<()> {
        ensure_finite("start", options.start)?;
        self.options = options;
        Ok(())
    }

    /// Start a fresh run from the configured start value to `target`.
    ///
    /// # Errors
    ///
    /// Returns an error when `target` is not finite.
    pub fn start(&mut self, target: f64, now: Instant) -> CountUpResult<()> {
        let target = ensure_finite("end", target)?;
        self.run = Some(Run::plan(self.options.start, target, now, &self.options));
        tracing::debug!("count-up started: {} -> {target}", self.options.start);
        Ok(())
    }

    /// Move to a new target from whatever is on screen at `now`.
    ///
    /// An idle counter starts from the configured start value. A target equal
    /// to the displayed value settles immediately.
    ///
    /// # Errors
    ///
    /// Returns an error when `target` is not finite.
    pub fn update(&mut self, target: f64, now: Instant) -> CountUpResult<()> {
        let target = ensure_finite("end", target)?;
        let from = self.value_at(now);
        self.run = Some(if from == target {
            Run::settled(target, now)
        } else {
            Run::plan(from, target, now, &self.options)
        });
        tracing::debug!("count-up retargeted: {from} -> {target}");
        Ok(())
    }

    /// Replay the current run from the start value.
    ///
    /// Does nothing on an idle counter.
    pub fn restart(&mut self, now: Instant) {
        if let Some(run) = self.run {
            self.run = Some(Run::plan(self.options.start, run.target, now, &self.options));
        }
    }

    /// Drop the current run and show the start value again.
    pub fn reset(&mut self) {
        self.run = None;
    }

    /// Phase of the animation at `now`.
    #[must_use]
    pub fn phase(&self, now: Instant) -> Phase {
        match &self.run {
            None => Phase::Idle,
            Some(run) if now >= run.ends_at() => Phase::Settled,
            Some(_) => Phase::Running,
        }
    }

    /// Displayed numeric value at `now`, rounded to the configured decimals.
    #[must_use]
    pub fn value_at(&self, now: Instant) -> f64 {
        let raw = self
            .run
            .as_ref()
            .map_or(self.options.start, |run| run.value_at(now));
        self.options.format.round(raw)
    }

    /// Displayed text at `now`.
    #[must_use]
    pub fn text_at(&self, now: Instant) -> String {
        format_number(self.value_at(now), &self.options.format)
    }

    /// Formatted final value of the current run, or of the start value.
    #[must_use]
    pub fn final_text(&self) -> String {
        let value = self.run.map_or(self.options.start, |run| run.target);
        format_number(value, &self.options.format)
    }
}

impl CountPrimitive for CountUp {
    fn retarget(
        &mut self,
        options: &CountUpOptions,
        target: f64,
        now: Instant,
    ) -> CountUpResult<()> {
        ensure_finite("end", target)?;
        if self.options != *options {
            self.set_options(options.clone())?;
        }
        if self.run.is_none() {
            self.start(target, now)
        } else {
            self.update(target, now)
        }
    }

    fn target(&self) -> Option<f64> {
        self.run.map(|run| run.target)
    }

    fn value_at(&self, now: Instant) -> f64 {
        CountUp::value_at(self, now)
    }

    fn text_at(&self, now: Instant) -> String {
        CountUp::text_at(self, now)
    }

    fn is_settled(&self, now: Instant) -> bool {
        self.phase(now) != Phase::Running
    }
}

// ============================================================================
// Tests
// ============================================================================
