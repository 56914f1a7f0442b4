//! Count-up animation primitive.
//!
//! Interpolates a displayed number towards a target over a fixed duration and
//! formats every frame. Hosts talk to it through [`CountPrimitive`].
//!
//! # Module Structure
//!
//! - [`animation`]: timing state, smart easing and the [`CountPrimitive`] seam
//! - [`easing`]: interpolation curves
//! - [`format`]: rounding, grouping, prefix and suffix
//! - [`error`]: configuration errors

pub mod animation;
pub mod easing;
pub mod error;
pub mod format;

pub use animation::{CountPrimitive, CountUp, CountUpOptions, Phase, SmartEasing};
pub use easing::Easing;
pub use error::{CountUpError, CountUpResult};
pub use format::{FormatOptions, format_number};
