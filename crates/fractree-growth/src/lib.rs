//! Growing-tree animation for fractree.
//!
//! The [`generator`] builds the full branch set in one recursive pass, the
//! [`reveal`] scheduler raises the visible depth one level per interval, and
//! [`paint`] strokes the visible branches onto any [`fractree_core::Surface`].
//! [`Animation`] ties the three together for a frame-driven host.

mod animation;
pub mod generator;
pub mod paint;
pub mod reveal;

#[cfg(test)]
mod testing;

pub use animation::Animation;
pub use generator::{grow, grow_from};
pub use paint::{paint, visible};
pub use reveal::{DEFAULT_INTERVAL_MS, Phase, Reveal, Tick};
