//! Core types shared by the fractree crates.
//!
//! Geometry ([`Point`], [`Branch`]), tree shape parameters ([`TreeParams`],
//! [`Seed`]), the [`ColorTheme`] used to stroke branches and the [`Surface`]
//! drawing contract implemented by renderers.

mod geometry;
mod params;
mod surface;
mod theme;

pub use geometry::{Branch, Point};
pub use params::{
    DEFAULT_INTERVAL_MS, DEFAULT_TRUNK_RATIO, DEFAULT_TRUNK_WIDTH, MAX_SUPPORTED_DEPTH, ParamError,
    Seed, TreeParams,
};
pub use surface::Surface;
pub use theme::ColorTheme;
