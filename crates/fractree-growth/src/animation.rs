//! A growing tree bound to one drawing surface.

use fractree_core::{
    Branch, DEFAULT_TRUNK_RATIO, DEFAULT_TRUNK_WIDTH, ParamError, Seed, Surface, TreeParams,
};
use ratatui::style::Color;

use crate::generator::grow;
use crate::paint::{paint, visible};
use crate::reveal::{Phase, Reveal, Tick};

/// Branch set plus reveal state for the current surface size.
///
/// The host calls [`Animation::restart`] on start and on every resize, then
/// [`Animation::tick`] (or [`Animation::advance`] followed by
/// [`Animation::paint`]) once per frame until the returned [`Tick`] no
/// longer wants another frame.
#[derive(Debug, Clone)]
pub struct Animation {
    params: TreeParams,
    trunk_ratio: f64,
    trunk_width: f64,
    /// Immutable between restarts.
    branches: Vec<Branch>,
    reveal: Reveal,
    /// Surface size the branches were grown for.
    size: (f64, f64),
}

impl Animation {
    /// Create an idle animation; nothing is grown until [`Animation::restart`].
    pub fn new(params: TreeParams, interval_ms: u64) -> Result<Self, ParamError> {
        params.validate()?;
        Ok(Self {
            params,
            trunk_ratio: DEFAULT_TRUNK_RATIO,
            trunk_width: DEFAULT_TRUNK_WIDTH,
            branches: Vec::new(),
            reveal: Reveal::new(params.max_depth, interval_ms),
            size: (0.0, 0.0),
        })
    }

    /// Override the trunk length ratio and stroke width.
    pub fn with_trunk(mut self, ratio: f64, width: f64) -> Self {
        self.trunk_ratio = ratio;
        self.trunk_width = width;
        self
    }

    /// Regrow the tree for a `width` x `height` surface and restart the reveal.
    ///
    /// Any reveal in progress is discarded along with its branches.
    pub fn restart(&mut self, width: f64, height: f64) {
        let seed = Seed::scaled(width, height, self.trunk_ratio, self.trunk_width);
        self.branches = grow(seed, &self.params);
        self.size = (width, height);
        self.reveal.start();
        log::debug!(
            "regrew tree for {width}x{height}: {} branches, trunk length {:.1}, {} ms per level",
            self.branches.len(),
            seed.length,
            self.reveal.interval_ms()
        );
    }

    /// Update the reveal state for the host timestamp `now_ms`.
    pub fn advance(&mut self, now_ms: u64) -> Tick {
        let tick = self.reveal.tick(now_ms);
        if tick.advanced && tick.phase == Phase::Complete {
            log::info!(
                "reveal complete: {} levels, {} branches",
                self.reveal.max_depth() + 1,
                self.branches.len()
            );
        }
        tick
    }

    /// Redraw the visible branches. Returns the number of branches drawn.
    pub fn paint<S>(&self, surface: &mut S, color: Color) -> usize
    where
        S: Surface + ?Sized,
    {
        paint(surface, &self.branches, self.reveal.threshold(), color)
    }

    /// One full frame: advance the reveal, then redraw.
    pub fn tick<S>(&mut self, now_ms: u64, surface: &mut S, color: Color) -> Tick
    where
        S: Surface + ?Sized,
    {
        let tick = self.advance(now_ms);
        self.paint(surface, color);
        tick
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    pub fn threshold(&self) -> u32 {
        self.reveal.threshold()
    }

    pub fn phase(&self) -> Phase {
        self.reveal.phase()
    }

    /// Depth at which the reveal completes.
    pub fn max_depth(&self) -> u32 {
        self.reveal.max_depth()
    }

    pub fn size(&self) -> (f64, f64) {
        self.size
    }

    /// Number of branches drawn at the current threshold.
    pub fn visible_count(&self) -> usize {
        visible(&self.branches, self.reveal.threshold()).count()
    }
}
