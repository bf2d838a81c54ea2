//! Per-render state: the content-width ceiling cache.
//!
//! The surrounding layout may advertise its own content width (a theme
//! global, in WordPress terms). That advertised value wins only when it is
//! positive and no wider than the configured ceiling; anything else falls
//! back to the ceiling. The resolution is cached for the life of the
//! context so repeated lookups during one render are stable and cheap.
//!
//! A context is owned by one render/request cycle. It is deliberately not
//! `Sync`: cross-request sharing is the bug this type exists to prevent.
//! Create one per render, or [`reset`](RenderContext::reset) between
//! renders when reusing an allocation.

use std::cell::Cell;

use crate::config::EdgeConfig;

/// State scoped to a single render/request cycle.
#[derive(Debug)]
pub struct RenderContext {
    ceiling: u32,
    resolved: Cell<Option<u32>>,
}

impl RenderContext {
    pub fn new(config: &EdgeConfig) -> Self {
        Self {
            ceiling: config.breakpoints.content_width,
            resolved: Cell::new(None),
        }
    }

    /// Resolve the effective content width for this render.
    ///
    /// The first call decides: an override in `1..=ceiling` is accepted,
    /// anything else (absent, zero, or wider than the ceiling) clamps to
    /// the ceiling. Later calls return the cached decision regardless of
    /// their argument.
    pub fn content_width(&self, layout_width: Option<u32>) -> u32 {
        if let Some(width) = self.resolved.get() {
            return width;
        }
        let width = match layout_width {
            Some(w) if w > 0 && w <= self.ceiling => w,
            _ => self.ceiling,
        };
        self.resolved.set(Some(width));
        width
    }

    /// Forget the cached resolution, ready for the next render.
    pub fn reset(&self) {
        self.resolved.set(None);
    }
}
