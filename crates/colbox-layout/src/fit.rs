#![forbid(unsafe_code)]

//! Viewport fitting for floating panes.
//!
//! A floating pane (dialog, window) configured larger than the viewport is
//! never useful: its chrome lands outside the visible area and cannot be
//! reached. [`fit_to_viewport`] clamps a pane's configured dimensions to
//! the viewport, keeping a small gutter clear at the edge. Dimensions the
//! caller never configured are left untouched so hosts that size those
//! panes from content keep doing so.

use colbox_core::geometry::Size;
use serde::{Deserialize, Serialize};

/// Pixels kept clear between a clamped pane and the viewport edge.
pub const EDGE_GUTTER: i32 = 10;

/// A floating pane's configured size. `None` means the dimension is sized
/// by content, not configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaneSize {
    /// Configured width in pixels, if any.
    pub width: Option<i32>,
    /// Configured height in pixels, if any.
    pub height: Option<i32>,
}

impl PaneSize {
    /// A pane with both dimensions configured.
    #[inline]
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }
}

/// Clamp each configured dimension to the viewport less [`EDGE_GUTTER`].
#[must_use]
pub fn fit_to_viewport(pane: PaneSize, viewport: Size) -> PaneSize {
    let max_width = viewport.width.saturating_sub(EDGE_GUTTER);
    let max_height = viewport.height.saturating_sub(EDGE_GUTTER);
    PaneSize {
        width: pane.width.map(|w| w.min(max_width)),
        height: pane.height.map(|h| h.min(max_height)),
    }
}
