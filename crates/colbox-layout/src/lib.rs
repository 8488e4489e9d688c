#![forbid(unsafe_code)]

//! Proportional column layout with scrollbar-aware relayout.
//!
//! # Role in colbox
//! `colbox-layout` assigns concrete pixel widths to an ordered row of
//! columns inside a container whose measured width can change as a side
//! effect of applying those widths (a scrollbar appearing or disappearing).
//!
//! # Primary responsibilities
//! - **Column / Sizing**: per-column width specs, fixed or proportional.
//! - **ColumnLayout**: the two-pass width solver and the bounded relayout
//!   loop that re-measures through the host's [`Viewport`].
//! - **Container**: ordered columns plus the measurement capability, with
//!   keyed access to assigned widths.
//! - **fit**: clamping floating panes to the viewport.
//!
//! # Solving model
//! Fixed columns and their horizontal margins are subtracted from the
//! available width (less a configurable scrollbar reserve); the remainder is
//! floored at zero and every proportional column takes
//! `floor(fraction * remainder) - margins` of it, all from the same
//! remainder. Proportions are deliberately not validated: fractions summing
//! past 1.0 overflow the container, and a margin wider than a column's share
//! yields a negative assigned width, both surfaced as computed.
//!
//! # Example
//!
//! ```
//! use colbox_core::geometry::Size;
//! use colbox_layout::{Column, ColumnLayout, Container, StaticViewport};
//!
//! let viewport = StaticViewport::new(Size::new(500, 300));
//! let mut container = Container::with_columns(
//!     viewport,
//!     [
//!         Column::fixed(100).id("nav"),
//!         Column::proportional(1.0).id("body"),
//!     ],
//! );
//!
//! ColumnLayout::new().layout(&mut container)?;
//!
//! assert_eq!(container.assigned("nav"), Some(100));
//! assert_eq!(container.assigned("body"), Some(400));
//! # Ok::<(), colbox_layout::LayoutError>(())
//! ```

pub mod fit;

use colbox_core::geometry::{Edges, Size};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::{trace, warn};

/// Relayout ceiling: one solve plus one scrollbar-induced re-solve.
///
/// A scrollbar track has a fixed width, so a second measurement already
/// reflects it and a third pass has nothing new to observe. A measurement
/// that still changes after this many passes is a configuration error, not
/// a layout in progress.
pub const DEFAULT_MAX_PASSES: u32 = 2;

/// How a column claims horizontal space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Sizing {
    /// Explicit width in pixels.
    Fixed(i32),
    /// Fraction (nominally `0.0..=1.0`) of the width remaining after all
    /// fixed columns and margins are subtracted. Fractions are not required
    /// to sum to 1.0 across a container.
    Proportion(f64),
}

impl Default for Sizing {
    /// A column that never specified a width participates as a zero-width
    /// fixed column.
    fn default() -> Self {
        Sizing::Fixed(0)
    }
}

/// One layout participant: a sizing mode, horizontal margins, and the
/// width the solver wrote back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Column {
    id: Option<String>,
    sizing: Sizing,
    margins: Edges,
    /// Solver output; never serialized, recomputed on every layout.
    #[serde(skip)]
    assigned: Option<i32>,
}

impl Column {
    /// A column with an explicit pixel width.
    #[must_use]
    pub fn fixed(width: i32) -> Self {
        Self {
            sizing: Sizing::Fixed(width),
            ..Self::default()
        }
    }

    /// A column taking `fraction` of the remaining width.
    #[must_use]
    pub fn proportional(fraction: f64) -> Self {
        Self {
            sizing: Sizing::Proportion(fraction),
            ..Self::default()
        }
    }

    /// Attach an id for keyed lookup through [`Container::assigned`].
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the margins. Only `left` and `right` affect width distribution.
    #[must_use]
    pub fn margins(mut self, margins: Edges) -> Self {
        self.margins = margins;
        self
    }

    /// The sizing mode.
    #[inline]
    #[must_use]
    pub fn sizing(&self) -> Sizing {
        self.sizing
    }

    /// Combined left + right margin, the amount this column consumes
    /// outside its content width.
    #[inline]
    #[must_use]
    pub fn horizontal_margin(&self) -> i32 {
        self.margins.horizontal()
    }

    /// The width written by the last solve, if any. Negative when the
    /// horizontal margin exceeds the column's share.
    #[inline]
    #[must_use]
    pub fn assigned(&self) -> Option<i32> {
        self.assigned
    }
}

/// Measurement capability a layout host exposes.
///
/// `view_size` is queried fresh on every pass; `apply` hands the host one
/// pass's solved widths so its render tree can react before the next
/// measurement (this is where a scrollbar appears).
pub trait Viewport {
    /// Current size available for columns.
    fn view_size(&mut self) -> Size;

    /// Receive the solved widths for one pass. The default does nothing,
    /// which suits hosts whose measurement cannot change mid-layout.
    fn apply(&mut self, columns: &[Column]) {
        let _ = columns;
    }
}

/// A viewport with fixed geometry: measurement never changes, so layout
/// always completes in a single pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StaticViewport {
    size: Size,
}

impl StaticViewport {
    /// Create a viewport with the given fixed size.
    #[inline]
    #[must_use]
    pub const fn new(size: Size) -> Self {
        Self { size }
    }
}

impl Viewport for StaticViewport {
    fn view_size(&mut self) -> Size {
        self.size
    }
}

/// The layout parent: an ordered list of columns plus the host's
/// measurement capability.
///
/// Column order is layout-significant (left-to-right placement); ids are
/// optional and only serve keyed lookup of assigned widths. A duplicate id
/// resolves to the column added last.
#[derive(Debug, Clone)]
pub struct Container<V> {
    viewport: V,
    columns: Vec<Column>,
    ids: FxHashMap<String, usize>,
}

impl<V: Viewport> Container<V> {
    /// An empty container around a viewport.
    #[must_use]
    pub fn new(viewport: V) -> Self {
        Self {
            viewport,
            columns: Vec::new(),
            ids: FxHashMap::default(),
        }
    }

    /// A container populated from an ordered column sequence.
    #[must_use]
    pub fn with_columns(viewport: V, columns: impl IntoIterator<Item = Column>) -> Self {
        let mut container = Self::new(viewport);
        for column in columns {
            container.push(column);
        }
        container
    }

    /// Append a column at the right edge.
    pub fn push(&mut self, column: Column) {
        if let Some(id) = column.id.clone() {
            self.ids.insert(id, self.columns.len());
        }
        self.columns.push(column);
    }

    /// Replace all columns, preserving the viewport.
    pub fn set_columns(&mut self, columns: impl IntoIterator<Item = Column>) {
        self.columns.clear();
        self.ids.clear();
        for column in columns {
            self.push(column);
        }
    }

    /// The columns in layout order.
    #[inline]
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Assigned width of the column with the given id, if that column
    /// exists and has been laid out.
    #[must_use]
    pub fn assigned(&self, id: &str) -> Option<i32> {
        self.ids
            .get(id)
            .and_then(|&i| self.columns.get(i))
            .and_then(Column::assigned)
    }

    /// The viewport.
    #[inline]
    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Mutable access to the viewport.
    #[inline]
    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }
}

/// Errors from driving a layout to a stable measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// The measured width was still changing after the relayout ceiling.
    /// The widths from the final solve remain written on the columns.
    DidNotConverge {
        /// Solve passes performed.
        passes: u32,
        /// The last measured width.
        width: i32,
    },
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DidNotConverge { passes, width } => write!(
                f,
                "measured width still changing after {passes} layout passes (last width {width})"
            ),
        }
    }
}

impl std::error::Error for LayoutError {}

/// The proportional column solver.
///
/// Instance-scoped configuration: a reserve for a potential scrollbar track
/// and the relayout pass ceiling. Construct one per container policy and
/// reuse it freely; solving holds no state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    scroll_reserve: i32,
    max_passes: u32,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            scroll_reserve: 0,
            max_passes: DEFAULT_MAX_PASSES,
        }
    }
}

impl ColumnLayout {
    /// Solver with no scrollbar reserve and the default pass ceiling.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve `px` of the measured width for a scrollbar track before
    /// distribution.
    #[must_use]
    pub fn scroll_reserve(mut self, px: i32) -> Self {
        self.scroll_reserve = px;
        self
    }

    /// Set the relayout ceiling. Values below 1 are treated as 1.
    #[must_use]
    pub fn max_passes(mut self, passes: u32) -> Self {
        self.max_passes = passes;
        self
    }

    /// Assign widths to every column in the container.
    ///
    /// Measures the viewport, solves, applies, and re-measures; a changed
    /// measurement (scrollbar feedback) triggers one re-solve per remaining
    /// pass. A container measuring under one pixel in both dimensions is
    /// not displayed and is skipped without touching any column.
    ///
    /// # Errors
    /// [`LayoutError::DidNotConverge`] when the measurement is still
    /// changing after the pass ceiling.
    pub fn layout<V: Viewport>(&self, container: &mut Container<V>) -> Result<(), LayoutError> {
        let Container {
            viewport, columns, ..
        } = container;

        let mut size = viewport.view_size();
        if size.is_collapsed() {
            return Ok(());
        }

        let max = self.max_passes.max(1);
        for pass in 1..=max {
            solve_columns(size.width, self.scroll_reserve, columns);
            viewport.apply(columns);

            let fresh = viewport.view_size();
            if fresh.width == size.width {
                return Ok(());
            }

            #[cfg(feature = "tracing")]
            trace!(
                pass,
                prev_width = size.width,
                next_width = fresh.width,
                "measured width changed after apply"
            );
            let _ = pass; // suppress unused warning when tracing is disabled

            size = fresh;
        }

        #[cfg(feature = "tracing")]
        warn!(
            passes = max,
            width = size.width,
            "column layout did not converge"
        );
        Err(LayoutError::DidNotConverge {
            passes: max,
            width: size.width,
        })
    }
}

/// One solve pass: distribute `width` (less `scroll_reserve`) over the
/// columns, writing each assigned width in place.
///
/// This is the whole arithmetic of the layout; [`ColumnLayout::layout`]
/// wraps it in measurement and the relayout loop. Hosts that already know
/// their final width can call it directly and skip the feedback loop.
pub fn solve_columns(width: i32, scroll_reserve: i32, columns: &mut [Column]) {
    let mut remaining = width.saturating_sub(scroll_reserve);

    for column in columns.iter() {
        if let Sizing::Fixed(fixed) = column.sizing {
            remaining =
                remaining.saturating_sub(fixed.saturating_add(column.margins.horizontal()));
        }
    }

    // Oversized fixed columns floor the remainder, they do not borrow from
    // the proportional columns.
    let remaining = remaining.max(0);

    for column in columns.iter_mut() {
        column.assigned = Some(match column.sizing {
            Sizing::Fixed(fixed) => fixed,
            Sizing::Proportion(fraction) => ((fraction * f64::from(remaining)).floor() as i32)
                .saturating_sub(column.margins.horizontal()),
        });
    }
}
