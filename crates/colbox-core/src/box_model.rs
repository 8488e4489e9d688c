#![forbid(unsafe_code)]

//! Box-model measurement: from raw element metrics to a usable view size.
//!
//! Hosts rarely get to ask a render tree "how wide is the area I can lay
//! out into?" directly. What they can read is a bundle of raw numbers: a
//! style-sheet size (if one was set in pixels), a client size, an offset
//! size, border thicknesses, padding thicknesses, and the box-sizing mode.
//! This module owns the arithmetic that reconciles those numbers.
//!
//! Per axis the derivation is:
//!
//! | source | rule |
//! |---|---|
//! | style size set | under [`BoxSizing::BorderBox`] remove border + padding; include padding again unless the content size was asked for; clamp to the client size when the client size is nonzero and smaller |
//! | no style size | use the client size; if zero, fall back to the offset size minus border; remove padding when the content size was asked for |
//!
//! The client-size clamp matters when a scrollbar is showing: the style
//! width still reports the full track-less width while the client width
//! already accounts for the track. Layout must follow the client width or
//! it will overflow into the scrollbar.
//!
//! Whole-window viewports have no style size, borders, or padding; build
//! them with [`ElementMetrics::root`] and both derivations return the
//! window size unchanged.

use serde::{Deserialize, Serialize};

use crate::geometry::{Edges, Size};

/// How a style-sheet size relates to border and padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoxSizing {
    /// The style size describes the content area; border and padding grow
    /// the element beyond it.
    #[default]
    ContentBox,
    /// The style size describes the border box; border and padding are
    /// carved out of it.
    BorderBox,
}

/// Raw measurements of one element, as read from a host render tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElementMetrics {
    /// Pixel width from the style sheet, if one is set. Fractional style
    /// sizes are rounded by the host before they land here.
    pub style_width: Option<i32>,
    /// Pixel height from the style sheet, if one is set.
    pub style_height: Option<i32>,
    /// Interior size excluding borders and any scrollbar tracks.
    pub client: Size,
    /// Outer size including borders.
    pub offset: Size,
    /// Border thickness per side.
    pub border: Edges,
    /// Padding thickness per side.
    pub padding: Edges,
    /// How `style_width`/`style_height` relate to border and padding.
    pub box_sizing: BoxSizing,
}

impl ElementMetrics {
    /// Metrics for a whole-window viewport: the size is authoritative and
    /// there are no borders or padding to reconcile.
    #[must_use]
    pub fn root(size: Size) -> Self {
        Self {
            client: size,
            offset: size,
            ..Self::default()
        }
    }

    /// The usable size inside the border, padding included.
    #[must_use]
    pub fn view_size(&self) -> Size {
        Size::new(self.axis_width(false), self.axis_height(false))
    }

    /// The usable size inside the border and padding.
    ///
    /// This is the measurement a column layout divides: children sit inside
    /// the container's padding.
    #[must_use]
    pub fn content_size(&self) -> Size {
        Size::new(self.axis_width(true), self.axis_height(true))
    }

    fn axis_width(&self, content_box: bool) -> i32 {
        axis_size(
            self.style_width,
            self.client.width,
            self.offset.width,
            self.border.horizontal(),
            self.padding.horizontal(),
            self.box_sizing,
            content_box,
        )
    }

    fn axis_height(&self, content_box: bool) -> i32 {
        axis_size(
            self.style_height,
            self.client.height,
            self.offset.height,
            self.border.vertical(),
            self.padding.vertical(),
            self.box_sizing,
            content_box,
        )
    }
}

/// One axis of the view-size derivation.
///
/// `border` and `padding` are the combined thickness of both sides on this
/// axis. A zero style size skips the border-box subtraction (it cannot go
/// negative from insets it never contained), and a zero client size means
/// "unknown", never "clamp to nothing".
fn axis_size(
    style: Option<i32>,
    client: i32,
    offset: i32,
    border: i32,
    padding: i32,
    box_sizing: BoxSizing,
    content_box: bool,
) -> i32 {
    match style {
        Some(mut size) => {
            if size != 0 && box_sizing == BoxSizing::BorderBox {
                size = size.saturating_sub(border.saturating_add(padding));
            }
            if !content_box {
                size = size.saturating_add(padding);
            }
            if client != 0 && client < size {
                size = client;
            }
            size
        }
        None => {
            let mut size = client;
            if size == 0 {
                size = offset;
                if size != 0 {
                    size = size.saturating_sub(border);
                }
            }
            if size != 0 && content_box {
                size = size.saturating_sub(padding);
            }
            size
        }
    }
}
