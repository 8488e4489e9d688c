#![forbid(unsafe_code)]

//! Core: pixel geometry and box-model measurement.
//!
//! # Role in colbox
//! `colbox-core` is the measurement layer. It owns the pixel-unit value
//! types shared across the workspace and the box-model arithmetic that turns
//! raw element metrics (style size, client size, offset size, borders,
//! padding) into the usable view size a layout consumes.
//!
//! # Primary responsibilities
//! - **Geometry**: `Size` and `Edges` in signed pixel units.
//! - **Box model**: `ElementMetrics` and the view-size derivation, including
//!   the border-box/content-box distinction and client-size clamping.
//!
//! # How it fits in the system
//! The solver (`colbox-layout`) consumes `Size` values produced here. Hosts
//! that measure real render trees build an [`box_model::ElementMetrics`] per
//! container and hand the derived size to their `Viewport` implementation;
//! hosts with fixed geometry skip this module entirely.

pub mod box_model;
pub mod geometry;
