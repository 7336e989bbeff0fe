#![cfg_attr(not(test), no_std)]

//! Filled y-convex shape rasterizer for the 72x40 page-packed framebuffer.
//!
//! Shapes are rendered as one vertical span per column, which maps onto the
//! eight-rows-per-byte layout with whole-byte writes. Every vertical section of
//! a shape must be a single unbroken run. Shapes may carry a 1px outline in the
//! opposite polarity, reconstructed from neighbouring column spans.

pub mod blit;
pub mod curve;
pub mod geom;
pub mod mode;
pub mod poly;
pub mod rect;
pub mod shape;
pub mod twister;

pub use blit::{hline, vline};
pub use curve::{ellipse, lozenge};
pub use mode::{DrawMode, InvalidMode};
pub use poly::{ConvexPoly, MAX_VERTICES, PolyError, Transform};
pub use rect::{rect, rect_outline};
pub use shape::{EMPTY_LOWER, EMPTY_UPPER, Edge, Shape};
pub use twister::{TwisterConfig, twister};
