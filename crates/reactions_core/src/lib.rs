//! Reactions Core
//!
//! Shared primitives for the reactions picker:
//!
//! - **Geometry**: points, sizes, and rectangles in window coordinates, with
//!   the hit-test used to decide which reaction sits under the pointer
//! - **Color**: linear RGBA colors with interpolation for animated tints
//!
//! # Example
//!
//! ```rust
//! use reactions_core::{Point, Rect};
//!
//! let item = Rect::new(10.0, 20.0, 40.0, 75.0);
//! assert!(item.contains(Point::new(30.0, 50.0)));
//! assert!(!item.contains(Point::new(0.0, 0.0)));
//! ```

pub mod color;
pub mod geometry;

pub use color::Color;
pub use geometry::{Point, Rect, Size};
