//! Occlusion-aware placement of inset plots.
//!
//! Given the points already drawn on a plot, this crate finds a rectangle of
//! a requested size that covers as few of them as possible, stays close to a
//! preferred horizontal position, and does not overlap areas reserved by
//! earlier insets.
//!
//! # Architecture
//!
//! ```text
//! points + AxesFrame + ReservedAreas
//!      │
//!      ▼
//! find_least_occupied_region / place_inset
//!      │
//!      ├─► left edges: target → right, then target → left
//!      ├─► bottom edges: top → bottom
//!      ├─► skip candidates overlapping ReservedAreas (figure space)
//!      └─► count enclosed points (coordinate space), stop at zero
//!               │
//!               ▼
//!          Placement { coord, figure, occupancy }
//! ```
//!
//! All geometry is passed in explicitly; there is no notion of a current
//! figure.
//!
//! # Example
//!
//! ```
//! use inset_layout::{AxesFrame, LayoutSession, PlacerConfig, Point, ReservedAreas};
//!
//! let frame = AxesFrame::full_figure((0.0, 365.0), (-0.3, 0.3)).unwrap();
//! let points: Vec<Point> = (0..365).map(|d| Point::new(d as f64, 0.0)).collect();
//! let mut reserved = ReservedAreas::new();
//!
//! let mut session =
//!     LayoutSession::new(&frame, &points, &mut reserved, PlacerConfig::default()).unwrap();
//! let first = session.place(4.0, 100.0).unwrap().unwrap();
//! assert_eq!(first.occupancy, 0);
//! assert_eq!(reserved.len(), 1);
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod placer;
pub mod reserved;

// Re-export commonly used types at crate root
pub use config::{OverlapPolicy, PlacerConfig};
pub use error::{LayoutError, Result};
pub use geometry::{AxesFrame, Point, Rect};
pub use placer::{find_least_occupied_region, place_inset, LayoutSession, Placement};
pub use reserved::ReservedAreas;
