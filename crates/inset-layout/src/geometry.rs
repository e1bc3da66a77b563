//! Rectangles and the mapping between a plot's data coordinates and figure
//! coordinates.
//!
//! Figure space is the unit square covering the whole rendering surface.
//! Coordinate space is the native range of one plot's axes. The two are
//! related by an independent affine scaling per axis, see [`AxesFrame`].

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

/// A plotted sample in coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle given by its lower-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The figure-space unit square.
    pub fn unit() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    /// Check if the interiors of two rectangles intersect.
    ///
    /// Rectangles that only share an edge or a corner do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.top()
            && self.top() > other.y
    }

    /// Check if a point lies inside or on the boundary.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.top()
    }
}

/// Geometry of one plot: its data range and where its drawable area sits
/// inside the figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxesFrame {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    /// The axes' box in figure space.
    pub bbox: Rect,
}

impl AxesFrame {
    /// Create a frame, rejecting empty or non-finite ranges.
    pub fn new(x_range: (f64, f64), y_range: (f64, f64), bbox: Rect) -> Result<Self> {
        let frame = Self {
            x_min: x_range.0,
            x_max: x_range.1,
            y_min: y_range.0,
            y_max: y_range.1,
            bbox,
        };
        frame.validate()?;
        Ok(frame)
    }

    /// A frame whose axes fill the whole figure.
    pub fn full_figure(x_range: (f64, f64), y_range: (f64, f64)) -> Result<Self> {
        Self::new(x_range, y_range, Rect::unit())
    }

    /// Check that both ranges and the box have positive finite extent.
    ///
    /// Frames deserialized from JSON bypass [`AxesFrame::new`], so callers
    /// of the search run this again.
    pub fn validate(&self) -> Result<()> {
        check_range("x", self.x_min, self.x_max)?;
        check_range("y", self.y_min, self.y_max)?;
        check_range("bbox width", 0.0, self.bbox.width)?;
        check_range("bbox height", 0.0, self.bbox.height)?;
        if !self.bbox.x.is_finite() || !self.bbox.y.is_finite() {
            return Err(LayoutError::degenerate("bbox origin", self.bbox.x, self.bbox.y));
        }
        Ok(())
    }

    pub fn x_span(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn y_span(&self) -> f64 {
        self.y_max - self.y_min
    }

    fn x_scale(&self) -> f64 {
        self.bbox.width / self.x_span()
    }

    fn y_scale(&self) -> f64 {
        self.bbox.height / self.y_span()
    }

    /// Convert a coordinate-space rectangle to figure space.
    pub fn to_figure(&self, rect: &Rect) -> Rect {
        let sx = self.x_scale();
        let sy = self.y_scale();
        Rect {
            x: self.bbox.x + (rect.x - self.x_min) * sx,
            y: self.bbox.y + (rect.y - self.y_min) * sy,
            width: rect.width * sx,
            height: rect.height * sy,
        }
    }

    /// Convert a figure-space rectangle to coordinate space.
    pub fn to_coord(&self, rect: &Rect) -> Rect {
        let sx = self.x_scale();
        let sy = self.y_scale();
        Rect {
            x: self.x_min + (rect.x - self.bbox.x) / sx,
            y: self.y_min + (rect.y - self.bbox.y) / sy,
            width: rect.width / sx,
            height: rect.height / sy,
        }
    }
}

fn check_range(axis: &'static str, min: f64, max: f64) -> Result<()> {
    if min.is_finite() && max.is_finite() && max > min {
        Ok(())
    } else {
        Err(LayoutError::degenerate(axis, min, max))
    }
}
