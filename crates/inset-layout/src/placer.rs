//! Least-occupied region search.
//!
//! Candidate rectangles are scanned right of the target first, then left of
//! it, and for each left edge from the top of the plot downwards. The first
//! candidate that covers no points wins outright; otherwise the candidate
//! with the fewest covered points is kept. Candidates that overlap a
//! reserved area are never considered.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::config::{OverlapPolicy, PlacerConfig};
use crate::error::{LayoutError, Result};
use crate::geometry::{AxesFrame, Point, Rect};
use crate::reserved::ReservedAreas;

/// A chosen inset position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// The rectangle in the plot's coordinate space.
    pub coord: Rect,
    /// The same rectangle in figure space.
    pub figure: Rect,
    /// Number of points covered.
    pub occupancy: usize,
    /// Set when the rectangle was found by ignoring reserved areas.
    pub overlapping: bool,
}

/// `n` evenly spaced values from `start` to `end`, both inclusive.
fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 {
        (end - start) / (n - 1) as f64
    } else {
        0.0
    };
    (0..n).map(move |i| if i + 1 == n && n > 1 { end } else { start + step * i as f64 })
}

/// Search for the least-occupied free rectangle with the default sampling.
///
/// The rectangle is `1/size_factor` of each axis span. Returns `Ok(None)`
/// when every candidate overlaps `reserved`.
pub fn find_least_occupied_region(
    points: &[Point],
    frame: &AxesFrame,
    size_factor: f64,
    target_x: f64,
    reserved: &ReservedAreas,
) -> Result<Option<Placement>> {
    let config = PlacerConfig::default();
    search(points, frame, size_factor, target_x, reserved, &config)
}

/// Search with explicit configuration, applying its overlap policy.
pub fn place_inset(
    points: &[Point],
    frame: &AxesFrame,
    size_factor: f64,
    target_x: f64,
    reserved: &ReservedAreas,
    config: &PlacerConfig,
) -> Result<Option<Placement>> {
    config.validate()?;

    if let Some(placement) = search(points, frame, size_factor, target_x, reserved, config)? {
        return Ok(Some(placement));
    }

    match config.overlap_policy {
        OverlapPolicy::Avoid => Ok(None),
        OverlapPolicy::AllowFallback => {
            warn!(
                reserved = reserved.len(),
                target_x = target_x,
                "No free position for inset, retrying with overlap allowed"
            );
            let placement = search(
                points,
                frame,
                size_factor,
                target_x,
                &ReservedAreas::new(),
                config,
            )?;
            Ok(placement.map(|p| Placement {
                overlapping: true,
                ..p
            }))
        }
    }
}

fn search(
    points: &[Point],
    frame: &AxesFrame,
    size_factor: f64,
    target_x: f64,
    reserved: &ReservedAreas,
    config: &PlacerConfig,
) -> Result<Option<Placement>> {
    if !size_factor.is_finite() || size_factor <= 0.0 {
        return Err(LayoutError::InvalidSizeFactor(size_factor));
    }
    frame.validate()?;

    let width = frame.x_span() / size_factor;
    let height = frame.y_span() / size_factor;
    let x_start = (target_x - width / 2.0).max(frame.x_min);

    let x_candidates = linspace(x_start, frame.x_max - width, config.x_samples)
        .chain(linspace(x_start, frame.x_min, config.x_samples));

    let mut best: Option<Placement> = None;
    let mut evaluated = 0usize;

    'outer: for x in x_candidates {
        for y in linspace(frame.y_max - height, frame.y_min, config.y_samples) {
            let coord = Rect::new(x, y, width, height);
            let figure = frame.to_figure(&coord);
            if reserved.overlaps_any(&figure) {
                continue;
            }

            evaluated += 1;
            let occupancy = points
                .iter()
                .filter(|p| coord.contains_point(p.x, p.y))
                .count();
            trace!(x = x, y = y, occupancy = occupancy, "Scored candidate");

            if best.map_or(true, |b| occupancy < b.occupancy) {
                best = Some(Placement {
                    coord,
                    figure,
                    occupancy,
                    overlapping: false,
                });
                if occupancy == 0 {
                    break 'outer;
                }
            }
        }
    }

    match &best {
        Some(p) => debug!(
            occupancy = p.occupancy,
            evaluated = evaluated,
            x = p.figure.x,
            y = p.figure.y,
            "Placed inset"
        ),
        None => debug!(reserved = reserved.len(), "Every candidate overlaps a reserved area"),
    }

    Ok(best)
}

/// Places insets one after another against a caller-owned reserved set.
///
/// Each successful placement is appended to the set before the next search.
pub struct LayoutSession<'a> {
    frame: &'a AxesFrame,
    points: &'a [Point],
    reserved: &'a mut ReservedAreas,
    config: PlacerConfig,
}

impl<'a> LayoutSession<'a> {
    pub fn new(
        frame: &'a AxesFrame,
        points: &'a [Point],
        reserved: &'a mut ReservedAreas,
        config: PlacerConfig,
    ) -> Result<Self> {
        config.validate()?;
        frame.validate()?;
        Ok(Self {
            frame,
            points,
            reserved,
            config,
        })
    }

    /// Place one inset and reserve its figure-space area.
    pub fn place(&mut self, size_factor: f64, target_x: f64) -> Result<Option<Placement>> {
        let placement = place_inset(
            self.points,
            self.frame,
            size_factor,
            target_x,
            &*self.reserved,
            &self.config,
        )?;
        if let Some(p) = &placement {
            self.reserved.reserve(p.figure);
        }
        Ok(placement)
    }

    pub fn reserved(&self) -> &ReservedAreas {
        &*self.reserved
    }
}
