//! Axis discovery and nearest-index lookup.
//!
//! Given a variable's declared dimensions and the axes bound to them, these
//! functions find the axis playing a particular role and turn a coordinate
//! value into an integer index on it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::axis::{AxisSource, CoordinateAxis, DataVariable};
use crate::error::{AxisError, Result};
use crate::kind::AxisKind;
use crate::time::TimeUnits;

/// Longitude convention detected from an axis's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LongitudeConvention {
    /// All values non-negative (0..180 or 0..360).
    ZeroBased,
    /// Contains negative values (-180..180).
    Centered,
}

impl LongitudeConvention {
    /// Detect the convention from the axis minimum.
    pub fn of(axis: &CoordinateAxis) -> Self {
        match axis.min_value() {
            Some(min) if min < 0.0 => LongitudeConvention::Centered,
            _ => LongitudeConvention::ZeroBased,
        }
    }

    /// Map a longitude onto this convention.
    ///
    /// Only values above 180 are remapped, and only for centered axes.
    pub fn normalize(&self, lon: f64) -> f64 {
        match self {
            LongitudeConvention::Centered if lon > 180.0 => lon - 360.0,
            _ => lon,
        }
    }
}

/// Classify every dimension of a variable, in declared order.
///
/// Dimensions without a bound coordinate axis are `Unknown`.
pub fn classify_dimensions<S: AxisSource>(
    source: &S,
    variable: &DataVariable,
) -> Vec<(String, AxisKind)> {
    variable
        .dimensions
        .iter()
        .map(|dim| {
            let kind = source
                .coordinate_axis(dim)
                .map(CoordinateAxis::kind)
                .unwrap_or(AxisKind::Unknown);
            (dim.clone(), kind)
        })
        .collect()
}

/// First axis of `kind` among the variable's dimensions, in declared order.
pub fn find_axis<'a, S: AxisSource>(
    source: &'a S,
    variable: &DataVariable,
    kind: AxisKind,
) -> Option<&'a CoordinateAxis> {
    let found = variable
        .dimensions
        .iter()
        .filter_map(|dim| source.coordinate_axis(dim))
        .find(|axis| axis.kind() == kind);

    if let Some(axis) = found {
        trace!(variable = %variable.name, kind = %kind, axis = %axis.name, "Found axis");
    }
    found
}

/// Like [`find_axis`] but absence is an error.
pub fn require_axis<'a, S: AxisSource>(
    source: &'a S,
    variable: &DataVariable,
    kind: AxisKind,
) -> Result<&'a CoordinateAxis> {
    find_axis(source, variable, kind)
        .ok_or_else(|| AxisError::axis_not_found(&variable.name, kind))
}

/// Index of the value closest to `target`.
///
/// Ties go to the lowest index. Targets outside the axis range resolve to
/// the nearest endpoint; there is no bounds check.
pub fn nearest_index(values: &[f64], target: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, v) in values.iter().enumerate() {
        let diff = (v - target).abs();
        match best {
            Some((_, best_diff)) if !(diff < best_diff) => {}
            _ if diff.is_nan() => {}
            _ => best = Some((i, diff)),
        }
    }
    best.map(|(i, _)| i)
}

/// [`nearest_index`] on a named axis, failing on an empty axis.
pub fn nearest_axis_index(axis: &CoordinateAxis, target: f64) -> Result<usize> {
    if axis.is_empty() {
        return Err(AxisError::empty_axis(&axis.name));
    }
    nearest_index(&axis.values, target).ok_or_else(|| AxisError::NotComparable {
        axis: axis.name.clone(),
        target,
    })
}

/// Nearest index on the variable's longitude axis.
///
/// The target is first normalized to the axis's own convention, see
/// [`LongitudeConvention::normalize`].
pub fn nearest_longitude_index<S: AxisSource>(
    source: &S,
    variable: &DataVariable,
    lon: f64,
) -> Result<usize> {
    let axis = require_axis(source, variable, AxisKind::Longitude)?;
    let convention = LongitudeConvention::of(axis);
    let target = convention.normalize(lon);
    let index = nearest_axis_index(axis, target)?;

    debug!(
        variable = %variable.name,
        axis = %axis.name,
        convention = ?convention,
        lon = lon,
        normalized = target,
        index = index,
        "Resolved longitude index"
    );
    Ok(index)
}

/// Nearest index on the variable's latitude axis.
pub fn nearest_latitude_index<S: AxisSource>(
    source: &S,
    variable: &DataVariable,
    lat: f64,
) -> Result<usize> {
    nearest_index_of_kind(source, variable, AxisKind::Latitude, lat)
}

/// Nearest index on the variable's vertical axis. Pressure and
/// `positive`-flagged axes are searched the same way.
pub fn nearest_vertical_index<S: AxisSource>(
    source: &S,
    variable: &DataVariable,
    value: f64,
) -> Result<usize> {
    nearest_index_of_kind(source, variable, AxisKind::Vertical, value)
}

/// Nearest index on the variable's time axis, given a raw axis value.
pub fn nearest_time_index<S: AxisSource>(
    source: &S,
    variable: &DataVariable,
    value: f64,
) -> Result<usize> {
    nearest_index_of_kind(source, variable, AxisKind::Time, value)
}

/// Nearest index on the variable's time axis for an instant, converted
/// through the axis's `units`.
pub fn nearest_time_index_at<S: AxisSource>(
    source: &S,
    variable: &DataVariable,
    instant: DateTime<Utc>,
) -> Result<usize> {
    let axis = require_axis(source, variable, AxisKind::Time)?;
    let units = time_units(axis)?;
    let offset = units.to_offset(instant);
    let index = nearest_axis_index(axis, offset)?;

    debug!(
        variable = %variable.name,
        axis = %axis.name,
        instant = %instant,
        offset = offset,
        index = index,
        "Resolved time index"
    );
    Ok(index)
}

/// Parsed units of a time axis.
pub fn time_units(axis: &CoordinateAxis) -> Result<TimeUnits> {
    let units = axis
        .attributes
        .units()
        .ok_or_else(|| AxisError::invalid_time_units(format!("axis '{}' has no units", axis.name)))?;
    TimeUnits::parse(units)
}

fn nearest_index_of_kind<S: AxisSource>(
    source: &S,
    variable: &DataVariable,
    kind: AxisKind,
    value: f64,
) -> Result<usize> {
    let axis = require_axis(source, variable, kind)?;
    let index = nearest_axis_index(axis, value)?;
    debug!(
        variable = %variable.name,
        axis = %axis.name,
        kind = %kind,
        value = value,
        index = index,
        "Resolved index"
    );
    Ok(index)
}

/// A requested coordinate on one kind of axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub kind: AxisKind,
    pub value: f64,
}

impl Selection {
    pub fn new(kind: AxisKind, value: f64) -> Self {
        Self { kind, value }
    }
}

/// The resolved index for one dimension of a variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionIndex {
    pub dimension: String,
    pub kind: AxisKind,
    /// `None` when the dimension was not selected.
    pub index: Option<usize>,
}

/// Resolve a set of selections to one entry per dimension, in the
/// variable's declared order.
///
/// Every selected kind must exist on the variable; `Unknown` can never be
/// selected. When a kind is selected more than once the first selection is
/// used.
pub fn select_indices<S: AxisSource>(
    source: &S,
    variable: &DataVariable,
    selections: &[Selection],
) -> Result<Vec<DimensionIndex>> {
    let mut resolved: Vec<(AxisKind, usize)> = Vec::with_capacity(selections.len());
    for selection in selections {
        if resolved.iter().any(|(k, _)| *k == selection.kind) {
            continue;
        }
        let index = match selection.kind {
            AxisKind::Unknown => {
                return Err(AxisError::axis_not_found(&variable.name, AxisKind::Unknown))
            }
            AxisKind::Longitude => nearest_longitude_index(source, variable, selection.value)?,
            kind => nearest_index_of_kind(source, variable, kind, selection.value)?,
        };
        resolved.push((selection.kind, index));
    }

    // Only the first axis of a kind receives the index, matching find_axis.
    let mut assigned: Vec<AxisKind> = Vec::new();
    let indices = classify_dimensions(source, variable)
        .into_iter()
        .map(|(dimension, kind)| {
            let index = if assigned.contains(&kind) {
                None
            } else {
                resolved.iter().find(|(k, _)| *k == kind).map(|(_, i)| *i)
            };
            if index.is_some() {
                assigned.push(kind);
            }
            DimensionIndex {
                dimension,
                kind,
                index,
            }
        })
        .collect();

    Ok(indices)
}

/// A longitude/latitude box, corners in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LonLatBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl LonLatBox {
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// The whole globe, -180..180 by -90..90.
    pub fn global() -> Self {
        Self::new(-180.0, -90.0, 180.0, 90.0)
    }
}

/// An inclusive index range on one axis, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRange {
    pub start: usize,
    pub end: usize,
}

impl IndexRange {
    /// Range spanning two indices given in either order.
    pub fn spanning(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.start..=self.end).contains(&index)
    }
}

/// Index ranges covering a [`LonLatBox`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BboxIndices {
    pub lon: IndexRange,
    pub lat: IndexRange,
}

/// Resolve each corner of `bbox` to its nearest longitude and latitude
/// index.
///
/// Ranges are inclusive of both corner indices and ordered, so axes stored
/// in descending order give the same shape as ascending ones.
pub fn bbox_index_ranges<S: AxisSource>(
    source: &S,
    variable: &DataVariable,
    bbox: &LonLatBox,
) -> Result<BboxIndices> {
    let lon = IndexRange::spanning(
        nearest_longitude_index(source, variable, bbox.min_lon)?,
        nearest_longitude_index(source, variable, bbox.max_lon)?,
    );
    let lat = IndexRange::spanning(
        nearest_latitude_index(source, variable, bbox.min_lat)?,
        nearest_latitude_index(source, variable, bbox.max_lat)?,
    );

    debug!(
        variable = %variable.name,
        bbox = ?bbox,
        lon = ?lon,
        lat = ?lat,
        "Resolved bounding box"
    );
    Ok(BboxIndices { lon, lat })
}
