//! The `axes` subcommand: classify a variable's dimensions and resolve
//! coordinate values to indices.

use anyhow::{anyhow, Context, Result};
use cf_axes::{
    bbox_index_ranges, classify_dimensions, is_positive_up, require_axis, select_indices, title,
    time_units, AxisKind, AxisSource, BboxIndices, Dataset, DimensionIndex, LonLatBox, Selection,
};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::Serialize;
use tracing::info;

/// Coordinate values requested on the command line.
#[derive(Debug, Clone, Default)]
pub struct AxesQuery {
    pub lon: Option<f64>,
    pub lat: Option<f64>,
    pub vertical: Option<f64>,
    pub time: Option<f64>,
    pub time_iso: Option<String>,
    pub bbox: Option<LonLatBox>,
}

/// Display metadata for one dimension's axis.
#[derive(Debug, Serialize)]
pub struct AxisSummary {
    pub dimension: String,
    pub title: String,
    /// Only reported for vertical axes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positive_up: Option<bool>,
}

/// Output of the `axes` subcommand.
#[derive(Debug, Serialize)]
pub struct AxesReport {
    pub variable: String,
    pub dimensions: Vec<DimensionIndex>,
    pub axes: Vec<AxisSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BboxIndices>,
}

/// Parse an ISO 8601 instant; a missing offset means UTC.
fn parse_instant(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| Utc.from_utc_datetime(&ndt))
        .with_context(|| format!("Invalid time: {}", s))
}

pub fn run_axes(dataset: &Dataset, variable: &str, query: &AxesQuery) -> Result<AxesReport> {
    let var = dataset
        .variable(variable)
        .ok_or_else(|| anyhow!("Variable '{}' not found in dataset", variable))?;

    let kinds = classify_dimensions(dataset, var);
    info!(variable = %var.name, dimensions = ?kinds, "Classified dimensions");

    let mut selections = Vec::new();
    if let Some(lon) = query.lon {
        selections.push(Selection::new(AxisKind::Longitude, lon));
    }
    if let Some(lat) = query.lat {
        selections.push(Selection::new(AxisKind::Latitude, lat));
    }
    if let Some(z) = query.vertical {
        selections.push(Selection::new(AxisKind::Vertical, z));
    }
    if let Some(t) = query.time {
        selections.push(Selection::new(AxisKind::Time, t));
    } else if let Some(iso) = &query.time_iso {
        let instant = parse_instant(iso)?;
        let axis = require_axis(dataset, var, AxisKind::Time)?;
        let offset = time_units(axis)?.to_offset(instant);
        selections.push(Selection::new(AxisKind::Time, offset));
    }

    let dimensions = select_indices(dataset, var, &selections)
        .with_context(|| format!("Failed to resolve indices for '{}'", var.name))?;

    let bbox = query
        .bbox
        .map(|b| bbox_index_ranges(dataset, var, &b))
        .transpose()
        .with_context(|| format!("Failed to resolve bounding box for '{}'", var.name))?;

    let axes = kinds
        .iter()
        .filter_map(|(dim, kind)| {
            dataset.coordinate_axis(dim).map(|axis| AxisSummary {
                dimension: dim.clone(),
                title: title(axis),
                positive_up: (*kind == AxisKind::Vertical).then(|| is_positive_up(axis)),
            })
        })
        .collect();

    Ok(AxesReport {
        variable: var.name.clone(),
        dimensions,
        axes,
        bbox,
    })
}
