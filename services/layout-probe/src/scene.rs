//! The `place` subcommand: lay out a sequence of insets over a scene.

use anyhow::{Context, Result};
use inset_layout::{AxesFrame, LayoutSession, PlacerConfig, Placement, Point, ReservedAreas};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// One inset to place.
#[derive(Debug, Clone, Deserialize)]
pub struct InsetRequest {
    pub name: String,
    pub size_factor: f64,
    pub target_x: f64,
}

/// A plot and the insets to place on it, in placement order.
#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
    pub frame: AxesFrame,
    #[serde(default)]
    pub points: Vec<Point>,
    /// Areas already taken before this run (e.g. a legend).
    #[serde(default)]
    pub reserved: ReservedAreas,
    pub insets: Vec<InsetRequest>,
}

/// Result for one inset; `placement` is `None` when no free position exists.
#[derive(Debug, Serialize)]
pub struct InsetResult {
    pub name: String,
    pub placement: Option<Placement>,
}

pub fn run_scene(scene: Scene, config: PlacerConfig) -> Result<Vec<InsetResult>> {
    let Scene {
        frame,
        points,
        mut reserved,
        insets,
    } = scene;

    let mut session = LayoutSession::new(&frame, &points, &mut reserved, config)
        .context("Invalid scene")?;

    let mut results = Vec::with_capacity(insets.len());
    for inset in insets {
        let placement = session
            .place(inset.size_factor, inset.target_x)
            .with_context(|| format!("Failed to place inset '{}'", inset.name))?;

        match &placement {
            Some(p) => info!(
                inset = %inset.name,
                occupancy = p.occupancy,
                overlapping = p.overlapping,
                "Placed inset"
            ),
            None => warn!(inset = %inset.name, "No free position for inset"),
        }

        results.push(InsetResult {
            name: inset.name,
            placement,
        });
    }

    Ok(results)
}
