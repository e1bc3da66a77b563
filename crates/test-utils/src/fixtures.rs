//! Common datasets and plot frames.

use cf_axes::{Attributes, CoordinateAxis, DataVariable, Dataset};
use inset_layout::{AxesFrame, Rect};

use crate::generators::{latitude_axis, longitude_axis_0_360, longitude_axis_180, regular_axis};

/// Name of the variable in [`sst_dataset`].
pub const SST_VAR: &str = "sst_anomaly";

/// Name of the variable in [`sla_dataset_with_depth`].
pub const SLA_VAR: &str = "sla";

/// Daily time axis: `days since 2010-01-01`, 0..n.
pub fn daily_time_axis(n: usize) -> CoordinateAxis {
    CoordinateAxis::new(
        "time",
        regular_axis(0.0, 1.0, n),
        Attributes::new()
            .with("units", "days since 2010-01-01 00:00:00")
            .with("calendar", "gregorian"),
    )
}

/// A 2-degree global SST anomaly dataset with dimensions (time, lat, lon).
///
/// Longitudes run -180..178, latitudes -90..90, ten daily time steps.
pub fn sst_dataset() -> Dataset {
    Dataset::new()
        .with_axis(daily_time_axis(10))
        .with_axis(CoordinateAxis::new(
            "lat",
            latitude_axis(91),
            Attributes::new()
                .with("units", "degrees_north")
                .with("standard_name", "latitude"),
        ))
        .with_axis(CoordinateAxis::new(
            "lon",
            longitude_axis_180(180),
            Attributes::new()
                .with("units", "degrees_east")
                .with("standard_name", "longitude"),
        ))
        .with_variable(DataVariable::new(SST_VAR, ["time", "lat", "lon"]))
}

/// A sea-level anomaly dataset with dimensions (time, depth, lat, lon),
/// longitudes on 0..360 and a `positive = "down"` depth axis.
pub fn sla_dataset_with_depth() -> Dataset {
    Dataset::new()
        .with_axis(daily_time_axis(5))
        .with_axis(CoordinateAxis::new(
            "depth",
            vec![0.0, 10.0, 50.0, 100.0, 500.0],
            Attributes::new().with("units", "m").with("positive", "down"),
        ))
        .with_axis(CoordinateAxis::new(
            "lat",
            latitude_axis(181),
            Attributes::new().with("units", "degree_N"),
        ))
        .with_axis(CoordinateAxis::new(
            "lon",
            longitude_axis_0_360(360),
            Attributes::new().with("units", "degreeE"),
        ))
        .with_variable(DataVariable::new(SLA_VAR, ["time", "depth", "lat", "lon"]))
}

/// A dataset whose only axes carry no recognizable convention.
pub fn unlabelled_dataset() -> Dataset {
    Dataset::new()
        .with_axis(CoordinateAxis::new(
            "x",
            regular_axis(0.0, 1.0, 10),
            Attributes::new().with("units", "m"),
        ))
        .with_axis(CoordinateAxis::new("y", regular_axis(0.0, 1.0, 10), Attributes::new()))
        .with_variable(DataVariable::new("field", ["y", "x"]))
}

/// A time-series chart frame: one year of days against +/- 0.3 m, with
/// typical figure margins.
pub fn chart_frame() -> AxesFrame {
    AxesFrame::new(
        (0.0, 365.0),
        (-0.3, 0.3),
        Rect::new(0.125, 0.11, 0.775, 0.77),
    )
    .expect("chart frame is valid")
}
