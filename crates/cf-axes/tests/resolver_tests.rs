//! Axis discovery and index resolution against synthetic CF datasets.

use cf_axes::{
    bbox_index_ranges, classify_dimensions, find_axis, is_positive_up, nearest_index,
    nearest_latitude_index, nearest_longitude_index, nearest_time_index, nearest_time_index_at,
    nearest_vertical_index, select_indices, time_units, title, AxisError, AxisKind, Attributes,
    CoordinateAxis, DataVariable, Dataset, IndexRange, LonLatBox, Selection,
};
use chrono::{TimeZone, Utc};
use test_utils::{sla_dataset_with_depth, sst_dataset, unlabelled_dataset, SLA_VAR, SST_VAR};

// ============================================================================
// Axis discovery
// ============================================================================

#[test]
fn test_find_axis_by_kind() {
    let ds = sst_dataset();
    let var = ds.variable(SST_VAR).unwrap();

    assert_eq!(find_axis(&ds, var, AxisKind::Longitude).unwrap().name, "lon");
    assert_eq!(find_axis(&ds, var, AxisKind::Latitude).unwrap().name, "lat");
    assert_eq!(find_axis(&ds, var, AxisKind::Time).unwrap().name, "time");
    assert!(find_axis(&ds, var, AxisKind::Vertical).is_none());
}

#[test]
fn test_classify_dimensions_keeps_declared_order() {
    let ds = sla_dataset_with_depth();
    let var = ds.variable(SLA_VAR).unwrap();

    let kinds = classify_dimensions(&ds, var);
    assert_eq!(
        kinds,
        vec![
            ("time".to_string(), AxisKind::Time),
            ("depth".to_string(), AxisKind::Vertical),
            ("lat".to_string(), AxisKind::Latitude),
            ("lon".to_string(), AxisKind::Longitude),
        ]
    );
}

#[test]
fn test_dimension_without_axis_is_unknown() {
    let ds = sst_dataset();
    let var = DataVariable::new("flagged", ["nv", "lat"]);
    let kinds = classify_dimensions(&ds, &var);
    assert_eq!(kinds[0], ("nv".to_string(), AxisKind::Unknown));
    assert_eq!(kinds[1], ("lat".to_string(), AxisKind::Latitude));
}

#[test]
fn test_first_matching_axis_wins() {
    let ds = Dataset::new()
        .with_axis(CoordinateAxis::new(
            "lat_u",
            vec![0.0, 1.0],
            Attributes::new().with("units", "degrees_north"),
        ))
        .with_axis(CoordinateAxis::new(
            "lat_v",
            vec![0.5, 1.5],
            Attributes::new().with("units", "degrees_north"),
        ));
    let var = DataVariable::new("v", ["lat_v", "lat_u"]);
    assert_eq!(find_axis(&ds, &var, AxisKind::Latitude).unwrap().name, "lat_v");
}

// ============================================================================
// Nearest index
// ============================================================================

#[test]
fn test_nearest_index_examples() {
    let axis = [10.0, 20.0, 30.0, 40.0];
    assert_eq!(nearest_index(&axis, 21.0), Some(1));
    assert_eq!(nearest_index(&axis, 25.0), Some(1));
    assert_eq!(nearest_index(&axis, 26.0), Some(2));
}

#[test]
fn test_longitude_normalized_to_centered_axis() {
    let ds = Dataset::new().with_axis(CoordinateAxis::new(
        "lon",
        vec![-180.0, -90.0, 0.0, 90.0, 170.0],
        Attributes::new().with("units", "degrees_east"),
    ));
    let var = DataVariable::new("v", ["lon"]);
    assert_eq!(nearest_longitude_index(&ds, &var, 200.0).unwrap(), 0);
    assert_eq!(nearest_longitude_index(&ds, &var, 100.0).unwrap(), 3);
}

#[test]
fn test_longitude_on_fixture_grids() {
    let sst = sst_dataset();
    let var = sst.variable(SST_VAR).unwrap();
    // -180 + 2i; 200 becomes -160
    assert_eq!(nearest_longitude_index(&sst, var, 200.0).unwrap(), 10);
    assert_eq!(nearest_longitude_index(&sst, var, -160.0).unwrap(), 10);

    let sla = sla_dataset_with_depth();
    let var = sla.variable(SLA_VAR).unwrap();
    // 0..359 axis: no remapping in either direction
    assert_eq!(nearest_longitude_index(&sla, var, 200.0).unwrap(), 200);
    assert_eq!(nearest_longitude_index(&sla, var, -10.0).unwrap(), 0);
}

#[test]
fn test_latitude_and_vertical() {
    let ds = sla_dataset_with_depth();
    let var = ds.variable(SLA_VAR).unwrap();

    assert_eq!(nearest_latitude_index(&ds, var, -90.0).unwrap(), 0);
    assert_eq!(nearest_latitude_index(&ds, var, 0.4).unwrap(), 90);
    assert_eq!(nearest_vertical_index(&ds, var, 60.0).unwrap(), 2);
    assert_eq!(nearest_vertical_index(&ds, var, 10_000.0).unwrap(), 4);
}

#[test]
fn test_time_index_by_value_and_instant() {
    let ds = sst_dataset();
    let var = ds.variable(SST_VAR).unwrap();

    assert_eq!(nearest_time_index(&ds, var, 6.2).unwrap(), 6);

    let instant = Utc.with_ymd_and_hms(2010, 1, 4, 12, 0, 0).unwrap();
    // 3.5 days: tie between 3 and 4 goes low
    assert_eq!(nearest_time_index_at(&ds, var, instant).unwrap(), 3);

    let axis = find_axis(&ds, var, AxisKind::Time).unwrap();
    let units = time_units(axis).unwrap();
    assert_eq!(
        units.to_datetime(axis.values[9]).unwrap(),
        Utc.with_ymd_and_hms(2010, 1, 10, 0, 0, 0).unwrap()
    );
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_missing_latitude_is_an_error() {
    let ds = unlabelled_dataset();
    let var = ds.variable("field").unwrap();

    let err = nearest_latitude_index(&ds, var, 10.0).unwrap_err();
    assert_eq!(
        err,
        AxisError::AxisNotFound {
            variable: "field".to_string(),
            kind: AxisKind::Latitude,
        }
    );
    assert_eq!(err.to_string(), "no latitude axis found for variable 'field'");

    assert!(matches!(
        nearest_longitude_index(&ds, var, 10.0),
        Err(AxisError::AxisNotFound { kind: AxisKind::Longitude, .. })
    ));
}

#[test]
fn test_empty_longitude_axis_is_an_error() {
    let ds = Dataset::new().with_axis(CoordinateAxis::new(
        "lon",
        vec![],
        Attributes::new().with("units", "degrees_east"),
    ));
    let var = DataVariable::new("v", ["lon"]);
    assert_eq!(
        nearest_longitude_index(&ds, &var, 0.0),
        Err(AxisError::EmptyAxis("lon".to_string()))
    );
}

#[test]
fn test_time_axis_with_unparseable_units() {
    let ds = Dataset::new().with_axis(CoordinateAxis::new(
        "t",
        vec![0.0, 1.0],
        Attributes::new().with("units", "months since the flood"),
    ));
    let var = DataVariable::new("v", ["t"]);
    // Classified by the heuristic, rejected by the parser.
    assert_eq!(nearest_time_index(&ds, &var, 1.0).unwrap(), 1);
    assert!(matches!(
        nearest_time_index_at(&ds, &var, Utc::now()),
        Err(AxisError::InvalidTimeUnits(_))
    ));
}

// ============================================================================
// Selections
// ============================================================================

#[test]
fn test_select_indices_in_dimension_order() {
    let ds = sst_dataset();
    let var = ds.variable(SST_VAR).unwrap();

    let selected = select_indices(
        &ds,
        var,
        &[
            Selection::new(AxisKind::Longitude, 200.0),
            Selection::new(AxisKind::Latitude, 45.3),
        ],
    )
    .unwrap();

    let summary: Vec<(&str, AxisKind, Option<usize>)> = selected
        .iter()
        .map(|d| (d.dimension.as_str(), d.kind, d.index))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("time", AxisKind::Time, None),
            ("lat", AxisKind::Latitude, Some(68)),
            ("lon", AxisKind::Longitude, Some(10)),
        ]
    );
}

#[test]
fn test_select_indices_missing_kind() {
    let ds = sst_dataset();
    let var = ds.variable(SST_VAR).unwrap();
    let result = select_indices(&ds, var, &[Selection::new(AxisKind::Vertical, 10.0)]);
    assert!(matches!(
        result,
        Err(AxisError::AxisNotFound { kind: AxisKind::Vertical, .. })
    ));
}

// ============================================================================
// Bounding boxes and axis metadata
// ============================================================================

#[test]
fn test_bbox_index_ranges_on_sst_grid() {
    let ds = sst_dataset();
    let var = ds.variable(SST_VAR).unwrap();

    let ranges = bbox_index_ranges(&ds, var, &LonLatBox::new(-10.0, 40.0, 20.0, 60.0)).unwrap();
    assert_eq!(ranges.lon, IndexRange { start: 85, end: 100 });
    assert_eq!(ranges.lat, IndexRange { start: 65, end: 75 });
    assert_eq!(ranges.lon.len(), 16);
}

#[test]
fn test_global_bbox_covers_whole_grid() {
    let ds = sst_dataset();
    let var = ds.variable(SST_VAR).unwrap();

    let ranges = bbox_index_ranges(&ds, var, &LonLatBox::global()).unwrap();
    // 180 is not wrapped and lands on the last column (178).
    assert_eq!(ranges.lon, IndexRange { start: 0, end: 179 });
    assert_eq!(ranges.lat, IndexRange { start: 0, end: 90 });
}

#[test]
fn test_bbox_on_unlabelled_dataset() {
    let ds = unlabelled_dataset();
    let var = ds.variable("field").unwrap();
    assert!(matches!(
        bbox_index_ranges(&ds, var, &LonLatBox::global()),
        Err(AxisError::AxisNotFound { kind: AxisKind::Longitude, .. })
    ));
}

#[test]
fn test_depth_axis_metadata() {
    let ds = sla_dataset_with_depth();
    let var = ds.variable(SLA_VAR).unwrap();
    let depth = find_axis(&ds, var, AxisKind::Vertical).unwrap();

    assert!(!is_positive_up(depth));
    assert_eq!(title(depth), "depth (m)");

    let lat = find_axis(&ds, var, AxisKind::Latitude).unwrap();
    assert_eq!(title(lat), "lat (degree_N)");
}

#[test]
fn test_sst_axis_titles_use_standard_name() {
    let ds = sst_dataset();
    let var = ds.variable(SST_VAR).unwrap();
    let lon = find_axis(&ds, var, AxisKind::Longitude).unwrap();
    assert_eq!(title(lon), "longitude (degrees_east)");
}

#[test]
fn test_pressure_levels_increase_downward() {
    let axis = CoordinateAxis::new(
        "plev",
        vec![1000.0, 850.0, 500.0],
        Attributes::new().with("units", "hPa"),
    );
    assert_eq!(axis.kind(), AxisKind::Vertical);
    assert!(!is_positive_up(&axis));

    let height = CoordinateAxis::new(
        "alt",
        vec![0.0, 100.0],
        Attributes::new().with("units", "m").with("positive", "up"),
    );
    assert!(is_positive_up(&height));
}
