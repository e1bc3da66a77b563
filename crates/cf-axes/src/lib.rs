//! Convention-driven coordinate axis discovery for gridded datasets.
//!
//! Self-describing array files (NetCDF and friends) attach `units` and
//! `positive` attributes to each coordinate variable. This crate reads those
//! attributes to decide which dimension of a data variable is longitude,
//! latitude, vertical or time, and resolves coordinate values to the nearest
//! integer index on that axis.
//!
//! # Architecture
//!
//! ```text
//! Dataset (AxisSource)
//!      │
//!      ▼
//! find_axis(variable, kind) ──► classify(attributes) per dimension
//!      │
//!      ▼
//! nearest_*_index(variable, value)
//!      │
//!      ├─► LongitudeConvention::normalize (longitude only)
//!      │
//!      └─► nearest_index(values, target)
//!
//! bbox_index_ranges(variable, box) ──► nearest_{longitude,latitude}_index
//! ```
//!
//! Nothing here reads files. Callers build a [`Dataset`] (or implement
//! [`AxisSource`]) from whatever I/O layer they use.
//!
//! # Example
//!
//! ```
//! use cf_axes::{Attributes, CoordinateAxis, DataVariable, Dataset};
//!
//! let ds = Dataset::new()
//!     .with_axis(CoordinateAxis::new(
//!         "lon",
//!         vec![-180.0, -90.0, 0.0, 90.0, 170.0],
//!         Attributes::new().with("units", "degrees_east"),
//!     ))
//!     .with_variable(DataVariable::new("sla", ["lon"]));
//!
//! let var = ds.variable("sla").unwrap();
//! assert_eq!(cf_axes::nearest_longitude_index(&ds, var, 200.0).unwrap(), 0);
//! ```

pub mod attributes;
pub mod axis;
pub mod error;
pub mod kind;
pub mod metadata;
pub mod resolver;
pub mod time;

// Re-export commonly used types at crate root
pub use attributes::{AttributeValue, Attributes};
pub use axis::{AxisSource, CoordinateAxis, DataVariable, Dataset};
pub use error::{AxisError, Result};
pub use kind::{classify, AxisKind};
pub use metadata::{is_positive_up, title};
pub use resolver::{
    bbox_index_ranges, classify_dimensions, find_axis, nearest_axis_index, nearest_index,
    nearest_latitude_index, nearest_longitude_index, nearest_time_index, nearest_time_index_at,
    nearest_vertical_index, require_axis, select_indices, time_units, BboxIndices, DimensionIndex,
    IndexRange, LonLatBox, LongitudeConvention, Selection,
};
pub use time::{TimeUnit, TimeUnits};
