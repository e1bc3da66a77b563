//! Coordinate axes, data variables and the datasets that own them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::kind::{classify, AxisKind};

/// One dimension's coordinate values plus its attribute metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinateAxis {
    pub name: String,
    pub values: Vec<f64>,
    #[serde(default)]
    pub attributes: Attributes,
}

impl CoordinateAxis {
    pub fn new(name: impl Into<String>, values: Vec<f64>, attributes: Attributes) -> Self {
        Self {
            name: name.into(),
            values,
            attributes,
        }
    }

    pub fn kind(&self) -> AxisKind {
        classify(&self.attributes)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest finite value on the axis.
    pub fn min_value(&self) -> Option<f64> {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .reduce(f64::min)
    }
}

/// A data variable and its dimensions in declared (physical) order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataVariable {
    pub name: String,
    pub dimensions: Vec<String>,
}

impl DataVariable {
    pub fn new<I, S>(name: impl Into<String>, dimensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            dimensions: dimensions.into_iter().map(Into::into).collect(),
        }
    }
}

/// Anything that can hand out the coordinate axis bound to a dimension.
///
/// This is the seam to the file-reading layer: resolution only ever borrows
/// axes through it.
pub trait AxisSource {
    fn coordinate_axis(&self, dimension: &str) -> Option<&CoordinateAxis>;
}

/// An in-memory dataset: coordinate axes keyed by dimension name and the
/// variables defined over them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub axes: BTreeMap<String, CoordinateAxis>,
    #[serde(default)]
    pub variables: BTreeMap<String, DataVariable>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an axis, keyed by its own name.
    pub fn with_axis(mut self, axis: CoordinateAxis) -> Self {
        self.axes.insert(axis.name.clone(), axis);
        self
    }

    pub fn with_variable(mut self, variable: DataVariable) -> Self {
        self.variables.insert(variable.name.clone(), variable);
        self
    }

    pub fn variable(&self, name: &str) -> Option<&DataVariable> {
        self.variables.get(name)
    }
}

impl AxisSource for Dataset {
    fn coordinate_axis(&self, dimension: &str) -> Option<&CoordinateAxis> {
        self.axes.get(dimension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_value_skips_nan() {
        let axis = CoordinateAxis::new("lon", vec![f64::NAN, 10.0, -5.0], Attributes::new());
        assert_eq!(axis.min_value(), Some(-5.0));

        let empty = CoordinateAxis::new("lon", vec![], Attributes::new());
        assert_eq!(empty.min_value(), None);
    }

    #[test]
    fn test_dataset_json() {
        let json = r#"{
            "axes": {
                "lat": {"name": "lat", "values": [-10.0, 0.0, 10.0], "attributes": {"units": "degrees_north"}}
            },
            "variables": {
                "sst": {"name": "sst", "dimensions": ["lat"]}
            }
        }"#;
        let ds: Dataset = serde_json::from_str(json).unwrap();
        let lat = ds.coordinate_axis("lat").unwrap();
        assert_eq!(lat.kind(), AxisKind::Latitude);
        assert_eq!(ds.variable("sst").unwrap().dimensions, vec!["lat"]);
    }
}
