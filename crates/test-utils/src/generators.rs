//! Synthetic coordinate values and point scenes.
//!
//! These generators create predictable, verifiable patterns so tests can
//! compute expected indices and occupancies by hand.

use inset_layout::{AxesFrame, Point};

/// `n` values starting at `start`, `step` apart.
///
/// ```
/// use test_utils::regular_axis;
///
/// assert_eq!(regular_axis(10.0, 10.0, 4), vec![10.0, 20.0, 30.0, 40.0]);
/// ```
pub fn regular_axis(start: f64, step: f64, n: usize) -> Vec<f64> {
    (0..n).map(|i| start + step * i as f64).collect()
}

/// Longitudes covering 0..360 (exclusive) in `n` steps.
pub fn longitude_axis_0_360(n: usize) -> Vec<f64> {
    regular_axis(0.0, 360.0 / n.max(1) as f64, n)
}

/// Longitudes covering -180..180 (exclusive) in `n` steps.
pub fn longitude_axis_180(n: usize) -> Vec<f64> {
    regular_axis(-180.0, 360.0 / n.max(1) as f64, n)
}

/// Latitudes from -90 to 90 inclusive in `n` points.
pub fn latitude_axis(n: usize) -> Vec<f64> {
    if n < 2 {
        return vec![0.0; n];
    }
    regular_axis(-90.0, 180.0 / (n - 1) as f64, n)
}

/// An `nx` by `ny` lattice of points spread evenly over the frame's
/// interior (never on its edges).
pub fn uniform_scene(nx: usize, ny: usize, frame: &AxesFrame) -> Vec<Point> {
    let dx = frame.x_span() / (nx + 1) as f64;
    let dy = frame.y_span() / (ny + 1) as f64;
    let mut points = Vec::with_capacity(nx * ny);
    for j in 1..=ny {
        for i in 1..=nx {
            points.push(Point::new(
                frame.x_min + dx * i as f64,
                frame.y_min + dy * j as f64,
            ));
        }
    }
    points
}

/// `n` points packed into the top-right `fraction` of the frame on each
/// axis.
pub fn clustered_scene(n: usize, fraction: f64, frame: &AxesFrame) -> Vec<Point> {
    let x0 = frame.x_max - frame.x_span() * fraction;
    let y0 = frame.y_max - frame.y_span() * fraction;
    (0..n)
        .map(|i| {
            let t = (i as f64 + 0.5) / n.max(1) as f64;
            Point::new(
                x0 + frame.x_span() * fraction * t,
                y0 + frame.y_span() * fraction * (1.0 - t),
            )
        })
        .collect()
}

/// A daily time series with an annual cycle, the kind of curve a
/// sea-level anomaly chart draws.
pub fn seasonal_series(days: usize, amplitude: f64) -> Vec<Point> {
    (0..days)
        .map(|d| {
            let phase = d as f64 / 365.25 * std::f64::consts::TAU;
            Point::new(d as f64, amplitude * phase.sin())
        })
        .collect()
}
