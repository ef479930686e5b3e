use serde::{Deserialize, Serialize};

use crate::core::{PriceScale, Sample, TimeScale};
use crate::error::ChartResult;

/// Vertex in plot-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaVertex {
    pub x: f64,
    pub y: f64,
}

/// Path command in plot-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(AreaVertex),
    LineTo(AreaVertex),
    CubicTo {
        control1: AreaVertex,
        control2: AreaVertex,
        to: AreaVertex,
    },
    Close,
}

/// Geometry for the price area and its outline.
///
/// `line_points` are the mapped samples. `line_path` interpolates them with a
/// monotone-in-x cubic curve, so the curve never overshoots between samples.
/// `fill_path` follows the same curve and closes down to `baseline_y`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaGeometry {
    pub line_points: Vec<AreaVertex>,
    pub line_path: Vec<PathCommand>,
    pub fill_path: Vec<PathCommand>,
    pub baseline_y: f64,
}

impl AreaGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            line_points: Vec::new(),
            line_path: Vec::new(),
            fill_path: Vec::new(),
            baseline_y: 0.0,
        }
    }

    /// Smallest Y reached by the mapped samples (the top of the area).
    #[must_use]
    pub fn top_y(&self) -> f64 {
        self.line_points
            .iter()
            .map(|p| p.y)
            .fold(self.baseline_y, f64::min)
    }
}

/// Projects samples into area geometry anchored at `baseline_y`.
pub fn project_area_geometry(
    samples: &[Sample],
    time_scale: TimeScale,
    price_scale: PriceScale,
    baseline_y: f64,
) -> ChartResult<AreaGeometry> {
    if samples.is_empty() {
        return Ok(AreaGeometry::empty());
    }

    let mut line_points = Vec::with_capacity(samples.len());
    for sample in samples {
        line_points.push(AreaVertex {
            x: time_scale.time_to_pixel(sample.time_key())?,
            y: price_scale.price_to_pixel(sample.price)?,
        });
    }

    let line_path = monotone_x_path(&line_points);

    let first_x = line_points[0].x;
    let last_x = line_points[line_points.len() - 1].x;
    let mut fill_path = line_path.clone();
    fill_path.push(PathCommand::LineTo(AreaVertex {
        x: last_x,
        y: baseline_y,
    }));
    fill_path.push(PathCommand::LineTo(AreaVertex {
        x: first_x,
        y: baseline_y,
    }));
    fill_path.push(PathCommand::Close);

    Ok(AreaGeometry {
        line_points,
        line_path,
        fill_path,
        baseline_y,
    })
}

/// Builds a monotone cubic interpolation (Steffen-style tangents) through
/// points ordered by x.
#[must_use]
pub fn monotone_x_path(points: &[AreaVertex]) -> Vec<PathCommand> {
    let Some(first) = points.first() else {
        return Vec::new();
    };

    let mut path = Vec::with_capacity(points.len());
    path.push(PathCommand::MoveTo(*first));
    match points.len() {
        1 => return path,
        2 => {
            path.push(PathCommand::LineTo(points[1]));
            return path;
        }
        _ => {}
    }

    let n = points.len();
    let mut tangents = vec![0.0; n];
    for i in 1..n - 1 {
        tangents[i] = interior_tangent(points[i - 1], points[i], points[i + 1]);
    }
    tangents[0] = edge_tangent(points[0], points[1], tangents[1]);
    tangents[n - 1] = edge_tangent(points[n - 2], points[n - 1], tangents[n - 2]);

    for i in 0..n - 1 {
        let from = points[i];
        let to = points[i + 1];
        let dx = (to.x - from.x) / 3.0;
        path.push(PathCommand::CubicTo {
            control1: AreaVertex {
                x: from.x + dx,
                y: from.y + dx * tangents[i],
            },
            control2: AreaVertex {
                x: to.x - dx,
                y: to.y - dx * tangents[i + 1],
            },
            to,
        });
    }

    path
}

fn interior_tangent(p0: AreaVertex, p1: AreaVertex, p2: AreaVertex) -> f64 {
    let h0 = p1.x - p0.x;
    let h1 = p2.x - p1.x;
    let s0 = (p1.y - p0.y) / h0;
    let s1 = (p2.y - p1.y) / h1;
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let magnitude = min_propagating_nan(s0.abs(), s1.abs(), 0.5 * p.abs());
    let tangent = (sign(s0) + sign(s1)) * magnitude;
    if tangent.is_nan() { 0.0 } else { tangent }
}

fn edge_tangent(p0: AreaVertex, p1: AreaVertex, neighbor_tangent: f64) -> f64 {
    let h = p1.x - p0.x;
    if h == 0.0 {
        return neighbor_tangent;
    }
    (3.0 * (p1.y - p0.y) / h - neighbor_tangent) / 2.0
}

fn sign(value: f64) -> f64 {
    if value < 0.0 { -1.0 } else { 1.0 }
}

fn min_propagating_nan(a: f64, b: f64, c: f64) -> f64 {
    if a.is_nan() || b.is_nan() || c.is_nan() {
        return f64::NAN;
    }
    a.min(b).min(c)
}

#[cfg(test)]
mod tests {
    use super::{AreaVertex, interior_tangent};

    #[test]
    fn local_extremum_gets_flat_tangent() {
        let tangent = interior_tangent(
            AreaVertex { x: 0.0, y: 10.0 },
            AreaVertex { x: 1.0, y: 0.0 },
            AreaVertex { x: 2.0, y: 10.0 },
        );
        assert_eq!(tangent, 0.0);
    }

    #[test]
    fn coincident_points_do_not_produce_nan_tangents() {
        let tangent = interior_tangent(
            AreaVertex { x: 1.0, y: 5.0 },
            AreaVertex { x: 1.0, y: 5.0 },
            AreaVertex { x: 2.0, y: 6.0 },
        );
        assert!(tangent.is_finite());
    }
}
