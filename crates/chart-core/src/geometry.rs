// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math and curve smoothing.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(x: f32, y: f32) -> Self { Self { x, y } }

    fn distance(&self, other: &PointF) -> f32 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }
}

/// Incoming/outgoing Bezier control points of one vertex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlPoints {
    pub previous: PointF,
    pub next: PointF,
}

/// Control points for a smoothed polyline through `points` with the given
/// `tension` (0 = straight segments). Endpoints use themselves as the missing
/// neighbour. Control points are clamped into `area` so curves never
/// overshoot the plot.
pub fn spline_control_points(points: &[PointF], tension: f32, area: RectI32) -> Vec<ControlPoints> {
    let n = points.len();
    let (l, t, r, b) = (area.left as f32, area.top as f32, area.right as f32, area.bottom as f32);
    let cap = |p: PointF| PointF::new(clamp(p.x, l, r), clamp(p.y, t, b));
    (0..n)
        .map(|i| {
            let current = points[i];
            let previous = if i == 0 { current } else { points[i - 1] };
            let next = if i + 1 == n { current } else { points[i + 1] };
            let d01 = current.distance(&previous);
            let d12 = next.distance(&current);
            let total = d01 + d12;
            let (s01, s12) = if total > 0.0 { (d01 / total, d12 / total) } else { (0.0, 0.0) };
            let fa = tension * s01;
            let fb = tension * s12;
            let dx = next.x - previous.x;
            let dy = next.y - previous.y;
            ControlPoints {
                previous: cap(PointF::new(current.x - fa * dx, current.y - fa * dy)),
                next: cap(PointF::new(current.x + fb * dx, current.y + fb * dy)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: RectI32 = RectI32::from_ltrb(0, 0, 100, 100);

    #[test]
    fn zero_tension_collapses_onto_vertices() {
        let pts = [PointF::new(0.0, 50.0), PointF::new(50.0, 10.0), PointF::new(100.0, 60.0)];
        for (cp, p) in spline_control_points(&pts, 0.0, AREA).iter().zip(pts.iter()) {
            assert_eq!(cp.previous, *p);
            assert_eq!(cp.next, *p);
        }
    }

    #[test]
    fn control_points_follow_neighbour_direction() {
        let pts = [PointF::new(0.0, 90.0), PointF::new(50.0, 50.0), PointF::new(100.0, 10.0)];
        let cps = spline_control_points(&pts, 0.1, AREA);
        // Collinear input: control points stay on the line, before/after the vertex.
        assert!(cps[1].previous.x < 50.0 && cps[1].next.x > 50.0);
        assert!((cps[1].previous.y - (90.0 - 0.8 * cps[1].previous.x)).abs() < 1e-3);
    }

    #[test]
    fn control_points_are_capped_to_area() {
        let pts = [PointF::new(0.0, 0.0), PointF::new(1.0, 0.0), PointF::new(100.0, 0.0)];
        let cps = spline_control_points(&pts, 0.4, AREA);
        assert!(cps.iter().all(|c| c.previous.x >= 0.0 && c.next.x <= 100.0 && c.previous.y >= 0.0));
    }

    #[test]
    fn single_point_has_degenerate_controls() {
        let pts = [PointF::new(10.0, 10.0)];
        let cps = spline_control_points(&pts, 0.1, AREA);
        assert_eq!(cps[0].previous, pts[0]);
        assert_eq!(cps[0].next, pts[0]);
    }
}
