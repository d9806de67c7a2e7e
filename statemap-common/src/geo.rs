//! Spherical centroid of polygon geometry.

use crate::topology::Geometry;
use crate::LonLat;

const EPSILON2: f64 = 1e-12;

#[derive(Default)]
struct Accumulator {
    // area-weighted
    x2: f64,
    y2: f64,
    z2: f64,
    // edge-length-weighted, used for degenerate (zero-area) input
    w1: f64,
    x1: f64,
    y1: f64,
    z1: f64,
}

impl Accumulator {
    fn ring(&mut self, ring: &[LonLat]) {
        let Some(&first) = ring.first() else {
            return;
        };
        let mut prev = to_cartesian(first);

        for &pt in ring.iter().skip(1).chain(std::iter::once(&first)) {
            let cur = to_cartesian(pt);
            let c = cross(prev, cur);
            let m = (c[0] * c[0] + c[1] * c[1] + c[2] * c[2]).sqrt();
            let w = m.min(1.0).asin();
            let v = if m > 0.0 { -w / m } else { 0.0 };
            self.x2 += v * c[0];
            self.y2 += v * c[1];
            self.z2 += v * c[2];

            let len = angle_between(prev, cur);
            self.w1 += len;
            self.x1 += len * (prev[0] + cur[0]);
            self.y1 += len * (prev[1] + cur[1]);
            self.z1 += len * (prev[2] + cur[2]);
            prev = cur;
        }
    }

    fn finish(&self) -> Option<LonLat> {
        let line = [self.x1, self.y1, self.z1];
        let area = [self.x2, self.y2, self.z2];
        let m2 = dot(area, area);

        let v = if m2 < EPSILON2 {
            if self.w1 == 0.0 {
                return None;
            }
            line
        } else if dot(area, line) < 0.0 {
            // Rings wound the other way round still describe the same
            // region; flip back onto the boundary's hemisphere.
            [-area[0], -area[1], -area[2]]
        } else {
            area
        };

        let m = dot(v, v).sqrt();
        if m == 0.0 {
            return None;
        }
        Some([
            v[1].atan2(v[0]).to_degrees(),
            (v[2] / m).clamp(-1.0, 1.0).asin().to_degrees(),
        ])
    }
}

/// Centroid on the sphere, in degrees. `None` for empty geometry.
pub fn centroid(geometry: &Geometry) -> Option<LonLat> {
    let mut acc = Accumulator::default();
    for polygon in geometry.polygons() {
        for ring in polygon {
            acc.ring(ring);
        }
    }
    acc.finish()
}

fn to_cartesian([lon, lat]: LonLat) -> [f64; 3] {
    let (lambda, phi) = (lon.to_radians(), lat.to_radians());
    let cos_phi = phi.cos();
    [cos_phi * lambda.cos(), cos_phi * lambda.sin(), phi.sin()]
}

fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn angle_between(a: [f64; 3], b: [f64; 3]) -> f64 {
    let c = cross(a, b);
    dot(c, c).sqrt().atan2(dot(a, b))
}
