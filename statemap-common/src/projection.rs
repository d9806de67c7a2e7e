//! Albers USA composite projection: a conic equal-area projection of the
//! lower 48 with Alaska and Hawaii drawn as insets below it.

use crate::topology::{Geometry, Ring};
use crate::LonLat;
use std::f64::consts::PI;
use std::fmt::Write;

const EPSILON: f64 = 1e-6;

pub const DEFAULT_SCALE: f64 = 1070.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Extent {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

impl Extent {
    fn contains(&self, [x, y]: [f64; 2]) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ConicEqualArea {
    n: f64,
    c: f64,
    r0: f64,
    /// Longitude rotation in radians.
    rotate: f64,
    k: f64,
    /// Screen translation minus the projected centre.
    dx: f64,
    dy: f64,
    center: [f64; 2],
    extent: Extent,
}

impl ConicEqualArea {
    fn new(parallels: [f64; 2], rotate: f64, center: [f64; 2]) -> Self {
        let sy0 = parallels[0].to_radians().sin();
        let n = (sy0 + parallels[1].to_radians().sin()) / 2.0;
        let c = 1.0 + sy0 * (2.0 * n - sy0);
        Self {
            n,
            c,
            r0: c.sqrt() / n,
            rotate: rotate.to_radians(),
            k: DEFAULT_SCALE,
            dx: 0.0,
            dy: 0.0,
            center,
            extent: Extent {
                x0: f64::NEG_INFINITY,
                y0: f64::NEG_INFINITY,
                x1: f64::INFINITY,
                y1: f64::INFINITY,
            },
        }
    }

    fn raw(&self, lambda: f64, phi: f64) -> [f64; 2] {
        let r = (self.c - 2.0 * self.n * phi.sin()).max(0.0).sqrt() / self.n;
        let x = lambda * self.n;
        [r * x.sin(), self.r0 - r * x.cos()]
    }

    /// Fix scale and translation, recentering on the configured centre.
    fn set(&mut self, k: f64, translate: [f64; 2]) {
        self.k = k;
        let [cx, cy] = self.raw(self.center[0].to_radians(), self.center[1].to_radians());
        self.dx = translate[0] - k * cx;
        self.dy = translate[1] + k * cy;
    }

    fn project(&self, [lon, lat]: LonLat) -> [f64; 2] {
        let lambda = wrap_pi(lon.to_radians() + self.rotate);
        let [x, y] = self.raw(lambda, lat.to_radians());
        [self.dx + self.k * x, self.dy - self.k * y]
    }

    fn project_clipped(&self, p: LonLat) -> Option<[f64; 2]> {
        let xy = self.project(p);
        self.extent.contains(xy).then_some(xy)
    }
}

fn wrap_pi(a: f64) -> f64 {
    if a > PI {
        a - 2.0 * PI
    } else if a < -PI {
        a + 2.0 * PI
    } else {
        a
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlbersUsa {
    lower48: ConicEqualArea,
    alaska: ConicEqualArea,
    hawaii: ConicEqualArea,
    scale: f64,
    translate: [f64; 2],
}

impl Default for AlbersUsa {
    fn default() -> Self {
        Self::new(DEFAULT_SCALE, [480.0, 250.0])
    }
}

impl AlbersUsa {
    pub fn new(scale: f64, translate: [f64; 2]) -> Self {
        let mut p = Self {
            lower48: ConicEqualArea::new([29.5, 45.5], 96.0, [-0.6, 38.7]),
            alaska: ConicEqualArea::new([55.0, 65.0], 154.0, [-2.0, 58.5]),
            hawaii: ConicEqualArea::new([8.0, 18.0], 157.0, [-3.0, 19.9]),
            scale,
            translate,
        };
        p.configure();
        p
    }

    /// Projection sized for a `width` x `height` canvas, centred.
    pub fn for_canvas(width: f64, height: f64, scale: f64) -> Self {
        Self::new(scale, [width / 2.0, height / 2.0])
    }

    fn configure(&mut self) {
        let k = self.scale;
        let [x, y] = self.translate;

        self.lower48.set(k, [x, y]);
        self.lower48.extent = Extent {
            x0: x - 0.455 * k,
            y0: y - 0.238 * k,
            x1: x + 0.455 * k,
            y1: y + 0.238 * k,
        };

        self.alaska.set(k * 0.35, [x - 0.307 * k, y + 0.201 * k]);
        self.alaska.extent = Extent {
            x0: x - 0.425 * k + EPSILON,
            y0: y + 0.120 * k + EPSILON,
            x1: x - 0.214 * k - EPSILON,
            y1: y + 0.234 * k - EPSILON,
        };

        self.hawaii.set(k, [x - 0.205 * k, y + 0.212 * k]);
        self.hawaii.extent = Extent {
            x0: x - 0.214 * k + EPSILON,
            y0: y + 0.166 * k + EPSILON,
            x1: x - 0.115 * k - EPSILON,
            y1: y + 0.234 * k - EPSILON,
        };
    }

    fn parts(&self) -> [&ConicEqualArea; 3] {
        [&self.lower48, &self.alaska, &self.hawaii]
    }

    /// Screen position of a point, or `None` when it falls outside every
    /// inset.
    pub fn project(&self, p: LonLat) -> Option<[f64; 2]> {
        self.parts().into_iter().find_map(|part| part.project_clipped(p))
    }

    /// The inset responsible for a ring: the first one that accepts any of
    /// its vertices.
    fn part_for_ring(&self, ring: &[LonLat]) -> Option<&ConicEqualArea> {
        ring.iter()
            .find_map(|&p| self.parts().into_iter().find(|part| part.project_clipped(p).is_some()))
    }

    pub fn project_ring(&self, ring: &[LonLat]) -> Option<Vec<[f64; 2]>> {
        let part = self.part_for_ring(ring)?;
        Some(ring.iter().map(|&p| part.project(p)).collect())
    }

    /// SVG path data for a geometry. Rings outside every inset are dropped.
    pub fn path(&self, geometry: &Geometry) -> String {
        let mut d = String::new();
        for polygon in geometry.polygons() {
            for ring in polygon {
                self.write_ring(&mut d, ring);
            }
        }
        d
    }

    fn write_ring(&self, d: &mut String, ring: &Ring) {
        let Some(points) = self.project_ring(ring) else {
            return;
        };
        for (i, [x, y]) in points.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(d, "{cmd}{x:.2},{y:.2}");
        }
        if !points.is_empty() {
            d.push('Z');
        }
    }
}
