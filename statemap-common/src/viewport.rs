pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 8.0;
const WHEEL_STEP: f64 = 1.1;

/// Zoom and pan applied to the map group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub zoom: f64,
    pub x: f64,
    pub y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            x: 0.0,
            y: 0.0,
        }
    }
}

impl Viewport {
    /// Zoom by one wheel notch around `(cx, cy)`, keeping that point fixed.
    /// Negative `delta` zooms in.
    pub fn wheel(&mut self, delta: f64, cx: f64, cy: f64) {
        let factor = if delta < 0.0 { WHEEL_STEP } else { 1.0 / WHEEL_STEP };
        self.zoom_to(self.zoom * factor, cx, cy);
    }

    pub fn zoom_to(&mut self, zoom: f64, cx: f64, cy: f64) {
        let zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        let ratio = zoom / self.zoom;
        self.x = cx - (cx - self.x) * ratio;
        self.y = cy - (cy - self.y) * ratio;
        self.zoom = zoom;
    }

    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn transform(&self) -> String {
        format!(
            "translate({:.2} {:.2}) scale({:.4})",
            self.x, self.y, self.zoom
        )
    }
}

/// Maps page pixels onto the SVG view box. The view box is scaled to fit
/// the rendered box and centred (`xMidYMid meet`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasFit {
    origin: [f64; 2],
    offset: [f64; 2],
    scale: f64,
}

impl Default for CanvasFit {
    fn default() -> Self {
        Self {
            origin: [0.0, 0.0],
            offset: [0.0, 0.0],
            scale: 1.0,
        }
    }
}

impl CanvasFit {
    /// `origin` and `rendered` are the element's client rect; `canvas` is
    /// the view box size. `None` while the element has no size.
    pub fn new(origin: [f64; 2], rendered: [f64; 2], canvas: [f64; 2]) -> Option<Self> {
        if rendered[0] <= 0.0 || rendered[1] <= 0.0 || canvas[0] <= 0.0 || canvas[1] <= 0.0 {
            return None;
        }
        let scale = (rendered[0] / canvas[0]).min(rendered[1] / canvas[1]);
        Some(Self {
            origin,
            offset: [
                (rendered[0] - canvas[0] * scale) / 2.0,
                (rendered[1] - canvas[1] * scale) / 2.0,
            ],
            scale,
        })
    }

    pub fn to_canvas(&self, client: [f64; 2]) -> [f64; 2] {
        [
            (client[0] - self.origin[0] - self.offset[0]) / self.scale,
            (client[1] - self.origin[1] - self.offset[1]) / self.scale,
        ]
    }

    pub fn to_canvas_delta(&self, delta: [f64; 2]) -> [f64; 2] {
        [delta[0] / self.scale, delta[1] / self.scale]
    }
}

/// Pointer travel, in page pixels, after which a press counts as a drag.
pub const DRAG_THRESHOLD: f64 = 3.0;

/// Press/move/release tracking for drag-to-pan. A press that travelled past
/// [`DRAG_THRESHOLD`] swallows the click that ends it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragGesture {
    last: Option<[f64; 2]>,
    travelled: f64,
    dragged: bool,
}

impl DragGesture {
    pub fn press(&mut self, at: [f64; 2]) {
        *self = Self {
            last: Some(at),
            ..Self::default()
        };
    }

    /// Movement since the previous position while pressed.
    pub fn move_to(&mut self, at: [f64; 2]) -> Option<[f64; 2]> {
        let last = self.last?;
        let delta = [at[0] - last[0], at[1] - last[1]];
        self.travelled += delta[0].hypot(delta[1]);
        if self.travelled > DRAG_THRESHOLD {
            self.dragged = true;
        }
        self.last = Some(at);
        Some(delta)
    }

    pub fn release(&mut self) {
        self.last = None;
    }

    pub fn is_pressed(&self) -> bool {
        self.last.is_some()
    }

    /// Whether the last gesture was a drag. Reading it clears it.
    pub fn take_dragged(&mut self) -> bool {
        std::mem::take(&mut self.dragged)
    }
}
