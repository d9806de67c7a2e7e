use crate::{LonLat, RegionRecord};

/// Manual label displacement, in screen units, for regions too small or
/// crowded for a centroid label.
pub const LABEL_OFFSETS: &[(&str, (f64, f64))] = &[
    ("VT", (-10.0, -90.0)),
    ("NH", (100.0, -70.0)),
    ("MA", (100.0, -50.0)),
    ("RI", (130.0, 2.0)),
    ("CT", (60.0, 7.0)),
    ("NJ", (170.0, 1.0)),
    ("DE", (50.0, -15.0)),
    ("MD", (140.0, 20.0)),
    ("DC", (49.0, 50.0)),
];

/// Exclusive longitude window for labels. Keeps territories off the label
/// layer.
pub const LABEL_MIN_LON: f64 = -160.0;
pub const LABEL_MAX_LON: f64 = -67.0;

#[derive(Debug, Clone, PartialEq)]
pub enum LabelPlacement {
    /// Text sits directly on the centroid.
    Centroid { name: String, at: LonLat },
    /// Text is displaced by `(dx, dy)` with a leader back to `subject`.
    Annotated {
        name: String,
        subject: LonLat,
        dx: f64,
        dy: f64,
    },
}

impl LabelPlacement {
    pub fn name(&self) -> &str {
        match self {
            LabelPlacement::Centroid { name, .. } | LabelPlacement::Annotated { name, .. } => name,
        }
    }

    pub fn anchor(&self) -> LonLat {
        match self {
            LabelPlacement::Centroid { at, .. } => *at,
            LabelPlacement::Annotated { subject, .. } => *subject,
        }
    }

    pub fn has_leader(&self) -> bool {
        matches!(self, LabelPlacement::Annotated { .. })
    }
}

pub fn label_offset(code: &str) -> Option<(f64, f64)> {
    LABEL_OFFSETS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, offset)| *offset)
}

pub fn in_label_bounds(centroid: LonLat) -> bool {
    centroid[0] > LABEL_MIN_LON && centroid[0] < LABEL_MAX_LON
}

/// Decide where a region's label goes. `None` when the region has no
/// fixture record or its centroid falls outside the label window.
pub fn place_label(record: Option<&RegionRecord>, centroid: LonLat) -> Option<LabelPlacement> {
    let record = record?;
    if !in_label_bounds(centroid) {
        return None;
    }

    let name = record.name.clone();
    Some(match label_offset(&record.id) {
        Some((dx, dy)) => LabelPlacement::Annotated {
            name,
            subject: centroid,
            dx,
            dy,
        },
        None => LabelPlacement::Centroid { name, at: centroid },
    })
}

/// SVG path for the leader, drawn inside a group translated to the label
/// position (centroid + offset).
pub fn leader_path(dx: f64, dy: f64) -> String {
    format!("M0,0 L{},{}", -dx, -dy)
}
