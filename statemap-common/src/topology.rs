//! Minimal TopoJSON decoding: quantised, delta-encoded arcs stitched back
//! into polygon rings.

use crate::LonLat;
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

pub type Ring = Vec<LonLat>;

#[derive(Error, Debug)]
pub enum TopologyError {
    #[error("Invalid topology JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Topology has no object named {0:?}")]
    MissingObject(String),

    #[error("Arc index {0} out of range")]
    ArcIndex(i64),

    #[error("Malformed arc position in arc {0}")]
    Position(usize),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Transform {
    pub scale: [f64; 2],
    pub translate: [f64; 2],
}

#[derive(Debug, Clone, Deserialize)]
pub struct Topology {
    #[serde(default)]
    pub transform: Option<Transform>,
    pub objects: HashMap<String, TopoObject>,
    pub arcs: Vec<Vec<Vec<f64>>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum TopoObject {
    GeometryCollection {
        geometries: Vec<TopoObject>,
    },
    Polygon {
        arcs: Vec<Vec<i64>>,
        #[serde(default)]
        id: Option<serde_json::Value>,
        #[serde(default)]
        properties: Option<Properties>,
    },
    MultiPolygon {
        arcs: Vec<Vec<Vec<i64>>>,
        #[serde(default)]
        id: Option<serde_json::Value>,
        #[serde(default)]
        properties: Option<Properties>,
    },
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Properties {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Polygon(Vec<Ring>),
    MultiPolygon(Vec<Vec<Ring>>),
}

impl Geometry {
    /// Every polygon as a list of rings, exterior first.
    pub fn polygons(&self) -> Vec<&[Ring]> {
        match self {
            Geometry::Polygon(rings) => vec![rings.as_slice()],
            Geometry::MultiPolygon(polys) => polys.iter().map(Vec::as_slice).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub id: String,
    pub name: Option<String>,
    pub geometry: Geometry,
}

impl Topology {
    pub fn from_json(json: &str) -> Result<Self, TopologyError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Absolute positions for every arc, with the quantisation transform
    /// applied.
    pub fn decode_arcs(&self) -> Result<Vec<Vec<LonLat>>, TopologyError> {
        self.arcs
            .iter()
            .enumerate()
            .map(|(i, arc)| {
                let (mut x, mut y) = (0.0, 0.0);
                arc.iter()
                    .map(|pos| {
                        let (px, py) = match pos.as_slice() {
                            [px, py, ..] => (*px, *py),
                            _ => return Err(TopologyError::Position(i)),
                        };
                        Ok(match &self.transform {
                            Some(t) => {
                                x += px;
                                y += py;
                                [x * t.scale[0] + t.translate[0], y * t.scale[1] + t.translate[1]]
                            }
                            None => [px, py],
                        })
                    })
                    .collect()
            })
            .collect()
    }

    /// Convert a named object into polygon features. Non-areal geometries
    /// are skipped.
    pub fn features(&self, object: &str) -> Result<Vec<Feature>, TopologyError> {
        let root = self
            .objects
            .get(object)
            .ok_or_else(|| TopologyError::MissingObject(object.to_string()))?;
        let arcs = self.decode_arcs()?;

        let mut out = Vec::new();
        collect_features(root, &arcs, &mut out)?;
        Ok(out)
    }
}

fn collect_features(
    obj: &TopoObject,
    arcs: &[Vec<LonLat>],
    out: &mut Vec<Feature>,
) -> Result<(), TopologyError> {
    match obj {
        TopoObject::GeometryCollection { geometries } => {
            for g in geometries {
                collect_features(g, arcs, out)?;
            }
        }
        TopoObject::Polygon {
            arcs: rings,
            id,
            properties,
        } => {
            let rings = rings
                .iter()
                .map(|r| stitch_ring(r, arcs))
                .collect::<Result<_, _>>()?;
            out.push(Feature {
                id: id_string(id.as_ref()),
                name: properties.as_ref().and_then(|p| p.name.clone()),
                geometry: Geometry::Polygon(rings),
            });
        }
        TopoObject::MultiPolygon {
            arcs: polys,
            id,
            properties,
        } => {
            let polys = polys
                .iter()
                .map(|rings| {
                    rings
                        .iter()
                        .map(|r| stitch_ring(r, arcs))
                        .collect::<Result<Vec<_>, _>>()
                })
                .collect::<Result<_, _>>()?;
            out.push(Feature {
                id: id_string(id.as_ref()),
                name: properties.as_ref().and_then(|p| p.name.clone()),
                geometry: Geometry::MultiPolygon(polys),
            });
        }
        TopoObject::Unsupported => {
            tracing::debug!("Skipping non-polygon topology geometry");
        }
    }
    Ok(())
}

/// Join arcs into a closed ring. A negative index `i` refers to arc `!i`
/// traversed backwards; consecutive arcs share their joint point.
pub fn stitch_ring(indices: &[i64], arcs: &[Vec<LonLat>]) -> Result<Ring, TopologyError> {
    let mut points: Ring = Vec::new();
    for &i in indices {
        let (idx, reversed) = if i < 0 { (!i, true) } else { (i, false) };
        let arc = usize::try_from(idx)
            .ok()
            .and_then(|idx| arcs.get(idx))
            .ok_or(TopologyError::ArcIndex(i))?;

        points.pop();
        if reversed {
            points.extend(arc.iter().rev().copied());
        } else {
            points.extend(arc.iter().copied());
        }
    }

    if let Some(&first) = points.first() {
        while points.len() < 4 {
            points.push(first);
        }
    }
    Ok(points)
}

fn id_string(id: Option<&serde_json::Value>) -> String {
    match id {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}
