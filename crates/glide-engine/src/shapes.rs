use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Named point-set library for a sketch, loaded from a JSON string at
/// runtime. This is an input pathway only — the engines never write state
/// back out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeManifest {
    /// Shape lookup: name → point sequence.
    pub shapes: HashMap<String, ShapeDef>,
}

/// A single named polyline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeDef {
    /// Points as `[x, y]` pairs.
    pub points: Vec<[f32; 2]>,
    /// Whether the polyline is a closed loop (last point equals the first).
    #[serde(default)]
    pub closed: bool,
}

impl ShapeManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Look up a shape by name.
    pub fn get(&self, name: &str) -> Option<&ShapeDef> {
        self.shapes.get(name)
    }
}

impl ShapeDef {
    /// The points as a Vec2 sequence, ready for the animator or morpher.
    pub fn to_points(&self) -> Vec<Vec2> {
        self.points.iter().map(|p| Vec2::new(p[0], p[1])).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_manifest() {
        let json = r#"{
            "shapes": {
                "track": {
                    "points": [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0]],
                    "closed": false
                },
                "ring": {
                    "points": [[0.0, -1.0], [1.0, 0.0], [0.0, 1.0], [0.0, -1.0]],
                    "closed": true
                }
            }
        }"#;
        let manifest = ShapeManifest::from_json(json).unwrap();
        assert_eq!(manifest.shapes.len(), 2);

        let ring = manifest.get("ring").unwrap();
        assert!(ring.closed);
        let points = ring.to_points();
        assert_eq!(points.len(), 4);
        assert_eq!(points[1], Vec2::new(1.0, 0.0));
    }

    #[test]
    fn closed_defaults_to_false() {
        let json = r#"{
            "shapes": {
                "line": { "points": [[0.0, 0.0], [5.0, 5.0]] }
            }
        }"#;
        let manifest = ShapeManifest::from_json(json).unwrap();
        assert!(!manifest.get("line").unwrap().closed);
    }
}
