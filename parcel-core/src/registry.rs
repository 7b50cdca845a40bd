use std::collections::HashSet;

use geo::{Area, BoundingRect};
use geo_types::{Coord, Rect};
use serde::Deserialize;
use thiserror::Error;

use crate::model::{MIN_BOUNDARY_POINTS, Parcel};

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to parse parcel registry: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate parcel id `{0}`")]
    DuplicateId(String),
    #[error("parcel `{id}` has a degenerate boundary ({points} points)")]
    DegenerateBoundary { id: String, points: usize },
}

/// On-disk registry layout.
#[derive(Debug, Default, Deserialize)]
struct RegistryFile {
    region: Option<String>,
    #[serde(default)]
    parcels: Vec<Parcel>,
}

/// The fixed set of parcels shown on the map. Loaded once at startup,
/// never mutated afterwards.
#[derive(Clone, Debug, Default)]
pub struct ParcelRegistry {
    region: Option<String>,
    parcels: Vec<Parcel>,
}

impl ParcelRegistry {
    /// Parse and validate a registry document. Ids must be unique and
    /// every boundary must describe a real polygon.
    pub fn from_json(text: &str) -> Result<Self, RegistryError> {
        let file: RegistryFile = serde_json::from_str(text)?;
        let mut seen = HashSet::new();
        for parcel in &file.parcels {
            if !seen.insert(parcel.id.clone()) {
                return Err(RegistryError::DuplicateId(parcel.id.clone()));
            }
            let degenerate = parcel.boundary.len() < MIN_BOUNDARY_POINTS
                || parcel.polygon().unsigned_area() == 0.0;
            if degenerate {
                return Err(RegistryError::DegenerateBoundary {
                    id: parcel.id.clone(),
                    points: parcel.boundary.len(),
                });
            }
        }
        Ok(Self {
            region: file.region,
            parcels: file.parcels,
        })
    }

    /// Human-readable region label, if the registry carries one.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn parcels(&self) -> &[Parcel] {
        &self.parcels
    }

    pub fn get(&self, id: &str) -> Option<&Parcel> {
        self.parcels.iter().find(|p| p.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.parcels.iter().map(|p| p.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.parcels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parcels.is_empty()
    }

    /// Center of the bounding rectangle of every boundary, as `(lat, lng)`.
    /// Seeds the initial viewport; `None` when the registry is empty.
    pub fn view_center(&self) -> Option<(f64, f64)> {
        let mut bounds: Option<Rect<f64>> = None;
        for parcel in &self.parcels {
            if let Some(rect) = parcel.polygon().bounding_rect() {
                bounds = Some(match bounds {
                    Some(acc) => merge(acc, rect),
                    None => rect,
                });
            }
        }
        bounds.map(|rect| {
            let c = rect.center();
            (c.y, c.x)
        })
    }
}

fn merge(a: Rect<f64>, b: Rect<f64>) -> Rect<f64> {
    Rect::new(
        Coord {
            x: a.min().x.min(b.min().x),
            y: a.min().y.min(b.min().y),
        },
        Coord {
            x: a.max().x.max(b.max().x),
            y: a.max().y.max(b.max().y),
        },
    )
}
