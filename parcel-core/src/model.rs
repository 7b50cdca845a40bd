use geo::Centroid;
use geo_types::{Coord, LineString, Polygon};
use serde::{Deserialize, Serialize};

/// Minimum number of boundary points for a shape to render as a polygon.
pub const MIN_BOUNDARY_POINTS: usize = 3;

/// A geographically bounded property record with ownership and lease
/// attributes. Immutable once loaded into the registry.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parcel {
    pub id: String,
    /// Ring of `[lat, lng]` pairs; the last point need not repeat the first.
    pub boundary: Vec<[f64; 2]>,
    pub address: String,
    pub owner: String,
    /// Formatted currency string, display-only.
    pub value: String,
    /// Formatted area string, display-only.
    pub size: String,
    pub zoning: String,
    pub year_acquired: i32,
    pub property_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oil_gas_info: Option<OilGasInfo>,
}

/// Energy development data attached to some parcels.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OilGasInfo {
    pub play: String,
    pub formations: String,
    pub well_count: u32,
    /// Formatted percentage string.
    pub royalty_rate: String,
    /// Open-ended status label ("Active", "Held By Production", ...).
    pub lease_status: String,
}

impl Parcel {
    /// Whether the boundary has enough points to draw a filled polygon.
    pub fn is_renderable(&self) -> bool {
        self.boundary.len() >= MIN_BOUNDARY_POINTS
    }

    /// Boundary as a closed `geo` polygon (x = longitude, y = latitude).
    pub fn polygon(&self) -> Polygon<f64> {
        let ring: Vec<Coord<f64>> = self
            .boundary
            .iter()
            .map(|&[lat, lng]| Coord { x: lng, y: lat })
            .collect();
        Polygon::new(LineString::from(ring), vec![])
    }

    /// Boundary centroid as a `(lat, lng)` pair; `None` for degenerate rings.
    pub fn centroid(&self) -> Option<(f64, f64)> {
        self.polygon().centroid().map(|p| (p.y(), p.x()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parcel(boundary: Vec<[f64; 2]>) -> Parcel {
        Parcel {
            id: "OK-TEST-001".to_string(),
            boundary,
            address: "Section 1, T1N R1W".to_string(),
            owner: "Test Owner".to_string(),
            value: "$1".to_string(),
            size: "1 acre".to_string(),
            zoning: "Agricultural".to_string(),
            year_acquired: 2020,
            property_type: "Mineral Rights".to_string(),
            oil_gas_info: None,
        }
    }

    #[test]
    fn renderable_requires_three_points() {
        assert!(!parcel(vec![[35.0, -97.0], [35.1, -97.0]]).is_renderable());
        assert!(parcel(vec![[35.0, -97.0], [35.1, -97.0], [35.1, -97.1]]).is_renderable());
    }

    #[test]
    fn centroid_of_unit_square() {
        let p = parcel(vec![[0.0, 0.0], [0.0, 2.0], [2.0, 2.0], [2.0, 0.0]]);
        let (lat, lng) = p.centroid().unwrap();
        assert!((lat - 1.0).abs() < 1e-9);
        assert!((lng - 1.0).abs() < 1e-9);
    }

    #[test]
    fn json_round_trip_keeps_camel_case_fields() {
        let text = r#"{
            "id": "OK-2024-001",
            "boundary": [[35.0, -97.0], [35.1, -97.0], [35.1, -97.1]],
            "address": "a", "owner": "o", "value": "$1", "size": "1 acre",
            "zoning": "z", "yearAcquired": 2019, "propertyType": "t",
            "oilGasInfo": {
                "play": "SCOOP", "formations": "Woodford", "wellCount": 3,
                "royaltyRate": "18.75%", "leaseStatus": "Active"
            }
        }"#;
        let p: Parcel = serde_json::from_str(text).unwrap();
        assert_eq!(p.year_acquired, 2019);
        assert_eq!(p.oil_gas_info.as_ref().unwrap().well_count, 3);
        let back = serde_json::to_string(&p).unwrap();
        assert!(back.contains("yearAcquired"));
        assert!(back.contains("leaseStatus"));
    }

    #[test]
    fn missing_oil_gas_info_is_tolerated() {
        let text = r#"{
            "id": "OK-2024-009",
            "boundary": [[35.0, -97.0], [35.1, -97.0], [35.1, -97.1]],
            "address": "a", "owner": "o", "value": "$1", "size": "1 acre",
            "zoning": "z", "yearAcquired": 2019, "propertyType": "t"
        }"#;
        let p: Parcel = serde_json::from_str(text).unwrap();
        assert!(p.oil_gas_info.is_none());
    }
}
