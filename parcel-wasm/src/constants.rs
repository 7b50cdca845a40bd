//! Fixed configuration: viewport defaults, tile sources and the mapping
//! library CDN endpoints. No CLI and no environment variables; this demo
//! is configured entirely at compile time.

use crate::surface::TileSource;

/// Viewport center used when the registry has no boundaries to derive
/// one from.
pub const FALLBACK_CENTER: (f64, f64) = (35.282, -97.517);

/// Initial zoom level.
pub const MAP_ZOOM: f64 = 15.0;

/// Delay before the post-initialization viewport size recalculation (ms).
pub const SIZE_REFRESH_DELAY_MS: i32 = 100;

pub const PRIMARY_TILES: TileSource = TileSource {
    url_template: "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
    attribution: "© OpenStreetMap contributors",
    max_zoom: 19.0,
    cross_origin: true,
};

pub const FALLBACK_TILES: TileSource = TileSource {
    url_template: "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png",
    attribution: "© OpenStreetMap contributors © CARTO",
    max_zoom: 19.0,
    cross_origin: false,
};

pub const LEAFLET_JS_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.js";
pub const LEAFLET_CSS_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.css";
