//! GeoJSON parser for the USGS earthquake feed.
//!
//! Only the fields the charts read are modelled; everything else in the feed
//! (metadata, bbox, the many other `properties` keys) is ignored.

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Properties,
}

/// A GeoJSON point: `[longitude, latitude, depth_km]`.
#[derive(Debug, Default, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub coordinates: Vec<Option<f64>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Properties {
    #[serde(default)]
    pub mag: Option<f64>,
    /// Origin time in milliseconds since the Unix epoch.
    #[serde(default)]
    pub time: Option<i64>,
}

/// Decodes a GeoJSON `FeatureCollection` from raw bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not JSON or carry no `features` array.
pub fn parse_feed(bytes: &[u8]) -> Result<FeatureCollection> {
    serde_json::from_slice(bytes).context("feed body is not a GeoJSON FeatureCollection")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_collection() {
        let feed = parse_feed(br#"{"type":"FeatureCollection","features":[]}"#).unwrap();
        assert!(feed.features.is_empty());
    }

    #[test]
    fn test_parse_invalid_bytes() {
        let invalid_bytes = vec![0xFF, 0xFE, 0x00, 0x01];
        assert!(parse_feed(&invalid_bytes).is_err());
    }

    #[test]
    fn test_parse_requires_features() {
        assert!(parse_feed(br#"{"type":"FeatureCollection"}"#).is_err());
    }

    #[test]
    fn test_parse_usgs_feature() {
        let body = br#"{
            "type": "FeatureCollection",
            "metadata": {"generated": 1700000100000, "count": 1},
            "features": [{
                "type": "Feature",
                "properties": {"mag": 4.3, "place": "10 km N of Nowhere", "time": 1700000000000},
                "geometry": {"type": "Point", "coordinates": [10.5, -5.2, 12.0]},
                "id": "us7000abcd"
            }]
        }"#;

        let feed = parse_feed(body).unwrap();
        assert_eq!(feed.features.len(), 1);

        let feature = &feed.features[0];
        assert_eq!(feature.properties.mag, Some(4.3));
        assert_eq!(feature.properties.time, Some(1_700_000_000_000));
        let geometry = feature.geometry.as_ref().unwrap();
        assert_eq!(geometry.coordinates, vec![Some(10.5), Some(-5.2), Some(12.0)]);
    }

    #[test]
    fn test_parse_tolerates_nulls_and_gaps() {
        let body = br#"{"features": [
            {"properties": {"mag": null, "time": 1700000000000}, "geometry": null},
            {"properties": {}, "geometry": {"coordinates": [1.0, null]}}
        ]}"#;

        let feed = parse_feed(body).unwrap();
        assert_eq!(feed.features.len(), 2);
        assert!(feed.features[0].properties.mag.is_none());
        assert!(feed.features[0].geometry.is_none());
        assert!(feed.features[1].properties.time.is_none());
        assert_eq!(
            feed.features[1].geometry.as_ref().unwrap().coordinates,
            vec![Some(1.0), None]
        );
    }
}
