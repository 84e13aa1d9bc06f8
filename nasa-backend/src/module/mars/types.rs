use nasa_common::Photo;
use serde::Deserialize;

/// Body of the Mars Rover Photos endpoint. Entries stay untyped so one bad
/// record does not sink the whole response.
#[derive(Debug, Deserialize)]
pub struct PhotosResponse {
    #[serde(default)]
    pub photos: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
pub struct RawPhoto {
    #[serde(default)]
    pub img_src: Option<String>,
    #[serde(default)]
    pub rover: Option<RawRover>,
    #[serde(default)]
    pub mosaic: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct RawRover {
    #[serde(default)]
    pub name: Option<String>,
}

impl RawPhoto {
    /// `None` when the source URL or rover name is missing.
    pub fn into_photo(self) -> Option<Photo> {
        let source_url = self.img_src.filter(|s| !s.is_empty())?;
        let rover_name = self.rover.and_then(|r| r.name)?;
        Some(Photo {
            source_url,
            rover_name,
            is_mosaic: self.mosaic.unwrap_or(false),
        })
    }
}

impl PhotosResponse {
    /// Decode every well-formed entry, in upstream order, skipping the rest.
    pub fn into_photos(self) -> Vec<Photo> {
        let entries = self.photos.unwrap_or_default();
        let total = entries.len();

        let photos: Vec<Photo> = entries
            .into_iter()
            .filter_map(|value| serde_json::from_value::<RawPhoto>(value).ok())
            .filter_map(RawPhoto::into_photo)
            .collect();

        if photos.len() < total {
            tracing::debug!("Skipped {} malformed photo records", total - photos.len());
        }
        photos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_keeps_order_and_skips_malformed() {
        let body = r#"{
            "photos": [
                {"id": 1, "img_src": "https://mars.nasa.gov/a.jpg", "rover": {"name": "Curiosity"}},
                {"id": 2, "rover": {"name": "Curiosity"}},
                {"id": 3, "img_src": "https://mars.nasa.gov/b.jpg", "rover": {"name": "Curiosity"}, "mosaic": true},
                {"id": 4, "img_src": "https://mars.nasa.gov/c.jpg"},
                "garbage",
                {"id": 5, "img_src": "https://mars.nasa.gov/d.jpg", "rover": {"name": "Curiosity"}, "mosaic": "yes"}
            ]
        }"#;
        let response: PhotosResponse = serde_json::from_str(body).unwrap();
        let photos = response.into_photos();

        assert_eq!(photos.len(), 2);
        assert_eq!(photos[0], Photo::new("https://mars.nasa.gov/a.jpg", "Curiosity"));
        assert_eq!(photos[1], Photo::new("https://mars.nasa.gov/b.jpg", "Curiosity").mosaic());
    }

    #[test]
    fn test_missing_or_null_photos_is_empty() {
        let response: PhotosResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_photos().is_empty());

        let response: PhotosResponse = serde_json::from_str(r#"{"photos": null}"#).unwrap();
        assert!(response.into_photos().is_empty());
    }
}
