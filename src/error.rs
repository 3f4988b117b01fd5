//! Error types for floodtiles.
//!
//! Every variant that originates from a file carries the offending path so a
//! failed run can point at the exact catalog or tile that broke it.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for floodtiles operations.
#[derive(Error, Debug)]
pub enum FloodTilesError {
    /// IO errors
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON syntax or shape errors in a catalog or config file
    #[error("JSON error in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Report serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Catalog record without a `geometry.coordinates[0]` ring
    #[error("Missing geometry in {}: {message}", path.display())]
    MissingGeometry { path: PathBuf, message: String },

    /// Invalid coordinate errors
    #[error("Invalid coordinates in {}: {message}", path.display())]
    InvalidCoordinates { path: PathBuf, message: String },

    /// Catalog ring with no positions
    #[error("Empty coordinate ring in {}", path.display())]
    EmptyRing { path: PathBuf },

    /// Required project subdirectory is absent
    #[error("Directory not found: {}", path.display())]
    MissingDirectory { path: PathBuf },

    /// Image tile without its `_label.json` sidecar
    #[error("No catalog {} for tile {}", catalog.display(), image.display())]
    MissingCatalog { image: PathBuf, catalog: PathBuf },

    /// Region selection matched nothing
    #[error("No tiles found for region '{region}' in {}", images_dir.display())]
    NoTilesForRegion { region: String, images_dir: PathBuf },

    /// Tile image could not be opened or decoded
    #[error("Cannot decode image {}: {source}", path.display())]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Plot backend errors
    #[error("Render error: {message}")]
    Render { message: String },

    /// Coastline overlay parse errors
    #[error("GeoJSON error in {}: {source}", path.display())]
    Geojson {
        path: PathBuf,
        #[source]
        source: geojson::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },
}

impl FloodTilesError {
    /// Wrap an IO error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FloodTilesError::Io {
            path: path.into(),
            source,
        }
    }

    /// Wrap a plotters backend error
    pub fn render(err: impl std::fmt::Display) -> Self {
        FloodTilesError::Render {
            message: err.to_string(),
        }
    }
}

/// Convenience type alias for Results with FloodTilesError
pub type Result<T> = std::result::Result<T, FloodTilesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_path() {
        let err = FloodTilesError::EmptyRing {
            path: PathBuf::from("catalog/Spain_01_label.json"),
        };
        assert!(err.to_string().contains("catalog/Spain_01_label.json"));

        let err = FloodTilesError::NoTilesForRegion {
            region: "Spain".to_string(),
            images_dir: PathBuf::from("proj/images"),
        };
        let message = err.to_string();
        assert!(message.contains("'Spain'"));
        assert!(message.contains("proj/images"));
    }

    #[test]
    fn test_io_helper_keeps_source() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = FloodTilesError::io("a/b.json", source);
        match err {
            FloodTilesError::Io { path, source } => {
                assert_eq!(path, PathBuf::from("a/b.json"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
