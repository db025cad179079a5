//! Tests for error display formatting and source chaining

#[cfg(test)]
mod tests {
    use mapstitch::io::error::{StitchError, invalid_parameter};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests the user-facing message for a missing input directory
    // Verified by altering the format string
    #[test]
    fn test_directory_not_found_display() {
        let err = StitchError::DirectoryNotFound {
            path: PathBuf::from("missing_tiles"),
        };

        assert_eq!(err.to_string(), "directory not found - 'missing_tiles'");
    }

    // Tests that decode errors name the offending tile file
    // Verified by dropping the path from the message
    #[test]
    fn test_tile_decode_display_names_path() {
        let err = StitchError::TileDecode {
            path: PathBuf::from("tiles/corrupt.png"),
            source: image::ImageError::IoError(std::io::Error::other("bad data")),
        };

        let message = err.to_string();
        assert!(message.contains("tiles/corrupt.png"));
        assert!(message.starts_with("failed to decode tile"));
    }

    // Tests the invalid parameter helper and its message shape
    // Verified by swapping the helper's field order
    #[test]
    fn test_invalid_parameter_helper() {
        let err = invalid_parameter("columns", &0, &"column count must be non-zero");

        assert_eq!(
            err.to_string(),
            "invalid parameter 'columns' = '0': column count must be non-zero"
        );
    }

    // Tests source chaining for wrapped image and I/O errors
    // Verified by returning None from the source implementation
    #[test]
    fn test_source_chain() {
        let decode = StitchError::TileDecode {
            path: PathBuf::from("a.png"),
            source: image::ImageError::IoError(std::io::Error::other("inner")),
        };
        assert!(decode.source().is_some());

        let filesystem = StitchError::FileSystem {
            path: PathBuf::from("tiles"),
            operation: "read directory",
            source: std::io::Error::other("inner"),
        };
        assert!(filesystem.source().is_some());

        let missing = StitchError::DirectoryNotFound {
            path: PathBuf::from("tiles"),
        };
        assert!(missing.source().is_none());
    }

    // Tests the blanket conversion used by the ? operator on I/O results
    // Verified by converting into a different variant
    #[test]
    fn test_io_error_conversion() {
        let err: StitchError = std::io::Error::other("boom").into();

        assert!(matches!(err, StitchError::FileSystem { .. }));
    }
}
