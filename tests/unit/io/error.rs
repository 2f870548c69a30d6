//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use regionfill::RegionError;
    use regionfill::io::error::{invalid_parameters, invalid_partition};
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = RegionError::FileSystem {
            path: "/tmp/regions.png".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(invalid_partition(&"broken").source().is_none());
    }

    // Tests InvalidParameters error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameters_error() {
        let error = invalid_parameters("grid_size", &0, &"must be positive");

        let message = error.to_string();
        assert!(message.contains("grid_size"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be positive"));
    }

    // Tests UnsatisfiablePartition reports both counts
    // Verified by omitting the cell count from the message
    #[test]
    fn test_unsatisfiable_partition_error() {
        let error = RegionError::UnsatisfiablePartition {
            num_regions: 17,
            cell_count: 16,
        };

        let message = error.to_string();
        assert!(message.contains("17 regions"));
        assert!(message.contains("16 cells"));
    }

    // Tests conversions from library errors keep the source
    #[test]
    fn test_from_conversions() {
        let io_error: RegionError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied").into();
        assert!(matches!(io_error, RegionError::FileSystem { .. }));
        assert!(io_error.to_string().contains("access denied"));

        let image_error: RegionError =
            image::ImageError::IoError(std::io::Error::other("encoder failed")).into();
        assert!(matches!(image_error, RegionError::ImageExport { .. }));
        assert!(image_error.source().is_some());
    }

    // Tests InvalidPartition formatting
    #[test]
    fn test_invalid_partition_error() {
        let message = invalid_partition(&"region 2 is empty").to_string();
        assert_eq!(message, "Invalid partition: region 2 is empty");
    }
}
