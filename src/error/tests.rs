//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod mlb_error_tests {
    use super::*;

    #[tokio::test]
    async fn test_http_error_conversion() {
        // Create a real HTTP error by making a request to an invalid URL
        let client = reqwest::Client::new();
        let result = client
            .get("http://invalid-url-that-does-not-exist.fake")
            .send()
            .await;
        let reqwest_error = result.unwrap_err();
        let mlb_error = MlbError::from(reqwest_error);

        match mlb_error {
            MlbError::Http(_) => (),
            _ => panic!("Expected Http error variant"),
        }
        assert!(MlbError::Json(serde_json::from_str::<u8>("x").unwrap_err()).is_transport());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let mlb_error = MlbError::from(json_error);

        match mlb_error {
            MlbError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let mlb_error = MlbError::from(io_error);

        match mlb_error {
            MlbError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
        assert!(!MlbError::from(io::Error::new(io::ErrorKind::Other, "x")).is_transport());
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u32>().unwrap_err();
        let mlb_error = MlbError::from(parse_error);

        match mlb_error {
            MlbError::InvalidId(_) => (),
            _ => panic!("Expected InvalidId error variant"),
        }
    }

    #[test]
    fn test_status_error_is_transport() {
        let error = MlbError::Status {
            url: "https://statsapi.mlb.com/api/v1/divisions".to_string(),
            status: 500,
            reason: "Internal Server Error".to_string(),
        };

        assert!(error.is_transport());
        let error_string = error.to_string();
        assert!(error_string.contains("500"));
        assert!(error_string.contains("Internal Server Error"));
    }

    #[test]
    fn test_invalid_stat_group_error() {
        let error = MlbError::InvalidStatGroup {
            group: "bowling".to_string(),
        };

        assert_eq!(error.to_string(), "Invalid stat group: bowling");
        assert!(!error.is_transport());
    }

    #[test]
    fn test_shape_error_is_transparent() {
        let error = MlbError::from(ShapeError::missing("Count", "balls"));
        assert_eq!(
            error.to_string(),
            "missing mandatory field `balls` in Count"
        );
        assert!(!error.is_transport());
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let mlb_error = MlbError::from(io_error);

        let error_trait: &dyn std::error::Error = &mlb_error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(MlbError::InvalidStatGroup {
                group: "x".to_string(),
            })
        }

        match test_function().unwrap_err() {
            MlbError::InvalidStatGroup { group } => assert_eq!(group, "x"),
            _ => panic!("Expected InvalidStatGroup error"),
        }
    }
}

#[cfg(test)]
mod shape_error_tests {
    use super::*;

    #[test]
    fn test_within_builds_dotted_path() {
        let error = ShapeError::missing("CodeDesc", "code")
            .within("call")
            .within("details");

        assert_eq!(error.field, "details.call.code");
        assert_eq!(error.leaf_field(), "code");
        assert_eq!(error.type_name, "CodeDesc");
        assert!(error.is_missing());
    }

    #[test]
    fn test_display_without_field() {
        let error = ShapeError::invalid("HittingStats", "", "invalid type: string");
        assert_eq!(
            error.to_string(),
            "invalid value in HittingStats: invalid type: string"
        );
    }

    #[test]
    fn test_within_on_empty_field() {
        let error = ShapeError::invalid("Person", "", "expected an object").within("batter");
        assert_eq!(error.field, "batter");
    }

    #[test]
    fn test_display_includes_stat_type() {
        let error = ShapeError::missing("SeasonSplit", "season").with_stat_type("yearbyyear");
        assert_eq!(
            error.to_string(),
            "missing mandatory field `season` in SeasonSplit (stat type `yearbyyear`)"
        );
    }

    #[test]
    fn test_invalid_kind_display() {
        let error = ShapeError::invalid("Count", "balls", "expected u32, found string");
        assert!(!error.is_missing());
        assert_eq!(
            error.to_string(),
            "invalid value `balls` in Count: expected u32, found string"
        );
    }
}
