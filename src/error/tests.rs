//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod scrapl_error_tests {
    use super::*;

    #[test]
    fn test_http_error_conversion() {
        // A malformed URL fails while building the request, no network needed
        let reqwest_error = reqwest::Client::new()
            .get("not a url")
            .build()
            .unwrap_err();
        let error = ScraplError::from(reqwest_error);

        match error {
            ScraplError::Http(_) => (),
            _ => panic!("Expected Http error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = ScraplError::from(json_error);

        match error {
            ScraplError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = ScraplError::from(io_error);

        match error {
            ScraplError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_status_error_message() {
        let error = ScraplError::Status {
            url: "https://example.test/api/fixtures/".to_string(),
            status: 404,
        };

        let error_string = error.to_string();
        assert!(error_string.contains("HTTP 404"));
        assert!(error_string.contains("/api/fixtures/"));
    }

    #[test]
    fn test_dependency_cycle_message() {
        let error = ScraplError::DependencyCycle {
            path: vec!["a".to_string(), "b".to_string(), "a".to_string()],
        };
        assert_eq!(error.to_string(), "Scraper dependency cycle: a -> b -> a");
    }

    #[test]
    fn test_missing_api_key_message() {
        let error = ScraplError::MissingApiKey {
            env_var: "API_KEY".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Odds API key not provided"));
        assert!(error_string.contains("API_KEY"));
    }

    #[test]
    fn test_unknown_scraper_message() {
        let error = ScraplError::UnknownScraper {
            name: "weather".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown scraper type: weather");
    }

    #[test]
    fn test_no_scrapers_message() {
        assert_eq!(ScraplError::NoScrapers.to_string(), "No scrapers configured");
    }
}

#[cfg(test)]
mod transient_tests {
    use super::*;

    fn status(code: u16) -> ScraplError {
        ScraplError::Status {
            url: "http://localhost/".to_string(),
            status: code,
        }
    }

    #[test]
    fn test_server_errors_are_transient() {
        assert!(status(500).is_transient());
        assert!(status(503).is_transient());
        assert!(status(429).is_transient());
    }

    #[test]
    fn test_client_errors_are_not_transient() {
        assert!(!status(400).is_transient());
        assert!(!status(401).is_transient());
        assert!(!status(404).is_transient());
    }

    #[test]
    fn test_parse_errors_are_not_transient() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(!ScraplError::from(json_error).is_transient());
        assert!(!ScraplError::shape("missing teams").is_transient());
    }
}
