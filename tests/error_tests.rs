// Error handling tests
// Author: kelexine (https://github.com/kelexine)

use kbeauty_analyzer::error::{AnalysisError, ErrorKind};

#[test]
fn test_error_display_messages() {
    let errors = vec![
        AnalysisError::Config("API_KEY environment variable not set".to_string()),
        AnalysisError::InvalidInput("No image supplied".to_string()),
        AnalysisError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "face.jpg")),
        AnalysisError::Transport("HTTP 503: overloaded".to_string()),
        AnalysisError::Decode("expected value at line 1 column 1".to_string()),
    ];

    for error in errors {
        let display = format!("{}", error);
        assert!(!display.is_empty(), "Error should have display message");
    }
}

#[test]
fn test_kinds() {
    assert_eq!(AnalysisError::Config(String::new()).kind(), ErrorKind::Configuration);
    assert_eq!(AnalysisError::InvalidInput(String::new()).kind(), ErrorKind::Input);
    assert_eq!(AnalysisError::Transport(String::new()).kind(), ErrorKind::Transport);
    assert_eq!(AnalysisError::Decode(String::new()).kind(), ErrorKind::Decode);
}

#[test]
fn test_transport_error_message() {
    let error = AnalysisError::Transport("Connection refused".to_string());
    let display = error.to_string();
    assert!(display.starts_with("Failed to analyze skin."));
    assert!(display.contains("Connection refused"));
}

#[test]
fn test_json_error_becomes_decode_error() {
    let json_err = serde_json::from_str::<serde_json::Value>("{\"a\":").unwrap_err();
    let error: AnalysisError = json_err.into();
    assert_eq!(error.kind(), ErrorKind::Decode);
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let error: AnalysisError = io.into();
    assert_eq!(error.kind(), ErrorKind::Io);
    assert!(error.to_string().contains("denied"));
}
