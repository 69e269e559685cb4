use chrono::{TimeZone, Utc};
use sma_quarantine::*;

// --- Mid ---

#[test]
fn test_mid_parse() {
    let mid: Mid = "12345".parse().unwrap();
    assert_eq!(mid.get(), 12345);
}

#[test]
fn test_mid_parse_trims_whitespace() {
    let mid: Mid = " 42 \n".parse().unwrap();
    assert_eq!(mid, Mid::new(42));
}

#[test]
fn test_mid_parse_invalid() {
    for input in ["abc", "", "12a", "-5", "1.5"] {
        let err = input.parse::<Mid>().unwrap_err();
        assert!(matches!(err, QuarantineError::InvalidMid(_)), "{input:?}");
    }
}

#[test]
fn test_mid_display() {
    assert_eq!(Mid::new(7).to_string(), "7");
}

// --- Credentials ---

#[test]
fn test_credentials_debug_hides_password() {
    let credentials = Credentials::new("admin", "hunter2");
    let debug = format!("{credentials:?}");
    assert!(debug.contains("admin"));
    assert!(!debug.contains("hunter2"));
}

// --- TimeWindow ---

#[test]
fn test_time_window_truncates_to_minute() {
    let now = Utc.with_ymd_and_hms(2025, 3, 10, 14, 27, 53).unwrap()
        + chrono::TimeDelta::milliseconds(789);
    let window = TimeWindow::ending_at(now, 24);

    assert_eq!(window.end_param(), "2025-03-10T14:27:00.000Z");
    assert_eq!(window.start_param(), "2025-03-09T14:27:00.000Z");
}

#[test]
fn test_time_window_custom_length() {
    let now = Utc.with_ymd_and_hms(2025, 1, 1, 3, 0, 0).unwrap();
    let window = TimeWindow::ending_at(now, 6);

    assert_eq!(window.start_param(), "2024-12-31T21:00:00.000Z");
    assert_eq!(window.end_param(), "2025-01-01T03:00:00.000Z");
}

// --- QuarantineDetail ---

#[test]
fn test_filter_requires_single_sender_maturity() {
    let detail = |names: &[&str]| QuarantineDetail {
        quarantine_names: names.iter().map(ToString::to_string).collect(),
        ..QuarantineDetail::default()
    };

    assert!(detail(&["sender-maturity"]).is_sender_maturity_only());
    assert!(!detail(&[]).is_sender_maturity_only());
    assert!(!detail(&["other"]).is_sender_maturity_only());
    assert!(!detail(&["sender-maturity", "other"]).is_sender_maturity_only());
    assert!(!detail(&["sender-maturity", "sender-maturity"]).is_sender_maturity_only());
}

// --- ReleaseRequest ---

#[test]
fn test_release_request_body() {
    let request = ReleaseRequest::sender_maturity(Mid::new(12345));
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "action": "release",
            "mids": [12345],
            "quarantineName": "sender-maturity",
            "quarantineType": "pvo"
        })
    );
    assert!(value["mids"][0].is_u64());
}

// --- Body file names ---

#[test]
fn test_body_file_name() {
    let name = body_file_name("alice@example.com", Mid::new(99));
    assert_eq!(name, "message_body_alice@example.com_99.html");
    assert!(is_body_file_name(&name));
}

#[test]
fn test_body_file_name_replaces_separators() {
    let name = body_file_name("../evil/x", Mid::new(1));
    assert_eq!(name, "message_body_.._evil_x_1.html");
    assert!(!name.contains('/'));
}

#[test]
fn test_is_body_file_name() {
    assert!(is_body_file_name("message_body_a_1.html"));
    assert!(!is_body_file_name("message_body_a_1.htm"));
    assert!(!is_body_file_name("notes.html"));
    assert!(!is_body_file_name("xmessage_body_a_1.html"));
}

#[test]
fn test_time_window_saturates_instead_of_overflowing() {
    let now = Utc.with_ymd_and_hms(2025, 3, 10, 14, 27, 0).unwrap();
    let window = TimeWindow::ending_at(now, u32::MAX);

    assert_eq!(window.start, chrono::DateTime::<Utc>::MIN_UTC);
    assert_eq!(window.end_param(), "2025-03-10T14:27:00.000Z");

    let window = TimeWindow::last_hours(u32::MAX);
    assert!(window.start < window.end);
}
