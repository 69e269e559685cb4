use clap::Parser;
use sma_quarantine::{Cli, MAX_WINDOW_HOURS};
use std::path::Path;
use std::time::Duration;

#[test]
fn test_cli_defaults() {
    let cli = Cli::try_parse_from([
        "sma-quarantine",
        "--base-url",
        "https://sma.example.com",
        "--esa",
        "192.0.2.10",
    ])
    .unwrap();

    assert_eq!(cli.appliances, vec!["192.0.2.10"]);
    assert_eq!(cli.window_hours, 24);
    assert_eq!(cli.output_dir, Path::new("."));
    assert!(cli.username.is_none());

    let options = cli.client_options();
    assert!(options.timeout.is_none());
    assert!(!options.accept_invalid_certs);
    assert_eq!(cli.default_log_filter(), "warn");
}

#[test]
fn test_cli_multiple_appliances() {
    let cli = Cli::try_parse_from([
        "sma-quarantine",
        "--base-url",
        "https://sma.example.com",
        "--esa",
        "192.0.2.10,192.0.2.11",
        "--esa",
        "esa3.example.com",
        "--timeout-secs",
        "30",
        "--insecure",
        "-v",
    ])
    .unwrap();

    assert_eq!(
        cli.appliances,
        vec!["192.0.2.10", "192.0.2.11", "esa3.example.com"]
    );
    let options = cli.client_options();
    assert_eq!(options.timeout, Some(Duration::from_secs(30)));
    assert!(options.accept_invalid_certs);
    assert_eq!(cli.default_log_filter(), "sma_quarantine=debug");
}

#[test]
fn test_cli_window_hours_bounds() {
    let parse = |hours: &str| {
        Cli::try_parse_from([
            "sma-quarantine",
            "--base-url",
            "https://sma.example.com",
            "--esa",
            "192.0.2.10",
            "--window-hours",
            hours,
        ])
    };

    assert_eq!(parse("168").unwrap().window_hours, 168);
    assert_eq!(
        parse(&MAX_WINDOW_HOURS.to_string()).unwrap().window_hours,
        MAX_WINDOW_HOURS
    );
    assert!(parse("0").is_err());
    assert!(parse(&(MAX_WINDOW_HOURS + 1).to_string()).is_err());
    assert!(parse("4294967295").is_err());
}
