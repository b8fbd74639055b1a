use std::process::{Command, Output};

fn kyuuid(args: &[&str], default_format: Option<&str>) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_kyuuid"));
    command.args(args).env_remove("RUST_LOG");
    match default_format {
        Some(value) => command.env("KYUUID_DEFAULT_FORMAT", value),
        None => command.env_remove("KYUUID_DEFAULT_FORMAT"),
    };
    command.output().expect("failed to run kyuuid")
}

#[test]
fn test_convert_prints_result_and_succeeds() {
    let output = kyuuid(
        &["convert", "--to", "truncatedBase64", "2D3FB6B6-090D-4FBD-8AC2-428DC536FFE8"],
        None,
    );

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "LT+2tgkNT72KwkKNxTb/6A\n");
}

#[test]
fn test_convert_failure_exits_non_zero() {
    let output = kyuuid(&["convert", "--to", "base64", "not a uuid"], None);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr.contains("Error: could not convert 'not a uuid'"));
    assert!(stderr.contains("input did not match the expected format: base64"));
}

#[test]
fn test_help_and_version_ignore_invalid_configuration() {
    for flag in ["--help", "--version"] {
        let output = kyuuid(&[flag], Some("bogus"));

        assert!(output.status.success(), "flag: {flag}");
        assert!(!output.stdout.is_empty(), "flag: {flag}");
    }
}

#[test]
fn test_long_help_lists_formats() {
    let output = kyuuid(&["--help"], None);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("FORMATS:"));
    assert!(stdout.contains("Example: LT+2tgkNT72KwkKNxTb/6A=="));
}

#[test]
fn test_convert_ignores_invalid_configuration() {
    let output = kyuuid(
        &["convert", "--to", "base64", "2D3FB6B6-090D-4FBD-8AC2-428DC536FFE8"],
        Some("bogus"),
    );

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "LT+2tgkNT72KwkKNxTb/6A==\n");
}

#[test]
fn test_generate_with_invalid_configuration_exits_non_zero() {
    let output = kyuuid(&["generate"], Some("bogus"));

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid configuration"));
}
