#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use admingate_gateway::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
admins:
  emailz: ["a@b.io"] # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.gateway.listen, "0.0.0.0:8080");
    assert_eq!(cfg.gateway.identity_header, "x-auth-request-email");
    assert!(cfg.allow_list().unwrap().is_empty());
}

#[test]
fn unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn uppercase_admin_entry_rejected() {
    let bad = r#"
version: 1
admins:
  emails:
    - Paulorobertt02023@gmail.com
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn bad_listen_and_header_rejected() {
    for bad in [
        "version: 1\ngateway:\n  listen: \"not-an-addr\"\n",
        "version: 1\ngateway:\n  identity_header: \"bad header\"\n",
    ] {
        let err = config::load_from_str(bad).expect_err(bad);
        assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
    }
}

#[test]
fn shipped_config_parses() {
    let cfg = config::load_from_file("../../admingate.yaml").expect("must parse");
    let list = cfg.allow_list().unwrap();
    assert_eq!(list.len(), 3);
    assert!(list.is_admin("Polly-Pogo@Hotmail.com"));
}

#[test]
fn missing_file_is_internal() {
    let err = config::load_from_file("does-not-exist.yaml").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "INTERNAL");
}

#[test]
fn env_override_replaces_admins() {
    let mut cfg = config::load_from_file("../../admingate.yaml").unwrap();
    config::apply_env_overrides(&mut cfg, Some(" ops@example.com, ,root@example.com ")).unwrap();

    let list = cfg.allow_list().unwrap();
    assert_eq!(list.iter().collect::<Vec<_>>(), ["ops@example.com", "root@example.com"]);
    assert!(!list.is_admin("paulorobertt02023@gmail.com"));
}

#[test]
fn env_override_absent_keeps_config() {
    let mut cfg = config::load_from_file("../../admingate.yaml").unwrap();
    config::apply_env_overrides(&mut cfg, None).unwrap();
    assert_eq!(cfg.admins.emails.len(), 3);
}

#[test]
fn env_override_is_validated() {
    let mut cfg = config::load_from_str("version: 1\n").unwrap();
    let err = config::apply_env_overrides(&mut cfg, Some("ops@example.com,Root@Example.com"))
        .expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn rejected_env_override_leaves_config_untouched() {
    let mut cfg = config::load_from_file("../../admingate.yaml").unwrap();
    let before = cfg.admins.emails.clone();

    let err = config::apply_env_overrides(&mut cfg, Some("Root@Example.com"))
        .expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");

    assert_eq!(cfg.admins.emails, before);
    cfg.validate().expect("config still valid");
}

#[test]
fn env_override_error_names_variable_once() {
    let mut cfg = config::load_from_str("version: 1\n").unwrap();
    let err = config::apply_env_overrides(&mut cfg, Some("not-an-email"))
        .expect_err("must fail");

    let msg = err.to_string();
    assert!(msg.starts_with("bad request: ADMINGATE_ADMIN_EMAILS: invalid admin email"), "{msg}");
    assert_eq!(msg.matches("bad request").count(), 1, "{msg}");
}
