use anyhow::Result;
use gsheet_ops::config::{ClientConfig, ConfigArgs, ConfigError, DEFAULT_API_BASE};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn defaults_apply_without_file_or_flags() -> Result<()> {
    let config = ClientConfig::from_args(ConfigArgs::default())?;
    assert_eq!(config.api_base, DEFAULT_API_BASE);
    assert!(config.access_token.is_none());
    assert_eq!(config.timeout(), Some(Duration::from_millis(30_000)));
    Ok(())
}

#[test]
fn yaml_file_fills_gaps_and_flags_win() -> Result<()> {
    let tmp = tempdir()?;
    let path = tmp.path().join("gsheet-ops.yaml");
    fs::write(
        &path,
        "api_base: http://localhost:8080/v4\naccess_token: from-file\ntimeout_ms: 0\n",
    )?;

    let config = ClientConfig::from_args(ConfigArgs {
        config: Some(path),
        access_token: Some("from-flag".to_string()),
        ..ConfigArgs::default()
    })?;

    assert_eq!(config.api_base, "http://localhost:8080/v4");
    assert_eq!(config.access_token.as_deref(), Some("from-flag"));
    assert_eq!(config.timeout(), None);
    Ok(())
}

#[test]
fn json_file_is_supported() -> Result<()> {
    let tmp = tempdir()?;
    let path = tmp.path().join("config.json");
    fs::write(&path, r#"{"timeout_ms": 1500}"#)?;

    let config = ClientConfig::from_args(ConfigArgs {
        config: Some(path),
        ..ConfigArgs::default()
    })?;
    assert_eq!(config.timeout_ms, Some(1500));
    assert_eq!(config.api_base, DEFAULT_API_BASE);
    Ok(())
}

#[test]
fn bad_config_inputs_are_config_errors() -> Result<()> {
    let tmp = tempdir()?;

    let unknown_key = tmp.path().join("unknown.yaml");
    fs::write(&unknown_key, "api_bsae: https://example.test\n")?;
    let missing = tmp.path().join("missing.yaml");
    let wrong_ext = tmp.path().join("config.toml");
    fs::write(&wrong_ext, "timeout_ms = 5\n")?;

    for path in [unknown_key, missing, wrong_ext] {
        let err = ClientConfig::from_args(ConfigArgs {
            config: Some(path.clone()),
            ..ConfigArgs::default()
        })
        .unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some(), "{path:?}: {err}");
    }

    let err = ClientConfig::from_args(ConfigArgs {
        api_base: Some("ftp://example.test".to_string()),
        ..ConfigArgs::default()
    })
    .unwrap_err();
    assert!(err.to_string().contains("http:// or https://"));
    Ok(())
}
