use anyhow::Result;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Created .hanliftrc.json"));

    let config = test.read_file(".hanliftrc.json")?;
    let parsed: serde_json::Value = serde_json::from_str(&config)?;
    assert_eq!(parsed["primaryLocale"], "zh-CN");
    assert_eq!(parsed["messagesRoot"], "./locales");

    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".hanliftrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already exists"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));

    Ok(())
}
