use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout_of};

#[test]
fn test_extract_vue_file() -> Result<()> {
    let test = CliTest::with_file(
        "src/App.vue",
        r#"<template>
  <p title="提示">说明：</p>
</template>
<script>
const m = '消息';
</script>
"#,
    )?;

    let output = test.extract_command().output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("src/App.vue"));
    assert!(stdout.contains("提示"));
    assert!(stdout.contains("说明"));
    assert!(stdout.contains("消息"));
    assert!(stdout.contains("Found 3 text(s) in 1 file(s) (checked 1)."));

    Ok(())
}

#[test]
fn test_extract_lists_texts_sorted_with_duplicates() -> Result<()> {
    let test = CliTest::with_file("src/store.ts", "f('乙'); f('甲'); f('乙');")?;

    let stdout = stdout_of(&mut test.extract_command())?;

    let texts: Vec<&str> = stdout
        .lines()
        .filter(|line| line.starts_with("  "))
        .map(|line| line.trim())
        .collect();
    assert_eq!(texts, vec!["乙", "乙", "甲"]);

    Ok(())
}

#[test]
fn test_extract_json_output() -> Result<()> {
    let test = CliTest::with_file("src/util.js", "alert('你好');")?;

    let stdout = stdout_of(test.extract_command().arg("--json"))?;
    let parsed: serde_json::Value = serde_json::from_str(&stdout)?;

    let texts = parsed
        .as_object()
        .and_then(|map| map.values().next())
        .and_then(|v| v.as_array())
        .expect("one file entry with a text array");
    assert_eq!(texts.len(), 1);
    assert_eq!(texts[0], "你好");

    Ok(())
}

#[test]
fn test_extract_without_chinese_text() -> Result<()> {
    let test = CliTest::with_file("src/util.js", "alert('plain ascii');")?;

    let output = test.extract_command().output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Checked 1 source file - no hardcoded Chinese text found"));

    Ok(())
}

#[test]
fn test_extract_skips_comment_bodies() -> Result<()> {
    let test = CliTest::with_file(
        "src/util.js",
        "// 注释里的中文\nconst m = '正文';\n",
    )?;

    let stdout = stdout_of(&mut test.extract_command())?;
    assert!(stdout.contains("正文"));
    assert!(!stdout.contains("注释里的中文"));

    Ok(())
}

#[test]
fn test_extract_honors_ignore_texts() -> Result<()> {
    let test = CliTest::with_file("src/util.js", "f('确定'); f('标题');")?;
    test.write_file(".hanliftrc.json", r#"{ "ignoreTexts": ["确定"] }"#)?;

    let stdout = stdout_of(&mut test.extract_command())?;
    assert!(stdout.contains("标题"));
    assert!(!stdout.contains("确定"));
    assert!(stdout.contains("Found 1 text(s)"));

    Ok(())
}

#[test]
fn test_extract_honors_config_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".hanliftrc.json", r#"{ "ignores": ["**/generated/**"] }"#)?;
    test.write_file("src/page.js", "f('页面');")?;
    test.write_file("src/generated/api.js", "f('接口');")?;

    let stdout = stdout_of(&mut test.extract_command())?;
    assert!(stdout.contains("页面"));
    assert!(!stdout.contains("接口"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("extract"));
    assert!(stdout.contains("rewrite"));
    assert!(stdout.contains("init"));

    Ok(())
}
