use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout_of};

const APP_VUE: &str = r#"<template>
  <el-button label="确认"/>
  <span>标题：</span>
</template>
<script>
export default {
  methods: {
    save() {
      this.$message('保存成功');
    }
  }
}
</script>
"#;

const APP_VUE_REWRITTEN: &str = r#"<template>
  <el-button :label="$t('common.confirm')"/>
  <span>{{ $t('page.title') }}：</span>
</template>
<script>
export default {
  methods: {
    save() {
      this.$message($t('msg.saved'));
    }
  }
}
</script>
"#;

const MESSAGES: &str = r#"{
  "common": { "confirm": "确认" },
  "page": { "title": "标题" },
  "msg": { "saved": "保存成功" }
}"#;

fn project() -> Result<CliTest> {
    let test = CliTest::with_file("src/App.vue", APP_VUE)?;
    test.write_file("locales/zh-CN.json", MESSAGES)?;
    Ok(test)
}

#[test]
fn test_dry_run_previews_without_writing() -> Result<()> {
    let test = project()?;

    let output = test.rewrite_command().output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("src/App.vue"));
    assert!(stdout.contains("-> common.confirm"));
    assert!(stdout.contains("-> page.title"));
    assert!(stdout.contains("-> msg.saved"));
    assert!(stdout.contains("Would rewrite 3 text(s) in 1 file(s)."));
    assert!(stdout.contains("Run with --apply to rewrite these files."));

    // Dry run must not touch the file.
    assert_eq!(test.read_file("src/App.vue")?, APP_VUE);

    Ok(())
}

#[test]
fn test_apply_rewrites_in_place() -> Result<()> {
    let test = project()?;

    let output = test.rewrite_command().arg("--apply").output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Rewrote 3 text(s) in 1 file(s)."));

    assert_eq!(test.read_file("src/App.vue")?, APP_VUE_REWRITTEN);

    Ok(())
}

#[test]
fn test_apply_is_idempotent() -> Result<()> {
    let test = project()?;

    test.rewrite_command().arg("--apply").output()?;
    let output = test.rewrite_command().arg("--apply").output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("nothing to rewrite"));
    assert_eq!(test.read_file("src/App.vue")?, APP_VUE_REWRITTEN);

    Ok(())
}

#[test]
fn test_missing_keys_are_reported() -> Result<()> {
    let test = CliTest::with_file("src/util.js", "f('没有键');")?;
    test.write_file("locales/zh-CN.json", r#"{ "other": "别的" }"#)?;

    let output = test.rewrite_command().output()?;
    // Dry run still exits 0.
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("没有键"));
    assert!(stdout.contains("(no key)"));
    assert!(stdout.contains("1 text(s) have no key in the primary locale."));

    Ok(())
}

#[test]
fn test_apply_with_missing_keys_exits_nonzero() -> Result<()> {
    let test = CliTest::with_file("src/util.js", "f('没有键');")?;
    test.write_file("locales/zh-CN.json", r#"{ "other": "别的" }"#)?;

    let output = test.rewrite_command().arg("--apply").output()?;
    assert!(!output.status.success());

    // Nothing could be rewritten, so the file is unchanged.
    assert_eq!(test.read_file("src/util.js")?, "f('没有键');");

    Ok(())
}

#[test]
fn test_missing_messages_file_fails() -> Result<()> {
    let test = CliTest::with_file("src/util.js", "f('文本');")?;

    let output = test.rewrite_command().output()?;
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read messages file"));

    Ok(())
}

#[test]
fn test_primary_locale_override() -> Result<()> {
    let test = CliTest::with_file("src/util.js", "f('文本');")?;
    test.write_file("locales/zh-TW.json", r#"{ "text": "文本" }"#)?;

    let stdout = stdout_of(
        test.rewrite_command()
            .args(["--primary-locale", "zh-TW"]),
    )?;
    assert!(stdout.contains("-> text"));

    Ok(())
}

#[test]
fn test_rewrite_ignores_configured_texts() -> Result<()> {
    let test = CliTest::with_file("src/util.js", "f('确定');")?;
    test.write_file(
        ".hanliftrc.json",
        r#"{ "ignoreTexts": ["确定"] }"#,
    )?;
    test.write_file("locales/zh-CN.json", r#"{ "ok": "确定" }"#)?;

    let output = test.rewrite_command().arg("--apply").output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("nothing to rewrite"));
    assert_eq!(test.read_file("src/util.js")?, "f('确定');");

    Ok(())
}

#[test]
fn test_comments_are_preserved() -> Result<()> {
    let test = CliTest::with_file(
        "src/util.js",
        "// 保存前校验\nf('保存成功');\n",
    )?;
    test.write_file("locales/zh-CN.json", r#"{ "saved": "保存成功" }"#)?;

    let output = test.rewrite_command().arg("--apply").output()?;
    assert!(output.status.success());

    assert_eq!(
        test.read_file("src/util.js")?,
        "// 保存前校验\nf($t('saved'));\n"
    );

    Ok(())
}
