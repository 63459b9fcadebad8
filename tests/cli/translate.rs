use anyhow::Result;

use crate::CliTest;

#[test]
fn test_translate_without_api_key_reports_and_exits_clean() -> Result<()> {
    let test = CliTest::with_config(
        r#"{
            "packageName": "demo_app",
            "locales": ["en", "vi"]
        }"#,
    )?;
    test.write_file(
        "lib/l10n/app_en.arb",
        "{\n  \"@@locale\": \"en\",\n  \"greeting\": \"Hello\"\n}\n",
    )?;

    let mut cmd = test.command();
    cmd.arg("translate");
    let output = cmd.output()?;

    // Missing key is an error on stderr, not a failing exit code.
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("translateApiKey"));

    Ok(())
}
