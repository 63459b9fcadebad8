use anyhow::Result;

use crate::CliTest;

const CONFIG: &str = r#"{
    "packageName": "demo_app",
    "sourceRoot": "lib",
    "l10nDir": "lib/l10n",
    "rewriteScope": "lib",
    "primaryLocale": "en",
    "locales": ["en"]
}"#;

#[test]
fn test_extract_creates_table() -> Result<()> {
    let test = CliTest::with_config(CONFIG)?;
    test.write_file("lib/home.dart", r#"Text('Welcome')"#)?;
    test.write_file("lib/login.dart", r#"Text("Welcome Back")"#)?;

    let status = test.extract_command().status()?;
    assert!(status.success());

    let table = test.read_json("lib/l10n/app_en.arb")?;
    assert_eq!(table["@@locale"], "en");
    assert_eq!(table["welcome"], "Welcome");
    // Two distinct keys, not a truncated collision of each other.
    assert_eq!(table["welcomeBack"], "Welcome Back");

    Ok(())
}

#[test]
fn test_extract_is_idempotent() -> Result<()> {
    let test = CliTest::with_config(CONFIG)?;
    test.write_file(
        "lib/home.dart",
        r#"
        Text('Welcome');
        TextField(decoration: InputDecoration(hintText: 'Enter your name'));
        "#,
    )?;

    assert!(test.extract_command().status()?.success());
    let first = test.read_file("lib/l10n/app_en.arb")?;

    assert!(test.extract_command().status()?.success());
    let second = test.read_file("lib/l10n/app_en.arb")?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_extract_reuses_existing_key() -> Result<()> {
    let test = CliTest::with_config(CONFIG)?;
    test.write_file(
        "lib/l10n/app_en.arb",
        "{\n  \"@@locale\": \"en\",\n  \"greeting\": \"Hello\"\n}\n",
    )?;
    test.write_file("lib/home.dart", r#"Text('Hello')"#)?;

    assert!(test.extract_command().status()?.success());

    let table = test.read_json("lib/l10n/app_en.arb")?;
    assert_eq!(table["greeting"], "Hello");
    assert!(table.get("hello").is_none());

    Ok(())
}

#[test]
fn test_extract_retains_orphan_entries() -> Result<()> {
    let test = CliTest::with_config(CONFIG)?;
    test.write_file(
        "lib/l10n/app_en.arb",
        "{\n  \"@@locale\": \"en\",\n  \"oldKey\": \"Removed from source\"\n}\n",
    )?;
    test.write_file("lib/home.dart", r#"Text('Fresh text')"#)?;

    assert!(test.extract_command().status()?.success());

    let table = test.read_json("lib/l10n/app_en.arb")?;
    assert_eq!(table["oldKey"], "Removed from source");
    assert_eq!(table["freshText"], "Fresh text");

    Ok(())
}

#[test]
fn test_extract_rejects_interpolation() -> Result<()> {
    let test = CliTest::with_config(CONFIG)?;
    test.write_file("lib/home.dart", r#"Text("Error: ${code}")"#)?;

    assert!(test.extract_command().status()?.success());

    let table = test.read_json("lib/l10n/app_en.arb")?;
    let keys: Vec<&String> = table.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["@@locale"]);

    Ok(())
}

#[test]
fn test_extract_recovers_from_corrupt_table() -> Result<()> {
    let test = CliTest::with_config(CONFIG)?;
    test.write_file("lib/l10n/app_en.arb", "{ this is not json")?;
    test.write_file("lib/home.dart", r#"Text('Welcome')"#)?;

    // Corrupt table is not fatal; the run rebuilds it from scratch.
    let status = test.extract_command().status()?;
    assert!(status.success());

    let table = test.read_json("lib/l10n/app_en.arb")?;
    assert_eq!(table["@@locale"], "en");
    assert_eq!(table["welcome"], "Welcome");

    Ok(())
}

#[test]
fn test_extract_skips_generated_files() -> Result<()> {
    let test = CliTest::with_config(CONFIG)?;
    test.write_file("lib/model.g.dart", r#"Text('Generated text')"#)?;
    test.write_file("lib/home.dart", r#"Text('Real text')"#)?;

    assert!(test.extract_command().status()?.success());

    let table = test.read_json("lib/l10n/app_en.arb")?;
    assert_eq!(table["realText"], "Real text");
    assert!(table.get("generatedText").is_none());

    Ok(())
}
