use anyhow::Result;

use crate::CliTest;

const CONFIG: &str = r#"{
    "packageName": "demo_app",
    "sourceRoot": "lib",
    "l10nDir": "lib/l10n",
    "rewriteScope": "lib/screens",
    "primaryLocale": "en",
    "locales": ["en"]
}"#;

const IMPORT_LINE: &str = "import 'package:demo_app/utils/context_extension.dart';";

#[test]
fn test_imports_added_after_existing_imports() -> Result<()> {
    let test = CliTest::with_config(CONFIG)?;
    test.write_file(
        "lib/screens/home.dart",
        "import 'dart:async';\n\nvoid main() {}\n",
    )?;

    assert!(test.imports_command().status()?.success());

    let content = test.read_file("lib/screens/home.dart")?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "import 'dart:async';");
    assert_eq!(lines[1], IMPORT_LINE);

    Ok(())
}

#[test]
fn test_imports_added_at_top_without_import_block() -> Result<()> {
    let test = CliTest::with_config(CONFIG)?;
    test.write_file("lib/screens/plain.dart", "void main() {}\n")?;

    assert!(test.imports_command().status()?.success());

    let content = test.read_file("lib/screens/plain.dart")?;
    assert!(content.starts_with(IMPORT_LINE));

    Ok(())
}

#[test]
fn test_imports_is_idempotent() -> Result<()> {
    let test = CliTest::with_config(CONFIG)?;
    test.write_file(
        "lib/screens/home.dart",
        "import 'dart:async';\n\nvoid main() {}\n",
    )?;

    assert!(test.imports_command().status()?.success());
    let first = test.read_file("lib/screens/home.dart")?;

    assert!(test.imports_command().status()?.success());
    let second = test.read_file("lib/screens/home.dart")?;

    assert_eq!(first, second);
    assert_eq!(second.matches("context_extension.dart").count(), 1);

    Ok(())
}
