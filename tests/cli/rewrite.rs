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
fn test_rewrite_longest_match_first() -> Result<()> {
    let test = CliTest::with_config(CONFIG)?;
    test.write_file(
        "lib/l10n/app_en.arb",
        "{\n  \"@@locale\": \"en\",\n  \"greet\": \"Hello\",\n  \"greetLong\": \"Hello World\"\n}\n",
    )?;
    test.write_file(
        "lib/screens/home.dart",
        "import 'package:flutter/material.dart';\n\nText('Hello World');\n",
    )?;

    assert!(test.rewrite_command().status()?.success());

    let content = test.read_file("lib/screens/home.dart")?;
    // One replacement with the longer literal's key; the shorter "Hello"
    // never matched inside the longer literal's quotes.
    assert_eq!(content.matches("context.l10n.greetLong").count(), 1);
    assert!(!content.contains("context.l10n.greet)"));
    assert!(!content.contains("Hello"));
    assert!(content.contains(IMPORT_LINE));

    Ok(())
}

#[test]
fn test_rewrite_twice_is_noop() -> Result<()> {
    let test = CliTest::with_config(CONFIG)?;
    test.write_file(
        "lib/l10n/app_en.arb",
        "{\n  \"@@locale\": \"en\",\n  \"welcome\": \"Welcome\"\n}\n",
    )?;
    test.write_file(
        "lib/screens/home.dart",
        "import 'package:flutter/material.dart';\n\nText('Welcome');\n",
    )?;

    assert!(test.rewrite_command().status()?.success());
    let first = test.read_file("lib/screens/home.dart")?;

    assert!(test.rewrite_command().status()?.success());
    let second = test.read_file("lib/screens/home.dart")?;

    assert_eq!(first, second);
    assert_eq!(second.matches("context_extension.dart").count(), 1);

    Ok(())
}

#[test]
fn test_rewrite_inserts_import_after_last_import() -> Result<()> {
    let test = CliTest::with_config(CONFIG)?;
    test.write_file(
        "lib/l10n/app_en.arb",
        "{\n  \"@@locale\": \"en\",\n  \"welcome\": \"Welcome\"\n}\n",
    )?;
    test.write_file(
        "lib/screens/home.dart",
        "import 'dart:async';\nimport 'package:flutter/material.dart';\n\nText('Welcome');\n",
    )?;

    assert!(test.rewrite_command().status()?.success());

    let content = test.read_file("lib/screens/home.dart")?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "import 'dart:async';");
    assert_eq!(lines[1], "import 'package:flutter/material.dart';");
    assert_eq!(lines[2], IMPORT_LINE);

    Ok(())
}

#[test]
fn test_rewrite_only_touches_marked_positions() -> Result<()> {
    let test = CliTest::with_config(CONFIG)?;
    test.write_file(
        "lib/l10n/app_en.arb",
        "{\n  \"@@locale\": \"en\",\n  \"active\": \"active\"\n}\n",
    )?;
    let code = "final status = {'status': 'active'};\n";
    test.write_file("lib/screens/state.dart", code)?;

    assert!(test.rewrite_command().status()?.success());

    // Untouched: the literal is not in a UI-text position, so no rewrite
    // and no import insertion.
    assert_eq!(test.read_file("lib/screens/state.dart")?, code);

    Ok(())
}

#[test]
fn test_rewrite_ignores_files_outside_scope() -> Result<()> {
    let test = CliTest::with_config(CONFIG)?;
    test.write_file(
        "lib/l10n/app_en.arb",
        "{\n  \"@@locale\": \"en\",\n  \"welcome\": \"Welcome\"\n}\n",
    )?;
    let outside = "Text('Welcome');\n";
    test.write_file("lib/widgets/banner.dart", outside)?;

    assert!(test.rewrite_command().status()?.success());

    assert_eq!(test.read_file("lib/widgets/banner.dart")?, outside);

    Ok(())
}
