use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_get_own_language() -> Result<()> {
    let test = CliTest::with_languages()?;

    assert_cmd_snapshot!(test.get_command("hu", "welcome"));

    Ok(())
}

#[test]
fn test_get_key_fallback() -> Result<()> {
    let test = CliTest::with_languages()?;

    assert_cmd_snapshot!(test.get_command("hu", "only-in-english"));

    Ok(())
}

#[test]
fn test_get_language_fallback() -> Result<()> {
    let test = CliTest::with_languages()?;

    assert_cmd_snapshot!(test.get_command("not-available-language", "welcome"));

    Ok(())
}

#[test]
fn test_get_missing_key() -> Result<()> {
    let test = CliTest::with_languages()?;

    assert_cmd_snapshot!(test.get_command("hu", "nope"));

    Ok(())
}

#[test]
fn test_get_with_category_and_overrides() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "i18n/hu/news.json",
        r#"{"locale": {"welcome": "Üdvözöllek a hírek oldalon"}}"#,
    )?;

    let mut cmd = test.get_command("hu", "welcome");
    cmd.args(["--category", "news", "--root", "i18n", "--convention", "locale"]);

    assert_cmd_snapshot!(cmd);

    Ok(())
}

#[test]
fn test_get_uses_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".langfallrc.json",
        r#"{ "defaultLanguage": "hu", "resourceRoot": "./texts" }"#,
    )?;
    test.write_file("texts/hu.toml", "[lang]\nwelcome = \"Szia\"\n")?;

    assert_cmd_snapshot!(test.get_command("en", "welcome"));

    Ok(())
}

#[test]
fn test_config_root_is_relative_to_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".langfallrc.json", r#"{ "resourceRoot": "./texts" }"#)?;
    test.write_file("texts/en.json", r#"{"lang": {"welcome": "Welcome"}}"#)?;
    test.write_file("app/views/.keep", "")?;

    let mut cmd = test.get_command("en", "welcome");
    cmd.args(["--path", "app/views"]);

    assert_cmd_snapshot!(cmd);

    Ok(())
}

#[test]
fn test_config_found_from_nested_working_directory() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".langfallrc.json", r#"{ "resourceRoot": "./texts" }"#)?;
    test.write_file("texts/en.json", r#"{"lang": {"welcome": "Welcome"}}"#)?;
    test.write_file("app/views/.keep", "")?;

    let mut cmd = test.get_command("en", "welcome");
    cmd.current_dir(test.root().join("app").join("views"));

    assert_cmd_snapshot!(cmd);

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::with_file(".langfallrc.json", "{ nope")?;

    test.settings().bind(|| {
        assert_cmd_snapshot!(test.get_command("en", "welcome"));
    });

    Ok(())
}
