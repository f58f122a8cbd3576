//! Integration tests for configuration module

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use super::{ConfigFiles, ConfigManager, ReleaseOrder, TemplateValues, expand_template};

#[test]
fn test_full_config_workflow() {
    let tmp = TempDir::new().unwrap();
    let config_file = tmp.path().join("config.toml");

    fs::write(
        &config_file,
        r#"
[pack]
name = "Insomnia: Hardcore"
manifest = "Packwiz/pack.toml"

[manifests]
dir = "Packwiz/mods"
tracked_field = "update.modrinth.version"

[notes]
dir = "Changelogs"
order = "filename"

[snapshots]
root = "Export/snapshots"

[render]
title = "Changelog"
mod_updates_url = "https://github.com/CrismPack/Insomnia-Hardcore/blob/main/changelogs/changelog_mods_{version}.md"

[output]
changelog = "CHANGELOG.md"
"#,
    )
    .unwrap();

    let config = ConfigManager::load(Some(&config_file)).unwrap();

    assert_eq!(config.pack.name.as_deref(), Some("Insomnia: Hardcore"));
    assert_eq!(config.manifests.dir, PathBuf::from("Packwiz/mods"));
    assert_eq!(config.manifests.tracked_field, "update.modrinth.version");
    assert_eq!(config.notes.order, ReleaseOrder::Filename);
    assert_eq!(config.snapshots.root, Some(PathBuf::from("Export/snapshots")));
    assert_eq!(config.render.title.as_deref(), Some("Changelog"));
}

#[test]
fn test_invalid_config_validation() {
    let tmp = TempDir::new().unwrap();
    let config_file = tmp.path().join("config.toml");

    fs::write(
        &config_file,
        r#"
[render]
full_changelog_url = "https://wiki.example.com/changelog"
"#,
    )
    .unwrap();

    let files = ConfigFiles {
        cli: Some(config_file),
        ..ConfigFiles::default()
    };

    let result = ConfigManager::load_files(&files);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("full_changelog_url"));
}

#[test]
fn test_unknown_value_rejected() {
    let tmp = TempDir::new().unwrap();
    let config_file = tmp.path().join("config.toml");
    fs::write(&config_file, "[render]\nkeep_brackets = \"yes\"\n").unwrap();

    let files = ConfigFiles {
        cli: Some(config_file),
        ..ConfigFiles::default()
    };

    assert!(ConfigManager::load_files(&files).is_err());
}

#[test]
fn test_defaults_are_valid() {
    let config = ConfigManager::defaults().unwrap();
    assert_eq!(config.output.changelog, PathBuf::from("CHANGELOG.md"));
}

#[test]
fn test_expand_template() {
    let values = TemplateValues {
        version: "1.2.0",
        ..TemplateValues::default()
    };
    assert_eq!(
        expand_template("https://example.com/changelog_mods_{version}.md", &values),
        "https://example.com/changelog_mods_1.2.0.md"
    );
}

#[test]
fn test_expand_template_with_pack_values() {
    let template = "https://wiki.example.net/{pack}/{minecraft}/changelog#v{version}";
    let values = TemplateValues {
        version: "1.2.0",
        pack: Some("Cubescape Plus"),
        minecraft: Some("1.21.1"),
    };
    assert_eq!(
        expand_template(template, &values),
        "https://wiki.example.net/cubescape plus/1.21.1/changelog#v1.2.0"
    );

    // Values that are not known stay as placeholders
    let values = TemplateValues {
        version: "1.2.0",
        ..TemplateValues::default()
    };
    assert_eq!(
        expand_template(template, &values),
        "https://wiki.example.net/{pack}/{minecraft}/changelog#v1.2.0"
    );
}
