use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn write_manifest(root: &Path, relative: &str, name: &str, side: &str, jar: &str) {
    write(
        root,
        relative,
        &format!("name = \"{name}\"\nfilename = \"{jar}\"\nside = \"{side}\"\n"),
    );
}

/// Pack at 1.1.0 with a 1.0.0 snapshot
///
/// - 1.0.0: Alpha, Beta
/// - live:  Alpha (updated), Gamma (client)
fn setup_pack() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    write(
        root,
        "pack.toml",
        "name = \"Cubescape\"\nversion = \"1.1.0\"\n\n[versions]\nminecraft = \"1.21.1\"\nfabric = \"0.16.5\"\n",
    );
    write(
        root,
        ".packlog.toml",
        "[snapshots]\nroot = \"snapshots\"\n\n[render]\ntitle = \"Changelog\"\nfull_changelog_url = \"https://example.net/changelog#v{version}\"\n",
    );

    write(
        root,
        "changelogs/1.0.0.yml",
        "version: \"1.0.0\"\nChanges/Improvements:\n  - Initial release\n",
    );
    write(
        root,
        "changelogs/1.1.0.yml",
        "version: \"1.1.0\"\nFabric version: 0.16.5\nUpdate overview:\n  - Performance pass\n",
    );

    write_manifest(root, "snapshots/1.0.0/a.pw.toml", "Alpha", "both", "a-1.jar");
    write_manifest(root, "snapshots/1.0.0/b.pw.toml", "Beta", "both", "b-1.jar");

    write_manifest(root, "mods/a.pw.toml", "Alpha", "both", "a-2.jar");
    write_manifest(root, "mods/c.pw.toml", "Gamma", "client", "c-1.jar");

    tmp
}

fn packlog(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("packlog").unwrap();
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join("xdg"))
        .env_remove("PACKLOG_CONFIG");
    cmd
}

#[test]
fn test_help_output() {
    let mut cmd = Command::cargo_bin("packlog").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Modpack Changelog Tool"))
        .stdout(predicate::str::contains("changelog"))
        .stdout(predicate::str::contains("diff"))
        .stdout(predicate::str::contains("mods"))
        .stdout(predicate::str::contains("mod-updates"))
        .stdout(predicate::str::contains("release-notes"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_version_output() {
    let mut cmd = Command::cargo_bin("packlog").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_changelog_command() {
    let tmp = setup_pack();

    packlog(tmp.path())
        .arg("changelog")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Changelog Summary ==="))
        .stdout(predicate::str::contains("Releases:     2"))
        .stdout(predicate::str::contains("✓ Success"));

    let document = fs::read_to_string(tmp.path().join("CHANGELOG.md")).unwrap();
    assert!(document.starts_with("# Changelog\n\n## Cubescape | v1.1.0"));
    assert!(document.contains("*Fabric Loader 0.16.5*"));
    assert!(document.contains("### Added Mods\n\n- Gamma `[Client]`"));
    assert!(document.contains("### Removed Mods\n\n- Beta"));
    assert!(document.find("v1.1.0").unwrap() < document.find("v1.0.0").unwrap());
}

#[test]
fn test_changelog_dry_run_writes_nothing() {
    let tmp = setup_pack();

    packlog(tmp.path())
        .args(["--dry-run", "changelog", "--output", "out/CHANGELOG.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[dry-run] Would write"))
        .stdout(predicate::str::contains("## Cubescape | v1.1.0"));

    assert!(!tmp.path().join("out").exists());
}

#[test]
fn test_changelog_without_snapshot_history() {
    let tmp = setup_pack();
    fs::remove_dir_all(tmp.path().join("snapshots")).unwrap();

    packlog(tmp.path())
        .arg("changelog")
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed with warnings"))
        .stdout(predicate::str::contains("No manifest snapshot for 1.0.0"));

    let document = fs::read_to_string(tmp.path().join("CHANGELOG.md")).unwrap();
    assert!(!document.contains("### Added Mods"));
}

#[test]
fn test_diff_command() {
    let tmp = setup_pack();

    packlog(tmp.path())
        .args(["diff", "snapshots/1.0.0", "mods"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### Added Mods\n\n- Gamma `[Client]`"))
        .stdout(predicate::str::contains("### Removed Mods\n\n- Beta"))
        .stdout(predicate::str::contains("- Alpha: `a-1.jar` → `a-2.jar`"));
}

#[test]
fn test_diff_missing_directory() {
    let tmp = setup_pack();

    packlog(tmp.path())
        .args(["diff", "snapshots/0.1.0", "mods"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to execute diff command"));
}

#[test]
fn test_mods_command() {
    let tmp = setup_pack();

    packlog(tmp.path())
        .arg("mods")
        .assert()
        .success()
        .stdout("- Alpha\n- Gamma `[Client]`\n");
}

#[test]
fn test_mod_updates_command() {
    let tmp = setup_pack();

    packlog(tmp.path()).arg("mod-updates").assert().success();

    let document =
        fs::read_to_string(tmp.path().join("mod-updates/changelog_mods_1.1.0.md")).unwrap();
    assert!(document.starts_with("# Cubescape v1.1.0 Mod Updates"));
    assert!(document.contains("### Updated Mods"));
}

#[test]
fn test_mod_updates_of_first_release() {
    let tmp = setup_pack();

    packlog(tmp.path())
        .args(["mod-updates", "1.0.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no previous release"));

    assert!(!tmp.path().join("mod-updates").exists());
}

#[test]
fn test_mod_updates_without_snapshot_history() {
    let tmp = setup_pack();
    write(tmp.path(), ".packlog.toml", "[render]\ntitle = \"Changelog\"\n");

    packlog(tmp.path())
        .args(["mod-updates", "1.1.0", "--live-version", "2.0.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("could not be computed"))
        .stdout(predicate::str::contains("no previous release").not())
        .stderr(predicate::str::contains("No snapshot history configured"));

    packlog(tmp.path())
        .args(["--strict", "mod-updates", "1.1.0", "--live-version", "2.0.0"])
        .assert()
        .failure();
}

#[test]
fn test_release_notes_link_from_pack_metadata() {
    let tmp = setup_pack();
    write(
        tmp.path(),
        ".packlog.toml",
        "[render]\nfull_changelog_url = \"https://example.net/{pack}/{minecraft}#v{version}\"\n",
    );

    packlog(tmp.path()).arg("release-notes").assert().success();

    let document = fs::read_to_string(tmp.path().join("release-notes.md")).unwrap();
    assert!(document.contains("https://example.net/cubescape/1.21.1#v1.1.0"));
}

#[test]
fn test_release_notes_command() {
    let tmp = setup_pack();

    packlog(tmp.path()).arg("release-notes").assert().success();

    let document = fs::read_to_string(tmp.path().join("release-notes.md")).unwrap();
    assert!(document.starts_with("- Performance pass"));
    assert!(document.contains("https://example.net/changelog#v1.1.0"));
    assert!(!document.contains("pre-release"));
}

#[test]
fn test_release_notes_unknown_version() {
    let tmp = setup_pack();

    packlog(tmp.path())
        .args(["release-notes", "9.9.9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No release note for version 9.9.9"));
}

#[test]
fn test_strict_mode_fails_on_skipped_manifest() {
    let tmp = setup_pack();
    write(tmp.path(), "mods/broken.pw.toml", "name = \"Broken\"\n");

    packlog(tmp.path())
        .arg("mods")
        .assert()
        .success()
        .stderr(predicate::str::contains("broken.pw.toml"));

    packlog(tmp.path())
        .args(["--strict", "mods"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("strict mode"));
}

#[test]
fn test_config_command_defaults() {
    let tmp = TempDir::new().unwrap();

    packlog(tmp.path())
        .args(["--no-config", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[manifests]"))
        .stdout(predicate::str::contains("dir = \"mods\""))
        .stdout(predicate::str::contains("order = \"version\""));
}

#[test]
fn test_config_command_merges_project_file() {
    let tmp = setup_pack();

    packlog(tmp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("root = \"snapshots\""))
        .stdout(predicate::str::contains("title = \"Changelog\""));
}

#[test]
fn test_missing_config_file() {
    let tmp = TempDir::new().unwrap();

    packlog(tmp.path())
        .args(["--config", "nope.toml", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to execute config command"));
}

#[test]
fn test_config_flags_conflict() {
    let tmp = TempDir::new().unwrap();

    packlog(tmp.path())
        .args(["--config", "a.toml", "--no-config", "config"])
        .assert()
        .failure();
}
