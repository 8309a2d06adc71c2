//! Configuration tests.

use std::process::Command;

use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn fail_config_file_unknown_extension() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;

    let mut cmd = Command::cargo_bin("devhelper")?;
    cmd.current_dir(&dir)
        .args(["--config", "config.unknown", "uri", "a"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("extension"));

    Ok(())
}

#[test]
fn fail_config_file_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;

    let mut cmd = Command::cargo_bin("devhelper")?;
    cmd.current_dir(&dir)
        .args(["--config", "not_found.json", "uri", "a"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("os error 2"));

    Ok(())
}

#[test]
fn default_toml() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;

    dir.child("devhelper.toml").write_str(
        r#"
        [subnet]
        min_mask_bits = 30
        max_mask_bits = 31
        "#,
    )?;

    let mut cmd = Command::cargo_bin("devhelper")?;
    cmd.current_dir(&dir).args(["subnet", "192.168.1.7"]);

    cmd.assert().success().stdout(
        "previous address: 192.168.1.6\n\
         /31\t192.168.1.6 - 192.168.1.7\tmask 255.255.255.254\t2 addresses\tprevious \
         192.168.1.4\tnext 192.168.1.8\n\
         /30\t192.168.1.4 - 192.168.1.7\tmask 255.255.255.252\t4 addresses\tprevious \
         192.168.1.0\tnext 192.168.1.8\n",
    );

    Ok(())
}

#[test]
fn default_json() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;

    dir.child("devhelper.json")
        .write_str(r#"{ "format": "json" }"#)?;

    let mut cmd = Command::cargo_bin("devhelper")?;
    cmd.current_dir(&dir).args(["build", "--host", "h"]);

    cmd.assert().success().stdout("\"h\"\n");

    Ok(())
}

#[test]
fn explicit_yaml() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;

    dir.child("custom.yml").write_str("format: json\n")?;

    let mut cmd = Command::cargo_bin("devhelper")?;
    cmd.current_dir(&dir)
        .args(["--config", "custom.yml", "--format", "text", "build", "--path", "/p"]);

    // The command line takes precedence over the file.
    cmd.assert().success().stdout("/p\n");

    Ok(())
}

#[test]
fn fail_invalid_mask_range() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;

    dir.child("devhelper.yaml")
        .write_str("subnet:\n  min_mask_bits: 24\n  max_mask_bits: 8\n")?;

    let mut cmd = Command::cargo_bin("devhelper")?;
    cmd.current_dir(&dir).args(["subnet", "10.0.0.0"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("min_mask_bits"));

    Ok(())
}

#[test]
fn fail_unknown_field() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;

    dir.child("devhelper.toml").write_str("colour = \"red\"\n")?;

    let mut cmd = Command::cargo_bin("devhelper")?;
    cmd.current_dir(&dir).args(["uri", "a"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("colour"));

    Ok(())
}
