//! End-to-end tests for the create-ddl binary

use assert_cmd::cargo;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn create_ddl(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("create-ddl"));
    cmd.current_dir(temp.path())
        .env_remove("DDL_DRIVER")
        .env_remove("DDL_OUTFILE")
        .env_remove("DDL_ENGINE")
        .env_remove("DDL_CHARSET");
    cmd
}

#[test]
fn writes_every_record() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out.sql");

    create_ddl(&temp)
        .args(["--driver", "mysql", "-o"])
        .arg(&out)
        .assert()
        .success();

    let sql = std::fs::read_to_string(&out).unwrap();
    assert!(sql.starts_with("SET foreign_key_checks=0;\n"));
    assert!(sql.ends_with("SET foreign_key_checks=1;\n"));

    let player = sql.find("CREATE TABLE `player`").unwrap();
    let entry = sql.find("CREATE TABLE `entry`").unwrap();
    let comment = sql.find("CREATE TABLE `player_comment`").unwrap();
    let bookmark = sql.find("CREATE TABLE `bookmark`").unwrap();
    assert!(player < entry && entry < comment && comment < bookmark);

    assert!(sql.contains("    `id` INTEGER NOT NULL AUTO_INCREMENT,\n"));
    assert!(sql.contains("    `content` TEXT NULL,\n"));
    assert!(sql.contains("    `metadata` JSON NULL,\n"));
    assert!(sql.contains("    `public` TINYINT(1) NOT NULL DEFAULT 0,\n"));
    assert!(sql.contains("    `updated_at` DATETIME(6) NOT NULL,\n"));
    assert!(sql.contains(
        "    FOREIGN KEY (`player_id`) REFERENCES `player` (`id`) ON DELETE CASCADE,\n"
    ));
    assert!(sql.contains("    PRIMARY KEY (`id`, `created_at`)\n"));
    // player_comment.created_at is tagged "-"
    assert!(sql.contains("    `comment` VARCHAR(99) NULL,\n    `updated_at` DATETIME(6) NOT NULL,\n"));
}

#[test]
fn default_outfile_creates_sql_directory() {
    let temp = TempDir::new().unwrap();

    create_ddl(&temp).arg("-d").arg("mysql").assert().success();

    let sql = std::fs::read_to_string(temp.path().join("sql").join("master.sql")).unwrap();
    assert!(sql.contains(") ENGINE=InnoDB DEFAULT CHARACTER SET utf8mb4;\n"));
}

#[test]
fn engine_and_charset_from_env() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out.sql");

    create_ddl(&temp)
        .env("DDL_DRIVER", "mysql")
        .env("DDL_ENGINE", "MyISAM")
        .env("DDL_CHARSET", "utf8")
        .arg("--outfile")
        .arg(&out)
        .assert()
        .success();

    let sql = std::fs::read_to_string(&out).unwrap();
    assert!(sql.contains(") ENGINE=MyISAM DEFAULT CHARACTER SET utf8;\n"));
}

#[test]
fn unknown_driver_fails() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("out.sql");

    create_ddl(&temp)
        .args(["--driver", "oracle", "-o"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("oracle"));

    assert!(!out.exists());
}

#[test]
fn missing_driver_fails() {
    let temp = TempDir::new().unwrap();

    create_ddl(&temp)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--driver"));
}
