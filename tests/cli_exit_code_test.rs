#![cfg(feature = "cli")]

use anyhow::Result;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_cli(args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_book-probe"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}

#[test]
fn test_missing_config_file_exits_with_1() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let missing = temp_dir.path().join("missing.toml");

    let output = run_cli(&["--config", missing.to_str().unwrap()])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load config file"), "{}", stderr);
    Ok(())
}

#[test]
fn test_invalid_config_file_exits_with_1() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("book-probe.toml");
    std::fs::write(&config_path, "[target]\npath = \"/api/Book\"\n")?;

    let output = run_cli(&["--config", config_path.to_str().unwrap()])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn test_invalid_flags_exit_with_1_before_any_request() -> Result<()> {
    let output = run_cli(&["--preview-chars", "0"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let output = run_cli(&["--base-url", "ftp://localhost"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    Ok(())
}

/// 連線失敗仍算是完成一次檢查，退出碼為 0
#[test]
fn test_unreachable_host_exits_with_0() -> Result<()> {
    let output = run_cli(&["--base-url", "http://127.0.0.1:1"])?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Error: "), "{}", stdout);
    assert_eq!(stdout.lines().count(), 1);
    // 預設不輸出任何 INFO 日誌
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("INFO"), "{}", stderr);
    Ok(())
}
