use std::process::Command;
use std::path::PathBuf;

fn get_cli_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_trajectory-cli"))
}

const RIFLE_ARGS: [&str; 9] = [
    "trajectory",
    "--velocity", "800",
    "--drag-coefficient", "0.3",
    "--weight", "10",
    "--diameter", "7.62",
];

#[test]
fn test_cli_trajectory_basic() {
    let output = Command::new(get_cli_binary())
        .args(RIFLE_ARGS)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("TRAJECTORY RESULTS"), "Should contain trajectory output");
    assert!(stdout.contains("Range"), "Should contain a range line");
}

#[test]
fn test_cli_output_format_json() {
    let output = Command::new(get_cli_binary())
        .args(RIFLE_ARGS)
        .args(["--output", "json"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should be valid JSON");

    let trajectory = report["trajectory"].as_array().expect("trajectory array");
    assert_eq!(trajectory.len(), 2024);
    assert_eq!(trajectory[0]["time"], 0.0);
    assert!(trajectory.last().unwrap()["y"].as_f64().unwrap() <= 0.0);
    assert_eq!(report["weapon"]["bullet_weight_g"], 10.0);
}

#[test]
fn test_cli_output_format_csv() {
    let output = Command::new(get_cli_binary())
        .args(RIFLE_ARGS)
        .args(["--output", "csv", "--no-spin-drift", "--no-coriolis"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("time,x,y,velocity_x,velocity_y"));
    assert_eq!(lines.next(), Some("0.00,0.000,0.000,297.684,297.684"));
    assert_eq!(lines.count(), 2023);
}

#[test]
fn test_cli_weapon_file_with_flag_override() {
    let path = std::env::temp_dir()
        .join(format!("trajectory_cli_weapon_{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{"initial_speed": 800.0, "drag_coefficient": 0.3, "bullet_weight_g": 10.0, "bullet_diameter_mm": 7.62}"#,
    )
    .unwrap();

    let output = Command::new(get_cli_binary())
        .args(["trajectory", "--weapon"])
        .arg(&path)
        .args(["--velocity", "0", "--output", "csv"])
        .output()
        .expect("Failed to execute command");
    std::fs::remove_file(&path).ok();

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    // Zero muzzle speed never leaves the ground
    assert_eq!(stdout.lines().count(), 2);
}

#[test]
fn test_cli_weapon_file_with_unsuffixed_bullet_keys() {
    let path = std::env::temp_dir()
        .join(format!("trajectory_cli_plain_keys_{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{"initial_speed": 800, "drag_coefficient": 0.3, "bullet_weight": 10, "bullet_diameter": 7.62}"#,
    )
    .unwrap();

    let output = Command::new(get_cli_binary())
        .args(["trajectory", "--weapon"])
        .arg(&path)
        .args(["--output", "json"])
        .output()
        .expect("Failed to execute command");
    std::fs::remove_file(&path).ok();

    assert!(output.status.success(), "Command should succeed");
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should be valid JSON");
    assert_eq!(report["weapon"]["bullet_weight_g"], 10.0);
    assert_eq!(report["trajectory"].as_array().expect("trajectory array").len(), 2024);
}

#[test]
fn test_cli_zero_weight_warning_needs_drag_force() {
    let with_drag = Command::new(get_cli_binary())
        .args(RIFLE_ARGS)
        .args(["--weight", "0"])
        .output()
        .expect("Failed to execute command");
    assert!(with_drag.status.success());
    let stderr = String::from_utf8_lossy(&with_drag.stderr);
    assert!(stderr.contains("bullet weight is 0 g"), "stderr: {stderr}");

    let without_drag = Command::new(get_cli_binary())
        .args(RIFLE_ARGS)
        .args(["--weight", "0", "--drag-coefficient", "0"])
        .output()
        .expect("Failed to execute command");
    assert!(without_drag.status.success());
    let stderr = String::from_utf8_lossy(&without_drag.stderr);
    assert!(!stderr.contains("Warning"), "stderr: {stderr}");
}

#[test]
fn test_cli_missing_weapon_file() {
    let output = Command::new(get_cli_binary())
        .args(["trajectory", "--weapon", "/nonexistent/weapon.json"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Missing file should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot read weapon file"), "stderr: {stderr}");
}

#[test]
fn test_cli_iteration_cap() {
    let output = Command::new(get_cli_binary())
        .args(RIFLE_ARGS)
        .args(["--max-iterations", "50"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Capped run should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("did not reach the ground"), "stderr: {stderr}");
}

#[test]
fn test_cli_info() {
    let output = Command::new(get_cli_binary())
        .arg("info")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("EXTERIOR BALLISTICS"));
}

#[test]
fn test_cli_help() {
    let output = Command::new(get_cli_binary())
        .args(["--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Help command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("trajectory"), "Should list trajectory command");
    assert!(stdout.contains("info"), "Should list info command");
}

#[test]
fn test_cli_invalid_command() {
    let output = Command::new(get_cli_binary())
        .args(["invalid-command"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Invalid command should fail");
}
