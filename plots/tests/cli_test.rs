//! Runs the render_plots binary the way a user would

use std::process::Command;

const EXPECTED_STDOUT: [&str; 5] = [
    "All plots generated successfully!",
    "- plot1_throughput_vs_msgsize.png",
    "- plot2_throughput_vs_threads.png",
    "- plot3_cache_vs_msgsize.png",
    "- plot4_cycles_per_byte.png",
];

#[test]
fn test_no_arguments_writes_into_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_render_plots"))
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run render_plots");

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, EXPECTED_STDOUT);

    for line in &EXPECTED_STDOUT[1..] {
        let name = line.trim_start_matches("- ");
        let path = dir.path().join(name);
        assert!(path.is_file(), "missing {name}");
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}

#[test]
fn test_failed_run_prints_no_confirmation() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    std::fs::write(&blocker, b"").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_render_plots"))
        .arg("--output-dir")
        .arg(&blocker)
        .output()
        .expect("failed to run render_plots");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("rendering charts into"));
}
