use std::process::Command;

fn missing_file(name: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!(
        "bench_plot_missing_{}_{name}",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    path
}

#[test]
fn test_columns_error_is_reported_once() {
    let path = missing_file("columns.txt");
    let output = Command::new(env!("CARGO_BIN_EXE_bench-plot"))
        .arg(&path)
        .arg("--headless")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("cannot read data file").count(), 1, "stderr: {stderr}");
}

#[test]
fn test_ratio_zero_denominator_exits_non_zero() {
    let path = std::env::temp_dir().join(format!("bench_plot_zero_{}.txt", std::process::id()));
    std::fs::write(&path, "# run\nN a b c d e\n1 0 20 3 4 5\n").unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_bench-plot-cmp"))
        .arg(&path)
        .args(["--cmp", "--headless"])
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    std::fs::remove_file(&path).ok();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("ratio denominator is zero").count(), 1, "stderr: {stderr}");
}
