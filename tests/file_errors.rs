use std::fs;
use std::process::Command;

#[test]
fn missing_input_error() {
    let exe = env!("CARGO_BIN_EXE_pizza");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.in");
    let output = Command::new(exe)
        .args(["--file-input", input.to_str().unwrap(), "-q"])
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error reading input file"));
    assert!(stderr.contains("Check that the file exists"));
    assert!(!dir.path().join("missing.in.out").exists());
}

#[test]
fn malformed_input_writes_nothing() {
    let exe = env!("CARGO_BIN_EXE_pizza");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.in");
    fs::write(&input, "10\n4 six 5\n").unwrap();
    let output = Command::new(exe)
        .args(["--file-input", input.to_str().unwrap(), "-q"])
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("parsing input file"));
    assert!(stderr.contains("'six' on line 2"));
    assert!(!dir.path().join("bad.in.out").exists());
}

#[test]
fn malformed_input_keeps_existing_output() {
    let exe = env!("CARGO_BIN_EXE_pizza");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.in");
    let out = dir.path().join("bad.out");
    fs::write(&input, "1O\n1 2\n").unwrap();
    fs::write(&out, "1\n0\n").unwrap();
    let status = Command::new(exe)
        .args([
            "--file-input",
            input.to_str().unwrap(),
            "--file-output",
            out.to_str().unwrap(),
            "-q",
        ])
        .status()
        .expect("run failed");
    assert!(!status.success());
    assert_eq!(fs::read_to_string(&out).unwrap(), "1\n0\n");
}

#[test]
fn unwritable_output_error() {
    let exe = env!("CARGO_BIN_EXE_pizza");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("ok.in");
    fs::write(&input, "10\n4 6 5\n").unwrap();
    let out = dir.path().join("no_such_dir").join("ok.out");
    let output = Command::new(exe)
        .args([
            "--file-input",
            input.to_str().unwrap(),
            "--file-output",
            out.to_str().unwrap(),
            "-q",
        ])
        .output()
        .expect("run failed");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error writing output file"));
}
