use std::{fs, process::Command};

fn symgraph() -> Command {
    Command::new(env!("CARGO_BIN_EXE_symgraph"))
}

#[test]
fn no_arguments_exits_with_usage() {
    let out = symgraph().output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Usage:"), "{stderr}");
}

#[test]
fn two_arguments_exit_with_usage() {
    let out = symgraph().args(["a.txt", "b.txt"]).output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage:"));
}

#[test]
fn missing_file_exits_with_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = symgraph()
        .arg("does-not-exist.txt")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(!out.stderr.is_empty());
    assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
}

#[test]
fn success_writes_charts_into_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("code.rs"), "let x = (a + b) * [c];\n").unwrap();

    let out = symgraph()
        .arg("code.rs")
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0), "{}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Graph for unigrams has been generated at: code_unigrams.png"));
    assert!(stdout.contains("Graph for bigrams has been generated at: code_bigrams.png"));
    assert!(dir.path().join("code_unigrams.png").exists());
    assert!(dir.path().join("code_bigrams.png").exists());
}
