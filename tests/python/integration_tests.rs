use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

const PROGRAM: &str = "\
def area(w, h):
    scale = 2
    if w > h:
        return w * h * scale
    return w + h - 1


print(area(3, 4), 'done')
";

fn pymutant(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pymutant"))
        .current_dir(cwd)
        .args(args)
        .output()
        .expect("Failed to run pymutant")
}

fn mutant_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("Failed to read output directory")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".py") && name != "prog.py")
        .collect();
    names.sort();
    names
}

#[test]
fn test_wrong_argument_count_exits_with_status_one() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    for args in [vec![], vec!["prog.py"], vec!["prog.py", "2", "extra"]] {
        let output = pymutant(temp_dir.path(), &args);
        assert_eq!(output.status.code(), Some(1), "args: {args:?}");
        assert!(!output.stderr.is_empty());
    }
    assert!(mutant_files(temp_dir.path()).is_empty());
}

#[test]
fn test_non_numeric_count_exits_with_status_one() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    fs::write(temp_dir.path().join("prog.py"), PROGRAM).unwrap();
    let output = pymutant(temp_dir.path(), &["prog.py", "three"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(mutant_files(temp_dir.path()).is_empty());
}

#[test]
fn test_help_exits_successfully() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = pymutant(temp_dir.path(), &["--help"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("COUNT"));
}

#[test]
fn test_run_writes_numbered_mutants_and_reports_each() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    fs::write(temp_dir.path().join("prog.py"), PROGRAM).unwrap();

    let output = pymutant(temp_dir.path(), &["prog.py", "4"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert_eq!(
        mutant_files(temp_dir.path()),
        vec!["0.py", "1.py", "2.py", "3.py"]
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    let reported: Vec<&str> = stdout
        .lines()
        .filter(|line| line.ends_with("created."))
        .collect();
    assert_eq!(
        reported,
        vec![
            "Mutant 0 created.",
            "Mutant 1 created.",
            "Mutant 2 created.",
            "Mutant 3 created."
        ]
    );
}

#[test]
fn test_runs_are_reproducible() {
    let first = tempdir().expect("Failed to create temp directory");
    let second = tempdir().expect("Failed to create temp directory");
    for dir in [&first, &second] {
        fs::write(dir.path().join("prog.py"), PROGRAM).unwrap();
        let output = pymutant(dir.path(), &["prog.py", "5"]);
        assert!(output.status.success());
    }
    for i in 0..5 {
        let name = format!("{i}.py");
        assert_eq!(
            fs::read_to_string(first.path().join(&name)).unwrap(),
            fs::read_to_string(second.path().join(&name)).unwrap()
        );
    }
}

#[test]
fn test_out_dir_and_probability_overrides() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    fs::write(temp_dir.path().join("prog.py"), "x = 5 + 3\n").unwrap();

    let output = pymutant(
        temp_dir.path(),
        &[
            "prog.py",
            "2",
            "--out-dir",
            "mutants/nested",
            "--probability",
            "number_literal=1",
            "--probability",
            "binary_op=1",
            "--probability",
            "assign=0",
        ],
    );
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let out_dir = temp_dir.path().join("mutants/nested");
    for i in 0..2 {
        let text = fs::read_to_string(out_dir.join(format!("{i}.py"))).unwrap();
        assert_eq!(text, "x = 481 - 481\n");
    }
}

#[test]
fn test_config_file_is_honored() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    fs::write(temp_dir.path().join("prog.py"), "if a > b:\n    pass\n").unwrap();
    fs::write(
        temp_dir.path().join("pymutant.toml"),
        "out_dir = \"generated\"\n\n[probabilities]\ncomparison = 1.0\n",
    )
    .unwrap();

    let output = pymutant(temp_dir.path(), &["prog.py", "1"]);
    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("generated/0.py")).unwrap(),
        "if a <= b:\n    pass\n"
    );
}

#[test]
fn test_unknown_category_is_rejected() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    fs::write(temp_dir.path().join("prog.py"), PROGRAM).unwrap();
    let output = pymutant(temp_dir.path(), &["prog.py", "1", "--probability", "loops=1"]);
    assert!(!output.status.success());
    assert!(mutant_files(temp_dir.path()).is_empty());
}

#[test]
fn test_syntax_error_writes_nothing() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    fs::write(temp_dir.path().join("prog.py"), "def broken(:\n    pass\n").unwrap();
    let output = pymutant(temp_dir.path(), &["prog.py", "3"]);
    assert!(!output.status.success());
    assert!(mutant_files(temp_dir.path()).is_empty());
}

#[test]
fn test_missing_source_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = pymutant(temp_dir.path(), &["absent.py", "1"]);
    assert!(!output.status.success());
    assert!(mutant_files(temp_dir.path()).is_empty());
}

#[test]
fn test_zero_count_writes_nothing() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    fs::write(temp_dir.path().join("prog.py"), PROGRAM).unwrap();
    let output = pymutant(temp_dir.path(), &["prog.py", "0"]);
    assert!(output.status.success());
    assert!(mutant_files(temp_dir.path()).is_empty());
}
