//! Integration tests for the tabconv binary

#[cfg(test)]
mod cli_tests {
    use std::fs;
    use std::path::Path;
    use std::process::{Command, Output};
    use tempfile::tempdir;

    fn run_tabconv(dir: &Path, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_tabconv"))
            .current_dir(dir)
            .args(args)
            .env_remove("RUST_LOG")
            .output()
            .expect("failed to run tabconv")
    }

    fn stderr(output: &Output) -> String {
        String::from_utf8_lossy(&output.stderr).into_owned()
    }

    #[test]
    fn test_csv_to_json_in_working_directory() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("data.csv"), "name,age\nJohn,22\nAlice,30\n").unwrap();

        let output = run_tabconv(dir.path(), &["data.csv", "json"]);
        assert!(output.status.success(), "stderr: {}", stderr(&output));
        assert!(output.stdout.is_empty());

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("data.json")).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"name": "John", "age": "22"},
                {"name": "Alice", "age": "30"}
            ])
        );
    }

    #[test]
    fn test_json_to_csv_with_dotted_uppercase_format() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("data.json"), r#"[{"name":"John","age":22}]"#).unwrap();

        let output = run_tabconv(dir.path(), &["data.json", ".CSV", "--line-ending", "lf"]);
        assert!(output.status.success(), "stderr: {}", stderr(&output));
        assert_eq!(
            fs::read_to_string(dir.path().join("data.csv")).unwrap(),
            "name,age\nJohn,22\n"
        );
    }

    #[test]
    fn test_same_format_writes_nothing() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("data.csv"), "name,age\nJohn,22\n").unwrap();

        let output = run_tabconv(dir.path(), &["data.csv", "csv"]);
        assert!(output.status.success());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_missing_file_reports_not_found() {
        let dir = tempdir().unwrap();

        let output = run_tabconv(dir.path(), &["missing.csv", "json"]);
        assert!(!output.status.success());
        assert!(stderr(&output).contains("File not found"), "stderr: {}", stderr(&output));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("data.txt"), "hello").unwrap();

        let output = run_tabconv(dir.path(), &["data.txt", "json"]);
        assert!(!output.status.success());
        assert!(stderr(&output).contains("Unsupported format: json"));
    }

    #[test]
    fn test_malformed_json_reports_parse_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("bad.json"), r#"{"name": "John", "age": 22,,,}"#).unwrap();

        let output = run_tabconv(dir.path(), &["bad.json", "csv"]);
        assert!(!output.status.success());
        assert!(stderr(&output).contains("Parse error in bad.json at line 1"));
    }

    #[test]
    fn test_wrong_argument_count_prints_usage() {
        let dir = tempdir().unwrap();

        let output = run_tabconv(dir.path(), &["data.csv"]);
        assert!(!output.status.success());
        assert!(stderr(&output).contains("Usage"));
    }

    #[test]
    fn test_output_dir_flag() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out");
        fs::create_dir(&out).unwrap();
        fs::write(dir.path().join("data.csv"), "a,b\n1,2\n").unwrap();

        let output = run_tabconv(dir.path(), &["data.csv", "json", "--output-dir", "out", "--atomic"]);
        assert!(output.status.success(), "stderr: {}", stderr(&output));
        assert!(out.join("data.json").exists());
        assert!(!dir.path().join("data.json").exists());
    }
}
