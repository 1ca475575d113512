//! Integration tests for the CLI surface: diagnostics, exit behavior,
//! verbose and debug output

#[cfg(test)]
mod cli_surface_tests {
    use serde_json::{json, Value};
    use std::fs;
    use std::process::Command;
    use tempfile::tempdir;

    fn run_uploadinject(args: &[&str]) -> (String, String, bool) {
        let output = Command::new(env!("CARGO_BIN_EXE_uploadinject"))
            .args(args)
            .output()
            .expect("failed to run uploadinject");

        (
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
            output.status.success(),
        )
    }

    fn upload_collection(name: &str) -> Value {
        json!({
            "info": { "name": "Agave-Staging" },
            "item": [
                {
                    "name": "staging",
                    "item": [
                        {
                            "name": name,
                            "request": {
                                "method": "POST",
                                "body": {
                                    "mode": "formdata",
                                    "formdata": [
                                        { "key": "fileToUpload", "src": "", "type": "file" }
                                    ]
                                }
                            }
                        }
                    ]
                }
            ]
        })
    }

    fn write_fixture(dir: &std::path::Path, name: &str, value: &Value) -> String {
        let path = dir.join(name);
        fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_missing_collection_argument() {
        let (stdout, stderr, success) = run_uploadinject(&[]);

        assert!(!success);
        assert!(stdout.is_empty());
        assert!(
            stderr.contains("No Postman collection provided"),
            "unexpected stderr: {}",
            stderr
        );
        assert!(stderr.contains("ERROR:"));
    }

    #[test]
    fn test_nonexistent_collection_file() {
        let (_, stderr, success) = run_uploadinject(&["--", "missing.json"]);

        assert!(!success);
        assert!(
            stderr.contains("missing.json: No such file or directory"),
            "unexpected stderr: {}",
            stderr
        );
    }

    #[test]
    fn test_invalid_json_collection() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("broken.json");
        fs::write(&path, "{\"info\": ").unwrap();

        let (_, stderr, success) = run_uploadinject(&["--", path.to_str().unwrap()]);

        assert!(!success);
        assert!(
            stderr.contains("Invalid json found in"),
            "unexpected stderr: {}",
            stderr
        );
    }

    #[test]
    fn test_empty_json_collection() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("empty.json");
        fs::write(&path, "{}").unwrap();

        let (_, stderr, success) = run_uploadinject(&["--", path.to_str().unwrap()]);

        assert!(!success);
        assert!(stderr.contains("Invalid json found in"));
    }

    #[test]
    fn test_unmatched_replacement_fails_without_output() {
        let tmp = tempdir().unwrap();
        let collection = write_fixture(
            tmp.path(),
            "collection.json",
            &upload_collection("apps::Present Upload"),
        );
        let replacements = write_fixture(
            tmp.path(),
            "replacements.json",
            &json!({
                "apps::Present Upload": "data/app.json",
                "never::Listed Upload": "data/none"
            }),
        );
        let output = tmp.path().join("filtered.json");

        let (_, stderr, success) = run_uploadinject(&[
            "--replacements",
            &replacements,
            "--output",
            output.to_str().unwrap(),
            "--",
            &collection,
        ]);

        assert!(!success);
        assert!(
            stderr.contains("Failed to process one or more named tests"),
            "unexpected stderr: {}",
            stderr
        );
        assert!(stderr.contains("never::Listed Upload"));
        assert!(!output.exists(), "no partial document should be written");
    }

    #[test]
    fn test_builtin_table_reports_unstaged_tests() {
        // Without --replacements the compiled-in table applies; a collection
        // missing its tests trips the completeness check
        let tmp = tempdir().unwrap();
        let collection = write_fixture(
            tmp.path(),
            "collection.json",
            &upload_collection("apps::Some Other Upload"),
        );

        let (_, stderr, success) = run_uploadinject(&["--", &collection]);

        assert!(!success);
        assert!(stderr.contains("apps setup::Stage wc App"));
        assert!(stderr.contains("uuids setup::Stage File"));
    }

    #[test]
    fn test_verbose_summary_on_success() {
        let tmp = tempdir().unwrap();
        let collection = write_fixture(
            tmp.path(),
            "collection.json",
            &upload_collection("apps::Present Upload"),
        );
        let replacements = write_fixture(
            tmp.path(),
            "replacements.json",
            &json!({ "apps::Present Upload": "data/app.json" }),
        );
        let output = tmp.path().join("filtered.json");

        let (stdout, stderr, success) = run_uploadinject(&[
            "-v",
            "--replacements",
            &replacements,
            "--output",
            output.to_str().unwrap(),
            "--",
            &collection,
        ]);

        assert!(success, "expected success, stderr: {}", stderr);
        assert!(stdout.contains("Summary"));
        assert!(stdout.contains("Total replacements: 1"));
        assert!(stdout.contains("Unmatched replacements: 0"));
        assert!(stderr.contains("Reading postman collection from:"));
    }

    #[test]
    fn test_verbose_summary_precedes_mismatch_error() {
        let tmp = tempdir().unwrap();
        let collection = write_fixture(
            tmp.path(),
            "collection.json",
            &upload_collection("apps::Present Upload"),
        );
        let replacements = write_fixture(
            tmp.path(),
            "replacements.json",
            &json!({ "never::Listed Upload": "data/none" }),
        );

        let (stdout, stderr, success) =
            run_uploadinject(&["-v", "--replacements", &replacements, "--", &collection]);

        assert!(!success);
        // the defaulted upload still counts
        assert!(stdout.contains("Total replacements: 1"));
        assert!(stdout.contains("Unmatched replacements: 1"));
        assert!(stdout.contains("\tnever::Listed Upload"));
        assert!(stderr.contains("Failed to process one or more named tests"));
    }

    #[test]
    fn test_debug_mode_dumps_parameters() {
        let tmp = tempdir().unwrap();
        let collection = write_fixture(
            tmp.path(),
            "collection.json",
            &upload_collection("apps::Present Upload"),
        );
        let replacements = write_fixture(
            tmp.path(),
            "replacements.json",
            &json!({ "apps::Present Upload": "data/app.json" }),
        );
        let output = tmp.path().join("filtered.json");

        let (_, stderr, success) = run_uploadinject(&[
            "-d",
            "--replacements",
            &replacements,
            "--output",
            output.to_str().unwrap(),
            "--",
            &collection,
        ]);

        assert!(success, "expected success, stderr: {}", stderr);
        assert!(stderr.contains("1. Updating \"apps::Present Upload\""));
        assert!(stderr.contains("<====="));
        assert!(stderr.contains("=====>"));
        assert!(stderr.contains("data/app.json"));
    }

    #[test]
    fn test_invalid_replacements_file() {
        let tmp = tempdir().unwrap();
        let collection = write_fixture(
            tmp.path(),
            "collection.json",
            &upload_collection("apps::Present Upload"),
        );
        let replacements = tmp.path().join("replacements.json");
        fs::write(&replacements, "[\"not\", \"a\", \"map\"]").unwrap();

        let (_, stderr, success) =
            run_uploadinject(&["--replacements", replacements.to_str().unwrap(), "--", &collection]);

        assert!(!success);
        assert!(
            stderr.contains("Replacement table"),
            "unexpected stderr: {}",
            stderr
        );
    }
}
