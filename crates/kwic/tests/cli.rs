//! CLI integration tests for kwic commands.
//!
//! These tests focus on exit codes and the searched content, not on exact formatting.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

/// Helper to create a temp directory for tests.
fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

/// Helper to get a kwic command.
fn kwic() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("kwic").unwrap()
}

/// Helper to run `kwic` in `dir` with HOME isolated to it.
fn kwic_in(dir: &Path) -> Command {
    let mut cmd = kwic();
    cmd.env("HOME", dir).env_remove("RUST_LOG").current_dir(dir);
    cmd
}

/// Writes a document into `dir` and returns its file name.
fn write_doc(dir: &Path, contents: &str) -> &'static str {
    fs::write(dir.join("doc.txt"), contents).unwrap();
    "doc.txt"
}

/// Runs a command and parses its stdout as JSON.
fn json_output(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

mod search {
    use super::*;

    #[test]
    fn highlights_terms_found_together() {
        let dir = temp_dir();
        let doc = write_doc(dir.path(), "The alpha beta method works.");

        kwic_in(dir.path())
            .args(["search", doc, "alpha beta"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "The <<alpha>> <<beta>> method works.",
            ));
    }

    #[test]
    fn reads_document_from_stdin() {
        let dir = temp_dir();

        kwic_in(dir.path())
            .args(["search", "-", "beta"])
            .write_stdin("alpha beta gamma")
            .assert()
            .success()
            .stdout(predicate::str::contains("alpha <<beta>> gamma"));
    }

    #[test]
    fn window_flag_limits_distance() {
        let dir = temp_dir();
        let doc = write_doc(dir.path(), "alpha gap gap gap gap beta");

        kwic_in(dir.path())
            .args(["search", doc, "alpha beta", "--window", "5"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No hits."));

        kwic_in(dir.path())
            .args(["search", doc, "alpha beta", "--window", "50"])
            .assert()
            .success()
            .stdout(predicate::str::contains("<<beta>>"));
    }

    #[test]
    fn max_hits_flag_caps_results() {
        let dir = temp_dir();
        let doc = write_doc(dir.path(), "red fox. red fox. red fox. red fox.");

        let json = json_output(kwic_in(dir.path()).args([
            "search", doc, "red fox", "--max-hits", "2", "--json",
        ]));
        assert_eq!(json["queries"][0]["total_hits"], 2);
    }

    #[test]
    fn json_spans_are_character_offsets() {
        let dir = temp_dir();
        let doc = write_doc(dir.path(), "café alpha beta");

        let json = json_output(kwic_in(dir.path()).args(["search", doc, "alpha beta", "--json"]));
        let spans = &json["queries"][0]["hits"][0]["spans"];
        assert_eq!(spans[0]["text"], "alpha");
        assert_eq!(spans[0]["start"], 5);
        assert_eq!(spans[0]["end"], 10);
        assert_eq!(spans[1]["start"], 11);
        assert_eq!(spans[1]["end"], 15);
    }

    #[test]
    fn json_reports_spans() {
        let dir = temp_dir();
        let doc = write_doc(dir.path(), "The alpha beta method works.");

        let json = json_output(kwic_in(dir.path()).args(["search", doc, "alpha beta", "--json"]));
        let query = &json["queries"][0];
        assert_eq!(query["query"], "alpha beta");
        assert_eq!(query["total_hits"], 1);

        let spans = &query["hits"][0]["spans"];
        assert_eq!(spans[0]["text"], "alpha");
        assert_eq!(spans[0]["start"], 4);
        assert_eq!(spans[0]["end"], 9);
        assert_eq!(spans[1]["text"], "beta");
        assert_eq!(
            query["hits"][0]["excerpt"],
            "The <<alpha>> <<beta>> method works."
        );
    }

    #[test]
    fn multiple_queries_get_headings() {
        let dir = temp_dir();
        let doc = write_doc(dir.path(), "The alpha beta method works.");

        kwic_in(dir.path())
            .args(["search", doc, "alpha", "method"])
            .assert()
            .success()
            .stdout(predicate::str::contains("alpha (1 hit)"))
            .stdout(predicate::str::contains("method (1 hit)"));
    }

    #[test]
    fn plurals_can_be_disabled() {
        let dir = temp_dir();
        let doc = write_doc(dir.path(), "Two horses ran.");

        kwic_in(dir.path())
            .args(["search", doc, "horse"])
            .assert()
            .success()
            .stdout(predicate::str::contains("<<horses>>"));

        kwic_in(dir.path())
            .args(["search", doc, "horse", "--no-plurals"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No hits."));
    }

    #[test]
    fn synonyms_flag_expands_terms() {
        let dir = temp_dir();
        let doc = write_doc(dir.path(), "A red automobile.");
        fs::write(dir.path().join("syn.txt"), "# vehicles\ncar|automobile\n").unwrap();

        kwic_in(dir.path())
            .args(["search", doc, "red car", "--synonyms", "syn.txt"])
            .assert()
            .success()
            .stdout(predicate::str::contains("<<red>> <<automobile>>"));
    }

    #[test]
    fn config_sets_markers_and_synonyms() {
        let dir = temp_dir();
        let doc = write_doc(dir.path(), "A red automobile.");
        fs::write(
            dir.path().join(".kwic.toml"),
            r#"root = true

[excerpt]
highlight_open = "["
highlight_close = "]"

[expansion]
synonyms = [["car", "automobile"]]
"#,
        )
        .unwrap();

        kwic_in(dir.path())
            .args(["search", doc, "red car"])
            .assert()
            .success()
            .stdout(predicate::str::contains("A [red] [automobile]."));
    }

    #[test]
    fn boolean_only_query_finds_nothing() {
        let dir = temp_dir();
        let doc = write_doc(dir.path(), "AND OR");

        kwic_in(dir.path())
            .args(["search", doc, "AND OR"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No hits."));
    }

    #[test]
    fn missing_document_fails() {
        let dir = temp_dir();

        kwic_in(dir.path())
            .args(["search", "nope.txt", "alpha"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to read nope.txt"));
    }

    #[test]
    fn missing_synonyms_file_fails() {
        let dir = temp_dir();
        let doc = write_doc(dir.path(), "alpha");

        kwic_in(dir.path())
            .args(["search", doc, "alpha", "--synonyms", "nope.txt"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("error"));
    }

    #[test]
    fn invalid_config_fails() {
        let dir = temp_dir();
        let doc = write_doc(dir.path(), "alpha");
        fs::write(dir.path().join(".kwic.toml"), "root = true\n[search\n").unwrap();

        kwic_in(dir.path())
            .args(["search", doc, "alpha"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to load configuration"));
    }

    #[test]
    fn verbose_logs_to_stderr() {
        let dir = temp_dir();
        let doc = write_doc(dir.path(), "alpha beta");

        kwic_in(dir.path())
            .args(["search", doc, "alpha beta", "-v"])
            .assert()
            .success()
            .stderr(predicate::str::contains("search complete"));
    }
}

mod batch {
    use super::*;

    #[test]
    fn runs_every_query() {
        let dir = temp_dir();
        let doc = write_doc(dir.path(), "The alpha beta method works.");
        fs::write(
            dir.path().join("queries.txt"),
            "# smoke tests\nalpha beta\n\nmethod\nmissing\n",
        )
        .unwrap();

        kwic_in(dir.path())
            .args(["batch", doc, "--queries", "queries.txt"])
            .assert()
            .success()
            .stdout(predicate::str::contains("alpha beta (1 hit)"))
            .stdout(predicate::str::contains("method (1 hit)"))
            .stdout(predicate::str::contains("missing (0 hits)"))
            .stdout(predicate::str::contains("smoke").not());
    }

    #[test]
    fn verbose_prints_terms() {
        let dir = temp_dir();
        let doc = write_doc(dir.path(), "see sec.(192) here");
        fs::write(dir.path().join("queries.txt"), "\"sec.(192)\"\n").unwrap();

        kwic_in(dir.path())
            .args(["batch", doc, "-q", "queries.txt", "-v"])
            .assert()
            .success()
            .stdout(predicate::str::contains("terms: <LITERAL>[\"]sec.(192)[\"]"))
            .stdout(predicate::str::contains("<<sec.(192)>>"));
    }

    #[test]
    fn json_lists_queries() {
        let dir = temp_dir();
        let doc = write_doc(dir.path(), "alpha beta");
        fs::write(dir.path().join("queries.txt"), "alpha\nbeta\n").unwrap();

        let json = json_output(kwic_in(dir.path()).args([
            "batch", doc, "-q", "queries.txt", "--json",
        ]));
        assert_eq!(json["queries"].as_array().unwrap().len(), 2);
        assert_eq!(json["queries"][1]["query"], "beta");
    }

    #[test]
    fn missing_query_file_fails() {
        let dir = temp_dir();
        let doc = write_doc(dir.path(), "alpha");

        kwic_in(dir.path())
            .args(["batch", doc, "-q", "nope.txt"])
            .assert()
            .failure();
    }
}

mod parse {
    use super::*;

    #[test]
    fn shows_terms_clauses_and_patterns() {
        let dir = temp_dir();

        kwic_in(dir.path())
            .args(["parse", "ox", "\"dark horse\"", "AND", "168(a)"])
            .assert()
            .success()
            .stdout(predicate::str::contains("<LITERAL>[\"]dark"))
            .stdout(predicate::str::contains("\"dark horse\""))
            .stdout(predicate::str::contains("Patterns:"))
            .stdout(predicate::str::contains("168\\(a\\)"));
    }

    #[test]
    fn json_orders_clauses_by_anchor() {
        let dir = temp_dir();

        let json = json_output(kwic_in(dir.path()).args([
            "parse",
            "ox \"dark horse\" cow",
            "--json",
        ]));
        assert_eq!(json["canonical"], "ox \"dark horse\" cow");
        assert_eq!(json["terms"].as_array().unwrap().len(), 4);
        assert_eq!(json["clauses"][0]["text"], "dark horse");
        assert_eq!(json["clauses"][0]["literal"], true);
        assert_eq!(json["clauses"][1]["text"], "cow");
        assert_eq!(json["clauses"][2]["text"], "ox");
    }

    #[test]
    fn empty_query_reports_no_clauses() {
        let dir = temp_dir();

        kwic_in(dir.path())
            .args(["parse", "AND", "OR"])
            .assert()
            .success()
            .stdout(predicate::str::contains("(empty query)"))
            .stdout(predicate::str::contains("Clauses").not());
    }
}

mod init {
    use super::*;

    #[test]
    fn creates_config_file() {
        let dir = temp_dir();

        kwic_in(dir.path())
            .arg("init")
            .assert()
            .success()
            .stdout(predicate::str::contains("Configuration written:"));

        let contents = fs::read_to_string(dir.path().join(".kwic.toml")).unwrap();
        assert!(contents.contains("# [search]"));
    }

    #[test]
    fn fails_if_config_exists() {
        let dir = temp_dir();
        let sub = dir.path().join("project");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join(".kwic.toml"), "existing").unwrap();

        kwic_in(dir.path())
            .current_dir(&sub)
            .arg("init")
            .assert()
            .failure()
            .stderr(predicate::str::contains("--force"));
    }

    #[test]
    fn force_overwrites_existing() {
        let dir = temp_dir();
        let sub = dir.path().join("project");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join(".kwic.toml"), "old content").unwrap();

        kwic_in(dir.path())
            .current_dir(&sub)
            .args(["init", "--force"])
            .assert()
            .success();

        let contents = fs::read_to_string(sub.join(".kwic.toml")).unwrap();
        assert!(contents.contains("# [search]"));
    }
}

mod config {
    use super::*;

    #[test]
    fn prints_defaults_without_config() {
        let dir = temp_dir();

        kwic_in(dir.path())
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains("match_window = 500"))
            .stdout(predicate::str::contains("max_hits = 8"));
    }

    #[test]
    fn prints_merged_settings() {
        let dir = temp_dir();
        fs::write(
            dir.path().join(".kwic.toml"),
            "root = true\n[search]\nmax_hits = 3\n",
        )
        .unwrap();

        kwic_in(dir.path())
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains("max_hits = 3"))
            .stdout(predicate::str::contains("# from"));
    }
}

mod check {
    use super::*;

    #[test]
    fn succeeds_without_config() {
        let dir = temp_dir();

        kwic_in(dir.path())
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("No configuration files found."));
    }

    #[test]
    fn succeeds_with_valid_config() {
        let dir = temp_dir();
        fs::write(dir.path().join("syn.txt"), "car|auto\n").unwrap();
        fs::write(
            dir.path().join(".kwic.toml"),
            "root = true\n[expansion]\nsynonyms_file = \"syn.txt\"\n",
        )
        .unwrap();

        kwic_in(dir.path())
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("(2 terms)"))
            .stdout(predicate::str::contains("No issues found."));
    }

    #[test]
    fn warns_on_missing_synonyms_file() {
        let dir = temp_dir();
        fs::write(
            dir.path().join(".kwic.toml"),
            "root = true\n[expansion]\nsynonyms_file = \"nope.txt\"\n",
        )
        .unwrap();

        kwic_in(dir.path())
            .arg("check")
            .assert()
            .failure()
            .stdout(predicate::str::contains("synonyms file does not exist"))
            .stdout(predicate::str::contains("Hints:"));
    }

    #[test]
    fn warns_on_zero_max_hits() {
        let dir = temp_dir();
        fs::write(
            dir.path().join(".kwic.toml"),
            "root = true\n[search]\nmax_hits = 0\n",
        )
        .unwrap();

        kwic_in(dir.path())
            .arg("check")
            .assert()
            .failure()
            .stdout(predicate::str::contains("max_hits is 0"));
    }

    #[test]
    fn fails_on_invalid_toml() {
        let dir = temp_dir();
        fs::write(dir.path().join(".kwic.toml"), "[search\ninvalid").unwrap();

        kwic_in(dir.path())
            .arg("check")
            .assert()
            .failure()
            .stderr(predicate::str::contains("error"));
    }
}
