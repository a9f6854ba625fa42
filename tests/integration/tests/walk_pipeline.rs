//! End-to-end tests for the twalk binary
//!
//! Runs the built binary over larger JSDoc type ASTs and checks the full
//! traversal, including optional children and nested modifiers.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn twalk_cmd() -> Command {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("Failed to find workspace root");
    let bin_path = workspace_root.join("target/debug/twalk");
    Command::new(bin_path)
}

mod record_callback {
    use super::*;

    #[test]
    fn walks_entries_and_skips_null_values() {
        let expected = "\
enter RECORD
  enter RECORD_ENTRY id
    enter NAME number
    leave NAME number
  leave RECORD_ENTRY id
  enter RECORD_ENTRY flag
  leave RECORD_ENTRY flag
  enter RECORD_ENTRY done
    enter ARROW
      enter NAMED_PARAMETER err
        enter NULLABLE
          enter NAME Error
          leave NAME Error
        leave NULLABLE
      leave NAMED_PARAMETER err
      enter NAME void
      leave NAME void
    leave ARROW
  leave RECORD_ENTRY done
leave RECORD
";

        twalk_cmd()
            .arg("walk")
            .arg(fixtures_dir().join("record_callback.json"))
            .assert()
            .success()
            .stdout(expected);
    }

    #[test]
    fn reports_depth_of_deepest_name() {
        twalk_cmd()
            .arg("stats")
            .arg(fixtures_dir().join("record_callback.json"))
            .assert()
            .success()
            .stdout(predicate::str::starts_with("Nodes: 10\nDepth: 6\n"));
    }
}

mod module_import {
    use super::*;

    #[test]
    fn walks_owners_and_import_paths() {
        let expected = "\
enter UNION
  enter MEMBER Options
    enter MODULE
      enter FILE_PATH ./config
      leave FILE_PATH ./config
    leave MODULE
  leave MEMBER Options
  enter TYPE_QUERY
    enter IMPORT
      enter STRING_VALUE ./defaults
      leave STRING_VALUE ./defaults
    leave IMPORT
  leave TYPE_QUERY
leave UNION
";

        twalk_cmd()
            .arg("walk")
            .arg(fixtures_dir().join("module_import.json"))
            .assert()
            .success()
            .stdout(expected);
    }

    #[test]
    fn walk_is_repeatable() {
        let first = twalk_cmd()
            .args(["walk", "--format", "json"])
            .arg(fixtures_dir().join("module_import.json"))
            .output()
            .unwrap();
        let second = twalk_cmd()
            .args(["walk", "--format", "json"])
            .arg(fixtures_dir().join("module_import.json"))
            .output()
            .unwrap();

        assert!(first.status.success());
        assert_eq!(first.stdout, second.stdout);
    }
}

mod broken_trees {
    use super::*;
    use std::fs;

    #[test]
    fn list_property_holding_object_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tuple.json");
        fs::write(&input, r#"{ "type": "TUPLE", "entries": { "type": "ANY" } }"#).unwrap();

        twalk_cmd()
            .arg("walk")
            .arg(&input)
            .assert()
            .code(2)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("entries"));
    }

    #[test]
    fn missing_type_is_rejected() {
        twalk_cmd()
            .args(["walk", "-"])
            .write_stdin(r#"{ "name": "string" }"#)
            .assert()
            .code(2)
            .stderr(predicate::str::contains("No schema for node type"));
    }
}
