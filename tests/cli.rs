use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn juliaref(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("juliaref").unwrap();
    cmd.env("JULIAREF_CONFIG_DIR", config_dir);
    cmd
}

#[test]
fn test_naked_run_lists_topics() {
    let temp_dir = tempfile::tempdir().unwrap();

    juliaref(temp_dir.path())
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("modules"))
        .stdout(predicate::str::contains("tuples"));
}

#[test]
fn test_topics_alias() {
    let temp_dir = tempfile::tempdir().unwrap();

    let listed = juliaref(temp_dir.path())
        .args(["topics", "--no-color"])
        .output()
        .unwrap();
    let aliased = juliaref(temp_dir.path())
        .args(["ls", "--no-color"])
        .output()
        .unwrap();
    assert_eq!(listed.stdout, aliased.stdout);
    assert_eq!(String::from_utf8(listed.stdout).unwrap().lines().count(), 12);
}

#[test]
fn test_show_topic() {
    let temp_dir = tempfile::tempdir().unwrap();

    juliaref(temp_dir.path())
        .args(["show", "sets", "--width", "40", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Sets\n\nA `Set` is an unordered"))
        .stdout(predicate::str::contains("\nMethods\nBuilding\n"))
        .stdout(predicate::str::contains("\n\nMembership\n"))
        .stdout(predicate::str::ends_with(
            "Types\nAbstractSet    BitSet    \nSet            Base.IdSet\n",
        ));
}

#[test]
fn test_show_one_category_by_alias() {
    let temp_dir = tempfile::tempdir().unwrap();

    juliaref(temp_dir.path())
        .args(["s", "set", "-n", "-c", "operators", "-w", "40", "--no-color"])
        .assert()
        .success()
        .stdout("Sets\n\nOperators\n∪    ⊆    ⊊    ∈    ∋\n∩    ⊇    ⊋    ∉    ∌\n");
}

#[test]
fn test_show_missing_category_warns() {
    let temp_dir = tempfile::tempdir().unwrap();

    juliaref(temp_dir.path())
        .args(["show", "chars", "-n", "-c", "macros", "--no-color"])
        .assert()
        .success()
        .stdout("Characters\nCharacters lists no macros.\n");
}

#[test]
fn test_show_unknown_topic_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    juliaref(temp_dir.path())
        .args(["show", "graphs"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown topic: graphs"));
}

#[test]
fn test_show_unknown_category_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    juliaref(temp_dir.path())
        .args(["show", "sets", "--category", "functions"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category: functions"));
}

#[test]
fn test_grid_from_stdin() {
    let temp_dir = tempfile::tempdir().unwrap();

    juliaref(temp_dir.path())
        .args(["grid", "--width", "10"])
        .write_stdin("a bb\nccc\n")
        .assert()
        .success()
        .stdout("a     ccc\nbb       \n");
}

#[test]
fn test_grid_from_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = temp_dir.path().join("words.txt");
    std::fs::write(&input, "a bb ccc").unwrap();

    juliaref(temp_dir.path())
        .args(["g", "--width", "20"])
        .arg(&input)
        .assert()
        .success()
        .stdout("a    bb    ccc\n");
}

#[test]
fn test_grid_rejects_empty_input() {
    let temp_dir = tempfile::tempdir().unwrap();

    juliaref(temp_dir.path())
        .arg("grid")
        .write_stdin("  \n")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("empty list of labels"));
}

#[test]
fn test_grid_rejects_zero_width() {
    let temp_dir = tempfile::tempdir().unwrap();

    juliaref(temp_dir.path())
        .args(["grid", "--width", "0"])
        .write_stdin("a b")
        .assert()
        .failure()
        .stderr(predicate::str::contains("width"));
}

#[test]
fn test_dump_to_stdout() {
    let temp_dir = tempfile::tempdir().unwrap();

    juliaref(temp_dir.path())
        .args(["dump", "sets"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Methods\npush!\npop!\n"))
        .stdout(predicate::str::ends_with("# Types\nAbstractSet\nSet\nBitSet\nBase.IdSet\n"));
}

#[test]
fn test_dump_file_reads_back() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dump = temp_dir.path().join("tuples.txt");

    juliaref(temp_dir.path())
        .args(["dump", "tuples", "--no-color", "-o"])
        .arg(&dump)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Wrote "));

    juliaref(temp_dir.path())
        .args(["show", "--names-only", "--no-color", "--width", "80", "--from"])
        .arg(&dump)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("tuples\n\nMacros\n@NamedTuple\n\nMethods\n"));
}

#[test]
fn test_config_set_and_get() {
    let temp_dir = tempfile::tempdir().unwrap();

    juliaref(temp_dir.path())
        .args(["config", "color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("color set to never"));

    juliaref(temp_dir.path())
        .args(["config", "color"])
        .assert()
        .success()
        .stdout("color = never\n");

    juliaref(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout("default-width = 80\ncolor = never\n");

    assert!(temp_dir.path().join("config.json").exists());
}

#[test]
fn test_config_rejects_bad_value() {
    let temp_dir = tempfile::tempdir().unwrap();

    juliaref(temp_dir.path())
        .args(["config", "default-width", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("default-width must be at least 1"));
}

#[test]
fn test_configured_width_applies_off_terminal() {
    let temp_dir = tempfile::tempdir().unwrap();

    juliaref(temp_dir.path())
        .args(["config", "default-width", "12"])
        .assert()
        .success();

    juliaref(temp_dir.path())
        .arg("grid")
        .write_stdin("a bb ccc")
        .assert()
        .success()
        .stdout("a     ccc\nbb       \n");
}

#[test]
fn test_color_always_and_no_color_flag() {
    let temp_dir = tempfile::tempdir().unwrap();

    juliaref(temp_dir.path())
        .args(["config", "color", "always"])
        .assert()
        .success();

    juliaref(temp_dir.path())
        .args(["show", "sets", "-n", "-c", "types"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b["));

    juliaref(temp_dir.path())
        .args(["show", "sets", "-n", "-c", "types", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}
