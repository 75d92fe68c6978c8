#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const WORDS: &str = r#"[
    {"word": "Ama", "pos": "noun", "definition": "love", "usage": "Ama mi kasih", "tags": ["core"]},
    {"word": "Biru", "pos": "adjective", "definition": "blue", "tags": ["color", "rare"]},
    {"word": "Cela", "pos": "noun", "definition": "gap", "icon": "char:◇"}
]"#;

struct Workspace {
    _temp: TempDir,
    cwd: std::path::PathBuf,
    state: std::path::PathBuf,
}

fn workspace() -> Workspace {
    let temp = TempDir::new().unwrap();
    let cwd = temp.path().join("app");
    let state = temp.path().join("state");
    fs::create_dir_all(cwd.join("data")).unwrap();
    fs::write(cwd.join("data/words.json"), WORDS).unwrap();
    Workspace {
        _temp: temp,
        cwd,
        state,
    }
}

fn lexicon_cmd(ws: &Workspace) -> Command {
    lexicon_cmd_in(&ws.cwd, &ws.state)
}

fn lexicon_cmd_in(cwd: &Path, state: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("lexicon"));
    cmd.current_dir(cwd)
        .env("LEXICON_STATE_DIR", state.as_os_str())
        .env_remove("LEXICON_LOG")
        .env_remove("LEXICON_PAGE_SIZE")
        .env_remove("LEXICON_ICON_DIR")
        .env_remove("LEXICON_NAMESPACE");
    cmd
}

#[test]
fn test_naked_invocation_lists_words() {
    let ws = workspace();
    lexicon_cmd(&ws)
        .assert()
        .success()
        .stdout(predicate::str::contains("Ama"))
        .stdout(predicate::str::contains("Biru"))
        .stdout(predicate::str::contains("Page 1 of 1 · 3 words"));
}

#[test]
fn test_search_filters() {
    let ws = workspace();
    lexicon_cmd(&ws)
        .args(["search", "--pos", "noun", "kasih"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ama"))
        .stdout(predicate::str::contains("Cela").not());

    lexicon_cmd(&ws)
        .args(["search", "--tag", "RARE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Biru"))
        .stdout(predicate::str::contains("Ama").not());
}

#[test]
fn test_search_pages() {
    let ws = workspace();
    lexicon_cmd(&ws)
        .args(["search", "--page-size", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("more with --page 2"));

    lexicon_cmd(&ws)
        .args(["search", "--page-size", "2", "--page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3."))
        .stdout(predicate::str::contains("Cela"))
        .stdout(predicate::str::contains("Ama").not());
}

#[test]
fn test_search_far_past_last_page() {
    let ws = workspace();
    lexicon_cmd(&ws)
        .args(["search", "--page", "4000000000", "--page-size", "10000000000"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Page 4000000000 is past the last page (1).",
        ))
        .stdout(predicate::str::contains("Ama").not());
}

#[test]
fn test_add_persists_across_runs() {
    let ws = workspace();
    lexicon_cmd(&ws)
        .args(["add", "Zeta", "-d", "last letter", "-t", "greek"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added \"Zeta\""));

    lexicon_cmd(&ws)
        .args(["search", "last"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Zeta"))
        .stdout(predicate::str::contains("✎"));
}

#[test]
fn test_delete_remote_word_survives_reload() {
    let ws = workspace();
    lexicon_cmd(&ws)
        .args(["delete", "biru"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted \"Biru\""));

    lexicon_cmd(&ws)
        .args(["search"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Biru").not())
        .stdout(predicate::str::contains("2 words"));

    lexicon_cmd(&ws)
        .args(["reset"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));

    lexicon_cmd(&ws)
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Discarded 1 local change"));

    lexicon_cmd(&ws)
        .args(["search"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Biru"));
}

#[test]
fn test_favorites_toggle_and_filter() {
    let ws = workspace();
    lexicon_cmd(&ws)
        .args(["fav", "Cela"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Favorited \"Cela\""));

    lexicon_cmd(&ws)
        .args(["search", "--favorites"])
        .assert()
        .success()
        .stdout(predicate::str::contains("★"))
        .stdout(predicate::str::contains("Cela"))
        .stdout(predicate::str::contains("Ama").not());
}

#[test]
fn test_edit_and_show() {
    let ws = workspace();
    lexicon_cmd(&ws)
        .args(["edit", "ama", "--definition", "deep love"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated \"Ama\""));

    lexicon_cmd(&ws)
        .args(["show", "Ama", "Cela"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deep love"))
        .stdout(predicate::str::contains("edited locally"))
        .stdout(predicate::str::contains("◇ Cela"));
}

#[test]
fn test_unknown_word_fails() {
    let ws = workspace();
    lexicon_cmd(&ws)
        .args(["show", "Nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entry not found: Nope"));
}

#[test]
fn test_missing_word_list_degrades() {
    let temp = TempDir::new().unwrap();
    let state = temp.path().join("state");

    lexicon_cmd_in(temp.path(), &state)
        .args(["search"])
        .assert()
        .success()
        .stderr(predicate::function(|err: &str| {
            err.matches("Could not load word list").count() == 1
        }))
        .stdout(predicate::str::contains("No words match."));

    // Local entries still work without a word list
    lexicon_cmd_in(temp.path(), &state)
        .args(["add", "Solo"])
        .assert()
        .success();
    lexicon_cmd_in(temp.path(), &state)
        .args(["letters"])
        .assert()
        .success()
        .stdout("S\n");
}

#[test]
fn test_data_flag_overrides_location() {
    let ws = workspace();
    let alt = ws.cwd.join("alt.json");
    fs::write(&alt, r#"[{"word": "Dua"}]"#).unwrap();

    lexicon_cmd(&ws)
        .args(["letters", "--data", alt.to_str().unwrap()])
        .assert()
        .success()
        .stdout("D\n");
}

#[test]
fn test_json_output() {
    let ws = workspace();
    let output = lexicon_cmd(&ws)
        .args(["search", "--output", "json", "blue"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["listed"][0]["entry"]["word"], "Biru");
    assert_eq!(value["page"]["total"], 1);
}

#[test]
fn test_tags_and_export() {
    let ws = workspace();
    lexicon_cmd(&ws)
        .args(["tags"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tags"))
        .stdout(predicate::str::contains("adjective"));

    let out = ws.cwd.join("export.json");
    lexicon_cmd(&ws)
        .args(["export", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 3 words"));
    let exported: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out).unwrap()).unwrap();
    assert_eq!(exported.as_array().unwrap().len(), 3);
}

#[test]
fn test_config_reads_working_directory_file() {
    let ws = workspace();
    fs::write(ws.cwd.join("lexicon.toml"), "page_size = 1\n").unwrap();

    lexicon_cmd(&ws)
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page_size"))
        .stdout(predicate::str::contains("= 1"));

    lexicon_cmd(&ws)
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 1 of 3"));
}
