use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;

#[test]
fn expands_words_with_classic_opening() {
    let mut cmd = cargo_bin_cmd!("lorem");
    cmd.arg("lorem_w5").arg("--seed").arg("1");

    cmd.assert()
        .success()
        .stdout("Lorem ipsum dolor sit amet.\n");
}

#[test]
fn expands_default_paragraphs() {
    let mut cmd = cargo_bin_cmd!("lorem");
    cmd.arg("lorem").arg("--seed").arg("7");

    let output = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).expect("utf-8 output");
    assert_eq!(text.trim_end().split("\n\n").count(), 3);
}

#[test]
fn expands_list_lines() {
    let mut cmd = cargo_bin_cmd!("lorem");
    cmd.arg("loremlist5").arg("--seed").arg("3");

    let output = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).expect("utf-8 output");
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines.iter().all(|line| line.starts_with("- ")));
}

#[test]
fn nothing_prints_nothing() {
    let mut cmd = cargo_bin_cmd!("lorem");
    cmd.arg("nothing");

    cmd.assert().success().stdout("");
}

#[test]
fn on_nothing_override_applies() {
    let mut cmd = cargo_bin_cmd!("lorem");
    cmd.arg("--on-nothing").arg("lorem_w2").arg("nothing");

    cmd.assert().success().stdout("Lorem ipsum.\n");
}

#[test]
fn disabled_bare_lorem_ignores_on_nothing() {
    let mut cmd = cargo_bin_cmd!("lorem");
    cmd.arg("--on-lorem")
        .arg("nothing")
        .arg("--on-nothing")
        .arg("lorem_w2")
        .arg("lorem");

    cmd.assert().success().stdout("");
}

#[test]
fn config_limits_are_enforced() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    writeln!(file, "[generator]\nparagraph_spread = 1000000000").expect("write config");

    let mut cmd = cargo_bin_cmd!("lorem");
    cmd.arg("--config").arg(file.path()).arg("lorem");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("generator.paragraph_spread"));
}

#[test]
fn on_lorem_from_config_file() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    writeln!(file, "[commands]\non_lorem = \"lorem_w3\"").expect("write config");

    let mut cmd = cargo_bin_cmd!("lorem");
    cmd.arg("--config").arg(file.path()).arg("lorem");

    cmd.assert().success().stdout("Lorem ipsum dolor.\n");
}

#[test]
fn invalid_config_fails() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp file");
    writeln!(file, "[defaults]\nmax_count = 0").expect("write config");

    let mut cmd = cargo_bin_cmd!("lorem");
    cmd.arg("--config").arg(file.path()).arg("lorem");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("defaults.max_count"));
}

#[test]
fn json_format_reports_request() {
    let mut cmd = cargo_bin_cmd!("lorem");
    cmd.arg("lorem3_2").arg("--format").arg("json").arg("--seed").arg("1");

    let output_pred = predicate::str::contains("\"token\": \"lorem3_2\"")
        .and(predicate::str::contains("\"command\": \"generate\""))
        .and(predicate::str::contains("\"kind\": \"paragraph\""))
        .and(predicate::str::contains("\"primary\": 3"))
        .and(predicate::str::contains("\"secondary\": 2"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn line_mode_replaces_token() {
    let mut cmd = cargo_bin_cmd!("lorem");
    cmd.arg("--line").arg("  intro lorem_w2");

    cmd.assert().success().stdout("  intro Lorem ipsum.\n");
}

#[test]
fn line_mode_with_column() {
    let mut cmd = cargo_bin_cmd!("lorem");
    cmd.arg("--line")
        .arg("lorem_h2_2 rest")
        .arg("--column")
        .arg("10");

    cmd.assert().success().stdout("## Lorem ipsum rest\n");
}

#[test]
fn list_kinds() {
    let mut cmd = cargo_bin_cmd!("lorem");
    cmd.arg("--list-kinds");

    let output_pred = predicate::str::contains("heading")
        .and(predicate::str::contains("ol"))
        .and(predicate::str::contains("(numbered)"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn rejects_unknown_format() {
    let mut cmd = cargo_bin_cmd!("lorem");
    cmd.arg("lorem").arg("--format").arg("yaml");

    cmd.assert().failure();
}
