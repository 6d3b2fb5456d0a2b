use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn bedside() -> Command {
    Command::cargo_bin("bedside").expect("binary should compile")
}

/// A complete responses file with every answer at the given index.
fn uniform_responses(value: i64) -> String {
    let categories = [
        "Personal Connect (Do You Care About Me?)",
        "Trust of Your Trade (Are You the Best?)",
        "Social Trust (Can I Trust You?)",
        "Treating Style (Are You Treating Me Differently?)",
    ];
    let answers = vec![value.to_string(); 5].join(", ");
    categories
        .iter()
        .map(|name| format!("\"{name}\" = [{answers}]\n"))
        .collect()
}

#[test]
fn init_writes_a_template_that_scores_cleanly() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = dir.path().join("responses.toml");

    bedside()
        .arg("init")
        .arg(&path)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("template written"));

    // All-zero answers are complete, so scoring succeeds; every category is
    // below the excellence line, so the flag exit code applies.
    bedside()
        .arg("score")
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Overall score: 0.00 / 5.0"))
        .stdout(predicate::str::contains("Needs Improvement"));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = dir.path().join("responses.toml");
    fs::write(&path, uniform_responses(4)).expect("responses should write");

    bedside()
        .arg("init")
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    // The original answers survive a refused init.
    bedside()
        .arg("score")
        .arg(&path)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Overall score: 5.00 / 5.0"));
}

#[test]
fn init_force_discards_previous_answers() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = dir.path().join("responses.toml");
    fs::write(&path, uniform_responses(4)).expect("responses should write");

    bedside()
        .arg("init")
        .arg(&path)
        .arg("--force")
        .assert()
        .code(0);

    bedside()
        .arg("score")
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Overall score: 0.00 / 5.0"));
}

#[test]
fn score_all_maximum_answers_reports_excellent_with_no_actions() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = dir.path().join("responses.toml");
    fs::write(&path, uniform_responses(4)).expect("responses should write");

    bedside()
        .arg("score")
        .arg(&path)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Overall score: 5.00 / 5.0 (Excellent)"))
        .stdout(predicate::str::contains("exceptional patient-centered care"))
        .stdout(predicate::str::contains("below target").not())
        .stdout(predicate::str::contains("###").not());
}

#[test]
fn score_mixed_answers_flags_only_weak_categories() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = dir.path().join("responses.toml");
    let mut content = String::new();
    content.push_str("\"Personal Connect (Do You Care About Me?)\" = [4, 4, 4, 4, 4]\n");
    content.push_str("\"Trust of Your Trade (Are You the Best?)\" = [0, 0, 0, 0, 0]\n");
    content.push_str("\"Social Trust (Can I Trust You?)\" = [0, 0, 0, 0, 0]\n");
    content.push_str("\"Treating Style (Are You Treating Me Differently?)\" = [0, 0, 0, 0, 0]\n");
    fs::write(&path, content).expect("responses should write");

    bedside()
        .arg("score")
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Overall score: 1.25 / 5.0"))
        .stdout(predicate::str::contains(
            "- Personal Connect (Do You Care About Me?): 5.00 / 5.0\n",
        ))
        .stdout(predicate::str::contains(
            "- Trust of Your Trade (Are You the Best?): 0.00 / 5.0 (below target)",
        ))
        .stdout(predicate::str::contains(
            "### Trust of Your Trade (Are You the Best?) - 0.00 / 5.0",
        ))
        .stdout(predicate::str::contains("### Personal Connect").not());
}

#[test]
fn score_json_report_is_structured() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = dir.path().join("responses.toml");
    fs::write(&path, uniform_responses(2)).expect("responses should write");

    bedside()
        .args(["score"])
        .arg(&path)
        .args(["--format", "json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"overall_score\": 2.5"))
        .stdout(predicate::str::contains("\"tier\": \"Fair\""))
        .stdout(predicate::str::contains("\"kind\": \"category\""));
}

#[test]
fn score_accepts_json_responses() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = dir.path().join("responses.json");
    let content = serde_json::json!({
        "Personal Connect (Do You Care About Me?)": [4, 4, 4, 4, 4],
        "Trust of Your Trade (Are You the Best?)": [4, 4, 4, 4, 4],
        "Social Trust (Can I Trust You?)": [4, 4, 4, 4, 4],
        "Treating Style (Are You Treating Me Differently?)": [4, 4, 4, 4, 4],
    });
    fs::write(&path, content.to_string()).expect("responses should write");

    bedside()
        .arg("score")
        .arg(&path)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Overall score: 5.00 / 5.0"));
}

#[test]
fn score_incomplete_responses_names_the_missing_category() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = dir.path().join("responses.toml");
    fs::write(
        &path,
        "\"Personal Connect (Do You Care About Me?)\" = [0, 0, 0, 0, 0]\n",
    )
    .expect("responses should write");

    bedside()
        .arg("score")
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing category"))
        .stderr(predicate::str::contains("Trust of Your Trade (Are You the Best?)"));
}

#[test]
fn score_out_of_range_answer_names_question_and_value() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = dir.path().join("responses.toml");
    let mut content = uniform_responses(0);
    content = content.replace(
        "\"Social Trust (Can I Trust You?)\" = [0, 0, 0, 0, 0]",
        "\"Social Trust (Can I Trust You?)\" = [0, 0, 7, 0, 0]",
    );
    fs::write(&path, content).expect("responses should write");

    bedside()
        .arg("score")
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("answer 7 for question 2"))
        .stderr(predicate::str::contains("Social Trust (Can I Trust You?)"));
}

#[test]
fn score_missing_file_fails_with_runtime_code() {
    let dir = TempDir::new().expect("temp dir should be created");

    bedside()
        .arg("score")
        .arg(dir.path().join("absent.toml"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn export_writes_a_timestamped_snapshot() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = dir.path().join("responses.toml");
    let out = dir.path().join("exports");
    fs::write(&path, uniform_responses(3)).expect("responses should write");

    bedside()
        .arg("export")
        .arg(&path)
        .arg("--out")
        .arg(&out)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("snapshot written"));

    let entries: Vec<_> = fs::read_dir(&out)
        .expect("export directory should exist")
        .collect::<std::result::Result<Vec<_>, _>>()
        .expect("export entries should be readable");
    assert_eq!(entries.len(), 1, "exactly one snapshot should be written");

    let name = entries[0].file_name();
    let name = name.to_str().expect("snapshot name should be utf-8");
    assert!(name.starts_with("assessment-"), "{name}");
    assert!(name.ends_with(".json"), "{name}");

    let content = fs::read_to_string(entries[0].path()).expect("snapshot should read");
    let parsed: serde_json::Value =
        serde_json::from_str(&content).expect("snapshot should be valid json");
    assert!(parsed["version"].is_string());
    assert!(parsed["timestamp"].is_string());
    assert_eq!(parsed["overall_score"], 3.75);
    assert_eq!(
        parsed["category_scores"]["Social Trust (Can I Trust You?)"],
        3.75
    );
    assert_eq!(
        parsed["responses"]["Personal Connect (Do You Care About Me?)"],
        serde_json::json!([3, 3, 3, 3, 3])
    );
}

#[test]
fn export_rejects_incomplete_responses() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = dir.path().join("responses.toml");
    fs::write(
        &path,
        "\"Personal Connect (Do You Care About Me?)\" = [0, 0]\n",
    )
    .expect("responses should write");

    bedside()
        .arg("export")
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("expects 5 answers, found 2"));
}
