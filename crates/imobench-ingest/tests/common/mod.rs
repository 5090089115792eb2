//! Shared fixtures: write small dataset files into a temporary directory.

#![allow(dead_code)]

use std::path::Path;

use tempfile::TempDir;

pub const ANSWER_HEADER: &[&str] = &[
    "Problem ID",
    "Problem",
    "Short Answer",
    "Category",
    "Subcategory",
    "Source",
];

pub const PROOF_HEADER: &[&str] = &[
    "Problem ID",
    "Problem",
    "Solution",
    "Grading guidelines",
    "Category",
    "Level",
    "Short Answer",
    "Source",
];

pub const GRADING_HEADER: &[&str] = &[
    "Grading ID",
    "Problem ID",
    "Problem",
    "Solution",
    "Grading guidelines",
    "Response",
    "Points",
    "Reward",
    "Problem Source",
];

pub fn write_csv(dir: &Path, file_name: &str, header: &[&str], rows: &[Vec<String>]) {
    let mut writer = csv::Writer::from_path(dir.join(file_name)).expect("create csv");
    writer.write_record(header).expect("write header");
    for row in rows {
        writer.write_record(row).expect("write row");
    }
    writer.flush().expect("flush csv");
}

pub fn answer_row(id: &str, category: &str, subcategory: &str, source: &str) -> Vec<String> {
    vec![
        id.to_string(),
        format!("Problem {id}, with a comma"),
        "3".to_string(),
        category.to_string(),
        subcategory.to_string(),
        source.to_string(),
    ]
}

pub fn proof_row(id: &str, category: &str, level: &str, short_answer: &str) -> Vec<String> {
    vec![
        id.to_string(),
        format!("Prove statement {id}."),
        "Line one.\nLine two with \"quotes\".".to_string(),
        "Award 7 points for a full proof.".to_string(),
        category.to_string(),
        level.to_string(),
        short_answer.to_string(),
        "IMO 2019".to_string(),
    ]
}

pub fn grading_row(id: &str, problem_id: &str, points: &str, reward: &str) -> Vec<String> {
    vec![
        id.to_string(),
        problem_id.to_string(),
        "Prove it.".to_string(),
        "Reference proof.".to_string(),
        "Guidelines.".to_string(),
        format!("Response for {id}"),
        points.to_string(),
        reward.to_string(),
        "IMO 2020".to_string(),
    ]
}

pub fn answer_dir(rows: &[Vec<String>]) -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    write_csv(dir.path(), "answerbench.csv", ANSWER_HEADER, rows);
    dir
}

pub fn proof_dir(rows: &[Vec<String>]) -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    write_csv(dir.path(), "proofbench.csv", PROOF_HEADER, rows);
    dir
}

pub fn grading_dir(rows: &[Vec<String>]) -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    write_csv(dir.path(), "gradingbench.csv", GRADING_HEADER, rows);
    dir
}
