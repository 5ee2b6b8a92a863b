//! Integration tests for data-driven seed loading from `data/seeds/`.

mod common;

use std::path::PathBuf;

use sellerdojo::academy::{
    load_quizzes_from_json, load_seed_dir, Academy, AcademyError, LessonStatus,
};
use sellerdojo::config::GamificationConfig;
use tempfile::tempdir;

use common::fixed_now;

fn seed_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("seeds")
}

#[test]
fn shipped_seed_files_load_cleanly() {
    common::init_logging();
    let bundle = load_seed_dir(seed_root(), fixed_now()).unwrap();
    assert_eq!(bundle.lessons.len(), 4);
    assert_eq!(bundle.quizzes.len(), 2);
    assert_eq!(bundle.achievements.len(), 4);
    assert_eq!(bundle.vendors.len(), 2);

    // shipped files mirror the canonical in-code seeds
    assert_eq!(bundle.lessons, sellerdojo::academy::seed_lessons());
    assert_eq!(bundle.quizzes, sellerdojo::academy::seed_quizzes());
    assert_eq!(
        bundle.achievements,
        sellerdojo::academy::seed_achievements(fixed_now())
    );
}

#[test]
fn academy_from_seed_dir_starts_a_fresh_vendor() {
    let academy =
        Academy::from_seed_dir(GamificationConfig::default(), seed_root(), fixed_now()).unwrap();
    assert_eq!(academy.progress.xp, 0);
    assert_eq!(academy.progress.level, 0);
    assert_eq!(academy.content.lessons().len(), 4);
    assert_eq!(
        academy.content.lesson(4).unwrap().status,
        LessonStatus::Locked
    );

    // counters continue past the loaded ids
    let mut academy = academy;
    let lesson = academy
        .content
        .add_lesson(sellerdojo::academy::LessonDraft {
            title: "Fresh".to_string(),
            thumbnail: "t.jpg".to_string(),
            video_url: "https://videos.example.com/f".to_string(),
            level_required: 1,
            points: 10,
            description: "d".to_string(),
        })
        .unwrap();
    assert_eq!(lesson.id, 5);
}

#[test]
fn quiz_seeds_with_bad_answer_indexes_are_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("quizzes.json");
    let contents = r#"[
  {
    "id": 1,
    "lesson_id": 1,
    "question": "Broken",
    "options": ["only", "two"],
    "correct_answer": 5,
    "points": 10,
    "explanation": "nope"
  }
]"#;
    std::fs::write(&path, contents).unwrap();
    match load_quizzes_from_json(&path) {
        Err(AcademyError::SeedData(message)) => {
            assert!(message.contains("quiz 1"), "message was: {}", message);
        }
        other => panic!("expected SeedData error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn malformed_json_reports_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("quizzes.json");
    std::fs::write(&path, "not json").unwrap();
    match load_quizzes_from_json(&path) {
        Err(AcademyError::SeedData(message)) => {
            assert!(message.contains("quizzes.json"));
        }
        other => panic!("expected SeedData error, got {:?}", other.map(|_| ())),
    }
}
