//! In-memory content store: lessons, their quiz questions, and the
//! authoring operations the admin console runs against them.

use log::{debug, info};

use crate::academy::errors::AcademyError;
use crate::academy::types::{Lesson, LessonDraft, LessonStatus, Quiz, QuizDraft};
use crate::logutil::escape_log;
use crate::validation::{
    require_answer_in_range, require_line, require_positive, require_text, MAX_TEXT_LEN,
};

/// Owns the lesson and quiz collections. Identifiers come from monotonic
/// per-collection counters, so deleting the highest-numbered entry can never
/// cause an id to be reissued.
#[derive(Debug, Clone)]
pub struct ContentStore {
    lessons: Vec<Lesson>,
    quizzes: Vec<Quiz>,
    next_lesson_id: u32,
    next_quiz_id: u32,
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentStore {
    pub fn new() -> Self {
        Self {
            lessons: Vec::new(),
            quizzes: Vec::new(),
            next_lesson_id: 1,
            next_quiz_id: 1,
        }
    }

    /// Build a store around pre-seeded collections. Counters resume past the
    /// highest seeded id.
    pub fn from_parts(lessons: Vec<Lesson>, quizzes: Vec<Quiz>) -> Self {
        let next_lesson_id = lessons.iter().map(|l| l.id).max().unwrap_or(0) + 1;
        let next_quiz_id = quizzes.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        Self {
            lessons,
            quizzes,
            next_lesson_id,
            next_quiz_id,
        }
    }

    // --- lessons ---

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn lesson(&self, id: u32) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == id)
    }

    pub(crate) fn lesson_mut(&mut self, id: u32) -> Option<&mut Lesson> {
        self.lessons.iter_mut().find(|l| l.id == id)
    }

    pub(crate) fn lessons_mut(&mut self) -> impl Iterator<Item = &mut Lesson> {
        self.lessons.iter_mut()
    }

    /// Create a lesson from an authoring draft.
    pub fn add_lesson(&mut self, draft: LessonDraft) -> Result<Lesson, AcademyError> {
        validate_lesson_draft(&draft)?;
        let lesson = Lesson::from_draft(self.next_lesson_id, draft);
        self.next_lesson_id += 1;
        info!(
            "lesson {} created: {}",
            lesson.id,
            escape_log(&lesson.title)
        );
        self.lessons.push(lesson.clone());
        Ok(lesson)
    }

    /// Replace a lesson wholesale by id. Completed lessons are normalized to
    /// 100% progress.
    pub fn update_lesson(&mut self, mut lesson: Lesson) -> Result<(), AcademyError> {
        validate_lesson_fields(&lesson)?;
        crate::validation::require_progress(lesson.progress)?;
        if lesson.status == LessonStatus::Completed {
            lesson.progress = 100;
        }
        let slot = self
            .lesson_mut(lesson.id)
            .ok_or(AcademyError::NotFound {
                entity: "lesson",
                id: lesson.id,
            })?;
        *slot = lesson;
        Ok(())
    }

    /// Delete a lesson and every quiz attached to it. Returns the ids of the
    /// cascaded quizzes.
    pub fn delete_lesson(&mut self, id: u32) -> Result<Vec<u32>, AcademyError> {
        let index = self
            .lessons
            .iter()
            .position(|l| l.id == id)
            .ok_or(AcademyError::NotFound {
                entity: "lesson",
                id,
            })?;
        let lesson = self.lessons.remove(index);
        let removed: Vec<u32> = self
            .quizzes
            .iter()
            .filter(|q| q.lesson_id == id)
            .map(|q| q.id)
            .collect();
        self.quizzes.retain(|q| q.lesson_id != id);
        info!(
            "lesson {} deleted with {} quiz(es): {}",
            id,
            removed.len(),
            escape_log(&lesson.title)
        );
        Ok(removed)
    }

    // --- quizzes ---

    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    pub fn quiz(&self, id: u32) -> Option<&Quiz> {
        self.quizzes.iter().find(|q| q.id == id)
    }

    /// Quizzes attached to a lesson, in store order.
    pub fn quizzes_for_lesson(&self, lesson_id: u32) -> Vec<&Quiz> {
        self.quizzes
            .iter()
            .filter(|q| q.lesson_id == lesson_id)
            .collect()
    }

    /// Create a quiz question from an authoring draft. The lesson link is a
    /// convention, not a constraint: a dangling `lesson_id` is accepted.
    pub fn add_quiz(&mut self, draft: QuizDraft) -> Result<Quiz, AcademyError> {
        validate_quiz_draft(&draft)?;
        if self.lesson(draft.lesson_id).is_none() {
            debug!("quiz references unknown lesson {}", draft.lesson_id);
        }
        let quiz = Quiz::from_draft(self.next_quiz_id, draft);
        self.next_quiz_id += 1;
        info!("quiz {} created: {}", quiz.id, escape_log(&quiz.question));
        self.quizzes.push(quiz.clone());
        Ok(quiz)
    }

    /// Replace a quiz wholesale by id.
    pub fn update_quiz(&mut self, quiz: Quiz) -> Result<(), AcademyError> {
        validate_quiz_fields(&quiz)?;
        let slot = self
            .quizzes
            .iter_mut()
            .find(|q| q.id == quiz.id)
            .ok_or(AcademyError::NotFound {
                entity: "quiz",
                id: quiz.id,
            })?;
        *slot = quiz;
        Ok(())
    }

    /// Delete a single quiz. No cascade.
    pub fn delete_quiz(&mut self, id: u32) -> Result<(), AcademyError> {
        let index = self
            .quizzes
            .iter()
            .position(|q| q.id == id)
            .ok_or(AcademyError::NotFound { entity: "quiz", id })?;
        let quiz = self.quizzes.remove(index);
        info!("quiz {} deleted: {}", id, escape_log(&quiz.question));
        Ok(())
    }
}

fn validate_lesson_draft(draft: &LessonDraft) -> Result<(), AcademyError> {
    require_line("title", &draft.title)?;
    require_line("thumbnail", &draft.thumbnail)?;
    require_line("video_url", &draft.video_url)?;
    require_text("description", &draft.description, MAX_TEXT_LEN)?;
    require_positive("level_required", draft.level_required)?;
    require_positive("points", draft.points)?;
    Ok(())
}

fn validate_lesson_fields(lesson: &Lesson) -> Result<(), AcademyError> {
    require_line("title", &lesson.title)?;
    require_line("thumbnail", &lesson.thumbnail)?;
    require_line("video_url", &lesson.video_url)?;
    require_text("description", &lesson.description, MAX_TEXT_LEN)?;
    require_positive("level_required", lesson.level_required)?;
    require_positive("points", lesson.points)?;
    Ok(())
}

fn validate_quiz_draft(draft: &QuizDraft) -> Result<(), AcademyError> {
    require_line("question", &draft.question)?;
    for option in &draft.options {
        require_line("option", option)?;
    }
    require_answer_in_range(&draft.options, draft.correct_answer)?;
    require_text("explanation", &draft.explanation, MAX_TEXT_LEN)?;
    require_positive("points", draft.points)?;
    Ok(())
}

fn validate_quiz_fields(quiz: &Quiz) -> Result<(), AcademyError> {
    require_line("question", &quiz.question)?;
    for option in &quiz.options {
        require_line("option", option)?;
    }
    require_answer_in_range(&quiz.options, quiz.correct_answer)?;
    require_text("explanation", &quiz.explanation, MAX_TEXT_LEN)?;
    require_positive("points", quiz.points)?;
    Ok(())
}
