//! Per-attempt quiz session. The session walks a fixed question list,
//! locks each question after its first submission, and owns the
//! authoritative final score: a [`QuizOutcome`] can only be produced by a
//! session that reached its last question, which is what the progression
//! engine accepts.

use log::debug;

use crate::academy::content::ContentStore;
use crate::academy::errors::AcademyError;
use crate::academy::types::Quiz;

/// Where the session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Waiting for an option to be picked for the current question.
    AwaitingAnswer,
    /// The current question was answered; feedback is on display.
    ShowingResult { correct: bool },
    /// The final score has been reported.
    Finished,
}

/// Feedback for one submitted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub correct: bool,
    pub correct_answer: usize,
    pub points_earned: u32,
    pub explanation: String,
    pub running_score: u32,
}

/// Result of advancing past a shown result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved on; the value is the new 0-based question index.
    NextQuestion(usize),
    /// That was the last question; the outcome carries the final score.
    Finished(QuizOutcome),
}

/// Final accounting of a finished session. Constructed only by
/// [`QuizSession::advance`] so callers cannot fabricate scores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOutcome {
    lesson_id: Option<u32>,
    score: u32,
    questions: usize,
    correct: usize,
}

impl QuizOutcome {
    pub fn lesson_id(&self) -> Option<u32> {
        self.lesson_id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn questions(&self) -> usize {
        self.questions
    }

    pub fn correct(&self) -> usize {
        self.correct
    }
}

/// A single walk through a question list.
#[derive(Debug, Clone)]
pub struct QuizSession {
    lesson_id: Option<u32>,
    questions: Vec<Quiz>,
    current: usize,
    correct_count: usize,
    score: u32,
    phase: SessionPhase,
}

impl QuizSession {
    /// Start a session over an explicit question list. An empty list falls
    /// back to the built-in starter questions so a session always has
    /// something to ask.
    pub fn new(questions: Vec<Quiz>) -> Self {
        let questions = if questions.is_empty() {
            debug!("no questions supplied, using the built-in set");
            fallback_questions()
        } else {
            questions
        };
        Self {
            lesson_id: None,
            questions,
            current: 0,
            correct_count: 0,
            score: 0,
            phase: SessionPhase::AwaitingAnswer,
        }
    }

    /// Start a session for a lesson's questions, falling back to the
    /// built-in set when the lesson has none.
    pub fn for_lesson(content: &ContentStore, lesson_id: u32) -> Self {
        let questions: Vec<Quiz> = content
            .quizzes_for_lesson(lesson_id)
            .into_iter()
            .cloned()
            .collect();
        let mut session = Self::new(questions);
        session.lesson_id = Some(lesson_id);
        session
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == SessionPhase::Finished
    }

    /// The question on display, or `None` once finished.
    pub fn current_question(&self) -> Option<&Quiz> {
        if self.is_finished() {
            None
        } else {
            self.questions.get(self.current)
        }
    }

    /// 1-based position for "Question 2 of 5" displays.
    pub fn question_number(&self) -> usize {
        self.current + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Submit an option index for the current question. Each question takes
    /// at most one scored attempt: further submissions while the result is
    /// showing are rejected without touching session state.
    pub fn submit(&mut self, choice: usize) -> Result<AnswerFeedback, AcademyError> {
        match self.phase {
            SessionPhase::Finished => Err(AcademyError::SessionFinished),
            SessionPhase::ShowingResult { .. } => Err(AcademyError::AnswerLocked),
            SessionPhase::AwaitingAnswer => {
                let question = &self.questions[self.current];
                if choice >= question.options.len() {
                    return Err(AcademyError::InvalidAnswer {
                        index: choice,
                        options: question.options.len(),
                    });
                }
                let correct = choice == question.correct_answer;
                let points_earned = if correct { question.points } else { 0 };
                let feedback = AnswerFeedback {
                    correct,
                    correct_answer: question.correct_answer,
                    points_earned,
                    explanation: question.explanation.clone(),
                    running_score: self.score + points_earned,
                };
                if correct {
                    self.score += points_earned;
                    self.correct_count += 1;
                }
                self.phase = SessionPhase::ShowingResult { correct };
                Ok(feedback)
            }
        }
    }

    /// Move past the shown result: to the next question, or to the final
    /// outcome at the last one.
    pub fn advance(&mut self) -> Result<Advance, AcademyError> {
        match self.phase {
            SessionPhase::AwaitingAnswer => Err(AcademyError::NoAnswerPending),
            SessionPhase::Finished => Err(AcademyError::SessionFinished),
            SessionPhase::ShowingResult { .. } => {
                if self.current + 1 < self.questions.len() {
                    self.current += 1;
                    self.phase = SessionPhase::AwaitingAnswer;
                    Ok(Advance::NextQuestion(self.current))
                } else {
                    self.phase = SessionPhase::Finished;
                    Ok(Advance::Finished(QuizOutcome {
                        lesson_id: self.lesson_id,
                        score: self.score,
                        questions: self.questions.len(),
                        correct: self.correct_count,
                    }))
                }
            }
        }
    }
}

/// The built-in two-question set used when a lesson has no quiz content.
pub fn fallback_questions() -> Vec<Quiz> {
    vec![
        Quiz {
            id: 1,
            lesson_id: 0,
            question: "What's the secret to writing product descriptions that sell?".to_string(),
            options: vec![
                "Write a novel about the product".to_string(),
                "Focus on benefits, not just features".to_string(),
                "Use as many emojis as possible".to_string(),
                "Copy from competitors".to_string(),
            ],
            correct_answer: 1,
            points: 20,
            explanation: "Benefits tell customers how the product improves their life!"
                .to_string(),
        },
        Quiz {
            id: 2,
            lesson_id: 0,
            question: "Which product photo gets the most clicks?".to_string(),
            options: vec![
                "Blurry but artistic".to_string(),
                "High-resolution with good lighting".to_string(),
                "Black and white for drama".to_string(),
                "Taken in the dark".to_string(),
            ],
            correct_answer: 1,
            points: 20,
            explanation: "Clear, well-lit photos build trust and show quality!".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u32, correct: usize, points: u32) -> Quiz {
        Quiz {
            id,
            lesson_id: 1,
            question: format!("Question {}", id),
            options: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            correct_answer: correct,
            points,
            explanation: "because".to_string(),
        }
    }

    #[test]
    fn answers_lock_after_first_submission() {
        let mut session = QuizSession::new(vec![question(1, 1, 20)]);
        session.submit(0).unwrap();
        assert!(matches!(session.submit(1), Err(AcademyError::AnswerLocked)));
        // the rejected retry must not have scored
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn out_of_range_choice_is_rejected_without_locking() {
        let mut session = QuizSession::new(vec![question(1, 1, 20)]);
        assert!(matches!(
            session.submit(9),
            Err(AcademyError::InvalidAnswer {
                index: 9,
                options: 3
            })
        ));
        // still answerable afterwards
        let feedback = session.submit(1).unwrap();
        assert!(feedback.correct);
        assert_eq!(feedback.points_earned, 20);
    }

    #[test]
    fn advance_requires_an_answer() {
        let mut session = QuizSession::new(vec![question(1, 1, 20)]);
        assert!(matches!(
            session.advance(),
            Err(AcademyError::NoAnswerPending)
        ));
    }

    #[test]
    fn empty_question_list_uses_the_fallback_set() {
        let session = QuizSession::new(Vec::new());
        assert_eq!(session.total_questions(), 2);
        assert_eq!(session.question_number(), 1);
    }

    #[test]
    fn finished_session_rejects_everything() {
        let mut session = QuizSession::new(vec![question(1, 0, 10)]);
        session.submit(0).unwrap();
        let advance = session.advance().unwrap();
        assert!(matches!(advance, Advance::Finished(_)));
        assert!(matches!(session.submit(0), Err(AcademyError::SessionFinished)));
        assert!(matches!(session.advance(), Err(AcademyError::SessionFinished)));
        assert!(session.current_question().is_none());
    }
}
