use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const QUESTION_COUNT: usize = 5;

/// A fixed quiz question: prompt, four options, 0-based index of the
/// correct option. The bank is compiled in and never mutated.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    pub correct: usize,
}

pub static QUESTIONS: [Question; QUESTION_COUNT] = [
    Question {
        prompt: "What is 0°C in Fahrenheit?",
        options: ["0°F", "32°F", "100°F", "-40°F"],
        correct: 1,
    },
    Question {
        prompt: "What is the boiling point of water in Kelvin?",
        options: ["273.15K", "373.15K", "212K", "100K"],
        correct: 1,
    },
    Question {
        prompt: "At what temperature do Celsius and Fahrenheit scales intersect?",
        options: ["0°", "-32°", "-40°", "32°"],
        correct: 2,
    },
    Question {
        prompt: "What is absolute zero in Celsius?",
        options: ["-273.15°C", "-459.67°C", "0°C", "-100°C"],
        correct: 0,
    },
    Question {
        prompt: "Convert 98.6°F to Celsius:",
        options: ["32°C", "37°C", "100°C", "50°C"],
        correct: 1,
    },
];

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Quiz session not found")]
    SessionNotFound,
    #[error("Quiz already completed")]
    AlreadyCompleted,
}

/// Outcome of one answer submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Correct,
    /// Carries the text of the option that would have been correct.
    Incorrect { correct_answer: &'static str },
}

/// Per-session quiz state. Invariant: 0 <= quiz_score <= current_question
/// <= QUESTION_COUNT. The session is completed once current_question
/// reaches QUESTION_COUNT; the only way out of that state is restart().
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSession {
    pub id: String,
    pub current_question: usize,
    pub quiz_score: u32,
    pub started_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl QuizSession {
    pub fn new(id: String, ttl: chrono::Duration) -> Self {
        let now = Utc::now();
        Self {
            id,
            current_question: 0,
            quiz_score: 0,
            started_at: now,
            expires_at: now + ttl,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.current_question >= QUESTION_COUNT
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }

    /// The question awaiting an answer, None once completed.
    pub fn pending_question(&self) -> Option<&'static Question> {
        QUESTIONS.get(self.current_question)
    }

    /// Scores `answer` against the pending question and advances by one.
    /// Answer text matching no option counts as incorrect. Declines to
    /// mutate state when the quiz is already completed.
    pub fn submit(&mut self, answer: &str) -> Result<SubmitOutcome, QuizError> {
        let question = self.pending_question().ok_or(QuizError::AlreadyCompleted)?;

        let selected = question.options.iter().position(|opt| *opt == answer);
        let outcome = if selected == Some(question.correct) {
            self.quiz_score += 1;
            SubmitOutcome::Correct
        } else {
            SubmitOutcome::Incorrect {
                correct_answer: question.options[question.correct],
            }
        };

        self.current_question += 1;
        Ok(outcome)
    }

    /// Resets to (0, 0). Valid in any state.
    pub fn restart(&mut self) {
        self.current_question = 0;
        self.quiz_score = 0;
    }
}

#[derive(Debug, Serialize)]
pub struct QuestionView {
    pub index: usize,
    pub prompt: &'static str,
    pub options: [&'static str; 4],
}

impl QuestionView {
    pub fn for_session(session: &QuizSession) -> Option<Self> {
        session.pending_question().map(|q| QuestionView {
            index: session.current_question,
            prompt: q.prompt,
            options: q.options,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct CreateQuizSessionResponse {
    pub session_id: String,
    pub total_questions: usize,
    pub question: QuestionView,
}

#[derive(Debug, Serialize)]
pub struct QuizSessionView {
    pub session_id: String,
    pub current_question: usize,
    pub quiz_score: u32,
    pub total_questions: usize,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionView>,
}

impl QuizSessionView {
    pub fn from_session(session: &QuizSession) -> Self {
        Self {
            session_id: session.id.clone(),
            current_question: session.current_question,
            quiz_score: session.quiz_score,
            total_questions: QUESTION_COUNT,
            completed: session.is_completed(),
            question: QuestionView::for_session(session),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SubmitAnswerRequest {
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitAnswerResponse {
    pub correct: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
    pub quiz_score: u32,
    pub current_question: usize,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_question: Option<QuestionView>,
}
