use std::sync::Arc;
use uuid::Uuid;

use crate::metrics::{ANSWERS_SUBMITTED_TOTAL, QUIZ_SESSIONS_TOTAL};
use crate::models::quiz::{
    CreateQuizSessionResponse, QuestionView, QuizError, QuizSession, QuizSessionView,
    SubmitAnswerRequest, SubmitAnswerResponse, SubmitOutcome, QUESTIONS, QUESTION_COUNT,
};
use crate::services::session_store::SessionStore;

pub struct QuizService {
    store: Arc<SessionStore>,
    session_ttl: chrono::Duration,
}

impl QuizService {
    pub fn new(store: Arc<SessionStore>, session_ttl_seconds: i64) -> Self {
        Self {
            store,
            session_ttl: chrono::Duration::seconds(session_ttl_seconds),
        }
    }

    pub async fn create_session(&self) -> CreateQuizSessionResponse {
        let session_id = Uuid::new_v4().to_string();
        let session = QuizSession::new(session_id.clone(), self.session_ttl);
        // A fresh session always sits on question 0.
        let question = QuestionView {
            index: 0,
            prompt: QUESTIONS[0].prompt,
            options: QUESTIONS[0].options,
        };

        self.store.insert(session).await;
        QUIZ_SESSIONS_TOTAL.with_label_values(&["created"]).inc();

        tracing::info!("Quiz session created: {}", session_id);

        CreateQuizSessionResponse {
            session_id,
            total_questions: QUESTION_COUNT,
            question,
        }
    }

    pub async fn get_session(&self, session_id: &str) -> Result<QuizSessionView, QuizError> {
        let session = self
            .store
            .get(session_id)
            .await
            .ok_or(QuizError::SessionNotFound)?;
        Ok(QuizSessionView::from_session(&session))
    }

    pub async fn submit_answer(
        &self,
        session_id: &str,
        req: &SubmitAnswerRequest,
    ) -> Result<SubmitAnswerResponse, QuizError> {
        let result = self
            .store
            .with_session_mut(session_id, |session| {
                let outcome = session.submit(&req.answer)?;
                Ok::<_, QuizError>((outcome, session.clone()))
            })
            .await
            .ok_or(QuizError::SessionNotFound)?;

        let (outcome, session) = result?;

        let correct = outcome == SubmitOutcome::Correct;
        ANSWERS_SUBMITTED_TOTAL
            .with_label_values(&[if correct { "true" } else { "false" }])
            .inc();
        if session.is_completed() {
            QUIZ_SESSIONS_TOTAL.with_label_values(&["completed"]).inc();
        }

        tracing::info!(
            "Answer processed: session={}, correct={}, score={}/{}",
            session_id,
            correct,
            session.quiz_score,
            session.current_question
        );

        Ok(SubmitAnswerResponse {
            correct,
            correct_answer: match outcome {
                SubmitOutcome::Correct => None,
                SubmitOutcome::Incorrect { correct_answer } => Some(correct_answer.to_string()),
            },
            quiz_score: session.quiz_score,
            current_question: session.current_question,
            completed: session.is_completed(),
            next_question: QuestionView::for_session(&session),
        })
    }

    pub async fn restart(&self, session_id: &str) -> Result<QuizSessionView, QuizError> {
        let session = self
            .store
            .with_session_mut(session_id, |session| {
                session.restart();
                session.clone()
            })
            .await
            .ok_or(QuizError::SessionNotFound)?;

        QUIZ_SESSIONS_TOTAL.with_label_values(&["restarted"]).inc();
        tracing::info!("Quiz session restarted: {}", session_id);

        Ok(QuizSessionView::from_session(&session))
    }
}
