//! Chat-session state: the transcript plus the UI state around it.
//!
//! [`SessionController`] is the only writer. A submission moves the session
//! from [`SessionPhase::Idle`] to [`SessionPhase::Awaiting`] and back once the
//! completion resolves. Each submission is stamped with the session
//! generation; [`SessionController::reset`] bumps it, so an answer that lands
//! after a reset is dropped instead of leaking into the new session.

mod analytics;
mod turn;

pub use analytics::{
    Analytics, Audience, Engagement, EngagementMetrics, Hashtags, Sentiment, SentimentBreakdown,
    Seo,
};
pub use turn::{ContentType, Transcript, Turn, TurnKind, FAILURE_MESSAGE};

use crate::api::CompletionClient;
use crate::error::{ApiError, SessionError};

/// Whether a completion is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Awaiting,
}

/// Why a submission was refused before anything changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Prompt was empty after trimming.
    Blank,
    /// Another completion is still in flight.
    Busy,
}

/// How a dispatched submission resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishOutcome {
    /// An answer turn with analytics was appended.
    Answered,
    /// The failure turn was appended.
    Failed,
    /// The session was reset while waiting; nothing was appended.
    Discarded,
}

/// Result of [`SessionController::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Skipped(SkipReason),
    Finished(FinishOutcome),
}

/// Ticket for a dispatched submission, handed back to
/// [`SessionController::finish`].
#[derive(Debug)]
#[must_use = "a pending request must be finished or the session stays in flight"]
pub struct PendingRequest {
    generation: u64,
    prompt: String,
}

impl PendingRequest {
    /// Raw prompt text to send to the completion client.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// UI state that lives next to the transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Current draft input text.
    pub draft: String,
    /// True while awaiting the completion client.
    pub in_flight: bool,
    /// Sticky content-type selection.
    pub content_type: ContentType,
    /// Sidebar highlight. Never affects transcript rendering.
    pub selected_history: Option<usize>,
}

/// Owner of the transcript and session UI state.
#[derive(Debug, Default)]
pub struct SessionController {
    transcript: Transcript,
    state: SessionState,
    generation: u64,
}

impl SessionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a preselected content type.
    pub fn with_content_type(content_type: ContentType) -> Self {
        let mut controller = Self::new();
        controller.state.content_type = content_type;
        controller
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> SessionPhase {
        if self.state.in_flight {
            SessionPhase::Awaiting
        } else {
            SessionPhase::Idle
        }
    }

    /// Current session generation; changes on every reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn draft(&self) -> &str {
        &self.state.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.state.draft = text.into();
    }

    pub fn content_type(&self) -> ContentType {
        self.state.content_type
    }

    pub fn select_content_type(&mut self, content_type: ContentType) {
        self.state.content_type = content_type;
    }

    /// Highlight a sidebar entry (index among question turns).
    pub fn select_history(&mut self, index: usize) -> Result<(), SessionError> {
        let len = self.transcript.question_count();
        if index >= len {
            return Err(SessionError::NoSuchHistoryEntry { index, len });
        }
        self.state.selected_history = Some(index);
        Ok(())
    }

    /// Record the question and enter the in-flight state.
    ///
    /// Appends the trimmed prompt as a question turn, clears the draft, and
    /// returns the ticket whose raw prompt must be sent to the completion
    /// client. Blank prompts and submissions while in flight change nothing.
    pub fn begin_submit(
        &mut self,
        prompt: &str,
        content_type: ContentType,
    ) -> Result<PendingRequest, SkipReason> {
        let trimmed = prompt.trim();
        if trimmed.is_empty() {
            return Err(SkipReason::Blank);
        }
        if self.state.in_flight {
            return Err(SkipReason::Busy);
        }

        self.transcript.push(Turn::question(trimmed, content_type));
        self.state.draft.clear();
        self.state.in_flight = true;
        Ok(PendingRequest {
            generation: self.generation,
            prompt: prompt.to_string(),
        })
    }

    /// Record the completion result for a ticket from [`begin_submit`].
    ///
    /// [`begin_submit`]: SessionController::begin_submit
    pub fn finish(
        &mut self,
        pending: PendingRequest,
        result: Result<String, ApiError>,
    ) -> FinishOutcome {
        if pending.generation != self.generation {
            tracing::debug!(
                ticket = pending.generation,
                current = self.generation,
                "discarding completion for a reset session"
            );
            return FinishOutcome::Discarded;
        }

        let outcome = match result {
            Ok(text) => {
                self.transcript.push(Turn::answer(text));
                FinishOutcome::Answered
            }
            Err(err) => {
                tracing::warn!(error = %err, "error generating answer");
                self.transcript.push(Turn::failure());
                FinishOutcome::Failed
            }
        };
        self.state.in_flight = false;
        outcome
    }

    /// Submit a prompt and wait for the completion client.
    ///
    /// Exactly one call is made per accepted submission, with no retry.
    pub async fn submit<C>(
        &mut self,
        client: &C,
        prompt: &str,
        content_type: ContentType,
    ) -> SubmitOutcome
    where
        C: CompletionClient + ?Sized,
    {
        let pending = match self.begin_submit(prompt, content_type) {
            Ok(pending) => pending,
            Err(reason) => return SubmitOutcome::Skipped(reason),
        };
        let result = client.complete(pending.prompt()).await;
        SubmitOutcome::Finished(self.finish(pending, result))
    }

    /// Submit the current draft with the sticky content type.
    pub async fn submit_draft<C>(&mut self, client: &C) -> SubmitOutcome
    where
        C: CompletionClient + ?Sized,
    {
        let draft = self.state.draft.clone();
        let content_type = self.state.content_type;
        self.submit(client, &draft, content_type).await
    }

    /// Start a new session.
    ///
    /// Clears the transcript and sidebar selection and invalidates any
    /// outstanding completion. Draft and content type are left alone.
    pub fn reset(&mut self) {
        self.transcript.clear();
        self.state.selected_history = None;
        self.state.in_flight = false;
        self.generation = self.generation.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex as StdMutex;

    /// Completion client returning queued results and recording prompts.
    struct StubClient {
        results: StdMutex<VecDeque<Result<String, ApiError>>>,
        prompts: StdMutex<Vec<String>>,
    }

    impl StubClient {
        fn new(results: Vec<Result<String, ApiError>>) -> Self {
            Self {
                results: StdMutex::new(results.into()),
                prompts: StdMutex::new(Vec::new()),
            }
        }

        fn answering(text: &str) -> Self {
            Self::new(vec![Ok(text.to_string())])
        }

        fn calls(&self) -> Vec<String> {
            self.prompts.lock().expect("prompts lock").clone()
        }
    }

    #[async_trait]
    impl CompletionClient for StubClient {
        async fn complete(&self, prompt: &str) -> Result<String, ApiError> {
            self.prompts
                .lock()
                .expect("prompts lock")
                .push(prompt.to_string());
            self.results
                .lock()
                .expect("results lock")
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::InvalidResponse("no stub result queued".into())))
        }
    }

    #[tokio::test]
    async fn blank_prompt_is_a_no_op() {
        let client = StubClient::answering("unused");
        let mut session = SessionController::new();
        session.set_draft("   ");

        for prompt in ["", "   ", "\n\t "] {
            let outcome = session.submit(&client, prompt, ContentType::Video).await;
            assert_eq!(outcome, SubmitOutcome::Skipped(SkipReason::Blank));
        }
        assert!(session.transcript().is_empty());
        assert!(client.calls().is_empty());
        assert_eq!(session.draft(), "   ", "draft untouched by skipped submit");
        assert_eq!(session.phase(), SessionPhase::Idle);
    }

    #[tokio::test]
    async fn successful_submit_appends_question_and_answer() {
        let client = StubClient::answering("world");
        let mut session = SessionController::new();
        session.set_draft("hello");

        let outcome = session.submit_draft(&client).await;

        assert_eq!(outcome, SubmitOutcome::Finished(FinishOutcome::Answered));
        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.draft(), "");
        assert!(!session.state().in_flight);

        let question = session.transcript().get(0).unwrap();
        assert_eq!(question.kind(), TurnKind::Question);
        assert_eq!(question.content(), "hello");
        let answer = session.transcript().get(1).unwrap();
        assert_eq!(answer.kind(), TurnKind::Answer);
        assert_eq!(answer.content(), "world");
        assert_eq!(answer.analytics(), Some(&Analytics::placeholder()));
        assert_eq!(answer.hashtags(), Some(&Hashtags::placeholder()));
    }

    #[tokio::test]
    async fn question_is_trimmed_but_client_gets_raw_prompt() {
        let client = StubClient::answering("ok");
        let mut session = SessionController::new();
        session
            .submit(&client, "  an idea \n", ContentType::Video)
            .await;
        assert_eq!(session.transcript().get(0).unwrap().content(), "an idea");
        assert_eq!(client.calls(), vec!["  an idea \n".to_string()]);
    }

    #[tokio::test]
    async fn failed_submit_appends_failure_turn_without_analytics() {
        let client = StubClient::new(vec![Err(ApiError::Status(500, "boom".into()))]);
        let mut session = SessionController::new();

        let outcome = session.submit(&client, "hello", ContentType::Social).await;

        assert_eq!(outcome, SubmitOutcome::Finished(FinishOutcome::Failed));
        assert_eq!(session.transcript().len(), 2);
        let answer = session.transcript().last().unwrap();
        assert_eq!(answer.content(), FAILURE_MESSAGE);
        assert!(answer.analytics().is_none());
        assert!(answer.hashtags().is_none());
        assert_eq!(client.calls().len(), 1, "no retry");
        assert_eq!(session.phase(), SessionPhase::Idle);
    }

    #[tokio::test]
    async fn content_type_is_recorded_on_question() {
        let client = StubClient::answering("draft");
        let mut session = SessionController::new();
        session.select_content_type(ContentType::Blog);

        session.submit_draft(&client).await; // blank draft, skipped
        session.set_draft("ten tips");
        session.submit_draft(&client).await;

        let question = session.transcript().get(0).unwrap();
        assert_eq!(question.content_type(), Some(ContentType::Blog));
        // Reading the transcript again must not change it.
        let _ = session.transcript().questions().count();
        assert_eq!(
            session.transcript().get(0).unwrap().content_type(),
            Some(ContentType::Blog)
        );
        assert_eq!(session.content_type(), ContentType::Blog, "selection is sticky");
    }

    #[tokio::test]
    async fn reset_clears_transcript_and_is_idempotent() {
        let client = StubClient::new(vec![Ok("a".into()), Ok("b".into())]);
        let mut session = SessionController::new();
        session.submit(&client, "one", ContentType::Video).await;
        session.submit(&client, "two", ContentType::Video).await;
        session.select_history(1).unwrap();
        session.select_content_type(ContentType::Social);
        session.set_draft("unsent");

        session.reset();
        assert!(session.transcript().is_empty());
        assert_eq!(session.state().selected_history, None);
        assert_eq!(session.draft(), "unsent");
        assert_eq!(session.content_type(), ContentType::Social);

        session.reset();
        assert!(session.transcript().is_empty());
        assert_eq!(session.state().selected_history, None);
    }

    #[test]
    fn second_submit_while_in_flight_is_refused() {
        let mut session = SessionController::new();
        let pending = session.begin_submit("first", ContentType::Video).unwrap();
        assert_eq!(session.phase(), SessionPhase::Awaiting);

        let refused = session.begin_submit("second", ContentType::Video);
        assert_eq!(refused.unwrap_err(), SkipReason::Busy);
        assert_eq!(session.transcript().len(), 1);

        assert_eq!(
            session.finish(pending, Ok("answer".into())),
            FinishOutcome::Answered
        );
        assert_eq!(session.phase(), SessionPhase::Idle);
    }

    #[test]
    fn response_after_reset_is_discarded() {
        let mut session = SessionController::new();
        let stale = session.begin_submit("old idea", ContentType::Video).unwrap();
        session.reset();
        assert_eq!(session.phase(), SessionPhase::Idle);

        let fresh = session.begin_submit("new idea", ContentType::Blog).unwrap();
        assert_eq!(
            session.finish(stale, Ok("late answer".into())),
            FinishOutcome::Discarded
        );
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.phase(), SessionPhase::Awaiting, "fresh request still pending");

        assert_eq!(
            session.finish(fresh, Ok("new answer".into())),
            FinishOutcome::Answered
        );
        let contents: Vec<_> = session.transcript().iter().map(Turn::content).collect();
        assert_eq!(contents, ["new idea", "new answer"]);
    }

    #[test]
    fn select_history_rejects_out_of_range() {
        let mut session = SessionController::new();
        assert_eq!(
            session.select_history(0),
            Err(SessionError::NoSuchHistoryEntry { index: 0, len: 0 })
        );
        let pending = session.begin_submit("q", ContentType::Video).unwrap();
        let _ = session.finish(pending, Ok("a".into()));
        session.select_history(0).unwrap();
        assert_eq!(session.state().selected_history, Some(0));
        assert_eq!(session.transcript().len(), 2, "selection never touches turns");
    }
}
