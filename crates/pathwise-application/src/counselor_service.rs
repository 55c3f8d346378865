//! The query-processing orchestrator.
//!
//! One entry point, [`CounselorService::process`], ties the pieces
//! together: resolve the session, route the query, assemble context,
//! attempt generation with retries, fall back to the canned response
//! table, and record the exchange. A student always gets an answer; the
//! `status` field says whether it came from the generator or the table.

use crate::session_store::SessionStore;
use pathwise_core::context::build_context;
use pathwise_core::error::Result;
use pathwise_core::routing::{KeywordRouter, RoutingExplanation};
use pathwise_core::session::ConversationMessage;
use pathwise_core::specialist::{profile_for, SpecialistId};
use pathwise_interaction::{fallback::fallback_response, ResponseGenerator, RetryPolicy};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// Where the response text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounselStatus {
    /// The generator produced the answer.
    Success,
    /// The canned response table produced the answer.
    Fallback,
}

/// Per-outcome bookkeeping for callers and logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounselMetadata {
    /// 1-based conversation turn this exchange represents.
    pub conversation_turn: usize,
    /// Whether prior history informed the assembled context.
    pub has_context: bool,
}

/// The complete result of processing one student query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounselOutcome {
    pub response: String,
    pub specialist: SpecialistId,
    pub session_id: String,
    pub status: CounselStatus,
    pub metadata: CounselMetadata,
}

/// Orchestrates routing, context assembly, generation, and persistence.
pub struct CounselorService {
    store: Arc<SessionStore>,
    router: KeywordRouter,
    generator: Option<Arc<dyn ResponseGenerator>>,
    retry: RetryPolicy,
}

impl CounselorService {
    /// Creates a service. Without a generator every answer comes from the
    /// canned response table with `Fallback` status.
    pub fn new(
        store: Arc<SessionStore>,
        generator: Option<Arc<dyn ResponseGenerator>>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            store,
            router: KeywordRouter::new(),
            generator,
            retry,
        }
    }

    /// The underlying session store, for session-level commands.
    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    /// Routing breakdown for a query, without processing it.
    pub fn explain_route(&self, query: &str) -> RoutingExplanation {
        self.router.explain(query)
    }

    /// Processes one student query end to end.
    ///
    /// `session_id` of `None` starts a fresh conversation; a supplied id
    /// continues one (creating it if it no longer exists). `user_id` is
    /// only recorded when the session is created here. The exchange is
    /// appended to the session after the response is produced, so the
    /// reported turn number counts completed prior exchanges.
    pub async fn process(
        &self,
        query: &str,
        session_id: Option<&str>,
        user_id: Option<&str>,
    ) -> Result<CounselOutcome> {
        let session = self
            .store
            .resolve_or_create(session_id, user_id.map(str::to_string))
            .await?;
        let specialist = self.router.route(query);

        let history = &session.conversation_history;
        let conversation_turn = history.len() / 2 + 1;
        let has_context = history.len() >= 2;
        let conversation = build_context(query, history);

        let (response, status) = match self
            .try_generate(specialist, &conversation, &session.id)
            .await
        {
            Some(text) => (text, CounselStatus::Success),
            None => (fallback_response(query, specialist), CounselStatus::Fallback),
        };

        self.store
            .append_message(&session.id, ConversationMessage::user(query))
            .await?;
        self.store
            .append_message(
                &session.id,
                ConversationMessage::assistant(response.clone(), specialist),
            )
            .await?;
        self.store.record_specialist(&session.id, specialist).await?;

        info!(
            session_id = %session.id,
            specialist = %specialist,
            status = ?status,
            conversation_turn,
            "processed query"
        );

        Ok(CounselOutcome {
            response,
            specialist,
            session_id: session.id,
            status,
            metadata: CounselMetadata {
                conversation_turn,
                has_context,
            },
        })
    }

    /// Runs the generator under the retry policy. Any exhausted or
    /// non-retryable failure yields `None`; the caller falls back.
    async fn try_generate(
        &self,
        specialist: SpecialistId,
        conversation: &str,
        session_id: &str,
    ) -> Option<String> {
        let generator = self.generator.as_ref()?;
        let profile = profile_for(specialist);

        match self
            .retry
            .run(|| generator.generate(&profile.instructions, conversation, session_id))
            .await
        {
            Ok(text) => Some(text),
            Err(err) => {
                warn!(
                    session_id,
                    specialist = %specialist,
                    error = %err,
                    "generation failed, using canned response"
                );
                None
            }
        }
    }
}
