//! Relay Service - the message relay orchestration
//!
//! One linear flow per webhook payload: parse the update, search for
//! matching ayat, format the hits, send the reply back to the chat.
//! No retries, no queues, no state carried between payloads.

use std::sync::Arc;

use furqan::{format_results, ChatIntegration, DomainError, VerseSearchService, SEARCH_ERROR_REPLY};
use tracing::{info, warn};

/// Outcome of handling one webhook payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayOutcome {
    /// Payload acknowledged without action (non-message event or malformed body)
    Ignored,
    /// A reply was sent to the originating chat
    Replied,
}

/// Orchestrates the relay over a search port and a chat integration port
pub struct RelayService<S, C> {
    search: Arc<S>,
    chat: Arc<C>,
}

impl<S, C> RelayService<S, C>
where
    S: VerseSearchService,
    C: ChatIntegration,
{
    pub fn new(search: Arc<S>, chat: Arc<C>) -> Self {
        Self { search, chat }
    }

    /// Handle one raw webhook payload end to end.
    ///
    /// Payloads that do not carry a text message are acknowledged without
    /// any outbound call. A failed search still produces a reply (the fixed
    /// error text); only a failed send propagates as an error.
    pub async fn handle(&self, payload: &[u8]) -> Result<RelayOutcome, DomainError> {
        let Some(inbound) = self.chat.parse_update(payload) else {
            return Ok(RelayOutcome::Ignored);
        };

        info!(
            platform = %self.chat.name(),
            chat_id = %inbound.chat_id,
            sender = ?inbound.sender,
            text = %inbound.text,
            "Received message"
        );

        let reply = match self.search.search(&inbound.text).await {
            Ok(response) => format_results(Some(&response)),
            Err(e) => {
                warn!(error = %e, "Search failed, replying with the fixed error text");
                SEARCH_ERROR_REPLY.to_string()
            }
        };

        self.chat.send_message(inbound.chat_id, &reply).await?;

        info!(chat_id = %inbound.chat_id, reply_len = %reply.len(), "Reply sent");
        Ok(RelayOutcome::Replied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use furqan::{InboundMessage, SearchResponse, VerseHit, NOTHING_FOUND_REPLY};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    enum SearchMode {
        Hits(Vec<VerseHit>),
        NoResults,
        Fail,
    }

    struct StubSearch {
        mode: SearchMode,
        calls: AtomicUsize,
    }

    impl StubSearch {
        fn new(mode: SearchMode) -> Arc<Self> {
            Arc::new(Self {
                mode,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl VerseSearchService for StubSearch {
        async fn search(&self, _query: &str) -> Result<SearchResponse, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.mode {
                SearchMode::Hits(hits) => Ok(SearchResponse::from_hits(hits.clone())),
                SearchMode::NoResults => Ok(SearchResponse::default()),
                SearchMode::Fail => Err(DomainError::Search("HTTP 503: unavailable".into())),
            }
        }
    }

    struct RecordingChat {
        sent: Mutex<Vec<(i64, String)>>,
        fail_send: bool,
    }

    impl RecordingChat {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                sent: Mutex::new(Vec::new()),
                fail_send: false,
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                sent: Mutex::new(Vec::new()),
                fail_send: true,
            })
        }
    }

    #[async_trait]
    impl ChatIntegration for RecordingChat {
        fn name(&self) -> &str {
            "test"
        }

        fn parse_update(&self, payload: &[u8]) -> Option<InboundMessage> {
            let value: serde_json::Value = serde_json::from_slice(payload).ok()?;
            let message = value.get("message")?;
            let text = message.get("text")?.as_str()?.to_string();
            let chat_id = message.get("chat")?.get("id")?.as_i64()?;
            Some(InboundMessage::new(chat_id, text))
        }

        async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), DomainError> {
            if self.fail_send {
                return Err(DomainError::ExternalService("chat unreachable".into()));
            }
            self.sent.lock().unwrap().push((chat_id, text.to_string()));
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_relays_formatted_hit_to_originating_chat() {
        let search = StubSearch::new(SearchMode::Hits(vec![VerseHit::new(
            1,
            1,
            "In the name of Allah",
        )]));
        let chat = RecordingChat::new();
        let relay = RelayService::new(search.clone(), chat.clone());

        let outcome = relay
            .handle(br#"{"message":{"text":"Bismillah","chat":{"id":42}}}"#)
            .await
            .unwrap();

        assert_eq!(outcome, RelayOutcome::Replied);
        let sent = chat.sent.lock().unwrap();
        assert_eq!(*sent, vec![(42, "1.1 In the name of Allah".to_string())]);
    }

    #[tokio::test]
    async fn test_non_message_payload_issues_no_outbound_calls() {
        let search = StubSearch::new(SearchMode::NoResults);
        let chat = RecordingChat::new();
        let relay = RelayService::new(search.clone(), chat.clone());

        let outcome = relay.handle(br#"{"update_id":5}"#).await.unwrap();

        assert_eq!(outcome, RelayOutcome::Ignored);
        assert_eq!(search.calls.load(Ordering::SeqCst), 0);
        assert!(chat.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_failure_still_sends_error_reply() {
        let search = StubSearch::new(SearchMode::Fail);
        let chat = RecordingChat::new();
        let relay = RelayService::new(search, chat.clone());

        let outcome = relay
            .handle(br#"{"message":{"text":"query","chat":{"id":7}}}"#)
            .await
            .unwrap();

        assert_eq!(outcome, RelayOutcome::Replied);
        let sent = chat.sent.lock().unwrap();
        assert_eq!(*sent, vec![(7, SEARCH_ERROR_REPLY.to_string())]);
    }

    #[tokio::test]
    async fn test_missing_results_key_sends_nothing_found() {
        let search = StubSearch::new(SearchMode::NoResults);
        let chat = RecordingChat::new();
        let relay = RelayService::new(search, chat.clone());

        relay
            .handle(br#"{"message":{"text":"query","chat":{"id":7}}}"#)
            .await
            .unwrap();

        let sent = chat.sent.lock().unwrap();
        assert_eq!(*sent, vec![(7, NOTHING_FOUND_REPLY.to_string())]);
    }

    #[tokio::test]
    async fn test_send_failure_propagates() {
        let search = StubSearch::new(SearchMode::NoResults);
        let chat = RecordingChat::failing();
        let relay = RelayService::new(search, chat);

        let result = relay
            .handle(br#"{"message":{"text":"query","chat":{"id":7}}}"#)
            .await;

        assert!(matches!(result, Err(DomainError::ExternalService(_))));
    }
}
