//! Simulated chat conversation.
//!
//! A [`ChatSession`] keeps the message history and a `pending` flag. Sending a
//! message schedules a reply task that, after a fixed delay, appends one canned
//! response. Only one reply is ever in flight; the task holds a weak reference
//! to the session and is aborted when the session is dropped, so a reply never
//! lands in a torn-down conversation.

use crate::types::ChatMessage;
use futures::future::{AbortHandle, abortable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;

pub const SEED_MESSAGE: &str =
    "Hello! I'm here to help you explore the brain. What would you like to know?";

pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1000);

const BRAIN_FACTS: &[&str] = &[
    "The brain is fascinating! Each region has specific functions that work together to create our thoughts, memories, and behaviors.",
    "Did you know the brain contains about 86 billion neurons? That's more connections than stars in our galaxy!",
    "The brain's surface is covered in folds called sulci and gyri, which increase its surface area for more processing power.",
    "The brain is incredibly plastic - it can rewire itself throughout our lives, especially when we learn new things.",
    "The brain uses about 20% of our body's energy despite being only 2% of our body weight!",
];

/// Fixed, non-empty set of pre-authored replies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CannedReplies {
    responses: Vec<String>,
}

impl CannedReplies {
    /// Returns `None` for an empty set.
    pub fn new<I, S>(responses: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let responses: Vec<String> = responses.into_iter().map(Into::into).collect();
        if responses.is_empty() {
            return None;
        }
        Some(Self { responses })
    }

    pub fn brain_facts() -> Self {
        Self {
            responses: BRAIN_FACTS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn responses(&self) -> &[String] {
        &self.responses
    }

    pub fn contains(&self, text: &str) -> bool {
        self.responses.iter().any(|r| r == text)
    }

    /// Uniformly random pick.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let index = rng.gen_range(0..self.responses.len());
        &self.responses[index]
    }
}

impl Default for CannedReplies {
    fn default() -> Self {
        Self::brain_facts()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatState {
    Idle,
    AwaitingReply,
}

/// What views render from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatSnapshot {
    pub history: Vec<ChatMessage>,
    pub pending: bool,
}

impl ChatSnapshot {
    fn seeded() -> Self {
        Self {
            history: vec![ChatMessage::assistant(SEED_MESSAGE)],
            pending: false,
        }
    }

    pub fn state(&self) -> ChatState {
        if self.pending {
            ChatState::AwaitingReply
        } else {
            ChatState::Idle
        }
    }
}

pub struct ChatSession {
    state: Arc<watch::Sender<ChatSnapshot>>,
    replies: Arc<CannedReplies>,
    rng: Arc<Mutex<StdRng>>,
    reply_delay: Duration,
    in_flight: Mutex<Option<AbortHandle>>,
}

impl ChatSession {
    /// A seeded session answering from the brain facts.
    pub fn new(reply_delay: Duration) -> Self {
        let (sender, _) = watch::channel(ChatSnapshot::seeded());
        Self {
            state: Arc::new(sender),
            replies: Arc::new(CannedReplies::default()),
            rng: Arc::new(Mutex::new(StdRng::from_entropy())),
            reply_delay,
            in_flight: Mutex::new(None),
        }
    }

    pub fn with_replies(mut self, replies: CannedReplies) -> Self {
        self.replies = Arc::new(replies);
        self
    }

    /// Fix the reply choice sequence.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Arc::new(Mutex::new(StdRng::seed_from_u64(seed)));
        self
    }

    /// Reset to a single seed message, dropping any outstanding reply.
    pub fn seed(&self) {
        self.abort_in_flight();
        self.state.send_replace(ChatSnapshot::seeded());
    }

    /// Append a user message and schedule a reply.
    ///
    /// The reply runs on the current tokio runtime. Blank text, a send while a
    /// reply is outstanding, or a call made outside a runtime is ignored and
    /// returns `false`.
    pub fn send(&self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }

        let Ok(runtime) = Handle::try_current() else {
            tracing::warn!("no tokio runtime to schedule a reply on; ignoring send");
            return false;
        };

        let accepted = self.state.send_if_modified(|snapshot| {
            if snapshot.pending {
                return false;
            }
            snapshot.history.push(ChatMessage::user(trimmed));
            snapshot.pending = true;
            true
        });
        if !accepted {
            tracing::debug!("reply outstanding; ignoring send");
            return false;
        }

        self.schedule_reply(&runtime);
        true
    }

    pub fn history(&self) -> Vec<ChatMessage> {
        self.state.borrow().history.clone()
    }

    pub fn is_pending(&self) -> bool {
        self.state.borrow().pending
    }

    pub fn state(&self) -> ChatState {
        self.state.borrow().state()
    }

    pub fn snapshot(&self) -> ChatSnapshot {
        self.state.borrow().clone()
    }

    pub fn replies(&self) -> &CannedReplies {
        &self.replies
    }

    pub fn subscribe(&self) -> watch::Receiver<ChatSnapshot> {
        self.state.subscribe()
    }

    /// Tear the session down; an outstanding reply never applies.
    pub fn close(self) {
        drop(self);
    }

    fn schedule_reply(&self, runtime: &Handle) {
        let session = Arc::downgrade(&self.state);
        let replies = self.replies.clone();
        let rng = self.rng.clone();
        let delay = self.reply_delay;

        let (task, handle) = abortable(async move {
            tokio::time::sleep(delay).await;

            let Some(state) = session.upgrade() else {
                tracing::debug!("chat session closed before reply");
                return;
            };
            let reply = {
                let mut rng = rng.lock().unwrap_or_else(PoisonError::into_inner);
                replies.pick(&mut *rng).to_string()
            };
            state.send_modify(|snapshot| {
                snapshot.history.push(ChatMessage::assistant(reply));
                snapshot.pending = false;
            });
            tracing::debug!("simulated reply delivered");
        });

        *self.in_flight.lock().unwrap_or_else(PoisonError::into_inner) = Some(handle);
        runtime.spawn(task);
    }

    fn abort_in_flight(&self) {
        let handle = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = handle {
            handle.abort();
        }
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(DEFAULT_REPLY_DELAY)
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        self.abort_in_flight();
    }
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let snapshot = self.state.borrow();
        f.debug_struct("ChatSession")
            .field("messages", &snapshot.history.len())
            .field("pending", &snapshot.pending)
            .field("reply_delay", &self.reply_delay)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn wait_for_reply(session: &ChatSession) {
        let mut rx = session.subscribe();
        rx.wait_for(|snapshot| !snapshot.pending).await.unwrap();
    }

    #[test]
    fn test_canned_replies_reject_empty() {
        assert!(CannedReplies::new(Vec::<String>::new()).is_none());
        let replies = CannedReplies::new(["only"]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(replies.pick(&mut rng), "only");
    }

    #[test]
    fn test_pick_covers_every_reply() {
        let replies = CannedReplies::brain_facts();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(replies.pick(&mut rng).to_string());
        }
        assert_eq!(seen.len(), replies.responses().len());
    }

    #[test]
    fn test_send_outside_runtime_leaves_state_untouched() {
        let session = ChatSession::default();
        let before = session.snapshot();

        assert!(!session.send("hi"));
        assert_eq!(session.snapshot(), before);
        assert!(!session.is_pending());

        assert!(!session.send("again"));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_reseed_aborts_reply_after_poisoned_slot() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .start_paused(true)
            .build()
            .unwrap();
        let _guard = runtime.enter();

        let session = ChatSession::new(Duration::from_millis(50));
        assert!(session.send("hello"));

        std::thread::scope(|scope| {
            let _ = scope
                .spawn(|| {
                    let _slot = session.in_flight.lock().unwrap();
                    panic!("poison the reply slot");
                })
                .join();
        });
        assert!(session.in_flight.is_poisoned());

        session.seed();
        runtime.block_on(tokio::time::sleep(Duration::from_millis(200)));
        assert_eq!(session.history().len(), 1);
        assert!(!session.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_seeded_session() {
        let session = ChatSession::default();
        let history = session.history();
        assert_eq!(history.len(), 1);
        assert!(!history[0].is_user);
        assert_eq!(history[0].text, SEED_MESSAGE);
        assert_eq!(session.state(), ChatState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_trims_and_sets_pending() {
        let session = ChatSession::default();
        assert!(session.send("  What is the brain?\n"));

        let history = session.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1], ChatMessage::user("What is the brain?"));
        assert!(session.is_pending());
        assert_eq!(session.state(), ChatState::AwaitingReply);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_send_is_noop() {
        let session = ChatSession::default();
        assert!(!session.send(""));
        assert!(!session.send("   \t\n"));
        assert_eq!(session.history().len(), 1);
        assert!(!session.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_while_pending_is_noop() {
        let session = ChatSession::default();
        assert!(session.send("first"));
        let before = session.snapshot();

        assert!(!session.send("second"));
        assert_eq!(session.snapshot(), before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_arrives_after_delay() {
        let session = ChatSession::default().with_seed(1);
        session.send("hello");

        tokio::time::sleep(DEFAULT_REPLY_DELAY / 2).await;
        assert!(session.is_pending());
        assert_eq!(session.history().len(), 2);

        wait_for_reply(&session).await;
        let history = session.history();
        assert_eq!(history.len(), 3);
        assert!(!history[2].is_user);
        assert!(session.replies().contains(&history[2].text));
        assert_eq!(session.state(), ChatState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_replies_and_delay() {
        let replies = CannedReplies::new(["pong"]).unwrap();
        let session = ChatSession::new(Duration::from_millis(50)).with_replies(replies);
        session.send("ping");

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(session.history().last(), Some(&ChatMessage::assistant("pong")));
        assert!(!session.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reseed_discards_outstanding_reply() {
        let session = ChatSession::default();
        session.send("hello");
        session.seed();
        assert_eq!(session.history().len(), 1);
        assert!(!session.is_pending());

        tokio::time::sleep(DEFAULT_REPLY_DELAY * 2).await;
        assert_eq!(session.history().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_session_is_not_written() {
        let session = ChatSession::default();
        let rx = session.subscribe();
        session.send("hello");
        session.close();

        tokio::time::sleep(DEFAULT_REPLY_DELAY * 2).await;
        let last = rx.borrow();
        assert_eq!(last.history.len(), 2);
        assert!(last.pending);
    }
}
