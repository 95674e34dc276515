use crate::{
    api::ApiClient,
    chat_log::ChatLog,
    config::Config,
    constants::{APOLOGY_MESSAGE, FALLBACK_SUGGESTIONS},
    errors::CvChatResult,
    models::{ChatResponse, Message},
    thinking::ThinkingPanel,
    typewriter::{self, Typewriter, TypewriterStep},
};
use log::{debug, info, warn};
use std::{sync::Arc, time::Duration};
use tokio::sync::Mutex;

pub type SharedClient = Arc<Mutex<ChatClient>>;

/// Names the single request the client is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(u64);

/// A send that has been accepted and is waiting for the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub id: RequestId,
    pub question: String,
}

/// The chat component: suggestions, input, message log, the pending
/// placeholder and the running typewriter.
#[derive(Debug)]
pub struct ChatClient {
    api: ApiClient,
    log: ChatLog,
    input: String,
    suggestions: Vec<String>,
    welcome_visible: bool,
    pending: Option<RequestId>,
    next_request_id: u64,
    typewriter: Option<Typewriter>,
    generation: u64,
    typewriter_delay: Duration,
}

impl ChatClient {
    pub fn new(config: &Config) -> CvChatResult<Self> {
        Ok(Self::with_api(
            ApiClient::new(config)?,
            config.typewriter_delay(),
        ))
    }

    pub fn with_api(api: ApiClient, typewriter_delay: Duration) -> Self {
        Self {
            api,
            log: ChatLog::new(),
            input: String::new(),
            suggestions: Vec::new(),
            welcome_visible: true,
            pending: None,
            next_request_id: 0,
            typewriter: None,
            generation: 0,
            typewriter_delay,
        }
    }

    pub fn into_shared(self) -> SharedClient {
        Arc::new(Mutex::new(self))
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn log(&self) -> &ChatLog {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut ChatLog {
        &mut self.log
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn push_input(&mut self, ch: char) {
        self.input.push(ch);
    }

    pub fn pop_input(&mut self) {
        self.input.pop();
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn welcome_visible(&self) -> bool {
        self.welcome_visible
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_request(&self) -> Option<RequestId> {
        self.pending
    }

    pub fn typewriter_delay(&self) -> Duration {
        self.typewriter_delay
    }

    pub fn animation_generation(&self) -> u64 {
        self.generation
    }

    pub fn is_animating(&self) -> bool {
        self.typewriter.is_some()
    }

    // ── Suggestions ──────────────────────────────────────────────

    /// Fetches the suggestions and applies them, falling back on failure.
    pub async fn load_suggestions(&mut self) {
        let result = self.api.fetch_suggestions().await;
        self.apply_suggestions(result);
    }

    /// Replaces the suggestion list with `result`, or with the fallback list
    /// if the load failed.
    pub fn apply_suggestions(&mut self, result: CvChatResult<Vec<String>>) {
        self.suggestions = match result {
            Ok(questions) if !questions.is_empty() => questions,
            Ok(_) => {
                warn!("Suggestion list was empty, using defaults");
                fallback_suggestions()
            }
            Err(e) => {
                warn!("Error loading suggestions: {}", e);
                fallback_suggestions()
            }
        };
    }

    /// Puts suggestion `index` into the input and starts sending it.
    /// Leaves the input alone if a request is already in flight.
    pub fn select_suggestion(&mut self, index: usize) -> Option<PendingRequest> {
        if let Some(pending) = self.pending {
            debug!("Ignoring suggestion while request {:?} is pending", pending);
            return None;
        }
        let question = self.suggestions.get(index)?.clone();
        self.input = question;
        self.begin_send()
    }

    // ── Sending ──────────────────────────────────────────────────

    /// Accepts the current input for sending.
    ///
    /// Returns `None` without touching any state when the trimmed input is
    /// empty, and without touching the input when a request is already in
    /// flight.
    pub fn begin_send(&mut self) -> Option<PendingRequest> {
        let question = self.input.trim().to_string();
        if question.is_empty() {
            return None;
        }
        if let Some(pending) = self.pending {
            debug!("Ignoring send while request {:?} is pending", pending);
            return None;
        }

        self.welcome_visible = false;
        self.log.push_message(Message::user(question.clone()));
        self.input.clear();

        let id = RequestId(self.next_request_id);
        self.next_request_id += 1;
        self.pending = Some(id);
        info!("Sending question ({} chars)", question.chars().count());

        Some(PendingRequest { id, question })
    }

    /// Finishes the request `id` with the backend's `result`.
    ///
    /// Clears the placeholder, then either starts the typewriter for the
    /// answer (returning its generation) or appends the apology message.
    /// Results for any request other than the pending one are dropped.
    pub fn complete(
        &mut self,
        id: RequestId,
        result: CvChatResult<ChatResponse>,
    ) -> Option<u64> {
        if self.pending != Some(id) {
            warn!("Dropping result for stale request {:?}", id);
            return None;
        }
        self.pending = None;

        match result {
            Ok(response) => {
                let thinking = response.thinking().map(ThinkingPanel::new);
                let entry = self.log.push_hidden(Message::bot(response.answer.clone()), thinking);
                Some(self.start_typewriter(entry, &response.answer))
            }
            Err(e) => {
                warn!("Error: {}", e);
                self.log.push_message(Message::bot(APOLOGY_MESSAGE));
                None
            }
        }
    }

    /// Sends the current input and waits for the reply. The answer's
    /// typewriter is started but not driven; see [`ChatClient::advance_typewriter`].
    pub async fn send(&mut self) -> Option<u64> {
        let pending = self.begin_send()?;
        let result = self.api.ask(&pending.question).await;
        self.complete(pending.id, result)
    }

    // ── Typewriter ───────────────────────────────────────────────

    fn start_typewriter(&mut self, entry: usize, text: &str) -> u64 {
        if let Some(previous) = self.typewriter.take() {
            debug!(
                "Retiring typewriter {} at {} chars",
                previous.generation(),
                previous.revealed()
            );
            self.log.complete(previous.entry());
        }
        self.generation += 1;
        self.typewriter = Some(Typewriter::new(entry, text, self.generation));
        self.generation
    }

    /// Reveals the next character of the animation `generation`.
    pub fn advance_typewriter(&mut self, generation: u64) -> TypewriterStep {
        if generation != self.generation {
            return TypewriterStep::Superseded;
        }
        let Some(typewriter) = self.typewriter.as_mut() else {
            return TypewriterStep::Finished;
        };
        match typewriter.next_char() {
            Some(ch) => {
                self.log.reveal(typewriter.entry(), ch);
                TypewriterStep::Revealed(ch)
            }
            None => {
                self.typewriter = None;
                TypewriterStep::Finished
            }
        }
    }

    pub fn toggle_latest_thinking(&mut self) -> Option<bool> {
        self.log.toggle_latest_thinking()
    }
}

pub fn fallback_suggestions() -> Vec<String> {
    FALLBACK_SUGGESTIONS.iter().map(|q| q.to_string()).collect()
}

/// Loads suggestions without holding the lock across the request.
pub async fn load_suggestions(client: SharedClient) {
    let api = client.lock().await.api().clone();
    let result = api.fetch_suggestions().await;
    client.lock().await.apply_suggestions(result);
}

/// Completes a send accepted by [`ChatClient::begin_send`]: performs the
/// request without holding the lock, then renders and animates the reply.
pub async fn dispatch(client: SharedClient, pending: PendingRequest) {
    let (api, delay) = {
        let guard = client.lock().await;
        (guard.api().clone(), guard.typewriter_delay())
    };

    let result = api.ask(&pending.question).await;
    let generation = client.lock().await.complete(pending.id, result);
    if let Some(generation) = generation {
        typewriter::animate(client, generation, delay).await;
    }
}
