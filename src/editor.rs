use quill_search::{
    InvalidPatternError, Match, MatchNavigator, SearchCompletion, SearchMode, SearchQuery,
    SearchWorker,
};

use crate::config::AppConfig;
use crate::document::Document;

/// Owns the document and all search state.
///
/// Searches run on the worker thread, but every piece of state here is
/// only ever touched on the owning thread: completions are pulled off
/// the worker's channel and applied via `apply_completion`, which drops
/// results from superseded requests.
pub struct EditorSession {
    document: Document,
    worker: SearchWorker,
    navigator: MatchNavigator,
    use_regex: bool,
    case_sensitive: bool,
    pattern_error: Option<InvalidPatternError>,
    // Highest sequence number seen on the completion channel, stale or
    // not. Lags worker.latest_seq() while a search is in flight.
    resolved_seq: u64,
}

impl EditorSession {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            document: Document::new(),
            worker: SearchWorker::spawn(),
            navigator: MatchNavigator::default(),
            use_regex: config.use_regex,
            case_sensitive: config.case_sensitive,
            pattern_error: None,
            resolved_seq: 0,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn use_regex(&self) -> bool {
        self.use_regex
    }

    pub fn set_use_regex(&mut self, use_regex: bool) {
        self.use_regex = use_regex;
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn set_case_sensitive(&mut self, case_sensitive: bool) {
        self.case_sensitive = case_sensitive;
    }

    fn query_for(&self, pattern: &str) -> SearchQuery {
        SearchQuery {
            pattern: pattern.to_string(),
            mode: if self.use_regex {
                SearchMode::Regex
            } else {
                SearchMode::Literal
            },
            case_sensitive: self.case_sensitive,
        }
    }

    /// Kicks off a search over a snapshot of the current document text.
    /// Returns the request's sequence number; the result arrives later
    /// through `poll_searches` or `wait_for_search`.
    pub fn start_search(&mut self, pattern: &str) -> u64 {
        let query = self.query_for(pattern);
        let snapshot = self.document.text().to_string();
        self.worker.submit(snapshot, query)
    }

    /// Applies one completion. Returns false for stale completions,
    /// which leave the navigator and error state untouched.
    pub fn apply_completion(&mut self, completion: SearchCompletion) -> bool {
        self.resolved_seq = self.resolved_seq.max(completion.seq);

        if completion.seq != self.worker.latest_seq() {
            log::debug!("discarding stale search result #{}", completion.seq);
            return false;
        }

        match completion.result {
            Ok(matches) => {
                self.pattern_error = None;
                self.navigator = MatchNavigator::new(matches);
            }
            Err(err) => {
                // The query never ran, so the previous matches stay.
                self.pattern_error = Some(err);
            }
        }
        true
    }

    /// Drains finished searches without blocking.
    pub fn poll_searches(&mut self) {
        while let Some(completion) = self.worker.try_complete() {
            self.apply_completion(completion);
        }
    }

    /// Blocks until the most recent search request has resolved.
    pub fn wait_for_search(&mut self) {
        while self.resolved_seq < self.worker.latest_seq() {
            let Some(completion) = self.worker.recv_complete() else {
                return;
            };
            self.apply_completion(completion);
        }
    }

    pub fn current_match(&self) -> Option<&Match> {
        self.navigator.current()
    }

    pub fn next_match(&mut self) -> Option<&Match> {
        self.navigator.next()
    }

    pub fn previous_match(&mut self) -> Option<&Match> {
        self.navigator.previous()
    }

    /// 1-based position of the focused match, for "n of m" displays.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.navigator.position()
    }

    pub fn match_count(&self) -> usize {
        self.navigator.len()
    }

    /// Byte range `[start, end)` the display should select for the
    /// focused match; the caret belongs at `end`.
    pub fn selection(&self) -> Option<(usize, usize)> {
        self.current_match().map(|m| (m.offset, m.end()))
    }

    pub fn pattern_error(&self) -> Option<&InvalidPatternError> {
        self.pattern_error.as_ref()
    }
}
