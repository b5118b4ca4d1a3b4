//! File list view state machine.

use crate::errors::CourseContentError;
use crate::types::FileItem;

/// Rendering phase of the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListPhase {
    /// A fetch is in flight with nothing to show; render skeletons.
    Loading,
    /// The collection is displayed. An empty collection renders a distinct
    /// "no files" placeholder rather than a zero-item grid.
    Loaded,
    /// The last fetch failed; render the message with a retry action.
    Errored(String),
}

/// How a fetch presents while in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// Show the full loading state (mount and refresh-signal fetches).
    Full,
    /// Keep previously loaded data visible under a spinner (user-triggered
    /// refresh and retry).
    Refresh,
}

/// Handle for an in-flight fetch.
///
/// Tickets carry the sequence number of the fetch that produced them;
/// [`FilesListView::resolve`] uses it to discard results from superseded
/// fetches, so the newest-started fetch always wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
}

/// State machine for the file list view.
///
/// Starts in [`ListPhase::Loading`]. Fetches are begun with
/// [`FilesListView::observe_signal`] (external refresh counter) or
/// [`FilesListView::begin_fetch`] (user action) and completed with
/// [`FilesListView::resolve`].
#[derive(Debug)]
pub struct FilesListView {
    files: Vec<FileItem>,
    phase: ListPhase,
    refreshing: bool,
    seq: u64,
    last_signal: Option<u64>,
}

impl Default for FilesListView {
    fn default() -> Self {
        Self::new()
    }
}

impl FilesListView {
    /// Create a view in the initial loading state.
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            phase: ListPhase::Loading,
            refreshing: false,
            seq: 0,
            last_signal: None,
        }
    }

    /// Observe the external refresh counter.
    ///
    /// Returns a ticket to fetch with when the counter value changed since
    /// the last observation (including the first one); an unchanged value
    /// never triggers a redundant fetch.
    pub fn observe_signal(&mut self, counter: u64) -> Option<FetchTicket> {
        if self.last_signal == Some(counter) {
            return None;
        }
        self.last_signal = Some(counter);
        Some(self.begin_fetch(FetchMode::Full))
    }

    /// Start a fetch and transition the view accordingly.
    pub fn begin_fetch(&mut self, mode: FetchMode) -> FetchTicket {
        self.seq += 1;
        match mode {
            FetchMode::Full => {
                self.refreshing = false;
                self.phase = ListPhase::Loading;
            }
            FetchMode::Refresh => {
                self.refreshing = true;
                // Retry clears the error banner; prior data stays visible.
                if matches!(self.phase, ListPhase::Errored(_)) {
                    self.phase = ListPhase::Loaded;
                }
            }
        }
        FetchTicket { seq: self.seq }
    }

    /// Complete a fetch.
    ///
    /// Returns `false` when the ticket belongs to a superseded fetch, in
    /// which case the result is discarded and the view is unchanged.
    pub fn resolve(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<FileItem>, CourseContentError>,
    ) -> bool {
        if ticket.seq != self.seq {
            return false;
        }
        self.refreshing = false;
        match result {
            Ok(files) => {
                self.files = files;
                self.phase = ListPhase::Loaded;
            }
            Err(error) => {
                self.phase = ListPhase::Errored(error.to_string());
            }
        }
        true
    }

    /// Current rendering phase.
    pub fn phase(&self) -> &ListPhase {
        &self.phase
    }

    /// The displayed collection.
    pub fn files(&self) -> &[FileItem] {
        &self.files
    }

    /// True while a data-preserving refresh is in flight.
    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// True while the full loading state should render.
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, ListPhase::Loading)
    }

    /// Error message, when errored.
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            ListPhase::Errored(message) => Some(message),
            _ => None,
        }
    }

    /// True when the view is loaded with zero items and should render the
    /// "no files" placeholder.
    pub fn is_empty(&self) -> bool {
        matches!(self.phase, ListPhase::Loaded) && self.files.is_empty()
    }
}
