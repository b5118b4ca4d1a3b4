//! View state machines for the upload-and-browse workflow.
//!
//! The list view and upload dialog are pure state machines: they take user
//! and completion events and expose the state a renderer needs, with no
//! toolkit dependency. [`ContentScreen`] composes them with the client and
//! drives the asynchronous work.

mod files_list;
mod screen;
mod upload_dialog;

pub use files_list::{FetchMode, FetchTicket, FilesListView, ListPhase};
pub use screen::ContentScreen;
pub use upload_dialog::{
    UploadDialog, INVALID_FILE_TYPE_MESSAGE, MISSING_FILE_MESSAGE, UPLOAD_FALLBACK_MESSAGE,
};
