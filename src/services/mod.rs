//! Service modules for the course-content API.

pub mod files;

pub use files::FilesService;
