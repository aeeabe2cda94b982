//! Interactive session handling
//!
//! Prompting, row paging and the menu loop that ties them together.

pub mod menu;
pub mod prompt;
pub mod viewer;

pub use menu::Explorer;
pub use prompt::Prompter;
pub use viewer::RowViewer;
