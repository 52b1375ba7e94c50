//! Comparison-project persistence for RustMerge.
//! 管理 RustMerge 比較專案檔的讀寫核心模組。
//!
//! A project file is a small UTF-8 XML document listing the folder/file
//! pairs (or triples) a user wants to compare, together with the per-item
//! comparison options. Reading rebuilds the item sequence from streaming
//! parser events; saving makes per-field decisions based on presence and
//! persist flags, so a round-trip keeps exactly what the application asked
//! to keep.

mod tags;

pub mod item;
pub mod paths;
pub mod project_file;
pub mod reader;
pub mod writer;

pub use item::{ProjectFileItem, SUBFOLDERS_UNSET};
pub use paths::PathContext;
pub use project_file::{ProjectFile, ProjectFileError, PROJECT_FILE_EXT};
