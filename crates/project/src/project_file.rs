use std::io;
use std::path::Path;

use thiserror::Error;

use crate::item::ProjectFileItem;
use crate::{reader, writer};

/// File extension associated with comparison project files.
/// 比較專案檔使用的副檔名。
pub const PROJECT_FILE_EXT: &str = "rmproj";

/// Error type for project-file persistence.
/// 專案檔持久化時可能出現的錯誤。
///
/// Malformed *content* (for example non-numeric text in a numeric field)
/// is never an error; only broken XML, bad encodings and IO failures are.
#[derive(Debug, Error)]
pub enum ProjectFileError {
    #[error("project file IO error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed project file XML: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Holds an ordered sequence of comparison definitions and moves it to and
/// from disk.
/// 保存比較定義序列並負責其讀寫。
///
/// `read` and `save` are independent entry points; each call opens its own
/// file handle and runs to completion. Nothing here serialises concurrent
/// saves against the same path; callers own that.
#[derive(Debug, Default)]
pub struct ProjectFile {
    items: Vec<ProjectFileItem>,
}

impl ProjectFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the held sequence with the items parsed from `path`.
    /// 以 `path` 解析出的項目取代目前保存的序列。
    ///
    /// On error the previously held items are left untouched.
    pub fn read(&mut self, path: impl AsRef<Path>) -> Result<(), ProjectFileError> {
        self.items = reader::read_path(path)?;
        Ok(())
    }

    /// Serialises the held sequence to `path`.
    /// 將目前保存的序列寫入 `path`。
    ///
    /// There is no atomic replace; a failed save may leave a truncated file
    /// at the destination.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ProjectFileError> {
        writer::save_path(path, &self.items)
    }

    /// 依文件順序取得項目。 / Items in document order.
    pub fn items(&self) -> &[ProjectFileItem] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut Vec<ProjectFileItem> {
        &mut self.items
    }

    /// 在序列尾端加入項目。 / Appends an item to the sequence.
    pub fn add_item(&mut self, item: ProjectFileItem) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_then_read_restores_items() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join(format!("compare.{PROJECT_FILE_EXT}"));

        let mut item = ProjectFileItem::new();
        item.set_left("/src/old", Some(true));
        item.set_right("/src/new", None);
        item.set_filter("*.rs");
        let mut project = ProjectFile::new();
        project.add_item(item);
        project.save(&path).unwrap();

        let mut restored = ProjectFile::new();
        restored.read(&path).unwrap();
        assert_eq!(restored.len(), 1);
        let item = &restored.items()[0];
        assert_eq!(item.left(), "/src/old");
        assert!(item.left_read_only());
        assert_eq!(item.right(), "/src/new");
        assert_eq!(item.filter(), Some("*.rs"));
    }

    #[test]
    fn read_replaces_previous_sequence() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("single.rmproj");

        let mut single = ProjectFile::new();
        let mut item = ProjectFileItem::new();
        item.set_left("/only", None);
        single.add_item(item);
        single.save(&path).unwrap();

        let mut project = ProjectFile::new();
        project.add_item(ProjectFileItem::new());
        project.add_item(ProjectFileItem::new());
        project.read(&path).unwrap();
        assert_eq!(project.len(), 1);
        assert_eq!(project.items()[0].left(), "/only");
    }

    #[test]
    fn read_failure_keeps_existing_items() {
        let tmp = tempdir().unwrap();
        let mut project = ProjectFile::new();
        project.add_item(ProjectFileItem::new());

        let missing = tmp.path().join("missing.rmproj");
        assert!(matches!(
            project.read(&missing),
            Err(ProjectFileError::Io(_))
        ));
        assert_eq!(project.len(), 1);
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let tmp = tempdir().unwrap();
        let project = ProjectFile::new();
        let path = tmp.path().join("no-such-dir").join("out.rmproj");
        assert!(project.save(&path).is_err());
    }
}
