/// Ordered set of the locations taking part in one comparison.
/// 參與一次比較的路徑組（左／中／右）。
///
/// An empty string means the slot is not used; the middle slot stays empty
/// for two-way comparisons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathContext {
    left: String,
    middle: String,
    right: String,
}

impl PathContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// 取得左側路徑。 / Returns the left path.
    pub fn left(&self) -> &str {
        &self.left
    }

    /// 取得中間路徑；雙向比較時為空字串。 / Returns the middle path (empty for two-way compares).
    pub fn middle(&self) -> &str {
        &self.middle
    }

    /// 取得右側路徑。 / Returns the right path.
    pub fn right(&self) -> &str {
        &self.right
    }

    pub fn set_left(&mut self, path: impl Into<String>) {
        self.left = path.into();
    }

    pub fn set_middle(&mut self, path: impl Into<String>) {
        self.middle = path.into();
    }

    pub fn set_right(&mut self, path: impl Into<String>) {
        self.right = path.into();
    }

    // Streaming parsers may deliver one element's text in several chunks;
    // these append without inserting a separator.
    pub(crate) fn push_left(&mut self, chunk: &str) {
        self.left.push_str(chunk);
    }

    pub(crate) fn push_middle(&mut self, chunk: &str) {
        self.middle.push_str(chunk);
    }

    pub(crate) fn push_right(&mut self, chunk: &str) {
        self.right.push_str(chunk);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_default_to_empty() {
        let paths = PathContext::new();
        assert!(paths.left().is_empty());
        assert!(paths.middle().is_empty());
        assert!(paths.right().is_empty());
    }

    #[test]
    fn setters_replace_and_push_appends() {
        let mut paths = PathContext::new();
        paths.set_left("/old");
        paths.set_left("/a");
        paths.push_left("/b");
        assert_eq!(paths.left(), "/a/b");

        paths.push_middle("/m");
        paths.push_middle("id");
        assert_eq!(paths.middle(), "/mid");
    }
}
