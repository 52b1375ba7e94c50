use crate::paths::PathContext;

/// Sentinel for a subfolder-recursion count that was never set.
/// 子資料夾遞迴欄位尚未設定時的哨兵值。
///
/// Kept for wire compatibility: the writer serialises any nonzero count,
/// including this sentinel, as `"1"`.
pub const SUBFOLDERS_UNSET: i32 = -1;

/// One comparison definition inside a project file.
/// 專案檔中的單一比較定義。
///
/// Every optional field carries two independent pieces of state: whether a
/// value was ever observed (`Option`/`has_*`), and whether saving should
/// re-emit the field (`save_*`, default `true`). Application code can turn
/// a `save_*` flag off to keep default options out of the written file
/// without forgetting the value it read.
#[derive(Debug, Clone)]
pub struct ProjectFileItem {
    pub(crate) paths: PathContext,
    pub(crate) has_left: bool,
    pub(crate) has_middle: bool,
    pub(crate) has_right: bool,
    pub(crate) left_read_only: bool,
    pub(crate) middle_read_only: bool,
    pub(crate) right_read_only: bool,
    pub(crate) filter: Option<String>,
    pub(crate) subfolders: i32,
    pub(crate) has_subfolders: bool,
    pub(crate) unpacker: Option<String>,
    pub(crate) prediffer: Option<String>,
    pub(crate) ignore_white: Option<i32>,
    pub(crate) ignore_blank_lines: Option<bool>,
    pub(crate) ignore_case: Option<bool>,
    pub(crate) ignore_eol: Option<bool>,
    pub(crate) ignore_numbers: Option<bool>,
    pub(crate) ignore_codepage: Option<bool>,
    pub(crate) filter_comments_lines: Option<bool>,
    pub(crate) compare_method: Option<i32>,
    pub(crate) hidden_items: Vec<String>,
    pub(crate) has_hidden_items: bool,
    pub(crate) save_filter: bool,
    pub(crate) save_subfolders: bool,
    pub(crate) save_unpacker: bool,
    pub(crate) save_ignore_white: bool,
    pub(crate) save_ignore_blank_lines: bool,
    pub(crate) save_ignore_case: bool,
    pub(crate) save_ignore_eol: bool,
    pub(crate) save_ignore_numbers: bool,
    pub(crate) save_ignore_codepage: bool,
    pub(crate) save_filter_comments_lines: bool,
    pub(crate) save_compare_method: bool,
    pub(crate) save_hidden_items: bool,
}

impl Default for ProjectFileItem {
    fn default() -> Self {
        Self {
            paths: PathContext::new(),
            has_left: false,
            has_middle: false,
            has_right: false,
            left_read_only: false,
            middle_read_only: false,
            right_read_only: false,
            filter: None,
            subfolders: SUBFOLDERS_UNSET,
            has_subfolders: false,
            unpacker: None,
            prediffer: None,
            ignore_white: None,
            ignore_blank_lines: None,
            ignore_case: None,
            ignore_eol: None,
            ignore_numbers: None,
            ignore_codepage: None,
            filter_comments_lines: None,
            compare_method: None,
            hidden_items: Vec::new(),
            has_hidden_items: false,
            save_filter: true,
            save_subfolders: true,
            save_unpacker: true,
            save_ignore_white: true,
            save_ignore_blank_lines: true,
            save_ignore_case: true,
            save_ignore_eol: true,
            save_ignore_numbers: true,
            save_ignore_codepage: true,
            save_filter_comments_lines: true,
            save_compare_method: true,
            save_hidden_items: true,
        }
    }
}

impl ProjectFileItem {
    pub fn new() -> Self {
        Self::default()
    }

    /// 取得路徑組。 / Returns the path set of this item.
    pub fn paths(&self) -> &PathContext {
        &self.paths
    }

    /// Returns the path set together with the recursion flag, when one was
    /// recorded.
    /// 回傳路徑組以及（若有記錄）是否遞迴比較子資料夾。
    pub fn paths_and_recursion(&self) -> (&PathContext, Option<bool>) {
        let recurse = self.has_subfolders.then(|| self.subfolders == 1);
        (&self.paths, recurse)
    }

    /// 取得左側路徑。 / Returns the left path.
    pub fn left(&self) -> &str {
        self.paths.left()
    }

    /// Sets the left path; `read_only` updates the read-only flag when given.
    /// 設定左側路徑；`read_only` 有值時一併更新唯讀旗標。
    pub fn set_left(&mut self, path: impl Into<String>, read_only: Option<bool>) {
        self.paths.set_left(path);
        if let Some(read_only) = read_only {
            self.left_read_only = read_only;
        }
    }

    pub fn has_left(&self) -> bool {
        self.has_left
    }

    pub fn left_read_only(&self) -> bool {
        self.left_read_only
    }

    /// 取得中間路徑。 / Returns the middle path.
    pub fn middle(&self) -> &str {
        self.paths.middle()
    }

    pub fn set_middle(&mut self, path: impl Into<String>, read_only: Option<bool>) {
        self.paths.set_middle(path);
        if let Some(read_only) = read_only {
            self.middle_read_only = read_only;
        }
    }

    pub fn has_middle(&self) -> bool {
        self.has_middle
    }

    pub fn middle_read_only(&self) -> bool {
        self.middle_read_only
    }

    /// 取得右側路徑。 / Returns the right path.
    pub fn right(&self) -> &str {
        self.paths.right()
    }

    pub fn set_right(&mut self, path: impl Into<String>, read_only: Option<bool>) {
        self.paths.set_right(path);
        if let Some(read_only) = read_only {
            self.right_read_only = read_only;
        }
    }

    pub fn has_right(&self) -> bool {
        self.has_right
    }

    pub fn right_read_only(&self) -> bool {
        self.right_read_only
    }

    /// 取得檔案過濾器。 / Returns the file filter, when one is present.
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = Some(filter.into());
    }

    pub fn has_filter(&self) -> bool {
        self.filter.is_some()
    }

    /// Raw subfolder-recursion count; [`SUBFOLDERS_UNSET`] when never set.
    pub fn subfolders(&self) -> i32 {
        self.subfolders
    }

    pub fn set_subfolders(&mut self, subfolders: i32) {
        self.subfolders = subfolders;
        self.has_subfolders = true;
    }

    pub fn has_subfolders(&self) -> bool {
        self.has_subfolders
    }

    /// 取得解包外掛名稱。 / Returns the unpacker plugin pipeline, when present.
    pub fn unpacker(&self) -> Option<&str> {
        self.unpacker.as_deref()
    }

    pub fn set_unpacker(&mut self, unpacker: impl Into<String>) {
        self.unpacker = Some(unpacker.into());
    }

    pub fn has_unpacker(&self) -> bool {
        self.unpacker.is_some()
    }

    /// Returns the prediffer plugin pipeline, when present. Unlike the other
    /// optional fields, saving emits this one whenever it is non-empty; there
    /// is no persist flag for it.
    /// 取得前置差異外掛；此欄位沒有獨立的寫回旗標。
    pub fn prediffer(&self) -> Option<&str> {
        self.prediffer.as_deref()
    }

    pub fn set_prediffer(&mut self, prediffer: impl Into<String>) {
        self.prediffer = Some(prediffer.into());
    }

    pub fn has_prediffer(&self) -> bool {
        self.prediffer.is_some()
    }

    /// 空白字元比較層級。 / Whitespace-ignore level.
    pub fn ignore_white(&self) -> Option<i32> {
        self.ignore_white
    }

    pub fn set_ignore_white(&mut self, level: i32) {
        self.ignore_white = Some(level);
    }

    pub fn ignore_blank_lines(&self) -> Option<bool> {
        self.ignore_blank_lines
    }

    pub fn set_ignore_blank_lines(&mut self, value: bool) {
        self.ignore_blank_lines = Some(value);
    }

    pub fn ignore_case(&self) -> Option<bool> {
        self.ignore_case
    }

    pub fn set_ignore_case(&mut self, value: bool) {
        self.ignore_case = Some(value);
    }

    /// 是否忽略行尾差異。 / Whether carriage-return differences are ignored.
    pub fn ignore_eol(&self) -> Option<bool> {
        self.ignore_eol
    }

    pub fn set_ignore_eol(&mut self, value: bool) {
        self.ignore_eol = Some(value);
    }

    pub fn ignore_numbers(&self) -> Option<bool> {
        self.ignore_numbers
    }

    pub fn set_ignore_numbers(&mut self, value: bool) {
        self.ignore_numbers = Some(value);
    }

    pub fn ignore_codepage(&self) -> Option<bool> {
        self.ignore_codepage
    }

    pub fn set_ignore_codepage(&mut self, value: bool) {
        self.ignore_codepage = Some(value);
    }

    pub fn filter_comments_lines(&self) -> Option<bool> {
        self.filter_comments_lines
    }

    pub fn set_filter_comments_lines(&mut self, value: bool) {
        self.filter_comments_lines = Some(value);
    }

    /// 比較方法代號。 / Compare-method selector.
    pub fn compare_method(&self) -> Option<i32> {
        self.compare_method
    }

    pub fn set_compare_method(&mut self, method: i32) {
        self.compare_method = Some(method);
    }

    /// 使用者隱藏的項目清單，依文件順序排列。 / Items hidden by the user, in document order.
    pub fn hidden_items(&self) -> &[String] {
        &self.hidden_items
    }

    pub fn set_hidden_items(&mut self, items: Vec<String>) {
        self.hidden_items = items;
        self.has_hidden_items = true;
    }

    pub fn has_hidden_items(&self) -> bool {
        self.has_hidden_items
    }

    // Persist-policy flags. Turning one off keeps the corresponding field
    // out of saved documents without touching the in-memory value.

    pub fn set_save_filter(&mut self, save: bool) {
        self.save_filter = save;
    }

    pub fn set_save_subfolders(&mut self, save: bool) {
        self.save_subfolders = save;
    }

    pub fn set_save_unpacker(&mut self, save: bool) {
        self.save_unpacker = save;
    }

    pub fn set_save_ignore_white(&mut self, save: bool) {
        self.save_ignore_white = save;
    }

    pub fn set_save_ignore_blank_lines(&mut self, save: bool) {
        self.save_ignore_blank_lines = save;
    }

    pub fn set_save_ignore_case(&mut self, save: bool) {
        self.save_ignore_case = save;
    }

    pub fn set_save_ignore_eol(&mut self, save: bool) {
        self.save_ignore_eol = save;
    }

    pub fn set_save_ignore_numbers(&mut self, save: bool) {
        self.save_ignore_numbers = save;
    }

    pub fn set_save_ignore_codepage(&mut self, save: bool) {
        self.save_ignore_codepage = save;
    }

    pub fn set_save_filter_comments_lines(&mut self, save: bool) {
        self.save_filter_comments_lines = save;
    }

    pub fn set_save_compare_method(&mut self, save: bool) {
        self.save_compare_method = save;
    }

    pub fn set_save_hidden_items(&mut self, save: bool) {
        self.save_hidden_items = save;
    }
}
