// XML element names of the project-file format.

pub(crate) const ROOT: &str = "project";
pub(crate) const PATHS: &str = "paths";
pub(crate) const LEFT: &str = "left";
pub(crate) const MIDDLE: &str = "middle";
pub(crate) const RIGHT: &str = "right";
pub(crate) const FILTER: &str = "filter";
pub(crate) const SUBFOLDERS: &str = "subfolders";
pub(crate) const LEFT_RO: &str = "left-readonly";
pub(crate) const MIDDLE_RO: &str = "middle-readonly";
pub(crate) const RIGHT_RO: &str = "right-readonly";
pub(crate) const UNPACKER: &str = "unpacker";
pub(crate) const PREDIFFER: &str = "prediffer";
pub(crate) const WHITE_SPACES: &str = "white-spaces";
pub(crate) const IGNORE_BLANK_LINES: &str = "ignore-blank-lines";
pub(crate) const IGNORE_CASE: &str = "ignore-case";
pub(crate) const IGNORE_CR_DIFF: &str = "ignore-carriage-return-diff";
pub(crate) const IGNORE_NUMBERS: &str = "ignore-numbers";
pub(crate) const IGNORE_CODEPAGE_DIFF: &str = "ignore-codepage-diff";
pub(crate) const IGNORE_COMMENT_DIFF: &str = "ignore-comment-diff";
pub(crate) const COMPARE_METHOD: &str = "compare-method";
pub(crate) const HIDDEN_LIST: &str = "hidden-list";
pub(crate) const HIDDEN_ITEM: &str = "hidden-item";
