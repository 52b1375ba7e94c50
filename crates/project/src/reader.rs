use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::item::ProjectFileItem;
use crate::project_file::ProjectFileError;
use crate::tags;

/// Reads every comparison definition from a project file on disk.
/// 讀取磁碟上專案檔內的所有比較定義。
pub fn read_path(path: impl AsRef<Path>) -> Result<Vec<ProjectFileItem>, ProjectFileError> {
    let file = File::open(path)?;
    read_from(BufReader::new(file))
}

/// Reads comparison definitions from any buffered byte source.
/// 從任意緩衝位元來源讀取比較定義。
///
/// Malformed XML or an IO failure aborts with an error; whatever was built
/// up to that point is discarded.
pub fn read_from<R: BufRead>(source: R) -> Result<Vec<ProjectFileItem>, ProjectFileError> {
    let mut reader = Reader::from_reader(source);
    let mut builder = ItemBuilder::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_event_into(&mut buf)? {
            Event::Start(event) => {
                builder.open_element(element_name(event.local_name().as_ref()));
            }
            Event::Empty(event) => {
                // A self-closing element opens and closes without ever
                // producing text, so its has-flag stays untouched.
                builder.open_element(element_name(event.local_name().as_ref()));
                builder.close_element();
            }
            Event::End(_) => builder.close_element(),
            Event::Text(event) => builder.text(&event.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(builder.into_items())
}

// Element names are matched as UTF-8; a non-UTF-8 name cannot be a known
// tag and falls through to the unrecognized-subtree path.
fn element_name(raw: &[u8]) -> &str {
    str::from_utf8(raw).unwrap_or("")
}

/// Field elements recognized directly under a `paths` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldTag {
    Left,
    Middle,
    Right,
    Filter,
    Subfolders,
    LeftReadOnly,
    MiddleReadOnly,
    RightReadOnly,
    Unpacker,
    Prediffer,
    IgnoreWhite,
    IgnoreBlankLines,
    IgnoreCase,
    IgnoreEol,
    IgnoreNumbers,
    IgnoreCodepage,
    IgnoreComments,
    CompareMethod,
}

impl FieldTag {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            tags::LEFT => Some(Self::Left),
            tags::MIDDLE => Some(Self::Middle),
            tags::RIGHT => Some(Self::Right),
            tags::FILTER => Some(Self::Filter),
            tags::SUBFOLDERS => Some(Self::Subfolders),
            tags::LEFT_RO => Some(Self::LeftReadOnly),
            tags::MIDDLE_RO => Some(Self::MiddleReadOnly),
            tags::RIGHT_RO => Some(Self::RightReadOnly),
            tags::UNPACKER => Some(Self::Unpacker),
            tags::PREDIFFER => Some(Self::Prediffer),
            tags::WHITE_SPACES => Some(Self::IgnoreWhite),
            tags::IGNORE_BLANK_LINES => Some(Self::IgnoreBlankLines),
            tags::IGNORE_CASE => Some(Self::IgnoreCase),
            tags::IGNORE_CR_DIFF => Some(Self::IgnoreEol),
            tags::IGNORE_NUMBERS => Some(Self::IgnoreNumbers),
            tags::IGNORE_CODEPAGE_DIFF => Some(Self::IgnoreCodepage),
            tags::IGNORE_COMMENT_DIFF => Some(Self::IgnoreComments),
            tags::COMPARE_METHOD => Some(Self::CompareMethod),
            _ => None,
        }
    }
}

/// Where the builder currently sits in the document structure.
/// 建構器目前在文件結構中的位置。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReaderState {
    /// Before the root element.
    Prologue,
    /// Inside the root, between `paths` blocks.
    Document,
    /// Inside a `paths` block.
    Item,
    /// Inside a recognized field element of the current item.
    Field(FieldTag),
    /// Inside the `hidden-list` container.
    HiddenList,
    /// Inside one `hidden-item` entry.
    HiddenItem,
    /// After the root element closed.
    Epilogue,
}

/// Incrementally rebuilds the item sequence from parser events.
/// 依據串流事件逐步重建比較項目序列。
///
/// Unrecognized elements are tracked only through `skip_depth`: their whole
/// subtree is ignored and the surrounding state resumes once it closes,
/// which is what makes unknown elements forward-compatible no-ops.
struct ItemBuilder {
    items: Vec<ProjectFileItem>,
    state: ReaderState,
    skip_depth: u32,
    hidden_text_seen: bool,
}

impl ItemBuilder {
    fn new() -> Self {
        Self {
            items: Vec::new(),
            state: ReaderState::Prologue,
            skip_depth: 0,
            hidden_text_seen: false,
        }
    }

    fn into_items(self) -> Vec<ProjectFileItem> {
        self.items
    }

    fn open_element(&mut self, name: &str) {
        if self.skip_depth > 0 {
            self.skip_depth += 1;
            return;
        }

        self.state = match self.state {
            // The root element's name is not validated; the format keys on
            // the `paths` blocks alone.
            ReaderState::Prologue => ReaderState::Document,
            ReaderState::Document if name == tags::PATHS => {
                self.items.push(ProjectFileItem::new());
                ReaderState::Item
            }
            ReaderState::Item if name == tags::HIDDEN_LIST => ReaderState::HiddenList,
            ReaderState::Item => match FieldTag::from_name(name) {
                Some(tag) => ReaderState::Field(tag),
                None => {
                    self.skip_depth = 1;
                    ReaderState::Item
                }
            },
            ReaderState::HiddenList if name == tags::HIDDEN_ITEM => {
                self.hidden_text_seen = false;
                ReaderState::HiddenItem
            }
            state => {
                self.skip_depth = 1;
                state
            }
        };
    }

    fn close_element(&mut self) {
        if self.skip_depth > 0 {
            self.skip_depth -= 1;
            return;
        }

        self.state = match self.state {
            ReaderState::Prologue => ReaderState::Prologue,
            ReaderState::Document => ReaderState::Epilogue,
            ReaderState::Item => ReaderState::Document,
            ReaderState::Field(_) => ReaderState::Item,
            ReaderState::HiddenList => ReaderState::Item,
            ReaderState::HiddenItem => ReaderState::HiddenList,
            ReaderState::Epilogue => ReaderState::Epilogue,
        };
    }

    fn text(&mut self, chunk: &str) {
        if self.skip_depth > 0 {
            return;
        }

        match self.state {
            ReaderState::Field(tag) => {
                if let Some(item) = self.items.last_mut() {
                    apply_field(item, tag, chunk);
                }
            }
            ReaderState::HiddenItem => {
                if let Some(item) = self.items.last_mut() {
                    // One entry per element; later chunks of the same
                    // element extend it.
                    if !self.hidden_text_seen {
                        item.hidden_items.push(String::new());
                        self.hidden_text_seen = true;
                    }
                    if let Some(entry) = item.hidden_items.last_mut() {
                        entry.push_str(chunk);
                    }
                    item.has_hidden_items = true;
                }
            }
            _ => {}
        }
    }
}

fn apply_field(item: &mut ProjectFileItem, tag: FieldTag, chunk: &str) {
    match tag {
        FieldTag::Left => {
            item.paths.push_left(chunk);
            item.has_left = true;
        }
        FieldTag::Middle => {
            item.paths.push_middle(chunk);
            item.has_middle = true;
        }
        FieldTag::Right => {
            item.paths.push_right(chunk);
            item.has_right = true;
        }
        FieldTag::Filter => {
            item.filter.get_or_insert_with(String::new).push_str(chunk);
        }
        FieldTag::Subfolders => {
            item.subfolders = parse_leading_int(chunk);
            item.has_subfolders = true;
        }
        FieldTag::LeftReadOnly => item.left_read_only = parse_leading_int(chunk) != 0,
        FieldTag::MiddleReadOnly => item.middle_read_only = parse_leading_int(chunk) != 0,
        FieldTag::RightReadOnly => item.right_read_only = parse_leading_int(chunk) != 0,
        FieldTag::Unpacker => {
            item.unpacker
                .get_or_insert_with(String::new)
                .push_str(chunk);
        }
        FieldTag::Prediffer => {
            item.prediffer
                .get_or_insert_with(String::new)
                .push_str(chunk);
        }
        FieldTag::IgnoreWhite => item.ignore_white = Some(parse_leading_int(chunk)),
        FieldTag::IgnoreBlankLines => {
            item.ignore_blank_lines = Some(parse_leading_int(chunk) != 0)
        }
        FieldTag::IgnoreCase => item.ignore_case = Some(parse_leading_int(chunk) != 0),
        FieldTag::IgnoreEol => item.ignore_eol = Some(parse_leading_int(chunk) != 0),
        FieldTag::IgnoreNumbers => item.ignore_numbers = Some(parse_leading_int(chunk) != 0),
        FieldTag::IgnoreCodepage => item.ignore_codepage = Some(parse_leading_int(chunk) != 0),
        FieldTag::IgnoreComments => {
            item.filter_comments_lines = Some(parse_leading_int(chunk) != 0)
        }
        FieldTag::CompareMethod => item.compare_method = Some(parse_leading_int(chunk)),
    }
}

/// Lenient numeric parse: leading whitespace, an optional sign and a digit
/// prefix are honoured, everything else yields 0. Hand-edited files with
/// garbage in numeric fields must keep loading.
/// 寬鬆數值解析；無法辨識的內容一律視為 0，不回報錯誤。
fn parse_leading_int(text: &str) -> i32 {
    let mut rest = text.trim_start();
    let mut sign = 1i64;
    if let Some(stripped) = rest.strip_prefix('-') {
        sign = -1;
        rest = stripped;
    } else if let Some(stripped) = rest.strip_prefix('+') {
        rest = stripped;
    }
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let mut value = 0i64;
    for digit in rest[..end].bytes() {
        value = value * 10 + i64::from(digit - b'0');
        if value > i64::from(i32::MAX) + 1 {
            break;
        }
    }
    (sign * value).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> Vec<ProjectFileItem> {
        read_from(xml.as_bytes()).expect("parse project XML")
    }

    #[test]
    fn reads_two_way_item_with_options() {
        let items = parse(
            "<project><paths>\
             <left>/a</left><right>/b</right>\
             <ignore-case>1</ignore-case>\
             </paths></project>",
        );
        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.left(), "/a");
        assert_eq!(item.right(), "/b");
        assert!(item.has_left());
        assert!(item.has_right());
        assert!(!item.has_middle());
        assert_eq!(item.ignore_case(), Some(true));
    }

    #[test]
    fn presence_is_distinct_from_value() {
        let items = parse(
            "<project><paths><ignore-case>0</ignore-case></paths>\
             <paths><left>/x</left></paths></project>",
        );
        assert_eq!(items[0].ignore_case(), Some(false));
        assert_eq!(items[1].ignore_case(), None);
    }

    #[test]
    fn lenient_numeric_content_parses_as_zero() {
        let items = parse("<project><paths><subfolders>abc</subfolders></paths></project>");
        assert_eq!(items[0].subfolders(), 0);
        assert!(items[0].has_subfolders());
    }

    #[test]
    fn numeric_prefix_is_honoured() {
        assert_eq!(parse_leading_int("12abc"), 12);
        assert_eq!(parse_leading_int("  -3"), -3);
        assert_eq!(parse_leading_int("+7"), 7);
        assert_eq!(parse_leading_int(""), 0);
        assert_eq!(parse_leading_int("abc"), 0);
        assert_eq!(parse_leading_int("99999999999999"), i32::MAX);
        assert_eq!(parse_leading_int("-99999999999999"), i32::MIN);
    }

    #[test]
    fn whitespace_level_and_compare_method_keep_raw_values() {
        let items = parse(
            "<project><paths>\
             <white-spaces>2</white-spaces>\
             <compare-method>3</compare-method>\
             </paths></project>",
        );
        assert_eq!(items[0].ignore_white(), Some(2));
        assert_eq!(items[0].compare_method(), Some(3));
    }

    #[test]
    fn unknown_elements_are_skipped_without_corruption() {
        let items = parse(
            "<project><paths>\
             <left>/a</left>\
             <mystery><left>/bogus</left><deep><left>/worse</left></deep></mystery>\
             <right>/b</right>\
             </paths></project>",
        );
        assert_eq!(items[0].left(), "/a");
        assert_eq!(items[0].right(), "/b");
    }

    #[test]
    fn nested_text_inside_field_is_ignored() {
        let items = parse(
            "<project><paths>\
             <left>/a<nested>/junk</nested></left>\
             </paths></project>",
        );
        assert_eq!(items[0].left(), "/a");
    }

    #[test]
    fn text_chunks_accumulate_without_separator() {
        // A comment splits the element text into two chunks.
        let items = parse("<project><paths><left>/a<!-- split -->/b</left></paths></project>");
        assert_eq!(items[0].left(), "/a/b");
    }

    #[test]
    fn empty_element_leaves_has_flag_unset() {
        let items = parse(
            "<project><paths><ignore-case/><ignore-numbers></ignore-numbers></paths></project>",
        );
        assert_eq!(items[0].ignore_case(), None);
        assert_eq!(items[0].ignore_numbers(), None);
    }

    #[test]
    fn hidden_items_keep_document_order() {
        let items = parse(
            "<project><paths>\
             <hidden-list>\
             <hidden-item>one.txt</hidden-item>\
             <hidden-item>two.txt</hidden-item>\
             </hidden-list>\
             </paths></project>",
        );
        assert!(items[0].has_hidden_items());
        assert_eq!(items[0].hidden_items(), ["one.txt", "two.txt"]);
    }

    #[test]
    fn multiple_paths_blocks_yield_items_in_document_order() {
        let items = parse(
            "<project>\
             <paths><left>/first</left></paths>\
             <paths><left>/second</left></paths>\
             <paths><left>/third</left></paths>\
             </project>",
        );
        let lefts: Vec<_> = items.iter().map(|item| item.left()).collect();
        assert_eq!(lefts, ["/first", "/second", "/third"]);
    }

    #[test]
    fn foreign_root_element_still_parses() {
        let items = parse("<legacy-project><paths><left>/a</left></paths></legacy-project>");
        assert_eq!(items[0].left(), "/a");
    }

    #[test]
    fn read_only_flags_have_no_presence_tracking() {
        let items = parse(
            "<project><paths>\
             <left-readonly>1</left-readonly>\
             <right-readonly>0</right-readonly>\
             </paths></project>",
        );
        assert!(items[0].left_read_only());
        assert!(!items[0].right_read_only());
    }

    #[test]
    fn escaped_text_is_unescaped() {
        let items = parse("<project><paths><filter>*.rs &amp; *.toml</filter></paths></project>");
        assert_eq!(items[0].filter(), Some("*.rs & *.toml"));
    }

    #[test]
    fn malformed_xml_is_a_hard_error() {
        let result = read_from("<project><paths><left>/a</right></paths></project>".as_bytes());
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_reports_io_error() {
        let result = read_path("/nonexistent/compare.rmproj");
        assert!(matches!(result, Err(ProjectFileError::Io(_))));
    }
}
