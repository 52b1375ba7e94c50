use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::item::ProjectFileItem;
use crate::project_file::ProjectFileError;
use crate::tags;

/// Serialises the item sequence to a project file on disk.
/// 將比較項目序列寫入磁碟上的專案檔。
///
/// The destination is truncated up front; a failed save can leave a
/// truncated or empty file behind, so callers that need the previous
/// contents must keep their own copy.
pub fn save_path(path: impl AsRef<Path>, items: &[ProjectFileItem]) -> Result<(), ProjectFileError> {
    let file = File::create(path)?;
    let mut sink = BufWriter::new(file);
    write_to(&mut sink, items)?;
    sink.flush()?;
    Ok(())
}

/// Serialises the item sequence into any byte sink as an indented UTF-8
/// XML document.
/// 將比較項目序列輸出為縮排的 UTF-8 XML 文件。
pub fn write_to<W: Write>(sink: W, items: &[ProjectFileItem]) -> Result<(), ProjectFileError> {
    let mut writer = Writer::new_with_indent(sink, b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new(tags::ROOT)))?;
    for item in items {
        write_item(&mut writer, item)?;
    }
    writer.write_event(Event::End(BytesEnd::new(tags::ROOT)))?;
    Ok(())
}

// Emission order and gating follow the on-disk format: paths by presence,
// optional fields by their persist flag (and non-emptiness for text
// fields), left/right readonly always, middle readonly only alongside a
// middle path. `prediffer` is gated on non-emptiness alone.
fn write_item<W: Write>(
    writer: &mut Writer<W>,
    item: &ProjectFileItem,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new(tags::PATHS)))?;

    let has_middle_path = !item.paths.middle().is_empty();

    if !item.paths.left().is_empty() {
        write_text_element(writer, tags::LEFT, item.paths.left())?;
    }
    if has_middle_path {
        write_text_element(writer, tags::MIDDLE, item.paths.middle())?;
    }
    if !item.paths.right().is_empty() {
        write_text_element(writer, tags::RIGHT, item.paths.right())?;
    }

    if item.save_filter {
        if let Some(filter) = item.filter.as_deref().filter(|text| !text.is_empty()) {
            write_text_element(writer, tags::FILTER, filter)?;
        }
    }
    if item.save_subfolders {
        // Any nonzero count, the unset sentinel included, means recursive.
        let text = if item.subfolders != 0 { "1" } else { "0" };
        write_text_element(writer, tags::SUBFOLDERS, text)?;
    }

    write_text_element(writer, tags::LEFT_RO, bool_text(item.left_read_only))?;
    if has_middle_path {
        write_text_element(writer, tags::MIDDLE_RO, bool_text(item.middle_read_only))?;
    }
    write_text_element(writer, tags::RIGHT_RO, bool_text(item.right_read_only))?;

    if item.save_unpacker {
        if let Some(unpacker) = item.unpacker.as_deref().filter(|text| !text.is_empty()) {
            write_text_element(writer, tags::UNPACKER, unpacker)?;
        }
    }
    if let Some(prediffer) = item.prediffer.as_deref().filter(|text| !text.is_empty()) {
        write_text_element(writer, tags::PREDIFFER, prediffer)?;
    }

    if item.save_ignore_white {
        let level = item.ignore_white.unwrap_or(0).to_string();
        write_text_element(writer, tags::WHITE_SPACES, &level)?;
    }
    if item.save_ignore_blank_lines {
        write_text_element(
            writer,
            tags::IGNORE_BLANK_LINES,
            bool_text(item.ignore_blank_lines.unwrap_or(false)),
        )?;
    }
    if item.save_ignore_case {
        write_text_element(
            writer,
            tags::IGNORE_CASE,
            bool_text(item.ignore_case.unwrap_or(false)),
        )?;
    }
    if item.save_ignore_eol {
        write_text_element(
            writer,
            tags::IGNORE_CR_DIFF,
            bool_text(item.ignore_eol.unwrap_or(false)),
        )?;
    }
    if item.save_ignore_numbers {
        write_text_element(
            writer,
            tags::IGNORE_NUMBERS,
            bool_text(item.ignore_numbers.unwrap_or(false)),
        )?;
    }
    if item.save_ignore_codepage {
        write_text_element(
            writer,
            tags::IGNORE_CODEPAGE_DIFF,
            bool_text(item.ignore_codepage.unwrap_or(false)),
        )?;
    }
    if item.save_filter_comments_lines {
        write_text_element(
            writer,
            tags::IGNORE_COMMENT_DIFF,
            bool_text(item.filter_comments_lines.unwrap_or(false)),
        )?;
    }
    if item.save_compare_method {
        let method = item.compare_method.unwrap_or(0).to_string();
        write_text_element(writer, tags::COMPARE_METHOD, &method)?;
    }

    if item.save_hidden_items && !item.hidden_items.is_empty() {
        writer.write_event(Event::Start(BytesStart::new(tags::HIDDEN_LIST)))?;
        for hidden in &item.hidden_items {
            write_text_element(writer, tags::HIDDEN_ITEM, hidden)?;
        }
        writer.write_event(Event::End(BytesEnd::new(tags::HIDDEN_LIST)))?;
    }

    writer.write_event(Event::End(BytesEnd::new(tags::PATHS)))?;
    Ok(())
}

fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    text: &str,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

fn bool_text(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}
