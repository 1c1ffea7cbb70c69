use chrono::NaiveDateTime;
use exif::{In, Reader, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Lowercased extensions (with dot) that carry an EXIF container worth reading.
const EXIF_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".tiff"];

pub fn has_exif_container(extension: &str) -> bool {
    EXIF_EXTENSIONS.contains(&extension)
}

/// Read `DateTimeOriginal` from the file's EXIF block.
/// EXIF datetimes have no timezone info - they are local time as-is.
/// Any read or parse failure yields `None`.
pub fn extract_exif_date(path: &Path) -> Option<NaiveDateTime> {
    let file = File::open(path).ok()?;
    let mut reader = BufReader::new(file);
    let exif = Reader::new().read_from_container(&mut reader).ok()?;

    let field = exif.get_field(Tag::DateTimeOriginal, In::PRIMARY)?;
    match field.value {
        Value::Ascii(ref parts) => {
            let raw = parts.first()?;
            parse_exif_datetime(std::str::from_utf8(raw).ok()?)
        }
        _ => None,
    }
}

fn parse_exif_datetime(s: &str) -> Option<NaiveDateTime> {
    let trimmed = s.trim_matches(|c: char| c == '\0' || c.is_whitespace());
    NaiveDateTime::parse_from_str(trimmed, "%Y:%m:%d %H:%M:%S").ok()
}
