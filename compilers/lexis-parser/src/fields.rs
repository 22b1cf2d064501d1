use lexis_protocol::{ALTERNATE_SEPARATOR, QUOTED_EMPTY};
use nom::{
    bytes::complete::take_till,
    character::complete::{char, u32 as decimal},
    combinator::all_consuming,
    multi::separated_list0,
    IResult,
};

pub const FIELD_DELIMITER: char = ',';
pub const COMMENT_MARKER: char = '#';
/// A line starting with this ends the word list of the current entry.
pub const SENTINEL: char = '!';

fn raw_fields(input: &str) -> IResult<&str, Vec<&str>> {
    separated_list0(char(FIELD_DELIMITER), take_till(|c| c == FIELD_DELIMITER))(input)
}

/// A `""` field means the same as leaving it blank.
fn clean(field: &str) -> String {
    let field = field.trim();
    if field == QUOTED_EMPTY {
        String::new()
    } else {
        field.to_string()
    }
}

/// Splits a line on the field delimiter. Empty fields are kept, so
/// `"a,,b"` gives three fields and `""` gives one empty field.
pub fn split_fields(line: &str) -> Vec<String> {
    match all_consuming(raw_fields)(line) {
        Ok((_, fields)) => fields.into_iter().map(clean).collect(),
        // take_till accepts anything up to a delimiter, so this is only
        // reachable on a nom contract change. Keep the line as one field.
        Err(_) => vec![clean(line)],
    }
}

/// Cleans a spelling line alternate by alternate, so a `""` slot (or a `""`
/// alternate) reads as empty and stores no word.
pub fn clean_spelling(line: &str) -> String {
    let separator = ALTERNATE_SEPARATOR.to_string();
    line.split(ALTERNATE_SEPARATOR)
        .map(clean)
        .collect::<Vec<_>>()
        .join(&separator)
}

/// Parses a non-negative decimal count; `None` for anything else.
pub fn parse_count(field: &str) -> Option<usize> {
    all_consuming(decimal::<&str, nom::error::Error<&str>>)(field.trim())
        .ok()
        .map(|(_, n)| n as usize)
}

/// Blank and `#` lines carry no data.
pub fn is_comment(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || line.starts_with(COMMENT_MARKER)
}

pub fn is_sentinel(line: &str) -> bool {
    line.trim_start().starts_with(SENTINEL)
}
