// tokenizer.rs: delimiter splitting utilities
use memchr::memchr_iter;

/// Split `line` on every occurrence of `delimiter`, keeping empty fields.
///
/// A trailing delimiter yields a trailing empty field, so `"a;b;"` splits into
/// three fields. No quoting is recognised: the delimiter always separates.
pub fn split_fields(line: &str, delimiter: char) -> Vec<&str> {
    if !delimiter.is_ascii() {
        return line.split(delimiter).collect();
    }
    let bytes = line.as_bytes();
    // Pre-reserve capacity based on delimiter count to avoid reallocations
    let mut out: Vec<&str> = Vec::with_capacity(memchr_iter(delimiter as u8, bytes).count() + 1);
    let mut start = 0usize;
    for pos in memchr_iter(delimiter as u8, bytes) {
        // ASCII delimiter bytes never fall inside a multi-byte sequence, so
        // both slice bounds sit on char boundaries.
        out.push(&line[start..pos]);
        start = pos + 1;
    }
    out.push(&line[start..]);
    out
}

#[cfg(test)]
mod tests {
    use super::split_fields;

    #[test]
    fn test_split_fields_basic_and_empty() {
        // Basic
        assert_eq!(split_fields("a;b;c", ';'), vec!["a", "b", "c"]);
        // Empty fields in the middle and at the end are kept
        assert_eq!(split_fields("a;;b;", ';'), vec!["a", "", "b", ""]);
        // Leading delimiter
        assert_eq!(split_fields(";x", ';'), vec!["", "x"]);
        // Empty string is a single empty field
        assert_eq!(split_fields("", ';'), vec![""]);
        // No quoting: commas inside quotes still split
        assert_eq!(split_fields("\"a,b\",c", ','), vec!["\"a", "b\"", "c"]);
    }

    #[test]
    fn test_split_fields_non_ascii_delimiter() {
        assert_eq!(split_fields("a§b§§c", '§'), vec!["a", "b", "", "c"]);
        // Multi-byte content around an ASCII delimiter
        assert_eq!(split_fields("é|ü|", '|'), vec!["é", "ü", ""]);
    }
}
