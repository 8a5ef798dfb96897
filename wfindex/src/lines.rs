//! Descriptor line splitting shared by indexing, validation and metadata.

/// Split `contents` into lines on `\n` or `\r\n`.
///
/// Trailing empty lines are dropped, so `"a\n\n"` is `["a"]` and `"\n"` has no
/// lines at all. Empty input is the single empty line `[""]`. A lone `\r` that
/// is not followed by `\n` stays part of its line.
#[must_use]
pub fn descriptor_lines(contents: &str) -> Vec<&str> {
    if contents.is_empty() {
        return vec![""];
    }

    let mut lines: Vec<&str> = contents.split('\n').collect();
    if let Some((_, terminated)) = lines.split_last_mut() {
        for line in terminated {
            let current: &str = *line;
            if let Some(stripped) = current.strip_suffix('\r') {
                *line = stripped;
            }
        }
    }
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_lines_table() {
        let cases: &[(&str, &[&str])] = &[
            ("", &[""]),
            ("\n", &[]),
            ("\n\n\r\n", &[]),
            ("author Ann", &["author Ann"]),
            ("author Ann\n\n", &["author Ann"]),
            ("import a\r\nauthor Ann\r\n", &["import a", "author Ann"]),
            ("import a\n\nauthor Ann", &["import a", "", "author Ann"]),
            ("\nauthor Ann", &["", "author Ann"]),
            ("author Ann\r", &["author Ann\r"]),
        ];
        for (contents, expected) in cases {
            assert_eq!(descriptor_lines(contents), *expected, "input {}", contents.escape_debug());
        }
    }
}
