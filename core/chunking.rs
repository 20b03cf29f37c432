use log;

/// A numbered part, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    /// 1-indexed position.
    pub index: usize,
    pub total: usize,
    pub content: String,
}

/// Splits `document` into parts of at most `max_lines` lines.
///
/// With `max_lines <= 0` the document is returned whole as the only part.
/// Lines are delimited by `\n` alone, so a trailing newline yields a final
/// empty line and joining every part with `\n` rebuilds the input exactly.
/// File blocks may straddle two parts.
pub fn split_lines(document: &str, max_lines: i64) -> Vec<String> {
    if max_lines <= 0 {
        return vec![document.to_string()];
    }
    let size = usize::try_from(max_lines).unwrap_or(usize::MAX);

    let lines: Vec<&str> = document.split('\n').collect();
    let parts: Vec<String> = lines.chunks(size).map(|group| group.join("\n")).collect();
    log::info!(
        "Split {} lines into {} parts of at most {} lines.",
        lines.len(),
        parts.len(),
        size
    );
    parts
}

pub fn into_parts(chunks: Vec<String>) -> Vec<Part> {
    let total = chunks.len();
    chunks
        .into_iter()
        .enumerate()
        .map(|(i, content)| Part {
            index: i + 1,
            total,
            content,
        })
        .collect()
}

pub fn render_part(part: &Part) -> String {
    format!(
        ">>>> START PROMPT PART {i} OF {n}\n{}\n<<<< END PROMPT PART {i} OF {n}\n\n",
        part.content,
        i = part.index,
        n = part.total
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_counts(parts: &[String]) -> Vec<usize> {
        parts.iter().map(|p| p.split('\n').count()).collect()
    }

    #[test]
    fn test_no_limit_returns_document() {
        let doc = "a\nb\nc\n";
        assert_eq!(split_lines(doc, 0), vec![doc.to_string()]);
        assert_eq!(split_lines(doc, -5), vec![doc.to_string()]);
        assert_eq!(split_lines("", 0), vec![String::new()]);
    }

    #[test]
    fn test_seven_lines_by_three() {
        let doc = "1\n2\n3\n4\n5\n6\n7";
        let parts = split_lines(doc, 3);
        assert_eq!(parts, vec!["1\n2\n3", "4\n5\n6", "7"]);
        assert_eq!(line_counts(&parts), vec![3, 3, 1]);
    }

    #[test]
    fn test_trailing_newline_counts_as_empty_line() {
        let parts = split_lines("a\nb\n", 2);
        assert_eq!(parts, vec!["a\nb", ""]);
    }

    #[test]
    fn test_exact_multiple() {
        let parts = split_lines("a\nb\nc\nd", 2);
        assert_eq!(parts, vec!["a\nb", "c\nd"]);
    }

    #[test]
    fn test_reconstruction_and_count() {
        let doc = ">>> START FILE \"a\"\nx\ny\n<<< END FILE\n\n>>> START FILE \"b\"\nz\n<<< END FILE\n\n";
        let total = doc.split('\n').count();
        for max in 1..=(total as i64 + 2) {
            let parts = split_lines(doc, max);
            assert_eq!(parts.join("\n"), doc, "max_lines = {}", max);
            assert_eq!(parts.len(), total.div_ceil(max as usize), "max_lines = {}", max);
        }
    }

    #[test]
    fn test_into_parts_and_render() {
        let parts = into_parts(split_lines("1\n2\n3\n4\n5\n6\n7", 3));
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].index, 1);
        assert_eq!(parts[2].index, 3);
        assert!(parts.iter().all(|p| p.total == 3));
        assert_eq!(
            render_part(&parts[2]),
            ">>>> START PROMPT PART 3 OF 3\n7\n<<<< END PROMPT PART 3 OF 3\n\n"
        );
    }
}
