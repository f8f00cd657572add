//! Grouping of raw OCR lines into candidate item blocks.

/// Group consecutive raw lines into blocks hypothesized to describe one
/// item each.
///
/// Pass 1 accumulates trimmed non-blank lines and flushes the buffer as a
/// block once it holds at least two lines and the newest line carries a
/// digit or `$` (prices and quantities mark the end of an item
/// description). Pass 2 merges a digit-free block into the following
/// numeric block: a price/quantity-free fragment is usually a name
/// continuation. No line is dropped; ordering is stable.
pub fn split_into_blocks<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut raw_blocks: Vec<String> = Vec::new();
    let mut buffer: Vec<String> = Vec::new();

    for line in lines {
        let cleaned = line.as_ref().trim();
        if cleaned.is_empty() {
            continue;
        }
        buffer.push(cleaned.to_string());

        if buffer.len() >= 2 && has_digit_or_price(cleaned) {
            raw_blocks.push(buffer.join(" "));
            buffer.clear();
        }
    }
    if !buffer.is_empty() {
        raw_blocks.push(buffer.join(" "));
    }

    let mut merged = Vec::with_capacity(raw_blocks.len());
    let mut i = 0;
    while i < raw_blocks.len() {
        let current = &raw_blocks[i];
        let next_is_numeric = raw_blocks
            .get(i + 1)
            .is_some_and(|next| has_digit_or_price(next));

        if !has_digit_or_price(current) && next_is_numeric {
            merged.push(format!("{} {}", current, raw_blocks[i + 1]));
            i += 2;
        } else {
            merged.push(current.clone());
            i += 1;
        }
    }

    merged
}

fn has_digit_or_price(line: &str) -> bool {
    line.chars().any(|c| c.is_ascii_digit() || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn merges_name_fragment_with_following_numeric_line() {
        let blocks = split_into_blocks(&["Garlic", "2 kg $4.00"]);
        assert_eq!(blocks, vec!["Garlic 2 kg $4.00"]);
    }

    #[test]
    fn single_numeric_line_stands_alone() {
        let blocks = split_into_blocks(&["Tomato 2 kg"]);
        assert_eq!(blocks, vec!["Tomato 2 kg"]);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let blocks = split_into_blocks(&["", "  ", "Garlic", "", "2 kg"]);
        assert_eq!(blocks, vec!["Garlic 2 kg"]);
    }

    #[test]
    fn trailing_fragment_is_flushed() {
        let blocks = split_into_blocks(&["Olive Oil", "1 L $12.00", "Best before"]);
        assert_eq!(blocks, vec!["Olive Oil 1 L $12.00", "Best before"]);
    }

    #[test]
    fn every_line_appears_exactly_once() {
        let lines = [
            "Garlic",
            "2 kg $4.00",
            "Olive Oil",
            "1 L",
            "Chicken Thighs 3kg $9.50",
            "imported",
        ];
        let blocks = split_into_blocks(&lines);

        let mut expected: Vec<&str> = Vec::new();
        for line in &lines {
            expected.extend(line.split_whitespace());
        }
        let mut actual: Vec<&str> = Vec::new();
        for block in &blocks {
            actual.extend(block.split_whitespace());
        }
        assert_eq!(actual, expected);
    }
}
