//! OCR line cleaning.

use super::patterns::{NOISE_SYMBOLS, NON_KEEP, WHITESPACE_RUN};

/// Normalize one raw OCR line.
///
/// Total function, no failure mode: empty input yields empty output.
/// Steps, in order:
/// 1. collapse newline-separated fragments into a single line,
/// 2. rewrite `0` to `o` where it sits against a letter (OCR reads the
///    letter O as a zero inside words; zeros inside numbers are kept),
/// 3. strip the fixed decorative-symbol set,
/// 4. strip everything that is not a word character, digit, comma,
///    period, whitespace or dollar sign,
/// 5. collapse whitespace runs and trim.
pub fn clean_line(raw: &str) -> String {
    let joined = raw
        .split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ");

    let repaired = repair_zeros(&joined);

    let stripped = NOISE_SYMBOLS.replace_all(&repaired, "");
    let stripped = NON_KEEP.replace_all(&stripped, "");

    WHITESPACE_RUN.replace_all(&stripped, " ").trim().to_string()
}

fn is_letter(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

fn repair_zeros(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());

    for (i, &c) in chars.iter().enumerate() {
        if c == '0' {
            let prev_letter = i > 0 && is_letter(chars[i - 1]);
            let next_letter = chars.get(i + 1).is_some_and(|&n| is_letter(n));
            if prev_letter || next_letter {
                out.push('o');
                continue;
            }
        }
        out.push(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn collapses_multiline_fragments() {
        assert_eq!(clean_line("Tomato\n\n  2 kg "), "Tomato 2 kg");
    }

    #[test]
    fn repairs_zero_inside_words_only() {
        assert_eq!(clean_line("T0mato 2.0 kg"), "Tomato 2.0 kg");
        assert_eq!(clean_line("Oliv e0il"), "Oliv eoil");
        // zeros inside numbers are untouched
        assert_eq!(clean_line("Rice 10 kg $9.50"), "Rice 10 kg $9.50");
    }

    #[test]
    fn strips_noise_symbols() {
        assert_eq!(clean_line("■ Garlic ★ 2 kg →"), "Garlic 2 kg");
        assert_eq!(clean_line("INVOICE # 1045"), "INVOICE 1045");
    }

    #[test]
    fn strips_disallowed_characters_but_keeps_prices() {
        assert_eq!(clean_line("Soy Sauce! 1 L @ $3.20?"), "Soy Sauce 1 L $3.20");
    }

    #[test]
    fn keeps_cjk_text() {
        assert_eq!(clean_line("トマト 2袋"), "トマト 2袋");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(clean_line(""), "");
        assert_eq!(clean_line("  \n \n "), "");
    }

    #[test]
    fn cleaning_is_idempotent_on_invoice_lines() {
        let lines = [
            "Tomato 2.0 kg",
            "■ Garlic ★ 2 kg → $4.00",
            "INVOICE # 1045",
            "  Soy\nSauce   1 L ",
            "T0mato 1o pcs",
            "トマト 2袋 ※",
        ];
        for line in lines {
            let once = clean_line(line);
            assert_eq!(clean_line(&once), once, "not idempotent for {line:?}");
        }
    }
}
