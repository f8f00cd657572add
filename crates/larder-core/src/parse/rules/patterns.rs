//! Common regex patterns for invoice line extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Decorative/noise symbols that OCR picks up from rules, bullets and
    // box-drawing around invoice tables.
    pub static ref NOISE_SYMBOLS: Regex = Regex::new(
        r"[=:_•■●◆★・▶→~#※\\-]"
    ).unwrap();

    // Anything that is not a word character, digit, comma, period,
    // whitespace or dollar sign. Unicode \w keeps CJK item names intact.
    pub static ref NON_KEEP: Regex = Regex::new(
        r"[^\w.,\s$]"
    ).unwrap();

    pub static ref WHITESPACE_RUN: Regex = Regex::new(
        r"\s+"
    ).unwrap();

    // Metadata keywords that disqualify a line as an item when anchored at
    // the start (invoice headers, totals, contact blocks).
    pub static ref METADATA_PREFIX: Regex = Regex::new(
        r"(?i)^(invoice|total|date|thank|subtotal|address|no\.|tax|cash|tel|phone)"
    ).unwrap();

    // Lines made only of digits, whitespace and separator punctuation
    // (dates, phone fragments, column rulers).
    pub static ref NUMERIC_ONLY_LINE: Regex = Regex::new(
        r"^[\d\s/:.\-]+$"
    ).unwrap();

    // Presence of an integer or decimal token (comma or period separator).
    pub static ref NUMBER_TOKEN: Regex = Regex::new(
        r"\d+([.,]\d+)?"
    ).unwrap();

    // First numeric fragment usable as a quantity. Unanchored, so fused
    // tokens like "3kg" still yield 3.
    pub static ref QUANTITY_TOKEN: Regex = Regex::new(
        r"\d+(?:[.,]\d+)?"
    ).unwrap();

    // $-prefixed price token. The $ prefix is what separates a price from
    // a quantity; bare numbers are never prices.
    pub static ref PRICE_TOKEN: Regex = Regex::new(
        r"\$(\d+(?:\.\d+)?)"
    ).unwrap();

    // Units accepted by the item-line classifier. CJK unit characters
    // (bag, bottle, piece, box, case, can) match without word boundaries
    // since they fuse directly onto digits.
    pub static ref CLASSIFIER_UNITS: Regex = Regex::new(
        r"(?i)(\b(kg|g|l|ml|pcs?|bottle|pack)\b|袋|本|個|箱|ケース|缶)"
    ).unwrap();

    // Wider unit vocabulary used during line normalization.
    pub static ref UNIT_TOKEN: Regex = Regex::new(
        r"(?i)(\b(kg|g|gram|gr|l|ml|cl|pcs?|packs?|bottle|box)\b|袋|個|本|缶|ケース|パック)"
    ).unwrap();

    // At least one alphabetic character, Latin or CJK.
    pub static ref WORD_PRESENT: Regex = Regex::new(
        r"[A-Za-z\u{3040}-\u{30FF}\u{4E00}-\u{9FAF}]"
    ).unwrap();
}
