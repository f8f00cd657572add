//! Single-line candidate item extraction.

use tracing::debug;

use crate::models::config::NormalizerConfig;
use crate::models::item::CandidateItem;

use super::clean::clean_line;
use super::patterns::{PRICE_TOKEN, QUANTITY_TOKEN, UNIT_TOKEN, WHITESPACE_RUN};

/// Extract a structured candidate item from a single raw line, using the
/// default normalizer configuration.
pub fn normalize_line(raw: &str) -> Option<CandidateItem> {
    normalize_line_with(raw, &NormalizerConfig::default())
}

/// Extract a structured candidate item from a single raw line.
///
/// Returns `None` for malformed lines: too short after cleaning, no
/// parseable quantity, or no name left once the matched tokens are
/// removed. Dropped lines are logged, never surfaced as errors.
///
/// The price token is matched and removed first, so a `$`-prefixed number
/// can never double as the quantity. The quantity is then the first
/// numeric fragment of the remainder, and the unit the first vocabulary
/// token after that; whatever text is left becomes the name.
pub fn normalize_line_with(raw: &str, config: &NormalizerConfig) -> Option<CandidateItem> {
    let line = clean_line(raw);

    if line.chars().count() < config.min_line_len {
        debug!(line = %line, "dropping line: too short after cleaning");
        return None;
    }

    let (price, rest) = match PRICE_TOKEN.captures(&line) {
        Some(caps) => {
            let whole = caps.get(0).unwrap();
            let value = caps[1].parse::<f64>().ok();
            (value, remove_span(&line, whole.start(), whole.end()))
        }
        None => (None, line.clone()),
    };

    let (quantity, rest) = match QUANTITY_TOKEN.find(&rest) {
        Some(m) => match m.as_str().replace(',', ".").parse::<f64>() {
            Ok(q) => (q, remove_span(&rest, m.start(), m.end())),
            Err(_) => {
                debug!(line = %line, token = m.as_str(), "dropping line: unparseable quantity");
                return None;
            }
        },
        None => {
            debug!(line = %line, "dropping line: no quantity token");
            return None;
        }
    };

    let (unit, rest) = match UNIT_TOKEN.find(&rest) {
        Some(m) => (
            m.as_str().to_lowercase(),
            remove_span(&rest, m.start(), m.end()),
        ),
        None => (config.default_unit.clone(), rest),
    };

    let name = WHITESPACE_RUN.replace_all(&rest, " ").trim().to_string();
    if name.is_empty() {
        debug!(line = %line, "dropping line: no name left after extraction");
        return None;
    }

    debug!(name = %name, quantity, unit = %unit, ?price, "normalized line");

    Some(CandidateItem {
        name,
        quantity,
        unit,
        price,
    })
}

fn remove_span(s: &str, start: usize, end: usize) -> String {
    let mut out = String::with_capacity(s.len() - (end - start));
    out.push_str(&s[..start]);
    out.push_str(&s[end..]);
    out
}
