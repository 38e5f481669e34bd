//! Applies autocorrect replacements to source text.

use crate::types::Replacement;
use tracing::warn;

/// Result of applying a batch of replacements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOutcome {
    /// The rewritten source.
    pub text: String,
    /// For each input replacement, whether it was applied.
    pub applied: Vec<bool>,
}

impl FixOutcome {
    /// Number of replacements that were applied.
    #[must_use]
    pub fn applied_count(&self) -> usize {
        self.applied.iter().filter(|a| **a).count()
    }
}

/// Applies byte-range replacements to `source`.
///
/// Replacements are applied in offset order. One that overlaps an earlier
/// applied replacement, or whose range is not valid for `source`, is skipped.
#[must_use]
pub fn apply_replacements(source: &str, replacements: &[Replacement]) -> FixOutcome {
    let mut order: Vec<usize> = (0..replacements.len()).collect();
    order.sort_by_key(|&i| {
        let loc = &replacements[i].location;
        (loc.offset, loc.length)
    });

    let mut applied = vec![false; replacements.len()];
    let mut text = String::with_capacity(source.len());
    let mut cursor = 0;

    for i in order {
        let rep = &replacements[i];
        let Some(span) = rep.location.span(source) else {
            warn!(
                "Skipping replacement outside {}: {}..{}",
                rep.location.file.display(),
                rep.location.offset,
                rep.location.offset + rep.location.length
            );
            continue;
        };
        if span.start() < cursor {
            warn!(
                "Skipping overlapping replacement at {}:{}:{}",
                rep.location.file.display(),
                rep.location.line,
                rep.location.column
            );
            continue;
        }

        text.push_str(&source[cursor..span.start()]);
        text.push_str(&rep.new_text);
        cursor = span.end();
        applied[i] = true;
    }

    text.push_str(&source[cursor..]);
    FixOutcome { text, applied }
}
