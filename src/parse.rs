//! Pattern extraction from raw model responses.
//!
//! Both entry points are total: any input string, including empty or
//! unrelated text, produces a well-formed result with absent fields rather
//! than an error. First match wins everywhere, so results are deterministic.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// First fence explicitly labeled `html`.
static HTML_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```html\n(.*?)```").expect("invalid html fence pattern"));

/// First unlabeled fence whose body opens with a doctype declaration.
static DOCTYPE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)```\n(<!DOCTYPE.*?)```").expect("invalid doctype fence pattern"));

/// Bare response that is itself an HTML document.
static BARE_DOCUMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(<!DOCTYPE|<html)").expect("invalid bare document pattern"));

/// Decision labels the instruction payload asks the model to emit, in
/// result-field order. Adding a label here (plus a field on
/// [`DesignDecisions`]) is the whole change needed to track a new decision.
const DECISION_LABELS: [&str; 4] = ["ARCHETYPE", "FONTS", "PALETTE", "LAYOUT"];

static DECISION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    DECISION_LABELS
        .iter()
        .map(|label| {
            Regex::new(&format!(r"(?im)^{label}:\s*(.+)$")).expect("invalid decision pattern")
        })
        .collect()
});

/// Design decisions stated by the model ahead of its code output.
///
/// Each field is independently `None` when no matching line was found.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DesignDecisions {
    pub archetype: Option<String>,
    pub fonts: Option<String>,
    pub palette: Option<String>,
    pub layout: Option<String>,
}

/// Extracts the HTML document from a response, if one is present.
///
/// Checks, in order: an ```` ```html ````-labeled fence, an unlabeled fence
/// opening with `<!DOCTYPE` (case-insensitive), and finally the whole
/// trimmed response when it starts with `<!DOCTYPE` or `<html`. The first
/// rule to match wins; `None` means the response carried no document.
pub fn extract_html(response_text: &str) -> Option<String> {
    if let Some(captures) = HTML_FENCE.captures(response_text) {
        return Some(captures[1].trim().to_string());
    }

    if let Some(captures) = DOCTYPE_FENCE.captures(response_text) {
        return Some(captures[1].trim().to_string());
    }

    let trimmed = response_text.trim();
    if BARE_DOCUMENT.is_match(trimmed) {
        return Some(trimmed.to_string());
    }

    tracing::debug!("no html document found in response");
    None
}

/// Parses the `LABEL: value` decision lines out of a response.
///
/// Labels are matched case-insensitively at line start; each label takes the
/// remainder of its first matching line, trimmed. Labels are independent, so
/// a missing line leaves only that field absent.
pub fn parse_design_decisions(response_text: &str) -> DesignDecisions {
    let mut values = DECISION_PATTERNS
        .iter()
        .map(|pattern| first_labeled_line(pattern, response_text));

    let decisions = DesignDecisions {
        archetype: values.next().flatten(),
        fonts: values.next().flatten(),
        palette: values.next().flatten(),
        layout: values.next().flatten(),
    };

    if decisions == DesignDecisions::default() {
        tracing::debug!("no decision lines found in response");
    }
    decisions
}

fn first_labeled_line(pattern: &Regex, input: &str) -> Option<String> {
    pattern
        .captures(input)
        .map(|captures| captures[1].trim().to_string())
}
