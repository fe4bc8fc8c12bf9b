//! Render selections and free-text notes into the user prompt

use crate::catalog::CATALOG;
use crate::selections::Selections;

/// Prompt sent when the user chose nothing and wrote nothing
pub const SURPRISE_PROMPT: &str =
    "Generate a completely original creative idea. Surprise me with something unique!";

const HEADER: &str = "Create an original creative idea based on these preferences:\n\n";
const DETAILS_HEADING: &str = "Additional Details from the creator:";
const REMINDER: &str = "Remember: Be original, avoid clichés. Create something truly unique and surprising!";

/// Build the prompt for a set of selections and free-text details
///
/// Selection lines follow the catalog's declared order. Details are trimmed
/// and treated as absent when only whitespace remains.
pub fn compose_prompt(selections: &Selections, additional_details: &str) -> String {
    let lines: Vec<String> = CATALOG
        .iter()
        .filter_map(|entry| {
            selections
                .get(entry.id)
                .filter(|value| !value.is_empty())
                .map(|value| format!("{}: {}", entry.label, value))
        })
        .collect();

    let details = additional_details.trim();

    if lines.is_empty() && details.is_empty() {
        return SURPRISE_PROMPT.to_string();
    }

    let mut prompt = String::from(HEADER);

    if !lines.is_empty() {
        prompt.push_str(&lines.join("\n"));
        prompt.push_str("\n\n");
    }

    if !details.is_empty() {
        prompt.push_str(DETAILS_HEADING);
        prompt.push('\n');
        prompt.push_str(details);
        prompt.push_str("\n\n");
    }

    prompt.push_str(REMINDER);
    prompt
}
