//! Message template substitution
//!
//! Event messages may reference facts as `{factName}` placeholders,
//! resolved against the fact set at emission time. Placeholders naming an
//! absent fact are left verbatim so a typo in a rule stays visible.

use verdict_core::FactSet;

/// Substitute `{factName}` placeholders in `template` with fact values
pub(crate) fn render(template: &str, facts: &FactSet) -> String {
    if !template.contains('{') {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match facts.get(name) {
                    Some(value) => out.push_str(&value.to_string()),
                    None => {
                        // Unknown placeholder stays as written
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                // Unbalanced brace, copy the remainder through
                out.push_str(&rest[open..]);
                return out;
            }
        }
    }

    out.push_str(rest);
    out
}
