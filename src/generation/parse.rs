use super::types::GenerationResult;
use crate::{Error, Result};
use serde_json::Value;

const FENCE: &str = "```";

/// Pulls the first JSON object out of a model reply, ignoring code fences
/// and any prose around it.
pub fn extract_json_object(raw: &str) -> Result<Value> {
    let body = strip_fences(raw);

    let candidate = find_object(body)
        .ok_or_else(|| Error::invalid_model_output("No JSON object found in model output.", raw))?;

    serde_json::from_str(candidate).map_err(|e| Error::invalid_model_output(e.to_string(), raw))
}

/// Extracts the reply object and checks that the five named keys are present.
pub fn parse_generation(raw: &str) -> Result<GenerationResult> {
    let object = match extract_json_object(raw)? {
        Value::Object(object) => object,
        other => {
            return Err(Error::invalid_model_output(
                format!("expected a JSON object, got {}", other),
                raw,
            ));
        }
    };

    GenerationResult::from_object(object)
        .map_err(|missing| Error::invalid_model_output(format!("missing field `{}`", missing), raw))
}

fn strip_fences(raw: &str) -> &str {
    let mut s = raw.trim();

    if let Some(rest) = s.strip_prefix(FENCE) {
        let rest = match rest.get(..4) {
            Some(tag) if tag.eq_ignore_ascii_case("json") => &rest[4..],
            _ => rest,
        };
        s = rest.trim_start();
    }

    if let Some(rest) = s.strip_suffix(FENCE) {
        s = rest.trim_end();
    }

    s
}

/// Span of the first balanced `{...}`, skipping braces inside string literals.
/// Falls back to first `{` through last `}` when nothing balances, so the
/// JSON parser can report what is wrong with it.
fn find_object(s: &str) -> Option<&str> {
    let start = s.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in s[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&s[start..=start + offset]);
                }
            }
            _ => {}
        }
    }

    let end = s.rfind('}').filter(|&end| end > start)?;
    Some(&s[start..=end])
}
