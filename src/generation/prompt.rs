/// Renders the naming/description instructions for one set of clothing attributes.
pub fn build_prompt(attributes: &str) -> String {
    format!(
        r#"You are a fashion product naming and description expert.

Based on the following clothing attributes, create:

1. A 3-word product name
2. A 5-word product name
3. An 8-word product name
4. A short description (2 sentences)
5. A long description (detailed, include 3-4 bullet points)

Clothing Attributes:
{attributes}

Return ONLY valid JSON (no markdown fences), exactly:
{{
  "three_word_name": "...",
  "five_word_name": "...",
  "eight_word_name": "...",
  "short_description": "...",
  "long_description": ["point 1", "point 2", "point 3"]
}}"#
    )
}
