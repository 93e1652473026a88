//! Target and category name derivation.

/// Category folder used for images sitting directly in `source/official`.
pub const ROOT_CATEGORY_FOLDER: &str = "General";

/// Fallback when a name has no alphanumeric characters.
pub const EMPTY_NAME: &str = "Icon";

/// Normalize a file stem or folder name into a PlantUML-safe identifier.
///
/// Splits on anything that is not ASCII alphanumeric, upper-cases the first letter of each part
/// and joins them (`cloud_run` → `CloudRun`, `AI-Platform` → `AIPlatform`). A leading digit gets
/// an underscore prefix.
pub fn make_name(raw: &str) -> String {
    let mut name: String = raw
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect();
    if name.is_empty() {
        return EMPTY_NAME.to_string();
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Remove the first suffix in `suffixes` that `stem` ends with. Never empties the stem.
pub fn trim_suffix<'a>(stem: &'a str, suffixes: &[String]) -> &'a str {
    suffixes
        .iter()
        .filter(|s| !s.is_empty())
        .find_map(|s| stem.strip_suffix(s.as_str()))
        .filter(|trimmed| !trimmed.is_empty())
        .unwrap_or(stem)
}
