//! Identifier transforms matching protoc's Java helpers.

/// Converts `underscore_separated` (or otherwise punctuated) names the way
/// protoc does: letters after a separator or a digit are capitalized,
/// digits pass through, separators are dropped.
#[must_use]
pub fn underscores_to_camel(input: &str, cap_first_letter: bool) -> String {
    let mut out = String::with_capacity(input.len());
    let mut cap_next = cap_first_letter;
    for ch in input.chars() {
        if ch.is_ascii_lowercase() {
            out.push(if cap_next { ch.to_ascii_uppercase() } else { ch });
            cap_next = false;
        } else if ch.is_ascii_uppercase() {
            out.push(ch);
            cap_next = false;
        } else if ch.is_ascii_digit() {
            out.push(ch);
            cap_next = true;
        } else {
            cap_next = true;
        }
    }
    out
}

/// The outer-class stem derived from a proto file name: the base name with
/// the `.proto`/`.protodevel` extension removed, camel-cased.
#[must_use]
pub fn outer_class_stem(file_name: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name);
    let stem = base
        .strip_suffix(".protodevel")
        .or_else(|| base.strip_suffix(".proto"))
        .unwrap_or(base);
    underscores_to_camel(stem, true)
}
