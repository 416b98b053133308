//! Signature splitting
//!
//! Inverse of signature building: given either a bare identifier or a full
//! `name(types)` string, recover the identifier and the raw type list.

/// Bare identifier of a signature-or-name string.
///
/// Everything before the first `(`, or the whole string when there is none.
pub fn display_name(name: &str) -> &str { name.find('(').map_or(name, |open| &name[..open]) }

/// Raw type list of a signature-or-name string.
///
/// Strips the first `(` and the final character, then removes the first
/// space only. Returns an empty string when there is no `(`.
///
/// Nested parentheses are not tracked and only one space is removed, so
/// tuple types and loosely formatted input come back partly unnormalized.
/// Use [`split_types`] for a depth-aware split.
pub fn type_list(name: &str) -> String {
    let Some(open) = name.find('(') else {
        return String::new();
    };
    let start = open + 1;
    let end = name.char_indices().next_back().map_or(0, |(last, _)| last);
    if start >= end {
        return String::new();
    }
    name[start..end].replacen(' ', "", 1)
}

/// Both halves of a signature-or-name string
pub fn split_signature(name: &str) -> (&str, String) { (display_name(name), type_list(name)) }

/// Split a type list on its top-level commas.
///
/// Commas nested inside tuple parentheses do not split, and whitespace around
/// each entry is trimmed. No type is empty, so blank entries from stray or
/// trailing commas are dropped, and a blank list yields no types.
pub fn split_types(list: &str) -> Vec<String> {
    let mut types = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    for ch in list.chars() {
        match ch {
            '(' => {
                depth += 1;
                current.push(ch);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            ',' if depth == 0 => {
                push_type(&mut types, &current);
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    push_type(&mut types, &current);

    types
}

fn push_type(types: &mut Vec<String>, entry: &str) {
    let entry = entry.trim();
    if !entry.is_empty() {
        types.push(entry.to_string());
    }
}
