use crate::parser::Captures;
use crate::substitution::substitute;

/// Expand `template` if present, otherwise take capture `group` verbatim.
/// Absent groups yield an empty string.
pub(crate) fn replace_or_capture(
    template: Option<&str>,
    captures: &Captures,
    group: usize,
) -> String {
    match template {
        Some(t) => substitute(t, captures).into_owned(),
        None => capture_or_empty(captures, group).to_owned(),
    }
}

pub(crate) fn capture_or_empty<'a>(captures: &Captures<'a>, group: usize) -> &'a str {
    captures.get_str(group).unwrap_or("")
}
