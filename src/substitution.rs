use crate::parser::Captures;
use std::borrow::Cow;

/// Replace `$1` .. `$9` in `template` with capture groups from the regex
/// match, then trim surrounding whitespace (uap-core behaviour).
///
/// Groups that did not participate in the match expand to nothing.
/// Returns borrowed data when the template contains no `$` at all.
pub(crate) fn substitute<'a>(template: &'a str, captures: &Captures) -> Cow<'a, str> {
    if !template.contains('$') {
        return Cow::Borrowed(template.trim());
    }

    let mut result = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '$' {
            if let Some(idx) = chars.peek().and_then(|d| d.to_digit(10)) {
                chars.next();
                if let Some(m) = captures.get_str(idx as usize) {
                    result.push_str(m);
                }
                continue;
            }
        }
        result.push(c);
    }

    let trimmed = result.trim();
    if trimmed.len() != result.len() {
        result = trimmed.to_owned();
    }
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps<'a>(re: &'a regex::Regex, text: &'a str) -> Captures<'a> {
        Captures::Standard(re.captures(text).unwrap())
    }

    #[test]
    fn basic_substitution() {
        let re = regex::Regex::new(r"(Pixel) (\d+)").unwrap();
        let c = caps(&re, "Pixel 8");
        assert_eq!(substitute("Google $1 $2", &c), "Google Pixel 8");
    }

    #[test]
    fn no_placeholders_borrows() {
        let re = regex::Regex::new(r"(Edg)").unwrap();
        let c = caps(&re, "Edg");
        assert!(matches!(substitute(" Edge ", &c), Cow::Borrowed("Edge")));
    }

    #[test]
    fn missing_group_is_trimmed_away() {
        let re = regex::Regex::new(r"(Linux)(?: (\d+)|)").unwrap();
        let c = caps(&re, "Linux");
        assert_eq!(substitute("$1 $2", &c), "Linux");
        assert_eq!(substitute("$2", &c), "");
    }

    #[test]
    fn dollar_without_digit_is_literal() {
        let re = regex::Regex::new(r"(a)").unwrap();
        let c = caps(&re, "a");
        assert_eq!(substitute("$x$1", &c), "$xa");
    }
}
