use super::types::{Category, ParsedUserAgent, Variable};
use super::ua_parser::Parse;

/// Per-request memo of the parsed user-agent.
///
/// Each category moves from not-parsed to parsed exactly once; a parsed
/// category is never overwritten for the rest of the request. The cache is
/// plain owned data and is dropped together with its request.
#[derive(Debug, Default)]
pub struct RequestAttributeCache {
    parsed: ParsedUserAgent,
    device_done: bool,
    os_done: bool,
    browser_done: bool,
}

impl RequestAttributeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `variable` for the user-agent `raw`.
    ///
    /// An empty `raw` short-circuits to `None` without parsing or touching the
    /// cache. Otherwise the variable's category is parsed on first use and the
    /// field projected from the memoized result; empty fields read as `None`.
    ///
    /// `raw` is assumed constant for the lifetime of the cache: a category
    /// parsed once is not re-parsed for a different string.
    pub fn resolve<P>(&mut self, parser: &P, raw: &str, variable: Variable) -> Option<&str>
    where
        P: Parse + ?Sized,
    {
        if raw.is_empty() {
            return None;
        }
        self.ensure_parsed(parser, raw, variable.category());

        let value = variable.field().get(&self.parsed);
        (!value.is_empty()).then_some(value)
    }

    pub fn is_parsed(&self, category: Category) -> bool {
        match category {
            Category::Device => self.device_done,
            Category::Os => self.os_done,
            Category::Browser => self.browser_done,
        }
    }

    /// The memoized structure. Categories not yet parsed hold defaults.
    pub fn parsed(&self) -> &ParsedUserAgent {
        &self.parsed
    }

    fn ensure_parsed<P>(&mut self, parser: &P, raw: &str, category: Category)
    where
        P: Parse + ?Sized,
    {
        if self.is_parsed(category) {
            return;
        }
        log::trace!("parsing user-agent {} for {:?}", category.as_str(), raw);
        match category {
            Category::Device => {
                self.parsed.device = parser.parse_device(raw);
                self.device_done = true;
            }
            Category::Os => {
                self.parsed.os = parser.parse_os(raw);
                self.os_done = true;
            }
            Category::Browser => {
                self.parsed.browser = parser.parse_browser(raw);
                self.browser_done = true;
            }
        }
    }
}
