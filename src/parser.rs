use rayon::prelude::*;

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Captures — unified enum over regex::Captures and fancy_regex::Captures
// ---------------------------------------------------------------------------

/// Lightweight wrapper so callers (substitute, capture_or_empty) don't need
/// to know which regex engine produced the match.
pub(crate) enum Captures<'a> {
    Standard(regex::Captures<'a>),
    Fancy(fancy_regex::Captures<'a>),
}

impl<'a> Captures<'a> {
    /// Get the matched text for capture group `i`, or `None` if the group
    /// didn't participate in the match.
    pub fn get_str(&self, i: usize) -> Option<&'a str> {
        match self {
            Captures::Standard(c) => c.get(i).map(|m| m.as_str()),
            Captures::Fancy(c) => c.get(i).map(|m| m.as_str()),
        }
    }
}

/// Result of a successful match.
pub(crate) struct MatchResult<'a, T> {
    pub data: &'a T,
    pub captures: Captures<'a>,
}

// ---------------------------------------------------------------------------
// CompiledParser — ordered, first-match-wins rule list
// ---------------------------------------------------------------------------

/// Core matching engine: regex-filtered prefilter + fancy-regex fallback.
///
/// `T` is the replacement data carried by each rule.
pub(crate) struct CompiledParser<T> {
    /// regex-filtered set built from patterns the `regex` crate can handle.
    filtered: regex_filtered::Regexes,
    /// Maps regex-filtered index → rule index.
    filtered_to_rule: Vec<usize>,
    /// Rules whose patterns need backtracking features, sorted by rule index.
    fancy_rules: Vec<(usize, fancy_regex::Regex)>,
    /// Rule data indexed by rule index.
    data: Vec<T>,
}

impl<T> CompiledParser<T> {
    /// Build a CompiledParser from `(pattern, data)` pairs in priority order.
    pub fn build(items: impl IntoIterator<Item = (String, T)>) -> Result<Self>
    where
        T: Send,
    {
        let (patterns, data): (Vec<String>, Vec<T>) = items.into_iter().unzip();

        let is_standard: Vec<bool> = patterns
            .par_iter()
            .map(|p| regex::Regex::new(p).is_ok())
            .collect();

        let mut builder = regex_filtered::Builder::new();
        let mut filtered_to_rule = Vec::new();
        for (idx, pattern) in patterns.iter().enumerate().filter(|(i, _)| is_standard[*i]) {
            builder = builder
                .push(pattern)
                .map_err(|e| Error::Prefilter(format!("rule {idx} `{pattern}`: {e}")))?;
            filtered_to_rule.push(idx);
        }
        let filtered = builder
            .build()
            .map_err(|e| Error::Prefilter(e.to_string()))?;

        // A pattern neither engine accepts surfaces here as Error::Regex.
        let fancy_rules = (0..patterns.len())
            .filter(|&i| !is_standard[i])
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|idx| -> Result<_> { Ok((idx, fancy_regex::Regex::new(&patterns[idx])?)) })
            .collect::<Result<Vec<_>>>()?;

        log::debug!(
            "compiled {} rules ({} prefiltered, {} backtracking)",
            data.len(),
            filtered_to_rule.len(),
            fancy_rules.len()
        );

        Ok(Self {
            filtered,
            filtered_to_rule,
            fancy_rules,
            data,
        })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Find the first matching rule, preserving ruleset order across both engines.
    pub fn match_first<'a>(&'a self, ua: &'a str) -> Option<MatchResult<'a, T>> {
        // `matching` yields ascending filtered indices and `filtered_to_rule`
        // is monotonic, so the first hit is the lowest standard rule index.
        let best = self
            .filtered
            .matching(ua)
            .next()
            .map(|(i, re)| (self.filtered_to_rule[i], re));
        let cutoff = best.map_or(usize::MAX, |(idx, _)| idx);

        let fancy = self
            .fancy_rules
            .iter()
            .take_while(|(idx, _)| *idx < cutoff)
            .find_map(|(idx, re)| match re.captures(ua) {
                Ok(Some(caps)) => Some((*idx, Captures::Fancy(caps))),
                _ => None,
            });

        fancy
            .or_else(|| {
                let (idx, re) = best?;
                re.captures(ua).map(|caps| (idx, Captures::Standard(caps)))
            })
            .map(|(idx, captures)| MatchResult {
                data: &self.data[idx],
                captures,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(patterns: &[&str]) -> CompiledParser<usize> {
        CompiledParser::build(patterns.iter().enumerate().map(|(i, p)| (p.to_string(), i)))
            .unwrap()
    }

    #[test]
    fn first_rule_wins() {
        let p = build(&[r"(Edg)/(\d+)", r"(Chrome)/(\d+)"]);
        let m = p.match_first("Chrome/120.0 Safari/537.36 Edg/120.0").unwrap();
        assert_eq!(*m.data, 0);
        assert_eq!(m.captures.get_str(1), Some("Edg"));
    }

    #[test]
    fn backtracking_rule_keeps_its_position() {
        // The lookahead forces the fancy-regex engine for rule 0.
        let p = build(&[r"(Tablet)(?! PC)", r"(Tablet)"]);
        assert_eq!(p.fancy_rules.len(), 1);
        assert_eq!(*p.match_first("Android Tablet").unwrap().data, 0);
        assert_eq!(*p.match_first("Tablet PC").unwrap().data, 1);
    }

    #[test]
    fn later_backtracking_rule_is_reached() {
        let p = build(&[r"(Firefox)/(\d+)", r"(Opera)(?=/)"]);
        let m = p.match_first("Opera/9.80").unwrap();
        assert_eq!(*m.data, 1);
    }

    #[test]
    fn no_match() {
        let p = build(&[r"(Firefox)/(\d+)"]);
        assert!(p.match_first("curl/8.0").is_none());
        assert_eq!(p.len(), 1);
    }

    #[test]
    fn invalid_pattern_fails_build() {
        let res = CompiledParser::build([("(unclosed".to_string(), ())]);
        assert!(matches!(res, Err(Error::Regex(_))));
    }
}
