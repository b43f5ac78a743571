use super::db;
use super::error::Result;
use super::helpers::replace_or_capture;
use super::parser::{CompiledParser, MatchResult};
use super::parser_data::*;
use super::substitution::substitute;
use super::types::*;
use std::path::Path;

/// Family reported when no rule of a category matches.
pub const UNKNOWN_FAMILY: &str = "Other";

/// The parsing engine as seen by request-scoped code.
///
/// Implementations are built once at startup and shared read-only between
/// requests, hence the `Send + Sync` bound.
pub trait Parse: Send + Sync {
    fn parse_device(&self, ua: &str) -> Device;
    fn parse_os(&self, ua: &str) -> Agent;
    fn parse_browser(&self, ua: &str) -> Agent;
}

/// Parser over a uap-core `regexes.yaml` ruleset.
pub struct UaParser {
    browser_parser: CompiledParser<AgentData>,
    os_parser: CompiledParser<AgentData>,
    device_parser: CompiledParser<DeviceData>,
}

impl UaParser {
    /// Load and compile the ruleset at `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        log::debug!("loading user-agent ruleset from {}", path.display());
        Self::from_yaml(&content)
    }

    /// Compile a ruleset held in memory.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let rules: db::Ruleset = serde_yaml::from_str(yaml)?;

        let db::Ruleset {
            user_agent_parsers,
            os_parsers,
            device_parsers,
        } = rules;
        let (browser_parser, (os_parser, device_parser)) = rayon::join(
            || CompiledParser::<AgentData>::build(user_agent_parsers.into_iter().map(Into::into)),
            || {
                rayon::join(
                    || CompiledParser::<AgentData>::build(os_parsers.into_iter().map(Into::into)),
                    || CompiledParser::<DeviceData>::build(device_parsers.into_iter().map(Into::into)),
                )
            },
        );
        let parser = Self {
            browser_parser: browser_parser?,
            os_parser: os_parser?,
            device_parser: device_parser?,
        };

        log::debug!(
            "user-agent ruleset ready: {} browser, {} os, {} device rules",
            parser.browser_parser.len(),
            parser.os_parser.len(),
            parser.device_parser.len()
        );
        Ok(parser)
    }
}

impl Parse for UaParser {
    fn parse_device(&self, ua: &str) -> Device {
        let Some(MatchResult { data, captures }) = self.device_parser.match_first(ua) else {
            return Device {
                family: UNKNOWN_FAMILY.to_owned(),
                ..Device::default()
            };
        };
        Device {
            family: replace_or_capture(data.family.as_deref(), &captures, 1),
            model: replace_or_capture(data.model.as_deref(), &captures, 1),
            brand: data
                .brand
                .as_deref()
                .map(|t| substitute(t, &captures).into_owned())
                .unwrap_or_default(),
        }
    }

    fn parse_os(&self, ua: &str) -> Agent {
        match_agent(&self.os_parser, ua)
    }

    fn parse_browser(&self, ua: &str) -> Agent {
        match_agent(&self.browser_parser, ua)
    }
}

fn match_agent(parser: &CompiledParser<AgentData>, ua: &str) -> Agent {
    let Some(MatchResult { data, captures }) = parser.match_first(ua) else {
        return Agent {
            family: UNKNOWN_FAMILY.to_owned(),
            ..Agent::default()
        };
    };
    Agent {
        family: replace_or_capture(data.family.as_deref(), &captures, 1),
        major: replace_or_capture(data.major.as_deref(), &captures, 2),
        minor: replace_or_capture(data.minor.as_deref(), &captures, 3),
        patch: replace_or_capture(data.patch.as_deref(), &captures, 4),
        patch_minor: replace_or_capture(data.patch_minor.as_deref(), &captures, 5),
    }
}
