use serde::Deserialize;

/// Raw deserialization target for a uap-core `regexes.yaml` file.
///
/// All three sections default to empty so a ruleset may carry only the
/// categories it cares about; unmatched categories then resolve to `"Other"`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Ruleset {
    #[serde(default)]
    pub user_agent_parsers: Vec<UserAgentEntry>,
    #[serde(default)]
    pub os_parsers: Vec<OsEntry>,
    #[serde(default)]
    pub device_parsers: Vec<DeviceEntry>,
}

// ---------------------------------------------------------------------------
// Browsers  (user_agent_parsers)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct UserAgentEntry {
    pub regex: String,
    #[serde(default)]
    pub family_replacement: Option<String>,
    #[serde(default)]
    pub v1_replacement: Option<String>,
    #[serde(default)]
    pub v2_replacement: Option<String>,
    #[serde(default)]
    pub v3_replacement: Option<String>,
    #[serde(default)]
    pub v4_replacement: Option<String>,
}

// ---------------------------------------------------------------------------
// Operating Systems  (os_parsers)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct OsEntry {
    pub regex: String,
    #[serde(default)]
    pub os_replacement: Option<String>,
    #[serde(default)]
    pub os_v1_replacement: Option<String>,
    #[serde(default)]
    pub os_v2_replacement: Option<String>,
    #[serde(default)]
    pub os_v3_replacement: Option<String>,
    #[serde(default)]
    pub os_v4_replacement: Option<String>,
}

// ---------------------------------------------------------------------------
// Devices  (device_parsers)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct DeviceEntry {
    pub regex: String,
    /// Only `"i"` (case-insensitive) is meaningful.
    #[serde(default)]
    pub regex_flag: Option<String>,
    #[serde(default)]
    pub device_replacement: Option<String>,
    #[serde(default)]
    pub brand_replacement: Option<String>,
    #[serde(default)]
    pub model_replacement: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sections_default_to_empty() {
        let rs: Ruleset = serde_yaml::from_str("os_parsers:\n  - regex: '(Linux)'\n").unwrap();
        assert!(rs.user_agent_parsers.is_empty());
        assert!(rs.device_parsers.is_empty());
        assert_eq!(rs.os_parsers.len(), 1);
        assert!(rs.os_parsers[0].os_replacement.is_none());
    }

    #[test]
    fn device_entry_reads_flag_and_replacements() {
        let yaml = r#"
device_parsers:
  - regex: 'bot|crawler'
    regex_flag: 'i'
    device_replacement: 'Spider'
    brand_replacement: 'Spider'
    model_replacement: 'Desktop'
"#;
        let rs: Ruleset = serde_yaml::from_str(yaml).unwrap();
        let d = &rs.device_parsers[0];
        assert_eq!(d.regex_flag.as_deref(), Some("i"));
        assert_eq!(d.device_replacement.as_deref(), Some("Spider"));
        assert_eq!(d.model_replacement.as_deref(), Some("Desktop"));
    }

    #[test]
    fn malformed_section_is_rejected() {
        let res: std::result::Result<Ruleset, _> =
            serde_yaml::from_str("user_agent_parsers: not-a-list\n");
        assert!(res.is_err());
    }
}
