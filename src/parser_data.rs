use super::db;

// ---------------------------------------------------------------------------
// Internal data structs carried inside CompiledParser<T>
// ---------------------------------------------------------------------------

/// Replacement templates for an agent rule (browser or OS).
///
/// Slot `n` falls back to capture group `n + 1` when its template is absent.
pub(crate) struct AgentData {
    pub family: Option<String>,
    pub major: Option<String>,
    pub minor: Option<String>,
    pub patch: Option<String>,
    pub patch_minor: Option<String>,
}

pub(crate) struct DeviceData {
    pub family: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
}

impl From<db::UserAgentEntry> for (String, AgentData) {
    fn from(e: db::UserAgentEntry) -> Self {
        (
            e.regex,
            AgentData {
                family: e.family_replacement,
                major: e.v1_replacement,
                minor: e.v2_replacement,
                patch: e.v3_replacement,
                patch_minor: e.v4_replacement,
            },
        )
    }
}

impl From<db::OsEntry> for (String, AgentData) {
    fn from(e: db::OsEntry) -> Self {
        (
            e.regex,
            AgentData {
                family: e.os_replacement,
                major: e.os_v1_replacement,
                minor: e.os_v2_replacement,
                patch: e.os_v3_replacement,
                patch_minor: e.os_v4_replacement,
            },
        )
    }
}

impl From<db::DeviceEntry> for (String, DeviceData) {
    fn from(e: db::DeviceEntry) -> Self {
        let regex = match e.regex_flag.as_deref() {
            Some("i") => format!("(?i){}", e.regex),
            _ => e.regex,
        };
        (
            regex,
            DeviceData {
                family: e.device_replacement,
                brand: e.brand_replacement,
                model: e.model_replacement,
            },
        )
    }
}
