#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUserAgent {
    pub device: super::Device,
    pub os: super::Agent,
    pub browser: super::Agent,
}
