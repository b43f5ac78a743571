/// Operating system or browser identity.
///
/// Version components stay strings: rules may yield tokens such as `"0b3"`
/// or a bare major with no minor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Agent {
    pub family: String,
    pub major: String,
    pub minor: String,
    pub patch: String,
    pub patch_minor: String,
}
