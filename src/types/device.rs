/// Device identity. Empty fields mean "not determined".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Device {
    pub family: String,
    pub model: String,
    pub brand: String,
}
