use super::{Agent, Device, ParsedUserAgent};

/// One of the three independent parse targets derived from a user-agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Device,
    Os,
    Browser,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Device => "device",
            Self::Os => "os",
            Self::Browser => "browser",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceField {
    Family,
    Model,
    Brand,
}

impl DeviceField {
    pub fn get<'a>(&self, device: &'a Device) -> &'a str {
        match self {
            Self::Family => &device.family,
            Self::Model => &device.model,
            Self::Brand => &device.brand,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentField {
    Family,
    Major,
    Minor,
    Patch,
    PatchMinor,
}

impl AgentField {
    pub fn get<'a>(&self, agent: &'a Agent) -> &'a str {
        match self {
            Self::Family => &agent.family,
            Self::Major => &agent.major,
            Self::Minor => &agent.minor,
            Self::Patch => &agent.patch,
            Self::PatchMinor => &agent.patch_minor,
        }
    }
}

/// A struct member of one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Device(DeviceField),
    Os(AgentField),
    Browser(AgentField),
}

impl Field {
    pub fn category(&self) -> Category {
        match self {
            Self::Device(_) => Category::Device,
            Self::Os(_) => Category::Os,
            Self::Browser(_) => Category::Browser,
        }
    }

    /// Project this field out of a parsed user-agent.
    pub fn get<'a>(&self, parsed: &'a ParsedUserAgent) -> &'a str {
        match self {
            Self::Device(f) => f.get(&parsed.device),
            Self::Os(f) => f.get(&parsed.os),
            Self::Browser(f) => f.get(&parsed.browser),
        }
    }
}

/// The externally visible user-agent variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variable {
    DeviceFamily,
    DeviceModel,
    DeviceBrand,
    OsFamily,
    OsVersionMajor,
    OsVersionMinor,
    OsVersionPatch,
    OsVersionPatchMinor,
    BrowserFamily,
    BrowserVersionMajor,
    BrowserVersionMinor,
    BrowserVersionPatch,
    BrowserVersionPatchMinor,
}

impl Variable {
    /// Every variable, in catalog order.
    pub const ALL: [Variable; 13] = [
        Self::DeviceFamily,
        Self::DeviceModel,
        Self::DeviceBrand,
        Self::OsFamily,
        Self::OsVersionMajor,
        Self::OsVersionMinor,
        Self::OsVersionPatch,
        Self::OsVersionPatchMinor,
        Self::BrowserFamily,
        Self::BrowserVersionMajor,
        Self::BrowserVersionMinor,
        Self::BrowserVersionPatch,
        Self::BrowserVersionPatchMinor,
    ];

    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DeviceFamily => "device_family",
            Self::DeviceModel => "device_model",
            Self::DeviceBrand => "device_brand",
            Self::OsFamily => "os_family",
            Self::OsVersionMajor => "os_version_major",
            Self::OsVersionMinor => "os_version_minor",
            Self::OsVersionPatch => "os_version_patch",
            Self::OsVersionPatchMinor => "os_version_patch_minor",
            Self::BrowserFamily => "browser_family",
            Self::BrowserVersionMajor => "browser_version_major",
            Self::BrowserVersionMinor => "browser_version_minor",
            Self::BrowserVersionPatch => "browser_version_patch",
            Self::BrowserVersionPatchMinor => "browser_version_patch_minor",
        }
    }

    pub fn field(&self) -> Field {
        use AgentField as A;
        use DeviceField as D;
        match self {
            Self::DeviceFamily => Field::Device(D::Family),
            Self::DeviceModel => Field::Device(D::Model),
            Self::DeviceBrand => Field::Device(D::Brand),
            Self::OsFamily => Field::Os(A::Family),
            Self::OsVersionMajor => Field::Os(A::Major),
            Self::OsVersionMinor => Field::Os(A::Minor),
            Self::OsVersionPatch => Field::Os(A::Patch),
            Self::OsVersionPatchMinor => Field::Os(A::PatchMinor),
            Self::BrowserFamily => Field::Browser(A::Family),
            Self::BrowserVersionMajor => Field::Browser(A::Major),
            Self::BrowserVersionMinor => Field::Browser(A::Minor),
            Self::BrowserVersionPatch => Field::Browser(A::Patch),
            Self::BrowserVersionPatchMinor => Field::Browser(A::PatchMinor),
        }
    }

    pub fn category(&self) -> Category {
        self.field().category()
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn mapping_is_total_and_injective() {
        let fields: HashSet<Field> = Variable::ALL.iter().map(Variable::field).collect();
        let names: HashSet<&str> = Variable::ALL.iter().map(Variable::as_str).collect();
        assert_eq!(fields.len(), Variable::ALL.len());
        assert_eq!(names.len(), Variable::ALL.len());
        // 3 device fields + 5 OS fields + 5 browser fields.
        assert_eq!(fields.len(), 13);
    }

    #[test]
    fn name_prefix_matches_category() {
        for v in Variable::ALL {
            assert!(
                v.as_str().starts_with(v.category().as_str()),
                "{v} is filed under {:?}",
                v.category()
            );
            assert_eq!(Variable::from_name(v.as_str()), Some(v));
        }
        assert_eq!(Variable::from_name("device_type"), None);
    }

    #[test]
    fn field_projects_the_right_member() {
        let mut parsed = ParsedUserAgent::default();
        parsed.device.brand = "Apple".into();
        parsed.os.patch_minor = "4".into();
        parsed.browser.major = "121".into();
        assert_eq!(Variable::DeviceBrand.field().get(&parsed), "Apple");
        assert_eq!(Variable::OsVersionPatchMinor.field().get(&parsed), "4");
        assert_eq!(Variable::BrowserVersionMajor.field().get(&parsed), "121");
        assert_eq!(Variable::DeviceModel.field().get(&parsed), "");
    }
}
