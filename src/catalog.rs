use super::types::Variable;
use indexmap::IndexMap;

/// Host-visible variable names, registered once at startup.
///
/// Names are `prefix + variable name`; iteration follows registration order.
#[derive(Debug, Clone)]
pub struct Catalog {
    by_name: IndexMap<String, Variable>,
}

impl Catalog {
    pub fn new(prefix: &str) -> Self {
        let by_name = Variable::ALL
            .into_iter()
            .map(|v| (format!("{prefix}{}", v.as_str()), v))
            .collect();
        Self { by_name }
    }

    pub fn lookup(&self, name: &str) -> Option<Variable> {
        self.by_name.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Variable)> {
        self.by_name.iter().map(|(name, v)| (name.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_every_variable_once() {
        let c = Catalog::new("uap_");
        assert_eq!(c.len(), Variable::ALL.len());
        let order: Vec<Variable> = c.iter().map(|(_, v)| v).collect();
        assert_eq!(order, Variable::ALL);
    }

    #[test]
    fn lookup_uses_prefixed_names() {
        let c = Catalog::new("uap_");
        assert_eq!(c.lookup("uap_os_version_patch_minor"), Some(Variable::OsVersionPatchMinor));
        assert_eq!(c.lookup("os_version_patch_minor"), None);
        assert_eq!(c.iter().next().map(|(n, _)| n), Some("uap_device_family"));
    }

    #[test]
    fn empty_prefix() {
        let c = Catalog::new("");
        assert_eq!(c.lookup("browser_family"), Some(Variable::BrowserFamily));
        assert!(!c.is_empty());
    }
}
