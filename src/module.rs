use super::catalog::Catalog;
use super::config::Config;
use super::error::{Error, Result};
use super::request::{Request, VariableValue};
use super::types::Variable;
use super::ua_parser::{Parse, UaParser};
use std::sync::Arc;

/// Process-wide state: the shared parser and the registered variable names.
///
/// Built once at startup and shared (cheaply cloned) across request workers.
#[derive(Clone)]
pub struct UaModule {
    parser: Arc<dyn Parse>,
    catalog: Catalog,
}

impl UaModule {
    /// Load the configured ruleset. Any failure here means the host must not
    /// start serving.
    pub fn from_config(config: &Config) -> Result<Self> {
        let parser = UaParser::from_file(&config.regexes)?;
        Ok(Self::with_parser(Arc::new(parser), &config.variable_prefix))
    }

    pub fn with_parser(parser: Arc<dyn Parse>, prefix: &str) -> Self {
        let catalog = Catalog::new(prefix);
        log::debug!("registered {} user-agent variables", catalog.len());
        Self { parser, catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn parser(&self) -> &Arc<dyn Parse> {
        &self.parser
    }

    pub fn evaluate(&self, request: &mut Request, variable: Variable) -> Result<VariableValue> {
        request.resolve(self.parser.as_ref(), variable)
    }

    /// Evaluate a variable by its host-visible name.
    pub fn evaluate_named(&self, request: &mut Request, name: &str) -> Result<VariableValue> {
        let variable = self
            .catalog
            .lookup(name)
            .ok_or_else(|| Error::UnknownVariable(name.to_owned()))?;
        self.evaluate(request, variable)
    }
}

impl std::fmt::Debug for UaModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UaModule")
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}
