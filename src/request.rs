use super::cache::RequestAttributeCache;
use super::error::Result;
use super::types::Variable;
use super::ua_parser::Parse;

/// What the host renders for a variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariableValue {
    Found(String),
    /// Absent header or undetermined field. Cacheable by the host.
    NotFound,
}

impl VariableValue {
    pub fn as_deref(&self) -> Option<&str> {
        match self {
            Self::Found(s) => Some(s),
            Self::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Per-request scope: the raw `User-Agent` header and the attribute cache
/// created on first use. Dropping the request drops the cache.
#[derive(Debug, Default)]
pub struct Request {
    user_agent: String,
    attributes: Option<RequestAttributeCache>,
}

impl Request {
    /// `None` means the request carried no `User-Agent` header.
    pub fn new(user_agent: Option<impl Into<String>>) -> Self {
        Self {
            user_agent: user_agent.map(Into::into).unwrap_or_default(),
            attributes: None,
        }
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// The cache, if any variable has been resolved for a non-empty header.
    pub fn attributes(&self) -> Option<&RequestAttributeCache> {
        self.attributes.as_ref()
    }

    /// Resolve `variable` and copy the value out for the host.
    ///
    /// The output buffer is reserved fallibly; on `Error::Alloc` the cache
    /// keeps whatever it already parsed and the call can simply be retried.
    pub fn resolve<P>(&mut self, parser: &P, variable: Variable) -> Result<VariableValue>
    where
        P: Parse + ?Sized,
    {
        if self.user_agent.is_empty() {
            return Ok(VariableValue::NotFound);
        }

        let attributes = self
            .attributes
            .get_or_insert_with(RequestAttributeCache::new);
        match attributes.resolve(parser, &self.user_agent, variable) {
            Some(value) => Ok(VariableValue::Found(materialize(value)?)),
            None => Ok(VariableValue::NotFound),
        }
    }
}

fn materialize(value: &str) -> Result<String> {
    let mut out = String::new();
    out.try_reserve_exact(value.len())?;
    out.push_str(value);
    Ok(out)
}
