use crate::{Error, Result, Value, render::write_value};
use std::{
    collections::{BTreeMap, btree_map::Entry},
    fmt::{self, Display},
};

/// Parameter bindings of a statement, keyed by parameter name.
///
/// Keys are unique and iterate in lexicographic order, which is the order
/// enumeration and rendering reproduce.
pub type Params = BTreeMap<String, Value>;

/// A query text together with its named parameter bindings.
///
/// `SqlStatement` is a plain value object: it owns no connection, cursor or
/// remote resource, and performs no validation of the SQL text or of the
/// correspondence between placeholders and bound names. That correspondence
/// is the caller's and the executor's responsibility.
///
/// Rebinding a name through [`SqlStatement::bind`] overwrites the previous
/// value. Any other mutation must be serialized by the caller through
/// exclusive access.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct SqlStatement {
    statement: String,
    params: Params,
}

impl SqlStatement {
    /// Build a statement from a query text and its initial bindings.
    pub fn new(statement: impl Into<String>, params: Params) -> Self {
        Self {
            statement: statement.into(),
            params,
        }
    }

    /// The query text.
    pub fn sql(&self) -> &str {
        &self.statement
    }

    /// All bindings, keyed by name.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Every bound parameter name, in lexicographic order.
    pub fn parameter_names(&self) -> Vec<&str> {
        self.params.keys().map(String::as_str).collect()
    }

    /// Look up a single parameter by exact name match.
    ///
    /// Fails when `name` is not bound; the error names the missing
    /// parameter. This is the only failure mode of the statement.
    pub fn parameter(&self, name: &str) -> Result<&Value> {
        self.params
            .get(name)
            .ok_or_else(|| Error::msg(format!("No such parameter: {name}")))
    }

    /// Bind a parameter value, overwriting any previous binding of `name`.
    pub fn bind(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        match self.params.entry(name.into()) {
            Entry::Occupied(mut entry) => {
                log::debug!("Parameter `{}` was already bound, overwriting", entry.key());
                entry.insert(value.into());
            }
            Entry::Vacant(entry) => {
                entry.insert(value.into());
            }
        }
        self
    }

    /// Decompose into the query text and its bindings.
    pub fn into_parts(self) -> (String, Params) {
        (self.statement, self.params)
    }

    /// Write the query text followed by one line per binding into `out`.
    ///
    /// Meant for diagnostics and logs; the format carries no round-trip
    /// guarantee.
    pub fn render(&self, out: &mut String) {
        out.push_str(&self.statement);
        for (name, value) in &self.params {
            out.push_str("\n[");
            out.push_str(name);
            out.push_str("]: ");
            write_value(out, value);
        }
    }
}

impl From<&str> for SqlStatement {
    fn from(value: &str) -> Self {
        Self::new(value, Params::new())
    }
}

impl From<String> for SqlStatement {
    fn from(value: String) -> Self {
        Self::new(value, Params::new())
    }
}

impl Display for SqlStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.render(&mut out);
        f.write_str(&out)
    }
}
