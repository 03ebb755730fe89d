//! Nested variable documents.
//!
//! Several Craton resources carry a `variables` sub-resource: a key/value
//! document where values may recursively be nested documents. This module
//! models that document with [`Variables`], [`Variable`] and
//! [`VariableValue`].
//!
//! Construction from the wire shape and [`Variables::to_value`] are exact
//! structural inverses: `Variables::from_value(&x).to_value() == x` for any
//! JSON object whose values are scalars or nested objects.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::clients::HttpError;

/// One named variable.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    /// The variable name.
    pub name: String,
    /// The variable value, possibly a nested document.
    pub value: VariableValue,
}

/// The value side of a variable.
///
/// JSON objects become nested documents; everything else (strings, numbers,
/// booleans, nulls, arrays) is kept verbatim as a scalar leaf.
#[derive(Clone, Debug, PartialEq)]
pub enum VariableValue {
    /// A leaf value, stored exactly as received.
    Scalar(Value),
    /// A nested document of variables.
    Nested(BTreeMap<String, Variable>),
}

impl VariableValue {
    /// Returns the leaf value, or `None` for nested documents.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<&Value> {
        match self {
            Self::Scalar(value) => Some(value),
            Self::Nested(_) => None,
        }
    }

    /// Returns the nested document, or `None` for leaves.
    #[must_use]
    pub const fn as_nested(&self) -> Option<&BTreeMap<String, Variable>> {
        match self {
            Self::Nested(vars) => Some(vars),
            Self::Scalar(_) => None,
        }
    }
}

/// A variable document attached to a resource.
///
/// # Example
///
/// ```rust
/// use craton_api::v1::Variables;
/// use serde_json::json;
///
/// let doc = json!({"scheduler": {"weight": 10}, "rack": "c-12"});
/// let variables = Variables::from_value(&doc);
///
/// assert_eq!(variables.len(), 2);
/// assert_eq!(variables.to_value(), doc);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Variables {
    vars: BTreeMap<String, Variable>,
}

impl Variables {
    /// Builds a document from the raw JSON mapping of a `variables` object.
    ///
    /// Non-object input produces an empty document; object values recurse
    /// into nested documents, all other values become scalar leaves.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let vars = value.as_object().map_or_else(BTreeMap::new, |map| {
            map.iter()
                .map(|(name, raw)| (name.clone(), Self::variable_from(name, raw)))
                .collect()
        });
        Self { vars }
    }

    /// Builds a document from a full wire response (`{"variables": {...}}`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Decode`] if the body lacks a `variables` object.
    pub fn from_response(body: &Value) -> Result<Self, HttpError> {
        let inner = body
            .get("variables")
            .filter(|v| v.is_object())
            .ok_or_else(|| HttpError::Decode {
                reason: "missing 'variables' object in response body".to_string(),
            })?;
        Ok(Self::from_value(inner))
    }

    fn variable_from(name: &str, raw: &Value) -> Variable {
        let value = if raw.is_object() {
            VariableValue::Nested(Self::from_value(raw).vars)
        } else {
            VariableValue::Scalar(raw.clone())
        };
        Variable {
            name: name.to_string(),
            value,
        }
    }

    /// Converts the document back to its raw JSON mapping.
    ///
    /// This is the exact structural inverse of [`Variables::from_value`].
    #[must_use]
    pub fn to_value(&self) -> Value {
        let map: serde_json::Map<String, Value> = self
            .vars
            .values()
            .map(|var| {
                let value = match &var.value {
                    VariableValue::Scalar(v) => v.clone(),
                    VariableValue::Nested(vars) => Self {
                        vars: vars.clone(),
                    }
                    .to_value(),
                };
                (var.name.clone(), value)
            })
            .collect();
        Value::Object(map)
    }

    /// Looks up a variable by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.vars.get(name)
    }

    /// Returns the number of top-level variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns `true` if the document has no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterates over the top-level variables in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.vars.values()
    }
}
