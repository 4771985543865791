//! Attribute and class-list building for markup fragments.
//!
//! Class values follow a fixed composition rule: the builder's semantic
//! base token comes first, caller-supplied tokens follow, joined by
//! single spaces with absent tokens dropped.

/// A single attribute value: a string, or a bare boolean flag.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Str(String),
    Flag,
}

/// An ordered attribute map. Attributes render in insertion order;
/// setting an existing name replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attrs {
    items: Vec<(String, AttrValue)>,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a string-valued attribute, replacing any existing value.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = AttrValue::Str(value.into());
        if let Some(entry) = self.items.iter_mut().find(|(n, _)| n == name) {
            entry.1 = value;
        } else {
            self.items.push((name.to_string(), value));
        }
    }

    /// Set a bare boolean attribute (rendered as the name alone).
    pub fn set_flag(&mut self, name: &str) {
        if !self.items.iter().any(|(n, _)| n == name) {
            self.items.push((name.to_string(), AttrValue::Flag));
        }
    }

    /// Set a string attribute only when a value is present.
    pub fn set_opt(&mut self, name: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.set(name, value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.items
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, AttrValue)> {
        self.items.iter()
    }
}

/// Ordered class-token accumulator.
///
/// Tokens keep insertion order; the base token is pushed first so it
/// always leads the rendered attribute.
#[derive(Debug, Clone, Default)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a list with a builder's semantic base class.
    pub fn with_base(base: &str) -> Self {
        Self {
            tokens: vec![base.to_string()],
        }
    }

    pub fn push(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        if !token.is_empty() {
            self.tokens.push(token);
        }
        self
    }

    pub fn push_opt(self, token: Option<&str>) -> Self {
        match token {
            Some(t) => self.push(t),
            None => self,
        }
    }

    pub fn push_if(self, condition: bool, token: &str) -> Self {
        if condition {
            self.push(token)
        } else {
            self
        }
    }

    /// Space-joined attribute value, or `None` when no tokens were added.
    pub fn into_attr(self) -> Option<String> {
        if self.tokens.is_empty() {
            None
        } else {
            Some(self.tokens.join(" "))
        }
    }
}
