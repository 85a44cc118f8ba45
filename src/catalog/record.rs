//! Component description records.
//!
//! Field names serialise in camelCase so the JSON shape matches what the
//! documentation front end expects (`importStatement`, `subComponents`).

use serde::{Deserialize, Serialize};

use crate::catalog::Category;

/// Metadata for one documented UI component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRecord {
    /// Unique, case-sensitive key.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Free-text summary.
    pub description: String,

    /// UI role of the component.
    pub category: Category,

    /// Illustrative import line. Not executed.
    pub import_statement: String,

    /// Props accepted by the component, in documentation order.
    #[serde(default)]
    pub props: Vec<PropDescriptor>,

    /// Ids of related components. Not enforced as references.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_components: Option<Vec<String>>,

    /// Usage examples, in documentation order.
    #[serde(default)]
    pub examples: Vec<ExampleDescriptor>,

    /// Free-text caveats.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
}

impl ComponentRecord {
    /// Creates a record with no props, examples, sub-components or notes.
    ///
    /// The import statement defaults to a named import from the library root.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            import_statement: format!("import {{ {name} }} from '@rn-ui/core';"),
            name,
            description: description.into(),
            category,
            props: Vec::new(),
            sub_components: None,
            examples: Vec::new(),
            notes: None,
        }
    }

    /// Replaces the import statement.
    #[must_use]
    pub fn import(mut self, statement: impl Into<String>) -> Self {
        self.import_statement = statement.into();
        self
    }

    /// Appends a prop.
    #[must_use]
    pub fn prop(mut self, prop: PropDescriptor) -> Self {
        self.props.push(prop);
        self
    }

    /// Appends a related component id.
    #[must_use]
    pub fn sub_component(mut self, id: impl Into<String>) -> Self {
        self.sub_components.get_or_insert_with(Vec::new).push(id.into());
        self
    }

    /// Appends a usage example.
    #[must_use]
    pub fn example(mut self, example: ExampleDescriptor) -> Self {
        self.examples.push(example);
        self
    }

    /// Appends a caveat.
    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.get_or_insert_with(Vec::new).push(note.into());
        self
    }

    /// Returns the compact listing form used by search and list results.
    #[must_use]
    pub fn summary(&self) -> ComponentSummary<'_> {
        ComponentSummary {
            id: &self.id,
            name: &self.name,
            category: self.category,
            description: &self.description,
        }
    }
}

/// Borrowed view of the identifying fields of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentSummary<'a> {
    /// Record id.
    pub id: &'a str,
    /// Display name.
    pub name: &'a str,
    /// Category tag.
    pub category: Category,
    /// Summary text.
    pub description: &'a str,
}

/// One prop accepted by a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropDescriptor {
    /// Prop name.
    pub name: String,

    /// Free-text type signature, e.g. `'primary' | 'secondary'`.
    #[serde(rename = "type")]
    pub type_signature: String,

    /// Whether the prop must be supplied.
    pub required: bool,

    /// Default value, as source text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    /// What the prop does.
    pub description: String,
}

impl PropDescriptor {
    /// Creates a required prop.
    #[must_use]
    pub fn required(
        name: impl Into<String>,
        type_signature: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_signature: type_signature.into(),
            required: true,
            default: None,
            description: description.into(),
        }
    }

    /// Creates an optional prop without a default.
    #[must_use]
    pub fn optional(
        name: impl Into<String>,
        type_signature: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            required: false,
            ..Self::required(name, type_signature, description)
        }
    }

    /// Sets the default value.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }
}

/// A titled usage example.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleDescriptor {
    /// Short title.
    pub title: String,

    /// Optional explanation shown above the code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Code sample text.
    pub code: String,
}

impl ExampleDescriptor {
    /// Creates an example without a description.
    #[must_use]
    pub fn new(title: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            code: code.into(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
