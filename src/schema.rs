use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::HashSet;

/// The type of an entity property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
}

/// The format of a property's value, refining its type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyFormat {
    DateTime,
    Date,
    Time,
    Uri,
    Uuid,
}

/// The direction a property is sorted by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,

    #[serde(rename = "desc")]
    Descending,
}

/// A property in an entity schema.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySchemaProperty {
    /// The property name, as it appears in the serialized entity.
    pub property: String,

    /// The property type.
    #[serde(rename = "type")]
    pub kind: PropertyType,

    /// The property format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<PropertyFormat>,

    /// Whether this is the primary key.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_primary: bool,

    /// Whether this is a secondary index.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_secondary: bool,

    /// The default sort direction for this property.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<SortDirection>,

    /// Whether the property may be absent.
    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,
}

impl EntitySchemaProperty {
    /// Construct a required, non indexed property.
    pub fn new<S: Into<String>>(property: S, kind: PropertyType) -> Self {
        Self {
            property: property.into(),
            kind,
            format: None,
            is_primary: false,
            is_secondary: false,
            sort_direction: None,
            optional: false,
        }
    }

    /// Make this the primary key.
    pub fn primary(mut self) -> Self {
        self.is_primary = true;
        self
    }

    /// Make this a secondary index.
    pub fn secondary(mut self) -> Self {
        self.is_secondary = true;
        self
    }

    /// Mark this property as optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Set the format of this property.
    pub fn format(mut self, format: PropertyFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Set the default sort direction of this property.
    pub fn sort(mut self, direction: SortDirection) -> Self {
        self.sort_direction = Some(direction);
        self
    }
}

/// The schema of an entity stored by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySchema {
    /// The name of the entity type.
    #[serde(rename = "type")]
    pub type_name: String,

    /// The properties of the entity.
    pub properties: Vec<EntitySchemaProperty>,
}

impl EntitySchema {
    /// Construct a schema with no properties.
    pub fn new<S: Into<String>>(type_name: S) -> Self {
        Self { type_name: type_name.into(), properties: Vec::new() }
    }

    /// Add a property to this schema.
    pub fn property(mut self, property: EntitySchemaProperty) -> Self {
        self.properties.push(property);
        self
    }

    /// The primary key, if there is exactly one.
    pub fn primary_key(&self) -> Option<&EntitySchemaProperty> {
        let mut primaries = self.properties.iter().filter(|p| p.is_primary);
        match (primaries.next(), primaries.next()) {
            (Some(primary), None) => Some(primary),
            _ => None,
        }
    }

    /// The secondary indexes.
    pub fn secondary_keys(&self) -> impl Iterator<Item = &EntitySchemaProperty> {
        self.properties.iter().filter(|p| p.is_secondary)
    }

    /// The properties that have a default sort direction.
    pub fn sort_keys(&self) -> impl Iterator<Item = (&EntitySchemaProperty, SortDirection)> {
        self.properties.iter().filter_map(|p| p.sort_direction.map(|d| (p, d)))
    }

    /// Validate this schema is well formed.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        for property in &self.properties {
            if !seen.insert(property.property.as_str()) {
                return Err(SchemaError::DuplicateProperty(property.property.clone()));
            }
        }
        match self.properties.iter().filter(|p| p.is_primary).count() {
            0 => return Err(SchemaError::NoPrimaryKey),
            1 => (),
            _ => return Err(SchemaError::MultiplePrimaryKeys),
        };
        if let Some(primary) = self.primary_key() {
            if primary.optional {
                return Err(SchemaError::OptionalPrimaryKey(primary.property.clone()));
            }
        }
        Ok(())
    }
}

/// An error in an entity schema.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SchemaError {
    #[error("schema has no primary key")]
    NoPrimaryKey,

    #[error("schema has more than one primary key")]
    MultiplePrimaryKeys,

    #[error("primary key '{0}' can't be optional")]
    OptionalPrimaryKey(String),

    #[error("property '{0}' is declared more than once")]
    DuplicateProperty(String),
}

/// An entity that can be stored in an entity storage.
pub trait Entity: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The name of the entity type.
    const TYPE_NAME: &'static str;

    /// The path prefix the entity's storage is served under.
    const PATH_PREFIX: &'static str;

    /// The schema for this entity.
    fn schema() -> EntitySchema;

    /// The primary key of this entity.
    fn id(&self) -> &str;
}

fn is_false(value: &bool) -> bool {
    !value
}
