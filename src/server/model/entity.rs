use uuid::Uuid;

use crate::model::api::EntityDto;

/// A stored record: an identifier assigned once plus domain properties.
///
/// The identifier cannot be changed after construction. Updates replace the properties
/// through `map_props`, which keeps the identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity<P> {
    id: String,
    props: P,
}

impl<P> Entity<P> {
    /// Creates an entity with a freshly generated UUID v4 identifier.
    pub fn new(props: P) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            props,
        }
    }

    /// Creates an entity with a caller supplied identifier.
    pub fn with_id(id: impl Into<String>, props: P) -> Self {
        Self {
            id: id.into(),
            props,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn props(&self) -> &P {
        &self.props
    }

    pub fn into_props(self) -> P {
        self.props
    }

    pub fn map_props(self, f: impl FnOnce(P) -> P) -> Self {
        Self {
            id: self.id,
            props: f(self.props),
        }
    }

    /// Converts to the `{ "_id", "props" }` wire shape.
    pub fn into_dto_with<D>(self, f: impl FnOnce(P) -> D) -> EntityDto<D> {
        EntityDto {
            id: self.id,
            props: f(self.props),
        }
    }
}
