use crate::schema::SchemaLookup;
use std::marker::PhantomData;

/// Represents a strongly-typed, name-addressed reference to a type
/// (`TResource`) stored within a [`SchemaLookup`] without holding an explicit
/// reference to the schema. De-referencing a [`NamedRef`] is done via
/// [`NamedRef::deref()`] by providing the schema explicitly.
///
/// Storing [`NamedRef`]s instead of direct references is what allows the
/// schema graph to be cyclic (e.g. an input type whose `AND` field refers back
/// to itself) while every type is still owned exactly once by the
/// [`SchemaIndex`](crate::schema::SchemaIndex).
#[derive(Clone, Debug, PartialEq)]
pub struct NamedRef<TResource: DerefByName> {
    name: String,
    namespace: Option<String>,
    phantom: PhantomData<TResource>,
}
impl<TResource: DerefByName> NamedRef<TResource> {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn new(
        name: impl AsRef<str>,
        namespace: Option<&str>,
    ) -> NamedRef<TResource> {
        NamedRef {
            name: name.as_ref().to_string(),
            namespace: namespace.map(|ns| ns.to_string()),
            phantom: PhantomData,
        }
    }

    pub fn deref<'a>(
        &self,
        schema: &'a dyn SchemaLookup,
    ) -> Result<&'a TResource, DerefByNameError> {
        TResource::deref_name(schema, self.name.as_str(), self.namespace())
    }
}

/// Implement this trait for any schema type that can be looked up by name.
/// This enables usage of [`NamedRef<T>`] for that type.
pub trait DerefByName: Clone + core::fmt::Debug {
    fn deref_name<'a>(
        schema: &'a dyn SchemaLookup,
        name: &str,
        namespace: Option<&str>,
    ) -> Result<&'a Self, DerefByNameError> where Self: Sized;

    fn named_ref(name: &str, namespace: Option<&str>) -> NamedRef<Self> {
        NamedRef::<Self>::new(name, namespace)
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DerefByNameError {
    #[error("No type named `{0}` is defined in the schema")]
    DanglingReference(String),
}
