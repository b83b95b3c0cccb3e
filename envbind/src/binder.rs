//! Mapping of an environment onto a struct

use serde::{Deserialize, Serialize};

use crate::error::BindError;
use crate::resolve::{FieldBinding, ResolveError};
use crate::source::{EnvSource, ProcessEnv};
use crate::tag::{parse_tag, FieldTag};
use crate::value::FieldSlot;

/// A struct whose fields can be populated by a [`Binder`].
///
/// Usually derived with `#[derive(EnvBind)]`. A manual implementation lists
/// the bound fields in declaration order; fields left out are never touched.
///
/// ```rust
/// use envbind::{Bind, FieldSlot};
///
/// struct Config {
///     port: u16,
///     host: String,
/// }
///
/// impl Bind for Config {
///     fn fields(&mut self) -> Vec<FieldSlot<'_>> {
///         vec![
///             FieldSlot::new("port", "PORT;mandatory", &mut self.port),
///             FieldSlot::new("host", "HOST;optional;localhost", &mut self.host),
///         ]
///     }
/// }
/// ```
pub trait Bind {
    /// Bound fields of `self`, in declaration order.
    fn fields(&mut self) -> Vec<FieldSlot<'_>>;
}

/// How lookup keys are built: `application_name + separator + tag name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Leading part of every lookup key, e.g. `demo`.
    pub application_name: String,
    /// Placed between the application name and the tag name, e.g. `_`.
    pub separator: String,
}

impl NamingConfig {
    /// Naming with the given application name and separator.
    pub fn new(application_name: impl Into<String>, separator: impl Into<String>) -> Self {
        Self {
            application_name: application_name.into(),
            separator: separator.into(),
        }
    }

    /// Full environment variable name for a tag name.
    pub fn lookup_key(&self, name: &str) -> String {
        format!("{}{name}", self.prefix())
    }

    fn prefix(&self) -> String {
        format!("{}{}", self.application_name, self.separator)
    }
}

/// Populates [`Bind`] structs from an [`EnvSource`].
///
/// Every call to [`map`](Self::map) captures a fresh snapshot of the source.
/// The binder itself is immutable during a call, so one binder may serve
/// several targets at once.
#[derive(Debug, Clone, Default)]
pub struct Binder<S = ProcessEnv> {
    naming: NamingConfig,
    source: S,
}

impl Binder<ProcessEnv> {
    /// A binder over the process environment with empty naming.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: EnvSource> Binder<S> {
    /// A binder over a custom source, e.g. a `HashMap` in tests.
    pub fn with_source(source: S) -> Self {
        Self {
            naming: NamingConfig::default(),
            source,
        }
    }

    /// Replace the whole naming configuration.
    pub fn with_naming(mut self, naming: NamingConfig) -> Self {
        self.naming = naming;
        self
    }

    /// Set the application name used as key prefix.
    pub fn set_application_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.naming.application_name = name.into();
        self
    }

    /// Set the separator between application name and tag name.
    pub fn set_separator(&mut self, separator: impl Into<String>) -> &mut Self {
        self.naming.separator = separator.into();
        self
    }

    /// Current naming configuration.
    pub fn naming(&self) -> &NamingConfig {
        &self.naming
    }

    /// Source snapshots are captured from.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Populate the annotated fields of `target`.
    ///
    /// Each field gets, in order of preference, its environment value, its
    /// declared default, or nothing if it is optional. Every value is
    /// converted before any field is written: on error `target` is left
    /// exactly as it was.
    ///
    /// # Errors
    ///
    /// - [`BindError::InvalidTag`] if an annotation is malformed
    /// - [`BindError::MandatoryValueMissing`] if a mandatory field has no value
    /// - [`BindError::InvalidValue`] if a value does not convert to the field's type
    pub fn map<T: Bind + ?Sized>(&self, target: &mut T) -> Result<(), BindError> {
        let mut slots = target.fields();

        let tags = slots
            .iter()
            .map(|slot| {
                parse_tag(slot.tag()).map_err(|source| BindError::InvalidTag {
                    field: slot.field().to_string(),
                    tag: slot.tag().to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<FieldTag>, _>>()?;

        let snapshot = self.source.capture();
        tracing::trace!(variables = snapshot.len(), "captured environment snapshot");

        let prefix = self.naming.prefix();
        for (position, (slot, tag)) in slots.iter_mut().zip(tags).enumerate() {
            if tag.is_unbound() {
                tracing::debug!(field = slot.field(), "field has no environment name, skipping");
                continue;
            }

            let binding = FieldBinding::new(position, slot.field(), tag, &prefix, &snapshot);
            let (value, origin) = match binding.resolve() {
                Ok(resolved) => resolved,
                Err(ResolveError::OptionalValueMissing) => {
                    tracing::debug!(
                        field = binding.field,
                        position = binding.position,
                        key = %binding.key,
                        origin = "skipped",
                        "optional field left untouched"
                    );
                    continue;
                }
                Err(ResolveError::MandatoryValueMissing) => {
                    return Err(BindError::MandatoryValueMissing {
                        field: binding.field.to_string(),
                        key: binding.key.clone(),
                    });
                }
            };

            if let Err(message) = slot.stage(value) {
                return Err(BindError::InvalidValue {
                    field: binding.field.to_string(),
                    key: binding.key.clone(),
                    kind: slot.kind(),
                    value: value.to_string(),
                    message,
                });
            }
            tracing::debug!(
                field = binding.field,
                position = binding.position,
                key = %binding.key,
                %origin,
                "resolved field"
            );
        }

        for slot in &mut slots {
            slot.commit();
        }
        Ok(())
    }

    /// Build a `T` from its `Default` and map the environment onto it.
    pub fn load<T: Bind + Default>(&self) -> Result<T, BindError> {
        let mut target = T::default();
        self.map(&mut target)?;
        Ok(target)
    }
}
