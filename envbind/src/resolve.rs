//! Per-field value resolution

use std::fmt;

use crate::source::EnvSnapshot;
use crate::tag::FieldTag;

/// Why a field could not be given a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub(crate) enum ResolveError {
    #[error("mandatory value missing in environment")]
    MandatoryValueMissing,
    /// The field is optional and nothing provides a value; the binder skips it.
    #[error("optional value missing in environment")]
    OptionalValueMissing,
}

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Origin {
    Environment,
    Default,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Environment => "environment",
            Self::Default => "default",
        })
    }
}

/// Working state of one field during a single mapping call.
#[derive(Debug)]
pub(crate) struct FieldBinding<'s> {
    pub position: usize,
    pub field: &'static str,
    pub tag: FieldTag,
    pub key: String,
    env_value: Option<&'s str>,
}

impl<'s> FieldBinding<'s> {
    /// Look the field up in `snapshot` under `prefix` followed by the tag name.
    /// A variable that is set but empty counts as absent.
    pub fn new(
        position: usize,
        field: &'static str,
        tag: FieldTag,
        prefix: &str,
        snapshot: &'s EnvSnapshot,
    ) -> Self {
        let key = format!("{prefix}{}", tag.name);
        let env_value = snapshot.get(&key).filter(|value| !value.is_empty());
        Self {
            position,
            field,
            tag,
            key,
            env_value,
        }
    }

    /// Pick the value for this field: environment, then default, then fail
    /// for mandatory fields or signal a skip for optional ones.
    pub fn resolve(&self) -> Result<(&str, Origin), ResolveError> {
        if let Some(value) = self.env_value {
            return Ok((value, Origin::Environment));
        }
        if let Some(default) = self.tag.default.as_deref() {
            return Ok((default, Origin::Default));
        }
        if self.tag.required {
            Err(ResolveError::MandatoryValueMissing)
        } else {
            Err(ResolveError::OptionalValueMissing)
        }
    }
}
