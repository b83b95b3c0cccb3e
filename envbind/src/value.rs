//! Typed conversion of resolved values into struct fields
//!
//! Conversion is split in two steps so that a binder can convert every field
//! before writing any of them: [`FieldSlot::stage`] parses a value into a
//! pending slot, [`FieldSlot::commit`] moves it into the struct.

use std::fmt;

/// Kinds of fields a value can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Any primitive integer, parsed in base 10.
    Integer,
    /// `String`, assigned verbatim.
    Text,
    /// `bool`, parsed from `true` or `false`.
    Boolean,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Integer => "integer",
            Self::Text => "text",
            Self::Boolean => "boolean",
        })
    }
}

/// A type a struct field may have to be bound from the environment.
///
/// `#[derive(EnvBind)]` requires every annotated field to implement this, so
/// an unsupported field type is a compile error rather than a silent skip.
pub trait EnvValue: Sized {
    /// Kind reported in conversion errors.
    const KIND: FieldKind;

    /// Convert a resolved value, returning a human readable reason on failure.
    fn parse_env(raw: &str) -> Result<Self, String>;
}

macro_rules! impl_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl EnvValue for $ty {
                const KIND: FieldKind = FieldKind::Integer;

                fn parse_env(raw: &str) -> Result<Self, String> {
                    raw.parse::<$ty>().map_err(|e| e.to_string())
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl EnvValue for String {
    const KIND: FieldKind = FieldKind::Text;

    fn parse_env(raw: &str) -> Result<Self, String> {
        Ok(raw.to_string())
    }
}

impl EnvValue for bool {
    const KIND: FieldKind = FieldKind::Boolean;

    fn parse_env(raw: &str) -> Result<Self, String> {
        raw.parse::<bool>().map_err(|e| e.to_string())
    }
}

/// Optional fields receive `Some(value)`; an absent optional value leaves
/// them as they were.
impl<T: EnvValue> EnvValue for Option<T> {
    const KIND: FieldKind = T::KIND;

    fn parse_env(raw: &str) -> Result<Self, String> {
        T::parse_env(raw).map(Some)
    }
}

trait Stage {
    fn stage(&mut self, raw: &str) -> Result<(), String>;
    fn commit(&mut self);
}

struct Staged<'a, T> {
    target: &'a mut T,
    pending: Option<T>,
}

impl<T: EnvValue> Stage for Staged<'_, T> {
    fn stage(&mut self, raw: &str) -> Result<(), String> {
        self.pending = Some(T::parse_env(raw)?);
        Ok(())
    }

    fn commit(&mut self) {
        if let Some(value) = self.pending.take() {
            *self.target = value;
        }
    }
}

/// One bindable field of a struct: its name, its raw annotation and a
/// mutable borrow of its storage.
///
/// Produced by [`Bind::fields`](crate::Bind::fields).
pub struct FieldSlot<'a> {
    field: &'static str,
    tag: &'static str,
    kind: FieldKind,
    target: Box<dyn Stage + 'a>,
}

impl<'a> FieldSlot<'a> {
    /// Slot for `target`, bound through the annotation `tag`.
    pub fn new<T: EnvValue + 'a>(field: &'static str, tag: &'static str, target: &'a mut T) -> Self {
        Self {
            field,
            tag,
            kind: T::KIND,
            target: Box::new(Staged {
                target,
                pending: None,
            }),
        }
    }

    /// Name of the struct field.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Raw annotation, as written on the field.
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Kind of the field's type.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Convert `raw` and keep it pending. The field itself is not written.
    pub fn stage(&mut self, raw: &str) -> Result<(), String> {
        self.target.stage(raw)
    }

    /// Write the pending value, if any, into the field.
    pub fn commit(&mut self) {
        self.target.commit();
    }
}

impl fmt::Debug for FieldSlot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSlot")
            .field("field", &self.field)
            .field("tag", &self.tag)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
