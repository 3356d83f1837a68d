//! Secondary object contract
//!
//! Secondary objects are records embedded in a primary object (names,
//! addresses, attributes). They are stored only as part of their owner and
//! have no identity beyond their serialized form.
//!
//! # Design
//!
//! `serialize` and `unserialize` have no default body, so every implementor
//! must provide them. Equality, equivalence and labels have defaults that
//! implementors override as needed.
//!
//! Dotted label paths are walked with [`SecondaryObject::step`]: each
//! implementor exposes its nested objects and sequences by name, and the
//! resolver in [`crate::resolve`] does the rest.

use crate::equivalence::Equivalence;
use crate::resolve::{resolve_label, PathNode};
use gramps_core::{Labels, Result, Translate, Value};
use std::fmt;

/// Base contract for all secondary objects
///
/// # Example
///
/// ```
/// use gramps_core::{Identity, Labels, Result, Translate, Value};
/// use gramps_lib::SecondaryObject;
///
/// #[derive(Debug, Default)]
/// struct Url {
///     path: String,
///     desc: String,
/// }
///
/// impl SecondaryObject for Url {
///     fn serialize(&self) -> Value {
///         Value::tuple(vec![self.path.as_str().into(), self.desc.as_str().into()])
///     }
///
///     fn unserialize(&mut self, data: &Value) -> Result<()> {
///         let fields = data.expect_tuple(2)?;
///         self.path = fields[0].expect_str()?.to_string();
///         self.desc = fields[1].expect_str()?.to_string();
///         Ok(())
///     }
///
///     fn get_labels(&self, ctx: &dyn Translate) -> Labels {
///         Labels::new()
///             .with("path", ctx.translate("Path"))
///             .with("desc", ctx.translate("Description"))
///     }
/// }
///
/// let url = Url { path: "https://gramps-project.org".into(), desc: "Home".into() };
/// assert_eq!(url.get_label("desc", &Identity).unwrap(), "Description");
/// ```
pub trait SecondaryObject: fmt::Debug {
    /// Convert the object to its serialized tuple
    ///
    /// Fields appear in a fixed order; equal field values must produce
    /// equal output.
    fn serialize(&self) -> Value;

    /// Populate the object from a tuple produced by [`serialize`](Self::serialize)
    fn unserialize(&mut self, data: &Value) -> Result<()>;

    /// Structural equality: both objects serialize to the same value
    fn is_equal(&self, other: &dyn SecondaryObject) -> bool {
        self.serialize() == other.serialize()
    }

    /// Whether this object is equivalent to `other`
    ///
    /// `None` means the object does not define equivalence. Callers must not
    /// read it as `Different`.
    fn is_equivalent(&self, _other: &dyn SecondaryObject) -> Option<Equivalence> {
        None
    }

    /// Field name → translated display label
    fn get_labels(&self, _ctx: &dyn Translate) -> Labels {
        Labels::new()
    }

    /// Step into a named field for label path resolution
    ///
    /// Return `None` for names that are not nested objects or sequences.
    /// Scalar fields are only reachable as the last segment of a path.
    fn step(&self, _segment: &str) -> Option<PathNode<'_>> {
        None
    }

    /// Get the label of a field, given as a dotted path (`"surname_list.0.surname"`)
    fn get_label(&self, field: &str, ctx: &dyn Translate) -> Result<String>
    where
        Self: Sized,
    {
        resolve_label(self, field, ctx)
    }
}
