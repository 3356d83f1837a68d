//! Dotted-path label resolution
//!
//! A path like `"surname_list.0.surname"` is resolved in two phases:
//!
//! 1. Walk every segment but the last. At an object, a segment is a field
//!    name handed to [`SecondaryObject::step`]. At a sequence, it is an
//!    integer index (negative values count from the end).
//! 2. Look the last segment up in the labels of the object reached.

use crate::secondary::SecondaryObject;
use gramps_core::{Error, FieldPath, Result, Translate};

/// A node reached while walking a field path
#[derive(Debug, Clone)]
pub enum PathNode<'a> {
    /// A single nested object
    Object(&'a dyn SecondaryObject),
    /// An ordered list of nested objects, addressed by index
    Sequence(Vec<&'a dyn SecondaryObject>),
}

impl<'a> PathNode<'a> {
    /// Build a sequence node from a slice of objects
    pub fn sequence<T: SecondaryObject>(items: &'a [T]) -> Self {
        PathNode::Sequence(
            items
                .iter()
                .map(|item| item as &'a dyn SecondaryObject)
                .collect(),
        )
    }

    /// Build an object node
    pub fn object<T: SecondaryObject>(item: &'a T) -> Self {
        PathNode::Object(item)
    }

    /// Move one segment down the path
    ///
    /// `field` is the full path being resolved, carried for error messages.
    fn descend(self, segment: &str, field: &str) -> Result<PathNode<'a>> {
        match self {
            PathNode::Object(object) => {
                object.step(segment).ok_or_else(|| Error::NotIndexable {
                    field: field.to_string(),
                    segment: segment.to_string(),
                })
            }
            PathNode::Sequence(items) => {
                let index = resolve_index(segment, items.len(), field)?;
                Ok(PathNode::Object(items[index]))
            }
        }
    }
}

/// Turn an index segment into a position, allowing negative indexes
fn resolve_index(segment: &str, len: usize, field: &str) -> Result<usize> {
    let raw: i64 = segment.parse().map_err(|_| Error::InvalidIndex {
        field: field.to_string(),
        segment: segment.to_string(),
    })?;

    let out_of_range = || Error::IndexOutOfRange {
        field: field.to_string(),
        index: raw.unsigned_abs() as usize,
        len,
    };

    let index = if raw < 0 {
        len.checked_sub(raw.unsigned_abs() as usize)
            .ok_or_else(out_of_range)?
    } else {
        raw as usize
    };

    if index < len {
        Ok(index)
    } else {
        Err(out_of_range())
    }
}

/// Get the label of `field` relative to `object`
///
/// Usable on trait objects; [`SecondaryObject::get_label`] forwards here.
pub fn resolve_label(
    object: &dyn SecondaryObject,
    field: &str,
    ctx: &dyn Translate,
) -> Result<String> {
    let path = FieldPath::parse(field)?;

    let mut node = PathNode::Object(object);
    for segment in path.parent() {
        tracing::trace!(field, segment = %segment, "Stepping into field path");
        node = node.descend(segment, field)?;
    }

    let target = match node {
        PathNode::Object(target) => target,
        PathNode::Sequence(_) => {
            return Err(Error::NotLabeled {
                field: field.to_string(),
                segment: path.parent().last().cloned().unwrap_or_default(),
            });
        }
    };

    let labels = target.get_labels(ctx);
    match labels.get(path.last()) {
        Some(label) => Ok(label.to_string()),
        None => {
            tracing::debug!(
                field,
                label = path.last(),
                available = labels.len(),
                "Label not found"
            );
            Err(Error::LabelNotFound {
                object: format!("{:?}", object),
                field: field.to_string(),
            })
        }
    }
}
