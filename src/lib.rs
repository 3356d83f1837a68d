//! Gramps object model
//!
//! Contracts and support types for the records of a genealogy database.
//! Secondary objects (names, addresses, attributes) implement
//! [`SecondaryObject`] and are stored as part of the primary object that
//! owns them.
//!
//! ```
//! use gramps::{Identity, Labels, Result, SecondaryObject, Translate, Value};
//!
//! #[derive(Debug, Default)]
//! struct Note {
//!     text: String,
//! }
//!
//! impl SecondaryObject for Note {
//!     fn serialize(&self) -> Value {
//!         Value::tuple(vec![self.text.as_str().into()])
//!     }
//!
//!     fn unserialize(&mut self, data: &Value) -> Result<()> {
//!         self.text = data.expect_tuple(1)?[0].expect_str()?.to_string();
//!         Ok(())
//!     }
//!
//!     fn get_labels(&self, ctx: &dyn Translate) -> Labels {
//!         Labels::new().with("text", ctx.translate("Text"))
//!     }
//! }
//!
//! let note = Note { text: "born at sea".into() };
//! let mut copy = Note::default();
//! copy.unserialize(&note.serialize()).unwrap();
//! assert!(copy.is_equal(&note));
//! assert_eq!(note.get_label("text", &Identity).unwrap(), "Text");
//! ```

#![warn(missing_docs)]

mod types;

pub use types::*;
