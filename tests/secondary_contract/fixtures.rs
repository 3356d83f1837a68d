//! Gramps-style records used across the suite
//!
//! Field orders follow the storage layout of the corresponding Gramps
//! objects, trimmed to the fields the tests need.

use gramps::{
    Equivalence, Labels, PathNode, Result, SecondaryObject, Translate, Value,
};

/// Read a tuple of nested objects with `T::unserialize`
fn unserialize_list<T: SecondaryObject + Default>(data: &Value) -> Result<Vec<T>> {
    data.expect_seq()?
        .iter()
        .map(|item| -> Result<T> {
            let mut obj = T::default();
            obj.unserialize(item)?;
            Ok(obj)
        })
        .collect()
}

// ============================================================================
// Surname
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Surname {
    pub surname: String,
    pub prefix: String,
    pub primary: bool,
    pub origintype: String,
    pub connector: String,
}

impl Surname {
    pub fn new(surname: &str) -> Self {
        Surname {
            surname: surname.to_string(),
            ..Default::default()
        }
    }
}

impl SecondaryObject for Surname {
    /// (surname, prefix, primary, origintype, connector)
    fn serialize(&self) -> Value {
        Value::tuple(vec![
            self.surname.as_str().into(),
            self.prefix.as_str().into(),
            self.primary.into(),
            self.origintype.as_str().into(),
            self.connector.as_str().into(),
        ])
    }

    fn unserialize(&mut self, data: &Value) -> Result<()> {
        let fields = data.expect_tuple(5)?;
        self.surname = fields[0].expect_str()?.to_string();
        self.prefix = fields[1].expect_str()?.to_string();
        self.primary = fields[2].expect_bool()?;
        self.origintype = fields[3].expect_str()?.to_string();
        self.connector = fields[4].expect_str()?.to_string();
        Ok(())
    }

    fn is_equivalent(&self, other: &dyn SecondaryObject) -> Option<Equivalence> {
        // Identity is the (prefix, surname) pair
        let theirs = other.serialize();
        let theirs = theirs.as_tuple()?;
        let same_identity = theirs.len() == 5
            && theirs[0].as_str() == Some(self.surname.as_str())
            && theirs[1].as_str() == Some(self.prefix.as_str());
        Some(Equivalence::classify(same_identity, self.is_equal(other)))
    }

    fn get_labels(&self, ctx: &dyn Translate) -> Labels {
        Labels::new()
            .with("surname", ctx.translate("Surname"))
            .with("prefix", ctx.translate("Prefix"))
            .with("primary", ctx.translate("Primary"))
            .with("origintype", ctx.translate("Origin type"))
            .with("connector", ctx.translate("Connector"))
    }
}

// ============================================================================
// Name
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Name {
    pub private: bool,
    pub first_name: String,
    pub surname_list: Vec<Surname>,
    pub suffix: String,
    pub title: String,
    pub call: String,
    pub nick: String,
}

impl SecondaryObject for Name {
    /// (private, first_name, (surname, ...), suffix, title, call, nick)
    fn serialize(&self) -> Value {
        Value::tuple(vec![
            self.private.into(),
            self.first_name.as_str().into(),
            Value::tuple(self.surname_list.iter().map(Surname::serialize).collect()),
            self.suffix.as_str().into(),
            self.title.as_str().into(),
            self.call.as_str().into(),
            self.nick.as_str().into(),
        ])
    }

    fn unserialize(&mut self, data: &Value) -> Result<()> {
        let fields = data.expect_tuple(7)?;
        self.private = fields[0].expect_bool()?;
        self.first_name = fields[1].expect_str()?.to_string();
        self.surname_list = unserialize_list(&fields[2])?;
        self.suffix = fields[3].expect_str()?.to_string();
        self.title = fields[4].expect_str()?.to_string();
        self.call = fields[5].expect_str()?.to_string();
        self.nick = fields[6].expect_str()?.to_string();
        Ok(())
    }

    fn get_labels(&self, ctx: &dyn Translate) -> Labels {
        Labels::new()
            .with("private", ctx.translate("Private"))
            .with("first_name", ctx.translate("Given name"))
            .with("surname_list", ctx.translate("Surnames"))
            .with("suffix", ctx.translate("Suffix"))
            .with("title", ctx.translate("Title"))
            .with("call", ctx.translate("Call Name"))
            .with("nick", ctx.translate("Nick Name"))
    }

    fn step(&self, segment: &str) -> Option<PathNode<'_>> {
        match segment {
            "surname_list" => Some(PathNode::sequence(&self.surname_list)),
            _ => None,
        }
    }
}

// ============================================================================
// Attribute
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attribute {
    pub private: bool,
    pub citation_list: Vec<String>,
    pub attr_type: String,
    pub value: String,
}

impl Attribute {
    pub fn new(attr_type: &str, value: &str) -> Self {
        Attribute {
            attr_type: attr_type.to_string(),
            value: value.to_string(),
            ..Default::default()
        }
    }
}

impl SecondaryObject for Attribute {
    /// (private, (citation handle, ...), type, value)
    fn serialize(&self) -> Value {
        Value::tuple(vec![
            self.private.into(),
            self.citation_list.clone().into(),
            self.attr_type.as_str().into(),
            self.value.as_str().into(),
        ])
    }

    fn unserialize(&mut self, data: &Value) -> Result<()> {
        let fields = data.expect_tuple(4)?;
        self.private = fields[0].expect_bool()?;
        self.citation_list = fields[1]
            .expect_seq()?
            .iter()
            .map(|h| h.expect_str().map(str::to_string))
            .collect::<Result<_>>()?;
        self.attr_type = fields[2].expect_str()?.to_string();
        self.value = fields[3].expect_str()?.to_string();
        Ok(())
    }

    fn is_equivalent(&self, other: &dyn SecondaryObject) -> Option<Equivalence> {
        // Identity is (type, value); privacy and citations are secondary data
        let theirs = other.serialize();
        let theirs = theirs.as_tuple()?;
        let same_identity = theirs.len() == 4
            && theirs[2].as_str() == Some(self.attr_type.as_str())
            && theirs[3].as_str() == Some(self.value.as_str());
        Some(Equivalence::classify(same_identity, self.is_equal(other)))
    }

    fn get_labels(&self, ctx: &dyn Translate) -> Labels {
        Labels::new()
            .with("private", ctx.translate("Private"))
            .with("citation_list", ctx.translate("Citations"))
            .with("type", ctx.translate("Type"))
            .with("value", ctx.translate("Value"))
    }
}

// ============================================================================
// Address / Location
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Location {
    pub street: String,
    pub city: String,
    pub postal: String,
    pub country: String,
}

impl SecondaryObject for Location {
    /// (street, city, postal, country)
    fn serialize(&self) -> Value {
        Value::tuple(vec![
            self.street.as_str().into(),
            self.city.as_str().into(),
            self.postal.as_str().into(),
            self.country.as_str().into(),
        ])
    }

    fn unserialize(&mut self, data: &Value) -> Result<()> {
        let fields = data.expect_tuple(4)?;
        self.street = fields[0].expect_str()?.to_string();
        self.city = fields[1].expect_str()?.to_string();
        self.postal = fields[2].expect_str()?.to_string();
        self.country = fields[3].expect_str()?.to_string();
        Ok(())
    }

    fn get_labels(&self, ctx: &dyn Translate) -> Labels {
        Labels::new()
            .with("street", ctx.translate("Street"))
            .with("city", ctx.translate("City"))
            .with("postal", ctx.translate("ZIP/Postal Code"))
            .with("country", ctx.translate("Country"))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Address {
    pub private: bool,
    pub location: Location,
}

impl SecondaryObject for Address {
    /// (private, location)
    fn serialize(&self) -> Value {
        Value::tuple(vec![self.private.into(), self.location.serialize()])
    }

    fn unserialize(&mut self, data: &Value) -> Result<()> {
        let fields = data.expect_tuple(2)?;
        self.private = fields[0].expect_bool()?;
        self.location.unserialize(&fields[1])
    }

    fn get_labels(&self, ctx: &dyn Translate) -> Labels {
        Labels::new()
            .with("private", ctx.translate("Private"))
            .with("location", ctx.translate("Location"))
    }

    fn step(&self, segment: &str) -> Option<PathNode<'_>> {
        match segment {
            "location" => Some(PathNode::object(&self.location)),
            _ => None,
        }
    }
}

// ============================================================================
// Builders
// ============================================================================

pub fn sample_name() -> Name {
    Name {
        private: false,
        first_name: "Garner".to_string(),
        surname_list: vec![
            Surname {
                surname: "von Zieliński".to_string(),
                prefix: "von".to_string(),
                primary: true,
                origintype: "Inherited".to_string(),
                connector: String::new(),
            },
            Surname::new("Smith"),
        ],
        suffix: "Sr.".to_string(),
        title: String::new(),
        call: "Gar".to_string(),
        nick: String::new(),
    }
}

pub fn sample_address() -> Address {
    Address {
        private: true,
        location: Location {
            street: "1 Main St".to_string(),
            city: "Arlington".to_string(),
            postal: "22201".to_string(),
            country: "USA".to_string(),
        },
    }
}
