//! Hand-written record decoders.
//!
//! Records are decoded positionally: each field, in declaration order, takes
//! its tokens from the shared cursor. There are no optional, skipped or named
//! fields. The first field to fail aborts the record and no partial value is
//! returned.
//!
//! ```
//! let group = decode_str("CatWorld/3/tama/5/mike/6/kuro/7", GroupDecoder)?;
//! assert_eq!(group.to_string(), "(name=CatWorld, members=[(name=tama, age=5), (name=mike, age=6), (name=kuro, age=7)])");
//! ```

use alloc::{string::String, vec::Vec};
use core::fmt;

use crate::{
    avec::FromTokens,
    sans::{Cursor, DecodeError, Decoder, Int, Seq, Str},
};

/// A named person with an age.
///
/// Encoded as `<name>/<age>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: i32,
}

/// Decoder for a [`Person`].
#[derive(Debug, Default, Clone, Copy)]
pub struct PersonDecoder;

impl Decoder for PersonDecoder {
    type Output = Person;

    fn decode(&self, cursor: &mut Cursor<'_>) -> Result<Person, DecodeError> {
        Ok(Person {
            name: Str.decode(cursor)?,
            age: Int.decode(cursor)?,
        })
    }
}

impl FromTokens for Person {
    fn from_tokens(cursor: &mut Cursor<'_>) -> Result<Self, DecodeError> {
        PersonDecoder.decode(cursor)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(name={}, age={})", self.name, self.age)
    }
}

/// A named group of people.
///
/// Encoded as `<name>/<count>` followed by each member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    pub members: Vec<Person>,
}

/// Decoder for a [`Group`].
#[derive(Debug, Default, Clone, Copy)]
pub struct GroupDecoder;

impl Decoder for GroupDecoder {
    type Output = Group;

    fn decode(&self, cursor: &mut Cursor<'_>) -> Result<Group, DecodeError> {
        Ok(Group {
            name: Str.decode(cursor)?,
            members: Seq::new(PersonDecoder).decode(cursor)?,
        })
    }
}

impl FromTokens for Group {
    fn from_tokens(cursor: &mut Cursor<'_>) -> Result<Self, DecodeError> {
        GroupDecoder.decode(cursor)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(name={}, members=[", self.name)?;

        for (i, member) in self.members.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{member}")?;
        }

        f.write_str("])")
    }
}
