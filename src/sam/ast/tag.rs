//! Optional `TAG:TYPE:VALUE` fields of an alignment record
//!
//! The value is kept as the literal text after the second colon. Decoding it
//! according to the type character is left to callers (see
//! [`crate::sam::validate`] for the lexical checks).

use std::fmt;

use serde::Serialize;

use super::error::ModelError;

/// Type character of an optional field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TagType {
    /// Printable character (`A`)
    Character,
    /// Signed integer (`i`)
    Integer,
    /// Single-precision float (`f`)
    Float,
    /// Printable string (`Z`)
    String,
    /// Byte array in hex (`H`)
    Hex,
    /// Numeric array (`B`)
    Array,
}

impl TagType {
    pub fn from_char(c: char) -> Result<Self, ModelError> {
        match c {
            'A' => Ok(TagType::Character),
            'i' => Ok(TagType::Integer),
            'f' => Ok(TagType::Float),
            'Z' => Ok(TagType::String),
            'H' => Ok(TagType::Hex),
            'B' => Ok(TagType::Array),
            other => Err(ModelError::InvalidTagType(other)),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            TagType::Character => 'A',
            TagType::Integer => 'i',
            TagType::Float => 'f',
            TagType::String => 'Z',
            TagType::Hex => 'H',
            TagType::Array => 'B',
        }
    }
}

impl TryFrom<char> for TagType {
    type Error = ModelError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        TagType::from_char(c)
    }
}

impl fmt::Display for TagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Check the two-character tag-name rule shared by header fields and optional tags
pub fn is_valid_tag_name(name: &str) -> bool {
    name.chars().count() == 2 && !name.contains([':', '\t', '\n', '\r'])
}

/// A single optional field, e.g. `NM:i:2`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct OptionalTag {
    tag: String,
    tag_type: TagType,
    value: String,
}

impl OptionalTag {
    pub fn new(
        tag: impl Into<String>,
        tag_type: TagType,
        value: impl Into<String>,
    ) -> Result<Self, ModelError> {
        let tag = tag.into();
        if !is_valid_tag_name(&tag) {
            return Err(ModelError::InvalidTagName(tag));
        }
        Ok(Self {
            tag,
            tag_type,
            value: value.into(),
        })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn tag_type(&self) -> TagType {
        self.tag_type
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for OptionalTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.tag, self.tag_type, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let tag = OptionalTag::new("NM", TagType::Integer, "2").unwrap();
        assert_eq!(tag.to_string(), "NM:i:2");
        assert_eq!(tag.tag(), "NM");
        assert_eq!(tag.tag_type(), TagType::Integer);
        assert_eq!(tag.value(), "2");
    }

    #[test]
    fn test_empty_value_allowed() {
        let tag = OptionalTag::new("CO", TagType::String, "").unwrap();
        assert_eq!(tag.to_string(), "CO:Z:");
    }

    #[test]
    fn test_tag_name_length() {
        assert_eq!(
            OptionalTag::new("N", TagType::Integer, "2"),
            Err(ModelError::InvalidTagName("N".to_string()))
        );
        assert!(OptionalTag::new("NMX", TagType::Integer, "2").is_err());
        assert!(OptionalTag::new("N:", TagType::Integer, "2").is_err());
    }

    #[test]
    fn test_tag_type_chars() {
        for c in ['A', 'i', 'f', 'Z', 'H', 'B'] {
            assert_eq!(TagType::from_char(c).unwrap().as_char(), c);
        }
        assert_eq!(TagType::from_char('I'), Err(ModelError::InvalidTagType('I')));
    }
}
