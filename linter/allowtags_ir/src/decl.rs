//! Host-supplied declaration model.
//!
//! The linter never parses a source language itself. A host (a compiler
//! plugin, a static-analysis framework, a manifest on disk) hands over the
//! composite-type declarations it found together with each field's raw tag
//! literal and where that literal starts in the source file.

/// A raw tag literal exactly as written in source, quotes included.
///
/// `offset` is the absolute byte offset of the literal's first character
/// (normally the opening `` ` `` or `"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "manifest", derive(serde::Serialize, serde::Deserialize))]
pub struct TagLiteral {
    pub text: String,
    pub offset: u32,
}

impl TagLiteral {
    pub fn new(text: impl Into<String>, offset: u32) -> Self {
        TagLiteral {
            text: text.into(),
            offset,
        }
    }
}

/// One field of a composite-type declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "manifest", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldDecl {
    /// Field name; embedded fields may have none.
    #[cfg_attr(feature = "manifest", serde(default))]
    pub name: Option<String>,
    /// Absolute offset of the field in source.
    #[cfg_attr(feature = "manifest", serde(default))]
    pub offset: u32,
    /// The field's tag literal, if it has one.
    #[cfg_attr(feature = "manifest", serde(default))]
    pub tag: Option<TagLiteral>,
}

impl FieldDecl {
    pub fn new(name: impl Into<String>, offset: u32) -> Self {
        FieldDecl {
            name: Some(name.into()),
            offset,
            tag: None,
        }
    }

    #[must_use]
    pub fn with_tag(mut self, text: impl Into<String>, offset: u32) -> Self {
        self.tag = Some(TagLiteral::new(text, offset));
        self
    }

    /// Display name used in diagnostics (`_` for embedded fields).
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("_")
    }
}

/// A composite-type declaration and its fields, in source order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "manifest", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeDecl {
    /// Type name; anonymous struct types have none.
    #[cfg_attr(feature = "manifest", serde(default))]
    pub name: Option<String>,
    #[cfg_attr(feature = "manifest", serde(default))]
    pub offset: u32,
    #[cfg_attr(feature = "manifest", serde(default))]
    pub fields: Vec<FieldDecl>,
}

impl TypeDecl {
    pub fn new(name: impl Into<String>, offset: u32) -> Self {
        TypeDecl {
            name: Some(name.into()),
            offset,
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, field: FieldDecl) -> Self {
        self.fields.push(field);
        self
    }

    /// Display name used in diagnostics (`<anonymous>` for unnamed types).
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<anonymous>")
    }
}
