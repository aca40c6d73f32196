//! Modifiers, visibility and annotations shared by every member kind.

use bitflags::bitflags;
use jdecl_common::SourceLocation;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Visibility {
    Public,
    Protected,
    /// No explicit access modifier.
    #[default]
    PackagePrivate,
    Private,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Availability {
    #[default]
    Available,
    /// Declared but must not be called (e.g. disallowed inherited constructors).
    Unavailable,
}

bitflags! {
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ModifierFlags: u16 {
        const STATIC = 1 << 0;
        const FINAL = 1 << 1;
        const ABSTRACT = 1 << 2;
        const VOLATILE = 1 << 3;
        const SYNCHRONIZED = 1 << 4;
        const SYNTHETIC = 1 << 5;
    }
}

/// An annotation reference, by simple or qualified name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Annotation {
    pub name: String,
}

impl Annotation {
    pub fn new(name: impl Into<String>) -> Self {
        Annotation { name: name.into() }
    }

    pub fn simple_name(&self) -> &str {
        self.name
            .rsplit_once('.')
            .map_or(self.name.as_str(), |(_, tail)| tail)
    }

    /// `@Deprecated` or `@java.lang.Deprecated`; other qualified names do not count.
    pub fn is_deprecated(&self) -> bool {
        self.name == "Deprecated" || self.name == "java.lang.Deprecated"
    }

    pub fn is_nullable(&self) -> bool {
        self.simple_name() == "Nullable"
    }

    pub fn is_nonnull(&self) -> bool {
        matches!(self.simple_name(), "Nonnull" | "NonNull")
    }
}

pub fn has_deprecated(annotations: &[Annotation]) -> bool {
    annotations.iter().any(Annotation::is_deprecated)
}

pub fn has_nullable(annotations: &[Annotation]) -> bool {
    annotations.iter().any(Annotation::is_nullable)
}

pub fn has_nonnull(annotations: &[Annotation]) -> bool {
    annotations.iter().any(Annotation::is_nonnull)
}

/// Attributes common to all members.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberInfo {
    pub visibility: Visibility,
    pub flags: ModifierFlags,
    pub availability: Availability,
    pub annotations: Vec<Annotation>,
    pub doc_comment: Option<String>,
    /// Declared only in the private companion unit.
    pub has_private_declaration: bool,
    pub location: SourceLocation,
}

impl MemberInfo {
    pub fn is_static(&self) -> bool {
        self.flags.contains(ModifierFlags::STATIC)
    }

    pub fn is_final(&self) -> bool {
        self.flags.contains(ModifierFlags::FINAL)
    }

    pub fn is_abstract(&self) -> bool {
        self.flags.contains(ModifierFlags::ABSTRACT)
    }

    pub fn is_volatile(&self) -> bool {
        self.flags.contains(ModifierFlags::VOLATILE)
    }

    pub fn is_synchronized(&self) -> bool {
        self.flags.contains(ModifierFlags::SYNCHRONIZED)
    }

    pub fn is_unavailable(&self) -> bool {
        self.availability == Availability::Unavailable
    }

    pub fn is_deprecated(&self) -> bool {
        has_deprecated(&self.annotations)
    }
}
