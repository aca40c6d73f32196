//! Declaration synthesis for resolved types.
//!
//! This crate turns a [`jdecl_ast::TypeDecl`] into header text. It is
//! organized in three tiers, each depending only on the one below:
//! - `classifier` - buckets members per pass and decides on companion classes
//! - `ordering` - groups members by category and sorts them
//! - `declaration_emitter` - walks the fixed emission sequence and prints
//!
//! Rule tables and collaborators:
//! - `boxed_operators` - operator macros for boxed primitive wrappers
//! - `property_attributes` - `@property` attribute synthesis
//! - `signatures` - method and function signatures
//! - `naming` - `NameResolver` and the default `NameTable`
//! - `doc_comment` - `DocCommentRenderer` and the default `JavadocRenderer`
//! - `literals` - constant literal rendering

pub mod boxed_operators;
pub mod classifier;
pub mod declaration_emitter;
pub mod doc_comment;
pub mod error;
pub mod literals;
pub mod naming;
pub mod ordering;
pub mod property_attributes;
pub mod signatures;
pub mod source_writer;

pub use classifier::{EmitPass, FieldRef, MemberClassification, classify, is_global_field};
pub use declaration_emitter::{DeclarationEmitter, EmitContext, emit_declaration};
pub use doc_comment::{DocCommentRenderer, JavadocRenderer};
pub use error::EmitError;
pub use naming::{NameResolver, NameTable};
pub use ordering::{CategoryGroup, DeclarationCategory, compare_members, order_constructors, order_declarations};
pub use property_attributes::PropertyAttributeSet;
pub use source_writer::SourceWriter;
