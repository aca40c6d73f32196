//! Resolved declaration model.
//!
//! The front end produces one [`TypeDecl`] per source type, fully resolved:
//! members are known, types are mapped to [`TypeRef`]s and modifiers are
//! normalized. The emitter only reads this model.
//!
//! The model deserializes from JSON so resolved types can be fed to the
//! `jdecl` binary:
//!
//! ```json
//! {
//!   "kind": "class",
//!   "qualifiedName": "com.example.Point",
//!   "members": [
//!     { "field": { "visibility": "private",
//!                  "fragments": [ { "name": "x", "type": { "primitive": "int" } } ] } },
//!     { "method": { "visibility": "public", "name": "getX",
//!                   "returnType": { "primitive": "int" } } }
//!   ]
//! }
//! ```

pub mod decl;
pub mod modifiers;
pub mod types;

pub use decl::{
    CONSTRUCTOR_NAME, EnumConstantDecl, FieldDecl, FieldFragment, FunctionDecl, Member,
    MethodDecl, NativeDecl, Parameter, PropertyDirective, TypeDecl, TypeKind,
};
pub use modifiers::{Annotation, Availability, MemberInfo, ModifierFlags, Visibility};
pub use types::{ConstantValue, PrimitiveKind, TypeRef};
