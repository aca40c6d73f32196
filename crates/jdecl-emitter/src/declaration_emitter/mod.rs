//! Header declaration emitter.
//!
//! Synthesizes the header text of one resolved type. Class-shaped types
//! (classes, enums) are framed as a module signature nesting a class
//! signature; protocol-shaped types (interfaces, annotation types) as a
//! protocol:
//!
//! ```text
//! module ComExamplePoint : sig
//!   class point : object < JavaIoSerializable >
//!     val x : int
//!     #pragma mark Public
//!     val getX : unit -> jint
//!   end
//!   #pragma mark Public
//!   val make : initWithInt:(jint)x -> point
//! ...
//! end
//! ```
//!
//! The same emitter produces both headers; [`EmitPass`] selects which
//! members are printed and which steps run.

mod fields;
mod members;


use crate::boxed_operators::{boxed_operator_lines, unboxed_primitive};
use crate::classifier::{EmitPass, MemberClassification, classify};
use crate::doc_comment::DocCommentRenderer;
use crate::error::EmitError;
use crate::naming::{NameResolver, camel_case_qualified_name};
use crate::signatures::{DEPRECATED_ATTRIBUTE, SignatureBuilder};
use crate::source_writer::SourceWriter;
use jdecl_ast::TypeDecl;
use jdecl_common::{DeclarationOptions, Diagnostic, DiagnosticMessage, DiagnosticSink, SourceLocation};

const INDENT: &str = "  ";

/// Collaborators shared by every emitter in a run.
#[derive(Copy, Clone)]
pub struct EmitContext<'a> {
    pub resolver: &'a dyn NameResolver,
    pub sink: &'a dyn DiagnosticSink,
    pub docs: &'a dyn DocCommentRenderer,
    pub options: &'a DeclarationOptions,
}

/// Emits one type's declaration for one pass.
pub struct DeclarationEmitter<'a> {
    decl: &'a TypeDecl,
    pass: EmitPass,
    ctx: EmitContext<'a>,
    writer: SourceWriter,
    indent_level: u32,
    /// Target name of the type (`ComExamplePoint`).
    type_name: String,
    members: MemberClassification<'a>,
    signatures: SignatureBuilder<'a>,
}

impl<'a> DeclarationEmitter<'a> {
    pub fn new(decl: &'a TypeDecl, pass: EmitPass, ctx: EmitContext<'a>) -> Self {
        DeclarationEmitter {
            decl,
            pass,
            ctx,
            writer: SourceWriter::with_capacity(2048),
            indent_level: 0,
            type_name: ctx.resolver.full_type_name(&decl.qualified_name),
            members: classify(decl, pass, ctx.options),
            signatures: SignatureBuilder::new(decl, ctx.resolver, ctx.options),
        }
    }

    #[tracing::instrument(level = "debug", skip(self), fields(type_name = %self.decl.qualified_name, pass = %self.pass))]
    pub fn emit(mut self) -> Result<String, EmitError> {
        tracing::debug!(target_name = %self.type_name, "emitting declaration");

        match self.pass {
            EmitPass::Public => {
                // Private types are declared entirely in the private header.
                if !self.decl.has_private_declaration {
                    self.emit_full_declaration()?;
                }
            }
            EmitPass::Private => {
                if self.decl.has_private_declaration {
                    self.emit_full_declaration()?;
                } else {
                    self.emit_private_additions()?;
                }
            }
        }

        Ok(self.writer.take_output())
    }

    fn emit_full_declaration(&mut self) -> Result<(), EmitError> {
        if self.decl.is_dead_class {
            self.emit_static_field_declarations();
            return Ok(());
        }

        self.emit_native_enum();
        self.emit_type_documentation();
        self.open_type_frame();
        if !self.decl.is_interface() {
            self.emit_instance_variables();
        }
        self.emit_properties();
        if !self.decl.is_interface() {
            self.emit_static_accessors();
        }
        self.emit_inner_declarations();

        if self.decl.is_package_info {
            self.close_class_frame();
            self.emit_outer_declarations();
            self.close_module_frame();
            return Ok(());
        }

        self.close_class_frame();
        self.emit_constructors();
        self.emit_companion_declaration();
        self.emit_enum_constants();
        self.emit_field_setters()?;
        self.emit_static_field_declarations();
        self.emit_outer_declarations();
        self.emit_boxed_operators();
        self.close_module_frame();
        self.emit_unprefixed_alias();
        Ok(())
    }

    /// Private header of a type whose main declaration is public.
    fn emit_private_additions(&mut self) -> Result<(), EmitError> {
        if self.decl.is_dead_class {
            self.emit_static_field_declarations();
            return Ok(());
        }
        self.emit_class_extension();
        self.emit_companion_declaration();
        self.emit_field_setters()?;
        self.emit_static_field_declarations();
        self.emit_outer_declarations();
        Ok(())
    }

    // =========================================================================
    // Frames
    // =========================================================================

    fn protocol_list(&self) -> String {
        let names = self.protocol_names();
        if names.is_empty() {
            String::new()
        } else {
            format!(" < {} >", names.join(", "))
        }
    }

    /// Protocols adopted by the type, in print order.
    pub fn protocol_names(&self) -> Vec<String> {
        if self.decl.is_annotation() {
            return vec!["JavaLangAnnotationAnnotation".to_string()];
        }
        let mut names: Vec<String> = self
            .decl
            .declared_interfaces
            .iter()
            .map(|ty| self.ctx.resolver.full_type_name(&ty.binary_name()))
            .collect();
        if self.decl.qualified_name == "java.lang.Enum" {
            names.retain(|name| name != "NSCopying");
            names.insert(0, "NSCopying".to_string());
        } else if self.decl.is_interface() {
            names.push("JavaObject".to_string());
        }
        names
    }

    /// Lowercased simple name used for the class signature.
    fn class_signature_name(&self) -> String {
        self.decl.simple_name().to_lowercase()
    }

    fn open_type_frame(&mut self) {
        let protocols = self.protocol_list();
        if self.decl.is_interface() {
            self.write(&format!("@protocol {}{protocols}", self.type_name));
            self.write_line();
            return;
        }

        self.write(&format!("module {} : sig", self.type_name));
        self.write_line();
        self.increase_indent();
        let class_name = self.class_signature_name();
        self.write_indented_line(&format!("class {class_name} : object{protocols}"));
        self.increase_indent();
        if let Some(supertype) = &self.decl.declared_supertype {
            let inherited = supertype.simple_name().to_lowercase();
            self.write_indented_line(&format!("inherit {inherited}"));
        }
    }

    fn close_class_frame(&mut self) {
        if self.decl.is_interface() {
            self.writer.ensure_line_start();
            self.write("@end");
            self.write_line();
        } else {
            self.decrease_indent();
            self.write_indented_line("end");
        }
    }

    fn close_module_frame(&mut self) {
        if !self.decl.is_interface() {
            self.decrease_indent();
            self.write_indented_line("end");
        }
    }

    // =========================================================================
    // Type-level steps
    // =========================================================================

    fn emit_native_enum(&mut self) {
        if !self.decl.is_enum() {
            return;
        }
        let constants: Vec<String> = self
            .decl
            .enum_constants()
            .map(|constant| self.ctx.resolver.variable_base_name(&constant.name))
            .collect();
        // C forbids empty enums.
        if constants.is_empty() {
            return;
        }
        tracing::trace!(count = constants.len(), "native enum");

        let native_name = self.ctx.resolver.native_enum_name(&self.type_name);
        self.write_line();
        self.write(&format!("typedef NS_ENUM(NSUInteger, {native_name}) {{"));
        self.write_line();
        self.increase_indent();
        for (ordinal, name) in constants.iter().enumerate() {
            self.write_indented_line(&format!("{native_name}_{name} = {ordinal},"));
        }
        self.decrease_indent();
        self.write("};");
        self.write_line();
    }

    fn emit_type_documentation(&mut self) {
        self.write_line();
        self.emit_doc_comment(self.decl.doc_comment.as_deref());
        if self.ctx.options.generate_deprecated_declarations() && self.decl.is_deprecated() {
            self.write(DEPRECATED_ATTRIBUTE);
            self.write_line();
        }
    }

    fn emit_enum_constants(&mut self) {
        if !self.decl.is_enum() {
            return;
        }
        let type_name = self.type_name.clone();
        self.write_line();
        self.write("/*! INTERNAL ONLY - Use enum accessors declared below. */");
        self.write_line();
        self.write(&format!("FOUNDATION_EXPORT {type_name} *{type_name}_values_[];"));
        self.write_line();

        let decl = self.decl;
        for constant in decl.enum_constants() {
            let name = self.ctx.resolver.variable_base_name(&constant.name);
            self.write_line();
            self.emit_doc_comment(constant.info.doc_comment.as_deref());
            self.write(&format!("inline {type_name} *{type_name}_get_{name}(void);"));
            self.write_line();
            self.write(&format!("J2OBJC_ENUM_CONSTANT({type_name}, {name})"));
            self.write_line();
        }
    }

    fn emit_boxed_operators(&mut self) {
        let Some(kind) = unboxed_primitive(&self.decl.qualified_name) else {
            return;
        };
        tracing::trace!(primitive = %kind, "boxed operators");
        self.write_line();
        for line in boxed_operator_lines(kind, &self.type_name) {
            self.write(&line);
            self.write_line();
        }
    }

    fn emit_unprefixed_alias(&mut self) {
        if !self.decl.is_top_level {
            return;
        }
        let unprefixed = camel_case_qualified_name(&self.decl.qualified_name);
        if unprefixed == self.type_name {
            return;
        }
        self.write_line();
        if self.decl.is_interface() {
            // Protocols can't be used in typedefs.
            self.write(&format!("#define {unprefixed} {}", self.type_name));
        } else {
            self.write(&format!("@compatibility_alias {unprefixed} {};", self.type_name));
        }
        self.write_line();
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    fn report(&self, location: &SourceLocation, message: &DiagnosticMessage) {
        let location = if location.is_unknown() {
            &self.decl.location
        } else {
            location
        };
        tracing::debug!(code = message.code, %location, "configuration error");
        self.ctx
            .sink
            .report(Diagnostic::from_message(location.clone(), message));
    }

    fn invariant_violation(&self, location: &SourceLocation, message: impl Into<String>) -> EmitError {
        let location = if location.is_unknown() {
            &self.decl.location
        } else {
            location
        };
        EmitError::invariant(&self.decl.qualified_name, location, message)
    }

    // =========================================================================
    // Writer helpers
    // =========================================================================

    fn write(&mut self, text: &str) {
        self.writer.write(text);
    }

    fn write_line(&mut self) {
        self.writer.write_line();
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.writer.write(INDENT);
        }
    }

    fn write_indented_line(&mut self, text: &str) {
        self.write_indent();
        self.write(text);
        self.write_line();
    }

    /// Writes possibly multi-line text, indenting every line.
    fn write_indented_block(&mut self, text: &str) {
        for line in text.split('\n') {
            self.write_indented_line(line);
        }
    }

    fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    fn decrease_indent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    fn emit_doc_comment(&mut self, doc: Option<&str>) {
        let Some(doc) = doc else {
            return;
        };
        for line in self.ctx.docs.render(doc) {
            if line.is_empty() {
                self.write_line();
            } else {
                self.write_indented_line(&line);
            }
        }
    }
}

/// Synthesizes the declaration of `decl` for `pass`.
pub fn emit_declaration(decl: &TypeDecl, pass: EmitPass, ctx: EmitContext<'_>) -> Result<String, EmitError> {
    DeclarationEmitter::new(decl, pass, ctx).emit()
}
