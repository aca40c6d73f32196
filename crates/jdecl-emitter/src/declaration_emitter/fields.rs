//! Field-derived declarations: instance variables, properties, static
//! accessors, field setters and static field declarations.

use super::DeclarationEmitter;
use crate::classifier::{FieldRef, all_field_fragments};
use crate::error::EmitError;
use crate::literals::render_literal;
use crate::naming::capitalize;
use crate::property_attributes::synthesize_property;
use crate::signatures::pad_type;
use jdecl_ast::{ModifierFlags, Visibility};
use jdecl_common::SourceLocation;

/// Fragment location, falling back to the declaration's.
fn fragment_location<'f>(field_ref: &FieldRef<'f>) -> &'f SourceLocation {
    if field_ref.fragment.location.is_unknown() {
        &field_ref.field.info.location
    } else {
        &field_ref.fragment.location
    }
}

impl<'a> DeclarationEmitter<'a> {
    pub(super) fn emit_instance_variables(&mut self) {
        let fields = self.members.instance_fields.clone();
        self.emit_instance_variable_list(&fields);
    }

    /// Fragments of one declaration share a statement; statements are `;` separated.
    pub(super) fn emit_instance_variable_list(&mut self, fields: &[FieldRef<'a>]) {
        if fields.is_empty() {
            return;
        }

        let mut previous: Option<&FieldRef<'a>> = None;
        for field_ref in fields {
            let field = field_ref.field;
            match previous {
                Some(prev) if prev.is_same_declaration(field_ref) => self.write(", "),
                _ => {
                    if previous.is_some() {
                        self.write(";");
                        self.write_line();
                    }
                    self.emit_doc_comment(field.info.doc_comment.as_deref());
                    self.write_indent();
                    if field.is_weak_reference && !field.info.is_volatile() {
                        self.write("__unsafe_unretained ");
                    }
                }
            }
            let name = self.ctx.resolver.variable_base_name(&field_ref.fragment.name);
            let declaration_type = self.declaration_type(field_ref);
            self.write(&format!("val {name} : {declaration_type}"));
            previous = Some(field_ref);
        }
        self.write_line();
    }

    fn declaration_type(&self, field_ref: &FieldRef<'a>) -> String {
        let ty = &field_ref.fragment.declared_type;
        if field_ref.field.info.is_volatile() {
            format!("volatile_{}", self.ctx.resolver.primitive_target_type(ty))
        } else {
            self.ctx.resolver.signature_type(ty)
        }
    }

    /// Properties for every directive-carrying field, whatever the pass filtered.
    pub(super) fn emit_properties(&mut self) {
        let decl = self.decl;
        for field_ref in all_field_fragments(decl) {
            let Some(directive) = &field_ref.field.property else {
                continue;
            };
            let property = synthesize_property(
                decl,
                field_ref.field,
                field_ref.fragment,
                directive,
                self.ctx.resolver,
                self.ctx.options,
            );

            let location = fragment_location(&field_ref);
            for error in &property.errors {
                self.report(location, error);
            }

            let mut line = String::from("@property ");
            if !property.attributes.is_empty() {
                line.push('(');
                line.push_str(&property.attributes.to_attribute_string());
                line.push_str(") ");
            }
            line.push_str(&pad_type(
                &self.ctx.resolver.target_type(&field_ref.fragment.declared_type),
            ));
            line.push_str(&property.name);
            line.push(';');
            self.write_indented_line(&line);
        }
    }

    pub(super) fn emit_static_accessors(&mut self) {
        if !self.ctx.options.static_accessor_methods() {
            return;
        }

        let statics = self.members.static_fields.clone();
        for field_ref in &statics {
            let accessor = self
                .ctx
                .resolver
                .static_accessor_name(&field_ref.fragment.name);
            let objc_type = self
                .ctx
                .resolver
                .target_type(&field_ref.fragment.declared_type);
            self.write_indented_line(&format!("+ ({objc_type}){accessor};"));
            if !field_ref.field.info.is_final() {
                self.write_indented_line(&format!(
                    "+ (void)set{}:({objc_type})value;",
                    capitalize(&accessor)
                ));
            }
        }

        if self.decl.is_enum() {
            let decl = self.decl;
            let pointer = if self.ctx.options.nullability() {
                " * __nonnull"
            } else {
                " *"
            };
            for constant in decl.enum_constants() {
                let accessor = self.ctx.resolver.static_accessor_name(&constant.name);
                self.write_indented_line(&format!("+ ({}{pointer}){accessor};", self.type_name));
            }
        }
    }

    /// Write barriers for object instance fields.
    pub(super) fn emit_field_setters(&mut self) -> Result<(), EmitError> {
        let fields = self.members.instance_fields.clone();
        let mut setters = Vec::new();
        for field_ref in &fields {
            let field = field_ref.field;
            let fragment = field_ref.fragment;
            if field.is_retained_with {
                if field.info.visibility == Visibility::Public {
                    return Err(self.invariant_violation(
                        fragment_location(field_ref),
                        format!("retained-with field `{}` must not be public", fragment.name),
                    ));
                }
                continue;
            }
            if fragment.declared_type.is_primitive()
                || fragment.is_synthetic
                || field.info.flags.contains(ModifierFlags::SYNTHETIC)
                || field.is_weak_reference
            {
                continue;
            }

            let mut objc_type = self.ctx.resolver.target_type(&fragment.declared_type);
            if objc_type.contains(',') {
                objc_type = format!("J2OBJC_ARG({objc_type})");
            }
            let ivar = self.ctx.resolver.variable_name(&fragment.name);
            let volatile = if field.info.is_volatile() { "_VOLATILE" } else { "" };
            setters.push(format!(
                "J2OBJC{volatile}_FIELD_SETTER({}, {ivar}, {objc_type})",
                self.type_name
            ));
        }

        if setters.is_empty() {
            return Ok(());
        }
        self.write_line();
        for setter in &setters {
            self.write(setter);
            self.write_line();
        }
        Ok(())
    }

    pub(super) fn emit_static_field_declarations(&mut self) {
        let statics = self.members.static_fields.clone();
        if statics.is_empty() {
            return;
        }
        tracing::trace!(count = statics.len(), dead = self.decl.is_dead_class, "static fields");

        self.write_indented_line("(* Static fields *)");
        for field_ref in &statics {
            if self.decl.is_dead_class {
                self.emit_dead_class_constant(field_ref);
            } else {
                let name = self.ctx.resolver.variable_base_name(&field_ref.fragment.name);
                let ty = self
                    .ctx
                    .resolver
                    .signature_type(&field_ref.fragment.declared_type);
                self.write_indented_line(&format!("val {name} : {ty}"));
            }
        }
    }

    /// Dead classes keep only their constants: primitives as macros, objects as globals.
    fn emit_dead_class_constant(&mut self, field_ref: &FieldRef<'a>) {
        let fragment = field_ref.fragment;
        debug_assert!(
            fragment.constant_value.is_some(),
            "dead class constant {} has no value",
            fragment.name
        );
        let name = self.ctx.resolver.variable_base_name(&fragment.name);
        let global = format!("{}_{name}", self.type_name);

        match &fragment.constant_value {
            Some(value)
                if field_ref.field.info.is_final() && fragment.declared_type.is_primitive() =>
            {
                self.write_indented_line(&format!("#define {global} {}", render_literal(value)));
            }
            _ => {
                let declaration_type =
                    pad_type(&self.ctx.resolver.target_type(&fragment.declared_type));
                self.write_indented_line(&format!("FOUNDATION_EXPORT {declaration_type}{global};"));
            }
        }
    }

    /// `@interface Name ()` holding the private instance variables and methods.
    pub(super) fn emit_class_extension(&mut self) {
        if self.decl.is_interface() {
            return;
        }
        let fields = self.members.instance_fields.clone();
        let inner = self.members.inner_declarations.clone();
        if fields.is_empty() && inner.is_empty() {
            return;
        }

        self.write_line();
        self.write(&format!("@interface {} ()", self.type_name));
        self.write_line();
        self.increase_indent();
        self.emit_instance_variable_list(&fields);
        for member in inner {
            self.emit_member_declaration(member);
        }
        self.decrease_indent();
        self.write("@end");
        self.write_line();
    }
}
