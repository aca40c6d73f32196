//! Callable and verbatim declarations: methods, constructors, the companion
//! class, free functions and native blocks.

use super::DeclarationEmitter;
use crate::ordering::{CategoryGroup, DeclarationCategory, UNAVAILABLE_COMMENT, order_constructors, order_declarations};
use jdecl_ast::{FunctionDecl, Member, MethodDecl, NativeDecl};

impl<'a> DeclarationEmitter<'a> {
    /// Methods and inline native blocks of the class body.
    pub(super) fn emit_inner_declarations(&mut self) {
        // Protocol members are all public; private types are ordered by the front end.
        if self.decl.is_interface() || self.decl.has_private_declaration {
            self.emit_plain_inner_declarations();
            return;
        }

        // Constructors become module-level functions, printed after the class.
        let inner: Vec<&'a Member> = self
            .members
            .inner_declarations
            .iter()
            .copied()
            .filter(|member| !member.is_constructor())
            .collect();
        let groups = order_declarations(&inner);
        self.emit_category_groups(&groups);
    }

    fn emit_plain_inner_declarations(&mut self) {
        let inner = self.members.inner_declarations.clone();
        let is_interface = self.decl.is_interface();
        for member in inner {
            // Static interface methods belong to the companion class.
            if is_interface && matches!(member, Member::Method(method) if method.info.is_static()) {
                continue;
            }
            self.emit_member_declaration(member);
        }
    }

    fn emit_category_groups(&mut self, groups: &[CategoryGroup<'a>]) {
        for group in groups {
            tracing::trace!(category = ?group.category, count = group.members.len(), "category group");
            if let Some(header) = group.category.header() {
                self.write_indented_line(header);
            }
            for &member in &group.members {
                if group.category == DeclarationCategory::Unavailable {
                    self.write_indented_line(UNAVAILABLE_COMMENT);
                }
                self.emit_member_declaration(member);
            }
        }
    }

    /// Constructors, rendered as `make` functions of the module.
    pub(super) fn emit_constructors(&mut self) {
        // Already printed with the other inner declarations.
        if self.decl.is_interface() || self.decl.has_private_declaration {
            return;
        }
        let inner = self.members.inner_declarations.clone();
        let groups = order_constructors(&inner);
        self.emit_category_groups(&groups);
    }

    pub(super) fn emit_member_declaration(&mut self, member: &'a Member) {
        match member {
            Member::Method(method) => self.emit_method_declaration(method, false),
            Member::Constructor(method) => self.emit_method_declaration(method, true),
            Member::NativeBlock(native) => self.emit_native_declaration(native),
            Member::FreeFunction(function) => self.emit_function_declaration(function),
            Member::Field(_) | Member::EnumConstant(_) => {}
        }
    }

    fn emit_method_declaration(&mut self, method: &MethodDecl, is_constructor: bool) {
        self.emit_doc_comment(method.info.doc_comment.as_deref());
        let declaration = self.signatures.method_declaration(method, is_constructor);
        self.write_indented_block(&declaration);
    }

    fn emit_native_declaration(&mut self, native: &NativeDecl) {
        let Some(code) = &native.header_code else {
            return;
        };
        self.writer.ensure_line_start();
        self.write_line();
        self.write(code);
        self.writer.ensure_line_start();
    }

    fn emit_function_declaration(&mut self, function: &FunctionDecl) {
        let mut declaration = format!(
            "FOUNDATION_EXPORT {}",
            self.signatures.function_signature(function)
        );
        if function.returns_retained {
            declaration.push_str(" NS_RETURNS_RETAINED");
        }
        declaration.push(';');
        self.write_line();
        self.write(&declaration);
        self.write_line();
    }

    pub(super) fn emit_outer_declarations(&mut self) {
        let outer = self.members.outer_declarations.clone();
        for member in outer {
            self.emit_member_declaration(member);
        }
    }

    /// Class object carrying what a protocol cannot declare: static methods,
    /// static accessors and class initialization.
    pub(super) fn emit_companion_declaration(&mut self) {
        if !self.decl.is_interface()
            || !self.members.needs_companion
            || self.pass.prints_private_declarations() == self.members.needs_public_companion
        {
            return;
        }
        tracing::trace!(type_name = %self.type_name, "companion class");

        self.write_line();
        self.write(&format!("@interface {} : NSObject", self.type_name));
        if self.decl.is_runtime_annotation {
            // Annotation implementation class.
            self.write(&format!(" < {} >", self.type_name));
        }
        self.write_line();

        self.increase_indent();
        self.emit_instance_variables();
        let inner = self.members.inner_declarations.clone();
        for member in inner {
            if let Member::Method(method) = member
                && method.info.is_static()
            {
                self.emit_method_declaration(method, false);
            }
        }
        self.emit_static_accessors();
        self.decrease_indent();

        self.write("@end");
        self.write_line();
    }
}
