//! Method and function signature construction.
//!
//! Methods render in the module-signature notation, one keyword per line
//! with the colons aligned:
//!
//! ```text
//! val putWithInt:withNSString: : putWithInt:(jint)key
//!                              withNSString:(NSString *)value -> void
//! ```

use crate::naming::NameResolver;
use jdecl_ast::{FunctionDecl, MethodDecl, Parameter, TypeDecl, modifiers};
use jdecl_common::DeclarationOptions;

pub const DEPRECATED_ATTRIBUTE: &str = "__attribute__((deprecated))";

/// Name every constructor is declared under.
pub const CONSTRUCTOR_VAL_NAME: &str = "make";

const METHOD_FAMILY_PREFIXES: [&str; 5] = ["alloc", "copy", "init", "mutableCopy", "new"];

/// Selectors the compiler would otherwise place in a retaining method family.
pub fn needs_objc_method_family_none(selector: &str) -> bool {
    METHOD_FAMILY_PREFIXES
        .iter()
        .any(|prefix| selector.starts_with(prefix))
}

/// Type as a declaration prefix: pointer types already end in `*` and take no space.
pub fn pad_type(target_type: &str) -> String {
    if target_type.ends_with('*') {
        target_type.to_string()
    } else {
        format!("{target_type} ")
    }
}

/// Naming and option inputs shared by every signature of one type.
pub struct SignatureBuilder<'a> {
    pub decl: &'a TypeDecl,
    pub resolver: &'a dyn NameResolver,
    pub options: &'a DeclarationOptions,
}

impl<'a> SignatureBuilder<'a> {
    pub fn new(decl: &'a TypeDecl, resolver: &'a dyn NameResolver, options: &'a DeclarationOptions) -> Self {
        SignatureBuilder {
            decl,
            resolver,
            options,
        }
    }

    fn parameters_nonnull_by_default(&self) -> bool {
        self.options.nullability() && self.decl.parameters_nonnull_by_default
    }

    fn nullability(&self, param: &Parameter) -> &'static str {
        if !self.options.nullability() {
            return "";
        }
        if modifiers::has_nullable(&param.annotations) {
            " __nullable"
        } else if modifiers::has_nonnull(&param.annotations)
            || (self.parameters_nonnull_by_default() && !param.ty.is_primitive())
        {
            " __nonnull"
        } else {
            ""
        }
    }

    /// Signature without attribute suffixes.
    pub fn method_signature(&self, method: &MethodDecl, is_constructor: bool) -> String {
        let selector = self.resolver.selector(method, is_constructor);
        let (name, return_type) = if is_constructor {
            (
                CONSTRUCTOR_VAL_NAME.to_string(),
                self.decl.simple_name().to_lowercase(),
            )
        } else if selector == "hash" {
            (selector.clone(), "NSUInteger".to_string())
        } else {
            (
                selector.clone(),
                self.resolver.target_type(&method.return_type),
            )
        };

        let mut signature = format!("val {name} : ");
        if method.parameters.is_empty() {
            debug_assert!(!selector.ends_with(':'), "selector {selector} expects parameters");
            signature.push_str("unit");
        } else {
            let keywords: Vec<&str> = selector.split(':').filter(|part| !part.is_empty()).collect();
            debug_assert_eq!(
                keywords.len(),
                method.parameters.len(),
                "selector {selector} does not match parameter count"
            );
            let base_length = signature.len() + keywords.first().map_or(0, |kw| kw.len());
            for (index, param) in method.parameters.iter().enumerate() {
                let keyword = keywords.get(index).copied().unwrap_or("");
                if index != 0 {
                    signature.push('\n');
                    signature.push_str(&" ".repeat(base_length.saturating_sub(keyword.len())));
                }
                signature.push_str(&format!(
                    "{keyword}:({}{}){}",
                    self.resolver.target_type(&param.ty),
                    self.nullability(param),
                    self.resolver.parameter_name(&param.name)
                ));
            }
        }
        signature.push_str(&format!(" -> {return_type}"));
        signature
    }

    /// Full declaration: signature plus method-family, deprecation and availability suffixes.
    pub fn method_declaration(&self, method: &MethodDecl, is_constructor: bool) -> String {
        let mut declaration = self.method_signature(method, is_constructor);
        if !is_constructor
            && needs_objc_method_family_none(&self.resolver.selector(method, is_constructor))
        {
            declaration.push_str(" OBJC_METHOD_FAMILY_NONE");
        }
        if self.options.generate_deprecated_declarations() && method.info.is_deprecated() {
            declaration.push(' ');
            declaration.push_str(DEPRECATED_ATTRIBUTE);
        }
        if method.info.is_unavailable() {
            declaration.push_str(" NS_UNAVAILABLE");
        }
        declaration
    }

    /// C prototype of a free function: `<ret> name(<params>|void)`.
    pub fn function_signature(&self, function: &FunctionDecl) -> String {
        let mut signature = pad_type(&self.resolver.target_type(&function.return_type));
        signature.push_str(&function.name);
        signature.push('(');
        if function.parameters.is_empty() {
            signature.push_str("void");
        } else {
            let params: Vec<String> = function
                .parameters
                .iter()
                .map(|param| {
                    format!(
                        "{}{}",
                        pad_type(&self.resolver.target_type(&param.ty)),
                        self.resolver.parameter_name(&param.name)
                    )
                })
                .collect();
            signature.push_str(&params.join(", "));
        }
        signature.push(')');
        signature
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::NameTable;
    use jdecl_ast::TypeRef;

    #[test]
    fn test_family_prefixes() {
        assert!(needs_objc_method_family_none("newInstance"));
        assert!(needs_objc_method_family_none("copyWithInt:"));
        assert!(!needs_objc_method_family_none("renew"));
    }

    #[test]
    fn test_zero_parameter_signature() {
        let decl = TypeDecl::class("com.example.Counter");
        let options = DeclarationOptions::default();
        let table = NameTable::default();
        let builder = SignatureBuilder::new(&decl, &table, &options);
        let method = MethodDecl::new("size").returning(TypeRef::int());
        assert_eq!(builder.method_signature(&method, false), "val size : unit -> jint");
    }

    #[test]
    fn test_function_signature() {
        let decl = TypeDecl::class("com.example.Counter");
        let options = DeclarationOptions::default();
        let table = NameTable::default();
        let builder = SignatureBuilder::new(&decl, &table, &options);
        let function = jdecl_ast::FunctionDecl::new("ComExampleCounter_create")
            .with_param("start", TypeRef::int())
            .returning(TypeRef::class("com.example.Counter"));
        assert_eq!(
            builder.function_signature(&function),
            "ComExampleCounter *ComExampleCounter_create(jint start)"
        );
    }
}
