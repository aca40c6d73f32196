//! Declaration ordering.
//!
//! Inner declarations are printed grouped by [`DeclarationCategory`] in a
//! fixed order, and sorted within each group so that headers read like
//! documentation: constructors first, then methods by name and parameter
//! types.

use jdecl_ast::{Member, MethodDecl, Visibility};
use std::cmp::Ordering;

/// Printed before each unavailable member.
pub const UNAVAILABLE_COMMENT: &str = "// Disallowed inherited constructors, do not use.";

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DeclarationCategory {
    Public,
    Protected,
    PackagePrivate,
    Private,
    Unavailable,
}

impl DeclarationCategory {
    /// Print order.
    pub const ALL: [DeclarationCategory; 5] = [
        DeclarationCategory::Public,
        DeclarationCategory::Protected,
        DeclarationCategory::PackagePrivate,
        DeclarationCategory::Private,
        DeclarationCategory::Unavailable,
    ];

    /// Unavailability wins over visibility.
    pub fn categorize(member: &Member) -> Self {
        let info = member.info();
        if member.as_callable().is_some() && info.is_unavailable() {
            return DeclarationCategory::Unavailable;
        }
        match info.visibility {
            Visibility::Public => DeclarationCategory::Public,
            Visibility::Protected => DeclarationCategory::Protected,
            Visibility::Private => DeclarationCategory::Private,
            Visibility::PackagePrivate => DeclarationCategory::PackagePrivate,
        }
    }

    /// Group marker line; unavailable members are marked individually instead.
    pub fn header(self) -> Option<&'static str> {
        match self {
            DeclarationCategory::Public => Some("#pragma mark Public"),
            DeclarationCategory::Protected => Some("#pragma mark Protected"),
            DeclarationCategory::PackagePrivate => Some("#pragma mark Package-Private"),
            DeclarationCategory::Private => Some("#pragma mark Private"),
            DeclarationCategory::Unavailable => None,
        }
    }
}

fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Orders two callables: constructors first, then by name, then by parameter
/// simple type names element-wise, then shorter parameter lists first. All
/// name comparisons ignore case.
pub fn compare_methods(a: &MethodDecl, a_is_ctor: bool, b: &MethodDecl, b_is_ctor: bool) -> Ordering {
    b_is_ctor
        .cmp(&a_is_ctor)
        .then_with(|| compare_ignore_case(&a.name, &b.name))
        .then_with(|| {
            a.parameters
                .iter()
                .zip(&b.parameters)
                .map(|(pa, pb)| compare_ignore_case(&pa.ty.simple_name(), &pb.ty.simple_name()))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| a.parameters.len().cmp(&b.parameters.len()))
}

/// [`compare_methods`] over members; non-callables compare equal to everything.
pub fn compare_members(a: &Member, b: &Member) -> Ordering {
    match (a.as_callable(), b.as_callable()) {
        (Some(ma), Some(mb)) => compare_methods(ma, a.is_constructor(), mb, b.is_constructor()),
        _ => Ordering::Equal,
    }
}

/// Members of one category, in print order.
#[derive(Clone, Debug)]
pub struct CategoryGroup<'a> {
    pub category: DeclarationCategory,
    pub members: Vec<&'a Member>,
}

/// Groups members by category (empty categories omitted); within a group
/// callables are sorted and other members follow in declaration order.
pub fn order_declarations<'a>(members: &[&'a Member]) -> Vec<CategoryGroup<'a>> {
    DeclarationCategory::ALL
        .into_iter()
        .filter_map(|category| {
            let (mut callables, others): (Vec<&'a Member>, Vec<&'a Member>) = members
                .iter()
                .copied()
                .filter(|member| DeclarationCategory::categorize(member) == category)
                .partition(|member| member.as_callable().is_some());
            if callables.is_empty() && others.is_empty() {
                return None;
            }
            callables.sort_by(|a, b| compare_members(a, b));
            callables.extend(others);
            Some(CategoryGroup {
                category,
                members: callables,
            })
        })
        .collect()
}

/// [`order_declarations`] restricted to constructors.
pub fn order_constructors<'a>(members: &[&'a Member]) -> Vec<CategoryGroup<'a>> {
    let constructors: Vec<&'a Member> = members
        .iter()
        .copied()
        .filter(|member| member.is_constructor())
        .collect();
    order_declarations(&constructors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jdecl_ast::TypeRef;

    #[test]
    fn test_unavailable_wins_over_visibility() {
        let member: Member = MethodDecl::constructor()
            .with_visibility(Visibility::Public)
            .unavailable()
            .into();
        assert_eq!(
            DeclarationCategory::categorize(&member),
            DeclarationCategory::Unavailable
        );
        assert_eq!(DeclarationCategory::Unavailable.header(), None);
    }

    #[test]
    fn test_constructor_sorts_first() {
        let ctor = MethodDecl::constructor();
        let method = MethodDecl::new("alpha");
        assert_eq!(compare_methods(&ctor, true, &method, false), Ordering::Less);
        assert_eq!(compare_methods(&method, false, &ctor, true), Ordering::Greater);
    }

    #[test]
    fn test_case_insensitive_names_then_parameters() {
        let upper = MethodDecl::new("Value").with_param("x", TypeRef::string());
        let lower = MethodDecl::new("value").with_param("x", TypeRef::int());
        assert_eq!(compare_methods(&lower, false, &upper, false), Ordering::Less);

        let shorter = MethodDecl::new("value");
        assert_eq!(compare_methods(&shorter, false, &lower, false), Ordering::Less);
    }
}
