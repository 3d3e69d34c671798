//! Read-only navigation over a parsed [`Library`](crate::liberty::Library).
//!
//! Every lookup scans children in document order and returns the first
//! match, so duplicate cells or pins resolve deterministically. Searches are
//! shallow: they only look at a group's direct children, following the
//! fixed library → cell → pin hierarchy one step at a time.
//!
//! A miss is `None`, never an error.

use crate::liberty::{Group, Scalar, Statement};

/// First direct child group of kind `group_kind` named `instance_name`.
pub fn find_child_group<'g>(
    parent: &'g Group,
    group_kind: &str,
    instance_name: &str,
) -> Option<&'g Group> {
    parent
        .groups()
        .find(|g| g.group_kind == group_kind && g.instance_name == instance_name)
}

/// All direct child groups of kind `group_kind`, in document order.
pub fn find_child_groups<'a>(
    parent: &'a Group,
    group_kind: &'a str,
) -> impl Iterator<Item = &'a Group> + 'a {
    parent.groups().filter(move |g| g.group_kind == group_kind)
}

/// Value of the first simple attribute called `name`.
///
/// Complex attributes with the same name are skipped.
pub fn find_attribute_scalar<'g>(group: &'g Group, name: &str) -> Option<&'g Scalar> {
    group
        .simple_attributes()
        .find(|(attr, _)| *attr == name)
        .map(|(_, value)| value)
}

/// Numeric value of the first simple attribute called `name`.
///
/// Integers are widened to `f64`. A text or boolean value yields `None`, the
/// same as a missing attribute.
pub fn find_attribute_numeric(group: &Group, name: &str) -> Option<f64> {
    find_attribute_scalar(group, name).and_then(Scalar::as_f64)
}

/// Values of the first complex attribute called `name`.
pub fn find_complex_attribute<'g>(group: &'g Group, name: &str) -> Option<&'g [Scalar]> {
    group.children.iter().find_map(|child| match child {
        Statement::ComplexAttribute {
            name: attr,
            values,
        } if attr == name => Some(values.as_slice()),
        Statement::Group(_)
        | Statement::SimpleAttribute { .. }
        | Statement::ComplexAttribute { .. } => None,
    })
}

/// Follow `(group_kind, instance_name)` segments down from `root`.
///
/// Stops at the first segment with no match.
pub fn resolve_path<'g, K, N>(root: &'g Group, path: &[(K, N)]) -> Option<&'g Group>
where
    K: AsRef<str>,
    N: AsRef<str>,
{
    path.iter().try_fold(root, |group, (kind, name)| {
        find_child_group(group, kind.as_ref(), name.as_ref())
    })
}
