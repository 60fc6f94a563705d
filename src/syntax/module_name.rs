//! Module-name decomposition and ordering.

use std::cmp::Ordering;

use smol_str::SmolStr;

/// The (prefix, trailing-name) decomposition of a dotted module name.
///
/// `prefix` is present only when the name has at least two segments:
/// `Foo.Bar.Baz` decomposes into `{ name: "Baz", prefix: Some("Foo.Bar") }`,
/// while `Foo` decomposes into `{ name: "Foo", prefix: None }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleParts {
    pub name: SmolStr,
    pub prefix: Option<SmolStr>,
}

/// Split a dotted module name into its trailing segment and optional prefix.
///
/// Total over non-empty strings; no validation of the segments themselves.
pub fn module_parts(module_name: &str) -> ModuleParts {
    match module_name.rsplit_once('.') {
        Some((prefix, name)) => ModuleParts {
            name: SmolStr::new(name),
            prefix: Some(SmolStr::new(prefix)),
        },
        None => ModuleParts {
            name: SmolStr::new(module_name),
            prefix: None,
        },
    }
}

/// Total order over dotted module names, used to keep alias lists sorted.
///
/// Compares segment by segment with ordinary string comparison; when one
/// name is a dotted prefix of the other, the shorter chain sorts first.
/// Bracketed group text (`Abc.Def.{Bin, Boo}`) is treated as an opaque
/// trailing segment and compared as an ordinary string, not by its contents.
pub fn compare_module_names(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    let mut left = a.split('.');
    let mut right = b.split('.');

    loop {
        match (left.next(), right.next()) {
            (Some(x), Some(y)) => match x.cmp(y) {
                Ordering::Equal => continue,
                decided => return decided,
            },
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (None, None) => return Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_parts_with_prefix() {
        let parts = module_parts("Foo.Bar.Baz");
        assert_eq!(parts.name, "Baz");
        assert_eq!(parts.prefix.as_deref(), Some("Foo.Bar"));
    }

    #[test]
    fn test_module_parts_single_segment() {
        let parts = module_parts("Foo");
        assert_eq!(parts.name, "Foo");
        assert_eq!(parts.prefix, None);
    }

    #[test]
    fn test_compare_simple_names() {
        assert_eq!(compare_module_names("Abc", "Def"), Ordering::Less);
        assert_eq!(compare_module_names("Abc", "Abc"), Ordering::Equal);
        assert_eq!(compare_module_names("Def", "Abc"), Ordering::Greater);
    }

    #[test]
    fn test_compare_dotted_names() {
        assert_eq!(compare_module_names("Abc.Def", "Abc.Ghi"), Ordering::Less);
        assert_eq!(compare_module_names("Abc.Def", "Def.Def"), Ordering::Less);
    }

    #[test]
    fn test_shorter_chain_sorts_first() {
        assert_eq!(compare_module_names("Abc", "AbcDef"), Ordering::Less);
        assert_eq!(compare_module_names("Abc", "Abc.Def"), Ordering::Less);
        assert_eq!(compare_module_names("Abc.Def.Ghi", "Abc.Def"), Ordering::Greater);
    }

    #[test]
    fn test_bracket_group_is_opaque_segment() {
        assert_eq!(
            compare_module_names("Abc.Def.{Bin, Boo}", "Abc.Abc"),
            Ordering::Greater
        );
        assert_eq!(
            compare_module_names("Abc.Def.{Bin, Boo}", "Abc.Abc.{Baz, Foo}"),
            Ordering::Greater
        );
        assert_eq!(
            compare_module_names("Abc.Def.{Bin, Boo}", "Abc.Def"),
            Ordering::Greater
        );
    }

    #[test]
    fn test_antisymmetry() {
        let names = ["Abc", "Abc.Def", "Abc.Def.Ghi", "Def", "Abc.{Bar, Baz}"];
        for a in names {
            for b in names {
                assert_eq!(
                    compare_module_names(a, b),
                    compare_module_names(b, a).reverse(),
                    "antisymmetry failed for {a} / {b}"
                );
            }
        }
    }
}
