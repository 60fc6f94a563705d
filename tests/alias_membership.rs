//! Membership checks: module definitions and existing aliases.

use exalias::{document_already_has_alias, document_defines_module};
use rstest::rstest;

#[rstest]
#[case("FooBar", "defmodule FooBar do\nend\n", true)]
#[case("Foo.Bar.Baz", "defmodule Foo.Bar.Baz do\nend\n", true)]
#[case("Foo.Bar.Baz", "defmodule Foo.Bar.Bin do\nend\n", false)]
#[case("Foo.Bar", "defmodule Foo.Bar.Baz do\nend\n", false)]
fn test_document_defines_module(#[case] name: &str, #[case] text: &str, #[case] expected: bool) {
    assert_eq!(document_defines_module(name, text), expected);
}

#[rstest]
#[case(
    "FooBar",
    "defmodule A do\n  use Hello\n\n  import Other\n\n  alias AndAnother\n  alias FooBar\n  alias Third\nend\n",
    true
)]
#[case("Foo.Bar", "defmodule A do\n  alias Foo.Bar\nend\n", true)]
#[case("Foo.Bar", "defmodule A do\n  alias Foo.{Bar}\nend\n", true)]
#[case("Foo.Bar", "defmodule A do\n  alias Foo.{Bar, Baz}\nend\n", true)]
#[case("Foo.Bar", "defmodule A do\n  alias Foo.{Bin, Bar, Baz}\nend\n", true)]
#[case("Foo.Bar.Baz", "defmodule A do\n  alias Foo.Bar.{Baz, Bin, Bee}\nend\n", true)]
#[case("Foo.Bar", "defmodule A do\n  alias Foo.Baz\nend\n", false)]
#[case("Foo.Bar", "defmodule A do\n  alias Foo.{Bin, Baz}\nend\n", false)]
#[case("Foo.Bar.Bin", "defmodule A do\n  alias Foo.{Bar, Baz}\nend\n", false)]
#[case("Foo.Bar.Baz.Bin", "defmodule A do\n  alias Foo.{Bar, Baz}\nend\n", false)]
fn test_document_already_has_alias(
    #[case] name: &str,
    #[case] text: &str,
    #[case] expected: bool,
) {
    assert_eq!(document_already_has_alias(name, text), expected);
}

#[test]
fn test_single_segment_name_is_never_bracket_aliased() {
    let text = "defmodule A do\n  alias Foo.{Bar, Baz}\nend\n";
    assert!(!document_already_has_alias("Bar", text));
}
