//! Suites of tests applied across multiple crates

use pretty_assertions::assert_eq;
use std::borrow::Borrow;

use typedesc_core::{Descriptor, Reason::*};

use super::{
    Error, ParseDescriptor, parse, plain, generic, array, group, union,
    intersection, pos, kv, check_parameter_accessors,
    utils::CustomCharClassifier,
};


/// Basic test suite that checks every form of the notation, the order of
/// precedence between them, and the rejection of malformed input, using the
/// default character classes.
pub fn test_suite0<P>(p: &P)
    where P: ParseDescriptor + ?Sized,
{
    macro_rules! test {
        (degroup $input:expr => $expected:expr)
            =>
        {assert_eq!(parse(p, $input, true), Ok($expected), "input: {:?}", $input);};

        ($input:expr =>! $reason:expr)
            =>
        {assert_eq!(parse(p, $input, false), Err(Error::new($input, $reason)));
         assert_eq!(parse(p, $input, true), Err(Error::new($input, $reason)));};

        ($input:expr => $expected:expr)
            =>
        {assert_eq!(parse(p, $input, false), Ok($expected), "input: {:?}", $input);};
    }

    // Plain names
    test!("int" => plain("int"));
    test!("  int\t" => plain("int"));
    test!("_x1" => plain("_x1"));
    test!(r"\Foo" => plain(r"\Foo"));
    test!(r"Foo\Bar\Baz" => plain(r"Foo\Bar\Baz"));
    test!(r"\Foo\Bar" => plain(r"\Foo\Bar"));
    test!("foo.bar.Baz" => plain("foo.bar.Baz"));
    test!(r"foo.bar\Baz" => plain(r"foo.bar\Baz"));

    // Flags
    test!("u:?*+int" => generic("u?*+", &["int"], &[]));
    test!("+int" => generic("+", &["int"], &[]));
    test!("?int" => generic("?", &["int"], &[]));
    test!("u:int" => generic("u", &["int"], &[]));
    test!("mode_2:int" => generic("mode_2", &["int"], &[]));
    test!("? * int" => generic("?*", &["int"], &[]));
    test!("u : -int" => generic("u-", &["int"], &[]));
    test!("=@^`~!#$%int" => generic("=@^`~!#$%", &["int"], &[]));
    test!(r"?\Foo" => generic("?", &[r"\Foo"], &[]));

    // Parameters
    test!("int()" => plain("int"));
    test!("int( )" => plain("int"));
    test!("int(0)" => generic("", &["int"], &[pos("0")]));
    test!("int(min:0)" => generic("", &["int"], &[kv("min", "0")]));
    test!(r#"int("\"foo bar\"", min:0, max:123)"#
          => generic("", &["int"], &[pos(r#""foo bar""#), kv("min", "0"), kv("max", "123")]));
    test!(r#"string( "a,b" , sep : "," , 3 )"#
          => generic("", &["string"], &[pos("a,b"), kv("sep", ","), pos("3")]));
    test!(r#"re("\\d+\)")"# => generic("", &["re"], &[pos(r"\d+)")]));
    test!("int (max:3)" => generic("", &["int"], &[kv("max", "3")]));

    // Generic arguments
    test!("array<int>" => plain("array").with_names(&["array", "int"]));
    test!("array<int,array<Foo<string>,Bar>>"
          => plain("array").with_names(&["array", "int", "array<Foo<string>,Bar>"]));
    test!("map< string , int|null >"
          => plain("map").with_names(&["map", "string", "int|null"]));
    test!("Foo<>" => plain("Foo"));
    test!("Foo<(a&b)[], c(x:\"<\")>"
          => plain("Foo").with_names(&["Foo", "(a&b)[]", "c(x:\"<\")"]));
    test!("?list(max:3)<int>"
          => generic("?", &["list", "int"], &[kv("max", "3")]));
    test!("u:+\\A\\B(1, k:v)<X, Y>"
          => generic("u+", &[r"\A\B", "X", "Y"], &[pos("1"), kv("k", "v")]));

    // Arrays
    test!("int[]" => array("int", None));
    test!("int[3]" => array("int", Some("3")));
    test!("int[ 3 ]" => array("int", Some("3")));
    test!("int[123][456]" => array("int[123]", Some("456")));
    test!("int [] " => array("int", None));
    test!("Foo<int[2]>[]" => array("Foo<int[2]>", None));
    test!("?int[]" => array("?int", None));
    test!("(int|float)[2]" => array("(int|float)", Some("2")));
    test!("(int)[]" => array("(int)", None));

    // Groups
    test!("(int)" => group("int"));
    test!("( int )" => group("int"));
    test!("((int))" => group("(int)"));
    test!("(int|float)" => group("int|float"));
    test!("(a(\")\"))" => group("a(\")\")"));
    test!("(a;b)" => group("a;b"));
    test!(degroup "(int)" => plain("int"));
    test!(degroup "((int))" => plain("int"));
    test!(degroup "((int|float|string))" => union(&["int", "float", "string"]));
    test!(degroup "(int)[]" => array("(int)", None));
    test!(degroup "int" => plain("int"));
    assert_eq!(parse(p, "((a;b))", true), Err(Error::new("((a;b))", UnexpectedChar(';'))));

    // Unions and intersections
    test!("int|float" => union(&["int", "float"]));
    test!(" int | float | null " => union(&["int", "float", "null"]));
    test!("int&float|string" => union(&["int&float", "string"]));
    test!("int|float&string" => union(&["int", "float&string"]));
    test!("int&float&string" => intersection(&["int", "float", "string"]));
    test!("(a|b)&c" => intersection(&["(a|b)", "c"]));
    test!("%a&b" => intersection(&["%a", "b"]));
    test!("(a|b)|(c&d)" => union(&["(a|b)", "(c&d)"]));
    test!("A<B|C>|D" => union(&["A<B|C>", "D"]));
    test!("f(\"|\")|g" => union(&["f(\"|\")", "g"]));
    test!("int[]|null" => union(&["int[]", "null"]));
    test!(degroup "(a|b)|c" => union(&["(a|b)", "c"]));

    // Malformed
    test!("" =>! Empty);
    test!("   " =>! Empty);
    test!("int(" =>! Unbalanced);
    test!("int)" =>! Unbalanced);
    test!("(int" =>! Unbalanced);
    test!("Foo<int" =>! Unbalanced);
    test!("Foo<int)" =>! Unbalanced);
    test!("int[3" =>! Unbalanced);
    test!(r#"int(""#  =>! UnterminatedQuote);
    test!("int||float" =>! EmptyOperand);
    test!("|int" =>! EmptyOperand);
    test!("int&" =>! EmptyOperand);
    test!("int&&float" =>! EmptyOperand);
    test!("()" =>! EmptyOperand);
    test!("Foo<int,,float>" =>! EmptyOperand);
    test!("int(1,,2)" =>! EmptyOperand);
    test!("int(max:1,max:2)" =>! DuplicateKey);
    test!("int(max:)" =>! EmptyValue);
    test!("int[x]" =>! ArraySize);
    test!("int[1.5]" =>! ArraySize);
    test!("int;" =>! UnexpectedChar(';'));
    test!("int;|float" =>! UnexpectedChar(';'));
    test!("int|float;" =>! UnexpectedChar(';'));
    test!("a&b;c" =>! UnexpectedChar(';'));
    test!(";;[3]" =>! UnexpectedChar(';'));
    test!("a,b" =>! UnexpectedChar(','));
    test!(r#"int|"x""# =>! UnexpectedChar('"'));
    test!("int[99999999999999999999999]" =>! ArraySize);
    test!("int float" =>! TrailingText);
    test!("Foo<int>(1)" =>! TrailingText);
    test!("int(1)(2)" =>! TrailingText);
    test!(r#"int("a"b)"# =>! TrailingText);
    test!("1int" =>! UnexpectedChar('1'));
    test!("[3]" =>! UnexpectedChar('['));
    test!(r"\\Foo" =>! UnexpectedChar('\\'));
    test!("Foo." =>! MissingName);
    test!("?" =>! MissingName);
    test!("u:" =>! MissingName);

    // Repeated calls are value-equal, and failures stay failures.
    for input in ["?Foo(1, k:v)<A|B>", "(a)", "a&b", "int[2]"] {
        for degroup in [false, true] {
            let first = parse(p, input, degroup);
            assert!(first.is_ok());
            assert_eq!(parse(p, input, degroup), first);
        }
        let d = p.parse_descriptor(input, false).unwrap_or_else(|e| panic!("{}", e));
        check_parameter_accessors(Borrow::<Descriptor>::borrow(&d));
    }
    for _ in 0 .. 2 {
        test!("int||float" =>! EmptyOperand);
    }

    // Round-trip on groups
    for inner in ["int", "a|b", "Foo<(x)>", "?T(k:\"v\")[]", "(z)"] {
        let outer = format!("({})", inner);
        test!(&*outer => group(inner));
    }
}


/// Test suite that checks that the character classes are determined by the
/// parser's `CharClassifier`.  The given function must make a parser that uses
/// the given classifier.
pub fn test_suite1<P, F>(make: F)
    where P: ParseDescriptor,
          F: Fn(CustomCharClassifier) -> P,
{
    {
        let p = make(CustomCharClassifier {
            flag_symbols: Some(vec!['?', '&', '.']),
            ..CustomCharClassifier::default()
        });
        assert_eq!(parse(&p, "?.int", false), Ok(generic("?.", &["int"], &[])));
        assert_eq!(parse(&p, "+int", false), Err(Error::new("+int", UnexpectedChar('+'))));
        assert_eq!(parse(&p, "a+b&c", false), Err(Error::new("a+b&c", UnexpectedChar('+'))));
        // `&` is still an operator first.
        assert_eq!(parse(&p, "a&b", false), Ok(intersection(&["a", "b"])));
    }
    {
        let p = make(CustomCharClassifier {
            namespace_separators: Some(vec![':', '/']),
            ..CustomCharClassifier::default()
        });
        assert_eq!(parse(&p, ":a/b:c", false), Ok(plain(":a/b:c")));
        assert_eq!(parse(&p, r"a\b", false), Err(Error::new(r"a\b", UnexpectedChar('\\'))));
        assert_eq!(parse(&p, r"a\b|c", false), Err(Error::new(r"a\b|c", UnexpectedChar('\\'))));
        // A flag word still takes the first `:`.
        assert_eq!(parse(&p, "u:a:b", false), Ok(generic("u", &["a:b"], &[])));
    }
    {
        let p = make(CustomCharClassifier {
            whitespace: Some(vec!['_']),
            ..CustomCharClassifier::default()
        });
        assert_eq!(parse(&p, "__int__", false), Ok(plain("int")));
        assert_eq!(parse(&p, "a_|_b", false), Ok(union(&["a", "b"])));
        assert_eq!(parse(&p, " int", false), Err(Error::new(" int", UnexpectedChar(' '))));
        assert_eq!(parse(&p, "___", false), Err(Error::new("___", Empty)));
    }
}

