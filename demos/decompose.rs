//! Decompose the descriptors given as arguments, or some samples if none are
//! given, all the way down by parsing each part again, and print the tree.
//!
//! `cargo run --example decompose -- '?Map<string, (int|float)[]>|null'`

use std::env;

use typedesc::{Descriptor, Error, Kind, Parameter};

/// Print one level, then recurse into the parts that are themselves
/// descriptors.  Degrouping is used for the parts so that redundant
/// parentheses do not add levels.
fn print_tree(text: &str, depth: usize) -> Result<(), Error> {
    let d = typedesc::parse_degrouped(text)?;
    let indent = "  ".repeat(depth);
    println!("{}{} {}", indent, d.kind(), describe(&d));
    let parts = match d.kind() {
        Kind::Generic => d.generic_args(),
        _ => d.names(),
    };
    for part in parts {
        print_tree(part, depth + 1)?;
    }
    Ok(())
}

fn describe(d: &Descriptor) -> String {
    match d.kind() {
        Kind::Generic => {
            let mut s = d.name().to_owned();
            if !d.flags().is_empty() {
                s = format!("{} flags={:?}", s, d.flags());
            }
            for param in d.parameters() {
                s = match param {
                    Parameter::Positional(value) => format!("{} {:?}", s, value),
                    Parameter::Named { key, value } => format!("{} {}={:?}", s, key, value),
                };
            }
            s
        },
        Kind::Array => match d.array_size() {
            Some(size) => format!("of {}", size),
            None => "unsized".to_owned(),
        },
        _ => format!("of {}", d.names().len()),
    }
}

fn main() {
    let mut args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        args = [r#"?\App\Collection(max:10, "a b")<int|string>"#,
                "((A&B)|null)[3]",
                "u:+list<map<string,int[]>>"]
            .iter().map(|s| (*s).to_owned()).collect();
    }
    for text in &args {
        println!("{}", text);
        if let Err(e) = print_tree(text, 1) {
            println!("  {}", e);
        }
    }
    for bad in ["", "int(", "int||float", "int(max:1,max:2)"] {
        match typedesc::parse_with(bad, false, typedesc::ErrorMode::ErrorValue) {
            Ok(parsed) => println!("{:?}", parsed.error().map(ToString::to_string)),
            Err(e) => println!("{}", e),
        }
    }
}
