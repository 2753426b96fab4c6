use typedesc_core::{
    DefaultParser, Descriptor, ParseDescriptor, Parser,
    parser::premade::DefaultCharClassifier,
};

use typedesc_shared_tests::suites::{test_suite0, test_suite1};


#[test]
fn suite0_default_parser() {
    test_suite0(&DefaultParser::default());
}

#[test]
fn suite0_as_trait_object() {
    let p: &dyn ParseDescriptor<DescriptorRef = Descriptor> =
        &Parser { classifier: DefaultCharClassifier };
    test_suite0(p);
}

#[test]
fn suite1_custom_classifier() {
    test_suite1(|classifier| Parser { classifier });
}
