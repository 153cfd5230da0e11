use asyncgen_asyncapi::{Channel, Operation, Schema};
use asyncgen_templates::{is_required, namify, operation_name};
use pretty_assertions::assert_eq;

#[test]
fn namify_reference_cases() {
    let cases = [
        // leading digits removed, trailing kept
        ("0name0", "Name0"),
        // non alphanumerics removed
        ("?#!name", "Name"),
        ("name", "Name"),
        // snake case
        ("eh_oh__ah", "EhOhAh"),
        // acronym at the start, in the middle, at the end
        ("IdTata", "IDTata"),
        ("TotoIdLala", "TotoIDLala"),
        ("TotoId", "TotoID"),
        // same letters as an acronym, but not a whole word
        ("identity", "Identity"),
        ("Identity", "Identity"),
        ("covid", "Covid"),
    ];

    for (i, (raw, expected)) in cases.iter().enumerate() {
        assert_eq!(namify(raw), *expected, "case #{i}: {raw:?}");
    }
}

#[test]
fn separators_and_humps_split_the_same_way() {
    for raw in ["a_b", "a-b", "a!b", "aB", "a b", "a.b"] {
        assert_eq!(namify(raw), "AB", "{raw:?}");
    }
}

#[test]
fn document_names() {
    assert_eq!(namify("user/signedup"), "UserSignedup");
    assert_eq!(namify("user.signed-up"), "UserSignedUp");
    assert_eq!(namify("userSignedUp"), "UserSignedUp");
    assert_eq!(
        namify("smartylighting/streetlights/1/0/event/{streetlightId}/lighting/measured"),
        "SmartylightingStreetlights10EventStreetlightIDLightingMeasured"
    );
    assert_eq!(namify("api_url"), "APIURL");
}

#[test]
fn operation_name_feeds_namify() {
    let channel = Channel::new("user/signedup");
    assert_eq!(namify(operation_name(&channel)), "UserSignedup");

    let channel = Channel::new("user/signedup")
        .with_subscribe(Operation::with_id("consumeUserId"))
        .with_publish(Operation::with_id("produceUser"));
    assert_eq!(namify(operation_name(&channel)), "ConsumeUserID");
}

#[test]
fn is_required_reference_cases() {
    let cases = [
        (Schema::with_required(["field"]), "field", true),
        (Schema::with_required(["another_field"]), "field", false),
    ];

    for (i, (schema, field, expected)) in cases.iter().enumerate() {
        assert_eq!(is_required(schema, field), *expected, "case #{i}");
    }
}
