use super::*;
use pretty_assertions::assert_eq;

#[test]
fn empty_configuration() {
    let keys = AllowedKeys::build(Vec::<String>::new());
    assert!(keys.is_empty());
    assert!(!keys.contains(""));
}

#[test]
fn repeated_values_union() {
    let keys = AllowedKeys::build(["json", "binary"]);
    assert_eq!(keys.len(), 2);
    assert!(keys.contains("json"));
    assert!(keys.contains("binary"));
    assert!(!keys.contains("xml"));
}

#[test]
fn comma_joined_values_split() {
    let keys = AllowedKeys::build(["binary,json", "xml"]);
    assert_eq!(keys.iter().collect::<Vec<_>>(), vec!["binary", "json", "xml"]);
}

#[test]
fn empty_tokens_dropped() {
    let keys = AllowedKeys::build([",json", "", "yaml,,", ","]);
    assert_eq!(keys.iter().collect::<Vec<_>>(), vec!["json", "yaml"]);
    assert!(!keys.contains(""));
}

#[test]
fn keys_are_verbatim() {
    let keys = AllowedKeys::build(["json\t", "json ", "JSON"]);
    assert!(keys.contains("json\t"));
    assert!(keys.contains("json "));
    assert!(keys.contains("JSON"));
    assert!(!keys.contains("json"));
}

#[test]
fn duplicates_collapse() {
    let keys: AllowedKeys = ["json", "json,json"].into_iter().collect();
    assert_eq!(keys.len(), 1);
}

#[test]
fn extend_while_building() {
    let mut keys = AllowedKeys::new();
    keys.extend(["json"]);
    keys.add_value("xml,yaml");
    keys.extend(vec![String::from("toml")]);
    assert_eq!(
        keys.iter().collect::<Vec<_>>(),
        vec!["json", "toml", "xml", "yaml"]
    );
}
