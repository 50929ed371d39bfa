use okpath::{Accessor, Options};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn sample() -> Value {
    json!({
        "a": { "b": { "c": 42 } },
        "zerobar": 0,
        "emptybar": "",
        "falsebar": false,
        "nullbar": null,
        "arraybar": [],
        "objectbar": {}
    })
}

#[test]
fn test_get_nested_value() {
    let ctx = sample();
    assert_eq!(okpath::get(&ctx, "a.b.c"), Some(&json!(42)));
    assert_eq!(okpath::get(&ctx, "a.b"), Some(&json!({ "c": 42 })));
}

#[test]
fn test_get_missing_intermediate_is_undefined() {
    let ctx = sample();
    assert_eq!(okpath::get(&ctx, "x.y.z"), None);
    assert_eq!(okpath::get(&ctx, "nullbar.y"), None);
    assert_eq!(okpath::get(&ctx, "a.b.c.d"), None);
    assert_eq!(okpath::get(&ctx, "arraybar.0"), None);
}

#[test]
fn test_get_absent_context() {
    assert_eq!(okpath::get(&Value::Null, "a"), None);
    assert_eq!(okpath::get_or(&Value::Null, "a", Some(&json!(1))), None);
}

#[test]
fn test_get_returns_stored_null() {
    let ctx = sample();
    assert_eq!(okpath::get(&ctx, "nullbar"), Some(&Value::Null));
}

#[test]
fn test_get_or_uses_fallback_when_absent() {
    let ctx = sample();
    let fallback = json!("fallback");
    assert_eq!(okpath::get_or(&ctx, "a.b.x", Some(&fallback)), Some(&fallback));
    assert_eq!(okpath::get_or(&ctx, "nullbar", Some(&fallback)), Some(&fallback));
    // an explicit undefined fallback hides a stored null
    assert_eq!(okpath::get_or(&ctx, "nullbar", None), None);
}

#[test]
fn test_get_or_prefers_falsy_present_values() {
    let ctx = sample();
    let fallback = json!("fallback");
    for (path, expected) in [
        ("zerobar", json!(0)),
        ("emptybar", json!("")),
        ("falsebar", json!(false)),
        ("arraybar", json!([])),
        ("objectbar", json!({})),
    ] {
        assert_eq!(okpath::get_or(&ctx, path, Some(&fallback)), Some(&expected), "{path}");
    }
}

#[test]
fn test_get_empty_path_reads_empty_key() {
    let ctx = json!({ "": "blank" });
    assert_eq!(okpath::get(&ctx, ""), Some(&json!("blank")));
}

#[test]
fn test_get_with_custom_separator() {
    let ctx = json!({ "service.name": { "version": "0.0.3" } });
    let accessor = Accessor::with_options(Options::with_separator('/'));
    assert_eq!(accessor.get(&ctx, "service.name/version"), Some(&json!("0.0.3")));
    assert_eq!(okpath::get(&ctx, "service.name/version"), None);
}

#[test]
fn test_get_does_not_mutate() {
    let ctx = sample();
    let before = ctx.clone();
    let _ = okpath::get(&ctx, "new.deep.path");
    assert_eq!(ctx, before);
}
