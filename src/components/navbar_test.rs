use super::*;

#[test]
fn greeting_uses_name() {
    assert_eq!(greeting(Some("Asha")), "Hello, Asha!");
}

#[test]
fn greeting_without_name() {
    assert_eq!(greeting(None), "Hello!");
    assert_eq!(greeting(Some("  ")), "Hello!");
}
