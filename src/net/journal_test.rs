use super::*;

#[test]
fn entry_endpoint_formats_expected_path() {
    assert_eq!(entry_endpoint(42), "/api/journals/42");
}
