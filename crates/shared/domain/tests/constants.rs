use slref_domain::constants::{DEFAULT_HOST, DEFAULT_LAYERS_DIR, DEFAULT_PORT, LOCALDEV};

#[test]
fn constants_match_runtime_defaults() {
    assert_eq!(DEFAULT_PORT, 3000);
    assert_eq!(DEFAULT_HOST, "0.0.0.0");
    assert_eq!(LOCALDEV, "localdev");
    assert_eq!(DEFAULT_LAYERS_DIR, "/opt");
}
