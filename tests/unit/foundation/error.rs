use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FlapError::resource_unavailable("x")
            .to_string()
            .contains("resource unavailable:")
    );
    assert!(
        FlapError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        FlapError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        FlapError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert_eq!(FlapError::EngineNotReady.to_string(), "engine not ready");
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FlapError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: FlapError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, FlapError::Serde(_)));
}
