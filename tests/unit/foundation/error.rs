use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SupernovaError::config("x")
            .to_string()
            .contains("config error:")
    );
    assert!(
        SupernovaError::script("x")
            .to_string()
            .contains("script error:")
    );
    assert!(
        SupernovaError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        SupernovaError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: SupernovaError = serde_json::from_str::<u32>("not json").unwrap_err().into();
    assert!(matches!(err, SupernovaError::Serde(_)));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SupernovaError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
