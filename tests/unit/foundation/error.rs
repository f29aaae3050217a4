use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PapillonError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        PapillonError::sampling("x")
            .to_string()
            .contains("sampling error:")
    );
    assert!(
        PapillonError::dependency_unavailable("three")
            .to_string()
            .contains("dependency unavailable: three")
    );
    assert!(
        PapillonError::manifest("x")
            .to_string()
            .contains("manifest error:")
    );
    assert!(
        PapillonError::missing_element("canvas")
            .to_string()
            .contains("missing element: canvas")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PapillonError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
