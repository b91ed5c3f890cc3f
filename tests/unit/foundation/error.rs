use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        StudioError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(StudioError::render("x").to_string().contains("render error:"));
    assert!(StudioError::export("x").to_string().contains("export error:"));
    assert!(
        StudioError::asset_load("/nfts/Prey/Face/Smile.png", anyhow::anyhow!("missing"))
            .to_string()
            .contains("asset load error: '/nfts/Prey/Face/Smile.png': missing")
    );
}

#[test]
fn only_asset_loads_are_recoverable() {
    let load = StudioError::asset_load("a.png", std::io::Error::other("gone"));
    assert!(load.is_recoverable());
    assert!(!StudioError::render("x").is_recoverable());
    assert!(!StudioError::validation("x").is_recoverable());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = StudioError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
