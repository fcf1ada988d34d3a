use super::*;

#[test]
fn default_disables_everything() {
    let caps = Capabilities::default();
    assert!(caps.is_disabled(Capability::ExportUsers));
    assert!(caps.is_disabled(Capability::SystemConfig));
    assert!(caps.is_disabled(Capability::Payments));
    assert_eq!(caps, Capabilities::none());
}

#[test]
fn with_enables_only_the_named_capability() {
    let caps = Capabilities::none().with(Capability::ExportUsers);
    assert!(caps.is_enabled(Capability::ExportUsers));
    assert!(caps.is_disabled(Capability::ImportUsers));
}

#[test]
fn without_reverts_with() {
    let caps = Capabilities::none()
        .with(Capability::Reports)
        .without(Capability::Reports);
    assert!(caps.is_disabled(Capability::Reports));
}

#[test]
fn collects_from_iterator() {
    let caps: Capabilities = [Capability::Security, Capability::Templates].into_iter().collect();
    assert!(caps.is_enabled(Capability::Security));
    assert!(caps.is_enabled(Capability::Templates));
    assert!(caps.is_disabled(Capability::Workflows));
}
