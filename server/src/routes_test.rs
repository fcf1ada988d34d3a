use super::*;

#[tokio::test]
async fn healthz_reports_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn pkg_dir_nests_under_site_root() {
    assert_eq!(pkg_dir(Path::new("target/site"), "pkg"), PathBuf::from("target/site/pkg"));
}

#[test]
fn config_error_names_its_source() {
    let err = LeptosConfigError("missing output name".into());
    assert_eq!(err.to_string(), "leptos configuration: missing output name");
}
