use super::*;

fn files(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn parse_preserves_document_order() {
    let m = Manifest::from_json(r#"{"zeta": ["z1.jpg"], "alpha": ["a1.jpg"], "mid": []}"#)
        .unwrap();
    let names: Vec<&str> = m.categories().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    assert_eq!(m.category("alpha").unwrap().files, files(&["a1.jpg"]));
}

#[test]
fn repeated_key_replaces_in_place() {
    let m = Manifest::from_json(r#"{"a": ["x.jpg"], "b": ["y.jpg"], "a": ["z.jpg"]}"#).unwrap();
    assert_eq!(m.categories().len(), 2);
    assert_eq!(m.categories()[0].files, files(&["z.jpg"]));
}

#[test]
fn malformed_manifests_are_manifest_errors() {
    for bad in ["[]", r#"{"a": "x.jpg"}"#, "{", r#"{"a": [1]}"#] {
        let err = Manifest::from_json(bad).unwrap_err();
        assert!(matches!(err, PapillonError::Manifest(_)), "{bad}");
    }
}

#[test]
fn preview_prefers_digit_one_suffix() {
    assert_eq!(preview_file(&files(&["a1.jpg", "a2.jpg"])), Some("a1.jpg"));
    assert_eq!(preview_file(&files(&["b.mp4", "b3.png", "b1.jpeg"])), Some("b1.jpeg"));
    assert_eq!(preview_file(&files(&["c2.png", "c3.png"])), Some("c2.png"));
    assert_eq!(preview_file(&[]), None);
}

#[test]
fn preview_name_rule() {
    assert!(is_preview_name("x1.jpg"));
    assert!(is_preview_name("x11.webp"));
    assert!(is_preview_name("dir/x1.JPEG"));
    assert!(!is_preview_name("x1.js"));
    assert!(!is_preview_name("x1.tiffs"));
    assert!(!is_preview_name("x1.mp4"));
    assert!(!is_preview_name("x1"));
    assert!(!is_preview_name("x2.jpg"));
}

#[test]
fn media_kind_by_extension() {
    assert_eq!(MediaKind::of("clip.mp4"), MediaKind::Video);
    assert_eq!(MediaKind::of("clip.webm"), MediaKind::Video);
    assert_eq!(MediaKind::of("pic.jpg"), MediaKind::Image);
}

#[test]
fn rel_paths_normalize() {
    assert_eq!(normalize_rel_path("./a//b\\c.jpg").unwrap(), "a/b/c.jpg");
    assert!(normalize_rel_path("/abs.jpg").is_err());
    assert!(normalize_rel_path("../up.jpg").is_err());
    assert!(normalize_rel_path("./").is_err());
}

#[test]
fn urls_resolve_against_base() {
    assert_eq!(resolve_url("https://cdn/", "a/1.jpg"), "https://cdn/a/1.jpg");
    assert_eq!(resolve_url("https://cdn/", "https://x/y.jpg"), "https://x/y.jpg");
}
