use super::*;

#[test]
fn classify_text_roles_by_exact_prefix() {
    assert_eq!(classify(Some("#name")), Semantic::TextField(TextRole::Name));
    assert_eq!(
        classify(Some("#title_main")),
        Semantic::TextField(TextRole::Title)
    );
    assert_eq!(
        classify(Some("#phone_2")),
        Semantic::TextField(TextRole::Phone)
    );
    assert_eq!(
        classify(Some("#website")),
        Semantic::TextField(TextRole::Website)
    );
}

#[test]
fn classify_is_case_sensitive() {
    assert_eq!(classify(Some("#Name")), Semantic::Unmarked);
    assert_eq!(classify(Some("#LOGO")), Semantic::Unmarked);
}

#[test]
fn classify_logo_lock_and_decorative() {
    assert_eq!(classify(Some("#logo")), Semantic::Logo);
    assert_eq!(classify(Some("#logo_frame")), Semantic::Logo);
    assert_eq!(classify(Some("#bg_panel")), Semantic::Locked);
    assert_eq!(classify(Some("#lock_header")), Semantic::Locked);
    assert_eq!(classify(Some("#color_primary_wave")), Semantic::Decorative);
    assert_eq!(classify(Some("#color_secondary")), Semantic::Decorative);
    assert_eq!(classify(Some("#color_accent_blob")), Semantic::Decorative);
}

#[test]
fn classify_unmarked_ids() {
    assert_eq!(classify(None), Semantic::Unmarked);
    assert_eq!(classify(Some("")), Semantic::Unmarked);
    assert_eq!(classify(Some("rect42")), Semantic::Unmarked);
    // Missing sigil means no semantic meaning.
    assert_eq!(classify(Some("name")), Semantic::Unmarked);
}

#[test]
fn background_role_requires_bg_prefix() {
    assert!(is_background_role(Some("#bg")));
    assert!(is_background_role(Some("#bg_panel")));
    assert!(!is_background_role(Some("#lock_header")));
    assert!(!is_background_role(None));
}

#[test]
fn legacy_accent_matches_keywords_only() {
    assert!(is_legacy_accent(Some("#color_accent_phone_dot")));
    assert!(is_legacy_accent(Some("#color_accent_divider")));
    assert!(is_legacy_accent(Some("#color_accent_web_line")));
    assert!(is_legacy_accent(Some("#color_accent_contact3")));
    // Plain accents survive.
    assert!(!is_legacy_accent(Some("#color_accent_blob")));
    assert!(!is_legacy_accent(Some("#color_accent_")));
    // The keyword check only applies under the accent prefix.
    assert!(!is_legacy_accent(Some("#color_primary_divider")));
    assert!(!is_legacy_accent(None));
}

#[test]
fn contact_order_is_fixed() {
    assert_eq!(
        TextRole::CONTACT_ORDER,
        [
            TextRole::Phone,
            TextRole::Email,
            TextRole::Website,
            TextRole::Address
        ]
    );
}

#[test]
fn from_json_parses_a_minimal_document() {
    let doc = r##"{
        "id": "#bg_panel",
        "width": 1050.0,
        "height": 600.0,
        "fill": {"solid": {"r": 255, "g": 255, "b": 255, "a": 255}},
        "kind": {"group": {"children": [
            {"id": "#name", "kind": {"text": {"content": "Acme"}}}
        ]}}
    }"##;
    let node = SceneNode::from_json(doc).unwrap();
    assert_eq!(node.semantic(), Semantic::Locked);
    assert_eq!(node.transform, Affine::IDENTITY);
    let NodeKind::Group { children } = &node.kind else {
        panic!("expected group");
    };
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].text_content(), Some("Acme"));
}

#[test]
fn from_json_rejects_malformed_documents() {
    let err = SceneNode::from_json("{\"kind\": 7}").unwrap_err();
    assert!(err.to_string().starts_with("serialization error:"));
}

#[test]
fn scene_node_roundtrips_through_serde() {
    let node = SceneNode {
        id: Some("#color_primary_wave".into()),
        transform: Affine::translate((40.0, 12.0)),
        width: 100.0,
        height: 50.0,
        fill: Paint::Solid(Rgba8::rgb(10, 20, 30)),
        stroke: Paint::CurrentColor,
        kind: NodeKind::Shape {
            shape: ShapeKind::Ellipse,
        },
    };
    let json = serde_json::to_string(&node).unwrap();
    let back: SceneNode = serde_json::from_str(&json).unwrap();
    assert_eq!(back, node);
}
