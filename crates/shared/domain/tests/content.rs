use folio_domain::content::{BUNDLED_PORTFOLIO, ContentBundle};
use folio_domain::section::SectionKind;
use serde_json::{Value, json};

#[test]
fn bundled_portfolio_has_every_section() {
    let raw: Value = serde_json::from_str(BUNDLED_PORTFOLIO).expect("bundled json");
    let map = raw.as_object().expect("object");
    for kind in SectionKind::ALL {
        assert!(map.contains_key(kind.as_str()), "missing {kind}");
    }
    assert_eq!(map.len(), SectionKind::ALL.len());
}

#[test]
fn bundled_portfolio_decodes_into_typed_sections() {
    let bundle: ContentBundle = serde_json::from_str(BUNDLED_PORTFOLIO).expect("bundle");

    let about = bundle.about.expect("about");
    assert_eq!(about.name, "Kalpick Sharma");
    assert!(about.avatar.is_present());
    assert_eq!(bundle.projects.map(|p| p.len()), Some(3));
    assert_eq!(bundle.links.as_ref().and_then(|l| l.first()).map(|l| l.icon.as_str()), Some("globe"));
    assert_eq!(bundle.skills.map(|s| s.all().count()), Some(18));
}

#[test]
fn partial_bundles_tolerate_missing_and_unknown_fields() {
    let bundle: ContentBundle = serde_json::from_value(json!({
        "about": { "name": "Ada", "extra": true },
        "links": [{ "label": "Site" }],
        "unknown": 1
    }))
    .expect("partial bundle");

    let about = bundle.about.expect("about");
    assert_eq!(about.name, "Ada");
    assert!(about.role.is_empty());
    assert!(!about.avatar.is_present());
    assert!(bundle.projects.is_none());
    assert_eq!(bundle.links.map(|l| l[0].href.clone()), Some(String::new()));
}
