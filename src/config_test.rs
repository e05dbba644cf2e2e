use super::*;

#[test]
fn empty_object_uses_defaults() {
    let cfg = SiteConfig::from_json("{}").unwrap();
    assert_eq!(cfg, SiteConfig::default());
    assert_eq!(cfg.contact_endpoint, DEFAULT_CONTACT_ENDPOINT);
    assert!(!cfg.lazy_images);
    assert_eq!(cfg.level_filter().unwrap(), log::LevelFilter::Warn);
}

#[test]
fn default_sections_end_with_contact_form() {
    let cfg = SiteConfig::default();
    let ids: Vec<&str> = cfg.sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["about", "projects", "contact"]);
    assert!(cfg.sections.last().unwrap().contact_form);
}

#[test]
fn sections_and_cards_parse() {
    let raw = r#"{
        "title": "Ada Lovelace",
        "contact_endpoint": "https://forms.example.com/f/abc",
        "lazy_images": true,
        "log_level": "debug",
        "sections": [
            {
                "id": "work",
                "label": "Work",
                "cards": [
                    {
                        "title": "Engine",
                        "summary": "Analytical",
                        "description": "Notes on **Bernoulli** numbers.",
                        "media": { "src": "/img/engine.png", "alt": "Engine" }
                    },
                    { "title": "Loom" }
                ]
            }
        ]
    }"#;

    let cfg = SiteConfig::from_json(raw).unwrap();

    assert_eq!(cfg.title, "Ada Lovelace");
    assert_eq!(cfg.contact_endpoint, "https://forms.example.com/f/abc");
    assert!(cfg.lazy_images);
    assert_eq!(cfg.level_filter().unwrap(), log::LevelFilter::Debug);
    assert_eq!(cfg.sections.len(), 1);
    let cards = &cfg.sections[0].cards;
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].media.as_ref().map(|m| m.src.as_str()), Some("/img/engine.png"));
    assert!(cards[1].media.is_none());
    assert!(!cfg.sections[0].contact_form);
}

#[test]
fn malformed_json_is_reported() {
    let err = SiteConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Malformed(_)));
    assert!(err.to_string().starts_with("malformed site config"));
}

#[test]
fn blank_endpoint_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "contact_endpoint": "  " }"#).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyEndpoint));
}

#[test]
fn unknown_log_level_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "log_level": "loud" }"#).unwrap_err();
    assert_eq!(err.to_string(), "unknown log level: loud");
}

#[cfg(not(feature = "csr"))]
#[test]
fn load_outside_browser_returns_defaults() {
    assert_eq!(SiteConfig::load(), SiteConfig::default());
}
