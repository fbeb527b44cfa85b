use masthead_core::*;
use tempfile::TempDir;

fn write_config(root: &TempDir, body: &str) {
    let dir = root.path().join(".masthead");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), body).unwrap();
}

#[test]
fn test_load_limits_from_file() {
    let tmp = TempDir::new().unwrap();
    write_config(
        &tmp,
        r#"
[limits.magazine_name]
min = 4
max = 8
"#,
    );

    let config = MastheadConfig::load(tmp.path()).unwrap();
    assert_eq!(config.limits.magazine_name, LengthLimit::new(4, 8));
    assert_eq!(config.limits.article_title, LengthLimit::new(5, 50));
}

#[test]
fn test_load_rejects_inverted_limits() {
    let tmp = TempDir::new().unwrap();
    write_config(
        &tmp,
        r#"
[limits.article_title]
min = 40
max = 10
"#,
    );

    assert!(MastheadConfig::load(tmp.path()).is_err());
}

#[test]
fn test_press_uses_configured_limits() {
    let mut config = MastheadConfig::default();
    config.limits.magazine_name = LengthLimit::new(4, 8);
    config.limits.article_title = LengthLimit::new(6, 12);
    let mut press = Press::with_config(config).unwrap();

    assert!(press.create_magazine("abc", "Misc").is_err());
    let zine = press.create_magazine("Zines", "Misc").unwrap();
    let ama = press.create_author("Ama").unwrap();
    assert!(press.create_article(ama, zine, "Fives").is_err());
    assert!(press.create_article(ama, zine, "Short one").is_ok());
    assert!(press.create_article(ama, zine, "Far too long title").is_err());

    let magazine = press.magazine_mut(zine).unwrap();
    magazine.set_name("Tech Weekly");
    assert_eq!(magazine.name(), "Zines");
    magazine.set_name("Zinester");
    assert_eq!(magazine.name(), "Zinester");
    assert_eq!(press.config().limits.article_title.max, 12);
}

#[test]
fn test_press_rejects_limits_admitting_empty_strings() {
    let mut config = MastheadConfig::default();
    config.limits.magazine_name = LengthLimit::new(0, 16);
    assert!(Press::with_config(config).is_err());

    let mut config = MastheadConfig::default();
    config.limits.article_title = LengthLimit::new(0, 50);
    assert!(Press::with_config(config).is_err());
}

#[test]
fn test_press_rejects_limits_wider_than_defaults() {
    let mut config = MastheadConfig::default();
    config.limits.magazine_name = LengthLimit::new(2, 40);
    assert!(Press::with_config(config).is_err());

    let mut config = MastheadConfig::default();
    config.limits.article_title = LengthLimit::new(1, 50);
    assert!(Press::with_config(config).is_err());
}

#[test]
fn test_load_rejects_loosened_limits_from_file() {
    let tmp = TempDir::new().unwrap();
    write_config(
        &tmp,
        r#"
[limits.magazine_name]
min = 1
max = 16
"#,
    );

    assert!(MastheadConfig::load(tmp.path()).is_err());
}
