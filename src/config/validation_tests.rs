use super::*;
use crate::checker::Category;

#[test]
fn default_config_is_valid() {
    assert!(validate_config_semantics(&Config::default()).is_ok());
}

#[test]
fn invalid_exclude_path_pattern_is_rejected() {
    let mut config = Config::default();
    config.scan.exclude_path_pattern = "(build".to_string();

    let err = validate_config_semantics(&config).unwrap_err();
    assert!(matches!(err, StyleGuardError::InvalidRegex { ref pattern, .. } if pattern == "(build"));
}

#[test]
fn empty_exclude_path_pattern_is_allowed() {
    let mut config = Config::default();
    config.scan.exclude_path_pattern = String::new();

    assert!(validate_config_semantics(&config).is_ok());
}

#[test]
fn invalid_exclusion_shape_is_rejected() {
    let mut config = Config::default();
    config.style.exclusion_patterns.push("[unclosed".to_string());

    let err = validate_config_semantics(&config).unwrap_err();
    assert!(matches!(err, StyleGuardError::InvalidRegex { .. }));
}

#[test]
fn invalid_exclude_glob_is_rejected() {
    let mut config = Config::default();
    config.scan.exclude.push("[invalid".to_string());

    let err = validate_config_semantics(&config).unwrap_err();
    assert!(matches!(err, StyleGuardError::InvalidPattern { .. }));
}

#[test]
fn error_code_category_cannot_be_disabled_as_style() {
    let mut config = Config::default();
    config.style.disabled.push(Category::UnusedErrorCode);

    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("unused-error-code"));
}

#[test]
fn style_categories_can_be_disabled() {
    let mut config = Config::default();
    config.style.disabled = vec![Category::DoubleWhitespace, Category::PragmaOnce];

    assert!(validate_config_semantics(&config).is_ok());
}

#[test]
fn dotted_extension_is_rejected() {
    let mut config = Config::default();
    config.scan.extensions.push(".cpp".to_string());

    let err = validate_config_semantics(&config).unwrap_err();
    assert!(matches!(err, StyleGuardError::Config(ref msg) if msg.contains(".cpp")));
}

#[test]
fn empty_explicit_roots_are_rejected() {
    let mut config = Config::default();
    config.scan.roots = Some(Vec::new());

    assert!(validate_config_semantics(&config).is_err());
}
