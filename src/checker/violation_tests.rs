use std::path::Path;

use super::*;

#[test]
fn category_names_parse_back() {
    for category in Category::STYLE.iter().chain(Category::ERROR_CODES.iter()) {
        assert_eq!(category.name().parse::<Category>().unwrap(), *category);
    }
}

#[test]
fn unknown_category_is_rejected() {
    let err = "curly-braces".parse::<Category>().unwrap_err();
    assert!(err.contains("curly-braces"));
}

#[test]
fn tabs_and_namespace_comments_are_not_excludable() {
    assert!(!Category::Tab.is_excludable());
    assert!(!Category::NamespaceComment.is_excludable());
    assert!(!Category::ConflictMarker.is_excludable());
    assert!(Category::DoubleWhitespace.is_excludable());
    assert!(Category::BlankRun.is_excludable());
    assert!(Category::BracePlacement.is_excludable());
    assert!(Category::PaddedParen.is_excludable());
}

#[test]
fn error_code_categories_are_not_style() {
    for category in Category::ERROR_CODES {
        assert!(category.is_error_code());
        assert!(!category.is_style());
    }
    for category in Category::STYLE {
        assert!(category.is_style());
    }
}

#[test]
fn category_serializes_as_kebab_case() {
    let json = serde_json::to_string(&Category::ControlParenSpace).unwrap();
    assert_eq!(json, "\"control-paren-space\"");
}

#[test]
fn violation_display_is_path_line_category_message() {
    let v = Violation::with_default_message(Path::new("src/A.cpp"), 12, Category::Tab);
    assert_eq!(v.to_string(), "src/A.cpp:12: tab: tab character");
}

#[test]
fn report_order_sorts_by_path_then_line() {
    let mut violations = vec![
        Violation::with_default_message(Path::new("src/b.cpp"), 1, Category::Tab),
        Violation::with_default_message(Path::new("src/a.cpp"), 10, Category::Tab),
        Violation::with_default_message(Path::new("src/a.cpp"), 2, Category::TrailingWhitespace),
        Violation::with_default_message(Path::new("src/a.cpp"), 2, Category::BracePlacement),
    ];
    violations.sort_by(Violation::report_order);

    let keys: Vec<_> = violations
        .iter()
        .map(|v| (v.path.display().to_string(), v.line, v.category))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("src/a.cpp".to_string(), 2, Category::BracePlacement),
            ("src/a.cpp".to_string(), 2, Category::TrailingWhitespace),
            ("src/a.cpp".to_string(), 10, Category::Tab),
            ("src/b.cpp".to_string(), 1, Category::Tab),
        ]
    );
}
