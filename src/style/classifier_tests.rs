use super::*;

fn classify(line: &str) -> Vec<Category> {
    LineClassifier::new().classify(line).into_iter().collect()
}

#[test]
fn clean_lines_have_no_categories() {
    assert!(classify("int main()").is_empty());
    assert!(classify("{").is_empty());
    assert!(classify("    return 0;").is_empty());
    assert!(classify("        if (x)").is_empty());
    assert!(classify("").is_empty());
}

#[test]
fn brace_after_control_header() {
    assert_eq!(classify("    if (x) {"), vec![Category::BracePlacement]);
    assert_eq!(classify("    while (running) {"), vec![Category::BracePlacement]);
    assert_eq!(classify("} else {"), vec![Category::BracePlacement]);
}

#[test]
fn brace_after_type_header() {
    assert_eq!(classify("class Foo {"), vec![Category::BracePlacement]);
    assert_eq!(classify("struct Bar : public Base {"), vec![Category::BracePlacement]);
    assert_eq!(classify("namespace DB {"), vec![Category::BracePlacement]);
    assert_eq!(classify("enum class Kind {"), vec![Category::BracePlacement]);
}

#[test]
fn brace_after_function_signature() {
    assert_eq!(classify("void f() {"), vec![Category::BracePlacement]);
    assert_eq!(classify("    size_t size() const {"), vec![Category::BracePlacement]);
    assert_eq!(
        classify("    String getName() const override {"),
        vec![Category::BracePlacement]
    );
}

#[test]
fn brace_initializer_is_not_a_block() {
    assert!(classify("    std::vector<int> values{").is_empty());
    assert!(classify("    Settings settings = {").is_empty());
}

#[test]
fn keyword_inside_identifier_does_not_fire_brace_rule() {
    assert!(classify("    auto information = Information{").is_empty());
}

#[test]
fn trailing_whitespace() {
    assert_eq!(classify("int x; "), vec![Category::TrailingWhitespace]);
    assert_eq!(classify("int x;\r"), vec![Category::TrailingWhitespace]);
}

#[test]
fn trailing_tab_reports_tab_and_trailing_whitespace() {
    assert_eq!(
        classify("int x;\t"),
        vec![Category::TrailingWhitespace, Category::Tab]
    );
}

#[test]
fn indentation_not_multiple_of_four() {
    assert_eq!(classify("  return 0;"), vec![Category::Indentation]);
    assert_eq!(classify(" value = 1;"), vec![Category::Indentation]);
    assert_eq!(classify("   yy = 2;"), vec![Category::Indentation]);
}

#[test]
fn block_comment_continuation_is_not_misindented() {
    assert!(classify(" * Returns the value.").is_empty());
    assert!(classify(" */").is_empty());
}

#[test]
fn indentation_needs_two_visible_characters() {
    assert!(classify(" }").is_empty());
}

#[test]
fn tab_anywhere() {
    assert_eq!(classify("\tint x;"), vec![Category::Tab]);
    assert_eq!(classify("int\tx;"), vec![Category::Tab]);
}

#[test]
fn missing_space_before_control_paren() {
    assert_eq!(classify("    if(x)"), vec![Category::ControlParenSpace]);
    assert_eq!(classify("    else if(x)"), vec![Category::ControlParenSpace]);
    assert_eq!(classify("    if constexpr(x)"), vec![Category::ControlParenSpace]);
    assert_eq!(classify("    for(auto & x : xs)"), vec![Category::ControlParenSpace]);
    assert_eq!(classify("    while(true)"), vec![Category::ControlParenSpace]);
    assert_eq!(classify("    catch(...)"), vec![Category::ControlParenSpace]);
    assert_eq!(classify("    switch(kind)"), vec![Category::ControlParenSpace]);
}

#[test]
fn function_call_named_like_keyword_suffix_is_fine() {
    assert!(classify("    verify(x);").is_empty());
    assert!(classify("    format(x);").is_empty());
}

#[test]
fn compact_if_with_brace_fires_two_categories() {
    assert_eq!(
        classify("if(x){"),
        vec![Category::BracePlacement, Category::ControlParenSpace]
    );
}

#[test]
fn padded_parentheses() {
    assert_eq!(classify("    f( x);"), vec![Category::PaddedParen]);
    assert_eq!(classify("    f(x );"), vec![Category::PaddedParen]);
}

#[test]
fn padded_paren_ignores_line_continuation() {
    assert!(classify("    f( \\").is_empty());
}

#[test]
fn namespace_end_comment() {
    assert_eq!(classify("} // namespace DB"), vec![Category::NamespaceComment]);
    assert_eq!(classify("}   /// namespace"), vec![Category::NamespaceComment]);
    assert!(classify("}").is_empty());
}

#[test]
fn conflict_markers() {
    assert_eq!(classify("<<<<<<< HEAD"), vec![Category::ConflictMarker]);
    assert_eq!(classify("======="), vec![Category::ConflictMarker]);
    assert_eq!(classify(">>>>>>> feature"), vec![Category::ConflictMarker]);
    assert!(classify("    x <<= 1;").is_empty());
}

#[test]
fn disabled_categories_are_not_reported() {
    let classifier = LineClassifier::without(&[Category::BracePlacement]);
    let result: Vec<_> = classifier.classify("if(x){").into_iter().collect();
    assert_eq!(result, vec![Category::ControlParenSpace]);
    assert!(classifier.classify("class A {").is_empty());
}

#[test]
fn pattern_predicate_rejects_invalid_regex() {
    let result = PatternPredicate::new(Category::Tab, "(");
    assert!(matches!(result, Err(StyleGuardError::InvalidRegex { .. })));
}

#[test]
fn pattern_predicate_evaluates_to_its_category() {
    let predicate = PatternPredicate::new(Category::PaddedParen, r"\( ").unwrap();
    assert_eq!(predicate.evaluate("f( x)"), Some(Category::PaddedParen));
    assert_eq!(predicate.evaluate("f(x)"), None);
}
