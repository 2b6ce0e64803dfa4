//! Integration tests for rule extraction
//!
//! Covers:
//! - Extraction from raw markup (tag matching, attribute lookup, duplicates)
//! - Field name normalization through extraction
//! - Rendering real view files and Maud views before extraction

use form_rules::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::fs;

fn entries(rules: &RuleMapping) -> Vec<(&str, &str)> {
    rules.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
}

#[rstest]
#[case("")]
#[case("plain text, no tags at all")]
#[case("<div><p>Hello</p><button name=\"go\" validated=\"required\">Go</button></div>")]
#[case("<form><input type=\"submit\"></form>")]
fn test_no_qualifying_elements(#[case] markup: &str) {
    assert!(extract(markup).is_empty());
}

#[test]
fn test_simple_email_field() {
    let rules = extract(r#"<input name="email" validated="required|email">"#);
    assert_eq!(entries(&rules), vec![("email", "required|email")]);
}

#[test]
fn test_bracketed_name_is_normalized() {
    let rules = extract(r#"<input name="items[0][name]" validated="required">"#);
    assert_eq!(entries(&rules), vec![("items.0.name", "required")]);
}

#[test]
fn test_last_write_wins() {
    let rules = extract(
        r#"<input name="x" validated="required"><input name="y" validated="email"><input name="x" validated="numeric">"#,
    );
    assert_eq!(rules.get("x"), Some("numeric"));
    assert_eq!(rules.len(), 2);
}

#[test]
fn test_duplicates_keep_first_position() {
    let rules = extract(
        r#"<input name="x" validated="required"><input name="y" validated="email"><input name="x" validated="numeric">"#,
    );
    assert_eq!(entries(&rules), vec![("x", "numeric"), ("y", "email")]);
}

#[test]
fn test_bracket_and_dot_names_collide() {
    let rules = extract(
        r#"<input name="a[b]" validated="required"><input name="a.b" validated="integer">"#,
    );
    assert_eq!(entries(&rules), vec![("a.b", "integer")]);
}

#[test]
fn test_name_without_marker_yields_nothing() {
    assert!(extract(r#"<input name="x">"#).is_empty());
}

#[rstest]
#[case(r#"<INPUT name="x" validated="required">"#)]
#[case(r#"<Input name="x" validated="required">"#)]
#[case(r#"<input name="x" validated="required">"#)]
#[case(r#"<TextArea name="x" validated="required"></TextArea>"#)]
#[case(r#"<SELECT name="x" validated="required"><option>1</option></SELECT>"#)]
fn test_tag_names_case_insensitive(#[case] markup: &str) {
    assert_eq!(entries(&extract(markup)), vec![("x", "required")]);
}

#[test]
fn test_all_three_controls() {
    let markup = r#"
        <form method="post">
            <input type="text" name="user[name]" validated="required|max:50" />
            <textarea name="user[bio]" validated="nullable|max:500"></textarea>
            <select name="user[role]" validated="required|in:admin,user">
                <option value="admin">Admin</option>
            </select>
            <input type="submit" value="Save">
        </form>
    "#;

    assert_eq!(
        entries(&extract(markup)),
        vec![
            ("user.name", "required|max:50"),
            ("user.bio", "nullable|max:500"),
            ("user.role", "required|in:admin,user"),
        ]
    );
}

#[test]
fn test_rule_string_passed_through_verbatim() {
    let rules = extract(r#"<input name="code" validated=" Required | regex:^[A-Z]{3}$ ">"#);
    assert_eq!(rules.get("code"), Some(" Required | regex:^[A-Z]{3}$ "));
}

#[test]
fn test_commented_out_controls_still_match() {
    // Raw text scan: comments are not special
    let rules = extract(r#"<!-- <input name="old" validated="required"> -->"#);
    assert_eq!(entries(&rules), vec![("old", "required")]);
}

#[test]
fn test_renders_view_files_before_extracting() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("user")).unwrap();
    fs::write(
        dir.path().join("user/register.html"),
        r#"<form>
            <input name="{prefix}[email]" validated="required|email">
            <input name="{prefix}[age]" validated="integer|min:{min_age}">
        </form>"#,
    )
    .unwrap();
    fs::write(dir.path().join("README.md"), "not a view").unwrap();

    let mut loader = TemplateLoader::new(dir.path());
    loader.load_all().unwrap();
    assert_eq!(loader.list_views(), vec!["user/register"]);

    let mut renderer = TemplateRenderer::new(loader);
    renderer.set_var("prefix", "account");
    renderer.set_var("min_age", 18);

    let rules = FormRequest::with_view("user.register")
        .rules(&renderer, &RuleExtractor::new())
        .unwrap();

    assert_eq!(
        entries(&rules),
        vec![("account.email", "required|email"), ("account.age", "integer|min:18")]
    );
}

#[test]
fn test_missing_view_is_an_error() {
    let renderer = TemplateRenderer::new(TemplateLoader::new("no-such-views"));
    let err = FormRequest::with_view("ghost")
        .rules(&renderer, &RuleExtractor::new())
        .unwrap_err();

    assert_eq!(err.to_string(), "View not found: ghost");
}

#[test]
fn test_maud_view_round_trip() {
    let renderer = MaudRenderer::new().with_view("orders.create", || {
        maud! {
            form {
                @for i in 0..2 {
                    input name=(format!("lines[{}][sku]", i)) validated="required|alpha_num";
                }
            }
        }
    });

    let route = RouteInfo::named("orders.create");
    let request = FormRequest::for_route(&route, &Config::default());
    let rules = request.rules(&renderer, &RuleExtractor::new()).unwrap();

    assert_eq!(
        entries(&rules),
        vec![
            ("lines.0.sku", "required|alpha_num"),
            ("lines.1.sku", "required|alpha_num"),
        ]
    );
}

#[test]
fn test_validate_submission_end_to_end() {
    let renderer = |_: &str| -> Result<String, RenderError> {
        Ok(r#"<input name="email" validated="required|email">
              <input name="items[0][qty]" validated="required|integer|min:1">"#
            .to_string())
    };

    let form = FormData::from_urlencoded("email=nope&items%5B0%5D%5Bqty%5D=0");
    let result = FormRequest::with_view("checkout")
        .validate(&renderer, &RuleExtractor::new(), &form)
        .unwrap();

    assert!(!result.is_valid);
    assert_eq!(
        result.get_error("email"),
        Some("The email field must be a valid email address.")
    );
    assert_eq!(
        result.get_error("items.0.qty"),
        Some("The items.0.qty field must be at least 1.")
    );
}
