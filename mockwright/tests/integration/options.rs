use mockwright::{MockOptions, mock_with_options, overrides};
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq)]
struct Post {
    title: String,
    tags: Vec<String>,
    initial: char,
}

#[test]
fn custom_defaults() {
    mockwright_testhelpers::setup();

    let options = MockOptions::new().default_len(2).default_text("lorem");
    let post: Post = mock_with_options(&overrides! {}, &options).unwrap();
    assert_eq!(
        post,
        Post {
            title: "lorem".into(),
            tags: vec!["lorem".into(), "lorem".into()],
            initial: 'l',
        }
    );
}

#[test]
fn overrides_still_win_over_custom_defaults() {
    mockwright_testhelpers::setup();

    let options = MockOptions::new().default_len(0);
    let post: Post = mock_with_options(
        &overrides! { "title" => "Hello", "tags[]" => 1 },
        &options,
    )
    .unwrap();
    assert_eq!(post.title, "Hello");
    assert_eq!(post.tags, ["mock"]);
}

#[test]
fn standard_options_match_the_documented_policy() {
    let options = MockOptions::default();
    assert_eq!(options.default_len, mockwright::DEFAULT_LEN);
    assert_eq!(options.default_text, mockwright::DEFAULT_TEXT);
    assert_eq!(options, MockOptions::new());
}
