use mockwright::{Mock, MockErrorKind, Path, mock, overrides};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Rejects anything without an `@`, including the default `"mock"`.
#[derive(Debug, PartialEq)]
struct Email(String);

impl<'de> Deserialize<'de> for Email {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        if s.contains('@') {
            Ok(Email(s))
        } else {
            Err(D::Error::custom(format!("invalid email {s:?}")))
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
struct Contact {
    name: String,
    email: Email,
}

#[derive(Debug, Deserialize, PartialEq)]
struct Directory {
    owner: Contact,
    contacts: Vec<Contact>,
}

#[test]
fn validation_failure_aborts_the_whole_call() {
    mockwright_testhelpers::setup();

    let err = mock::<Contact>(overrides! { "name" => "Ada" }).unwrap_err();
    assert_eq!(err.kind, MockErrorKind::Custom("invalid email \"mock\"".into()));
    assert_eq!(err.path, Some(Path::from("email")));
    insta::assert_snapshot!(err, @r#"at email: invalid email "mock""#);
}

#[test]
fn a_valid_override_satisfies_the_validation() {
    mockwright_testhelpers::setup();

    let contact = Contact::mock(overrides! { "email" => "ada@example.com" }).unwrap();
    assert_eq!(contact.email, Email("ada@example.com".into()));
    assert_eq!(contact.name, "mock");
}

#[test]
fn the_innermost_path_is_reported() {
    mockwright_testhelpers::setup();

    let err = Directory::mock(overrides! {
        "owner.email" => "owner@example.com",
        "contacts[]" => 2,
        "contacts[0].email" => "first@example.com",
    })
    .unwrap_err();
    assert_eq!(err.path_string(), "contacts[1].email");
    insta::assert_snapshot!(err, @r#"at contacts[1].email: invalid email "mock""#);
}

#[test]
fn no_partial_value_on_failure() {
    mockwright_testhelpers::setup();

    let result = Directory::mock(overrides! { "contacts[]" => 0 });
    assert!(result.is_err());
    assert!(result.ok().is_none());
}
