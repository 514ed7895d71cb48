use mockwright::{Mock, overrides};
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq)]
enum Status {
    Active,
    Suspended { reason: String, days: u32 },
    Pending(u32),
    Moved(String, i8),
}

#[derive(Debug, Deserialize, PartialEq)]
struct Account {
    status: Status,
    history: Vec<Status>,
}

#[test]
fn first_variant_by_default() {
    mockwright_testhelpers::setup();

    let account = Account::mock_default().unwrap();
    assert_eq!(account.status, Status::Active);
    assert_eq!(account.history, [Status::Active]);
}

#[test]
fn text_override_selects_the_variant() {
    mockwright_testhelpers::setup();

    let account = Account::mock(overrides! {
        "status" => "Suspended",
        "status.Suspended.days" => 3,
        "history[]" => 2,
        "history[0]" => "Pending",
        "history[0].Pending" => 9,
        "history[1]" => "Moved",
        "history[1].Moved[0]" => "north",
    })
    .unwrap();

    assert_eq!(
        account.status,
        Status::Suspended {
            reason: "mock".into(),
            days: 3,
        }
    );
    assert_eq!(
        account.history,
        [Status::Pending(9), Status::Moved("north".into(), 0)]
    );
}

#[test]
fn unknown_variant_names_fall_back_to_the_first() {
    mockwright_testhelpers::setup();

    let account = Account::mock(overrides! { "status" => "Deleted" }).unwrap();
    assert_eq!(account.status, Status::Active);

    let account = Account::mock(overrides! { "status" => 2 }).unwrap();
    assert_eq!(account.status, Status::Active);
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
enum Role {
    Viewer,
    Admin,
}

#[test]
fn renamed_variants_use_their_serde_names() {
    mockwright_testhelpers::setup();

    assert_eq!(Role::mock_base("admin").unwrap(), Role::Admin);
    assert_eq!(Role::mock_base("Admin").unwrap(), Role::Viewer);
}
