use mockwright::{Mock, Overrides, overrides};
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq)]
struct Geo {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize, PartialEq)]
struct Address {
    city: String,
    geo: Geo,
}

#[derive(Debug, Deserialize, PartialEq)]
struct User {
    name: String,
    address: Address,
}

#[derive(Debug, Deserialize, PartialEq)]
struct Team {
    title: String,
    lead: User,
    users: Vec<User>,
}

#[test]
fn nested_field_override() {
    mockwright_testhelpers::setup();

    let user = User::mock(overrides! { "address.city" => "Paris" }).unwrap();
    assert_eq!(user.address.city, "Paris");
    assert_eq!(user.name, "mock");
    assert_eq!(user.address.geo, Geo { lat: 0.0, lon: 0.0 });
}

#[test]
fn paths_compose_through_sequences() {
    mockwright_testhelpers::setup();

    let team = Team::mock(overrides! {
        "title" => "core",
        "lead.address.geo.lat" => 59.9,
        "users[]" => 2,
        "users[0].address.city" => "Oslo",
        "users[1].name" => "Grace",
        "users[1].address.geo.lon" => 10.7,
    })
    .unwrap();

    assert_eq!(team.title, "core");
    assert_eq!(team.lead.address.geo.lat, 59.9);
    assert_eq!(team.lead.address.city, "mock");
    assert_eq!(team.users.len(), 2);
    assert_eq!(team.users[0].address.city, "Oslo");
    assert_eq!(team.users[0].name, "mock");
    assert_eq!(team.users[1].name, "Grace");
    assert_eq!(team.users[1].address.geo.lon, 10.7);
}

#[test]
fn overrides_for_unknown_paths_are_ignored() {
    mockwright_testhelpers::setup();

    let user = User::mock(overrides! {
        "nmae" => "typo",
        "address.city.extra" => 1,
        "address[0]" => "not a sequence",
    })
    .unwrap();
    assert_eq!(user.name, "mock");
    assert_eq!(user.address.city, "mock");
}

#[test]
fn overrides_can_be_built_incrementally() {
    mockwright_testhelpers::setup();

    let mut o = Overrides::new().with("name", "first");
    o.insert("name", "second");
    o.insert("address.city", "Lyon");

    let user = User::mock(o).unwrap();
    assert_eq!(user.name, "second");
    assert_eq!(user.address.city, "Lyon");

    let from_pairs: Overrides = [("name", "pairs")].into();
    assert_eq!(User::mock(from_pairs).unwrap().name, "pairs");
}

#[derive(Debug, Deserialize, PartialEq)]
struct Renamed {
    #[serde(rename = "displayName")]
    display_name: String,
    #[serde(skip)]
    skipped: u32,
    #[serde(default)]
    defaulted: u32,
}

#[test]
fn serde_attributes_decide_the_field_names() {
    mockwright_testhelpers::setup();

    let r = Renamed::mock(overrides! {
        "displayName" => "Ada",
        "skipped" => 5,
        "defaulted" => 6,
    })
    .unwrap();
    assert_eq!(r.display_name, "Ada");
    assert_eq!(r.skipped, 0);
    assert_eq!(r.defaulted, 6);
}
