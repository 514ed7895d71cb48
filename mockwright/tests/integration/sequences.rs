use std::collections::{BTreeSet, VecDeque};

use mockwright::{Mock, OverrideValue, overrides};
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq)]
struct Basket {
    items: Vec<i32>,
}

#[test]
fn sequences_have_one_element_by_default() {
    mockwright_testhelpers::setup();

    let basket = Basket::mock_default().unwrap();
    assert_eq!(basket.items, [0]);
}

#[test]
fn length_marker_sets_the_count() {
    mockwright_testhelpers::setup();

    let basket = Basket::mock(overrides! {
        "items[]" => 3,
        "items[0]" => 10,
        "items[2]" => 30,
    })
    .unwrap();
    assert_eq!(basket.items, [10, 0, 30]);
}

#[test]
fn empty_sequences_need_an_explicit_zero() {
    mockwright_testhelpers::setup();

    let basket = Basket::mock(overrides! { "items[]" => 0 }).unwrap();
    assert!(basket.items.is_empty());
}

#[test]
fn element_overrides_past_the_length_are_unused() {
    mockwright_testhelpers::setup();

    let basket = Basket::mock(overrides! { "items[1]" => 5 }).unwrap();
    assert_eq!(basket.items, [0]);
}

#[test]
fn top_level_sequences_use_the_root_marker() {
    mockwright_testhelpers::setup();

    let names = Vec::<String>::mock(overrides! { "[]" => 2, "[1]" => "b" }).unwrap();
    assert_eq!(names, ["mock", "b"]);
}

#[derive(Debug, Deserialize, PartialEq)]
struct Grid {
    cells: Vec<Vec<u8>>,
    maybe: Vec<Option<i32>>,
}

#[test]
fn nested_sequences_and_null_elements() {
    mockwright_testhelpers::setup();

    let grid = Grid::mock(overrides! {
        "cells[]" => 2,
        "cells[1][]" => 3,
        "cells[1][2]" => 9,
        "maybe[]" => 2,
        "maybe[1]" => OverrideValue::Null,
    })
    .unwrap();
    assert_eq!(grid.cells, vec![vec![0], vec![0, 0, 9]]);
    assert_eq!(grid.maybe, [Some(0), None]);
}

#[derive(Debug, Deserialize, PartialEq)]
struct Point(i32, i32);

#[derive(Debug, Deserialize, PartialEq)]
struct Shapes {
    origin: Point,
    pair: (String, bool),
    rgb: [u8; 3],
    tags: BTreeSet<String>,
    queue: VecDeque<u8>,
}

#[test]
fn tuples_and_arrays_use_their_declared_arity() {
    mockwright_testhelpers::setup();

    let shapes = Shapes::mock(overrides! {
        "origin[1]" => -4,
        "pair[1]" => true,
        "rgb[]" => 1,
        "rgb[2]" => 255,
        "tags[]" => 2,
        "tags[0]" => "a",
        "tags[1]" => "b",
        "queue[]" => 2,
    })
    .unwrap();

    assert_eq!(shapes.origin, Point(0, -4));
    assert_eq!(shapes.pair, ("mock".to_string(), true));
    assert_eq!(shapes.rgb, [0, 0, 255]);
    assert_eq!(shapes.tags.into_iter().collect::<Vec<_>>(), ["a", "b"]);
    assert_eq!(shapes.queue, [0, 0]);
}
