//! Basic usage: absence and failure as data, dispatch by tag.

use unions::core::{ConstructionError, Maybe, Outcome, Union3};

fn parse_port(raw: &str) -> Outcome<u16, String> {
    raw.parse::<u16>()
        .map_err(|e| format!("bad port {:?}: {}", raw, e))
        .into()
}

fn lookup(key: &str) -> Maybe<&'static str> {
    match key {
        "port" => Maybe::Some("8080"),
        "empty" => Maybe::Some(""),
        _ => Maybe::None,
    }
}

fn main() {
    // 1. Absence: None and Some("") are different things
    println!("{}", lookup("empty"));
    println!("{}", lookup("missing"));

    // 2. Chain lookups and parsing, falling back only when needed
    let port = lookup("port")
        .okay_or(String::from("port not configured"))
        .ok()
        .and_then(|raw| parse_port(raw).ok())
        .value_or_else(|| 80);
    println!("port = {}", port);

    // 3. Failure flows as data
    let bad = parse_port("http");
    bad.match_with(
        |p| println!("parsed {}", p),
        |e| println!("rejected: {}", e),
    );

    // 4. A payload that may be missing is rejected at construction
    match Outcome::<u16, String>::try_ok(None) {
        Err(ConstructionError::MissingOk) => println!("Ok without payload refused"),
        other => panic!("unexpected: {:?}", other),
    }

    // 5. Three-way dispatch, exactly one handler fires
    let inputs = [
        Union3::<i64, &str, bool>::first(-3),
        Union3::second("hi"),
        Union3::third(true),
    ];
    for input in inputs {
        let rendered = input.match_with(
            |n| format!("int {}", n),
            |s| format!("text {:?}", s),
            |b| format!("flag {}", b),
        );
        println!("{}", rendered);
    }

    println!("Basic usage example complete.");
}
