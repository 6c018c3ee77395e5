//! Property tests: exact integer reconstruction and parse purity.

use jsonforge::{Number, ParserOptions, Value, parse_value};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

fn fragments() -> ParserOptions {
    ParserOptions {
        allow_fragments: true,
        ..ParserOptions::default()
    }
}

#[quickcheck]
fn integers_reconstruct_exactly(n: i64) -> bool {
    parse_value(n.to_string().as_bytes(), fragments()) == Ok(Value::Number(Number::Integer(n)))
}

#[quickcheck]
fn integer_arrays_round_trip(xs: Vec<i64>) -> bool {
    let doc = serde_json::to_string(&xs).unwrap();
    let expected: Vec<Value> = xs.into_iter().map(Value::from).collect();
    parse_value(doc.as_bytes(), ParserOptions::default()) == Ok(Value::Array(expected))
}

#[quickcheck]
fn strings_round_trip_through_reference_encoding(s: String) -> TestResult {
    // The escape set deliberately omits `\f`; the reference encoder emits it
    // for form feeds, so those inputs are out of scope here.
    if s.contains('\u{c}') {
        return TestResult::discard();
    }
    let encoded = serde_json::to_string(&s).unwrap();
    TestResult::from_bool(parse_value(encoded.as_bytes(), fragments()) == Ok(Value::String(s)))
}

#[quickcheck]
fn parse_is_a_pure_function_of_buffer_and_options(bytes: Vec<u8>) -> bool {
    // Holds for successes and failures alike, offsets included.
    parse_value(&bytes, fragments()) == parse_value(&bytes, fragments())
}
