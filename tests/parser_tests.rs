// tests/parser_tests.rs

use json_tree::ast::{Node, Property, TokenKind};
use json_tree::error::{ParseError, ParseErrorKind};
use json_tree::lexer::{tokenize, Position};
use json_tree::parser::{parse, parse_strict, Parser, MAX_DEPTH};

fn parse_value(input: &str) -> Option<Node> {
    parse(input).value
}

fn diagnostics(input: &str) -> Vec<ParseErrorKind> {
    let mut parser = Parser::new(tokenize(input));
    parser.parse_root();
    parser.diagnostics().iter().map(|e| e.kind.clone()).collect()
}

fn num(n: f64) -> Node {
    Node::Number(n)
}

fn string(s: &str) -> Node {
    Node::String(s.to_string())
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn test_literals() {
    let test_cases = vec![
        (r#""hello""#, string("hello")),
        ("42", num(42.0)),
        ("-12.50", num(-12.5)),
        ("true", Node::Boolean(true)),
        ("false", Node::Boolean(false)),
        ("null", Node::Null),
    ];

    for (input, expected) in test_cases {
        assert_eq!(parse_value(input), Some(expected), "Failed for input: {}", input);
        assert!(diagnostics(input).is_empty(), "Failed for input: {}", input);
    }
}

#[test]
fn test_bad_number_is_illegal_literal() {
    assert_eq!(
        parse_value("-"),
        Some(Node::Illegal("Error parsing number".to_string()))
    );
}

#[test]
fn test_bad_number_does_not_stop_siblings() {
    let node = parse_value(r#"{"a": -, "b": 2}"#).unwrap();
    assert_eq!(
        node,
        Node::Object(vec![
            Property::new("a", Node::Illegal("Error parsing number".to_string())),
            Property::new("b", num(2.0)),
        ])
    );
    assert_eq!(node.illegal_messages(), vec!["Error parsing number"]);
}

// ============================================================================
// Collections
// ============================================================================

#[test]
fn test_nested_document() {
    let node = parse_value(r#"{"a": [1, "x", true, null, {"b": 2}]}"#).unwrap();

    assert_eq!(
        node,
        Node::Object(vec![Property::new(
            "a",
            Node::Array(vec![
                num(1.0),
                string("x"),
                Node::Boolean(true),
                Node::Null,
                Node::Object(vec![Property::new("b", num(2.0))]),
            ]),
        )])
    );
}

#[test]
fn test_empty_collections() {
    assert_eq!(parse_value("{}"), Some(Node::Object(vec![])));
    assert_eq!(parse_value("[]"), Some(Node::Array(vec![])));
    assert_eq!(
        parse_value(r#"{"a": {}, "b": []}"#),
        Some(Node::Object(vec![
            Property::new("a", Node::Object(vec![])),
            Property::new("b", Node::Array(vec![])),
        ]))
    );
}

#[test]
fn test_nested_arrays() {
    let input = "[[1], [2, [3]]]";
    assert_eq!(
        parse_value(input),
        Some(Node::Array(vec![
            Node::Array(vec![num(1.0)]),
            Node::Array(vec![num(2.0), Node::Array(vec![num(3.0)])]),
        ]))
    );
    assert!(diagnostics(input).is_empty());
}

#[test]
fn test_duplicate_keys_are_kept() {
    assert_eq!(
        parse_value(r#"{"a": 1, "a": 2}"#),
        Some(Node::Object(vec![
            Property::new("a", num(1.0)),
            Property::new("a", num(2.0)),
        ]))
    );
}

// ============================================================================
// Empty Input
// ============================================================================

#[test]
fn test_empty_input_gives_empty_root() {
    for input in ["", "   ", "\n\t\n"] {
        let root = parse(input);
        assert!(root.is_empty(), "Failed for input: {:?}", input);
        assert_eq!(root.to_string(), "");
    }
}

#[test]
fn test_parser_without_tokens() {
    let mut parser = Parser::new(vec![]);
    assert!(parser.parse_root().is_empty());
}

#[test]
fn test_illegal_token_at_root() {
    assert!(parse("tru").is_empty());
    assert!(matches!(
        diagnostics("tru").first(),
        Some(ParseErrorKind::UnexpectedToken {
            found: TokenKind::Illegal,
            ..
        })
    ));
}

// ============================================================================
// Structural Truncation
// ============================================================================

#[test]
fn test_missing_colon_truncates_object() {
    assert_eq!(parse_value(r#"{"a" 1}"#), Some(Node::Object(vec![])));
}

#[test]
fn test_missing_colon_keeps_earlier_pairs() {
    assert_eq!(
        parse_value(r#"{"a": 1, "b" 2, "c": 3}"#),
        Some(Node::Object(vec![Property::new("a", num(1.0))]))
    );
}

#[test]
fn test_non_string_key_truncates_object() {
    assert_eq!(parse_value("{1: 2}"), Some(Node::Object(vec![])));
    assert_eq!(
        diagnostics("{1: 2}").first(),
        Some(&ParseErrorKind::ExpectedKey {
            found: TokenKind::Number
        })
    );
}

#[test]
fn test_missing_comma_between_members_is_tolerated() {
    assert_eq!(
        parse_value(r#"{"a": 1 "b": 2}"#),
        Some(Node::Object(vec![
            Property::new("a", num(1.0)),
            Property::new("b", num(2.0)),
        ]))
    );
    assert_eq!(
        diagnostics(r#"{"a": 1 "b": 2}"#),
        vec![ParseErrorKind::ExpectedComma {
            found: TokenKind::String
        }]
    );
}

#[test]
fn test_missing_value_becomes_illegal() {
    assert_eq!(
        parse_value(r#"{"a": }"#),
        Some(Node::Object(vec![Property::new(
            "a",
            Node::Illegal("Missing value".to_string())
        )]))
    );
}

#[test]
fn test_unclosed_object() {
    assert_eq!(
        parse_value(r#"{"a": 1"#),
        Some(Node::Object(vec![Property::new("a", num(1.0))]))
    );
    assert_eq!(
        diagnostics(r#"{"a": 1"#),
        vec![ParseErrorKind::UnclosedObject {
            found: TokenKind::EndOfInput
        }]
    );
}

#[test]
fn test_absent_array_elements_are_skipped() {
    assert_eq!(parse_value("[,1]"), Some(Node::Array(vec![num(1.0)])));
    assert_eq!(parse_value("[1, @]"), Some(Node::Array(vec![num(1.0)])));
}

#[test]
fn test_array_trailing_comma() {
    assert_eq!(parse_value("[1,]"), Some(Node::Array(vec![num(1.0)])));
    assert_eq!(
        diagnostics("[1,]").first(),
        Some(&ParseErrorKind::TrailingComma {
            found: TokenKind::RightBracket
        })
    );
}

#[test]
fn test_unclosed_array_skips_next_token() {
    // The array stops at `2` and the token after the loop is consumed
    // regardless, so `2` is skipped and the object then stops at `]`.
    assert_eq!(
        parse_value(r#"{"a": [1 2], "b": 3}"#),
        Some(Node::Object(vec![Property::new(
            "a",
            Node::Array(vec![num(1.0)])
        )]))
    );
}

// ============================================================================
// Nesting Depth
// ============================================================================

fn nested_arrays(depth: usize) -> String {
    format!("{}{}", "[".repeat(depth), "]".repeat(depth))
}

fn array_depth(node: &Node) -> usize {
    let mut depth = 0;
    let mut current = node;
    while let Node::Array(elements) = current {
        depth += 1;
        match elements.first() {
            Some(first) => current = first,
            None => break,
        }
    }
    depth
}

#[test]
fn test_nesting_at_limit_is_accepted() {
    let input = nested_arrays(MAX_DEPTH);
    let root = parse_strict(&input).unwrap();
    assert_eq!(array_depth(root.value.as_ref().unwrap()), MAX_DEPTH);
}

#[test]
fn test_nesting_past_limit_becomes_illegal() {
    let input = nested_arrays(MAX_DEPTH + 1);
    let node = parse_value(&input).unwrap();
    assert_eq!(array_depth(&node), MAX_DEPTH);
    assert_eq!(node.illegal_messages(), vec!["Nesting too deep"]);
}

#[test]
fn test_very_deep_document_terminates() {
    let input = nested_arrays(100_000);

    let mut parser = Parser::new(tokenize(&input));
    let root = parser.parse_root();
    assert_eq!(
        parser.diagnostics(),
        &[ParseError::new(
            ParseErrorKind::NestingTooDeep { limit: MAX_DEPTH },
            Position::new(1, MAX_DEPTH + 1),
        )]
    );

    let node = root.value.as_ref().unwrap();
    assert_eq!(node.illegal_messages(), vec!["Nesting too deep"]);
    assert!(!root.to_runtime_value().is_null());
    assert!(root.to_string().contains("Illegal(Nesting too deep)"));

    let err = parse_strict(&input).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::NestingTooDeep { limit: MAX_DEPTH });
}

#[test]
fn test_deep_objects_terminate() {
    let input = format!("{}1{}", r#"{"a": "#.repeat(100_000), "}".repeat(100_000));
    let node = parse_value(&input).unwrap();
    assert_eq!(node.illegal_messages(), vec!["Nesting too deep"]);
    assert!(diagnostics(&input)
        .iter()
        .all(|kind| *kind == ParseErrorKind::NestingTooDeep { limit: MAX_DEPTH }));
}

#[test]
fn test_unclosed_deep_document_terminates() {
    let input = "[".repeat(100_000);
    let node = parse_value(&input).unwrap();
    assert_eq!(array_depth(&node), MAX_DEPTH);
    assert!(diagnostics(&input).contains(&ParseErrorKind::NestingTooDeep { limit: MAX_DEPTH }));
}

// ============================================================================
// Lookahead
// ============================================================================

#[test]
fn test_current_and_peek() {
    let parser = Parser::new(tokenize("[1]"));
    assert_eq!(parser.current_token().kind, TokenKind::LeftBracket);
    assert_eq!(parser.peek_token().kind, TokenKind::Number);
}

#[test]
fn test_trailing_tokens_are_left_unread() {
    let mut parser = Parser::new(tokenize("1 2"));
    let root = parser.parse_root();
    assert_eq!(root.value, Some(num(1.0)));
    assert_eq!(parser.current_token().literal, "2");
}

// ============================================================================
// Strict Parsing
// ============================================================================

#[test]
fn test_strict_accepts_well_formed() {
    let root = parse_strict(r#"{"a": [1, "x", true, null, {"b": 2}]}"#).unwrap();
    assert!(!root.is_empty());
}

#[test]
fn test_strict_reports_missing_colon_with_position() {
    let err = parse_strict(r#"{"a" 1}"#).unwrap_err();
    assert_eq!(
        err,
        ParseError::new(
            ParseErrorKind::ExpectedColon {
                key: "a".to_string(),
                found: TokenKind::Number,
            },
            Position::new(1, 6),
        )
    );
    assert_eq!(
        err.to_string(),
        "expected ':' after key \"a\", found number at line 1, column 6"
    );
}

#[test]
fn test_strict_rejects_malformed_documents() {
    let test_cases = vec![
        ("", ParseErrorKind::EmptyDocument),
        (
            "1 2",
            ParseErrorKind::TrailingTokens {
                found: TokenKind::Number,
            },
        ),
        (
            "-",
            ParseErrorKind::IllegalLiteral {
                message: "Error parsing number".to_string(),
                literal: "-".to_string(),
            },
        ),
        (r#"{"a":"#, ParseErrorKind::UnexpectedEndOfInput),
        (
            r#"{"a": 1,}"#,
            ParseErrorKind::TrailingComma {
                found: TokenKind::RightBrace,
            },
        ),
        (
            "[1 2]",
            ParseErrorKind::UnclosedArray {
                found: TokenKind::Number,
            },
        ),
    ];

    for (input, expected) in test_cases {
        let err = parse_strict(input).unwrap_err();
        assert_eq!(err.kind, expected, "Failed for input: {:?}", input);
    }
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_render() {
    let root = parse(r#"{"a": [1, "x", true, null, {"b": 2}]}"#);
    assert_eq!(
        root.to_string(),
        r#"{"a": [1.000000, "x", true, null, {"b": 2.000000}]}"#
    );
    assert_eq!(root.token_literal(), "a");
}

#[test]
fn test_render_is_stable() {
    let root = parse(r#"[{"k": -0.25}, [false, "v"], null, -]"#);
    assert_eq!(root.to_string(), root.to_string());
    assert_eq!(
        root.to_string(),
        r#"[{"k": -0.250000}, [false, "v"], null, Illegal(Error parsing number)]"#
    );
}
