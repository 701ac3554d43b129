use simia::{
    ast::{Expression, Program, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token},
        parser::Parser,
    },
};

fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token() {
        tokens.push(token);
    }
    tokens
}

fn parse(source: &str) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    let errors = parser.into_errors();
    (program, errors)
}

fn parse_clean(source: &str) -> Program {
    let (program, errors) = parse(source);
    assert!(errors.is_empty(), "parse errors for {source:?}: {errors:?}");
    program
}

fn assert_reprint(source: &str, expected: &str) {
    assert_eq!(parse_clean(source).to_string(), expected, "source: {source}");
}

fn assert_error_message(source: &str, expected: &str) {
    let (_, errors) = parse(source);
    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
    assert!(
        messages.iter().any(|m| m == expected),
        "expected message {expected:?} for {source:?}, got {messages:?}"
    );
}

fn ident(name: &str) -> Token {
    Token::Ident(name.to_string())
}

fn int(literal: &str) -> Token {
    Token::Int(literal.to_string())
}

#[test]
fn tokenizes_a_representative_program() {
    let source = "let five = 5;\n\
                  let add = fn(x, y) { x + y; };\n\
                  let result = add(five, 10);\n\
                  !-/*5;\n\
                  5 < 10 > 5;\n\
                  if (5 < 10) { return true; } else { return false; }\n\
                  10 == 10;\n\
                  10 != 9;\n\
                  \"foobar\"\n\
                  \"foo bar\"\n\
                  [1, 2];\n\
                  {\"foo\": \"bar\"}";

    let expected = vec![
        Token::Let,
        ident("five"),
        Token::Assign,
        int("5"),
        Token::Semicolon,
        Token::Let,
        ident("add"),
        Token::Assign,
        Token::Function,
        Token::LParen,
        ident("x"),
        Token::Comma,
        ident("y"),
        Token::RParen,
        Token::LBrace,
        ident("x"),
        Token::Plus,
        ident("y"),
        Token::Semicolon,
        Token::RBrace,
        Token::Semicolon,
        Token::Let,
        ident("result"),
        Token::Assign,
        ident("add"),
        Token::LParen,
        ident("five"),
        Token::Comma,
        int("10"),
        Token::RParen,
        Token::Semicolon,
        Token::Bang,
        Token::Minus,
        Token::Slash,
        Token::Asterisk,
        int("5"),
        Token::Semicolon,
        int("5"),
        Token::Lt,
        int("10"),
        Token::Gt,
        int("5"),
        Token::Semicolon,
        Token::If,
        Token::LParen,
        int("5"),
        Token::Lt,
        int("10"),
        Token::RParen,
        Token::LBrace,
        Token::Return,
        Token::True,
        Token::Semicolon,
        Token::RBrace,
        Token::Else,
        Token::LBrace,
        Token::Return,
        Token::False,
        Token::Semicolon,
        Token::RBrace,
        int("10"),
        Token::Eq,
        int("10"),
        Token::Semicolon,
        int("10"),
        Token::NotEq,
        int("9"),
        Token::Semicolon,
        Token::Str("foobar".to_string()),
        Token::Str("foo bar".to_string()),
        Token::LBracket,
        int("1"),
        Token::Comma,
        int("2"),
        Token::RBracket,
        Token::Semicolon,
        Token::LBrace,
        Token::Str("foo".to_string()),
        Token::Colon,
        Token::Str("bar".to_string()),
        Token::RBrace,
    ];

    assert_eq!(tokenize(source), expected);
}

#[test]
fn keywords_do_not_swallow_identifiers() {
    assert_eq!(tokenize("letter"), vec![ident("letter")]);
    assert_eq!(tokenize("fnord"), vec![ident("fnord")]);
    assert_eq!(tokenize("truely"), vec![ident("truely")]);
    assert_eq!(tokenize("_under_score"), vec![ident("_under_score")]);
}

#[test]
fn digits_are_not_identifier_characters() {
    assert_eq!(tokenize("foo1"), vec![ident("foo"), int("1")]);
}

#[test]
fn unterminated_strings_run_to_end_of_input() {
    assert_eq!(tokenize("\"abc"), vec![Token::Str("abc".to_string())]);
    assert_eq!(tokenize("\""), vec![Token::Str(String::new())]);
    assert_eq!(tokenize("\"\""), vec![Token::Str(String::new())]);
}

#[test]
fn unrecognized_characters_become_illegal_tokens() {
    assert_eq!(tokenize("@"), vec![Token::Illegal("@".to_string())]);
    assert_eq!(
        tokenize("1 @ 2"),
        vec![int("1"), Token::Illegal("@".to_string()), int("2")]
    );
}

#[test]
fn exhausted_lexer_keeps_returning_none() {
    let mut lexer = Lexer::new("1");
    assert_eq!(lexer.next_token(), Some(int("1")));
    assert_eq!(lexer.next_token(), None);
    assert_eq!(lexer.next_token(), None);
}

#[test]
fn let_statement_structure() {
    let program = parse_clean("let x = 5;");

    assert_eq!(
        program.statements,
        vec![Statement::Let {
            name: "x".to_string(),
            value: Expression::IntegerLiteral(5),
        }]
    );
}

#[test]
fn operator_precedence_reprints() {
    let cases = [
        ("-a * b", "((-a) * b)"),
        ("!-a", "(!(-a))"),
        ("a + b + c", "((a + b) + c)"),
        ("a + b - c", "((a + b) - c)"),
        ("a * b * c", "((a * b) * c)"),
        ("a * b / c", "((a * b) / c)"),
        ("a + b / c", "(a + (b / c))"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
        ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
        ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
        (
            "3 + 4 * 5 == 3 * 1 + 4 * 5",
            "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))",
        ),
        ("true", "true"),
        ("false", "false"),
        ("3 > 5 == false", "((3 > 5) == false)"),
        ("3 < 5 == true", "((3 < 5) == true)"),
        ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
        ("(5 + 5) * 2", "((5 + 5) * 2)"),
        ("2 / (5 + 5)", "(2 / (5 + 5))"),
        ("-(5 + 5)", "(-(5 + 5))"),
        ("!(true == true)", "(!(true == true))"),
        ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
        (
            "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
            "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))",
        ),
        (
            "add(a + b + c * d / f + g)",
            "add((((a + b) + ((c * d) / f)) + g))",
        ),
        (
            "a * [1, 2, 3, 4][b * c] * d",
            "((a * ([1, 2, 3, 4][(b * c)])) * d)",
        ),
        (
            "add(a * b[2], b[1], 2 * [1, 2][1])",
            "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))",
        ),
    ];

    for (source, expected) in cases {
        assert_reprint(source, expected);
    }
}

#[test]
fn reprinting_is_stable_under_reparse() {
    let cases = [
        "((-a) * b)",
        "(((a + (b * c)) + (d / e)) - f)",
        "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))",
        "(!(true == true))",
        "let x = ((1 + 2) + 3);",
        "return (a + b);",
        "[1, (2 * 2), 3]",
        "{a:1, b:(2 * 2)}",
    ];

    for source in cases {
        assert_reprint(source, source);
    }
}

#[test]
fn if_expression_reprints() {
    assert_reprint("if (x < y) { x }", "if (x < y) x");
    assert_reprint("if (x < y) { x } else { y }", "if (x < y) x else y");
}

#[test]
fn function_literal_reprints() {
    assert_reprint("fn(x, y) { x + y; }", "fn(x, y) (x + y)");
    assert_reprint("fn() { 1; }", "fn() 1");
    assert_reprint("let f = fn(a) { a };", "let f = fn(a) a;");
}

#[test]
fn statement_reprints() {
    assert_reprint("let x = 5;", "let x = 5;");
    assert_reprint("let x = 5", "let x = 5;");
    assert_reprint("return 5;", "return 5;");
    assert_reprint("\"hello\"", "hello");
}

#[test]
fn hash_literal_structure() {
    let program = parse_clean("{\"one\": 1, \"two\": 2}");

    assert_eq!(
        program.statements,
        vec![Statement::Expression {
            expression: Expression::HashLiteral {
                pairs: vec![
                    (
                        Expression::StringLiteral("one".to_string()),
                        Expression::IntegerLiteral(1),
                    ),
                    (
                        Expression::StringLiteral("two".to_string()),
                        Expression::IntegerLiteral(2),
                    ),
                ],
            },
        }]
    );
}

#[test]
fn empty_collections_parse() {
    assert_reprint("[]", "[]");
    assert_reprint("{}", "{}");
    assert_reprint("f()", "f()");
    assert_reprint("fn() { }", "fn() ");
}

#[test]
fn let_statement_errors() {
    assert_error_message("let x 5;", "expected next token to be =, got INT instead");
    assert_error_message("let = 5;", "expected next token to be IDENT, got = instead");
    assert_error_message("let x = ;", "no prefix parse function for ; found");
    assert_error_message("let", "expected next token to be IDENT, got EOF instead");
}

#[test]
fn errors_accumulate_across_statements() {
    let (_, errors) = parse("let x 5; let = 10; let 838383;");
    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();

    assert_eq!(
        messages,
        vec![
            "expected next token to be =, got INT instead",
            "expected next token to be IDENT, got = instead",
            "no prefix parse function for = found",
            "expected next token to be IDENT, got INT instead",
        ]
    );
}

#[test]
fn failed_statements_are_skipped_but_the_rest_parse() {
    let (program, errors) = parse("let x 5; let y = 7;");

    assert!(!errors.is_empty());
    // The failed `let` is dropped; the parser resumes at the next token, so
    // the stray `5` comes back as an expression statement.
    assert_eq!(
        program.statements,
        vec![
            Statement::Expression {
                expression: Expression::IntegerLiteral(5),
            },
            Statement::Let {
                name: "y".to_string(),
                value: Expression::IntegerLiteral(7),
            },
        ]
    );
}

#[test]
fn unclosed_delimiters_report_eof() {
    assert_error_message("(1 + 2", "expected next token to be ), got EOF instead");
    assert_error_message("[1, 2", "expected next token to be ], got EOF instead");
    assert_error_message("{\"a\": 1", "expected next token to be ,, got EOF instead");
}

#[test]
fn illegal_tokens_surface_as_parse_errors() {
    assert_error_message("@", "no prefix parse function for ILLEGAL found");
    assert_error_message("1 + @", "no prefix parse function for ILLEGAL found");
}

#[test]
fn integer_literals_that_overflow_are_errors() {
    assert_error_message(
        "92233720368547758081234",
        "could not parse \"92233720368547758081234\" as integer",
    );
}

#[test]
fn missing_prefix_position_reports_the_token() {
    assert_error_message("+ 5", "no prefix parse function for + found");
    assert_error_message("if (x) { } else", "expected next token to be {, got EOF instead");
}
