use crate::{
    ast::{Expression, InfixOperator, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{Parser, Precedence, kind_of},
    },
};

impl Parser<'_> {
    /// Parses the prefix position of an expression, dispatching on the
    /// current token: literals, identifiers, unary operators, grouped
    /// expressions, conditionals, function literals, arrays and hash maps.
    ///
    /// Tokens that cannot begin an expression (including illegal characters
    /// and a premature end of input) record a no-prefix-parse error.
    pub(crate) fn parse_prefix(&mut self) -> Option<Expression> {
        match self.cur_token().cloned() {
            Some(Token::Ident(name)) => Some(Expression::Identifier(name)),
            Some(Token::Int(literal)) => self.parse_integer_literal(&literal),
            Some(Token::Str(value)) => Some(Expression::StringLiteral(value)),
            Some(Token::True) => Some(Expression::BooleanLiteral(true)),
            Some(Token::False) => Some(Expression::BooleanLiteral(false)),
            Some(Token::Bang) => self.parse_prefix_expression(PrefixOperator::Not),
            Some(Token::Minus) => self.parse_prefix_expression(PrefixOperator::Negate),
            Some(Token::LParen) => self.parse_grouped_expression(),
            Some(Token::If) => self.parse_if_expression(),
            Some(Token::Function) => self.parse_function_literal(),
            Some(Token::LBracket) => self.parse_array_literal(),
            Some(Token::LBrace) => self.parse_hash_literal(),
            token => {
                self.record(ParseError::NoPrefixParseFn {
                    kind: kind_of(token.as_ref()),
                });
                None
            }
        }
    }

    /// Converts an integer literal to its value, recording a parse error for
    /// literals that do not fit into an `i64`.
    fn parse_integer_literal(&mut self, literal: &str) -> Option<Expression> {
        match literal.parse::<i64>() {
            Ok(value) => Some(Expression::IntegerLiteral(value)),
            Err(_) => {
                self.record(ParseError::InvalidIntegerLiteral {
                    literal: literal.to_string(),
                });
                None
            }
        }
    }

    /// Parses `!<operand>` or `-<operand>`. The operand itself is parsed at
    /// prefix precedence, so `-a * b` groups as `(-a) * b`.
    fn parse_prefix_expression(&mut self, operator: PrefixOperator) -> Option<Expression> {
        self.next_token();
        let right = Box::new(self.parse_expression(Precedence::Prefix)?);
        Some(Expression::Prefix { operator, right })
    }

    /// Parses `( <expression> )`. Grouping has no node of its own; the
    /// parentheses only reset the precedence floor.
    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();

        let expression = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&Token::RParen) {
            return None;
        }

        Some(expression)
    }

    /// Parses `if (<condition>) { ... }` with an optional `else { ... }`.
    fn parse_if_expression(&mut self) -> Option<Expression> {
        if !self.expect_peek(&Token::LParen) {
            return None;
        }
        self.next_token();

        let condition = Box::new(self.parse_expression(Precedence::Lowest)?);

        if !self.expect_peek(&Token::RParen) {
            return None;
        }
        if !self.expect_peek(&Token::LBrace) {
            return None;
        }

        let consequence = self.parse_block_statement();

        let alternative = if self.peek_token_is(&Token::Else) {
            self.next_token();

            if !self.expect_peek(&Token::LBrace) {
                return None;
            }

            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expression::If {
            condition,
            consequence,
            alternative,
        })
    }

    /// Parses `fn(<parameters>) { ... }`.
    fn parse_function_literal(&mut self) -> Option<Expression> {
        if !self.expect_peek(&Token::LParen) {
            return None;
        }

        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(&Token::LBrace) {
            return None;
        }

        let body = self.parse_block_statement();

        Some(Expression::FunctionLiteral { parameters, body })
    }

    /// Parses a comma-separated list of parameter names ending in `)`.
    /// An empty list is allowed.
    fn parse_function_parameters(&mut self) -> Option<Vec<String>> {
        let mut parameters = Vec::new();

        if self.peek_token_is(&Token::RParen) {
            self.next_token();
            return Some(parameters);
        }

        self.next_token();
        parameters.push(self.cur_identifier()?);

        while self.peek_token_is(&Token::Comma) {
            self.next_token();
            self.next_token();
            parameters.push(self.cur_identifier()?);
        }

        if !self.expect_peek(&Token::RParen) {
            return None;
        }

        Some(parameters)
    }

    /// Returns the name of the current token if it is an identifier,
    /// recording an error otherwise.
    fn cur_identifier(&mut self) -> Option<String> {
        if let Some(Token::Ident(name)) = self.cur_token() {
            return Some(name.clone());
        }

        let got = kind_of(self.cur_token());
        self.record(ParseError::UnexpectedToken { want: "IDENT", got });
        None
    }

    /// Parses `[ <expression-list> ]`.
    fn parse_array_literal(&mut self) -> Option<Expression> {
        let elements = self.parse_expression_list(&Token::RBracket)?;
        Some(Expression::ArrayLiteral { elements })
    }

    /// Parses `{ <key> : <value>, ... }`. An empty literal is allowed;
    /// pairs keep their source order.
    fn parse_hash_literal(&mut self) -> Option<Expression> {
        let mut pairs = Vec::new();

        while !self.peek_token_is(&Token::RBrace) {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;

            if !self.expect_peek(&Token::Colon) {
                return None;
            }
            self.next_token();

            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));

            if !self.peek_token_is(&Token::RBrace) && !self.expect_peek(&Token::Comma) {
                return None;
            }
        }

        if !self.expect_peek(&Token::RBrace) {
            return None;
        }

        Some(Expression::HashLiteral { pairs })
    }

    /// Parses the right-hand side of a binary operation. The current token
    /// is the operator; its own precedence becomes the floor for the right
    /// operand, making every operator left-associative.
    pub(crate) fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let operator = match self.cur_token() {
            Some(Token::Plus) => InfixOperator::Add,
            Some(Token::Minus) => InfixOperator::Sub,
            Some(Token::Asterisk) => InfixOperator::Mul,
            Some(Token::Slash) => InfixOperator::Div,
            Some(Token::Lt) => InfixOperator::Lt,
            Some(Token::Gt) => InfixOperator::Gt,
            Some(Token::Eq) => InfixOperator::Eq,
            Some(Token::NotEq) => InfixOperator::NotEq,
            _ => unreachable!("caller dispatched on an operator token"),
        };

        let precedence = self.cur_precedence();
        self.next_token();
        let right = Box::new(self.parse_expression(precedence)?);

        Some(Expression::Infix {
            left: Box::new(left),
            operator,
            right,
        })
    }

    /// Parses the argument list of a call. The current token is the opening
    /// parenthesis; the callee expression has already been parsed.
    pub(crate) fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let arguments = self.parse_expression_list(&Token::RParen)?;
        Some(Expression::Call {
            function: Box::new(function),
            arguments,
        })
    }

    /// Parses `[<index>]` after an already-parsed target expression.
    pub(crate) fn parse_index_expression(&mut self, left: Expression) -> Option<Expression> {
        self.next_token();

        let index = Box::new(self.parse_expression(Precedence::Lowest)?);

        if !self.expect_peek(&Token::RBracket) {
            return None;
        }

        Some(Expression::Index {
            left: Box::new(left),
            index,
        })
    }

    /// Parses a comma-separated expression list up to the given closing
    /// token. Shared by array literals and call argument lists; an
    /// immediately encountered closing token produces an empty list.
    fn parse_expression_list(&mut self, end: &Token) -> Option<Vec<Expression>> {
        let mut list = Vec::new();

        if self.peek_token_is(end) {
            self.next_token();
            return Some(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_token_is(&Token::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(end) {
            return None;
        }

        Some(list)
    }
}
