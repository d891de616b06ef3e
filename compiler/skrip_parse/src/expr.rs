//! Expression parsing: the Pratt dispatch tables and sub-grammars.
//!
//! `prefix_table` and `infix_table` map a token kind to the parser method
//! that handles it in that position. The main loop in `parse_expression`
//! folds infix operators onto the accumulated left expression while the
//! peeked operator binds tighter than the caller's precedence.

use skrip_ir::{Expression, FunctionLiteral, IfScene, InfixOperator, PrefixOperator, TokenKind};

use crate::{ParseError, Parser, Precedence};

/// A prefix-position parser: consumes the current token (and whatever
/// belongs to it) and produces an expression.
type PrefixFn = for<'a, 'b> fn(&'a mut Parser<'b>) -> Option<Expression>;

/// An infix-position parser: combines the already-parsed left expression
/// with the operator at the current token.
type InfixFn = for<'a, 'b> fn(&'a mut Parser<'b>, Expression) -> Option<Expression>;

fn prefix_table(kind: TokenKind) -> Option<PrefixFn> {
    match kind {
        TokenKind::Int => Some(|p| Parser::parse_integer_literal(p)),
        TokenKind::Float => Some(|p| Parser::parse_float_literal(p)),
        TokenKind::String => Some(|p| Parser::parse_string_literal(p)),
        TokenKind::Nil => Some(|p| Parser::parse_nil_literal(p)),
        TokenKind::True | TokenKind::False => Some(|p| Parser::parse_boolean_literal(p)),
        TokenKind::Identifier => Some(|p| Parser::parse_identifier(p)),
        TokenKind::Function => Some(|p| Parser::parse_function_literal(p)),
        TokenKind::LeftBracket => Some(|p| Parser::parse_array_literal(p)),
        TokenKind::LeftBrace => Some(|p| Parser::parse_hash_literal(p)),
        TokenKind::LeftParenthesis => Some(|p| Parser::parse_grouped_expression(p)),
        TokenKind::Bang | TokenKind::Minus | TokenKind::Plus => {
            Some(|p| Parser::parse_prefix_expression(p))
        }
        TokenKind::If => Some(|p| Parser::parse_if_expression(p)),
        TokenKind::For => Some(|p| Parser::parse_for_expression(p)),
        TokenKind::Break => Some(|p| Parser::parse_break_expression(p)),
        TokenKind::Continue => Some(|p| Parser::parse_continue_expression(p)),
        _ => None,
    }
}

fn infix_table(kind: TokenKind) -> Option<InfixFn> {
    match kind {
        TokenKind::Plus
        | TokenKind::Minus
        | TokenKind::Asterisk
        | TokenKind::Slash
        | TokenKind::Lt
        | TokenKind::LtEq
        | TokenKind::Gt
        | TokenKind::GtEq
        | TokenKind::Eq
        | TokenKind::NotEq
        | TokenKind::And
        | TokenKind::Or => Some(|p, left| Parser::parse_infix_expression(p, left)),
        TokenKind::Range => Some(|p, left| Parser::parse_range_expression(p, left)),
        TokenKind::LeftBracket => Some(|p, left| Parser::parse_index_expression(p, left)),
        TokenKind::LeftParenthesis => Some(|p, left| Parser::parse_call_expression(p, left)),
        TokenKind::Dot => Some(|p, left| Parser::parse_dot_expression(p, left)),
        TokenKind::Assign => Some(|p, left| Parser::parse_assign_expression(p, left)),
        _ => None,
    }
}

fn infix_operator(kind: TokenKind) -> Option<InfixOperator> {
    match kind {
        TokenKind::Plus => Some(InfixOperator::Plus),
        TokenKind::Minus => Some(InfixOperator::Minus),
        TokenKind::Asterisk => Some(InfixOperator::Asterisk),
        TokenKind::Slash => Some(InfixOperator::Slash),
        TokenKind::Lt => Some(InfixOperator::Lt),
        TokenKind::LtEq => Some(InfixOperator::LtEq),
        TokenKind::Gt => Some(InfixOperator::Gt),
        TokenKind::GtEq => Some(InfixOperator::GtEq),
        TokenKind::Eq => Some(InfixOperator::Eq),
        TokenKind::NotEq => Some(InfixOperator::NotEq),
        TokenKind::And => Some(InfixOperator::And),
        TokenKind::Or => Some(InfixOperator::Or),
        _ => None,
    }
}

impl Parser<'_> {
    /// The Pratt loop. Parses the prefix position, then keeps folding
    /// infix operators while they bind tighter than `precedence`.
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let Some(prefix) = prefix_table(self.current.kind) else {
            self.errors
                .push(ParseError::no_prefix(self.current.line, self.current.kind));
            return None;
        };
        let mut left = prefix(self)?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < Precedence::of(self.peek.kind) {
            let Some(infix) = infix_table(self.peek.kind) else {
                return Some(left);
            };
            self.advance();
            left = infix(self, left)?;
        }

        Some(left)
    }

    // --- Prefix position ---

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        match self.current.literal.parse::<i64>() {
            Ok(value) => Some(Expression::Integer(value)),
            Err(_) => {
                self.errors.push(ParseError::bad_literal(
                    self.current.line,
                    &self.current.literal,
                    "integer",
                ));
                None
            }
        }
    }

    fn parse_float_literal(&mut self) -> Option<Expression> {
        match self.current.literal.parse::<f64>() {
            Ok(value) => Some(Expression::Float(value)),
            Err(_) => {
                self.errors.push(ParseError::bad_literal(
                    self.current.line,
                    &self.current.literal,
                    "float",
                ));
                None
            }
        }
    }

    fn parse_string_literal(&mut self) -> Option<Expression> {
        Some(Expression::Str(self.current.literal.clone()))
    }

    fn parse_nil_literal(&mut self) -> Option<Expression> {
        Some(Expression::Nil)
    }

    fn parse_boolean_literal(&mut self) -> Option<Expression> {
        Some(Expression::Boolean(self.current_is(TokenKind::True)))
    }

    fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(self.current.literal.clone()))
    }

    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let operator = match self.current.kind {
            TokenKind::Bang => PrefixOperator::Bang,
            TokenKind::Minus => PrefixOperator::Minus,
            _ => PrefixOperator::Plus,
        };

        self.advance();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::Prefix {
            operator,
            right: Box::new(right),
        })
    }

    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.advance();
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RightParenthesis)?;
        Some(expression)
    }

    fn parse_array_literal(&mut self) -> Option<Expression> {
        let elements = self.parse_expression_list(TokenKind::RightBracket)?;
        Some(Expression::Array(elements))
    }

    fn parse_hash_literal(&mut self) -> Option<Expression> {
        let mut pairs = Vec::new();

        while !self.peek_is(TokenKind::RightBrace) {
            self.advance();
            let key = self.parse_expression(Precedence::Lowest)?;

            self.expect_peek(TokenKind::Colon)?;
            self.advance();
            let value = self.parse_expression(Precedence::Lowest)?;

            pairs.push((key, value));

            if !self.peek_is(TokenKind::RightBrace) {
                self.expect_peek(TokenKind::Comma)?;
            }
        }

        self.expect_peek(TokenKind::RightBrace)?;
        Some(Expression::Hash(pairs))
    }

    fn parse_function_literal(&mut self) -> Option<Expression> {
        self.expect_peek(TokenKind::LeftParenthesis)?;
        let parameters = self.parse_function_parameters()?;

        self.expect_peek(TokenKind::LeftBrace)?;
        let block = self.parse_block();

        Some(Expression::Function(FunctionLiteral { parameters, block }))
    }

    pub(crate) fn parse_function_parameters(&mut self) -> Option<Vec<String>> {
        let mut parameters = Vec::new();

        if self.peek_is(TokenKind::RightParenthesis) {
            self.advance();
            return Some(parameters);
        }

        self.expect_peek(TokenKind::Identifier)?;
        parameters.push(self.current.literal.clone());

        while self.peek_is(TokenKind::Comma) {
            self.advance();
            self.expect_peek(TokenKind::Identifier)?;
            parameters.push(self.current.literal.clone());
        }

        self.expect_peek(TokenKind::RightParenthesis)?;
        Some(parameters)
    }

    fn parse_if_expression(&mut self) -> Option<Expression> {
        let mut scenes = vec![self.parse_if_scene()?];
        let mut alternative = None;

        while self.peek_is(TokenKind::Else) {
            self.advance();
            if self.peek_is(TokenKind::If) {
                self.advance();
                scenes.push(self.parse_if_scene()?);
            } else {
                self.expect_peek(TokenKind::LeftBrace)?;
                alternative = Some(self.parse_block());
                break;
            }
        }

        Some(Expression::If {
            scenes,
            alternative,
        })
    }

    /// `if ( condition ) { block }` with the current token on `if`.
    fn parse_if_scene(&mut self) -> Option<IfScene> {
        self.expect_peek(TokenKind::LeftParenthesis)?;
        self.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RightParenthesis)?;

        self.expect_peek(TokenKind::LeftBrace)?;
        let block = self.parse_block();

        Some(IfScene { condition, block })
    }

    /// Dispatch between the three loop forms on the tokens after `for`.
    fn parse_for_expression(&mut self) -> Option<Expression> {
        if self.peek_is(TokenKind::LeftBrace) {
            self.advance();
            let block = self.parse_block();
            return Some(Expression::ForEver { block });
        }

        self.expect_peek(TokenKind::Identifier)?;
        let first = self.current.literal.clone();

        if self.peek_is(TokenKind::Comma) {
            self.advance();
            self.expect_peek(TokenKind::Identifier)?;
            let second = self.current.literal.clone();

            self.expect_peek(TokenKind::In)?;
            self.advance();
            let iterable = self.parse_expression(Precedence::Lowest)?;

            self.expect_peek(TokenKind::LeftBrace)?;
            let block = self.parse_block();

            return Some(Expression::ForEachHash {
                key_name: first,
                value_name: second,
                iterable: Box::new(iterable),
                block,
            });
        }

        self.expect_peek(TokenKind::In)?;
        self.advance();
        let iterable = self.parse_expression(Precedence::Lowest)?;

        self.expect_peek(TokenKind::LeftBrace)?;
        let block = self.parse_block();

        Some(Expression::ForEachArrayOrRange {
            value_name: first,
            iterable: Box::new(iterable),
            block,
        })
    }

    fn parse_break_expression(&mut self) -> Option<Expression> {
        Some(Expression::Break)
    }

    fn parse_continue_expression(&mut self) -> Option<Expression> {
        Some(Expression::Continue)
    }

    // --- Infix position ---

    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let operator = infix_operator(self.current.kind)?;
        let precedence = Precedence::of(self.current.kind);

        self.advance();
        let right = self.parse_expression(precedence)?;

        Some(Expression::Infix {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }

    fn parse_range_expression(&mut self, left: Expression) -> Option<Expression> {
        self.advance();
        let end = self.parse_expression(Precedence::Range)?;

        Some(Expression::Range {
            start: Box::new(left),
            end: Box::new(end),
        })
    }

    fn parse_index_expression(&mut self, left: Expression) -> Option<Expression> {
        self.advance();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RightBracket)?;

        Some(Expression::Index {
            left: Box::new(left),
            index: Box::new(index),
        })
    }

    fn parse_call_expression(&mut self, callee: Expression) -> Option<Expression> {
        let arguments = self.parse_expression_list(TokenKind::RightParenthesis)?;

        Some(Expression::Call {
            callee: Box::new(callee),
            arguments,
        })
    }

    fn parse_dot_expression(&mut self, left: Expression) -> Option<Expression> {
        self.expect_peek(TokenKind::Identifier)?;

        Some(Expression::Dot {
            left: Box::new(left),
            item: self.current.literal.clone(),
        })
    }

    /// `target = value`. The target shape is checked here so a bad
    /// assignment is a parse error, not a runtime surprise.
    fn parse_assign_expression(&mut self, target: Expression) -> Option<Expression> {
        if !matches!(
            target,
            Expression::Identifier(_) | Expression::Index { .. } | Expression::Dot { .. }
        ) {
            self.errors.push(ParseError::new(
                self.current.line,
                format!("invalid assignment target: {target}"),
            ));
            return None;
        }

        self.advance();
        let value = self.parse_expression(Precedence::Lowest)?;

        Some(Expression::Assign {
            target: Box::new(target),
            value: Box::new(value),
        })
    }

    /// Comma-separated expressions up to (and past) the `end` delimiter.
    /// Trailing commas are not permitted.
    fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expression>> {
        let mut items = Vec::new();

        if self.peek_is(end) {
            self.advance();
            return Some(items);
        }

        self.advance();
        items.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(TokenKind::Comma) {
            self.advance();
            self.advance();
            items.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(end)?;
        Some(items)
    }
}
