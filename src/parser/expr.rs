use crate::{
    ast::{
        ast::Expr,
        statements::{Function, Prototype},
    },
    errors::errors::Error,
    lexer::tokens::Token,
};

use super::parser::Parser;

pub fn parse_expression(parser: &mut Parser) -> Result<Expr, Error> {
    let lhs = parse_primary(parser)?;
    parse_bin_op_rhs(parser, 0, lhs)
}

pub fn parse_primary(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token() {
        Token::Identifier(_) => parse_identifier_expr(parser),
        Token::Number(_) => parse_number_expr(parser),
        Token::Symbol('(') => parse_paren_expr(parser),
        _ => Err(parser.unexpected("unknown token when expecting an expression")),
    }
}

pub fn parse_number_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let value = match parser.current_token() {
        Token::Number(value) => *value,
        _ => return Err(parser.unexpected("Expected number")),
    };

    parser.advance();
    Ok(Expr::number(value))
}

/// Parses `name` as a variable reference, or `name(args...)` as a call.
pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let name = match parser.current_token() {
        Token::Identifier(name) => name.clone(),
        _ => return Err(parser.unexpected("Expected identifier")),
    };

    parser.advance();

    if !parser.current_token().is_symbol('(') {
        return Ok(Expr::variable(name));
    }

    let args = parser.nested(parse_call_args)?;

    Ok(Expr::call(name, args))
}

/// Parses `(arg, arg, ...)` up to and including the closing `)`.
fn parse_call_args(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    parser.advance();

    let mut args = vec![];

    if !parser.current_token().is_symbol(')') {
        loop {
            args.push(parse_expression(parser).map_err(Error::into_incomplete)?);

            if parser.current_token().is_symbol(')') {
                break;
            }

            if !parser.current_token().is_symbol(',') {
                return Err(parser.unexpected("Expected ')' or ',' in argument list"));
            }

            parser.advance();
        }
    }

    parser.advance();

    Ok(args)
}

/// Grouping adds no node of its own; the inner expression is returned as is.
pub fn parse_paren_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parser
        .nested(parse_expression)
        .map_err(Error::into_incomplete)?;
    parser.expect_symbol(')', "Expected ')'")?;

    Ok(expr)
}

/// Precedence climbing over `lhs op primary op primary ...`.
///
/// Stops at the first token whose precedence is below `min_precedence`. When
/// the operator after a right-hand side binds tighter than the one before it,
/// that right-hand side is extended first with a minimum of one above the
/// current operator, which makes every operator left-associative.
pub fn parse_bin_op_rhs(
    parser: &mut Parser,
    min_precedence: i32,
    mut lhs: Expr,
) -> Result<Expr, Error> {
    loop {
        let token_precedence = parser.get_token_precedence();

        if token_precedence < min_precedence {
            return Ok(lhs);
        }

        let op = match parser.current_token() {
            Token::Symbol(op) => *op,
            _ => return Ok(lhs),
        };

        parser.advance();

        let mut rhs = parse_primary(parser).map_err(Error::into_incomplete)?;

        let next_precedence = parser.get_token_precedence();
        if token_precedence < next_precedence {
            rhs = parse_bin_op_rhs(parser, token_precedence + 1, rhs)?;
        }

        lhs = Expr::binary(op, lhs, rhs);
    }
}

/// Wraps a bare expression in a nameless, parameterless function.
pub fn parse_top_level_expr(parser: &mut Parser) -> Result<Function, Error> {
    let body = parse_expression(parser)?;

    Ok(Function {
        prototype: Prototype::anonymous(),
        body,
    })
}
