use crate::{
    ast::statements::{Function, Prototype},
    errors::errors::Error,
    lexer::tokens::Token,
    parser::expr::parse_expression,
};

use super::parser::Parser;

/// Parses `name(param param ...)`. Parameters are separated by whitespace only.
pub fn parse_prototype(parser: &mut Parser) -> Result<Prototype, Error> {
    let name = match parser.current_token() {
        Token::Identifier(name) => name.clone(),
        _ => return Err(parser.unexpected("Expected function name in prototype")),
    };

    parser.advance();

    if !parser.current_token().is_symbol('(') {
        return Err(parser.unexpected("Expected '(' in prototype"));
    }

    let mut params = vec![];
    while let Token::Identifier(param) = parser.advance() {
        params.push(param.clone());
    }

    parser.expect_symbol(')', "Expected ')' in prototype")?;

    Ok(Prototype { name, params })
}

pub fn parse_definition(parser: &mut Parser) -> Result<Function, Error> {
    parser.advance();

    let prototype = parse_prototype(parser).map_err(Error::into_incomplete)?;
    let body = parse_expression(parser).map_err(Error::into_incomplete)?;

    Ok(Function { prototype, body })
}

pub fn parse_extern(parser: &mut Parser) -> Result<Prototype, Error> {
    parser.advance();
    parse_prototype(parser).map_err(Error::into_incomplete)
}
