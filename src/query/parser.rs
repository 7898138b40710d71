//! Parsers for command-line query input.
//!
//! Grammar for polygons (in rough EBNF):
//!
//! polygon = ws* vertex (ws+ vertex)* ws*
//! vertex  = NUMBER "," NUMBER

use geo_types::Coord;
use winnow::ascii::{multispace0, multispace1};
use winnow::combinator::{delimited, separated, separated_pair};
use winnow::prelude::*;
use winnow::token::take_till;

use super::ast::{CompareOp, FieldCondition};
use super::error::QueryError;

type PResult<T> = Result<T, winnow::error::ErrMode<winnow::error::ContextError>>;

/// Parse a `field<op>value` expression.
///
/// The first operator of [`CompareOp::PRECEDENCE`] that occurs anywhere in
/// the expression wins, and the expression is split at its first
/// occurrence. Field and value are trimmed.
pub fn parse_condition(expr: &str) -> Result<FieldCondition, QueryError> {
    CompareOp::PRECEDENCE
        .iter()
        .find_map(|op| {
            expr.split_once(op.symbol())
                .map(|(field, value)| FieldCondition::new(field.trim(), *op, value.trim()))
        })
        .ok_or_else(|| QueryError::InvalidCondition(expr.to_string()))
}

/// Lex one number of a vertex; stops at the comma or whitespace.
fn number(input: &mut &str) -> PResult<f64> {
    take_till(1.., |c: char| c == ',' || c.is_whitespace())
        .try_map(str::parse::<f64>)
        .parse_next(input)
}

fn vertex(input: &mut &str) -> PResult<Coord<f64>> {
    separated_pair(number, ',', number)
        .map(|(x, y)| Coord { x, y })
        .parse_next(input)
}

fn vertices(input: &mut &str) -> PResult<Vec<Coord<f64>>> {
    delimited(multispace0, separated(1.., vertex, multispace1), multispace0).parse_next(input)
}

/// Parse whitespace-separated `lat,lon` pairs into polygon vertices.
///
/// Blank input means "no polygon" and yields `Ok(None)`.
pub fn parse_polygon(input: &str) -> Result<Option<Vec<Coord<f64>>>, QueryError> {
    if input.trim().is_empty() {
        return Ok(None);
    }

    let coords = vertices.parse(input).map_err(|e| QueryError::InvalidPolygon {
        input: input.to_string(),
        reason: e.to_string(),
    })?;

    if coords.len() < 3 {
        return Err(QueryError::TooFewVertices(coords.len()));
    }

    Ok(Some(coords))
}
