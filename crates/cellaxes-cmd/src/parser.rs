//! Command parser using nom
//!
//! Parses drawing command strings into structured `ParsedCommand` objects.
//!
//! # Supported Syntax
//!
//! - Simple commands: `draw_cell 1abc`
//! - Named arguments: `draw_cell 1abc, length=12`
//! - Bracketed lists: `draw_cell 1abc, origin=[5, 5, 5]`
//! - Quoted strings: `cgo_arrow [0,0,0], [1,0,0], name="my arrow"`

use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, multispace0, none_of},
    combinator::{map, recognize},
    multi::{many0, separated_list0},
    number::complete::recognize_float,
    sequence::{delimited, preceded, tuple},
    IResult,
};

use crate::args::{ArgValue, ParsedCommand};
use crate::error::ParseError;

/// Parse a single command from a string
///
/// # Example
/// ```
/// use cellaxes_cmd::parse_command;
///
/// let cmd = parse_command("draw_cell 1abc, length=12").unwrap();
/// assert_eq!(cmd.name, "draw_cell");
/// assert_eq!(cmd.get_str(0), Some("1abc"));
/// assert_eq!(cmd.get_named_float("length"), Some(12.0));
/// ```
pub fn parse_command(input: &str) -> Result<ParsedCommand, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::EmptyCommand);
    }

    match parse_single_command(input) {
        Ok(("", cmd)) => Ok(cmd),
        Ok((remaining, _)) => Err(ParseError::TrailingInput(remaining.to_string())),
        Err(e) => Err(e.into()),
    }
}

/// Parse a single command (name and arguments)
fn parse_single_command(input: &str) -> IResult<&str, ParsedCommand> {
    let (input, _) = multispace0(input)?;
    let (input, name) = parse_command_name(input)?;
    let (input, _) = multispace0(input)?;

    let (input, args) = if input.is_empty() {
        (input, Vec::new())
    } else {
        parse_arguments(input)?
    };

    Ok((
        input,
        ParsedCommand {
            name: name.to_string(),
            args,
        },
    ))
}

/// Parse a command name (alphanumeric + underscore)
fn parse_command_name(input: &str) -> IResult<&str, &str> {
    recognize(take_while1(|c: char| c.is_alphanumeric() || c == '_'))(input)
}

/// Parse comma-separated command arguments
fn parse_arguments(input: &str) -> IResult<&str, Vec<(Option<String>, ArgValue)>> {
    let (input, first) = parse_argument(input)?;
    let (input, rest) = many0(preceded(
        tuple((multispace0, char(','), multispace0)),
        parse_argument,
    ))(input)?;

    let mut args = vec![first];
    args.extend(rest);
    Ok((input, args))
}

/// Parse a single argument (possibly named)
fn parse_argument(input: &str) -> IResult<&str, (Option<String>, ArgValue)> {
    let (input, _) = multispace0(input)?;

    // Try named argument (name=value) first
    if let Ok((remaining, (name, _, _, value))) = tuple((
        parse_arg_name,
        multispace0,
        char('='),
        preceded(multispace0, parse_arg_value),
    ))(input)
    {
        return Ok((remaining, (Some(name.to_string()), value)));
    }

    // Fall back to positional
    let (input, value) = parse_arg_value(input)?;
    Ok((input, (None, value)))
}

/// Parse an argument name (for named arguments)
fn parse_arg_name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_')(input)
}

/// Parse an argument value
fn parse_arg_value(input: &str) -> IResult<&str, ArgValue> {
    alt((
        parse_list,
        map(parse_quoted_string, ArgValue::String),
        parse_number,
        map(parse_unquoted_value, |s| ArgValue::String(s.to_string())),
    ))(input)
}

/// Parse a bracketed list
fn parse_list(input: &str) -> IResult<&str, ArgValue> {
    let (input, items) = delimited(
        tuple((char('['), multispace0)),
        separated_list0(
            tuple((multispace0, char(','), multispace0)),
            parse_arg_value,
        ),
        tuple((multispace0, char(']'))),
    )(input)?;

    Ok((input, ArgValue::List(items)))
}

/// Parse a quoted string (single or double quotes)
fn parse_quoted_string(input: &str) -> IResult<&str, String> {
    alt((
        map(
            delimited(char('"'), recognize(many0(none_of("\""))), char('"')),
            |s: &str| s.to_string(),
        ),
        map(
            delimited(char('\''), recognize(many0(none_of("'"))), char('\'')),
            |s: &str| s.to_string(),
        ),
    ))(input)
}

/// Parse a number (int or float)
fn parse_number(input: &str) -> IResult<&str, ArgValue> {
    let (remaining, num_str) = recognize_float(input)?;

    // Reject numbers glued to identifiers like "1abc"
    if let Some(next_char) = remaining.chars().next() {
        if next_char.is_alphanumeric() || next_char == '_' || next_char == '.' {
            return Err(nom::Err::Error(nom::error::Error::new(
                input,
                nom::error::ErrorKind::Float,
            )));
        }
    }

    if let Ok(i) = num_str.parse::<i64>() {
        return Ok((remaining, ArgValue::Int(i)));
    }
    if let Ok(f) = num_str.parse::<f64>() {
        return Ok((remaining, ArgValue::Float(f)));
    }

    Err(nom::Err::Error(nom::error::Error::new(
        input,
        nom::error::ErrorKind::Float,
    )))
}

/// Parse an unquoted value (stops at comma or brackets)
fn parse_unquoted_value(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !matches!(c, ',' | ';' | '\n' | '\r' | '[' | ']'))(input)
        .map(|(remaining, value)| (remaining, value.trim_end()))
}
