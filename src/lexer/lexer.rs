use std::rc::Rc;

use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// ASCII control-character names accepted after `#` in char literals and
/// after `$` in string literals, indexed by character code.
pub const CONTROL_NAMES: [&str; 32] = [
    "NUL", "SOH", "STX", "ETX", "EOT", "ENQ", "ACK", "BEL", "BS", "TAB", "LF", "VT", "FF", "CR",
    "SO", "SI", "DLE", "DC1", "DC2", "DC3", "DC4", "NAK", "SYN", "ETB", "CAN", "EM", "SUB", "ESC",
    "FS", "GS", "RS", "US",
];

pub type RegexHandler = fn(&mut Lexer, Regex);

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

#[derive(Clone)]
pub struct Lexer {
    patterns: Vec<RegexPattern>,
    tokens: Vec<Token>,
    source: String,
    pos: i32,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            tokens: vec![],
            patterns: vec![
                RegexPattern { regex: Regex::new("[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
                RegexPattern { regex: Regex::new("\\{[0-9]+\\}[0-9A-Z]+|[0-9]+").unwrap(), handler: integer_handler },
                RegexPattern { regex: Regex::new("\\s+").unwrap(), handler: skip_handler },
                RegexPattern { regex: Regex::new("'#\\{[0-9A-F]+\\}'|'#[A-Z0-9]+'|'[^']'").unwrap(), handler: char_handler },
                RegexPattern { regex: Regex::new("\"[^\"]*\"").unwrap(), handler: string_handler },
                RegexPattern { regex: Regex::new("\\/\\/.*").unwrap(), handler: skip_handler },
                RegexPattern { regex: Regex::new(":=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::ColonEquals, ":=") },
                RegexPattern { regex: Regex::new("<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=") },
                RegexPattern { regex: Regex::new("<>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "<>") },
                RegexPattern { regex: Regex::new("<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
                RegexPattern { regex: Regex::new(">=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=") },
                RegexPattern { regex: Regex::new(">").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
                RegexPattern { regex: Regex::new("=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "=") },
                RegexPattern { regex: Regex::new("\\*\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::StarStar, "**") },
                RegexPattern { regex: Regex::new("\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
                RegexPattern { regex: Regex::new("/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
                RegexPattern { regex: Regex::new("\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
                RegexPattern { regex: Regex::new("-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
                RegexPattern { regex: Regex::new("\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
                RegexPattern { regex: Regex::new("\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
                RegexPattern { regex: Regex::new("\\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[") },
                RegexPattern { regex: Regex::new("\\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]") },
                RegexPattern { regex: Regex::new(",").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
                RegexPattern { regex: Regex::new(";").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
            ],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: i32) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.source[self.pos as usize..].chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos as usize..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos as usize >= self.source.len()
    }
}

fn integer_handler(lexer: &mut Lexer, regex: Regex) {
    let remaining = lexer.remainder().to_string();
    let matched = regex.find(&remaining).unwrap().as_str().to_string();

    lexer.push(MK_TOKEN!(TokenKind::Integer, matched.clone(), Span {
        start: Position(lexer.pos as u32, Rc::clone(&lexer.file)),
        end: Position((lexer.pos + matched.len() as i32) as u32, Rc::clone(&lexer.file)),
    }));
    lexer.advance_n(matched.len() as i32);
}

fn skip_handler(lexer: &mut Lexer, regex: Regex) {
    let remaining = lexer.remainder().to_string();
    let matched = regex.find(&remaining).unwrap().end();
    lexer.advance_n(matched as i32);
}

fn char_handler(lexer: &mut Lexer, regex: Regex) {
    let remaining = lexer.remainder().to_string();
    let matched = regex.find(&remaining).unwrap().as_str().to_string();

    // The token keeps the form between the quotes; the parser decodes it.
    let inner = matched[1..matched.len() - 1].to_string();

    lexer.push(MK_TOKEN!(TokenKind::CharLit, inner, Span {
        start: Position(lexer.pos as u32, Rc::clone(&lexer.file)),
        end: Position((lexer.pos + matched.len() as i32) as u32, Rc::clone(&lexer.file)),
    }));
    lexer.advance_n(matched.len() as i32);
}

fn string_handler(lexer: &mut Lexer, regex: Regex) {
    let remaining = lexer.remainder().to_string();
    let matched = regex.find(&remaining).unwrap().as_str().to_string();

    let decoded = decode_string(&matched[1..matched.len() - 1]);

    lexer.push(MK_TOKEN!(TokenKind::String, decoded, Span {
        start: Position(lexer.pos as u32, Rc::clone(&lexer.file)),
        end: Position((lexer.pos + matched.len() as i32) as u32, Rc::clone(&lexer.file)),
    }));
    lexer.advance_n(matched.len() as i32);
}

fn symbol_handler(lexer: &mut Lexer, regex: Regex) {
    let remaining = lexer.remainder().to_string();
    let value = regex.find(&remaining).unwrap().as_str().to_string();

    let span = Span {
        start: Position(lexer.pos as u32, Rc::clone(&lexer.file)),
        end: Position((lexer.pos + value.len() as i32) as u32, Rc::clone(&lexer.file)),
    };

    if let Some(kind) = RESERVED_LOOKUP.get(value.as_str()) {
        lexer.push(MK_TOKEN!(*kind, value.clone(), span));
    } else {
        lexer.push(MK_TOKEN!(TokenKind::Identifier, value.clone(), span));
    }

    lexer.advance_n(value.len() as i32);
}

/// Decodes an integer literal: plain decimal (`42`) or radix-prefixed
/// (`{16}2F`, radix 2..=36 with digits `0-9A-Z`).
pub fn parse_integer_literal(text: &str) -> Option<i64> {
    if let Some(rest) = text.strip_prefix('{') {
        let (base, digits) = rest.split_once('}')?;
        let base: u32 = base.parse().ok()?;
        if !(2..=36).contains(&base) {
            return None;
        }
        i64::from_str_radix(digits, base).ok()
    } else {
        text.parse().ok()
    }
}

/// Decodes the inside of a char literal: `a`, a control name (`#TAB`) or
/// a hex escape (`#{1B}`).
pub fn parse_char_literal(text: &str) -> Option<char> {
    if let Some(rest) = text.strip_prefix("#{") {
        let hex = rest.strip_suffix('}')?;
        let code = u32::from_str_radix(hex, 16).ok()?;
        char::from_u32(code)
    } else if let Some(name) = text.strip_prefix('#') {
        let code = CONTROL_NAMES.iter().position(|&n| n == name)?;
        char::from_u32(code as u32)
    } else {
        let mut chars = text.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Some(c)
    }
}

/// Decodes string-literal escapes: `$QUOT` for a double quote, `$NAME`
/// and `${HEX}` for control characters. Unknown escapes stay verbatim.
fn decode_string(raw: &str) -> String {
    let mut result = raw.replace("$QUOT", "\"");
    for (code, name) in CONTROL_NAMES.iter().enumerate() {
        let replacement = char::from_u32(code as u32).unwrap().to_string();
        result = result.replace(&format!("${}", name), &replacement);
        result = result.replace(&format!("${{{:X}}}", code), &replacement);
    }
    result
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let mut matched = false;

        for pattern in lex.clone().patterns.iter() {
            let remaining = lex.remainder().to_string();
            let match_here = pattern.regex.find(&remaining);

            if match_here.is_some() && match_here.unwrap().start() == 0 {
                (pattern.handler)(&mut lex, pattern.regex.clone());
                matched = true;
                break;
            }
        }

        if !matched {
            return Err(Error::new(
                ErrorImpl::UnrecognisedToken { token: lex.at().to_string() },
                Position(lex.pos as u32, Rc::clone(&lex.file)),
            ));
        }
    }

    lex.push(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), Span {
        start: Position(lex.pos as u32, Rc::clone(&lex.file)),
        end: Position(lex.pos as u32, Rc::clone(&lex.file)),
    }));
    Ok(lex.tokens)
}
