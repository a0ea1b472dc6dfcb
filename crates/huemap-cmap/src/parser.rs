use crate::ast::{CmapDocument, Stop};
use crate::error::ParseError;
use crate::lexer::{Lexer, Token, TokenWithPos};

/// Largest `resolution` accepted: every integer up to 2^24 is exact in
/// `f32`, the type numbers are lexed as.
pub const MAX_RESOLUTION: usize = 1 << 24;

// ── Parser ────────────────────────────────────────────────────────────────

pub struct Parser {
    tokens: Vec<TokenWithPos>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<TokenWithPos>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn current_pos(&self) -> (usize, usize) {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map(|t| (t.line, t.col))
            .unwrap_or((1, 1))
    }

    fn peek(&self) -> &Token {
        self.peek_ahead(0)
    }

    fn peek_ahead(&self, offset: usize) -> &Token {
        self.tokens.get(self.pos + offset).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) -> Token {
        let tok = self.peek().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        let (line, col) = self.current_pos();
        ParseError::new(msg, line, col)
    }

    fn expect_number(&mut self, what: &str) -> Result<f32, ParseError> {
        match self.peek() {
            Token::Number(n) => {
                let n = *n;
                self.advance();
                Ok(n)
            }
            tok => Err(self.err(format!("expected {}, got {:?}", what, tok))),
        }
    }

    // ── Document ──────────────────────────────────────────────────────────

    pub fn parse_document(&mut self) -> Result<CmapDocument, ParseError> {
        let mut doc = CmapDocument::default();

        loop {
            match self.peek() {
                Token::Eof => break,
                Token::Number(_) => doc.stops.push(self.parse_stop()?),
                Token::Ident(name) => match name.clone().as_str() {
                    "resolution" => {
                        if doc.resolution.is_some() {
                            return Err(self.err("duplicate `resolution` directive"));
                        }
                        doc.resolution = Some(self.parse_resolution()?);
                    }
                    "domain" => {
                        if doc.domain.is_some() {
                            return Err(self.err("duplicate `domain` directive"));
                        }
                        doc.domain = Some(self.parse_domain()?);
                    }
                    other => {
                        return Err(self.err(format!(
                            "unknown directive {:?} (expected `resolution`, `domain`, or a `value: color` stop)",
                            other
                        )));
                    }
                },
                tok => return Err(self.err(format!("unexpected {:?} at start of entry", tok))),
            }
        }

        Ok(doc)
    }

    // ── Directives ────────────────────────────────────────────────────────

    fn parse_resolution(&mut self) -> Result<usize, ParseError> {
        self.advance(); // `resolution`
        let (line, col) = self.current_pos();
        let n = self.expect_number("a sample count")?;
        if n < 1.0 || n.fract() != 0.0 {
            return Err(ParseError::new(
                format!("resolution must be a positive integer, got {}", n),
                line,
                col,
            ));
        }
        if n > MAX_RESOLUTION as f32 {
            return Err(ParseError::new(
                format!("resolution must be at most {}, got {}", MAX_RESOLUTION, n),
                line,
                col,
            ));
        }
        Ok(n as usize)
    }

    fn parse_domain(&mut self) -> Result<(f32, f32), ParseError> {
        self.advance(); // `domain`
        let min = self.expect_number("domain minimum")?;
        if self.peek() == &Token::Comma {
            self.advance();
        }
        let max = self.expect_number("domain maximum")?;
        Ok((min, max))
    }

    // ── Stop ──────────────────────────────────────────────────────────────

    /// `value ':' (#hex | n [,] n [,] n [[,] n])`
    fn parse_stop(&mut self) -> Result<Stop, ParseError> {
        let (line, col) = self.current_pos();
        let value = self.expect_number("a stop value")?;
        if self.advance() != Token::Colon {
            return Err(ParseError::new(format!("expected ':' after stop value {}", value), line, col));
        }

        if let Token::Color(rgba) = self.peek() {
            let channels = rgba.iter().map(|&c| c as f32 / 255.0).collect();
            self.advance();
            return Ok(Stop { value, channels, line });
        }

        let mut channels = vec![self.expect_number("a color channel")?];
        loop {
            match (self.peek().clone(), self.peek_ahead(1).clone()) {
                (Token::Comma, _) => {
                    self.advance();
                    channels.push(self.expect_number("a color channel")?);
                }
                // A number followed by ':' starts the next stop.
                (Token::Number(_), Token::Colon) => break,
                (Token::Number(n), _) => {
                    self.advance();
                    channels.push(n);
                }
                _ => break,
            }
        }

        if !(3..=4).contains(&channels.len()) {
            return Err(ParseError::new(
                format!("stop at {} needs 3 (rgb) or 4 (rgba) channels, got {}", value, channels.len()),
                line,
                col,
            ));
        }
        Ok(Stop { value, channels, line })
    }
}

// ── Public parse entry point ──────────────────────────────────────────────

/// Parse a `.cmap` source string into a [`CmapDocument`].
pub fn parse_str(src: &str) -> Result<CmapDocument, ParseError> {
    let tokens = Lexer::new(src).tokenize()?;
    Parser::new(tokens).parse_document()
}
