use crate::error::ParseError;

// ── Token ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Ident(String),
    Number(f32),
    /// Color literal: `[r, g, b, a]` straight-alpha bytes from `#rrggbb[aa]`.
    Color([u8; 4]),
    Colon,
    Comma,
    Eof,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TokenWithPos {
    pub token: Token,
    pub line: usize,
    pub col: usize,
}

// ── Lexer ─────────────────────────────────────────────────────────────────

pub struct Lexer<'s> {
    src: &'s str,
    pos: usize,
    line: usize,
    col: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src, pos: 0, line: 1, col: 1 }
    }

    pub fn tokenize(mut self) -> Result<Vec<TokenWithPos>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace_and_comments();
            let (line, col) = (self.line, self.col);
            let token = self.next_token()?;
            let eof = token == Token::Eof;
            tokens.push(TokenWithPos { token, line, col });
            if eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn rest(&self) -> &'s str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        ParseError::new(msg, self.line, self.col)
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            while matches!(self.peek(), Some(c) if c.is_whitespace()) {
                self.advance();
            }
            if self.rest().starts_with("//") {
                while !matches!(self.peek(), None | Some('\n')) {
                    self.advance();
                }
            } else if self.rest().starts_with("/*") {
                self.advance();
                self.advance();
                while !self.rest().starts_with("*/") {
                    if self.advance().is_none() {
                        return;
                    }
                }
                self.advance();
                self.advance();
            } else {
                break;
            }
        }
    }

    fn next_token(&mut self) -> Result<Token, ParseError> {
        let ch = match self.peek() {
            None => return Ok(Token::Eof),
            Some(c) => c,
        };

        match ch {
            ':' => { self.advance(); Ok(Token::Colon) }
            ',' => { self.advance(); Ok(Token::Comma) }
            '#' => self.lex_color(),
            c if c.is_ascii_digit() || matches!(c, '-' | '+' | '.') => self.lex_number(),
            c if c.is_alphabetic() || c == '_' => Ok(self.lex_ident()),
            other => Err(self.err(format!("unexpected character {:?}", other))),
        }
    }

    fn lex_color(&mut self) -> Result<Token, ParseError> {
        let (line, col) = (self.line, self.col);
        self.advance(); // `#`
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_hexdigit()) {
            self.advance();
        }
        let hex = &self.src[start..self.pos];
        if hex.len() != 6 && hex.len() != 8 {
            return Err(ParseError::new(
                format!("color literal must be #rrggbb or #rrggbbaa, got {} digits", hex.len()),
                line,
                col,
            ));
        }

        let mut rgba = [255u8; 4];
        for (slot, i) in rgba.iter_mut().zip((0..hex.len()).step_by(2)) {
            *slot = u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ParseError::new(format!("invalid hex color #{}", hex), line, col))?;
        }
        Ok(Token::Color(rgba))
    }

    fn lex_number(&mut self) -> Result<Token, ParseError> {
        let (line, col) = (self.line, self.col);
        let start = self.pos;
        if matches!(self.peek(), Some('-' | '+')) {
            self.advance();
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_digit() || c == '.') {
            self.advance();
        }
        // Exponent: `1e-3`, `2.5E+2`.
        if matches!(self.peek(), Some('e' | 'E')) {
            self.advance();
            if matches!(self.peek(), Some('-' | '+')) {
                self.advance();
            }
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.advance();
            }
        }
        let s = &self.src[start..self.pos];
        s.parse::<f32>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Token::Number)
            .ok_or_else(|| ParseError::new(format!("invalid number {:?}", s), line, col))
    }

    fn lex_ident(&mut self) -> Token {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.advance();
        }
        Token::Ident(self.src[start..self.pos].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<Token> {
        Lexer::new(src).tokenize().unwrap().into_iter().map(|t| t.token).collect()
    }

    #[test]
    fn stop_line() {
        assert_eq!(
            kinds("-1.5: 0, 1e-1 #00ff0080"),
            vec![
                Token::Number(-1.5),
                Token::Colon,
                Token::Number(0.0),
                Token::Comma,
                Token::Number(0.1),
                Token::Color([0, 255, 0, 128]),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn six_digit_color_is_opaque() {
        assert_eq!(kinds("#102030")[0], Token::Color([16, 32, 48, 255]));
    }

    #[test]
    fn comments_and_positions() {
        let toks = Lexer::new("// head\n/* a\nb */ domain").tokenize().unwrap();
        assert_eq!(toks[0].token, Token::Ident("domain".into()));
        assert_eq!((toks[0].line, toks[0].col), (3, 6));
    }

    #[test]
    fn bad_color_length() {
        let err = Lexer::new("\n  #abc").tokenize().unwrap_err();
        assert_eq!((err.line, err.col), (2, 3));
    }

    #[test]
    fn bad_number() {
        assert!(Lexer::new("1.2.3").tokenize().is_err());
        assert!(Lexer::new("-").tokenize().is_err());
    }

    #[test]
    fn unexpected_character() {
        assert!(Lexer::new("0: (1 1 1)").tokenize().is_err());
    }
}
