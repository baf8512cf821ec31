/// A single lexed item of path data: a command letter or a number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Command(char),
    Number(f64),
}

const COMMANDS: &str = "MmZzLlHhVvCcSsQqTtAa";

/// Single-pass lexer over path data.
///
/// At each position a command letter is tried first, then a number;
/// anything else (whitespace, commas) is a separator and yields nothing.
/// Numbers need no separator between them: signs and a second decimal
/// point terminate the previous number, so "1-2" is two tokens and
/// "1.5.3" lexes as 1.5 then .3. The lexer itself never fails -
/// malformed spans simply produce no tokens and are caught downstream.
pub struct Tokenizer {
    data: Vec<char>,
    index: usize,
}

impl Tokenizer {
    pub fn new(data: &str) -> Self {
        Self {
            data: data.chars().collect(),
            index: 0,
        }
    }

    /// Attempt to lex a number at the current position, advancing past it
    /// on success. Grammar: optional sign, then digits with an optional
    /// leading/trailing/embedded decimal point, then an optional exponent.
    fn scan_number(&mut self) -> Option<f64> {
        let mut i = self.index;
        if matches!(self.data.get(i), Some('+' | '-')) {
            i += 1;
        }
        let int_start = i;
        while matches!(self.data.get(i), Some(c) if c.is_ascii_digit()) {
            i += 1;
        }
        let int_digits = i - int_start;
        let mut frac_digits = 0;
        if self.data.get(i) == Some(&'.') {
            let mut j = i + 1;
            while matches!(self.data.get(j), Some(c) if c.is_ascii_digit()) {
                j += 1;
            }
            frac_digits = j - (i + 1);
            // a lone '.' is not a number; only consume the dot if there
            // are digits on at least one side of it
            if int_digits > 0 || frac_digits > 0 {
                i = j;
            }
        }
        if int_digits == 0 && frac_digits == 0 {
            return None;
        }
        let mut end = i;
        if matches!(self.data.get(end), Some('e' | 'E')) {
            let mut j = end + 1;
            if matches!(self.data.get(j), Some('+' | '-')) {
                j += 1;
            }
            let exp_start = j;
            while matches!(self.data.get(j), Some(c) if c.is_ascii_digit()) {
                j += 1;
            }
            // 'e' with no following digits is not part of the number
            if j > exp_start {
                end = j;
            }
        }
        let text: String = self.data[self.index..end].iter().collect();
        let value = text.parse().ok()?;
        self.index = end;
        Some(value)
    }
}

impl Iterator for Tokenizer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while self.index < self.data.len() {
            let c = self.data[self.index];
            if COMMANDS.contains(c) {
                self.index += 1;
                return Some(Token::Command(c));
            }
            if let Some(value) = self.scan_number() {
                return Some(Token::Number(value));
            }
            // separator (whitespace, comma) or junk
            self.index += 1;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(data: &str) -> Vec<Token> {
        Tokenizer::new(data).collect()
    }

    #[test]
    fn test_commands_and_numbers() {
        assert_eq!(
            lex("M10 20"),
            vec![
                Token::Command('M'),
                Token::Number(10.),
                Token::Number(20.)
            ]
        );
        assert_eq!(
            lex("m-1.5,.5z"),
            vec![
                Token::Command('m'),
                Token::Number(-1.5),
                Token::Number(0.5),
                Token::Command('z')
            ]
        );
    }

    #[test]
    fn test_number_boundaries() {
        // no separators required between adjacent numbers
        assert_eq!(
            lex("10-20.5.3e2"),
            vec![
                Token::Number(10.),
                Token::Number(-20.5),
                Token::Number(30.)
            ]
        );
        assert_eq!(lex("1.5.3"), vec![Token::Number(1.5), Token::Number(0.3)]);
        assert_eq!(lex("1-2"), vec![Token::Number(1.), Token::Number(-2.)]);
    }

    #[test]
    fn test_number_forms() {
        assert_eq!(lex("3."), vec![Token::Number(3.)]);
        assert_eq!(lex(".25"), vec![Token::Number(0.25)]);
        assert_eq!(lex("+4e-1"), vec![Token::Number(0.4)]);
        assert_eq!(lex("2E3"), vec![Token::Number(2000.)]);
    }

    #[test]
    fn test_junk_skipped() {
        // '.' alone and unknown characters are separators, not errors;
        // a trailing 'e' without digits is not part of the number
        assert_eq!(lex(" , ."), vec![]);
        assert_eq!(lex("1e"), vec![Token::Number(1.)]);
        assert_eq!(lex("#1"), vec![Token::Number(1.)]);
    }
}
