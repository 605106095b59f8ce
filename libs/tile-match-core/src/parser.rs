//! Custom deck import.
//!
//! # Text format
//! ```text
//! Subject: Capitals
//!
//! Q: France
//! A: Paris
//!
//! Q: Japan
//! A: Tokyo
//! Continuation lines belong to the field above.
//! ```
//!
//! The `Subject:` line is optional. Decks exported by the editor are JSON and
//! go through [`parse_deck_json`] instead.

use crate::error::ParseError;
use crate::types::{CustomDeck, DeckPair};

type Result<T> = std::result::Result<T, ParseError>;

/// Parse the text format. `default_subject` is used when no `Subject:` line
/// is present.
pub fn parse_deck(content: &str, default_subject: &str) -> Result<CustomDeck> {
    let mut parser = Parser::new();
    for (idx, line) in content.lines().enumerate() {
        parser.process_line(line, idx + 1)?;
    }
    let (subject, pairs) = parser.finish()?;

    Ok(CustomDeck {
        subject: subject.unwrap_or_else(|| default_subject.to_string()),
        pairs,
    })
}

/// Parse a deck config as written by the editor.
pub fn parse_deck_json(content: &str) -> Result<CustomDeck> {
    Ok(serde_json::from_str(content)?)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Field {
    Question,
    Answer,
}

struct PairBuilder {
    question: Option<String>,
    answer: Option<String>,
    start_line: usize,
}

impl PairBuilder {
    fn new(start_line: usize) -> Self {
        Self {
            question: None,
            answer: None,
            start_line,
        }
    }

    fn build(self) -> Result<DeckPair> {
        let question = self
            .question
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty())
            .ok_or(ParseError::MissingQuestion {
                line: self.start_line,
            })?;
        let answer = self
            .answer
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .ok_or(ParseError::MissingAnswer {
                line: self.start_line,
            })?;

        Ok(DeckPair { question, answer })
    }
}

struct Parser {
    subject: Option<String>,
    current: Option<PairBuilder>,
    current_field: Option<Field>,
    buffer: Vec<String>,
    pairs: Vec<DeckPair>,
}

enum LineType<'a> {
    Subject(&'a str),
    Question(&'a str),
    Answer(&'a str),
    Text(&'a str),
    Empty,
}

impl Parser {
    fn new() -> Self {
        Self {
            subject: None,
            current: None,
            current_field: None,
            buffer: Vec::new(),
            pairs: Vec::new(),
        }
    }

    fn parse_line(line: &str) -> LineType<'_> {
        let trimmed = line.trim();

        if let Some(rest) = trimmed.strip_prefix("Subject:") {
            LineType::Subject(rest.trim())
        } else if let Some(rest) = trimmed.strip_prefix("Q:") {
            LineType::Question(rest.trim())
        } else if let Some(rest) = trimmed.strip_prefix("A:") {
            LineType::Answer(rest.trim())
        } else if trimmed.is_empty() {
            LineType::Empty
        } else {
            LineType::Text(trimmed)
        }
    }

    fn process_line(&mut self, line: &str, line_num: usize) -> Result<()> {
        match Self::parse_line(line) {
            LineType::Subject(subject) => {
                self.flush_buffer();
                self.current_field = None;
                if self.subject.is_none() && !subject.is_empty() {
                    self.subject = Some(subject.to_string());
                }
            }
            LineType::Question(text) => {
                self.finish_pair()?;
                self.current = Some(PairBuilder::new(line_num));
                self.current_field = Some(Field::Question);
                self.buffer.push(text.to_string());
            }
            LineType::Answer(text) => {
                self.flush_buffer();
                match self.current {
                    Some(ref card) if card.answer.is_none() => {}
                    _ => return Err(ParseError::MissingQuestion { line: line_num }),
                }
                self.current_field = Some(Field::Answer);
                self.buffer.push(text.to_string());
            }
            LineType::Text(text) => {
                if self.current_field.is_some() {
                    self.buffer.push(text.to_string());
                }
            }
            LineType::Empty => {
                if self.current_field.is_some() {
                    self.buffer.push(String::new());
                }
            }
        }
        Ok(())
    }

    fn flush_buffer(&mut self) {
        if self.buffer.is_empty() {
            return;
        }

        let content = self.buffer.join("\n");
        self.buffer.clear();

        if let Some(ref mut card) = self.current {
            match self.current_field {
                Some(Field::Question) => card.question = Some(content),
                Some(Field::Answer) => card.answer = Some(content),
                None => {}
            }
        }
    }

    fn finish_pair(&mut self) -> Result<()> {
        self.flush_buffer();
        self.current_field = None;
        if let Some(card) = self.current.take() {
            self.pairs.push(card.build()?);
        }
        Ok(())
    }

    fn finish(mut self) -> Result<(Option<String>, Vec<DeckPair>)> {
        self.finish_pair()?;
        Ok((self.subject, self.pairs))
    }
}
