use pest::Parser;
use pest_derive::Parser;

use crate::document::DELIMITER;
use crate::error::IniResult;

#[derive(Parser)]
#[grammar = "ini.pest"]
pub struct IniParser;

/// One significant line of an INI document
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    /// Comment line, indicator included
    Comment { text: String },

    /// Section header with the brackets stripped
    Section { name: String },

    /// Key/value pair, both sides trimmed; the value is empty when the line
    /// carries no delimiter
    Pair { key: String, value: String },
}

impl IniParser {
    /// Classify input text into a flat record stream.
    ///
    /// Extraction is best-effort: malformed lines (stray delimiters, an
    /// unterminated section bracket) still yield a record rather than
    /// rejecting the input, and blank lines yield none.
    pub fn parse_records(input: &str) -> IniResult<Vec<Record>> {
        let pairs = IniParser::parse(Rule::file, input)?;

        let mut records = Vec::new();

        for pair in pairs {
            if pair.as_rule() != Rule::file {
                continue;
            }

            for token in pair.into_inner() {
                match token.as_rule() {
                    Rule::comment => {
                        records.push(Record::Comment {
                            text: token.as_str().trim_end().to_string(),
                        });
                    }

                    Rule::section => {
                        let raw = token
                            .into_inner()
                            .next()
                            .map(|name| name.as_str())
                            .unwrap_or("");
                        records.push(Record::Section {
                            name: section_name(raw),
                        });
                    }

                    Rule::pair => {
                        let mut inner = token.into_inner();
                        let key = inner
                            .next()
                            .map(|k| trim_entry(k.as_str()))
                            .unwrap_or("")
                            .to_string();
                        let value = inner
                            .next()
                            .map(|v| trim_entry(v.as_str()))
                            .unwrap_or("")
                            .to_string();
                        records.push(Record::Pair { key, value });
                    }

                    _ => {}
                }
            }
        }

        Ok(records)
    }
}

/// Trim whitespace and stray delimiter characters from both ends
fn trim_entry(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == DELIMITER)
}

/// Recover a section name from the text following `[`: drop the closing
/// bracket when one exists and trim. An unterminated header is tolerated.
fn section_name(raw: &str) -> String {
    let name = match raw.rfind(']') {
        Some(idx) => format!("{}{}", &raw[..idx], &raw[idx + 1..]),
        None => raw.to_string(),
    };

    name.trim().to_string()
}
