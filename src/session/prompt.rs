//! Line-oriented prompting
//!
//! Every question is re-asked until the answer parses, so invalid input
//! never escapes the prompt that received it.

use crate::error::{BikeshareError, Result};
use std::io::{BufRead, Write};
use tracing::debug;

/// Printed after an answer that does not parse
pub const INVALID_ANSWER: &str = "Invalid! Please try again.";

/// Asks questions on a writer and reads answers from a reader
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writer the conversation is printed on
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print a line of text
    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}").map_err(|e| BikeshareError::input("write", e))
    }

    /// Print `question` and return the trimmed answer line
    pub fn ask(&mut self, question: &str) -> Result<String> {
        writeln!(self.output, "{question}")
            .and_then(|()| self.output.flush())
            .map_err(|e| BikeshareError::input("write prompt", e))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| BikeshareError::input("read answer", e))?;
        if read == 0 {
            return Err(BikeshareError::InputClosed);
        }

        let answer = line.trim().to_string();
        debug!("Answer: {:?}", answer);
        Ok(answer)
    }

    /// Ask until `parse` accepts the answer
    pub fn choose<T, F>(&mut self, question: &str, invalid: &str, mut parse: F) -> Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            let answer = self.ask(question)?;
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }
            self.say(invalid)?;
        }
    }

    /// Ask a yes/no question until one of the two is given
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        self.choose(question, INVALID_ANSWER, parse_yes_no)
    }
}

/// `Some(true)` for "yes", `Some(false)` for "no", ignoring case
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}

/// A strictly positive row count
pub fn parse_row_count(answer: &str) -> Option<usize> {
    answer.trim().parse::<usize>().ok().filter(|count| *count > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(script: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.output).unwrap()
    }

    #[test]
    fn test_ask_trims_answer() {
        let mut p = prompter("  Chicago \n");
        assert_eq!(p.ask("Which city?").unwrap(), "Chicago");
        assert_eq!(transcript(p), "Which city?\n");
    }

    #[test]
    fn test_ask_at_end_of_input() {
        let mut p = prompter("");
        assert!(matches!(p.ask("Anyone?"), Err(BikeshareError::InputClosed)));
    }

    #[test]
    fn test_choose_reprompts_until_valid() {
        let mut p = prompter("abc\n-3\n0\n12\n");
        let count = p.choose("How many?", INVALID_ANSWER, parse_row_count).unwrap();
        assert_eq!(count, 12);

        let text = transcript(p);
        assert_eq!(text.matches("How many?").count(), 4);
        assert_eq!(text.matches(INVALID_ANSWER).count(), 3);
    }

    #[test]
    fn test_confirm_accepts_only_yes_or_no() {
        let mut p = prompter("maybe\nYES\nnope\nNo\n");
        assert!(p.confirm("Restart?").unwrap());
        assert!(!p.confirm("Restart?").unwrap());
        assert_eq!(transcript(p).matches(INVALID_ANSWER).count(), 2);
    }

    #[test]
    fn test_choose_stops_on_closed_input() {
        let mut p = prompter("junk\n");
        let result = p.choose("Pick", INVALID_ANSWER, |_| None::<()>);
        assert!(matches!(result, Err(BikeshareError::InputClosed)));
    }
}
