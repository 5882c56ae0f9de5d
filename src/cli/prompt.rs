use std::io::{self, BufRead, Write};

/// Asks the user whether a fuzzy name match should be kept
#[derive(Debug)]
pub struct ConfirmPrompt<R, W> {
    input: R,
    output: W,
}

impl ConfirmPrompt<io::StdinLock<'static>, io::Stderr> {
    /// Prompt on stderr, read answers from stdin
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> ConfirmPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask about one pair of names.
    ///
    /// `y`/`yes` accepts and `n`/`no` rejects. Anything else accepts, matching the
    /// `[Y/n]` default.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt cannot be written or the input is closed.
    pub fn confirm(&mut self, left: &str, right: &str) -> io::Result<bool> {
        write!(self.output, "Is {left} // {right} a valid match? [Y/n] ")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for confirmation",
            ));
        }

        Ok(parse_answer(&answer))
    }
}

fn parse_answer(answer: &str) -> bool {
    !matches!(answer.trim().to_uppercase().as_str(), "N" | "NO")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(input: &str) -> (io::Result<bool>, String) {
        let mut out = Vec::new();
        let result = ConfirmPrompt::new(input.as_bytes(), &mut out).confirm("Acetne", "Acetone");
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_prompt_text() {
        let (_, written) = ask("y\n");
        assert_eq!(written, "Is Acetne // Acetone a valid match? [Y/n] ");
    }

    #[test]
    fn test_answers() {
        assert!(ask("y\n").0.unwrap());
        assert!(ask("YES\n").0.unwrap());
        assert!(!ask("n\n").0.unwrap());
        assert!(!ask(" No \n").0.unwrap());
    }

    #[test]
    fn test_default_accepts() {
        assert!(ask("\n").0.unwrap());
        assert!(ask("maybe\n").0.unwrap());
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let err = ask("").0.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_sequential_answers() {
        let mut out = Vec::new();
        let mut prompt = ConfirmPrompt::new("n\ny\n".as_bytes(), &mut out);
        assert!(!prompt.confirm("a", "b").unwrap());
        assert!(prompt.confirm("c", "d").unwrap());
    }
}
