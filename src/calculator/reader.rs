/// Reads numbers and operator symbols from a single line of input
pub struct Reader {
    input: Vec<char>,
    cursor: usize,
}

impl Reader {
    /// Returns a new reader positioned at the start of the given line
    pub fn new(input: &str) -> Reader {
        Reader {
            input: input.chars().collect(),
            cursor: 0,
        }
    }

    /// Returns the lookahead character, if any
    fn lookahead(&self) -> Option<char> {
        self.input.get(self.cursor).copied()
    }

    /// Advances past the lookahead character and returns it
    fn read(&mut self) -> Option<char> {
        let lookahead = self.lookahead();
        if lookahead.is_some() {
            self.cursor += 1;
        }

        lookahead
    }

    /// Reads and discards any ASCII digits, returning the number read
    fn read_digits(&mut self) -> usize {
        let mut count = 0;
        while matches!(self.lookahead(), Some(c) if c.is_ascii_digit()) {
            self.read();
            count += 1;
        }

        count
    }

    /// Reads and discards any whitespace characters
    pub fn skip_whitespace(&mut self) {
        while matches!(self.lookahead(), Some(c) if c.is_whitespace()) {
            self.read();
        }
    }

    /// Returns the 1-based column of the lookahead character
    pub fn column(&self) -> usize {
        self.cursor + 1
    }

    /// Returns true if only whitespace remains
    pub fn at_end(&mut self) -> bool {
        self.skip_whitespace();
        self.lookahead().is_none()
    }

    /// Reads a decimal floating point number, such as '42', '-2.5', '.5' or
    /// '1e-3'. Leaves the cursor where it was if no number could be read.
    pub fn read_number(&mut self) -> Option<f64> {
        let start = self.cursor;
        self.skip_whitespace();
        let begin = self.cursor;

        if matches!(self.lookahead(), Some('+' | '-')) {
            self.read();
        }

        let mut digits = self.read_digits();
        if self.lookahead() == Some('.') {
            self.read();
            digits += self.read_digits();
        }

        if digits == 0 {
            self.cursor = start;
            return None;
        }

        // An exponent marker without any digits is not part of the number
        if matches!(self.lookahead(), Some('e' | 'E')) {
            let mantissa_end = self.cursor;
            self.read();
            if matches!(self.lookahead(), Some('+' | '-')) {
                self.read();
            }
            if self.read_digits() == 0 {
                self.cursor = mantissa_end;
            }
        }

        let text: String = self.input[begin..self.cursor].iter().collect();
        match text.parse::<f64>() {
            Ok(value) => Some(value),
            Err(_) => {
                self.cursor = start;
                None
            }
        }
    }

    /// Reads a single non-whitespace character as an operator symbol
    pub fn read_operator(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.read()
    }

    /// Reads an operator followed by a number, returning both along with the
    /// column of the operator. Leaves the cursor where it was if either is
    /// missing.
    pub fn read_pair(&mut self) -> Option<(char, f64, usize)> {
        self.skip_whitespace();
        let start = self.cursor;
        let column = self.column();

        let symbol = self.read_operator()?;
        let Some(value) = self.read_number() else {
            self.cursor = start;
            return None;
        };

        Some((symbol, value, column))
    }
}
