#![deny(warnings)]

/// Backtracking cursor over a stream of chars.
///
/// Chars pulled from the source are buffered until the pending lexeme is
/// either `extract`ed or `ignore`d, so any position inside the pending
/// lexeme can be restored with `set_pos`.
pub struct Scanner<I: Iterator<Item = char>> {
    src: I,
    buf: Vec<char>,
    pos: isize,
    // chars already dropped from the front of buf
    consumed: usize,
}

impl<I: Iterator<Item = char>> Iterator for Scanner<I> {
    type Item = char;
    fn next(&mut self) -> Option<char> {
        self.pos += 1;
        self.prep_buffer();
        let blen = self.buf.len() as isize;
        if self.pos >= blen {
            self.pos = blen;
        }
        self.curr()
    }
}

impl<I: Iterator<Item = char>> Scanner<I> {
    pub fn new(source: I) -> Scanner<I> {
        Scanner { src: source, buf: Vec::new(), pos: -1, consumed: 0 }
    }

    pub fn pos(&self) -> isize { self.pos }

    pub fn set_pos(&mut self, pos: isize) -> bool {
        if pos < -1 || pos > (self.buf.len() as isize) {
            return false;
        }
        self.pos = pos;
        true
    }

    /// Index in the source of the first char of the pending lexeme.
    pub fn start(&self) -> usize { self.consumed }

    pub fn curr(&self) -> Option<char> {
        let pos = self.pos as usize;
        if self.pos < 0 || pos >= self.buf.len() {
            return None;
        }
        Some(self.buf[pos])
    }

    // pull enough chars from the source to cover self.pos
    fn prep_buffer(&mut self) {
        while self.pos >= (self.buf.len() as isize) {
            match self.src.next() {
                Some(c) => self.buf.push(c),
                None => break,
            }
        }
    }

    pub fn peek(&mut self) -> Option<char> {
        let backtrack = self.pos;
        let peeked = self.next();
        self.pos = backtrack;
        peeked
    }

    /// Chars of the pending lexeme, up to and including the current one.
    pub fn view(&self) -> &[char] {
        let n = ((self.pos + 1) as usize).min(self.buf.len());
        &self.buf[..n]
    }

    /// Drop the pending lexeme and start a fresh one after it.
    pub fn ignore(&mut self) {
        let n = self.view().len();
        self.buf = self.buf.split_off(n);
        self.consumed += n;
        self.pos = -1;
    }

    pub fn extract(&mut self) -> Vec<char> {
        let chars = self.view().to_vec();
        self.ignore();
        chars
    }

    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    // Advance the scanner only if the next char is in the 'any' set,
    // self.curr() will return the matched char if accept matched any
    pub fn accept_any_char(&mut self, any: &str) -> Option<char> {
        let backtrack = self.pos();
        if let Some(next) = self.next() {
            if any.contains(next) { return Some(next); }
        }
        self.set_pos(backtrack);
        None
    }

    // Skip over the 'over' set, result is if the scanner was advanced,
    // after skip a call to self.curr() will return the last matching char
    pub fn skip_all_chars(&mut self, over: &str) -> bool {
        let mut advanced = false;
        while self.accept_any_char(over).is_some() { advanced = true; }
        advanced
    }
}
