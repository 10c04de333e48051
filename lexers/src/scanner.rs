#![deny(warnings)]

/// Backtracking cursor over any iterator.
///
/// Items pulled from the source stay buffered until `ignore`/`extract`, so
/// `pos`/`set_pos` can rewind over them.
pub struct Scanner<I: Iterator> where I::Item: Clone {
    src: I,
    buf: Vec<I::Item>,
    // index of the last consumed item, -1 before the first
    pos: isize,
}

impl<I> Iterator for Scanner<I> where I: Iterator, I::Item: Clone {
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        let wanted = (self.pos + 1) as usize;
        if wanted == self.buf.len() {
            if let Some(item) = self.src.next() {
                self.buf.push(item);
            }
        }
        // parks one past the end once the source is dry
        self.pos = wanted.min(self.buf.len()) as isize;
        self.curr()
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone {
    pub fn new(source: I) -> Scanner<I> {
        Scanner{src: source, buf: Vec::new(), pos: -1}
    }

    pub fn pos(&self) -> isize { self.pos }

    pub fn set_pos(&mut self, pos: isize) -> bool {
        let valid = pos >= -1 && pos <= self.buf.len() as isize;
        if valid {
            self.pos = pos;
        }
        valid
    }

    pub(crate) fn curr(&self) -> Option<I::Item> {
        usize::try_from(self.pos).ok().and_then(|i| self.buf.get(i)).cloned()
    }

    pub fn peek(&mut self) -> Option<I::Item> {
        let backtrack = self.pos;
        let peeked = self.next();
        self.pos = backtrack;
        peeked
    }

    /// Drop everything consumed so far.
    pub fn ignore(&mut self) {
        self.extract();
    }

    /// Hand out everything consumed since the last `ignore`/`extract`.
    pub fn extract(&mut self) -> Vec<I::Item> {
        let consumed = ((self.pos + 1) as usize).min(self.buf.len());
        let rest = self.buf.split_off(consumed);
        self.pos = -1;
        std::mem::replace(&mut self.buf, rest)
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone + PartialEq {
    pub fn accept(&mut self, what: &I::Item) -> Option<I::Item> {
        self.accept_any(std::slice::from_ref(what))
    }

    // Advance only if the next item is in the 'any' set
    pub fn accept_any(&mut self, any: &[I::Item]) -> Option<I::Item> {
        let backtrack = self.pos;
        match self.next() {
            Some(next) if any.contains(&next) => Some(next),
            _ => {
                self.pos = backtrack;
                None
            }
        }
    }

    // Skip over the 'over' set, returns whether the scanner advanced.
    // Afterwards curr() is the last matching item
    pub fn skip_all(&mut self, over: &[I::Item]) -> bool {
        let start = self.pos;
        while self.accept_any(over).is_some() {}
        self.pos != start
    }
}

impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }
}
