//! Running sentence of recognized words

/// Ordered list of emitted words, owned by one session
#[derive(Clone, Debug, Default)]
pub struct Sentence {
    words: Vec<String>,
    /// Skip a word identical to the previous one
    collapse_repeats: bool,
}

impl Sentence {
    pub fn new(collapse_repeats: bool) -> Self {
        Self {
            words: Vec::new(),
            collapse_repeats,
        }
    }

    /// Append a word. Returns false if it was dropped as a repeat.
    pub fn push(&mut self, word: &str) -> bool {
        if self.collapse_repeats && self.last() == Some(word) {
            return false;
        }
        self.words.push(word.to_string());
        true
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn last(&self) -> Option<&str> {
        self.words.last().map(String::as_str)
    }

    /// Words joined by single spaces
    pub fn text(&self) -> String {
        self.words.join(" ")
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }
}
