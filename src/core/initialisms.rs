//! Initialism tables used by the Go-flavored casing rules

use crate::core::words::Word;

/// Common Go initialisms, upper-case and sorted so lookups can binary search
pub const GO_INITIALISMS: Initialisms = Initialisms(&[
    "ACL", "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID",
    "IP", "JSON", "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SQL", "SSH", "TCP", "TLS",
    "TTL", "UDP", "UI", "UID", "URI", "URL", "UUID", "VM", "XML", "XMPP", "XSRF", "XSS",
]);

/// A static, sorted set of upper-case initialisms
#[derive(Debug, Clone, Copy)]
pub struct Initialisms(&'static [&'static str]);

impl Initialisms {
    /// Length of the longest entry, in bytes
    pub fn max_len(&self) -> usize {
        self.0.iter().map(|s| s.len()).max().unwrap_or(0)
    }

    /// Whether `word` is in the table, ignoring case
    pub fn contains(&self, word: &str) -> bool {
        // Upper-casing never yields fewer chars, so longer words cannot match
        if word.chars().nth(self.max_len()).is_some() {
            return false;
        }
        let upper = word.to_uppercase();
        self.0.binary_search(&upper.as_str()).is_ok()
    }

    /// Split an all-caps run made only of initialisms into its pieces.
    ///
    /// Longer matches are tried first, so `HTTPSURL` yields `HTTPS` + `URL`.
    /// Returns `None` when the run cannot be covered entirely. Linear in the
    /// length of `run`.
    pub fn segment<'a>(&self, run: &'a str) -> Option<Vec<&'a str>> {
        let max_len = self.max_len();
        let n = run.len();

        // step[i] is the length of the piece starting at byte i on a full cover of run[i..]
        let mut step: Vec<Option<usize>> = vec![None; n + 1];
        step[n] = Some(0);

        for i in (0..n).rev().filter(|&i| run.is_char_boundary(i)) {
            step[i] = (1..=max_len.min(n - i)).rev().find(|&len| {
                let end = i + len;
                run.is_char_boundary(end) && step[end].is_some() && self.contains(&run[i..end])
            });
        }

        step[0]?;
        let mut pieces = Vec::new();
        let mut i = 0;
        while i < n {
            let len = step[i]?;
            pieces.push(&run[i..i + len]);
            i += len;
        }
        Some(pieces)
    }

    /// Flag the words that are initialisms.
    ///
    /// An all-caps word that is not itself in the table but is a run of
    /// initialisms (`IDURL`) is split into one flagged word per initialism.
    pub fn mark<'a>(&self, words: Vec<Word<'a>>) -> Vec<Word<'a>> {
        let mut marked = Vec::with_capacity(words.len());

        for mut word in words {
            if self.contains(word.text) {
                word.initialism = true;
                marked.push(word);
                continue;
            }

            let all_caps = word.text.chars().all(char::is_uppercase);
            let pieces = if all_caps { self.segment(word.text) } else { None };
            match pieces {
                Some(pieces) => {
                    let mut start = word.span.start;
                    for piece in pieces {
                        marked.push(Word {
                            text: piece,
                            span: start..start + piece.len(),
                            initialism: true,
                        });
                        start += piece.len();
                    }
                }
                None => marked.push(word),
            }
        }

        marked
    }
}
