use regex::Regex;

/// Headword marker: the leading run of a line, stopping at whitespace or
/// the punctuation that introduces grammatical apparatus.
const HEADWORD_PATTERN: &str = r"^([^\s,;:(]+)";

/// Raw `(headword, body)` record as cut from the source text, before
/// normalization. `body` is the full entry text including the marker line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub headword: String,
    pub body: String,
}

/// Splits the raw dictionary text into an ordered sequence of entries.
///
/// A new entry starts only at a line-initial marker: a line whose first
/// character is not whitespace and whose leading run matches the headword
/// pattern. Anything else (indented continuations, blank lines,
/// punctuation-led lines) is appended to the body of the most recent
/// entry, or dropped if no entry has started yet. Marker look-alikes in
/// the middle of a line never split an entry. Segmentation is never fatal.
pub struct EntrySegmenter {
    headword_re: Regex,
}

impl EntrySegmenter {
    pub fn new() -> Self {
        EntrySegmenter {
            headword_re: Regex::new(HEADWORD_PATTERN).expect("headword pattern is valid"),
        }
    }

    pub fn segment(&self, text: &str) -> Vec<RawEntry> {
        let mut entries: Vec<RawEntry> = Vec::new();

        for line in text.lines() {
            if let Some(caps) = self.headword_re.captures(line) {
                entries.push(RawEntry {
                    headword: caps[1].to_string(),
                    body: line.to_string(),
                });
            } else if let Some(current) = entries.last_mut() {
                current.body.push('\n');
                current.body.push_str(line);
            }
            // Front matter before the first marker is dropped.
        }

        entries
    }
}

impl Default for EntrySegmenter {
    fn default() -> Self {
        Self::new()
    }
}
