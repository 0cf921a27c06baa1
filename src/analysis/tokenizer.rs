use crate::analysis::normalize::fold;
use crate::analysis::token::Token;
use unicode_segmentation::UnicodeSegmentation;

pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;

    fn name(&self) -> &str;

    fn clone_box(&self) -> Box<dyn Tokenizer>;
}

/// Tokenizer for dictionary entry bodies: folds diacritics and case, then
/// emits maximal runs of alphabetic characters. Repetition is preserved so
/// occurrence counts can be computed downstream. Digits-only runs and
/// punctuation are not tokens; single-letter tokens are legal (single-letter
/// Latin words exist) and no stop words are removed.
#[derive(Clone)]
pub struct LatinTokenizer {
    pub max_token_length: usize,
}

impl Default for LatinTokenizer {
    fn default() -> Self {
        LatinTokenizer {
            max_token_length: 255,
        }
    }
}

impl Tokenizer for LatinTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let folded = fold(text);
        let mut tokens = Vec::new();

        for word in folded.unicode_words() {
            // unicode_words keeps digits; tokens are alphabetic runs only
            for run in word.split(|c: char| !c.is_alphabetic()) {
                if run.is_empty() || run.len() > self.max_token_length {
                    continue;
                }
                tokens.push(Token::new(run.to_string()));
            }
        }

        tokens
    }

    fn name(&self) -> &str {
        "latin"
    }

    fn clone_box(&self) -> Box<dyn Tokenizer> {
        Box::new(self.clone())
    }
}
