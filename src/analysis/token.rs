use serde::{Deserialize, Serialize};

/// A single normalized word token cut from an entry body. Occurrence
/// counting is positional-order-free, so tokens carry only their text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
}

impl Token {
    pub fn new(text: String) -> Self {
        Token { text }
    }
}
