use serde::{Deserialize, Serialize};
use std::fmt;

use crate::global_constants;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtractionMethod {
    Traditional,
    #[default]
    Neural,
}

impl ExtractionMethod {
    /// Any selector mentioning "Traditional" picks the classical engine;
    /// everything else, the AI label included, picks the neural one.
    pub fn from_selector(selector: &str) -> Self {
        if selector.contains(global_constants::METHOD_SELECTOR_TRADITIONAL_MARKER) {
            ExtractionMethod::Traditional
        } else {
            ExtractionMethod::Neural
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExtractionMethod::Traditional => global_constants::METHOD_LABEL_TRADITIONAL,
            ExtractionMethod::Neural => global_constants::METHOD_LABEL_NEURAL,
        }
    }

    pub fn progress_message(&self) -> &'static str {
        match self {
            ExtractionMethod::Traditional => global_constants::USER_MESSAGE_PROCESSING_TRADITIONAL,
            ExtractionMethod::Neural => global_constants::USER_MESSAGE_PROCESSING_NEURAL,
        }
    }
}

impl fmt::Display for ExtractionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
