//! Static text module
//!
//! A fixed fragment such as a distribution logo.

use crate::core::{colored, Module, ModuleMetadata, Tick};
use rootbar_types::StaticTextConfig;

pub struct StaticTextModule {
    metadata: ModuleMetadata,
    text: String,
}

impl StaticTextModule {
    pub fn new(config: &StaticTextConfig) -> Self {
        let text = match config.color {
            Some(color) => colored(color, &config.text),
            None => config.text.clone(),
        };

        Self {
            metadata: ModuleMetadata::new("static_text", "Static Text", "Fixed text fragment"),
            text,
        }
    }
}

impl Module for StaticTextModule {
    fn metadata(&self) -> &ModuleMetadata {
        &self.metadata
    }

    fn render(&mut self, _tick: &Tick) -> String {
        self.text.clone()
    }
}
