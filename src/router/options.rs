use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::errors::ErrorKind;
use crate::path::DEFAULT_SEPARATOR;

const RESERVED_SEPARATORS: [char; 3] = [':', '*', '\\'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterOptions {
    /// Separator between path segments, in patterns and in looked-up paths.
    pub separator: char,
    /// Emit a debug event for every lookup.
    pub debug: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR as char,
            debug: false,
        }
    }
}

impl RouterOptions {
    pub fn builder() -> RouterOptionsBuilder {
        RouterOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RouterOptionsError> {
        if !self.separator.is_ascii() {
            return Err(RouterOptionsError::SeparatorNotAscii {
                separator: self.separator,
            });
        }
        if RESERVED_SEPARATORS.contains(&self.separator) {
            return Err(RouterOptionsError::SeparatorReserved {
                separator: self.separator,
            });
        }
        Ok(())
    }

    /// Only meaningful after `validate` succeeded.
    pub(crate) fn separator_byte(&self) -> u8 {
        self.separator as u8
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouterOptionsBuilder {
    options: RouterOptions,
}

impl RouterOptionsBuilder {
    pub fn separator(mut self, value: char) -> Self {
        self.options.separator = value;
        self
    }

    pub fn debug(mut self, value: bool) -> Self {
        self.options.debug = value;
        self
    }

    pub fn build(self) -> Result<RouterOptions, RouterOptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterOptionsError {
    #[error("separator '{separator}' must be an ASCII character")]
    SeparatorNotAscii { separator: char },
    #[error("separator '{separator}' is reserved by the pattern syntax")]
    SeparatorReserved { separator: char },
}

impl RouterOptionsError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Configuration
    }
}
