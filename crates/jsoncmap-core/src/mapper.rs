//! Typed JSONC mapping over `serde_json`.

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use jsoncmap_util::errors::{JsoncmapError, JsoncmapResult};

use crate::{json5, strip};

/// Deserializes JSONC and JSON5-flavoured text into Rust types.
///
/// Comments are always removed. Every other convenience is opt-in through
/// [`JsoncMapper::builder`]; the default mapper accepts plain JSONC only.
///
/// ```
/// use jsoncmap_core::mapper::JsoncMapper;
///
/// let mapper = JsoncMapper::builder().trailing_commas(true).build();
/// let v: Vec<u32> = mapper.from_str("[1, 2, /* three */ 3,]").unwrap();
/// assert_eq!(v, [1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsoncMapper {
    trailing_commas: bool,
    single_quotes: bool,
    hex_numbers: bool,
    plus_signs: bool,
    infinity_and_nan: bool,
    multiline_strings: bool,
    control_chars: bool,
}

impl JsoncMapper {
    /// A mapper that handles comments only.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Rewrite JSONC input into strict JSON according to the enabled
    /// features.
    ///
    /// Comments go first and trailing commas last; the JSON5 transforms
    /// run in between, in a fixed order, so each pass sees the output of
    /// the previous one.
    pub fn preprocess(&self, input: &str) -> String {
        let mut text = strip::strip_comments(input);
        if self.single_quotes {
            text = json5::convert_single_quotes(&text);
        }
        if self.hex_numbers {
            text = json5::convert_hex_numbers(&text);
        }
        if self.plus_signs {
            text = json5::strip_plus_signs(&text);
        }
        if self.infinity_and_nan {
            text = json5::convert_infinity_nan(&text);
        }
        if self.multiline_strings {
            text = json5::collapse_multiline_strings(&text);
        }
        if self.control_chars {
            text = json5::escape_control_chars(&text);
        }
        if self.trailing_commas {
            text = strip::strip_trailing_commas(&text);
        }
        text
    }

    /// Deserialize a value from JSONC text.
    pub fn from_str<T: DeserializeOwned>(&self, input: &str) -> JsoncmapResult<T> {
        let json = self.preprocess(input);
        serde_json::from_str(&json).map_err(|e| {
            JsoncmapError::Syntax {
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Deserialize a value from JSONC bytes (must be UTF-8).
    pub fn from_slice<T: DeserializeOwned>(&self, input: &[u8]) -> JsoncmapResult<T> {
        let text = std::str::from_utf8(input).map_err(|e| JsoncmapError::Syntax {
            message: format!("invalid UTF-8: {e}"),
        })?;
        self.from_str(text)
    }

    /// Deserialize a value from a reader of JSONC text.
    pub fn from_reader<T: DeserializeOwned, R: Read>(&self, mut reader: R) -> JsoncmapResult<T> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(JsoncmapError::Io)?;
        self.from_str(&text)
    }

    /// Deserialize a value from a JSONC file.
    pub fn from_path<T: DeserializeOwned>(&self, path: &Path) -> JsoncmapResult<T> {
        debug!(path = %path.display(), "reading JSONC file");
        let text = std::fs::read_to_string(path).map_err(JsoncmapError::Io)?;
        self.from_str(&text)
    }

    /// Parse JSONC text into an untyped `serde_json::Value` tree.
    pub fn parse_value(&self, input: &str) -> JsoncmapResult<Value> {
        self.from_str(input)
    }
}

/// Configures a [`JsoncMapper`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Builder {
    trailing_commas: bool,
    single_quotes: bool,
    hex_numbers: bool,
    plus_signs: bool,
    infinity_and_nan: bool,
    multiline_strings: bool,
    control_chars: bool,
}

impl Builder {
    /// Accept trailing commas in objects and arrays.
    pub fn trailing_commas(mut self, enable: bool) -> Self {
        self.trailing_commas = enable;
        self
    }

    /// Accept single-quoted strings.
    pub fn single_quotes(mut self, enable: bool) -> Self {
        self.single_quotes = enable;
        self
    }

    /// Accept hexadecimal number literals.
    pub fn hex_numbers(mut self, enable: bool) -> Self {
        self.hex_numbers = enable;
        self
    }

    /// Accept numbers with an explicit plus sign.
    pub fn plus_signs(mut self, enable: bool) -> Self {
        self.plus_signs = enable;
        self
    }

    /// Accept `Infinity` and `NaN` literals (mapped to `null`).
    pub fn infinity_and_nan(mut self, enable: bool) -> Self {
        self.infinity_and_nan = enable;
        self
    }

    /// Accept raw newlines inside strings.
    pub fn multiline_strings(mut self, enable: bool) -> Self {
        self.multiline_strings = enable;
        self
    }

    /// Accept raw control characters inside strings.
    pub fn control_chars(mut self, enable: bool) -> Self {
        self.control_chars = enable;
        self
    }

    /// Toggle the five core JSON5 features at once: trailing commas,
    /// single quotes, hex numbers, plus signs, and Infinity/NaN.
    ///
    /// Multiline strings and control characters stay as configured; they
    /// interact badly with regular JSON formatting and must be enabled
    /// individually.
    pub fn json5(mut self, enable: bool) -> Self {
        self.trailing_commas = enable;
        self.single_quotes = enable;
        self.hex_numbers = enable;
        self.plus_signs = enable;
        self.infinity_and_nan = enable;
        self
    }

    pub fn build(self) -> JsoncMapper {
        JsoncMapper {
            trailing_commas: self.trailing_commas,
            single_quotes: self.single_quotes,
            hex_numbers: self.hex_numbers,
            plus_signs: self.plus_signs,
            infinity_and_nan: self.infinity_and_nan,
            multiline_strings: self.multiline_strings,
            control_chars: self.control_chars,
        }
    }
}
