use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use serde_json::Value;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum InputError {
    #[display("unable to read {input}")]
    Read { source: io::Error, input: String },
    #[display("{input} is not a valid JSON document")]
    Parse { source: serde_json::Error, input: String },
    #[display("pointer {pointer} does not resolve to a value in {input}")]
    PointerNotFound { pointer: String, input: String },
}

/// Where a JSON document is read from.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputSource {
    #[display("<stdin>")]
    Stdin,
    #[display("{}", _0.display())]
    File(PathBuf),
}

impl InputSource {
    /// Map CLI inputs to sources, reading stdin when no input is given.
    pub fn from_args(inputs: &[PathBuf]) -> Vec<Self> {
        if inputs.is_empty() {
            return vec![Self::Stdin];
        }
        inputs
            .iter()
            .map(|path| {
                if path == Path::new("-") {
                    Self::Stdin
                } else {
                    Self::File(path.clone())
                }
            })
            .collect()
    }

    pub fn load(&self, pointer: Option<&str>) -> Result<Value, InputError> {
        let input = self.to_string();
        match self {
            Self::Stdin => read_document(io::stdin().lock(), &input, pointer),
            Self::File(path) => {
                let file = File::open(path).map_err(|e| InputError::Read { source: e, input: input.clone() })?;
                read_document(BufReader::new(file), &input, pointer)
            }
        }
    }
}

/// Decode one JSON document and select the paginated object inside it.
pub fn read_document<R: Read>(reader: R, input: &str, pointer: Option<&str>) -> Result<Value, InputError> {
    let document: Value = serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            InputError::Read {
                source: e.into(),
                input: input.to_string(),
            }
        } else {
            InputError::Parse {
                source: e,
                input: input.to_string(),
            }
        }
    })?;
    match pointer {
        None => Ok(document),
        Some(pointer) => document
            .pointer(pointer)
            .cloned()
            .ok_or_else(|| InputError::PointerNotFound {
                pointer: pointer.to_string(),
                input: input.to_string(),
            }),
    }
}
