use std::io::Read;
use std::path::Path;

use miette::Result;

use jsoncmap_core::mapper::JsoncMapper;
use jsoncmap_util::errors::JsoncmapError;

pub fn exec(file: Option<&Path>, trailing_commas: bool, json5: bool) -> Result<()> {
    let input = match file {
        Some(path) => std::fs::read_to_string(path).map_err(JsoncmapError::Io)?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(JsoncmapError::Io)?;
            buf
        }
    };

    let mapper = JsoncMapper::builder()
        .json5(json5)
        .trailing_commas(trailing_commas || json5)
        .build();

    // Validate before printing so garbage in does not mean garbage out.
    let json = mapper.preprocess(&input);
    serde_json::from_str::<serde_json::Value>(&json).map_err(|e| JsoncmapError::Syntax {
        message: e.to_string(),
    })?;

    print!("{json}");
    Ok(())
}
