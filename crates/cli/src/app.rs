//! Read an input document, evaluate it, write the output document.

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use tiered_discount::{
    configuration::ConfigurationParser, function::DiscountFunction, input::FunctionInput,
    operations::FunctionResult,
};

use crate::{config::Config, error::AppError};

/// Decode a function input document.
///
/// # Errors
///
/// Returns an error if the document is not JSON in the function input shape.
pub fn read_document<R: Read>(reader: R) -> Result<FunctionInput, AppError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Read the input document from `path`, or standard input when `None`.
///
/// # Errors
///
/// Returns an error if the source cannot be read or decoded.
pub fn read_input(path: Option<&Path>) -> Result<FunctionInput, AppError> {
    let Some(path) = path else {
        return read_document(io::stdin().lock());
    };

    let file = File::open(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    read_document(BufReader::new(file))
}

/// Serialize `result` to `writer`, followed by a newline.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_output<W: Write>(
    writer: W,
    result: &FunctionResult,
    pretty: bool,
) -> Result<(), AppError> {
    let mut writer = BufWriter::new(writer);

    let serialized = if pretty {
        serde_json::to_writer_pretty(&mut writer, result)
    } else {
        serde_json::to_writer(&mut writer, result)
    };

    serialized.map_err(AppError::Output)?;

    writer.write_all(b"\n")?;
    writer.flush()?;

    Ok(())
}

/// Evaluate the configured input and write the result to `writer`.
///
/// # Errors
///
/// Returns an error if the input cannot be read, has no cart, or the output cannot be written.
pub fn run<W: Write>(config: &Config, writer: W) -> Result<(), AppError> {
    let source = config
        .input_path()
        .map_or_else(|| PathBuf::from("-"), Path::to_path_buf);

    debug!(source = %source.display(), "reading input document");

    let input = read_input(config.input_path())?;
    let function = DiscountFunction::new(ConfigurationParser::new(config.metafield.location()));
    let result = function.run(&input)?;

    info!(
        candidates = result.candidates().count(),
        "discount evaluation finished"
    );

    write_output(writer, &result, config.pretty)
}
