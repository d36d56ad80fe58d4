//! CLI logic for the Chanviz tool.
//!
//! Reads a channel document, renders its upgrade graph, and writes the
//! diagram to a file or standard output.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Read, Write},
};

use log::info;

use chanviz::{ChannelGraphBuilder, ChanvizError};

/// Input path that selects standard input.
const STDIN_PATH: &str = "-";

/// Run the Chanviz CLI application
///
/// # Errors
///
/// Returns `ChanvizError` for:
/// - Configuration loading errors
/// - Unreadable or malformed channel documents
/// - Channels with no versions or a tombstoned head
/// - Output write errors
pub fn run(args: &Args) -> Result<(), ChanvizError> {
    info!(
        input_path = args.input,
        output_path:? = args.output;
        "Processing channel"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = read_input(&args.input)?;

    let builder = ChannelGraphBuilder::new(app_config);
    let channel = builder.parse(&source)?;
    let diagram = builder.render(&channel);

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{diagram}\n")).map_err(ChanvizError::Output)?;
            info!(output_file = path; "Diagram written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{diagram}").map_err(ChanvizError::Output)?;
        }
    }

    Ok(())
}

/// Read the channel document from `path`, or from stdin for `-`.
fn read_input(path: &str) -> Result<String, ChanvizError> {
    if path == STDIN_PATH {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .map_err(|err| ChanvizError::new_unreadable_error("<stdin>", err))?;
        return Ok(source);
    }

    fs::read_to_string(path).map_err(|err| ChanvizError::new_unreadable_error(path, err))
}
