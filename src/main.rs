use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;

use declutter::core::{
    convert_document_from_data, convert_file, format_output_path, print_error_message,
    print_info_message, ConvertOptions, Conversion,
};

#[derive(Parser)]
#[command(
    name = "declutter",
    version,
    about = "Converts web-component HTML into self-contained semantic HTML"
)]
struct Cli {
    /// Input HTML file (reads standard input when omitted or "-")
    input: Option<String>,

    /// Write output to file (supports %title% and %timestamp%; standard
    /// output when omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Enforce a custom output encoding (e.g. UTF-8, Shift_JIS)
    #[arg(short, long)]
    encoding: Option<String>,

    /// Exclude the timestamp metadata comment from the output
    #[arg(long)]
    no_metadata: bool,

    /// Suppress warnings and informational messages
    #[arg(short, long)]
    silent: bool,
}

fn main() {
    let cli = Cli::parse();

    let options = ConvertOptions {
        encoding: cli.encoding.clone(),
        no_metadata: cli.no_metadata,
        silent: cli.silent,
    };

    let result = match cli.input.as_deref() {
        None | Some("-") => read_stdin()
            .map_err(|e| declutter::core::ConvertError::Io(format!("Failed to read input: {e}")))
            .and_then(|input_data| convert_document_from_data(&options, input_data, None)),
        Some(target) => convert_file(&options, target),
    };

    let conversion: Conversion = match result {
        Ok(conversion) => conversion,
        Err(e) => {
            print_error_message(&format!("Error: {e}"));
            process::exit(1);
        }
    };

    if !options.silent {
        for warning in &conversion.warnings {
            print_error_message(&format!("Warning: {warning}"));
        }
    }

    match cli.output {
        Some(ref output_path) => {
            let output_path = format_output_path(output_path, conversion.title.as_deref());

            if let Err(e) = fs::write(&output_path, &conversion.data) {
                print_error_message(&format!("Error: failed to write {output_path}: {e}"));
                process::exit(1);
            }

            if !options.silent {
                print_info_message(&format!("Saved to {output_path}"));
            }
        }
        None => {
            if let Err(e) = io::stdout().write_all(&conversion.data) {
                print_error_message(&format!("Error: failed to write output: {e}"));
                process::exit(1);
            }
        }
    }
}

fn read_stdin() -> Result<Vec<u8>, io::Error> {
    let mut input_data: Vec<u8> = Vec::new();
    io::stdin().read_to_end(&mut input_data)?;
    Ok(input_data)
}
