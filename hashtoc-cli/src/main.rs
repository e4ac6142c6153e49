//! Command-line interface for hashtoc
//! Converts a `#`-marked plain text file into an HTML page with a table of contents.
//!
//! Usage:
//!   hashtoc `<path>`                          - Print the HTML page
//!   hashtoc `<path>` --output `<file>`        - Write the HTML page to a file
//!   hashtoc `<path>` --envelope               - Print the JSON response envelope instead
//!
//! The file goes through the same upload path a network endpoint would use: its declared content
//! type (`--content-type`, `text/plain` unless told otherwise) is checked and its bytes must be
//! UTF-8. Set `RUST_LOG` to see what happens along the way.

use clap::{Arg, ArgAction, ArgMatches, Command};
use hashtoc_config::{ConfigError, HashtocConfig, Loader};
use hashtoc_core::service::{FileLoaderService, FileUpload, Response, ResponseBody, PLAIN_TEXT};
use hashtoc_core::HtmlConverter;

fn main() {
    env_logger::init();

    let matches = build_cli().get_matches();

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");
    let content_type = matches
        .get_one::<String>("content-type")
        .expect("content-type has a default");

    let service = FileLoaderService::with_options(
        HtmlConverter::new(config.converter_options()),
        config.service_options(),
    );
    let upload = FileUpload::new(path, Some(content_type.as_str()));
    let response = service.parse_file(Some(&upload));

    if matches.get_flag("envelope") {
        handle_envelope_output(&response);
    } else {
        handle_html_output(response, matches.get_one::<String>("output"));
    }
}

fn build_cli() -> Command {
    Command::new("hashtoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert '#'-marked plain text into an HTML page with a table of contents")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the text file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("content-type")
                .long("content-type")
                .short('t')
                .help("Content type declared for the file")
                .default_value(PLAIN_TEXT),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("marker")
                .long("marker")
                .short('m')
                .help("Heading marker character (default: '#')")
                .value_parser(clap::value_parser!(char)),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write the HTML page here instead of stdout"),
        )
        .arg(
            Arg::new("envelope")
                .long("envelope")
                .help("Print the JSON response envelope instead of the page")
                .action(ArgAction::SetTrue),
        )
}

fn load_config(matches: &ArgMatches) -> Result<HashtocConfig, ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(marker) = matches.get_one::<char>("marker") {
        loader = loader.with_marker(*marker)?;
    }
    loader.build()
}

/// Print the envelope; the exit code follows the response status
fn handle_envelope_output(response: &Response) {
    let json = response.body_json().unwrap_or_else(|e| {
        eprintln!("Error formatting response: {}", e);
        std::process::exit(1);
    });
    println!("{}", json);

    if !response.status.is_success() {
        std::process::exit(1);
    }
}

/// Print or write the page, or report the failure on stderr
fn handle_html_output(response: Response, output: Option<&String>) {
    match response.body {
        ResponseBody::Success { data, .. } => match output {
            Some(path) => {
                if let Err(e) = std::fs::write(path, data) {
                    eprintln!("Error writing {}: {}", path, e);
                    std::process::exit(1);
                }
                log::info!("wrote {}", path);
            }
            None => print!("{}", data),
        },
        ResponseBody::Error { message, code } => {
            eprintln!("Error: {} ({})", message, code.as_str());
            std::process::exit(1);
        }
    }
}
