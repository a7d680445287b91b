use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use encoding_rs::Encoding;
use markup5ever_rcdom::RcDom;

use crate::parsers::html::{
    detect_document_kind, expand_details_components, get_charset, get_title, html_to_dom,
    normalize_headings, serialize_document, set_charset, shape_document, ComponentWarning,
    DocumentKind,
};
use crate::parsers::html::metadata::create_metadata_tag;

/// Represents errors that can occur while converting a document.
#[derive(Debug)]
pub enum ConvertError {
    /// The input could not be parsed into a document tree.
    Parse(String),
    /// The parsed tree lacks a required ancestor (HTML root or BODY).
    Structure(String),
    /// An unknown encoding label was supplied.
    Encoding(String),
    /// Reading the input file failed.
    Io(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConvertError::Parse(details) => write!(f, "parse error: {details}"),
            ConvertError::Structure(details) => write!(f, "structure error: {details}"),
            ConvertError::Encoding(details) => write!(f, "unknown encoding \"{details}\""),
            ConvertError::Io(details) => write!(f, "{details}"),
        }
    }
}

impl Error for ConvertError {}

/// Configuration options that control document conversion.
#[derive(Default, Clone)]
pub struct ConvertOptions {
    /// Custom output encoding label (defaults to the document's own).
    pub encoding: Option<String>,
    /// Skip the prepended conversion metadata comment.
    pub no_metadata: bool,
    /// Suppress warnings and progress messages on the terminal.
    pub silent: bool,
}

/// The outcome of a successful conversion.
pub struct Conversion {
    /// The converted document, ready to be written out verbatim.
    pub data: Vec<u8>,
    /// Title of the output document, if any.
    pub title: Option<String>,
    /// Non-fatal diagnostics collected while expanding components.
    pub warnings: Vec<ComponentWarning>,
}

const ANSI_COLOR_RED: &str = "\x1b[31m";
const ANSI_COLOR_RESET: &str = "\x1b[0m";

/// Converts raw HTML data into a self-contained semantic document.
///
/// The pipeline is strictly sequential and mutates one tree in place:
/// parse, normalize year headings, expand `sl-details` components, shape
/// the document, serialize.
///
/// # Examples
///
/// ```
/// use declutter::core::{convert_document_from_data, ConvertOptions};
///
/// let html = b"<sl-details><div slot=\"summary\">Title</div><p>Body</p></sl-details>";
/// let conversion =
///     convert_document_from_data(&ConvertOptions::default(), html.to_vec(), None).unwrap();
///
/// assert!(String::from_utf8_lossy(&conversion.data).contains("<details>"));
/// ```
pub fn convert_document_from_data(
    options: &ConvertOptions,
    input_data: Vec<u8>,
    input_encoding: Option<String>,
) -> Result<Conversion, ConvertError> {
    validate_encoding(&options.encoding)?;

    // Fragment/full-document mode must be decided on the raw input, since
    // the parser synthesizes HTML/HEAD/BODY around anything it is given.
    let kind: DocumentKind = detect_document_kind(&input_data);

    let (dom, mut document_encoding) = parse_with_declared_charset(&input_data, input_encoding)?;

    normalize_headings(&dom.document);
    let warnings = expand_details_components(&dom, &dom.document);
    shape_document(&dom, kind)?;

    let dom = if let Some(custom_encoding) = options.encoding.clone() {
        document_encoding = custom_encoding.clone();
        set_charset(dom, custom_encoding)
    } else {
        dom
    };

    let document_title = get_title(&dom.document);

    let mut result = serialize_document(dom, document_encoding);

    if !options.no_metadata {
        let mut metadata_comment = create_metadata_tag();
        metadata_comment.push('\n');
        result.splice(0..0, metadata_comment.as_bytes().to_vec());
    }

    if result.last() != Some(&b'\n') {
        result.extend_from_slice(b"\n");
    }

    Ok(Conversion {
        data: result,
        title: document_title,
        warnings,
    })
}

/// Converts an HTML file from the filesystem.
pub fn convert_file(options: &ConvertOptions, target: &str) -> Result<Conversion, ConvertError> {
    let path = Path::new(target);
    if !path.exists() {
        return Err(ConvertError::Io(format!("File not found: {target}")));
    }

    let input_data = fs::read(path)
        .map_err(|e| ConvertError::Io(format!("Failed to read file: {e}")))?;

    convert_document_from_data(options, input_data, None)
}

fn validate_encoding(encoding: &Option<String>) -> Result<(), ConvertError> {
    if let Some(custom_output_encoding) = encoding {
        if Encoding::for_label_no_replacement(custom_output_encoding.as_bytes()).is_none() {
            return Err(ConvertError::Encoding(custom_output_encoding.clone()));
        }
    }
    Ok(())
}

/// Parses the input, then re-parses it with the charset the document itself
/// declares (when that charset is valid).
fn parse_with_declared_charset(
    input_data: &[u8],
    input_encoding: Option<String>,
) -> Result<(RcDom, String), ConvertError> {
    let mut document_encoding = input_encoding.unwrap_or_else(|| "utf-8".to_string());

    let mut dom = html_to_dom(input_data, document_encoding.clone())
        .map_err(|e| ConvertError::Parse(e.to_string()))?;

    if let Some(html_charset) = get_charset(&dom.document) {
        if !html_charset.is_empty() {
            if let Some(document_charset) =
                Encoding::for_label_no_replacement(html_charset.as_bytes())
            {
                document_encoding = html_charset;
                dom = html_to_dom(input_data, document_charset.name().to_string())
                    .map_err(|e| ConvertError::Parse(e.to_string()))?;
            }
        }
    }

    Ok((dom, document_encoding))
}

/// Parses a Content-Type header value into media type and charset.
pub fn parse_content_type(content_type: &str) -> (String, String) {
    let mut media_type = String::new();
    let mut charset = String::new();

    let parts: Vec<&str> = content_type.split(';').collect();

    if !parts.is_empty() {
        media_type = parts[0].trim().to_lowercase();
    }

    for part in parts.iter().skip(1) {
        let part = part.trim();
        if let Some(value) = part.strip_prefix("charset=") {
            charset = value.trim_matches('"').to_string();
        }
    }

    (media_type, charset)
}

/// Formats output path with title substitution and sanitization
pub fn format_output_path(path: &str, document_title: Option<&str>) -> String {
    let datetime: &str = &Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let title = document_title.unwrap_or("");

    path.replace("%timestamp%", &datetime.replace(':', "_"))
        .replace(
            "%title%",
            &title
                .to_string()
                .replace(['/', '\\'], "_")
                .replace('<', "[")
                .replace('>', "]")
                .replace(':', " - ")
                .replace('\"', "")
                .replace('|', "-")
                .replace('?', "")
                .trim_start_matches('.'),
        )
}

/// Prints an error message to stderr
pub fn print_error_message(msg: &str) {
    if atty::is(atty::Stream::Stderr) {
        eprintln!("{ANSI_COLOR_RED}{msg}{ANSI_COLOR_RESET}");
    } else {
        eprintln!("{msg}");
    }
}

/// Prints an info message to stdout
pub fn print_info_message(msg: &str) {
    println!("{msg}");
}
