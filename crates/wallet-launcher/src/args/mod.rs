//! Command-line handling needed at bootstrap.
//!
//! Only two things are read from the command line here: the deep-link URL
//! following a `--` token, and the program path that is forwarded to the
//! execution environment. User-facing flags are left to later stages.

use crate::model::{
    ExecutionContext, FilteredArguments, OpenedUrl, ParsedArguments, FORWARD_ARGUMENT_COUNT,
};

/// Token that arms deep-link parsing.
pub const URL_SEPARATOR: &str = "--";

/// Everything the argument pipeline derives from the raw arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedCommandLine {
    pub arguments: ParsedArguments,
    pub opened_url: OpenedUrl,
    pub filtered: FilteredArguments,
}

pub fn parse(context: &ExecutionContext) -> ParsedCommandLine {
    let arguments = decode_arguments(context);
    let opened_url = extract_opened_url(&arguments);
    let filtered = filter_arguments(context);
    ParsedCommandLine {
        arguments,
        opened_url,
        filtered,
    }
}

/// Decode each raw argument to text.
///
/// Invalid sequences are replaced with U+FFFD; decoding never fails.
pub fn decode_arguments(context: &ExecutionContext) -> ParsedArguments {
    ParsedArguments::new(
        context
            .raw()
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect(),
    )
}

/// Every token after the first `--` overwrites the URL, so the last one wins.
pub fn extract_opened_url(arguments: &ParsedArguments) -> OpenedUrl {
    let mut armed = false;
    let mut url = OpenedUrl::default();
    for argument in arguments {
        if armed {
            url = OpenedUrl::new(argument.as_str());
        } else if argument == URL_SEPARATOR {
            armed = true;
        }
    }
    url
}

pub fn filter_arguments(context: &ExecutionContext) -> FilteredArguments {
    FilteredArguments::new(
        context
            .raw()
            .iter()
            .take(FORWARD_ARGUMENT_COUNT)
            .cloned()
            .collect(),
    )
}
