use crate::api::{ApiRequest, ApiResponse, RestClient};
use crate::cli::Args;
use crate::config::Config;
use crate::error::Result;
use crate::export::{save_body, OutputFormat};
use crate::ui::{
    log_verbose, print_body, print_http_error, print_status, print_unsupported_format,
};
use std::io::Write;
use std::path::{Path, PathBuf};

/// How a run ended when nothing went wrong at the transport or file level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    HttpFailure,
    UnsupportedFormat,
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Success => 0,
            Outcome::HttpFailure | Outcome::UnsupportedFormat => 1,
        }
    }
}

pub struct RunContext {
    pub config: Config,
    pub request: ApiRequest,
    pub output: Option<PathBuf>,
}

impl RunContext {
    pub fn from_args(args: Args, config: Config) -> Self {
        Self {
            request: ApiRequest::new(args.method, args.endpoint, args.data),
            output: args.output,
            config,
        }
    }
}

pub async fn run<W: Write>(context: RunContext, out: &mut W) -> Result<Outcome> {
    let client = RestClient::new(context.config.base_url.clone())?
        .with_verbose(context.config.verbose);
    execute(&client, &context, out).await
}

/// Dispatch the request with `client` and handle whatever comes back.
pub async fn execute<W: Write>(
    client: &RestClient,
    context: &RunContext,
    out: &mut W,
) -> Result<Outcome> {
    let response = client.send(&context.request).await?;

    handle_response(
        &response,
        context.output.as_deref(),
        context.config.verbose,
        out,
    )
}

/// Report the status, then either bail out on a non-2xx status or save
/// the body (when asked) and echo it.
pub fn handle_response<W: Write>(
    response: &ApiResponse,
    output: Option<&Path>,
    verbose: bool,
    out: &mut W,
) -> Result<Outcome> {
    print_status(out, response.status_code)?;

    if !response.is_success() {
        print_http_error(out, &response.body)?;
        return Ok(Outcome::HttpFailure);
    }

    if let Some(path) = output {
        let Some(format) = OutputFormat::from_path(path) else {
            print_unsupported_format(out, path)?;
            return Ok(Outcome::UnsupportedFormat);
        };

        log_verbose(verbose, format!("Saving {} to {}", format, path.display()));
        let written = save_body(&response.body, format, path)?;
        log_verbose(verbose, format!("Wrote {} bytes", written));
    }

    print_body(out, &response.body)?;
    Ok(Outcome::Success)
}
