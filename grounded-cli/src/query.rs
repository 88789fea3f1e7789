//! The `query` subcommand.

use std::io::Write;

use clap::Args;
use thiserror::Error;
use tracing::{debug, info};

use grounded_client::{ClientError, GeminiClient};
use grounded_core::{add_inline_citations, output, query_with_grounding, SearchError};

use crate::input::{self, PromptError};

const FLASH_MODEL: &str = "gemini-2.5-flash";
const PRO_MODEL: &str = "gemini-2.5-pro";

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// The query prompt
    pub prompt: Option<String>,

    /// Read prompt from stdin (overrides PROMPT argument)
    #[arg(short = 's', long)]
    pub stdin: bool,

    /// Add inline citations to the response text
    #[arg(long)]
    pub add_citations: bool,

    /// Use gemini-2.5-pro model (default: gemini-2.5-flash)
    #[arg(long)]
    pub pro: bool,

    /// Output markdown format instead of JSON
    #[arg(short = 't', long)]
    pub text: bool,

    /// Increase verbosity (-v info, -vv debug + grounding metadata in JSON, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Failures surfaced at the command boundary. Everything here renders as
/// `Error: <message>` on stderr with exit code 1.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("Unexpected error: {0}")]
    Unexpected(#[from] anyhow::Error),
}

pub async fn run(args: QueryArgs) -> Result<(), QueryError> {
    let prompt = input::validate_prompt(args.prompt.as_deref(), args.stdin)?;
    debug!(chars = prompt.len(), "validated prompt");

    let client = GeminiClient::from_env()?;
    let model = if args.pro { PRO_MODEL } else { FLASH_MODEL };
    info!(model, "querying with Google Search grounding");

    let mut response = query_with_grounding(&client, &prompt, model).await?;
    info!(
        chars = response.response_text.len(),
        citations = response.citations.len(),
        "query completed"
    );

    if args.add_citations && response.grounding_segments.is_some() {
        debug!("adding inline citations to response text");
        response.response_text = add_inline_citations(
            &response.response_text,
            response.grounding_segments.as_deref(),
            &response.citations,
        );
    }

    let rendered = if args.text {
        output::to_markdown(&response)
    } else {
        output::to_json(&response, args.verbose >= 2)
    };

    // Output is written only once the full response has been built; a failed
    // run emits nothing on stdout.
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}").map_err(anyhow::Error::from)?;

    Ok(())
}
