use crate::api::Method;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "restful")]
#[command(about = "Command-line REST client for JSONPlaceholder", long_about = None)]
pub struct Args {
    #[arg(value_enum, help = "Request method")]
    pub method: Method,

    #[arg(help = "Request endpoint URI fragment")]
    pub endpoint: String,

    #[arg(short = 'd', long = "data", help = "Data to send with request")]
    pub data: Option<String>,

    #[arg(
        short = 'o',
        long = "output",
        help = "Output to .json or .csv file (default: dump to stdout)"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        long = "base-url",
        help = "API base URL (default: https://jsonplaceholder.typicode.com)"
    )]
    pub base_url: Option<String>,

    #[arg(long = "config", help = "Read settings from this YAML or JSON file")]
    pub config: Option<PathBuf>,

    #[arg(short = 'v', long = "verbose", help = "Print diagnostics to stderr")]
    pub verbose: bool,
}
