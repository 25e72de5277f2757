pub mod output;

pub use output::{
    log_verbose, print_body, print_fatal, print_http_error, print_status,
    print_unsupported_format,
};
