pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

pub const BASE_URL_ENV: &str = "RESTFUL_BASE_URL";
pub const VERBOSE_ENV: &str = "RESTFUL_VERBOSE";

pub fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

pub fn parse_bool_flag(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "1" | "yes")
}
