use clap::Parser;
use restful::api::{is_success, Method};
use restful::cli::Args;
use restful::config::Config;
use restful::error::RestfulError;
use restful::orchestrator::RunContext;
use std::path::PathBuf;

#[test]
fn test_parse_get_with_output() {
    let args = Args::try_parse_from(["restful", "get", "/posts", "-o", "result.csv"]).unwrap();

    assert_eq!(args.method, Method::Get);
    assert_eq!(args.endpoint, "/posts");
    assert_eq!(args.output, Some(PathBuf::from("result.csv")));
    assert_eq!(args.data, None);
    assert!(!args.verbose);
}

#[test]
fn test_parse_post_with_long_flags() {
    let args = Args::try_parse_from([
        "restful",
        "post",
        "/posts",
        "--data",
        r#"{"title":"x"}"#,
        "--output",
        "result.json",
    ])
    .unwrap();

    assert_eq!(args.method, Method::Post);
    assert_eq!(args.data.as_deref(), Some(r#"{"title":"x"}"#));
    assert_eq!(args.output, Some(PathBuf::from("result.json")));
}

#[test]
fn test_unknown_method_is_rejected_by_parser() {
    assert!(Args::try_parse_from(["restful", "delete", "/posts/1"]).is_err());
    assert!(Args::try_parse_from(["restful", "get"]).is_err());
}

#[test]
fn test_method_from_str() {
    assert_eq!("get".parse::<Method>().unwrap(), Method::Get);
    assert_eq!("POST".parse::<Method>().unwrap(), Method::Post);

    match "put".parse::<Method>() {
        Err(RestfulError::InvalidMethod(method)) => assert_eq!(method, "put"),
        other => panic!("expected InvalidMethod, got {:?}", other),
    }
}

#[test]
fn test_method_display() {
    assert_eq!(Method::Get.to_string(), "GET");
    assert_eq!(Method::Post.to_string(), "POST");
}

#[test]
fn test_is_success_matches_hundreds_digit() {
    for status in 0u16..1000 {
        assert_eq!(is_success(status), (200..300).contains(&status), "status {}", status);
    }
}

#[test]
fn test_run_context_from_args() {
    let args =
        Args::try_parse_from(["restful", "get", "/posts/1", "-d", "ignored", "-o", "out.json"])
            .unwrap();
    let config = Config {
        base_url: "http://localhost".to_string(),
        verbose: false,
        source: None,
    };

    let context = RunContext::from_args(args, config);

    assert_eq!(context.request.method, Method::Get);
    assert_eq!(context.request.endpoint, "/posts/1");
    assert_eq!(context.request.data.as_deref(), Some("ignored"));
    assert_eq!(context.output, Some(PathBuf::from("out.json")));
}
