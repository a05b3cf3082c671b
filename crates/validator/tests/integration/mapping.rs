//! Mapping chains over verified containers.

use keel_validator::mapping::{map, try_map};
use keel_validator::prelude::*;
use pretty_assertions::assert_eq;

#[derive(Debug, PartialEq)]
struct Endpoint {
    host: String,
    port: u16,
}

fn parse_endpoint(raw: &String) -> Result<Endpoint, ValidationError> {
    let (host, port) = raw
        .split_once(':')
        .ok_or_else(|| ValidationError::new("endpoint", "Expected host:port"))?;
    let port = port.parse().map_err(|_| {
        ValidationError::new("port", "Not a port number").with_param("port", port.to_string())
    })?;
    Ok(Endpoint {
        host: host.to_string(),
        port,
    })
}

#[test]
fn map_and_try_map() {
    let ctx = ModelContext::detached();
    let source = required::<String>().into_data().with_value("db:5432".into());

    assert_eq!(map(&source, &ctx, |raw| raw.len()), Ok(7));
    assert_eq!(
        try_map(&source, &ctx, parse_endpoint),
        Ok(Endpoint {
            host: "db".into(),
            port: 5432
        })
    );
}

#[test]
fn source_errors_pass_through() {
    let ctx = ModelContext::detached();
    let source = required::<String>()
        .into_data()
        .with_validator(not_empty())
        .with_value(String::new());
    let errors = try_map(&source, &ctx, parse_endpoint).unwrap_err();
    assert_eq!(errors.errors()[0].code, "not_empty");
}

#[test]
fn reusable_mapping() {
    let mapping = Mapping::new(required::<String>().into_data(), parse_endpoint).then(|endpoint| {
        if endpoint.port == 0 {
            Err(ValidationError::new("port", "Port must not be zero"))
        } else {
            Ok(endpoint.port)
        }
    });

    let ctx = ModelContext::detached();
    assert_eq!(mapping.map(&ctx, Presence::Value("db:5432".into())), Ok(5432));
    assert_eq!(
        mapping.map(&ctx, Presence::Value("db:0".into())).unwrap_err().errors()[0].message,
        "Port must not be zero"
    );
    assert_eq!(
        mapping.map(&ctx, Presence::Unset).unwrap_err().errors()[0].kind,
        ErrorKind::Required
    );
    let errors = mapping
        .map(&ctx, Presence::Value("db:http".into()))
        .unwrap_err();
    assert_eq!(errors.errors()[0].param("port"), Some("http"));
}
