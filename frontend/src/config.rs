use shared::DEFAULT_ENDPOINT;

/// Base address of the prediction service, fixed at build time through
/// `IRIS_API_URL`.
pub fn endpoint() -> String {
    resolve(option_env!("IRIS_API_URL"))
}

fn resolve(configured: Option<&str>) -> String {
    match configured.map(str::trim) {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => DEFAULT_ENDPOINT.to_string(),
    }
}
