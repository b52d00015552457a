pub mod time;

/// Backend address baked in at build time through `BACKEND_URL`, if any.
/// Without one the app talks to the origin it was served from.
pub fn backend_url() -> Option<&'static str> {
    option_env!("BACKEND_URL")
}

/// True when built against a backend on this machine, which turns on
/// debug logging.
pub fn is_dev_mode() -> bool {
    backend_url().is_some_and(is_local_backend)
}

fn is_local_backend(url: &str) -> bool {
    url.contains("localhost") || url.contains("127.0.0.1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_backends() {
        assert!(is_local_backend("http://localhost:8000"));
        assert!(is_local_backend("http://127.0.0.1:8000"));
        assert!(!is_local_backend("https://bookings.example.com"));
    }
}
