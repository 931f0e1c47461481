pub const FALLBACK_MESSAGE: &str = "Sorry, don't know that path";

// Unknown paths get a 200 with a hint, not a 404.
pub async fn fallback_handler() -> &'static str {
    FALLBACK_MESSAGE
}
