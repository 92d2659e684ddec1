/// Snapshot of a completed HTTP response: the final URL, the status code,
/// the content type (if the server sent one), and the raw body text.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub url: String,
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}
