/// Pulls candidate field phrases out of a free-form prompt.
pub trait IPhraseExtractor: Send + Sync {
    /// Candidate phrases, deduplicated, in first-seen order.
    fn extract(&self, prompt: &str) -> Vec<String>;

    /// Strategy name, for logs.
    fn name(&self) -> &str;
}
