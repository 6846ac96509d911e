/// Logging port for the business layer.
///
/// Use cases receive an `Arc<dyn Logger>` so the core stays free of any
/// concrete logging backend.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
