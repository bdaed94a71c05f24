use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "recommendation_agent", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "recommendation_agent", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "recommendation_agent", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "recommendation_agent", "{}", message);
    }
}
