/// Receives progress and failure messages of a run.
pub trait Report {
    fn debug(&mut self, message: &str);
    fn info(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

/// Forwards messages to the `log` facade.
pub struct LogReport;

impl Report for LogReport {
    fn debug(&mut self, message: &str) {
        log::debug!("{message}");
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn error(&mut self, message: &str) {
        log::error!("{message}");
    }
}
