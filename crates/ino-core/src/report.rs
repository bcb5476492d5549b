/// Progress hook for resource searches.
///
/// A search calls `searching` once, then exactly one of `found` or `failed`.
/// Cache hits call nothing.
pub trait SearchReporter {
    fn searching(&mut self, human_name: &str);
    fn found(&mut self, result: &str);
    fn failed(&mut self);
}

/// Forwards search progress to `tracing`.
#[derive(Debug, Default)]
pub struct LogReporter {
    current: Option<String>,
}

impl SearchReporter for LogReporter {
    fn searching(&mut self, human_name: &str) {
        tracing::debug!("Searching for {human_name}");
        self.current = Some(human_name.to_string());
    }

    fn found(&mut self, result: &str) {
        let name = self.current.take().unwrap_or_default();
        tracing::info!("Found {name}: {result}");
    }

    fn failed(&mut self) {
        let name = self.current.take().unwrap_or_default();
        tracing::warn!("{name} not found");
    }
}
