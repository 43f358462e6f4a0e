use crate::domain::ports::Display;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// 顯示區：寫到 stdout，每則訊息一行
#[derive(Debug, Clone, Default)]
pub struct TerminalDisplay;

impl TerminalDisplay {
    pub fn new() -> Self {
        Self
    }
}

impl Display for TerminalDisplay {
    fn show(&self, message: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", message).and_then(|_| stdout.flush()) {
            tracing::warn!("Failed to write to stdout: {}", e);
        }
    }
}

/// Keeps every message in memory; `current()` is what the region shows now.
#[derive(Debug, Clone, Default)]
pub struct MemoryDisplay {
    shown: Arc<Mutex<Vec<String>>>,
}

impl MemoryDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<String> {
        self.history().last().cloned()
    }

    pub fn history(&self) -> Vec<String> {
        match self.shown.lock() {
            Ok(shown) => shown.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Display for MemoryDisplay {
    fn show(&self, message: &str) {
        match self.shown.lock() {
            Ok(mut shown) => shown.push(message.to_string()),
            Err(poisoned) => poisoned.into_inner().push(message.to_string()),
        }
    }
}
