use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use fastrace::collector::{Reporter, SpanRecord};

pub struct CollectingReporter {
    spans: Arc<Mutex<Vec<SpanRecord>>>,
}

impl CollectingReporter {
    pub fn new() -> (Self, SpanCollector) {
        let spans = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                spans: spans.clone(),
            },
            SpanCollector { spans },
        )
    }
}

impl Reporter for CollectingReporter {
    fn report(&mut self, spans: Vec<SpanRecord>) {
        if let Ok(mut collected) = self.spans.lock() {
            collected.extend(spans);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionStats {
    pub name: String,
    pub calls: u32,
    pub total_us: u64,
    pub max_us: u64,
}

pub struct SpanCollector {
    spans: Arc<Mutex<Vec<SpanRecord>>>,
}

impl SpanCollector {
    /// Drains the collected spans and aggregates them per function, slowest first.
    pub fn function_stats(&self) -> Vec<FunctionStats> {
        let spans = match self.spans.lock() {
            Ok(mut spans) => std::mem::take(&mut *spans),
            Err(_) => return Vec::new(),
        };

        let mut by_name: HashMap<String, Vec<u64>> = HashMap::new();
        for span in &spans {
            by_name
                .entry(simplify_name(&span.name))
                .or_default()
                .push(span.duration_ns / 1000);
        }

        let mut stats: Vec<FunctionStats> = by_name
            .into_iter()
            .map(|(name, durations)| FunctionStats {
                name,
                calls: durations.len() as u32,
                total_us: durations.iter().sum(),
                max_us: durations.iter().copied().max().unwrap_or(0),
            })
            .collect();

        stats.sort_by(|a, b| b.total_us.cmp(&a.total_us).then_with(|| a.name.cmp(&b.name)));
        stats
    }
}

fn simplify_name(name: &str) -> String {
    let name = name.replace("::{{closure}}", "");
    match name.rfind("::") {
        Some(pos) => name[pos + 2..].to_string(),
        None => name,
    }
}

pub fn format_profiling(stats: &[FunctionStats]) -> String {
    let mut lines = vec![format!(
        "{:<24} {:>6} {:>12} {:>12}",
        "function", "calls", "total_us", "max_us"
    )];
    lines.extend(stats.iter().map(|s| {
        format!(
            "{:<24} {:>6} {:>12} {:>12}",
            s.name, s.calls, s.total_us, s.max_us
        )
    }));
    lines.join("\n")
}
