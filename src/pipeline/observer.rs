use log::info;
use log::kv::{ToValue, Value};

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Deduplicate,
    StandardizeDates,
    FillMissing,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Deduplicate => "removing duplicate rows",
            Stage::StandardizeDates => "standardizing date columns",
            Stage::FillMissing => "filling missing values",
        }
    }
}

impl ToValue for Stage {
    fn to_value(&self) -> Value<'_> {
        Value::from_debug(self)
    }
}

/// Display seam for the pipeline: the core announces its stages here and
/// never prints on its own.
pub trait ProgressObserver {
    fn on_stage(&self, stage: Stage);
}

/// Observer for callers that want no progress output.
pub struct NoopObserver;

impl ProgressObserver for NoopObserver {
    fn on_stage(&self, _stage: Stage) {}
}

/// Routes stage announcements through the `log` facade.
pub struct LogObserver;

impl ProgressObserver for LogObserver {
    fn on_stage(&self, stage: Stage) {
        info!("{}", stage.label());
    }
}
