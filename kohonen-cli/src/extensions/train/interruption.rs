//! Interruption handler.

use kohonen::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Creates interruption quota which is reached on Ctrl-C or when max time (in seconds) elapsed.
/// Only one handler can be registered per process, failure to register it is logged and the
/// quota falls back to max time only.
pub fn create_interruption_quota(max_time: Option<usize>, logger: &InfoLogger) -> Arc<dyn Quota + Send + Sync> {
    let inner = max_time.map::<Arc<dyn Quota + Send + Sync>, _>(|time| Arc::new(TimeQuota::new(time as Float)));
    let should_interrupt = Arc::new(AtomicBool::new(false));

    let result = ctrlc::set_handler({
        let should_interrupt = should_interrupt.clone();
        move || {
            should_interrupt.store(true, Ordering::Relaxed);
        }
    });

    if let Err(err) = result {
        (logger)(&format!("cannot set interruption handler: '{err}'"));
    }

    Arc::new(InterruptionQuota { inner, should_interrupt })
}

struct InterruptionQuota {
    inner: Option<Arc<dyn Quota + Send + Sync>>,
    should_interrupt: Arc<AtomicBool>,
}

impl Quota for InterruptionQuota {
    fn is_reached(&self) -> bool {
        self.inner.as_ref().is_some_and(|inner| inner.is_reached()) || self.should_interrupt.load(Ordering::Relaxed)
    }
}
