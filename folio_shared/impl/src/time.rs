use chrono::{DateTime, FixedOffset, Local, Offset, Utc};
use folio_di::Build;
use folio_shared_contracts::time::TimeService;

#[derive(Debug, Clone, Copy, Build)]
pub struct TimeServiceImpl;

impl TimeService for TimeServiceImpl {
    #[tracing::instrument(level = "trace", skip(self), ret)]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn local_offset(&self, at: DateTime<Utc>) -> FixedOffset {
        at.with_timezone(&Local).offset().fix()
    }
}
