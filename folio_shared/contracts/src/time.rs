use chrono::{DateTime, FixedOffset, Utc};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TimeService: Send + Sync + 'static {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the offset of the local timezone at the given instant.
    fn local_offset(&self, at: DateTime<Utc>) -> FixedOffset;
}

#[cfg(feature = "mock")]
impl MockTimeService {
    pub fn with_now(mut self, time: DateTime<Utc>) -> Self {
        self.expect_now().once().return_const(time);
        self
    }

    pub fn with_local_offset(mut self, offset: FixedOffset) -> Self {
        self.expect_local_offset().return_const(offset);
        self
    }
}
