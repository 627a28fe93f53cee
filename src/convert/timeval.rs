use crate::error::BindingsError;
use crate::sys::{__suseconds_t, __time_t, timeval};
use chrono::{DateTime, TimeZone, Utc};

/// Largest valid `tv_usec`.
const MAX_USEC: u32 = 999_999;

impl<T: TimeZone> From<&DateTime<T>> for timeval {
    /// A leap second, where chrono counts sub-second micros past one million, is clamped to the
    /// last microsecond of the second.
    fn from(value: &DateTime<T>) -> Self {
        Self {
            tv_sec: value.timestamp() as __time_t,
            tv_usec: value.timestamp_subsec_micros().min(MAX_USEC) as __suseconds_t,
        }
    }
}

impl TryFrom<&timeval> for DateTime<Utc> {
    type Error = BindingsError;

    fn try_from(value: &timeval) -> Result<Self, Self::Error> {
        let sec = value.tv_sec as i64;
        let usec = value.tv_usec as i64;
        let invalid = BindingsError::InvalidTimestamp { sec, usec };

        if !(0..1_000_000).contains(&usec) {
            return Err(invalid);
        }

        DateTime::from_timestamp(sec, (usec * 1000) as u32).ok_or(invalid)
    }
}

impl timeval {
    pub fn now() -> Self {
        (&Utc::now()).into()
    }
}
