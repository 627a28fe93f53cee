use crate::models::RouteDistinguisher;
use crate::sys::rd_t;
use std::fmt::{Display, Formatter};

impl Display for rd_t {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match RouteDistinguisher::try_from(self) {
            Ok(rd) => Display::fmt(&rd, f),
            Err(_) => write!(f, "<unknown rd type {:#06x}>", self.type_),
        }
    }
}
