//! cpal backed audio subsystem
//!
//! Every cpal host stands in for a host API. Devices of all hosts share one
//! index space, numbered in host order.

mod backend;

pub use backend::CpalBackend;
