//! Sorting policy for collected descriptors
//!
//! Every key compares on a signed 64-bit projection: the size in bytes, or a timestamp in
//! nanoseconds since the Unix epoch. The default sense is descending (largest or most recent
//! first); `reverse` flips it. Sorts are stable, so ties keep their enumeration order.

pub mod sort_key;

use crate::artifacts::descriptor::file_descriptor::FileDescriptor;
use chrono::{DateTime, Utc};
use sort_key::SortKeys;
use std::cmp::Reverse;

pub fn sort(descriptors: &mut [FileDescriptor], keys: SortKeys, reverse: bool) {
    if keys.is_ambiguous() {
        log::warn!("several sort keys requested ({keys:?}), the last one in size/time/atime/ctime order wins");
    }

    for key in keys.iter() {
        if reverse {
            descriptors.sort_by_key(|descriptor| projection(key, descriptor));
        } else {
            descriptors.sort_by_key(|descriptor| Reverse(projection(key, descriptor)));
        }
    }
}

fn projection(key: SortKeys, descriptor: &FileDescriptor) -> i64 {
    let stat = descriptor.stat();

    if key == SortKeys::SIZE {
        i64::try_from(stat.size()).unwrap_or(i64::MAX)
    } else if key == SortKeys::MTIME {
        nanos(stat.mtime())
    } else if key == SortKeys::ATIME {
        nanos(stat.atime())
    } else {
        nanos(stat.ctime())
    }
}

fn nanos(at: DateTime<Utc>) -> i64 {
    at.timestamp_nanos_opt().unwrap_or(if at.timestamp() < 0 {
        i64::MIN
    } else {
        i64::MAX
    })
}
