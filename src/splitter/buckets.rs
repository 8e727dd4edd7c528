use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

use crate::models::AgeBucket;
use crate::parsers::resolve_timestamp;

const THREE_MONTHS_DAYS: i64 = 90;
const SIX_MONTHS_DAYS: i64 = 180;
const TWELVE_MONTHS_DAYS: i64 = 365;

/// Assign a bucket from a resolved timestamp
///
/// Each bucket includes its more recent boundary: exactly `now - 90 days` is still
/// `last-3-months`. Unresolved timestamps always land in `older`.
pub fn classify(timestamp: Option<DateTime<Utc>>, now: DateTime<Utc>) -> AgeBucket {
    let Some(ts) = timestamp else {
        return AgeBucket::Older;
    };

    if ts >= now - Duration::days(THREE_MONTHS_DAYS) {
        AgeBucket::LastThreeMonths
    } else if ts >= now - Duration::days(SIX_MONTHS_DAYS) {
        AgeBucket::ThreeToSixMonths
    } else if ts >= now - Duration::days(TWELVE_MONTHS_DAYS) {
        AgeBucket::SixToTwelveMonths
    } else {
        AgeBucket::Older
    }
}

/// Conversation records grouped by bucket, each group in input order
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Partition {
    groups: [Vec<Value>; 4],
}

impl Partition {
    pub fn get(&self, bucket: AgeBucket) -> &[Value] {
        &self.groups[bucket.index()]
    }

    /// Total number of records across all buckets
    pub fn len(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Buckets with their records, in emission order
    pub fn iter(&self) -> impl Iterator<Item = (AgeBucket, &[Value])> {
        AgeBucket::ALL.into_iter().map(|bucket| (bucket, self.get(bucket)))
    }

    fn push(&mut self, bucket: AgeBucket, record: Value) {
        self.groups[bucket.index()].push(record);
    }
}

/// Split records into age buckets relative to `now`
pub fn partition(records: Vec<Value>, now: DateTime<Utc>) -> Partition {
    let mut partition = Partition::default();
    for record in records {
        let bucket = classify(resolve_timestamp(&record), now);
        partition.push(bucket, record);
    }
    partition
}
