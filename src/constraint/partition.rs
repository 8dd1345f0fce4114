//! Deterministic partitioning of identifiers

use crate::error::IdError;
use crate::id::Id;

use super::Constraint;

/// Maps an identifier to a bucket in `[0, partition_count())`
pub trait KeyPartitioner: Send + Sync {
    fn partition(&self, id: &Id) -> usize;

    fn partition_count(&self) -> usize;
}

/// Partitions by the JVM `String::hashCode` of the encoded identifier
///
/// The hash is the 31-polynomial over UTF-16 code units with wrapping `i32`
/// arithmetic, so buckets agree with JVM services partitioning the same
/// strings. `i32::MIN` is taken as `2^31` rather than staying negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashCodePartitioner {
    partitions: usize,
}

impl HashCodePartitioner {
    pub fn new(partitions: usize) -> Result<Self, IdError> {
        if partitions == 0 {
            return Err(IdError::InvalidPartitionCount);
        }
        Ok(Self { partitions })
    }

    /// Partition a raw key string
    #[inline]
    pub fn partition_key(&self, key: &str) -> usize {
        hash_code(key).unsigned_abs() as usize % self.partitions
    }
}

impl KeyPartitioner for HashCodePartitioner {
    #[inline]
    fn partition(&self, id: &Id) -> usize {
        self.partition_key(id.id())
    }

    #[inline]
    fn partition_count(&self) -> usize {
        self.partitions
    }
}

/// `String::hashCode` as computed on the JVM
#[inline]
pub(crate) fn hash_code(key: &str) -> i32 {
    key.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Accepts identifiers whose partition is below `threshold`
#[derive(Debug, Clone)]
pub struct PartitionValidator<P> {
    threshold: usize,
    partitioner: P,
}

impl<P: KeyPartitioner> PartitionValidator<P> {
    pub fn new(threshold: usize, partitioner: P) -> Self {
        Self {
            threshold,
            partitioner,
        }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn partitioner(&self) -> &P {
        &self.partitioner
    }
}

impl<P: KeyPartitioner> Constraint for PartitionValidator<P> {
    #[inline]
    fn evaluate(&self, id: &Id) -> bool {
        self.partitioner.partition(id) < self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::decode;

    #[test]
    fn test_hash_code_matches_jvm() {
        assert_eq!(hash_code(""), 0);
        assert_eq!(hash_code("ABC"), 64578);
        assert_eq!(hash_code("hello"), 99162322);
        // Overflows i32 on the JVM too
        assert_eq!(hash_code("polygenelubricants"), i32::MIN);
    }

    #[test]
    fn test_min_hash_stays_in_range() {
        let partitioner = HashCodePartitioner::new(7).unwrap();
        let bucket = partitioner.partition_key("polygenelubricants");
        assert_eq!(bucket, (1usize << 31) % 7);
    }

    #[test]
    fn test_zero_partitions_rejected() {
        assert_eq!(
            HashCodePartitioner::new(0),
            Err(IdError::InvalidPartitionCount)
        );
    }

    #[test]
    fn test_partition_is_deterministic() {
        let partitioner = HashCodePartitioner::new(16).unwrap();
        let id = decode("ABC2011250959030643972247").unwrap();
        let first = partitioner.partition(&id);
        assert!(first < 16);
        assert_eq!(first, partitioner.partition(&id));
        assert_eq!(
            first,
            hash_code("ABC2011250959030643972247").unsigned_abs() as usize % 16
        );
    }

    #[test]
    fn test_validator_threshold() {
        let partitioner = HashCodePartitioner::new(16).unwrap();
        let id = decode("ABC2011250959030643972247").unwrap();
        let bucket = partitioner.partition(&id);

        assert!(PartitionValidator::new(bucket + 1, partitioner).evaluate(&id));
        assert!(!PartitionValidator::new(bucket, partitioner).evaluate(&id));
        assert!(PartitionValidator::new(16, partitioner).evaluate(&id));
    }
}
