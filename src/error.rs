use thiserror::Error;

/// Errors raised while setting up or driving an identifier generator
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IdError {
    /// Node ID is outside the supported range
    #[error("Node ID {node_id} is invalid. Maximum allowed value is {max}")]
    InvalidNodeId { node_id: u32, max: u16 },
    /// Zone or slot does not fit the zone layout
    #[error("Zone {zone} slot {slot} is invalid. Zones are 0..{zones}, slots are 0..{slots}")]
    InvalidZone {
        zone: u32,
        slot: u32,
        zones: u16,
        slots: u16,
    },
    /// The process-wide node identity was already set to another value
    #[error("Node ID is already initialized to {current}, refusing to change it to {requested}")]
    NodeAlreadyInitialized { current: u16, requested: u16 },
    /// Generation was requested before any node identity was supplied
    #[error("Node ID has not been initialized")]
    NotInitialized,
    /// A partitioner needs at least one partition
    #[error("Partition count must be greater than zero")]
    InvalidPartitionCount,
}

/// Reasons an identifier string could not be decoded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("identifier is empty")]
    Empty,
    #[error("identifier has {len} bytes, at least {min} are required")]
    TooShort { len: usize, min: usize },
    /// Non-digit byte inside the fixed-width suffix
    #[error("non-digit character at byte {position}")]
    NonDigit { position: usize },
    #[error("{field} value {value} is out of range")]
    FieldOutOfRange { field: &'static str, value: u32 },
    #[error("{year:04}-{month:02}-{day:02} is not a calendar date")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Wall-clock time skipped by a time zone transition
    #[error("local time does not exist in the current time zone")]
    NonexistentLocalTime,
}
