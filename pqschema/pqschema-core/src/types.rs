use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

/// Parquet physical types, numbered as in the Thrift definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalType {
    Boolean,
    Int32,
    Int64,
    Int96,
    Float,
    Double,
    ByteArray,
    FixedLenByteArray,
}

impl PhysicalType {
    pub const ALL: [PhysicalType; 8] = [
        PhysicalType::Boolean,
        PhysicalType::Int32,
        PhysicalType::Int64,
        PhysicalType::Int96,
        PhysicalType::Float,
        PhysicalType::Double,
        PhysicalType::ByteArray,
        PhysicalType::FixedLenByteArray,
    ];

    /// Thrift code of this type.
    pub fn code(self) -> i32 {
        match self {
            PhysicalType::Boolean => 0,
            PhysicalType::Int32 => 1,
            PhysicalType::Int64 => 2,
            PhysicalType::Int96 => 3,
            PhysicalType::Float => 4,
            PhysicalType::Double => 5,
            PhysicalType::ByteArray => 6,
            PhysicalType::FixedLenByteArray => 7,
        }
    }

    /// Looks up a Thrift code, returning `None` for codes outside the enumeration.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    pub fn name(self) -> &'static str {
        match self {
            PhysicalType::Boolean => "BOOLEAN",
            PhysicalType::Int32 => "INT32",
            PhysicalType::Int64 => "INT64",
            PhysicalType::Int96 => "INT96",
            PhysicalType::Float => "FLOAT",
            PhysicalType::Double => "DOUBLE",
            PhysicalType::ByteArray => "BYTE_ARRAY",
            PhysicalType::FixedLenByteArray => "FIXED_LEN_BYTE_ARRAY",
        }
    }
}

impl Display for PhysicalType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.name())
    }
}

/// Legacy Parquet annotations (`ConvertedType` in the Thrift definition).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConvertedType {
    Utf8,
    Map,
    MapKeyValue,
    List,
    Enum,
    Decimal,
    Date,
    TimeMillis,
    TimeMicros,
    TimestampMillis,
    TimestampMicros,
    #[serde(rename = "UINT_8")]
    Uint8,
    #[serde(rename = "UINT_16")]
    Uint16,
    #[serde(rename = "UINT_32")]
    Uint32,
    #[serde(rename = "UINT_64")]
    Uint64,
    #[serde(rename = "INT_8")]
    Int8,
    #[serde(rename = "INT_16")]
    Int16,
    #[serde(rename = "INT_32")]
    Int32,
    #[serde(rename = "INT_64")]
    Int64,
    Json,
    Bson,
    Interval,
}

impl ConvertedType {
    pub fn name(self) -> &'static str {
        match self {
            ConvertedType::Utf8 => "UTF8",
            ConvertedType::Map => "MAP",
            ConvertedType::MapKeyValue => "MAP_KEY_VALUE",
            ConvertedType::List => "LIST",
            ConvertedType::Enum => "ENUM",
            ConvertedType::Decimal => "DECIMAL",
            ConvertedType::Date => "DATE",
            ConvertedType::TimeMillis => "TIME_MILLIS",
            ConvertedType::TimeMicros => "TIME_MICROS",
            ConvertedType::TimestampMillis => "TIMESTAMP_MILLIS",
            ConvertedType::TimestampMicros => "TIMESTAMP_MICROS",
            ConvertedType::Uint8 => "UINT_8",
            ConvertedType::Uint16 => "UINT_16",
            ConvertedType::Uint32 => "UINT_32",
            ConvertedType::Uint64 => "UINT_64",
            ConvertedType::Int8 => "INT_8",
            ConvertedType::Int16 => "INT_16",
            ConvertedType::Int32 => "INT_32",
            ConvertedType::Int64 => "INT_64",
            ConvertedType::Json => "JSON",
            ConvertedType::Bson => "BSON",
            ConvertedType::Interval => "INTERVAL",
        }
    }
}

impl Display for ConvertedType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeUnit {
    Millis,
    Micros,
    Nanos,
}

/// Parquet logical type annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogicalType {
    String,
    Map,
    List,
    Enum,
    Decimal { scale: i32, precision: i32 },
    Date,
    Time { utc: bool, unit: TimeUnit },
    Timestamp { utc: bool, unit: TimeUnit },
    Integer { bit_width: i8, signed: bool },
    Unknown,
    Json,
    Bson,
    Uuid,
    Float16,
}

/// Field repetition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Repetition {
    #[default]
    Required,
    Optional,
    Repeated,
}

impl Repetition {
    pub fn name(self) -> &'static str {
        match self {
            Repetition::Required => "REQUIRED",
            Repetition::Optional => "OPTIONAL",
            Repetition::Repeated => "REPEATED",
        }
    }
}

impl Display for Repetition {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.name())
    }
}
