use std::{fs::File, path::Path};

use parquet::{
    basic::{
        ConvertedType as PqConvertedType, LogicalType as PqLogicalType, Repetition as PqRepetition,
        TimeUnit as PqTimeUnit, Type as PqPhysicalType,
    },
    file::reader::{FileReader, SerializedFileReader},
    schema::types::Type,
};
use pqschema_core::{ConvertedType, LogicalType, PhysicalType, Repetition, SchemaNode, TimeUnit};

use crate::BuildError;

/// Reads the footer of the Parquet file at `path` and builds its schema tree.
pub fn schema_tree_from_path(path: impl AsRef<Path>) -> Result<SchemaNode, BuildError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| BuildError::Open {
        path: path.display().to_string(),
        source,
    })?;
    let reader = SerializedFileReader::new(file).map_err(|source| BuildError::Footer {
        path: path.display().to_string(),
        source,
    })?;
    Ok(schema_tree(reader.metadata().file_metadata().schema()))
}

/// Converts a `parquet` schema type (normally the message root) into a [`SchemaNode`] tree.
pub fn schema_tree(ty: &Type) -> SchemaNode {
    let info = ty.get_basic_info();
    let repetition = info.has_repetition().then(|| repetition(info.repetition()));

    let node = match ty {
        Type::PrimitiveType {
            physical_type,
            type_length,
            ..
        } => {
            let node = SchemaNode::primitive(
                info.name(),
                physical(*physical_type),
                Repetition::Required,
            );
            if *physical_type == PqPhysicalType::FIXED_LEN_BYTE_ARRAY {
                node.with_type_length(*type_length)
            } else {
                node
            }
        }
        Type::GroupType { fields, .. } => SchemaNode::group(
            info.name(),
            Repetition::Required,
            fields.iter().map(|field| schema_tree(field)),
        ),
    }
    .with_repetition(repetition);

    let node = match converted(info.converted_type()) {
        Some(converted) => node.with_converted_type(converted),
        None => node,
    };
    let logical = info
        .logical_type_ref()
        .and_then(logical_type)
        .or_else(|| legacy_decimal(ty));
    match logical {
        Some(logical) => node.with_logical_type(logical),
        None => node,
    }
}

fn physical(ty: PqPhysicalType) -> PhysicalType {
    match ty {
        PqPhysicalType::BOOLEAN => PhysicalType::Boolean,
        PqPhysicalType::INT32 => PhysicalType::Int32,
        PqPhysicalType::INT64 => PhysicalType::Int64,
        PqPhysicalType::INT96 => PhysicalType::Int96,
        PqPhysicalType::FLOAT => PhysicalType::Float,
        PqPhysicalType::DOUBLE => PhysicalType::Double,
        PqPhysicalType::BYTE_ARRAY => PhysicalType::ByteArray,
        PqPhysicalType::FIXED_LEN_BYTE_ARRAY => PhysicalType::FixedLenByteArray,
    }
}

fn repetition(repetition: PqRepetition) -> Repetition {
    match repetition {
        PqRepetition::REQUIRED => Repetition::Required,
        PqRepetition::OPTIONAL => Repetition::Optional,
        PqRepetition::REPEATED => Repetition::Repeated,
    }
}

fn converted(converted: PqConvertedType) -> Option<ConvertedType> {
    let converted = match converted {
        PqConvertedType::NONE => return None,
        PqConvertedType::UTF8 => ConvertedType::Utf8,
        PqConvertedType::MAP => ConvertedType::Map,
        PqConvertedType::MAP_KEY_VALUE => ConvertedType::MapKeyValue,
        PqConvertedType::LIST => ConvertedType::List,
        PqConvertedType::ENUM => ConvertedType::Enum,
        PqConvertedType::DECIMAL => ConvertedType::Decimal,
        PqConvertedType::DATE => ConvertedType::Date,
        PqConvertedType::TIME_MILLIS => ConvertedType::TimeMillis,
        PqConvertedType::TIME_MICROS => ConvertedType::TimeMicros,
        PqConvertedType::TIMESTAMP_MILLIS => ConvertedType::TimestampMillis,
        PqConvertedType::TIMESTAMP_MICROS => ConvertedType::TimestampMicros,
        PqConvertedType::UINT_8 => ConvertedType::Uint8,
        PqConvertedType::UINT_16 => ConvertedType::Uint16,
        PqConvertedType::UINT_32 => ConvertedType::Uint32,
        PqConvertedType::UINT_64 => ConvertedType::Uint64,
        PqConvertedType::INT_8 => ConvertedType::Int8,
        PqConvertedType::INT_16 => ConvertedType::Int16,
        PqConvertedType::INT_32 => ConvertedType::Int32,
        PqConvertedType::INT_64 => ConvertedType::Int64,
        PqConvertedType::JSON => ConvertedType::Json,
        PqConvertedType::BSON => ConvertedType::Bson,
        PqConvertedType::INTERVAL => ConvertedType::Interval,
    };
    Some(converted)
}

fn time_unit(unit: &PqTimeUnit) -> TimeUnit {
    match unit {
        PqTimeUnit::MILLIS => TimeUnit::Millis,
        PqTimeUnit::MICROS => TimeUnit::Micros,
        PqTimeUnit::NANOS => TimeUnit::Nanos,
    }
}

/// Maps logical annotations; annotations without a counterpart are dropped.
fn logical_type(logical: &PqLogicalType) -> Option<LogicalType> {
    let logical = match logical {
        PqLogicalType::String => LogicalType::String,
        PqLogicalType::Map => LogicalType::Map,
        PqLogicalType::List => LogicalType::List,
        PqLogicalType::Enum => LogicalType::Enum,
        PqLogicalType::Decimal { scale, precision } => LogicalType::Decimal {
            scale: *scale,
            precision: *precision,
        },
        PqLogicalType::Date => LogicalType::Date,
        PqLogicalType::Time {
            is_adjusted_to_u_t_c,
            unit,
        } => LogicalType::Time {
            utc: *is_adjusted_to_u_t_c,
            unit: time_unit(unit),
        },
        PqLogicalType::Timestamp {
            is_adjusted_to_u_t_c,
            unit,
        } => LogicalType::Timestamp {
            utc: *is_adjusted_to_u_t_c,
            unit: time_unit(unit),
        },
        PqLogicalType::Integer {
            bit_width,
            is_signed,
        } => LogicalType::Integer {
            bit_width: *bit_width,
            signed: *is_signed,
        },
        PqLogicalType::Unknown => LogicalType::Unknown,
        PqLogicalType::Json => LogicalType::Json,
        PqLogicalType::Bson => LogicalType::Bson,
        PqLogicalType::Uuid => LogicalType::Uuid,
        PqLogicalType::Float16 => LogicalType::Float16,
        _ => return None,
    };
    Some(logical)
}

/// Decimal parameters for primitives annotated only through the converted type.
fn legacy_decimal(ty: &Type) -> Option<LogicalType> {
    match ty {
        Type::PrimitiveType {
            basic_info,
            scale,
            precision,
            ..
        } if basic_info.converted_type() == PqConvertedType::DECIMAL => Some(LogicalType::Decimal {
            scale: *scale,
            precision: *precision,
        }),
        _ => None,
    }
}
