use rust_decimal::Decimal;
use time::{Date, OffsetDateTime};

/// A typed datum bindable as a statement parameter.
///
/// Values are immutable once built: the variant chosen at construction never
/// changes. Arrays are homogeneous in practice but this layer does not
/// enforce it. Struct fields are positional, names may repeat or be absent.
#[derive(Default, Debug, Clone, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int64(i64),
    Float64(f64),
    Numeric(Decimal),
    String(String),
    Bytes(Box<[u8]>),
    Date(Date),
    Timestamp(OffsetDateTime),
    Array(Vec<Value>),
    Struct(Vec<(Option<String>, Value)>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

macro_rules! impl_from_value {
    ($source:ty, $variant:path) => {
        impl From<$source> for Value {
            fn from(value: $source) -> Self {
                $variant(value.into())
            }
        }
    };
}

impl_from_value!(bool, Value::Bool);
impl_from_value!(i8, Value::Int64);
impl_from_value!(i16, Value::Int64);
impl_from_value!(i32, Value::Int64);
impl_from_value!(i64, Value::Int64);
impl_from_value!(u8, Value::Int64);
impl_from_value!(u16, Value::Int64);
impl_from_value!(u32, Value::Int64);
impl_from_value!(f32, Value::Float64);
impl_from_value!(f64, Value::Float64);
impl_from_value!(Decimal, Value::Numeric);
impl_from_value!(String, Value::String);
impl_from_value!(Box<[u8]>, Value::Bytes);
impl_from_value!(Date, Value::Date);
impl_from_value!(OffsetDateTime, Value::Timestamp);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.into())
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Bytes(value.into())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::Array(value.into_iter().map(Into::into).collect())
    }
}
