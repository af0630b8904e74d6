//! Values that can be bound to a PostgreSQL statement.

use crate::error::AppError;
use serde_json::Value;
use sqlx::encode::{Encode, IsNull};
use sqlx::postgres::{PgTypeInfo, Postgres};
use sqlx::{Database, Type};
use uuid::Uuid;

/// A bind parameter. Each variant carries its own wire type so one argument
/// list can mix text, integer and uuid columns.
#[derive(Clone, Debug, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    I64(i64),
    Text(String),
    Uuid(Uuid),
}

impl SqlValue {
    /// Scalar JSON only; arrays and objects have no column to land in.
    pub fn from_json(v: &Value) -> Result<Self, AppError> {
        Ok(match v {
            Value::Null => SqlValue::Null,
            Value::Bool(b) => SqlValue::Bool(*b),
            Value::Number(n) => SqlValue::I64(
                n.as_i64()
                    .ok_or_else(|| AppError::BadRequest(format!("unsupported number: {}", n)))?,
            ),
            Value::String(s) => SqlValue::Text(s.clone()),
            Value::Array(_) | Value::Object(_) => {
                return Err(AppError::BadRequest("nested values are not supported".into()))
            }
        })
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SqlValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<String> for SqlValue {
    fn from(s: String) -> Self {
        SqlValue::Text(s)
    }
}

impl From<&str> for SqlValue {
    fn from(s: &str) -> Self {
        SqlValue::Text(s.to_string())
    }
}

impl From<i64> for SqlValue {
    fn from(n: i64) -> Self {
        SqlValue::I64(n)
    }
}

impl From<i32> for SqlValue {
    fn from(n: i32) -> Self {
        SqlValue::I64(n.into())
    }
}

impl From<bool> for SqlValue {
    fn from(b: bool) -> Self {
        SqlValue::Bool(b)
    }
}

impl From<Uuid> for SqlValue {
    fn from(u: Uuid) -> Self {
        SqlValue::Uuid(u)
    }
}

impl<'q> Encode<'q, Postgres> for SqlValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Postgres as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        Ok(match self {
            SqlValue::Null => <Option<String> as Encode<Postgres>>::encode_by_ref(&None, buf)?,
            SqlValue::Bool(b) => <bool as Encode<Postgres>>::encode_by_ref(b, buf)?,
            SqlValue::I64(n) => <i64 as Encode<Postgres>>::encode_by_ref(n, buf)?,
            SqlValue::Text(s) => {
                let s_ref: &str = s.as_str();
                <&str as Encode<Postgres>>::encode_by_ref(&s_ref, buf)?
            }
            SqlValue::Uuid(u) => <Uuid as Encode<Postgres>>::encode_by_ref(u, buf)?,
        })
    }

    fn produces(&self) -> Option<PgTypeInfo> {
        match self {
            SqlValue::Null => None,
            SqlValue::Bool(_) => Some(<bool as Type<Postgres>>::type_info()),
            SqlValue::I64(_) => Some(<i64 as Type<Postgres>>::type_info()),
            SqlValue::Text(_) => Some(<String as Type<Postgres>>::type_info()),
            SqlValue::Uuid(_) => Some(<Uuid as Type<Postgres>>::type_info()),
        }
    }
}

impl Type<Postgres> for SqlValue {
    fn type_info() -> PgTypeInfo {
        <String as Type<Postgres>>::type_info()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_convert() {
        assert_eq!(SqlValue::from_json(&json!(null)).unwrap(), SqlValue::Null);
        assert_eq!(SqlValue::from_json(&json!(7)).unwrap(), SqlValue::I64(7));
        assert_eq!(SqlValue::from_json(&json!("a")).unwrap(), SqlValue::Text("a".into()));
        assert_eq!(SqlValue::from_json(&json!(true)).unwrap(), SqlValue::Bool(true));
    }

    #[test]
    fn nested_and_fractional_values_are_rejected() {
        assert!(matches!(SqlValue::from_json(&json!([1])), Err(AppError::BadRequest(_))));
        assert!(matches!(SqlValue::from_json(&json!({"a": 1})), Err(AppError::BadRequest(_))));
        assert!(matches!(SqlValue::from_json(&json!(1.5)), Err(AppError::BadRequest(_))));
    }
}
