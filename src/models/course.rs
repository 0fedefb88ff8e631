use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use sqlx::FromRow;

use crate::error::{AppError, MISSING_FIELDS};

/// A stored row of the `course` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub srno: i32,
    pub name: String,
    pub description: String,
    #[serde(serialize_with = "bool_as_int")]
    pub is_active: bool,
}

// The column is a BOOLEAN, which the database hands back as 0/1.
fn bool_as_int<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*value))
}

// Accepts `true`/`false` as well as the 0/1 that `bool_as_int` writes out.
fn flag_from_bool_or_int<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<bool>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    match Option::<Flag>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Flag::Bool(value)) => Ok(Some(value)),
        Some(Flag::Int(0)) => Ok(Some(false)),
        Some(Flag::Int(1)) => Ok(Some(true)),
        Some(Flag::Int(other)) => Err(de::Error::invalid_value(
            de::Unexpected::Signed(other),
            &"a boolean, 0 or 1",
        )),
    }
}

/// Request body shared by create and update. Every field is optional here so
/// that presence can be checked and reported uniformly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePayload {
    pub srno: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "flag_from_bool_or_int")]
    pub is_active: Option<bool>,
}

/// A fully populated write, ready to be bound to an INSERT or UPDATE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub srno: i32,
    pub name: String,
    pub description: String,
    pub is_active: bool,
}

impl TryFrom<CoursePayload> for NewCourse {
    type Error = AppError;

    fn try_from(payload: CoursePayload) -> Result<Self, Self::Error> {
        let missing = || AppError::validation(MISSING_FIELDS);

        let srno = payload.srno.filter(|srno| *srno != 0).ok_or_else(missing)?;
        let name = payload.name.filter(|name| !name.is_empty()).ok_or_else(missing)?;
        let description = payload
            .description
            .filter(|description| !description.is_empty())
            .ok_or_else(missing)?;
        // `false` is a value, only absence is rejected
        let is_active = payload.is_active.ok_or_else(missing)?;

        Ok(Self {
            srno,
            name,
            description,
            is_active,
        })
    }
}
