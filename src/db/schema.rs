//! DDL for the `course` table, run once at startup.

pub const CREATE_COURSE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS course (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    srno INT,
    name VARCHAR(100),
    description VARCHAR(300),
    isActive BOOLEAN
)
"#;
