use std::collections::HashSet;
use std::time::Duration;

use chrono::NaiveDate;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;

use crate::models::{Opportunity, StudentProfile};

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum PostgresError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Status an opportunity must have to be recommended
const APPROVED_STATUS: &str = "approved";

/// Role a user must have to receive recommendations
const STUDENT_ROLE: &str = "student";

// Tables are owned by the main Provics application, which keeps the
// default SQLAlchemy names (`user` is reserved in PostgreSQL, hence quoted).
const STUDENT_QUERY: &str = r#"
    SELECT id, name, skills
    FROM "user"
    WHERE id = $1 AND role = $2
"#;

const APPROVED_OPPORTUNITIES_QUERY: &str = r#"
    SELECT id, title, description, visit_type, company_name, location, date
    FROM industrial_visit
    WHERE status = $1
    ORDER BY id
"#;

const APPLIED_IDS_QUERY: &str = r#"
    SELECT visit_id
    FROM application
    WHERE student_id = $1
"#;

#[derive(Debug, sqlx::FromRow)]
struct StudentRow {
    id: i32,
    name: String,
    skills: Option<String>,
}

impl From<StudentRow> for StudentProfile {
    fn from(row: StudentRow) -> Self {
        StudentProfile {
            id: i64::from(row.id),
            name: row.name,
            skills: row.skills,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct OpportunityRow {
    id: i32,
    title: String,
    description: String,
    visit_type: Option<String>,
    company_name: String,
    location: Option<String>,
    date: Option<NaiveDate>,
}

impl From<OpportunityRow> for Opportunity {
    fn from(row: OpportunityRow) -> Self {
        Opportunity {
            id: i64::from(row.id),
            title: row.title,
            description: row.description,
            category: row.visit_type.unwrap_or_default(),
            organization_name: row.company_name,
            location: row.location,
            date: row.date,
        }
    }
}

/// Read-only PostgreSQL access to the Provics database
///
/// Students, opportunities and applications are owned by the main Provics
/// application; this client never creates or alters tables.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, PostgresError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            Duration::from_secs(acquire_timeout_secs.unwrap_or(5)),
            Duration::from_secs(idle_timeout_secs.unwrap_or(600)),
        )
        .await
    }

    /// Create a client whose connections are only opened on first use
    pub fn connect_lazy(database_url: &str) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(1))
            .connect_lazy(database_url)?;

        Ok(Self { pool })
    }

    /// Fetch a student's matching profile
    ///
    /// Returns `NotFound` when no user with that id exists or the user is
    /// not a student.
    pub async fn get_student(&self, student_id: i64) -> Result<StudentProfile, PostgresError> {
        let not_found = || PostgresError::NotFound(format!("student {}", student_id));
        let id = i32::try_from(student_id).map_err(|_| not_found())?;

        let row: StudentRow = sqlx::query_as(STUDENT_QUERY)
            .bind(id)
            .bind(STUDENT_ROLE)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(not_found)?;

        Ok(row.into())
    }

    /// List every approved opportunity, oldest first
    pub async fn list_approved_opportunities(&self) -> Result<Vec<Opportunity>, PostgresError> {
        let rows: Vec<OpportunityRow> = sqlx::query_as(APPROVED_OPPORTUNITIES_QUERY)
            .bind(APPROVED_STATUS)
            .fetch_all(&self.pool)
            .await?;

        let opportunities: Vec<Opportunity> = rows.into_iter().map(Opportunity::from).collect();

        tracing::debug!("Loaded {} approved opportunities", opportunities.len());

        Ok(opportunities)
    }

    /// Ids of the opportunities a student has already applied to
    pub async fn get_applied_opportunity_ids(
        &self,
        student_id: i64,
    ) -> Result<HashSet<i64>, PostgresError> {
        let Ok(id) = i32::try_from(student_id) else {
            return Ok(HashSet::new());
        };

        let rows: Vec<(i32,)> = sqlx::query_as(APPLIED_IDS_QUERY)
            .bind(id)
            .fetch_all(&self.pool)
            .await?;

        let applied: HashSet<i64> = rows.into_iter().map(|(visit_id,)| i64::from(visit_id)).collect();

        tracing::debug!("Student {} has applied to {} opportunities", student_id, applied.len());

        Ok(applied)
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, PostgresError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = PostgresError::NotFound("student 42".to_string());
        assert_eq!(err.to_string(), "Not found: student 42");
    }

    #[test]
    fn test_queries_read_provics_tables() {
        assert!(STUDENT_QUERY.contains(r#"FROM "user""#));
        assert!(APPROVED_OPPORTUNITIES_QUERY.contains("FROM industrial_visit\n"));
        assert!(APPLIED_IDS_QUERY.contains("FROM application\n"));
    }

    #[test]
    fn test_opportunity_without_visit_type() {
        let row = OpportunityRow {
            id: 7,
            title: "Plant tour".to_string(),
            description: "Assembly line walk-through".to_string(),
            visit_type: None,
            company_name: "ACME".to_string(),
            location: None,
            date: None,
        };

        let opportunity = Opportunity::from(row);

        assert_eq!(opportunity.id, 7);
        assert_eq!(opportunity.category, "");
        assert_eq!(opportunity.organization_name, "ACME");
    }

    #[test]
    fn test_student_row_conversion() {
        let row = StudentRow {
            id: 3,
            name: "Asha".to_string(),
            skills: None,
        };

        let student = StudentProfile::from(row);

        assert_eq!(student.id, 3);
        assert!(student.skills.is_none());
    }
}
