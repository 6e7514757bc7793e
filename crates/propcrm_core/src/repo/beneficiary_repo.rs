//! Beneficiary repository contract and SQLite implementation.
//!
//! # Responsibility
//! - CRUD and sync-state updates over the `beneficiaries` table.
//!
//! # Invariants
//! - `payprop_id` is unique when present.
//! - Listing order is stable: name, then uuid.

use crate::model::beneficiary::{Beneficiary, BeneficiaryId, BeneficiaryType};
use crate::model::sync::SyncStatus;
use crate::model::vocabulary::Vocabulary;
use crate::repo::column::{
    beneficiary_type_from_column, beneficiary_type_to_column, identity_from_column,
};
use crate::repo::{RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use uuid::Uuid;

const TABLE: &str = "beneficiaries";

const BENEFICIARY_SELECT_SQL: &str = "SELECT
    uuid,
    payprop_id,
    name,
    business_name,
    email,
    beneficiary_type,
    account_type,
    payment_method,
    sync_status,
    is_active
FROM beneficiaries";

/// Filters for `list_beneficiaries`.
#[derive(Debug, Clone, Default)]
pub struct BeneficiaryListQuery {
    pub beneficiary_type: Option<BeneficiaryType>,
    pub sync_status: Option<SyncStatus>,
    pub include_inactive: bool,
    pub limit: Option<u32>,
    pub offset: u32,
}

pub trait BeneficiaryRepository {
    fn create_beneficiary(&self, beneficiary: &Beneficiary) -> RepoResult<BeneficiaryId>;
    fn update_beneficiary(&self, beneficiary: &Beneficiary) -> RepoResult<()>;
    fn get_beneficiary(&self, id: BeneficiaryId) -> RepoResult<Option<Beneficiary>>;
    fn find_by_payprop_id(&self, payprop_id: &str) -> RepoResult<Option<Beneficiary>>;
    fn list_beneficiaries(&self, query: &BeneficiaryListQuery) -> RepoResult<Vec<Beneficiary>>;
    fn set_sync_status(&self, id: BeneficiaryId, status: SyncStatus) -> RepoResult<()>;
}

pub struct SqliteBeneficiaryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBeneficiaryRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl BeneficiaryRepository for SqliteBeneficiaryRepository<'_> {
    fn create_beneficiary(&self, beneficiary: &Beneficiary) -> RepoResult<BeneficiaryId> {
        beneficiary.validate()?;

        self.conn.execute(
            "INSERT INTO beneficiaries (
                uuid,
                payprop_id,
                name,
                business_name,
                email,
                beneficiary_type,
                account_type,
                payment_method,
                sync_status,
                is_active
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10);",
            params![
                beneficiary.uuid.to_string(),
                beneficiary.payprop_id.as_deref(),
                beneficiary.name.as_str(),
                beneficiary.business_name.as_deref(),
                beneficiary.email.as_deref(),
                beneficiary.beneficiary_type.map(beneficiary_type_to_column),
                beneficiary.account_type.identity(),
                beneficiary.payment_method.identity(),
                beneficiary.sync_status.identity(),
                bool_to_int(beneficiary.is_active),
            ],
        )?;

        Ok(beneficiary.uuid)
    }

    fn update_beneficiary(&self, beneficiary: &Beneficiary) -> RepoResult<()> {
        beneficiary.validate()?;

        let changed = self.conn.execute(
            "UPDATE beneficiaries
             SET
                payprop_id = ?1,
                name = ?2,
                business_name = ?3,
                email = ?4,
                beneficiary_type = ?5,
                account_type = ?6,
                payment_method = ?7,
                sync_status = ?8,
                is_active = ?9,
                updated_at = (CAST(strftime('%s', 'now') AS INTEGER) * 1000)
             WHERE uuid = ?10;",
            params![
                beneficiary.payprop_id.as_deref(),
                beneficiary.name.as_str(),
                beneficiary.business_name.as_deref(),
                beneficiary.email.as_deref(),
                beneficiary.beneficiary_type.map(beneficiary_type_to_column),
                beneficiary.account_type.identity(),
                beneficiary.payment_method.identity(),
                beneficiary.sync_status.identity(),
                bool_to_int(beneficiary.is_active),
                beneficiary.uuid.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(beneficiary.uuid));
        }
        Ok(())
    }

    fn get_beneficiary(&self, id: BeneficiaryId) -> RepoResult<Option<Beneficiary>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BENEFICIARY_SELECT_SQL} WHERE uuid = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        match rows.next()? {
            Some(row) => Ok(Some(parse_beneficiary_row(row)?)),
            None => Ok(None),
        }
    }

    fn find_by_payprop_id(&self, payprop_id: &str) -> RepoResult<Option<Beneficiary>> {
        let trimmed = payprop_id.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let id_text: Option<String> = self
            .conn
            .query_row(
                "SELECT uuid FROM beneficiaries WHERE payprop_id = ?1;",
                [trimmed],
                |row| row.get(0),
            )
            .optional()?;

        match id_text {
            Some(text) => self.get_beneficiary(parse_uuid(&text)?),
            None => Ok(None),
        }
    }

    fn list_beneficiaries(&self, query: &BeneficiaryListQuery) -> RepoResult<Vec<Beneficiary>> {
        let mut sql = format!("{BENEFICIARY_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if !query.include_inactive {
            sql.push_str(" AND is_active = 1");
        }
        if let Some(kind) = query.beneficiary_type {
            push_type_filter(&mut sql, &mut bind_values, kind);
        }
        if let Some(status) = query.sync_status {
            sql.push_str(" AND sync_status = ?");
            bind_values.push(Value::Text(status.identity().to_string()));
        }

        sql.push_str(" ORDER BY name COLLATE NOCASE ASC, uuid ASC");

        match (query.limit, query.offset) {
            (Some(limit), offset) => {
                sql.push_str(" LIMIT ? OFFSET ?");
                bind_values.push(Value::Integer(i64::from(limit)));
                bind_values.push(Value::Integer(i64::from(offset)));
            }
            (None, 0) => {}
            (None, offset) => {
                sql.push_str(" LIMIT -1 OFFSET ?");
                bind_values.push(Value::Integer(i64::from(offset)));
            }
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut beneficiaries = Vec::new();
        while let Some(row) = rows.next()? {
            beneficiaries.push(parse_beneficiary_row(row)?);
        }
        Ok(beneficiaries)
    }

    fn set_sync_status(&self, id: BeneficiaryId, status: SyncStatus) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE beneficiaries
             SET
                sync_status = ?1,
                updated_at = (CAST(strftime('%s', 'now') AS INTEGER) * 1000)
             WHERE uuid = ?2;",
            params![status.identity(), id.to_string()],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }
        Ok(())
    }
}

/// Matches exactly the rows that `beneficiary_type_from_column` reads as `kind`.
///
/// Unreadable stored text reads as the fallback type, so that filter also
/// takes every non-blank value outside the known identities.
fn push_type_filter(sql: &mut String, bind_values: &mut Vec<Value>, kind: BeneficiaryType) {
    bind_values.push(Value::Text(beneficiary_type_to_column(kind).to_string()));
    if kind != BeneficiaryType::FALLBACK {
        sql.push_str(" AND UPPER(TRIM(beneficiary_type)) = ?");
        return;
    }

    let others: Vec<Value> = BeneficiaryType::ALL
        .iter()
        .copied()
        .filter(|other| *other != kind)
        .map(|other| Value::Text(beneficiary_type_to_column(other).to_string()))
        .collect();
    let placeholders = vec!["?"; others.len()].join(", ");
    sql.push_str(&format!(
        " AND TRIM(beneficiary_type) <> '' AND (UPPER(TRIM(beneficiary_type)) = ? \
         OR UPPER(TRIM(beneficiary_type)) NOT IN ({placeholders}))"
    ));
    bind_values.extend(others);
}

fn parse_beneficiary_row(row: &Row<'_>) -> RepoResult<Beneficiary> {
    let uuid_text: String = row.get("uuid")?;
    let account_type: String = row.get("account_type")?;
    let payment_method: String = row.get("payment_method")?;
    let sync_status: String = row.get("sync_status")?;
    let stored_type: Option<String> = row.get("beneficiary_type")?;

    let is_active = match row.get::<_, i64>("is_active")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid is_active value `{other}` in {TABLE}.is_active"
            )));
        }
    };

    let beneficiary = Beneficiary {
        uuid: parse_uuid(&uuid_text)?,
        payprop_id: row.get("payprop_id")?,
        name: row.get("name")?,
        business_name: row.get("business_name")?,
        email: row.get("email")?,
        beneficiary_type: beneficiary_type_from_column(stored_type.as_deref()),
        account_type: identity_from_column(TABLE, "account_type", &account_type)?,
        payment_method: identity_from_column(TABLE, "payment_method", &payment_method)?,
        sync_status: identity_from_column(TABLE, "sync_status", &sync_status)?,
        is_active,
    };
    beneficiary.validate()?;
    Ok(beneficiary)
}

fn parse_uuid(text: &str) -> RepoResult<Uuid> {
    Uuid::parse_str(text)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid `{text}` in {TABLE}.uuid")))
}

fn bool_to_int(value: bool) -> i64 {
    i64::from(value)
}
