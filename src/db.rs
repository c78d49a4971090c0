// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

use rusqlite::Connection;
use rusqlite::Transaction;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::types::action::Action;
use crate::types::card_id::CardId;
use crate::types::record::ActionRecord;
use crate::types::timestamp::Timestamp;

/// The local preference store: an append-only list of action records.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn new(database_path: &str) -> Fallible<Self> {
        let mut conn = Connection::open(database_path)?;
        {
            let tx = conn.transaction()?;
            if !probe_schema_exists(&tx)? {
                log::debug!("Creating schema in {database_path}");
                tx.execute_batch(include_str!("schema.sql"))?;
                tx.commit()?;
            }
        }
        let conn = Arc::new(Mutex::new(conn));
        Ok(Self { conn })
    }

    /// Append a record.
    pub fn append(&self, record: &ActionRecord) -> Fallible<()> {
        log::debug!("Recording {} for card {}", record.action, record.card_id);
        let mut conn = self.acquire()?;
        let tx = conn.transaction()?;
        insert_preference(&tx, record)?;
        tx.commit()?;
        Ok(())
    }

    /// Return every record, in the order it was appended.
    pub fn records(&self) -> Fallible<Vec<ActionRecord>> {
        let conn = self.acquire()?;
        let mut stmt = conn.prepare(
            "select card_id, action, recorded_at from preferences order by preference_id;",
        )?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            let card_id: CardId = row.get(0)?;
            let action: Action = row.get(1)?;
            let recorded_at: Timestamp = row.get(2)?;
            records.push(ActionRecord::new(card_id, action, recorded_at));
        }
        Ok(records)
    }

    pub fn record_count(&self) -> Fallible<usize> {
        let conn = self.acquire()?;
        let mut stmt = conn.prepare("select count(*) from preferences;")?;
        let count: i64 = stmt.query_row([], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Return the set of cards that have been swiped at least once.
    pub fn swiped_card_ids(&self) -> Fallible<HashSet<CardId>> {
        let conn = self.acquire()?;
        let mut stmt = conn.prepare("select distinct card_id from preferences;")?;
        let mut rows = stmt.query([])?;
        let mut ids = HashSet::new();
        while let Some(row) = rows.next()? {
            let id: CardId = row.get(0)?;
            ids.insert(id);
        }
        Ok(ids)
    }

    fn acquire(&self) -> Fallible<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| ErrorReport::new("database lock poisoned"))
    }
}

fn insert_preference(tx: &Transaction, record: &ActionRecord) -> Fallible<()> {
    let sql = "insert into preferences (card_id, action, recorded_at) values (?, ?, ?);";
    tx.execute(sql, (record.card_id, record.action, record.timestamp))?;
    Ok(())
}

fn probe_schema_exists(tx: &Transaction) -> Fallible<bool> {
    let sql = "select count(*) from sqlite_master where type='table' AND name=?;";
    let count: i64 = tx.query_row(sql, ["preferences"], |row| row.get(0))?;
    Ok(count > 0)
}
