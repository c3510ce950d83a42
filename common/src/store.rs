//! プロジェクトレコードストア
//!
//! 初期化後は読み取り専用。IDの一意性と非空はここで保証する。

use crate::error::{Error, Result};
use crate::types::ProjectRecord;
use std::collections::HashSet;
use std::path::Path;

/// 同梱のデフォルトデータセット
const BUNDLED_PROJECTS: &str = include_str!("../data/projects.json");

/// 順序付きプロジェクトストア
#[derive(Debug, Clone, Default)]
pub struct ProjectStore {
    records: Vec<ProjectRecord>,
}

impl ProjectStore {
    pub fn new(records: Vec<ProjectRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for (position, record) in records.iter().enumerate() {
            if record.id.trim().is_empty() {
                return Err(Error::EmptyId(position));
            }
            if !seen.insert(record.id.as_str()) {
                return Err(Error::DuplicateId(record.id.clone()));
            }
        }

        log::debug!("project store loaded: {} records", records.len());
        Ok(Self { records })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<ProjectRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// 同梱データセット（p1〜p3）
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_PROJECTS)
    }

    /// 見つからない場合は None（呼び出し側で静かに中断する）
    pub fn find_by_id(&self, id: &str) -> Option<&ProjectRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
