// domain analytics sorting utilities
use serde::{Deserialize, Serialize};

use crate::model::CountMap;

/// 集計テーブルの1行（キーと件数）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedRow {
    pub key: String,
    pub count: usize,
}

impl RankedRow {
    pub fn new(key: impl Into<String>, count: usize) -> Self {
        Self { key: key.into(), count }
    }
}

/// 件数の降順でソートした行を返す
///
/// 安定ソートのため、同数のキーは最初に出現した順序を保つ。
pub fn rank(map: &CountMap) -> Vec<RankedRow> {
    let mut rows = in_insertion_order(map);
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}

/// 挿入順のまま行に変換
pub fn in_insertion_order(map: &CountMap) -> Vec<RankedRow> {
    map.iter().map(|(key, count)| RankedRow::new(key, count)).collect()
}
