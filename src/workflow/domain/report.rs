//! Aggregate rollups, rankings and the repair dashboard.

use super::amount::amount_or_zero;
use super::layouts::repair;
use super::record::TaskRecord;
use super::schema::FieldName;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Label of the catch-all payment type bucket.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Number of vendors shown in the cost ranking.
pub const TOP_VENDOR_COUNT: usize = 5;

/// What a rollup does with records whose category is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownPolicy {
    /// Exclude them.
    Drop,
    /// Group them under the label; the group is omitted when its total is
    /// zero.
    Bucket(&'static str),
}

/// One group of a rollup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollupEntry {
    /// Category label.
    pub label: String,
    /// Records in the group.
    pub count: usize,
    /// Sum of the group's amounts.
    pub total: Decimal,
}

/// One row of a top-N ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    /// Grouping key of the record.
    pub key: String,
    /// Ranked amount.
    pub amount: Decimal,
}

fn category_label(raw: &str) -> Option<&str> {
    let label = raw.trim();
    (!label.is_empty() && label != "undefined").then_some(label)
}

/// Groups records by `category`, summing `amount` and counting records.
///
/// Groups keep first-seen order. Unparsable amounts contribute zero.
#[must_use]
pub fn rollup(
    records: &[TaskRecord],
    category: FieldName,
    amount: FieldName,
    policy: UnknownPolicy,
) -> Vec<RollupEntry> {
    let mut entries: Vec<RollupEntry> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for record in records {
        let label = match (category_label(record.get(category)), policy) {
            (Some(label), _) => label,
            (None, UnknownPolicy::Bucket(bucket)) => bucket,
            (None, UnknownPolicy::Drop) => continue,
        };
        let value = amount_or_zero(record.get(amount));
        let slot = *index.entry(label.to_owned()).or_insert_with(|| {
            entries.push(RollupEntry {
                label: label.to_owned(),
                count: 0,
                total: Decimal::ZERO,
            });
            entries.len().saturating_sub(1)
        });
        if let Some(entry) = entries.get_mut(slot) {
            entry.count = entry.count.saturating_add(1);
            entry.total = entry.total.saturating_add(value);
        }
    }
    if let UnknownPolicy::Bucket(bucket) = policy {
        entries.retain(|entry| entry.label != bucket || !entry.total.is_zero());
    }
    entries
}

/// Ranks records by `amount`, descending, skipping empty keys.
///
/// Ties keep sheet order.
#[must_use]
pub fn top_n(records: &[TaskRecord], key: FieldName, amount: FieldName, n: usize) -> Vec<RankedEntry> {
    let mut ranked: Vec<RankedEntry> = records
        .iter()
        .filter(|record| record.has(key))
        .map(|record| RankedEntry {
            key: record.get(key).trim().to_owned(),
            amount: amount_or_zero(record.get(amount)),
        })
        .collect();
    ranked.sort_by(|left, right| right.amount.cmp(&left.amount));
    ranked.truncate(n);
    ranked
}

/// Summary figures for the repair pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairDashboard {
    /// Rows carrying a ticket number or a machine name.
    pub total_tasks: usize,
    /// Tasks with a payment stamp, whether or not payment was planned.
    pub completed: usize,
    /// Remaining tasks.
    pub pending: usize,
    /// Sum of every bill amount.
    pub total_repair_bill: Decimal,
    /// Tasks and bill totals per department; unlabelled departments are
    /// dropped.
    pub departments: Vec<RollupEntry>,
    /// Bill totals per payment type; unlabelled types go to `Unknown`.
    pub payment_types: Vec<RollupEntry>,
    /// Highest bills with a named vendor.
    pub top_vendors: Vec<RankedEntry>,
}

impl RepairDashboard {
    /// Computes the dashboard from mapped repair records.
    #[must_use]
    pub fn from_records(records: &[TaskRecord]) -> Self {
        let tasks: Vec<TaskRecord> = records
            .iter()
            .filter(|record| record.has(repair::TASK_NO) || record.has(repair::MACHINE_NAME))
            .cloned()
            .collect();
        let completed = tasks
            .iter()
            .filter(|record| record.has(repair::PAYMENT_ACTUAL))
            .count();
        let total_repair_bill = tasks
            .iter()
            .map(|record| amount_or_zero(record.get(repair::TOTAL_BILL_AMOUNT)))
            .fold(Decimal::ZERO, Decimal::saturating_add);

        Self {
            total_tasks: tasks.len(),
            completed,
            pending: tasks.len().saturating_sub(completed),
            total_repair_bill,
            departments: rollup(
                &tasks,
                repair::DEPARTMENT,
                repair::TOTAL_BILL_AMOUNT,
                UnknownPolicy::Drop,
            ),
            payment_types: rollup(
                &tasks,
                repair::PAYMENT_TYPE,
                repair::TOTAL_BILL_AMOUNT,
                UnknownPolicy::Bucket(UNKNOWN_LABEL),
            ),
            top_vendors: top_n(
                &tasks,
                repair::VENDOR_NAME,
                repair::TOTAL_BILL_AMOUNT,
                TOP_VENDOR_COUNT,
            ),
        }
    }
}
