use super::model::{AreaKind, AreaRecord, NormalizedArea};

// ---------------------------------------------------------------------------
// Hierarchy builder: flat leveled table → records with ancestor chains
// ---------------------------------------------------------------------------

/// Resolve the ancestor chain of every record in a flat, indentation-leveled
/// table.
///
/// Records must arrive in depth-first pre-order (a parent directly followed by
/// its descendants). This is not checked: out-of-order input yields wrong
/// ancestry, never an error.
///
/// The walk keeps an open ancestor stack and the level of the previous
/// record:
/// * when the level drops, the stack is popped once per level and the
///   record's own name is pushed, whatever its kind;
/// * otherwise regions are pushed and countries are not.
///
/// A record's `ancestors` is the stack as it stood before its own push.
/// Because of the first rule, a country that closes a deeper branch becomes
/// the "parent" of any following records at a deeper level, and stays on the
/// stack for siblings that repeat its level.
pub fn build_hierarchy<I>(records: I) -> Vec<NormalizedArea>
where
    I: IntoIterator<Item = AreaRecord>,
{
    let mut stack: Vec<String> = Vec::new();
    let mut current_level: u32 = 0;

    records
        .into_iter()
        .map(|record| {
            let ancestors = if record.raw_level < current_level {
                for _ in record.raw_level..current_level {
                    stack.pop();
                }
                let snapshot = stack.clone();
                stack.push(record.name.clone());
                snapshot
            } else {
                let snapshot = stack.clone();
                if record.kind != AreaKind::Country {
                    stack.push(record.name.clone());
                }
                snapshot
            };
            current_level = record.raw_level;
            NormalizedArea::from_record(record, ancestors)
        })
        .collect()
}
