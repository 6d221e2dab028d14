//! Query text builders.
//!
//! Queries run against a projection named `_` that exposes every top-level
//! document property as a column of the same name, plus `_id` (document id)
//! and `_doc` (full JSON body). A user filter such as `age > 30` can therefore
//! be conjoined verbatim.

use dbv_model::TYPE_FIELD;
use indexmap::IndexMap;
use tracing::debug;

/// Column holding the document id in the projection.
pub const ID_COLUMN: &str = "_id";

/// Column holding the full JSON body in the projection.
pub const BODY_COLUMN: &str = "_doc";

/// Distinct top-level keys across all object bodies.
///
/// Bodies are screened with `json_valid` before `json_each` sees them so a
/// single malformed row cannot fail the scan.
pub(crate) const PROPERTY_KEYS_SQL: &str = "\
WITH objects AS MATERIALIZED (
    SELECT body FROM documents
    WHERE CASE WHEN json_valid(body) THEN json_type(body) = 'object' ELSE 0 END
)
SELECT DISTINCT j.key FROM objects, json_each(objects.body) AS j
ORDER BY j.key";

/// Distinct non-null `type` values, ascending.
pub fn distinct_types_sql() -> &'static str {
    "SELECT DISTINCT type FROM _ WHERE type IS NOT NULL ORDER BY type"
}

/// Treat a blank filter as no filter.
pub fn normalize_filter(filter: Option<&str>) -> Option<&str> {
    filter.map(str::trim).filter(|f| !f.is_empty())
}

/// Documents of the type bound to `?1`, optionally narrowed by a raw filter
/// fragment, ordered by id.
///
/// The fragment is not sanitized; a malformed fragment fails at prepare time.
pub fn documents_by_type_sql(filter: Option<&str>) -> String {
    let mut sql = format!("SELECT {ID_COLUMN}, {BODY_COLUMN} FROM _ WHERE type = ?1");
    if let Some(filter) = normalize_filter(filter) {
        sql.push_str(" AND (");
        sql.push_str(filter);
        sql.push(')');
    }
    sql.push_str(" ORDER BY ");
    sql.push_str(ID_COLUMN);
    sql
}

/// `WITH _ AS (...)` clause projecting the given property keys as columns.
///
/// A `type` column is always present and holds text values only. Keys that
/// differ only in ASCII case share one column, since column names are
/// case-insensitive; it takes the first non-null spelling in key order. Keys
/// that cannot be expressed as a column (empty, containing `"`, or clashing
/// with a reserved column) are left out; they stay reachable through `_doc`.
pub fn projection_sql<'a>(keys: impl IntoIterator<Item = &'a str>) -> String {
    let mut columns: IndexMap<String, Vec<&str>> = IndexMap::new();
    for key in keys {
        if key.is_empty() || key.contains('"') {
            debug!(key, "Property key not projected");
            continue;
        }
        let folded = key.to_ascii_lowercase();
        if [TYPE_FIELD, ID_COLUMN, BODY_COLUMN].contains(&folded.as_str()) {
            if key != TYPE_FIELD {
                debug!(key, "Property key collides with a reserved column");
            }
            continue;
        }
        columns.entry(folded).or_default().push(key);
    }

    let type_path = json_path(TYPE_FIELD);
    let mut sql = format!(
        "WITH _ AS (SELECT id AS {ID_COLUMN}, body AS {BODY_COLUMN}, \
         CASE WHEN json_type(body, {type_path}) = 'text' \
         THEN json_extract(body, {type_path}) END AS \"{TYPE_FIELD}\""
    );
    for spellings in columns.values() {
        let extracts: Vec<String> = spellings
            .iter()
            .map(|key| format!("json_extract(body, {})", json_path(key)))
            .collect();
        let expr = match extracts.as_slice() {
            [single] => single.clone(),
            many => format!("COALESCE({})", many.join(", ")),
        };
        sql.push_str(&format!(", {expr} AS \"{}\"", spellings[0]));
    }
    // Malformed bodies project as NULL instead of failing the whole query.
    sql.push_str(
        " FROM (SELECT id, CASE WHEN json_valid(body) THEN body END AS body FROM documents))",
    );
    sql
}

/// SQL string literal of the JSON path to a top-level key.
fn json_path(key: &str) -> String {
    format!("'$.\"{}\"'", key.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_is_conjoined_in_parentheses() {
        let sql = documents_by_type_sql(Some("age > 30"));
        assert_eq!(
            sql,
            "SELECT _id, _doc FROM _ WHERE type = ?1 AND (age > 30) ORDER BY _id"
        );
    }

    #[test]
    fn blank_filter_adds_no_clause() {
        let expected = "SELECT _id, _doc FROM _ WHERE type = ?1 ORDER BY _id";
        assert_eq!(documents_by_type_sql(None), expected);
        assert_eq!(documents_by_type_sql(Some("")), expected);
        assert_eq!(documents_by_type_sql(Some("  \t ")), expected);
    }

    #[test]
    fn normalize_trims() {
        assert_eq!(normalize_filter(Some("  a = 1 ")), Some("a = 1"));
        assert_eq!(normalize_filter(Some(" ")), None);
        assert_eq!(normalize_filter(None), None);
    }

    #[test]
    fn projection_always_has_text_only_type() {
        let sql = projection_sql([]);
        assert!(sql.starts_with("WITH _ AS (SELECT id AS _id, body AS _doc"));
        assert!(sql.contains(
            "CASE WHEN json_type(body, '$.\"type\"') = 'text' \
             THEN json_extract(body, '$.\"type\"') END AS \"type\""
        ));
    }

    #[test]
    fn projection_skips_unusable_keys() {
        let sql = projection_sql(["_id", "Type", "we\"ird", "", "type", "o'neil"]);
        assert_eq!(sql.matches("AS \"type\"").count(), 1);
        assert!(!sql.contains("AS \"Type\""));
        assert!(!sql.contains("AS \"_id\""));
        assert!(!sql.contains("we\"ird"));
        assert!(sql.contains("json_extract(body, '$.\"o''neil\"') AS \"o'neil\""));
    }

    #[test]
    fn case_variants_share_one_column() {
        let sql = projection_sql(["Age", "age", "name"]);
        assert!(sql.contains(
            "COALESCE(json_extract(body, '$.\"Age\"'), json_extract(body, '$.\"age\"')) AS \"Age\""
        ));
        assert!(!sql.contains("AS \"age\""));
        assert!(sql.contains("json_extract(body, '$.\"name\"') AS \"name\""));
    }
}
