use sea_query::{Alias, Index};

use canvas_core::IndexDef;

use super::types::BuiltQuery;
use crate::error::QueryError;

pub fn build_add_index(table: &str, index: &IndexDef) -> Result<BuiltQuery, QueryError> {
    if index.columns.is_empty() {
        return Err(QueryError::EmptyIndex(table.to_string(), index.name.clone()));
    }

    let mut stmt = Index::create()
        .name(&index.name)
        .table(Alias::new(table))
        .to_owned();
    for col in &index.columns {
        stmt.col(Alias::new(col));
    }
    if index.unique {
        stmt.unique();
    }

    Ok(BuiltQuery::CreateIndex(Box::new(stmt)))
}
