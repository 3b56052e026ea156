use syn::{Generics, WhereClause, WherePredicate, parse_quote};

/// Where clause of `generics` with `extra` predicates appended.
pub fn extend_where(generics: &Generics, extra: &[WherePredicate]) -> Option<WhereClause> {
    if extra.is_empty() {
        return generics.where_clause.clone();
    }

    let mut clause = generics
        .where_clause
        .clone()
        .unwrap_or_else(|| parse_quote!(where));
    clause.predicates.extend(extra.iter().cloned());

    Some(clause)
}
