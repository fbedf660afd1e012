//! Case-insensitive branch filters.
//!
//! Both sides of each comparison are case-folded so matching behaves the same on SQLite and
//! PostgreSQL, whose `LIKE` differs in case sensitivity.

use sea_orm::sea_query::{Expr, ExprTrait, Func, LikeExpr, SimpleExpr};

use entity::branch::Column;
use entity::prelude::Branch;

/// Matches branches whose IFSC equals `code`, ignoring case.
pub fn ifsc_equals_ignore_case(code: &str) -> SimpleExpr {
    Expr::expr(Func::upper(Expr::col((Branch, Column::Ifsc)))).eq(code.to_uppercase())
}

/// Matches branches whose city contains `fragment` anywhere, ignoring case.
///
/// `%` and `_` in the fragment are matched literally.
pub fn city_contains_ignore_case(fragment: &str) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(&fragment.to_lowercase()));

    Expr::expr(Func::lower(Expr::col((Branch, Column::City))))
        .like(LikeExpr::new(pattern).escape('\\'))
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
