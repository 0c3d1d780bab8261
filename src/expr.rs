//! SQL 表达式片段，以及 `IN (...)` 辅助函数。

use crate::args::{FlattenIntoArgs, unify_args};
use crate::string_builder::StringBuilder;
use crate::value::SqlValue;

/// 一段 SQL 文本及其按顺序绑定的参数。
///
/// 文本为空的表达式会被 `where_expr` / `having_expr` 直接忽略。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expr {
    sql: String,
    args: Vec<SqlValue>,
}

impl Expr {
    /// 文本 + 参数（参数会先经过展开）。
    pub fn new(sql: impl Into<String>, args: impl FlattenIntoArgs) -> Self {
        let (args, _) = unify_args(args);
        Self {
            sql: sql.into(),
            args,
        }
    }

    /// 不带参数的 SQL 文本。
    pub fn raw(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            args: Vec::new(),
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn args(&self) -> &[SqlValue] {
        &self.args
    }

    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    pub fn into_parts(self) -> (String, Vec<SqlValue>) {
        (self.sql, self.args)
    }
}

impl From<&str> for Expr {
    fn from(sql: &str) -> Self {
        Self::raw(sql)
    }
}

impl From<String> for Expr {
    fn from(sql: String) -> Self {
        Self::raw(sql)
    }
}

/// 生成 `<column> IN (?,?,...)`，每个展开后的参数对应一个 `?`。
///
/// 没有任何参数时返回空表达式（文本与参数都为空），拼进 WHERE 时会被省略，
/// 也就是说“空 IN”等价于没有这个过滤条件，而不是恒假。
pub fn in_(column: &str, args: impl FlattenIntoArgs) -> Expr {
    let (args, count) = unify_args(args);
    if count == 0 {
        return Expr::default();
    }

    let mut buf = StringBuilder::with_capacity(column.len() + 6 + count * 2);
    buf.write_str(column);
    buf.write_str(" IN (");
    buf.write_placeholders(count);
    buf.write_char(')');
    Expr {
        sql: buf.into_string(),
        args,
    }
}
