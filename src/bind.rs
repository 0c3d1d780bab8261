//! 占位符方言：把默认的 `?` 改写成驱动需要的写法。

use crate::driver::Driver;
use std::fmt::Write;

/// 占位符风格。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BindType {
    /// 未识别的驱动，行为与 `Question` 相同。
    #[default]
    Unknown,
    /// `?`（MySQL/SQLite）。
    Question,
    /// `$1, $2, ...`（PostgreSQL 系）。
    Dollar,
    /// `:arg1, :arg2, ...`（Oracle 系）。
    Named,
    /// `@p1, @p2, ...`（SQL Server）。
    At,
}

/// 驱动名到占位符风格的固定映射。
pub fn bind_type(driver: &Driver) -> BindType {
    match driver.as_str() {
        "postgres" | "pgx" | "pq-timeouts" | "cloudsqlpostgres" => BindType::Dollar,
        "mysql" | "sqlite3" => BindType::Question,
        "oci8" | "ora" | "goracle" => BindType::Named,
        "sqlserver" => BindType::At,
        _ => BindType::Unknown,
    }
}

impl BindType {
    pub(crate) fn write_placeholder(self, index_1_based: usize, out: &mut String) {
        match self {
            Self::Unknown | Self::Question => out.push('?'),
            Self::Dollar => {
                out.push('$');
                let _ = write!(out, "{index_1_based}");
            }
            Self::Named => {
                out.push_str(":arg");
                let _ = write!(out, "{index_1_based}");
            }
            Self::At => {
                out.push_str("@p");
                let _ = write!(out, "{index_1_based}");
            }
        }
    }

    /// 从左到右把每个 `?` 换成从 1 开始编号的占位符，其余文本原样保留。
    ///
    /// `Question` / `Unknown` 直接返回原文。
    pub fn rebind(self, query: &str) -> String {
        if matches!(self, Self::Question | Self::Unknown) {
            return query.to_owned();
        }

        // 预留 10 个占位符的增长空间
        let mut out = String::with_capacity(query.len() + 10);
        let mut rest = query;
        let mut n = 0usize;
        while let Some(pos) = rest.find('?') {
            out.push_str(&rest[..pos]);
            n += 1;
            self.write_placeholder(n, &mut out);
            rest = &rest[pos + 1..];
        }
        out.push_str(rest);

        tracing::trace!(bind_type = ?self, placeholders = n, "rebound query");
        out
    }
}

impl From<&Driver> for BindType {
    fn from(driver: &Driver) -> Self {
        bind_type(driver)
    }
}
