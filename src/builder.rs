//! 四种语句构建器的公共接口，以及便捷构造函数。

use crate::delete::DeleteQuery;
use crate::driver::{Driver, default_driver};
use crate::error::BuildResult;
use crate::insert::InsertQuery;
use crate::select::SelectQuery;
use crate::update::UpdateQuery;

/// 所有语句构建器共享的行为。
pub trait QueryBuilder {
    /// 生成 `?` 形式的 SQL 与参数；纯函数，可重复调用。
    fn build(&self) -> BuildResult;

    /// 构造时绑定的驱动；未绑定时为 `None`。
    fn driver_name(&self) -> Option<&Driver>;

    /// 按绑定驱动（未绑定则用进程默认驱动）改写 `query` 中的 `?`。
    fn rebind(&self, query: &str) -> String {
        match self.driver_name() {
            Some(driver) => driver.rebind(query),
            None => default_driver().rebind(query),
        }
    }

    /// `build()` 之后立即 `rebind()`。
    fn build_rebound(&self) -> BuildResult {
        let (sql, args) = self.build()?;
        Ok((self.rebind(&sql), args))
    }
}

pub fn select(table: impl Into<String>) -> SelectQuery {
    SelectQuery::new().table(table)
}

pub fn select_by_driver(driver: impl Into<Driver>, table: impl Into<String>) -> SelectQuery {
    SelectQuery::new().driver(driver).table(table)
}

pub fn insert(table: impl Into<String>) -> InsertQuery {
    InsertQuery::new().table(table)
}

pub fn insert_by_driver(driver: impl Into<Driver>, table: impl Into<String>) -> InsertQuery {
    InsertQuery::new().driver(driver).table(table)
}

pub fn update(table: impl Into<String>) -> UpdateQuery {
    UpdateQuery::new().table(table)
}

pub fn update_by_driver(driver: impl Into<Driver>, table: impl Into<String>) -> UpdateQuery {
    UpdateQuery::new().driver(driver).table(table)
}

pub fn delete(table: impl Into<String>) -> DeleteQuery {
    DeleteQuery::new().table(table)
}

pub fn delete_by_driver(driver: impl Into<Driver>, table: impl Into<String>) -> DeleteQuery {
    DeleteQuery::new().driver(driver).table(table)
}
