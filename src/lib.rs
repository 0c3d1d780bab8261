//! querybuilder：不可变、可链式调用的参数化 SQL 构建库。
//!
//! 构建器只生成 `?` 形式的 SQL 与有序参数列表；需要其它占位符风格时，
//! 再按驱动名把 `?` 改写成 `$n` / `:argn` / `@pn`。

pub mod args;
pub mod bind;
#[cfg(test)]
mod bind_tests;
pub mod builder;
pub mod clauses;
pub mod delete;
pub mod driver;
pub mod error;
pub mod expr;
pub mod insert;
pub mod record;
pub mod select;
mod string_builder;
pub mod update;
#[cfg(test)]
mod update_delete_tests;
pub mod value;

pub use crate::args::{FlattenIntoArgs, flatten, unify_args};
pub use crate::bind::{BindType, bind_type};
pub use crate::builder::{
    QueryBuilder, delete, delete_by_driver, insert, insert_by_driver, select, select_by_driver,
    update, update_by_driver,
};
pub use crate::clauses::{Clause, JoinType, OrderDirection};
pub use crate::delete::DeleteQuery;
pub use crate::driver::{
    DefaultDriverGuard, Driver, default_driver, rebind, set_default_driver,
    set_default_driver_scoped,
};
pub use crate::error::{BuildError, BuildResult};
pub use crate::expr::{Expr, in_};
pub use crate::insert::InsertQuery;
pub use crate::record::{ColumnValue, ColumnValues, RecordField, SqlRecord};
pub use crate::select::SelectQuery;
pub use crate::update::UpdateQuery;
pub use crate::value::SqlValue;
