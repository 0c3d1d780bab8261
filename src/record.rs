//! 记录展开：把映射或业务 struct 转成有序的 (列名, 值) 列表，供 INSERT/UPDATE 使用。
//!
//! Rust 无运行时反射；struct 通过 `sql_record!` 宏显式声明字段到列的映射：
//!
//! ```
//! use querybuilder::sql_record;
//!
//! struct Base {
//!     created_by: String,
//! }
//!
//! struct User {
//!     base: Base,
//!     name: String,
//!     email: Option<String>,
//!     order: f32,
//! }
//!
//! sql_record! { impl Base { created_by } }
//! sql_record! {
//!     impl User {
//!         flatten base,
//!         name as "user_name",
//!         email,
//!         skip order,
//!     }
//! }
//! ```

use crate::value::SqlValue;
use std::collections::BTreeMap;

/// 一个 (列名, 值) 对。
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnValue {
    pub column: String,
    pub value: SqlValue,
}

/// 有序的 (列名, 值) 列表。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnValues {
    items: Vec<ColumnValue>,
}

impl ColumnValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从无序映射构造，按列名升序（字节序，区分大小写）排列；重复列名保留最后一个值。
    pub fn from_map<I, K, V>(map: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<SqlValue>,
    {
        let sorted: BTreeMap<String, SqlValue> = map
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            items: sorted
                .into_iter()
                .map(|(column, value)| ColumnValue { column, value })
                .collect(),
        }
    }

    /// 按字段声明顺序展开一条记录。
    pub fn from_record<R: SqlRecord + ?Sized>(record: &R) -> Self {
        let mut out = Self::new();
        record.flatten_into(&mut out);
        out
    }

    pub fn push(&mut self, column: impl Into<String>, value: impl Into<SqlValue>) {
        self.items.push(ColumnValue {
            column: column.into(),
            value: value.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColumnValue> {
        self.items.iter()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|cv| cv.column.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &SqlValue> {
        self.items.iter().map(|cv| &cv.value)
    }
}

impl<'a> IntoIterator for &'a ColumnValues {
    type Item = &'a ColumnValue;
    type IntoIter = std::slice::Iter<'a, ColumnValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// 可以按声明顺序列出自身 (列名, 值) 的记录；通常由 `sql_record!` 实现。
pub trait SqlRecord {
    fn flatten_into(&self, out: &mut ColumnValues);
}

impl<T: SqlRecord + ?Sized> SqlRecord for &T {
    fn flatten_into(&self, out: &mut ColumnValues) {
        (**self).flatten_into(out);
    }
}

impl<T: SqlRecord + ?Sized> SqlRecord for Box<T> {
    fn flatten_into(&self, out: &mut ColumnValues) {
        (**self).flatten_into(out);
    }
}

/// 记录字段的取值；返回 `None` 表示该字段不出现在列表里。
pub trait RecordField {
    fn record_value(&self) -> Option<SqlValue>;
}

macro_rules! record_field_copy {
    ($($t:ty),+ $(,)?) => {
        $(impl RecordField for $t {
            fn record_value(&self) -> Option<SqlValue> {
                Some((*self).into())
            }
        })+
    };
}

record_field_copy!(
    bool,
    i8,
    i16,
    i32,
    i64,
    isize,
    u8,
    u16,
    u32,
    u64,
    usize,
    f32,
    f64,
    &'static str,
    time::OffsetDateTime,
);

impl RecordField for String {
    fn record_value(&self) -> Option<SqlValue> {
        Some(self.clone().into())
    }
}

impl RecordField for Vec<u8> {
    fn record_value(&self) -> Option<SqlValue> {
        Some(SqlValue::Bytes(self.clone()))
    }
}

impl RecordField for SqlValue {
    fn record_value(&self) -> Option<SqlValue> {
        Some(self.clone())
    }
}

/// 未设置的可选字段被跳过，已设置的取其内部值。
impl<T: RecordField> RecordField for Option<T> {
    fn record_value(&self) -> Option<SqlValue> {
        self.as_ref().and_then(RecordField::record_value)
    }
}

impl<T: RecordField + ?Sized> RecordField for Box<T> {
    fn record_value(&self) -> Option<SqlValue> {
        (**self).record_value()
    }
}

#[doc(hidden)]
pub fn push_field<F: RecordField + ?Sized>(out: &mut ColumnValues, column: &str, field: &F) {
    if let Some(value) = field.record_value() {
        out.push(column, value);
    }
}

/// 为业务 struct 实现 [`SqlRecord`]。
///
/// 每一项依声明顺序展开：
/// - `field`：列名即字段名；
/// - `field as "col"`：列名改为 `col`；
/// - `skip field`：忽略该字段；
/// - `flatten field`：该字段本身是一个 `SqlRecord`，在当前位置内联展开。
#[macro_export]
macro_rules! sql_record {
    (
        impl $ty:ty { $($body:tt)* }
    ) => {
        impl $crate::record::SqlRecord for $ty {
            #[allow(unused_variables)]
            fn flatten_into(&self, out: &mut $crate::record::ColumnValues) {
                $crate::__sql_record_fields!(self, out; $($body)*);
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __sql_record_fields {
    ($self:ident, $out:ident;) => {};
    ($self:ident, $out:ident; skip $field:ident $(, $($rest:tt)*)?) => {
        $crate::__sql_record_fields!($self, $out; $($($rest)*)?);
    };
    ($self:ident, $out:ident; flatten $field:ident $(, $($rest:tt)*)?) => {
        $crate::record::SqlRecord::flatten_into(&$self.$field, $out);
        $crate::__sql_record_fields!($self, $out; $($($rest)*)?);
    };
    ($self:ident, $out:ident; $field:ident as $col:literal $(, $($rest:tt)*)?) => {
        $crate::record::push_field($out, $col, &$self.$field);
        $crate::__sql_record_fields!($self, $out; $($($rest)*)?);
    };
    ($self:ident, $out:ident; $field:ident $(, $($rest:tt)*)?) => {
        $crate::record::push_field($out, stringify!($field), &$self.$field);
        $crate::__sql_record_fields!($self, $out; $($($rest)*)?);
    };
}
