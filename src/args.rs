//! 参数归一化：把“标量 + 序列”混合的可变参数展开成一个有序的扁平参数列表。
//!
//! Rust 没有 `...any` 形式的可变参数，这里用 trait 表达：
//! - 标量（整数、浮点、字符串、`SqlValue` 等）产生一个参数；
//! - 序列（`Vec<T>`、`[T; N]`、`&[T]`）按原顺序就地展开；
//! - 元组就是“参数列表”本身，从左到右依次展开；`()` 表示没有参数。

use crate::value::SqlValue;
use std::borrow::Cow;

/// 可被展开进参数列表的值。
pub trait FlattenIntoArgs {
    fn flatten_into(self, out: &mut Vec<SqlValue>);
}

/// 展开参数，返回扁平列表与参数个数。
pub fn unify_args<T: FlattenIntoArgs>(args: T) -> (Vec<SqlValue>, usize) {
    let out = flatten(args);
    let count = out.len();
    (out, count)
}

/// 展开参数。
pub fn flatten<T: FlattenIntoArgs>(args: T) -> Vec<SqlValue> {
    let mut out = Vec::new();
    args.flatten_into(&mut out);
    out
}

macro_rules! flatten_scalar {
    ($($t:ty),+ $(,)?) => {
        $(impl FlattenIntoArgs for $t {
            fn flatten_into(self, out: &mut Vec<SqlValue>) {
                out.push(self.into());
            }
        })+
    };
}

flatten_scalar!(
    SqlValue,
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
    String,
    Cow<'static, str>,
    time::OffsetDateTime,
);

impl<'a> FlattenIntoArgs for &'a str {
    fn flatten_into(self, out: &mut Vec<SqlValue>) {
        out.push(SqlValue::String(Cow::Owned(self.to_owned())));
    }
}

impl<'a> FlattenIntoArgs for &'a String {
    fn flatten_into(self, out: &mut Vec<SqlValue>) {
        out.push(SqlValue::String(Cow::Owned(self.clone())));
    }
}

impl<T: Into<SqlValue>> FlattenIntoArgs for Option<T> {
    fn flatten_into(self, out: &mut Vec<SqlValue>) {
        out.push(SqlValue::from_option(self));
    }
}

impl<T: FlattenIntoArgs> FlattenIntoArgs for Vec<T> {
    fn flatten_into(self, out: &mut Vec<SqlValue>) {
        out.reserve(self.len());
        for v in self {
            v.flatten_into(out);
        }
    }
}

impl<T: FlattenIntoArgs, const N: usize> FlattenIntoArgs for [T; N] {
    fn flatten_into(self, out: &mut Vec<SqlValue>) {
        for v in self {
            v.flatten_into(out);
        }
    }
}

impl<'a, T: FlattenIntoArgs + Clone> FlattenIntoArgs for &'a [T] {
    fn flatten_into(self, out: &mut Vec<SqlValue>) {
        for v in self {
            v.clone().flatten_into(out);
        }
    }
}

impl<'a, T: FlattenIntoArgs + Clone> FlattenIntoArgs for &'a Vec<T> {
    fn flatten_into(self, out: &mut Vec<SqlValue>) {
        self.as_slice().flatten_into(out);
    }
}

impl FlattenIntoArgs for () {
    fn flatten_into(self, _out: &mut Vec<SqlValue>) {}
}

macro_rules! flatten_tuple {
    ($($name:ident),+) => {
        impl<$($name: FlattenIntoArgs),+> FlattenIntoArgs for ($($name,)+) {
            #[allow(non_snake_case)]
            fn flatten_into(self, out: &mut Vec<SqlValue>) {
                let ($($name,)+) = self;
                $($name.flatten_into(out);)+
            }
        }
    };
}

flatten_tuple!(A);
flatten_tuple!(A, B);
flatten_tuple!(A, B, C);
flatten_tuple!(A, B, C, D);
flatten_tuple!(A, B, C, D, E);
flatten_tuple!(A, B, C, D, E, F);
flatten_tuple!(A, B, C, D, E, F, G);
flatten_tuple!(A, B, C, D, E, F, G, H);
flatten_tuple!(A, B, C, D, E, F, G, H, I);
flatten_tuple!(A, B, C, D, E, F, G, H, I, J);
flatten_tuple!(A, B, C, D, E, F, G, H, I, J, K);
flatten_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);
