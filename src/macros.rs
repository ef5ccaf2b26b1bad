//! 可变参数宏：`select_cols!(st, "id", "name")` 等价于 `st.select(vec!["id", "name"])`。

#[doc(hidden)]
#[macro_export]
macro_rules! __collect_strings {
    () => {
        Vec::<String>::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut values = Vec::<String>::new();
        $(
            $crate::macros::extend_into_strings($value, &mut values);
        )*
        values
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __builder_with_strings {
    ($builder:expr, $method:ident $(, $arg:expr)* $(,)?) => {
        $builder.$method($crate::__collect_strings!($($arg),*))
    };
}

/// 能展开成若干字符串的参数（单个字符串、数组、切片、Vec）。
pub trait IntoStrings {
    fn extend_into_strings(self, dst: &mut Vec<String>);
}

impl IntoStrings for String {
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        dst.push(self);
    }
}

impl IntoStrings for &str {
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        dst.push(self.to_owned());
    }
}

impl<const N: usize, T> IntoStrings for [T; N]
where
    T: Into<String>,
{
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        dst.extend(self.into_iter().map(Into::into));
    }
}

impl<T> IntoStrings for &[T]
where
    T: Into<String> + Clone,
{
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        dst.extend(self.iter().cloned().map(Into::into));
    }
}

impl<T> IntoStrings for Vec<T>
where
    T: Into<String>,
{
    fn extend_into_strings(self, dst: &mut Vec<String>) {
        dst.extend(self.into_iter().map(Into::into));
    }
}

#[doc(hidden)]
pub fn extend_into_strings<T: IntoStrings>(value: T, dst: &mut Vec<String>) {
    value.extend_into_strings(dst);
}

pub(crate) fn collect_into_strings<T: IntoStrings>(value: T) -> Vec<String> {
    let mut dst = Vec::new();
    value.extend_into_strings(&mut dst);
    dst
}

/// `StatementBuilder::select` 的可变参数写法，返回新的 `SelectBuilder`。
#[macro_export]
macro_rules! select_cols {
    ($statement:expr $(, $col:expr)* $(,)?) => {
        $crate::__builder_with_strings!($statement, select $(, $col)*)
    };
}

/// `SelectBuilder::columns` 的可变参数写法（追加列）。
#[macro_export]
macro_rules! more_cols {
    ($builder:expr $(, $col:expr)* $(,)?) => {
        $crate::__builder_with_strings!($builder, columns $(, $col)*)
    };
}

/// `SelectBuilder::group_by` 的可变参数写法。
#[macro_export]
macro_rules! group_by_cols {
    ($builder:expr $(, $col:expr)* $(,)?) => {
        $crate::__builder_with_strings!($builder, group_by $(, $col)*)
    };
}

/// `SelectBuilder::order_by` 的可变参数写法。
#[macro_export]
macro_rules! order_by_cols {
    ($builder:expr $(, $col:expr)* $(,)?) => {
        $crate::__builder_with_strings!($builder, order_by $(, $col)*)
    };
}
