#[cfg(test)]
mod tests {
    use crate::sqlizer::Sqlizer;
    use crate::{Column, Join, JoinType, Table};
    use pretty_assertions::assert_eq;

    #[test]
    fn table_name() {
        let cases = vec![
            ("users", "users"),
            ("", ""),
            ("user_data", "user_data"),
        ];
        for (input, expected) in cases {
            assert_eq!(Table::new(input).name(), expected);
        }
    }

    #[test]
    fn table_to_sql_has_no_args() {
        for name in ["customers", "", "public.orders"] {
            let (sql, args) = Table::new(name).to_sql().unwrap();
            assert_eq!(sql, name);
            assert!(args.is_empty());
        }
    }

    #[test]
    fn new_table_equals_struct() {
        assert_eq!(Table::new("products"), Table::new(String::from("products")));
    }

    #[test]
    fn column_to_sql_is_literal() {
        let c = Column::new("COUNT(*) AS c");
        assert_eq!(c.name(), "COUNT(*) AS c");
        let (sql, args) = c.to_sql().unwrap();
        assert_eq!(sql, "COUNT(*) AS c");
        assert!(args.is_empty());
    }

    #[test]
    fn join_keywords() {
        let cases = vec![
            (JoinType::Join, "JOIN orders ON orders.user_id = users.id"),
            (JoinType::LeftJoin, "LEFT JOIN orders ON orders.user_id = users.id"),
            (JoinType::RightJoin, "RIGHT JOIN orders ON orders.user_id = users.id"),
        ];
        for (jt, expected) in cases {
            let j = Join::new(jt, "orders ON orders.user_id = users.id");
            assert_eq!(j.join_type(), jt);
            let (sql, args) = j.to_sql().unwrap();
            assert_eq!(sql, expected);
            assert!(args.is_empty());
        }
    }

    #[test]
    fn join_keeps_markers_in_clause_untouched() {
        let j = Join::new(JoinType::Join, "t ON t.x = ?");
        assert_eq!(j.clause(), "t ON t.x = ?");
        assert_eq!(j.to_sql().unwrap().0, "JOIN t ON t.x = ?");
    }
}
