#[cfg(test)]
mod tests {
    use crate::delete::DeleteQuery;
    use crate::error::BuildError;
    use crate::expr::in_;
    use crate::update::UpdateQuery;
    use crate::value::SqlValue;
    use crate::{
        Driver, QueryBuilder, delete, delete_by_driver, sql_record, update, update_by_driver,
    };
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    #[allow(dead_code)]
    struct Sample {
        name: String,
        email: String,
        id: SqlValue,
        order: f32,
    }

    sql_record! {
        impl Sample {
            name,
            email,
            id as "ID",
            skip order,
        }
    }

    fn sample() -> Sample {
        Sample {
            name: "Omid".into(),
            email: "o.hojabri@gmail.com".into(),
            id: SqlValue::I64(74639876),
            order: 0.0,
        }
    }

    #[test]
    fn update_requires_table_and_values() {
        assert_eq!(UpdateQuery::new().build(), Err(BuildError::TableIsEmpty));
        let q = update("table1").map_values(BTreeMap::<String, SqlValue>::new());
        assert_eq!(q.build(), Err(BuildError::ColumnValueMapIsEmpty));
    }

    #[test]
    fn update_map_values_with_where() {
        let (sql, args) = update("table1")
            .map_values([("field2", SqlValue::from("test")), ("field1", SqlValue::from(10_i64))])
            .where_("id=?", 5000_i64)
            .build()
            .unwrap();
        assert_eq!(sql, "UPDATE table1 SET field1=?,field2=? WHERE (id=?)");
        assert_eq!(
            args,
            vec![
                SqlValue::I64(10),
                SqlValue::String("test".into()),
                SqlValue::I64(5000)
            ]
        );
    }

    #[test]
    fn update_struct_values_with_where() {
        let s = sample();
        let expected_args = vec![
            SqlValue::String("Omid".into()),
            SqlValue::String("o.hojabri@gmail.com".into()),
            SqlValue::I64(74639876),
            SqlValue::I64(5000),
        ];

        let (sql, args) = update("table1").struct_values(&s).where_("id=?", 5000_i64).build().unwrap();
        assert_eq!(sql, "UPDATE table1 SET name=?,email=?,ID=? WHERE (id=?)");
        assert_eq!(args, expected_args);

        // 通过引用/Box 传入记录，结果一致
        let boxed = Box::new(sample());
        let (sql2, args2) = update("table1").struct_values(&boxed).where_("id=?", 5000_i64).build().unwrap();
        assert_eq!(sql2, sql);
        assert_eq!(args2, expected_args);
    }

    #[test]
    fn update_without_where() {
        let (sql, args) = update("t").map_values([("a", 1_i64)]).build().unwrap();
        assert_eq!(sql, "UPDATE t SET a=?");
        assert_eq!(args, vec![SqlValue::I64(1)]);
    }

    #[test]
    fn update_where_arg_mismatch() {
        let res = update("t").map_values([("a", 1_i64)]).where_("id=?", ()).build();
        assert_eq!(
            res,
            Err(BuildError::WrongNumberOfArgs {
                placeholders: 2,
                args: 1
            })
        );
    }

    #[test]
    fn update_branches_are_independent() {
        let base = update("t").map_values([("a", 1_i64)]);
        let by_id = base.where_("id=?", 1_i64);
        let by_in = base.where_expr(in_("id", [1_i64, 2]));
        assert_eq!(base.build().unwrap().0, "UPDATE t SET a=?");
        assert_eq!(by_id.build().unwrap().0, "UPDATE t SET a=? WHERE (id=?)");
        assert_eq!(by_in.build().unwrap().0, "UPDATE t SET a=? WHERE (id IN (?,?))");
    }

    #[test]
    fn update_rebind() {
        let q = update_by_driver(Driver::POSTGRES, "t")
            .map_values([("a", 1_i64), ("b", 2_i64)])
            .where_("id=?", 3_i64);
        let (sql, _) = q.build().unwrap();
        assert_eq!(q.rebind(&sql), "UPDATE t SET a=$1,b=$2 WHERE (id=$3)");
    }

    #[test]
    fn delete_requires_table() {
        assert_eq!(DeleteQuery::new().build(), Err(BuildError::TableIsEmpty));
    }

    #[test]
    fn delete_with_where() {
        let (sql, args) = delete("table1").where_("id=?", 5000_i64).build().unwrap();
        assert_eq!(sql, "DELETE FROM table1 WHERE (id=?)");
        assert_eq!(args, vec![SqlValue::I64(5000)]);

        let (sql, args) = delete("table1").build().unwrap();
        assert_eq!(sql, "DELETE FROM table1");
        assert!(args.is_empty());
    }

    #[test]
    fn delete_wrong_number_of_args() {
        let res = delete("t1").where_("id=?", (5_i64, 6_i64)).build();
        assert_eq!(
            res,
            Err(BuildError::WrongNumberOfArgs {
                placeholders: 1,
                args: 2
            })
        );
    }

    #[test]
    fn empty_condition_with_args_is_not_dropped() {
        let err = BuildError::WrongNumberOfArgs {
            placeholders: 0,
            args: 1,
        };
        assert_eq!(delete("t").where_("", 5_i64).build(), Err(err));

        let res = update("t").map_values([("a", 1_i64)]).where_("", 5_i64).build();
        assert_eq!(
            res,
            Err(BuildError::WrongNumberOfArgs {
                placeholders: 1,
                args: 2
            })
        );
    }

    #[test]
    fn delete_branches_are_independent() {
        let base = delete("t");
        let by_id = base.where_("id=?", 1_i64);
        let pg = by_id.driver(Driver::POSTGRES).table("t2");
        assert_eq!(base.build().unwrap().0, "DELETE FROM t");
        assert_eq!(by_id.build().unwrap().0, "DELETE FROM t WHERE (id=?)");
        assert_eq!(by_id.table_name(), "t");
        assert_eq!(pg.build_rebound().unwrap().0, "DELETE FROM t2 WHERE (id=$1)");
    }

    #[test]
    fn delete_rebind_by_driver() {
        let cases = [
            (Driver::POSTGRES, "DELETE FROM table1 WHERE (id=$1)"),
            (Driver::PGX, "DELETE FROM table1 WHERE (id=$1)"),
            (Driver::PQ_TIMEOUTS, "DELETE FROM table1 WHERE (id=$1)"),
            (Driver::CLOUDSQL_POSTGRES, "DELETE FROM table1 WHERE (id=$1)"),
            (Driver::MYSQL, "DELETE FROM table1 WHERE (id=?)"),
            (Driver::SQLITE3, "DELETE FROM table1 WHERE (id=?)"),
            (Driver::OCI8, "DELETE FROM table1 WHERE (id=:arg1)"),
            (Driver::ORA, "DELETE FROM table1 WHERE (id=:arg1)"),
            (Driver::GORACLE, "DELETE FROM table1 WHERE (id=:arg1)"),
            (Driver::SQLSERVER, "DELETE FROM table1 WHERE (id=@p1)"),
            (Driver::from("abcdefg"), "DELETE FROM table1 WHERE (id=?)"),
        ];

        for (driver, want) in cases {
            let q = delete_by_driver(driver.clone(), "table1").where_("id=?", 5000_i64);
            let (sql, _) = q.build().unwrap();
            assert_eq!(q.rebind(&sql), want, "driver {driver}");
        }
    }
}
