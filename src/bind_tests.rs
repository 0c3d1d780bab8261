#[cfg(test)]
mod tests {
    use crate::bind::{BindType, bind_type};
    use crate::driver::Driver;
    use pretty_assertions::assert_eq;

    const ONE: &str = "SELECT * FROM table1 WHERE id=?";
    const TWO: &str = "SELECT * FROM table1 WHERE id=? and name=?";

    #[test]
    fn rebind_cases() {
        let cases = vec![
            (BindType::Dollar, ONE, "SELECT * FROM table1 WHERE id=$1"),
            (BindType::Dollar, TWO, "SELECT * FROM table1 WHERE id=$1 and name=$2"),
            (BindType::Question, ONE, ONE),
            (BindType::Question, TWO, TWO),
            (BindType::Unknown, TWO, TWO),
            (BindType::Named, ONE, "SELECT * FROM table1 WHERE id=:arg1"),
            (BindType::Named, TWO, "SELECT * FROM table1 WHERE id=:arg1 and name=:arg2"),
            (BindType::At, ONE, "SELECT * FROM table1 WHERE id=@p1"),
            (BindType::At, TWO, "SELECT * FROM table1 WHERE id=@p1 and name=@p2"),
        ];

        for (bt, query, want) in cases {
            assert_eq!(bt.rebind(query), want, "{bt:?}");
        }
    }

    #[test]
    fn text_without_placeholders_is_unchanged() {
        for bt in [BindType::Dollar, BindType::Named, BindType::At] {
            assert_eq!(bt.rebind("SELECT 1"), "SELECT 1");
            assert_eq!(bt.rebind(""), "");
        }
    }

    #[test]
    fn placeholders_at_edges_and_adjacent() {
        assert_eq!(BindType::Dollar.rebind("?"), "$1");
        assert_eq!(BindType::Dollar.rebind("??"), "$1$2");
        assert_eq!(BindType::At.rebind("(?,?)"), "(@p1,@p2)");
    }

    #[test]
    fn numbering_grows_past_single_digits() {
        let query = vec!["?"; 12].join(",");
        let want = (1..=12).map(|i| format!("${i}")).collect::<Vec<_>>().join(",");
        assert_eq!(BindType::Dollar.rebind(&query), want);
        assert!(BindType::Named.rebind(&query).ends_with(":arg11,:arg12"));
    }

    #[test]
    fn non_ascii_text_passes_through() {
        assert_eq!(
            BindType::Dollar.rebind("SELECT '名字' FROM t WHERE a=? AND b='é'"),
            "SELECT '名字' FROM t WHERE a=$1 AND b='é'"
        );
    }

    #[test]
    fn driver_table() {
        let cases = vec![
            (Driver::POSTGRES, BindType::Dollar),
            (Driver::PGX, BindType::Dollar),
            (Driver::PQ_TIMEOUTS, BindType::Dollar),
            (Driver::CLOUDSQL_POSTGRES, BindType::Dollar),
            (Driver::MYSQL, BindType::Question),
            (Driver::SQLITE3, BindType::Question),
            (Driver::OCI8, BindType::Named),
            (Driver::ORA, BindType::Named),
            (Driver::GORACLE, BindType::Named),
            (Driver::SQLSERVER, BindType::At),
            (Driver::from("abcdefg"), BindType::Unknown),
            (Driver::from(String::new()), BindType::Unknown),
        ];

        for (driver, want) in cases {
            assert_eq!(bind_type(&driver), want, "{driver}");
            assert_eq!(BindType::from(&driver), want);
            assert_eq!(driver.bind_type(), want);
        }
    }
}
