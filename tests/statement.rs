#[cfg(test)]
mod tests {
    use indoc::indoc;
    use stratus_sql::{Params, SqlStatement, Value};

    fn sample() -> SqlStatement {
        let mut statement = SqlStatement::from("SELECT * FROM T WHERE a = @x AND b = @y");
        statement.bind("y", 2i64).bind("x", "foo");
        statement
    }

    #[test]
    fn statement_parameter_names() {
        // Lexicographic by key, not binding order.
        assert_eq!(sample().parameter_names(), vec!["x", "y"]);
        let mut statement = SqlStatement::from("SELECT 1");
        statement.bind("b", 1i64).bind("a", 2i64).bind("c", 3i64);
        assert_eq!(statement.parameter_names(), vec!["a", "b", "c"]);
    }

    #[test]
    fn statement_parameter_lookup() {
        let statement = sample();
        assert_eq!(
            statement.parameter("x").unwrap(),
            &Value::String("foo".into())
        );
        assert_eq!(statement.parameter("y").unwrap(), &Value::Int64(2));
    }

    #[test]
    fn statement_missing_parameter() {
        let statement = sample();
        let error = statement.parameter("z").unwrap_err();
        assert_eq!(error.to_string(), "No such parameter: z");
        // Lookup is exact and case sensitive.
        assert!(statement.parameter("X").is_err());
        assert!(statement.parameter("").is_err());
    }

    #[test]
    fn statement_empty() {
        let statement = SqlStatement::from("SELECT 1");
        assert!(statement.parameter_names().is_empty());
        assert!(statement.params().is_empty());
        assert!(statement.parameter("x").is_err());
        let mut out = String::new();
        statement.render(&mut out);
        assert_eq!(out, "SELECT 1");
    }

    #[test]
    fn statement_rebind() {
        let mut statement = SqlStatement::from("SELECT @a");
        statement.bind("a", 1i64);
        statement.bind("a", "replaced");
        assert_eq!(statement.params().len(), 1);
        assert_eq!(
            statement.parameter("a").unwrap(),
            &Value::String("replaced".into())
        );
    }

    #[test]
    fn statement_initial_params() {
        let mut params = Params::new();
        params.insert("id".into(), Value::Int64(9));
        params.insert("name".into(), Value::Null);
        let statement = SqlStatement::new("SELECT * FROM U WHERE id = @id", params);
        assert_eq!(statement.sql(), "SELECT * FROM U WHERE id = @id");
        assert_eq!(statement.parameter_names(), vec!["id", "name"]);
        assert_eq!(statement.parameter("name").unwrap(), &Value::Null);
    }

    #[test]
    fn statement_render() {
        let mut out = String::new();
        sample().render(&mut out);
        assert_eq!(
            out,
            indoc! {"
                SELECT * FROM T WHERE a = @x AND b = @y
                [x]: 'foo'
                [y]: 2"}
        );
    }

    #[test]
    fn statement_display() {
        let mut out = String::new();
        let statement = sample();
        statement.render(&mut out);
        assert_eq!(format!("{}", statement), out);
    }

    #[test]
    fn statement_render_all_kinds() {
        let mut statement = SqlStatement::from("SELECT 1");
        statement
            .bind("a", Value::Null)
            .bind("b", true)
            .bind("c", 1i64)
            .bind("d", 0.5f64)
            .bind("e", "text")
            .bind("f", b"\x01".as_slice())
            .bind(
                "g",
                Value::Array(vec![Value::Struct(vec![(None, Value::Null)])]),
            );
        let mut out = String::new();
        statement.render(&mut out);
        assert_eq!(
            out,
            indoc! {r"
                SELECT 1
                [a]: NULL
                [b]: true
                [c]: 1
                [d]: 0.5
                [e]: 'text'
                [f]: '\x1'
                [g]: [{NULL}]"}
        );
    }

    #[test]
    fn statement_equality() {
        let statement = sample();
        let mut other = statement.clone();
        assert_eq!(statement, other);
        other.bind("y", 3i64);
        assert_ne!(statement, other);
        assert_ne!(statement, SqlStatement::from(statement.sql()));
    }

    #[test]
    fn statement_into_parts() {
        let (sql, params) = sample().into_parts();
        assert_eq!(sql, "SELECT * FROM T WHERE a = @x AND b = @y");
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("x"), Some(&Value::String("foo".into())));
    }

    #[test]
    fn statement_conversions() {
        let statement: SqlStatement = "SELECT 2".into();
        assert_eq!(statement.sql(), "SELECT 2");
        let statement: SqlStatement = String::from("SELECT 3").into();
        assert_eq!(statement.sql(), "SELECT 3");
        assert_eq!(SqlStatement::default().sql(), "");
    }
}
