

/// Database tests need a reachable Postgres named by `DATABASE_URL`.
pub(crate) fn skip_db_tests() -> bool {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return true;
    }
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("skip: DATABASE_URL not set");
        return true;
    }
    false
}
