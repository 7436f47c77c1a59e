/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Page and changelog timestamps travel as epoch milliseconds.
pub type EpochMillis = i64;

/// Current time as epoch milliseconds (the wire format for
/// `page_created`, `page_edited`, and changelog `when`).
pub fn now_millis() -> EpochMillis {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_millis_is_current() {
        // Sanity bound: after 2020-01-01 and before 2100-01-01.
        let ms = now_millis();
        assert!(ms > 1_577_836_800_000);
        assert!(ms < 4_102_444_800_000);
    }
}
