//! Delimited stored-procedure replies.
//!
//! Stored procedures answer with a single string such as
//! `0|Inserting Succesfully TD/001|733|1|Product 1|...`. The first field is a
//! status code, the second a human readable message, and every following
//! field has a position fixed by the procedure. Positions are declared in
//! [`fields`](crate::erp::fields); this type only provides checked access.

use crate::erp::{ReplyError, fields};

/// Field separator used by every delimited procedure.
pub const SEPARATOR: char = '|';

/// Status code for a successful reply.
pub const SUCCESS_CODE: &str = "0";

/// Status code for a reply the backend rejected.
pub const FAILURE_CODE: &str = "1";

/// Outcome reported in the first field of a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyStatus {
    /// The procedure succeeded (`"0"`).
    Success,

    /// The procedure reported a business failure.
    Failure,
}

/// A split delimited reply with checked positional access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimitedReply {
    fields: Vec<String>,
}

impl DelimitedReply {
    /// Split a raw reply. Empty fields are kept so positions stay stable.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self {
            fields: raw.split(SEPARATOR).map(str::to_owned).collect(),
        }
    }

    /// Number of fields in the reply.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Raw status code (field 0).
    #[must_use]
    pub fn code(&self) -> &str {
        self.fields.first().map_or("", String::as_str)
    }

    /// Outcome encoded in the status code.
    #[must_use]
    pub fn status(&self) -> ReplyStatus {
        if self.code() == SUCCESS_CODE {
            ReplyStatus::Success
        } else {
            ReplyStatus::Failure
        }
    }

    /// Whether the procedure reported success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status() == ReplyStatus::Success
    }

    /// Human readable message (field 1).
    ///
    /// # Errors
    ///
    /// Returns an error when the reply has no message field.
    pub fn message(&self) -> Result<&str, ReplyError> {
        self.field(fields::MESSAGE)
    }

    /// Field at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ReplyError::MissingField`] when the reply is shorter than
    /// the backend contract promises.
    pub fn field(&self, index: usize) -> Result<&str, ReplyError> {
        self.fields
            .get(index)
            .map(String::as_str)
            .ok_or(ReplyError::MissingField {
                index,
                len: self.fields.len(),
            })
    }

    /// Owned copy of the field at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ReplyError::MissingField`] when the field is absent.
    pub fn text(&self, index: usize) -> Result<String, ReplyError> {
        self.field(index).map(str::to_owned)
    }

    /// Integer field; blank or non-numeric values read as zero.
    ///
    /// # Errors
    ///
    /// Returns [`ReplyError::MissingField`] when the field is absent.
    pub fn int(&self, index: usize) -> Result<i64, ReplyError> {
        self.field(index).map(parse_int)
    }

    /// Decimal field; blank or non-numeric values read as zero.
    ///
    /// # Errors
    ///
    /// Returns [`ReplyError::MissingField`] when the field is absent.
    pub fn float(&self, index: usize) -> Result<f64, ReplyError> {
        self.field(index)
            .map(|value| value.trim().parse().unwrap_or_default())
    }
}

/// Lenient integer parsing shared by reply fields and request ids.
#[must_use]
pub fn parse_int(value: &str) -> i64 {
    value.trim().parse().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    const BOOKED: &str = "0|Inserting Succesfully TD/D0202/22/00187|733|1|Product 1|TD/D0202/22/00187|2022-03-01|2022-03-01T11:00:00+07:00|2022-03-01T12:00:00+07:00|1|Indy Office Bintaro|Jl. Al Hidayah No.44|-6.27466|106.72046|Kota Tangerang Selatan|Banten|Indonesia|Everydays 10.00 - 18.00";

    #[test]
    fn success_reply_reports_success() -> TestResult {
        let reply = DelimitedReply::parse(BOOKED);

        assert_eq!(reply.status(), ReplyStatus::Success);
        assert_eq!(reply.message()?, "Inserting Succesfully TD/D0202/22/00187");
        assert_eq!(reply.field_count(), 18);

        Ok(())
    }

    #[test]
    fn failure_reply_keeps_message_verbatim() -> TestResult {
        let reply = DelimitedReply::parse("1| Slot ID not exists in database|0|||||||||||||||");

        assert_eq!(reply.status(), ReplyStatus::Failure);
        assert_eq!(reply.message()?, " Slot ID not exists in database");

        Ok(())
    }

    #[test]
    fn unknown_code_is_failure() {
        assert!(!DelimitedReply::parse("9|odd").is_success());
        assert!(!DelimitedReply::parse("").is_success());
    }

    #[test]
    fn empty_fields_keep_their_position() -> TestResult {
        let reply = DelimitedReply::parse("0|ok||x");

        assert_eq!(reply.field(2)?, "");
        assert_eq!(reply.field(3)?, "x");

        Ok(())
    }

    #[test]
    fn short_reply_fails_predictably() {
        let reply = DelimitedReply::parse("0|ok|12");

        assert_eq!(
            reply.field(5),
            Err(ReplyError::MissingField { index: 5, len: 3 })
        );
        assert!(reply.int(9).is_err(), "numeric access is checked as well");
    }

    #[test]
    fn numeric_fields_are_lenient() -> TestResult {
        let reply = DelimitedReply::parse("0|ok|733| 42 ||abc|33000000.5");

        assert_eq!(reply.int(2)?, 733);
        assert_eq!(reply.int(3)?, 42);
        assert_eq!(reply.int(4)?, 0);
        assert_eq!(reply.int(5)?, 0);
        assert!((reply.float(6)? - 33_000_000.5).abs() < f64::EPSILON);

        Ok(())
    }
}
