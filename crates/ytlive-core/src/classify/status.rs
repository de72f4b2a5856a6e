//! HTTP status policy.

/// What to do with a received response based on its status alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// 2xx: go on to read the body.
    Proceed,
    /// Rate limited (429) or server-side error (5xx).
    Retryable,
    /// Everything else, including unexpected 1xx/3xx.
    Failure,
}

/// Classify an HTTP status code for retry decisions.
pub fn classify_http_status(code: u32) -> StatusClass {
    match code {
        200..=299 => StatusClass::Proceed,
        429 | 500..=599 => StatusClass::Retryable,
        _ => StatusClass::Failure,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_2xx_proceeds() {
        for code in [200, 201, 204, 299] {
            assert_eq!(classify_http_status(code), StatusClass::Proceed);
        }
    }

    #[test]
    fn http_429_and_5xx_retryable() {
        assert_eq!(classify_http_status(429), StatusClass::Retryable);
        for code in 500..=599 {
            assert_eq!(classify_http_status(code), StatusClass::Retryable);
        }
    }

    #[test]
    fn http_3xx_and_4xx_fail() {
        for code in (300..=499).filter(|c| *c != 429) {
            assert_eq!(classify_http_status(code), StatusClass::Failure, "{}", code);
        }
    }

    #[test]
    fn out_of_range_codes_fail() {
        assert_eq!(classify_http_status(0), StatusClass::Failure);
        assert_eq!(classify_http_status(101), StatusClass::Failure);
        assert_eq!(classify_http_status(600), StatusClass::Failure);
    }
}
