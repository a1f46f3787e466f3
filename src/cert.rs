//! Certificate Inspection
//!
//! Decodes the client certificate stored in a context (base64 of PEM) and
//! derives what a user wants to know about it: when it expires, how far away
//! that is, and which API roles it grants. Read-only; the store is never
//! touched.

use crate::error::ApiError;
use crate::role::{self, RoleSet};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use std::fmt;
use x509_certificate::X509Certificate;

/// Facts extracted from a client certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertInfo {
    pub not_after: DateTime<Utc>,
    /// Recognized roles from the subject organizations
    pub roles: RoleSet,
}

impl CertInfo {
    pub fn lifetime(&self, now: DateTime<Utc>) -> RelativeTime {
        relative_lifetime(self.not_after, now)
    }
}

/// Decode and parse a base64-encoded PEM certificate.
pub fn inspect(base64_cert: &str) -> Result<CertInfo, ApiError> {
    let pem_bytes = STANDARD
        .decode(base64_cert.trim())
        .map_err(|e| ApiError::CertDecode(format!("invalid base64: {}", e)))?;

    let blocks = pem::parse_many(&pem_bytes)
        .map_err(|e| ApiError::CertDecode(format!("invalid PEM: {}", e)))?;
    let block = blocks
        .first()
        .ok_or_else(|| ApiError::CertDecode("no PEM block found".to_string()))?;

    let cert = X509Certificate::from_der(block.contents())
        .map_err(|e| ApiError::CertParse(e.to_string()))?;

    let organizations: Vec<String> = cert
        .subject_name()
        .iter_organization()
        .filter_map(|attr| attr.to_string().ok())
        .collect();
    let (roles, unknown) = role::parse(&organizations);
    if !unknown.is_empty() {
        tracing::debug!(?unknown, "Ignoring unrecognized certificate organizations");
    }

    Ok(CertInfo {
        not_after: cert.validity_not_after(),
        roles,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tense {
    Past,
    Future,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

impl TimeUnit {
    fn name(&self) -> &'static str {
        match self {
            TimeUnit::Second => "second",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Month => "month",
            TimeUnit::Year => "year",
        }
    }
}

/// Distance between an instant and "now", in the coarsest sensible unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeTime {
    pub tense: Tense,
    pub amount: i64,
    pub unit: TimeUnit,
}

impl RelativeTime {
    pub fn is_past(&self) -> bool {
        self.tense == Tense::Past
    }
}

impl fmt::Display for RelativeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.amount == 0 {
            return f.write_str("now");
        }
        let plural = if self.amount == 1 { "" } else { "s" };
        let suffix = match self.tense {
            Tense::Past => "ago",
            Tense::Future => "from now",
        };
        write!(f, "{} {}{} {}", self.amount, self.unit.name(), plural, suffix)
    }
}

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Relative description of `at` as seen from `now`.
///
/// The sign of `at - now` picks the tense; the magnitude is bucketed into
/// seconds, minutes, hours, days, months (30 days) or years (365 days).
pub fn relative_lifetime(at: DateTime<Utc>, now: DateTime<Utc>) -> RelativeTime {
    let delta = at.signed_duration_since(now).num_seconds();
    let tense = if delta < 0 { Tense::Past } else { Tense::Future };
    let secs = delta.abs();

    let (amount, unit) = if secs < MINUTE {
        (secs, TimeUnit::Second)
    } else if secs < HOUR {
        (secs / MINUTE, TimeUnit::Minute)
    } else if secs < DAY {
        (secs / HOUR, TimeUnit::Hour)
    } else if secs < MONTH {
        (secs / DAY, TimeUnit::Day)
    } else if secs < YEAR {
        (secs / MONTH, TimeUnit::Month)
    } else {
        (secs / YEAR, TimeUnit::Year)
    };

    RelativeTime {
        tense,
        amount,
        unit,
    }
}
