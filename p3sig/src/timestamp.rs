use crate::{
  error::{P3SigError, P3SigResult},
  trace::*,
  FRESHNESS_WINDOW_MINUTES,
};
use chrono::{DateTime, Duration, NaiveDateTime, SecondsFormat, Utc};

/// Formats accepted for the `Date` header after the day name: IMF-fixdate, RFC 850 and asctime
const HTTP_DATE_FORMATS: &[&str] = &["%d %b %Y %H:%M:%S GMT", "%d-%b-%y %H:%M:%S GMT", "%b %e %H:%M:%S %Y"];

const DAY_NAMES: &[&str] = &[
  "Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
  "Sunday",
];

/// Resolve the request timestamp, preferring `x-p3-unixtime` over `Date`.
/// Empty header values count as absent.
pub fn resolve_timestamp(unixtime: Option<&str>, date: Option<&str>) -> P3SigResult<DateTime<Utc>> {
  if let Some(unixtime) = unixtime.filter(|v| !v.is_empty()) {
    return parse_unix_time(unixtime);
  }
  if let Some(date) = date.filter(|v| !v.is_empty()) {
    return parse_http_date(date);
  }
  Err(P3SigError::RequestDateMissing)
}

/// Parse decimal seconds since epoch
pub fn parse_unix_time(value: &str) -> P3SigResult<DateTime<Utc>> {
  let secs = value.parse::<i64>()?;
  DateTime::<Utc>::from_timestamp(secs, 0).ok_or(P3SigError::UnixTimeOutOfRange(secs))
}

/// Parse an http date in any of the three formats http/1.1 recipients must accept.
/// The leading day name must be a valid one but is not matched against the date.
pub fn parse_http_date(value: &str) -> P3SigResult<DateTime<Utc>> {
  let err = || P3SigError::ParseDate(value.to_string());
  let (day_name, rest) = value.split_once(|c: char| c == ',' || c == ' ').ok_or_else(err)?;
  if !DAY_NAMES.iter().any(|name| name.eq_ignore_ascii_case(day_name)) {
    return Err(err());
  }
  let rest = rest.trim_start();
  HTTP_DATE_FORMATS
    .iter()
    .find_map(|fmt| NaiveDateTime::parse_from_str(rest, fmt).ok())
    .map(|naive| naive.and_utc())
    .ok_or_else(err)
}

/// Reject timestamps older than the freshness window. Future timestamps pass.
pub fn check_freshness(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> P3SigResult<()> {
  let oldest = *now - Duration::minutes(FRESHNESS_WINDOW_MINUTES);
  if *timestamp < oldest {
    debug!("Request timestamp {} is before {}", timestamp, oldest);
    return Err(P3SigError::RequestTooOld(format!(
      "{} is older than {} minutes",
      format_timestamp(timestamp),
      FRESHNESS_WINDOW_MINUTES
    )));
  }
  Ok(())
}

/// RFC 3339 in UTC with whole seconds, e.g. `2023-11-14T22:13:20Z`
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
  timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}
