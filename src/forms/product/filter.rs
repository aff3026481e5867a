use chrono::{DateTime, Duration, Utc};
use serde::de::{value::StringDeserializer, IntoDeserializer};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeFilter {
    Day,
    Week,
    Month,
    #[default]
    All,
}

impl TimeFilter {
    fn days(self) -> Option<i64> {
        match self {
            TimeFilter::Day => Some(1),
            TimeFilter::Week => Some(7),
            TimeFilter::Month => Some(30),
            TimeFilter::All => None,
        }
    }

    /// Earliest launch date inside the window, at the start of that UTC day.
    pub fn cutoff(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let days = self.days()?;
        (now - Duration::days(days))
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .map(|start| start.and_utc())
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductListQuery {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub time_filter: Option<TimeFilter>,
    pub tag_filter: Option<String>,
}

/// `?timeFilter=` behaves like an absent parameter.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<TimeFilter>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => {
            let value: StringDeserializer<D::Error> = raw.trim().to_string().into_deserializer();
            TimeFilter::deserialize(value).map(Some)
        }
        _ => Ok(None),
    }
}

impl ProductListQuery {
    pub fn time_filter(&self) -> TimeFilter {
        self.time_filter.unwrap_or_default()
    }

    /// `None` for a missing, blank or `all` tag.
    pub fn tag(&self) -> Option<&str> {
        self.tag_filter
            .as_deref()
            .map(str::trim)
            .filter(|tag| !tag.is_empty() && !tag.eq_ignore_ascii_case("all"))
    }
}
