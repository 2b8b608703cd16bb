//! Bus timetable URL generation.

use chrono::{NaiveTime, Timelike};

use crate::domain::{RevisionStatus, StopId};

/// Default bus timetable provider.
pub const DEFAULT_BUS_HOST: &str = "qbus.jp";

/// Fixed `pwd` parameter the provider's timetable script requires.
const BUS_PWD: &str = "h%2Fjun.pwd";

/// Day-of-week selector. `0` lets the provider pick today's timetable.
const BUS_YOBI: u8 = 0;

/// Generate a bus timetable URL on the default provider.
///
/// Hour and minute are not zero-padded.
///
/// # Example
///
/// ```ignore
/// // Miyazaki station to Depato-mae at 08:07, before the revision:
/// let url = bus_link(&stop("000LM0001"), &stop("000LM3002"), RevisionStatus::Before, time(8, 7));
/// // Ends with: "&kai=O&yobi=0&ji=8&fun=7"
/// ```
pub fn bus_link(from: &StopId, to: &StopId, revision: RevisionStatus, time: NaiveTime) -> String {
    bus_link_at(DEFAULT_BUS_HOST, from, to, revision, time)
}

/// Generate a bus timetable URL on a specific provider host.
pub fn bus_link_at(
    host: &str,
    from: &StopId,
    to: &StopId,
    revision: RevisionStatus,
    time: NaiveTime,
) -> String {
    format!(
        "https://{}/cgi-bin/time/jun.exe?pwd={}&from={}&to={}&kai={}&yobi={}&ji={}&fun={}",
        host,
        BUS_PWD,
        from.as_str(),
        to.as_str(),
        revision.code(),
        BUS_YOBI,
        time.hour(),
        time.minute(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(s: &str) -> StopId {
        StopId::parse(s).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn full_url() {
        let url = bus_link(
            &stop("000LM0001"),
            &stop("000LM3002"),
            RevisionStatus::Before,
            time(8, 7),
        );
        assert_eq!(
            url,
            "https://qbus.jp/cgi-bin/time/jun.exe?pwd=h%2Fjun.pwd&from=000LM0001&to=000LM3002&kai=O&yobi=0&ji=8&fun=7"
        );
    }

    #[test]
    fn hour_and_minute_unpadded() {
        let url = bus_link(&stop("A"), &stop("B"), RevisionStatus::After, time(0, 0));
        assert!(url.ends_with("&kai=N&yobi=0&ji=0&fun=0"));

        let url = bus_link(&stop("A"), &stop("B"), RevisionStatus::After, time(23, 59));
        assert!(url.ends_with("&ji=23&fun=59"));
    }

    #[test]
    fn seconds_ignored() {
        let t = NaiveTime::from_hms_opt(17, 30, 45).unwrap();
        let url = bus_link(&stop("A"), &stop("B"), RevisionStatus::Before, t);
        assert!(url.ends_with("&ji=17&fun=30"));
    }

    #[test]
    fn custom_host() {
        let url = bus_link_at(
            "bus.example",
            &stop("A"),
            &stop("B"),
            RevisionStatus::Before,
            time(9, 5),
        );
        assert!(url.starts_with("https://bus.example/cgi-bin/time/jun.exe?"));
    }
}
