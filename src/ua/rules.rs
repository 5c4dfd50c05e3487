//! Ordered rule tables used to classify user-agent strings.
//!
//! Every table is evaluated top-down and the first matching rule wins.
//! The order is part of the behaviour: generic rules (e.g. `safari`, `gecko`)
//! are placed after the more specific rules they would otherwise shadow.

use super::{BrowserName, Engine, OperatingSystem, Platform};
use crate::str::{has_any_token, has_token};
use regex::{Captures, Regex};
use smol_str::SmolStr;
use std::{fmt, sync::LazyLock};
use tracing::trace;

/// How a [`Rule`] is matched against a user-agent string.
///
/// All matching is case-insensitive.
#[derive(Debug, Clone)]
pub(crate) enum Matcher {
    /// ASCII case-insensitive substring.
    Substr(&'static str),
    /// Any of the ASCII case-insensitive substrings.
    AnySubstr(&'static [&'static str]),
    /// Regular expression, compiled case-insensitive.
    Re(Regex),
}

impl Matcher {
    pub(crate) fn is_match(&self, ua: &str) -> bool {
        match self {
            Self::Substr(sub) => has_token(ua, sub),
            Self::AnySubstr(subs) => has_any_token(ua, subs),
            Self::Re(re) => re.is_match(ua),
        }
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Substr(sub) => f.write_str(sub),
            Self::AnySubstr(subs) => write!(f, "{}", subs.join("|")),
            Self::Re(re) => f.write_str(re.as_str()),
        }
    }
}

/// A single `(matcher, outcome)` pair of an ordered rule table.
#[derive(Debug, Clone)]
pub(crate) struct Rule<T> {
    pub(crate) matcher: Matcher,
    pub(crate) outcome: T,
}

impl<T> Rule<T> {
    const fn substr(sub: &'static str, outcome: T) -> Self {
        Self {
            matcher: Matcher::Substr(sub),
            outcome,
        }
    }

    const fn any_substr(subs: &'static [&'static str], outcome: T) -> Self {
        Self {
            matcher: Matcher::AnySubstr(subs),
            outcome,
        }
    }

    fn re(pattern: &str, outcome: T) -> Self {
        Self {
            matcher: Matcher::Re(case_insensitive_regex(pattern)),
            outcome,
        }
    }
}

/// Returns the outcome of the first rule in `rules` matching `ua`.
pub(crate) fn first_match<'a, T: fmt::Display>(rules: &'a [Rule<T>], ua: &str) -> Option<&'a T> {
    let rule = rules.iter().find(|rule| rule.matcher.is_match(ua))?;
    trace!(rule = %rule.matcher, outcome = %rule.outcome, "user-agent rule matched");
    Some(&rule.outcome)
}

#[expect(
    clippy::expect_used,
    reason = "rule patterns are static and each table is compiled in unit tests"
)]
fn case_insensitive_regex(pattern: &str) -> Regex {
    Regex::new(&format!("(?i){pattern}")).expect("valid static user-agent rule pattern")
}

/// Browser name rules.
pub(crate) static NAME_RULES: LazyLock<Vec<Rule<BrowserName>>> = LazyLock::new(|| {
    vec![
        Rule::substr("konqueror", BrowserName::Konqueror),
        Rule::substr("chromeframe", BrowserName::ChromeFrame),
        Rule::substr("chrome", BrowserName::Chrome),
        // iOS advertises `Mobile/<build> Safari/<build>`, android stock browsers `Mobile Safari/<build>`
        Rule::re(r"mobile(?:/\S+)? safari", BrowserName::MobileSafari),
        Rule::substr("safari", BrowserName::Safari),
        Rule::substr("iemobile", BrowserName::IeMobile),
        Rule::substr("msie", BrowserName::Ie),
        Rule::substr("opera", BrowserName::Opera),
        Rule::substr("playstation 3", BrowserName::Ps3),
        Rule::substr("playstation portable", BrowserName::Psp),
        Rule::substr("firefox", BrowserName::Firefox),
        Rule::any_substr(&["ipad", "iphone", "ipod"], BrowserName::MobileSafari),
        Rule::substr("blackberry", BrowserName::BlackBerry),
    ]
});

/// Rendering engine rules.
pub(crate) static ENGINE_RULES: [Rule<Engine>; 7] = [
    Rule::substr("webkit", Engine::Webkit),
    Rule::substr("khtml", Engine::Khtml),
    Rule::substr("konqueror", Engine::Konqueror),
    Rule::substr("chrome", Engine::Chrome),
    Rule::substr("presto", Engine::Presto),
    Rule::substr("gecko", Engine::Gecko),
    Rule::substr("msie", Engine::Msie),
];

/// Platform rules.
pub(crate) static PLATFORM_RULES: [Rule<Platform>; 14] = [
    Rule::substr("windows phone", Platform::WindowsPhone),
    Rule::substr("windows", Platform::Windows),
    Rule::substr("macintosh", Platform::Macintosh),
    Rule::substr("android", Platform::Android),
    Rule::substr("linux", Platform::Linux),
    Rule::substr("wii", Platform::Wii),
    Rule::substr("playstation", Platform::Playstation),
    Rule::substr("ipod", Platform::IPod),
    Rule::substr("ipad", Platform::IPad),
    Rule::substr("iphone", Platform::IPhone),
    Rule::substr("blackberry", Platform::BlackBerry),
    Rule::substr("playbook", Platform::PlayBook),
    Rule::substr("webos", Platform::WebOs),
    Rule::substr("cros", Platform::ChromeOs),
];

/// Builds an [`OperatingSystem`] from the captures of an operating system rule.
pub(crate) type OsLabel = fn(&Captures<'_>) -> OperatingSystem;

/// An operating system rule: a case-insensitive regex and the label built from its captures.
pub(crate) struct OsRule {
    pub(crate) re: Regex,
    pub(crate) label: OsLabel,
}

impl OsRule {
    fn new(pattern: &str, label: OsLabel) -> Self {
        Self {
            re: case_insensitive_regex(pattern),
            label,
        }
    }
}

/// Returns the [`OperatingSystem`] of the first rule in `rules` matching `ua`.
pub(crate) fn first_os_match(rules: &[OsRule], ua: &str) -> Option<OperatingSystem> {
    rules.iter().find_map(|rule| {
        let captures = rule.re.captures(ua)?;
        let os = (rule.label)(&captures);
        trace!(rule = rule.re.as_str(), outcome = %os, "user-agent os rule matched");
        Some(os)
    })
}

fn group<'a>(captures: &Captures<'a>, idx: usize) -> &'a str {
    captures.get(idx).map_or("", |m| m.as_str())
}

fn dotted(captures: &Captures<'_>, groups: &[usize]) -> SmolStr {
    let parts: Vec<&str> = groups.iter().map(|idx| group(captures, *idx)).collect();
    SmolStr::new(parts.join("."))
}

/// Operating system rules.
///
/// Digit and whitespace classes are ASCII-only.
pub(crate) static OS_RULES: LazyLock<Vec<OsRule>> = LazyLock::new(|| {
    vec![
        OsRule::new(r"windows nt 6\.0", |_| OperatingSystem::WindowsVista),
        OsRule::new(r"windows nt 6\.[0-9]+", |_| OperatingSystem::Windows7),
        OsRule::new(r"windows nt 5\.2", |_| OperatingSystem::Windows2003),
        OsRule::new(r"windows nt 5\.1", |_| OperatingSystem::WindowsXp),
        OsRule::new(r"windows nt 5\.0", |_| OperatingSystem::Windows2000),
        OsRule::new(r"windows phone os ([^;]+);", |c| {
            OperatingSystem::WindowsPhone(group(c, 1).into())
        }),
        OsRule::new(r"os x ([0-9]+)[._]([0-9]+)", |c| {
            OperatingSystem::OsX(Some(dotted(c, &[1, 2])))
        }),
        OsRule::new(r"android ([^;]+);", |c| {
            OperatingSystem::Android(group(c, 1).into())
        }),
        OsRule::new(r"linux", |_| OperatingSystem::Linux),
        OsRule::new(r"wii", |_| OperatingSystem::Wii),
        OsRule::new(r"playstation 3", |_| OperatingSystem::Playstation),
        OsRule::new(r"playstation portable", |_| OperatingSystem::Playstation),
        OsRule::new(r"ipad.*os ([0-9]+)[._]([0-9]+)[._]([0-9]+)", |c| {
            OperatingSystem::Ios(dotted(c, &[1, 2, 3]))
        }),
        OsRule::new(r"\(ipad.*os ([0-9]+)[._]([0-9]+)", |c| {
            OperatingSystem::Ios(dotted(c, &[1, 2]))
        }),
        OsRule::new(r"iphone.*os ([0-9]+)[._]([0-9]+)[._]([0-9]+)", |c| {
            OperatingSystem::Ios(dotted(c, &[1, 2, 3]))
        }),
        OsRule::new(r"iphone.*os ([0-9]+)[._]([0-9]+)", |c| {
            OperatingSystem::Ios(dotted(c, &[1, 2]))
        }),
        OsRule::new(r"webos/([^;]+);", |c| {
            OperatingSystem::WebOs(group(c, 1).into())
        }),
        OsRule::new(r"os x", |_| OperatingSystem::OsX(None)),
        OsRule::new(r"cros i[0-9]{3} ([^)]+)\)", |c| {
            OperatingSystem::ChromeOs(group(c, 1).into())
        }),
        OsRule::new(r"rim tablet os ([^;]+);", |c| {
            OperatingSystem::RimTabletOs(group(c, 1).into())
        }),
        OsRule::new(r"blackberry([0-9]+)/(\S+)(?-u:\s)", |c| {
            OperatingSystem::RimOs(Some(group(c, 2).into()))
        }),
        OsRule::new(r"blackberry ([^;]+);", |_| OperatingSystem::RimOs(None)),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_tables_compile() {
        assert_eq!(NAME_RULES.len(), 13);
        assert_eq!(OS_RULES.len(), 22);
    }

    fn position<T: PartialEq>(rules: &[Rule<T>], outcome: &T) -> usize {
        rules
            .iter()
            .position(|rule| &rule.outcome == outcome)
            .unwrap()
    }

    #[test]
    fn test_name_rule_order() {
        let rules = NAME_RULES.as_slice();
        assert!(position(rules, &BrowserName::ChromeFrame) < position(rules, &BrowserName::Chrome));
        assert!(position(rules, &BrowserName::MobileSafari) < position(rules, &BrowserName::Safari));
        assert!(position(rules, &BrowserName::IeMobile) < position(rules, &BrowserName::Ie));
        assert!(position(rules, &BrowserName::Konqueror) == 0);
    }

    #[test]
    fn test_engine_rule_order() {
        let outcomes: Vec<&str> = ENGINE_RULES.iter().map(|r| r.outcome.as_str()).collect();
        assert_eq!(
            outcomes,
            ["webkit", "khtml", "konqueror", "chrome", "presto", "gecko", "msie"]
        );
    }

    #[test]
    fn test_platform_rule_order() {
        assert!(
            position(&PLATFORM_RULES, &Platform::WindowsPhone)
                < position(&PLATFORM_RULES, &Platform::Windows)
        );
        assert!(
            position(&PLATFORM_RULES, &Platform::Android)
                < position(&PLATFORM_RULES, &Platform::Linux)
        );
    }

    #[test]
    fn test_first_match_is_first_in_order() {
        // both `chrome` and `safari` match, `chrome` comes first
        let ua = "AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0 Safari/537.36";
        assert_eq!(first_match(&NAME_RULES, ua), Some(&BrowserName::Chrome));
        // `webkit`, `khtml` and `gecko` all match, `webkit` comes first
        assert_eq!(first_match(&ENGINE_RULES, ua), Some(&Engine::Webkit));
        assert_eq!(first_match(&ENGINE_RULES, "curl/7.64.1"), None);
    }

    #[test]
    fn test_mobile_safari_rule() {
        for (ua, expected) in [
            ("Mobile/13F69 Safari/601.1", true),
            ("Mobile Safari/534.30", true),
            ("MOBILE SAFARI", true),
            ("Safari/601.1", false),
            ("Mobile/13F69", false),
        ] {
            assert_eq!(
                first_match(&NAME_RULES, ua) == Some(&BrowserName::MobileSafari),
                expected,
                "ua: {ua}"
            );
        }
    }

    #[test]
    fn test_first_os_match() {
        for (ua, expected) in [
            ("Windows NT 6.0", OperatingSystem::WindowsVista),
            ("Windows NT 6.3", OperatingSystem::Windows7),
            ("windows nt 5.1", OperatingSystem::WindowsXp),
            (
                "(Windows Phone OS 7.5; Trident/5.0; IEMobile/9.0)",
                OperatingSystem::WindowsPhone("7.5".into()),
            ),
            (
                "Intel Mac OS X 10_15_7)",
                OperatingSystem::OsX(Some("10.15".into())),
            ),
            (
                "(Linux; U; Android 4.4; en-us)",
                OperatingSystem::Android("4.4".into()),
            ),
            (
                "(iPad; CPU OS 7_0 like Mac OS X)",
                OperatingSystem::Ios("7.0".into()),
            ),
            (
                "(iPad; CPU OS 7_0_4 like Mac OS X)",
                OperatingSystem::Ios("7.0.4".into()),
            ),
            ("(PPC Mac OS X)", OperatingSystem::OsX(None)),
            (
                "(X11; CrOS i686 4319.74.0) AppleWebKit",
                OperatingSystem::ChromeOs("4319.74.0".into()),
            ),
            (
                "(PlayBook; U; RIM Tablet OS 2.1.0; en-US)",
                OperatingSystem::RimTabletOs("2.1.0".into()),
            ),
            (
                "BlackBerry9700/5.0.0.351 Profile/MIDP-2.1",
                OperatingSystem::RimOs(Some("5.0.0.351".into())),
            ),
            (
                "(BlackBerry; U; BlackBerry 9800; en) AppleWebKit",
                OperatingSystem::RimOs(None),
            ),
        ] {
            assert_eq!(first_os_match(&OS_RULES, ua), Some(expected), "ua: {ua}");
        }
        assert_eq!(first_os_match(&OS_RULES, "curl/7.64.1"), None);
    }

    #[test]
    fn test_os_rules_only_take_ascii_digits() {
        // arabic-indic digits do not form a version, the bare `os x` rule applies
        assert_eq!(
            first_os_match(&OS_RULES, "(Macintosh; Intel Mac OS X \u{661}\u{660}_\u{661}\u{665})"),
            Some(OperatingSystem::OsX(None))
        );
        assert_eq!(first_os_match(&OS_RULES, "(Windows NT 6.\u{661})"), None);
    }
}
