use crate::macros::tag_enum;
use serde::{Serialize, Serializer};
use smol_str::SmolStr;
use std::fmt;

tag_enum! {
    /// Browser (or client) name of a user agent.
    pub enum BrowserName {
        /// KDE Konqueror
        Konqueror => "Konqueror",
        /// Google Chrome Frame plugin for Internet Explorer
        ChromeFrame => "ChromeFrame",
        /// Google Chrome and other browsers advertising `Chrome`
        Chrome => "Chrome",
        /// Safari on mobile devices (iOS, stock Android browsers)
        MobileSafari => "Mobile Safari" | "MobileSafari",
        /// Desktop Safari
        Safari => "Safari",
        /// Internet Explorer Mobile
        IeMobile => "IE Mobile" | "IEMobile",
        /// Internet Explorer
        Ie => "IE" | "MSIE",
        /// Opera (Presto era)
        Opera => "Opera",
        /// Playstation 3 browser
        Ps3 => "PS3",
        /// Playstation Portable browser
        Psp => "PSP",
        /// Mozilla Firefox
        Firefox => "Firefox",
        /// BlackBerry browser
        BlackBerry => "BlackBerry",
        /// No browser rule matched.
        Unknown => "Unknown",
    }
}

impl BrowserName {
    /// The token that precedes the browser version in a user-agent string,
    /// for browsers whose version is found as `<token>/<version>` or
    /// `<token> <version>`.
    ///
    /// Returns `None` for [`BrowserName::Unknown`] and for the Playstation
    /// browsers, which advertise their version as the trailing token instead.
    #[must_use]
    pub fn version_token(&self) -> Option<&str> {
        match self {
            Self::Konqueror => Some("konqueror"),
            Self::ChromeFrame => Some("chromeframe"),
            Self::Chrome => Some("chrome"),
            Self::MobileSafari | Self::Safari => Some("version"),
            Self::IeMobile => Some("iemobile"),
            Self::Ie => Some("msie"),
            Self::Opera => Some("opera"),
            Self::Firefox => Some("firefox"),
            Self::BlackBerry => Some("blackberry"),
            Self::Ps3 | Self::Psp | Self::Unknown => None,
            Self::Other(name) => Some(name.as_str()),
        }
    }
}

tag_enum! {
    /// Rendering engine of a user agent.
    pub enum Engine {
        /// WebKit (Safari, Chrome up to Blink, most mobile browsers)
        Webkit => "webkit",
        /// KDE KHTML
        Khtml => "khtml",
        /// Konqueror without an explicit KHTML token
        Konqueror => "konqueror",
        /// Chrome without an explicit WebKit token
        Chrome => "chrome",
        /// Opera Presto
        Presto => "presto",
        /// Mozilla Gecko
        Gecko => "gecko",
        /// Internet Explorer Trident
        Msie => "msie",
        /// No engine rule matched.
        Unknown => "Unknown",
    }
}

impl Engine {
    /// The token that precedes the engine version in a user-agent string.
    ///
    /// Returns `None` for [`Engine::Unknown`].
    #[must_use]
    pub fn version_token(&self) -> Option<&str> {
        match self {
            Self::Unknown => None,
            other => Some(other.as_str()),
        }
    }
}

tag_enum! {
    /// Platform family on which a user agent runs.
    pub enum Platform {
        /// Windows Phone ([`Mobile`](Device::Mobile))
        WindowsPhone => "Windows Phone" | "WindowsPhone",
        /// Windows ([`Desktop`](Device::Desktop))
        Windows => "Windows",
        /// Apple Macintosh ([`Desktop`](Device::Desktop))
        Macintosh => "Macintosh",
        /// Android ([`Mobile`](Device::Mobile))
        Android => "Android",
        /// Linux ([`Desktop`](Device::Desktop))
        Linux => "Linux",
        /// Nintendo Wii ([`Game Console`](Device::GameConsole))
        Wii => "Wii",
        /// Sony Playstation 3 and Portable ([`Game Console`](Device::GameConsole))
        Playstation => "Playstation",
        /// iPod ([`Mobile`](Device::Mobile))
        IPod => "iPod",
        /// iPad ([`Mobile`](Device::Mobile))
        IPad => "iPad",
        /// iPhone ([`Mobile`](Device::Mobile))
        IPhone => "iPhone",
        /// BlackBerry phones ([`Mobile`](Device::Mobile))
        BlackBerry => "BlackBerry",
        /// BlackBerry PlayBook tablet ([`Mobile`](Device::Mobile))
        PlayBook => "PlayBook",
        /// Palm / HP webOS ([`Mobile`](Device::Mobile))
        WebOs => "webOS",
        /// Chrome OS ([`Desktop`](Device::Desktop))
        ChromeOs => "ChromeOS",
        /// No platform rule matched.
        Unknown => "Unknown",
    }
}

impl Platform {
    /// Returns the [`Device`] class of this platform.
    ///
    /// This is a fixed lookup: it never looks at a user-agent string.
    #[must_use]
    pub fn device(&self) -> Device {
        match self {
            Self::Windows | Self::Macintosh | Self::Linux | Self::ChromeOs => Device::Desktop,
            Self::IPod
            | Self::IPad
            | Self::IPhone
            | Self::BlackBerry
            | Self::PlayBook
            | Self::Android
            | Self::WebOs
            | Self::WindowsPhone => Device::Mobile,
            Self::Wii | Self::Playstation => Device::GameConsole,
            Self::Unknown | Self::Other(_) => Device::Unknown,
        }
    }
}

tag_enum! {
    /// Device class of a user agent, derived from its [`Platform`].
    pub enum Device {
        /// Personal Computers
        Desktop => "Desktop",
        /// Phones, Tablets and other mobile devices
        Mobile => "Mobile",
        /// Home and handheld game consoles
        GameConsole => "Game Console" | "GameConsole",
        /// The platform is not known.
        Unknown => "Unknown",
    }
}

/// Operating system of a user agent.
///
/// Versions are kept as the exact text captured from the user-agent string,
/// the [`Display`](fmt::Display) implementation renders the label
/// (e.g. `iOS 9.3.2` or `Windows 7`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OperatingSystem {
    /// Windows NT 6.0
    WindowsVista,
    /// Windows NT 6.x (x > 0)
    Windows7,
    /// Windows NT 5.2
    Windows2003,
    /// Windows NT 5.1
    WindowsXp,
    /// Windows NT 5.0
    Windows2000,
    /// Windows Phone OS with its version
    WindowsPhone(SmolStr),
    /// Mac OS X, with its `major.minor` version if advertised
    OsX(Option<SmolStr>),
    /// Android with its version
    Android(SmolStr),
    Linux,
    Wii,
    /// Playstation 3 or Playstation Portable
    Playstation,
    /// iOS with its `major.minor[.patch]` version
    Ios(SmolStr),
    /// webOS with its version
    WebOs(SmolStr),
    /// Chrome OS with its build
    ChromeOs(SmolStr),
    /// BlackBerry Tablet OS with its version
    RimTabletOs(SmolStr),
    /// BlackBerry OS, with its version if advertised
    RimOs(Option<SmolStr>),
    /// No operating system rule matched.
    Unknown,
}

impl OperatingSystem {
    /// Returns the operating system family label, without version.
    #[must_use]
    pub fn family(&self) -> &'static str {
        match self {
            Self::WindowsVista
            | Self::Windows7
            | Self::Windows2003
            | Self::WindowsXp
            | Self::Windows2000 => "Windows",
            Self::WindowsPhone(_) => "Windows Phone OS",
            Self::OsX(_) => "OS X",
            Self::Android(_) => "Android",
            Self::Linux => "Linux",
            Self::Wii => "Wii",
            Self::Playstation => "Playstation",
            Self::Ios(_) => "iOS",
            Self::WebOs(_) => "webOS",
            Self::ChromeOs(_) => "ChromeOS",
            Self::RimTabletOs(_) => "RIM Tablet OS",
            Self::RimOs(_) => "RIM OS",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns the version (or release name) of the operating system, if known.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        match self {
            Self::WindowsVista => Some("Vista"),
            Self::Windows7 => Some("7"),
            Self::Windows2003 => Some("2003"),
            Self::WindowsXp => Some("XP"),
            Self::Windows2000 => Some("2000"),
            Self::WindowsPhone(v)
            | Self::Android(v)
            | Self::Ios(v)
            | Self::WebOs(v)
            | Self::ChromeOs(v)
            | Self::RimTabletOs(v) => Some(v.as_str()),
            Self::OsX(v) | Self::RimOs(v) => v.as_deref(),
            Self::Linux | Self::Wii | Self::Playstation | Self::Unknown => None,
        }
    }

    /// Returns `true` if no operating system rule matched.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.version() {
            Some(version) => write!(f, "{} {version}", self.family()),
            None => f.write_str(self.family()),
        }
    }
}

impl Serialize for OperatingSystem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// All attributes of a user agent, resolved in one pass.
///
/// Created by [`classify`](crate::classify) or
/// [`ParsedUserAgent::classification`](crate::ParsedUserAgent::classification).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Browser name
    pub name: BrowserName,
    /// Browser version, if found
    pub version: Option<SmolStr>,
    /// Rendering engine
    pub engine: Engine,
    /// Rendering engine version, if found
    pub engine_version: Option<SmolStr>,
    /// Operating system
    pub operating_system: OperatingSystem,
    /// Platform family
    pub platform: Platform,
    /// Device class, derived from [`Classification::platform`]
    pub device: Device,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_device() {
        for (platform, device) in [
            (Platform::Windows, Device::Desktop),
            (Platform::Macintosh, Device::Desktop),
            (Platform::Linux, Device::Desktop),
            (Platform::ChromeOs, Device::Desktop),
            (Platform::IPod, Device::Mobile),
            (Platform::IPad, Device::Mobile),
            (Platform::IPhone, Device::Mobile),
            (Platform::BlackBerry, Device::Mobile),
            (Platform::PlayBook, Device::Mobile),
            (Platform::Android, Device::Mobile),
            (Platform::WebOs, Device::Mobile),
            (Platform::WindowsPhone, Device::Mobile),
            (Platform::Wii, Device::GameConsole),
            (Platform::Playstation, Device::GameConsole),
            (Platform::Unknown, Device::Unknown),
            (Platform::Other("Symbian".to_owned()), Device::Unknown),
        ] {
            assert_eq!(platform.device(), device, "platform: {platform}");
        }
    }

    #[test]
    fn test_tag_labels() {
        assert_eq!(BrowserName::MobileSafari.to_string(), "Mobile Safari");
        assert_eq!(BrowserName::IeMobile.to_string(), "IE Mobile");
        assert_eq!(BrowserName::BlackBerry.to_string(), "BlackBerry");
        assert_eq!(Engine::Webkit.to_string(), "webkit");
        assert_eq!(Platform::WindowsPhone.to_string(), "Windows Phone");
        assert_eq!(Platform::IPhone.to_string(), "iPhone");
        assert_eq!(Device::GameConsole.to_string(), "Game Console");
    }

    #[test]
    fn test_tag_parse() {
        assert_eq!("chrome".parse::<BrowserName>().unwrap(), BrowserName::Chrome);
        assert_eq!("MSIE".parse::<BrowserName>().unwrap(), BrowserName::Ie);
        assert_eq!(
            "mobilesafari".parse::<BrowserName>().unwrap(),
            BrowserName::MobileSafari
        );
        assert_eq!(
            "Lynx".parse::<BrowserName>().unwrap(),
            BrowserName::Other("Lynx".to_owned())
        );
        assert_eq!(Engine::strict_parse("GECKO"), Some(Engine::Gecko));
        assert_eq!(Engine::strict_parse("blink"), None);
        assert_eq!(Platform::strict_parse("windowsphone"), Some(Platform::WindowsPhone));
        assert_eq!(Device::strict_parse("game console"), Some(Device::GameConsole));
    }

    #[test]
    fn test_tag_deserialize() {
        assert_eq!(
            serde_json::from_str::<Platform>(r#""ipad""#).unwrap(),
            Platform::IPad
        );
        assert_eq!(
            serde_json::from_str::<Device>(r#""Mobile""#).unwrap(),
            Device::Mobile
        );
        assert!(serde_json::from_str::<Device>("1").is_err());
    }

    #[test]
    fn test_version_tokens() {
        assert_eq!(BrowserName::Ie.version_token(), Some("msie"));
        assert_eq!(BrowserName::Safari.version_token(), Some("version"));
        assert_eq!(BrowserName::Unknown.version_token(), None);
        assert_eq!(
            BrowserName::Other("Lynx".to_owned()).version_token(),
            Some("Lynx")
        );
        assert_eq!(Engine::Presto.version_token(), Some("presto"));
        assert_eq!(Engine::Unknown.version_token(), None);
    }

    #[test]
    fn test_operating_system_labels() {
        for (os, label) in [
            (OperatingSystem::WindowsVista, "Windows Vista"),
            (OperatingSystem::Windows7, "Windows 7"),
            (OperatingSystem::Windows2003, "Windows 2003"),
            (OperatingSystem::WindowsXp, "Windows XP"),
            (OperatingSystem::Windows2000, "Windows 2000"),
            (
                OperatingSystem::WindowsPhone("7.5".into()),
                "Windows Phone OS 7.5",
            ),
            (OperatingSystem::OsX(Some("10.15".into())), "OS X 10.15"),
            (OperatingSystem::OsX(None), "OS X"),
            (OperatingSystem::Android("4.4".into()), "Android 4.4"),
            (OperatingSystem::Linux, "Linux"),
            (OperatingSystem::Wii, "Wii"),
            (OperatingSystem::Playstation, "Playstation"),
            (OperatingSystem::Ios("9.3.2".into()), "iOS 9.3.2"),
            (OperatingSystem::WebOs("2.1.0".into()), "webOS 2.1.0"),
            (OperatingSystem::ChromeOs("4731.101.0".into()), "ChromeOS 4731.101.0"),
            (OperatingSystem::RimTabletOs("2.1.0".into()), "RIM Tablet OS 2.1.0"),
            (OperatingSystem::RimOs(Some("5.0.0.351".into())), "RIM OS 5.0.0.351"),
            (OperatingSystem::RimOs(None), "RIM OS"),
            (OperatingSystem::Unknown, "Unknown"),
        ] {
            assert_eq!(os.to_string(), label);
            assert_eq!(serde_json::to_string(&os).unwrap(), format!("{label:?}"));
        }
    }
}
