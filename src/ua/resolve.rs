use super::{
    BrowserName, Classification, Device, Engine, OperatingSystem, Platform,
    rules::{ENGINE_RULES, NAME_RULES, OS_RULES, PLATFORM_RULES, first_match, first_os_match},
};
use crate::str::{Paren, trailing_version, version_after};
use smol_str::SmolStr;

const SEP_SLASH: &[u8] = b"/";
const SEP_SLASH_OR_SPACE: &[u8] = b"/ ";

/// Resolve the [`BrowserName`] of a user-agent string.
#[must_use]
pub fn browser_name(ua: &str) -> BrowserName {
    resolve_name(ua)
}

/// Resolve the browser version of a user-agent string.
///
/// The [`BrowserName`] is resolved first, as it decides where the version is found.
#[must_use]
pub fn browser_version(ua: &str) -> Option<&str> {
    version_for(ua, &resolve_name(ua))
}

/// Resolve the rendering [`Engine`] of a user-agent string.
#[must_use]
pub fn engine(ua: &str) -> Engine {
    resolve_engine(ua)
}

/// Resolve the rendering engine version of a user-agent string.
///
/// The [`Engine`] is resolved first, the version is the token following it.
#[must_use]
pub fn engine_version(ua: &str) -> Option<&str> {
    engine_version_for(ua, &resolve_engine(ua))
}

/// Resolve the [`OperatingSystem`] of a user-agent string.
#[must_use]
pub fn operating_system(ua: &str) -> OperatingSystem {
    resolve_os(ua)
}

/// Resolve the [`Platform`] of a user-agent string.
#[must_use]
pub fn platform(ua: &str) -> Platform {
    resolve_platform(ua)
}

/// Resolve the [`Device`] class of a user-agent string.
///
/// The device is derived from the resolved [`Platform`] only.
#[must_use]
pub fn device(ua: &str) -> Device {
    platform(ua).device()
}

/// Resolve all attributes of a user-agent string in one pass.
#[must_use]
pub fn classify(ua: &str) -> Classification {
    let name = resolve_name(ua);
    let version = version_for(ua, &name).map(SmolStr::new);
    let engine = resolve_engine(ua);
    let engine_version = engine_version_for(ua, &engine).map(SmolStr::new);
    let platform = resolve_platform(ua);

    Classification {
        device: platform.device(),
        name,
        version,
        engine,
        engine_version,
        operating_system: resolve_os(ua),
        platform,
    }
}

fn resolve_name(ua: &str) -> BrowserName {
    first_match(&NAME_RULES, ua)
        .cloned()
        .unwrap_or(BrowserName::Unknown)
}

fn resolve_engine(ua: &str) -> Engine {
    first_match(&ENGINE_RULES, ua)
        .cloned()
        .unwrap_or(Engine::Unknown)
}

fn resolve_os(ua: &str) -> OperatingSystem {
    first_os_match(&OS_RULES, ua).unwrap_or(OperatingSystem::Unknown)
}

fn resolve_platform(ua: &str) -> Platform {
    first_match(&PLATFORM_RULES, ua)
        .cloned()
        .unwrap_or(Platform::Unknown)
}

fn version_for<'a>(ua: &'a str, name: &BrowserName) -> Option<&'a str> {
    match name {
        BrowserName::Ps3 => trailing_version(ua, Paren::Required),
        BrowserName::Psp => trailing_version(ua, Paren::Optional),
        BrowserName::ChromeFrame
        | BrowserName::Chrome
        | BrowserName::MobileSafari
        | BrowserName::Safari
        | BrowserName::IeMobile => version_after(ua, name.version_token()?, SEP_SLASH),
        _ => version_after(ua, name.version_token()?, SEP_SLASH_OR_SPACE),
    }
}

fn engine_version_for<'a>(ua: &'a str, engine: &Engine) -> Option<&'a str> {
    version_after(ua, engine.version_token()?, SEP_SLASH_OR_SPACE)
}
