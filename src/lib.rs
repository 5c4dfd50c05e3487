//! Coarse User Agent (UA) classification.
//!
//! This crate classifies a user-agent string into seven attributes:
//!
//! - the browser [name](BrowserName) and its version;
//! - the rendering [engine](Engine) and its version;
//! - the [operating system](OperatingSystem);
//! - the [platform](Platform);
//! - the [device](Device) class, derived from the platform.
//!
//! Use the free functions (e.g. [`browser_name`] or [`classify`]) for one-off
//! lookups, or a [`ParsedUserAgent`] to keep a user-agent string together with
//! its lazily resolved (and cached) attributes:
//!
//! ```
//! use ua_classify::{BrowserName, Device, ParsedUserAgent, Platform};
//!
//! let ua = ParsedUserAgent::new(
//!     "Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36",
//! );
//!
//! assert_eq!(ua.name(), &BrowserName::Chrome);
//! assert_eq!(ua.version(), Some("58.0.3029.110"));
//! assert_eq!(ua.operating_system().to_string(), "Windows 7");
//! assert_eq!(ua.platform(), &Platform::Windows);
//! assert_eq!(ua.device(), &Device::Desktop);
//! ```
//!
//! # Remarks
//!
//! Classification is a fixed, ordered cascade of case-insensitive rules per
//! attribute, where the first matching rule wins. Anything not recognised
//! resolves to `Unknown` (and an absent version), classification never fails.
//!
//! Only the user agents of the classic desktop, mobile and game console browsers
//! are recognised. Bots, crawlers and contemporary (client hint based)
//! detection are out of scope.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

pub mod error;

#[doc(hidden)]
pub mod macros;

pub(crate) mod str;

mod ua;
pub use ua::*;
