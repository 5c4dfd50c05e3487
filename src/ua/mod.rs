mod info;
pub use info::{BrowserName, Classification, Device, Engine, OperatingSystem, Platform};

mod rules;

mod resolve;
pub use resolve::{
    browser_name, browser_version, classify, device, engine, engine_version, operating_system,
    platform,
};

mod record;
pub use record::ParsedUserAgent;

mod registry;
pub use registry::{AgentMapping, AgentRegistry};

mod classifier;
pub use classifier::UserAgentClassifier;
