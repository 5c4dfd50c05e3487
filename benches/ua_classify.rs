use divan::AllocProfiler;
use ua_classify::{BrowserName, Classification, ParsedUserAgent, classify};

#[global_allocator]
static ALLOC: AllocProfiler = AllocProfiler::system();

fn main() {
    // Run registered benchmarks.
    divan::main();
}

const UAS: &[&str] = &[
    "curl/7.64.1",
    "Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 9_3_2 like Mac OS X) AppleWebKit/601.1.46 (KHTML, like Gecko) Version/9.0 Mobile/13F69 Safari/601.1",
    "Mozilla/5.0 (Windows NT 6.1; WOW64; rv:12.0) Gecko/20100101 Firefox/12.0",
    "BlackBerry9700/5.0.0.351 Profile/MIDP-2.1 Configuration/CLDC-1.1 VendorID/123",
];

#[divan::bench(args = UAS)]
fn classify_ua(ua: &str) -> Classification {
    classify(ua)
}

#[divan::bench(args = UAS)]
fn ua_record_name(ua: &str) -> BrowserName {
    ParsedUserAgent::new(ua).name().clone()
}
